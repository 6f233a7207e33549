//! Static table mapping task keyword phrases to canonical task tags.
//!
//! The table is compiled once into whole-word, case-insensitive matchers
//! ordered longest phrase first, so "text to speech" is tried before any
//! shorter phrase it might contain.

use once_cell::sync::Lazy;
use regex::Regex;

/// Keyword phrase (lowercase) → canonical task tag.
///
/// Declaration order breaks ties between phrases of equal length.
pub const TASK_KEYWORDS: &[(&str, &str)] = &[
    ("text generation", "text-generation"),
    ("summarization", "summarization"),
    ("translation", "translation"),
    ("question answering", "question-answering"),
    ("fill mask", "fill-mask"),
    ("fill-mask", "fill-mask"),
    ("text classification", "text-classification"),
    ("token classification", "token-classification"),
    ("image classification", "image-classification"),
    ("object detection", "object-detection"),
    ("image segmentation", "image-segmentation"),
    ("text to image", "text-to-image"),
    ("text-to-image", "text-to-image"),
    ("image to text", "image-to-text"),
    ("image-to-text", "image-to-text"),
    ("text to speech", "text-to-speech"),
    ("text-to-speech", "text-to-speech"),
    ("audio to audio", "audio-to-audio"),
    ("automatic speech recognition", "automatic-speech-recognition"),
    ("asr", "automatic-speech-recognition"),
    ("voice activity detection", "voice-activity-detection"),
    ("reinforcement learning", "reinforcement-learning"),
    ("robotics", "robotics"),
    ("tabular classification", "tabular-classification"),
    ("tabular regression", "tabular-regression"),
    ("table question answering", "table-question-answering"),
    ("visual question answering", "visual-question-answering"),
    ("vqa", "visual-question-answering"),
    ("document question answering", "document-question-answering"),
    ("zero shot classification", "zero-shot-classification"),
    ("zero-shot-classification", "zero-shot-classification"),
    ("zero shot image classification", "zero-shot-image-classification"),
    ("conversational", "conversational"),
    ("feature extraction", "feature-extraction"),
];

/// A compiled keyword phrase.
#[derive(Debug)]
pub struct KeywordMatcher {
    /// Lowercase keyword phrase.
    pub phrase: &'static str,
    /// Canonical task tag the phrase maps to.
    pub task_tag: &'static str,
    pattern: Regex,
}

impl KeywordMatcher {
    fn new(phrase: &'static str, task_tag: &'static str) -> Self {
        let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(phrase)))
            .expect("escaped keyword is a valid pattern");
        Self {
            phrase,
            task_tag,
            pattern,
        }
    }

    /// Returns true if the phrase occurs in `text` as whole words, ignoring case.
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// Remove every whole-word occurrence of the phrase from `text`.
    pub fn strip(&self, text: &str) -> String {
        self.pattern.replace_all(text, "").into_owned()
    }
}

static MATCHERS: Lazy<Vec<KeywordMatcher>> = Lazy::new(|| {
    let mut matchers: Vec<KeywordMatcher> = TASK_KEYWORDS
        .iter()
        .map(|(phrase, tag)| KeywordMatcher::new(phrase, tag))
        .collect();
    // Stable sort keeps declaration order among equal lengths.
    matchers.sort_by(|a, b| b.phrase.chars().count().cmp(&a.phrase.chars().count()));
    matchers
});

/// All keyword matchers, longest phrase first.
pub fn matchers() -> &'static [KeywordMatcher] {
    &MATCHERS
}

/// Look up the task tag for an exact keyword phrase.
pub fn task_tag_for(phrase: &str) -> Option<&'static str> {
    let phrase = phrase.to_lowercase();
    TASK_KEYWORDS
        .iter()
        .find(|(p, _)| *p == phrase)
        .map(|(_, tag)| *tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matchers_sorted_longest_first() {
        let lengths: Vec<usize> = matchers().iter().map(|m| m.phrase.len()).collect();
        assert!(lengths.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(matchers().len(), TASK_KEYWORDS.len());
    }

    #[test]
    fn test_equal_length_keeps_declaration_order() {
        let phrases: Vec<&str> = matchers().iter().map(|m| m.phrase).collect();
        let pos = |p: &str| phrases.iter().position(|x| *x == p).unwrap();
        // Both 13 characters long; "text to image" is declared first.
        assert!(pos("text to image") < pos("text-to-image"));
    }

    #[test]
    fn test_phrases_are_lowercase() {
        for (phrase, _) in TASK_KEYWORDS {
            assert_eq!(*phrase, phrase.to_lowercase());
        }
    }

    #[test]
    fn test_whole_word_only() {
        let asr = matchers().iter().find(|m| m.phrase == "asr").unwrap();
        assert!(asr.is_match("whisper ASR model"));
        assert!(!asr.is_match("lasr encoder"));
        assert!(!asr.is_match("asrmodel"));
    }

    #[test]
    fn test_strip_removes_all_occurrences_case_insensitive() {
        let m = matchers().iter().find(|m| m.phrase == "vqa").unwrap();
        assert_eq!(m.strip("VQA blip vqa"), " blip ");
    }

    #[test]
    fn test_task_tag_for() {
        assert_eq!(task_tag_for("ASR"), Some("automatic-speech-recognition"));
        assert_eq!(task_tag_for("fill-mask"), Some("fill-mask"));
        assert_eq!(task_tag_for("chatbot"), None);
    }
}
