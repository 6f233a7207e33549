//! Binary model artifact detection.
//!
//! Search results and model detail both decide whether a repository ships a
//! quantized binary artifact by looking at file name suffixes. Detail pages
//! additionally label each artifact with the quantization scheme encoded in
//! its file name.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::defaults::BINARY_EXTENSION;
use crate::models::RemoteFile;

/// Quantization labels as they appear in artifact file names:
/// `Q4_K_M`, `Q8_0`, `IQ2_XXS`, `F16`, `BF16`, `FP16`, `F32`.
static QUANTIZATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:^|[-_.])(I?Q[0-9]+(?:_[A-Z0-9]+)*|BF16|FP16|F16|F32)(?:[-.]|$)")
        .expect("quantization pattern is valid")
});

/// Returns true if `name` ends with the binary artifact extension, ignoring case.
pub fn is_binary_artifact(name: &str) -> bool {
    name.to_lowercase().ends_with(BINARY_EXTENSION)
}

/// Returns true if any file in the list is a binary artifact.
pub fn has_binary_artifact(files: &[RemoteFile]) -> bool {
    files.iter().any(|f| is_binary_artifact(&f.name))
}

/// Parse the quantization label from an artifact file name.
///
/// The extension and any directory prefix are ignored. When several labels
/// appear, the last one wins since it is the one closest to the extension.
pub fn parse_quantization(name: &str) -> Option<String> {
    let file_name = name.rsplit('/').next().unwrap_or(name);
    let stem = if is_binary_artifact(file_name) {
        &file_name[..file_name.len() - BINARY_EXTENSION.len()]
    } else {
        file_name
    };

    QUANTIZATION_RE
        .captures_iter(stem)
        .last()
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_uppercase())
}
