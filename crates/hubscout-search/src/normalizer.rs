//! Query normalization: derive an implicit task filter from free text.
//!
//! Users often type the task into the search box ("llama text generation").
//! The hub filters by task far better than it full-text matches task names,
//! so when no explicit task filter is given the first (longest) known task
//! phrase is lifted out of the query and turned into a task tag.

use tracing::debug;

use crate::task_keywords::matchers;

/// Result of normalizing a raw query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery {
    /// Residual free-text query, `None` if nothing is left.
    pub query: Option<String>,
    /// Explicit or derived task tag.
    pub task_tag: Option<String>,
    /// Keyword phrase the task tag was derived from, if any.
    pub matched_keyword: Option<&'static str>,
}

impl NormalizedQuery {
    fn unchanged(raw_query: Option<&str>, task_tag: Option<&str>) -> Self {
        Self {
            query: raw_query.map(str::to_string),
            task_tag: task_tag.map(str::to_string),
            matched_keyword: None,
        }
    }

    /// Returns true if the task tag was derived from the query text.
    pub fn is_derived(&self) -> bool {
        self.matched_keyword.is_some()
    }
}

/// Split a raw query into residual text and an effective task tag.
///
/// - An explicit task tag always wins; the query is returned untouched.
/// - Otherwise the longest task phrase found as whole words (ignoring case)
///   becomes the task tag and is removed from the query. At most one phrase
///   is extracted.
/// - With no match, the query is returned untouched and there is no tag.
pub fn normalize(raw_query: Option<&str>, explicit_task_tag: Option<&str>) -> NormalizedQuery {
    if let Some(tag) = explicit_task_tag.filter(|t| !t.is_empty()) {
        return NormalizedQuery::unchanged(raw_query, Some(tag));
    }

    let Some(query) = raw_query.filter(|q| !q.is_empty()) else {
        return NormalizedQuery::unchanged(raw_query, None);
    };

    let Some(matcher) = matchers().iter().find(|m| m.is_match(query)) else {
        return NormalizedQuery::unchanged(raw_query, None);
    };

    let residual = matcher.strip(query).trim().to_string();
    let residual = if residual.is_empty() {
        None
    } else {
        Some(residual)
    };

    debug!(
        keyword = matcher.phrase,
        task_tag = matcher.task_tag,
        residual = residual.as_deref().unwrap_or(""),
        "Derived task tag from query keyword"
    );

    NormalizedQuery {
        query: residual,
        task_tag: Some(matcher.task_tag.to_string()),
        matched_keyword: Some(matcher.phrase),
    }
}
