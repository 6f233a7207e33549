//! Core data models for hubscout.
//!
//! These types are shared across all hubscout crates. Nothing here is
//! persisted; every value lives for a single request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::artifacts::has_binary_artifact;
use crate::defaults;
use crate::error::{Error, Result};

// =============================================================================
// SEARCH PARAMETERS
// =============================================================================

/// Field the hub sorts search results by. Results always come back descending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub enum SortKey {
    /// Download count (default)
    #[default]
    #[serde(rename = "downloads")]
    Downloads,
    /// Like count
    #[serde(rename = "likes")]
    Likes,
    /// Last modification timestamp
    #[serde(rename = "lastModified")]
    LastModified,
}

impl SortKey {
    /// Name of the sort field as the hub API expects it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Downloads => "downloads",
            Self::Likes => "likes",
            Self::LastModified => "lastModified",
        }
    }

    /// Parse a client-supplied sort key, falling back to the default.
    ///
    /// Returns the key and whether the fallback was applied. An unrecognized
    /// key never fails the request.
    pub fn parse_or_default(raw: Option<&str>) -> (Self, bool) {
        match raw {
            None => (Self::default(), false),
            Some(s) => match s.parse() {
                Ok(key) => (key, false),
                Err(_) => (Self::default(), true),
            },
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "downloads" => Ok(Self::Downloads),
            "likes" => Ok(Self::Likes),
            "lastModified" | "last_modified" | "last-modified" => Ok(Self::LastModified),
            _ => Err(format!("Invalid sort key: {}", s)),
        }
    }
}

/// Sort direction passed to the hub.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    /// Largest first (the only direction pagination uses)
    #[default]
    Descending,
    /// Smallest first
    Ascending,
}

impl SortDirection {
    /// Value of the hub's `direction` query parameter.
    pub fn as_hub_param(&self) -> &'static str {
        match self {
            Self::Descending => "-1",
            Self::Ascending => "1",
        }
    }
}

/// A validated, immutable search request.
///
/// Construction enforces `page >= 1` and `1 <= page_size <= PAGE_SIZE_MAX`,
/// so the walker never sees an out-of-range value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    term: Option<String>,
    sort: SortKey,
    page: u32,
    page_size: u32,
    task_tag: Option<String>,
    library: Option<String>,
}

impl SearchQuery {
    /// Create a query, rejecting out-of-range pagination.
    pub fn new(term: Option<String>, sort: SortKey, page: u32, page_size: u32) -> Result<Self> {
        if page < 1 {
            return Err(Error::InvalidParameter(format!(
                "page must be >= 1, got {}",
                page
            )));
        }
        if page_size < 1 || page_size > defaults::PAGE_SIZE_MAX {
            return Err(Error::InvalidParameter(format!(
                "page_size must be between 1 and {}, got {}",
                defaults::PAGE_SIZE_MAX,
                page_size
            )));
        }
        Ok(Self {
            term: term.filter(|t| !t.trim().is_empty()),
            sort,
            page,
            page_size,
            task_tag: None,
            library: None,
        })
    }

    /// Restrict results to a task tag.
    pub fn with_task_tag(mut self, task_tag: Option<String>) -> Self {
        self.task_tag = task_tag.filter(|t| !t.is_empty());
        self
    }

    /// Restrict results to a library.
    pub fn with_library(mut self, library: Option<String>) -> Self {
        self.library = library.filter(|l| !l.is_empty());
        self
    }

    pub fn term(&self) -> Option<&str> {
        self.term.as_deref()
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn task_tag(&self) -> Option<&str> {
        self.task_tag.as_deref()
    }

    pub fn library(&self) -> Option<&str> {
        self.library.as_deref()
    }

    /// Index of the first record on this page.
    pub fn start(&self) -> usize {
        (self.page as usize - 1) * self.page_size as usize
    }

    /// Index one past the last record on this page.
    pub fn end(&self) -> usize {
        self.start() + self.page_size as usize
    }
}

// =============================================================================
// UPSTREAM RECORDS
// =============================================================================

/// A file stored in a hub model repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RemoteFile {
    /// Path of the file relative to the repository root.
    #[serde(rename = "rfilename")]
    pub name: String,
    /// Size in bytes, when the hub reported it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

impl RemoteFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: None,
        }
    }

    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }
}

/// One model record as produced by the remote catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RemoteModelRecord {
    pub id: String,
    pub author: Option<String>,
    pub last_modified: Option<DateTime<Utc>>,
    pub likes: u64,
    pub downloads: u64,
    pub private: bool,
    /// Tags are usually strings but the hub does not guarantee it.
    pub tags: Vec<JsonValue>,
    pub pipeline_tag: Option<String>,
    pub library_name: Option<String>,
    pub files: Vec<RemoteFile>,
    /// Raw model card metadata (only present on detail lookups).
    pub card_data: Option<JsonValue>,
}

// =============================================================================
// SEARCH RESULTS
// =============================================================================

/// One search result as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ModelSummary {
    /// Globally unique model id, e.g. `openai-community/gpt2`.
    pub id: String,
    pub author: Option<String>,
    #[serde(rename = "lastModified")]
    pub last_modified: Option<DateTime<Utc>>,
    pub likes: u64,
    pub private: bool,
    pub downloads: u64,
    #[schema(value_type = Vec<Object>)]
    pub tags: Vec<JsonValue>,
    #[serde(rename = "pipelineTag")]
    pub pipeline_tag: Option<String>,
    /// True iff any repository file is a binary model artifact.
    #[serde(rename = "has_gguf")]
    pub has_binary_artifact: bool,
}

impl From<RemoteModelRecord> for ModelSummary {
    fn from(record: RemoteModelRecord) -> Self {
        let has_binary_artifact = has_binary_artifact(&record.files);
        Self {
            id: record.id,
            author: record.author,
            last_modified: record.last_modified,
            likes: record.likes,
            private: record.private,
            downloads: record.downloads,
            tags: record.tags,
            pipeline_tag: record.pipeline_tag,
            has_binary_artifact,
        }
    }
}

/// One page of search results.
///
/// There is no total count: the hub only exposes a forward
/// cursor, so the number of matching models is unknown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub results: Vec<ModelSummary>,
    /// At least one record exists past this page.
    pub has_more: bool,
}

// =============================================================================
// MODEL DETAIL
// =============================================================================

/// A downloadable binary artifact in a model repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct BinaryFileDetail {
    pub name: String,
    /// Direct download URL.
    pub url: String,
    pub size_bytes: Option<u64>,
    /// Quantization label parsed from the file name, e.g. `Q4_K_M`.
    pub quantization: Option<String>,
}

/// Simplified model card metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ModelCardData {
    pub license: Option<String>,
    pub language: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    /// Evaluation results as published on the card.
    #[schema(value_type = Option<Vec<Object>>)]
    pub model_index: Option<Vec<JsonValue>>,
}

impl ModelCardData {
    /// Extract the fields we surface from raw card metadata.
    ///
    /// Returns `None` when the card is not an object or carries none of them.
    pub fn from_card(card: &JsonValue) -> Option<Self> {
        let obj = card.as_object()?;

        let license = obj
            .get("license")
            .and_then(JsonValue::as_str)
            .map(str::to_string);
        let language = obj.get("language").and_then(string_or_list);
        let tags = obj.get("tags").and_then(string_or_list);
        let model_index = obj
            .get("model-index")
            .or_else(|| obj.get("model_index"))
            .and_then(JsonValue::as_array)
            .cloned();

        let data = Self {
            license,
            language,
            tags,
            model_index,
        };
        if data == Self::default() {
            None
        } else {
            Some(data)
        }
    }
}

/// Card fields may hold a single string or a list of strings.
fn string_or_list(value: &JsonValue) -> Option<Vec<String>> {
    match value {
        JsonValue::String(s) => Some(vec![s.clone()]),
        JsonValue::Array(items) => Some(
            items
                .iter()
                .filter_map(JsonValue::as_str)
                .map(str::to_string)
                .collect(),
        ),
        _ => None,
    }
}

/// Full detail view of a single model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ModelDetail {
    pub id: String,
    pub author: Option<String>,
    #[serde(rename = "lastModified")]
    pub last_modified: Option<DateTime<Utc>>,
    #[schema(value_type = Vec<Object>)]
    pub tags: Vec<JsonValue>,
    #[serde(rename = "pipelineTag")]
    pub pipeline_tag: Option<String>,
    pub downloads: u64,
    pub likes: u64,
    pub readme_content: String,
    pub gguf_files: Vec<BinaryFileDetail>,
    pub card_data: Option<ModelCardData>,
    pub siblings: Vec<RemoteFile>,
}
