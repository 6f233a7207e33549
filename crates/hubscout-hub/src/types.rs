//! Hub API wire types.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value as JsonValue;

use hubscout_core::{RemoteFile, RemoteModelRecord};

/// One model as returned by `/api/models` and `/api/models/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct HubModel {
    #[serde(alias = "modelId")]
    pub id: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(rename = "lastModified", default)]
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub downloads: u64,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub tags: Vec<JsonValue>,
    #[serde(default)]
    pub pipeline_tag: Option<String>,
    #[serde(default)]
    pub library_name: Option<String>,
    #[serde(default)]
    pub siblings: Vec<HubSibling>,
    #[serde(rename = "cardData", default)]
    pub card_data: Option<JsonValue>,
}

/// A file in a model repository.
#[derive(Debug, Clone, Deserialize)]
pub struct HubSibling {
    pub rfilename: String,
    /// Present when requested with `blobs=true`.
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub lfs: Option<HubLfs>,
}

/// LFS pointer metadata; carries the real size of large files.
#[derive(Debug, Clone, Deserialize)]
pub struct HubLfs {
    #[serde(default)]
    pub size: Option<u64>,
}

impl From<HubSibling> for RemoteFile {
    fn from(sibling: HubSibling) -> Self {
        let size = sibling.lfs.and_then(|l| l.size).or(sibling.size);
        Self {
            name: sibling.rfilename,
            size,
        }
    }
}

impl From<HubModel> for RemoteModelRecord {
    fn from(model: HubModel) -> Self {
        // Search results omit the author; it is the namespace of the id.
        let author = model
            .author
            .or_else(|| model.id.split_once('/').map(|(ns, _)| ns.to_string()));
        Self {
            id: model.id,
            author,
            last_modified: model.last_modified,
            likes: model.likes,
            downloads: model.downloads,
            private: model.private,
            tags: model.tags,
            pipeline_tag: model.pipeline_tag,
            library_name: model.library_name,
            files: model.siblings.into_iter().map(RemoteFile::from).collect(),
            card_data: model.card_data,
        }
    }
}
