//! Single-model detail assembly.
//!
//! Combines the hub's model info (file list, card metadata) with the README
//! and derives the list of downloadable binary artifacts.

use std::time::Instant;

use tracing::{debug, instrument};

use hubscout_core::defaults::README_NOT_FOUND;
use hubscout_core::{
    is_binary_artifact, parse_quantization, BinaryFileDetail, Error, ModelCardData, ModelDetail,
    ModelSource, Result,
};

/// Fetch the full detail view of `model_id`.
///
/// Fails with `NotFound` when the hub has no such model. A missing README is
/// not an error and yields the `README not found.` placeholder.
#[instrument(skip(source, model_id), fields(
    subsystem = "search",
    component = "detail",
    op = "model_detail",
    model_id = %model_id,
))]
pub async fn model_detail(source: &dyn ModelSource, model_id: &str) -> Result<ModelDetail> {
    let model_id = model_id.trim().trim_matches('/');
    if model_id.is_empty() {
        return Err(Error::InvalidParameter("model id must not be empty".to_string()));
    }

    let started = Instant::now();
    let record = source.model_info(model_id).await?;
    let readme_content = source
        .readme(model_id)
        .await?
        .unwrap_or_else(|| README_NOT_FOUND.to_string());

    let gguf_files: Vec<BinaryFileDetail> = record
        .files
        .iter()
        .filter(|f| is_binary_artifact(&f.name))
        .map(|f| BinaryFileDetail {
            name: f.name.clone(),
            url: source.file_url(&record.id, &f.name),
            size_bytes: f.size,
            quantization: parse_quantization(&f.name),
        })
        .collect();

    let card_data = record.card_data.as_ref().and_then(ModelCardData::from_card);

    debug!(
        file_count = record.files.len(),
        gguf_count = gguf_files.len(),
        has_card = card_data.is_some(),
        duration_ms = started.elapsed().as_millis() as u64,
        "Model detail assembled"
    );

    Ok(ModelDetail {
        id: record.id,
        author: record.author,
        last_modified: record.last_modified,
        tags: record.tags,
        pipeline_tag: record.pipeline_tag,
        downloads: record.downloads,
        likes: record.likes,
        readme_content,
        gguf_files,
        card_data,
        siblings: record.files,
    })
}
