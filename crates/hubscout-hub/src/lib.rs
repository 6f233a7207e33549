//! # hubscout-hub
//!
//! `ModelSource` implementation for the Hugging Face model hub.
//!
//! Search results are streamed page by page using the hub's `Link` header
//! cursor; nothing is fetched until the search cursor is first advanced.
//!
//! # Example
//!
//! ```rust,no_run
//! use hubscout_core::{HubSearchParams, ModelSource};
//! use hubscout_hub::{HubClient, HubConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = HubClient::new(HubConfig::from_env()).unwrap();
//!
//!     let mut cursor = client.search(HubSearchParams {
//!         search: Some("llama".to_string()),
//!         ..Default::default()
//!     });
//!     while let Some(model) = cursor.next_record().await.unwrap() {
//!         println!("{} ({} downloads)", model.id, model.downloads);
//!     }
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod link;
pub mod types;

pub use client::{HubClient, HubCursor};
pub use config::HubConfig;
pub use error::HubErrorCode;
pub use link::parse_next_link;
