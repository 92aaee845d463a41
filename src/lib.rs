//! # admin-search
//!
//! Multi-entity "quick search" for an e-commerce administration panel.
//!
//! Given a search term, the aggregator queries several unrelated
//! business-entity services (products, categories, manufacturers, topics,
//! news, blog posts, customers, orders), tags each hit with a localized
//! source label and a configured display-order weight, shares one result
//! budget across the calls, and returns a weight-sorted flat list. An
//! embeddable axum router exposes the single `POST /admin/search` endpoint.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use admin_search::{InMemoryStore, QuickSearch, SearchSettings};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = Arc::new(InMemoryStore::default());
//!     let search = QuickSearch::new(store);
//!
//!     let items = search.search("gift card", &SearchSettings::default()).await?;
//!     for item in items {
//!         println!("{} [{}] -> {}", item.title, item.source, item.link);
//!     }
//!     Ok(())
//! }
//! ```

mod error;
mod links;
mod result;
mod search;
mod settings;
mod source;

pub mod http;
pub mod memory;
pub mod services;

pub use error::{Result, SearchError};
pub use links::EditLinks;
pub use memory::{InMemoryStore, StaticResources};
pub use result::SearchItem;
pub use search::{QuickSearch, QuickSearchBuilder};
pub use settings::SearchSettings;
pub use source::SourceKind;
