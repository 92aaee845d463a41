//! HTTP surface for the quick search.
//!
//! One operation: `POST /admin/search` with a form (or query) parameter
//! `searchTerm`. Success is a JSON array of `{title, link, source}` rows; an
//! empty or missing term yields the JSON string `"error"`, matching the
//! admin panel's legacy contract. Downstream lookup failures become a 500.

use std::sync::Arc;

use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::post;
use axum::Router;
use serde::Deserialize;
use tracing::error;

use crate::{QuickSearch, SearchError, SearchSettings};

/// Shared state for the search handler.
#[derive(Clone)]
pub struct AppState {
    pub search: Arc<QuickSearch>,
    pub settings: Arc<SearchSettings>,
}

impl AppState {
    pub fn new(search: Arc<QuickSearch>, settings: SearchSettings) -> Self {
        Self {
            search,
            settings: Arc::new(settings),
        }
    }
}

/// Builds the router exposing `POST /admin/search`.
///
/// Embeddable: merge it into a larger admin-panel router or serve it on its
/// own.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/admin/search", post(handle_search))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct SearchForm {
    #[serde(rename = "searchTerm", default)]
    search_term: String,
}

async fn handle_search(State(state): State<AppState>, Form(form): Form<SearchForm>) -> Response {
    match state.search.search(&form.search_term, &state.settings).await {
        Ok(items) => Json(items).into_response(),
        Err(SearchError::EmptyTerm) => Json("error").into_response(),
        Err(e) => {
            error!("quick search failed: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, Json("error")).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Form extraction goes through serde, so the rename/default attributes
    // can be exercised with any self-describing format.
    #[test]
    fn test_search_form_renamed_field() {
        let form: SearchForm = serde_json::from_str(r#"{"searchTerm":"gift card"}"#).unwrap();
        assert_eq!(form.search_term, "gift card");
    }

    #[test]
    fn test_search_form_missing_term_defaults_empty() {
        let form: SearchForm = serde_json::from_str("{}").unwrap();
        assert_eq!(form.search_term, "");
    }
}
