//! Search result types.

use serde::{Deserialize, Serialize};

/// A single quick-search result row.
///
/// This is the exact JSON shape returned to the caller; the display-order
/// weight used for sorting is internal to the aggregator and never
/// serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchItem {
    /// Human-readable label of the matched entity.
    pub title: String,
    /// Navigation URL to the entity's edit view.
    pub link: String,
    /// Localized label naming the entity category (e.g. "Products").
    pub source: String,
}

impl SearchItem {
    /// Creates a new result row.
    pub fn new(
        title: impl Into<String>,
        link: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            source: source.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_item_new() {
        let item = SearchItem::new("Gift Card", "/Admin/Product/Edit/42", "Products");
        assert_eq!(item.title, "Gift Card");
        assert_eq!(item.link, "/Admin/Product/Edit/42");
        assert_eq!(item.source, "Products");
    }

    #[test]
    fn test_search_item_serialization() {
        let item = SearchItem::new("Gift Card", "/Admin/Product/Edit/42", "Products");
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(
            json,
            r#"{"title":"Gift Card","link":"/Admin/Product/Edit/42","source":"Products"}"#
        );
    }

    #[test]
    fn test_search_item_deserialization() {
        let json = r#"{"title":"t","link":"l","source":"s"}"#;
        let item: SearchItem = serde_json::from_str(json).unwrap();
        assert_eq!(item, SearchItem::new("t", "l", "s"));
    }
}
