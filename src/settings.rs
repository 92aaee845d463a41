//! Quick-search configuration.

use serde::{Deserialize, Serialize};

/// Settings controlling the quick-search aggregation.
///
/// Supplied read-only for each call. Every entity source carries an enable
/// flag and an integer display order; results are sorted ascending by that
/// order, and ties keep the fixed query sequence (products, categories,
/// manufacturers, topics, news, blogs, customers, orders).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Terms shorter than this skip every source except orders.
    pub min_search_term_length: usize,
    /// Hard ceiling on returned items; also the shared page-size budget.
    pub max_search_results_count: usize,

    pub search_in_products: bool,
    pub products_display_order: i32,

    pub search_in_categories: bool,
    pub categories_display_order: i32,

    pub search_in_manufacturers: bool,
    pub manufacturers_display_order: i32,

    pub search_in_topics: bool,
    pub topics_display_order: i32,

    pub search_in_news: bool,
    pub news_display_order: i32,

    pub search_in_blogs: bool,
    pub blogs_display_order: i32,

    pub search_in_customers: bool,
    pub customers_display_order: i32,

    pub search_in_orders: bool,
    pub orders_display_order: i32,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            min_search_term_length: 3,
            max_search_results_count: 10,
            search_in_products: true,
            products_display_order: 0,
            search_in_categories: true,
            categories_display_order: 0,
            search_in_manufacturers: true,
            manufacturers_display_order: 0,
            search_in_topics: true,
            topics_display_order: 0,
            search_in_news: true,
            news_display_order: 0,
            search_in_blogs: true,
            blogs_display_order: 0,
            search_in_customers: true,
            customers_display_order: 0,
            search_in_orders: true,
            orders_display_order: 0,
        }
    }
}

impl SearchSettings {
    /// Disables every source. Useful as a starting point when only a few
    /// sources should answer.
    pub fn none_enabled() -> Self {
        Self {
            search_in_products: false,
            search_in_categories: false,
            search_in_manufacturers: false,
            search_in_topics: false,
            search_in_news: false,
            search_in_blogs: false,
            search_in_customers: false,
            search_in_orders: false,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = SearchSettings::default();
        assert_eq!(settings.min_search_term_length, 3);
        assert_eq!(settings.max_search_results_count, 10);
        assert!(settings.search_in_products);
        assert!(settings.search_in_orders);
        assert_eq!(settings.products_display_order, 0);
        assert_eq!(settings.orders_display_order, 0);
    }

    #[test]
    fn test_settings_none_enabled() {
        let settings = SearchSettings::none_enabled();
        assert!(!settings.search_in_products);
        assert!(!settings.search_in_categories);
        assert!(!settings.search_in_manufacturers);
        assert!(!settings.search_in_topics);
        assert!(!settings.search_in_news);
        assert!(!settings.search_in_blogs);
        assert!(!settings.search_in_customers);
        assert!(!settings.search_in_orders);
        assert_eq!(settings.max_search_results_count, 10);
    }

    #[test]
    fn test_settings_deserialization_partial() {
        let json = r#"{"min_search_term_length":2,"search_in_news":false}"#;
        let settings: SearchSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.min_search_term_length, 2);
        assert!(!settings.search_in_news);
        // everything else keeps its default
        assert_eq!(settings.max_search_results_count, 10);
        assert!(settings.search_in_products);
    }

    #[test]
    fn test_settings_serialization_round_trip() {
        let mut settings = SearchSettings::default();
        settings.categories_display_order = 5;
        let json = serde_json::to_string(&settings).unwrap();
        let back: SearchSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }
}
