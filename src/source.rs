//! Entity source categories.

use serde::{Deserialize, Serialize};

use crate::SearchSettings;

/// The entity categories the quick search can draw results from.
///
/// Variant order is the query sequence: earlier sources are asked first and
/// therefore get the larger share of the shared result budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Products,
    Categories,
    Manufacturers,
    Topics,
    News,
    Blogs,
    Customers,
    Orders,
}

impl SourceKind {
    /// All sources in query-sequence order.
    pub const ALL: [SourceKind; 8] = [
        SourceKind::Products,
        SourceKind::Categories,
        SourceKind::Manufacturers,
        SourceKind::Topics,
        SourceKind::News,
        SourceKind::Blogs,
        SourceKind::Customers,
        SourceKind::Orders,
    ];

    /// Localization resource key for the category label shown to the caller.
    pub fn resource_key(&self) -> &'static str {
        match self {
            SourceKind::Products => "Admin.Catalog.Products",
            SourceKind::Categories => "Admin.Catalog.Categories",
            SourceKind::Manufacturers => "Admin.Catalog.Manufacturers",
            SourceKind::Topics => "Admin.ContentManagement.Topics",
            SourceKind::News => "Admin.ContentManagement.News",
            SourceKind::Blogs => "Admin.ContentManagement.Blog",
            SourceKind::Customers => "Admin.Customers",
            SourceKind::Orders => "Admin.Orders",
        }
    }

    /// Path segment of the admin edit view for this entity.
    pub fn edit_segment(&self) -> &'static str {
        match self {
            SourceKind::Products => "Product",
            SourceKind::Categories => "Category",
            SourceKind::Manufacturers => "Manufacturer",
            SourceKind::Topics => "Topic",
            SourceKind::News => "News",
            SourceKind::Blogs => "Blog",
            SourceKind::Customers => "Customer",
            SourceKind::Orders => "Order",
        }
    }

    /// Short identifier, used in logs and lookup errors.
    pub fn label(&self) -> &'static str {
        match self {
            SourceKind::Products => "products",
            SourceKind::Categories => "categories",
            SourceKind::Manufacturers => "manufacturers",
            SourceKind::Topics => "topics",
            SourceKind::News => "news",
            SourceKind::Blogs => "blogs",
            SourceKind::Customers => "customers",
            SourceKind::Orders => "orders",
        }
    }

    /// Whether this source is enabled in the supplied settings.
    pub fn is_enabled(&self, settings: &SearchSettings) -> bool {
        match self {
            SourceKind::Products => settings.search_in_products,
            SourceKind::Categories => settings.search_in_categories,
            SourceKind::Manufacturers => settings.search_in_manufacturers,
            SourceKind::Topics => settings.search_in_topics,
            SourceKind::News => settings.search_in_news,
            SourceKind::Blogs => settings.search_in_blogs,
            SourceKind::Customers => settings.search_in_customers,
            SourceKind::Orders => settings.search_in_orders,
        }
    }

    /// Configured display-order weight for this source.
    pub fn display_order(&self, settings: &SearchSettings) -> i32 {
        match self {
            SourceKind::Products => settings.products_display_order,
            SourceKind::Categories => settings.categories_display_order,
            SourceKind::Manufacturers => settings.manufacturers_display_order,
            SourceKind::Topics => settings.topics_display_order,
            SourceKind::News => settings.news_display_order,
            SourceKind::Blogs => settings.blogs_display_order,
            SourceKind::Customers => settings.customers_display_order,
            SourceKind::Orders => settings.orders_display_order,
        }
    }
}
