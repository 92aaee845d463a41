//! Outbound query contracts for the business-entity services.
//!
//! The aggregator owns none of the search logic; each entity lookup is
//! delegated to a service behind one of these traits. Page-size parameters
//! are hints: the aggregator passes its remaining result budget and trusts
//! the backend to honor it.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::Result;

/// A matched entity with a display name (products, categories,
/// manufacturers, topics, news, blog posts).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    /// Opaque store identifier, used to build the edit link.
    pub id: String,
    /// Display name; for topics this is the system name.
    pub name: String,
}

impl EntityRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A matched customer account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRef {
    pub id: String,
    pub email: String,
}

impl CustomerRef {
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
        }
    }
}

/// A matched order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRef {
    pub id: String,
    pub number: i32,
}

impl OrderRef {
    pub fn new(id: impl Into<String>, number: i32) -> Self {
        Self {
            id: id.into(),
            number,
        }
    }
}

/// Product catalog lookup, keyword match on product name.
#[async_trait]
pub trait ProductService: Send + Sync {
    async fn search_by_name(&self, keywords: &str, page_size: usize) -> Result<Vec<EntityRef>>;
}

/// Category lookup, keyword match on category name.
#[async_trait]
pub trait CategoryService: Send + Sync {
    async fn search_by_name(&self, keywords: &str, page_size: usize) -> Result<Vec<EntityRef>>;
}

/// Manufacturer lookup, keyword match on manufacturer name.
#[async_trait]
pub trait ManufacturerService: Send + Sync {
    async fn search_by_name(&self, keywords: &str, page_size: usize) -> Result<Vec<EntityRef>>;
}

/// Topic lookup by exact system name (not a substring match).
#[async_trait]
pub trait TopicService: Send + Sync {
    async fn find_by_system_name(&self, system_name: &str) -> Result<Vec<EntityRef>>;
}

/// News lookup, keyword match on article title.
#[async_trait]
pub trait NewsService: Send + Sync {
    async fn search_by_title(&self, keywords: &str, page_size: usize) -> Result<Vec<EntityRef>>;
}

/// Blog post lookup, keyword match on post title.
#[async_trait]
pub trait BlogService: Send + Sync {
    async fn search_by_title(&self, keywords: &str, page_size: usize) -> Result<Vec<EntityRef>>;
}

/// Customer lookup by exact email or exact username.
#[async_trait]
pub trait CustomerService: Send + Sync {
    async fn find_by_email(&self, email: &str, page_size: usize) -> Result<Vec<CustomerRef>>;
    async fn find_by_username(&self, username: &str, page_size: usize)
        -> Result<Vec<CustomerRef>>;
}

/// Order lookup by exact order number.
#[async_trait]
pub trait OrderService: Send + Sync {
    async fn find_by_number(&self, number: i32) -> Result<Option<OrderRef>>;
}

/// Localized string lookup for the `source` label of each result row.
pub trait ResourceProvider: Send + Sync {
    /// Resolves a resource key (e.g. `Admin.Catalog.Products`) to its
    /// localized label.
    fn resource(&self, key: &str) -> String;
}

/// Resource provider that returns every key unchanged.
///
/// The default when no localization backend is wired; callers then see the
/// raw resource keys as source labels.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughResources;

impl ResourceProvider for PassthroughResources {
    fn resource(&self, key: &str) -> String {
        key.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_ref_new() {
        let entity = EntityRef::new("p1", "Gift Card");
        assert_eq!(entity.id, "p1");
        assert_eq!(entity.name, "Gift Card");
    }

    #[test]
    fn test_customer_ref_new() {
        let customer = CustomerRef::new("c1", "jane@example.com");
        assert_eq!(customer.id, "c1");
        assert_eq!(customer.email, "jane@example.com");
    }

    #[test]
    fn test_order_ref_new() {
        let order = OrderRef::new("o1", 42);
        assert_eq!(order.id, "o1");
        assert_eq!(order.number, 42);
    }

    #[test]
    fn test_passthrough_resources() {
        let resources = PassthroughResources;
        assert_eq!(resources.resource("Admin.Orders"), "Admin.Orders");
    }

    #[test]
    fn test_entity_ref_deserialization() {
        let json = r#"{"id":"p1","name":"Gift Card"}"#;
        let entity: EntityRef = serde_json::from_str(json).unwrap();
        assert_eq!(entity, EntityRef::new("p1", "Gift Card"));
    }
}
