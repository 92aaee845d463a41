//! In-memory backend.
//!
//! Implements every entity service over plain vectors: case-insensitive
//! substring match for the keyword sources, case-insensitive exact match
//! for topics and customers, numeric equality for orders. Doubles as the
//! demo server's dataset (deserialized from JSON) and as a test fixture.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::services::{
    BlogService, CategoryService, CustomerRef, CustomerService, EntityRef, ManufacturerService,
    NewsService, OrderRef, OrderService, ProductService, ResourceProvider, TopicService,
};
use crate::Result;

/// A stored customer account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub id: String,
    pub email: String,
    pub username: String,
}

impl CustomerRecord {
    pub fn new(
        id: impl Into<String>,
        email: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            username: username.into(),
        }
    }
}

/// In-memory dataset backing all eight entity services.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InMemoryStore {
    pub products: Vec<EntityRef>,
    pub categories: Vec<EntityRef>,
    pub manufacturers: Vec<EntityRef>,
    /// `name` holds the topic system name.
    pub topics: Vec<EntityRef>,
    /// `name` holds the article title.
    pub news: Vec<EntityRef>,
    /// `name` holds the post title.
    pub blog_posts: Vec<EntityRef>,
    pub customers: Vec<CustomerRecord>,
    pub orders: Vec<OrderRef>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn search_named(entities: &[EntityRef], keywords: &str, page_size: usize) -> Vec<EntityRef> {
        let keywords = keywords.to_lowercase();
        entities
            .iter()
            .filter(|e| e.name.to_lowercase().contains(&keywords))
            .take(page_size)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl ProductService for InMemoryStore {
    async fn search_by_name(&self, keywords: &str, page_size: usize) -> Result<Vec<EntityRef>> {
        Ok(Self::search_named(&self.products, keywords, page_size))
    }
}

#[async_trait]
impl CategoryService for InMemoryStore {
    async fn search_by_name(&self, keywords: &str, page_size: usize) -> Result<Vec<EntityRef>> {
        Ok(Self::search_named(&self.categories, keywords, page_size))
    }
}

#[async_trait]
impl ManufacturerService for InMemoryStore {
    async fn search_by_name(&self, keywords: &str, page_size: usize) -> Result<Vec<EntityRef>> {
        Ok(Self::search_named(&self.manufacturers, keywords, page_size))
    }
}

#[async_trait]
impl TopicService for InMemoryStore {
    async fn find_by_system_name(&self, system_name: &str) -> Result<Vec<EntityRef>> {
        Ok(self
            .topics
            .iter()
            .filter(|t| t.name.eq_ignore_ascii_case(system_name))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl NewsService for InMemoryStore {
    async fn search_by_title(&self, keywords: &str, page_size: usize) -> Result<Vec<EntityRef>> {
        Ok(Self::search_named(&self.news, keywords, page_size))
    }
}

#[async_trait]
impl BlogService for InMemoryStore {
    async fn search_by_title(&self, keywords: &str, page_size: usize) -> Result<Vec<EntityRef>> {
        Ok(Self::search_named(&self.blog_posts, keywords, page_size))
    }
}

#[async_trait]
impl CustomerService for InMemoryStore {
    async fn find_by_email(&self, email: &str, page_size: usize) -> Result<Vec<CustomerRef>> {
        Ok(self
            .customers
            .iter()
            .filter(|c| c.email.eq_ignore_ascii_case(email))
            .take(page_size)
            .map(|c| CustomerRef::new(&c.id, &c.email))
            .collect())
    }

    async fn find_by_username(
        &self,
        username: &str,
        page_size: usize,
    ) -> Result<Vec<CustomerRef>> {
        Ok(self
            .customers
            .iter()
            .filter(|c| c.username.eq_ignore_ascii_case(username))
            .take(page_size)
            .map(|c| CustomerRef::new(&c.id, &c.email))
            .collect())
    }
}

#[async_trait]
impl OrderService for InMemoryStore {
    async fn find_by_number(&self, number: i32) -> Result<Option<OrderRef>> {
        Ok(self.orders.iter().find(|o| o.number == number).cloned())
    }
}

/// Resource table with a fallback to the key itself.
#[derive(Debug, Clone, Default)]
pub struct StaticResources {
    resources: HashMap<String, String>,
}

impl StaticResources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a resource entry.
    pub fn with_resource(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.resources.insert(key.into(), value.into());
        self
    }

    /// English labels for the quick-search source categories.
    pub fn english() -> Self {
        Self::new()
            .with_resource("Admin.Catalog.Products", "Products")
            .with_resource("Admin.Catalog.Categories", "Categories")
            .with_resource("Admin.Catalog.Manufacturers", "Manufacturers")
            .with_resource("Admin.ContentManagement.Topics", "Topics")
            .with_resource("Admin.ContentManagement.News", "News")
            .with_resource("Admin.ContentManagement.Blog", "Blog posts")
            .with_resource("Admin.Customers", "Customers")
            .with_resource("Admin.Orders", "Orders")
    }
}

impl ResourceProvider for StaticResources {
    fn resource(&self, key: &str) -> String {
        self.resources
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> InMemoryStore {
        InMemoryStore {
            products: vec![
                EntityRef::new("p1", "Gift Card"),
                EntityRef::new("p2", "Graphics Card"),
                EntityRef::new("p3", "Coffee Mug"),
            ],
            topics: vec![
                EntityRef::new("t1", "AboutUs"),
                EntityRef::new("t2", "ShippingInfo"),
            ],
            customers: vec![
                CustomerRecord::new("c1", "jane@example.com", "jane"),
                CustomerRecord::new("c2", "john@example.com", "john"),
            ],
            orders: vec![OrderRef::new("o1", 1001), OrderRef::new("o2", 1002)],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_keyword_match_is_case_insensitive_substring() {
        let store = store();
        let hits = ProductService::search_by_name(&store, "CARD", 10)
            .await
            .unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].name, "Gift Card");
    }

    #[tokio::test]
    async fn test_keyword_match_honors_page_size() {
        let store = store();
        let hits = ProductService::search_by_name(&store, "card", 1)
            .await
            .unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[tokio::test]
    async fn test_topic_match_is_exact_not_substring() {
        let store = store();
        assert_eq!(
            store.find_by_system_name("aboutus").await.unwrap().len(),
            1
        );
        assert!(store.find_by_system_name("About").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_customer_match_is_exact() {
        let store = store();
        let by_email = store.find_by_email("jane@example.com", 10).await.unwrap();
        assert_eq!(by_email, vec![CustomerRef::new("c1", "jane@example.com")]);
        assert!(store.find_by_email("jane", 10).await.unwrap().is_empty());

        let by_username = store.find_by_username("john", 10).await.unwrap();
        assert_eq!(by_username, vec![CustomerRef::new("c2", "john@example.com")]);
    }

    #[tokio::test]
    async fn test_order_match_by_number() {
        let store = store();
        let order = store.find_by_number(1002).await.unwrap();
        assert_eq!(order, Some(OrderRef::new("o2", 1002)));
        assert_eq!(store.find_by_number(9999).await.unwrap(), None);
    }

    #[test]
    fn test_store_deserialization() {
        let json = r#"{
            "products": [{"id": "p1", "name": "Gift Card"}],
            "customers": [{"id": "c1", "email": "jane@example.com", "username": "jane"}],
            "orders": [{"id": "o1", "number": 1001}]
        }"#;
        let store: InMemoryStore = serde_json::from_str(json).unwrap();
        assert_eq!(store.products.len(), 1);
        assert_eq!(store.customers[0].username, "jane");
        assert_eq!(store.orders[0].number, 1001);
        assert!(store.categories.is_empty());
    }

    #[test]
    fn test_static_resources_fallback() {
        let resources = StaticResources::new().with_resource("Admin.Orders", "Orders");
        assert_eq!(resources.resource("Admin.Orders"), "Orders");
        assert_eq!(resources.resource("Admin.Customers"), "Admin.Customers");
    }

    #[test]
    fn test_english_resources() {
        let resources = StaticResources::english();
        assert_eq!(
            resources.resource("Admin.ContentManagement.Blog"),
            "Blog posts"
        );
        assert_eq!(resources.resource("Admin.Catalog.Products"), "Products");
    }
}
