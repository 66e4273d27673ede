use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{event, Level};

use crate::{
    domain::{CartItem, NewOrder, Order, Product, RecordId},
    errors::ServiceError,
};

#[async_trait]
pub trait CartRepository {
    async fn add(&self, item: CartItem) -> Result<Vec<CartItem>, ServiceError>;
    async fn read_all(&self) -> Result<Vec<CartItem>, ServiceError>;
    async fn delete(&self, id: &RecordId) -> Result<Vec<CartItem>, ServiceError>;
}

#[async_trait]
pub trait OrderRepository {
    async fn create(&self, draft: NewOrder) -> Result<Order, ServiceError>;
    async fn read(&self, id: &RecordId) -> Result<Order, ServiceError>;
    async fn read_all(&self) -> Result<Vec<Order>, ServiceError>;
}

#[async_trait]
pub trait ProductRepository {
    async fn read_all(&self) -> Result<Vec<Product>, ServiceError>;
}

#[derive(Clone, Default)]
pub struct InMemoryCartRepository {
    items: Arc<Mutex<Vec<CartItem>>>,
}

#[derive(Clone, Default)]
pub struct InMemoryOrderRepository {
    orders: Arc<Mutex<Vec<Order>>>,
}

/// Fixed catalog; nothing can add to or remove from it.
#[derive(Clone, Copy, Default)]
pub struct StaticProductCatalog;

impl InMemoryCartRepository {
    pub fn new() -> Self {
        InMemoryCartRepository {
            items: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        InMemoryOrderRepository {
            orders: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl CartRepository for InMemoryCartRepository {
    async fn add(&self, item: CartItem) -> Result<Vec<CartItem>, ServiceError> {
        let mut lock = self.items.lock().await;
        lock.push(item);
        Ok(lock.clone())
    }

    async fn read_all(&self) -> Result<Vec<CartItem>, ServiceError> {
        let lock = self.items.lock().await;
        Ok(lock.clone())
    }

    async fn delete(&self, id: &RecordId) -> Result<Vec<CartItem>, ServiceError> {
        let mut lock = self.items.lock().await;
        let before = lock.len();
        lock.retain(|item| &item.id != id);
        event!(Level::DEBUG, "removed {} cart item(s) with id {}", before - lock.len(), id);
        Ok(lock.clone())
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn create(&self, draft: NewOrder) -> Result<Order, ServiceError> {
        let mut lock = self.orders.lock().await;
        let id = lock.len() as u64 + 1;
        let order = Order::from_draft(id, draft, Utc::now());
        lock.push(order.clone());
        Ok(order)
    }

    async fn read(&self, id: &RecordId) -> Result<Order, ServiceError> {
        let lock = self.orders.lock().await;
        match lock.iter().find(|order| &order.record_id() == id) {
            Some(x) => Ok(x.clone()),
            None => Err(ServiceError::NotFound(String::from("Order not found"))),
        }
    }

    async fn read_all(&self) -> Result<Vec<Order>, ServiceError> {
        let lock = self.orders.lock().await;
        Ok(lock.clone())
    }
}

#[async_trait]
impl ProductRepository for StaticProductCatalog {
    async fn read_all(&self) -> Result<Vec<Product>, ServiceError> {
        Ok(vec![
            Product { id: 1, name: String::from("Laptop") },
            Product { id: 2, name: String::from("Phone") },
            Product { id: 3, name: String::from("Tablet") },
        ])
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn item(value: serde_json::Value) -> CartItem {
        CartItem::try_from(value).unwrap()
    }

    #[tokio::test]
    async fn cart_delete_removes_every_match_and_keeps_order() {
        let repo = InMemoryCartRepository::new();
        repo.add(item(json!({"id": 1, "name": "a"}))).await.unwrap();
        repo.add(item(json!({"id": "2", "name": "b"}))).await.unwrap();
        repo.add(item(json!({"id": "1", "name": "c"}))).await.unwrap();
        repo.add(item(json!({"id": 3, "name": "d"}))).await.unwrap();

        let remaining = repo.delete(&RecordId::from_path("1")).await.unwrap();

        let names: Vec<_> = remaining.iter().map(|i| i.body["name"].clone()).collect();
        assert_eq!(names, vec![json!("b"), json!("d")]);
    }

    #[tokio::test]
    async fn cart_delete_without_match_is_a_no_op() {
        let repo = InMemoryCartRepository::new();
        repo.add(item(json!({"id": 1}))).await.unwrap();

        let remaining = repo.delete(&RecordId::from_path("99")).await.unwrap();

        assert_eq!(remaining.len(), 1);
    }

    #[tokio::test]
    async fn cart_accepts_duplicate_ids() {
        let repo = InMemoryCartRepository::new();
        repo.add(item(json!({"id": 1}))).await.unwrap();
        let all = repo.add(item(json!({"id": 1}))).await.unwrap();

        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn order_ids_follow_prior_count() {
        let repo = InMemoryOrderRepository::new();
        for expected in 1..=3u64 {
            let order = repo.create(NewOrder::default()).await.unwrap();
            assert_eq!(order.id, expected);
        }
        assert_eq!(repo.read_all().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn concurrent_order_creation_assigns_distinct_sequential_ids() {
        let repo = InMemoryOrderRepository::new();
        let mut tasks = Vec::new();
        for _ in 0..50 {
            let repo = repo.clone();
            tasks.push(tokio::spawn(async move { repo.create(NewOrder::default()).await.unwrap().id }));
        }

        let mut ids = Vec::new();
        for task in tasks {
            ids.push(task.await.unwrap());
        }
        ids.sort_unstable();

        assert_eq!(ids, (1..=50).collect::<Vec<u64>>());
    }

    #[tokio::test]
    async fn order_read_reports_not_found() {
        let repo = InMemoryOrderRepository::new();
        repo.create(NewOrder::default()).await.unwrap();

        assert!(repo.read(&RecordId::from_path("1")).await.is_ok());
        assert_eq!(
            repo.read(&RecordId::from_path("2")).await,
            Err(ServiceError::NotFound(String::from("Order not found")))
        );
    }

    #[tokio::test]
    async fn catalog_is_fixed() {
        let names: Vec<_> = StaticProductCatalog.read_all().await.unwrap().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Laptop", "Phone", "Tablet"]);
    }
}
