//! Persistence for the product catalog.
//!
//! Handlers only see [`CatalogStore`]; the PostgreSQL adapter is wired in
//! `main` and tests swap in an in-memory fake.

mod postgres;

#[cfg(test)]
pub mod memory;

pub use postgres::PgCatalogStore;

use {
    crate::models::{Product, ProductPayload},
    async_trait::async_trait,
};

#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Every product that has both a `product` and a `product_info` row.
    async fn list(&self) -> Result<Vec<Product>, sqlx::Error>;

    async fn get(&self, id: i64) -> Result<Option<Product>, sqlx::Error>;

    /// Inserts both rows and returns the generated id.
    async fn create(&self, payload: &ProductPayload) -> Result<i64, sqlx::Error>;

    /// Returns `false` when no product has the id; nothing is written then.
    async fn update(&self, id: i64, payload: &ProductPayload) -> Result<bool, sqlx::Error>;

    /// Returns `false` when no product has the id; nothing is written then.
    async fn delete(&self, id: i64) -> Result<bool, sqlx::Error>;
}
