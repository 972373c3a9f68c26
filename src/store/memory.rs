use {
    super::CatalogStore,
    crate::models::{Product, ProductPayload},
    async_trait::async_trait,
    std::{
        collections::BTreeMap,
        sync::{
            atomic::{AtomicBool, Ordering},
            Mutex,
        },
    },
};

/// In-memory stand-in for [`super::PgCatalogStore`].
#[derive(Debug, Default)]
pub struct MemoryCatalogStore {
    rows: Mutex<Rows>,
    unavailable: AtomicBool,
}

#[derive(Debug, Default)]
struct Rows {
    last_id: i64,
    products: BTreeMap<i64, Product>,
}

impl MemoryCatalogStore {
    /// Makes every following call fail like a lost connection.
    pub fn go_offline(&self) {
        self.unavailable.store(true, Ordering::SeqCst);
    }

    fn rows(&self) -> Result<std::sync::MutexGuard<'_, Rows>, sqlx::Error> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(sqlx::Error::PoolTimedOut);
        }

        Ok(self.rows.lock().unwrap())
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalogStore {
    async fn list(&self) -> Result<Vec<Product>, sqlx::Error> {
        Ok(self.rows()?.products.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Product>, sqlx::Error> {
        Ok(self.rows()?.products.get(&id).cloned())
    }

    async fn create(&self, payload: &ProductPayload) -> Result<i64, sqlx::Error> {
        let mut rows = self.rows()?;

        rows.last_id += 1;
        let id = rows.last_id;
        rows.products.insert(id, payload.clone().into_product(id));

        Ok(id)
    }

    async fn update(&self, id: i64, payload: &ProductPayload) -> Result<bool, sqlx::Error> {
        let mut rows = self.rows()?;

        match rows.products.get_mut(&id) {
            Some(product) => {
                *product = payload.clone().into_product(id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        Ok(self.rows()?.products.remove(&id).is_some())
    }
}
