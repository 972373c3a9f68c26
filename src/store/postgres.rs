use {
    super::CatalogStore,
    crate::models::{Product, ProductPayload},
    async_trait::async_trait,
    sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions},
};

const LIST_PRODUCTS: &str = "SELECT product.id, product.name, product_info.product_id, \
     product_info.description, product_info.price, product_info.category \
     FROM product JOIN product_info ON product.id = product_info.product_id \
     ORDER BY product.id";

const GET_PRODUCT: &str = "SELECT product.id, product.name, product_info.product_id, \
     product_info.description, product_info.price, product_info.category \
     FROM product JOIN product_info ON product.id = product_info.product_id \
     WHERE product.id = $1";

#[derive(Debug, Clone)]
pub struct PgCatalogStore {
    pool: PgPool,
}

impl PgCatalogStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Builds the pool without opening a connection, so an unreachable
    /// store does not stop the server from starting.
    pub fn connect_lazy(options: PgConnectOptions, max_connections: u32) -> Self {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect_lazy_with(options);

        Self::new(pool)
    }

    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;

        Ok(())
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    #[tracing::instrument(skip(self), err)]
    async fn list(&self) -> Result<Vec<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(LIST_PRODUCTS)
            .fetch_all(&self.pool)
            .await
    }

    #[tracing::instrument(skip(self), err)]
    async fn get(&self, id: i64) -> Result<Option<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(GET_PRODUCT)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    #[tracing::instrument(skip(self, payload), err)]
    async fn create(&self, payload: &ProductPayload) -> Result<i64, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let id: i64 = sqlx::query_scalar("INSERT INTO product (name) VALUES ($1) RETURNING id")
            .bind(&payload.name)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query(
            "INSERT INTO product_info (product_id, description, price, category) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(id)
        .bind(&payload.description)
        .bind(payload.price)
        .bind(&payload.category)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(id, "product created");

        Ok(id)
    }

    #[tracing::instrument(skip(self, payload), err)]
    async fn update(&self, id: i64, payload: &ProductPayload) -> Result<bool, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query("UPDATE product SET name = $1 WHERE id = $2")
            .bind(&payload.name)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if updated.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        sqlx::query(
            "UPDATE product_info SET description = $1, price = $2, category = $3 \
             WHERE product_id = $4",
        )
        .bind(&payload.description)
        .bind(payload.price)
        .bind(&payload.category)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(true)
    }

    #[tracing::instrument(skip(self), err)]
    async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        // product_info goes first, it holds the foreign key
        sqlx::query("DELETE FROM product_info WHERE product_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let deleted = sqlx::query("DELETE FROM product WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if deleted.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        tx.commit().await?;

        Ok(true)
    }
}
