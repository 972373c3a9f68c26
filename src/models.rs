use {
    crate::error::CatalogError,
    serde::{Deserialize, Serialize},
};

/// A `product` row joined with its `product_info` row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub product_id: i64,
    pub description: String,
    pub price: f64,
    pub category: String,
}

/// Body accepted by create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
}

impl ProductPayload {
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::InvalidPayload(
                "name must not be blank".to_string(),
            ));
        }

        if !self.price.is_finite() || self.price < 0.0 {
            return Err(CatalogError::InvalidPayload(
                "price must be a non-negative number".to_string(),
            ));
        }

        Ok(())
    }

    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            product_id: id,
            description: self.description,
            price: self.price,
            category: self.category,
        }
    }
}
