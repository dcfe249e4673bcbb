use crate::domain::error::DomainError;
use crate::domain::product::Product;
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, error};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Product>, DomainError>;
}

#[derive(Clone)]
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, DomainError> {
        // no ORDER BY: rows come back in the store's scan order
        let products = sqlx::query_as::<_, Product>("SELECT id, name, price FROM products")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!("db error while fetching products: {}", e);
                DomainError::from(e)
            })?;

        debug!(count = products.len(), "products fetched");
        Ok(products)
    }
}
