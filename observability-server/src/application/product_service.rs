use std::sync::Arc;

use crate::data::product_repository::ProductRepository;
use crate::domain::{error::DomainError, product::Product};
use tracing::instrument;

#[derive(Clone)]
pub struct ProductService<R: ProductRepository + 'static> {
    repo: Arc<R>,
}

impl<R> ProductService<R>
where
    R: ProductRepository + 'static,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, DomainError> {
        self.repo.find_all().await
    }
}
