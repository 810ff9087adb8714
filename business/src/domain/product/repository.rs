use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewProduct, Product, ProductChanges};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: i32) -> Result<Product, RepositoryError>;
    async fn get_by_category_id(&self, category_id: i32) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_category_name(&self, name: &str) -> Result<Vec<Product>, RepositoryError>;
    async fn update_by_id(
        &self,
        id: i32,
        changes: &ProductChanges,
    ) -> Result<(), RepositoryError>;
}
