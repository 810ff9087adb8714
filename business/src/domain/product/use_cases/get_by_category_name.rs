use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct GetProductsByCategoryNameParams {
    pub name: String,
}

#[async_trait]
pub trait GetProductsByCategoryNameUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetProductsByCategoryNameParams,
    ) -> Result<Vec<Product>, ProductError>;
}
