use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct GetProductsByCategoryIdParams {
    pub category_id: i32,
}

#[async_trait]
pub trait GetProductsByCategoryIdUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetProductsByCategoryIdParams,
    ) -> Result<Vec<Product>, ProductError>;
}
