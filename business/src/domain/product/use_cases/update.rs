use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductChanges;

pub struct UpdateProductParams {
    pub id: i32,
    pub changes: ProductChanges,
}

/// Applies a partial update. Returns no record; callers re-fetch to observe
/// the result.
#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<(), ProductError>;
}
