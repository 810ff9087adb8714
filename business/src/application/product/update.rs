use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        self.repository
            .update_by_id(params.id, &params.changes)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                RepositoryError::InvalidDate => ProductError::InvalidDate,
                other => ProductError::Repository(other),
            })?;

        self.logger
            .info(&format!("Product updated: {}", params.id));
        Ok(())
    }
}
