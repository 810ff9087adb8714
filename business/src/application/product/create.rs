use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProduct, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.name));

        let product = NewProduct {
            name: params.name,
            stock: params.stock,
            price: params.price,
            category_id: params.category_id,
            product_date: params.product_date,
        };

        let created = self
            .repository
            .create(&product)
            .await
            .map_err(|e| match e {
                RepositoryError::InvalidDate => ProductError::InvalidDate,
                other => ProductError::Repository(other),
            })?;

        self.logger
            .info(&format!("Product created with id: {}", created.id));
        Ok(created)
    }
}
