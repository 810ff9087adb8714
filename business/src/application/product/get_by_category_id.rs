use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_category_id::{
    GetProductsByCategoryIdParams, GetProductsByCategoryIdUseCase,
};

pub struct GetProductsByCategoryIdUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductsByCategoryIdUseCase for GetProductsByCategoryIdUseCaseImpl {
    async fn execute(
        &self,
        params: GetProductsByCategoryIdParams,
    ) -> Result<Vec<Product>, ProductError> {
        self.logger.info(&format!(
            "Fetching products for category id: {}",
            params.category_id
        ));
        let products = self.repository.get_by_category_id(params.category_id).await?;
        Ok(products)
    }
}
