use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_category_name::{
    GetProductsByCategoryNameParams, GetProductsByCategoryNameUseCase,
};

pub struct GetProductsByCategoryNameUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductsByCategoryNameUseCase for GetProductsByCategoryNameUseCaseImpl {
    async fn execute(
        &self,
        params: GetProductsByCategoryNameParams,
    ) -> Result<Vec<Product>, ProductError> {
        self.logger.info(&format!(
            "Fetching products for category name: {}",
            params.name
        ));
        let products = self.repository.get_by_category_name(&params.name).await?;
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::{NewProduct, ProductChanges};
    use bigdecimal::BigDecimal;
    use chrono::Utc;
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: i32) -> Result<Product, RepositoryError>;
            async fn get_by_category_id(&self, category_id: i32) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_category_name(&self, name: &str) -> Result<Vec<Product>, RepositoryError>;
            async fn update_by_id(&self, id: i32, changes: &ProductChanges) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_products_matching_category_name() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_category_name()
            .withf(|name| name == "drinks")
            .returning(|_| {
                let now = Utc::now();
                Ok(vec![Product {
                    id: 3,
                    name: "Sparkling Water".to_string(),
                    stock: 30,
                    price: "5000".parse::<BigDecimal>().unwrap(),
                    category_id: 2,
                    product_date: "2023-05-20".to_string(),
                    created_at: now,
                    updated_at: now,
                }])
            });

        let use_case = GetProductsByCategoryNameUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductsByCategoryNameParams {
                name: "drinks".to_string(),
            })
            .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_return_empty_list_for_unknown_category_name() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_category_name()
            .returning(|_| Ok(vec![]));

        let use_case = GetProductsByCategoryNameUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductsByCategoryNameParams {
                name: "no-such-category".to_string(),
            })
            .await;

        assert!(result.is_ok());
        assert!(result.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_propagate_store_failure_on_category_name_lookup() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_category_name()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = GetProductsByCategoryNameUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductsByCategoryNameParams {
                name: "drinks".to_string(),
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ProductError::Repository(_)));
    }
}
