use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::list::ListProductsUseCase;

pub struct ListProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListProductsUseCase for ListProductsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Product>, ProductError> {
        self.logger.info("Listing products");
        let products = self.repository.get_all().await?;
        self.logger
            .info(&format!("Found {} products", products.len()));
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

    fn sample_product(id: i32) -> Product {
        let now = Utc::now();
        Product {
            id,
            name: "Instant Noodles".to_string(),
            stock: 24,
            price: "3500".parse::<BigDecimal>().unwrap(),
            category_id: 2,
            product_date: "2023-02-01".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn should_return_all_products() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|| Ok(vec![sample_product(1), sample_product(2)]));

        let use_case = ListProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_return_empty_list_when_store_is_empty() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_all().returning(|| Ok(vec![]));

        let use_case = ListProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(result.is_ok());
        assert!(result.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_propagate_store_failure_on_list() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|| Err(RepositoryError::DatabaseError));

        let use_case = ListProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ProductError::Repository(_)));
    }
}
