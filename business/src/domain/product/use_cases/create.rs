use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct CreateProductParams {
    pub name: String,
    pub stock: i32,
    pub price: BigDecimal,
    pub category_id: i32,
    /// Calendar date in `YYYY-MM-DD` form; rejected before any write when
    /// unparseable.
    pub product_date: String,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
