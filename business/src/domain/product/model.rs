use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};

/// A persisted product. `id`, `created_at` and `updated_at` are assigned by
/// the store; `product_date` carries the wire form `YYYY-MM-DD`.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub stock: i32,
    pub price: BigDecimal,
    pub category_id: i32,
    pub product_date: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Product fields known before the store assigns id and timestamps.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub stock: i32,
    pub price: BigDecimal,
    pub category_id: i32,
    pub product_date: String,
}

/// Closed set of updatable columns for a partial update. Absent fields are
/// left untouched; `id`, `created_at` and `deleted_at` are never updatable.
#[derive(Debug, Clone, Default)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub stock: Option<i32>,
    pub price: Option<BigDecimal>,
    pub category_id: Option<i32>,
    pub product_date: Option<String>,
}

impl ProductChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.stock.is_none()
            && self.price.is_none()
            && self.category_id.is_none()
            && self.product_date.is_none()
    }
}
