use bigdecimal::{BigDecimal, ParseBigDecimalError};
use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::product::model::{Product, ProductChanges};

/// Create payload. `price` travels as a decimal string and `product_date`
/// as `YYYY-MM-DD`.
#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    pub name: String,
    pub stock: i32,
    /// Price as a decimal string, e.g. "15000.50"
    pub price: String,
    pub category_id: i32,
    /// Calendar date in `YYYY-MM-DD` form
    pub product_date: String,
}

/// Partial update payload: absent fields are left untouched. There is no
/// `id` field; the path parameter is authoritative.
#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub stock: Option<i32>,
    /// Price as a decimal string, e.g. "15000.50"
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub category_id: Option<i32>,
    /// Calendar date in `YYYY-MM-DD` form
    #[oai(skip_serializing_if_is_none)]
    pub product_date: Option<String>,
}

impl TryFrom<UpdateProductRequest> for ProductChanges {
    type Error = ParseBigDecimalError;

    fn try_from(request: UpdateProductRequest) -> Result<Self, Self::Error> {
        let price = request
            .price
            .map(|raw| raw.parse::<BigDecimal>())
            .transpose()?;

        Ok(Self {
            name: request.name,
            stock: request.stock,
            price,
            category_id: request.category_id,
            product_date: request.product_date,
        })
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub stock: i32,
    /// Price as a decimal string
    pub price: String,
    pub category_id: i32,
    /// Calendar date in `YYYY-MM-DD` form
    pub product_date: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            stock: product.stock,
            price: product.price.to_string(),
            category_id: product.category_id,
            product_date: product.product_date,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// Success envelope for a single record: `{"message": ..., "data": {...}}`.
#[derive(Debug, Clone, Object)]
pub struct ProductEnvelope {
    pub message: String,
    pub data: ProductResponse,
}

/// Success envelope for a list: `{"message": ..., "data": [...]}`.
#[derive(Debug, Clone, Object)]
pub struct ProductListEnvelope {
    pub message: String,
    pub data: Vec<ProductResponse>,
}
