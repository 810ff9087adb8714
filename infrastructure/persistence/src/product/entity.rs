use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

use business::domain::product::model::Product;

/// Row shape of the `products` table. `product_date` is a DATE column and
/// is rendered back to the `YYYY-MM-DD` wire form when crossing into the
/// domain.
#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i32,
    pub category_id: i32,
    pub name: String,
    pub stock: i32,
    pub price: BigDecimal,
    pub product_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product {
            id: self.id,
            name: self.name,
            stock: self.stock,
            price: self.price,
            category_id: self.category_id,
            product_date: self.product_date.format("%Y-%m-%d").to_string(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn should_render_product_date_in_wire_form() {
        let now = Utc::now();
        let entity = ProductEntity {
            id: 1,
            category_id: 2,
            name: "Olive Oil".to_string(),
            stock: 4,
            price: "120000.00".parse().unwrap(),
            product_date: NaiveDate::from_ymd_opt(2023, 1, 5).unwrap(),
            created_at: now,
            updated_at: now,
        };

        let product = entity.into_domain();

        assert_eq!(product.product_date, "2023-01-05");
        assert_eq!(product.id, 1);
        assert_eq!(product.category_id, 2);
    }
}
