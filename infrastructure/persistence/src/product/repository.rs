use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product, ProductChanges};
use business::domain::product::repository::ProductRepository;

use super::entity::ProductEntity;

const PRODUCT_COLUMNS: &str =
    "id, category_id, name, stock, price, product_date, created_at, updated_at";

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn parse_product_date(raw: &str) -> Result<NaiveDate, RepositoryError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| RepositoryError::InvalidDate)
}

/// Builds the UPDATE statement for a partial update. Column names come from
/// the closed fieldset only; values are bound positionally in declaration
/// order, with the id bound last. `updated_at` is always refreshed, even for
/// an empty fieldset.
fn build_update_sql(changes: &ProductChanges) -> String {
    let mut assignments: Vec<String> = Vec::new();
    if changes.name.is_some() {
        assignments.push(format!("name = ${}", assignments.len() + 1));
    }
    if changes.stock.is_some() {
        assignments.push(format!("stock = ${}", assignments.len() + 1));
    }
    if changes.price.is_some() {
        assignments.push(format!("price = ${}", assignments.len() + 1));
    }
    if changes.category_id.is_some() {
        assignments.push(format!("category_id = ${}", assignments.len() + 1));
    }
    if changes.product_date.is_some() {
        assignments.push(format!("product_date = ${}", assignments.len() + 1));
    }
    assignments.push("updated_at = NOW()".to_string());

    format!(
        "UPDATE products SET {} WHERE id = ${}",
        assignments.join(", "),
        assignments.len()
    )
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let product_date = parse_product_date(&product.product_date)?;

        let entity = sqlx::query_as::<_, ProductEntity>(
            "INSERT INTO products (name, stock, price, category_id, product_date, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, NOW(), NOW()) \
             RETURNING id, category_id, name, stock, price, product_date, created_at, updated_at",
        )
        .bind(&product.name)
        .bind(product.stock)
        .bind(&product.price)
        .bind(product.category_id)
        .bind(product_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.into_domain())
    }

    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE deleted_at IS NULL",
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Product, RepositoryError> {
        // No deleted_at filter here: direct lookups also see soft-deleted rows.
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1",
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn get_by_category_id(&self, category_id: i32) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE category_id = $1 AND deleted_at IS NULL",
        ))
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_category_name(&self, name: &str) -> Result<Vec<Product>, RepositoryError> {
        // An unknown name resolves to NULL and matches no rows, so the result
        // is an empty list rather than an error.
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products \
             WHERE category_id = (SELECT id FROM categories WHERE name = $1) \
             AND deleted_at IS NULL",
        ))
        .bind(name)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn update_by_id(
        &self,
        id: i32,
        changes: &ProductChanges,
    ) -> Result<(), RepositoryError> {
        // Existence check and update are separate statements with no
        // transaction; a concurrent delete between them is not guarded.
        sqlx::query_as::<_, (i32,)>("SELECT id FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?
            .ok_or(RepositoryError::NotFound)?;

        let product_date = changes
            .product_date
            .as_deref()
            .map(parse_product_date)
            .transpose()?;

        let sql = build_update_sql(changes);
        let mut query = sqlx::query(&sql);
        if let Some(name) = &changes.name {
            query = query.bind(name);
        }
        if let Some(stock) = changes.stock {
            query = query.bind(stock);
        }
        if let Some(price) = &changes.price {
            query = query.bind(price);
        }
        if let Some(category_id) = changes.category_id {
            query = query.bind(category_id);
        }
        if let Some(date) = product_date {
            query = query.bind(date);
        }

        query
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
