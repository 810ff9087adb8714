#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.invalid_date")]
    InvalidDate,
    #[error("product.not_found")]
    NotFound,
    #[error("repository.database_error")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
