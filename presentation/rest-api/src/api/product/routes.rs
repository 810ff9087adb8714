use std::sync::Arc;

use bigdecimal::BigDecimal;
use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::product::model::ProductChanges;
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::get_by_category_id::{
    GetProductsByCategoryIdParams, GetProductsByCategoryIdUseCase,
};
use business::domain::product::use_cases::get_by_category_name::{
    GetProductsByCategoryNameParams, GetProductsByCategoryNameUseCase,
};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::list::ListProductsUseCase;
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    CreateProductRequest, ProductEnvelope, ProductListEnvelope, ProductResponse,
    UpdateProductRequest,
};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    list_use_case: Arc<dyn ListProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    get_by_category_id_use_case: Arc<dyn GetProductsByCategoryIdUseCase>,
    get_by_category_name_use_case: Arc<dyn GetProductsByCategoryNameUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        list_use_case: Arc<dyn ListProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        get_by_category_id_use_case: Arc<dyn GetProductsByCategoryIdUseCase>,
        get_by_category_name_use_case: Arc<dyn GetProductsByCategoryNameUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            list_use_case,
            get_by_id_use_case,
            get_by_category_id_use_case,
            get_by_category_name_use_case,
            update_use_case,
        }
    }
}

/// Parses a path id: must be an integer and positive, with a distinct
/// message for each failure.
fn parse_path_id(raw: &str) -> Result<i32, ErrorResponse> {
    let id = raw
        .parse::<i32>()
        .map_err(|_| ErrorResponse::new("Id should be integer"))?;
    if id < 1 {
        return Err(ErrorResponse::new("Id should be positive"));
    }
    Ok(id)
}

/// Product management API
///
/// Endpoints for creating, reading and partially updating products.
#[OpenApi]
impl ProductApi {
    /// Create a new product
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<CreateProductRequest>) -> CreateProductResponse {
        let price = match body.0.price.parse::<BigDecimal>() {
            Ok(price) => price,
            Err(_) => {
                return CreateProductResponse::BadRequest(Json(ErrorResponse::new(
                    "Mismatch data type or malformed request",
                )));
            }
        };

        let params = CreateProductParams {
            name: body.0.name,
            stock: body.0.stock,
            price,
            category_id: body.0.category_id,
            product_date: body.0.product_date,
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Ok(Json(ProductEnvelope {
                message: "Product created".to_string(),
                data: product.into(),
            })),
            // Write path: every failure collapses to 400 with the generic message.
            Err(_) => CreateProductResponse::BadRequest(Json(ErrorResponse::new(
                "Mismatch data type or malformed request",
            ))),
        }
    }

    /// List products, optionally filtered by category
    ///
    /// `category_id` takes precedence over `category_name` when both are
    /// present; with neither, the full (non-deleted) list is returned.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_products(
        &self,
        category_id: Query<Option<String>>,
        category_name: Query<Option<String>>,
    ) -> GetProductsResponse {
        let result = if let Some(raw_category_id) = category_id.0 {
            let category_id = match raw_category_id.parse::<i32>() {
                Ok(id) => id,
                Err(_) => {
                    return GetProductsResponse::BadRequest(Json(ErrorResponse::new(
                        "Id should be integer",
                    )));
                }
            };
            self.get_by_category_id_use_case
                .execute(GetProductsByCategoryIdParams { category_id })
                .await
        } else if let Some(name) = category_name.0 {
            self.get_by_category_name_use_case
                .execute(GetProductsByCategoryNameParams { name })
                .await
        } else {
            self.list_use_case.execute().await
        };

        match result {
            Ok(products) => GetProductsResponse::Ok(Json(ProductListEnvelope {
                message: "OK".to_string(),
                data: products.into_iter().map(ProductResponse::from).collect(),
            })),
            Err(_) => {
                GetProductsResponse::BadGateway(Json(ErrorResponse::new("Server error")))
            }
        }
    }

    /// Fetch a product by id
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        let id = match parse_path_id(&id.0) {
            Ok(id) => id,
            Err(err) => return GetProductByIdResponse::BadRequest(Json(err)),
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(ProductEnvelope {
                message: "OK".to_string(),
                data: product.into(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::BadGateway(json),
                }
            }
        }
    }

    /// Partially update a product
    ///
    /// Only the supplied fields change; `updated_at` always refreshes. The
    /// updated record is re-read and returned.
    #[oai(path = "/products/:id", method = "patch", tag = "ApiTags::Products")]
    async fn update_product_by_id(
        &self,
        id: Path<String>,
        body: Json<UpdateProductRequest>,
    ) -> UpdateProductResponse {
        let id = match parse_path_id(&id.0) {
            Ok(id) => id,
            Err(err) => return UpdateProductResponse::BadRequest(Json(err)),
        };

        let changes = match ProductChanges::try_from(body.0) {
            Ok(changes) => changes,
            Err(_) => {
                return UpdateProductResponse::BadRequest(Json(ErrorResponse::new(
                    "Mismatch data type or malformed request",
                )));
            }
        };

        if let Err(err) = self
            .update_use_case
            .execute(UpdateProductParams { id, changes })
            .await
        {
            let (status, json) = err.into_error_response();
            return match status.as_u16() {
                404 => UpdateProductResponse::NotFound(json),
                // Write path: store failures collapse to 400 with the generic message.
                _ => UpdateProductResponse::BadRequest(Json(ErrorResponse::new(
                    "Mismatch data type or malformed request",
                ))),
            };
        }

        // The update returns no record; observe the result with a fresh read.
        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id })
            .await
        {
            Ok(product) => UpdateProductResponse::Ok(Json(ProductEnvelope {
                message: "Product updated".to_string(),
                data: product.into(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::BadGateway(json),
                }
            }
        }
    }
}

fn create_bad_request_handler(_: poem::Error) -> CreateProductResponse {
    CreateProductResponse::BadRequest(Json(ErrorResponse::new(
        "Mismatch data type or malformed request",
    )))
}

fn update_bad_request_handler(_: poem::Error) -> UpdateProductResponse {
    UpdateProductResponse::BadRequest(Json(ErrorResponse::new(
        "Mismatch data type or malformed request",
    )))
}

#[derive(poem_openapi::ApiResponse)]
#[oai(bad_request_handler = "create_bad_request_handler")]
pub enum CreateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductEnvelope>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductListEnvelope>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductEnvelope>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
#[oai(bad_request_handler = "update_bad_request_handler")]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductEnvelope>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reject_non_integer_path_id() {
        let err = parse_path_id("abc").unwrap_err();
        assert_eq!(err.message, "Id should be integer");
    }

    #[test]
    fn should_reject_non_positive_path_id() {
        assert_eq!(parse_path_id("0").unwrap_err().message, "Id should be positive");
        assert_eq!(parse_path_id("-3").unwrap_err().message, "Id should be positive");
    }

    #[test]
    fn should_accept_positive_path_id() {
        assert_eq!(parse_path_id("5").unwrap(), 5);
    }
}
