use std::sync::Arc;

use poem::Request;
use poem_openapi::{
    ApiResponse, OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::product::model::PRODUCT_SORT;
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::insert::{InsertProductParams, InsertProductUseCase};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::pagination::{PageMetadata, page_request};
use crate::api::product::dto::{ProductPageResponse, ProductRequest, ProductResponse};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    insert_use_case: Arc<dyn InsertProductUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        insert_use_case: Arc<dyn InsertProductUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_by_id_use_case,
            insert_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Product catalog API
///
/// Products carry their full category list; writes replace that list with the
/// categories referenced in the body.
#[OpenApi]
impl ProductApi {
    /// List products
    ///
    /// Paged; `sort` is `field[,asc|desc]` over `id`, `name`, `price` or `date`
    /// (default `name,asc`).
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn find_all(
        &self,
        req: &Request,
        page: Query<Option<i64>>,
        size: Query<Option<i64>>,
        sort: Query<Option<String>>,
    ) -> FindAllProductsResponse {
        let result = match page_request(page.0, size.0, sort.0, &PRODUCT_SORT) {
            Ok(page_request) => {
                self.get_all_use_case
                    .execute(GetAllProductsParams { page_request })
                    .await
            }
            Err(err) => Err(err),
        };

        match result {
            Ok(page) => FindAllProductsResponse::Ok(Json(ProductPageResponse {
                page: PageMetadata::from(&page),
                content: page
                    .content
                    .into_iter()
                    .map(ProductResponse::from)
                    .collect(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response(req.uri().path());
                match status.as_u16() {
                    400 => FindAllProductsResponse::BadRequest(json),
                    404 => FindAllProductsResponse::NotFound(json),
                    422 => FindAllProductsResponse::UnprocessableEntity(json),
                    _ => FindAllProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn find_by_id(&self, req: &Request, id: Path<i64>) -> FindProductResponse {
        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: id.0 })
            .await
        {
            Ok(product) => FindProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response(req.uri().path());
                match status.as_u16() {
                    400 => FindProductResponse::BadRequest(json),
                    404 => FindProductResponse::NotFound(json),
                    422 => FindProductResponse::UnprocessableEntity(json),
                    _ => FindProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Create a product
    ///
    /// Every referenced category must exist, otherwise nothing is stored and 404 is returned.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn insert(&self, req: &Request, body: Json<ProductRequest>) -> InsertProductResponse {
        let category_ids = body.0.category_ids();
        let params = InsertProductParams {
            name: body.0.name,
            description: body.0.description,
            price: body.0.price,
            img_url: body.0.img_url,
            date: body.0.date,
            category_ids,
        };

        match self.insert_use_case.execute(params).await {
            Ok(product) => {
                let location = format!("{}/{}", req.uri().path().trim_end_matches('/'), product.id);
                InsertProductResponse::Created(Json(product.into()), location)
            }
            Err(err) => {
                let (status, json) = err.into_error_response(req.uri().path());
                match status.as_u16() {
                    400 => InsertProductResponse::BadRequest(json),
                    404 => InsertProductResponse::NotFound(json),
                    422 => InsertProductResponse::UnprocessableEntity(json),
                    _ => InsertProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update(
        &self,
        req: &Request,
        id: Path<i64>,
        body: Json<ProductRequest>,
    ) -> UpdateProductResponse {
        let category_ids = body.0.category_ids();
        let params = UpdateProductParams {
            id: id.0,
            name: body.0.name,
            description: body.0.description,
            price: body.0.price,
            img_url: body.0.img_url,
            date: body.0.date,
            category_ids,
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response(req.uri().path());
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound(json),
                    422 => UpdateProductResponse::UnprocessableEntity(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete(&self, req: &Request, id: Path<i64>) -> DeleteProductResponse {
        match self
            .delete_use_case
            .execute(DeleteProductParams { id: id.0 })
            .await
        {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response(req.uri().path());
                match status.as_u16() {
                    400 => DeleteProductResponse::BadRequest(json),
                    404 => DeleteProductResponse::NotFound(json),
                    422 => DeleteProductResponse::UnprocessableEntity(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(ApiResponse)]
enum FindAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductPageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
enum FindProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
enum InsertProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>, #[oai(header = "Location")] String),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::*;
    use business::domain::category::model::Category;
    use business::domain::errors::ServiceError;
    use business::domain::product::model::Product;
    use business::domain::shared::pagination::{Page, PageRequest, Sort};
    use business::domain::shared::validation::FieldMessage;
    use chrono::TimeZone;
    use poem::Route;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;
    use serde_json::json;

    #[derive(Default)]
    struct Mocks {
        get_all: MockGetAllProducts,
        get_by_id: MockGetProductById,
        insert: MockInsertProduct,
        update: MockUpdateProduct,
        delete: MockDeleteProduct,
    }

    impl Mocks {
        fn client(self) -> TestClient<Route> {
            let api = ProductApi::new(
                Arc::new(self.get_all),
                Arc::new(self.get_by_id),
                Arc::new(self.insert),
                Arc::new(self.update),
                Arc::new(self.delete),
            );
            let service = OpenApiService::new(api, "Catalog Backend API", "test");
            TestClient::new(Route::new().nest("/", service))
        }
    }

    fn electronics() -> Category {
        Category {
            id: 1,
            name: "Electronics".to_string(),
        }
    }

    fn phone(id: i64) -> Product {
        Product {
            id,
            name: "Phone".to_string(),
            description: Some("Good Phone".to_string()),
            price: 800.0,
            img_url: Some("https://img.com/img.png".to_string()),
            date: chrono::Utc.with_ymd_and_hms(2020, 10, 20, 3, 0, 0).unwrap(),
            categories: vec![electronics()],
        }
    }

    fn phone_body() -> serde_json::Value {
        json!({
            "id": 500,
            "name": "Phone",
            "description": "Good Phone",
            "price": 800.0,
            "imgUrl": "https://img.com/img.png",
            "date": "2020-10-20T03:00:00Z",
            "categories": [{ "id": 1 }]
        })
    }

    #[tokio::test]
    async fn should_create_phone_with_resolved_category() {
        let mut mocks = Mocks::default();
        mocks
            .insert
            .expect_execute()
            .withf(|p| p.name == "Phone" && p.price == 800.0 && p.category_ids == vec![1])
            .returning(|_| Ok(phone(26)));
        let client = mocks.client();

        let resp = client
            .post("/products")
            .body_json(&phone_body())
            .send()
            .await;

        resp.assert_status(StatusCode::CREATED);
        resp.assert_header("Location", "/products/26");
        let json = resp.json().await;
        let body = json.value().object();
        body.get("id").assert_i64(26);
        body.get("name").assert_string("Phone");
        body.get("price").assert_f64(800.0);
        body.get("imgUrl").assert_string("https://img.com/img.png");
        let category = body.get("categories").array().get(0).object();
        category.get("id").assert_i64(1);
        category.get("name").assert_string("Electronics");
    }

    #[tokio::test]
    async fn should_report_missing_category_as_not_found() {
        let mut mocks = Mocks::default();
        mocks
            .insert
            .expect_execute()
            .returning(|_| Err(ServiceError::not_found("Category", 1)));
        let client = mocks.client();

        let resp = client
            .post("/products")
            .body_json(&phone_body())
            .send()
            .await;

        resp.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_list_invalid_fields() {
        let mut mocks = Mocks::default();
        mocks.insert.expect_execute().returning(|_| {
            Err(ServiceError::Validation(vec![
                FieldMessage::new("name", "Required field"),
                FieldMessage::new("price", "Price must be a positive value"),
            ]))
        });
        let client = mocks.client();

        let resp = client
            .post("/products")
            .body_json(&json!({ "name": " ", "price": -1.0 }))
            .send()
            .await;

        resp.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let json = resp.json().await;
        let body = json.value().object();
        body.get("error").assert_string("Validation Exception");
        body.get("path").assert_string("/products");
        let fields = body.get("field").array();
        fields.assert_len(2);
        fields
            .get(1)
            .object()
            .get("fieldName")
            .assert_string("price");
    }

    #[tokio::test]
    async fn should_page_products_by_requested_sort() {
        let mut mocks = Mocks::default();
        mocks
            .get_all
            .expect_execute()
            .withf(|p| p.page_request == PageRequest::new(0, 12, Sort::asc("name")))
            .returning(|p| Ok(Page::new(vec![phone(3)], &p.page_request, 25)));
        let client = mocks.client();

        let resp = client
            .get("/products")
            .query("page", &0)
            .query("size", &12)
            .query("sort", &"name,asc")
            .send()
            .await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let body = json.value().object();
        body.get("totalElements").assert_i64(25);
        body.get("totalPages").assert_i64(3);
        body.get("number").assert_i64(0);
        body.get("size").assert_i64(12);
        body.get("last").assert_bool(false);
    }

    #[tokio::test]
    async fn should_update_with_path_id() {
        let mut mocks = Mocks::default();
        mocks
            .update
            .expect_execute()
            .withf(|p| p.id == 1 && p.category_ids == vec![1])
            .returning(|p| Ok(phone(p.id)));
        let client = mocks.client();

        let resp = client
            .put("/products/1")
            .body_json(&phone_body())
            .send()
            .await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        json.value().object().get("id").assert_i64(1);
    }

    #[tokio::test]
    async fn should_return_404_when_updating_missing_product() {
        let mut mocks = Mocks::default();
        mocks
            .update
            .expect_execute()
            .returning(|p| Err(ServiceError::not_found("Product", p.id)));
        let client = mocks.client();

        let resp = client
            .put("/products/1000")
            .body_json(&phone_body())
            .send()
            .await;

        resp.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_delete_then_report_not_found() {
        let mut mocks = Mocks::default();
        let mut seq = mockall::Sequence::new();
        mocks
            .delete
            .expect_execute()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        mocks
            .delete
            .expect_execute()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|p| Err(ServiceError::not_found("Product", p.id)));
        let client = mocks.client();

        client
            .delete("/products/1")
            .send()
            .await
            .assert_status(StatusCode::NO_CONTENT);
        client
            .delete("/products/1")
            .send()
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_report_dependent_product_as_database_error() {
        let mut mocks = Mocks::default();
        mocks.delete.expect_execute().returning(|_| {
            Err(ServiceError::Database("Product 1 is referenced by other records".into()))
        });
        let client = mocks.client();

        let resp = client.delete("/products/1").send().await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        let json = resp.json().await;
        json.value()
            .object()
            .get("error")
            .assert_string("Database error");
    }

    #[tokio::test]
    async fn should_answer_listing_database_error_with_matching_400() {
        let mut mocks = Mocks::default();
        mocks
            .get_all
            .expect_execute()
            .returning(|_| Err(ServiceError::Database("Integrity violation".into())));
        let client = mocks.client();

        let resp = client.get("/products").send().await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        let json = resp.json().await;
        json.value().object().get("status").assert_i64(400);
    }
}
