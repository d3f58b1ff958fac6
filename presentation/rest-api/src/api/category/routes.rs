use std::sync::Arc;

use poem::Request;
use poem_openapi::{
    ApiResponse, OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::category::model::CATEGORY_SORT;
use business::domain::category::use_cases::delete::{DeleteCategoryParams, DeleteCategoryUseCase};
use business::domain::category::use_cases::get_all::{
    GetAllCategoriesParams, GetAllCategoriesUseCase,
};
use business::domain::category::use_cases::get_by_id::{
    GetCategoryByIdParams, GetCategoryByIdUseCase,
};
use business::domain::category::use_cases::insert::{InsertCategoryParams, InsertCategoryUseCase};
use business::domain::category::use_cases::update::{UpdateCategoryParams, UpdateCategoryUseCase};

use crate::api::category::dto::{CategoryPageResponse, CategoryRequest, CategoryResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::pagination::{PageMetadata, page_request};
use crate::api::tags::ApiTags;

pub struct CategoryApi {
    get_all_use_case: Arc<dyn GetAllCategoriesUseCase>,
    get_by_id_use_case: Arc<dyn GetCategoryByIdUseCase>,
    insert_use_case: Arc<dyn InsertCategoryUseCase>,
    update_use_case: Arc<dyn UpdateCategoryUseCase>,
    delete_use_case: Arc<dyn DeleteCategoryUseCase>,
}

impl CategoryApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllCategoriesUseCase>,
        get_by_id_use_case: Arc<dyn GetCategoryByIdUseCase>,
        insert_use_case: Arc<dyn InsertCategoryUseCase>,
        update_use_case: Arc<dyn UpdateCategoryUseCase>,
        delete_use_case: Arc<dyn DeleteCategoryUseCase>,
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

/// Category catalog API
#[OpenApi]
impl CategoryApi {
    /// List categories
    ///
    /// Paged; `sort` is `field[,asc|desc]` over `id` or `name` (default `name,asc`).
    #[oai(path = "/categories", method = "get", tag = "ApiTags::Categories")]
    async fn find_all(
        &self,
        req: &Request,
        page: Query<Option<i64>>,
        size: Query<Option<i64>>,
        sort: Query<Option<String>>,
    ) -> FindAllCategoriesResponse {
        let result = match page_request(page.0, size.0, sort.0, &CATEGORY_SORT) {
            Ok(page_request) => {
                self.get_all_use_case
                    .execute(GetAllCategoriesParams { page_request })
                    .await
            }
            Err(err) => Err(err),
        };

        match result {
            Ok(page) => FindAllCategoriesResponse::Ok(Json(CategoryPageResponse {
                page: PageMetadata::from(&page),
                content: page
                    .content
                    .into_iter()
                    .map(CategoryResponse::from)
                    .collect(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response(req.uri().path());
                match status.as_u16() {
                    400 => FindAllCategoriesResponse::BadRequest(json),
                    404 => FindAllCategoriesResponse::NotFound(json),
                    422 => FindAllCategoriesResponse::UnprocessableEntity(json),
                    _ => FindAllCategoriesResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a category by ID
    #[oai(path = "/categories/:id", method = "get", tag = "ApiTags::Categories")]
    async fn find_by_id(&self, req: &Request, id: Path<i64>) -> FindCategoryResponse {
        match self
            .get_by_id_use_case
            .execute(GetCategoryByIdParams { id: id.0 })
            .await
        {
            Ok(category) => FindCategoryResponse::Ok(Json(category.into())),
            Err(err) => {
                let (status, json) = err.into_error_response(req.uri().path());
                match status.as_u16() {
                    400 => FindCategoryResponse::BadRequest(json),
                    404 => FindCategoryResponse::NotFound(json),
                    422 => FindCategoryResponse::UnprocessableEntity(json),
                    _ => FindCategoryResponse::InternalError(json),
                }
            }
        }
    }

    /// Create a category
    ///
    /// Any `id` in the body is ignored. The new resource's URL is returned in `Location`.
    #[oai(path = "/categories", method = "post", tag = "ApiTags::Categories")]
    async fn insert(&self, req: &Request, body: Json<CategoryRequest>) -> InsertCategoryResponse {
        let params = InsertCategoryParams { name: body.0.name };

        match self.insert_use_case.execute(params).await {
            Ok(category) => {
                let location =
                    format!("{}/{}", req.uri().path().trim_end_matches('/'), category.id);
                InsertCategoryResponse::Created(Json(category.into()), location)
            }
            Err(err) => {
                let (status, json) = err.into_error_response(req.uri().path());
                match status.as_u16() {
                    400 => InsertCategoryResponse::BadRequest(json),
                    404 => InsertCategoryResponse::NotFound(json),
                    422 => InsertCategoryResponse::UnprocessableEntity(json),
                    _ => InsertCategoryResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a category
    #[oai(path = "/categories/:id", method = "put", tag = "ApiTags::Categories")]
    async fn update(
        &self,
        req: &Request,
        id: Path<i64>,
        body: Json<CategoryRequest>,
    ) -> UpdateCategoryResponse {
        let params = UpdateCategoryParams {
            id: id.0,
            name: body.0.name,
        };

        match self.update_use_case.execute(params).await {
            Ok(category) => UpdateCategoryResponse::Ok(Json(category.into())),
            Err(err) => {
                let (status, json) = err.into_error_response(req.uri().path());
                match status.as_u16() {
                    400 => UpdateCategoryResponse::BadRequest(json),
                    404 => UpdateCategoryResponse::NotFound(json),
                    422 => UpdateCategoryResponse::UnprocessableEntity(json),
                    _ => UpdateCategoryResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a category
    ///
    /// Fails with 400 while any product still lists the category.
    #[oai(
        path = "/categories/:id",
        method = "delete",
        tag = "ApiTags::Categories"
    )]
    async fn delete(&self, req: &Request, id: Path<i64>) -> DeleteCategoryResponse {
        match self
            .delete_use_case
            .execute(DeleteCategoryParams { id: id.0 })
            .await
        {
            Ok(()) => DeleteCategoryResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response(req.uri().path());
                match status.as_u16() {
                    400 => DeleteCategoryResponse::BadRequest(json),
                    404 => DeleteCategoryResponse::NotFound(json),
                    422 => DeleteCategoryResponse::UnprocessableEntity(json),
                    _ => DeleteCategoryResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(ApiResponse)]
enum FindAllCategoriesResponse {
    #[oai(status = 200)]
    Ok(Json<CategoryPageResponse>),
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
enum FindCategoryResponse {
    #[oai(status = 200)]
    Ok(Json<CategoryResponse>),
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
enum InsertCategoryResponse {
    #[oai(status = 201)]
    Created(Json<CategoryResponse>, #[oai(header = "Location")] String),
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
enum UpdateCategoryResponse {
    #[oai(status = 200)]
    Ok(Json<CategoryResponse>),
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
enum DeleteCategoryResponse {
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
    use business::domain::shared::pagination::{Page, PageRequest, Sort};
    use poem::Route;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;
    use serde_json::json;

    fn client(api: CategoryApi) -> TestClient<Route> {
        let service = OpenApiService::new(api, "Catalog Backend API", "test");
        TestClient::new(Route::new().nest("/", service))
    }

    fn api_with(
        get_all: MockGetAllCategories,
        get_by_id: MockGetCategoryById,
        insert: MockInsertCategory,
        update: MockUpdateCategory,
        delete: MockDeleteCategory,
    ) -> CategoryApi {
        CategoryApi::new(
            Arc::new(get_all),
            Arc::new(get_by_id),
            Arc::new(insert),
            Arc::new(update),
            Arc::new(delete),
        )
    }

    fn books() -> Category {
        Category {
            id: 1,
            name: "Books".to_string(),
        }
    }

    #[tokio::test]
    async fn should_page_with_default_sort() {
        let mut get_all = MockGetAllCategories::new();
        get_all
            .expect_execute()
            .withf(|params| params.page_request == PageRequest::new(0, 12, Sort::asc("name")))
            .returning(|params| Ok(Page::new(vec![books()], &params.page_request, 3)));
        let client = client(api_with(
            get_all,
            MockGetCategoryById::new(),
            MockInsertCategory::new(),
            MockUpdateCategory::new(),
            MockDeleteCategory::new(),
        ));

        let resp = client.get("/categories").send().await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let body = json.value().object();
        body.get("totalElements").assert_i64(3);
        body.get("totalPages").assert_i64(1);
        body.get("numberOfElements").assert_i64(1);
        body.get("first").assert_bool(true);
        body.get("content")
            .array()
            .get(0)
            .object()
            .get("name")
            .assert_string("Books");
    }

    #[tokio::test]
    async fn should_reject_unknown_sort_field() {
        let client = client(api_with(
            MockGetAllCategories::new(),
            MockGetCategoryById::new(),
            MockInsertCategory::new(),
            MockUpdateCategory::new(),
            MockDeleteCategory::new(),
        ));

        let resp = client
            .get("/categories")
            .query("sort", &"password,asc")
            .send()
            .await;

        resp.assert_status(poem::http::StatusCode::UNPROCESSABLE_ENTITY);
        let json = resp.json().await;
        json.value()
            .object()
            .get("field")
            .array()
            .get(0)
            .object()
            .get("fieldName")
            .assert_string("sort");
    }

    #[tokio::test]
    async fn should_return_404_body_for_missing_category() {
        let mut get_by_id = MockGetCategoryById::new();
        get_by_id
            .expect_execute()
            .returning(|params| Err(ServiceError::not_found("Category", params.id)));
        let client = client(api_with(
            MockGetAllCategories::new(),
            get_by_id,
            MockInsertCategory::new(),
            MockUpdateCategory::new(),
            MockDeleteCategory::new(),
        ));

        let resp = client.get("/categories/1000").send().await;

        resp.assert_status(poem::http::StatusCode::NOT_FOUND);
        let json = resp.json().await;
        let body = json.value().object();
        body.get("status").assert_i64(404);
        body.get("error").assert_string("Resource Not Found");
        body.get("message").assert_string("Category 1000 not found");
        body.get("path").assert_string("/categories/1000");
        assert!(body.get_opt("field").is_none());
    }

    #[tokio::test]
    async fn should_create_and_point_to_new_category() {
        let mut insert = MockInsertCategory::new();
        insert
            .expect_execute()
            .withf(|params| params.name == "Garden")
            .returning(|params| {
                Ok(Category {
                    id: 4,
                    name: params.name,
                })
            });
        let client = client(api_with(
            MockGetAllCategories::new(),
            MockGetCategoryById::new(),
            insert,
            MockUpdateCategory::new(),
            MockDeleteCategory::new(),
        ));

        let resp = client
            .post("/categories")
            .body_json(&json!({ "id": 99, "name": "Garden" }))
            .send()
            .await;

        resp.assert_status(poem::http::StatusCode::CREATED);
        resp.assert_header("Location", "/categories/4");
        let json = resp.json().await;
        json.value().object().get("id").assert_i64(4);
    }

    #[tokio::test]
    async fn should_use_path_id_on_update() {
        let mut update = MockUpdateCategory::new();
        update
            .expect_execute()
            .withf(|params| params.id == 2 && params.name == "Gadgets")
            .returning(|params| {
                Ok(Category {
                    id: params.id,
                    name: params.name,
                })
            });
        let client = client(api_with(
            MockGetAllCategories::new(),
            MockGetCategoryById::new(),
            MockInsertCategory::new(),
            update,
            MockDeleteCategory::new(),
        ));

        let resp = client
            .put("/categories/2")
            .body_json(&json!({ "id": 7, "name": "Gadgets" }))
            .send()
            .await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        json.value().object().get("id").assert_i64(2);
    }

    #[tokio::test]
    async fn should_report_database_error_when_category_is_in_use() {
        let mut delete = MockDeleteCategory::new();
        delete.expect_execute().returning(|_| {
            Err(ServiceError::Database(
                "Category 1 is referenced by other records".into(),
            ))
        });
        let client = client(api_with(
            MockGetAllCategories::new(),
            MockGetCategoryById::new(),
            MockInsertCategory::new(),
            MockUpdateCategory::new(),
            delete,
        ));

        let resp = client.delete("/categories/1").send().await;

        resp.assert_status(poem::http::StatusCode::BAD_REQUEST);
        let json = resp.json().await;
        json.value()
            .object()
            .get("error")
            .assert_string("Database error");
    }

    #[tokio::test]
    async fn should_answer_no_content_on_delete() {
        let mut delete = MockDeleteCategory::new();
        delete.expect_execute().returning(|_| Ok(()));
        let client = client(api_with(
            MockGetAllCategories::new(),
            MockGetCategoryById::new(),
            MockInsertCategory::new(),
            MockUpdateCategory::new(),
            delete,
        ));

        let resp = client.delete("/categories/3").send().await;

        resp.assert_status(poem::http::StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn should_answer_lookup_database_error_with_matching_400() {
        let mut get_by_id = MockGetCategoryById::new();
        get_by_id
            .expect_execute()
            .returning(|_| Err(ServiceError::Database("Integrity violation".into())));
        let client = client(api_with(
            MockGetAllCategories::new(),
            get_by_id,
            MockInsertCategory::new(),
            MockUpdateCategory::new(),
            MockDeleteCategory::new(),
        ));

        let resp = client.get("/categories/1").send().await;

        resp.assert_status(poem::http::StatusCode::BAD_REQUEST);
        let json = resp.json().await;
        let body = json.value().object();
        body.get("status").assert_i64(400);
        body.get("error").assert_string("Database error");
    }

    #[tokio::test]
    async fn should_answer_internal_failure_with_matching_500() {
        let mut get_by_id = MockGetCategoryById::new();
        get_by_id
            .expect_execute()
            .returning(|_| Err(ServiceError::Internal("repository.database_error".into())));
        let client = client(api_with(
            MockGetAllCategories::new(),
            get_by_id,
            MockInsertCategory::new(),
            MockUpdateCategory::new(),
            MockDeleteCategory::new(),
        ));

        let resp = client.get("/categories/1").send().await;

        resp.assert_status(poem::http::StatusCode::INTERNAL_SERVER_ERROR);
        let json = resp.json().await;
        json.value().object().get("status").assert_i64(500);
    }
}
