use std::sync::Arc;

use poem::Request;
use poem_openapi::{
    ApiResponse, OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::user::model::USER_SORT;
use business::domain::user::use_cases::delete::{DeleteUserParams, DeleteUserUseCase};
use business::domain::user::use_cases::get_all::{GetAllUsersParams, GetAllUsersUseCase};
use business::domain::user::use_cases::get_by_id::{GetUserByIdParams, GetUserByIdUseCase};
use business::domain::user::use_cases::insert::{InsertUserParams, InsertUserUseCase};
use business::domain::user::use_cases::update::{UpdateUserParams, UpdateUserUseCase};
use business::domain::user::use_cases::validate::ValidateUserUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::pagination::{PageMetadata, page_request};
use crate::api::tags::ApiTags;
use crate::api::user::dto::{
    UserInsertRequest, UserPageResponse, UserResponse, UserUpdateRequest, role_ids,
};

pub struct UserApi {
    get_all_use_case: Arc<dyn GetAllUsersUseCase>,
    get_by_id_use_case: Arc<dyn GetUserByIdUseCase>,
    insert_use_case: Arc<dyn InsertUserUseCase>,
    update_use_case: Arc<dyn UpdateUserUseCase>,
    delete_use_case: Arc<dyn DeleteUserUseCase>,
    validate_use_case: Arc<dyn ValidateUserUseCase>,
}

impl UserApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllUsersUseCase>,
        get_by_id_use_case: Arc<dyn GetUserByIdUseCase>,
        insert_use_case: Arc<dyn InsertUserUseCase>,
        update_use_case: Arc<dyn UpdateUserUseCase>,
        delete_use_case: Arc<dyn DeleteUserUseCase>,
        validate_use_case: Arc<dyn ValidateUserUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_by_id_use_case,
            insert_use_case,
            update_use_case,
            delete_use_case,
            validate_use_case,
        }
    }
}

/// User management API
///
/// Writes are validated (field rules and email uniqueness) before they reach the service.
#[OpenApi]
impl UserApi {
    /// List users
    ///
    /// Paged; `sort` is `field[,asc|desc]` over `id`, `firstName`, `lastName` or `email`
    /// (default `firstName,asc`).
    #[oai(path = "/users", method = "get", tag = "ApiTags::Users")]
    async fn find_all(
        &self,
        req: &Request,
        page: Query<Option<i64>>,
        size: Query<Option<i64>>,
        sort: Query<Option<String>>,
    ) -> FindAllUsersResponse {
        let result = match page_request(page.0, size.0, sort.0, &USER_SORT) {
            Ok(page_request) => {
                self.get_all_use_case
                    .execute(GetAllUsersParams { page_request })
                    .await
            }
            Err(err) => Err(err),
        };

        match result {
            Ok(page) => FindAllUsersResponse::Ok(Json(UserPageResponse {
                page: PageMetadata::from(&page),
                content: page.content.into_iter().map(UserResponse::from).collect(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response(req.uri().path());
                match status.as_u16() {
                    400 => FindAllUsersResponse::BadRequest(json),
                    404 => FindAllUsersResponse::NotFound(json),
                    422 => FindAllUsersResponse::UnprocessableEntity(json),
                    _ => FindAllUsersResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a user by ID
    #[oai(path = "/users/:id", method = "get", tag = "ApiTags::Users")]
    async fn find_by_id(&self, req: &Request, id: Path<i64>) -> FindUserResponse {
        match self
            .get_by_id_use_case
            .execute(GetUserByIdParams { id: id.0 })
            .await
        {
            Ok(user) => FindUserResponse::Ok(Json(user.into())),
            Err(err) => {
                let (status, json) = err.into_error_response(req.uri().path());
                match status.as_u16() {
                    400 => FindUserResponse::BadRequest(json),
                    404 => FindUserResponse::NotFound(json),
                    422 => FindUserResponse::UnprocessableEntity(json),
                    _ => FindUserResponse::InternalError(json),
                }
            }
        }
    }

    /// Create a user
    ///
    /// The password is hashed before it is stored and is never returned.
    #[oai(path = "/users", method = "post", tag = "ApiTags::Users")]
    async fn insert(&self, req: &Request, body: Json<UserInsertRequest>) -> InsertUserResponse {
        let role_ids = role_ids(&body.0.roles);
        let params = InsertUserParams {
            first_name: body.0.first_name,
            last_name: body.0.last_name,
            email: body.0.email,
            password: body.0.password,
            role_ids,
        };

        let result = match self.validate_use_case.validate_insert(&params).await {
            Ok(()) => self.insert_use_case.execute(params).await,
            Err(err) => Err(err),
        };

        match result {
            Ok(user) => {
                let location = format!("{}/{}", req.uri().path().trim_end_matches('/'), user.id);
                InsertUserResponse::Created(Json(user.into()), location)
            }
            Err(err) => {
                let (status, json) = err.into_error_response(req.uri().path());
                match status.as_u16() {
                    400 => InsertUserResponse::BadRequest(json),
                    404 => InsertUserResponse::NotFound(json),
                    422 => InsertUserResponse::UnprocessableEntity(json),
                    _ => InsertUserResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a user
    ///
    /// Replaces names, email and roles; the stored password is kept.
    #[oai(path = "/users/:id", method = "put", tag = "ApiTags::Users")]
    async fn update(
        &self,
        req: &Request,
        id: Path<i64>,
        body: Json<UserUpdateRequest>,
    ) -> UpdateUserResponse {
        let role_ids = role_ids(&body.0.roles);
        let params = UpdateUserParams {
            id: id.0,
            first_name: body.0.first_name,
            last_name: body.0.last_name,
            email: body.0.email,
            role_ids,
        };

        let result = match self.validate_use_case.validate_update(&params).await {
            Ok(()) => self.update_use_case.execute(params).await,
            Err(err) => Err(err),
        };

        match result {
            Ok(user) => UpdateUserResponse::Ok(Json(user.into())),
            Err(err) => {
                let (status, json) = err.into_error_response(req.uri().path());
                match status.as_u16() {
                    400 => UpdateUserResponse::BadRequest(json),
                    404 => UpdateUserResponse::NotFound(json),
                    422 => UpdateUserResponse::UnprocessableEntity(json),
                    _ => UpdateUserResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a user
    #[oai(path = "/users/:id", method = "delete", tag = "ApiTags::Users")]
    async fn delete(&self, req: &Request, id: Path<i64>) -> DeleteUserResponse {
        match self
            .delete_use_case
            .execute(DeleteUserParams { id: id.0 })
            .await
        {
            Ok(()) => DeleteUserResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response(req.uri().path());
                match status.as_u16() {
                    400 => DeleteUserResponse::BadRequest(json),
                    404 => DeleteUserResponse::NotFound(json),
                    422 => DeleteUserResponse::UnprocessableEntity(json),
                    _ => DeleteUserResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(ApiResponse)]
enum FindAllUsersResponse {
    #[oai(status = 200)]
    Ok(Json<UserPageResponse>),
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
enum FindUserResponse {
    #[oai(status = 200)]
    Ok(Json<UserResponse>),
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
enum InsertUserResponse {
    #[oai(status = 201)]
    Created(Json<UserResponse>, #[oai(header = "Location")] String),
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
enum UpdateUserResponse {
    #[oai(status = 200)]
    Ok(Json<UserResponse>),
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
enum DeleteUserResponse {
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
