//! Use-case mocks for the route tests.

use async_trait::async_trait;
use mockall::mock;

use business::domain::category::model::Category;
use business::domain::category::use_cases::delete::{DeleteCategoryParams, DeleteCategoryUseCase};
use business::domain::category::use_cases::get_all::{
    GetAllCategoriesParams, GetAllCategoriesUseCase,
};
use business::domain::category::use_cases::get_by_id::{
    GetCategoryByIdParams, GetCategoryByIdUseCase,
};
use business::domain::category::use_cases::insert::{InsertCategoryParams, InsertCategoryUseCase};
use business::domain::category::use_cases::update::{UpdateCategoryParams, UpdateCategoryUseCase};
use business::domain::errors::ServiceError;
use business::domain::product::model::Product;
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::insert::{InsertProductParams, InsertProductUseCase};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::shared::pagination::Page;
use business::domain::user::model::User;
use business::domain::user::use_cases::delete::{DeleteUserParams, DeleteUserUseCase};
use business::domain::user::use_cases::get_all::{GetAllUsersParams, GetAllUsersUseCase};
use business::domain::user::use_cases::get_by_id::{GetUserByIdParams, GetUserByIdUseCase};
use business::domain::user::use_cases::insert::{InsertUserParams, InsertUserUseCase};
use business::domain::user::use_cases::update::{UpdateUserParams, UpdateUserUseCase};
use business::domain::user::use_cases::validate::ValidateUserUseCase;

mock! {
    pub GetAllCategories {}
    #[async_trait]
    impl GetAllCategoriesUseCase for GetAllCategories {
        async fn execute(
            &self,
            params: GetAllCategoriesParams,
        ) -> Result<Page<Category>, ServiceError>;
    }
}

mock! {
    pub GetCategoryById {}
    #[async_trait]
    impl GetCategoryByIdUseCase for GetCategoryById {
        async fn execute(&self, params: GetCategoryByIdParams) -> Result<Category, ServiceError>;
    }
}

mock! {
    pub InsertCategory {}
    #[async_trait]
    impl InsertCategoryUseCase for InsertCategory {
        async fn execute(&self, params: InsertCategoryParams) -> Result<Category, ServiceError>;
    }
}

mock! {
    pub UpdateCategory {}
    #[async_trait]
    impl UpdateCategoryUseCase for UpdateCategory {
        async fn execute(&self, params: UpdateCategoryParams) -> Result<Category, ServiceError>;
    }
}

mock! {
    pub DeleteCategory {}
    #[async_trait]
    impl DeleteCategoryUseCase for DeleteCategory {
        async fn execute(&self, params: DeleteCategoryParams) -> Result<(), ServiceError>;
    }
}

mock! {
    pub GetAllProducts {}
    #[async_trait]
    impl GetAllProductsUseCase for GetAllProducts {
        async fn execute(
            &self,
            params: GetAllProductsParams,
        ) -> Result<Page<Product>, ServiceError>;
    }
}

mock! {
    pub GetProductById {}
    #[async_trait]
    impl GetProductByIdUseCase for GetProductById {
        async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ServiceError>;
    }
}

mock! {
    pub InsertProduct {}
    #[async_trait]
    impl InsertProductUseCase for InsertProduct {
        async fn execute(&self, params: InsertProductParams) -> Result<Product, ServiceError>;
    }
}

mock! {
    pub UpdateProduct {}
    #[async_trait]
    impl UpdateProductUseCase for UpdateProduct {
        async fn execute(&self, params: UpdateProductParams) -> Result<Product, ServiceError>;
    }
}

mock! {
    pub DeleteProduct {}
    #[async_trait]
    impl DeleteProductUseCase for DeleteProduct {
        async fn execute(&self, params: DeleteProductParams) -> Result<(), ServiceError>;
    }
}

mock! {
    pub GetAllUsers {}
    #[async_trait]
    impl GetAllUsersUseCase for GetAllUsers {
        async fn execute(&self, params: GetAllUsersParams) -> Result<Page<User>, ServiceError>;
    }
}

mock! {
    pub GetUserById {}
    #[async_trait]
    impl GetUserByIdUseCase for GetUserById {
        async fn execute(&self, params: GetUserByIdParams) -> Result<User, ServiceError>;
    }
}

mock! {
    pub InsertUser {}
    #[async_trait]
    impl InsertUserUseCase for InsertUser {
        async fn execute(&self, params: InsertUserParams) -> Result<User, ServiceError>;
    }
}

mock! {
    pub UpdateUser {}
    #[async_trait]
    impl UpdateUserUseCase for UpdateUser {
        async fn execute(&self, params: UpdateUserParams) -> Result<User, ServiceError>;
    }
}

mock! {
    pub DeleteUser {}
    #[async_trait]
    impl DeleteUserUseCase for DeleteUser {
        async fn execute(&self, params: DeleteUserParams) -> Result<(), ServiceError>;
    }
}

mock! {
    pub ValidateUser {}
    #[async_trait]
    impl ValidateUserUseCase for ValidateUser {
        async fn validate_insert(&self, params: &InsertUserParams) -> Result<(), ServiceError>;
        async fn validate_update(&self, params: &UpdateUserParams) -> Result<(), ServiceError>;
    }
}
