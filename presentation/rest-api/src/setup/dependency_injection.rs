use std::sync::Arc;

use logger::TracingLogger;
use password::argon2_hasher::Argon2PasswordHasher;
use persistence::category::repository::CategoryRepositoryPostgres;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::role::repository::RoleRepositoryPostgres;
use persistence::user::repository::UserRepositoryPostgres;

use business::application::category::delete::DeleteCategoryUseCaseImpl;
use business::application::category::get_all::GetAllCategoriesUseCaseImpl;
use business::application::category::get_by_id::GetCategoryByIdUseCaseImpl;
use business::application::category::insert::InsertCategoryUseCaseImpl;
use business::application::category::update::UpdateCategoryUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::insert::InsertProductUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::application::user::delete::DeleteUserUseCaseImpl;
use business::application::user::get_all::GetAllUsersUseCaseImpl;
use business::application::user::get_by_id::GetUserByIdUseCaseImpl;
use business::application::user::insert::InsertUserUseCaseImpl;
use business::application::user::update::UpdateUserUseCaseImpl;
use business::application::user::validate::ValidateUserUseCaseImpl;

use crate::api::category::routes::CategoryApi;
use crate::api::health::routes::HealthApi;
use crate::api::product::routes::ProductApi;
use crate::api::user::routes::UserApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub category_api: CategoryApi,
    pub product_api: ProductApi,
    pub user_api: UserApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let category_repository = Arc::new(CategoryRepositoryPostgres::new(pool.clone()));
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let role_repository = Arc::new(RoleRepositoryPostgres::new(pool.clone()));
        let user_repository = Arc::new(UserRepositoryPostgres::new(pool));
        let hasher = Arc::new(Argon2PasswordHasher::new());

        // Category use cases
        let category_api = CategoryApi::new(
            Arc::new(GetAllCategoriesUseCaseImpl {
                repository: category_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetCategoryByIdUseCaseImpl {
                repository: category_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(InsertCategoryUseCaseImpl {
                repository: category_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdateCategoryUseCaseImpl {
                repository: category_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DeleteCategoryUseCaseImpl {
                repository: category_repository.clone(),
                logger: logger.clone(),
            }),
        );

        // Product use cases
        let product_api = ProductApi::new(
            Arc::new(GetAllProductsUseCaseImpl {
                repository: product_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetProductByIdUseCaseImpl {
                repository: product_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(InsertProductUseCaseImpl {
                repository: product_repository.clone(),
                category_repository: category_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdateProductUseCaseImpl {
                repository: product_repository.clone(),
                category_repository,
                logger: logger.clone(),
            }),
            Arc::new(DeleteProductUseCaseImpl {
                repository: product_repository,
                logger: logger.clone(),
            }),
        );

        // User use cases
        let user_api = UserApi::new(
            Arc::new(GetAllUsersUseCaseImpl {
                repository: user_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetUserByIdUseCaseImpl {
                repository: user_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(InsertUserUseCaseImpl {
                repository: user_repository.clone(),
                role_repository: role_repository.clone(),
                hasher,
                logger: logger.clone(),
            }),
            Arc::new(UpdateUserUseCaseImpl {
                repository: user_repository.clone(),
                role_repository,
                logger: logger.clone(),
            }),
            Arc::new(DeleteUserUseCaseImpl {
                repository: user_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(ValidateUserUseCaseImpl {
                repository: user_repository,
                logger,
            }),
        );

        Self {
            health_api: HealthApi::new(),
            category_api,
            product_api,
            user_api,
        }
    }
}
