//! Mocks and fixtures shared by the use-case tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use mockall::mock;

use crate::domain::category::model::{Category, NewCategory};
use crate::domain::category::repository::CategoryRepository;
use crate::domain::errors::{RepositoryError, ServiceError};
use crate::domain::logger::Logger;
use crate::domain::product::model::{NewProduct, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::role::model::Role;
use crate::domain::role::repository::RoleRepository;
use crate::domain::shared::pagination::{Page, PageRequest};
use crate::domain::user::model::{NewUser, User};
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::PasswordHasher;

mock! {
    pub CategoryRepo {}

    #[async_trait]
    impl CategoryRepository for CategoryRepo {
        async fn find_all_paged(
            &self,
            request: &PageRequest,
        ) -> Result<Page<Category>, RepositoryError>;
        async fn get_by_id(&self, id: i64) -> Result<Category, RepositoryError>;
        async fn insert(&self, category: &NewCategory) -> Result<Category, RepositoryError>;
        async fn update(&self, category: &Category) -> Result<Category, RepositoryError>;
        async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn find_all_paged(
            &self,
            request: &PageRequest,
        ) -> Result<Page<Product>, RepositoryError>;
        async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError>;
        async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
        async fn update(&self, product: &Product) -> Result<Product, RepositoryError>;
        async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub UserRepo {}

    #[async_trait]
    impl UserRepository for UserRepo {
        async fn find_all_paged(
            &self,
            request: &PageRequest,
        ) -> Result<Page<User>, RepositoryError>;
        async fn get_by_id(&self, id: i64) -> Result<User, RepositoryError>;
        async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
        async fn insert(&self, user: &NewUser) -> Result<User, RepositoryError>;
        async fn update(&self, user: &User) -> Result<User, RepositoryError>;
        async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub RoleRepo {}

    #[async_trait]
    impl RoleRepository for RoleRepo {
        async fn get_by_id(&self, id: i64) -> Result<Role, RepositoryError>;
    }
}

mock! {
    pub Hasher {}

    #[async_trait]
    impl PasswordHasher for Hasher {
        async fn hash(&self, password: &str) -> Result<String, ServiceError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn electronics() -> Category {
    Category {
        id: 1,
        name: "Electronics".to_string(),
    }
}

pub fn computers() -> Category {
    Category {
        id: 3,
        name: "Computers".to_string(),
    }
}

/// The phone used throughout the product tests.
pub fn phone(id: i64) -> Product {
    Product {
        id,
        name: "Phone".to_string(),
        description: Some("Good Phone".to_string()),
        price: 800.0,
        img_url: Some("https://img.com/img.png".to_string()),
        date: Utc.with_ymd_and_hms(2020, 10, 20, 3, 0, 0).unwrap(),
        categories: vec![electronics()],
    }
}

pub fn operator_role() -> Role {
    Role {
        id: 1,
        authority: "ROLE_OPERATOR".to_string(),
    }
}

pub fn admin_role() -> Role {
    Role {
        id: 2,
        authority: "ROLE_ADMIN".to_string(),
    }
}

pub fn maria(id: i64) -> User {
    User {
        id,
        first_name: "Maria".to_string(),
        last_name: "Green".to_string(),
        email: "maria@gmail.com".to_string(),
        password_hash: "$argon2id$stored".to_string(),
        roles: vec![operator_role()],
    }
}
