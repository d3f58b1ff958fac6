use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::ServiceError;
use crate::domain::logger::Logger;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::delete::{DeleteUserParams, DeleteUserUseCase};

pub struct DeleteUserUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteUserUseCase for DeleteUserUseCaseImpl {
    async fn execute(&self, params: DeleteUserParams) -> Result<(), ServiceError> {
        self.logger.info(&format!("Deleting user: {}", params.id));

        self.repository
            .get_by_id(params.id)
            .await
            .map_err(ServiceError::lookup("User", params.id))?;

        self.repository.delete(params.id).await.map_err(|e| {
            self.logger
                .warn(&format!("User {} delete rejected: {}", params.id, e));
            ServiceError::from_delete("User", params.id, e)
        })?;

        self.logger.info(&format!("User deleted: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::test_support::{MockUserRepo, maria, mock_logger};

    #[tokio::test]
    async fn should_delete_user_when_exists() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo.expect_get_by_id().returning(|id| Ok(maria(id)));
        mock_repo.expect_delete().times(1).returning(|_| Ok(()));

        let use_case = DeleteUserUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        assert!(use_case.execute(DeleteUserParams { id: 1 }).await.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_user_missing() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        mock_repo.expect_delete().never();

        let use_case = DeleteUserUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteUserParams { id: 1000 }).await;

        assert!(matches!(result, Err(ServiceError::ResourceNotFound(_))));
    }

    #[tokio::test]
    async fn should_surface_other_store_failures_as_database_error() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo.expect_get_by_id().returning(|id| Ok(maria(id)));
        mock_repo
            .expect_delete()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = DeleteUserUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteUserParams { id: 1 }).await;

        assert!(matches!(result, Err(ServiceError::Database(_))));
    }
}
