use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::ServiceError;
use crate::domain::logger::Logger;
use crate::domain::shared::pagination::Page;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::get_all::{GetAllUsersParams, GetAllUsersUseCase};

pub struct GetAllUsersUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllUsersUseCase for GetAllUsersUseCaseImpl {
    async fn execute(&self, params: GetAllUsersParams) -> Result<Page<User>, ServiceError> {
        let request = params.page_request;
        self.logger.info(&format!(
            "Fetching users page {} (size {}, sort {} {})",
            request.page, request.size, request.sort.field, request.sort.direction
        ));

        let page = self.repository.find_all_paged(&request).await?;

        self.logger.info(&format!(
            "Found {} of {} users",
            page.content.len(),
            page.total_elements
        ));
        Ok(page)
    }
}
