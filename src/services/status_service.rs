// src/services/status_service.rs

use crate::{common::error::AppError, db::StatusRepository, models::status::Status};

#[derive(Clone)]
pub struct StatusService {
    repo: StatusRepository,
}

impl StatusService {
    pub fn new(repo: StatusRepository) -> Self {
        Self { repo }
    }

    pub async fn list_statuses(&self) -> Result<Vec<Status>, AppError> {
        self.repo.list().await
    }
}
