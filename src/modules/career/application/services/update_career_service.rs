use async_trait::async_trait;

use crate::career::{
    application::{
        ports::{incoming::use_cases::UpdateCareerUseCase, outgoing::CareerRepository},
        results::CareerResult,
    },
    domain::entities::{Career, CareerChanges},
};

#[derive(Debug, Clone)]
pub struct UpdateCareerService<R>
where
    R: CareerRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateCareerService<R>
where
    R: CareerRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateCareerUseCase for UpdateCareerService<R>
where
    R: CareerRepository + Send + Sync,
{
    async fn execute(&self, changes: CareerChanges) -> CareerResult<Career> {
        match self.repository.update(changes).await {
            Ok(Some(career)) => CareerResult::Success(career),
            Ok(None) => CareerResult::NotFound,
            Err(e) => CareerResult::Error(e.to_string()),
        }
    }
}
