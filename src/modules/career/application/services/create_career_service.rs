use async_trait::async_trait;

use crate::career::{
    application::{
        ports::{incoming::use_cases::CreateCareerUseCase, outgoing::CareerRepository},
        results::CareerResult,
    },
    domain::entities::{Career, NewCareer},
};

#[derive(Debug, Clone)]
pub struct CreateCareerService<R>
where
    R: CareerRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateCareerService<R>
where
    R: CareerRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateCareerUseCase for CreateCareerService<R>
where
    R: CareerRepository + Send + Sync,
{
    async fn execute(&self, career: NewCareer) -> CareerResult<Career> {
        match self.repository.save(career).await {
            Ok(saved) => CareerResult::Success(saved),
            Err(e) => CareerResult::Error(e.to_string()),
        }
    }
}
