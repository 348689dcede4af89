use async_trait::async_trait;

use crate::career::{
    application::{
        ports::{incoming::use_cases::ListCareersUseCase, outgoing::CareerRepository},
        results::CareerResult,
    },
    domain::entities::Career,
};

#[derive(Debug, Clone)]
pub struct ListCareersService<R>
where
    R: CareerRepository + Send + Sync,
{
    repository: R,
}

impl<R> ListCareersService<R>
where
    R: CareerRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListCareersUseCase for ListCareersService<R>
where
    R: CareerRepository + Send + Sync,
{
    async fn execute(&self) -> CareerResult<Vec<Career>> {
        match self.repository.list().await {
            Ok(careers) => CareerResult::Success(careers),
            Err(e) => CareerResult::Error(e.to_string()),
        }
    }
}
