use async_trait::async_trait;

use crate::career::{
    application::{
        ports::{incoming::use_cases::DeleteCareerUseCase, outgoing::CareerRepository},
        results::CareerResult,
    },
    domain::entities::CareerId,
};

#[derive(Debug, Clone)]
pub struct DeleteCareerService<R>
where
    R: CareerRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteCareerService<R>
where
    R: CareerRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteCareerUseCase for DeleteCareerService<R>
where
    R: CareerRepository + Send + Sync,
{
    async fn execute(&self, id: CareerId) -> CareerResult<()> {
        // 1️⃣ Confirm the career exists
        let career = match self.repository.get_by_id(id).await {
            Ok(Some(career)) => career,
            Ok(None) => return CareerResult::NotFound,
            Err(e) => return CareerResult::Error(e.to_string()),
        };

        // 2️⃣ Delete it
        match self.repository.delete(career).await {
            Ok(_) => CareerResult::Success(()),
            Err(e) => CareerResult::Error(e.to_string()),
        }
    }
}
