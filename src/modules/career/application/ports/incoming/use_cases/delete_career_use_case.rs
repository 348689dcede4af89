use async_trait::async_trait;

use crate::career::{application::results::CareerResult, domain::entities::CareerId};

#[async_trait]
pub trait DeleteCareerUseCase: Send + Sync {
    async fn execute(&self, id: CareerId) -> CareerResult<()>;
}
