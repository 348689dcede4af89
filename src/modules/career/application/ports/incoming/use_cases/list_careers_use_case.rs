use async_trait::async_trait;

use crate::career::{application::results::CareerResult, domain::entities::Career};

#[async_trait]
pub trait ListCareersUseCase: Send + Sync {
    async fn execute(&self) -> CareerResult<Vec<Career>>;
}
