use async_trait::async_trait;

use crate::career::{
    application::results::CareerResult,
    domain::entities::{Career, CareerChanges},
};

#[async_trait]
pub trait UpdateCareerUseCase: Send + Sync {
    async fn execute(&self, changes: CareerChanges) -> CareerResult<Career>;
}
