use async_trait::async_trait;

use crate::career::{
    application::results::CareerResult,
    domain::entities::{Career, NewCareer},
};

#[async_trait]
pub trait CreateCareerUseCase: Send + Sync {
    async fn execute(&self, career: NewCareer) -> CareerResult<Career>;
}
