use async_trait::async_trait;

use crate::career::domain::entities::{Career, CareerChanges, CareerId, NewCareer};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CareerRepositoryError {
    #[error("Career storage unavailable: {0}")]
    Unavailable(String),
}

/// Outgoing port over the career record store.
///
/// Implementations must convert every storage failure into
/// `CareerRepositoryError::Unavailable`. Lookups distinguish a missing row
/// (`Ok(None)`) from a failed lookup (`Err`).
#[async_trait]
pub trait CareerRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Career>, CareerRepositoryError>;

    async fn save(&self, career: NewCareer) -> Result<Career, CareerRepositoryError>;

    async fn update(&self, changes: CareerChanges)
        -> Result<Option<Career>, CareerRepositoryError>;

    async fn delete(&self, career: Career) -> Result<CareerId, CareerRepositoryError>;

    async fn get_by_id(&self, id: CareerId) -> Result<Option<Career>, CareerRepositoryError>;
}
