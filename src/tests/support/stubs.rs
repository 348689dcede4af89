use std::sync::Arc;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use tokio::sync::Mutex;

use crate::career::application::ports::incoming::use_cases::{
    CreateCareerUseCase, DeleteCareerUseCase, ListCareersUseCase, UpdateCareerUseCase,
};
use crate::career::application::results::CareerResult;
use crate::career::domain::entities::{Career, CareerChanges, CareerId, NewCareer};

pub fn sample_career(id: CareerId) -> Career {
    Career {
        id,
        username: "jdoe".to_string(),
        created_datetime: Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap(),
        title: format!("Title {id}"),
        content: format!("Content {id}"),
    }
}

#[derive(Clone)]
pub struct StubListCareersUseCase {
    result: CareerResult<Vec<Career>>,
}

impl StubListCareersUseCase {
    pub fn returning(result: CareerResult<Vec<Career>>) -> Self {
        Self { result }
    }
}

impl Default for StubListCareersUseCase {
    fn default() -> Self {
        Self::returning(CareerResult::Success(vec![]))
    }
}

#[async_trait]
impl ListCareersUseCase for StubListCareersUseCase {
    async fn execute(&self) -> CareerResult<Vec<Career>> {
        self.result.clone()
    }
}

/// Echoes the submitted career back as id 1 unless an error is configured.
#[derive(Clone, Default)]
pub struct StubCreateCareerUseCase {
    error: Option<String>,
}

impl StubCreateCareerUseCase {
    pub fn failing(reason: &str) -> Self {
        Self {
            error: Some(reason.to_string()),
        }
    }
}

#[async_trait]
impl CreateCareerUseCase for StubCreateCareerUseCase {
    async fn execute(&self, career: NewCareer) -> CareerResult<Career> {
        if let Some(reason) = &self.error {
            return CareerResult::Error(reason.clone());
        }
        CareerResult::Success(Career {
            id: 1,
            username: career.username,
            created_datetime: Utc::now(),
            title: career.title,
            content: career.content,
        })
    }
}

/// Returns a fixed result and records every `CareerChanges` it receives.
#[derive(Clone)]
pub struct StubUpdateCareerUseCase {
    result: CareerResult<Career>,
    pub received: Arc<Mutex<Vec<CareerChanges>>>,
}

impl StubUpdateCareerUseCase {
    pub fn returning(result: CareerResult<Career>) -> Self {
        Self {
            result,
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl Default for StubUpdateCareerUseCase {
    fn default() -> Self {
        Self::returning(CareerResult::NotFound)
    }
}

#[async_trait]
impl UpdateCareerUseCase for StubUpdateCareerUseCase {
    async fn execute(&self, changes: CareerChanges) -> CareerResult<Career> {
        self.received.lock().await.push(changes);
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubDeleteCareerUseCase {
    result: CareerResult<()>,
    pub received: Arc<Mutex<Vec<CareerId>>>,
}

impl StubDeleteCareerUseCase {
    pub fn returning(result: CareerResult<()>) -> Self {
        Self {
            result,
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl Default for StubDeleteCareerUseCase {
    fn default() -> Self {
        Self::returning(CareerResult::NotFound)
    }
}

#[async_trait]
impl DeleteCareerUseCase for StubDeleteCareerUseCase {
    async fn execute(&self, id: CareerId) -> CareerResult<()> {
        self.received.lock().await.push(id);
        self.result.clone()
    }
}
