use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;

use crate::career::application::ports::outgoing::{CareerRepository, CareerRepositoryError};
use crate::career::domain::entities::{Career, CareerChanges, CareerId, NewCareer};

#[derive(Default)]
struct State {
    next_id: CareerId,
    rows: BTreeMap<CareerId, Career>,
    failing: bool,
}

/// Process-local record store with auto-increment ids.
///
/// Clones share the same rows, so a test can keep a handle while the app
/// owns another.
#[derive(Clone, Default)]
pub struct InMemoryCareerRepository {
    state: Arc<Mutex<State>>,
}

impl InMemoryCareerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every subsequent call returns `Unavailable` while set.
    pub fn set_failing(&self, failing: bool) {
        self.lock().failing = failing;
    }

    pub fn snapshot(&self) -> Vec<Career> {
        self.lock().rows.values().cloned().collect()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    fn guard(&self) -> Result<MutexGuard<'_, State>, CareerRepositoryError> {
        let state = self.lock();
        if state.failing {
            return Err(CareerRepositoryError::Unavailable(
                "in-memory store switched off".to_string(),
            ));
        }
        Ok(state)
    }
}

#[async_trait]
impl CareerRepository for InMemoryCareerRepository {
    async fn list(&self) -> Result<Vec<Career>, CareerRepositoryError> {
        Ok(self.guard()?.rows.values().cloned().collect())
    }

    async fn save(&self, career: NewCareer) -> Result<Career, CareerRepositoryError> {
        let mut state = self.guard()?;
        state.next_id += 1;
        let stored = Career {
            id: state.next_id,
            username: career.username,
            created_datetime: Utc::now(),
            title: career.title,
            content: career.content,
        };
        state.rows.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update(
        &self,
        changes: CareerChanges,
    ) -> Result<Option<Career>, CareerRepositoryError> {
        let mut state = self.guard()?;
        Ok(state.rows.get_mut(&changes.id).map(|row| {
            row.title = changes.title;
            row.content = changes.content;
            row.clone()
        }))
    }

    async fn delete(&self, career: Career) -> Result<CareerId, CareerRepositoryError> {
        let mut state = self.guard()?;
        state.rows.remove(&career.id);
        Ok(career.id)
    }

    async fn get_by_id(&self, id: CareerId) -> Result<Option<Career>, CareerRepositoryError> {
        Ok(self.guard()?.rows.get(&id).cloned())
    }
}
