use crate::career::application::ports::incoming::use_cases::{
    CreateCareerUseCase, DeleteCareerUseCase, ListCareersUseCase, UpdateCareerUseCase,
};
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    list_careers: Arc<dyn ListCareersUseCase + Send + Sync>,
    create_career: Arc<dyn CreateCareerUseCase + Send + Sync>,
    update_career: Arc<dyn UpdateCareerUseCase + Send + Sync>,
    delete_career: Arc<dyn DeleteCareerUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            list_careers: Arc::new(StubListCareersUseCase::default()),
            create_career: Arc::new(StubCreateCareerUseCase::default()),
            update_career: Arc::new(StubUpdateCareerUseCase::default()),
            delete_career: Arc::new(StubDeleteCareerUseCase::default()),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_list_careers(
        mut self,
        uc: impl ListCareersUseCase + Send + Sync + 'static,
    ) -> Self {
        self.list_careers = Arc::new(uc);
        self
    }

    pub fn with_create_career(
        mut self,
        uc: impl CreateCareerUseCase + Send + Sync + 'static,
    ) -> Self {
        self.create_career = Arc::new(uc);
        self
    }

    pub fn with_update_career(
        mut self,
        uc: impl UpdateCareerUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_career = Arc::new(uc);
        self
    }

    pub fn with_delete_career(
        mut self,
        uc: impl DeleteCareerUseCase + Send + Sync + 'static,
    ) -> Self {
        self.delete_career = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            list_careers_use_case: self.list_careers,
            create_career_use_case: self.create_career,
            update_career_use_case: self.update_career,
            delete_career_use_case: self.delete_career,
        })
    }
}
