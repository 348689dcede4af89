mod create_career_service;
mod delete_career_service;
mod list_careers_service;
mod update_career_service;

pub use create_career_service::CreateCareerService;
pub use delete_career_service::DeleteCareerService;
pub use list_careers_service::ListCareersService;
pub use update_career_service::UpdateCareerService;
