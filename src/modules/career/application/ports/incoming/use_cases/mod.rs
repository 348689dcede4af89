mod create_career_use_case;
mod delete_career_use_case;
mod list_careers_use_case;
mod update_career_use_case;

pub use create_career_use_case::CreateCareerUseCase;
pub use delete_career_use_case::DeleteCareerUseCase;
pub use list_careers_use_case::ListCareersUseCase;
pub use update_career_use_case::UpdateCareerUseCase;
