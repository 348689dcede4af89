mod create_career;
mod delete_career;
mod list_careers;
mod update_career;

pub use create_career::create_career_handler;
pub use delete_career::delete_career_handler;
pub use list_careers::list_careers_handler;
pub use update_career::update_career_handler;

// utoipa generates a `__path_*` type next to each handler.
pub use create_career::__path_create_career_handler;
pub use delete_career::__path_delete_career_handler;
pub use list_careers::__path_list_careers_handler;
pub use update_career::__path_update_career_handler;
