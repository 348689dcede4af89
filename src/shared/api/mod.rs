pub mod request_data;
pub mod response;

pub use request_data::RequestData;
pub use response::{ApiDetail, ApiError, ApiResponse, INTERNAL_ERROR_MESSAGE};
