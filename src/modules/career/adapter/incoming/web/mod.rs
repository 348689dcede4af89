pub mod requests;
pub mod responses;
pub mod routes;
pub mod validation;
