mod career_repository;

pub use career_repository::{CareerRepository, CareerRepositoryError};
