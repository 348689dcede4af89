mod career_repository_postgres;
pub mod sea_orm_entity;

pub use career_repository_postgres::CareerRepositoryPostgres;
