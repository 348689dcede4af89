pub mod career;
