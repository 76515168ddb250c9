pub mod error;
pub mod label;
pub mod recall;
pub mod summary;
