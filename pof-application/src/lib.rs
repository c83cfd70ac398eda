mod process_records;

pub mod csv;
pub mod error;

pub mod prelude {
    pub use super::process_records::*;
}

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use pof_core::entities::*;

#[cfg(test)]
pub(crate) mod tests;
