use pof_core::usecases::Error as UsecaseError;
use pof_gateways::map::MapError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Usecase(#[from] UsecaseError),
    #[error("Missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("Empty value in column '{column}' (line {line})")]
    EmptyField { line: u64, column: String },
    #[error(transparent)]
    Csv(#[from] ::csv::Error),
    #[error(transparent)]
    Map(#[from] MapError),
    #[error(transparent)]
    Io(#[from] io::Error),
}
