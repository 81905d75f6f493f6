use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] paydesk_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid salary ID: {0}")]
    InvalidId(String),
    #[error("Salary not found: {0}")]
    SalaryNotFound(String),
    #[error("Invalid amount '{0}': use digits with at most two decimals")]
    InvalidAmount(String),
    #[error("Invalid date '{0}': use YYYY-MM-DDTHH:MM:SS or YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Nothing to edit: pass --employee, --amount or --date")]
    NothingToEdit,
    #[error("Could not save salary: {0}")]
    SaveFailed(String),
    #[error("Could not delete salary: {0}")]
    DeleteFailed(String),
    #[error("Delete cancelled")]
    DeleteAborted,
}
