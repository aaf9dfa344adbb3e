use std::io;

use thiserror::Error;

pub type AppResult<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid arguments: {0}")]
    Usage(String),
    #[error("failed to write output")]
    Output(#[from] io::Error),
}
