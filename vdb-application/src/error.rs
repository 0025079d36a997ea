use thiserror::Error;
use vdb_core::{repositories::Error as RepoError, usecases::Error as ParameterError};

pub use vdb_core::repositories;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<ParameterError> for AppError {
    fn from(err: ParameterError) -> AppError {
        AppError::Business(err.into())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Business(BError::Repo(RepoError::NotFound)))
    }

    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::Business(BError::Parameter(ParameterError::Forbidden)))
    }

    /// Rejected input, i.e. neither missing nor forbidden.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::Business(BError::Parameter(err)) if !matches!(err, ParameterError::Forbidden))
    }
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(ParameterError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<ParameterError> for BError {
    fn from(err: ParameterError) -> Self {
        match err {
            ParameterError::Repo(err) => Self::Repo(err),
            err => Self::Parameter(err),
        }
    }
}
