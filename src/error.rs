use thiserror::Error;

use crate::api::ApiError;

#[derive(Debug, Error)]
pub enum WorknestError {
    #[error("Invalid page size {0}: must be at least 1")]
    InvalidPageSize(usize),

    #[error(transparent)]
    Api(#[from] ApiError),
}
