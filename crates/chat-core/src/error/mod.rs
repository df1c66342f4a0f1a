use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Snapshot parse error: {message} {location}")]
    SnapshotParse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Snapshot decode error at {key}: {message} {location}")]
    SnapshotDecode {
        key: String,
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
