use thiserror::Error;

/// Failure kinds surfaced to the browser as `{code, errorMsg}`.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Something went wrong when storing the blob!")]
    GenericUploadFailure { status: u16 },

    #[error("Unhandled successful response!")]
    UnrecognizedResponseShape,

    #[error(
        "An error occurred while uploading. Check the server logs and ensure that the aggregator and publisher URLs are correct."
    )]
    NetworkOrConfigFailure(#[source] anyhow::Error),
}

impl UploadError {
    pub fn code(&self) -> i32 {
        match self {
            UploadError::GenericUploadFailure { .. } => -1,
            UploadError::UnrecognizedResponseShape => -2,
            UploadError::NetworkOrConfigFailure(_) => -3,
        }
    }
}
