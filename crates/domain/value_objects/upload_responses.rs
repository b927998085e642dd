use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::upload_records::UploadRecord, value_objects::upload_errors::UploadError,
};

pub const SUCCESS_CODE: i32 = 1;

/// Result of one submission, as handed back to the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UploadResponse {
    Success {
        code: i32,
        data: UploadRecord,
    },
    Failure {
        code: i32,
        #[serde(rename = "errorMsg")]
        error_msg: String,
    },
}

impl UploadResponse {
    pub fn success(record: UploadRecord) -> Self {
        UploadResponse::Success {
            code: SUCCESS_CODE,
            data: record,
        }
    }

    pub fn failure(error: &UploadError) -> Self {
        UploadResponse::Failure {
            code: error.code(),
            error_msg: error.to_string(),
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            UploadResponse::Success { code, .. } | UploadResponse::Failure { code, .. } => *code,
        }
    }

    pub fn error_msg(&self) -> Option<&str> {
        match self {
            UploadResponse::Failure { error_msg, .. } => Some(error_msg),
            UploadResponse::Success { .. } => None,
        }
    }
}
