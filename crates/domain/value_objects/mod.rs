pub mod enums;
pub mod record_lists;
pub mod storage_outcomes;
pub mod upload_errors;
pub mod upload_requests;
pub mod upload_responses;
