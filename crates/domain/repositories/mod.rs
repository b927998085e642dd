pub mod blob_publisher;
pub mod record_list;
