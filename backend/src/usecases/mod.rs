pub mod upload_blob;
