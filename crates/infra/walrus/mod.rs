pub mod publisher_client;
