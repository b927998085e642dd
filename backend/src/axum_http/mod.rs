pub mod app_state;
pub mod default_routers;
pub mod error_responses;
pub mod http_serve;
pub mod record_list_cookie;
pub mod routers;
