pub mod api_server;

pub use api_server::{bind_listener, serve, start_api_server};
