pub mod app_config;
pub mod file_store;
pub mod http_client;

pub use app_config::Config;
pub use file_store::FileStore;
pub use http_client::HttpReservationApi;
