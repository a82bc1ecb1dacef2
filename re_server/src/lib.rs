pub mod auth;
pub mod cache;
pub mod config;
pub mod error;
pub mod grpc;
pub mod identity;
pub mod storage;
pub mod util;

pub use config::ServerConfig;
pub use error::CacheError;
