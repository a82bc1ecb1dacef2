pub mod action_cache_service;

pub use action_cache_service::ActionCacheService;
