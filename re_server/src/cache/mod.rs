pub mod manager;
pub mod tree;
pub mod validator;

pub use manager::{ActionCacheManager, ActionCacheSettings, AC_CACHE_PREFIX};
pub use tree::{decode_tree, tree_directories};
pub use validator::OutputValidator;
