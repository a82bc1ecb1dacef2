use anyhow::Context;
use re_grpc_proto::build::bazel::remote::execution::v2::digest_function::Value as DigestFunction;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSettings,
    pub storage: StorageConfig,
    #[serde(default)]
    pub action_cache: ActionCacheConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default)]
    pub instance_name: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            address: default_address(),
            instance_name: String::new(),
        }
    }
}

fn default_address() -> String {
    "0.0.0.0:8980".to_string()
}

/// Backend holding both the action cache entries and the CAS blobs they
/// reference. The two live in separate key prefixes of the same store.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "backend")]
pub enum StorageConfig {
    #[serde(rename = "filesystem")]
    FileSystem { root_dir: PathBuf },

    #[serde(rename = "memory")]
    Memory {
        #[serde(default)]
        max_size_bytes: Option<u64>,
    },
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ActionCacheConfig {
    #[serde(default = "default_digest_functions")]
    pub digest_functions: Vec<String>,
    #[serde(default = "default_true")]
    pub update_enabled: bool,
    #[serde(default)]
    pub require_action_in_cas: bool,
    #[serde(default)]
    pub worker_id: Option<String>,
}

impl Default for ActionCacheConfig {
    fn default() -> Self {
        Self {
            digest_functions: default_digest_functions(),
            update_enabled: true,
            require_action_in_cas: false,
            worker_id: None,
        }
    }
}

impl ActionCacheConfig {
    /// Parses `digest_functions`; the first entry is the default for requests
    /// that do not name one.
    pub fn parsed_digest_functions(&self) -> anyhow::Result<Vec<DigestFunction>> {
        if self.digest_functions.is_empty() {
            anyhow::bail!("At least one digest function must be configured");
        }

        self.digest_functions
            .iter()
            .map(|name| {
                match DigestFunction::from_str_name(&name.to_ascii_uppercase()) {
                    Some(DigestFunction::Unknown) | None => {
                        anyhow::bail!("Unknown digest function: {}", name)
                    }
                    Some(function) => Ok(function),
                }
            })
            .collect()
    }
}

fn default_digest_functions() -> Vec<String> {
    vec!["SHA256".to_string()]
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_namespace_header")]
    pub namespace_header: String,
    #[serde(default = "default_anonymous_prefix")]
    pub anonymous_prefix: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            namespace_header: default_namespace_header(),
            anonymous_prefix: default_anonymous_prefix(),
        }
    }
}

fn default_namespace_header() -> String {
    "x-cache-namespace".to_string()
}

fn default_anonymous_prefix() -> String {
    "ANON".to_string()
}

fn default_true() -> bool {
    true
}

impl ServerConfig {
    pub fn from_file(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config: ServerConfig = toml::from_str(content)?;
        config.action_cache.parsed_digest_functions()?;
        Ok(config)
    }

    pub fn to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
