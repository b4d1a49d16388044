//! Engine configuration.
//!
//! Settings can be built in code with the `with_*` builders or loaded from a
//! TOML file; missing keys fall back to the defaults below.
//!
//! ```toml
//! max_depth = 4
//! use_tree = true
//! node_budget = 200000
//! time_limit_ms = 5000
//! log_level = "info"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Configuration for the search engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Upper bound on plies searched below the root.
    pub max_depth: u8,

    /// Search exactly this many plies instead of adapting to the number of
    /// legal moves. Still capped by `max_depth`.
    pub fixed_depth: Option<u8>,

    /// Keep a persistent search tree across turns. When false every turn is
    /// searched from scratch without building a tree.
    pub use_tree: bool,

    /// Maximum number of nodes created (or visited, without a tree) per move.
    pub node_budget: usize,

    /// Wall-clock limit per move in milliseconds. 0 disables the limit.
    pub time_limit_ms: u64,

    /// Default log filter for the binary (`RUST_LOG` takes precedence).
    pub log_level: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: 4,
            fixed_depth: None,
            use_tree: true,
            node_budget: 200_000,
            time_limit_ms: 5_000,
            log_level: "info".to_string(),
        }
    }
}

impl EngineConfig {
    /// Small, fast configuration for tests.
    pub fn for_testing() -> Self {
        Self {
            max_depth: 3,
            node_budget: 20_000,
            time_limit_ms: 0,
            ..Self::default()
        }
    }

    /// Parse from TOML text and validate.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file and validate.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::Invalid("max_depth must be at least 1".into()));
        }
        if self.fixed_depth == Some(0) {
            return Err(ConfigError::Invalid("fixed_depth must be at least 1".into()));
        }
        if self.node_budget == 0 {
            return Err(ConfigError::Invalid("node_budget must be at least 1".into()));
        }
        Ok(())
    }

    /// Plies to search for a position with `legal_moves` moves available.
    ///
    /// Wide positions search shallower: 7+ moves get 1 ply, 4-6 get 2,
    /// 2-3 get 3 and a single forced move gets 4.
    pub fn depth_for(&self, legal_moves: usize) -> u8 {
        let depth = match self.fixed_depth {
            Some(d) => d,
            None => match legal_moves {
                n if n >= 7 => 1,
                4..=6 => 2,
                2..=3 => 3,
                _ => 4,
            },
        };
        depth.clamp(1, self.max_depth.max(1))
    }

    /// Builder pattern: set maximum depth.
    pub fn with_max_depth(mut self, depth: u8) -> Self {
        self.max_depth = depth;
        self
    }

    /// Builder pattern: search a fixed depth.
    pub fn with_fixed_depth(mut self, depth: u8) -> Self {
        self.fixed_depth = Some(depth);
        self.max_depth = self.max_depth.max(depth);
        self
    }

    /// Builder pattern: enable or disable the persistent tree.
    pub fn with_tree(mut self, use_tree: bool) -> Self {
        self.use_tree = use_tree;
        self
    }

    /// Builder pattern: set node budget.
    pub fn with_node_budget(mut self, nodes: usize) -> Self {
        self.node_budget = nodes;
        self
    }

    /// Builder pattern: set time limit.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = ms;
        self
    }
}
