use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/graphql";
pub const DEFAULT_OWNER: &str = "lodash";
pub const DEFAULT_REPO: &str = "lodash";
pub const DEFAULT_BRANCH: &str = "main";

/// Optional settings read from `repostats.toml`.
///
/// The token is deliberately absent: it comes from `--token` or the
/// environment, never from a file in the working tree.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RepostatsConfig {
    pub owner: Option<String>,
    pub repo: Option<String>,
    pub branch: Option<String>,
    pub endpoint: Option<String>,
}

/// Values supplied on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub owner: Option<String>,
    pub repo: Option<String>,
    pub branch: Option<String>,
    pub endpoint: Option<String>,
    pub token: Option<String>,
}

/// Fully resolved configuration for one run.
#[derive(Clone)]
pub struct RepoConfig {
    pub owner: String,
    pub repo: String,
    pub branch: String,
    pub endpoint: String,
    pub token: String,
}

impl std::fmt::Debug for RepoConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RepoConfig")
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("branch", &self.branch)
            .field("endpoint", &self.endpoint)
            .field("token", &"<redacted>")
            .finish()
    }
}

impl RepoConfig {
    /// Merge file settings and overrides on top of the defaults.
    ///
    /// Precedence, lowest first: built-in defaults, config file, overrides.
    pub fn resolve(file: Option<RepostatsConfig>, overrides: Overrides) -> Result<Self> {
        let file = file.unwrap_or_default();

        let token = overrides
            .token
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| {
                Error::Config("no access token (pass --token or set GITHUB_TOKEN)".to_string())
            })?;

        Ok(Self {
            owner: overrides
                .owner
                .or(file.owner)
                .unwrap_or_else(|| DEFAULT_OWNER.to_string()),
            repo: overrides
                .repo
                .or(file.repo)
                .unwrap_or_else(|| DEFAULT_REPO.to_string()),
            branch: overrides
                .branch
                .or(file.branch)
                .unwrap_or_else(|| DEFAULT_BRANCH.to_string()),
            endpoint: overrides
                .endpoint
                .or(file.endpoint)
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            token,
        })
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("repostats.toml")
}

/// Load the config file, if one exists at `path` (or the default location).
pub fn load_config(path: Option<&Path>) -> Result<Option<RepostatsConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: RepostatsConfig = toml::from_str(&contents)
        .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(Some(config))
}
