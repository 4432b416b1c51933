//! Bot credential loading
//!
//! The token lives in a small `key=value` file (one pair per line, `#`
//! comments allowed) so it can be kept out of the main configuration.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;
use crate::utils::errors::CredentialError;
use super::BotConfig;

/// Key holding the Telegram bot token
pub const TOKEN_KEY: &str = "token";

/// Resolve the bot token, preferring an explicitly configured one over the credential file
pub async fn resolve_token(config: &BotConfig) -> Result<String, CredentialError> {
    if let Some(token) = config.token.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        debug!("Using bot token from settings");
        return Ok(token.to_string());
    }

    load_token(Path::new(&config.credentials_path)).await
}

/// Read the token from a credential file
pub async fn load_token(path: &Path) -> Result<String, CredentialError> {
    let content = fs::read_to_string(path).await.map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CredentialError::NotFound { path: path.to_path_buf() },
        _ => CredentialError::Unreadable { path: path.to_path_buf(), source: e },
    })?;

    let pairs = parse_credentials(&content, path)?;
    debug!(path = %path.display(), keys = pairs.len(), "Credential file parsed");

    pairs
        .get(TOKEN_KEY)
        .filter(|value| !value.is_empty())
        .cloned()
        .ok_or_else(|| CredentialError::MissingKey {
            path: path.to_path_buf(),
            key: TOKEN_KEY.to_string(),
        })
}

/// Parse `key=value` lines; the value may itself contain `=`
pub fn parse_credentials(content: &str, path: &Path) -> Result<HashMap<String, String>, CredentialError> {
    let mut pairs = HashMap::new();

    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (key, value) = line.split_once('=').ok_or_else(|| CredentialError::Malformed {
            path: PathBuf::from(path),
            line: index + 1,
        })?;

        let key = key.trim();
        if key.is_empty() {
            return Err(CredentialError::Malformed { path: PathBuf::from(path), line: index + 1 });
        }

        pairs.insert(key.to_string(), value.trim().to_string());
    }

    Ok(pairs)
}
