//! Token storage between CLI runs.
//!
//! Tokens live in `<config dir>/prism/credentials.json` unless
//! `PRISM_CREDENTIALS` points elsewhere. On Unix the file is created with
//! mode `0600`.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, Utc};
use prism_client::Tokens;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub access: Option<String>,
    #[serde(default)]
    pub refresh: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub saved_at: DateTime<Utc>,
}

impl Credentials {
    pub fn new(tokens: Tokens, email: Option<String>) -> Self {
        Self {
            access: tokens.access,
            refresh: tokens.refresh,
            email,
            saved_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `PRISM_CREDENTIALS`, else under the user's config directory.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = std::env::var("PRISM_CREDENTIALS") {
            if !path.trim().is_empty() {
                return Ok(Self::new(path.trim()));
            }
        }

        let dir = dirs::config_dir().ok_or_else(|| anyhow!("no config directory for this user"))?;
        Ok(Self::new(dir.join("prism").join("credentials.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `None` when nobody has logged in yet.
    pub fn load(&self) -> Result<Option<Credentials>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", self.path.display()));
            }
        };

        let credentials = serde_json::from_str(&raw)
            .with_context(|| format!("corrupt credentials file {}", self.path.display()))?;
        Ok(Some(credentials))
    }

    pub fn save(&self, credentials: &Credentials) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(credentials)?;
        let mut file = open_private(&self.path)
            .with_context(|| format!("opening {}", self.path.display()))?;
        // A file left over from an older run keeps its mode on open.
        restrict_permissions(&self.path)?;
        file.write_all(json.as_bytes())
            .with_context(|| format!("writing {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), "credentials saved");
        Ok(())
    }

    /// Removes the file. Missing files are fine.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("removing {}", self.path.display())),
        }
    }
}

#[cfg(unix)]
fn open_private(path: &Path) -> std::io::Result<File> {
    use std::os::unix::fs::OpenOptionsExt;
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)
}

#[cfg(not(unix))]
fn open_private(path: &Path) -> std::io::Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
        .with_context(|| format!("restricting {}", path.display()))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
