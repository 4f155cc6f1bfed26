use shared_types::{AppError, Settings, SettingsView, UpdateSettingsRequest};
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use crate::auth::password;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("failed to write settings: {0}")]
    Write(#[from] std::io::Error),
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Administrator settings shared by every request.
///
/// Reads clone a snapshot. Updates are written back as TOML first (when
/// backed by a file) and only then replace the value.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: Option<PathBuf>,
    current: Arc<RwLock<Settings>>,
    writer: Arc<tokio::sync::Mutex<()>>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl SettingsStore {
    /// Load from `path`. A missing file yields defaults; an unreadable or
    /// malformed one is an error so a bad edit is never silently overwritten.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        let path = path.into();
        let settings = match std::fs::read_to_string(&path) {
            Ok(contents) => toml::from_str(&contents).map_err(|source| SettingsError::Parse {
                path: path.clone(),
                source,
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "Settings file not found, using defaults");
                Settings::default()
            }
            Err(source) => {
                return Err(SettingsError::Read {
                    path: path.clone(),
                    source,
                })
            }
        };

        let view = settings.view();
        tracing::info!(
            path = %path.display(),
            password_configured = view.password_configured,
            smarty_configured = view.smarty_configured,
            maps_configured = view.maps_configured,
            "Settings loaded"
        );

        Ok(Self {
            path: Some(path),
            current: Arc::new(RwLock::new(settings)),
            writer: Arc::default(),
        })
    }

    /// A store that is never written to disk.
    pub fn in_memory(settings: Settings) -> Self {
        Self {
            path: None,
            current: Arc::new(RwLock::new(settings)),
            writer: Arc::default(),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn snapshot(&self) -> Settings {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Apply an administrator update and persist it.
    ///
    /// Blank secrets keep the stored value; `clear_*` flags remove it.
    pub async fn update(&self, req: UpdateSettingsRequest) -> Result<SettingsView, AppError> {
        let password_hash = match non_blank(req.password) {
            Some(plain) => Some(password::hash_password(&plain).map_err(|e| {
                tracing::error!(error = %e, "Failed to hash access password");
                AppError::internal("Failed to hash password")
            })?),
            None => None,
        };

        // Writers queue here so two updates never start from the same snapshot.
        let _writer = self.writer.lock().await;

        let mut updated = self.snapshot();
        if let Some(title) = non_blank(req.title) {
            updated.tool.title = title;
        }
        if let Some(instructions) = req.instructions {
            updated.tool.instructions = instructions.trim().to_string();
        }
        if let Some(hash) = password_hash {
            updated.access.password_hash = Some(hash);
        }

        if req.clear_smarty {
            updated.smarty.auth_id = None;
            updated.smarty.auth_token = None;
        }
        if let Some(id) = non_blank(req.smarty_auth_id) {
            updated.smarty.auth_id = Some(id);
        }
        if let Some(token) = non_blank(req.smarty_auth_token) {
            updated.smarty.auth_token = Some(token);
        }

        if req.clear_maps_api_key {
            updated.google_maps.api_key = None;
        }
        if let Some(key) = non_blank(req.maps_api_key) {
            updated.google_maps.api_key = Some(key);
        }

        self.persist(&updated).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to persist settings");
            AppError::internal("Settings could not be saved")
        })?;

        let view = updated.view();
        *self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = updated;

        tracing::info!("Settings updated");
        Ok(view)
    }

    async fn persist(&self, settings: &Settings) -> Result<(), SettingsError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let rendered = toml::to_string_pretty(settings)?;
        tokio::fs::write(path, rendered).await?;
        Ok(())
    }
}
