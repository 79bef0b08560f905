use std::path::{Path, PathBuf};

use poster_core::models::layout::LayoutId;
use serde::{Deserialize, Serialize};

use crate::preview::clamp_zoom;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

const CONFIG_FILE: &str = "config.json";
pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_MODEL_ID: &str = "us.anthropic.claude-sonnet-4-6";
pub const DEFAULT_ZOOM: f64 = 0.15;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudioConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    pub region: String,
    /// Bedrock model or inference profile id used for generation.
    pub model_id: String,
    pub credentials: CredentialSource,
    /// Added in v1.
    pub default_theme: String,
    /// Added in v1.
    pub default_layout: LayoutId,
    /// Added in v1.
    pub preview_zoom: f64,
    #[serde(default)]
    pub json_logs: bool,
    pub created_at: jiff::Timestamp,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            region: DEFAULT_REGION.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            credentials: CredentialSource::DefaultChain,
            default_theme: poster_themes::default_theme().id.to_string(),
            default_layout: LayoutId::default(),
            preview_zoom: DEFAULT_ZOOM,
            json_logs: false,
            created_at: jiff::Timestamp::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CredentialSource {
    Inline {
        access_key_id: String,
        secret_access_key: String,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        session_token: Option<String>,
    },
    Profile {
        profile_name: String,
    },
    DefaultChain,
}

/// Redacted config info, safe to print or log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigInfo {
    pub region: String,
    pub model_id: String,
    pub default_theme: String,
    pub default_layout: String,
    pub preview_zoom: f64,
    pub created_at: String,
    pub credential_type: String,
    pub profile_name: Option<String>,
    pub access_key_hint: Option<String>,
}

pub fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("poster-studio"))
}

pub fn has_config() -> bool {
    config_dir()
        .map(|dir| dir.join(CONFIG_FILE).exists())
        .unwrap_or(false)
}

/// Load the config from the platform config directory, or defaults when
/// none has been saved yet.
pub fn load_or_default() -> eyre::Result<StudioConfig> {
    if has_config() {
        load_config_from(&config_dir()?)
    } else {
        Ok(StudioConfig::default())
    }
}

pub fn load_config_from(dir: &Path) -> eyre::Result<StudioConfig> {
    let path = dir.join(CONFIG_FILE);
    let contents = std::fs::read_to_string(&path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let mut config: StudioConfig = serde_json::from_value(migrated)?;
    config.preview_zoom = clamp_zoom(config.preview_zoom);
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update poster-studio."
        ));
    }

    // v0 → v1: add the preview settings
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("default_theme").or_insert(serde_json::Value::String(
            poster_themes::default_theme().id.to_string(),
        ));
        obj.entry("default_layout").or_insert(serde_json::Value::String(
            LayoutId::default().as_str().to_string(),
        ));
        obj.entry("preview_zoom").or_insert(serde_json::json!(DEFAULT_ZOOM));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added preview settings)");
    }

    Ok(json)
}

pub fn save_config(config: &StudioConfig) -> eyre::Result<PathBuf> {
    save_config_to(&config_dir()?, config)
}

pub fn save_config_to(dir: &Path, config: &StudioConfig) -> eyre::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    stamped.preview_zoom = clamp_zoom(stamped.preview_zoom);

    let path = dir.join(CONFIG_FILE);
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = dir.join("config.json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    // Set restrictive permissions on Unix before renaming
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, &path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(path)
}

pub fn delete_config_in(dir: &Path) -> eyre::Result<()> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() {
        std::fs::remove_file(&path)?;
        tracing::info!(path = %path.display(), "config deleted");
    }
    Ok(())
}

pub fn config_info(config: &StudioConfig) -> ConfigInfo {
    let (credential_type, profile_name, access_key_hint) = match &config.credentials {
        CredentialSource::Inline {
            access_key_id,
            session_token,
            ..
        } => {
            let cred_type = if session_token.is_some() {
                "temporary".to_string()
            } else {
                "inline".to_string()
            };
            (cred_type, None, Some(redact_access_key(access_key_id)))
        }
        CredentialSource::Profile { profile_name } => {
            ("profile".to_string(), Some(profile_name.clone()), None)
        }
        CredentialSource::DefaultChain => ("default_chain".to_string(), None, None),
    };

    ConfigInfo {
        region: config.region.clone(),
        model_id: config.model_id.clone(),
        default_theme: config.default_theme.clone(),
        default_layout: config.default_layout.to_string(),
        preview_zoom: config.preview_zoom,
        created_at: config.created_at.to_string(),
        credential_type,
        profile_name,
        access_key_hint,
    }
}

fn redact_access_key(key: &str) -> String {
    if key.len() <= 8 || !key.is_ascii() {
        return "****".to_string();
    }
    let prefix = &key[..4];
    let suffix = &key[key.len() - 4..];
    format!("{prefix}...{suffix}")
}
