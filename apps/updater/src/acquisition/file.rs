use std::path::Path;

use tracing::info;

use crate::errors::AppError;
use crate::models::Profile;

pub const DEFAULT_PROFILE_PATH: &str = "profile_data.json";

/// Reads a profile previously written by `export::save_profile_json`.
pub async fn load_profile(path: &Path) -> Result<Profile, AppError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| AppError::file_load(path, e))?;
    let profile: Profile =
        serde_json::from_str(&raw).map_err(|e| AppError::file_load(path, e))?;

    info!("Loaded profile from {}", path.display());
    Ok(profile)
}
