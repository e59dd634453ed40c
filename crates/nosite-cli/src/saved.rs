//! The inputs of the most recent search, remembered between runs.

use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};
use nosite_core::Category;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct SavedSearch {
    pub location: String,
    pub radius_km: f64,
    pub categories: Vec<Category>,
    pub saved_at: DateTime<Utc>,
}

/// Read the saved inputs, or `None` when nothing has been saved yet.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub(crate) fn load(path: &Path) -> anyhow::Result<Option<SavedSearch>> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(e).with_context(|| format!("failed to read {}", path.display()));
        }
    };
    let saved = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse saved search {}", path.display()))?;
    Ok(Some(saved))
}

/// Like [`load`], but an unreadable or corrupt file only logs a warning and
/// counts as nothing saved.
pub(crate) fn load_or_warn(path: &Path) -> Option<SavedSearch> {
    load(path).unwrap_or_else(|e| {
        tracing::warn!(
            path = %path.display(),
            error = %format!("{e:#}"),
            "ignoring unreadable saved search"
        );
        None
    })
}

/// Overwrite the saved inputs, creating the parent directory if needed.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written.
pub(crate) fn store(path: &Path, saved: &SavedSearch) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(saved)?;
    std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn scratch_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("nosite-saved-{}", uuid::Uuid::new_v4()))
            .join("last_search.json")
    }

    #[test]
    fn missing_file_loads_as_none() {
        let path = scratch_path();
        assert!(load(&path).expect("missing file is not an error").is_none());
    }

    #[test]
    fn store_then_load_returns_same_inputs() {
        let path = scratch_path();
        let saved = SavedSearch {
            location: "Springfield, IL".to_string(),
            radius_km: 7.5,
            categories: vec![Category::Plumber, Category::Florist],
            saved_at: Utc::now(),
        };

        store(&path, &saved).expect("store should create parent dir");
        let loaded = load(&path).expect("load").expect("saved search present");
        assert_eq!(loaded, saved);

        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn stored_json_uses_category_tokens() {
        let path = scratch_path();
        let saved = SavedSearch {
            location: "Town".to_string(),
            radius_km: 1.0,
            categories: vec![Category::BeautySalon],
            saved_at: Utc::now(),
        };
        store(&path, &saved).expect("store");

        let raw = std::fs::read_to_string(&path).expect("read back");
        assert!(raw.contains("\"beauty_salon\""), "got {raw}");

        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let path = scratch_path();
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).expect("mkdir");
        }
        std::fs::write(&path, "{not json").expect("write");

        assert!(load(&path).is_err());
        assert!(load_or_warn(&path).is_none());

        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }
}
