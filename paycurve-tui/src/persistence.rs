//! Form and toggle persistence: JSON save/load across restarts.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use paycurve_core::format::Locale;
use paycurve_core::ShapePolicy;

use crate::app::{AppState, FormState, Overlay, FIELD_MAX_LEN};

/// Serializable subset of app state that persists across restarts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedState {
    /// Raw field texts in form order: median, mean, salary, skewness, spread.
    pub fields: [String; 5],
    /// Last toggled policy. None keeps the policy of the engine config.
    pub policy: Option<ShapePolicy>,
    pub smooth: bool,
    pub locale: Locale,
    pub help_seen: bool,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            fields: FormState::default().texts,
            policy: None,
            smooth: false,
            locale: Locale::default(),
            help_seen: false,
        }
    }
}

/// `<config dir>/paycurve/<file>`, falling back to the working directory.
pub fn config_path(file: &str) -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("paycurve")
        .join(file)
}

/// Load persisted state from disk. Returns defaults if file is missing or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

pub fn extract(app: &AppState) -> PersistedState {
    PersistedState {
        fields: app.form.texts.clone(),
        policy: Some(app.policy),
        smooth: app.smooth,
        locale: app.locale,
        help_seen: true,
    }
}

/// Apply persisted state and recompute. Field texts the form would not
/// accept from the keyboard are ignored.
pub fn apply(app: &mut AppState, state: PersistedState) {
    for (slot, text) in app.form.texts.iter_mut().zip(state.fields) {
        if text.len() <= FIELD_MAX_LEN && text.chars().all(|c| c.is_ascii_digit() || c == '.') {
            *slot = text;
        }
    }
    if let Some(policy) = state.policy {
        app.policy = policy;
    }
    app.smooth = state.smooth;
    app.locale = state.locale;
    if !state.help_seen {
        app.overlay = Overlay::Help;
    }
    app.recompute();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Field;
    use paycurve_core::EngineConfig;

    #[test]
    fn roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state.json");

        let mut app = AppState::new(EngineConfig::default());
        app.form.texts[0] = "31000".to_string();
        app.toggle_smooth();
        app.toggle_locale();

        save(&path, &extract(&app)).unwrap();
        let loaded = load(&path);

        assert_eq!(loaded.fields[0], "31000");
        assert!(loaded.smooth);
        assert_eq!(loaded.locale, Locale::En);
        assert!(loaded.help_seen);
    }

    #[test]
    fn missing_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load(&dir.path().join("state.json"));
        assert_eq!(loaded, PersistedState::default());
        assert!(!loaded.help_seen);
    }

    #[test]
    fn corrupt_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "not valid json {{{").unwrap();
        assert_eq!(load(&path), PersistedState::default());
    }

    #[test]
    fn partial_file_fills_missing_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, r#"{ "policy": "SKEW_SPREAD", "help_seen": true }"#).unwrap();
        let loaded = load(&path);
        assert_eq!(loaded.policy, Some(ShapePolicy::SkewSpread));
        assert_eq!(loaded.fields[1], "30000");
    }

    #[test]
    fn first_run_opens_help() {
        let mut app = AppState::new(EngineConfig::default());
        apply(&mut app, PersistedState::default());
        assert_eq!(app.overlay, Overlay::Help);
        assert!(!app.result.is_degenerate());
    }

    #[test]
    fn first_run_keeps_config_policy() {
        let mut app = AppState::new(EngineConfig::skew_spread());
        apply(&mut app, PersistedState::default());
        assert_eq!(app.policy, ShapePolicy::SkewSpread);
        assert_eq!(app.engine_config().shape_policy, ShapePolicy::SkewSpread);
        assert_eq!(app.result.issue, Some(paycurve_core::DomainError::MissingShapeInput));
    }

    #[test]
    fn saved_policy_overrides_config_policy() {
        let mut app = AppState::new(EngineConfig::skew_spread());
        let state = PersistedState {
            policy: Some(ShapePolicy::MeanRatio),
            help_seen: true,
            ..PersistedState::default()
        };
        apply(&mut app, state);
        assert_eq!(app.policy, ShapePolicy::MeanRatio);
        assert!(!app.result.is_degenerate());
    }

    #[test]
    fn apply_restores_and_recomputes() {
        let mut app = AppState::new(EngineConfig::default());
        let state = PersistedState {
            fields: [
                "40000".into(),
                "48000".into(),
                "not-a-number".into(),
                String::new(),
                String::new(),
            ],
            help_seen: true,
            ..PersistedState::default()
        };
        apply(&mut app, state);

        assert_eq!(app.overlay, Overlay::None);
        assert_eq!(app.form.text(Field::Median), "40000");
        assert_eq!(app.form.text(Field::Salary), "28000");
        assert!((app.result.metrics.log_mean - 40_000.0_f64.ln()).abs() < 1e-12);
    }
}
