//! Application state: single-owner, main-thread only.
//!
//! The form is the source of truth; every edit recomputes the cached
//! [`DistributionResult`] synchronously.

use std::path::PathBuf;

use ratatui::layout::Rect;
use tracing::debug;

use paycurve_core::format::{format_share, Locale};
use paycurve_core::{
    compute_distribution, DistributionParameters, DistributionResult, DomainError, EngineConfig,
    ShapePolicy,
};

/// Maximum characters accepted in one form field.
pub const FIELD_MAX_LEN: usize = 10;

/// Editable form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Median,
    Mean,
    Salary,
    Skewness,
    Spread,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Median,
        Field::Mean,
        Field::Salary,
        Field::Skewness,
        Field::Spread,
    ];

    pub fn index(self) -> usize {
        match self {
            Field::Median => 0,
            Field::Mean => 1,
            Field::Salary => 2,
            Field::Skewness => 3,
            Field::Spread => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Median => "Median",
            Field::Mean => "Mean",
            Field::Salary => "Your salary",
            Field::Skewness => "Skewness",
            Field::Spread => "Spread",
        }
    }

    pub fn next(self) -> Field {
        Field::ALL[(self.index() + 1) % Field::ALL.len()]
    }

    pub fn prev(self) -> Field {
        Field::ALL[(self.index() + Field::ALL.len() - 1) % Field::ALL.len()]
    }

    /// Whole currency amounts; the others take a decimal point.
    pub fn is_amount(self) -> bool {
        matches!(self, Field::Median | Field::Mean | Field::Salary)
    }

    /// Increment applied by `+` / `-`.
    pub fn nudge_step(self) -> f64 {
        if self.is_amount() {
            500.0
        } else {
            0.05
        }
    }

    /// Only read under the skew-spread policy.
    pub fn is_shape_input(self) -> bool {
        !self.is_amount()
    }
}

/// Raw text of each field plus the focused one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub texts: [String; 5],
    pub focus: Field,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            texts: [
                "25000".to_string(),
                "30000".to_string(),
                "28000".to_string(),
                String::new(),
                String::new(),
            ],
            focus: Field::Median,
        }
    }
}

impl FormState {
    pub fn text(&self, field: Field) -> &str {
        &self.texts[field.index()]
    }

    /// Parsed value; None for empty or unparsable text.
    pub fn value(&self, field: Field) -> Option<f64> {
        self.text(field).parse().ok()
    }

    /// Append a typed character to the focused field. Returns true if the
    /// text changed.
    pub fn push_char(&mut self, c: char) -> bool {
        let field = self.focus;
        let text = &mut self.texts[field.index()];
        if text.len() >= FIELD_MAX_LEN {
            return false;
        }
        let accepted =
            c.is_ascii_digit() || (c == '.' && !field.is_amount() && !text.contains('.'));
        if accepted {
            text.push(c);
        }
        accepted
    }

    pub fn backspace(&mut self) -> bool {
        self.texts[self.focus.index()].pop().is_some()
    }

    /// Step the focused value by `direction` nudge steps, never below zero.
    /// A step whose text would not fit in the field is refused.
    pub fn nudge(&mut self, direction: f64) -> bool {
        let field = self.focus;
        let current = self.value(field).unwrap_or(0.0);
        let next = (current + direction * field.nudge_step()).max(0.0);
        let text = if field.is_amount() {
            format!("{next:.0}")
        } else {
            format!("{next:.2}")
        };
        if text.len() > FIELD_MAX_LEN {
            return false;
        }
        let changed = text != self.texts[field.index()];
        self.texts[field.index()] = text;
        changed
    }

    /// Parameters as currently typed. Empty amounts read as zero, which the
    /// engine reports as a degenerate input rather than an error.
    pub fn params(&self) -> DistributionParameters {
        let params = DistributionParameters::new(
            self.value(Field::Median).unwrap_or(0.0),
            self.value(Field::Mean).unwrap_or(0.0),
            self.value(Field::Salary).unwrap_or(0.0),
        );
        match (self.value(Field::Skewness), self.value(Field::Spread)) {
            (Some(skewness), Some(spread)) => params.with_shape_inputs(skewness, spread),
            _ => params,
        }
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
}

/// Top-level application state.
pub struct AppState {
    pub running: bool,
    pub form: FormState,

    // Engine selection
    /// Config used when the smooth preset is off (default preset or a
    /// user-supplied TOML file).
    pub base_config: EngineConfig,
    /// Where `base_config` was read from, if not the built-in default.
    pub config_file: Option<PathBuf>,
    pub policy: ShapePolicy,
    pub smooth: bool,
    pub locale: Locale,

    /// Result for the current form; replaced on every edit.
    pub result: DistributionResult,

    /// Hovered plot column, relative to the plot's left edge.
    pub cursor: Option<u16>,
    /// Terminal area of the last drawn frame, for mapping mouse positions.
    pub frame_area: Rect,

    pub status_message: Option<(String, StatusLevel)>,
    pub overlay: Overlay,
}

impl AppState {
    pub fn new(base_config: EngineConfig) -> Self {
        let policy = base_config.shape_policy;
        let mut app = Self {
            running: true,
            form: FormState::default(),
            base_config,
            config_file: None,
            policy,
            smooth: false,
            locale: Locale::default(),
            result: DistributionResult::degenerate(DomainError::NonPositiveMedian(0.0)),
            cursor: None,
            frame_area: Rect::default(),
            status_message: None,
            overlay: Overlay::None,
        };
        app.recompute();
        app
    }

    /// Effective engine config: base or smooth preset, with the selected
    /// shape policy.
    pub fn engine_config(&self) -> EngineConfig {
        let mut config = if self.smooth {
            EngineConfig::smooth()
        } else {
            self.base_config.clone()
        };
        config.shape_policy = self.policy;
        config
    }

    pub fn params(&self) -> DistributionParameters {
        self.form.params()
    }

    /// Recompute the cached result from the form and report the outcome.
    pub fn recompute(&mut self) {
        let config = self.engine_config();
        let params = self.params();
        self.result = compute_distribution(&params, &config);
        debug!(
            samples = self.result.samples.len(),
            degenerate = self.result.is_degenerate(),
            "recomputed"
        );
        match self.result.issue {
            Some(issue) => {
                self.cursor = None;
                self.set_warning(format!("No curve: {issue}"));
            }
            None => {
                let pct = format_share(self.result.metrics.personal_percentile, self.locale);
                self.set_status(format!(
                    "{} samples, your percentile {pct}",
                    self.result.samples.len()
                ));
            }
        }
    }

    pub fn toggle_policy(&mut self) {
        self.policy = self.policy.toggled();
        self.recompute();
    }

    pub fn toggle_smooth(&mut self) {
        self.smooth = !self.smooth;
        self.recompute();
    }

    pub fn toggle_locale(&mut self) {
        self.locale = match self.locale {
            Locale::Fr => Locale::En,
            Locale::En => Locale::Fr,
        };
    }

    /// Move the keyboard cursor by `delta` columns within `width`. Starts
    /// from the middle of the plot when no cursor is shown.
    pub fn move_cursor(&mut self, delta: i32, width: u16) {
        if width == 0 || self.result.samples.is_empty() {
            self.cursor = None;
            return;
        }
        let start = self.cursor.map_or(i32::from(width / 2), i32::from);
        let next = (start + delta).clamp(0, i32::from(width) - 1);
        self.cursor = Some(next as u16);
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}
