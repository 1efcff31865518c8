//! Parrot/neon theme tokens for the Paycurve TUI
//!
//! # Color Palette
//! - **Background**: Near-black / deep charcoal (base layer)
//! - **Accent**: Electric cyan (focus, density area)
//! - **Positive**: Neon green (above average)
//! - **Negative**: Hot pink (very low position, errors)
//! - **Warning**: Neon orange (personal salary line, warnings)
//! - **Neutral**: Cool purple (median and mean lines, deciles)
//! - **Muted**: Steel blue (axis labels, secondary text)

use ratatui::style::{Color, Modifier, Style};

use paycurve_core::PositionBand;

pub const BACKGROUND: Color = Color::Rgb(18, 18, 20);
pub const ACCENT: Color = Color::Rgb(0, 255, 255);
pub const POSITIVE: Color = Color::Rgb(0, 255, 128);
pub const NEGATIVE: Color = Color::Rgb(255, 20, 147);
pub const WARNING: Color = Color::Rgb(255, 140, 0);
pub const NEUTRAL: Color = Color::Rgb(147, 112, 219);
pub const MUTED: Color = Color::Rgb(100, 149, 237);
pub const TEXT_SECONDARY: Color = Color::Rgb(170, 170, 170);

/// Palette handed to widgets that render straight into a buffer.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub accent: Color,
    pub positive: Color,
    pub negative: Color,
    pub warning: Color,
    pub neutral: Color,
    pub muted: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::parrot_neon()
    }
}

impl Theme {
    pub fn parrot_neon() -> Self {
        Self {
            background: BACKGROUND,
            accent: ACCENT,
            positive: POSITIVE,
            negative: NEGATIVE,
            warning: WARNING,
            neutral: NEUTRAL,
            muted: MUTED,
            text_primary: Color::White,
            text_secondary: TEXT_SECONDARY,
        }
    }

    /// Color of the position band reading.
    pub fn band_color(&self, band: PositionBand) -> Color {
        match band {
            PositionBand::VeryLow => self.negative,
            PositionBand::Below => self.warning,
            PositionBand::Above => self.positive,
        }
    }

    /// Deviation sign: at or above the reference is positive.
    pub fn deviation_color(&self, pct: f64) -> Color {
        if pct >= 0.0 {
            self.positive
        } else {
            self.negative
        }
    }
}

// Style shorthands for frame-level panels.

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}
