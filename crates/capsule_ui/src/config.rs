//! # Control Configuration
//!
//! Declarative options loaded once at startup from external TOML files and
//! turned into a ready-to-use control.
//!
//! ```toml
//! labels = "Hourly, Daily, Monthly"
//! selected = 1
//! border_width = 1.0
//! border_color = "#3C3C43"
//! selector_color = "#FFFFFF"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{UiError, UiResult};
use crate::layout::Rect;
use crate::style::{Color, SegmentedStyle};
use crate::widget::{SegmentedControl, WidgetId};

/// Declarative options for a segmented control.
///
/// Only `labels` is required; omitted options keep the defaults from
/// [`SegmentedStyle::default`]. Colors are `#RRGGBB` / `#RRGGBBAA` literals.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SegmentedConfig {
    /// Comma-separated segment titles.
    pub labels: String,
    /// Initially selected segment, clamped into range.
    #[serde(default)]
    pub selected: usize,
    /// Outer border width in pixels.
    pub border_width: Option<f32>,
    /// Outer border color.
    pub border_color: Option<String>,
    /// Label color for unselected segments.
    pub text_color: Option<String>,
    /// Label color for the selected segment.
    pub selected_text_color: Option<String>,
    /// Fill color of the sliding selector.
    pub selector_color: Option<String>,
    /// Fill color of the capsule background.
    pub background_color: Option<String>,
    /// Label font size in pixels.
    pub font_size: Option<f32>,
}

impl SegmentedConfig {
    /// Loads a configuration from a TOML file.
    pub fn from_toml(path: impl AsRef<Path>) -> UiResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| UiError::ConfigRead {
            path: path.display().to_string(),
            reason: source.to_string(),
        })?;
        Self::from_toml_str(&text)
    }

    /// Parses a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> UiResult<Self> {
        toml::from_str(text).map_err(|source| UiError::ConfigParse(source.to_string()))
    }

    /// Resolves the style options against the preset defaults.
    pub fn style(&self) -> UiResult<SegmentedStyle> {
        let mut style = SegmentedStyle::default();

        if let Some(width) = self.border_width {
            style.border_width = width;
        }
        if let Some(size) = self.font_size {
            style.font_size = size;
        }
        if let Some(literal) = &self.border_color {
            style.border = Color::from_hex_str(literal)?;
        }
        if let Some(literal) = &self.text_color {
            style.text = Color::from_hex_str(literal)?;
        }
        if let Some(literal) = &self.selected_text_color {
            style.selected_text = Color::from_hex_str(literal)?;
        }
        if let Some(literal) = &self.selector_color {
            style.selector = Color::from_hex_str(literal)?;
        }
        if let Some(literal) = &self.background_color {
            style.background = Color::from_hex_str(literal)?;
        }

        Ok(style)
    }

    /// Builds a control from this configuration.
    ///
    /// The initial selection is applied without animation and without an
    /// event; it is state being restored, not a transition.
    pub fn build(&self, id: WidgetId, bounds: Rect) -> UiResult<SegmentedControl> {
        let style = self.style()?;

        let mut control = SegmentedControl::with_labels(id, bounds, &self.labels);
        control.set_style(style);

        if control.segment_count() > 0 {
            let initial = self.selected.min(control.segment_count() - 1);
            control.select_immediate(initial);
        }

        tracing::info!(
            "control built from config: segments={} selected={}",
            control.segment_count(),
            control.selected_index()
        );
        Ok(control)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Rect = Rect::new(0.0, 0.0, 300.0, 32.0);

    #[test]
    fn test_minimal_config() {
        let config = SegmentedConfig::from_toml_str("labels = \"On, Off\"").unwrap();
        let control = config.build(WidgetId::new(1), BOUNDS).unwrap();

        assert_eq!(control.segment_count(), 2);
        assert_eq!(control.selected_index(), 0);
        assert_eq!(*control.style(), SegmentedStyle::default());
    }

    #[test]
    fn test_full_config() {
        let text = r##"
            labels = "Hourly, Daily, Monthly"
            selected = 2
            border_width = 1.5
            border_color = "#3C3C43"
            text_color = "#8E8E93"
            selected_text_color = "#000000"
            selector_color = "#FFFFFF"
            background_color = "#EEEEF0"
            font_size = 13.0
        "##;

        let config = SegmentedConfig::from_toml_str(text).unwrap();
        let mut control = config.build(WidgetId::new(1), BOUNDS).unwrap();

        assert_eq!(control.selected_index(), 2);
        assert!((control.style().border_width - 1.5).abs() < f32::EPSILON);
        assert!((control.style().font_size - 13.0).abs() < f32::EPSILON);
        // Restoring the initial selection is not a transition
        assert!(control.take_events().is_empty());
    }

    #[test]
    fn test_out_of_range_selection_is_clamped() {
        let config = SegmentedConfig {
            labels: "A, B".to_owned(),
            selected: 9,
            ..SegmentedConfig::default()
        };
        let control = config.build(WidgetId::new(1), BOUNDS).unwrap();

        assert_eq!(control.selected_index(), 1);
    }

    #[test]
    fn test_bad_color_is_a_typed_error() {
        let config = SegmentedConfig {
            labels: "A, B".to_owned(),
            selector_color: Some("white".to_owned()),
            ..SegmentedConfig::default()
        };

        match config.build(WidgetId::new(1), BOUNDS) {
            Err(err) => assert_eq!(err, UiError::InvalidColor("white".to_owned())),
            Ok(_) => panic!("expected an invalid color error"),
        }
    }

    #[test]
    fn test_bad_toml_is_a_typed_error() {
        let result = SegmentedConfig::from_toml_str("labels = 42");
        assert!(matches!(result, Err(UiError::ConfigParse(_))));
    }

    #[test]
    fn test_missing_file_is_a_typed_error() {
        let result = SegmentedConfig::from_toml("/nonexistent/capsule.toml");
        assert!(matches!(result, Err(UiError::ConfigRead { .. })));
    }
}
