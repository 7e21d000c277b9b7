//! Menu styling configuration.
//!
//! Two visual states matter: the normal row and the selected/highlighted
//! row. The prompt and the page markers reuse the selected style, matching
//! the classic inverted-bar look.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== MenuStyles =====

/// Styles for the menu bar.
///
/// With colors disabled, selection falls back to `REVERSED` so the
/// highlighted item stays visible on monochrome terminals.
pub struct MenuStyles {
    normal: Style,
    selected: Style,
}

impl MenuStyles {
    /// Create MenuStyles with the default color scheme.
    pub fn new() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }

    /// Create MenuStyles with the specified color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                normal: Style::default().fg(Color::Gray).bg(Color::Black),
                selected: Style::default().fg(Color::White).bg(Color::Blue),
            }
        } else {
            Self {
                normal: Style::default(),
                selected: Style::default().add_modifier(Modifier::REVERSED),
            }
        }
    }

    /// Style for unselected items and the input field.
    pub fn normal(&self) -> Style {
        self.normal
    }

    /// Style for the selected item, the prompt, and the page markers.
    pub fn selected(&self) -> Style {
        self.selected
    }

    /// Style for the cursor cell inside the input field.
    pub fn cursor(&self) -> Style {
        self.normal.add_modifier(Modifier::REVERSED)
    }
}

impl Default for MenuStyles {
    fn default() -> Self {
        Self::new()
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_config_respects_no_color_flag() {
        let config = ColorConfig::from_env_and_args(true);
        assert!(
            !config.colors_enabled(),
            "--no-color flag should disable colors"
        );
    }

    #[test]
    fn color_config_respects_no_color_env_var() {
        std::env::set_var("NO_COLOR", "1");
        let config = ColorConfig::from_env_and_args(false);
        assert!(
            !config.colors_enabled(),
            "NO_COLOR env var should disable colors"
        );
        std::env::remove_var("NO_COLOR");
    }

    #[test]
    fn color_config_flag_overrides_env_var() {
        std::env::set_var("NO_COLOR", "1");
        let config = ColorConfig::from_env_and_args(true);
        assert!(!config.colors_enabled());
        std::env::remove_var("NO_COLOR");
    }

    #[test]
    fn color_config_enables_colors_by_default() {
        std::env::remove_var("NO_COLOR");
        let config = ColorConfig::from_env_and_args(false);
        assert!(config.colors_enabled());
    }

    #[test]
    fn styles_with_colors_disabled_keep_selection_visible() {
        let styles = MenuStyles::with_color_config(ColorConfig::from_env_and_args(true));
        assert!(
            styles.selected().add_modifier.contains(Modifier::REVERSED),
            "monochrome selection must still be distinguishable"
        );
        assert!(styles.normal().fg.is_none());
    }

    #[test]
    fn styles_with_colors_enabled_differ_between_states() {
        std::env::remove_var("NO_COLOR");
        let styles = MenuStyles::with_color_config(ColorConfig::from_env_and_args(false));
        assert_ne!(styles.normal().bg, styles.selected().bg);
    }

    #[test]
    fn cursor_style_is_inverted_normal() {
        let styles = MenuStyles::new();
        assert!(styles.cursor().add_modifier.contains(Modifier::REVERSED));
    }
}
