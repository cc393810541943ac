//! Theme colors shared by every component.
//!
//! ## Usage
//!
//! Wrap a subtree in [`theme_provider`] to override roles. Components read the
//! nearest theme with [`use_theme`]; without a provider they get the
//! defaults.
//!
//! ```
//! use mosaic_components::theme::{ThemeOverrides, theme_provider, use_theme};
//! use mosaic_ui::Color;
//!
//! let danger = Color::from_rgb8(0xC0, 0x00, 0x00);
//! theme_provider(ThemeOverrides::default().danger(danger), || {
//!     assert_eq!(use_theme().colors.danger, danger);
//!     assert_eq!(use_theme().colors.primary.to_hex(), "#007AFF");
//! });
//! ```

use std::sync::Arc;

use derive_setters::Setters;
use mosaic_ui::{Color, ColorParseError, provide_context, try_use_context};
use thiserror::Error;

/// Errors produced when building overrides from `(role, hex)` pairs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// The role name is not one of the fourteen theme roles.
    #[error("unknown theme role `{0}`")]
    UnknownRole(String),
    /// The color value did not parse.
    #[error(transparent)]
    Color(#[from] ColorParseError),
}

/// The fourteen color roles of a theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeColors {
    /// Brand color for primary actions, active tracks and focus.
    pub primary: Color,
    /// Secondary brand color.
    pub secondary: Color,
    /// Positive outcome.
    pub success: Color,
    /// Errors and destructive actions.
    pub danger: Color,
    /// Warnings.
    pub warning: Color,
    /// Informational accents.
    pub info: Color,
    /// Light neutral fill.
    pub light: Color,
    /// Dark neutral fill.
    pub dark: Color,
    /// Screen background.
    pub background: Color,
    /// Card and sheet surfaces.
    pub surface: Color,
    /// Body text.
    pub text: Color,
    /// Secondary text and placeholders.
    pub text_light: Color,
    /// Borders and inactive tracks.
    pub border: Color,
    /// Disabled controls.
    pub disabled: Color,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            primary: Color::from_rgb8(0x00, 0x7A, 0xFF),
            secondary: Color::from_rgb8(0x58, 0x56, 0xD6),
            success: Color::from_rgb8(0x34, 0xC7, 0x59),
            danger: Color::from_rgb8(0xFF, 0x3B, 0x30),
            warning: Color::from_rgb8(0xFF, 0x95, 0x00),
            info: Color::from_rgb8(0x5A, 0xC8, 0xFA),
            light: Color::from_rgb8(0xF2, 0xF2, 0xF7),
            dark: Color::from_rgb8(0x1C, 0x1C, 0x1E),
            background: Color::WHITE,
            surface: Color::WHITE,
            text: Color::BLACK,
            text_light: Color::from_rgb8(0x99, 0x99, 0x99),
            border: Color::from_rgb8(0xE0, 0xE0, 0xE0),
            disabled: Color::from_rgb8(0xC7, 0xC7, 0xCC),
        }
    }
}

/// A partial set of roles layered over the defaults.
#[derive(Debug, Default, Clone, Copy, PartialEq, Setters)]
#[setters(strip_option)]
pub struct ThemeOverrides {
    /// Override for [`ThemeColors::primary`].
    pub primary: Option<Color>,
    /// Override for [`ThemeColors::secondary`].
    pub secondary: Option<Color>,
    /// Override for [`ThemeColors::success`].
    pub success: Option<Color>,
    /// Override for [`ThemeColors::danger`].
    pub danger: Option<Color>,
    /// Override for [`ThemeColors::warning`].
    pub warning: Option<Color>,
    /// Override for [`ThemeColors::info`].
    pub info: Option<Color>,
    /// Override for [`ThemeColors::light`].
    pub light: Option<Color>,
    /// Override for [`ThemeColors::dark`].
    pub dark: Option<Color>,
    /// Override for [`ThemeColors::background`].
    pub background: Option<Color>,
    /// Override for [`ThemeColors::surface`].
    pub surface: Option<Color>,
    /// Override for [`ThemeColors::text`].
    pub text: Option<Color>,
    /// Override for [`ThemeColors::text_light`].
    pub text_light: Option<Color>,
    /// Override for [`ThemeColors::border`].
    pub border: Option<Color>,
    /// Override for [`ThemeColors::disabled`].
    pub disabled: Option<Color>,
}

macro_rules! theme_roles {
    ($($role:ident => [$($name:literal),+]),* $(,)?) => {
        impl ThemeOverrides {
            /// Builds overrides from `(role, hex)` pairs such as
            /// `("textLight", "#666666")`. Multi-word roles accept both the
            /// `snake_case` field name and the `camelCase` spelling.
            pub fn from_hex_pairs<'a>(
                pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
            ) -> Result<Self, ThemeError> {
                let mut overrides = Self::default();
                for (role, hex) in pairs {
                    let color = Color::from_hex(hex)?;
                    match role {
                        $($($name)|+ => overrides.$role = Some(color),)*
                        other => return Err(ThemeError::UnknownRole(other.to_string())),
                    }
                }
                Ok(overrides)
            }

            /// Layers these overrides onto `base`.
            pub fn apply(&self, base: ThemeColors) -> ThemeColors {
                ThemeColors {
                    $($role: self.$role.unwrap_or(base.$role),)*
                }
            }
        }
    };
}

theme_roles!(
    primary => ["primary"],
    secondary => ["secondary"],
    success => ["success"],
    danger => ["danger"],
    warning => ["warning"],
    info => ["info"],
    light => ["light"],
    dark => ["dark"],
    background => ["background"],
    surface => ["surface"],
    text => ["text"],
    text_light => ["text_light", "textLight"],
    border => ["border"],
    disabled => ["disabled"],
);

/// The theme provided to a subtree.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Resolved colors.
    pub colors: ThemeColors,
}

impl Theme {
    /// The defaults with `overrides` applied.
    pub fn with_overrides(overrides: &ThemeOverrides) -> Self {
        Self {
            colors: overrides.apply(ThemeColors::default()),
        }
    }
}

/// Provides the default theme with `overrides` applied to everything built in
/// `child`.
///
/// Overrides always layer over the defaults, not over an enclosing provider.
pub fn theme_provider<R>(overrides: ThemeOverrides, child: impl FnOnce() -> R) -> R {
    provide_context(Theme::with_overrides(&overrides), child)
}

/// The nearest provided theme, or the default theme.
pub fn use_theme() -> Arc<Theme> {
    try_use_context::<Theme>().unwrap_or_else(|| Arc::new(Theme::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_palette() {
        let colors = ThemeColors::default();
        assert_eq!(colors.primary.to_hex(), "#007AFF");
        assert_eq!(colors.dark.to_hex(), "#1C1C1E");
        assert_eq!(colors.text_light.to_hex(), "#999999");
        assert_eq!(colors.disabled.to_hex(), "#C7C7CC");
    }

    #[test]
    fn overrides_replace_only_named_roles() {
        let theme = Theme::with_overrides(&ThemeOverrides::default().primary(Color::BLACK));
        assert_eq!(theme.colors.primary, Color::BLACK);
        assert_eq!(theme.colors.secondary, ThemeColors::default().secondary);
    }

    #[test]
    fn nested_providers_do_not_accumulate() {
        theme_provider(ThemeOverrides::default().primary(Color::BLACK), || {
            theme_provider(ThemeOverrides::default().danger(Color::WHITE), || {
                let colors = use_theme().colors;
                assert_eq!(colors.danger, Color::WHITE);
                assert_eq!(colors.primary, ThemeColors::default().primary);
            });
            assert_eq!(use_theme().colors.primary, Color::BLACK);
        });
    }

    #[test]
    fn hex_pairs_accept_both_spellings() {
        let overrides =
            ThemeOverrides::from_hex_pairs([("textLight", "#666666"), ("border", "#ccc")])
                .unwrap();
        assert_eq!(overrides.text_light, Some(Color::from_rgb8(0x66, 0x66, 0x66)));
        assert_eq!(overrides.border, Some(Color::from_rgb8(0xCC, 0xCC, 0xCC)));
        assert!(overrides.primary.is_none());

        let snake = ThemeOverrides::from_hex_pairs([("text_light", "#666666")]).unwrap();
        assert_eq!(snake.text_light, overrides.text_light);
    }

    #[test]
    fn hex_pairs_report_errors() {
        assert_eq!(
            ThemeOverrides::from_hex_pairs([("accent", "#000")]),
            Err(ThemeError::UnknownRole("accent".into()))
        );
        assert!(matches!(
            ThemeOverrides::from_hex_pairs([("primary", "blue")]),
            Err(ThemeError::Color(ColorParseError::MissingHash(_)))
        ));
    }
}
