#![forbid(unsafe_code)]

//! Popup configuration.
//!
//! Defaults can be overridden from the environment:
//!
//! | variable                | values                                                   |
//! |-------------------------|----------------------------------------------------------|
//! | `TIPBOX_BOX_STYLE`      | `regular`, `bold`, `rounded`, `double`, `dotted`, `dotted-bold` |
//! | `TIPBOX_CLOSE_ON_ENTER` | `1/0/true/false/yes/no/on/off`                           |

use tipbox_widgets::BoxStyle;

use crate::error::PopupError;

/// Environment variable selecting the border preset.
pub const ENV_BOX_STYLE: &str = "TIPBOX_BOX_STYLE";
/// Environment variable making Enter close a choice popup (`1/0/true/false`).
pub const ENV_CLOSE_ON_ENTER: &str = "TIPBOX_CLOSE_ON_ENTER";

/// How popups look and react.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PopupConfig {
    /// Border preset for every popup.
    pub box_style: BoxStyle,
    /// Close a choice popup after Enter inserts the selection.
    ///
    /// Off by default: Enter inserts and the picker stays open.
    pub close_choice_on_enter: bool,
}

impl PopupConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            box_style: BoxStyle::Rounded,
            close_choice_on_enter: false,
        }
    }

    #[must_use]
    pub const fn box_style(mut self, style: BoxStyle) -> Self {
        self.box_style = style;
        self
    }

    #[must_use]
    pub const fn close_choice_on_enter(mut self, close: bool) -> Self {
        self.close_choice_on_enter = close;
        self
    }

    /// Defaults with overrides from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Defaults with overrides from `get_env`.
    ///
    /// Values that do not parse are ignored.
    #[must_use]
    pub fn from_env_with<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(value) = get_env(ENV_BOX_STYLE) {
            match value.parse::<BoxStyle>() {
                Ok(style) => config.box_style = style,
                Err(_err) => {
                    tipbox_core::warn!(var = ENV_BOX_STYLE, error = %_err, "ignoring box style override");
                }
            }
        }

        if let Some(value) = env_override_bool(&get_env, ENV_CLOSE_ON_ENTER) {
            config.close_choice_on_enter = value;
        }

        config
    }

    /// Like [`from_env_with`](Self::from_env_with) but rejects values that do
    /// not parse.
    pub fn try_from_env_with<F>(get_env: F) -> Result<Self, PopupError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(value) = get_env(ENV_BOX_STYLE) {
            config.box_style = value.parse()?;
        }

        if let Some(value) = get_env(ENV_CLOSE_ON_ENTER) {
            config.close_choice_on_enter = parse_bool(&value).ok_or_else(|| {
                PopupError::InvalidConfig(format!("{ENV_CLOSE_ON_ENTER}={value:?} is not a boolean"))
            })?;
        }

        Ok(config)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn env_override_bool<F>(get_env: &F, key: &str) -> Option<bool>
where
    F: Fn(&str) -> Option<String>,
{
    get_env(key).and_then(|value| parse_bool(&value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = PopupConfig::default();
        assert_eq!(config, PopupConfig::new());
        assert_eq!(config.box_style, BoxStyle::Rounded);
        assert!(!config.close_choice_on_enter);
    }

    #[test]
    fn builder() {
        let config = PopupConfig::new()
            .box_style(BoxStyle::Double)
            .close_choice_on_enter(true);
        assert_eq!(config.box_style, BoxStyle::Double);
        assert!(config.close_choice_on_enter);
    }

    #[test]
    fn env_overrides_apply() {
        let config = PopupConfig::from_env_with(env(&[
            (ENV_BOX_STYLE, "dotted-bold"),
            (ENV_CLOSE_ON_ENTER, "yes"),
        ]));
        assert_eq!(config.box_style, BoxStyle::DottedBold);
        assert!(config.close_choice_on_enter);
    }

    #[test]
    fn empty_env_is_default() {
        assert_eq!(PopupConfig::from_env_with(env(&[])), PopupConfig::new());
    }

    #[test]
    fn bad_values_fall_back() {
        let config = PopupConfig::from_env_with(env(&[
            (ENV_BOX_STYLE, "wavy"),
            (ENV_CLOSE_ON_ENTER, "maybe"),
        ]));
        assert_eq!(config, PopupConfig::new());
    }

    #[test]
    fn strict_accepts_good_values() {
        let config = PopupConfig::try_from_env_with(env(&[
            (ENV_BOX_STYLE, "bold"),
            (ENV_CLOSE_ON_ENTER, "0"),
        ]))
        .unwrap();
        assert_eq!(config.box_style, BoxStyle::Bold);
        assert!(!config.close_choice_on_enter);
    }

    #[test]
    fn strict_rejects_bad_style() {
        let err = PopupConfig::try_from_env_with(env(&[(ENV_BOX_STYLE, "wavy")])).unwrap_err();
        assert!(matches!(err, PopupError::InvalidConfig(ref msg) if msg.contains("wavy")));
    }

    #[test]
    fn strict_rejects_bad_bool() {
        let err =
            PopupConfig::try_from_env_with(env(&[(ENV_CLOSE_ON_ENTER, "maybe")])).unwrap_err();
        assert_eq!(
            err,
            PopupError::InvalidConfig("TIPBOX_CLOSE_ON_ENTER=\"maybe\" is not a boolean".into())
        );
    }

    #[test]
    fn bool_parsing() {
        for yes in ["1", "true", "TRUE", "yes", "on", " On "] {
            assert_eq!(parse_bool(yes), Some(true), "{yes}");
        }
        for no in ["0", "false", "no", "off"] {
            assert_eq!(parse_bool(no), Some(false), "{no}");
        }
        assert_eq!(parse_bool(""), None);
    }
}
