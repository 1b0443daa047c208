//! Linter config definition.

use serde::Deserialize;
use serde::Serialize;

/// Define the lint rule config and doc generation utilities.
macro_rules! define_lint_rule_config {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[doc = $doc:literal])+
                #[lints($($lints:literal),+ $(,)?)]
                $field:ident: $ty:ty = $default:expr,
            )+
        }
    ) => {
        $(#[$meta])*
        pub struct $name {
            $(
                $(#[doc = $doc])+
                pub $field: $ty,
            )+
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $(
                        $field: $default,
                    )+
                }
            }
        }

        impl $name {
            /// **(NOT A PUBLIC API)** Get the metadata for all config fields
            #[doc(hidden)]
            pub fn fields() -> &'static [ConfigField] {
                &[
                    $(
                        ConfigField {
                            name: stringify!($field),
                            applicable_lints: &[$($lints),+],
                        }
                    ),+
                ]
            }
        }
    }
}

/// **(NOT A PUBLIC API)** A field in the lint [`Config`].
#[doc(hidden)]
#[derive(Debug)]
pub struct ConfigField {
    /// The name of the field.
    pub name: &'static str,
    /// All lints that this field applies to.
    pub applicable_lints: &'static [&'static str],
}

define_lint_rule_config! {
    /// The configuration for lint rules.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(default, deny_unknown_fields)]
    pub struct Config {
        /// The maximum length of `img` alternative text before it is reported
        /// as too long.
        ///
        /// ## Example
        ///
        /// ```toml
        /// max_alt_text_length = 100
        /// ```
        #[lints("img-element")]
        max_alt_text_length: usize = 150,
        /// The maximum length of link text and link labels.
        #[lints("a-element")]
        max_link_text_length: usize = 150,
        /// The maximum length of heading text.
        #[lints("heading-element")]
        max_heading_text_length: usize = 120,
        /// The maximum length of the `title` element's text.
        #[lints("title-element")]
        max_title_length: usize = 60,
        /// The smallest `maximum-scale` a viewport `meta` element may set
        /// without restricting zoom.
        ///
        /// ## Example
        ///
        /// ```toml
        /// min_viewport_max_scale = 5.0
        /// ```
        #[lints("meta-element")]
        min_viewport_max_scale: f64 = 2.0,
    }
}

impl Config {
    /// Parses a configuration from TOML.
    ///
    /// Fields missing from the document keep their defaults.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }
}

/// Represents an error in lint configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration is not valid TOML for its shape.
    #[error("invalid lint configuration")]
    Toml(#[from] toml::de::Error),
    /// A profile name is not known.
    #[error("unknown profile `{0}`")]
    UnknownProfile(String),
}
