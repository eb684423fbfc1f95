//! Dashboard configuration.
//!
//! Dashboards arrive as data from an external configuration source. Every field is
//! defaulted so partial documents still deserialize: a missing or `null` `charts` list is
//! simply an empty dashboard.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use strum_macros::{Display, EnumString};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Used to build stable chart keys.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Layout identifier; selects the render path and the grid classes.
    #[serde(deserialize_with = "null_as_default")]
    pub layout: String,
    #[serde(alias = "layoutConfig")]
    pub layout_config: Option<LayoutConfig>,
    /// Rendering order.
    #[serde(deserialize_with = "null_as_default")]
    pub charts: Vec<ChartConfig>,
}

/// `null` reads as the type's default, same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl DashboardConfig {
    #[must_use]
    pub fn header(&self) -> Option<&HeaderConfig> {
        self.layout_config.as_ref().and_then(|c| c.header.as_ref())
    }

    #[must_use]
    pub fn footer(&self) -> Option<&FooterConfig> {
        self.layout_config.as_ref().and_then(|c| c.footer.as_ref())
    }

    /// Chart options, or the defaults when none are configured.
    #[must_use]
    pub fn chart_options(&self) -> ChartOptions {
        self.layout_config.as_ref().and_then(|c| c.chart_options.clone()).unwrap_or_default()
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    pub header: Option<HeaderConfig>,
    pub footer: Option<FooterConfig>,
    pub chart_options: Option<ChartOptions>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeaderConfig {
    pub enabled: bool,
    pub title: String,
    pub class_name: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FooterConfig {
    pub enabled: bool,
    pub text: String,
    pub class_name: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartOptions {
    pub display_mode: ChartDisplay,
    /// Show only chart titles, without description or image.
    pub title_only: bool,
    pub chart_class_name: Option<String>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ChartDisplay {
    #[default]
    Full,
    Compact,
}

/// One chart slot. Has no identity outside its dashboard.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub chart_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

/// Width/height ratio carried through to chart slots. Not used for layout decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AspectRatio {
    pub width: u16,
    pub height: u16,
}

impl AspectRatio {
    #[must_use]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self::new(16, 9)
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.width, self.height)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAspectRatioError(String);

impl fmt::Display for ParseAspectRatioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid aspect ratio '{}', expected W:H or W/H", self.0)
    }
}

impl std::error::Error for ParseAspectRatioError {}

impl FromStr for AspectRatio {
    type Err = ParseAspectRatioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseAspectRatioError(s.to_owned());
        let (w, h) = s.split_once([':', '/']).ok_or_else(invalid)?;
        let width = w.trim().parse::<u16>().map_err(|_| invalid())?;
        let height = h.trim().parse::<u16>().map_err(|_| invalid())?;
        if width == 0 || height == 0 {
            return Err(invalid());
        }
        Ok(Self::new(width, height))
    }
}
