//! Data for the fundamentals dashboard.
//!
//! The renderer only ever sees a [`FundamentalProvider`]; where the numbers come from is
//! up to the [`FundamentalSource`] behind it. [`StaticFundamentals`] serves a JSON fixture,
//! and any `Fn(&str) -> Result<FundamentalSnapshot, DashboardError>` works too.

use crate::error::{DashboardError, DashboardErrorExt};
use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::rc::Rc;
use tracing::info;

/// One labelled figure, e.g. `P/E` / `24.1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FundamentalSnapshot {
    pub symbol: String,
    pub name: Option<String>,
    /// Display order; the view shows at most nine.
    pub metrics: Vec<Metric>,
}

/// Returns fundamentals for a ticker symbol.
pub trait FundamentalSource {
    /// # Errors
    /// Returns [`DashboardError::Provider`] when nothing is known about `symbol`.
    fn fetch(&self, symbol: &str) -> Result<FundamentalSnapshot, DashboardError>;
}

impl<F> FundamentalSource for F
where
    F: Fn(&str) -> Result<FundamentalSnapshot, DashboardError>,
{
    fn fetch(&self, symbol: &str) -> Result<FundamentalSnapshot, DashboardError> {
        self(symbol)
    }
}

/// Shared handle to a [`FundamentalSource`].
///
/// Two handles are equal only when they point at the same source, which is what
/// component props need to skip re-rendering.
#[derive(Clone)]
pub struct FundamentalProvider(Rc<dyn FundamentalSource>);

impl FundamentalProvider {
    pub fn new(source: impl FundamentalSource + 'static) -> Self {
        Self(Rc::new(source))
    }

    /// # Errors
    /// Propagates the source's error.
    pub fn fetch(&self, symbol: &str) -> Result<FundamentalSnapshot, DashboardError> {
        self.0.fetch(symbol)
    }
}

impl PartialEq for FundamentalProvider {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for FundamentalProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FundamentalProvider").finish_non_exhaustive()
    }
}

/// Fixed snapshots keyed by upper-case symbol.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StaticFundamentals {
    snapshots: FxHashMap<String, FundamentalSnapshot>,
}

impl StaticFundamentals {
    /// Parses a JSON array of snapshots. Later entries replace earlier ones with the same
    /// symbol.
    ///
    /// # Errors
    /// Returns [`DashboardError::Json`] when the document is not an array of snapshots.
    pub fn from_json(json: &str) -> Result<Self, DashboardError> {
        let list = serde_json::from_str::<Vec<FundamentalSnapshot>>(json)
            .context("Parsing fundamentals")?;
        Ok(list.into_iter().collect())
    }

    /// # Errors
    /// Returns [`DashboardError::Io`] if the file cannot be read, or
    /// [`DashboardError::Json`] if it is malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DashboardError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .context(format!("Reading fundamentals from {}", path.display()))?;
        let fundamentals = Self::from_json(&json)?;
        info!(path = %path.display(), symbols = fundamentals.len(), "Loaded fundamentals fixture");
        Ok(fundamentals)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }
}

impl FromIterator<FundamentalSnapshot> for StaticFundamentals {
    fn from_iter<I: IntoIterator<Item = FundamentalSnapshot>>(iter: I) -> Self {
        let snapshots =
            iter.into_iter().map(|s| (s.symbol.trim().to_ascii_uppercase(), s)).collect();
        Self { snapshots }
    }
}

impl FundamentalSource for StaticFundamentals {
    fn fetch(&self, symbol: &str) -> Result<FundamentalSnapshot, DashboardError> {
        self.snapshots.get(&symbol.trim().to_ascii_uppercase()).cloned().ok_or_else(|| {
            DashboardError::Provider {
                symbol: symbol.to_owned(),
                message: "symbol not present in fixture".into(),
                context: None,
            }
        })
    }
}

impl From<StaticFundamentals> for FundamentalProvider {
    fn from(source: StaticFundamentals) -> Self {
        Self::new(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"[
        {"symbol": "spy", "name": "SPDR S&P 500", "metrics": [{"label": "P/E", "value": "24.1"}]},
        {"symbol": "QQQ", "metrics": []}
    ]"#;

    #[test]
    fn lookups_ignore_symbol_case() {
        let fundamentals = StaticFundamentals::from_json(FIXTURE).unwrap();
        assert_eq!(fundamentals.len(), 2);
        assert_eq!(fundamentals.fetch("SPY").unwrap().metrics.len(), 1);
        assert_eq!(fundamentals.fetch(" qqq ").unwrap().symbol, "QQQ");
    }

    #[test]
    fn unknown_symbol_is_a_provider_error() {
        let err = StaticFundamentals::from_json(FIXTURE).unwrap().fetch("AAPL").unwrap_err();
        assert!(matches!(err, DashboardError::Provider { ref symbol, .. } if symbol == "AAPL"));
    }

    #[test]
    fn malformed_fixture_is_a_json_error() {
        let err = StaticFundamentals::from_json("{").unwrap_err();
        assert!(matches!(err, DashboardError::Json { .. }));
        assert!(err.to_string().contains("Parsing fundamentals"));
    }

    #[test]
    fn handles_compare_by_identity() {
        let a = FundamentalProvider::from(StaticFundamentals::default());
        let b = FundamentalProvider::from(StaticFundamentals::default());
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn closures_are_sources() {
        let provider = FundamentalProvider::new(|symbol: &str| {
            Ok::<_, DashboardError>(FundamentalSnapshot {
                symbol: symbol.to_owned(),
                ..FundamentalSnapshot::default()
            })
        });
        assert_eq!(provider.fetch("IWM").unwrap().symbol, "IWM");
    }
}
