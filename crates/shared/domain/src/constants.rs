//! String constants that form external contracts (generated env files, build defines,
//! dashboard configuration files).

/// Prefix of the environment variable carrying a flag override.
pub const ENV_VAR_PREFIX: &str = "PUBLIC_FEATURE_";

/// Prefix of a build-time define.
pub const BUILD_DEFINE_PREFIX: &str = "__FEATURE_";

/// Suffix of a build-time define.
pub const BUILD_DEFINE_SUFFIX: &str = "__";

/// Layout identifier routed to the fundamental-analysis view.
pub const FUNDAMENTAL_LAYOUT: &str = "fundamental_3x3";

/// Entity shown by the fundamental view when none is selected.
pub const DEFAULT_SYMBOL: &str = "SPY";

/// Number of metric cells in the fundamental grid.
pub const FUNDAMENTAL_CELLS: usize = 9;
