use std::borrow::Cow;

/// Errors raised while loading or fetching dashboard data.
#[folio_derive::folio_error]
pub enum DashboardError {
    /// The data provider has nothing usable for the requested symbol.
    #[error("No fundamental data for '{symbol}'{}: {message}", format_context(.context))]
    Provider { symbol: String, message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Malformed dashboard data{}: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal dashboard error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
