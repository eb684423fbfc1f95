//! Development-only fundamentals view and its fallbacks.

use crate::layout::layout_classes;
use crate::provider::FundamentalProvider;
use dioxus::prelude::*;
use folio_domain::constants::{FUNDAMENTAL_CELLS, FUNDAMENTAL_LAYOUT};
use tracing::error;

pub const DEV_ONLY_MESSAGE: &str = "The fundamental dashboard is only available in development mode.";
pub const ERROR_MESSAGE: &str = "Something went wrong while loading fundamental data.";

/// Fetches `symbol` from `provider` and lays its metrics out in a 3x3 grid.
///
/// Provider errors propagate to the enclosing error boundary.
#[component]
pub fn FundamentalView(symbol: String, provider: FundamentalProvider) -> Element {
    let snapshot = provider.fetch(&symbol).inspect_err(|e| {
        error!(symbol = %symbol, error = %e, "Fundamental provider failed");
    })?;

    let classes = layout_classes(FUNDAMENTAL_LAYOUT);
    let heading = snapshot.name.unwrap_or_else(|| snapshot.symbol.clone());

    rsx! {
        section { class: "fundamental-dashboard", "data-symbol": "{symbol}",
            h2 { class: "fundamental-title", "{heading}" }
            div { class: "{classes}",
                for metric in snapshot.metrics.into_iter().take(FUNDAMENTAL_CELLS) {
                    div { key: "{metric.label}", class: "fundamental-cell",
                        span { class: "metric-label", "{metric.label}" }
                        span { class: "metric-value", "{metric.value}" }
                    }
                }
            }
        }
    }
}

/// Shown instead of the fundamentals view outside development, or without a provider.
#[component]
pub fn DevOnlyNotice() -> Element {
    rsx! {
        div { class: "dev-only-notice",
            p { "{DEV_ONLY_MESSAGE}" }
        }
    }
}

/// Error boundary fallback; Retry reloads the whole page.
#[component]
pub fn FundamentalErrorPanel() -> Element {
    rsx! {
        div { class: "fundamental-error", role: "alert",
            p { "{ERROR_MESSAGE}" }
            button {
                class: "fundamental-retry",
                r#type: "button",
                onclick: move |_| {
                    _ = document::eval("window.location.reload();");
                },
                "Retry"
            }
        }
    }
}
