//! Building blocks of the generic dashboard: header, footer and the chart grid.

use crate::layout::layout_classes;
use dioxus::prelude::*;
use folio_domain::dashboard::{AspectRatio, ChartConfig, ChartDisplay, ChartOptions, ColorMode};

/// Stable identity of a chart slot across re-renders.
#[must_use]
pub fn chart_key(dashboard_id: &str, chart_type: &str, index: usize) -> String {
    format!("{dashboard_id}-{chart_type}-{index}")
}

/// Pre-rendered chart image for `mode`.
#[must_use]
pub fn chart_image_path(chart: &ChartConfig, mode: ColorMode) -> String {
    format!("/charts/{}/{}-{mode}.png", chart.category, chart.chart_type)
}

fn with_extra(base: &str, extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() { base.to_owned() } else { format!("{base} {extra}") }
}

/// Title block above the grid; renders nothing when disabled.
#[component]
pub fn DashboardHeader(enabled: bool, title: String, #[props(default)] class_name: String) -> Element {
    if !enabled {
        return rsx! {};
    }
    let class = with_extra("dashboard-header", &class_name);
    rsx! {
        header { class: "{class}",
            h2 { class: "dashboard-title", "{title}" }
        }
    }
}

/// Text block below the grid; renders nothing when disabled.
#[component]
pub fn DashboardFooter(enabled: bool, text: String, #[props(default)] class_name: String) -> Element {
    if !enabled {
        return rsx! {};
    }
    let class = with_extra("dashboard-footer", &class_name);
    rsx! {
        footer { class: "{class}",
            p { class: "dashboard-footer-text", "{text}" }
        }
    }
}

/// One chart slot per configured chart, in configuration order.
#[component]
pub fn ChartGrid(
    dashboard_id: String,
    layout: String,
    charts: Vec<ChartConfig>,
    options: ChartOptions,
    mode: ColorMode,
    aspect_ratio: AspectRatio,
) -> Element {
    let classes = layout_classes(&layout);
    let slots = charts
        .into_iter()
        .enumerate()
        .map(|(index, chart)| (chart_key(&dashboard_id, &chart.chart_type, index), chart));

    rsx! {
        div { class: "{classes}", "data-layout": "{layout}",
            for (slot_key , chart) in slots {
                ChartSlot {
                    key: "{slot_key}",
                    chart_key: slot_key.clone(),
                    chart,
                    options: options.clone(),
                    mode,
                    aspect_ratio,
                }
            }
        }
    }
}

/// A single chart: title, and unless `title_only`, description and image.
#[component]
pub fn ChartSlot(
    chart_key: String,
    chart: ChartConfig,
    options: ChartOptions,
    mode: ColorMode,
    aspect_ratio: AspectRatio,
) -> Element {
    let display = match options.display_mode {
        ChartDisplay::Full => "chart-slot chart-full",
        ChartDisplay::Compact => "chart-slot chart-compact",
    };
    let class = with_extra(display, options.chart_class_name.as_deref().unwrap_or_default());
    let src = chart_image_path(&chart, mode);
    let ChartConfig { chart_type, title, category, description } = chart;

    rsx! {
        article {
            class: "{class}",
            "data-chart-key": "{chart_key}",
            "data-chart-type": "{chart_type}",
            "data-category": "{category}",
            "data-aspect-ratio": "{aspect_ratio}",
            h3 { class: "chart-title", "{title}" }
            if !options.title_only {
                p { class: "chart-description", "{description}" }
                img {
                    class: "chart-image",
                    src: "{src}",
                    alt: "{title}",
                    loading: "lazy",
                }
            }
        }
    }
}
