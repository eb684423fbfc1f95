use crate::components::{ChartGrid, DashboardFooter, DashboardHeader};
use crate::fundamental::{DevOnlyNotice, FundamentalErrorPanel, FundamentalView};
use crate::layout::LayoutKind;
use crate::provider::FundamentalProvider;
use dioxus::prelude::*;
use folio_domain::constants::DEFAULT_SYMBOL;
use folio_domain::dashboard::{AspectRatio, ColorMode, DashboardConfig};
use folio_domain::flags::Environment;
use tracing::debug;

/// Everything a dashboard render depends on.
#[derive(Props, Clone, PartialEq, Debug)]
pub struct DashboardProps {
    pub config: DashboardConfig,
    #[props(default)]
    pub mode: ColorMode,
    /// Passed through to chart slots; never used for layout.
    #[props(default)]
    pub aspect_ratio: AspectRatio,
    /// Entity for the fundamentals view; [`DEFAULT_SYMBOL`] when unset.
    pub symbol: Option<String>,
    pub provider: Option<FundamentalProvider>,
    /// The fundamentals view requires [`Environment::Development`].
    #[props(default)]
    pub environment: Environment,
}

impl DashboardProps {
    #[must_use]
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            mode: ColorMode::default(),
            aspect_ratio: AspectRatio::default(),
            symbol: None,
            provider: None,
            environment: Environment::default(),
        }
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: ColorMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub const fn with_aspect_ratio(mut self, aspect_ratio: AspectRatio) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    #[must_use]
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    #[must_use]
    pub fn with_provider(mut self, provider: impl Into<FundamentalProvider>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    #[must_use]
    pub const fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Selected symbol, falling back to [`DEFAULT_SYMBOL`] when unset or blank.
    #[must_use]
    pub fn symbol(&self) -> String {
        self.symbol
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SYMBOL)
            .to_owned()
    }
}

type RenderFn = fn(&DashboardProps) -> Element;

impl LayoutKind {
    const fn renderer(self) -> RenderFn {
        match self {
            Self::Generic => render_generic,
            Self::Fundamental => render_fundamental,
        }
    }
}

/// Root component: resolves the layout kind and hands off to its renderer.
#[component]
pub fn Dashboard(props: DashboardProps) -> Element {
    let kind = LayoutKind::resolve(&props.config.layout);
    let body = (kind.renderer())(&props);

    let DashboardConfig { id, layout, .. } = &props.config;
    let mode = props.mode;

    rsx! {
        div {
            class: "dashboard dashboard-{mode}",
            "data-dashboard-id": "{id}",
            "data-layout": "{layout}",
            "data-color-mode": "{mode}",
            {body}
        }
    }
}

fn render_generic(props: &DashboardProps) -> Element {
    let config = &props.config;
    let header = config.header().cloned().unwrap_or_default();
    let footer = config.footer().cloned().unwrap_or_default();

    rsx! {
        DashboardHeader {
            enabled: header.enabled,
            title: header.title,
            class_name: header.class_name.unwrap_or_default(),
        }
        ChartGrid {
            dashboard_id: config.id.clone(),
            layout: config.layout.clone(),
            charts: config.charts.clone(),
            options: config.chart_options(),
            mode: props.mode,
            aspect_ratio: props.aspect_ratio,
        }
        DashboardFooter {
            enabled: footer.enabled,
            text: footer.text,
            class_name: footer.class_name.unwrap_or_default(),
        }
    }
}

fn render_fundamental(props: &DashboardProps) -> Element {
    let provider = match (&props.provider, props.environment.is_development()) {
        (Some(provider), true) => provider.clone(),
        (provider, dev) => {
            debug!(has_provider = provider.is_some(), dev, "Fundamental dashboard unavailable");
            return rsx! { DevOnlyNotice {} };
        },
    };

    rsx! {
        ErrorBoundary {
            handle_error: |_: ErrorContext| rsx! { FundamentalErrorPanel {} },
            FundamentalView { symbol: props.symbol(), provider }
        }
    }
}

/// Renders a dashboard to an HTML string.
///
/// Output is deterministic: the same props always give the same markup.
#[must_use]
pub fn render_dashboard(props: DashboardProps) -> String {
    let mut dom = VirtualDom::new_with_props(Dashboard, props);
    dom.rebuild_in_place();
    // Error boundaries re-render after the first pass.
    _ = dom.render_immediate_to_vec();
    dioxus_ssr::render(&dom)
}
