use folio_dashboard::{
    DEV_ONLY_MESSAGE, DashboardError, DashboardProps, ERROR_MESSAGE, FundamentalProvider,
    FundamentalSnapshot, Metric, StaticFundamentals, render_dashboard,
};
use folio_domain::dashboard::DashboardConfig;
use folio_domain::flags::Environment;
use std::io::Write;

fn fundamental_config() -> DashboardConfig {
    DashboardConfig { id: "fundamentals".into(), layout: "fundamental_3x3".into(), ..Default::default() }
}

fn snapshot(symbol: &str, metrics: usize) -> FundamentalSnapshot {
    FundamentalSnapshot {
        symbol: symbol.into(),
        name: None,
        metrics: (0..metrics)
            .map(|i| Metric { label: format!("metric-{i}"), value: format!("{i}.0") })
            .collect(),
    }
}

#[test]
fn without_provider_shows_dev_only_notice() {
    let html = render_dashboard(DashboardProps::new(fundamental_config()));
    assert!(html.contains(DEV_ONLY_MESSAGE));
    assert!(!html.contains("fundamental-cell"));
}

#[test]
fn outside_development_shows_dev_only_notice() {
    let provider: FundamentalProvider = [snapshot("SPY", 3)].into_iter().collect::<StaticFundamentals>().into();
    let props = DashboardProps::new(fundamental_config())
        .with_provider(provider)
        .with_environment(Environment::Production);
    let html = render_dashboard(props);
    assert!(html.contains(DEV_ONLY_MESSAGE));
}

#[test]
fn renders_default_symbol_with_at_most_nine_cells() {
    let fundamentals: StaticFundamentals = [snapshot("SPY", 12)].into_iter().collect();
    let props = DashboardProps::new(fundamental_config()).with_provider(fundamentals);
    let html = render_dashboard(props);

    assert!(html.contains("data-symbol=\"SPY\""));
    assert_eq!(html.matches("class=\"fundamental-cell\"").count(), 9);
    assert!(html.contains("metric-8"));
    assert!(!html.contains("metric-9"));
    assert!(!html.contains(DEV_ONLY_MESSAGE));
}

#[test]
fn selected_symbol_is_passed_to_provider() {
    let provider = FundamentalProvider::new(|symbol: &str| Ok::<_, DashboardError>(snapshot(symbol, 1)));
    let props = DashboardProps::new(fundamental_config()).with_provider(provider).with_symbol("QQQ");
    let html = render_dashboard(props);
    assert!(html.contains("data-symbol=\"QQQ\""));
}

#[test]
fn provider_failure_renders_error_panel() {
    let props = DashboardProps::new(fundamental_config())
        .with_provider(StaticFundamentals::default())
        .with_symbol("NOPE");
    let html = render_dashboard(props);

    assert!(html.contains(ERROR_MESSAGE));
    assert!(html.contains("Retry"));
    assert!(!html.contains("fundamental-cell"));
}

#[test]
fn fixture_file_feeds_the_view() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"[{{"symbol": "IWM", "name": "Russell 2000", "metrics": [{{"label": "P/E", "value": "18.2"}}]}}]"#)
        .unwrap();

    let fundamentals = StaticFundamentals::load(file.path()).unwrap();
    let props = DashboardProps::new(fundamental_config()).with_provider(fundamentals).with_symbol("iwm");
    let html = render_dashboard(props);

    assert!(html.contains("Russell 2000"));
    assert!(html.contains("18.2"));
}
