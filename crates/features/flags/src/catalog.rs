//! The site's flag table.
//!
//! Order matters: listings, generated env files and per-environment maps follow it.

use folio_domain::flags::{EnvironmentValues, FeatureFlag, FlagCategory};

pub(crate) static FLAGS: &[FeatureFlag] = &[
    FeatureFlag::new("themeSwitcher", "Light/dark theme toggle in the site header", FlagCategory::Ui)
        .default_value(true)
        .environments(EnvironmentValues::uniform(true))
        .build_time(),
    FeatureFlag::new("searchModal", "Client-side full text search dialog", FlagCategory::Ui)
        .default_value(true)
        .environments(EnvironmentValues::uniform(true)),
    FeatureFlag::new("calculators", "Position sizing and risk calculator pages", FlagCategory::Ui)
        .default_value(true)
        .environments(EnvironmentValues::uniform(true))
        .build_time(),
    FeatureFlag::new(
        "calculatorAdvanced",
        "Advanced calculator modes (Kelly sizing, correlation inputs)",
        FlagCategory::Experimental,
    )
    .environments(EnvironmentValues::new(true, true, false))
    .depends_on(&["calculators"]),
    FeatureFlag::new("dashboards", "Chart dashboards built from dashboard configs", FlagCategory::Ui)
        .default_value(true)
        .environments(EnvironmentValues::uniform(true))
        .build_time(),
    FeatureFlag::new(
        "fundamentalDashboard",
        "Fundamental analysis 3x3 dashboard backed by a local data provider",
        FlagCategory::Experimental,
    )
    .environments(EnvironmentValues::development_only())
    .depends_on(&["dashboards"])
    .build_time(),
    FeatureFlag::new("tradingReports", "Performance and validation report listings", FlagCategory::Ui)
        .default_value(true)
        .environments(EnvironmentValues::uniform(true)),
    FeatureFlag::new("similarPosts", "Related posts block under articles", FlagCategory::Ui)
        .default_value(true)
        .environments(EnvironmentValues::uniform(true)),
    FeatureFlag::new("feeds", "RSS, Atom and JSON feed endpoints", FlagCategory::Api)
        .default_value(true)
        .environments(EnvironmentValues::uniform(true)),
    FeatureFlag::new("searchIndexApi", "Pre-built search index endpoint", FlagCategory::Api)
        .default_value(true)
        .environments(EnvironmentValues::uniform(true))
        .depends_on(&["searchModal"]),
    FeatureFlag::new("gtm", "Google Tag Manager snippet", FlagCategory::Analytics)
        .environments(EnvironmentValues::new(false, false, true))
        .build_time(),
    FeatureFlag::new("webVitals", "Core Web Vitals reporting", FlagCategory::Analytics)
        .environments(EnvironmentValues::new(false, true, true))
        .depends_on(&["gtm"]),
    FeatureFlag::new("donationWidget", "Donation and support widget", FlagCategory::Ui)
        .environments(EnvironmentValues::new(true, true, true)),
    FeatureFlag::new("imageOptimization", "Responsive image variants for chart images", FlagCategory::Performance)
        .default_value(true)
        .environments(EnvironmentValues::new(false, true, true))
        .build_time(),
    FeatureFlag::new("prefetchLinks", "Prefetch internal links on hover", FlagCategory::Performance)
        .default_value(true)
        .environments(EnvironmentValues::uniform(true)),
    FeatureFlag::new("viewTransitions", "Animated page transitions", FlagCategory::Experimental)
        .environments(EnvironmentValues::development_only()),
];
