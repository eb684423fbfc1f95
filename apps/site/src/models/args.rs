//! # CLI Argument Definitions
//!
//! Command-line structure of the `folio` tool, parsed with `clap`.

use clap::{Parser, Subcommand};
use folio::domain::dashboard::{AspectRatio, ColorMode};
use folio::domain::flags::{Environment, FlagCategory};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "folio")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Feature flags, dashboards and content tooling for the Folio site")]
pub struct Cli {
    /// Config file; defaults to `folio.*` in the working directory when present
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: AppCommands,
}

#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Inspect and export feature flags
    Flags {
        #[command(subcommand)]
        action: FlagAction,
    },
    /// Render dashboards
    Dashboard {
        #[command(subcommand)]
        action: DashboardAction,
    },
    /// Tag, category and related-post reports
    Content {
        #[command(subcommand)]
        action: ContentAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum FlagAction {
    /// List flags with their effective value
    List {
        /// Environment to resolve against (defaults to `site.environment`)
        #[arg(short, long)]
        env: Option<Environment>,

        /// Only flags of this category
        #[arg(long)]
        category: Option<FlagCategory>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Check that every declared dependency exists; exits non-zero otherwise
    Validate {},
    /// Generate a `.env` file with one PUBLIC_FEATURE_* line per flag
    EnvFile {
        #[arg(short, long)]
        env: Environment,

        /// Write to this file instead of stdout (relative paths resolve under `site.output_dir`)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print build-time defines as JSON
    Defines {
        #[arg(short, long)]
        env: Environment,
    },
}

#[derive(Debug, Subcommand)]
pub enum DashboardAction {
    /// Render a dashboard configuration (JSON) to HTML
    Render {
        /// Dashboard configuration file
        config: PathBuf,

        #[arg(short, long, default_value = "light")]
        mode: ColorMode,

        /// Symbol for the fundamentals view (defaults to `dashboards.default_symbol`)
        #[arg(short, long)]
        symbol: Option<String>,

        /// Chart aspect ratio, `W:H` or `W/H`
        #[arg(long, default_value = "16:9")]
        aspect_ratio: AspectRatio,

        /// Write to this file instead of stdout (relative paths resolve under `site.output_dir`)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Subcommand)]
pub enum ContentAction {
    /// Count tags across published posts
    Tags {
        /// JSON array of posts
        posts: PathBuf,

        #[arg(long)]
        json: bool,
    },
    /// Count categories across published posts
    Categories {
        /// JSON array of posts
        posts: PathBuf,

        #[arg(long)]
        json: bool,
    },
    /// List posts related to one post
    Similar {
        /// JSON array of posts
        posts: PathBuf,

        slug: String,

        #[arg(short, long, default_value_t = 5)]
        limit: usize,
    },
}
