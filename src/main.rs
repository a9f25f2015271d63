//! Command-line stylesheet generator.
//!
//! Usage:
//!   tokenstyle select --prefix ant-select
//!   tokenstyle skeleton --dark
//!   tokenstyle select --theme brand.yaml --format json
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;

use tokenstyle::components::select::use_select_style;
use tokenstyle::components::skeleton::use_skeleton_style;
use tokenstyle::{ComponentStyle, StyleRegistry, Theme, ThemeChoice};

/// Generate component stylesheets from design tokens
#[derive(Parser, Debug)]
#[command(name = "tokenstyle", version)]
struct Cli {
    #[command(subcommand)]
    component: Component,

    /// Theme file (.yaml, .yml or .json)
    #[arg(long, global = true, conflicts_with = "dark")]
    theme: Option<PathBuf>,

    /// Use the built-in dark preset
    #[arg(long, global = true)]
    dark: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = Format::Css)]
    format: Format,
}

#[derive(Subcommand, Debug)]
enum Component {
    /// Dropdown select
    Select {
        /// Component class prefix
        #[arg(long, default_value = "ant-select")]
        prefix: String,

        /// Library-wide class prefix
        #[arg(long, default_value = "ant")]
        root_prefix: String,

        /// Icon class prefix
        #[arg(long, default_value = "anticon")]
        icon_prefix: String,
    },
    /// Loading placeholder
    Skeleton {
        /// Component class prefix
        #[arg(long, default_value = "ant-skeleton")]
        prefix: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Css,
    Json,
}

fn load_theme(cli: &Cli) -> Result<Theme> {
    match &cli.theme {
        Some(path) => Theme::from_file(path)
            .with_context(|| format!("failed to load theme from {}", path.display())),
        None if cli.dark => Ok(Theme::dark("dark")),
        None => Ok(Theme::default()),
    }
}

fn render(style: &ComponentStyle, format: Format) -> Result<String> {
    match format {
        Format::Css => Ok(style.style.css().to_string()),
        Format::Json => serde_json::to_string_pretty(style.style.trees())
            .context("failed to serialize rule trees"),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let theme = load_theme(&cli)?;
    debug!(theme = theme.id(), hash_id = %theme.hash_id(), "theme loaded");

    let registry = StyleRegistry::global();
    let choice = ThemeChoice::Theme(&theme);
    let style = match &cli.component {
        Component::Select {
            prefix,
            root_prefix,
            icon_prefix,
        } => use_select_style(registry, choice, root_prefix, prefix, icon_prefix),
        Component::Skeleton { prefix } => use_skeleton_style(registry, choice, prefix),
    }
    .context("failed to generate styles")?;

    println!("{}", render(&style, cli.format)?);
    Ok(())
}
