#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "sivu-render")]
#[command(about = "Render page texts from a content store into the site's page markup")]
pub struct CliConfig {
    /// TOML configuration file; flags override its values
    #[arg(short, long)]
    pub config: Option<String>,

    /// Page to render: home, about or contact
    #[arg(long)]
    pub page: Option<String>,

    /// Page URL; the HTTP content store and relative links resolve against it
    #[arg(long)]
    pub base_url: Option<String>,

    /// Read texts from this directory instead of over HTTP
    #[arg(long)]
    pub content_dir: Option<String>,

    /// Output file, stdout when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format: html or json
    #[arg(long)]
    pub format: Option<String>,

    /// Show the fallback message instead of defaults when the store is unreachable
    #[arg(long)]
    pub fail_on_transport_error: bool,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
