use crate::commands::Commands;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "sk")]
#[command(about = "Session keeper: sign in to the API and keep the credentials")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Config directory (default: SK_CONFIG_DIR or the platform config dir)
    #[arg(long, global = true)]
    pub(crate) config_dir: Option<PathBuf>,

    /// API base URL, overrides api.base_url
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}

impl Cli {
    pub fn pretty(&self) -> bool {
        self.pretty
    }
}
