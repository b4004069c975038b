use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quake-search")]
#[command(about = "Search the Quake internet-asset service from the command line", long_about = None)]
pub struct Args {
    /// Query to search, e.g. `port: 443 AND country: US`
    #[arg(short, long)]
    pub query: Option<String>,

    /// Output format: txt, json or all
    #[arg(short, long)]
    pub output: Option<String>,

    /// File to save the output to, instead of a name derived from the query
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Start time, YYYY-mm-dd[ HH:MM:SS]
    #[arg(short, long)]
    pub start_time: Option<String>,

    /// End time, YYYY-mm-dd[ HH:MM:SS]
    #[arg(short, long)]
    pub end_time: Option<String>,

    #[arg(short, long, default_value = "quake.conf", env = "QUAKE_CONFIG")]
    pub config: PathBuf,

    #[arg(long, default_value = "https://quake.360.net", env = "QUAKE_BASE_URL")]
    pub base_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    #[arg(short, long, default_value = "warn")]
    pub log_level: String,
}
