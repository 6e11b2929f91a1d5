use clap::{CommandFactory, Parser};
use std::path::PathBuf;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64)";

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "video-url-lister", version)]
#[command(about = "List video and playlist URLs found on a web page", long_about = None)]
pub struct Args {
    /// Page to scan for video links
    pub playlist_url: String,

    /// File to write the URLs to (overwritten)
    pub output_file: PathBuf,

    /// Request timeout in seconds
    #[arg(short, long, default_value = "15")]
    pub timeout: u64,

    /// Custom user agent
    #[arg(short, long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Proxy URL (e.g., http://proxy.example.com:8080)
    #[arg(short, long)]
    pub proxy: Option<String>,

    /// Output format: text, json, or csv
    #[arg(short, long, default_value = "text")]
    pub format: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "info"
        }
    }
}

/// Usage text printed on bad invocations
pub fn usage() -> String {
    Args::command().render_usage().to_string()
}
