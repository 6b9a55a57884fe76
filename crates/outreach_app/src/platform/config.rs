use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use outreach_engine::{ServiceSettings, DEFAULT_SERVICE_URL};

use super::logging::LogDestination;

/// One day; longer runs are not expected from the automation service.
const MAX_REQUEST_TIMEOUT_SECS: u64 = 24 * 60 * 60;

/// Terminal control panel for the outreach automation service.
#[derive(Debug, Parser)]
#[command(name = "outreach_app", version)]
pub struct Cli {
    /// Base URL of the automation service.
    #[arg(long, env = "OUTREACH_SERVICE_URL", default_value = DEFAULT_SERVICE_URL)]
    pub service_url: String,

    /// Seconds to wait for a TCP connection to the service.
    #[arg(long, default_value_t = 10)]
    pub connect_timeout_secs: u64,

    /// Seconds to wait for a reply. A start reply only arrives after the whole run.
    #[arg(
        long,
        default_value_t = 30 * 60,
        value_parser = clap::value_parser!(u64).range(1..=MAX_REQUEST_TIMEOUT_SECS)
    )]
    pub request_timeout_secs: u64,

    /// Directory for the remembered form and the log file.
    #[arg(long, env = "OUTREACH_STATE_DIR", default_value = ".")]
    pub state_dir: PathBuf,

    /// Where log output goes (defaults to a file for the panel, the terminal otherwise).
    #[arg(long, value_enum)]
    pub log: Option<LogDestination>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Send a single start request without opening the panel.
    Start {
        #[arg(long)]
        query: String,
        /// Page count; validated the same way as in the panel.
        #[arg(long, allow_hyphen_values = true)]
        max_pages: String,
    },
}

impl Cli {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn service_settings(&self) -> ServiceSettings {
        ServiceSettings {
            base_url: self.service_url.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: self.request_timeout(),
        }
    }
}
