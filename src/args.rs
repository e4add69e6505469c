use std::path::PathBuf;

use clap::Parser;

/// A small HTTP server with echo, user-agent and file endpoints.
#[derive(Parser)]
#[command(version, about)]
pub struct Args {
    /// (Optional) Host name or IP address to serve from.
    #[arg(long, default_value_t = String::from("127.0.0.1"))]
    pub host: String,
    /// (Optional) Port number to open on host.
    #[arg(short, long, default_value_t = 4221)]
    pub port: u16,
    /// (Optional) Directory served by the /files endpoints.
    #[arg(long)]
    pub directory: Option<PathBuf>,
}
