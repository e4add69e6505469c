use std::io::Error;

use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{ColorChoice, TerminalMode, TermLogger};

use httpbox::args::Args;
use httpbox::handlers;
use httpbox::server;
use httpbox::server::Config;

fn main() -> Result<(), Error> {
    let _ = TermLogger::init(
        LevelFilter::Info,
        simplelog::Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );

    let args = Args::parse();
    let addr = format!("{}:{}", args.host, args.port);

    let router = handlers::router(args.directory);

    info!("listening on {}", addr);
    server::listen_http(Config {
        addr,
        connection_handler_threads: 5,
        router,
    })
}
