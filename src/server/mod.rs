pub use config::*;
pub use router::*;
pub use server::*;

/// Entry point for starting a server.
mod server;
/// Config for a server.
mod config;
/// Router for routing requests.
mod router;
/// Connection for storing state about a connection to a client.
mod connection;
/// Utility functions for polling IO and enabling async listening.
mod poll;
/// Resumable writer for serialized responses.
mod response_writer;
