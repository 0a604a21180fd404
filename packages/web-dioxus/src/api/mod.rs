//! REST client for the listings backend

mod client;
mod config;
mod error;
mod server_fns;

pub use client::*;
pub use config::*;
pub use error::*;
pub use server_fns::*;
