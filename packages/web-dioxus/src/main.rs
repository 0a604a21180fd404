//! Company dashboard - Dioxus Fullstack Web Application
//!
//! Lists draft job openings fetched from the listings REST API.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```

fn main() {
    #[cfg(feature = "server")]
    init_tracing();

    // In fullstack mode, this handles both server and client
    dioxus::launch(lowongan_web::app::App);
}

#[cfg(feature = "server")]
fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,lowongan_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
