#![allow(non_snake_case)]

use storefront::client::{self, config::Config};

fn main() {
    let config = match Config::from_build_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = dioxus_logger::init(config.log_level) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    dioxus_logger::tracing::info!("Starting storefront against {}", config.api_base);

    dioxus::LaunchBuilder::new()
        .with_context(config)
        .launch(client::App);
}
