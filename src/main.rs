//! Clinic Site
//!
//! Desktop marketing site for a clinic.
//!
//! This is the main entry point for the Dioxus desktop application.
//! Configuration comes from the environment:
//!
//! - `CLINIC_SITE_VARIANT`: built-in content set (`clinic`, `aesthetics`)
//! - `CLINIC_SITE_CONTENT`: path to a TOML/JSON content file
//! - `CLINIC_SITE_WINDOW`: initial window size as `WIDTHxHEIGHT`
//! - `RUST_LOG`: log filter, `info` by default

use clinic_content::SiteConfig;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() {
    // Initialize logging
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .pretty()
        .init();

    // Print startup banner
    println!();
    println!("╔═══════════════════════════════════════════════════════════╗");
    println!("║                                                           ║");
    println!("║   ✚ Clinic Site v{:<41}║", clinic_ui::VERSION);
    println!("║   Desktop marketing site for your clinic                  ║");
    println!("║                                                           ║");
    println!("╚═══════════════════════════════════════════════════════════╝");
    println!();

    let result = SiteConfig::from_env().and_then(|config| {
        tracing::debug!(?config, "resolved configuration");
        clinic_ui::launch(&config)
    });

    if let Err(e) = result {
        tracing::error!("{}", e);
        if e.is_not_found() {
            tracing::error!("Check the path in {}", clinic_content::ENV_CONTENT);
        } else if e.is_validation() {
            tracing::error!("Run `clinic validate` on the content file for a full report");
        }
        std::process::exit(1);
    }
}
