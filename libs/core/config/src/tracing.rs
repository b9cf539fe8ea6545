use crate::Environment;
use tracing::{debug, info};
use tracing_subscriber::{prelude::*, EnvFilter};

const DEFAULT_DEV_FILTER: &str = "debug,tower_http=debug,sea_orm=info,sqlx=warn";
const DEFAULT_PROD_FILTER: &str = "info,tower_http=info,sea_orm=warn,sqlx=warn";

/// Install color-eyre before any fallible startup work.
///
/// Shows error locations and hides the environment section. Calling it more
/// than once is harmless.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Initialize the global subscriber.
///
/// - Production: flattened JSON events, no module targets.
/// - Development: pretty multi-line output.
///
/// Both attach [`tracing_error::ErrorLayer`] so eyre reports carry span
/// traces. `RUST_LOG` overrides the default filter. A second call is a no-op.
pub fn init_tracing(environment: &Environment) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if environment.is_production() {
            DEFAULT_PROD_FILTER
        } else {
            DEFAULT_DEV_FILTER
        })
    });

    let result = if environment.is_production() {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_file(false)
                    .with_line_number(false)
                    .pretty(),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    };

    match result {
        Ok(()) => info!(?environment, "Tracing initialized"),
        Err(_) => debug!("Tracing already initialized, skipping"),
    }
}
