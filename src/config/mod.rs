use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub mod settings;

pub use settings::{ClientSettings, EnvKeys, CLIENT_ENV, HARNESS_ENV};

const DEFAULT_FILTER: &str = "ola_client=warn";

/// Initialize logging with environment-based level filtering
///
/// `RUST_LOG` wins over `level`. Output goes to stderr so stdout only ever
/// carries envelopes.
pub fn init_logging(level: Option<&str>) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match level {
        Some(level) => EnvFilter::new(format!("ola_client={},ola={}", level, level)),
        None => EnvFilter::new(DEFAULT_FILTER),
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_names(false)
                .with_file(true)
                .with_line_number(true)
                .with_level(true)
                .compact(),
        )
        .try_init()?;

    tracing::debug!("Structured logging initialized");
    Ok(())
}

/// Initialize logging for testing with reduced verbosity
pub fn init_test_logging() -> anyhow::Result<()> {
    let env_filter = EnvFilter::new("ola_client=debug");

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_test_writer().compact())
        .try_init()
        .or_else(|_| Ok(())) // Ignore if already initialized
}
