use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logs go to stderr; stdout is reserved for fragments.
///
/// `RUST_LOG` takes precedence over `directive`, which takes precedence over
/// the verbosity defaults.
pub fn init_cli_logger(verbose: bool, directive: Option<&str>) {
    let fallback = match directive {
        Some(directive) => directive,
        None if verbose => "dep_artifacts=debug,info",
        None => "dep_artifacts=warn",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
