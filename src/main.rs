use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Logs go to stderr so the demo transcript on stdout stays readable.
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,banking_demo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = banking_demo::app::run(std::env::args()) {
        tracing::error!(error = %e, "banking demo failed");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
