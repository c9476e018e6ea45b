use clap::Parser;
use game_helper::{
    config::Config,
    error::ServerError,
    server::{Service, serve},
};
use is_terminal::IsTerminal;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .without_time()
                .with_line_number(true)
                // Don't output colours for logs not being printed to a terminal
                .with_ansi(std::io::stdout().is_terminal()),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    init_tracing();

    let config = Config::parse();
    tracing::debug!("Configuration: {config:?}");

    serve(Service::new(config)).await
}
