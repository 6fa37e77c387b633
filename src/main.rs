use actix_web::{middleware, App, HttpServer};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use uni_finder::config::{LoggingSettings, Settings};
use uni_finder::routes::{self, BotState, PollSettings};
use uni_finder::{Dataset, Matcher, SessionStore, TelegramClient};

/// Initialize logging; RUST_LOG wins over the configured level
fn init_tracing(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

fn startup_error(what: &str, e: impl std::fmt::Display) -> io::Error {
    error!("{}: {}", what, e);
    io::Error::new(io::ErrorKind::Other, format!("{}: {}", what, e))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load();
    let logging = settings
        .as_ref()
        .map(|s| s.logging.clone())
        .unwrap_or_default();
    init_tracing(&logging);

    info!("Starting Uni Finder bot...");

    let settings = settings.map_err(|e| startup_error("Failed to load configuration", e))?;

    info!("Configuration loaded successfully");

    let dataset = Dataset::load(&settings.dataset.path, &settings.dataset.gpa_wildcard)
        .map_err(|e| startup_error("Failed to load dataset", e))?;

    info!("Loaded {} universities from {}", dataset.len(), settings.dataset.path);

    let telegram = TelegramClient::new(
        settings.telegram.api_url.clone(),
        settings.telegram.bot_token.clone(),
        settings.telegram.poll_timeout_secs,
    )
    .map_err(|e| startup_error("Failed to create Telegram client", e))?;

    let bot = BotState::new(
        Arc::new(telegram),
        Arc::new(SessionStore::new()),
        Arc::new(dataset),
        Matcher::new(settings.matching.limit),
    );

    let poll = PollSettings {
        timeout_secs: settings.telegram.poll_timeout_secs,
        error_delay: Duration::from_secs(settings.telegram.poll_error_delay_secs),
    };

    let bot_task = tokio::spawn(async move { bot.run_polling(poll).await });

    // Liveness listener for the uptime monitor
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(1);

    info!("Starting liveness server on {}:{}", host, port);

    let server = HttpServer::new(|| {
        App::new()
            .wrap(middleware::Logger::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run();

    tokio::select! {
        result = server => result,
        joined = bot_task => {
            let reason = match joined {
                Ok(()) => "stopped".to_string(),
                Err(e) => e.to_string(),
            };
            Err(startup_error("Bot polling ended", reason))
        }
    }
}
