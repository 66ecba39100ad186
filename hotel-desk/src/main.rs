use anyhow::Context;
use hotel_booking::BookingService;
use hotel_desk::Desk;
use hotel_store::{app_config::Config, FileRepository};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hotel_desk=info,hotel_booking=info,hotel_store=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!(
        "Using {} and {}",
        config.storage.rooms_file.display(),
        config.storage.reservations_file.display()
    );

    let service = BookingService::open(FileRepository::from_config(&config.storage));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut desk = Desk::new(service, config.desk.title, stdin.lock(), stdout.lock());
    desk.run().context("Terminal I/O failed")?;

    Ok(())
}
