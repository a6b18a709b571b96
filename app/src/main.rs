#![deny(clippy::all, clippy::cargo)]
#![warn(clippy::nursery, clippy::pedantic)]
#![allow(clippy::cargo_common_metadata, clippy::multiple_crate_versions)]

use chrono::NaiveDate;
use clap::Parser;
use config::{AppConfig, FromEnv};
use domain::exporting::Exporter;
use domain::formatting::PlayerFormatter;
use domain::models::DateRange;
use domain::repositories::PlayerRepository;
use domain::screens::{ListingEvent, ListingScreen, SummaryScreen};
use infra_file_saver_impl::DirectoryFileSaver;
use infra_upstream_repository_impl::HttpUpstreamRepository;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod views;

#[derive(clap::Parser)]
#[command(name = "trivia-dashboard", about = "Player statistics of the trivia service")]
enum Command {
    /// Show the total number of players.
    Summary,
    /// List players, optionally filtered by creation day and exported as CSV.
    Players(PlayersCommand),
}

#[derive(clap::Args)]
struct PlayersCommand {
    /// First creation day to include (YYYY-MM-DD, local time).
    #[arg(long)]
    start: Option<NaiveDate>,

    /// Last creation day to include (YYYY-MM-DD, local time).
    #[arg(long)]
    end: Option<NaiveDate>,

    /// Save the filtered players as CSV into the export directory.
    #[arg(long)]
    export: bool,
}

async fn show_summary(repository: &(impl PlayerRepository + Sync)) {
    let screen = SummaryScreen::new().load(repository).await;
    println!("{}", views::summary(&screen));
}

async fn show_players(
    repository: &(impl PlayerRepository + Sync),
    config: &AppConfig,
    command: PlayersCommand,
) -> anyhow::Result<()> {
    let formatter = PlayerFormatter::local(config.display_config.score_formatting());

    let screen = ListingScreen::new()
        .load(repository)
        .await
        .reduce(ListingEvent::RangeChanged(DateRange::new(
            command.start,
            command.end,
        )));
    println!("{}", views::listing(&screen, &formatter));

    if command.export {
        let exporter = Exporter {
            formatter,
            quoting: config.export_config.quoting,
        };
        let saver = DirectoryFileSaver::new(&config.export_config.directory);

        match exporter.export(screen.filtered_players(), &saver)? {
            Some(file_name) => println!(
                "Exported to {}",
                saver.directory().join(file_name).display()
            ),
            None => println!("Nothing to export"),
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // initialize tracing
    // see https://github.com/tokio-rs/axum/blob/79a0a54bc9f0f585c974b5e6793541baff980662/examples/tracing-aka-logging/src/main.rs
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let command = Command::parse();
    let config = AppConfig::from_env()?;
    tracing::debug!(?config, "read config");

    let repository = HttpUpstreamRepository::try_new(&config.upstream_config)?;

    match command {
        Command::Summary => show_summary(&repository).await,
        Command::Players(command) => show_players(&repository, &config, command).await?,
    }

    Ok(())
}
