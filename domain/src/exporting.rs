use std::fmt::Display;

use anyhow::anyhow;
use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;

use crate::formatting::{PlayerFormatter, COLUMNS};
use crate::models::Player;
use crate::repositories::{ExportFile, FileSaver};

/// How cells are protected against embedded delimiters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportQuoting {
    /// Quote cells containing a delimiter, quote or line break; double inner quotes.
    #[default]
    Necessary,
    /// Join cells verbatim. Output is ambiguous when a cell contains a comma.
    Never,
}

impl From<ExportQuoting> for csv::QuoteStyle {
    fn from(quoting: ExportQuoting) -> Self {
        match quoting {
            ExportQuoting::Necessary => csv::QuoteStyle::Necessary,
            ExportQuoting::Never => csv::QuoteStyle::Never,
        }
    }
}

pub fn export_file_name(at: DateTime<Utc>) -> String {
    format!("players_{}.csv", at.timestamp_millis())
}

pub fn players_to_csv<Tz: TimeZone>(
    players: &[Player],
    formatter: &PlayerFormatter<Tz>,
    quoting: ExportQuoting,
) -> anyhow::Result<Vec<u8>>
where
    Tz::Offset: Display,
{
    let mut writer = csv::WriterBuilder::new()
        .quote_style(quoting.into())
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(COLUMNS)?;
    for player in players {
        writer.write_record(formatter.cells(player))?;
    }

    writer
        .into_inner()
        .map_err(|err| anyhow!("failed to flush csv buffer: {}", err.error()))
}

#[derive(Debug, Clone)]
pub struct Exporter<Tz: TimeZone> {
    pub formatter: PlayerFormatter<Tz>,
    pub quoting: ExportQuoting,
}

impl<Tz: TimeZone> Exporter<Tz>
where
    Tz::Offset: Display,
{
    /// Stages the CSV file for `players` as of `at`. `None` when there is nothing to export.
    pub fn build(
        &self,
        players: &[Player],
        at: DateTime<Utc>,
    ) -> anyhow::Result<Option<ExportFile>> {
        if players.is_empty() {
            return Ok(None);
        }

        Ok(Some(ExportFile {
            file_name: export_file_name(at),
            content: players_to_csv(players, &self.formatter, self.quoting)?,
        }))
    }

    /// Builds the export and hands it to `saver`, returning the saved file name.
    ///
    /// An empty `players` is a no-op: `saver` is never called.
    #[tracing::instrument(skip_all, fields(players = players.len()))]
    pub fn export(
        &self,
        players: &[Player],
        saver: &impl FileSaver,
    ) -> anyhow::Result<Option<String>> {
        let Some(file) = self.build(players, Utc::now())? else {
            tracing::info!("nothing to export");
            return Ok(None);
        };

        saver.save(&file)?;
        tracing::info!(file_name = %file.file_name, bytes = file.content.len(), "exported players");

        Ok(Some(file.file_name))
    }
}
