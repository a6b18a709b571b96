mod file_saver;
mod player_repository;

pub use file_saver::{ExportFile, FileSaver};
pub use player_repository::PlayerRepository;
