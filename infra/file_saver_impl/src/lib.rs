use std::path::{Path, PathBuf};

use domain::repositories::{ExportFile, FileSaver};

/// Saves exports as files inside one directory, creating it on first use.
#[derive(Debug, Clone)]
pub struct DirectoryFileSaver {
    directory: PathBuf,
}

impl DirectoryFileSaver {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl FileSaver for DirectoryFileSaver {
    #[tracing::instrument(skip(file), fields(file_name = %file.file_name))]
    fn save(&self, file: &ExportFile) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.directory)?;
        let path = self.directory.join(&file.file_name);
        std::fs::write(&path, &file.content)?;
        tracing::debug!(path = %path.display(), "wrote export file");
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn writes_the_file_under_its_name() {
        let dir = tempfile::tempdir().unwrap();
        let saver = DirectoryFileSaver::new(dir.path().join("exports"));

        saver
            .save(&ExportFile {
                file_name: "players_1707559200123.csv".to_string(),
                content: b"Name,Score,Created At\n".to_vec(),
            })
            .unwrap();

        let written =
            std::fs::read_to_string(dir.path().join("exports/players_1707559200123.csv")).unwrap();
        assert_eq!(written, "Name,Score,Created At\n");
    }
}
