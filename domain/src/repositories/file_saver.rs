/// A named byte payload ready to be handed to the host environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub content: Vec<u8>,
}

/// The host's "save these bytes under this name" capability.
pub trait FileSaver {
    fn save(&self, file: &ExportFile) -> anyhow::Result<()>;
}
