use std::path::Path;

/// Serialization formats accepted for model artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactFormat {
    Json,
    Bincode,
}

pub fn artifact_format(path: &Path) -> Option<ArtifactFormat> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    match ext.to_ascii_lowercase().as_str() {
        "json" => Some(ArtifactFormat::Json),
        "bin" => Some(ArtifactFormat::Bincode),
        _ => None,
    }
}

/// Terminal width in columns, or `fallback` when stdout is not a terminal.
pub fn terminal_width(fallback: usize) -> usize {
    crossterm::terminal::size()
        .map(|(cols, _)| cols as usize)
        .ok()
        .filter(|cols| *cols > 0)
        .unwrap_or(fallback)
}
