use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("only presentation-mode views can be exported")]
    NotPresentation,

    #[error("{rows} items do not fit on one page (at most {capacity})")]
    PageOverflow { rows: usize, capacity: usize },

    #[error("pdf rendering failed: {0}")]
    Pdf(String),

    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
