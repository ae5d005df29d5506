use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExportError>;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Planilha não encontrada: {0:?}")]
    InputNotFound(PathBuf),

    #[error("Aba '{sheet}' não encontrada (abas disponíveis: {})", .available.join(", "))]
    SheetNotFound { sheet: String, available: Vec<String> },

    #[error("Falha ao ler planilha")]
    Workbook(#[from] calamine::Error),

    #[error("Falha ao gravar {path:?}")]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Falha ao serializar JSON")]
    Json(#[from] serde_json::Error),
}
