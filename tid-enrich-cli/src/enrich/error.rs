//! Error type for the reconciliation core

use std::path::PathBuf;

use thiserror::Error;

/// Which input a missing column was expected in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Base,
    PartnerList,
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputKind::Base => write!(f, "base registry"),
            InputKind::PartnerList => write!(f, "partner list"),
        }
    }
}

/// Everything that can abort a reconciliation run
#[derive(Debug, Error)]
pub enum ReconcileError {
    /// A required column (MID in the base, АЗС in the list) is absent
    #[error("Column '{column}' not found in the {input} file")]
    MissingColumn { input: InputKind, column: String },

    #[error("Failed to create output directory {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read spreadsheet {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("Spreadsheet {} has no sheets", path.display())]
    EmptyWorkbook { path: PathBuf },

    #[error("Failed to write spreadsheet {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },
}

impl ReconcileError {
    pub(crate) fn missing_column(input: InputKind, column: &str) -> Self {
        ReconcileError::MissingColumn {
            input,
            column: column.to_string(),
        }
    }

    /// True for failures that come from the filesystem rather than the data
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            ReconcileError::Io { .. } | ReconcileError::Read { .. } | ReconcileError::Write { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ReconcileError>;
