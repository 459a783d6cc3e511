// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures of a single run. Every variant aborts the run.
#[derive(Debug, Error)]
pub enum Error {
    /// Network or HTTP failure, or a body that is not JSON
    #[error("failed to retrieve {url}: {reason}")]
    Retrieval { url: String, reason: String },

    /// A source payload is missing fields or has an unexpected shape
    #[error("unexpected catalog payload: {0}")]
    Schema(String),

    /// The store could not be opened or the upsert transaction failed
    #[error("storage failure: {0}")]
    Persistence(#[from] sqlx::Error),

    /// The snapshot could not be read from the store or written to disk
    #[error("failed to export snapshot to {}: {reason}", path.display())]
    Export { path: PathBuf, reason: String },
}

impl Error {
    pub fn retrieval(url: &str, reason: impl ToString) -> Self {
        Error::Retrieval {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn schema(message: impl Into<String>) -> Self {
        Error::Schema(message.into())
    }

    pub fn export(path: &Path, reason: impl ToString) -> Self {
        Error::Export {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
