// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for plan loading.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to read, parse, or re-serialize a test plan.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("failed to read test plan {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed test plan {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize test plan: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl PlanError {
    /// Path of the offending plan, when known.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } => Some(path.as_path()),
            Self::Serialize(_) => None,
        }
    }

    /// True for malformed-document failures (as opposed to I/O).
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}
