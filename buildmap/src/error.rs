use std::fmt;
use std::io;
use std::path::PathBuf;

/// The three record arrays of a map, used to say which one an error is about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Sector,
    Wall,
    Sprite,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RecordKind::Sector => write!(f, "sector"),
            RecordKind::Wall => write!(f, "wall"),
            RecordKind::Sprite => write!(f, "sprite"),
        }
    }
}

/// Everything that stops a single file from producing a map. None of these
/// are fatal to a batch, the file is reported as failed and the next one runs.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("truncated input at byte {offset}: needed {needed} bytes, {available} available")]
    TruncatedInput {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("{kind} count {count} is over the decode limit of {limit}")]
    AllocationTooLarge {
        kind: RecordKind,
        count: usize,
        limit: usize,
    },

    #[error("could not read {path:?}: {source}")]
    IoUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl MapError {
    /// A short name for the failed check, stable across message changes
    pub fn check_name(&self) -> &'static str {
        match self {
            MapError::TruncatedInput { .. } => "truncated-input",
            MapError::AllocationTooLarge { .. } => "allocation-too-large",
            MapError::IoUnavailable { .. } => "io-unavailable",
        }
    }
}
