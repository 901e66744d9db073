//! This crate contains all the structures and tools for processing
//! Build engine MAP files: the records, the decoder, a structural check of the
//! indexes between records, and the gameplay facts that can be read from them.
//!
//! The structure of a MAP is this:
//!
//! ```text,ignore
//!                        <───── 32 bits ──────>
//!                        ┌────────────────────┐
//!             ┌──── 0x00 |   Format version   | 0x03
//!             |          | ────────────────── |
//!             |     0x04 |  Player X, Y, Z    | 0x0F
//!     Header ─┤          | ────────────────── |
//!             |     0x10 |  Angle  |  Sector  | 0x13
//!             |          | ────────────────── |
//!             └──── 0x14 | # sect. |          | 0x15
//!             ┌───────── | ───────-┘          |
//!             |          | ┌────────────────┐ |
//!   Sectors ──┤          | | Sector (40 b.) |───── wall_start ─┐
//!             |          | └────────────────┘ |                |
//!             └───────── | # walls            |                |
//!             ┌───────── | ┌────────────────┐ |                |
//!     Walls ──┤          | |  Wall (32 b.)  |<─────────────────┘
//!             |          | └────────────────┘ |
//!             └───────── | # sprites          |
//!             ┌───────── | ┌────────────────┐ |
//!   Sprites ──┤          | | Sprite (44 b.) |──── sector, owner
//!             |          | └────────────────┘ |
//!             └───────── └────────────────────┘
//! ```
//!
//! Every count is an unsigned 16-bit value and records carry no length prefix,
//! so the file can only be walked front to back.

/// The error taxonomy for a single file
pub mod error;

/// Little-endian field reads over a byte slice
pub mod reader;

/// The record structures, in file order
pub mod types;

/// The map structure and decoder
pub mod map;

/// Index checks between the decoded records
pub mod validate;

/// Gameplay facts derived from sprite tags and record counts
pub mod classify;

/// Collects the facts of one file and renders them
pub mod report;

/// Runs many files through decode, validate and classify
pub mod batch;

#[cfg(test)]
mod tests;

pub use crate::batch::{BatchOptions, FileReport, run_batch};
pub use crate::classify::{Capacity, EngineCompat, GameplayFacts, LevelExit};
pub use crate::error::{MapError, RecordKind};
pub use crate::map::{BuildMap, DecodeLimits};
pub use crate::report::{MapReport, ReportMode};
pub use crate::types::*;
pub use crate::validate::{Violation, WallSide, validate};

pub use log;
