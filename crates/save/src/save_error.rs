// ---------------------------------------------------------------------------
// SaveError: error types for save/load operations
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors that can occur while saving or loading a game.
#[derive(Debug)]
pub enum SaveError {
    /// I/O error (file not found, permission denied, truncated stream,
    /// malformed record, etc.)
    Io(std::io::Error),
    /// The bytes do not start with the save file magic.
    BadMagic,
    /// Save file header is newer than this build supports.
    VersionMismatch { expected_max: u32, found: u32 },
    /// Payload checksum does not match the header.
    ChecksumMismatch { expected: u32, found: u32 },
    /// The save was written for a different board size or hand capacity.
    DimensionMismatch {
        saved_cell_count: u32,
        saved_hand_capacity: u32,
        cell_count: usize,
        hand_capacity: usize,
    },
    /// lz4 decompression failed.
    Decompress(String),
    /// Payload decoded but left unread bytes behind.
    TrailingBytes(usize),
    /// No save data was available to load.
    NoData,
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::Io(e) => write!(f, "I/O error: {e}"),
            SaveError::BadMagic => write!(f, "Not a save file: missing magic bytes"),
            SaveError::VersionMismatch {
                expected_max,
                found,
            } => write!(
                f,
                "Version mismatch: save is v{found}, but this build only supports up to v{expected_max}"
            ),
            SaveError::ChecksumMismatch { expected, found } => write!(
                f,
                "Save file is corrupted: checksum mismatch (expected {expected:#010X}, got {found:#010X})"
            ),
            SaveError::DimensionMismatch {
                saved_cell_count,
                saved_hand_capacity,
                cell_count,
                hand_capacity,
            } => write!(
                f,
                "Save is for a {saved_cell_count}x{saved_cell_count} board with {saved_hand_capacity} hand slots, \
                 but this game uses {cell_count}x{cell_count} with {hand_capacity}"
            ),
            SaveError::Decompress(msg) => write!(f, "Decompression error: {msg}"),
            SaveError::TrailingBytes(n) => write!(f, "Save payload has {n} trailing bytes"),
            SaveError::NoData => write!(f, "No save data available to load"),
        }
    }
}

impl std::error::Error for SaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SaveError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SaveError {
    fn from(e: std::io::Error) -> Self {
        SaveError::Io(e)
    }
}

impl From<lz4_flex::block::DecompressError> for SaveError {
    fn from(e: lz4_flex::block::DecompressError) -> Self {
        SaveError::Decompress(e.to_string())
    }
}
