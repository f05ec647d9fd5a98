// ---------------------------------------------------------------------------
// file_header – Save file header with magic bytes, dimensions and checksum
// ---------------------------------------------------------------------------
//
// Header format (24 bytes, fixed-size, little-endian):
//   [0..4]   Magic bytes: "BLKS"
//   [4..8]   Header format version (u32)
//   [8..12]  Flags (u32: bit 0 = lz4 compressed payload)
//   [12..16] Board cell count (u32)
//   [16..20] Hand capacity (u32)
//   [20..24] xxHash32 checksum of the payload as stored
//
// The undo history inside the payload does not describe its own dimensions,
// so they are recorded here and checked before anything is decoded.

use xxhash_rust::xxh32::xxh32;

use crate::save_error::SaveError;
use crate::undo_codec::SnapshotDims;

/// Magic bytes identifying a save file.
pub const MAGIC: [u8; 4] = *b"BLKS";

/// Size of the file header in bytes.
pub const HEADER_SIZE: usize = 24;

pub const HEADER_FORMAT_VERSION: u32 = 1;

pub const FLAG_COMPRESSED: u32 = 1;

const XXHASH_SEED: u32 = 0;

/// Parsed file header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHeader {
    pub format_version: u32,
    pub flags: u32,
    pub cell_count: u32,
    pub hand_capacity: u32,
    pub checksum: u32,
}

impl FileHeader {
    pub fn new(payload: &[u8], flags: u32, dims: SnapshotDims) -> Self {
        Self {
            format_version: HEADER_FORMAT_VERSION,
            flags,
            cell_count: dims.cell_count as u32,
            hand_capacity: dims.hand_capacity as u32,
            checksum: xxh32(payload, XXHASH_SEED),
        }
    }

    pub fn is_compressed(&self) -> bool {
        self.flags & FLAG_COMPRESSED != 0
    }

    /// Reject a save written for a different board size or hand capacity.
    pub fn check_dims(&self, live: SnapshotDims) -> Result<(), SaveError> {
        if self.cell_count as usize != live.cell_count
            || self.hand_capacity as usize != live.hand_capacity
        {
            return Err(SaveError::DimensionMismatch {
                saved_cell_count: self.cell_count,
                saved_hand_capacity: self.hand_capacity,
                cell_count: live.cell_count,
                hand_capacity: live.hand_capacity,
            });
        }
        Ok(())
    }
}

/// Prefix `payload` with a header.
pub fn wrap_with_header(payload: &[u8], flags: u32, dims: SnapshotDims) -> Vec<u8> {
    let header = FileHeader::new(payload, flags, dims);
    let mut out = Vec::with_capacity(HEADER_SIZE + payload.len());

    out.extend_from_slice(&MAGIC);
    out.extend_from_slice(&header.format_version.to_le_bytes());
    out.extend_from_slice(&header.flags.to_le_bytes());
    out.extend_from_slice(&header.cell_count.to_le_bytes());
    out.extend_from_slice(&header.hand_capacity.to_le_bytes());
    out.extend_from_slice(&header.checksum.to_le_bytes());

    out.extend_from_slice(payload);
    out
}

fn le_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

/// Parse the header, verify the checksum, and return the payload.
///
/// # Errors
///
/// - `NoData` for an empty buffer
/// - `BadMagic` when the magic bytes are missing
/// - `Io(UnexpectedEof)` when the header is cut short
/// - `VersionMismatch` for a header from a newer build
/// - `ChecksumMismatch` when the payload was damaged
pub fn unwrap_header(bytes: &[u8]) -> Result<(FileHeader, &[u8]), SaveError> {
    if bytes.is_empty() {
        return Err(SaveError::NoData);
    }
    if bytes.len() < MAGIC.len() || bytes[..4] != MAGIC {
        return Err(SaveError::BadMagic);
    }
    if bytes.len() < HEADER_SIZE {
        return Err(SaveError::Io(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            format!(
                "save header needs {HEADER_SIZE} bytes, file has {}",
                bytes.len()
            ),
        )));
    }

    let header = FileHeader {
        format_version: le_u32(bytes, 4),
        flags: le_u32(bytes, 8),
        cell_count: le_u32(bytes, 12),
        hand_capacity: le_u32(bytes, 16),
        checksum: le_u32(bytes, 20),
    };

    if header.format_version > HEADER_FORMAT_VERSION {
        return Err(SaveError::VersionMismatch {
            expected_max: HEADER_FORMAT_VERSION,
            found: header.format_version,
        });
    }

    let payload = &bytes[HEADER_SIZE..];
    let computed = xxh32(payload, XXHASH_SEED);
    if computed != header.checksum {
        return Err(SaveError::ChecksumMismatch {
            expected: header.checksum,
            found: computed,
        });
    }

    Ok((header, payload))
}
