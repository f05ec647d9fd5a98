// ---------------------------------------------------------------------------
// undo_codec – binary layout of the undo history
// ---------------------------------------------------------------------------
//
//   i32 snapshot count
//   count x snapshot, bottom of the stack first:
//     u32 score
//     cell_count * cell_count cell records, row-major
//     hand capacity x (bool present, piece record if present)
//
// The stream carries no dimensions. Reading sizes every snapshot from the
// live board and hand, so a history only loads back into a game with the
// same board size and hand capacity (the save file header checks this).

use std::io::{self, Read, Write};

use game::board::{Board, Cell};
use game::hand::Hand;
use game::undo::{Snapshot, UndoHistory};

use crate::bin_io::{invalid_data, read_i32, read_u32, write_i32, write_u32};
use crate::record_codec::{read_slot, write_slot, BinaryRecord};

/// Grid and hand sizes a snapshot is written and read with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotDims {
    pub cell_count: usize,
    pub hand_capacity: usize,
}

impl SnapshotDims {
    pub fn of(board: &Board, hand: &Hand) -> Self {
        Self {
            cell_count: board.cell_count(),
            hand_capacity: hand.capacity(),
        }
    }

    fn grid_len(&self) -> usize {
        self.cell_count * self.cell_count
    }
}

pub fn write_snapshot<W: Write + ?Sized>(
    out: &mut W,
    snapshot: &Snapshot,
    dims: SnapshotDims,
) -> io::Result<()> {
    let grid_ok = snapshot.cells.len() == dims.grid_len();
    if !grid_ok || snapshot.pieces.len() < dims.hand_capacity {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "snapshot holds {} cells and {} slots, expected {} cells and {} slots",
                snapshot.cells.len(),
                snapshot.pieces.len(),
                dims.grid_len(),
                dims.hand_capacity
            ),
        ));
    }

    write_u32(out, snapshot.score)?;
    for cell in &snapshot.cells {
        cell.write_to(out)?;
    }
    for slot in &snapshot.pieces[..dims.hand_capacity] {
        write_slot(out, slot.as_ref())?;
    }
    Ok(())
}

pub fn read_snapshot<R: Read + ?Sized>(
    input: &mut R,
    dims: SnapshotDims,
) -> io::Result<Snapshot> {
    let score = read_u32(input)?;

    let mut cells = Vec::with_capacity(dims.grid_len());
    for _ in 0..dims.grid_len() {
        cells.push(Cell::read_from(input)?);
    }

    let mut pieces = Vec::with_capacity(dims.hand_capacity);
    for _ in 0..dims.hand_capacity {
        pieces.push(read_slot(input)?);
    }

    Ok(Snapshot {
        score,
        cells,
        pieces,
    })
}

/// Write the whole history, bottom of the stack first.
pub fn write_history<W: Write + ?Sized>(
    out: &mut W,
    history: &UndoHistory,
    dims: SnapshotDims,
) -> io::Result<()> {
    let count = i32::try_from(history.len()).map_err(|_| {
        io::Error::new(io::ErrorKind::InvalidInput, "undo history too long to encode")
    })?;
    write_i32(out, count)?;
    for snapshot in history.snapshots() {
        write_snapshot(out, snapshot, dims)?;
    }
    Ok(())
}

/// Read a history written by [`write_history`]. Fails as a whole: no partial
/// history is returned from a truncated or malformed stream.
pub fn read_history<R: Read + ?Sized>(
    input: &mut R,
    dims: SnapshotDims,
) -> io::Result<UndoHistory> {
    let count = read_i32(input)?;
    if count < 0 {
        return Err(invalid_data(format!("negative undo snapshot count {count}")));
    }

    let mut history = UndoHistory::default();
    for _ in 0..count {
        history.push_snapshot(read_snapshot(input, dims)?);
    }
    Ok(history)
}
