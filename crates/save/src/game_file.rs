// ---------------------------------------------------------------------------
// game_file – full game save: score, board, hand and undo history
// ---------------------------------------------------------------------------
//
// Payload (big-endian, before optional lz4 compression):
//   u32 current score
//   u32 high score
//   cell_count * cell_count cell records
//   hand capacity x (bool present, piece record)
//   undo history block (see undo_codec)

use std::io::Read;

use game::board::{Board, Cell};
use game::hand::Hand;
use game::piece::Piece;
use game::scorer::Scorer;
use game::undo::UndoHistory;

use crate::bin_io::{read_u32, write_u32};
use crate::file_header::{unwrap_header, wrap_with_header, FLAG_COMPRESSED};
use crate::record_codec::{read_slot, write_slot, BinaryRecord};
use crate::save_error::SaveError;
use crate::undo_codec::{read_history, write_history, SnapshotDims};

/// Encode the live game into save file bytes.
pub fn encode_game(
    board: &Board,
    hand: &Hand,
    scorer: &Scorer,
    history: &UndoHistory,
    compress: bool,
) -> Result<Vec<u8>, SaveError> {
    let dims = SnapshotDims::of(board, hand);
    let mut payload = Vec::new();

    write_u32(&mut payload, scorer.current_score)?;
    write_u32(&mut payload, scorer.high_score)?;
    for cell in board.cells() {
        cell.write_to(&mut payload)?;
    }
    for slot in hand.slots() {
        write_slot(&mut payload, slot.as_ref())?;
    }
    write_history(&mut payload, history, dims)?;

    if compress {
        let compressed = lz4_flex::compress_prepend_size(&payload);
        Ok(wrap_with_header(&compressed, FLAG_COMPRESSED, dims))
    } else {
        Ok(wrap_with_header(&payload, 0, dims))
    }
}

/// Decoded save, not yet applied to the live game.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedGame {
    pub scorer: Scorer,
    pub cells: Vec<Cell>,
    pub slots: Vec<Option<Piece>>,
    pub history: UndoHistory,
}

impl LoadedGame {
    /// Overwrite the live game with the loaded state.
    pub fn apply(
        self,
        board: &mut Board,
        hand: &mut Hand,
        scorer: &mut Scorer,
        history: &mut UndoHistory,
    ) {
        *scorer = self.scorer;
        board.replace_cells(self.cells);
        for (slot, piece) in hand.slots_mut().iter_mut().zip(self.slots) {
            *slot = piece;
        }
        *history = self.history;
    }
}

/// Decode save file bytes against the live board and hand dimensions.
/// The live game is never touched; call [`LoadedGame::apply`] on success.
pub fn decode_game(bytes: &[u8], board: &Board, hand: &Hand) -> Result<LoadedGame, SaveError> {
    let dims = SnapshotDims::of(board, hand);
    let (header, payload) = unwrap_header(bytes)?;
    header.check_dims(dims)?;

    let decompressed;
    let mut input: &[u8] = if header.is_compressed() {
        decompressed = lz4_flex::decompress_size_prepended(payload)?;
        &decompressed
    } else {
        payload
    };

    let loaded = read_game(&mut input, dims)?;
    if !input.is_empty() {
        return Err(SaveError::TrailingBytes(input.len()));
    }
    Ok(loaded)
}

fn read_game<R: Read + ?Sized>(
    input: &mut R,
    dims: SnapshotDims,
) -> Result<LoadedGame, SaveError> {
    let current_score = read_u32(input)?;
    let high_score = read_u32(input)?;

    let mut cells = Vec::with_capacity(dims.cell_count * dims.cell_count);
    for _ in 0..dims.cell_count * dims.cell_count {
        cells.push(Cell::read_from(input)?);
    }

    let mut slots = Vec::with_capacity(dims.hand_capacity);
    for _ in 0..dims.hand_capacity {
        slots.push(read_slot(input)?);
    }

    let history = read_history(input, dims)?;

    Ok(LoadedGame {
        scorer: Scorer {
            current_score,
            high_score,
        },
        cells,
        slots,
        history,
    })
}
