// ---------------------------------------------------------------------------
// record_codec – binary records for board cells and pieces
// ---------------------------------------------------------------------------
//
// Cell record:  i32 color index, -1 when the cell is empty.
// Piece record: i32 color, i32 rotation, i32 cols, i32 rows, then
//               rows * cols booleans (row-major shape occupancy).

use std::io::{self, Read, Write};

use game::board::Cell;
use game::config::MAX_PIECE_SIDE;
use game::piece::{Piece, PieceShape};

use crate::bin_io::{invalid_data, read_bool, read_i32, write_bool, write_i32};

const EMPTY_COLOR: i32 = -1;

/// A value with a fixed, self-contained binary record.
pub trait BinaryRecord: Sized {
    fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()>;
    fn read_from<R: Read + ?Sized>(input: &mut R) -> io::Result<Self>;
}

fn color_from_i32(raw: i32) -> io::Result<u8> {
    u8::try_from(raw).map_err(|_| invalid_data(format!("color index {raw} out of range")))
}

impl BinaryRecord for Cell {
    fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write_i32(out, self.color.map_or(EMPTY_COLOR, i32::from))
    }

    fn read_from<R: Read + ?Sized>(input: &mut R) -> io::Result<Self> {
        match read_i32(input)? {
            EMPTY_COLOR => Ok(Cell::EMPTY),
            raw => Ok(Cell::filled(color_from_i32(raw)?)),
        }
    }
}

fn side_from_i32(raw: i32) -> io::Result<usize> {
    usize::try_from(raw)
        .ok()
        .filter(|side| (1..=MAX_PIECE_SIDE).contains(side))
        .ok_or_else(|| invalid_data(format!("piece side {raw} out of range")))
}

impl BinaryRecord for Piece {
    fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write_i32(out, i32::from(self.color))?;
        write_i32(out, i32::from(self.rotation))?;
        write_i32(out, self.shape.cols() as i32)?;
        write_i32(out, self.shape.rows() as i32)?;
        for &filled in self.shape.cells() {
            write_bool(out, filled)?;
        }
        Ok(())
    }

    fn read_from<R: Read + ?Sized>(input: &mut R) -> io::Result<Self> {
        let color = color_from_i32(read_i32(input)?)?;
        let rotation = read_i32(input)?;
        if !(0..4).contains(&rotation) {
            return Err(invalid_data(format!("piece rotation {rotation} out of range")));
        }
        let cols = side_from_i32(read_i32(input)?)?;
        let rows = side_from_i32(read_i32(input)?)?;

        let mut cells = Vec::with_capacity(cols * rows);
        for _ in 0..cols * rows {
            cells.push(read_bool(input)?);
        }
        let shape = PieceShape::new(cols, rows, cells)
            .ok_or_else(|| invalid_data("piece shape does not match its dimensions"))?;
        Ok(Piece::new(color, rotation as u8, shape))
    }
}

/// Hand slot: presence flag, then the piece when present.
pub fn write_slot<W: Write + ?Sized>(out: &mut W, slot: Option<&Piece>) -> io::Result<()> {
    match slot {
        Some(piece) => {
            write_bool(out, true)?;
            piece.write_to(out)
        }
        None => write_bool(out, false),
    }
}

pub fn read_slot<R: Read + ?Sized>(input: &mut R) -> io::Result<Option<Piece>> {
    if read_bool(input)? {
        Piece::read_from(input).map(Some)
    } else {
        Ok(None)
    }
}
