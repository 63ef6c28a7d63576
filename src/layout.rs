use serde::{Deserialize, Serialize};

/// The fixed geometry of an auditorium: a grid of `rows` x `columns` seats,
/// numbered row-major starting at 1. A `Layout` is a plain value: it knows
/// how to translate between seat numbers and `(row, column)` positions and
/// how to reject numbers outside the grid, but it holds no booking state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    rows: u32,
    columns: u32,
}

impl Layout {
    /// Make a layout with the given number of rows and seats per row.
    /// Either dimension may be zero, in which case the layout contains no
    /// seats and every seat number is out of range. Panics if the grid
    /// holds more than `u32::MAX` seats.
    pub fn new(rows: u32, columns: u32) -> Layout {
        rows.checked_mul(columns)
            .expect("Layout: seat count overflow");
        Layout { rows, columns }
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Total number of seats in the grid.
    pub fn seat_count(&self) -> u32 {
        self.rows
            .checked_mul(self.columns)
            .expect("Layout: seat count overflow")
    }

    /// Does `seat` name a seat in this layout? Seat numbers start at 1.
    pub fn contains(&self, seat: u32) -> bool {
        seat >= 1 && seat <= self.seat_count()
    }

    /// The 1-based `(row, column)` position of `seat`, or `None` if the
    /// number is out of range. Inverse of [`Layout::seat_number`].
    pub fn position(&self, seat: u32) -> Option<(u32, u32)> {
        if !self.contains(seat) {
            return None;
        }
        let row = (seat - 1) / self.columns + 1;
        let column = (seat - 1) % self.columns + 1;
        Some((row, column))
    }

    /// The seat number at the 1-based `(row, column)` position, or `None`
    /// if the position lies outside the grid. Inverse of
    /// [`Layout::position`].
    pub fn seat_number(&self, row: u32, column: u32) -> Option<u32> {
        if row < 1 || row > self.rows || column < 1 || column > self.columns {
            return None;
        }
        Some((row - 1) * self.columns + column)
    }
}
