//! In-memory seat inventory for a single-auditorium box office.
//!
//! An [`Auditorium`] is a fixed grid of seats, numbered row by row starting
//! at seat `1`, each of which is either free or booked. Booking and
//! cancellation are synchronous: every request either flips exactly one
//! seat's state or reports precisely why it could not ([`BookError`],
//! [`CancelError`]). A companion [`BookingQueue`] holds pending seat
//! requests in arrival order for a box office that wants to accept requests
//! faster than it applies them.
//!
//! Everything lives in memory and nothing is shared: one `Auditorium`, one
//! screening, no persistence, no locking.
//!
//! # Examples
//!
//! Book a couple of seats directly and watch the tallies move:
//!
//! ```
//! use boxoffice::Auditorium;
//!
//! let mut auditorium = Auditorium::new(5, 10);
//! auditorium.book(12).unwrap();
//! auditorium.book(13).unwrap();
//!
//! let occupancy = auditorium.occupancy();
//! assert_eq!(occupancy.total, 50);
//! assert_eq!(occupancy.booked, 2);
//! assert_eq!(occupancy.available, 48);
//! ```
//!
//! Requests can also be parked in a bounded queue and applied later, in
//! arrival order. The queue does not inspect its contents, so a duplicate
//! or out-of-range request is only caught when it reaches the auditorium:
//!
//! ```
//! use boxoffice::{Auditorium, BookingQueue};
//!
//! let mut auditorium = Auditorium::new(5, 10);
//! let mut requests: BookingQueue<u32> = BookingQueue::with_capacity(50);
//!
//! requests.enqueue(3);
//! requests.enqueue(3);
//!
//! let mut booked = 0;
//! let mut refused = 0;
//! while let Some(seat) = requests.dequeue() {
//!     match auditorium.book(seat) {
//!         Ok(()) => booked += 1,
//!         Err(_) => refused += 1,
//!     }
//! }
//!
//! assert_eq!((booked, refused), (1, 1));
//! assert!(auditorium.seat(3).unwrap().is_booked());
//! ```

use std::fmt;
use std::iter;
use std::slice;

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod layout;
pub mod queue;

pub use crate::layout::Layout;
pub use crate::queue::BookingQueue;

/// Why a booking request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BookError {
    /// The seat number names no seat in this auditorium.
    #[error("seat {0} is not in this auditorium")]
    InvalidSeat(u32),
    /// The seat exists but someone already holds it.
    #[error("seat {0} is already booked")]
    AlreadyBooked(u32),
}

/// Why a cancellation request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CancelError {
    /// The seat number names no seat in this auditorium.
    #[error("seat {0} is not in this auditorium")]
    InvalidSeat(u32),
    /// The seat exists but nobody holds it, so there is nothing to cancel.
    #[error("seat {0} is not booked")]
    NotBooked(u32),
}

/// One seat in the grid: its number and whether it is currently booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    number: u32,
    booked: bool,
}

impl Seat {
    /// The seat's number within the auditorium, counting row by row from 1.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Whether the seat is currently booked.
    pub fn is_booked(&self) -> bool {
        self.booked
    }
}

/// A point-in-time tally of the auditorium: how many seats exist, how many
/// are booked, and how many remain available. The three counts always
/// satisfy `booked + available == total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupancy {
    pub total: u32,
    pub booked: u32,
    pub available: u32,
}

/// A fixed grid of bookable seats for a single screening.
///
/// The grid's shape is chosen at construction and never changes; only the
/// booked flag on each seat moves. Seats are numbered row-major: in a
/// 5-by-10 auditorium, row 1 holds seats 1 through 10 and row 5 holds
/// seats 41 through 50.
///
/// # Examples
///
/// ```
/// use boxoffice::{Auditorium, BookError};
///
/// let mut auditorium = Auditorium::new(5, 10);
/// assert_eq!(auditorium.book(50), Ok(()));
/// assert_eq!(auditorium.book(50), Err(BookError::AlreadyBooked(50)));
/// assert_eq!(auditorium.book(51), Err(BookError::InvalidSeat(51)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Auditorium {
    layout: Layout,
    rows: Vec<Vec<Seat>>,
}

impl Auditorium {
    /// Make an auditorium of `rows` by `columns` seats, all free.
    ///
    /// Either dimension may be zero, which produces a perfectly healthy
    /// auditorium containing no seats: every request against it is invalid
    /// and its occupancy is all zeroes.
    ///
    /// # Examples
    ///
    /// ```
    /// use boxoffice::Auditorium;
    ///
    /// let auditorium = Auditorium::new(5, 10);
    /// assert_eq!(auditorium.seat_count(), 50);
    /// assert_eq!(auditorium.occupancy().booked, 0);
    /// ```
    pub fn new(rows: u32, columns: u32) -> Auditorium {
        let layout = Layout::new(rows, columns);
        let mut numbers = 1..=layout.seat_count();
        let rows = (0..rows)
            .map(|_| {
                numbers
                    .by_ref()
                    .take(columns as usize)
                    .map(|number| Seat {
                        number,
                        booked: false,
                    })
                    .collect()
            })
            .collect();
        Auditorium { layout, rows }
    }

    /// The grid geometry of this auditorium.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// The number of rows in the grid.
    pub fn row_count(&self) -> u32 {
        self.layout.rows()
    }

    /// The number of seats in each row.
    pub fn columns(&self) -> u32 {
        self.layout.columns()
    }

    /// The total number of seats, booked or not.
    pub fn seat_count(&self) -> u32 {
        self.layout.seat_count()
    }

    /// Look up a single seat by number, or `None` if the number is outside
    /// the grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use boxoffice::Auditorium;
    ///
    /// let mut auditorium = Auditorium::new(5, 10);
    /// auditorium.book(7).unwrap();
    /// assert!(auditorium.seat(7).unwrap().is_booked());
    /// assert!(!auditorium.seat(8).unwrap().is_booked());
    /// assert!(auditorium.seat(0).is_none());
    /// assert!(auditorium.seat(51).is_none());
    /// ```
    pub fn seat(&self, number: u32) -> Option<Seat> {
        let (row, column) = self.layout.position(number)?;
        Some(self.rows[(row - 1) as usize][(column - 1) as usize])
    }

    /// Book a seat.
    ///
    /// Succeeds exactly when `number` names a seat in the grid and that
    /// seat is currently free. On failure, nothing changes.
    ///
    /// # Examples
    ///
    /// ```
    /// use boxoffice::{Auditorium, BookError};
    ///
    /// let mut auditorium = Auditorium::new(5, 10);
    /// assert_eq!(auditorium.book(12), Ok(()));
    /// assert_eq!(auditorium.book(12), Err(BookError::AlreadyBooked(12)));
    /// assert_eq!(auditorium.book(0), Err(BookError::InvalidSeat(0)));
    /// ```
    pub fn book(&mut self, number: u32) -> Result<(), BookError> {
        let (row, column) = self
            .layout
            .position(number)
            .ok_or(BookError::InvalidSeat(number))?;
        let seat = &mut self.rows[(row - 1) as usize][(column - 1) as usize];
        if seat.booked {
            return Err(BookError::AlreadyBooked(number));
        }
        seat.booked = true;
        Ok(())
    }

    /// Cancel a booking, freeing the seat for someone else.
    ///
    /// Succeeds exactly when `number` names a seat in the grid and that
    /// seat is currently booked. On failure, nothing changes.
    ///
    /// # Examples
    ///
    /// ```
    /// use boxoffice::{Auditorium, CancelError};
    ///
    /// let mut auditorium = Auditorium::new(5, 10);
    /// auditorium.book(12).unwrap();
    /// assert_eq!(auditorium.cancel(12), Ok(()));
    /// assert_eq!(auditorium.cancel(12), Err(CancelError::NotBooked(12)));
    /// assert_eq!(auditorium.cancel(99), Err(CancelError::InvalidSeat(99)));
    /// ```
    pub fn cancel(&mut self, number: u32) -> Result<(), CancelError> {
        let (row, column) = self
            .layout
            .position(number)
            .ok_or(CancelError::InvalidSeat(number))?;
        let seat = &mut self.rows[(row - 1) as usize][(column - 1) as usize];
        if !seat.booked {
            return Err(CancelError::NotBooked(number));
        }
        seat.booked = false;
        Ok(())
    }

    /// Count the booked and available seats.
    ///
    /// # Examples
    ///
    /// ```
    /// use boxoffice::Auditorium;
    ///
    /// let mut auditorium = Auditorium::new(2, 3);
    /// auditorium.book(4).unwrap();
    ///
    /// let occupancy = auditorium.occupancy();
    /// assert_eq!(occupancy.total, 6);
    /// assert_eq!(occupancy.booked, 1);
    /// assert_eq!(occupancy.available, 5);
    /// ```
    pub fn occupancy(&self) -> Occupancy {
        let total = self.layout.seat_count();
        let booked = self.seats().filter(|seat| seat.is_booked()).count() as u32;
        Occupancy {
            total,
            booked,
            available: total - booked,
        }
    }

    /// Iterate over every seat in number order.
    ///
    /// # Examples
    ///
    /// ```
    /// use boxoffice::Auditorium;
    ///
    /// let auditorium = Auditorium::new(2, 3);
    /// let numbers: Vec<u32> = auditorium.seats().map(|seat| seat.number()).collect();
    /// assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
    /// ```
    pub fn seats(&self) -> Seats {
        Seats {
            inner: self.rows.iter().flatten(),
        }
    }

    /// Iterate over the grid one row at a time, front row first.
    ///
    /// # Examples
    ///
    /// ```
    /// use boxoffice::Auditorium;
    ///
    /// let auditorium = Auditorium::new(5, 10);
    /// assert_eq!(auditorium.rows().count(), 5);
    /// for row in auditorium.rows() {
    ///     assert_eq!(row.len(), 10);
    /// }
    /// ```
    pub fn rows(&self) -> Rows {
        Rows {
            inner: self.rows.iter(),
        }
    }
}

/// An iterator over every seat of an [`Auditorium`] in number order.
pub struct Seats<'a> {
    inner: iter::Flatten<slice::Iter<'a, Vec<Seat>>>,
}

impl<'a> Iterator for Seats<'a> {
    type Item = &'a Seat;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// An iterator over the rows of an [`Auditorium`], front row first.
pub struct Rows<'a> {
    inner: slice::Iter<'a, Vec<Seat>>,
}

impl<'a> Iterator for Rows<'a> {
    type Item = &'a [Seat];

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Vec::as_slice)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a Auditorium {
    type Item = &'a Seat;
    type IntoIter = Seats<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.seats()
    }
}

/// Renders the grid one row per line, marking each seat `Free` or `Booked`.
///
/// # Examples
///
/// ```
/// use boxoffice::Auditorium;
///
/// let mut auditorium = Auditorium::new(2, 3);
/// auditorium.book(2).unwrap();
/// assert_eq!(
///     auditorium.to_string(),
///     "Row 1: 1[Free] 2[Booked] 3[Free]\nRow 2: 4[Free] 5[Free] 6[Free]\n"
/// );
/// ```
impl fmt::Display for Auditorium {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (index, row) in self.rows().enumerate() {
            write!(f, "Row {}:", index + 1)?;
            for seat in row {
                let status = if seat.is_booked() { "Booked" } else { "Free" };
                write!(f, " {}[{}]", seat.number(), status)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
