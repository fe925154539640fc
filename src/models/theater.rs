use std::collections::HashMap;

use crate::error::TheaterError;

use super::seat::Seat;
use super::ticket::{
    AvailableSeats, PurchaseReceipt, PurchaseRequest, ReturnReceipt, ReturnRequest, TheaterStats,
};

/// The hall: a fixed grid of seats and the only place their state changes.
///
/// Seats are kept row-major, so `(row, column)` maps straight to an index.
/// Sold seats are additionally indexed by their return token.
#[derive(Debug)]
pub struct Theater {
    rows: u32,
    cols: u32,
    seats: Vec<Seat>,
    tokens: HashMap<String, usize>,
}

impl Theater {
    pub fn new(rows: u32, cols: u32) -> Self {
        let seats = (1..=rows)
            .flat_map(|row| (1..=cols).map(move |column| Seat::new(row, column)))
            .collect();

        Self {
            rows,
            cols,
            seats,
            tokens: HashMap::new(),
        }
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn seat(&self, row: u32, column: u32) -> Option<&Seat> {
        self.index_of(i64::from(row), i64::from(column))
            .map(|index| &self.seats[index])
    }

    pub fn list_available(&self) -> AvailableSeats {
        AvailableSeats {
            total_rows: self.rows,
            total_columns: self.cols,
            available_seats: self
                .seats
                .iter()
                .filter(|seat| !seat.is_sold())
                .map(Seat::view)
                .collect(),
        }
    }

    pub fn purchase(&mut self, order: &PurchaseRequest) -> Result<PurchaseReceipt, TheaterError> {
        let (Some(row), Some(column)) = (order.row, order.column) else {
            return Err(TheaterError::MalformedRequest);
        };
        let index = self
            .index_of(row, column)
            .ok_or(TheaterError::InvalidSeatLocation)?;

        let seat = &mut self.seats[index];
        if seat.is_sold() {
            return Err(TheaterError::SeatUnavailable);
        }
        let token = seat.mark_sold().to_owned();
        let ticket = seat.view();

        self.tokens.insert(token.clone(), index);
        tracing::info!(row = ticket.row, column = ticket.column, price = ticket.price, "ticket sold");

        Ok(PurchaseReceipt { token, ticket })
    }

    pub fn return_ticket(&mut self, request: &ReturnRequest) -> Result<ReturnReceipt, TheaterError> {
        let token = request
            .token
            .as_deref()
            .ok_or(TheaterError::MalformedRequest)?;
        let index = self
            .tokens
            .remove(token)
            .ok_or(TheaterError::InvalidToken)?;

        let seat = &mut self.seats[index];
        debug_assert_eq!(seat.return_token(), Some(token));
        seat.mark_returned();
        let returned_ticket = seat.view();

        tracing::info!(row = returned_ticket.row, column = returned_ticket.column, "ticket returned");

        Ok(ReturnReceipt { returned_ticket })
    }

    /// Recomputed from the seats on every call.
    pub fn stats(&self) -> TheaterStats {
        let (sold, current_income) = self
            .seats
            .iter()
            .filter(|seat| seat.is_sold())
            .fold((0usize, 0u64), |(count, income), seat| {
                (count + 1, income + u64::from(seat.price()))
            });

        TheaterStats {
            current_income,
            number_of_available_seats: self.seats.len() - sold,
            number_of_purchased_tickets: sold,
        }
    }

    fn index_of(&self, row: i64, column: i64) -> Option<usize> {
        let row = u32::try_from(row).ok().filter(|r| (1..=self.rows).contains(r))?;
        let column = u32::try_from(column).ok().filter(|c| (1..=self.cols).contains(c))?;
        let index = (row as usize - 1) * self.cols as usize + (column as usize - 1);
        Some(index)
    }
}
