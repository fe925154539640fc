//! Request and response payloads exchanged with the theater.
//!
//! Request fields are optional so that an absent field can be reported as
//! `MalformedRequest` by the theater rather than as a decoding failure.

use serde::{Deserialize, Serialize};

use super::seat::SeatView;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PurchaseRequest {
    pub row: Option<i64>,
    pub column: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReturnRequest {
    pub token: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AvailableSeats {
    pub total_rows: u32,
    pub total_columns: u32,
    pub available_seats: Vec<SeatView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PurchaseReceipt {
    pub token: String,
    pub ticket: SeatView,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReturnReceipt {
    pub returned_ticket: SeatView,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TheaterStats {
    pub current_income: u64,
    pub number_of_available_seats: usize,
    pub number_of_purchased_tickets: usize,
}
