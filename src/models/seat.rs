use serde::Serialize;
use uuid::Uuid;

/// Rows up to and including this one are sold at the premium price.
pub const PREMIUM_ROWS: u32 = 4;
pub const PREMIUM_PRICE: u32 = 10;
pub const STANDARD_PRICE: u32 = 8;

pub fn price_for_row(row: u32) -> u32 {
    if row <= PREMIUM_ROWS {
        PREMIUM_PRICE
    } else {
        STANDARD_PRICE
    }
}

/// One place in the hall. A seat is sold exactly when it holds a return token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    row: u32,
    column: u32,
    price: u32,
    return_token: Option<String>,
}

/// Public shape of a seat: no sold flag, no token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeatView {
    pub row: u32,
    pub column: u32,
    pub price: u32,
}

impl Seat {
    pub fn new(row: u32, column: u32) -> Self {
        Self {
            row,
            column,
            price: price_for_row(row),
            return_token: None,
        }
    }

    pub fn row(&self) -> u32 {
        self.row
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn price(&self) -> u32 {
        self.price
    }

    pub fn is_sold(&self) -> bool {
        self.return_token.is_some()
    }

    pub fn return_token(&self) -> Option<&str> {
        self.return_token.as_deref()
    }

    /// Marks the seat sold under a freshly generated random token and hands
    /// the token back. The caller checks availability first.
    pub fn mark_sold(&mut self) -> &str {
        debug_assert!(!self.is_sold(), "seat {}:{} sold twice", self.row, self.column);
        self.return_token.insert(Uuid::new_v4().to_string()).as_str()
    }

    pub fn mark_returned(&mut self) {
        self.return_token = None;
    }

    pub fn view(&self) -> SeatView {
        SeatView {
            row: self.row,
            column: self.column,
            price: self.price,
        }
    }
}
