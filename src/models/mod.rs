pub mod seat;
pub mod theater;
pub mod ticket;

pub use seat::{Seat, SeatView};
pub use theater::Theater;
pub use ticket::{
    AvailableSeats, PurchaseReceipt, PurchaseRequest, ReturnReceipt, ReturnRequest, TheaterStats,
};
