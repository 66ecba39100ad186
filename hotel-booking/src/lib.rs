pub mod audit;
pub mod service;

pub use audit::Inconsistency;
pub use service::{default_rooms, BookingError, BookingService};
