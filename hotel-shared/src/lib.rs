pub mod models;

pub use models::{Inventory, Reservation, Room, RoomStatus};
