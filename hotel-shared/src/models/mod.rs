pub mod room;
pub mod reservation;

pub use room::{Room, RoomStatus};
pub use reservation::Reservation;

use serde::{Deserialize, Serialize};

/// Everything the front desk tracks: the room list and the live reservations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    pub rooms: Vec<Room>,
    pub reservations: Vec<Reservation>,
}

impl Inventory {
    pub fn new(rooms: Vec<Room>, reservations: Vec<Reservation>) -> Self {
        Self { rooms, reservations }
    }
}
