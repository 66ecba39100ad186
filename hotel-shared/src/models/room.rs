use serde::{Deserialize, Serialize};

/// Booking state of a single room
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomStatus {
    Available,
    Booked,
}

/// A bookable room. Number, type and price never change once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Room {
    pub number: u32,
    #[serde(rename = "type")]
    pub room_type: String,
    pub price: f64,
    pub available: bool,
}

impl Room {
    pub fn new(number: u32, room_type: impl Into<String>, price: f64) -> Self {
        Self {
            number,
            room_type: room_type.into(),
            price,
            available: true,
        }
    }

    pub fn status(&self) -> RoomStatus {
        if self.available {
            RoomStatus::Available
        } else {
            RoomStatus::Booked
        }
    }

    /// Available → Booked
    pub fn mark_booked(&mut self) {
        self.available = false;
    }

    /// Booked → Available
    pub fn mark_available(&mut self) {
        self.available = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_json_shape() {
        let room = Room::new(103, "Suite", 150.0);
        let value = serde_json::to_value(&room).unwrap();

        assert_eq!(value["number"], 103);
        assert_eq!(value["type"], "Suite");
        assert_eq!(value["price"], 150.0);
        assert_eq!(value["available"], true);
        assert!(value.get("room_type").is_none());
    }

    #[test]
    fn test_status_follows_availability() {
        let mut room = Room::new(101, "Single", 50.0);
        assert_eq!(room.status(), RoomStatus::Available);

        room.mark_booked();
        assert_eq!(room.status(), RoomStatus::Booked);
        assert!(!room.available);

        room.mark_available();
        assert_eq!(room.status(), RoomStatus::Available);
    }
}
