use hotel_core::InventoryRepository;
use hotel_shared::{Inventory, Reservation, Room, RoomStatus};

use crate::audit;

/// Rooms created on first start, when nothing was loaded
pub fn default_rooms() -> Vec<Room> {
    vec![
        Room::new(101, "Single", 50.0),
        Room::new(102, "Double", 75.0),
        Room::new(103, "Suite", 150.0),
        Room::new(104, "Single", 50.0),
    ]
}

/// Owns the room and reservation collections and keeps them in step.
///
/// Every successful mutation is written through the repository before the
/// call returns.
pub struct BookingService<R: InventoryRepository> {
    repository: R,
    rooms: Vec<Room>,
    reservations: Vec<Reservation>,
}

impl<R: InventoryRepository> BookingService<R> {
    /// Load saved state, seeding the default rooms when there is none
    pub fn open(repository: R) -> Self {
        let Inventory { rooms, reservations } = repository.load_or_empty();
        let mut service = Self { repository, rooms, reservations };

        if service.rooms.is_empty() {
            service.rooms = default_rooms();
            tracing::info!("No saved rooms, seeded {} defaults", service.rooms.len());
            service.flush();
        }

        for finding in audit::check(&service.rooms, &service.reservations) {
            tracing::warn!("Inventory inconsistency: {}", finding);
        }

        service
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn room(&self, number: u32) -> Option<&Room> {
        self.rooms.iter().find(|r| r.number == number)
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Transition: Available → Booked
    pub fn book(
        &mut self,
        guest_name: &str,
        room_number: u32,
        check_in: &str,
        check_out: &str,
    ) -> Result<Reservation, BookingError> {
        let room = self.rooms.iter_mut()
            .find(|r| r.number == room_number)
            .ok_or(BookingError::RoomNotFound(room_number))?;

        if room.status() != RoomStatus::Available {
            return Err(BookingError::RoomUnavailable(room_number));
        }

        room.mark_booked();
        let reservation = Reservation::new(guest_name, room_number, check_in, check_out);
        self.reservations.push(reservation.clone());
        self.flush();

        tracing::info!("Room {} booked for {}", room_number, guest_name);
        Ok(reservation)
    }

    /// Transition: Booked → Available, for the first reservation held by
    /// `guest_name` in collection order
    pub fn cancel(&mut self, guest_name: &str) -> Result<Reservation, BookingError> {
        let index = self.reservations.iter()
            .position(|r| r.is_for_guest(guest_name))
            .ok_or_else(|| BookingError::NoReservation(guest_name.to_string()))?;

        let reservation = self.reservations.remove(index);
        if let Some(room) = self.rooms.iter_mut().find(|r| r.number == reservation.room_number) {
            room.mark_available();
        }
        self.flush();

        tracing::info!(
            "Reservation for {} on room {} canceled",
            reservation.guest_name,
            reservation.room_number
        );
        Ok(reservation)
    }

    /// Write both collections. Failures are logged, never raised.
    pub fn flush(&self) {
        self.repository.save_or_log(&self.rooms, &self.reservations);
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("Room {0} does not exist.")]
    RoomNotFound(u32),

    #[error("Room {0} is not available.")]
    RoomUnavailable(u32),

    #[error("No reservation found for {0}.")]
    NoReservation(String),
}
