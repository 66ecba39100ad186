//! Consistency report run when saved state is loaded.
//!
//! The two stores are written separately, so an interrupted save can leave a
//! booked room without its reservation or the other way round. Findings are
//! reported, nothing is repaired.

use hotel_shared::{Reservation, Room};
use std::collections::{HashMap, HashSet};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inconsistency {
    DuplicateRoom { room_number: u32, count: usize },
    UnknownRoom { guest_name: String, room_number: u32 },
    ReservedButAvailable { room_number: u32 },
    BookedWithoutReservation { room_number: u32 },
    DuplicateReservations { room_number: u32, count: usize },
}

impl fmt::Display for Inconsistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inconsistency::DuplicateRoom { room_number, count } => {
                write!(f, "room number {} appears {} times", room_number, count)
            }
            Inconsistency::UnknownRoom { guest_name, room_number } => {
                write!(f, "reservation for {} references unknown room {}", guest_name, room_number)
            }
            Inconsistency::ReservedButAvailable { room_number } => {
                write!(f, "room {} is marked available but has a reservation", room_number)
            }
            Inconsistency::BookedWithoutReservation { room_number } => {
                write!(f, "room {} is marked booked but has no reservation", room_number)
            }
            Inconsistency::DuplicateReservations { room_number, count } => {
                write!(f, "room {} is held by {} reservations", room_number, count)
            }
        }
    }
}

pub fn check(rooms: &[Room], reservations: &[Reservation]) -> Vec<Inconsistency> {
    let mut findings = Vec::new();
    let mut held: HashMap<u32, usize> = HashMap::new();

    let mut listed: Vec<(u32, usize)> = Vec::new();
    for room in rooms {
        match listed.iter_mut().find(|(number, _)| *number == room.number) {
            Some((_, count)) => *count += 1,
            None => listed.push((room.number, 1)),
        }
    }
    for (room_number, count) in listed {
        if count > 1 {
            findings.push(Inconsistency::DuplicateRoom { room_number, count });
        }
    }

    for reservation in reservations {
        if rooms.iter().any(|r| r.number == reservation.room_number) {
            *held.entry(reservation.room_number).or_default() += 1;
        } else {
            findings.push(Inconsistency::UnknownRoom {
                guest_name: reservation.guest_name.clone(),
                room_number: reservation.room_number,
            });
        }
    }

    let mut seen = HashSet::new();
    for room in rooms {
        // Only the first row for a number is the one bookings act on
        if !seen.insert(room.number) {
            continue;
        }
        match (room.available, held.get(&room.number).copied().unwrap_or(0)) {
            (true, 0) | (false, 1) => {}
            (true, _) => findings.push(Inconsistency::ReservedButAvailable { room_number: room.number }),
            (false, 0) => findings.push(Inconsistency::BookedWithoutReservation { room_number: room.number }),
            (false, count) => findings.push(Inconsistency::DuplicateReservations {
                room_number: room.number,
                count,
            }),
        }
    }

    findings
}
