use hotel_shared::{Inventory, Reservation, Room};
use crate::StoreResult;

/// Whole-collection persistence for rooms and reservations.
///
/// Every save overwrites both stores in full. Implementations report
/// failures through `StoreResult`; callers that must never fail go through
/// [`load_or_empty`](InventoryRepository::load_or_empty) and
/// [`save_or_log`](InventoryRepository::save_or_log).
pub trait InventoryRepository {
    fn save(&self, rooms: &[Room], reservations: &[Reservation]) -> StoreResult<()>;

    fn load(&self) -> StoreResult<Inventory>;

    /// Load both collections, or neither. A failure reading either store
    /// discards whatever the other one produced.
    fn load_or_empty(&self) -> Inventory {
        match self.load() {
            Ok(inventory) => inventory,
            Err(e) => {
                tracing::warn!("Could not load saved inventory, starting empty: {}", e);
                Inventory::default()
            }
        }
    }

    fn save_or_log(&self, rooms: &[Room], reservations: &[Reservation]) {
        if let Err(e) = self.save(rooms, reservations) {
            tracing::error!("Failed to save inventory: {}", e);
        }
    }
}
