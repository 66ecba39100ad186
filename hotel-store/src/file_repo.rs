use hotel_core::{InventoryRepository, StoreError, StoreResult};
use hotel_shared::{Inventory, Reservation, Room};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::app_config::StorageConfig;

/// Keeps rooms and reservations in two JSON array files.
///
/// The files are written one after the other; a crash in between can leave
/// them out of step.
#[derive(Debug, Clone)]
pub struct FileRepository {
    rooms_path: PathBuf,
    reservations_path: PathBuf,
}

impl FileRepository {
    pub fn new(rooms_path: impl Into<PathBuf>, reservations_path: impl Into<PathBuf>) -> Self {
        Self {
            rooms_path: rooms_path.into(),
            reservations_path: reservations_path.into(),
        }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(config.rooms_file.clone(), config.reservations_file.clone())
    }

    pub fn rooms_path(&self) -> &Path {
        &self.rooms_path
    }

    pub fn reservations_path(&self) -> &Path {
        &self.reservations_path
    }
}

impl InventoryRepository for FileRepository {
    fn save(&self, rooms: &[Room], reservations: &[Reservation]) -> StoreResult<()> {
        write_json(&self.rooms_path, rooms)?;
        write_json(&self.reservations_path, reservations)?;
        tracing::debug!(
            rooms = rooms.len(),
            reservations = reservations.len(),
            "Inventory written"
        );
        Ok(())
    }

    fn load(&self) -> StoreResult<Inventory> {
        let rooms: Vec<Room> = read_json(&self.rooms_path)?;
        let reservations: Vec<Reservation> = read_json(&self.reservations_path)?;
        Ok(Inventory::new(rooms, reservations))
    }
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> StoreResult<()> {
    let io_err = |source| StoreError::Io { path: path.to_path_buf(), source };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value).map_err(|source| StoreError::Format {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(io_err)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> StoreResult<T> {
    let file = File::open(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| StoreError::Format {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn repo_in(dir: &Path) -> FileRepository {
        FileRepository::new(dir.join("rooms.json"), dir.join("reservations.json"))
    }

    fn sample() -> Inventory {
        let mut suite = Room::new(103, "Suite", 150.0);
        suite.mark_booked();
        Inventory::new(
            vec![Room::new(101, "Single", 50.0), suite],
            vec![Reservation::new("Bob", 103, "10/02/2024", "12/02/2024")],
        )
    }

    #[test]
    fn test_save_then_load_reproduces_records() {
        let dir = tempdir().unwrap();
        let repo = repo_in(dir.path());
        let inventory = sample();

        repo.save(&inventory.rooms, &inventory.reservations).unwrap();

        assert_eq!(repo.load().unwrap(), inventory);
    }

    #[test]
    fn test_save_overwrites_previous_contents() {
        let dir = tempdir().unwrap();
        let repo = repo_in(dir.path());
        let inventory = sample();

        repo.save(&inventory.rooms, &inventory.reservations).unwrap();
        repo.save(&inventory.rooms[..1], &[]).unwrap();

        let loaded = repo.load().unwrap();
        assert_eq!(loaded.rooms.len(), 1);
        assert!(loaded.reservations.is_empty());
    }

    #[test]
    fn test_stores_are_plain_json_arrays() {
        let dir = tempdir().unwrap();
        let repo = repo_in(dir.path());
        let inventory = sample();

        repo.save(&inventory.rooms, &inventory.reservations).unwrap();

        let raw = std::fs::read_to_string(repo.reservations_path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["guestName"], "Bob");
        assert_eq!(value[0]["roomNumber"], 103);
    }

    #[test]
    fn test_missing_store_is_an_error() {
        let dir = tempdir().unwrap();
        let repo = repo_in(dir.path());

        assert!(matches!(repo.load(), Err(StoreError::Io { .. })));
        assert_eq!(repo.load_or_empty(), Inventory::default());
    }

    #[test]
    fn test_one_corrupt_store_discards_both() {
        let dir = tempdir().unwrap();
        let repo = repo_in(dir.path());
        let inventory = sample();
        repo.save(&inventory.rooms, &inventory.reservations).unwrap();

        std::fs::write(repo.reservations_path(), "{ not json").unwrap();

        assert!(matches!(repo.load(), Err(StoreError::Format { .. })));
        assert_eq!(repo.load_or_empty(), Inventory::default());
    }

    #[test]
    fn test_wrong_shape_is_rejected() {
        let dir = tempdir().unwrap();
        let repo = repo_in(dir.path());
        std::fs::write(repo.rooms_path(), r#"[{"number": "one"}]"#).unwrap();
        std::fs::write(repo.reservations_path(), "[]").unwrap();

        assert!(repo.load().is_err());
    }

    #[test]
    fn test_unwritable_location_is_logged_not_raised() {
        let dir = tempdir().unwrap();
        let repo = FileRepository::new(
            dir.path().join("missing").join("rooms.json"),
            dir.path().join("missing").join("reservations.json"),
        );

        assert!(repo.save(&[], &[]).is_err());
        repo.save_or_log(&[], &[]);
    }
}
