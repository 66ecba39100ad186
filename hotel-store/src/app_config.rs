use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub storage: StorageConfig,
    pub desk: DeskConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub rooms_file: PathBuf,
    pub reservations_file: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DeskConfig {
    pub title: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Self::defaults()?
            // Every file is optional, a bare checkout runs on the defaults above
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `HOTEL__STORAGE__ROOMS_FILE=/var/lib/hotel/rooms.json`
            .add_source(config::Environment::with_prefix("HOTEL").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        config::Config::builder()
            .set_default("storage.rooms_file", "rooms.json")?
            .set_default("storage.reservations_file", "reservations.json")?
            .set_default("desk.title", "Hotel Reservation System")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_any_files() {
        let config: Config = Config::defaults()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.storage.rooms_file, PathBuf::from("rooms.json"));
        assert_eq!(config.storage.reservations_file, PathBuf::from("reservations.json"));
        assert_eq!(config.desk.title, "Hotel Reservation System");
    }

    #[test]
    fn test_file_source_overrides_defaults() {
        let config: Config = Config::defaults()
            .unwrap()
            .add_source(config::File::from_str(
                "[storage]\nrooms_file = \"/tmp/r.json\"\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.storage.rooms_file, PathBuf::from("/tmp/r.json"));
        assert_eq!(config.storage.reservations_file, PathBuf::from("reservations.json"));
    }
}
