pub mod app_config;
pub mod file_repo;

pub use file_repo::FileRepository;
