pub mod action;
pub mod desk;
pub mod view;

pub use action::Action;
pub use desk::Desk;
