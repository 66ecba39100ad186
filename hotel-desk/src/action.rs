use std::str::FromStr;

/// Everything the user can ask the front desk to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Book,
    Cancel,
    Reservations,
    Exit,
}

impl Action {
    pub const MENU: &'static str =
        "[b] Book Room   [c] Cancel Reservation   [r] Reservations   [x] Exit";
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "b" | "book" => Ok(Action::Book),
            "c" | "cancel" => Ok(Action::Cancel),
            "r" | "reservations" => Ok(Action::Reservations),
            "x" | "exit" | "q" | "quit" => Ok(Action::Exit),
            other => Err(format!("Unknown action: {}", other)),
        }
    }
}
