use serde::{Deserialize, Serialize};

/// A guest's hold on one room. Dates are kept exactly as typed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub guest_name: String,
    pub room_number: u32,
    pub check_in: String,
    pub check_out: String,
}

impl Reservation {
    pub fn new(
        guest_name: impl Into<String>,
        room_number: u32,
        check_in: impl Into<String>,
        check_out: impl Into<String>,
    ) -> Self {
        Self {
            guest_name: guest_name.into(),
            room_number,
            check_in: check_in.into(),
            check_out: check_out.into(),
        }
    }

    /// Case-insensitive guest name comparison, char by char with single-char
    /// case mappings, so `Σ` matches `ς` and `İ` matches `i`
    pub fn is_for_guest(&self, guest_name: &str) -> bool {
        self.guest_name.chars().count() == guest_name.chars().count()
            && self.guest_name.chars().zip(guest_name.chars()).all(|(a, b)| chars_match(a, b))
    }
}

fn chars_match(a: char, b: char) -> bool {
    if a == b {
        return true;
    }
    let (upper_a, upper_b) = (simple_upper(a), simple_upper(b));
    upper_a == upper_b || simple_lower(upper_a) == simple_lower(upper_b)
}

/// Mappings that expand to several chars (`ß` → `SS`) leave the char as is
fn simple_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// The only expanding lowercase mapping is `İ` → `i` + combining dot, whose
/// single-char form is its first char
fn simple_lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
