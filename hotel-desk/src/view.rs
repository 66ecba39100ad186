use hotel_shared::{Reservation, Room};
use std::fmt::Write;

const HEADERS: [&str; 4] = ["Room #", "Type", "Price", "Available"];

/// Room table with a 1-based row index in the left gutter
pub fn render_rooms(rooms: &[Room]) -> String {
    let rows: Vec<[String; 4]> = rooms.iter()
        .map(|room| {
            [
                room.number.to_string(),
                room.room_type.clone(),
                format!("{:?}", room.price),
                if room.available { "Yes" } else { "No" }.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    let gutter = rows.len().to_string().len() + 2;

    let mut out = String::new();
    push_row(&mut out, &" ".repeat(gutter), &HEADERS.map(String::from), &widths);
    for (index, row) in rows.iter().enumerate() {
        let label = format!("[{}]", index + 1);
        push_row(&mut out, &format!("{:>gutter$}", label), row, &widths);
    }
    out
}

fn push_row(out: &mut String, gutter: &str, cells: &[String; 4], widths: &[usize; 4]) {
    out.push_str(gutter);
    for (cell, &width) in cells.iter().zip(widths) {
        let _ = write!(out, "  {:<width$}", cell);
    }
    let trimmed = out.trim_end().len();
    out.truncate(trimmed);
    out.push('\n');
}

pub fn render_reservations(reservations: &[Reservation]) -> String {
    if reservations.is_empty() {
        return "No reservations.\n".to_string();
    }
    reservations.iter()
        .map(|r| format!("{} - room {} - {} to {}\n", r.guest_name, r.room_number, r.check_in, r.check_out))
        .collect()
}
