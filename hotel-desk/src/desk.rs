use std::io::{self, BufRead, Write};

use hotel_booking::{BookingError, BookingService};
use hotel_core::InventoryRepository;

use crate::action::Action;
use crate::view;

const SELECT_ROOM: &str = "Select a room to book.";

/// Line-oriented front desk: shows the room table, reads an action, runs it
/// against the booking service, repeats until Exit or end of input.
///
/// End of input, or a line that is not valid UTF-8, at any prompt inside an
/// action abandons that action without touching the service.
pub struct Desk<S: InventoryRepository, R: BufRead, W: Write> {
    service: BookingService<S>,
    title: String,
    input: R,
    output: W,
    closed: bool,
}

impl<S: InventoryRepository, R: BufRead, W: Write> Desk<S, R, W> {
    pub fn new(service: BookingService<S>, title: impl Into<String>, input: R, output: W) -> Self {
        Self {
            service,
            title: title.into(),
            input,
            output,
            closed: false,
        }
    }

    pub fn service(&self) -> &BookingService<S> {
        &self.service
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.render()?;

            let Some(line) = self.ask("Action:")? else {
                if self.closed {
                    tracing::info!("Input closed, saving and exiting");
                    break;
                }
                continue;
            };

            match line.parse::<Action>() {
                Ok(Action::Book) => self.book_room()?,
                Ok(Action::Cancel) => self.cancel_reservation()?,
                Ok(Action::Reservations) => {
                    let listing = view::render_reservations(self.service.reservations());
                    self.output.write_all(listing.as_bytes())?;
                }
                Ok(Action::Exit) => break,
                Err(msg) => self.notify(&msg)?,
            }
        }

        self.service.flush();
        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n{}\n", self.title)?;
        self.output.write_all(view::render_rooms(self.service.rooms()).as_bytes())?;
        writeln!(self.output, "\n{}", Action::MENU)
    }

    fn book_room(&mut self) -> io::Result<()> {
        let prompt = format!("Select a row (1-{}):", self.service.rooms().len());
        let Some(row) = self.ask(&prompt)? else {
            return Ok(());
        };

        let row = row.trim();
        if row.is_empty() {
            return self.notify(SELECT_ROOM);
        }
        // Not a number: treated as the user backing out
        let Ok(index) = row.parse::<usize>() else {
            return Ok(());
        };

        let selected = index.checked_sub(1)
            .and_then(|i| self.service.rooms().get(i))
            .map(|room| (room.number, room.available));
        let Some((room_number, available)) = selected else {
            return self.notify(SELECT_ROOM);
        };
        if !available {
            return self.notify(&BookingError::RoomUnavailable(room_number).to_string());
        }

        let Some(guest_name) = self.ask("Enter Guest Name:")? else {
            return Ok(());
        };
        let Some(check_in) = self.ask("Enter Check-in Date (dd/mm/yyyy):")? else {
            return Ok(());
        };
        let Some(check_out) = self.ask("Enter Check-out Date (dd/mm/yyyy):")? else {
            return Ok(());
        };

        match self.service.book(&guest_name, room_number, &check_in, &check_out) {
            Ok(_) => self.notify("Room booked successfully!"),
            Err(e) => self.notify(&e.to_string()),
        }
    }

    fn cancel_reservation(&mut self) -> io::Result<()> {
        let Some(guest_name) = self.ask("Enter Guest Name to Cancel:")? else {
            return Ok(());
        };

        match self.service.cancel(&guest_name) {
            Ok(_) => self.notify("Reservation canceled."),
            Err(e) => self.notify(&e.to_string()),
        }
    }

    /// `None` when the answer is unusable: input is exhausted, or the line
    /// is not valid UTF-8
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{} ", prompt)?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            self.closed = true;
            writeln!(self.output)?;
            return Ok(None);
        }

        let Ok(mut line) = String::from_utf8(raw) else {
            tracing::debug!("Discarding input line that is not valid UTF-8");
            return Ok(None);
        };
        let len = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(len);
        Ok(Some(line))
    }

    fn notify(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }
}
