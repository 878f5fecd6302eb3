use std::{fmt::Write as _, io::Write};

use anyhow::{Context, Result};
use directory_core::{DirectoryStats, ListItem, PaginationView, Query, UserDetails, ViewPort};
use shared::domain::ViewMode;
use tracing::warn;

use crate::panel::Panel;

/// Where copied text ends up.
pub trait Clipboard: Send {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The desktop clipboard, opened per copy so a headless session only fails
/// the copy itself.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new().context("clipboard unavailable")?;
        clipboard
            .set_text(text.to_string())
            .context("failed to write clipboard")
    }
}

pub struct TerminalView<W: Write> {
    out: W,
    panel: Panel,
    clipboard: Box<dyn Clipboard>,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, panel: Panel, clipboard: Box<dyn Clipboard>) -> Self {
        Self {
            out,
            panel,
            clipboard,
        }
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        let written = self
            .out
            .write_all(text.as_bytes())
            .and_then(|()| self.out.flush());
        if let Err(err) = written {
            warn!("terminal: write failed: {err}");
        }
    }
}

fn favorite_mark(favorite: bool) -> &'static str {
    if favorite {
        "[*]"
    } else {
        "[ ]"
    }
}

fn render_card(buf: &mut String, row: usize, item: &ListItem) {
    let _ = writeln!(
        buf,
        "+ {row:>2} {} {}, {}",
        favorite_mark(item.favorite),
        item.full_name,
        item.age
    );
    let _ = writeln!(buf, "|    {}", item.email);
    let _ = writeln!(buf, "|    {}, {}", item.city, item.country);
}

fn render_row(buf: &mut String, row: usize, item: &ListItem) {
    let _ = writeln!(
        buf,
        "{row:>3} {} {:<28} {:>3}  {:<32} {}, {}",
        favorite_mark(item.favorite),
        item.full_name,
        item.age,
        item.email,
        item.city,
        item.country
    );
}

impl<W: Write> ViewPort for TerminalView<W> {
    fn query(&self) -> Query {
        self.panel.controls()
    }

    fn show_loading(&mut self) {
        self.emit("Loading directory...\n");
    }

    fn hide_loading(&mut self) {}

    fn show_load_error(&mut self, message: &str) {
        self.emit(&format!("{message}\n"));
    }

    fn render_stats(&mut self, stats: &DirectoryStats) {
        self.emit(&format!(
            "Users: {}  Male: {}  Female: {}  Countries: {}  Average age: {}  Favorites: {}\n",
            stats.total,
            stats.male,
            stats.female,
            stats.countries,
            stats.average_age,
            stats.favorites
        ));
    }

    fn render_items(&mut self, items: &[ListItem], mode: ViewMode) {
        self.panel
            .set_rows(items.iter().map(|item| item.id).collect());

        let mut buf = String::new();
        if items.is_empty() {
            buf.push_str("No users match.\n");
        }
        for (index, item) in items.iter().enumerate() {
            match mode {
                ViewMode::Grid => render_card(&mut buf, index + 1, item),
                ViewMode::List => render_row(&mut buf, index + 1, item),
            }
        }
        self.emit(&buf);
    }

    fn render_pagination(&mut self, pagination: &PaginationView) {
        let prev = if pagination.prev_enabled { "<prev" } else { "     " };
        let next = if pagination.next_enabled { "next>" } else { "     " };
        self.emit(&format!(
            "{prev}  Page {} of {} ({} matches)  {next}\n",
            pagination.current_page, pagination.total_pages, pagination.total_matches
        ));
    }

    fn set_view_mode(&mut self, mode: ViewMode) {
        self.emit(&format!("View: {mode}\n"));
    }

    fn open_details(&mut self, details: &UserDetails) {
        self.panel.set_details(Some(details.id));

        let mut buf = String::new();
        let _ = writeln!(buf, "== {} {}", details.full_name, favorite_mark(details.favorite));
        let _ = writeln!(buf, "   Photo:      {}", details.picture_url);
        let _ = writeln!(
            buf,
            "   Born:       {} (age {}, {})",
            details.birth_date,
            details.age,
            details.zodiac.name()
        );
        let _ = writeln!(buf, "   Gender:     {}", details.gender_label);
        let _ = writeln!(buf, "   Phone:      {}", details.phone);
        let _ = writeln!(buf, "   Mobile:     {}", details.mobile);
        let _ = writeln!(buf, "   Email:      {}", details.email);
        let _ = writeln!(buf, "   Address:    {}", details.address);
        let _ = writeln!(buf, "   Registered: {}", details.registered);
        self.emit(&buf);
    }

    fn close_details(&mut self) {
        if self.panel.details().is_some() {
            self.panel.set_details(None);
            self.emit("Details closed.\n");
        }
    }

    fn copy_text(&mut self, text: &str) -> Result<()> {
        self.clipboard.set_text(text)
    }

    fn notify(&mut self, message: &str) {
        self.emit(&format!("* {message}\n"));
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
