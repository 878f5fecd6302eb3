//! The surface the controller renders into and reads control values from.

use anyhow::Result;
use shared::domain::{UserId, UserRecord, ViewMode};

use crate::{
    details::{DirectoryStats, UserDetails},
    events::UiEvent,
    pipeline::Query,
};

/// One card or row of the rendered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub id: UserId,
    pub full_name: String,
    pub age: u32,
    pub email: String,
    pub city: String,
    pub country: String,
    pub picture_url: String,
    pub favorite: bool,
}

impl ListItem {
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            id: record.id,
            full_name: record.full_name(),
            age: record.age,
            email: record.email.clone(),
            city: record.location.city.clone(),
            country: record.location.country.clone(),
            picture_url: record.picture.medium.clone(),
            favorite: record.favorite,
        }
    }

    /// Event for a click on the item body.
    pub fn open_command(&self) -> UiEvent {
        UiEvent::OpenDetails(self.id)
    }

    /// Event for the nested favorite button; never opens the detail view.
    pub fn toggle_command(&self) -> UiEvent {
        UiEvent::ToggleFavorite(self.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationView {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_matches: usize,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl PaginationView {
    pub fn new(current_page: usize, total_pages: usize, total_matches: usize) -> Self {
        Self {
            current_page,
            total_pages,
            total_matches,
            prev_enabled: current_page > 1,
            next_enabled: current_page < total_pages,
        }
    }
}

pub trait ViewPort {
    fn query(&self) -> Query;

    fn show_loading(&mut self);
    fn hide_loading(&mut self);
    fn show_load_error(&mut self, message: &str);

    fn render_stats(&mut self, stats: &DirectoryStats);
    /// Replaces the whole displayed collection.
    fn render_items(&mut self, items: &[ListItem], mode: ViewMode);
    fn render_pagination(&mut self, pagination: &PaginationView);
    fn set_view_mode(&mut self, mode: ViewMode);

    fn open_details(&mut self, details: &UserDetails);
    fn close_details(&mut self);

    fn scroll_to_top(&mut self) {}

    fn copy_text(&mut self, text: &str) -> Result<()>;
    fn notify(&mut self, message: &str);
}
