//! Events a view port dispatches into the controller.

use shared::domain::{UserId, ViewMode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The free-text search box changed; refresh is debounced.
    SearchInput,
    /// A search-field, sort, gender, or age selector changed.
    SelectorChanged,
    NextPage,
    PrevPage,
    SetViewMode(ViewMode),
    ToggleFavorite(UserId),
    OpenDetails(UserId),
    CloseDetails,
    CopyEmail(UserId),
    CopyPhone(UserId),
    Quit,
}

impl UiEvent {
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::SearchInput => "search_input",
            UiEvent::SelectorChanged => "selector_changed",
            UiEvent::NextPage => "next_page",
            UiEvent::PrevPage => "prev_page",
            UiEvent::SetViewMode(_) => "set_view_mode",
            UiEvent::ToggleFavorite(_) => "toggle_favorite",
            UiEvent::OpenDetails(_) => "open_details",
            UiEvent::CloseDetails => "close_details",
            UiEvent::CopyEmail(_) => "copy_email",
            UiEvent::CopyPhone(_) => "copy_phone",
            UiEvent::Quit => "quit",
        }
    }
}
