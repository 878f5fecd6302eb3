//! Directory client core: query pipeline, favorites, debounce scheduling, and
//! the controller that drives an injected [`ViewPort`].

pub mod controller;
pub mod details;
pub mod events;
pub mod favorites;
pub mod pipeline;
pub mod schedule;
pub mod source;
pub mod view;

pub use controller::{ControllerSettings, DirectoryController, LoadPhase, ViewState};
pub use details::{DirectoryStats, UserDetails, ZodiacSign};
pub use events::UiEvent;
pub use favorites::{FavoriteSet, FavoriteStore, KeyValueFavorites};
pub use pipeline::{PageSlice, Query, PAGE_SIZE};
pub use source::{FetchError, RandomUserClient, UserSource, DEFAULT_ENDPOINT};
pub use view::{ListItem, PaginationView, ViewPort};

#[cfg(test)]
pub(crate) mod testing;
