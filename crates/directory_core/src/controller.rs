//! The single owner of the directory's records and view state.

use std::{sync::Arc, time::Duration};

use chrono::{DateTime, NaiveDate, Utc};
use shared::domain::{UserId, UserRecord, ViewMode};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::{
    details::{DirectoryStats, UserDetails},
    events::UiEvent,
    favorites::{FavoriteSet, FavoriteStore},
    pipeline::{self, PageSlice, Query, PAGE_SIZE},
    schedule::Debouncer,
    source::{FetchError, UserSource},
    view::{ListItem, PaginationView, ViewPort},
};

pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);
pub const LOAD_ERROR_MESSAGE: &str = "Error! Could not load the directory.";
const COPY_OK_MESSAGE: &str = "Copied!";
const COPY_FAILED_MESSAGE: &str = "Copy failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerSettings {
    pub page_size: usize,
    pub search_debounce: Duration,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            search_debounce: DEFAULT_SEARCH_DEBOUNCE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// 1-based; clamped after every derivation.
    pub page: usize,
    pub page_size: usize,
    pub view_mode: ViewMode,
    pub query: Query,
}

pub struct DirectoryController<V: ViewPort> {
    view: V,
    /// `None` once the startup read failed; the session then never writes.
    favorites_store: Option<Arc<dyn FavoriteStore>>,
    favorites: FavoriteSet,
    records: Vec<UserRecord>,
    state: ViewState,
    phase: LoadPhase,
    last_update: Option<DateTime<Utc>>,
    details_for: Option<UserId>,
    search_debouncer: Debouncer,
    search_tx: mpsc::UnboundedSender<()>,
    search_rx: mpsc::UnboundedReceiver<()>,
    today: fn() -> NaiveDate,
}

fn utc_today() -> NaiveDate {
    Utc::now().date_naive()
}

impl<V: ViewPort> DirectoryController<V> {
    /// Reads the persisted favorites. A failed read degrades to an empty,
    /// memory-only set and the stored entry is left untouched.
    pub async fn new(
        view: V,
        favorites_store: Arc<dyn FavoriteStore>,
        settings: ControllerSettings,
    ) -> Self {
        let (favorites, favorites_store) = match favorites_store.load().await {
            Ok(favorites) => {
                info!(count = favorites.len(), "favorites: loaded persisted set");
                (favorites, Some(favorites_store))
            }
            Err(err) => {
                warn!(
                    "favorites: failed to load persisted set, using in-memory favorites for this session: {err:#}"
                );
                (FavoriteSet::new(), None)
            }
        };
        let (search_tx, search_rx) = mpsc::unbounded_channel();

        Self {
            view,
            favorites_store,
            favorites,
            records: Vec::new(),
            state: ViewState {
                page: 1,
                page_size: settings.page_size.max(1),
                view_mode: ViewMode::default(),
                query: Query::default(),
            },
            phase: LoadPhase::Idle,
            last_update: None,
            details_for: None,
            search_debouncer: Debouncer::new(settings.search_debounce),
            search_tx,
            search_rx,
            today: utc_today,
        }
    }

    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn last_update(&self) -> Option<DateTime<Utc>> {
        self.last_update
    }

    pub fn details_for(&self) -> Option<UserId> {
        self.details_for
    }

    pub fn persists_favorites(&self) -> bool {
        self.favorites_store.is_some()
    }

    pub fn search_refresh_pending(&self) -> bool {
        self.search_debouncer.is_pending()
    }

    pub fn stats(&self) -> DirectoryStats {
        DirectoryStats::compute(&self.records, &self.favorites)
    }

    /// The slice the last refresh rendered, recomputed from current state.
    pub fn current_page(&self) -> PageSlice<'_> {
        pipeline::derive(
            &self.records,
            &self.state.query,
            self.state.page,
            self.state.page_size,
        )
    }

    /// Fetches the record set once. A failure replaces the loading indicator
    /// with an error and leaves the session without data.
    pub async fn load(&mut self, source: &dyn UserSource) -> Result<(), FetchError> {
        self.phase = LoadPhase::Loading;
        self.view.show_loading();

        match source.fetch_users().await {
            Ok(users) => {
                let favorites = &self.favorites;
                let records = users
                    .into_iter()
                    .map(|user| {
                        let favorite = favorites.contains(&user.id());
                        user.into_record(favorite)
                    })
                    .collect::<Vec<_>>();
                info!(
                    count = records.len(),
                    favorites = self.favorites.len(),
                    "directory: users loaded"
                );
                self.records = records;
                self.last_update = Some(Utc::now());
                self.phase = LoadPhase::Ready;

                let stats = self.stats();
                self.view.render_stats(&stats);
                self.refresh();
                self.view.hide_loading();
                Ok(())
            }
            Err(err) => {
                error!("directory: failed to fetch users: {err}");
                self.phase = LoadPhase::Failed(err.to_string());
                self.view.show_load_error(LOAD_ERROR_MESSAGE);
                Err(err)
            }
        }
    }

    /// Re-reads the controls and re-renders the current page from scratch.
    pub fn refresh(&mut self) {
        if self.phase != LoadPhase::Ready {
            debug!(phase = ?self.phase, "directory: refresh skipped, no records loaded");
            return;
        }

        self.state.query = self.view.query();
        let slice = pipeline::derive(
            &self.records,
            &self.state.query,
            self.state.page,
            self.state.page_size,
        );
        self.state.page = slice.page;

        let items = slice
            .items
            .iter()
            .map(|record| ListItem::from_record(record))
            .collect::<Vec<_>>();
        let pagination = PaginationView::new(slice.page, slice.total_pages, slice.total_matches);
        debug!(
            page = slice.page,
            total_pages = slice.total_pages,
            matches = slice.total_matches,
            "directory: rendering page"
        );

        self.view.render_items(&items, self.state.view_mode);
        self.view.render_pagination(&pagination);
    }

    pub fn next_page(&mut self) {
        let query = self.view.query();
        let matches = pipeline::filter(&self.records, &query).len();
        let total_pages = pipeline::total_pages(matches, self.state.page_size);
        if self.state.page < total_pages {
            self.state.page += 1;
            self.refresh();
            self.view.scroll_to_top();
        }
    }

    pub fn prev_page(&mut self) {
        if self.state.page > 1 {
            self.state.page -= 1;
            self.refresh();
            self.view.scroll_to_top();
        }
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.state.view_mode = mode;
        self.view.set_view_mode(mode);
        self.refresh();
    }

    /// Flips the favorite flag and persists the whole set. Returns the new
    /// membership; a failed write is logged and the in-memory change stands.
    pub async fn toggle_favorite(&mut self, id: UserId) -> bool {
        let is_favorite = self.favorites.toggle(id);
        if let Some(record) = self.records.iter_mut().find(|record| record.id == id) {
            record.favorite = is_favorite;
        }

        match &self.favorites_store {
            Some(store) => {
                if let Err(err) = store.save(&self.favorites).await {
                    warn!(
                        user_id = %id,
                        "favorites: failed to persist set, keeping in-memory state: {err:#}"
                    );
                }
            }
            None => debug!(user_id = %id, "favorites: session is memory-only, not persisting"),
        }

        let stats = self.stats();
        self.view.render_stats(&stats);
        self.refresh();
        is_favorite
    }

    pub fn open_details(&mut self, id: UserId) -> bool {
        let Some(record) = self.find(id) else {
            debug!(user_id = %id, "directory: details requested for unknown user");
            return false;
        };
        let details = UserDetails::from_record(record, (self.today)());
        self.view.open_details(&details);
        self.details_for = Some(id);
        true
    }

    pub fn close_details(&mut self) {
        if self.details_for.take().is_some() {
            self.view.close_details();
        }
    }

    pub fn copy_email(&mut self, id: UserId) {
        let text = self.find(id).map(|record| record.email.clone());
        self.copy(id, text);
    }

    pub fn copy_phone(&mut self, id: UserId) {
        let text = self.find(id).map(|record| record.phone.clone());
        self.copy(id, text);
    }

    fn copy(&mut self, id: UserId, text: Option<String>) {
        let Some(text) = text else {
            debug!(user_id = %id, "directory: copy requested for unknown user");
            return;
        };
        match self.view.copy_text(&text) {
            Ok(()) => self.view.notify(COPY_OK_MESSAGE),
            Err(err) => {
                warn!(user_id = %id, "directory: clipboard write failed: {err:#}");
                self.view.notify(COPY_FAILED_MESSAGE);
            }
        }
    }

    fn find(&self, id: UserId) -> Option<&UserRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub async fn handle(&mut self, event: UiEvent) {
        if self.phase != LoadPhase::Ready {
            debug!(event = event.name(), "directory: event ignored, no records loaded");
            return;
        }
        debug!(event = event.name(), "directory: handling ui event");

        match event {
            UiEvent::SearchInput => {
                let tx = self.search_tx.clone();
                self.search_debouncer.schedule(move || {
                    let _ = tx.send(());
                });
            }
            UiEvent::SelectorChanged => self.refresh(),
            UiEvent::NextPage => self.next_page(),
            UiEvent::PrevPage => self.prev_page(),
            UiEvent::SetViewMode(mode) => self.set_view_mode(mode),
            UiEvent::ToggleFavorite(id) => {
                self.toggle_favorite(id).await;
            }
            UiEvent::OpenDetails(id) => {
                self.open_details(id);
            }
            UiEvent::CloseDetails => self.close_details(),
            UiEvent::CopyEmail(id) => self.copy_email(id),
            UiEvent::CopyPhone(id) => self.copy_phone(id),
            UiEvent::Quit => {}
        }
    }

    /// Processes events in arrival order until `Quit` or the sender closes.
    /// Debounced search refreshes are interleaved as their timers fire.
    pub async fn run(&mut self, mut events: mpsc::Receiver<UiEvent>) {
        loop {
            tokio::select! {
                event = events.recv() => match event {
                    Some(UiEvent::Quit) | None => break,
                    Some(event) => self.handle(event).await,
                },
                Some(()) = self.search_rx.recv() => self.refresh(),
            }
        }
        self.search_debouncer.cancel();
        info!("directory: event loop stopped");
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
