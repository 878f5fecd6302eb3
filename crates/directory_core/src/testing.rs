//! Fixtures shared by the unit tests.

use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use reqwest::StatusCode;
use shared::{
    domain::{Gender, UserRecord, ViewMode},
    protocol::{RawDated, RawLocation, RawLogin, RawName, RawPicture, RawStreet, RawUser},
};
use uuid::Uuid;

use crate::{
    details::{DirectoryStats, UserDetails},
    favorites::{FavoriteSet, FavoriteStore},
    pipeline::Query,
    source::{FetchError, UserSource},
    view::{ListItem, PaginationView, ViewPort},
};

const COUNTRIES: [&str; 5] = ["Norway", "Brazil", "Canada", "Iran", "Germany"];

pub(crate) fn raw_user(n: u32) -> RawUser {
    RawUser {
        gender: if n % 2 == 0 { Gender::Male } else { Gender::Female },
        name: RawName {
            title: "Mx".into(),
            first: format!("User{n:03}"),
            last: "Sample".into(),
        },
        location: RawLocation {
            street: RawStreet {
                number: 100 + n,
                name: "Main Street".into(),
            },
            city: format!("City{n}"),
            state: "State".into(),
            country: COUNTRIES[n as usize % COUNTRIES.len()].into(),
        },
        email: format!("user{n}@example.com"),
        login: RawLogin {
            uuid: Uuid::from_u128(u128::from(n) + 1),
        },
        dob: RawDated {
            date: Utc.with_ymd_and_hms(1990, 3, 5, 12, 0, 0).unwrap(),
            age: 30,
        },
        registered: RawDated {
            date: Utc.with_ymd_and_hms(2015, 8, 1, 9, 30, 0).unwrap(),
            age: 9,
        },
        phone: format!("555-01{n:02}"),
        cell: format!("555-09{n:02}"),
        picture: RawPicture {
            large: format!("https://img.example/large/{n}.jpg"),
            medium: format!("https://img.example/med/{n}.jpg"),
            thumbnail: format!("https://img.example/thumb/{n}.jpg"),
        },
        nat: "NO".into(),
    }
}

pub(crate) fn record(n: u32) -> UserRecord {
    raw_user(n).into_record(false)
}

/// `count` records with spread-out ages, alternating genders, and a
/// rotating country.
pub(crate) fn population(count: u32) -> Vec<UserRecord> {
    (0..count)
        .map(|n| {
            let mut record = record(n);
            record.age = 10 + (n * 7) % 70;
            record
        })
        .collect()
}

pub(crate) fn raw_population(count: u32) -> Vec<RawUser> {
    (0..count)
        .map(|n| {
            let mut user = raw_user(n);
            user.dob.age = 10 + (n * 7) % 70;
            user
        })
        .collect()
}

/// Stand-in for the input controls a real UI owns.
#[derive(Clone, Default)]
pub(crate) struct Controls(Arc<Mutex<Query>>);

impl Controls {
    pub(crate) fn update(&self, apply: impl FnOnce(&mut Query)) {
        apply(&mut self.0.lock().unwrap());
    }

    pub(crate) fn snapshot(&self) -> Query {
        self.0.lock().unwrap().clone()
    }
}

#[derive(Default)]
pub(crate) struct RecordingView {
    pub controls: Controls,
    pub loading: bool,
    pub load_error: Option<String>,
    pub stats: Vec<DirectoryStats>,
    pub renders: Vec<Vec<ListItem>>,
    pub modes: Vec<ViewMode>,
    pub pagination: Vec<PaginationView>,
    pub details: Option<UserDetails>,
    pub copied: Vec<String>,
    pub notifications: Vec<String>,
    pub scrolls: usize,
    pub clipboard_broken: bool,
}

impl RecordingView {
    pub(crate) fn with_controls(controls: Controls) -> Self {
        Self {
            controls,
            ..Self::default()
        }
    }

    pub(crate) fn last_render(&self) -> &[ListItem] {
        self.renders.last().map(Vec::as_slice).unwrap_or_default()
    }

    pub(crate) fn last_pagination(&self) -> PaginationView {
        *self.pagination.last().expect("pagination rendered")
    }
}

impl ViewPort for RecordingView {
    fn query(&self) -> Query {
        self.controls.snapshot()
    }

    fn show_loading(&mut self) {
        self.loading = true;
    }

    fn hide_loading(&mut self) {
        self.loading = false;
    }

    fn show_load_error(&mut self, message: &str) {
        self.load_error = Some(message.to_string());
    }

    fn render_stats(&mut self, stats: &DirectoryStats) {
        self.stats.push(*stats);
    }

    fn render_items(&mut self, items: &[ListItem], mode: ViewMode) {
        self.renders.push(items.to_vec());
        self.modes.push(mode);
    }

    fn render_pagination(&mut self, pagination: &PaginationView) {
        self.pagination.push(*pagination);
    }

    fn set_view_mode(&mut self, _mode: ViewMode) {}

    fn open_details(&mut self, details: &UserDetails) {
        self.details = Some(details.clone());
    }

    fn close_details(&mut self) {
        self.details = None;
    }

    fn scroll_to_top(&mut self) {
        self.scrolls += 1;
    }

    fn copy_text(&mut self, text: &str) -> Result<()> {
        if self.clipboard_broken {
            return Err(anyhow!("clipboard unavailable"));
        }
        self.copied.push(text.to_string());
        Ok(())
    }

    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }
}

pub(crate) struct StaticSource(pub Vec<RawUser>);

#[async_trait]
impl UserSource for StaticSource {
    async fn fetch_users(&self) -> Result<Vec<RawUser>, FetchError> {
        Ok(self.0.clone())
    }
}

pub(crate) struct UnavailableSource;

#[async_trait]
impl UserSource for UnavailableSource {
    async fn fetch_users(&self) -> Result<Vec<RawUser>, FetchError> {
        Err(FetchError::Status {
            status: StatusCode::SERVICE_UNAVAILABLE,
        })
    }
}

pub(crate) struct BrokenFavoriteStore;

#[async_trait]
impl FavoriteStore for BrokenFavoriteStore {
    async fn load(&self) -> Result<FavoriteSet> {
        Err(anyhow!("storage offline"))
    }

    async fn save(&self, _favorites: &FavoriteSet) -> Result<()> {
        Err(anyhow!("storage offline"))
    }
}
