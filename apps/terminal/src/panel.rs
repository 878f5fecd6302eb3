//! State shared between the stdin reader and the terminal view: the current
//! control values plus what is on screen right now.

use std::sync::{Arc, Mutex, MutexGuard};

use directory_core::Query;
use shared::domain::UserId;

#[derive(Debug, Default)]
struct PanelState {
    controls: Query,
    rows: Vec<UserId>,
    details: Option<UserId>,
}

#[derive(Debug, Clone, Default)]
pub struct Panel(Arc<Mutex<PanelState>>);

impl Panel {
    fn lock(&self) -> MutexGuard<'_, PanelState> {
        self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn controls(&self) -> Query {
        self.lock().controls.clone()
    }

    pub fn update_controls(&self, apply: impl FnOnce(&mut Query)) {
        apply(&mut self.lock().controls);
    }

    pub fn set_rows(&self, rows: Vec<UserId>) {
        self.lock().rows = rows;
    }

    /// Rows are numbered from 1 as printed.
    pub fn row(&self, number: usize) -> Option<UserId> {
        let index = number.checked_sub(1)?;
        self.lock().rows.get(index).copied()
    }

    pub fn set_details(&self, id: Option<UserId>) {
        self.lock().details = id;
    }

    pub fn details(&self) -> Option<UserId> {
        self.lock().details
    }
}
