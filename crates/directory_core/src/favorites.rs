use std::{collections::BTreeSet, sync::Arc};

use anyhow::{Context, Result};
use async_trait::async_trait;
use shared::domain::UserId;
use storage::KeyValueStore;

pub const FAVORITES_KEY: &str = "favorites";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteSet {
    ids: BTreeSet<UserId>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &UserId) -> bool {
        self.ids.contains(id)
    }

    /// Flips membership and returns whether `id` is now a favorite.
    pub fn toggle(&mut self, id: UserId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &UserId> {
        self.ids.iter()
    }

    pub fn to_vec(&self) -> Vec<UserId> {
        self.ids.iter().copied().collect()
    }
}

impl FromIterator<UserId> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = UserId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

#[async_trait]
pub trait FavoriteStore: Send + Sync {
    async fn load(&self) -> Result<FavoriteSet>;
    async fn save(&self, favorites: &FavoriteSet) -> Result<()>;
}

/// Keeps the favorite set as one JSON array of identity strings under a
/// single key.
pub struct KeyValueFavorites {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl KeyValueFavorites {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(store, FAVORITES_KEY)
    }

    pub fn with_key(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }
}

#[async_trait]
impl FavoriteStore for KeyValueFavorites {
    async fn load(&self) -> Result<FavoriteSet> {
        let Some(raw) = self.store.get_value(&self.key).await? else {
            return Ok(FavoriteSet::new());
        };
        let ids: Option<Vec<UserId>> = serde_json::from_str(&raw)
            .with_context(|| format!("malformed favorites entry '{}'", self.key))?;
        Ok(ids.unwrap_or_default().into_iter().collect())
    }

    async fn save(&self, favorites: &FavoriteSet) -> Result<()> {
        let raw = serde_json::to_string(&favorites.to_vec())
            .context("failed to encode favorites")?;
        self.store.put_value(&self.key, &raw).await
    }
}

#[cfg(test)]
#[path = "tests/favorites_tests.rs"]
mod tests;
