use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

/// Per-player values keyed by player uuid.
///
/// Entries exist from [`PlayerRegistry::insert`] until [`PlayerRegistry::remove`].
/// Whoever drives the session lifecycle owns the registry and must remove a
/// player's entry when they leave.
#[derive(Debug)]
pub struct PlayerRegistry<T> {
    entries: RwLock<HashMap<Uuid, Arc<T>>>,
}

impl<T> Default for PlayerRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PlayerRegistry<T> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Adds `value` for `player`. Returns `false` and keeps the existing entry if
    /// the player is already registered.
    pub async fn insert(&self, player: Uuid, value: T) -> bool {
        let mut entries = self.entries.write().await;
        if entries.contains_key(&player) {
            return false;
        }
        entries.insert(player, Arc::new(value));
        true
    }

    pub async fn get(&self, player: &Uuid) -> Option<Arc<T>> {
        self.entries.read().await.get(player).cloned()
    }

    pub async fn remove(&self, player: &Uuid) -> Option<Arc<T>> {
        self.entries.write().await.remove(player)
    }

    pub async fn contains(&self, player: &Uuid) -> bool {
        self.entries.read().await.contains_key(player)
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
