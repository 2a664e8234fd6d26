//! Initial show records loaded at start-up.

use showtracker_core::show::{NewShow, COLLECTION};

use crate::memory::MemoryStore;
use crate::store::{Store, StoreError};

/// The starter shows, in id order.
pub fn default_shows() -> Vec<NewShow> {
    vec![
        NewShow::new("Game of Thrones", 0),
        NewShow::new("Naruto", 220),
        NewShow::new("Black Mirror", 3),
    ]
}

/// Insert `shows` into the show collection, in order.
pub async fn seed_shows(store: &dyn Store, shows: Vec<NewShow>) -> Result<(), StoreError> {
    let count = shows.len();
    for show in shows {
        store.create(COLLECTION, show.into_record()).await?;
    }
    tracing::info!(count, "Seeded show collection");
    Ok(())
}

impl MemoryStore {
    /// A store pre-populated with [`default_shows`].
    pub async fn with_seed() -> Result<Self, StoreError> {
        let store = Self::new();
        seed_shows(&store, default_shows()).await?;
        Ok(store)
    }
}
