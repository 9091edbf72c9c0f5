//! Process-wide map of live games, one exclusive lock per game.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::domain::seed_derivation::derive_game_seed;
use crate::domain::state::{Game, GameId};
use crate::errors::domain::DomainError;

/// A game plus the RNG that shuffles its decks.
#[derive(Debug)]
pub struct GameSlot {
    pub game: Game,
    pub rng: ChaCha20Rng,
}

pub type SharedSlot = Arc<Mutex<GameSlot>>;

/// Lookups take a short shard lock and hand back the game's own mutex; the
/// shard lock is never held while a game is locked.
pub struct GameRegistry {
    games: DashMap<GameId, SharedSlot>,
    deal_seed: Option<u64>,
    created: AtomicU64,
}

impl GameRegistry {
    pub fn new(deal_seed: Option<u64>) -> Self {
        Self {
            games: DashMap::new(),
            deal_seed,
            created: AtomicU64::new(0),
        }
    }

    fn next_rng(&self) -> ChaCha20Rng {
        let ordinal = self.created.fetch_add(1, Ordering::Relaxed);
        match self.deal_seed {
            Some(base) => ChaCha20Rng::seed_from_u64(derive_game_seed(base, ordinal)),
            None => ChaCha20Rng::from_os_rng(),
        }
    }

    /// Register a new game with a freshly seeded RNG.
    pub fn insert(&self, game: Game) -> SharedSlot {
        let id = game.id.clone();
        let slot = Arc::new(Mutex::new(GameSlot {
            game,
            rng: self.next_rng(),
        }));
        self.games.insert(id.clone(), slot.clone());
        debug!(game_id = %id, live_games = self.games.len(), "Game registered");
        slot
    }

    pub fn get(&self, game_id: &str) -> Result<SharedSlot, DomainError> {
        self.games
            .get(game_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| DomainError::game_not_found(game_id))
    }

    /// Run `f` with the game exclusively locked.
    pub fn with_game<T, F>(&self, game_id: &str, f: F) -> Result<T, DomainError>
    where
        F: FnOnce(&mut GameSlot) -> Result<T, DomainError>,
    {
        let slot = self.get(game_id)?;
        let mut guard = slot.lock();
        f(&mut guard)
    }

    pub fn remove(&self, game_id: &str) -> Option<SharedSlot> {
        self.games.remove(game_id).map(|(_, slot)| slot)
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl Default for GameRegistry {
    fn default() -> Self {
        Self::new(None)
    }
}
