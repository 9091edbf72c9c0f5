use tracing::{debug, error, info};

use crate::domain::snapshot::snapshot;
use crate::domain::tricks::AdvanceOutcome;
use crate::services::publisher::SnapshotPublisher;
use crate::services::registry::{GameRegistry, GameSlot};

/// Deferred half of trick completion. Applies only if the game is still at
/// the version captured when the trick closed.
pub(super) fn run_deferred_advance(
    registry: &GameRegistry,
    publisher: &dyn SnapshotPublisher,
    game_id: &str,
    expected_version: u64,
) {
    let slot = match registry.get(game_id) {
        Ok(slot) => slot,
        Err(_) => {
            debug!(game_id, "Game gone before trick advance");
            return;
        }
    };
    let mut guard = slot.lock();
    let GameSlot { game, rng } = &mut *guard;

    if game.version != expected_version {
        debug!(
            game_id,
            expected_version,
            actual_version = game.version,
            "Stale trick advance skipped"
        );
        return;
    }

    match game.advance_after_trick(rng) {
        Ok(AdvanceOutcome::Idle) => {}
        Ok(outcome) => {
            info!(game_id, version = game.version, ?outcome, "Trick advanced");
            publisher.publish(&snapshot(game));
        }
        Err(err) => {
            error!(game_id, error = %err, "Trick advance failed; game is stalled");
        }
    }
}
