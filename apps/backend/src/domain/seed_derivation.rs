//! Deterministic per-game seeds derived from a configured base seed.

/// Derive the dealing seed for the `ordinal`-th game created by this process.
///
/// Same base and ordinal always give the same seed; neighbouring ordinals
/// land far apart.
pub fn derive_game_seed(base_seed: u64, ordinal: u64) -> u64 {
    base_seed
        .wrapping_add(ordinal.wrapping_mul(0x9E37_79B9_7F4A_7C15))
        .wrapping_add(2)
}
