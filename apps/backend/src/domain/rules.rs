use std::ops::RangeInclusive;

pub const DECK_SIZE: usize = 54;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 6;

/// Points for making a bid exactly, before the `bid²` bonus.
pub const EXACT_BID_BASE: i32 = 10;

/// Hand sizes for a game climbing to `max` and back: `3 → [1, 2, 3, 2, 1]`.
pub fn compute_round_sequence(max: u8) -> Vec<u8> {
    (1..=max).chain((1..max).rev()).collect()
}

/// Largest hand every seated player can be dealt from one deck.
pub fn max_hand_size(player_count: usize) -> u8 {
    if player_count == 0 {
        return 0;
    }
    (DECK_SIZE / player_count).min(u8::MAX as usize) as u8
}

/// The creator's requested peak hand size if it fits, else the largest that does.
pub fn effective_max_cards(creator_max_cards: i32, player_count: usize) -> u8 {
    let max = max_hand_size(player_count);
    if creator_max_cards >= 1 && creator_max_cards <= max as i32 {
        creator_max_cards as u8
    } else {
        max
    }
}

pub fn valid_bid_range(hand_size: u8) -> RangeInclusive<u8> {
    0..=hand_size
}

/// `10 + bid²` when the bid is made exactly, otherwise nothing.
pub fn round_score(bid: u8, tricks_won: u8) -> i32 {
    if bid == tricks_won {
        EXACT_BID_BASE + (bid as i32) * (bid as i32)
    } else {
        0
    }
}

/// Whether the dealer's proposed bid would make the bid total equal the hand size.
///
/// Single-card rounds are exempt.
pub fn violates_dealer_hook(hand_size: u8, existing_sum: u32, bid: u8) -> bool {
    hand_size > 1 && existing_sum + bid as u32 == hand_size as u32
}
