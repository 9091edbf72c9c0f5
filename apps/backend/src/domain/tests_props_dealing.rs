use std::collections::HashSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::domain::rules::{compute_round_sequence, DECK_SIZE};
use crate::domain::state::Player;
use crate::domain::{create_deck, deal_cards, shuffle_deck, test_gens, test_prelude, Card};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Dealing conserves cards: hands are disjoint and sized, and the deck
    /// shrinks by the amount dealt.
    #[test]
    fn prop_deal_conserves_cards((n, per_player) in test_gens::deal_shape(), seed in any::<u64>()) {
        let mut deck = create_deck();
        shuffle_deck(&mut deck, &mut ChaCha20Rng::seed_from_u64(seed));
        let mut players: Vec<Player> = (0..n)
            .map(|i| Player::new(format!("p{i}"), format!("P{i}")))
            .collect();

        deal_cards(&mut deck, &mut players, per_player).unwrap();

        prop_assert_eq!(deck.len(), DECK_SIZE - n * per_player);
        let mut seen: HashSet<Card> = deck.iter().copied().collect();
        for p in &players {
            prop_assert_eq!(p.hand.len(), per_player);
            for c in &p.hand {
                prop_assert!(seen.insert(*c), "duplicate card {}", c);
            }
        }
        let full: HashSet<Card> = create_deck().into_iter().collect();
        prop_assert_eq!(seen, full);
    }

    /// Round sequences climb to the peak and back.
    #[test]
    fn prop_round_sequence_is_symmetric(max in 1u8..=27) {
        let seq = compute_round_sequence(max);
        prop_assert_eq!(seq.len(), 2 * max as usize - 1);
        prop_assert_eq!(seq[max as usize - 1], max);
        let mut rev = seq.clone();
        rev.reverse();
        prop_assert_eq!(seq, rev);
    }
}
