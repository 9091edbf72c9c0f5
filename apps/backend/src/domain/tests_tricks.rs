use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::domain::state::Play;
use crate::domain::test_prelude::{card, cards, game_in_play};
use crate::domain::tricks::{legal_moves, resolve_trick, AdvanceOutcome, TRICK_OVER_MESSAGE};
use crate::errors::domain::ValidationKind;

fn plays(tokens: &[&str]) -> Vec<Play> {
    tokens
        .iter()
        .enumerate()
        .map(|(i, t)| Play {
            player_id: format!("p{i}"),
            card: card(t),
        })
        .collect()
}

#[test]
fn must_follow_suit_when_holding_lead_suit() {
    let mut game = game_in_play(&[&["5H", "2C"], &["2H", "AS"]], 0, &[1, 1]);
    game.play_card("p0", card("5H")).unwrap();

    let before = game.clone();
    let err = game.play_card("p1", card("AS")).unwrap_err();
    assert!(err.is_validation(&ValidationKind::MustFollowSuit));
    // Rejected play leaves the hand and turn untouched
    assert_eq!(game, before);
    assert_eq!(game.players[1].hand.len(), 2);

    game.play_card("p1", card("2H")).unwrap();
}

#[test]
fn void_in_lead_suit_may_play_anything_including_trump() {
    let mut game = game_in_play(&[&["5H", "2C"], &["3C", "AS"]], 0, &[1, 1]);
    game.play_card("p0", card("5H")).unwrap();
    let outcome = game.play_card("p1", card("AS")).unwrap();
    let summary = outcome.trick_complete.unwrap();
    assert_eq!(summary.winner_id, "p1");
    assert_eq!(summary.winning_card, card("AS"));
    assert_eq!(summary.message, TRICK_OVER_MESSAGE);
}

#[test]
fn jokers_do_not_count_toward_following_suit() {
    // Only a joker and a club: no heart held, so the club is legal
    let mut game = game_in_play(&[&["5H", "2C"], &["J1", "3C"]], 0, &[1, 1]);
    game.play_card("p0", card("5H")).unwrap();
    game.play_card("p1", card("3C")).unwrap();

    // Holding a heart means the joker cannot be thrown
    let mut game = game_in_play(&[&["5H", "2C"], &["J1", "2H"]], 0, &[1, 1]);
    game.play_card("p0", card("5H")).unwrap();
    let err = game.play_card("p1", card("J1")).unwrap_err();
    assert!(err.is_validation(&ValidationKind::MustFollowSuit));
}

#[test]
fn led_joker_calls_for_spades() {
    let mut game = game_in_play(&[&["J2", "2C"], &["3S", "AH"]], 0, &[1, 1]);
    game.play_card("p0", card("J2")).unwrap();
    let err = game.play_card("p1", card("AH")).unwrap_err();
    assert!(err.is_validation(&ValidationKind::MustFollowSuit));
    let outcome = game.play_card("p1", card("3S")).unwrap();
    assert_eq!(outcome.trick_complete.unwrap().winner_id, "p0");
}

#[test]
fn turn_and_hand_are_enforced() {
    let mut game = game_in_play(&[&["5H"], &["2H"], &["9D"]], 1, &[0, 1, 0]);

    let err = game.play_card("p0", card("5H")).unwrap_err();
    assert!(err.is_validation(&ValidationKind::NotYourTurn));
    let err = game.play_card("ghost", card("5H")).unwrap_err();
    assert!(err.is_validation(&ValidationKind::NotYourTurn));
    let err = game.play_card("p1", card("KS")).unwrap_err();
    assert!(err.is_validation(&ValidationKind::CardNotInHand));

    game.play_card("p1", card("2H")).unwrap();
    // Play continues clockwise from the leader
    let err = game.play_card("p0", card("5H")).unwrap_err();
    assert!(err.is_validation(&ValidationKind::NotYourTurn));
    game.play_card("p2", card("9D")).unwrap();
    game.play_card("p0", card("5H")).unwrap();
}

#[test]
fn playing_outside_play_phase_is_rejected() {
    let mut game = game_in_play(&[&["5H"], &["2H"]], 0, &[0, 0]);
    game.state = crate::domain::GamePhase::Bidding;
    let err = game.play_card("p0", card("5H")).unwrap_err();
    assert!(err.is_validation(&ValidationKind::NotInPlayingPhase));
}

#[test]
fn completed_trick_credits_winner_and_waits_for_advance() {
    let mut game = game_in_play(
        &[&["5H", "2C"], &["KH", "3C"], &["9H", "4C"]],
        0,
        &[0, 1, 0],
    );
    game.play_card("p0", card("5H")).unwrap();
    game.play_card("p1", card("KH")).unwrap();
    let outcome = game.play_card("p2", card("9H")).unwrap();

    assert_eq!(outcome.player_hand, cards(&["4C"]));
    assert_eq!(outcome.tricks.len(), 1);
    assert_eq!(outcome.current_trick.winner_id, "p1");
    assert_eq!(outcome.current_trick.plays.len(), 3);
    assert_eq!(game.players[1].tricks_won, 1);
    assert!(game.awaiting_trick_advance());

    // Nobody may play while the finished trick is on the table
    for id in ["p0", "p1", "p2"] {
        let err = game.play_card(id, card("2C")).unwrap_err();
        assert!(err.is_validation(&ValidationKind::NotYourTurn));
    }
    let round = game.current_round.as_ref().unwrap();
    assert_eq!(round.trick_turn_index, 3);
}

#[test]
fn advance_starts_next_trick_led_by_winner() {
    let mut game = game_in_play(
        &[&["5H", "2C"], &["KH", "3C"], &["9H", "4C"]],
        0,
        &[0, 1, 0],
    );
    let mut rng = ChaCha20Rng::seed_from_u64(9);
    assert_eq!(game.advance_after_trick(&mut rng).unwrap(), AdvanceOutcome::Idle);

    game.play_card("p0", card("5H")).unwrap();
    game.play_card("p1", card("KH")).unwrap();
    game.play_card("p2", card("9H")).unwrap();

    let outcome = game.advance_after_trick(&mut rng).unwrap();
    assert_eq!(
        outcome,
        AdvanceOutcome::NextTrick {
            leader_id: "p1".into()
        }
    );
    let round = game.current_round.as_ref().unwrap();
    assert_eq!(round.trick_leader, 1);
    assert_eq!(round.trick_turn_index, 0);
    assert!(round.current_trick.as_ref().unwrap().plays.is_empty());

    // Second advance is a no-op
    let version = game.version;
    assert_eq!(game.advance_after_trick(&mut rng).unwrap(), AdvanceOutcome::Idle);
    assert_eq!(game.version, version);

    game.play_card("p1", card("3C")).unwrap();
}

#[test]
fn resolve_trick_ordering() {
    assert_eq!(resolve_trick(&plays(&["J2", "AS", "J1"])), Some(2));
    assert_eq!(resolve_trick(&plays(&["KS", "AS"])), Some(1));
    assert_eq!(resolve_trick(&plays(&["AH", "2S"])), Some(1));
    assert_eq!(resolve_trick(&plays(&["5H", "AC", "AD", "6H"])), Some(3));
    assert_eq!(resolve_trick(&plays(&[])), None);
}

#[test]
fn equal_strength_plays_keep_the_earlier_winner() {
    // Off-suit discards compare equal to each other and never displace the leader
    assert_eq!(resolve_trick(&plays(&["5H", "9C", "9D", "KC"])), Some(0));

    // Two identical lead-suit cards: the first one stays on top
    assert_eq!(resolve_trick(&plays(&["2H", "QH", "QH", "3H"])), Some(1));
}

#[test]
fn legal_moves_follow_the_lead() {
    let hand = cards(&["2H", "KH", "J1", "3C"]);
    assert_eq!(legal_moves(&hand, &[]), hand);
    assert_eq!(legal_moves(&hand, &plays(&["9H"])), cards(&["2H", "KH"]));
    assert_eq!(legal_moves(&hand, &plays(&["9D"])), hand);
}
