use crate::domain::bidding::{bidding_order, determine_trick_leader};
use crate::domain::state::GamePhase;
use crate::domain::test_prelude::{game_in_bidding, seated};
use crate::errors::domain::ValidationKind;

const FIVE: &[&str] = &["2H", "3H", "4H", "5H", "6H"];
const FIVE_B: &[&str] = &["2C", "3C", "4C", "5C", "6C"];
const FIVE_C: &[&str] = &["2D", "3D", "4D", "5D", "6D"];

#[test]
fn bid_order_ends_with_dealer() {
    let ids: Vec<String> = (0..4).map(|i| format!("p{i}")).collect();
    assert_eq!(bidding_order(&ids, 1), vec!["p2", "p3", "p0", "p1"]);
    assert_eq!(bidding_order(&ids, 3), vec!["p0", "p1", "p2", "p3"]);
}

#[test]
fn dealer_hook_rejects_bid_that_makes_total_equal_hand_size() {
    // Dealer is seat 2, so p0 and p1 bid first
    let mut game = game_in_bidding(&[FIVE, FIVE_B, FIVE_C], 2, vec![5]);
    game.submit_bid("p0", 2).unwrap();
    game.submit_bid("p1", 1).unwrap();

    let before = game.clone();
    let err = game.submit_bid("p2", 2).unwrap_err();
    assert!(err.is_validation(&ValidationKind::DealerHookViolation));
    assert_eq!(game, before);

    let mut low = game.clone();
    low.submit_bid("p2", 1).unwrap();
    assert_eq!(low.state, GamePhase::Playing);

    let mut high = game.clone();
    high.submit_bid("p2", 3).unwrap();
    assert_eq!(high.state, GamePhase::Playing);
}

#[test]
fn dealer_hook_does_not_apply_to_one_card_rounds() {
    let mut game = game_in_bidding(&[&["2H"], &["3H"]], 1, vec![1]);
    game.submit_bid("p0", 0).unwrap();
    let outcome = game.submit_bid("p1", 1).unwrap();
    assert_eq!(outcome.bids.values().sum::<u8>(), 1);
    assert_eq!(game.state, GamePhase::Playing);
}

#[test]
fn dealer_hook_only_binds_the_dealer() {
    let mut game = game_in_bidding(&[FIVE, FIVE_B, FIVE_C], 0, vec![5]);
    // p1 and p2 bid first; a non-dealer can bring the running total to the hand size
    game.submit_bid("p1", 5).unwrap();
    game.submit_bid("p2", 0).unwrap();
    let err = game.submit_bid("p0", 0).unwrap_err();
    assert!(err.is_validation(&ValidationKind::DealerHookViolation));
}

#[test]
fn out_of_turn_and_unknown_bidders_are_rejected() {
    let mut game = game_in_bidding(&[FIVE, FIVE_B, FIVE_C], 2, vec![5]);
    let before = game.clone();

    let err = game.submit_bid("p1", 1).unwrap_err();
    assert!(err.is_validation(&ValidationKind::NotYourTurn));
    let err = game.submit_bid("ghost", 1).unwrap_err();
    assert!(err.is_validation(&ValidationKind::NotYourTurn));
    assert_eq!(game, before);
}

#[test]
fn bids_outside_range_are_invalid() {
    let mut game = game_in_bidding(&[FIVE, FIVE_B], 1, vec![5]);
    for bad in [-1, 6, 300] {
        let err = game.submit_bid("p0", bad).unwrap_err();
        assert!(err.is_validation(&ValidationKind::InvalidBid), "bid {bad}");
    }
    game.submit_bid("p0", 5).unwrap();
}

#[test]
fn bidding_outside_bidding_phase_is_rejected() {
    let mut game = seated(2);
    let err = game.submit_bid("p0", 0).unwrap_err();
    assert!(err.is_validation(&ValidationKind::NotInBiddingPhase));
}

#[test]
fn accepted_bid_records_player_turn_and_next_bidder() {
    let mut game = game_in_bidding(&[FIVE, FIVE_B, FIVE_C], 2, vec![5]);
    let outcome = game.submit_bid("p0", 3).unwrap();
    assert_eq!(outcome.next_bidder_id.as_deref(), Some("p1"));
    assert!(outcome.trick_leader_id.is_none());
    assert_eq!(game.players[0].current_bid, 3);
    assert_eq!(game.players[0].bid_order, 0);

    game.submit_bid("p1", 0).unwrap();
    assert_eq!(game.players[1].bid_order, 1);
}

#[test]
fn highest_bid_leads_first_trick() {
    let mut game = game_in_bidding(&[FIVE, FIVE_B, FIVE_C], 2, vec![5]);
    game.submit_bid("p0", 1).unwrap();
    game.submit_bid("p1", 3).unwrap();
    let outcome = game.submit_bid("p2", 2).unwrap();

    assert_eq!(outcome.trick_leader_id.as_deref(), Some("p1"));
    assert!(outcome.next_bidder_id.is_none());
    assert_eq!(game.state, GamePhase::Playing);
    let round = game.current_round.as_ref().unwrap();
    assert_eq!(round.trick_leader, 1);
    assert_eq!(round.trick_turn_index, 0);
    let trick = round.current_trick.as_ref().unwrap();
    assert_eq!(trick.leader_id, "p1");
    assert!(trick.plays.is_empty());
}

#[test]
fn tied_high_bids_go_to_the_earliest_bidder() {
    // Dealer seat 0 so the order is p1, p2, p0
    let mut game = game_in_bidding(&[FIVE, FIVE_B, FIVE_C], 0, vec![5]);
    game.submit_bid("p1", 3).unwrap();
    game.submit_bid("p2", 1).unwrap();
    game.submit_bid("p0", 3).unwrap();

    let round = game.current_round.as_ref().unwrap();
    assert_eq!(determine_trick_leader(round).map(String::as_str), Some("p1"));
    assert_eq!(round.trick_leader, 1);
}

#[test]
fn all_zero_bids_go_to_first_bidder() {
    let mut game = game_in_bidding(&[&["2H", "3H"], &["2C", "3C"]], 0, vec![2]);
    game.submit_bid("p1", 0).unwrap();
    game.submit_bid("p0", 0).unwrap();
    let round = game.current_round.as_ref().unwrap();
    assert_eq!(round.current_trick.as_ref().unwrap().leader_id, "p1");
}

#[test]
fn bid_after_completion_is_rejected() {
    let mut game = game_in_bidding(&[&["2H"], &["3H"]], 1, vec![1]);
    game.submit_bid("p0", 0).unwrap();
    game.submit_bid("p1", 0).unwrap();
    let err = game.submit_bid("p0", 0).unwrap_err();
    assert!(err.is_validation(&ValidationKind::NotInBiddingPhase));
}
