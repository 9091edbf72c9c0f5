//! Shared fixtures for domain tests.

use std::env;

use proptest::test_runner::Config as ProptestConfig;

use crate::domain::bidding::bidding_order;
use crate::domain::state::{Game, GamePhase, Player, PlayerId, Round, Trick};
use crate::domain::{try_parse_cards, Card};

pub fn proptest_config() -> ProptestConfig {
    let cases = env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(64);

    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}

pub fn cards(tokens: &[&str]) -> Vec<Card> {
    try_parse_cards(tokens).expect("valid card tokens")
}

pub fn card(token: &str) -> Card {
    token.parse().expect("valid card token")
}

/// Lobby with players `p0..p{n-1}`.
pub fn seated(n: usize) -> Game {
    let mut game = Game::new("g-test", Player::new("p0", "Player 0"), 0);
    for i in 1..n {
        game.join(Player::new(format!("p{i}"), format!("Player {i}")))
            .expect("seat available");
    }
    game
}

/// A game in bidding for a single round of `hands[0].len()` cards with the
/// given dealer and fixed hands.
pub fn game_in_bidding(hands: &[&[&str]], dealer_index: usize, sequence: Vec<u8>) -> Game {
    let mut game = seated(hands.len());
    for (player, tokens) in game.players.iter_mut().zip(hands) {
        player.hand = cards(tokens);
    }
    let total_cards = hands[0].len() as u8;
    let ids: Vec<PlayerId> = game.players.iter().map(|p| p.id.clone()).collect();
    game.round_sequence = sequence;
    game.current_round_index = 0;
    game.current_round = Some(Round::new(
        1,
        total_cards,
        dealer_index,
        bidding_order(&ids, dealer_index),
    ));
    game.state = GamePhase::Bidding;
    game
}

/// A game in trick play with everyone's bid recorded as `bids` and `leader`
/// about to lead.
pub fn game_in_play(hands: &[&[&str]], leader: usize, bids: &[u8]) -> Game {
    let dealer = (leader + hands.len() - 1) % hands.len();
    let total = hands[0].len() as u8;
    let mut game = game_in_bidding(hands, dealer, vec![total]);
    let round = game.current_round.as_mut().expect("round");
    for (player, &bid) in game.players.iter_mut().zip(bids) {
        round.bids.insert(player.id.clone(), bid);
        player.current_bid = bid;
    }
    round.current_bid_turn = round.bid_order.len();
    round.current_trick = Some(Trick::led_by(game.players[leader].id.clone()));
    round.trick_leader = leader;
    round.trick_turn_index = 0;
    game.state = GamePhase::Playing;
    game
}
