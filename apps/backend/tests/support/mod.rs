#![allow(dead_code)]

pub mod app_builder;
pub mod websocket_client;

pub use app_builder::{create_test_app, test_state};
pub use game_setup::{flow_with_recorder, ready_game, GameSetup};
