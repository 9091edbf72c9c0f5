//! Game lifecycle HTTP routes under `/games`.

use actix_web::http::header::{ETAG, IF_NONE_MATCH};
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::domain::state::{Game, Player, PlayerId};
use crate::domain::{BidOutcome, Card, PlayOutcome};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::ValidatedJson;
use crate::http::etag::{game_etag, if_none_match_hits};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameRequest {
    pub display_name: String,
    #[serde(default)]
    pub creator_max_cards: i32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinGameRequest {
    pub game_id: String,
    pub display_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRequest {
    pub game_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidRequest {
    pub game_id: String,
    pub player_id: String,
    pub bid: i32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayRequest {
    pub game_id: String,
    pub player_id: String,
    pub card: Card,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateQuery {
    pub game_id: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateGameResponse {
    game_id: String,
    player_id: PlayerId,
    link: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JoinGameResponse {
    game_id: String,
    player_id: PlayerId,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StartGameResponse<'a> {
    message: &'static str,
    game_id: &'a str,
    current_round: usize,
    bidding_order: &'a [PlayerId],
    players: &'a [Player],
    round_sequence: &'a [u8],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BidResponse {
    message: &'static str,
    #[serde(flatten)]
    outcome: BidOutcome,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PlayResponse {
    message: &'static str,
    #[serde(flatten)]
    outcome: PlayOutcome,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResetResponse {
    message: &'static str,
    game: Game,
}

fn require_field(name: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::bad_request(
            ErrorCode::BadRequest,
            format!("{name} is required"),
        ));
    }
    Ok(())
}

/// POST /games/create
async fn create_game(
    req: HttpRequest,
    body: ValidatedJson<CreateGameRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    require_field("displayName", &body.display_name)?;

    let created = app_state
        .flow
        .create_game(&body.display_name, body.creator_max_cards)?;
    let link = format!(
        "http://{}/games/{}",
        req.connection_info().host(),
        created.game_id
    );

    Ok(HttpResponse::Ok().json(CreateGameResponse {
        game_id: created.game_id,
        player_id: created.player_id,
        link,
    }))
}

/// POST /games/join
async fn join_game(
    body: ValidatedJson<JoinGameRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    require_field("gameId", &body.game_id)?;
    require_field("displayName", &body.display_name)?;

    let player = app_state.flow.join_game(&body.game_id, &body.display_name)?;
    Ok(HttpResponse::Ok().json(JoinGameResponse {
        game_id: body.game_id,
        player_id: player.id,
    }))
}

/// POST /games/start
async fn start_game(
    body: ValidatedJson<GameRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    require_field("gameId", &body.game_id)?;

    let game = app_state.flow.start_game(&body.game_id)?;
    let round = game.current_round.as_ref().ok_or_else(|| {
        AppError::internal(
            ErrorCode::DataCorruption,
            "Started game has no current round".to_string(),
        )
    })?;

    Ok(HttpResponse::Ok().json(StartGameResponse {
        message: "Game started; bidding phase begins",
        game_id: &game.id,
        current_round: round.round_number,
        bidding_order: &round.bid_order,
        players: &game.players,
        round_sequence: &game.round_sequence,
    }))
}

/// POST /games/bid
async fn submit_bid(
    body: ValidatedJson<BidRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    require_field("gameId", &body.game_id)?;
    require_field("playerId", &body.player_id)?;

    let outcome = app_state
        .flow
        .submit_bid(&body.game_id, &body.player_id, body.bid)?;
    Ok(HttpResponse::Ok().json(BidResponse {
        message: "Bid accepted",
        outcome,
    }))
}

/// POST /games/play
///
/// When the play completes a trick the response carries `trickComplete`
/// and the table advances after the reveal delay.
async fn play_card(
    body: ValidatedJson<PlayRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    require_field("gameId", &body.game_id)?;
    require_field("playerId", &body.player_id)?;

    let outcome = app_state
        .flow
        .play_card(&body.game_id, &body.player_id, body.card)?;
    Ok(HttpResponse::Ok().json(PlayResponse {
        message: "Card played",
        outcome,
    }))
}

/// GET /games/state?gameId=
///
/// Full game state with an ETag derived from the game version. A matching
/// `If-None-Match` returns `304 Not Modified` with no body.
async fn get_state(
    req: HttpRequest,
    query: web::Query<StateQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let game_id = query.into_inner().game_id.unwrap_or_default();
    require_field("gameId", &game_id)?;

    let snap = app_state.flow.get_game_state(&game_id)?;
    let etag = game_etag(snap.game_id(), snap.version);

    if let Some(header) = req.headers().get(IF_NONE_MATCH) {
        if if_none_match_hits(header, &etag) {
            return Ok(HttpResponse::build(StatusCode::NOT_MODIFIED)
                .insert_header((ETAG, etag))
                .finish());
        }
    }

    Ok(HttpResponse::Ok()
        .insert_header((ETAG, etag))
        .json(snap.game))
}

/// POST /games/reset
async fn reset_game(
    body: ValidatedJson<GameRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    require_field("gameId", &body.game_id)?;

    let snap = app_state.flow.reset_game(&body.game_id)?;
    Ok(HttpResponse::Ok().json(ResetResponse {
        message: "Game reset to lobby",
        game: snap.game,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/create", web::post().to(create_game))
        .route("/join", web::post().to(join_game))
        .route("/start", web::post().to(start_game))
        .route("/bid", web::post().to(submit_bid))
        .route("/play", web::post().to(play_card))
        .route("/state", web::get().to(get_state))
        .route("/reset", web::post().to(reset_game));
}
