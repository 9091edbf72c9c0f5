use std::sync::Arc;
use std::time::{Duration, Instant};

use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use serde_json::to_string;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::snapshot::GameSnapshot;
use crate::domain::state::GameId;
use crate::services::game_flow::GameFlowService;
use crate::state::app_state::AppState;
use crate::ws::hub::{SnapshotBroadcast, SnapshotHub};
use crate::ws::protocol::ServerMsg;

const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(20);
const CLIENT_TIMEOUT: Duration = Duration::from_secs(40);

/// `GET /ws/games/{game_id}`: upgrade and stream snapshots for one game.
pub async fn upgrade(
    req: HttpRequest,
    stream: web::Payload,
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let game_id = path.into_inner();
    // Unknown games get a 404 instead of an upgrade; the state sent to the
    // client is read only once the session is subscribed.
    app_state.flow.get_game_state(&game_id)?;
    let session = GameWsSession::new(
        Arc::clone(&app_state.flow),
        Arc::clone(&app_state.hub),
        game_id,
    );
    ws::start(session, &req, stream)
}

pub struct GameWsSession {
    session_id: Uuid,
    game_id: GameId,
    flow: Arc<GameFlowService>,
    hub: Arc<SnapshotHub>,
    hub_token: Option<Uuid>,
    last_version: Option<u64>,
    last_heartbeat: Instant,
}

impl GameWsSession {
    fn new(flow: Arc<GameFlowService>, hub: Arc<SnapshotHub>, game_id: GameId) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            game_id,
            flow,
            hub,
            hub_token: None,
            last_version: None,
            last_heartbeat: Instant::now(),
        }
    }

    /// Forward `snapshot` unless this client already has that version or a newer one.
    fn push_if_newer(&mut self, ctx: &mut ws::WebsocketContext<Self>, snapshot: &GameSnapshot) {
        if self.last_version.is_some_and(|seen| snapshot.version <= seen) {
            return;
        }
        self.last_version = Some(snapshot.version);
        self.send(ctx, &ServerMsg::game_state(snapshot));
    }

    fn send(&self, ctx: &mut ws::WebsocketContext<Self>, msg: &ServerMsg<'_>) {
        match to_string(msg) {
            Ok(payload) => ctx.text(payload),
            Err(err) => warn!(
                session_id = %self.session_id,
                game_id = %self.game_id,
                error = %err,
                "Failed to serialize websocket message"
            ),
        }
    }

    fn start_heartbeat(&self, ctx: &mut ws::WebsocketContext<Self>) {
        ctx.run_interval(HEARTBEAT_INTERVAL, |actor, ctx| {
            if Instant::now().duration_since(actor.last_heartbeat) > CLIENT_TIMEOUT {
                warn!(
                    session_id = %actor.session_id,
                    game_id = %actor.game_id,
                    "Websocket client heartbeat timed out"
                );
                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Normal)));
                ctx.stop();
                return;
            }
            ctx.ping(b"keepalive");
        });
    }
}

impl Actor for GameWsSession {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        info!(session_id = %self.session_id, game_id = %self.game_id, "Websocket session started");

        // Subscribe before reading the state: anything published after the
        // read is queued in the mailbox, anything before it is in the read.
        let recipient = ctx.address().recipient();
        self.hub_token = Some(self.hub.register(&self.game_id, recipient));
        self.start_heartbeat(ctx);

        self.send(ctx, &ServerMsg::Ack { message: "connected" });
        match self.flow.get_game_state(&self.game_id) {
            Ok(current) => self.push_if_newer(ctx, &current),
            Err(err) => {
                warn!(
                    session_id = %self.session_id,
                    game_id = %self.game_id,
                    error = %err,
                    "Game disappeared before the session started"
                );
                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Away)));
                ctx.stop();
            }
        }
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        if let Some(token) = self.hub_token.take() {
            self.hub.unregister(&self.game_id, token);
        }
        info!(session_id = %self.session_id, game_id = %self.game_id, "Websocket session stopped");
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for GameWsSession {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(payload)) => {
                self.last_heartbeat = Instant::now();
                ctx.pong(&payload);
            }
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            // Clients only listen; anything else just proves liveness
            Ok(_) => {
                self.last_heartbeat = Instant::now();
            }
            Err(err) => {
                warn!(
                    session_id = %self.session_id,
                    game_id = %self.game_id,
                    error = %err,
                    "Websocket protocol error"
                );
                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Error)));
                ctx.stop();
            }
        }
    }
}

impl Handler<SnapshotBroadcast> for GameWsSession {
    type Result = ();

    fn handle(&mut self, msg: SnapshotBroadcast, ctx: &mut Self::Context) -> Self::Result {
        self.push_if_newer(ctx, &msg.snapshot);
    }
}
