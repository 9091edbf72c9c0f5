use actix_web::web;

pub mod games;
pub mod health;
pub mod realtime;

/// Register every application route. Shared by `main.rs` and the HTTP tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health::root));

    // Health check: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Game lifecycle: /games/**
    cfg.service(web::scope("/games").configure(games::configure_routes));

    // Realtime: /ws/games/{game_id}
    cfg.service(web::scope("/ws").configure(realtime::configure_routes));
}
