use actix_web::http::header::{ETAG, IF_NONE_MATCH};
use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use river_backend::http::etag::game_etag;

use crate::common::read_json;
use crate::support::create_test_app;
use crate::support::game_setup::ready_game;
use crate::support::test_state;

#[actix_web::test]
async fn state_returns_game_with_etag() {
    let state = test_state();
    let setup = ready_game(&state.flow, 2, 0, false);
    let version = state.flow.get_game_state(&setup.game_id).unwrap().version;
    let app = create_test_app(state.clone()).await;

    let req = test::TestRequest::get()
        .uri(&format!("/games/state?gameId={}", setup.game_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(ETAG).unwrap().to_str().unwrap(),
        game_etag(&setup.game_id, version)
    );

    let body = read_json(resp).await;
    assert_eq!(body["id"], setup.game_id.as_str());
    assert_eq!(body["state"], "lobby");
    assert_eq!(body["version"], version);
}

#[actix_web::test]
async fn matching_if_none_match_is_304_until_the_game_changes() {
    let state = test_state();
    let setup = ready_game(&state.flow, 2, 0, false);
    let app = create_test_app(state.clone()).await;
    let uri = format!("/games/state?gameId={}", setup.game_id);

    let req = test::TestRequest::get().uri(&uri).to_request();
    let etag = test::call_service(&app, req)
        .await
        .headers()
        .get(ETAG)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();

    let req = test::TestRequest::get()
        .uri(&uri)
        .insert_header((IF_NONE_MATCH, etag.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_MODIFIED);
    assert!(test::read_body(resp).await.is_empty());

    state.flow.start_game(&setup.game_id).unwrap();

    let req = test::TestRequest::get()
        .uri(&uri)
        .insert_header((IF_NONE_MATCH, etag.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_ne!(resp.headers().get(ETAG).unwrap().to_str().unwrap(), etag);
}

#[actix_web::test]
async fn state_requires_game_id() {
    let app = create_test_app(test_state()).await;

    let req = test::TestRequest::get().uri("/games/state").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "BAD_REQUEST",
        StatusCode::BAD_REQUEST,
        Some("gameId"),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/games/state?gameId=unknown")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "GAME_NOT_FOUND",
        StatusCode::NOT_FOUND,
        None,
    )
    .await;
}
