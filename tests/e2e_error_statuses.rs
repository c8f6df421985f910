use address_book::presentation::http::routes::build_router;
use axum::http::{Method, StatusCode};
use std::{sync::Arc, time::Duration};

mod support;

use support::{
    FailingAddressRepo, LEAKY_DETAIL, PanickingAddressRepo, assert_error_response,
    assert_problem_response, build_test_state, make_test_router_with_repo, send, valid_address,
};

/// ストア障害は 500 problem+json になり、内部の詳細は漏れない
#[tokio::test]
async fn e2e_store_failure_returns_generic_500() {
    let app = make_test_router_with_repo(Arc::new(FailingAddressRepo));
    let item = format!("/addresses/{}", uuid::Uuid::new_v4());

    let cases = [
        (Method::POST, "/addresses".to_owned(), Some(valid_address())),
        (Method::GET, "/addresses".to_owned(), None),
        (Method::GET, item.clone(), None),
        (Method::PUT, item.clone(), Some(valid_address())),
        (Method::DELETE, item, None),
    ];

    for (method, uri, body) in cases {
        let resp = send(&app, method.clone(), &uri, body).await;
        let problem = assert_problem_response(resp).await;

        assert_eq!(problem["title"], "Address.Persistence", "{method} {uri}");
        let raw = problem.to_string();
        assert!(!raw.contains(LEAKY_DETAIL), "leaked detail on {method} {uri}");
        assert!(!raw.contains("hunter2"), "leaked detail on {method} {uri}");
    }
}

/// バリデーションはストアに触れる前に失敗する
#[tokio::test]
async fn e2e_validation_runs_before_the_store() {
    let app = make_test_router_with_repo(Arc::new(FailingAddressRepo));

    let resp = send(
        &app,
        Method::POST,
        "/addresses",
        Some(support::address_json("", "X", "Y", "12345", "Z")),
    )
    .await;

    assert_error_response(resp, StatusCode::BAD_REQUEST, "Validation.Failed").await;
}

/// ハンドラ内のパニックは 500 の汎用レスポンスに変換される
#[tokio::test]
async fn e2e_handler_panic_returns_generic_500() {
    let app = make_test_router_with_repo(Arc::new(PanickingAddressRepo));

    let resp = send(&app, Method::GET, "/addresses", None).await;
    let problem = assert_problem_response(resp).await;

    assert_eq!(problem["title"], "Server.Error");
    assert!(!problem.to_string().contains("exploded"));
}

/// 期限切れのリクエストは 499 Request.Cancelled で中断される
#[tokio::test]
async fn e2e_expired_deadline_reports_cancelled() {
    let mut state = build_test_state(Arc::new(FailingAddressRepo));
    state.request_timeout = Duration::ZERO;
    let app = build_router(state, &["*".to_owned()]).unwrap();

    let resp = send(&app, Method::GET, "/addresses", None).await;
    assert_error_response(
        resp,
        StatusCode::from_u16(499).unwrap(),
        "Request.Cancelled",
    )
    .await;

    let resp = send(&app, Method::POST, "/addresses", Some(valid_address())).await;
    assert_error_response(
        resp,
        StatusCode::from_u16(499).unwrap(),
        "Request.Cancelled",
    )
    .await;
}
