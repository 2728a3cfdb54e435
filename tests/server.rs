use std::net::SocketAddr;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    routing::get,
    Router,
};
use chrono::FixedOffset;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tokio::net::TcpListener;
use tower::ServiceExt;

use eventboard::{server, Event, Loader};

macro_rules! selector {
    ($query:expr) => {{
        static SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse($query).unwrap());
        &SELECTOR
    }};
}

const DEMO: &str = r#"{"data":[{"name":"demo","date":"2024-01-01T13:00:00Z","location":"Hall","description":"x"}]}"#;

async fn upstream(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, router).await });
    addr
}

fn board_for(addr: SocketAddr) -> Arc<server::Board> {
    server::Board::new(
        Loader::new(format!("http://{addr}/events")),
        FixedOffset::east_opt(0).unwrap(),
    )
}

async fn get_body(router: Router, uri: &str) -> (StatusCode, String) {
    let response = router
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn page_renders_loaded_events() {
    let addr = upstream(Router::new().route("/events", get(|| async { DEMO }))).await;
    let router = server::router(board_for(addr));

    let (status, body) = get_body(router, "/").await;
    assert_eq!(status, StatusCode::OK);

    let html = Html::parse_document(&body);
    let names = html
        .select(selector!("#allEvents > .containerEvent .eventName"))
        .map(|name| name.inner_html())
        .collect::<Vec<_>>();
    assert_eq!(names, ["Demo"]);

    let time = html.select(selector!(".eventTime")).next().unwrap();
    assert_eq!(time.inner_html(), "1:00pm");
}

#[tokio::test]
async fn json_returns_state() {
    let addr = upstream(Router::new().route("/events", get(|| async { DEMO }))).await;
    let router = server::router(board_for(addr));

    let (status, body) = get_body(router, "/?json=true").await;
    assert_eq!(status, StatusCode::OK);

    let events: Vec<Event> = serde_json::from_str(&body).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].name.as_deref(), Some("demo"));
    assert_eq!(events[0].location.as_deref(), Some("Hall"));
}

#[tokio::test]
async fn light_mode_is_per_request() {
    let addr = upstream(Router::new().route("/events", get(|| async { DEMO }))).await;
    let board = board_for(addr);

    let (_, light) = get_body(server::router(Arc::clone(&board)), "/?mode=light").await;
    let html = Html::parse_document(&light);
    let root = html.select(selector!("html")).next().unwrap();
    assert!(root.value().attr("style").unwrap().contains("var(--lightBackground)"));
    let control = html.select(selector!("#colorMode")).next().unwrap();
    assert_eq!(control.inner_html(), "Dark Mode");

    let (_, default) = get_body(server::router(board), "/").await;
    let html = Html::parse_document(&default);
    let control = html.select(selector!("#colorMode")).next().unwrap();
    assert_eq!(control.inner_html(), "Light Mode");
}

#[tokio::test]
async fn failed_reload_keeps_previous_events() {
    let failing = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&failing);
    let addr = upstream(Router::new().route(
        "/events",
        get(move || {
            let flag = Arc::clone(&flag);
            async move {
                if flag.load(Ordering::SeqCst) {
                    (StatusCode::INTERNAL_SERVER_ERROR, "")
                } else {
                    (StatusCode::OK, DEMO)
                }
            }
        }),
    ))
    .await;
    let board = board_for(addr);

    let (_, first) = get_body(server::router(Arc::clone(&board)), "/?json=true").await;
    failing.store(true, Ordering::SeqCst);
    let (status, second) = get_body(server::router(board), "/?json=true").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(first, second);
    assert!(second.contains("\"demo\""));
}

#[tokio::test]
async fn unreachable_upstream_renders_empty_page() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let (status, body) = get_body(server::router(board_for(addr)), "/").await;
    assert_eq!(status, StatusCode::OK);

    let html = Html::parse_document(&body);
    assert_eq!(html.select(selector!("#allEvents > section")).count(), 0);
}

#[tokio::test]
async fn unknown_path_redirects_home() {
    let addr = upstream(Router::new()).await;
    let response = server::router(board_for(addr))
        .oneshot(Request::get("/events").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/");
}
