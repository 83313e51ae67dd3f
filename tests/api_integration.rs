//! Events API integration tests: translate→request→narrow round-trip against
//! a mock API server.

use axum::extract::{Path, RawQuery, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use volunteer_core::filters::{Availability, PermissionLevel, Role, Scope};
use volunteer_core::types::{ApiConfig, EventId};
use volunteer_core::{Error, EventsApi, Filters};

/// Raw query strings received by `GET /api/events`, in order.
#[derive(Clone, Default)]
struct Recorded {
    queries: Arc<Mutex<Vec<Option<String>>>>,
}

impl Recorded {
    fn last(&self) -> Option<String> {
        self.queries.lock().unwrap().last().cloned().flatten()
    }
}

// 2026-02-17 is a Tuesday, 2026-02-21 a Saturday.
fn sample_events() -> Value {
    let event = |id: i64, org: i64, date: &str, time: &str| {
        json!({
            "id": id,
            "name": format!("event {id}"),
            "description": "",
            "location": "Austin, TX",
            "category": "Health",
            "date": date,
            "time": time,
            "time_zone": "America/Chicago",
            "organization_id": org,
            "signup_count": 0,
            "user_signed_up": false
        })
    };
    json!([
        event(1, 10, "2026-02-17", "08:00"),
        event(2, 20, "2026-02-21", "19:00"),
        event(3, 30, "2026-02-17", "13:00"),
        event(4, 10, "2026-02-18", "19:00"),
    ])
}

// The mock ignores every filter; narrowing is what the tests observe.
async fn list_events(State(recorded): State<Recorded>, RawQuery(query): RawQuery) -> Json<Value> {
    recorded.queries.lock().unwrap().push(query);
    Json(sample_events())
}

async fn get_event(Path(id): Path<i64>) -> Response {
    match sample_events()
        .as_array()
        .and_then(|events| events.iter().find(|e| e["id"] == id).cloned())
    {
        Some(event) => Json(event).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "Event not found"})),
        )
            .into_response(),
    }
}

async fn list_roles(headers: HeaderMap) -> Response {
    let authenticated = headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|cookie| cookie.starts_with("session="));
    if !authenticated {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "Not authenticated"})),
        )
            .into_response();
    }
    Json(json!([
        {"user_id": 1, "organization_id": 10, "permission_level": "volunteer"},
        {"user_id": 1, "organization_id": 20, "permission_level": "admin"},
        {"user_id": 1, "organization_id": 30, "permission_level": "owner"},
    ]))
    .into_response()
}

/// Helper: spin up the mock API on a random port, return (client, recorder).
async fn start_test_server() -> (EventsApi, Recorded) {
    let recorded = Recorded::default();
    let app = Router::new()
        .route("/api/events", get(list_events))
        .route("/api/events/{id}", get(get_event))
        .route("/api/roles", get(list_roles))
        .with_state(recorded.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    let api = EventsApi::new(&ApiConfig {
        base_url: format!("http://{addr}"),
        ..ApiConfig::default()
    })
    .unwrap();
    (api, recorded)
}

fn ids(events: &[volunteer_core::Event]) -> Vec<i64> {
    events.iter().map(|e| e.id.get()).collect()
}

fn roles() -> Vec<Role> {
    vec![
        Role::new(1, 10, PermissionLevel::Volunteer),
        Role::new(1, 20, PermissionLevel::Admin),
    ]
}

#[tokio::test]
async fn test_expressible_filters_are_sent_and_trusted() {
    let (api, recorded) = start_test_server().await;
    let filters = Filters::new()
        .with_scope(Scope::MyOrgs)
        .with_availability([Availability::Mornings]);

    let events = api.list_events(&filters, &roles()).await.unwrap();

    assert_eq!(
        recorded.last().as_deref(),
        Some("organization_id=10&organization_id=20&begin_time=06%3A00&end_time=11%3A59")
    );
    // exact translation: the server answer is returned as-is
    assert_eq!(ids(&events), vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn test_weekends_or_evenings_narrowed_client_side() {
    let (api, recorded) = start_test_server().await;
    let filters =
        Filters::new().with_availability([Availability::Weekends, Availability::Evenings]);

    let events = api.list_events(&filters, &[]).await.unwrap();

    assert_eq!(recorded.last(), None);
    assert_eq!(ids(&events), vec![2, 4]);
}

#[tokio::test]
async fn test_gapped_window_overfetches_then_narrows() {
    let (api, recorded) = start_test_server().await;
    let filters =
        Filters::new().with_availability([Availability::Mornings, Availability::Evenings]);

    let events = api.list_events(&filters, &[]).await.unwrap();

    assert_eq!(
        recorded.last().as_deref(),
        Some("begin_time=06%3A00&end_time=21%3A59")
    );
    assert_eq!(ids(&events), vec![1, 2, 4]);
}

#[tokio::test]
async fn test_restricted_scope_without_roles_is_empty() {
    let (api, recorded) = start_test_server().await;
    let filters = Filters::new().with_scope(Scope::Admin);

    let events = api.list_events(&filters, &[]).await.unwrap();

    assert_eq!(recorded.last(), None);
    assert!(events.is_empty());
}

#[tokio::test]
async fn test_fetch_roles_with_session() {
    let (api, _) = start_test_server().await;
    let roles = api.with_session("a.b.c").fetch_roles().await;

    let mut expected = self::roles();
    expected.push(Role::new(1, 30, PermissionLevel::Unknown));
    assert_eq!(roles, expected);
}

#[tokio::test]
async fn test_unknown_permission_level_keeps_admin_scope() {
    let (api, recorded) = start_test_server().await;
    let api = api.with_session("a.b.c");
    let roles = api.fetch_roles().await;

    let admin = Filters::new().with_scope(Scope::Admin);
    let events = api.list_events(&admin, &roles).await.unwrap();
    assert_eq!(recorded.last().as_deref(), Some("organization_id=20"));
    assert_eq!(events.len(), 4);

    let my_orgs = Filters::new().with_scope(Scope::MyOrgs);
    api.list_events(&my_orgs, &roles).await.unwrap();
    assert_eq!(
        recorded.last().as_deref(),
        Some("organization_id=10&organization_id=20&organization_id=30")
    );
}

#[tokio::test]
async fn test_fetch_roles_failure_is_empty() {
    let (api, _) = start_test_server().await;
    assert!(api.fetch_roles().await.is_empty());
}

#[tokio::test]
async fn test_get_event() {
    let (api, _) = start_test_server().await;

    let event = api.get_event(EventId::new(3)).await.unwrap();
    assert_eq!(event.organization_id.get(), 30);

    let err = api.get_event(EventId::new(99)).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Status { status: 404, ref detail } if detail == "Event not found"
    ));
}

#[tokio::test]
async fn test_unreachable_api_is_http_error() {
    let api = EventsApi::new(&ApiConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        ..ApiConfig::default()
    })
    .unwrap();

    let err = api.list_events(&Filters::new(), &[]).await.unwrap_err();
    assert!(matches!(err, Error::Http(_)));
    assert!(api.fetch_roles().await.is_empty());
}
