use crate::modules::voters::adapters::outbound::voter_store_in_memory::InMemoryVoterStore;
use crate::modules::voters::core::voter::{PollRecord, Voter};
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::voters::VoterBuilder;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    router(AppState::new(Arc::new(InMemoryVoterStore::new())))
}

async fn send(app: &Router, method: &str, uri: &str, body: String) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn json<T: serde::de::DeserializeOwned>(response: Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn registers_a_voter_and_records_a_poll() {
    let app = app();
    let vote_date = Utc.with_ymd_and_hms(2024, 11, 5, 9, 30, 0).unwrap();

    let response = send(&app, "DELETE", "/voters", String::new()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let jane = VoterBuilder::new().build();
    let response = send(&app, "POST", "/voters", serde_json::to_string(&jane).unwrap()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let poll = PollRecord {
        poll_id: 1,
        vote_id: 1,
        vote_date,
    };
    let response = send(
        &app,
        "POST",
        "/voters/1/polls/1",
        serde_json::to_string(&poll).unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, "GET", "/voters", String::new()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let voters: Vec<Voter> = json(response).await;
    assert_eq!(voters.len(), 1);

    let response = send(&app, "GET", "/voters/1", String::new()).await;
    let voter: Voter = json(response).await;
    assert_eq!(voter.voter_id, 1);
    assert_eq!(voter.name, "Jane Smith");
    assert_eq!(voter.email, "jane@example.com");

    let response = send(&app, "GET", "/voters/1/polls", String::new()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let polls: Vec<PollRecord> = json(response).await;
    assert_eq!(polls, vec![poll.clone()]);

    let response = send(&app, "GET", "/voters/1/polls/1", String::new()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let record: PollRecord = json(response).await;
    assert_eq!(record, poll);
}

#[tokio::test]
async fn routes_health_before_voter_ids() {
    let app = app();

    let response = send(&app, "GET", "/voters/health", String::new()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let report: serde_json::Value = json(response).await;
    assert_eq!(report["status"], "ok");
    assert_eq!(report["voters"], 0);
}

#[tokio::test]
async fn keeps_vote_ids_unique_across_poll_deletions() {
    let app = app();
    let jane = VoterBuilder::new().build();
    send(&app, "POST", "/voters", serde_json::to_string(&jane).unwrap()).await;

    for poll_id in 1..=2 {
        let uri = format!("/voters/1/polls/{poll_id}");
        assert_eq!(
            send(&app, "POST", &uri, String::new()).await.status(),
            StatusCode::OK
        );
    }
    let response = send(&app, "DELETE", "/voters/1/polls/1", String::new()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, "POST", "/voters/1/polls/3", String::new()).await;
    let record: PollRecord = json(response).await;
    assert_eq!(record.vote_id, 3);

    let response = send(&app, "GET", "/voters/1/polls", String::new()).await;
    let vote_ids: Vec<_> = json::<Vec<PollRecord>>(response)
        .await
        .into_iter()
        .map(|r| r.vote_id)
        .collect();
    assert_eq!(vote_ids, vec![2, 3]);
}

#[tokio::test]
async fn serves_graphql_next_to_the_rest_api() {
    let app = app();
    let jane = VoterBuilder::new().build();
    send(&app, "POST", "/voters", serde_json::to_string(&jane).unwrap()).await;

    let query = serde_json::json!({ "query": "{ voter(voterId: 1) { name email } }" });
    let response = send(&app, "POST", "/gql", query.to_string()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = json(response).await;
    assert_eq!(body["data"]["voter"]["name"], "Jane Smith");
    assert_eq!(body["data"]["voter"]["email"], "jane@example.com");
}
