use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fintrack_rust::config::ClientOptions;
use fintrack_rust::error::Error;
use fintrack_rust::FinTrack;

fn seeded_users() -> serde_json::Value {
    json!([
        {
            "id": "1",
            "username": "maria",
            "password": "hunter2",
            "createdAt": "2024-01-15T09:30:00.000Z"
        },
        {
            "id": "2",
            "username": "jo",
            "password": "letmein",
            "createdAt": "2024-02-01T12:00:00.000Z"
        }
    ])
}

async fn mock_users(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(seeded_users()))
        .mount(server)
        .await;
}

fn client_for(server: &MockServer, dir: &tempfile::TempDir) -> FinTrack {
    let options = ClientOptions::default().with_session_path(dir.path().join("session.json"));
    FinTrack::new_with_options(&server.uri(), options)
}

#[tokio::test]
async fn sign_in_returns_the_matching_user_and_persists_the_session() {
    let mock_server = MockServer::start().await;
    mock_users(&mock_server).await;
    let dir = tempfile::tempdir().unwrap();
    let fintrack = client_for(&mock_server, &dir);

    let user = fintrack.auth().sign_in("maria", "hunter2").await.unwrap();

    assert_eq!(user.id, "1");
    assert_eq!(user.username, "maria");

    // in-memory slot is set and the session file exists
    assert_eq!(fintrack.auth().current_user().unwrap().id, "1");
    assert!(dir.path().join("session.json").exists());
}

#[tokio::test]
async fn sign_in_with_no_matching_pair_fails_with_invalid_credentials() {
    let mock_server = MockServer::start().await;
    mock_users(&mock_server).await;
    let dir = tempfile::tempdir().unwrap();
    let fintrack = client_for(&mock_server, &dir);

    let result = fintrack.auth().sign_in("maria", "wrong").await;

    assert!(matches!(result, Err(Error::InvalidCredentials)));
    assert!(fintrack.auth().current_user().is_none());
}

#[tokio::test]
async fn empty_credentials_fail_validation_before_any_network_call() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(seeded_users()))
        .expect(0)
        .mount(&mock_server)
        .await;
    let dir = tempfile::tempdir().unwrap();
    let fintrack = client_for(&mock_server, &dir);

    let result = fintrack.auth().sign_in("", "hunter2").await;
    assert!(matches!(result, Err(Error::Validation(_))));

    let result = fintrack.auth().sign_in("maria", "").await;
    assert!(matches!(result, Err(Error::Validation(_))));
}

#[tokio::test]
async fn restore_loads_the_persisted_session_into_a_fresh_client() {
    let mock_server = MockServer::start().await;
    mock_users(&mock_server).await;
    let dir = tempfile::tempdir().unwrap();

    let fintrack = client_for(&mock_server, &dir);
    fintrack.auth().sign_in("jo", "letmein").await.unwrap();

    // a new client over the same session path picks the user back up
    let fresh = client_for(&mock_server, &dir);
    assert!(fresh.auth().current_user().is_none());

    let restored = fresh.auth().restore().unwrap().unwrap();
    assert_eq!(restored.id, "2");
    assert_eq!(fresh.auth().current_user().unwrap().username, "jo");
}

#[tokio::test]
async fn sign_out_clears_both_the_slot_and_the_file() {
    let mock_server = MockServer::start().await;
    mock_users(&mock_server).await;
    let dir = tempfile::tempdir().unwrap();
    let fintrack = client_for(&mock_server, &dir);

    fintrack.auth().sign_in("maria", "hunter2").await.unwrap();
    fintrack.auth().sign_out().unwrap();

    assert!(fintrack.auth().current_user().is_none());
    assert!(fintrack.auth().restore().unwrap().is_none());
    assert!(!dir.path().join("session.json").exists());
}

#[tokio::test]
async fn disabled_persistence_keeps_the_session_in_memory_only() {
    let mock_server = MockServer::start().await;
    mock_users(&mock_server).await;
    let dir = tempfile::tempdir().unwrap();
    let options = ClientOptions::default()
        .with_persist_session(false)
        .with_session_path(dir.path().join("session.json"));
    let fintrack = FinTrack::new_with_options(&mock_server.uri(), options);

    fintrack.auth().sign_in("maria", "hunter2").await.unwrap();

    assert_eq!(fintrack.auth().current_user().unwrap().id, "1");
    assert!(!dir.path().join("session.json").exists());
}
