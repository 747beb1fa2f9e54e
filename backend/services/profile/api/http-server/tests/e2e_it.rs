// backend/services/profile/api/http-server/tests/e2e_it.rs

use std::net::SocketAddr;

use serde_json::{json, Value};
use shared_kernel::infrastructure::postgres::utils::PostgresTestContext;

#[path = "../src/main.rs"]
mod server_binary;

async fn start_test_server(db: &PostgresTestContext) -> String {
    let addr: SocketAddr = "127.0.0.1:0".parse().unwrap();
    let listener = std::net::TcpListener::bind(addr).unwrap();
    let actual_addr = listener.local_addr().unwrap();
    drop(listener);

    unsafe {
        std::env::set_var("PROFILE_DB_URL", db.url());
    }

    tokio::spawn(async move {
        server_binary::run_server(actual_addr)
            .await
            .expect("Server failed");
    });

    tokio::time::sleep(tokio::time::Duration::from_millis(500)).await;
    format!("http://{}", actual_addr)
}

#[tokio::test]
async fn test_profile_http_e2e() {
    // La migration profile est appliquée par le serveur lui-même
    let db = PostgresTestContext::builder().build().await;
    let server_url = start_test_server(&db).await;
    let client = reqwest::Client::new();

    // --- CASE 1: HEALTH ---
    let health: Value = client
        .get(format!("{server_url}/health"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health, json!({ "status": "ok" }));

    // --- CASE 2: CREATE (Asha Rao) ---
    let response = client
        .post(format!("{server_url}/profiles"))
        .json(&json!({
            "name": "Asha Rao",
            "avatar": "https://x/img.png",
            "bio": "Designer",
            "education": "MBA, TAPMI",
            "skills": ["UX", "Research"],
            "experience": "2 internships",
            "projects": [{ "title": "Study A", "description": "desc" }]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let created: Value = response.json().await.unwrap();
    let profile = created["profile"].clone();
    let id = profile["id"].as_str().unwrap().to_string();

    // --- CASE 3: GET BY ID ---
    let fetched: Value = client
        .get(format!("{server_url}/profiles/{id}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, profile);

    // --- CASE 4: VALIDATION ---
    let response = client
        .post(format!("{server_url}/profiles"))
        .json(&json!({ "name": "Nobody" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], "VALIDATION_FAILED");

    // --- CASE 5: SEED SKIPPED, STORE NOT EMPTY ---
    let seed: Value = client
        .post(format!("{server_url}/seed"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(seed["count"], 1);

    // --- CASE 6: LIST ---
    let listed: Value = client
        .get(format!("{server_url}/profiles"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["name"], "Asha Rao");

    // --- CASE 7: UNKNOWN ID ---
    let response = client
        .get(format!("{server_url}/profiles/0190a5d2-7c3e-7b1a-9f00-000000000001"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}
