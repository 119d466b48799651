mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn register_login_whoami_flow() -> Result<()> {
    if !common::database_available() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }

    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let email = common::unique_email("flow");

    // Register
    let res = client
        .post(format!("{}/auth/register", server.base_url))
        .json(&json!({ "email": email, "password": "a-strong-password" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["data"]["email"], email.as_str());
    // Hash must never be serialized
    assert!(body["data"].get("password_hash").is_none());
    let user_id = body["data"]["id"].as_str().unwrap().to_string();

    // Duplicate registration fails
    let res = client
        .post(format!("{}/auth/register", server.base_url))
        .json(&json!({ "email": email, "password": "a-strong-password" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    // Login
    let res = client
        .post(format!("{}/auth/login", server.base_url))
        .json(&json!({ "email": email, "password": "a-strong-password" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    let token = body["data"]["token"].as_str().unwrap().to_string();
    assert_eq!(body["data"]["token_type"], "bearer");
    assert!(body["data"]["expires_in"].as_u64().unwrap() > 0);

    // Whoami resolves the token back to the registered user
    let res = client
        .get(format!("{}/auth/whoami", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["data"]["id"], user_id.as_str());

    Ok(())
}

#[tokio::test]
async fn user_lookup_by_id() -> Result<()> {
    if !common::database_available() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }

    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let email = common::unique_email("lookup");

    let res = client
        .post(format!("{}/auth/register", server.base_url))
        .json(&json!({ "email": email, "password": "a-strong-password" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let user_id = res.json::<serde_json::Value>().await?["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let res = client
        .post(format!("{}/auth/login", server.base_url))
        .json(&json!({ "email": email, "password": "a-strong-password" }))
        .send()
        .await?;
    let token = res.json::<serde_json::Value>().await?["data"]["token"]
        .as_str()
        .unwrap()
        .to_string();

    // Authenticated lookup returns the record, hash omitted
    let res = client
        .get(format!("{}/users/{}", server.base_url, user_id))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["data"]["email"], email.as_str());
    assert!(body["data"].get("password_hash").is_none());

    // Unknown id is a 404
    let res = client
        .get(format!(
            "{}/users/00000000-0000-0000-0000-000000000000",
            server.base_url
        ))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // The route sits behind the token middleware like the post routes
    let res = client
        .get(format!("{}/users/{}", server.base_url, user_id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
async fn login_rejects_bad_credentials() -> Result<()> {
    if !common::database_available() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }

    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let email = common::unique_email("badcreds");

    client
        .post(format!("{}/auth/register", server.base_url))
        .json(&json!({ "email": email, "password": "a-strong-password" }))
        .send()
        .await?;

    // Wrong password
    let res = client
        .post(format!("{}/auth/login", server.base_url))
        .json(&json!({ "email": email, "password": "wrong-password" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    // Unknown email
    let res = client
        .post(format!("{}/auth/login", server.base_url))
        .json(&json!({ "email": common::unique_email("never-registered"), "password": "whatever-123" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
async fn register_validates_fields() -> Result<()> {
    if !common::database_available() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }

    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/auth/register", server.base_url))
        .json(&json!({ "email": "not-an-email", "password": "short" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = res.json::<serde_json::Value>().await?;
    assert!(body["field_errors"]["email"].is_string());
    assert!(body["field_errors"]["password"].is_string());

    Ok(())
}
