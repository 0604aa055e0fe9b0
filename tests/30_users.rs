mod common;

use anyhow::Result;
use chrono::{Duration, Utc};
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn list_is_empty_array_without_users() -> Result<()> {
    let server = common::TestServer::spawn().await?;
    let token = server.tokens.issue(1)?;

    let (status, body) = server.get_authed("/users", &token).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
    Ok(())
}

#[tokio::test]
async fn fetch_by_id_projects_name() -> Result<()> {
    let server = common::TestServer::spawn().await?;
    let token = server.register(3, "Cat", "cat@x.com", "pw", "1995-03-03").await?;
    server.register(4, "Dan", "dan@x.com", "pw", "1996-04-04").await?;

    let (status, body) = server.get_authed("/users/4", &token).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"name": "Dan"}));

    let (status, body) = server.get_authed("/users/404", &token).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);

    let (status, body) = server.get_authed("/users", &token).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{"id": 3, "name": "Cat"}, {"id": 4, "name": "Dan"}]));
    Ok(())
}

#[tokio::test]
async fn filter_by_age() -> Result<()> {
    let server = common::TestServer::spawn().await?;
    let token = server.register(1, "Old", "old@x.com", "pw", "1950-06-01").await?;
    server.register(2, "Mid", "mid@x.com", "pw", "1990-06-01").await?;

    // Exactly 20 years of 365.25 days ago, with a minute of slack
    let twenty = Utc::now() - Duration::milliseconds(20 * 31_557_600_000) - Duration::minutes(1);
    server.register(3, "Twenty", "twenty@x.com", "pw", &twenty.to_rfc3339()).await?;

    let (status, body) = server.get_authed("/users/filter/0", &token).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(["Old", "Mid", "Twenty"]));

    let (_, body) = server.get_authed("/users/filter/20", &token).await?;
    assert_eq!(body, json!(["Old", "Mid", "Twenty"]));

    let (_, body) = server.get_authed("/users/filter/21", &token).await?;
    assert_eq!(body, json!(["Old", "Mid"]));

    let (_, body) = server.get_authed("/users/filter/70", &token).await?;
    assert_eq!(body, json!(["Old"]));

    for huge in ["500", "99999999999", "99999999999999999999999"] {
        let (status, body) = server
            .get_authed(&format!("/users/filter/{}", huge), &token)
            .await?;
        assert_eq!(status, StatusCode::OK, "age {}", huge);
        assert_eq!(body, json!([]));
    }
    Ok(())
}
