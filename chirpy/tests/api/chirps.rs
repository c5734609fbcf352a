use std::time::Duration;

use serde_json::Value;
use test_context::test_context;
use uuid::Uuid;

use chirpy::domain::ChirpResponse;

use crate::helpers::{bearer, TestContext};

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_201_and_attribute_the_chirp_to_the_caller(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let login = app.signup_and_login().await;

    let response = app
        .post_chirp("I'm the one who knocks!", Some(&bearer(&login.token)))
        .await;
    assert_eq!(response.status().as_u16(), 201);

    let chirp = response.json::<ChirpResponse>().await.unwrap();
    assert_eq!(chirp.body, "I'm the one who knocks!");
    assert_eq!(chirp.user_id, login.user.id);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_mask_profane_words(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let login = app.signup_and_login().await;

    let response = app
        .post_chirp(
            "I hear Mastodon is better than Chirpy. sharbert I need to migrate",
            Some(&bearer(&login.token)),
        )
        .await;

    let chirp = response.json::<ChirpResponse>().await.unwrap();
    assert_eq!(
        chirp.body,
        "I hear Mastodon is better than Chirpy. **** I need to migrate"
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_400_if_chirp_is_too_long(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let login = app.signup_and_login().await;

    let response = app
        .post_chirp(&"a".repeat(141), Some(&bearer(&login.token)))
        .await;
    assert_eq!(response.status().as_u16(), 400);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Chirp is too long");
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_401_without_a_valid_token(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let login = app.signup_and_login().await;

    assert_eq!(app.post_chirp("hello", None).await.status().as_u16(), 401);
    assert_eq!(
        app.post_chirp("hello", Some(&format!("Bearer  {}", login.token)))
            .await
            .status()
            .as_u16(),
        401
    );
    assert_eq!(
        app.post_chirp("hello", Some(&format!("ApiKey {}", login.token)))
            .await
            .status()
            .as_u16(),
        401
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_keep_accepting_the_access_token_after_revoke(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let login = app.signup_and_login().await;

    app.revoke(&login.refresh_token).await;

    let response = app.post_chirp("still here", Some(&bearer(&login.token))).await;
    assert_eq!(response.status().as_u16(), 201);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_list_chirps_oldest_first(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let login = app.signup_and_login().await;
    let auth = bearer(&login.token);

    for body in ["first", "second", "third"] {
        assert_eq!(
            app.post_chirp(body, Some(&auth)).await.status().as_u16(),
            201
        );
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let response = app.get("/api/chirps").await;
    assert_eq!(response.status().as_u16(), 200);

    let chirps = response.json::<Vec<ChirpResponse>>().await.unwrap();
    let bodies: Vec<&str> = chirps.iter().map(|c| c.body.as_str()).collect();
    assert_eq!(bodies, vec!["first", "second", "third"]);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_get_a_single_chirp_by_id(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let login = app.signup_and_login().await;
    let created = app
        .post_chirp("find me", Some(&bearer(&login.token)))
        .await
        .json::<ChirpResponse>()
        .await
        .unwrap();

    let response = app.get(&format!("/api/chirps/{}", created.id)).await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.json::<ChirpResponse>().await.unwrap(), created);

    let missing = app.get(&format!("/api/chirps/{}", Uuid::new_v4())).await;
    assert_eq!(missing.status().as_u16(), 404);

    let malformed = app.get("/api/chirps/not-a-uuid").await;
    assert_eq!(malformed.status().as_u16(), 400);
}
