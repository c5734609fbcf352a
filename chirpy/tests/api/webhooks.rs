use serde_json::json;
use test_context::test_context;

use chirpy::domain::UserStore;

use crate::helpers::{TestContext, TEST_POLKA_KEY};

fn api_key(key: &str) -> String {
    format!("ApiKey {key}")
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_upgrade_the_user(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let login = app.signup_and_login().await;
    let body = json!({ "event": "user.upgraded", "data": { "user_id": login.user.id } });

    let response = app
        .polka_webhook(&body, Some(&api_key(TEST_POLKA_KEY)))
        .await;
    assert_eq!(response.status().as_u16(), 204);

    let user = app.state.user_store.get_user(&login.user.id).await.unwrap();
    assert!(user.is_chirpy_red);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_ignore_other_events(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let login = app.signup_and_login().await;
    let body = json!({ "event": "user.payment_failed", "data": { "user_id": login.user.id } });

    let response = app
        .polka_webhook(&body, Some(&api_key(TEST_POLKA_KEY)))
        .await;
    assert_eq!(response.status().as_u16(), 204);

    let user = app.state.user_store.get_user(&login.user.id).await.unwrap();
    assert!(!user.is_chirpy_red);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_404_for_unknown_users(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let body = json!({
        "event": "user.upgraded",
        "data": { "user_id": "3311741c-680c-4546-99f3-fc9efac2036c" }
    });

    let response = app
        .polka_webhook(&body, Some(&api_key(TEST_POLKA_KEY)))
        .await;
    assert_eq!(response.status().as_u16(), 404);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_401_without_the_right_key(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let login = app.signup_and_login().await;
    let body = json!({ "event": "user.upgraded", "data": { "user_id": login.user.id } });

    let headers = [
        None,
        Some(api_key("wrong-key")),
        Some(format!("Bearer {TEST_POLKA_KEY}")),
        Some(format!("apikey {TEST_POLKA_KEY}")),
        Some("ApiKey ".to_owned()),
    ];

    for header in headers.iter() {
        let response = app.polka_webhook(&body, header.as_deref()).await;
        assert_eq!(
            response.status().as_u16(),
            401,
            "Failed for header: {:?}",
            header
        );
    }

    let user = app.state.user_store.get_user(&login.user.id).await.unwrap();
    assert!(!user.is_chirpy_red);
}
