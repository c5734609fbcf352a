use test_context::test_context;

use chirpy::domain::{LoginResponse, RefreshResponse, SessionToken};
use chirpy::utils::auth::verify_access_token;

use crate::helpers::{TestApp, TestContext, TEST_JWT_SECRET, TEST_PASSWORD};

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_a_new_access_token(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let login = app.signup_and_login().await;

    let response = app.refresh(&login.refresh_token).await;
    assert_eq!(response.status().as_u16(), 200);

    let refreshed = response
        .json::<RefreshResponse>()
        .await
        .expect("Could not deserialize refresh response");
    assert_eq!(
        verify_access_token(&refreshed.token, TEST_JWT_SECRET),
        Ok(login.user.id)
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_204_on_revoke_then_401_on_refresh(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let login = app.signup_and_login().await;

    let response = app.revoke(&login.refresh_token).await;
    assert_eq!(response.status().as_u16(), 204);

    let response = app.refresh(&login.refresh_token).await;
    assert_eq!(response.status().as_u16(), 401);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_accept_a_repeated_revoke(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let login = app.signup_and_login().await;

    assert_eq!(app.revoke(&login.refresh_token).await.status().as_u16(), 204);
    assert_eq!(app.revoke(&login.refresh_token).await.status().as_u16(), 204);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_401_for_unknown_tokens(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let unknown = SessionToken::generate().unwrap();

    assert_eq!(app.refresh(unknown.as_ref()).await.status().as_u16(), 401);
    assert_eq!(app.revoke(unknown.as_ref()).await.status().as_u16(), 401);
    assert_eq!(app.refresh("garbage").await.status().as_u16(), 401);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_not_accept_an_access_token_as_a_session_token(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let login = app.signup_and_login().await;

    assert_eq!(app.refresh(&login.token).await.status().as_u16(), 401);
}

#[test_context(TestContext)]
#[tokio::test]
async fn revoking_one_session_leaves_others_alive(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let first = app.signup_and_login().await;
    let second = app
        .login(&first.user.email, TEST_PASSWORD)
        .await
        .json::<LoginResponse>()
        .await
        .unwrap();

    app.revoke(&first.refresh_token).await;

    assert_eq!(app.refresh(&first.refresh_token).await.status().as_u16(), 401);
    assert_eq!(app.refresh(&second.refresh_token).await.status().as_u16(), 200);
}

#[tokio::test]
async fn should_refresh_then_revoke_with_sql_backed_sessions() {
    let app = TestApp::with_sql_stores().await;
    let login = app.signup_and_login().await;

    let response = app.refresh(&login.refresh_token).await;
    assert_eq!(response.status().as_u16(), 200);
    let refreshed = response
        .json::<RefreshResponse>()
        .await
        .expect("Could not deserialize refresh response");
    assert_eq!(
        verify_access_token(&refreshed.token, TEST_JWT_SECRET),
        Ok(login.user.id)
    );

    assert_eq!(app.revoke(&login.refresh_token).await.status().as_u16(), 204);
    assert_eq!(app.refresh(&login.refresh_token).await.status().as_u16(), 401);
}
