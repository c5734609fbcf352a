use test_context::test_context;

use crate::helpers::TestContext;

#[test_context(TestContext)]
#[tokio::test]
async fn healthz_returns_ok(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let response = app.get("/api/healthz").await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "text/plain; charset=utf-8"
    );
    assert_eq!(response.text().await.unwrap(), "OK");
}

#[test_context(TestContext)]
#[tokio::test]
async fn app_serves_static_files(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let response = app.get("/app/index.html").await;

    assert_eq!(response.status().as_u16(), 200);
    assert!(response.text().await.unwrap().contains("Welcome to Chirpy"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn metrics_count_file_server_hits_until_reset(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    for _ in 0..3 {
        app.get("/app/index.html").await;
    }
    app.get("/api/healthz").await;

    let metrics = app.get("/admin/metrics").await;
    assert_eq!(metrics.status().as_u16(), 200);
    assert!(metrics
        .text()
        .await
        .unwrap()
        .contains("Chirpy has been visited 3 times!"));

    let reset = app.post_empty("/admin/reset").await;
    assert_eq!(reset.status().as_u16(), 200);
    assert_eq!(reset.text().await.unwrap(), "OK");

    let metrics = app.get("/admin/metrics").await;
    assert!(metrics
        .text()
        .await
        .unwrap()
        .contains("Chirpy has been visited 0 times!"));
}
