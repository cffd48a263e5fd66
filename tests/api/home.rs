use crate::helpers::TestApp;

#[tokio::test]
async fn root_redirects_to_the_docs() {
    let test_app = TestApp::spawn_app().await;

    let response = test_app.get("/").await;

    assert_eq!(response.status().as_u16(), 302);
    assert_eq!(
        response.headers().get("Location").unwrap().to_str().unwrap(),
        "/api"
    );
}

#[tokio::test]
async fn unknown_paths_return_a_json_404() {
    let test_app = TestApp::spawn_app().await;

    let response = test_app.get("/channels").await;

    assert_eq!(response.status().as_u16(), 404);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "error": "Not Found" }));
}

#[tokio::test]
async fn read_endpoints_answer_head_requests() {
    let test_app = TestApp::spawn_app().await;

    for path in ["/subscribers", "/subscribers/name", "/health_check"] {
        let response = test_app
            .api_client
            .head(&format!("{}{}", test_app.address, path))
            .send()
            .await
            .expect("Failed to execute request.");

        assert_eq!(
            200,
            response.status().as_u16(),
            "HEAD {} did not succeed",
            path
        );
    }
}

#[tokio::test]
async fn unknown_docs_assets_return_a_json_404() {
    let test_app = TestApp::spawn_app().await;

    let response = test_app.get("/api/nope.js").await;

    assert_eq!(response.status().as_u16(), 404);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "error": "Not Found" }));
}
