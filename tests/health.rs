use canteen_api::routes::health::health_check;

#[tokio::test]
async fn health_check_returns_ok() {
    let response = health_check().await;
    assert_eq!(response.0.status, "OK");
    assert_eq!(response.0.message, "Canteen API is running");
}
