use super::*;

#[test]
fn endpoint_joins_api_base() {
    assert_eq!(BrowserTransport::new("/api").endpoint(), "/api/auth/session");
    assert_eq!(BrowserTransport::new("https://api.example.com/").endpoint(), "https://api.example.com/auth/session");
}

#[tokio::test]
async fn fetch_outside_browser_is_a_transport_failure() {
    if cfg!(feature = "hydrate") {
        return;
    }
    let err = BrowserTransport::new("/api").fetch_session().await.unwrap_err();
    assert!(matches!(err, VerifyError::Transport(_)));
}
