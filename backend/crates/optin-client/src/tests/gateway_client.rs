use crate::GatewayClient;

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = GatewayClient::new("http://localhost:8000/");
    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = GatewayClient::new("http://localhost:8000");
    assert_eq!(client.base_url, "http://localhost:8000");
}
