use super::*;
use crate::state::form::{FieldKind, FormField};
use crate::test_helpers::{MockReply, MockTransport};
use serde_json::json;

fn submission() -> FormSubmission {
    let fields = vec![
        FormField::new("name", FieldKind::Text, "Ada").required(),
        FormField::new("email", FieldKind::Email, "ada@example.com").required(),
    ];
    FormSubmission::from_fields(&fields, "2024-05-01T12:00:00.000Z".into())
}

#[tokio::test]
async fn submit_posts_flat_record_with_token() {
    let transport = MockTransport::replying(MockReply::ok(""));
    let client = ContactClient::new(transport.clone(), "https://example.test/contact", "tok");

    client.submit(&submission()).await.unwrap();

    let calls = transport.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].url, "https://example.test/contact");
    assert_eq!(calls[0].bearer, "tok");
    assert_eq!(
        calls[0].body,
        json!({ "name": "Ada", "email": "ada@example.com", "timestamp": "2024-05-01T12:00:00.000Z" })
    );
}

#[tokio::test]
async fn submit_accepts_any_2xx_without_body() {
    let client = ContactClient::new(MockTransport::replying(MockReply::status(204)), "u", "t");
    assert!(client.submit(&submission()).await.is_ok());
}

#[tokio::test]
async fn submit_maps_non_2xx_to_api_response() {
    let client = ContactClient::new(MockTransport::replying(MockReply::status(500)), "u", "t");
    let err = client.submit(&submission()).await.unwrap_err();
    assert!(matches!(err, SiteError::ApiResponse { status: 500, .. }));
}

#[tokio::test]
async fn submit_passes_through_transport_failure() {
    let client = ContactClient::new(MockTransport::failing(), "u", "t");
    let err = client.submit(&submission()).await.unwrap_err();
    assert_eq!(err.error_code(), "E_API_REQUEST");
}

#[test]
fn from_config_uses_contact_endpoint_and_token() {
    let config = SiteConfig::from_vars(|key| match key {
        "SITE_BEARER_TOKEN" => Some("contact".into()),
        "SITE_CHAT_BEARER_TOKEN" => Some("chat".into()),
        _ => None,
    })
    .unwrap();
    let client = ContactClient::from_config(MockTransport::failing(), &config);
    assert_eq!(client.endpoint(), crate::config::DEFAULT_API_ENDPOINT);
    assert_eq!(client.bearer_token, "contact");
}
