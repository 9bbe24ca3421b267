use serde_json::json;

use crate::helpers::{assert_submission_response, Relay, TestApp};

const ACCEPTED: &str =
    "Thank you for subscribing! You will receive updates about our beta program and new features.";
const INVALID_EMAIL: &str = "Please enter a valid email address.";
const SEND_FAILED: &str =
    "Sorry, there was an error processing your subscription. Please try again later.";
const UNEXPECTED: &str = "An error occurred. Please try again later.";

#[tokio::test]
async fn newsletter_returns_a_200_for_a_valid_email() {
    let app = TestApp::spawn().await;

    let response = app.post_newsletter(&json!({ "email": "ana@x.com" })).await;

    assert_submission_response(response, 200, true, ACCEPTED).await;
    let emails = app.sent_emails().await;
    assert_eq!(emails.len(), 1);
    assert!(emails[0].contains("Subject: New Newsletter Subscription - Unified Cache Optimizer"));
}

#[tokio::test]
async fn newsletter_accepts_form_encoded_data() {
    let app = TestApp::spawn().await;

    let response = app
        .post_raw(
            "/api/newsletter",
            "application/x-www-form-urlencoded",
            "email=ursula_le_guin%40gmail.com",
        )
        .await;

    assert_submission_response(response, 200, true, ACCEPTED).await;
}

#[tokio::test]
async fn newsletter_returns_a_400_for_an_invalid_email() {
    let app = TestApp::spawn().await;
    let test_cases = vec![
        (json!({ "email": "not-an-email" }), "not an email"),
        (json!({ "email": "" }), "empty email"),
        (json!({ "email": "   " }), "blank email"),
        (json!({}), "missing email"),
    ];

    for (body, description) in test_cases {
        let response = app.post_newsletter(&body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload was {description}"
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body, json!({ "success": false, "message": INVALID_EMAIL }));
    }
    assert!(app.sent_emails().await.is_empty());
}

#[tokio::test]
async fn newsletter_returns_a_500_when_the_relay_fails() {
    let app = TestApp::spawn_with(Relay::Failing).await;

    let response = app.post_newsletter(&json!({ "email": "ana@x.com" })).await;

    assert_submission_response(response, 500, false, SEND_FAILED).await;
}

#[tokio::test]
async fn newsletter_returns_a_500_without_a_credential() {
    let app = TestApp::spawn_with(Relay::NoCredential).await;

    let response = app.post_newsletter(&json!({ "email": "ana@x.com" })).await;

    assert_submission_response(response, 500, false, SEND_FAILED).await;
}

#[tokio::test]
async fn newsletter_returns_a_500_for_an_unreadable_body() {
    let app = TestApp::spawn().await;

    let response = app
        .post_raw("/api/newsletter", "application/json", "[\"ana@x.com\"")
        .await;

    assert_submission_response(response, 500, false, UNEXPECTED).await;
}

#[tokio::test]
async fn newsletter_returns_a_400_for_a_null_json_body() {
    let app = TestApp::spawn().await;

    let response = app
        .post_raw("/api/newsletter", "application/json", "null")
        .await;

    assert_submission_response(response, 400, false, INVALID_EMAIL).await;
    assert!(app.sent_emails().await.is_empty());
}
