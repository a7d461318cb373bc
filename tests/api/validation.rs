use crate::helpers::{spawn_page, valid_fields};
use studio_contact::domain::FormField;
use studio_contact::status::SubmissionStatus;
use wiremock::matchers::any;
use wiremock::{Mock, ResponseTemplate};

const MISSING_FIELDS: &str =
    "Please fill in all required fields (First Name, Last Name, Email, Service, and Message).";
const INVALID_EMAIL: &str = "Please enter a valid email address.";

#[tokio::test]
async fn submit_fails_without_a_network_call_when_any_field_is_empty() {
    let app = spawn_page().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        // No request may reach the form backend.
        .expect(0)
        .mount(&app.form_server)
        .await;

    for field in FormField::ALL {
        for blank in ["", "  \t "] {
            let mut fields = valid_fields();
            fields.set(field, blank);

            let status = app.form.submit_with(fields.clone()).await;

            assert_eq!(
                status,
                SubmissionStatus::Failure(MISSING_FIELDS.into()),
                "The form did not fail validation when {} was {:?}.",
                field,
                blank
            );
            assert_eq!(app.form.fields(), fields, "Fields were modified");
            assert!(app.form.trigger().enabled);
            assert_eq!(app.form.trigger().label, "Send Message");
        }
    }
}

#[tokio::test]
async fn submit_fails_without_a_network_call_for_a_malformed_email() {
    let app = spawn_page().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.form_server)
        .await;

    let test_cases = vec![
        ("studio.example.com", "missing the @"),
        ("hello@studio", "missing a dot after the @"),
        ("hello@@studio.com", "two @ symbols"),
        ("hello there@studio.com", "whitespace in the local part"),
    ];
    for (email, description) in test_cases {
        let mut fields = valid_fields();
        fields.set(FormField::Email, email);

        let status = app.form.submit_with(fields).await;

        assert_eq!(
            status,
            SubmissionStatus::Failure(INVALID_EMAIL.into()),
            "The form accepted an email {}.",
            description
        );
        assert!(app.form.trigger().enabled);
    }
}

#[tokio::test]
async fn validation_failures_are_shown_immediately_in_red() {
    let app = spawn_page().await;

    app.form.submit().await;

    let region = app.form.status_region();
    assert!(region.visible);
    assert_eq!(region.text, MISSING_FIELDS);
    assert_eq!(region.classes(), vec!["bg-red-50", "text-red-700"]);
}

#[tokio::test]
async fn correcting_the_input_allows_a_resubmission() {
    let app = spawn_page().await;
    Mock::given(any())
        .respond_with(crate::helpers::acknowledgment(200, true))
        .expect(1)
        .mount(&app.form_server)
        .await;
    let mut fields = valid_fields();
    fields.set(FormField::Email, "not-an-email");
    assert!(app.form.submit_with(fields).await.is_failure());

    app.form.set_field(FormField::Email, "ursula@example.com");
    let status = app.form.submit().await;

    assert_eq!(status, SubmissionStatus::success());
}
