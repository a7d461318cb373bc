use crate::helpers::{acknowledgment, advance_clock, spawn_page, valid_fields, TestPage};
use std::time::Duration;
use studio_contact::configuration::get_configuration;
use studio_contact::domain::FormField;
use studio_contact::status::SubmissionStatus;

#[test]
fn default_configuration_hides_success_after_5_seconds() {
    let settings = get_configuration().expect("Failed to read configuration.");

    assert_eq!(settings.form.success_display(), Duration::from_secs(5));
    assert_eq!(settings.form.submit_label, "Send Message");
    assert_eq!(settings.form.sending_label, "Sending...");
}

#[tokio::test]
async fn forms_on_the_same_page_are_independent() {
    let mut app = spawn_page().await;
    TestPage::form_backend()
        .respond_with(acknowledgment(200, true))
        .expect(1)
        .mount(&app.form_server)
        .await;
    let other = app.page.attach_form();
    other.fill(valid_fields());

    let status = app.form.submit_with(valid_fields()).await;

    assert_eq!(status, SubmissionStatus::success());
    assert_eq!(other.status(), SubmissionStatus::Idle);
    assert!(!other.fields().is_cleared());
    assert_eq!(app.page.forms().len(), 2);
}

#[tokio::test]
async fn a_new_attempt_cancels_the_pending_success_hide() {
    let app = spawn_page().await;
    TestPage::form_backend()
        .respond_with(acknowledgment(200, true))
        .expect(1)
        .mount(&app.form_server)
        .await;
    app.form.submit_with(valid_fields()).await;
    assert!(app.form.has_pending_hide());

    // The form was cleared, so this attempt fails validation.
    let status = app.form.submit().await;
    assert!(status.is_failure());
    assert!(!app.form.has_pending_hide());

    tokio::time::pause();
    advance_clock(Duration::from_secs(10)).await;
    assert_eq!(app.form.status(), status);
}

#[tokio::test]
async fn tearing_down_the_page_cancels_pending_hides() {
    let app = spawn_page().await;
    TestPage::form_backend()
        .respond_with(acknowledgment(200, true))
        .expect(1)
        .mount(&app.form_server)
        .await;
    let form = app.form.clone();
    form.submit_with(valid_fields()).await;

    app.page.teardown();

    assert!(!form.has_pending_hide());
    tokio::time::pause();
    advance_clock(Duration::from_secs(10)).await;
    assert_eq!(form.status(), SubmissionStatus::success());
    form.set_field(FormField::Message, "still usable");
}
