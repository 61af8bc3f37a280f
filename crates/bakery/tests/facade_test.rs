use bakery::client::{HttpError, HttpTransport, SubmissionPayload};
use bakery::{
    FileField, ImageClient, StatusMessage, SubmissionController, SubmissionState, TechStack,
};
use mockall::mock;

mock! {
    Transport {}

    impl HttpTransport for Transport {
        async fn post_form(
            &self,
            endpoint: &str,
            payload: &SubmissionPayload,
        ) -> Result<String, HttpError>;
    }
}

#[test]
fn core_types_are_reachable_from_the_root() {
    let form = bakery::SubmissionForm::new();
    assert_eq!(form.tech_stack(), TechStack::Python38);
    assert_eq!(form.executable_file(), "app.py");

    let config = bakery::BakeryConfig::default();
    assert_eq!(
        config.service.endpoint,
        "http://127.0.0.1:8000/create_docker_image/"
    );
}

#[tokio::test]
async fn full_submission_through_the_facade() {
    let mut mock = MockTransport::new();
    mock.expect_post_form()
        .withf(|_, payload| payload.tech_stack == "node:18")
        .returning(|_, _| Ok(r#"{"image_path": "/images/site.tar"}"#.to_owned()));

    let client = ImageClient::with_transport("http://localhost/create_docker_image/", mock);
    let mut controller = SubmissionController::with_client(client);

    controller
        .form_mut()
        .select_project(FileField::new("site.zip", b"PK".to_vec()));
    controller.form_mut().set_tech_stack(TechStack::Node18);

    let state = controller.submit().await;

    assert_eq!(state, SubmissionState::Succeeded);
    assert!(matches!(
        controller.status(),
        Some(StatusMessage::Success(s)) if s.contains("/images/site.tar")
    ));
}
