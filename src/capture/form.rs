//! Capture form state and submission lifecycle

use crate::capture::client::RegistrationApi;
use crate::capture::photo::{Camera, PhotoCapture};
use crate::capture::signature::SignaturePad;
use crate::models::visitor::RegisterVisitor;

// Drawing surface size matching the kiosk layout
const SIGNATURE_WIDTH: u32 = 300;
const SIGNATURE_HEIGHT: u32 = 80;

/// User-facing outcome notice shown after a submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

/// The visitor check-in form: four field states and one submit action.
///
/// On a successful submission every field resets to its initial empty/idle
/// state, ready for the next visitor. On any failure the field values are
/// preserved so the visitor can retry without re-entering data.
pub struct CaptureForm<C: Camera> {
    name: String,
    reason: String,
    photo: PhotoCapture<C>,
    signature: SignaturePad,
    notice: Option<Notice>,
}

impl<C: Camera> CaptureForm<C> {
    pub fn new(camera: C) -> Self {
        Self {
            name: String::new(),
            reason: String::new(),
            photo: PhotoCapture::new(camera),
            signature: SignaturePad::new(SIGNATURE_WIDTH, SIGNATURE_HEIGHT),
            notice: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_reason(&mut self, reason: impl Into<String>) {
        self.reason = reason.into();
    }

    /// The photo control, for the embedding UI to drive
    pub fn photo(&self) -> &PhotoCapture<C> {
        &self.photo
    }

    pub fn photo_mut(&mut self) -> &mut PhotoCapture<C> {
        &mut self.photo
    }

    /// The signature pad, for the embedding UI to drive
    pub fn signature(&self) -> &SignaturePad {
        &self.signature
    }

    pub fn signature_mut(&mut self) -> &mut SignaturePad {
        &mut self.signature
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Whether both required text fields are filled in
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.reason.is_empty()
    }

    /// Package the current field values into one submission payload
    fn payload(&self) -> RegisterVisitor {
        RegisterVisitor {
            name: self.name.clone(),
            reason: self.reason.clone(),
            photo: self.photo.photo().map(str::to_string),
            signature: if self.signature.is_empty() {
                None
            } else {
                Some(self.signature.signature().to_string())
            },
        }
    }

    /// Submit the current field values as one record
    pub async fn submit(&mut self, api: &dyn RegistrationApi) {
        if !self.is_complete() {
            self.notice = Some(Notice::Error("Name and reason are required.".to_string()));
            return;
        }

        match api.register(&self.payload()).await {
            Ok(message) => {
                self.reset();
                self.notice = Some(Notice::Success(message));
            }
            Err(e) => {
                self.notice = Some(Notice::Error(e.to_string()));
            }
        }
    }

    /// Clear every field back to its initial empty/idle state
    fn reset(&mut self) {
        self.name.clear();
        self.reason.clear();
        self.photo.reset();
        self.signature.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::client::{MockRegistrationApi, RegistrationError};
    use crate::capture::photo::MockCamera;

    fn empty_form() -> CaptureForm<MockCamera> {
        CaptureForm::new(MockCamera::new())
    }

    #[tokio::test]
    async fn successful_submission_resets_all_fields() {
        let mut api = MockRegistrationApi::new();
        api.expect_register()
            .withf(|v| {
                v.name == "Asha Rao"
                    && v.reason == "Delivery"
                    && v.photo.is_none()
                    && v.signature.is_none()
            })
            .times(1)
            .returning(|_| Ok("Visitor registered successfully".to_string()));

        let mut form = empty_form();
        form.set_name("Asha Rao");
        form.set_reason("Delivery");
        form.submit(&api).await;

        assert_eq!(
            form.notice(),
            Some(&Notice::Success("Visitor registered successfully".to_string()))
        );
        assert!(form.name().is_empty());
        assert!(form.reason().is_empty());
        assert!(form.signature().is_empty());
        assert!(form.photo().photo().is_none());
    }

    #[tokio::test]
    async fn failed_submission_preserves_field_values() {
        let mut api = MockRegistrationApi::new();
        api.expect_register().times(1).returning(|_| {
            Err(RegistrationError::Failed {
                message: "Server error".to_string(),
                detail: Some("connection refused".to_string()),
            })
        });

        let mut form = empty_form();
        form.set_name("Asha Rao");
        form.set_reason("Delivery");
        form.submit(&api).await;

        assert!(matches!(form.notice(), Some(Notice::Error(_))));
        assert_eq!(form.name(), "Asha Rao");
        assert_eq!(form.reason(), "Delivery");
    }

    #[tokio::test]
    async fn incomplete_form_never_submits() {
        // No expectations: a register call would fail the test
        let api = MockRegistrationApi::new();

        let mut form = empty_form();
        form.set_reason("Meeting");
        form.submit(&api).await;

        assert!(matches!(form.notice(), Some(Notice::Error(_))));
        assert_eq!(form.reason(), "Meeting");
    }

    #[test]
    fn captured_photo_and_signature_ride_along() {
        let mut camera = MockCamera::new();
        camera.expect_start().returning(|| Ok(()));
        camera
            .expect_grab_frame()
            .returning(|| Ok("data:image/jpeg;base64,abcd".to_string()));
        camera.expect_stop().return_const(());

        let mut api = MockRegistrationApi::new();
        api.expect_register()
            .withf(|v| {
                v.photo.as_deref() == Some("data:image/jpeg;base64,abcd")
                    && v.signature
                        .as_deref()
                        .map_or(false, |s| s.starts_with("data:image/svg+xml;base64,"))
            })
            .times(1)
            .returning(|_| Ok("Visitor registered successfully".to_string()));

        let mut form = CaptureForm::new(camera);
        form.set_name("Asha Rao");
        form.set_reason("Delivery");
        form.photo_mut().start();
        form.photo_mut().capture();
        form.signature_mut().press(5.0, 5.0);
        form.signature_mut().drag(40.0, 12.0);
        form.signature_mut().release();

        tokio_test::block_on(form.submit(&api));

        assert!(form.photo().photo().is_none());
        assert!(form.signature().is_empty());
    }
}
