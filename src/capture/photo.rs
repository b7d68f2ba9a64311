//! Webcam photo capture state machine

use thiserror::Error;

/// Camera device failures, surfaced to the form as transient notices
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CameraError {
    #[error("Camera access was denied or is unavailable.")]
    Unavailable,

    #[error("Could not capture photo. Please try again.")]
    Frame,
}

/// Camera device abstraction. The production implementation wraps whatever
/// media backend the kiosk runs on; tests use a mock.
#[cfg_attr(test, mockall::automock)]
pub trait Camera {
    /// Begin streaming. Fails when access is denied or no device exists.
    fn start(&mut self) -> Result<(), CameraError>;

    /// Grab the current frame as a data-URL-encoded still image.
    fn grab_frame(&mut self) -> Result<String, CameraError>;

    /// Stop streaming and release the device.
    fn stop(&mut self);
}

/// Photo control state: no photo, camera streaming, or holding a still frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoState {
    Idle,
    Live,
    Captured(String),
}

/// The photo-capture control. Owns the camera device and keeps it open only
/// while [`PhotoState::Live`].
pub struct PhotoCapture<C: Camera> {
    camera: C,
    state: PhotoState,
    error: Option<String>,
}

impl<C: Camera> PhotoCapture<C> {
    pub fn new(camera: C) -> Self {
        Self {
            camera,
            state: PhotoState::Idle,
            error: None,
        }
    }

    pub fn state(&self) -> &PhotoState {
        &self.state
    }

    pub fn is_live(&self) -> bool {
        matches!(self.state, PhotoState::Live)
    }

    /// The held still frame, if one has been captured
    pub fn photo(&self) -> Option<&str> {
        match &self.state {
            PhotoState::Captured(data) => Some(data),
            _ => None,
        }
    }

    /// Last transient capture error, cleared by the next successful transition
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Turn the camera on. No-op unless idle.
    pub fn start(&mut self) {
        if self.state != PhotoState::Idle {
            return;
        }
        match self.camera.start() {
            Ok(()) => {
                self.state = PhotoState::Live;
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// Grab the current frame and hold it as the photo. No-op unless live.
    /// The camera is released whether or not the grab succeeds.
    pub fn capture(&mut self) {
        if self.state != PhotoState::Live {
            return;
        }
        let grabbed = self.camera.grab_frame();
        self.camera.stop();
        match grabbed {
            Ok(frame) => {
                self.state = PhotoState::Captured(frame);
                self.error = None;
            }
            Err(e) => {
                self.state = PhotoState::Idle;
                self.error = Some(e.to_string());
            }
        }
    }

    /// Turn the camera off without capturing. No-op unless live.
    pub fn cancel(&mut self) {
        if self.state != PhotoState::Live {
            return;
        }
        self.camera.stop();
        self.state = PhotoState::Idle;
        self.error = None;
    }

    /// Discard the held photo. No-op unless a photo is held.
    pub fn retake(&mut self) {
        if matches!(self.state, PhotoState::Captured(_)) {
            self.state = PhotoState::Idle;
        }
    }

    /// Reset to idle from any state, releasing the camera if it is streaming
    pub fn reset(&mut self) {
        if self.state == PhotoState::Live {
            self.camera.stop();
        }
        self.state = PhotoState::Idle;
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_holds_frame_and_releases_camera() {
        let mut camera = MockCamera::new();
        camera.expect_start().times(1).returning(|| Ok(()));
        camera
            .expect_grab_frame()
            .times(1)
            .returning(|| Ok("data:image/jpeg;base64,abcd".to_string()));
        camera.expect_stop().times(1).return_const(());

        let mut control = PhotoCapture::new(camera);
        control.start();
        assert!(control.is_live());

        control.capture();
        assert!(!control.is_live());
        assert_eq!(control.photo(), Some("data:image/jpeg;base64,abcd"));
        assert!(control.error().is_none());
    }

    #[test]
    fn denied_camera_reports_error_and_stays_idle() {
        let mut camera = MockCamera::new();
        camera
            .expect_start()
            .times(1)
            .returning(|| Err(CameraError::Unavailable));

        let mut control = PhotoCapture::new(camera);
        control.start();

        assert_eq!(control.state(), &PhotoState::Idle);
        assert_eq!(
            control.error(),
            Some("Camera access was denied or is unavailable.")
        );
    }

    #[test]
    fn failed_grab_releases_camera_and_returns_to_idle() {
        let mut camera = MockCamera::new();
        camera.expect_start().returning(|| Ok(()));
        camera
            .expect_grab_frame()
            .returning(|| Err(CameraError::Frame));
        camera.expect_stop().times(1).return_const(());

        let mut control = PhotoCapture::new(camera);
        control.start();
        control.capture();

        assert_eq!(control.state(), &PhotoState::Idle);
        assert!(control.photo().is_none());
        assert_eq!(control.error(), Some("Could not capture photo. Please try again."));
    }

    #[test]
    fn cancel_releases_camera_without_a_photo() {
        let mut camera = MockCamera::new();
        camera.expect_start().returning(|| Ok(()));
        camera.expect_stop().times(1).return_const(());

        let mut control = PhotoCapture::new(camera);
        control.start();
        control.cancel();

        assert_eq!(control.state(), &PhotoState::Idle);
        assert!(control.photo().is_none());
    }

    #[test]
    fn retake_discards_the_held_photo() {
        let mut camera = MockCamera::new();
        camera.expect_start().returning(|| Ok(()));
        camera
            .expect_grab_frame()
            .returning(|| Ok("data:image/jpeg;base64,abcd".to_string()));
        camera.expect_stop().return_const(());

        let mut control = PhotoCapture::new(camera);
        control.start();
        control.capture();
        assert!(control.photo().is_some());

        control.retake();
        assert_eq!(control.state(), &PhotoState::Idle);
        assert!(control.photo().is_none());
    }

    #[test]
    fn start_is_a_noop_while_live() {
        let mut camera = MockCamera::new();
        // A second device acquisition would fail this expectation
        camera.expect_start().times(1).returning(|| Ok(()));

        let mut control = PhotoCapture::new(camera);
        control.start();
        control.start();

        assert!(control.is_live());
    }

    #[test]
    fn capture_is_a_noop_while_idle() {
        let camera = MockCamera::new();

        let mut control = PhotoCapture::new(camera);
        control.capture();

        assert_eq!(control.state(), &PhotoState::Idle);
    }
}
