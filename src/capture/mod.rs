//! Client-side capture form state model
//!
//! The kiosk front end drives these types: a photo-capture state machine
//! backed by a [`Camera`] device, a freehand [`SignaturePad`], and the
//! [`CaptureForm`] packaging both with the text fields into one registration
//! payload. Device access and pointer input come from the embedding UI;
//! nothing here talks to hardware directly.

pub mod client;
pub mod form;
pub mod photo;
pub mod signature;

pub use client::{HttpRegistrationClient, RegistrationApi, RegistrationError};
pub use form::{CaptureForm, Notice};
pub use photo::{Camera, CameraError, PhotoCapture, PhotoState};
pub use signature::{DrawState, SignaturePad};
