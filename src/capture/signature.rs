//! Freehand signature pad
//!
//! Strokes are kept as ordered point sequences and flattened into a single
//! data-URL-encoded SVG image at the end of every stroke. Keeping the stroke
//! sequence (rather than only the flattened image) is what makes
//! [`SignaturePad::undo_stroke`] possible.

use base64::{engine::general_purpose::STANDARD, Engine};
use std::fmt::Write;

/// A single pointer position on the drawing surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Whether a press-move-release gesture is in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawState {
    NotDrawing,
    Drawing,
}

/// The signature drawing surface. Strokes accumulate until cleared.
pub struct SignaturePad {
    width: u32,
    height: u32,
    strokes: Vec<Vec<Point>>,
    current: Vec<Point>,
    state: DrawState,
    signature: String,
}

impl SignaturePad {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            strokes: Vec::new(),
            current: Vec::new(),
            state: DrawState::NotDrawing,
            signature: String::new(),
        }
    }

    pub fn state(&self) -> DrawState {
        self.state
    }

    /// The flattened signature as a data URL, empty until a stroke is drawn
    pub fn signature(&self) -> &str {
        &self.signature
    }

    pub fn is_empty(&self) -> bool {
        self.signature.is_empty()
    }

    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    /// Begin a new stroke at the given position
    pub fn press(&mut self, x: f32, y: f32) {
        self.current.clear();
        self.current.push(Point { x, y });
        self.state = DrawState::Drawing;
    }

    /// Extend the current stroke. Ignored unless a stroke is in progress.
    pub fn drag(&mut self, x: f32, y: f32) {
        if self.state == DrawState::Drawing {
            self.current.push(Point { x, y });
        }
    }

    /// End the current stroke and refresh the flattened signature
    pub fn release(&mut self) {
        if self.state != DrawState::Drawing {
            return;
        }
        self.state = DrawState::NotDrawing;
        self.strokes.push(std::mem::take(&mut self.current));
        self.signature = self.flatten();
    }

    /// The pointer leaving the surface ends the stroke like a release
    pub fn leave(&mut self) {
        self.release();
    }

    /// Remove the most recent stroke and refresh the flattened signature
    pub fn undo_stroke(&mut self) {
        if self.strokes.pop().is_some() {
            self.signature = if self.strokes.is_empty() {
                String::new()
            } else {
                self.flatten()
            };
        }
    }

    /// Wipe the surface and reset the held signature to empty
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.current.clear();
        self.state = DrawState::NotDrawing;
        self.signature = String::new();
    }

    /// Flatten all strokes into a single data-URL-encoded SVG image
    fn flatten(&self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            self.width, self.height, self.width, self.height
        );
        for stroke in &self.strokes {
            let mut points = String::new();
            for p in stroke {
                if !points.is_empty() {
                    points.push(' ');
                }
                let _ = write!(points, "{},{}", p.x, p.y);
            }
            let _ = write!(
                svg,
                r##"<polyline points="{}" fill="none" stroke="#ffffff" stroke-width="2" stroke-linecap="round"/>"##,
                points
            );
        }
        svg.push_str("</svg>");

        format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
    }
}
