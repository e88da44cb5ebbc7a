//! # Emission Contract
//!
//! The engine never draws anything. Each operation returns the text the
//! presentation layer should show, and [`Presenter`] is the seam a
//! front end implements to receive it:
//!
//! - [`Render`] - display text plus note text (`render(display, note)`)
//! - [`StatusUpdate`] - safe-division status label and style (`renderStatus(label, style)`)
//!
//! ## Example
//!
//! ```rust
//! use calc_core::engine::Engine;
//! use calc_core::keys::Key;
//! use calc_core::render::{Emission, RecordingPresenter};
//!
//! let mut engine = Engine::new();
//! let mut presenter = RecordingPresenter::default();
//!
//! for key in "7+3=".chars() {
//!     engine.dispatch(Key::from_char(key)?, &mut presenter)?;
//! }
//!
//! assert_eq!(presenter.last_display(), Some("10"));
//! # Ok::<(), calc_core::errors::CalcError>(())
//! ```

use serde::{Deserialize, Serialize};

/// Display and note text for the calculator screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Render {
    /// Main display line
    pub display: String,

    /// Secondary note line (empty when there is nothing to say)
    pub note: String,
}

impl Render {
    pub fn new(display: impl Into<String>, note: impl Into<String>) -> Self {
        Render {
            display: display.into(),
            note: note.into(),
        }
    }

    /// Display text with an empty note
    pub fn display_only(display: impl Into<String>) -> Self {
        Render::new(display, "")
    }
}

/// Visual state of the safe-division status indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusStyle {
    Enabled,
    Disabled,
}

impl StatusStyle {
    /// Label shown next to the indicator
    pub fn label(&self) -> &'static str {
        match self {
            StatusStyle::Enabled => "Enabled",
            StatusStyle::Disabled => "Disabled",
        }
    }
}

impl From<bool> for StatusStyle {
    fn from(enabled: bool) -> Self {
        if enabled {
            StatusStyle::Enabled
        } else {
            StatusStyle::Disabled
        }
    }
}

/// Safe-division status indicator update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub label: String,
    pub style: StatusStyle,
}

impl From<StatusStyle> for StatusUpdate {
    fn from(style: StatusStyle) -> Self {
        StatusUpdate {
            label: style.label().to_string(),
            style,
        }
    }
}

/// Everything a safe-division toggle emits: the status indicator first,
/// then the screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeChange {
    pub status: StatusUpdate,
    pub render: Render,
}

/// A single emission, in the order the engine produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Emission {
    Render(Render),
    Status(StatusUpdate),
}

/// Receiver for engine output, implemented by each front end.
pub trait Presenter {
    /// Write display and note text to the screen.
    fn render(&mut self, render: &Render);

    /// Update the safe-division status indicator.
    fn render_status(&mut self, status: &StatusUpdate);
}

/// Presenter that keeps every emission in order.
///
/// Used by tests and by front ends that replay or serialize output.
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    pub emissions: Vec<Emission>,
}

impl RecordingPresenter {
    /// Most recent display text, if anything has been rendered
    pub fn last_display(&self) -> Option<&str> {
        self.last_render().map(|r| r.display.as_str())
    }

    /// Most recent screen render
    pub fn last_render(&self) -> Option<&Render> {
        self.emissions.iter().rev().find_map(|e| match e {
            Emission::Render(r) => Some(r),
            Emission::Status(_) => None,
        })
    }

    /// Most recent status update
    pub fn last_status(&self) -> Option<&StatusUpdate> {
        self.emissions.iter().rev().find_map(|e| match e {
            Emission::Status(s) => Some(s),
            Emission::Render(_) => None,
        })
    }

    /// Take the recorded emissions, leaving the recorder empty
    pub fn drain(&mut self) -> Vec<Emission> {
        std::mem::take(&mut self.emissions)
    }
}

impl Presenter for RecordingPresenter {
    fn render(&mut self, render: &Render) {
        self.emissions.push(Emission::Render(render.clone()));
    }

    fn render_status(&mut self, status: &StatusUpdate) {
        self.emissions.push(Emission::Status(status.clone()));
    }
}
