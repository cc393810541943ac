//! Pan gesture events delivered by the host.
//!
//! The host recognizes a pan on a node and reports it as a sequence of
//! events: one `Start`, any number of `Move`s carrying the cumulative
//! translation since `Start`, then `End` or `Cancel`.

/// A phase of a pan gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// The pointer went down and the node claimed the gesture.
    Start,
    /// The pointer moved. `dx`/`dy` are cumulative since `Start`, in px.
    Move {
        /// Horizontal translation since start.
        dx: f32,
        /// Vertical translation since start.
        dy: f32,
    },
    /// The pointer was released.
    End,
    /// The host terminated the gesture, for example because another
    /// responder took over.
    Cancel,
}

impl GestureEvent {
    /// Horizontal move.
    pub fn horizontal(dx: f32) -> Self {
        GestureEvent::Move { dx, dy: 0.0 }
    }

    /// Returns `true` for `End` and `Cancel`. Components treat both as a
    /// release.
    pub fn is_release(&self) -> bool {
        matches!(self, GestureEvent::End | GestureEvent::Cancel)
    }

    /// Short event name used in logs and dispatch errors.
    pub fn name(&self) -> &'static str {
        match self {
            GestureEvent::Start => "gesture_start",
            GestureEvent::Move { .. } => "gesture_move",
            GestureEvent::End => "gesture_end",
            GestureEvent::Cancel => "gesture_cancel",
        }
    }
}

/// Layout measurement reported through a node's `on_layout` handler.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct LayoutEvent {
    /// Left edge relative to the parent, px.
    pub x: f32,
    /// Top edge relative to the parent, px.
    pub y: f32,
    /// Measured width, px.
    pub width: f32,
    /// Measured height, px.
    pub height: f32,
}

impl LayoutEvent {
    /// A measurement at the origin.
    pub fn sized(width: f32, height: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }
}
