//! egui front end for imageresize overlays.
//!
//! - **Paint**: draws an [`OverlayNode`](imageresize_core::OverlayNode) (fill,
//!   dashed border, round handles)
//! - **Input**: turns egui pointer input into
//!   [`SurfaceEvent`](imageresize_core::SurfaceEvent)s
//! - **Colors**: conversions between core colors/cursors and egui types

pub mod colors;
pub mod input;
pub mod paint;

pub use colors::{cursor_icon, to_color32};
pub use input::collect_events;
pub use paint::{paint_overlay, to_egui_rect};

/// Dash pattern of the overlay border.
pub mod dash {
    /// Length of each dash, in points.
    pub const LENGTH: f32 = 4.0;
    /// Gap between dashes, in points.
    pub const GAP: f32 = 3.0;
}
