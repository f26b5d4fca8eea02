//! Color and cursor conversions.

use egui::{Color32, CursorIcon};
use imageresize_core::{CursorHint, Rgba};

/// Convert a core color into an egui color.
pub fn to_color32(color: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.alpha_u8())
}

/// The egui cursor matching a handle's cursor hint.
pub fn cursor_icon(hint: CursorHint) -> CursorIcon {
    match hint {
        CursorHint::VerticalResize => CursorIcon::ResizeVertical,
        CursorHint::HorizontalResize => CursorIcon::ResizeHorizontal,
        CursorHint::NeswResize => CursorIcon::ResizeNeSw,
        CursorHint::NwseResize => CursorIcon::ResizeNwSe,
    }
}
