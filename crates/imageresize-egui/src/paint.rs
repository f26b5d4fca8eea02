//! Painting of the selection overlay.

use egui::{CornerRadius, Painter, Pos2, Shape, Stroke};
use imageresize_core::OverlayNode;

use crate::colors::to_color32;
use crate::dash;

/// Map a container-relative kurbo rect into egui screen space.
///
/// `origin` is the container's top-left corner on screen.
pub fn to_egui_rect(rect: kurbo::Rect, origin: Pos2) -> egui::Rect {
    egui::Rect::from_min_max(
        Pos2::new(origin.x + rect.x0 as f32, origin.y + rect.y0 as f32),
        Pos2::new(origin.x + rect.x1 as f32, origin.y + rect.y1 as f32),
    )
}

/// Draw the overlay body, its dashed border and the eight handles.
pub fn paint_overlay(painter: &Painter, node: &OverlayNode, origin: Pos2) {
    let style = &node.style;
    let rect = to_egui_rect(node.bounds, origin);

    painter.rect_filled(rect, CornerRadius::ZERO, to_color32(style.fill_color));

    let border = Stroke::new(style.border_width as f32, to_color32(style.border_color));
    if style.border_dashed {
        let outline = [
            rect.left_top(),
            rect.right_top(),
            rect.right_bottom(),
            rect.left_bottom(),
            rect.left_top(),
        ];
        painter.extend(Shape::dashed_line(&outline, border, dash::LENGTH, dash::GAP));
    } else {
        painter.rect_stroke(rect, CornerRadius::ZERO, border, egui::StrokeKind::Inside);
    }

    let radius = (style.handle_size / 2.0) as f32;
    let fill = to_color32(style.handle_color);
    let ring = Stroke::new(
        style.handle_border_width as f32,
        to_color32(style.handle_border_color),
    );
    for handle in &node.handles {
        let center = Pos2::new(
            origin.x + handle.anchor.x as f32,
            origin.y + handle.anchor.y as f32,
        );
        painter.circle_filled(center, radius, fill);
        painter.circle_stroke(center, radius, ring);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_egui_rect_offsets_by_origin() {
        let rect = to_egui_rect(kurbo::Rect::new(10.0, 20.0, 110.0, 70.0), Pos2::new(5.0, 5.0));
        assert_eq!(rect.min, Pos2::new(15.0, 25.0));
        assert_eq!(rect.max, Pos2::new(115.0, 75.0));
    }
}
