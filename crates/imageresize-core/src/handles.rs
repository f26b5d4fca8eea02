//! Resize handle definitions and layout.

use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

use crate::geometry::Direction;

/// Pointer cursor shown while hovering a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CursorHint {
    /// North/south handles.
    VerticalResize,
    /// East/west handles.
    HorizontalResize,
    /// North-east/south-west handles.
    NeswResize,
    /// North-west/south-east handles.
    NwseResize,
}

impl CursorHint {
    /// CSS `cursor` keyword.
    pub fn css_name(self) -> &'static str {
        match self {
            CursorHint::VerticalResize => "ns-resize",
            CursorHint::HorizontalResize => "ew-resize",
            CursorHint::NeswResize => "nesw-resize",
            CursorHint::NwseResize => "nwse-resize",
        }
    }
}

/// Static description of one of the eight handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandleDescriptor {
    pub direction: Direction,
    /// Horizontal anchor as a percentage of the box width.
    pub anchor_x_percent: u8,
    /// Vertical anchor as a percentage of the box height.
    pub anchor_y_percent: u8,
    pub cursor: CursorHint,
}

impl HandleDescriptor {
    const fn new(direction: Direction, x: u8, y: u8, cursor: CursorHint) -> Self {
        Self {
            direction,
            anchor_x_percent: x,
            anchor_y_percent: y,
            cursor,
        }
    }

    /// Anchor point of this handle on `bounds`.
    pub fn anchor(&self, bounds: Rect) -> Point {
        Point::new(
            bounds.x0 + bounds.width() * f64::from(self.anchor_x_percent) / 100.0,
            bounds.y0 + bounds.height() * f64::from(self.anchor_y_percent) / 100.0,
        )
    }
}

/// The eight handles, clockwise from the top-left corner.
pub const HANDLE_DESCRIPTORS: [HandleDescriptor; 8] = [
    HandleDescriptor::new(Direction::NW, 0, 0, CursorHint::NwseResize),
    HandleDescriptor::new(Direction::N, 50, 0, CursorHint::VerticalResize),
    HandleDescriptor::new(Direction::NE, 100, 0, CursorHint::NeswResize),
    HandleDescriptor::new(Direction::E, 100, 50, CursorHint::HorizontalResize),
    HandleDescriptor::new(Direction::SE, 100, 100, CursorHint::NwseResize),
    HandleDescriptor::new(Direction::S, 50, 100, CursorHint::VerticalResize),
    HandleDescriptor::new(Direction::SW, 0, 100, CursorHint::NeswResize),
    HandleDescriptor::new(Direction::W, 0, 50, CursorHint::HorizontalResize),
];

/// Look up the descriptor for a direction.
pub fn descriptor(direction: Direction) -> &'static HandleDescriptor {
    let index = match direction {
        Direction::NW => 0,
        Direction::N => 1,
        Direction::NE => 2,
        Direction::E => 3,
        Direction::SE => 4,
        Direction::S => 5,
        Direction::SW => 6,
        Direction::W => 7,
    };
    &HANDLE_DESCRIPTORS[index]
}

/// A handle laid out on a concrete box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    pub direction: Direction,
    /// Point on the box border the handle is centered on.
    pub anchor: Point,
    /// Square occupied by the handle.
    pub bounds: Rect,
    pub cursor: CursorHint,
}

impl Handle {
    /// Check if a point hits this handle's square.
    pub fn hit_test(&self, point: Point) -> bool {
        // Inclusive on all four edges, unlike `Rect::contains`.
        point.x >= self.bounds.x0
            && point.x <= self.bounds.x1
            && point.y >= self.bounds.y0
            && point.y <= self.bounds.y1
    }
}

/// Place the eight handles on `bounds`, each `handle_size` wide and centered
/// on its anchor.
pub fn layout_handles(bounds: Rect, handle_size: f64) -> [Handle; 8] {
    let half = Vec2::new(handle_size / 2.0, handle_size / 2.0);
    HANDLE_DESCRIPTORS.map(|desc| {
        let anchor = desc.anchor(bounds);
        Handle {
            direction: desc.direction,
            anchor,
            bounds: Rect::from_points(anchor - half, anchor + half),
            cursor: desc.cursor,
        }
    })
}

/// Find which handle (if any) is under `point`.
pub fn hit_test_handles(handles: &[Handle], point: Point) -> Option<Direction> {
    handles
        .iter()
        .find(|handle| handle.hit_test(point))
        .map(|handle| handle.direction)
}
