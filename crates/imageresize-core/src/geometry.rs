//! Drag-to-resize geometry.
//!
//! Pure functions turning a drag direction, the box captured when the drag
//! started and the pointer delta since then into the new box. Nothing here
//! touches a host or a rendering surface.

use std::fmt;
use std::str::FromStr;

use kurbo::{Rect, Size, Vec2};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest width or height a resize may produce.
pub const MIN_SIZE: f64 = 20.0;

/// Compass direction of a resize handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Direction {
    /// All directions, clockwise from north.
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    pub fn has_north(self) -> bool {
        matches!(self, Direction::N | Direction::NE | Direction::NW)
    }

    pub fn has_south(self) -> bool {
        matches!(self, Direction::S | Direction::SE | Direction::SW)
    }

    pub fn has_east(self) -> bool {
        matches!(self, Direction::E | Direction::NE | Direction::SE)
    }

    pub fn has_west(self) -> bool {
        matches!(self, Direction::W | Direction::NW | Direction::SW)
    }

    /// Whether this is a corner handle (moves both axes).
    pub fn is_corner(self) -> bool {
        (self.has_north() || self.has_south()) && (self.has_east() || self.has_west())
    }

    /// Short lowercase code, e.g. `"nw"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::N => "n",
            Direction::NE => "ne",
            Direction::E => "e",
            Direction::SE => "se",
            Direction::S => "s",
            Direction::SW => "sw",
            Direction::W => "w",
            Direction::NW => "nw",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a direction code is not one of the eight compass codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown handle direction: {0:?}")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseDirectionError(s.to_string()))
    }
}

/// Compute the box produced by dragging the `direction` handle by `delta`.
///
/// Only the axes named by `direction` change. West and north handles grow the
/// box when dragged away from its center, i.e. with a negative delta. The size
/// floor is applied last; the origin of `start` is kept.
pub fn resize_box(direction: Direction, start: Rect, delta: Vec2) -> Rect {
    let mut width = start.width();
    let mut height = start.height();

    if direction.has_east() {
        width = start.width() + delta.x;
    } else if direction.has_west() {
        width = start.width() - delta.x;
    }

    if direction.has_south() {
        height = start.height() + delta.y;
    } else if direction.has_north() {
        height = start.height() - delta.y;
    }

    Rect::from_origin_size(start.origin(), clamp_size(Size::new(width, height)))
}

/// Apply the [`MIN_SIZE`] floor to both axes.
pub fn clamp_size(size: Size) -> Size {
    Size::new(size.width.max(MIN_SIZE), size.height.max(MIN_SIZE))
}
