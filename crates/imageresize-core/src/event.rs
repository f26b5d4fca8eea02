//! Surface events fed into the resizer by the host.

use kurbo::Point;
use serde::{Deserialize, Serialize};

use crate::host::ImageId;

/// Input the host forwards from its editable surface.
///
/// Positions are in the same coordinate space as
/// [`Host::bounding_box`](crate::host::Host::bounding_box).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SurfaceEvent {
    /// Pointer pressed. `target` is the image under the pointer, if any.
    PointerDown {
        position: Point,
        target: Option<ImageId>,
    },
    /// Pointer moved. Delivered from anywhere while the pointer is captured.
    PointerMove { position: Point },
    /// Pointer released.
    PointerUp { position: Point },
    /// A click inside the editable region.
    Click {
        position: Point,
        target: Option<ImageId>,
    },
    /// The editable region scrolled.
    Scroll,
    /// The surface was resized or its content reflowed.
    Resize,
    /// An image was removed from the document.
    ImageRemoved(ImageId),
}

/// Whether the resizer handled an event.
///
/// A consumed event must not propagate to the host's own handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    Consumed,
    Ignored,
}

impl EventResponse {
    /// Check if the event must stop propagating.
    pub fn is_consumed(self) -> bool {
        self == EventResponse::Consumed
    }
}
