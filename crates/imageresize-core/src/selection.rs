//! Image selection state machine.

use kurbo::Point;

use crate::config::OverlayStyle;
use crate::host::{Host, ImageId};
use crate::overlay::OverlayController;

/// Which image, if any, is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    Selected(ImageId),
}

impl SelectionState {
    /// Get the selected image, if any.
    pub fn selected(&self) -> Option<ImageId> {
        match self {
            Self::Idle => None,
            Self::Selected(id) => Some(*id),
        }
    }
}

/// Drives the overlay from click and press notifications.
///
/// At most one image is selected at a time. The overlay is attached exactly
/// while the state is [`SelectionState::Selected`].
#[derive(Debug, Clone)]
pub struct SelectionController {
    state: SelectionState,
    overlay: OverlayController,
}

impl SelectionController {
    /// Create a new selection controller with nothing selected.
    pub fn new(style: OverlayStyle) -> Self {
        Self {
            state: SelectionState::Idle,
            overlay: OverlayController::new(style),
        }
    }

    /// Get the current selection state.
    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Get the selected image, if any.
    pub fn selected(&self) -> Option<ImageId> {
        self.state.selected()
    }

    /// Get the overlay that follows the selection.
    pub fn overlay(&self) -> &OverlayController {
        &self.overlay
    }

    /// Get mutable access to the overlay, for repositioning during a drag.
    pub fn overlay_mut(&mut self) -> &mut OverlayController {
        &mut self.overlay
    }

    /// Select `image`. Returns `false` if it was already selected.
    pub fn select(&mut self, host: &mut dyn Host, image: ImageId) -> bool {
        if self.state == SelectionState::Selected(image) {
            return false;
        }
        log::debug!("Selecting image {image}");
        self.overlay.attach(host, image);
        self.state = SelectionState::Selected(image);
        true
    }

    /// Drop the selection. Returns `false` if nothing was selected.
    pub fn deselect(&mut self, host: &mut dyn Host) -> bool {
        let SelectionState::Selected(image) = self.state else {
            return false;
        };
        log::debug!("Deselecting image {image}");
        self.overlay.detach(host);
        self.state = SelectionState::Idle;
        true
    }

    /// A click landed in the surface. `target` is the image under it, if any.
    pub fn handle_click(&mut self, host: &mut dyn Host, target: Option<ImageId>) {
        match target {
            Some(image) => {
                self.select(host, image);
            }
            None => {
                self.deselect(host);
            }
        }
    }

    /// The pointer was pressed anywhere in the document. Pressing outside
    /// both the overlay and the selected image drops the selection.
    pub fn handle_press(&mut self, host: &mut dyn Host, position: Point, target: Option<ImageId>) {
        let Some(selected) = self.selected() else {
            return;
        };
        if target == Some(selected) || self.overlay.contains(position) {
            return;
        }
        self.deselect(host);
    }

    /// The surface scrolled or reflowed.
    pub fn handle_scroll(&mut self, host: &mut dyn Host) {
        if self.selected().is_some() {
            self.overlay.reposition(host);
        }
    }

    /// An image was removed from the document.
    pub fn handle_image_removed(&mut self, host: &mut dyn Host, image: ImageId) {
        if self.selected() == Some(image) {
            self.deselect(host);
        }
    }
}
