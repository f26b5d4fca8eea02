//! Event routing between the host surface, the selection and drags.

use kurbo::Point;

use crate::config::{ConfigError, ResizerConfig};
use crate::drag::{DragSession, DragUpdate};
use crate::event::{EventResponse, SurfaceEvent};
use crate::handles::{CursorHint, descriptor};
use crate::host::{ElementRef, Host, ImageId};
use crate::selection::SelectionController;

/// Image resizing attached to one editing surface.
///
/// The host forwards its surface events through [`ImageResizer::handle_event`]
/// and stops propagation of every event reported as consumed.
#[derive(Debug)]
pub struct ImageResizer {
    config: ResizerConfig,
    selection: SelectionController,
    drag: Option<DragSession>,
    /// Set when a drag ends; the click synthesized from that gesture is
    /// dropped.
    swallow_click: bool,
}

impl ImageResizer {
    /// Create a new resizer, rejecting a configuration that fails
    /// [`ResizerConfig::validate`].
    pub fn new(config: ResizerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    /// Build a resizer from a JSON options object.
    pub fn from_json(options: &str) -> Result<Self, ConfigError> {
        Ok(Self::with_valid_config(ResizerConfig::from_json(options)?))
    }

    fn with_valid_config(config: ResizerConfig) -> Self {
        let style = config.overlay_style();
        Self {
            config,
            selection: SelectionController::new(style),
            drag: None,
            swallow_click: false,
        }
    }

    /// Get the configuration the resizer was built with.
    pub fn config(&self) -> &ResizerConfig {
        &self.config
    }

    /// Get the selection controller.
    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    /// Get the selected image, if any.
    pub fn selected(&self) -> Option<ImageId> {
        self.selection.selected()
    }

    /// Check if a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Get the drag in progress, if any.
    pub fn drag(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// Cursor to show for a pointer at `position`.
    pub fn cursor_at(&self, position: Point) -> Option<CursorHint> {
        let direction = match &self.drag {
            Some(session) => session.direction(),
            None => self.selection.overlay().hit_test_handle(position)?,
        };
        Some(descriptor(direction).cursor)
    }

    /// Route one surface event.
    pub fn handle_event(&mut self, host: &mut dyn Host, event: SurfaceEvent) -> EventResponse {
        match event {
            SurfaceEvent::PointerDown { position, target } => {
                self.pointer_down(host, position, target)
            }
            SurfaceEvent::PointerMove { position } => self.pointer_move(host, position),
            SurfaceEvent::PointerUp { .. } => self.pointer_up(host),
            SurfaceEvent::Click { position, target } => self.click(host, position, target),
            SurfaceEvent::Scroll | SurfaceEvent::Resize => {
                self.selection.handle_scroll(host);
                EventResponse::Ignored
            }
            SurfaceEvent::ImageRemoved(image) => {
                if self.drag.as_ref().is_some_and(|s| s.target() == image) {
                    self.cancel_drag(host);
                }
                self.selection.handle_image_removed(host, image);
                EventResponse::Ignored
            }
        }
    }

    /// Select `image` programmatically.
    pub fn select(&mut self, host: &mut dyn Host, image: ImageId) {
        self.selection.select(host, image);
        self.cancel_orphaned_drag(host);
    }

    /// Drop the selection, cancelling any drag in progress.
    pub fn deselect(&mut self, host: &mut dyn Host) {
        self.cancel_drag(host);
        self.selection.deselect(host);
    }

    /// Abandon the current drag without reporting a content change.
    /// Returns `false` if no drag was active.
    pub fn cancel_drag(&mut self, host: &mut dyn Host) -> bool {
        match self.drag.take() {
            Some(session) => {
                session.cancel(host);
                true
            }
            None => false,
        }
    }

    fn pointer_down(
        &mut self,
        host: &mut dyn Host,
        position: Point,
        target: Option<ImageId>,
    ) -> EventResponse {
        self.swallow_click = false;

        let handle = self.selection.overlay().hit_test_handle(position);
        if let (Some(direction), Some(selected)) = (handle, self.selected()) {
            if self.drag.is_some() {
                log::warn!("Handle pressed while a drag was still active; cancelling it");
                self.cancel_drag(host);
            }
            self.drag = DragSession::begin(host, selected, direction, position);
            return EventResponse::Consumed;
        }

        self.selection.handle_press(host, position, target);
        self.cancel_orphaned_drag(host);
        EventResponse::Ignored
    }

    fn pointer_move(&mut self, host: &mut dyn Host, position: Point) -> EventResponse {
        let Some(session) = self.drag.as_mut() else {
            return EventResponse::Ignored;
        };
        match session.update(host, self.selection.overlay_mut(), position) {
            DragUpdate::Resized(_) => {}
            DragUpdate::TargetLost => {
                let image = session.target();
                self.cancel_drag(host);
                if host.bounding_box(ElementRef::Image(image)).is_none() {
                    self.selection.handle_image_removed(host, image);
                }
            }
        }
        EventResponse::Consumed
    }

    fn pointer_up(&mut self, host: &mut dyn Host) -> EventResponse {
        let Some(session) = self.drag.take() else {
            return EventResponse::Ignored;
        };
        // The image may have vanished since the last move.
        let image = session.target();
        let image_gone = host.bounding_box(ElementRef::Image(image)).is_none();
        if image_gone || self.selected() != Some(image) {
            session.cancel(host);
            if image_gone {
                self.selection.handle_image_removed(host, image);
            }
        } else {
            session.finish(host);
        }
        self.swallow_click = true;
        EventResponse::Consumed
    }

    fn click(
        &mut self,
        host: &mut dyn Host,
        position: Point,
        target: Option<ImageId>,
    ) -> EventResponse {
        if std::mem::take(&mut self.swallow_click) {
            return EventResponse::Consumed;
        }
        if self.selection.overlay().hit_test_handle(position).is_some() {
            return EventResponse::Consumed;
        }
        self.selection.handle_click(host, target);
        self.cancel_orphaned_drag(host);
        EventResponse::Ignored
    }

    /// Cancel a drag whose image is no longer the selected one.
    fn cancel_orphaned_drag(&mut self, host: &mut dyn Host) {
        let selected = self.selected();
        if self.drag.as_ref().is_some_and(|s| Some(s.target()) != selected) {
            self.cancel_drag(host);
        }
    }
}

impl Default for ImageResizer {
    fn default() -> Self {
        Self::with_valid_config(ResizerConfig::default())
    }
}
