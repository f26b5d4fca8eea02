//! Selection overlay kept glued to the selected image.

use kurbo::{Point, Rect};
use uuid::Uuid;

use crate::config::OverlayStyle;
use crate::geometry::Direction;
use crate::handles::{Handle, hit_test_handles, layout_handles};
use crate::host::{ElementRef, Host, ImageId, OverlayId};

/// Everything a host needs to draw the overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayNode {
    pub id: OverlayId,
    /// Image the overlay sits on.
    pub target: ImageId,
    /// Overlay rectangle relative to the container origin.
    pub bounds: Rect,
    /// Handles in container coordinates, clockwise from the top-left corner.
    pub handles: [Handle; 8],
    pub style: OverlayStyle,
}

impl OverlayNode {
    fn new(target: ImageId, bounds: Rect, style: OverlayStyle) -> Self {
        Self {
            id: Uuid::new_v4(),
            target,
            bounds,
            handles: layout_handles(bounds, style.handle_size),
            style,
        }
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.handles = layout_handles(bounds, self.style.handle_size);
    }

    /// Handle square under `point` (container coordinates).
    pub fn handle_at(&self, point: Point) -> Option<&Handle> {
        self.handles.iter().find(|handle| handle.hit_test(point))
    }
}

/// Owns the overlay node and keeps it positioned over its target.
#[derive(Debug, Clone)]
pub struct OverlayController {
    style: OverlayStyle,
    node: Option<OverlayNode>,
    /// Container origin seen at the last reposition.
    container_origin: Point,
}

impl OverlayController {
    /// Create a detached overlay controller drawing with `style`.
    pub fn new(style: OverlayStyle) -> Self {
        Self {
            style,
            node: None,
            container_origin: Point::ZERO,
        }
    }

    /// Get the overlay style.
    pub fn style(&self) -> &OverlayStyle {
        &self.style
    }

    /// The image the overlay is attached to.
    pub fn target(&self) -> Option<ImageId> {
        self.node.as_ref().map(|node| node.target)
    }

    /// Check if the overlay is mounted on an image.
    pub fn is_attached(&self) -> bool {
        self.node.is_some()
    }

    /// Get the mounted overlay node, if any.
    pub fn node(&self) -> Option<&OverlayNode> {
        self.node.as_ref()
    }

    /// Overlay rectangle in container coordinates.
    pub fn bounds(&self) -> Option<Rect> {
        self.node.as_ref().map(|node| node.bounds)
    }

    /// Attach to `target` and mount the overlay.
    ///
    /// Re-attaching to the current target does nothing; attaching to another
    /// target detaches first.
    pub fn attach(&mut self, host: &mut dyn Host, target: ImageId) {
        if self.target() == Some(target) {
            return;
        }
        self.detach(host);

        let bounds = match self.query(host, target) {
            Some(bounds) => bounds,
            None => {
                log::debug!("Attaching overlay to image {target} with no rendered box");
                Rect::ZERO
            }
        };
        let node = OverlayNode::new(target, bounds, self.style);
        log::debug!("Mounting overlay {} on image {target}", node.id);
        host.mount_overlay(&node);
        self.node = Some(node);
    }

    /// Unmount the overlay and forget the target. No-op when detached.
    pub fn detach(&mut self, host: &mut dyn Host) {
        if let Some(node) = self.node.take() {
            log::debug!("Unmounting overlay {} from image {}", node.id, node.target);
            host.unmount_overlay(node.id);
        }
    }

    /// Move the overlay back over its target.
    ///
    /// Returns `false` when nothing is attached or the target has no rendered
    /// box; the overlay is then left where it was.
    pub fn reposition(&mut self, host: &mut dyn Host) -> bool {
        let Some(target) = self.target() else {
            return false;
        };
        let Some(bounds) = self.query(host, target) else {
            log::debug!("Image {target} has no rendered box, overlay left in place");
            return false;
        };
        if let Some(node) = self.node.as_mut() {
            node.set_bounds(bounds);
            host.update_overlay(node);
        }
        true
    }

    /// Convert a point in the shared coordinate space to container
    /// coordinates.
    pub fn to_local(&self, point: Point) -> Point {
        point - self.container_origin.to_vec2()
    }

    /// Direction of the handle under `point`, if any.
    pub fn hit_test_handle(&self, point: Point) -> Option<Direction> {
        let node = self.node.as_ref()?;
        hit_test_handles(&node.handles, self.to_local(point))
    }

    /// Whether `point` falls on the overlay body or one of its handles.
    pub fn contains(&self, point: Point) -> bool {
        let Some(node) = self.node.as_ref() else {
            return false;
        };
        let local = self.to_local(point);
        let body = node.bounds;
        let in_body =
            local.x >= body.x0 && local.x <= body.x1 && local.y >= body.y0 && local.y <= body.y1;
        in_body || node.handle_at(local).is_some()
    }

    /// Image box relative to the container, refreshing the cached container
    /// origin on the way.
    fn query(&mut self, host: &dyn Host, target: ImageId) -> Option<Rect> {
        let image = host.bounding_box(ElementRef::Image(target))?;
        if let Some(container) = host.bounding_box(ElementRef::Container) {
            self.container_origin = container.origin();
        }
        Some(image - self.container_origin.to_vec2())
    }
}
