//! Capabilities the hosting editor surface provides to the resizer.

use kurbo::{Rect, Size};
use uuid::Uuid;

use crate::overlay::OverlayNode;

/// Host-assigned identifier of an image in the document.
pub type ImageId = Uuid;

/// Identifier of a mounted overlay node.
pub type OverlayId = Uuid;

/// An element whose rendered box the resizer can query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementRef {
    /// The container overlays are mounted into.
    Container,
    /// An image in the document.
    Image(ImageId),
}

/// The editing surface hosting the resizer.
///
/// All boxes are in one shared coordinate space (typically the viewport).
/// The resizer never keeps a host reference; every call receives it
/// explicitly.
pub trait Host {
    /// Rendered box of `element`, or `None` if it no longer exists.
    fn bounding_box(&self, element: ElementRef) -> Option<Rect>;

    /// Apply a new rendered size to an image.
    fn set_image_size(&mut self, image: ImageId, size: Size);

    /// A user-driven mutation completed; used for change tracking.
    fn notify_content_changed(&mut self);

    /// Insert an overlay node into the container.
    fn mount_overlay(&mut self, node: &OverlayNode);

    /// Refresh an already mounted overlay node in place.
    fn update_overlay(&mut self, node: &OverlayNode);

    /// Remove an overlay node from the container.
    fn unmount_overlay(&mut self, id: OverlayId);

    /// Start forwarding every pointer move/release to the resizer, wherever
    /// the pointer is.
    fn capture_pointer(&mut self) {}

    /// Stop the forwarding started by [`Host::capture_pointer`].
    fn release_pointer(&mut self) {}
}

#[cfg(test)]
pub(crate) mod mock {
    use std::collections::HashMap;

    use super::*;

    /// Records every call a component makes on its host.
    #[derive(Debug, Default)]
    pub struct MockHost {
        pub container: Rect,
        pub images: HashMap<ImageId, Rect>,
        pub mounted: HashMap<OverlayId, OverlayNode>,
        pub mounts: usize,
        pub updates: usize,
        pub unmounts: usize,
        pub content_changes: usize,
        pub captures: usize,
        pub releases: usize,
        pub resized: Vec<(ImageId, Size)>,
    }

    impl MockHost {
        pub fn new(container: Rect) -> Self {
            Self {
                container,
                ..Self::default()
            }
        }

        pub fn add_image(&mut self, bounds: Rect) -> ImageId {
            let id = Uuid::new_v4();
            self.images.insert(id, bounds);
            id
        }

        pub fn remove_image(&mut self, id: ImageId) {
            self.images.remove(&id);
        }

        /// Pretend the surface scrolled by `dy`.
        pub fn scroll(&mut self, dy: f64) {
            for bounds in self.images.values_mut() {
                *bounds = *bounds + kurbo::Vec2::new(0.0, -dy);
            }
        }

        pub fn is_capturing(&self) -> bool {
            self.captures > self.releases
        }

        pub fn overlay(&self) -> Option<&OverlayNode> {
            self.mounted.values().next()
        }
    }

    impl Host for MockHost {
        fn bounding_box(&self, element: ElementRef) -> Option<Rect> {
            match element {
                ElementRef::Container => Some(self.container),
                ElementRef::Image(id) => self.images.get(&id).copied(),
            }
        }

        fn set_image_size(&mut self, image: ImageId, size: Size) {
            if let Some(bounds) = self.images.get_mut(&image) {
                *bounds = Rect::from_origin_size(bounds.origin(), size);
            }
            self.resized.push((image, size));
        }

        fn notify_content_changed(&mut self) {
            self.content_changes += 1;
        }

        fn mount_overlay(&mut self, node: &OverlayNode) {
            self.mounts += 1;
            self.mounted.insert(node.id, node.clone());
        }

        fn update_overlay(&mut self, node: &OverlayNode) {
            self.updates += 1;
            self.mounted.insert(node.id, node.clone());
        }

        fn unmount_overlay(&mut self, id: OverlayId) {
            self.unmounts += 1;
            self.mounted.remove(&id);
        }

        fn capture_pointer(&mut self) {
            self.captures += 1;
        }

        fn release_pointer(&mut self) {
            self.releases += 1;
        }
    }
}
