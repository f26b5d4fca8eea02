//! A single drag-to-resize gesture.

use kurbo::{Point, Rect};

use crate::geometry::{Direction, resize_box};
use crate::host::{ElementRef, Host, ImageId};
use crate::overlay::OverlayController;

/// What was captured when the handle was pressed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    pub direction: Direction,
    /// Image box at press time.
    pub start_box: Rect,
    /// Pointer position at press time.
    pub pointer_start: Point,
}

/// Outcome of feeding one pointer move to a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragUpdate {
    /// The image was resized to this box.
    Resized(Rect),
    /// The image disappeared or lost its selection; the session should be
    /// cancelled.
    TargetLost,
}

/// An in-flight resize gesture.
///
/// Created on handle press, it holds the host's pointer capture until it is
/// consumed by [`DragSession::finish`] or [`DragSession::cancel`].
#[derive(Debug)]
#[must_use = "a drag session holds the pointer capture until finished or cancelled"]
pub struct DragSession {
    target: ImageId,
    state: DragState,
    current: Rect,
}

impl DragSession {
    /// Start dragging the `direction` handle of `target`.
    ///
    /// Returns `None` if the image has no rendered box to start from.
    pub fn begin(
        host: &mut dyn Host,
        target: ImageId,
        direction: Direction,
        pointer: Point,
    ) -> Option<Self> {
        let Some(start_box) = host.bounding_box(ElementRef::Image(target)) else {
            log::debug!("Not starting drag: image {target} has no rendered box");
            return None;
        };
        host.capture_pointer();
        log::debug!(
            "Drag {direction} started on image {target} at {:.0}x{:.0}",
            start_box.width(),
            start_box.height()
        );
        Some(Self {
            target,
            state: DragState {
                direction,
                start_box,
                pointer_start: pointer,
            },
            current: start_box,
        })
    }

    /// Get the image being resized.
    pub fn target(&self) -> ImageId {
        self.target
    }

    /// Get the direction of the pressed handle.
    pub fn direction(&self) -> Direction {
        self.state.direction
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Box produced by the latest move.
    pub fn current_box(&self) -> Rect {
        self.current
    }

    /// Resize the image for a pointer at `pointer` and move the overlay after
    /// it.
    pub fn update(
        &mut self,
        host: &mut dyn Host,
        overlay: &mut OverlayController,
        pointer: Point,
    ) -> DragUpdate {
        if overlay.target() != Some(self.target)
            || host.bounding_box(ElementRef::Image(self.target)).is_none()
        {
            return DragUpdate::TargetLost;
        }

        let delta = pointer - self.state.pointer_start;
        let resized = resize_box(self.state.direction, self.state.start_box, delta);
        host.set_image_size(self.target, resized.size());
        overlay.reposition(host);
        self.current = resized;
        DragUpdate::Resized(resized)
    }

    /// Pointer released: give up the capture and report one content change.
    pub fn finish(self, host: &mut dyn Host) -> Rect {
        host.release_pointer();
        host.notify_content_changed();
        log::debug!(
            "Drag finished on image {} at {:.0}x{:.0}",
            self.target,
            self.current.width(),
            self.current.height()
        );
        self.current
    }

    /// Abandon the gesture without reporting a content change.
    pub fn cancel(self, host: &mut dyn Host) {
        host.release_pointer();
        log::debug!("Drag cancelled on image {}", self.target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OverlayStyle;
    use crate::geometry::MIN_SIZE;
    use crate::host::mock::MockHost;

    fn setup() -> (MockHost, ImageId, OverlayController) {
        let mut host = MockHost::new(Rect::new(0.0, 0.0, 800.0, 600.0));
        let image = host.add_image(Rect::new(100.0, 100.0, 200.0, 150.0));
        let mut overlay = OverlayController::new(OverlayStyle::default());
        overlay.attach(&mut host, image);
        (host, image, overlay)
    }

    #[test]
    fn test_begin_captures_pointer() {
        let (mut host, image, _) = setup();
        let session = DragSession::begin(&mut host, image, Direction::E, Point::new(200.0, 125.0))
            .unwrap();

        assert!(host.is_capturing());
        assert_eq!(session.state().start_box, Rect::new(100.0, 100.0, 200.0, 150.0));
        assert_eq!(session.state().pointer_start, Point::new(200.0, 125.0));
        session.cancel(&mut host);
    }

    #[test]
    fn test_begin_without_image() {
        let (mut host, image, _) = setup();
        host.remove_image(image);
        assert!(DragSession::begin(&mut host, image, Direction::E, Point::ZERO).is_none());
        assert_eq!(host.captures, 0);
    }

    #[test]
    fn test_moves_resize_image_and_overlay() {
        let (mut host, image, mut overlay) = setup();
        let mut session =
            DragSession::begin(&mut host, image, Direction::SE, Point::new(200.0, 150.0)).unwrap();

        let update = session.update(&mut host, &mut overlay, Point::new(230.0, 160.0));
        assert_eq!(update, DragUpdate::Resized(Rect::new(100.0, 100.0, 230.0, 160.0)));
        assert_eq!(host.images[&image], Rect::new(100.0, 100.0, 230.0, 160.0));
        assert_eq!(overlay.bounds(), Some(Rect::new(100.0, 100.0, 230.0, 160.0)));

        // Deltas are measured from the press, not the previous move.
        session.update(&mut host, &mut overlay, Point::new(210.0, 150.0));
        assert_eq!(host.images[&image], Rect::new(100.0, 100.0, 210.0, 150.0));

        session.finish(&mut host);
    }

    #[test]
    fn test_one_content_change_per_drag() {
        let (mut host, image, mut overlay) = setup();
        let mut session =
            DragSession::begin(&mut host, image, Direction::W, Point::new(100.0, 125.0)).unwrap();
        for step in 0..25 {
            session.update(&mut host, &mut overlay, Point::new(100.0 - f64::from(step), 125.0));
        }
        assert_eq!(host.content_changes, 0);

        let final_box = session.finish(&mut host);
        assert_eq!(host.content_changes, 1);
        assert!(!host.is_capturing());
        assert!((final_box.width() - 124.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_floor_applies_to_image() {
        let (mut host, image, mut overlay) = setup();
        let mut session =
            DragSession::begin(&mut host, image, Direction::N, Point::new(150.0, 100.0)).unwrap();
        session.update(&mut host, &mut overlay, Point::new(150.0, 1000.0));
        assert!((host.images[&image].height() - MIN_SIZE).abs() < f64::EPSILON);
        session.finish(&mut host);
    }

    #[test]
    fn test_cancel_reports_nothing() {
        let (mut host, image, mut overlay) = setup();
        let mut session =
            DragSession::begin(&mut host, image, Direction::S, Point::new(150.0, 150.0)).unwrap();
        session.update(&mut host, &mut overlay, Point::new(150.0, 170.0));
        session.cancel(&mut host);

        assert_eq!(host.content_changes, 0);
        assert!(!host.is_capturing());
    }

    #[test]
    fn test_target_lost() {
        let (mut host, image, mut overlay) = setup();
        let mut session =
            DragSession::begin(&mut host, image, Direction::E, Point::new(200.0, 125.0)).unwrap();

        overlay.detach(&mut host);
        let update = session.update(&mut host, &mut overlay, Point::new(250.0, 125.0));
        assert_eq!(update, DragUpdate::TargetLost);
        assert!(host.resized.is_empty());
        session.cancel(&mut host);
    }
}
