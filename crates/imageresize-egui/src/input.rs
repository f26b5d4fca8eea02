//! Translation of egui pointer input into surface events.

use egui::{InputState, Pos2};
use imageresize_core::{ImageId, SurfaceEvent};

fn to_point(pos: Pos2) -> kurbo::Point {
    kurbo::Point::new(f64::from(pos.x), f64::from(pos.y))
}

/// Pointer activity read from one egui frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct PointerFrame {
    pos: Option<Pos2>,
    pressed: bool,
    moving: bool,
    released: bool,
    clicked: bool,
    scrolled: bool,
}

impl PointerFrame {
    fn read(input: &InputState) -> Self {
        let pointer = &input.pointer;
        Self {
            pos: pointer.interact_pos(),
            pressed: pointer.primary_pressed(),
            moving: pointer.is_moving(),
            released: pointer.primary_released(),
            clicked: pointer.primary_clicked(),
            scrolled: input.raw_scroll_delta != egui::Vec2::ZERO,
        }
    }

    /// Press, move and release come before the click synthesized from them,
    /// so a click that ends a drag is seen after the drag has finished.
    fn events(self, image_at: impl Fn(Pos2) -> Option<ImageId>) -> Vec<SurfaceEvent> {
        let mut events = Vec::new();

        if let Some(pos) = self.pos {
            let position = to_point(pos);
            if self.pressed {
                events.push(SurfaceEvent::PointerDown {
                    position,
                    target: image_at(pos),
                });
            }
            if self.moving {
                events.push(SurfaceEvent::PointerMove { position });
            }
            if self.released {
                events.push(SurfaceEvent::PointerUp { position });
            }
            if self.clicked {
                events.push(SurfaceEvent::Click {
                    position,
                    target: image_at(pos),
                });
            }
        }

        if self.scrolled {
            events.push(SurfaceEvent::Scroll);
        }
        events
    }
}

/// Surface events for one egui frame, in the order they must be handled.
///
/// `image_at` resolves the image under a screen position. Positions are in
/// egui screen space, so the host's bounding boxes must be too.
pub fn collect_events(
    input: &InputState,
    image_at: impl Fn(Pos2) -> Option<ImageId>,
) -> Vec<SurfaceEvent> {
    PointerFrame::read(input).events(image_at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Event, Modifiers, PointerButton, RawInput};

    fn kind(event: &SurfaceEvent) -> &'static str {
        match event {
            SurfaceEvent::PointerDown { .. } => "down",
            SurfaceEvent::PointerMove { .. } => "move",
            SurfaceEvent::PointerUp { .. } => "up",
            SurfaceEvent::Click { .. } => "click",
            SurfaceEvent::Scroll => "scroll",
            SurfaceEvent::Resize => "resize",
            SurfaceEvent::ImageRemoved(_) => "removed",
        }
    }

    fn kinds(events: &[SurfaceEvent]) -> Vec<&'static str> {
        events.iter().map(kind).collect()
    }

    fn button(pos: Pos2, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::default(),
        }
    }

    /// Run one egui frame with `events` and collect what the resizer would
    /// receive.
    fn run_frame(ctx: &egui::Context, events: Vec<Event>) -> Vec<SurfaceEvent> {
        let raw = RawInput {
            events,
            ..RawInput::default()
        };
        let mut collected = Vec::new();
        let _ = ctx.run(raw, |ctx| {
            collected = ctx.input(|input| collect_events(input, |_| None));
        });
        collected
    }

    #[test]
    fn test_idle_input_has_no_events() {
        let input = InputState::default();
        assert!(collect_events(&input, |_| None).is_empty());
    }

    #[test]
    fn test_to_point() {
        assert_eq!(to_point(Pos2::new(1.5, 2.0)), kurbo::Point::new(1.5, 2.0));
    }

    #[test]
    fn test_frame_event_order() {
        let frame = PointerFrame {
            pos: Some(Pos2::new(10.0, 20.0)),
            pressed: true,
            moving: true,
            released: true,
            clicked: true,
            scrolled: true,
        };
        let events = frame.events(|_| None);
        assert_eq!(kinds(&events), ["down", "move", "up", "click", "scroll"]);
        assert_eq!(
            events[2],
            SurfaceEvent::PointerUp {
                position: kurbo::Point::new(10.0, 20.0)
            }
        );
    }

    #[test]
    fn test_frame_without_pointer_only_scrolls() {
        let frame = PointerFrame {
            pos: None,
            pressed: true,
            released: true,
            clicked: true,
            scrolled: true,
            ..PointerFrame::default()
        };
        assert_eq!(kinds(&frame.events(|_| None)), ["scroll"]);
    }

    #[test]
    fn test_frame_resolves_targets() {
        let image = ImageId::new_v4();
        let frame = PointerFrame {
            pos: Some(Pos2::new(5.0, 5.0)),
            pressed: true,
            clicked: true,
            ..PointerFrame::default()
        };
        let events = frame.events(|pos| (pos.x < 10.0).then_some(image));
        assert_eq!(
            events[0],
            SurfaceEvent::PointerDown {
                position: kurbo::Point::new(5.0, 5.0),
                target: Some(image)
            }
        );
        assert_eq!(
            events[1],
            SurfaceEvent::Click {
                position: kurbo::Point::new(5.0, 5.0),
                target: Some(image)
            }
        );
    }

    #[test]
    fn test_click_follows_release_in_one_frame() {
        let ctx = egui::Context::default();
        let pos = Pos2::new(40.0, 30.0);
        let events = run_frame(
            &ctx,
            vec![Event::PointerMoved(pos), button(pos, true), button(pos, false)],
        );

        let found = kinds(&events);
        let index = |name: &str| found.iter().position(|kind| *kind == name);
        let (Some(down), Some(up), Some(click)) = (index("down"), index("up"), index("click"))
        else {
            panic!("missing pointer events: {found:?}");
        };
        assert!(down < up);
        assert!(up < click);
        if let Some(moved) = index("move") {
            assert!(down < moved && moved < up);
        }
    }

    #[test]
    fn test_drag_across_frames() {
        let ctx = egui::Context::default();
        let start = Pos2::new(40.0, 30.0);
        let end = Pos2::new(140.0, 30.0);

        let pressed = run_frame(&ctx, vec![Event::PointerMoved(start), button(start, true)]);
        assert_eq!(kinds(&pressed).first(), Some(&"down"));

        run_frame(&ctx, vec![Event::PointerMoved(end)]);

        // Too far from the press to count as a click.
        let released = run_frame(&ctx, vec![button(end, false)]);
        assert!(kinds(&released).contains(&"up"));
        assert!(!kinds(&released).contains(&"click"));
        assert!(!kinds(&released).contains(&"down"));
    }

    #[test]
    fn test_scroll_delta_becomes_scroll_event() {
        let mut input = InputState::default();
        input.raw_scroll_delta = egui::vec2(0.0, -40.0);
        assert_eq!(collect_events(&input, |_| None), [SurfaceEvent::Scroll]);
    }
}
