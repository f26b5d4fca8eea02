//! imageresize core library
//!
//! Platform-agnostic selection overlay and eight-handle drag resizing for
//! images embedded in a rich-text surface. The host surface is reached only
//! through the [`Host`] trait; rendering is up to the host.

pub mod config;
pub mod drag;
pub mod event;
pub mod geometry;
pub mod handles;
pub mod host;
pub mod overlay;
pub mod resizer;
pub mod selection;

pub use config::{ConfigError, OverlayStyle, ResizerConfig, Rgba};
pub use drag::{DragSession, DragState, DragUpdate};
pub use event::{EventResponse, SurfaceEvent};
pub use geometry::{Direction, MIN_SIZE, resize_box};
pub use handles::{CursorHint, HANDLE_DESCRIPTORS, Handle, HandleDescriptor, layout_handles};
pub use host::{ElementRef, Host, ImageId, OverlayId};
pub use overlay::{OverlayController, OverlayNode};
pub use resizer::ImageResizer;
pub use selection::{SelectionController, SelectionState};
