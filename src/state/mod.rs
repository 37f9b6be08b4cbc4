pub mod geometry;
pub mod gesture;
pub mod transform;
pub mod viewport;

pub use geometry::{ContentRect, GeometryProbe};
pub use gesture::InputEvent;
pub use transform::{Point, Transform};
pub use viewport::{Cursor, ZoomViewport};
