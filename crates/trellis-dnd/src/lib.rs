pub mod collision;
pub mod events;
pub mod geometry;
pub mod reconcile;
pub mod sensors;
pub mod session;

pub use collision::{CollisionStrategy, DropId, Droppable};
pub use events::{DragEnd, DragOver, DragStart};
pub use geometry::{Point, Rect};
pub use reconcile::{MoveOutcome, Reconciler};
pub use sensors::{Activation, PointerSensor, TouchSensor};
pub use session::{DragKind, DragPayload, DragSession, DragState};
