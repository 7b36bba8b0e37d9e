use trellis_domain::CardId;

use crate::collision::DropId;
use crate::geometry::Rect;
use crate::session::DragPayload;

/// Drag lifecycle events as delivered by the input/gesture collaborator.
/// The reconciliation engine is a set of handlers for these; it assumes
/// strictly sequential delivery within a single drag session.
#[derive(Debug, Clone)]
pub struct DragStart {
    pub payload: DragPayload,
}

#[derive(Debug, Clone)]
pub struct DragOver {
    pub active_id: CardId,
    pub over: Option<DropId>,
    /// Current bounding box of the dragged item (translated mid-drag).
    pub active_rect: Rect,
    /// Bounding box of the over target.
    pub over_rect: Rect,
}

#[derive(Debug, Clone)]
pub struct DragEnd {
    pub over: Option<DropId>,
    pub active_rect: Rect,
    pub over_rect: Rect,
}
