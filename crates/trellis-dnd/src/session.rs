use trellis_domain::{Card, Column};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    Column,
    Card,
}

/// Explicit tagged drag payload, classified once at drag-start.
///
/// Replaces shape-sniffing the payload for a column-reference field: the
/// variant is the single source of truth for what is being dragged.
#[derive(Debug, Clone, PartialEq)]
pub enum DragPayload {
    Column(Column),
    Card(Card),
}

impl DragPayload {
    pub fn kind(&self) -> DragKind {
        match self {
            Self::Column(_) => DragKind::Column,
            Self::Card(_) => DragKind::Card,
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            Self::Column(column) => column.id,
            Self::Card(card) => card.id,
        }
    }
}

/// Ephemeral drag-start context. The payload and the origin column are
/// snapshots captured when the drag begins; neither is recomputed mid-drag,
/// because over-events mutate the canonical tree and a live lookup at
/// drag-end would read already-moved state.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub payload: DragPayload,
    /// Column the card started in. `None` for column drags.
    pub origin_column: Option<Column>,
}

impl DragSession {
    pub fn kind(&self) -> DragKind {
        self.payload.kind()
    }
}

/// Idle -> Dragging -> Idle. There is no distinct cancelled state: a drag
/// with no valid drop target resolves as a no-op back to Idle.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Idle => None,
            Self::Dragging(session) => Some(session),
        }
    }

    pub fn begin(&mut self, session: DragSession) {
        *self = Self::Dragging(session);
    }

    /// Transition back to Idle, handing out the session that just ended.
    pub fn clear(&mut self) -> Option<DragSession> {
        match std::mem::take(self) {
            Self::Idle => None,
            Self::Dragging(session) => Some(session),
        }
    }
}
