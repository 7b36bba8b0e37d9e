use trellis_domain::{CardId, ColumnId};

use crate::geometry::{Point, Rect};
use crate::session::DragKind;

/// Identifier of a droppable region. Hovering a card targets that card;
/// hovering the empty body of a column targets the column itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropId {
    Column(ColumnId),
    Card(CardId),
}

/// A registered drop region and its current bounding box. Registration
/// order is z-order: the first containing region wins pointer hit-testing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Droppable {
    pub id: DropId,
    pub rect: Rect,
}

/// Two-tier target resolution.
///
/// Column drags use closest-corners: column regions are large and unevenly
/// sized, and corner proximity tolerates imprecise dragging. Card drags use
/// pointer containment, which is exact for small dense card regions, with a
/// sticky fallback to the last matched target so fast pointer motion across
/// gaps never drops the indicator.
#[derive(Debug, Clone, Default)]
pub struct CollisionStrategy {
    last_over: Option<DropId>,
}

impl CollisionStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(
        &mut self,
        kind: DragKind,
        active_rect: Rect,
        pointer: Point,
        droppables: &[Droppable],
    ) -> Option<DropId> {
        match kind {
            DragKind::Column => closest_corners(active_rect, droppables),
            DragKind::Card => {
                if let Some(hit) = droppables.iter().find(|d| d.rect.contains(pointer)) {
                    self.last_over = Some(hit.id);
                    Some(hit.id)
                } else {
                    // Pointer briefly over a gap: hold the last known target
                    self.last_over
                }
            }
        }
    }

    /// Forget the sticky target when a drag session ends.
    pub fn reset(&mut self) {
        self.last_over = None;
    }
}

fn closest_corners(active_rect: Rect, droppables: &[Droppable]) -> Option<DropId> {
    droppables
        .iter()
        .min_by(|a, b| {
            active_rect
                .corner_distance(&a.rect)
                .total_cmp(&active_rect.corner_distance(&b.rect))
        })
        .map(|d| d.id)
}
