use trellis_domain::{Board, BoardId, Card, CardId, ColumnId};

use crate::collision::DropId;
use crate::events::{DragEnd, DragOver, DragStart};
use crate::geometry::Rect;
use crate::session::{DragKind, DragPayload, DragSession, DragState};

/// What a finished drag changed, with everything the persistence
/// collaborator needs to issue the matching update. Card orders exclude
/// placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Card crossed into another column.
    CardMoved {
        card_id: CardId,
        from_column_id: ColumnId,
        to_column_id: ColumnId,
        to_index: usize,
        source_order: Vec<CardId>,
        target_order: Vec<CardId>,
    },
    /// Card settled at a new position within its original column.
    CardReordered {
        column_id: ColumnId,
        card_order: Vec<CardId>,
    },
    /// Top-level column order changed.
    ColumnsReordered {
        board_id: BoardId,
        column_order: Vec<ColumnId>,
    },
}

/// Owns the ordered board tree and the drag session, and rewrites the tree
/// in response to drag lifecycle events.
///
/// Every mutation is applied to a deep copy which then becomes the
/// canonical tree, so no partially-applied step is ever observable. Any
/// event referencing an entity the tree does not know is a silent no-op:
/// crashing the UI over a transiently inconsistent state (say, a card a
/// collaborator just deleted) is worse than dropping the gesture.
#[derive(Debug, Clone)]
pub struct Reconciler {
    board: Board,
    state: DragState,
    restore_point: Option<Board>,
}

impl Reconciler {
    pub fn new(mut board: Board) -> Self {
        board.normalize();
        Self {
            board,
            state: DragState::Idle,
            restore_point: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// Replace the tree wholesale, e.g. when the fetch collaborator hands
    /// back a fresh board. Abandons any in-flight drag.
    pub fn load_board(&mut self, mut board: Board) {
        board.normalize();
        self.board = board;
        self.state = DragState::Idle;
        self.restore_point = None;
    }

    /// Begin a drag session: snapshot the payload, resolve the origin
    /// column for card drags, and keep a pre-drag copy of the tree for
    /// rollback should persistence fail after drag-end.
    pub fn handle_drag_start(&mut self, event: DragStart) {
        let origin_column = match &event.payload {
            DragPayload::Card(card) => self.board.find_column_containing_card(card.id).cloned(),
            DragPayload::Column(_) => None,
        };
        tracing::debug!(
            kind = ?event.payload.kind(),
            id = %event.payload.id(),
            "drag started"
        );
        self.restore_point = Some(self.board.clone());
        self.state.begin(DragSession {
            payload: event.payload,
            origin_column,
        });
    }

    /// Continuous over-event processing. Column drags never restructure
    /// mid-drag, and same-column card moves are deferred to drag-end to
    /// avoid visual thrashing; only a column crossing relocates the card.
    pub fn handle_drag_over(&mut self, event: &DragOver) {
        let dragging_card = matches!(
            self.state.session(),
            Some(session) if session.kind() == DragKind::Card
        );
        if !dragging_card {
            return;
        }
        let Some(over) = event.over else {
            return;
        };
        let Some(active_column_id) = self
            .board
            .find_column_containing_card(event.active_id)
            .map(|column| column.id)
        else {
            return;
        };
        let Some(over_column_id) = self.resolve_over_column(over) else {
            return;
        };
        if active_column_id == over_column_id {
            return;
        }
        let Some(card) = self.live_card(event.active_id) else {
            return;
        };

        let mut next = self.board.clone();
        relocate_card(&mut next, card, over, event.active_rect, event.over_rect);
        self.board = next;
    }

    /// Finalize the drag. Returns the outcome to hand to the persistence
    /// collaborator, or `None` when the drag resolved as a no-op. The
    /// session always returns to Idle.
    pub fn handle_drag_end(&mut self, event: &DragEnd) -> Option<MoveOutcome> {
        let session = self.state.clear()?;
        let Some(over) = event.over else {
            // Released outside every droppable: pure no-op
            tracing::debug!(id = %session.payload.id(), "drag ended with no target");
            return None;
        };

        let outcome = match session.payload {
            DragPayload::Card(snapshot) => {
                self.finish_card_drag(snapshot, session.origin_column, over, event)
            }
            DragPayload::Column(column) => self.finish_column_drag(column.id, over),
        };
        if let Some(outcome) = &outcome {
            tracing::debug!(?outcome, "drag reconciled");
        }
        outcome
    }

    /// Pre-drag tree snapshot for the compensating rollback path. Taking it
    /// transfers ownership; a new drag records a fresh one.
    pub fn take_restore_point(&mut self) -> Option<Board> {
        self.restore_point.take()
    }

    /// Roll the tree back after the persistence collaborator rejected the
    /// move.
    pub fn restore(&mut self, board: Board) {
        tracing::warn!(board_id = %board.id, "restoring pre-drag board state");
        self.board = board;
        self.state = DragState::Idle;
    }

    fn finish_card_drag(
        &mut self,
        snapshot: Card,
        origin_column: Option<trellis_domain::Column>,
        over: DropId,
        event: &DragEnd,
    ) -> Option<MoveOutcome> {
        let origin = origin_column?;
        let over_column_id = self.resolve_over_column(over)?;
        // Prefer the live card: over-events may have rebound it already
        let card = self.live_card(snapshot.id).unwrap_or(snapshot);
        let card_id = card.id;

        if origin.id == over_column_id {
            // Same column as drag-start: old index comes from the origin
            // snapshot, new index from the over-card's current position.
            let old_index = origin.card_index(card_id)?;
            let DropId::Card(over_card_id) = over else {
                return None;
            };
            let new_index = self.board.column(over_column_id)?.card_index(over_card_id)?;

            let mut next = self.board.clone();
            next.column_mut(over_column_id)?.reorder_card(old_index, new_index);
            self.board = next;

            Some(MoveOutcome::CardReordered {
                column_id: over_column_id,
                card_order: self.board.column(over_column_id)?.real_card_ids(),
            })
        } else {
            // Over-events never reconciled the final target (fast release);
            // apply the same relocation with the end-event data.
            let mut next = self.board.clone();
            let to_index =
                relocate_card(&mut next, card, over, event.active_rect, event.over_rect)?;
            self.board = next;

            Some(MoveOutcome::CardMoved {
                card_id,
                from_column_id: origin.id,
                to_column_id: over_column_id,
                to_index,
                source_order: self
                    .board
                    .column(origin.id)
                    .map(|column| column.real_card_ids())
                    .unwrap_or_default(),
                target_order: self.board.column(over_column_id)?.real_card_ids(),
            })
        }
    }

    fn finish_column_drag(&mut self, active_id: ColumnId, over: DropId) -> Option<MoveOutcome> {
        let DropId::Column(over_id) = over else {
            return None;
        };
        let mut next = self.board.clone();
        if !next.reorder_columns(active_id, over_id) {
            return None;
        }
        self.board = next;

        Some(MoveOutcome::ColumnsReordered {
            board_id: self.board.id,
            column_order: self.board.column_order_ids.clone(),
        })
    }

    fn resolve_over_column(&self, over: DropId) -> Option<ColumnId> {
        match over {
            DropId::Column(column_id) => self.board.column(column_id).map(|column| column.id),
            DropId::Card(card_id) => self
                .board
                .find_column_containing_card(card_id)
                .map(|column| column.id),
        }
    }

    fn live_card(&self, card_id: CardId) -> Option<Card> {
        self.board
            .find_column_containing_card(card_id)
            .and_then(|column| column.cards.iter().find(|card| card.id == card_id))
            .cloned()
    }
}

/// Cross-column relocation, shared by over-event processing and the
/// drag-end fallback. Pulls the card out of whichever column currently
/// holds it (installing a placeholder if that empties it), then inserts it
/// into the over column at the index implied by the target:
///
/// - over a card: before it, or after it when the dragged box's top edge
///   sits below the target's bottom edge;
/// - over the column body, or a target card that vanished: at the end.
///
/// The insertion index is computed after the removal, so the index reported
/// back matches what the user sees. Returns the final index of the card in
/// the over column, or `None` if the over target resolves to no column.
fn relocate_card(
    board: &mut Board,
    card: Card,
    over: DropId,
    active_rect: Rect,
    over_rect: Rect,
) -> Option<usize> {
    let over_column_id = match over {
        DropId::Column(column_id) => board.column(column_id).map(|column| column.id),
        DropId::Card(card_id) => board
            .find_column_containing_card(card_id)
            .map(|column| column.id),
    }?;

    if let Some(source) = board.find_column_containing_card_mut(card.id) {
        source.remove_card(card.id);
    }

    let column = board.column_mut(over_column_id)?;
    let index = match over {
        DropId::Card(over_card_id) => match column.card_index(over_card_id) {
            Some(over_index) => {
                let below = active_rect.top() > over_rect.bottom();
                over_index + usize::from(below)
            }
            None => column.cards.len(),
        },
        DropId::Column(_) => column.cards.len(),
    };

    let card_id = card.id;
    column.accept_card(index, card);
    column.card_index(card_id)
}
