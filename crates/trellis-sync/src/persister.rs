use trellis_core::TrellisResult;
use trellis_dnd::{MoveOutcome, Reconciler};

use crate::gateway::BoardGateway;

/// Translates a finished drag into the matching gateway call.
#[derive(Debug)]
pub struct OutcomePersister<G> {
    gateway: G,
}

impl<G: BoardGateway> OutcomePersister<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub async fn persist(&self, outcome: &MoveOutcome) -> TrellisResult<()> {
        match outcome {
            MoveOutcome::CardMoved {
                card_id,
                from_column_id,
                to_column_id,
                to_index,
                source_order,
                target_order,
            } => {
                self.gateway
                    .move_card(
                        *card_id,
                        *from_column_id,
                        *to_column_id,
                        *to_index,
                        source_order.clone(),
                        target_order.clone(),
                    )
                    .await
            }
            MoveOutcome::CardReordered {
                column_id,
                card_order,
            } => {
                self.gateway
                    .reorder_cards(*column_id, card_order.clone())
                    .await
            }
            MoveOutcome::ColumnsReordered {
                board_id,
                column_order,
            } => {
                self.gateway
                    .reorder_columns(*board_id, column_order.clone())
                    .await
            }
        }
    }
}

/// Persist the outcome of a finished drag, rolling the local tree back to
/// its pre-drag state if the gateway rejects the update. The local mutation
/// stays optimistic; this is the compensating path that keeps client and
/// server order from silently diverging.
pub async fn commit_drag<G: BoardGateway>(
    reconciler: &mut Reconciler,
    persister: &OutcomePersister<G>,
    outcome: MoveOutcome,
) -> TrellisResult<()> {
    let restore_point = reconciler.take_restore_point();
    if let Err(err) = persister.persist(&outcome).await {
        tracing::warn!(error = %err, "drag outcome rejected by gateway, rolling back");
        if let Some(board) = restore_point {
            reconciler.restore(board);
        }
        return Err(err);
    }
    Ok(())
}
