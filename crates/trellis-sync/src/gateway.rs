use async_trait::async_trait;
use trellis_core::TrellisResult;
use trellis_domain::{Board, BoardId, CardId, ColumnId};

/// REST boundary for board state.
///
/// The drag core treats this as an external collaborator: it fetches the
/// board once per load and receives order updates after drag-end. Card
/// orders passed here never contain placeholder ids.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BoardGateway: Send + Sync {
    async fn fetch_board(&self, board_id: BoardId) -> TrellisResult<Board>;

    /// Persist a cross-column card move.
    async fn move_card(
        &self,
        card_id: CardId,
        from_column_id: ColumnId,
        to_column_id: ColumnId,
        to_index: usize,
        source_order: Vec<CardId>,
        target_order: Vec<CardId>,
    ) -> TrellisResult<()>;

    /// Persist a same-column reorder.
    async fn reorder_cards(&self, column_id: ColumnId, card_order: Vec<CardId>)
        -> TrellisResult<()>;

    /// Persist a new top-level column order.
    async fn reorder_columns(
        &self,
        board_id: BoardId,
        column_order: Vec<ColumnId>,
    ) -> TrellisResult<()>;
}
