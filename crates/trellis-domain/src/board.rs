use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::card::CardId;
use crate::column::{Column, ColumnId};
use crate::ordering::{array_move, derive_order};

pub type BoardId = Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub title: String,
    pub column_order_ids: Vec<ColumnId>,
    pub columns: Vec<Column>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Board {
    pub fn new(title: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            column_order_ids: Vec::new(),
            columns: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Assemble a board from a fetch payload and bring it into ordered form.
    pub fn from_fetch(
        id: BoardId,
        title: String,
        columns: Vec<Column>,
        column_order_ids: Vec<ColumnId>,
    ) -> Self {
        let now = Utc::now();
        let mut board = Self {
            id,
            title,
            column_order_ids,
            columns,
            created_at: now,
            updated_at: now,
        };
        board.normalize();
        board
    }

    /// Re-derive the ordered form: columns sorted per `column_order_ids`,
    /// each column's cards sorted per its `card_order_ids`, placeholders
    /// installed into empty columns, and both order projections resynced.
    ///
    /// Fetch payloads may arrive with lists and order arrays out of step;
    /// this makes the in-memory tree self-consistent regardless.
    pub fn normalize(&mut self) {
        let columns = std::mem::take(&mut self.columns);
        self.columns = derive_order(columns, &self.column_order_ids, |column| column.id);

        for column in &mut self.columns {
            let cards = std::mem::take(&mut column.cards);
            column.cards = derive_order(cards, &column.card_order_ids, |card| card.id);
            column.ensure_placeholder();
            column.sync_card_order();
        }

        self.sync_column_order();
    }

    /// Recompute the column order projection from the live columns array.
    pub fn sync_column_order(&mut self) {
        self.column_order_ids = self.columns.iter().map(|column| column.id).collect();
    }

    pub fn column(&self, column_id: ColumnId) -> Option<&Column> {
        self.columns.iter().find(|column| column.id == column_id)
    }

    pub fn column_mut(&mut self, column_id: ColumnId) -> Option<&mut Column> {
        self.columns.iter_mut().find(|column| column.id == column_id)
    }

    pub fn column_index(&self, column_id: ColumnId) -> Option<usize> {
        self.columns.iter().position(|column| column.id == column_id)
    }

    /// Locate the column currently holding `card_id`.
    ///
    /// Scans the live `cards` arrays, not `card_order_ids`: mid-drag the
    /// cards array is the one kept consistent step by step, while the order
    /// projection is only recomputed at the end of each mutation.
    pub fn find_column_containing_card(&self, card_id: CardId) -> Option<&Column> {
        self.columns.iter().find(|column| column.contains_card(card_id))
    }

    pub fn find_column_containing_card_mut(&mut self, card_id: CardId) -> Option<&mut Column> {
        self.columns
            .iter_mut()
            .find(|column| column.contains_card(card_id))
    }

    /// Move the column identified by `active_id` to the position currently
    /// occupied by `over_id`. Identifier-based so it stays correct even if
    /// the list was reshuffled since the positions were observed.
    ///
    /// Returns `false` (no mutation) when either id is unknown or the ids
    /// are equal.
    pub fn reorder_columns(&mut self, active_id: ColumnId, over_id: ColumnId) -> bool {
        if active_id == over_id {
            return false;
        }
        let (Some(from), Some(to)) = (self.column_index(active_id), self.column_index(over_id))
        else {
            return false;
        };
        array_move(&mut self.columns, from, to);
        self.sync_column_order();
        self.updated_at = Utc::now();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Card;

    fn board_with_columns(titles: &[&str]) -> Board {
        let mut board = Board::new("Test Board".to_string());
        for title in titles {
            board.columns.push(Column::new(board.id, title.to_string()));
        }
        board.sync_column_order();
        board
    }

    #[test]
    fn test_from_fetch_orders_columns_and_cards() {
        let mut board = Board::new("Test Board".to_string());
        let mut todo = Column::new(board.id, "Todo".to_string());
        let done = Column::new(board.id, "Done".to_string());

        let a = Card::new(board.id, todo.id, "a".to_string());
        let b = Card::new(board.id, todo.id, "b".to_string());
        let (a_id, b_id) = (a.id, b.id);
        todo.accept_card(0, a);
        todo.accept_card(1, b);
        // Server says b comes first
        todo.card_order_ids = vec![b_id, a_id];

        let column_order = vec![done.id, todo.id];
        board = Board::from_fetch(board.id, board.title, vec![todo, done], column_order);

        assert_eq!(board.columns[0].title, "Done");
        assert_eq!(board.columns[1].title, "Todo");
        let cards: Vec<_> = board.columns[1].cards.iter().map(|c| c.id).collect();
        assert_eq!(cards, vec![b_id, a_id]);
        assert_eq!(board.columns[1].card_order_ids, vec![b_id, a_id]);
    }

    #[test]
    fn test_normalize_appends_columns_missing_from_order() {
        let mut board = board_with_columns(&["P", "Q", "R"]);
        let r_id = board.columns[2].id;
        // Order array lost track of R
        board.column_order_ids.truncate(2);

        board.normalize();

        assert_eq!(board.columns[2].id, r_id);
        assert_eq!(board.column_order_ids.len(), 3);
        assert_eq!(board.column_order_ids[2], r_id);
    }

    #[test]
    fn test_normalize_installs_placeholders() {
        let mut board = board_with_columns(&["Empty"]);
        board.columns[0].cards.clear();
        board.columns[0].card_order_ids.clear();

        board.normalize();

        assert!(board.columns[0].has_only_placeholder());
    }

    #[test]
    fn test_find_column_containing_card_uses_live_cards() {
        let mut board = board_with_columns(&["X", "Y"]);
        let card = Card::new(board.id, board.columns[0].id, "task".to_string());
        let card_id = card.id;
        board.columns[0].accept_card(0, card);
        // Stale projection must not mislead the lookup
        board.columns[1].card_order_ids = vec![card_id];

        let owner = board.find_column_containing_card(card_id).unwrap();
        assert_eq!(owner.title, "X");
    }

    #[test]
    fn test_reorder_columns_by_identifier() {
        let mut board = board_with_columns(&["P", "Q", "R"]);
        let p_id = board.columns[0].id;
        let r_id = board.columns[2].id;

        assert!(board.reorder_columns(r_id, p_id));

        let titles: Vec<_> = board.columns.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["R", "P", "Q"]);
        assert_eq!(board.column_order_ids, vec![r_id, p_id, board.columns[2].id]);
    }

    #[test]
    fn test_reorder_columns_unknown_id_is_noop() {
        let mut board = board_with_columns(&["P", "Q"]);
        let before = board.column_order_ids.clone();

        assert!(!board.reorder_columns(Uuid::new_v4(), board.columns[0].id));
        assert_eq!(board.column_order_ids, before);
    }
}
