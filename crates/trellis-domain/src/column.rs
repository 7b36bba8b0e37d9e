use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::board::BoardId;
use crate::card::{Card, CardId};
use crate::ordering::array_move;

pub type ColumnId = Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub board_id: BoardId,
    pub title: String,
    pub card_order_ids: Vec<CardId>,
    pub cards: Vec<Card>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Column {
    pub fn new(board_id: BoardId, title: String) -> Self {
        let now = Utc::now();
        let mut column = Self {
            id: Uuid::new_v4(),
            board_id,
            title,
            card_order_ids: Vec::new(),
            cards: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        column.ensure_placeholder();
        column.sync_card_order();
        column
    }

    /// Recompute the derived order projection from the live cards array.
    /// Must run after every structural mutation.
    pub fn sync_card_order(&mut self) {
        self.card_order_ids = self.cards.iter().map(|card| card.id).collect();
    }

    /// Install the placeholder card when the column has no cards left, so it
    /// stays a valid drop target.
    pub fn ensure_placeholder(&mut self) {
        if self.cards.is_empty() {
            let placeholder = Card::placeholder_for(self);
            self.cards.push(placeholder);
        }
    }

    fn purge_placeholders(&mut self) {
        self.cards.retain(|card| !card.is_placeholder);
    }

    pub fn contains_card(&self, card_id: CardId) -> bool {
        self.cards.iter().any(|card| card.id == card_id)
    }

    pub fn card_index(&self, card_id: CardId) -> Option<usize> {
        self.cards.iter().position(|card| card.id == card_id)
    }

    pub fn has_only_placeholder(&self) -> bool {
        self.cards.len() == 1 && self.cards[0].is_placeholder
    }

    /// Card ids in display order with placeholders excluded. This is the
    /// order that goes to the backend.
    pub fn real_card_ids(&self) -> Vec<CardId> {
        self.cards
            .iter()
            .filter(|card| !card.is_placeholder)
            .map(|card| card.id)
            .collect()
    }

    /// Insert a real card at `index`, rebinding it to this column.
    ///
    /// Any pre-existing occurrence of the same card is dropped first (rapid
    /// repeated over-events may re-deliver the same relocation), and any
    /// placeholder is purged the moment a real card enters. `index` is
    /// clamped to the resulting length.
    pub fn accept_card(&mut self, index: usize, mut card: Card) {
        debug_assert!(!card.is_placeholder, "placeholders are synthesized, never inserted");

        self.cards.retain(|existing| existing.id != card.id);
        self.purge_placeholders();

        let index = index.min(self.cards.len());
        card.move_to_column(self.id);
        self.cards.insert(index, card);
        self.sync_card_order();
        self.updated_at = Utc::now();
    }

    /// Remove a card by id, re-installing the placeholder if the column is
    /// left empty. Unknown ids are a no-op returning `None`.
    pub fn remove_card(&mut self, card_id: CardId) -> Option<Card> {
        let position = self.card_index(card_id)?;
        let card = self.cards.remove(position);
        self.ensure_placeholder();
        self.sync_card_order();
        self.updated_at = Utc::now();
        Some(card)
    }

    /// Single-column reorder with array-move semantics.
    pub fn reorder_card(&mut self, from: usize, to: usize) {
        array_move(&mut self.cards, from, to);
        self.sync_card_order();
        self.updated_at = Utc::now();
    }
}
