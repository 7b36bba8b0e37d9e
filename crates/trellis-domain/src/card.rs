use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{board::BoardId, column::Column, column::ColumnId};

pub type CardId = Uuid;

/// Name hashed under the owning column's id to derive a placeholder card id.
const PLACEHOLDER_NAME: &[u8] = b"placeholder-card";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub board_id: BoardId,
    pub column_id: ColumnId,
    pub title: String,
    pub description: Option<String>,
    pub cover: Option<String>,
    #[serde(default)]
    pub member_ids: Vec<Uuid>,
    /// UI-only card keeping an emptied column droppable. Never persisted.
    #[serde(default)]
    pub is_placeholder: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Card {
    pub fn new(board_id: BoardId, column_id: ColumnId, title: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            board_id,
            column_id,
            title,
            description: None,
            cover: None,
            member_ids: Vec::new(),
            is_placeholder: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// The degenerate card synthesized for an emptied column so it remains a
    /// valid drop target. Its id is derived deterministically from the owning
    /// column's id, so re-synthesizing it is idempotent.
    pub fn placeholder_for(column: &Column) -> Self {
        let now = Utc::now();
        Self {
            id: Self::placeholder_id(column.id),
            board_id: column.board_id,
            column_id: column.id,
            title: String::new(),
            description: None,
            cover: None,
            member_ids: Vec::new(),
            is_placeholder: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn placeholder_id(column_id: ColumnId) -> CardId {
        Uuid::new_v5(&column_id, PLACEHOLDER_NAME)
    }

    pub fn move_to_column(&mut self, column_id: ColumnId) {
        self.column_id = column_id;
        self.updated_at = Utc::now();
    }

    pub fn update_title(&mut self, title: String) {
        self.title = title;
        self.updated_at = Utc::now();
    }

    pub fn update_description(&mut self, description: Option<String>) {
        self.description = description;
        self.updated_at = Utc::now();
    }
}
