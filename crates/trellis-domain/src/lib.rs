pub mod board;
pub mod card;
pub mod column;
pub mod ordering;

pub use board::{Board, BoardId};
pub use card::{Card, CardId};
pub use column::{Column, ColumnId};
pub use ordering::{array_move, derive_order};
