use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::topic::Topic;

pub const GRID_SIZE: usize = 5;

/// Checked cells needed in a row for a bingo. Deliberately one less than the
/// grid width: four in a row wins.
const WIN_STREAK: usize = 4;

/// One cell of the bingo grid. The topic is copied in at generation time, so
/// later edits to the topic pool never touch an already-generated card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tile {
    pub id: Uuid,
    pub topic: Topic,
    pub is_checked: bool,
}

impl Tile {
    pub fn new(topic: Topic) -> Self {
        Self {
            id: Uuid::new_v4(),
            topic,
            is_checked: false,
        }
    }
}

/// A 5x5 bingo card with derived win state. Starts empty; `generate_card`
/// fills the grid and every mutation keeps `has_won` in sync.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BingoCard {
    tiles: Vec<Vec<Tile>>,
    has_won: bool,
}

impl BingoCard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tiles(&self) -> &[Vec<Tile>] {
        &self.tiles
    }

    pub fn has_won(&self) -> bool {
        self.has_won
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Generate a fresh 5x5 card from the given topic pool. A pool smaller
    /// than 25 is cycled end-to-end until it covers the grid; an empty pool
    /// leaves the card untouched.
    pub fn generate_card(&mut self, topics: &[Topic]) {
        if topics.is_empty() {
            log::warn!("generate_card called with an empty topic pool");
            return;
        }

        let mut pool: Vec<Topic> = if topics.len() < GRID_SIZE * GRID_SIZE {
            topics
                .iter()
                .cloned()
                .cycle()
                .take(GRID_SIZE * GRID_SIZE)
                .collect()
        } else {
            topics.to_vec()
        };

        pool.shuffle(&mut rand::thread_rng());

        self.tiles = pool
            .into_iter()
            .take(GRID_SIZE * GRID_SIZE)
            .map(Tile::new)
            .collect::<Vec<_>>()
            .chunks(GRID_SIZE)
            .map(|row| row.to_vec())
            .collect();
        self.has_won = false;
    }

    /// Toggle the checked state of one tile. Out-of-range coordinates are a
    /// silent no-op.
    pub fn toggle_tile(&mut self, row: usize, col: usize) {
        if self.tiles.is_empty() || row >= GRID_SIZE || col >= GRID_SIZE {
            return;
        }
        self.tiles[row][col].is_checked = !self.tiles[row][col].is_checked;
        self.check_for_win();
    }

    /// Uncheck every tile without regenerating topics.
    pub fn reset_card(&mut self) {
        for row in &mut self.tiles {
            for tile in row {
                tile.is_checked = false;
            }
        }
        self.has_won = false;
    }

    fn check_for_win(&mut self) {
        self.has_won = self.check_rows() || self.check_columns() || self.check_diagonals();
    }

    fn check_rows(&self) -> bool {
        self.tiles
            .iter()
            .any(|row| has_consecutive_checked(row.iter().map(|t| t.is_checked)))
    }

    fn check_columns(&self) -> bool {
        (0..GRID_SIZE)
            .any(|col| has_consecutive_checked(self.tiles.iter().map(|row| row[col].is_checked)))
    }

    fn check_diagonals(&self) -> bool {
        let main = (0..GRID_SIZE).map(|i| self.tiles[i][i].is_checked);
        if has_consecutive_checked(main) {
            return true;
        }
        let anti = (0..GRID_SIZE).map(|i| self.tiles[i][GRID_SIZE - 1 - i].is_checked);
        has_consecutive_checked(anti)
    }
}

/// Run-length scan: true when the line holds at least `WIN_STREAK` checked
/// cells in a row. A gap resets the count, so scattered checks never win.
fn has_consecutive_checked(line: impl Iterator<Item = bool>) -> bool {
    let mut count = 0;
    for is_checked in line {
        if is_checked {
            count += 1;
            if count >= WIN_STREAK {
                return true;
            }
        } else {
            count = 0;
        }
    }
    false
}
