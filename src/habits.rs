use serde::Serialize;

use crate::error::{Error, Result};

/// 3 rows of 6 tool slots
pub const TOTAL_SLOTS: usize = 18;
pub const MAX_SELECTED: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Selected,
    Deselected,
    LimitReached,
}

/// Habit tools picked by the patient, in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HabitBoard {
    selected: Vec<usize>,
}

impl HabitBoard {
    pub fn new() -> Self {
        HabitBoard::default()
    }

    /// Build a board by toggling each slot in turn; selections past the
    /// limit are dropped.
    pub fn from_slots(slots: &[usize]) -> Result<Self> {
        let mut board = HabitBoard::new();
        for &slot in slots {
            board.toggle(slot)?;
        }
        Ok(board)
    }

    pub fn toggle(&mut self, slot: usize) -> Result<Toggle> {
        if slot >= TOTAL_SLOTS {
            return Err(Error::InvalidHabitSlot(slot));
        }
        if let Some(pos) = self.selected.iter().position(|&s| s == slot) {
            self.selected.remove(pos);
            return Ok(Toggle::Deselected);
        }
        if self.selected.len() >= MAX_SELECTED {
            return Ok(Toggle::LimitReached);
        }
        self.selected.push(slot);
        Ok(Toggle::Selected)
    }

    pub fn is_selected(&self, slot: usize) -> bool {
        self.selected.contains(&slot)
    }

    pub fn selected(&self) -> &[usize] {
        &self.selected
    }

    pub fn can_save(&self) -> bool {
        !self.selected.is_empty()
    }

    pub fn counter_text(&self) -> String {
        format!("{}/{}", self.selected.len(), MAX_SELECTED)
    }
}
