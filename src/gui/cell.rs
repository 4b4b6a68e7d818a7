//! How a board cell looks on its button.

use eframe::egui::{self, Color32, RichText};

use crate::core::CellState;

pub const CELL_SIZE: f32 = 50.0;

const SHIP_FILL: Color32 = Color32::BLUE;
const HIT_FILL: Color32 = Color32::RED;
const MISS_FILL: Color32 = Color32::GRAY;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellFace {
    pub label: &'static str,
    /// `None` keeps the theme's default button background.
    pub fill: Option<Color32>,
    pub text_color: Color32,
    pub bold: bool,
}

impl CellFace {
    const BLANK: CellFace = CellFace {
        label: "",
        fill: None,
        text_color: Color32::BLACK,
        bold: false,
    };

    pub fn button(&self) -> egui::Button<'static> {
        let mut text = RichText::new(self.label).color(self.text_color);
        if self.bold {
            text = text.strong();
        }
        let button = egui::Button::new(text).min_size(egui::vec2(CELL_SIZE, CELL_SIZE));
        match self.fill {
            Some(fill) => button.fill(fill),
            None => button,
        }
    }
}

/// Face for a cell. Ships afloat are only drawn when `reveal_ships` is set,
/// i.e. on the user's own board.
pub fn cell_face(state: CellState, reveal_ships: bool) -> CellFace {
    match state {
        CellState::Empty => CellFace::BLANK,
        CellState::Ship if reveal_ships => CellFace {
            label: "",
            fill: Some(SHIP_FILL),
            text_color: Color32::WHITE,
            bold: true,
        },
        CellState::Ship => CellFace::BLANK,
        CellState::Hit => CellFace {
            label: "X",
            fill: Some(HIT_FILL),
            text_color: Color32::WHITE,
            bold: true,
        },
        CellState::Miss => CellFace {
            label: "O",
            fill: Some(MISS_FILL),
            text_color: Color32::BLACK,
            bold: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_ship_looks_like_water() {
        assert_eq!(cell_face(CellState::Ship, false), cell_face(CellState::Empty, false));
    }

    #[test]
    fn own_ship_is_blue() {
        let face = cell_face(CellState::Ship, true);
        assert_eq!(face.fill, Some(Color32::BLUE));
        assert_eq!(face.label, "");
    }

    #[test]
    fn hits_and_misses_are_marked_on_both_boards() {
        for reveal in [true, false] {
            let hit = cell_face(CellState::Hit, reveal);
            assert_eq!((hit.label, hit.fill), ("X", Some(Color32::RED)));
            let miss = cell_face(CellState::Miss, reveal);
            assert_eq!((miss.label, miss.fill), ("O", Some(Color32::GRAY)));
        }
    }
}
