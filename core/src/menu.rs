use serde::{Deserialize, Serialize};

use crate::*;

/// Button extent in board space.
pub(crate) const BUTTON_SIZE: Vec2 = Vec2::new(0.5, 0.1);
const BUTTON_GAP: f32 = 0.3;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuButton {
    /// Resumes the game, or starts over once it has ended.
    Continue,
    Settings,
    Quit,
}

impl MenuButton {
    pub const ALL: [Self; 3] = [Self::Continue, Self::Settings, Self::Quit];

    /// Top-to-bottom slot of the button, starting at 0.
    pub const fn slot(self) -> u8 {
        match self {
            Self::Continue => 0,
            Self::Settings => 1,
            Self::Quit => 2,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.get(usize::from(number.checked_sub(1)?)).copied()
    }

    pub(crate) fn device_center(self) -> Vec2 {
        Vec2::new(0.0, -BUTTON_GAP * f32::from(self.slot()))
    }

    /// Hit box in board space, matching the quad the renderer draws.
    fn rect(self) -> Rect {
        let center = (self.device_center() + Vec2::splat(1.0)) * 0.5;
        Rect::new(center - BUTTON_SIZE * 0.5, BUTTON_SIZE)
    }
}

/// Title art shown above the buttons.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuTitle {
    Start,
    Paused,
    Lost,
    Won,
}

impl MenuTitle {
    pub const fn atlas_index(self) -> u8 {
        match self {
            Self::Start => 0,
            Self::Paused => 1,
            Self::Lost => 2,
            Self::Won => 3,
        }
    }
}

impl From<GameState> for MenuTitle {
    fn from(state: GameState) -> Self {
        match state {
            GameState::AwaitingGeneration => Self::Start,
            GameState::InProgress => Self::Paused,
            GameState::Lost => Self::Lost,
            GameState::Won => Self::Won,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Button {
    pub kind: MenuButton,
    pub rect: Rect,
}

/// The pause menu: a fixed column of buttons.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    buttons: [Button; 3],
}

impl Menu {
    pub fn new() -> Self {
        Self {
            buttons: MenuButton::ALL.map(|kind| Button {
                kind,
                rect: kind.rect(),
            }),
        }
    }

    pub fn buttons(&self) -> &[Button; 3] {
        &self.buttons
    }

    /// First button containing `point`, given in board space.
    pub fn hit_test(&self, point: Vec2) -> Option<MenuButton> {
        self.buttons
            .iter()
            .find(|button| button.rect.contains(point))
            .map(|button| button.kind)
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}
