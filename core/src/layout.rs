use core::ops::{Add, Div, Mul, Sub};
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn splat(v: f32) -> Self {
        Self::new(v, v)
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul for Vec2 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Div for Vec2 {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// Axis-aligned rectangle, half-open on both axes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.origin.x
            && point.x < self.origin.x + self.size.x
            && point.y >= self.origin.y
            && point.y < self.origin.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.origin + self.size * 0.5
    }
}

/// Textured quad in device space, drawn as `center ± half_size`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Quad {
    pub center: Vec2,
    pub half_size: Vec2,
}

/// Window extent normalized so the shorter side is 1.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub size: Vec2,
}

impl Viewport {
    pub fn from_window(width: u32, height: u32) -> Self {
        if width == 0 || height == 0 {
            log::debug!("Degenerate window {}x{}, assuming square", width, height);
            return Self::default();
        }
        let ratio = width as f32 / height as f32;
        let size = if ratio >= 1.0 {
            Vec2::new(ratio, 1.0)
        } else {
            Vec2::new(1.0, 1.0 / ratio)
        };
        Self { size }
    }

    pub fn aspect(&self) -> f32 {
        self.size.x / self.size.y
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            size: Vec2::splat(1.0),
        }
    }
}

const TITLE_CENTER: Vec2 = Vec2::new(0.0, 0.65);
const TITLE_HALF_SIZE: Vec2 = Vec2::new(0.7, 0.3);

/// Where the board and menu sit on screen for a given board size and window shape.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardLayout {
    board: BoardSize,
    /// Fraction of the device square the board covers, the larger axis is 1.
    pub game_size: Vec2,
    /// Half extent of one tile in device space.
    pub tile_size: Vec2,
}

impl BoardLayout {
    pub fn compute(board: BoardSize, viewport: Viewport) -> Self {
        let width = f32::from(board.width.max(1));
        let height = f32::from(board.height.max(1));

        let mut game_size = Vec2::new((width / height) / viewport.aspect(), 1.0);
        if game_size.x > 1.0 {
            game_size.y /= game_size.x;
            game_size.x = 1.0;
        }
        let tile_size = game_size / Vec2::new(width, height);

        Self {
            board,
            game_size,
            tile_size,
        }
    }

    pub fn board(&self) -> BoardSize {
        self.board
    }

    /// Maps a device-space cursor into board space, where the board spans `[0, 1)` on both axes.
    pub fn to_board_space(&self, cursor: Vec2) -> Vec2 {
        (cursor / self.game_size + Vec2::splat(1.0)) * 0.5
    }

    pub fn to_device_space(&self, point: Vec2) -> Vec2 {
        (point * 2.0 - Vec2::splat(1.0)) * self.game_size
    }

    /// Tile under a device-space cursor, if any.
    pub fn tile_at(&self, cursor: Vec2) -> Option<TileIndex> {
        let point = self.to_board_space(cursor);
        if !(point.x >= 0.0 && point.y >= 0.0) {
            return None;
        }
        let x = (point.x * f32::from(self.board.width)) as u32;
        let y = (point.y * f32::from(self.board.height)) as u32;
        if x >= u32::from(self.board.width) || y >= u32::from(self.board.height) {
            return None;
        }
        self.board.index_of((x.try_into().ok()?, y.try_into().ok()?))
    }

    pub fn tile_center(&self, index: TileIndex) -> Option<Vec2> {
        let (x, y) = self.board.coords_of(index)?;
        let offset = |i: Coord, n: Coord| f32::from(i) + 0.5 - 0.5 * f32::from(n);
        Some(Vec2::new(offset(x, self.board.width), offset(y, self.board.height)) * self.tile_size * 2.0)
    }

    pub fn tile_quad(&self, index: TileIndex) -> Option<Quad> {
        Some(Quad {
            center: self.tile_center(index)?,
            half_size: self.tile_size,
        })
    }

    pub fn title_quad(&self) -> Quad {
        Quad {
            center: TITLE_CENTER * self.game_size,
            half_size: TITLE_HALF_SIZE * self.game_size,
        }
    }

    pub fn button_quad(&self, button: MenuButton) -> Quad {
        let extent = self.to_device_space(BUTTON_SIZE) - self.to_device_space(Vec2::default());
        Quad {
            center: button.device_center() * self.game_size,
            half_size: extent * 0.5,
        }
    }
}
