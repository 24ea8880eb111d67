use core::mem;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - AwaitingGeneration -> InProgress (first select generates the layout)
/// - InProgress -> Lost
/// - InProgress -> Won
/// - any -> AwaitingGeneration (reset from the menu, or new settings)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    AwaitingGeneration,
    InProgress,
    Lost,
    Won,
}

impl GameState {
    pub const fn is_awaiting_generation(self) -> bool {
        matches!(self, Self::AwaitingGeneration)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::AwaitingGeneration
    }
}

/// Signals gathered by the host for a single frame.
///
/// The flags are one-shot: whichever one gets handled is cleared. The cursor is in device space, `[-1, 1]` on
/// both axes, and is only read.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Input {
    pub toggle_menu: bool,
    pub select: bool,
    pub flag: bool,
    pub cursor: Vec2,
}

impl Input {
    pub fn select_at(cursor: Vec2) -> Self {
        Self {
            select: true,
            cursor,
            ..Default::default()
        }
    }

    pub fn flag_at(cursor: Vec2) -> Self {
        Self {
            flag: true,
            cursor,
            ..Default::default()
        }
    }

    pub fn toggle_menu() -> Self {
        Self {
            toggle_menu: true,
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.toggle_menu || self.select || self.flag)
    }
}

/// What the host should do after a frame update.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameSignal {
    None,
    Redraw,
    OpenSettings,
    Quit,
}

/// Which update routine receives input, selected by the pause flag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    Board,
    Menu,
}

/// Board, menu and the rules that tie them together.
#[derive(Clone, Debug)]
pub struct Game<G = SafeZoneGenerator> {
    board: Board,
    reveal_queue: RevealQueue,
    generator: G,
    menu: Menu,
    viewport: Viewport,
    layout: BoardLayout,
    state: GameState,
    paused: bool,
}

impl Game {
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_generator(config, SafeZoneGenerator::new(seed))
    }
}

impl<G: MinefieldGenerator> Game<G> {
    /// Starts on the menu, with the layout generated by the first select.
    pub fn with_generator(config: GameConfig, generator: G) -> Result<Self> {
        let board = Board::new(config)?;
        let reveal_queue = RevealQueue::new(board.size())?;
        let viewport = Viewport::default();
        log::debug!(
            "New {}x{} game with {} mines",
            config.width,
            config.height,
            config.mines
        );
        Ok(Self {
            layout: BoardLayout::compute(board.size(), viewport),
            board,
            reveal_queue,
            generator,
            menu: Menu::new(),
            viewport,
            state: GameState::default(),
            paused: true,
        })
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn mode(&self) -> Mode {
        if self.paused { Mode::Menu } else { Mode::Board }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    pub fn config(&self) -> GameConfig {
        let size = self.board.size();
        GameConfig::new_unchecked(size.width, size.height, self.board.mine_count())
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn unpause(&mut self) {
        self.paused = false;
    }

    /// Consumes at most one pending signal and reports what the host should do next.
    pub fn frame_update(&mut self, input: &mut Input) -> FrameSignal {
        match self.mode() {
            Mode::Board => self.board_update(input),
            Mode::Menu => self.menu_update(input),
        }
    }

    fn board_update(&mut self, input: &mut Input) -> FrameSignal {
        let target = self.layout.tile_at(input.cursor);

        if mem::take(&mut input.select) {
            if let Some(index) = target {
                let outcome = self.select_tile(index);
                log::debug!("select tile {}: {:?}", index, outcome);
            }
            return FrameSignal::Redraw;
        }

        if mem::take(&mut input.flag) {
            if let Some(index) = target {
                let outcome = self.toggle_flag(index);
                log::debug!("flag tile {}: {:?}", index, outcome);
            }
            return FrameSignal::Redraw;
        }

        if mem::take(&mut input.toggle_menu) {
            log::debug!("open menu");
            self.pause();
            return FrameSignal::Redraw;
        }

        FrameSignal::None
    }

    fn menu_update(&mut self, input: &mut Input) -> FrameSignal {
        if mem::take(&mut input.select) {
            let point = self.layout.to_board_space(input.cursor);
            let button = self.menu.hit_test(point);
            log::debug!("menu select: {:?}", button);
            return match button {
                Some(MenuButton::Continue) => {
                    if self.state.is_finished() {
                        self.reset();
                    }
                    self.unpause();
                    FrameSignal::Redraw
                }
                Some(MenuButton::Settings) => FrameSignal::OpenSettings,
                Some(MenuButton::Quit) => FrameSignal::Quit,
                None => FrameSignal::None,
            };
        }

        // flags mean nothing on the menu
        if mem::take(&mut input.flag) {
            return FrameSignal::None;
        }

        if mem::take(&mut input.toggle_menu) {
            log::debug!("close menu");
            self.unpause();
            return FrameSignal::Redraw;
        }

        FrameSignal::None
    }

    /// Generates the layout on the first select, then reveals `index` if it is hidden.
    pub fn select_tile(&mut self, index: TileIndex) -> RevealOutcome {
        if !self.board.contains(index) {
            return RevealOutcome::NoChange;
        }

        if self.state.is_awaiting_generation() {
            self.generator.generate(&mut self.board, index);
            self.state = GameState::InProgress;
            log::debug!("Layout generated around tile {}", index);
        }

        if !self.board.mask(index).is_hidden() {
            return RevealOutcome::NoChange;
        }

        self.reveal_queue.reveal(&mut self.board, index);

        if self.board.is_mine(index) {
            self.state = GameState::Lost;
            self.board.reveal_mines();
            self.pause();
            log::debug!("Hit mine at tile {}", index);
            RevealOutcome::HitMine
        } else if self.board.free_space() == 0 {
            self.state = GameState::Won;
            self.pause();
            log::debug!("Board cleared");
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        }
    }

    pub fn toggle_flag(&mut self, index: TileIndex) -> MarkOutcome {
        if !self.board.contains(index) {
            return MarkOutcome::NoChange;
        }
        self.board.toggle_flag(index)
    }

    /// Hides the board again and waits for a new first select.
    pub fn reset(&mut self) {
        self.board.clear();
        self.state = GameState::AwaitingGeneration;
    }

    /// Replaces the board with one of the new dimensions. Rejected settings leave everything untouched.
    pub fn apply_settings(&mut self, config: GameConfig) -> Result<()> {
        let board = Board::new(config)?;
        let reveal_queue = RevealQueue::new(board.size())?;

        self.board = board;
        self.reveal_queue = reveal_queue;
        self.layout = BoardLayout::compute(self.board.size(), self.viewport);
        self.state = GameState::AwaitingGeneration;
        log::info!(
            "Settings applied: {}x{} with {} mines",
            config.width,
            config.height,
            config.mines
        );
        Ok(())
    }

    /// Window changes only move things around on screen, the board stays as it is.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.layout = BoardLayout::compute(self.board.size(), viewport);
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }
}
