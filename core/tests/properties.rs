//! Property-based tests for generation, reveal and the game rules.

use std::collections::VecDeque;

use proptest::prelude::*;
use sweeper_core::*;

// ===========================================================================
// Generators
// ===========================================================================

/// A valid configuration plus a seed and a first tile on that board.
fn arb_setup() -> impl Strategy<Value = (GameConfig, u64, TileIndex)> {
    (2..=24u8, 1..=24u8)
        .prop_flat_map(|(width, height)| {
            let total = mult(width, height);
            (Just(width), Just(height), 1..total, 0..total, any::<u64>())
        })
        .prop_map(|(width, height, mines, start, seed)| {
            (GameConfig::new_unchecked(width, height, mines), seed, start)
        })
}

fn started_game(config: GameConfig, seed: u64, start: TileIndex) -> Game {
    let mut game = Game::new(config, seed).unwrap();
    game.unpause();
    game.select_tile(start);
    game
}

fn mines_of(board: &Board) -> Vec<TileIndex> {
    (0..board.total_tiles()).filter(|&index| board.is_mine(index)).collect()
}

/// Tiles a first reveal at `start` must open: the zero region reachable from it plus its numbered border.
fn expected_opening(board: &Board, start: TileIndex) -> Vec<bool> {
    let mut open = vec![false; usize::from(board.total_tiles())];
    let mut queue = VecDeque::from([start]);
    open[usize::from(start)] = true;
    while let Some(index) = queue.pop_front() {
        if board.value(index) != TileValue::Adjacent(0) {
            continue;
        }
        for neighbor in board.size().iter_neighbors(index) {
            if !open[usize::from(neighbor)] {
                open[usize::from(neighbor)] = true;
                queue.push_back(neighbor);
            }
        }
    }
    open
}

// ===========================================================================
// Properties
// ===========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// The layout holds exactly the configured mines and never one under the first tile.
    #[test]
    fn generation_places_exact_count_away_from_start((config, seed, start) in arb_setup()) {
        let mut board = Board::new(config).unwrap();
        SafeZoneGenerator::new(seed).generate(&mut board, start);

        prop_assert_eq!(board.mined_tiles(), config.mines);
        prop_assert!(!board.is_mine(start));
        prop_assert_eq!(board.free_space(), config.total_tiles() - config.mines);
    }

    /// Neighbors of the first tile stay clear whenever the rest of the board can hold every mine.
    #[test]
    fn safe_zone_is_clear_when_room_allows((config, seed, start) in arb_setup()) {
        let mut board = Board::new(config).unwrap();
        SafeZoneGenerator::new(seed).generate(&mut board, start);

        let zone = board.size().iter_neighbors(start).count() as CellCount + 1;
        if config.total_tiles() - zone >= config.mines {
            prop_assert!(board.size().iter_neighbors(start).all(|index| !board.is_mine(index)));
        }
    }

    /// Every safe tile holds the number of mines around it.
    #[test]
    fn adjacency_values_match_neighbors((config, seed, start) in arb_setup()) {
        let mut board = Board::new(config).unwrap();
        SafeZoneGenerator::new(seed).generate(&mut board, start);

        for index in 0..board.total_tiles() {
            if board.is_mine(index) {
                continue;
            }
            let expected = board
                .size()
                .iter_neighbors(index)
                .filter(|&neighbor| board.is_mine(neighbor))
                .count() as u8;
            prop_assert_eq!(board.value(index), TileValue::Adjacent(expected));
        }
    }

    /// After a reveal, no revealed zero tile borders a hidden tile.
    #[test]
    fn flood_fill_is_closed((config, seed, start) in arb_setup()) {
        let game = started_game(config, seed, start);
        let board = game.board();

        prop_assert_eq!(board.mask(start), TileMask::Revealed);
        for index in 0..board.total_tiles() {
            if board.mask(index) == TileMask::Revealed && board.value(index).is_zero() {
                for neighbor in board.size().iter_neighbors(index) {
                    prop_assert_eq!(board.mask(neighbor), TileMask::Revealed);
                }
            }
        }
    }

    /// The first reveal opens exactly the zero region and its border, and free space shrinks by that much.
    #[test]
    fn first_reveal_opens_exactly_the_zero_region((config, seed, start) in arb_setup()) {
        let game = started_game(config, seed, start);
        let board = game.board();
        let expected = expected_opening(board, start);

        for index in 0..board.total_tiles() {
            let open = board.mask(index) == TileMask::Revealed;
            prop_assert_eq!(open, expected[usize::from(index)], "tile {}", index);
        }
        let opened = expected.iter().filter(|&&open| open).count() as CellCount;
        prop_assert_eq!(board.free_space(), config.total_tiles() - config.mines - opened);
    }

    /// Revealing an already revealed tile changes nothing.
    #[test]
    fn reveal_is_idempotent((config, seed, start) in arb_setup()) {
        let mut game = started_game(config, seed, start);
        let before = game.board().clone();
        let state = game.state();

        prop_assert_eq!(game.select_tile(start), RevealOutcome::NoChange);
        prop_assert_eq!(game.board(), &before);
        prop_assert_eq!(game.state(), state);
    }

    /// The game is won exactly when the last safe tile is revealed.
    #[test]
    fn won_iff_no_free_space_left((config, seed, start) in arb_setup()) {
        let mut game = started_game(config, seed, start);

        for index in 0..config.total_tiles() {
            prop_assert_eq!(game.state() == GameState::Won, game.board().free_space() == 0);
            if !game.board().is_mine(index) {
                game.select_tile(index);
            }
        }

        prop_assert_eq!(game.state(), GameState::Won);
        prop_assert_eq!(game.board().free_space(), 0);
        prop_assert!(mines_of(game.board()).iter().all(|&mine| game.board().mask(mine).is_hidden()));
    }

    /// Losing uncovers the unflagged mines and leaves flags and safe tiles alone.
    #[test]
    fn loss_reveals_unflagged_mines_only(
        (config, seed, start) in arb_setup(),
        flag_bits in any::<u64>(),
    ) {
        let mut game = started_game(config, seed, start);
        prop_assume!(game.state() == GameState::InProgress);

        let mines = mines_of(game.board());
        for (i, &mine) in mines.iter().enumerate() {
            if flag_bits >> (i % 64) & 1 == 1 {
                game.toggle_flag(mine);
            }
        }
        let target = mines.iter().copied().find(|&mine| game.board().mask(mine).is_hidden());
        prop_assume!(target.is_some());
        let before = game.board().clone();

        prop_assert_eq!(game.select_tile(target.unwrap()), RevealOutcome::HitMine);
        prop_assert_eq!(game.state(), GameState::Lost);
        for index in 0..config.total_tiles() {
            let expected = match before.mask(index) {
                TileMask::Hidden if before.is_mine(index) => TileMask::Revealed,
                mask => mask,
            };
            prop_assert_eq!(game.board().mask(index), expected);
        }
    }

    /// Flagging twice restores the board, and never touches free space.
    #[test]
    fn flag_toggle_is_pure((config, seed, start) in arb_setup(), pick in any::<u16>()) {
        let mut game = started_game(config, seed, start);
        prop_assume!(game.state() == GameState::InProgress);
        let index = pick % config.total_tiles();
        let before = game.board().clone();

        let first = game.toggle_flag(index);
        prop_assert_eq!(game.board().free_space(), before.free_space());
        let second = game.toggle_flag(index);

        prop_assert_eq!(first, second);
        prop_assert_eq!(game.board(), &before);
    }
}

#[test]
fn full_board_is_rejected_one_less_is_accepted() {
    let mut game = Game::new(GameConfig::new(9, 9, 10).unwrap(), 7).unwrap();

    assert_eq!(
        game.apply_settings(GameConfig::new_unchecked(5, 5, 25)),
        Err(GameError::RejectedSettings {
            width: 5,
            height: 5,
            mines: 25
        })
    );
    assert_eq!(game.board().size(), BoardSize::new(9, 9));

    game.apply_settings(GameConfig::new_unchecked(5, 5, 24)).unwrap();
    game.unpause();
    assert_eq!(game.select_tile(12), RevealOutcome::Won);
    assert_eq!(game.board().mined_tiles(), 24);
}

#[test]
fn single_mine_in_center_of_three_by_three() {
    let mut game = Game::new(GameConfig::new(3, 3, 1).unwrap(), 42).unwrap();
    game.unpause();

    // every neighbor of the center is in the safe zone, so the mine has nowhere to go but a neighbor
    assert_eq!(game.select_tile(4), RevealOutcome::Revealed);
    assert_eq!(game.board().mined_tiles(), 1);
    assert!(!game.board().is_mine(4));
    assert_eq!(game.board().value(4), TileValue::Adjacent(1));
    assert_eq!(game.board().free_space(), 7);
}
