//! Engine tests - rules exercised through the public API

use std::cell::RefCell;
use std::rc::Rc;

use swiftris::core::{Block, ConfigError, EventLog, GameConfig, GameEvent, GamePhase, Shape, Swiftris};
use swiftris::types::{BlockColor, Orientation, ShapeKind};

fn fill_row(game: &mut Swiftris, row: usize, gap: Option<usize>) {
    let board = game.board_mut();
    for column in 0..board.columns() {
        if Some(column) != gap {
            board.set(
                column,
                row,
                Some(Block::new(column as i8, row as i8, BlockColor::Blue)),
            );
        }
    }
}

fn spawn(game: &mut Swiftris, kind: ShapeKind, orientation: Orientation) {
    game.set_next_shape(Shape::new(kind, 0, 0, BlockColor::Teal, orientation));
    game.spawn_next();
}

#[test]
fn test_line_piece_scenario() {
    let mut game = Swiftris::new(GameConfig::default(), 1).unwrap();
    game.begin_game();
    fill_row(&mut game, 19, Some(5));
    spawn(&mut game, ShapeKind::Line, Orientation::Zero);

    game.move_shape_right();
    assert_eq!(game.falling_shape().unwrap().column(), 5);
    game.drop_shape();
    game.tick();
    assert!(game.falling_shape().is_none());

    let clear = game.remove_completed_lines();
    assert_eq!(clear.removed_lines.len(), 1);
    assert_eq!(clear.removed_lines[0].len(), 10);
    assert_eq!(game.score(), 10);
    assert_eq!(game.level(), 1);
}

#[test]
fn test_spawn_onto_full_row_zero() {
    let mut game = Swiftris::new(GameConfig::default(), 1).unwrap();
    game.begin_game();
    fill_row(&mut game, 0, None);
    game.set_next_shape(Shape::new(
        ShapeKind::Square,
        0,
        0,
        BlockColor::Yellow,
        Orientation::Zero,
    ));
    assert_eq!(game.spawn_next(), (None, None));
    assert_eq!(game.phase(), GamePhase::GameOver);
    assert!(game.next_shape().is_some());
    assert_eq!(
        game.take_events(),
        vec![GameEvent::GameBegan, GameEvent::GameEnded]
    );
}

#[test]
fn test_move_left_at_wall_fires_nothing() {
    let mut game = Swiftris::new(GameConfig::default(), 1).unwrap();
    spawn(&mut game, ShapeKind::Square, Orientation::Zero);
    while game.falling_shape().unwrap().column() > 0 {
        game.move_shape_left();
    }
    game.take_events();

    game.move_shape_left();
    assert_eq!(game.falling_shape().unwrap().column(), 0);
    assert!(game.take_events().is_empty());
}

#[test]
fn test_settled_blocks_are_in_board() {
    let mut game = Swiftris::new(GameConfig::default(), 1).unwrap();
    spawn(&mut game, ShapeKind::Z, Orientation::Ninety);
    game.drop_shape();
    let shape = *game.falling_shape().unwrap();
    game.settle_shape();

    assert!(game.falling_shape().is_none());
    for block in shape.blocks() {
        assert_eq!(
            game.board().get(block.column as usize, block.row as usize),
            Some(block)
        );
    }
}

#[test]
fn test_collapse_moves_blocks_by_empty_rows_below() {
    let mut game = Swiftris::new(GameConfig::default(), 1).unwrap();
    fill_row(&mut game, 19, None);
    fill_row(&mut game, 18, None);
    let board = game.board_mut();
    board.set(0, 17, Some(Block::new(0, 17, BlockColor::Red)));
    board.set(3, 15, Some(Block::new(3, 15, BlockColor::Red)));
    board.set(3, 16, Some(Block::new(3, 16, BlockColor::Red)));

    let clear = game.remove_completed_lines();
    assert_eq!(clear.removed_lines.len(), 2);
    assert_eq!(game.score(), 20);

    let board = game.board();
    assert!(board.is_occupied(0, 19));
    assert!(board.is_occupied(3, 19));
    assert!(board.is_occupied(3, 18));
    assert_eq!(board.len(), 3);
    // Stored blocks carry their new row.
    assert_eq!(board.get(3, 18).map(|b| b.row), Some(18));
    assert!(board.row(0).all(|cell| cell.is_none()));
}

#[test]
fn test_level_up_notifies_delegate() {
    let config = GameConfig {
        level_threshold: 20,
        ..GameConfig::default()
    };
    let log = Rc::new(RefCell::new(EventLog::new()));
    let mut game = Swiftris::new(config, 1).unwrap();
    game.set_delegate(Box::new(Rc::clone(&log)));

    fill_row(&mut game, 19, None);
    game.remove_completed_lines();
    assert_eq!(game.level(), 1);

    fill_row(&mut game, 19, None);
    game.remove_completed_lines();
    assert_eq!(game.level(), 2);
    assert_eq!(log.borrow().events(), &[GameEvent::LevelUp]);
}

#[test]
fn test_remove_all_blocks_empties_board() {
    let mut game = Swiftris::new(GameConfig::default(), 1).unwrap();
    fill_row(&mut game, 10, Some(2));
    let rows = game.remove_all_blocks();
    assert_eq!(rows.len(), 20);
    assert_eq!(rows[10].len(), 9);
    assert!(game.board().is_empty());
}

#[test]
fn test_random_shapes_spawn_at_start_anchor() {
    let mut game = Swiftris::new(GameConfig::default(), 2024).unwrap();
    game.begin_game();
    for _ in 0..20 {
        let (falling, next) = game.spawn_next();
        let falling = falling.unwrap();
        let next = next.unwrap();
        assert_eq!((falling.column(), falling.row()), (4, 0));
        assert_eq!((next.column(), next.row()), (12, 1));
        game.remove_all_blocks();
    }
}

#[test]
fn test_tall_board_is_rejected_before_play() {
    let config = GameConfig::default().with_board(10, 200);
    assert_eq!(
        Swiftris::new(config, 1).err(),
        Some(ConfigError::BoardTooLarge)
    );

    let config = GameConfig::default().with_board(10, 100);
    let mut game = Swiftris::new(config, 1).unwrap();
    spawn(&mut game, ShapeKind::Line, Orientation::Zero);
    assert!(!game.detect_touch());
    game.drop_shape();
    assert!(game.detect_touch());
    assert_eq!(game.falling_shape().unwrap().bottom_blocks()[0].row, 99);
}
