//! Board tests - grid storage and blocks

use swiftris::core::{Array2D, Block};
use swiftris::types::{BlockColor, NUM_COLUMNS, NUM_ROWS};

fn board() -> Array2D<Block> {
    Array2D::new(NUM_COLUMNS as usize, NUM_ROWS as usize)
}

#[test]
fn test_board_new_empty() {
    let board = board();
    assert_eq!(board.columns(), 10);
    assert_eq!(board.rows(), 20);

    for row in 0..20 {
        for column in 0..10 {
            assert!(board.contains(column, row));
            assert_eq!(board.get(column, row), None);
        }
    }
    assert!(!board.contains(10, 0));
    assert!(!board.contains(0, 20));
}

#[test]
fn test_board_set_and_get() {
    let mut board = board();
    let block = Block::new(5, 10, BlockColor::Purple);
    board.set(5, 10, Some(block));
    assert_eq!(board.get(5, 10), Some(&block));
    assert_eq!(board.len(), 1);

    // Overwriting keeps one block per cell
    let other = Block::new(5, 10, BlockColor::Red);
    board.set(5, 10, Some(other));
    assert_eq!(board.get(5, 10), Some(&other));
    assert_eq!(board.len(), 1);
}

#[test]
fn test_board_get_mut_moves_block() {
    let mut board = board();
    board.set(3, 4, Some(Block::new(3, 4, BlockColor::Blue)));
    if let Some(block) = board.get_mut(3, 4) {
        block.row = 5;
    }
    let moved = board.take(3, 4).unwrap();
    board.set(3, 5, Some(moved));
    assert_eq!(board.get(3, 5).map(|b| b.row), Some(5));
    assert!(!board.is_occupied(3, 4));
}

#[test]
#[should_panic]
fn test_board_out_of_bounds_panics() {
    let mut board = board();
    board.set(0, 20, Some(Block::new(0, 20, BlockColor::Teal)));
}

#[test]
fn test_block_equality_uses_color() {
    let a = Block::new(1, 2, BlockColor::Blue);
    let b = Block::new(1, 2, BlockColor::Yellow);
    assert_ne!(a, b);
    // The bucket key ignores color and collides for swapped coordinates.
    assert_eq!(a.bucket_key(), b.bucket_key());
    assert_eq!(
        Block::new(1, 2, BlockColor::Blue).bucket_key(),
        Block::new(2, 1, BlockColor::Blue).bucket_key()
    );
}

#[test]
fn test_block_display() {
    let block = Block::new(4, 0, BlockColor::Orange);
    assert_eq!(block.to_string(), "orange: [4, 0]");
    assert_eq!(block.sprite_name(), "orange");
}
