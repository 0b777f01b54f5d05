use swiftris::core::{Block, GameConfig, GameLoop, Shape, Swiftris};
use swiftris::term::{block_rgb, AnchorY, GameView, StatusView, Viewport};
use swiftris::types::{BlockColor, Orientation, ShapeKind};

#[test]
fn term_view_renders_border_corners() {
    let game = Swiftris::new(GameConfig::default(), 1).unwrap();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board pixels = 10*2 by 20*1 => 20x20
    // plus border => 22x22
    let fb = view.render(&game, &StatusView::default(), Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_settled_block_two_chars_wide() {
    let mut game = Swiftris::new(GameConfig::default(), 1).unwrap();
    game.board_mut()
        .set(0, 19, Some(Block::new(0, 19, BlockColor::Teal)));

    let fb = GameView::default().render(&game, &StatusView::default(), Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let (x0, y0) = (1, 1 + 19);
    assert_eq!(fb.get(x0, y0).unwrap().ch, '█');
    assert_eq!(fb.get(x0 + 1, y0).unwrap().ch, '█');
    assert_eq!(fb.get(x0, y0).unwrap().style.fg, block_rgb(BlockColor::Teal));
    assert_eq!(fb.get(x0 + 2, y0).unwrap().ch, '·');
}

#[test]
fn term_view_follows_board_size() {
    let config = GameConfig::default().with_board(6, 8);
    let game = Swiftris::new(config, 1).unwrap();
    let fb = GameView::default().render(&game, &StatusView::default(), Viewport::new(14, 10));
    assert_eq!(fb.get(13, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 9).unwrap().ch, '└');
}

#[test]
fn term_view_shows_next_shape_preview() {
    let mut game = Swiftris::new(GameConfig::default(), 1).unwrap();
    game.set_next_shape(Shape::new(
        ShapeKind::Line,
        0,
        0,
        BlockColor::Orange,
        Orientation::Ninety,
    ));

    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&game, &StatusView::default(), Viewport::new(50, 22));

    // Panel starts two columns right of the 22-wide frame at x=14.
    let panel_x = 14 + 22 + 2;
    let next_row = (0..22).find(|&y| fb.row_text(y).contains("NEXT")).unwrap();
    let preview: String = (0..8)
        .map(|dx| fb.get(panel_x + dx, next_row + 1).unwrap().ch)
        .collect();
    assert_eq!(preview, "████████");
}

#[test]
fn term_view_status_from_game_loop() {
    let mut game_loop = GameLoop::new(GameConfig::default(), 4).unwrap();
    game_loop.start();
    game_loop.apply(swiftris::types::GameAction::Pause);

    let status = StatusView::from_loop(&game_loop, Some("LEVEL 2"));
    assert!(status.paused);
    let fb = GameView::default().render(game_loop.game(), &status, Viewport::new(60, 24));
    let all: Vec<String> = (0..24).map(|y| fb.row_text(y)).collect();
    assert!(all.iter().any(|row| row.contains("PAUSED")));
    assert!(all.iter().any(|row| row.contains("LEVEL 2")));
}
