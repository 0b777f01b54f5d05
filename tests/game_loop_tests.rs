//! Game loop integration tests - a whole game driven by actions and time

use std::cell::RefCell;
use std::rc::Rc;

use swiftris::core::{GameConfig, GameLoop, GamePhase};
use swiftris::term::Hud;
use swiftris::types::{GameAction, FRAME_MS};

#[test]
fn test_game_lifecycle() {
    let mut game_loop = GameLoop::new(GameConfig::default(), 12345).unwrap();
    assert!(!game_loop.is_running());

    game_loop.start();
    assert!(game_loop.is_running());
    assert!(game_loop.is_ticking());
    assert!(game_loop.game().falling_shape().is_some());
    assert!(!game_loop.is_paused());
}

#[test]
fn test_gravity_runs_from_frame_updates() {
    let mut game_loop = GameLoop::new(GameConfig::default(), 12345).unwrap();
    game_loop.start();
    let start_row = game_loop.game().falling_shape().unwrap().row();

    // 600ms at 16ms per frame needs 38 frames to pass the interval.
    for _ in 0..38 {
        game_loop.update(FRAME_MS);
    }
    assert_eq!(game_loop.game().falling_shape().unwrap().row(), start_row + 1);
}

#[test]
fn test_hard_drops_until_game_over() {
    let mut game_loop = GameLoop::new(GameConfig::default(), 7).unwrap();
    game_loop.start();

    // Stacking shapes in the middle column eventually blocks the spawn point.
    let mut drops = 0;
    while game_loop.is_running() {
        game_loop.apply(GameAction::HardDrop);
        drops += 1;
        assert!(drops < 200, "game never ended");
    }

    assert_eq!(game_loop.game().phase(), GamePhase::GameOver);
    assert!(!game_loop.is_ticking());
    assert!(game_loop.game().board().is_empty());
    assert!(game_loop.last_score().is_some());

    game_loop.apply(GameAction::Restart);
    assert!(game_loop.is_running());
    assert!(game_loop.game().falling_shape().is_some());
}

#[test]
fn test_hud_follows_the_game() {
    let hud = Rc::new(RefCell::new(Hud::new()));
    let mut game_loop = GameLoop::new(GameConfig::default(), 99).unwrap();
    game_loop.set_presenter(Box::new(Rc::clone(&hud)));

    game_loop.start();
    assert_eq!(hud.borrow().message(), Some("GO!"));
    assert_eq!(hud.borrow().games_played(), 1);

    game_loop.apply(GameAction::HardDrop);
    game_loop.apply(GameAction::HardDrop);
    assert_eq!(hud.borrow().landings(), 2);

    game_loop.apply(GameAction::Restart);
    assert_eq!(hud.borrow().games_played(), 2);
    assert_eq!(hud.borrow().landings(), 0);
}

#[test]
fn test_same_seed_same_game() {
    let actions = [
        GameAction::MoveLeft,
        GameAction::RotateCw,
        GameAction::HardDrop,
        GameAction::MoveRight,
        GameAction::MoveRight,
        GameAction::RotateCcw,
        GameAction::SoftDrop,
        GameAction::HardDrop,
    ];

    let mut a = GameLoop::new(GameConfig::default(), 31337).unwrap();
    let mut b = GameLoop::new(GameConfig::default(), 31337).unwrap();
    a.start();
    b.start();
    for action in actions {
        a.apply(action);
        b.apply(action);
        assert_eq!(a.game().falling_shape(), b.game().falling_shape());
        assert_eq!(a.game().board(), b.game().board());
    }
}
