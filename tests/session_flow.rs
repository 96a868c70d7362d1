use snake_elite::game::{GameMode, GamePhase, GameSession};
use snake_elite::grid::GridWorld;
use snake_elite::input::{Direction, GameInput};
use snake_elite::maze::WallGrid;
use snake_elite::snake::{Position, Snake};

fn p(x: i32, y: i32) -> Position {
    Position { x, y }
}

#[test]
fn classic_session_eats_then_dies_on_itself() {
    let mut session = GameSession::new_with_seed(42);

    session.apply_input(GameInput::Confirm); // PLAY
    assert_eq!(session.phase, GamePhase::ModeSelect);
    session.apply_input(GameInput::Confirm); // CLASSIC ENDLESS
    assert_eq!(session.phase, GamePhase::Playing);
    assert_eq!(session.mode(), GameMode::Classic);

    // Pin the board to a known layout.
    session.snake = Snake::from_segments(vec![p(5, 5), p(4, 5), p(3, 5)]);
    session.food = p(6, 5);

    session.apply_input(GameInput::Direction(Direction::Right));
    session.tick();
    assert_eq!(session.score, 10);
    assert_eq!(session.level, 1);
    assert_eq!(session.snake.len(), 4);
    assert_eq!(session.snake.head(), p(6, 5));

    // Trace a tight loop back into the body.
    session.food = p(0, 0);
    session.apply_input(GameInput::Direction(Direction::Up));
    session.tick();
    assert_eq!(session.snake.head(), p(6, 4));

    session.apply_input(GameInput::Direction(Direction::Left));
    session.tick();
    assert_eq!(session.snake.head(), p(5, 4));

    session.apply_input(GameInput::Direction(Direction::Down));
    session.tick();
    assert_eq!(session.phase, GamePhase::GameOver);

    session.apply_input(GameInput::Confirm);
    assert_eq!(session.phase, GamePhase::Start);
}

#[test]
fn maze_mission_win_unlocks_the_next_level() {
    let mut session = GameSession::new_with_seed(7);

    session.apply_input(GameInput::Confirm); // PLAY
    session.apply_input(GameInput::Direction(Direction::Down)); // MAZE MISSIONS
    session.apply_input(GameInput::Confirm);
    assert_eq!(session.phase, GamePhase::MazeSelect);

    session.apply_input(GameInput::Confirm); // level 1
    assert_eq!(session.phase, GamePhase::Playing);
    assert_eq!(session.mode(), GameMode::Maze);
    assert_eq!(session.snake.len(), 1);
    assert_eq!(session.snake.head(), p(0, 0));

    let bounds = session.world.bounds();
    let target = p(i32::from(bounds.width) - 1, i32::from(bounds.height) - 1);
    assert_eq!(session.food, target);

    // Swap in an unwalled board so the doorstep move is guaranteed open.
    session.world = GridWorld::Maze {
        bounds,
        walls: WallGrid::without_walls(bounds),
    };
    session.snake = Snake::single(p(target.x - 1, target.y));

    session.apply_input(GameInput::Direction(Direction::Right));
    session.tick();
    assert_eq!(session.phase, GamePhase::Win);

    session.apply_input(GameInput::Confirm);
    assert_eq!(session.phase, GamePhase::MazeSelect);
    assert_eq!(session.unlocked_levels, 2);
}

#[test]
fn pause_terrain_roundtrip_keeps_the_game_resumable() {
    let mut session = GameSession::new_with_seed(9);

    session.apply_input(GameInput::Confirm); // PLAY
    session.apply_input(GameInput::Confirm); // CLASSIC ENDLESS
    session.apply_input(GameInput::Direction(Direction::Right));
    session.tick();
    let head_before = session.snake.head();

    session.apply_input(GameInput::Pause);
    assert_eq!(session.phase, GamePhase::Paused);

    // Paused ticks change nothing.
    session.tick();
    assert_eq!(session.snake.head(), head_before);

    // Visit TERRAIN, cycle the theme, come back, resume.
    session.apply_input(GameInput::Direction(Direction::Down));
    session.apply_input(GameInput::Confirm);
    assert_eq!(session.phase, GamePhase::Terrain);
    session.apply_input(GameInput::Direction(Direction::Right));
    assert_eq!(session.theme_index, 1);

    session.apply_input(GameInput::Direction(Direction::Down));
    session.apply_input(GameInput::Direction(Direction::Down));
    session.apply_input(GameInput::Confirm); // BACK
    assert_eq!(session.phase, GamePhase::Paused);

    session.apply_input(GameInput::Confirm); // CONTINUE
    assert_eq!(session.phase, GamePhase::Playing);
    assert_eq!(session.snake.head(), head_before);
}
