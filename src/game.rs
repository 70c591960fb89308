use crate::apple::place_apple;
use crate::config::Settings;
use crate::direction::Direction;
use crate::geometry::{Cell, Grid};
use crate::snake::Snake;
use crate::timer::MoveTimer;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver,
}

/// What one call to [`GameState::advance`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Moved,
    AteApple,
    Collided,
}

pub struct GameState {
    pub grid: Grid,
    pub snake: Snake,
    pub apple: Cell,
    pub current_dir: Direction,
    pub pending_dir: Direction,
    pub phase: Phase,
    pub paused: bool,
    pub score: usize,
    pub timer: MoveTimer,
    base_interval: Duration,
    boost_interval: Duration,
    rng: SmallRng,
}

impl GameState {
    pub fn new(settings: &Settings, now: Instant) -> Self {
        Self::with_rng(settings, now, SmallRng::from_entropy())
    }

    pub fn with_rng(settings: &Settings, now: Instant, rng: SmallRng) -> Self {
        let grid = settings.grid();
        let snake = Snake::new(grid.center());
        let mut g = Self {
            grid,
            snake,
            apple: grid.cell_at(0, 0),
            current_dir: Direction::Idle,
            pending_dir: Direction::Idle,
            phase: Phase::Playing,
            paused: false,
            score: 0,
            timer: MoveTimer::new(settings.move_interval(), now),
            base_interval: settings.move_interval(),
            boost_interval: settings.boost_interval(),
            rng,
        };
        g.apple = place_apple(&g.grid, &g.snake, &mut g.rng);
        g
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Buffers a turn for the next tick. A turn straight back into the body is dropped.
    pub fn steer(&mut self, dir: Direction) {
        if self.phase != Phase::Playing || self.paused || dir == Direction::Idle {
            return;
        }
        if self.current_dir.reverses(dir) {
            log::trace!("ignoring {dir:?} while heading {:?}", self.current_dir);
            return;
        }
        if self.pending_dir != dir {
            log::debug!("turn buffered: {:?} -> {dir:?}", self.pending_dir);
            self.pending_dir = dir;
        }
    }

    /// Resuming starts a full interval at `now`, so the snake does not jump on the first frame.
    pub fn toggle_pause(&mut self, now: Instant) {
        if self.phase == Phase::Playing {
            self.paused = !self.paused;
            if !self.paused {
                self.timer.reset(now);
            }
            log::info!("{}", if self.paused { "paused" } else { "resumed" });
        }
    }

    /// Switches between the normal and the boosted move interval.
    pub fn set_boost(&mut self, held: bool) {
        let interval = if held { self.boost_interval } else { self.base_interval };
        if self.timer.interval() != interval {
            self.timer.set_interval(interval);
        }
    }

    /// Called every frame. Moves the snake at most once per interval.
    pub fn update(&mut self, now: Instant) -> Option<Step> {
        if self.phase != Phase::Playing || self.paused {
            return None;
        }
        if self.current_dir == Direction::Idle && self.pending_dir == Direction::Idle {
            return None;
        }
        if !self.timer.poll(now) {
            return None;
        }
        self.current_dir = self.pending_dir;
        self.advance()
    }

    /// One movement tick in `current_dir`. `None` while idle or after game over.
    pub fn advance(&mut self) -> Option<Step> {
        if self.phase != Phase::Playing {
            return None;
        }
        let (dx, dy) = self.current_dir.delta()?;
        let cell = self.grid.cell;
        let new_head = self.grid.wrap(self.snake.head().offset(dx * cell, dy * cell));

        if self.snake.collides_after_move(new_head) {
            self.phase = Phase::GameOver;
            log::info!("game over, score {} with length {}", self.score, self.snake.len());
            return Some(Step::Collided);
        }

        let tail_prev = self.snake.slide(new_head);
        log::trace!("head -> ({}, {})", new_head.x, new_head.y);

        if new_head == self.apple {
            self.snake.grow(tail_prev);
            self.score += 1;
            self.apple = place_apple(&self.grid, &self.snake, &mut self.rng);
            return Some(Step::AteApple);
        }
        Some(Step::Moved)
    }

    /// Back to a single centred segment with a fresh apple and no heading.
    pub fn restart(&mut self) {
        self.snake = Snake::new(self.grid.center());
        self.apple = place_apple(&self.grid, &self.snake, &mut self.rng);
        self.current_dir = Direction::Idle;
        self.pending_dir = Direction::Idle;
        self.phase = Phase::Playing;
        self.paused = false;
        self.score = 0;
        log::info!("restarted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> GameState {
        GameState::with_rng(&Settings::default(), Instant::now(), SmallRng::seed_from_u64(3))
    }

    fn with_body(cells: &[(i32, i32)]) -> GameState {
        let mut g = game();
        g.snake = Snake::from_segments(cells.iter().map(|&(x, y)| Cell::new(x, y))).unwrap();
        g.apple = Cell::new(0, 0);
        g
    }

    #[test]
    fn test_new_game_is_idle_at_center() {
        let g = game();
        assert_eq!(g.snake.len(), 1);
        assert_eq!(g.snake.head(), Cell::new(390, 290));
        assert_eq!(g.current_dir, Direction::Idle);
        assert!(!g.is_game_over());
        assert!(!g.snake.contains(g.apple));
    }

    #[test]
    fn test_reversal_guard() {
        let mut g = game();
        g.current_dir = Direction::Right;
        g.pending_dir = Direction::Right;

        g.steer(Direction::Left);
        assert_eq!(g.pending_dir, Direction::Right);

        g.steer(Direction::Up);
        assert_eq!(g.pending_dir, Direction::Up);
        g.steer(Direction::Down);
        assert_eq!(g.pending_dir, Direction::Down);
        // Still heading right until the next tick
        assert_eq!(g.current_dir, Direction::Right);
    }

    #[test]
    fn test_advance_idle_is_noop() {
        let mut g = game();
        let before = g.snake.clone();
        assert_eq!(g.advance(), None);
        assert_eq!(g.snake, before);
    }

    #[test]
    fn test_advance_each_direction() {
        for (dir, expected) in [
            (Direction::Right, (410, 290)),
            (Direction::Left, (370, 290)),
            (Direction::Up, (390, 270)),
            (Direction::Down, (390, 310)),
        ] {
            let mut g = game();
            g.apple = Cell::new(0, 0);
            g.current_dir = dir;
            assert_eq!(g.advance(), Some(Step::Moved));
            assert_eq!(g.snake.head(), Cell::new(expected.0, expected.1));
        }
    }

    #[test]
    fn test_wraps_on_every_edge() {
        let mut g = with_body(&[(780, 100)]);
        g.current_dir = Direction::Right;
        g.advance();
        assert_eq!(g.snake.head(), Cell::new(0, 100));

        g.current_dir = Direction::Left;
        g.advance();
        assert_eq!(g.snake.head(), Cell::new(780, 100));

        let mut g = with_body(&[(100, 0)]);
        g.current_dir = Direction::Up;
        g.advance();
        assert_eq!(g.snake.head(), Cell::new(100, 580));

        g.current_dir = Direction::Down;
        g.advance();
        assert_eq!(g.snake.head(), Cell::new(100, 0));
    }

    #[test]
    fn test_body_follows_head() {
        let mut g = with_body(&[(100, 100), (80, 100), (60, 100), (40, 100)]);
        g.current_dir = Direction::Down;
        let before: Vec<Cell> = g.snake.segments().copied().collect();

        assert_eq!(g.advance(), Some(Step::Moved));
        let after: Vec<Cell> = g.snake.segments().copied().collect();
        assert_eq!(after.len(), before.len());
        assert_eq!(after[0], Cell::new(100, 120));
        for i in 1..after.len() {
            assert_eq!(after[i], before[i - 1]);
        }
    }

    #[test]
    fn test_self_collision_stops_everything() {
        // Head at (100,100) turning down into its own body at (100,120)
        let mut g = with_body(&[(100, 100), (80, 100), (80, 120), (100, 120), (120, 120)]);
        g.current_dir = Direction::Down;
        let body = g.snake.clone();
        let apple = g.apple;

        assert_eq!(g.advance(), Some(Step::Collided));
        assert!(g.is_game_over());
        assert_eq!(g.snake, body);
        assert_eq!(g.apple, apple);

        // Suspended from here on
        assert_eq!(g.advance(), None);
        assert_eq!(g.snake, body);
    }

    #[test]
    fn test_eating_grows_at_old_tail() {
        let mut g = with_body(&[(100, 100), (80, 100), (60, 100)]);
        g.apple = Cell::new(120, 100);
        g.current_dir = Direction::Right;

        assert_eq!(g.advance(), Some(Step::AteApple));
        assert_eq!(g.snake.len(), 4);
        assert_eq!(g.snake.head(), Cell::new(120, 100));
        assert_eq!(g.snake.tail(), Cell::new(60, 100));
        assert_eq!(g.score, 1);
        assert_ne!(g.apple, Cell::new(120, 100));
        assert!(!g.snake.contains(g.apple));
    }

    #[test]
    fn test_update_waits_for_first_key() {
        let t0 = Instant::now();
        let mut g = GameState::with_rng(&Settings::default(), t0, SmallRng::seed_from_u64(5));
        assert_eq!(g.update(t0 + Duration::from_secs(5)), None);
        assert_eq!(g.snake.head(), Cell::new(390, 290));

        g.steer(Direction::Up);
        // The timer was never consumed while idle, so the first tick is due now
        g.apple = Cell::new(0, 0);
        assert_eq!(g.update(t0 + Duration::from_secs(5)), Some(Step::Moved));
        assert_eq!(g.current_dir, Direction::Up);
        assert_eq!(g.snake.head(), Cell::new(390, 270));
    }

    #[test]
    fn test_direction_adopted_once_per_tick() {
        let t0 = Instant::now();
        let mut g = GameState::with_rng(&Settings::default(), t0, SmallRng::seed_from_u64(5));
        g.apple = Cell::new(0, 0);
        g.steer(Direction::Right);
        assert!(g.update(t0 + Duration::from_millis(100)).is_some());

        // Two presses inside one interval: only the last one counts
        g.steer(Direction::Up);
        g.steer(Direction::Down);
        assert_eq!(g.update(t0 + Duration::from_millis(150)), None);
        assert_eq!(g.current_dir, Direction::Right);
        assert!(g.update(t0 + Duration::from_millis(200)).is_some());
        assert_eq!(g.current_dir, Direction::Down);
    }

    #[test]
    fn test_boost_shortens_interval_from_last_move() {
        let t0 = Instant::now();
        let mut g = GameState::with_rng(&Settings::default(), t0, SmallRng::seed_from_u64(5));
        g.apple = Cell::new(0, 0);
        g.steer(Direction::Right);
        assert!(g.update(t0 + Duration::from_millis(100)).is_some());

        g.set_boost(true);
        assert_eq!(g.update(t0 + Duration::from_millis(130)), None);
        assert!(g.update(t0 + Duration::from_millis(140)).is_some());

        g.set_boost(false);
        assert_eq!(g.update(t0 + Duration::from_millis(200)), None);
        assert!(g.update(t0 + Duration::from_millis(240)).is_some());
    }

    #[test]
    fn test_pause_blocks_moves_and_turns() {
        let t0 = Instant::now();
        let mut g = GameState::with_rng(&Settings::default(), t0, SmallRng::seed_from_u64(5));
        g.apple = Cell::new(0, 0);
        g.steer(Direction::Right);
        g.toggle_pause(t0);
        g.steer(Direction::Up);
        assert_eq!(g.pending_dir, Direction::Right);
        assert_eq!(g.update(t0 + Duration::from_secs(1)), None);

        g.toggle_pause(t0 + Duration::from_secs(1));
        assert_eq!(g.update(t0 + Duration::from_millis(1100)), Some(Step::Moved));
    }

    #[test]
    fn test_resume_waits_a_full_interval() {
        let t0 = Instant::now();
        let mut g = GameState::with_rng(&Settings::default(), t0, SmallRng::seed_from_u64(5));
        g.apple = Cell::new(0, 0);
        g.steer(Direction::Right);
        assert_eq!(g.update(t0 + Duration::from_millis(100)), Some(Step::Moved));

        g.toggle_pause(t0 + Duration::from_millis(120));
        let resumed = t0 + Duration::from_secs(30);
        g.toggle_pause(resumed);
        assert!(!g.paused);
        assert_eq!(g.update(resumed), None);
        assert_eq!(g.update(resumed + Duration::from_millis(99)), None);
        assert_eq!(g.update(resumed + Duration::from_millis(100)), Some(Step::Moved));
        assert_eq!(g.snake.head(), Cell::new(430, 290));
    }

    #[test]
    fn test_restart_resets_state() {
        let mut g = with_body(&[(100, 100), (80, 100), (60, 100), (40, 100), (20, 100)]);
        g.apple = Cell::new(390, 290);
        g.current_dir = Direction::Right;
        g.pending_dir = Direction::Right;
        g.score = 4;
        g.phase = Phase::GameOver;

        g.restart();
        assert_eq!(g.snake.len(), 1);
        assert_eq!(g.snake.head(), g.grid.center());
        assert!(!g.is_game_over());
        assert_eq!(g.current_dir, Direction::Idle);
        assert_eq!(g.pending_dir, Direction::Idle);
        assert_eq!(g.score, 0);
        assert!(!g.snake.contains(g.apple));
    }
}
