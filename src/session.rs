//! Test-view session: owns the grid, undo history, active snake and the
//! auto-play scheduler, and exposes the step/undo/auto controls.
//!
//! Every control call and every live tick ends in exactly one render.

use crate::autoplay::{AutoPlay, IntervalTimer};
use crate::config::SessionConfig;
use crate::finder::{count_heads, find_free};
use crate::history::History;
use crate::level::{self, LevelError};
use crate::types::{Grid, Snake};

/// Consumer of session state after each mutation.
pub trait Render {
    fn render(&mut self, grid: &Grid, active: Option<&Snake>);
}

impl<F> Render for F
where
    F: FnMut(&Grid, Option<&Snake>),
{
    fn render(&mut self, grid: &Grid, active: Option<&Snake>) {
        self(grid, active)
    }
}

/// What a timer tick did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Auto-play was not running; a stale tick is ignored.
    Idle,
    /// A snake was removed.
    Removed(Snake),
    /// No free snake was left; auto-play stopped.
    Finished,
}

pub struct Session<T: IntervalTimer, R: Render> {
    grid: Grid,
    history: History,
    active: Option<Snake>,
    auto: AutoPlay<T::Handle>,
    timer: T,
    renderer: R,
    config: SessionConfig,
}

impl<T: IntervalTimer, R: Render> Session<T, R> {
    /// Start a session on `grid`, compute the first active snake and render once.
    pub fn new(grid: Grid, timer: T, renderer: R, config: SessionConfig) -> Self {
        let active = find_free(&grid);
        console_log!(
            "level loaded width={} height={} heads={}",
            grid.width,
            grid.height,
            count_heads(&grid)
        );
        let mut session = Self {
            grid,
            history: History::new(),
            active,
            auto: AutoPlay::Idle,
            timer,
            renderer,
            config,
        };
        session.render();
        session
    }

    /// Parse level text and start a session on it. Nothing is rendered on error.
    pub fn from_level(
        text: &str,
        timer: T,
        renderer: R,
        config: SessionConfig,
    ) -> Result<Self, LevelError> {
        let grid = level::parse(text)
            .inspect_err(|err| console_log!("level refused: {}", err))?;
        Ok(Self::new(grid, timer, renderer, config))
    }

    /// Remove the active snake and compute the next one.
    pub fn advance(&mut self) -> Option<Snake> {
        let removed = self.active.take();
        match &removed {
            Some(snake) => {
                self.history.remove(&mut self.grid, snake);
                self.active = find_free(&self.grid);
            }
            None => console_log!("advance ignored: no active snake"),
        }
        self.render();
        removed
    }

    /// Put back the most recently removed snake and recompute the active one.
    pub fn retreat(&mut self) -> Option<Snake> {
        if self.history.is_empty() {
            console_log!("retreat ignored: empty history");
        }
        let restored = self.history.restore(&mut self.grid);
        self.active = find_free(&self.grid);
        self.render();
        restored
    }

    /// Start or stop auto-play. Returns whether auto-play is running afterwards.
    pub fn toggle_auto_play(&mut self) -> bool {
        if self.auto.is_running() {
            self.auto.stop(&mut self.timer);
            console_log!("auto-play stopped removed={}", self.history.len());
        } else if self.auto.start(&mut self.timer, self.config.tick_period()) {
            console_log!("auto-play started tick_ms={}", self.config.tick_period());
        }
        self.render();
        self.auto.is_running()
    }

    /// Stop auto-play without rendering. Returns whether it was running.
    pub fn stop_auto_play(&mut self) -> bool {
        self.auto.stop(&mut self.timer)
    }

    /// One auto-play step: find, remove, find the next.
    ///
    /// The active snake is cleared before the grid changes and recomputed
    /// after, so the render never sees a half-applied removal.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.auto.is_running() {
            return TickOutcome::Idle;
        }

        let Some(snake) = find_free(&self.grid) else {
            self.auto.stop(&mut self.timer);
            self.active = None;
            console_log!("auto-play done removed={}", self.history.len());
            self.render();
            return TickOutcome::Finished;
        };

        self.active = None;
        self.history.remove(&mut self.grid, &snake);
        self.active = find_free(&self.grid);
        self.render();
        TickOutcome::Removed(snake)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Option<&Snake> {
        self.active.as_ref()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn is_auto_playing(&self) -> bool {
        self.auto.is_running()
    }

    /// No body or head cell remains.
    pub fn is_solved(&self) -> bool {
        self.grid.occupied() == 0
    }

    pub fn export(&self) -> String {
        level::serialize(&self.grid)
    }

    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    fn render(&mut self) {
        self.renderer.render(&self.grid, self.active.as_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autoplay::ManualTimer;
    use crate::types::{Cell, Point};
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    /// Records what each render saw.
    #[derive(Default)]
    struct Frames {
        frames: Vec<(usize, Option<Point>)>,
    }

    impl Render for Frames {
        fn render(&mut self, grid: &Grid, active: Option<&Snake>) {
            self.frames.push((grid.occupied(), active.map(|s| s.head)));
        }
    }

    fn session(text: &str) -> Session<ManualTimer, Frames> {
        Session::from_level(
            text,
            ManualTimer::default(),
            Frames::default(),
            SessionConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_new_renders_initial_active() {
        let s = session("2100\n0000\n0000\n0000");
        assert_eq!(s.active().map(|a| a.head), Some(Point::new(0, 0)));
        assert_eq!(s.renderer().frames, vec![(2, Some(Point::new(0, 0)))]);
    }

    #[test]
    fn test_malformed_level_is_refused() {
        let result = Session::from_level(
            "\n \n",
            ManualTimer::default(),
            Frames::default(),
            SessionConfig::default(),
        );
        assert!(matches!(result, Err(LevelError::MalformedLevel)));
    }

    #[test]
    fn test_closure_renderer() {
        let mut calls = 0;
        {
            let mut s = Session::new(
                Grid::new(2, 2),
                ManualTimer::default(),
                |_: &Grid, _: Option<&Snake>| calls += 1,
                SessionConfig::default(),
            );
            s.advance();
        }
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_advance_and_retreat() {
        let mut s = session("210\n000\n012");
        let first = s.advance().unwrap();
        assert_eq!(first.head, Point::new(0, 0));
        assert_eq!(s.active().map(|a| a.head), Some(Point::new(2, 2)));
        assert_eq!(s.history_len(), 1);

        let restored = s.retreat().unwrap();
        assert_eq!(restored, first);
        assert_eq!(s.grid().get(0, 0), Cell::Head);
        assert_eq!(s.active().map(|a| a.head), Some(Point::new(0, 0)));
        assert_eq!(s.history_len(), 0);
        assert_eq!(s.renderer().frames.len(), 3);
    }

    #[test]
    fn test_advance_at_end_still_renders_once() {
        let mut s = session("21");
        assert!(s.advance().is_some());
        assert!(s.is_solved());
        assert_eq!(s.advance(), None);
        assert_eq!(s.history_len(), 1);
        assert_eq!(s.renderer().frames.len(), 3);
    }

    #[test]
    fn test_retreat_with_empty_history() {
        let mut s = session("21");
        assert_eq!(s.retreat(), None);
        assert_eq!(s.grid().occupied(), 2);
        assert_eq!(s.renderer().frames.len(), 2);
    }

    #[test]
    fn test_auto_play_two_snakes() {
        let mut s = session("2100\n0000\n0012");
        assert!(s.toggle_auto_play());
        assert_eq!(s.timer_mut().live.len(), 1);

        assert!(matches!(s.tick(), TickOutcome::Removed(_)));
        assert!(matches!(s.tick(), TickOutcome::Removed(_)));
        assert_eq!(s.tick(), TickOutcome::Finished);

        assert!(!s.is_auto_playing());
        assert!(s.timer_mut().live.is_empty());
        assert!(s.is_solved());
        assert_eq!(s.history_len(), 2);
        assert_eq!(s.active(), None);
        assert_eq!(s.tick(), TickOutcome::Idle);
    }

    #[test]
    fn test_tick_renders_next_active_after_removal() {
        let mut s = session("2100\n0000\n0012");
        s.toggle_auto_play();
        s.tick();
        let frames = &s.renderer().frames;
        // initial, toggle, tick
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[2], (2, Some(Point::new(3, 2))));
    }

    #[test]
    fn test_toggle_twice_cancels_timer() {
        let mut s = session("21");
        assert!(s.toggle_auto_play());
        assert!(!s.toggle_auto_play());
        assert!(s.timer_mut().live.is_empty());
        assert_eq!(s.tick(), TickOutcome::Idle);
        assert_eq!(s.grid().occupied(), 2);
    }

    #[test]
    fn test_stop_auto_play_idempotent() {
        let mut s = session("21");
        assert!(!s.stop_auto_play());
        s.toggle_auto_play();
        assert!(s.stop_auto_play());
        assert!(!s.stop_auto_play());
    }

    #[test]
    fn test_export_after_removal() {
        let mut s = session("2100\n0021");
        s.advance();
        assert_eq!(s.export(), "0000\n0021");
    }

    #[test]
    fn test_repeated_advance_terminates() {
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..100 {
            let (w, h) = (rng.random_range(1..10), rng.random_range(1..10));
            let mut grid = Grid::new(w, h);
            for y in 0..h {
                for x in 0..w {
                    let cell = match rng.random_range(0..5) {
                        0 => Cell::Head,
                        1 | 2 => Cell::Body,
                        _ => Cell::Empty,
                    };
                    grid.set(x, y, cell);
                }
            }
            let start = grid.occupied();
            let mut s = Session::new(
                grid,
                ManualTimer::default(),
                Frames::default(),
                SessionConfig::default(),
            );
            let mut steps = 0;
            while s.advance().is_some() {
                steps += 1;
                assert!(steps <= start);
            }
            assert_eq!(s.active(), None);
        }
    }
}
