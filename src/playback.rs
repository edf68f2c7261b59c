//! Incremental timeline reveal for presentation layers.
//!
//! A [`Playback`] walks a precomputed [`SimulationResult`] one Gantt block
//! at a time. It owns no timer: the caller drives [`Playback::tick`] at
//! whatever rate it likes (auto mode) or calls [`Playback::step`] (step
//! mode). The scheduler is never re-invoked mid-playback.
//!
//! # States
//!
//! ```text
//!  Idle ──start──▶ Running ──pause──▶ Paused
//!   ▲                │  ▲               │
//!   │                │  └────resume─────┘
//!   │          last block revealed
//!   │                ▼
//!   └───reset─── Complete
//! ```
//!
//! Every operation is idempotent: calling it in a state where it does not
//! apply leaves the playback unchanged and returns `false`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{ScheduleBlock, SimulationResult};

/// Playback state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlaybackState {
    /// Nothing loaded.
    #[default]
    Idle,
    /// Revealing blocks.
    Running,
    /// Revealing suspended.
    Paused,
    /// Every block revealed.
    Complete,
}

/// Step-wise reveal of a simulation timeline.
#[derive(Debug, Clone, Default)]
pub struct Playback {
    state: PlaybackState,
    step_mode: bool,
    visible: usize,
    result: Option<SimulationResult>,
}

impl Playback {
    /// Creates an idle playback in auto mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets step mode: blocks are revealed by [`Playback::step`] only.
    pub fn with_step_mode(mut self, step_mode: bool) -> Self {
        self.step_mode = step_mode;
        self
    }

    /// Toggles step mode. Ignored while a playback is in progress.
    pub fn set_step_mode(&mut self, step_mode: bool) -> bool {
        if self.in_progress() {
            return false;
        }
        self.step_mode = step_mode;
        true
    }

    /// Current state.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Whether step mode is on.
    pub fn is_step_mode(&self) -> bool {
        self.step_mode
    }

    /// Loaded result, if any.
    pub fn result(&self) -> Option<&SimulationResult> {
        self.result.as_ref()
    }

    /// Number of revealed blocks.
    pub fn visible_steps(&self) -> usize {
        self.visible
    }

    /// Number of blocks in the loaded timeline.
    pub fn total_steps(&self) -> usize {
        self.result.as_ref().map_or(0, |r| r.gantt_chart.len())
    }

    /// Revealed prefix of the timeline.
    pub fn visible_blocks(&self) -> &[ScheduleBlock] {
        match &self.result {
            Some(r) => &r.gantt_chart[..self.visible.min(r.gantt_chart.len())],
            None => &[],
        }
    }

    /// Fraction of blocks revealed (0.0..=1.0).
    pub fn progress(&self) -> f64 {
        match self.total_steps() {
            0 => 0.0,
            total => self.visible as f64 / total as f64,
        }
    }

    /// Loads `result` and starts revealing.
    ///
    /// Auto mode starts with nothing revealed; step mode reveals the first
    /// block immediately. Ignored while Running or Paused.
    pub fn start(&mut self, result: SimulationResult) -> bool {
        if self.in_progress() {
            return false;
        }
        self.visible = if self.step_mode { 1 } else { 0 };
        self.result = Some(result);
        self.state = PlaybackState::Running;
        self.settle();
        debug!(total = self.total_steps(), step_mode = self.step_mode, "playback started");
        true
    }

    /// Suspends a running playback.
    pub fn pause(&mut self) -> bool {
        if self.state != PlaybackState::Running {
            return false;
        }
        self.state = PlaybackState::Paused;
        true
    }

    /// Continues a paused playback.
    pub fn resume(&mut self) -> bool {
        if self.state != PlaybackState::Paused {
            return false;
        }
        self.state = PlaybackState::Running;
        true
    }

    /// Timer tick in auto mode: reveals one more block.
    pub fn tick(&mut self) -> bool {
        if self.state != PlaybackState::Running || self.step_mode {
            return false;
        }
        self.advance();
        true
    }

    /// Reveals one more block of a loaded timeline.
    ///
    /// Works in either mode, and while paused. The playback stays paused
    /// unless the last block is revealed. When idle with no result loaded,
    /// use [`Playback::step_with`].
    pub fn step(&mut self) -> bool {
        if !self.in_progress() {
            return false;
        }
        self.advance();
        true
    }

    /// Steps, loading `result` first if nothing is in progress.
    ///
    /// Loading switches to step mode and reveals the first block.
    pub fn step_with(&mut self, result: SimulationResult) -> bool {
        if self.in_progress() {
            return self.step();
        }
        self.step_mode = true;
        self.start(result)
    }

    /// Clears the result and returns to Idle.
    pub fn reset(&mut self) {
        self.state = PlaybackState::Idle;
        self.visible = 0;
        self.result = None;
    }

    fn in_progress(&self) -> bool {
        matches!(self.state, PlaybackState::Running | PlaybackState::Paused)
    }

    fn advance(&mut self) {
        self.visible = (self.visible + 1).min(self.total_steps());
        self.settle();
    }

    fn settle(&mut self) {
        if self.in_progress() && self.visible >= self.total_steps() {
            self.visible = self.total_steps();
            self.state = PlaybackState::Complete;
            debug!(total = self.total_steps(), "playback complete");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;
    use crate::scheduler::fcfs;

    fn three_blocks() -> SimulationResult {
        // P1 0-2, idle 2-4, P2 4-5
        fcfs(&[Process::new(1, 0, 2), Process::new(2, 4, 1)])
    }

    #[test]
    fn test_auto_mode_reveals_on_tick() {
        let mut p = Playback::new();
        assert!(p.start(three_blocks()));
        assert_eq!(p.state(), PlaybackState::Running);
        assert_eq!(p.visible_steps(), 0);
        assert!(p.visible_blocks().is_empty());

        assert!(p.tick());
        assert_eq!(p.visible_blocks().len(), 1);
        assert!(p.tick());
        assert!(p.tick());
        assert_eq!(p.state(), PlaybackState::Complete);
        assert_eq!(p.visible_steps(), 3);
        assert!((p.progress() - 1.0).abs() < 1e-10);

        // No further ticks once complete
        assert!(!p.tick());
        assert_eq!(p.visible_steps(), 3);
    }

    #[test]
    fn test_pause_and_resume() {
        let mut p = Playback::new();
        p.start(three_blocks());
        p.tick();

        assert!(p.pause());
        assert!(!p.pause());
        assert_eq!(p.state(), PlaybackState::Paused);
        assert!(!p.tick());
        assert_eq!(p.visible_steps(), 1);

        assert!(p.resume());
        assert!(!p.resume());
        assert!(p.tick());
        assert_eq!(p.visible_steps(), 2);
    }

    #[test]
    fn test_start_ignored_in_progress() {
        let mut p = Playback::new();
        p.start(three_blocks());
        let other = fcfs(&[Process::new(9, 0, 1)]);
        assert!(!p.start(other.clone()));
        p.pause();
        assert!(!p.start(other));
        assert_eq!(p.total_steps(), 3);
    }

    #[test]
    fn test_step_mode() {
        let mut p = Playback::new();
        assert!(!p.step());

        assert!(p.step_with(three_blocks()));
        assert!(p.is_step_mode());
        assert_eq!(p.visible_steps(), 1);
        assert!(!p.tick());

        assert!(p.step_with(fcfs(&[Process::new(9, 0, 1)])));
        assert_eq!(p.visible_steps(), 2);
        assert_eq!(p.total_steps(), 3);

        assert!(p.step());
        assert_eq!(p.state(), PlaybackState::Complete);
        assert!(!p.step());
        assert_eq!(p.visible_steps(), 3);
    }

    #[test]
    fn test_step_while_paused_in_auto_mode() {
        let mut p = Playback::new();
        p.start(three_blocks());
        p.tick();
        p.pause();

        assert!(p.step());
        assert_eq!(p.visible_steps(), 2);
        assert_eq!(p.state(), PlaybackState::Paused);

        // A loaded playback ignores the new result and just steps
        assert!(p.step_with(fcfs(&[Process::new(9, 0, 1)])));
        assert_eq!(p.visible_steps(), 3);
        assert_eq!(p.total_steps(), 3);
        assert_eq!(p.state(), PlaybackState::Complete);
        assert!(!p.step());
    }

    #[test]
    fn test_step_while_paused_in_step_mode() {
        let mut p = Playback::new().with_step_mode(true);
        p.start(three_blocks());
        assert!(p.pause());

        assert!(p.step());
        assert_eq!(p.visible_steps(), 2);
        assert_eq!(p.state(), PlaybackState::Paused);
        assert!(p.resume());
        assert!(p.step());
        assert_eq!(p.state(), PlaybackState::Complete);
    }

    #[test]
    fn test_step_in_auto_mode_running() {
        let mut p = Playback::new();
        p.start(three_blocks());
        assert!(p.step());
        assert!(p.tick());
        assert_eq!(p.visible_steps(), 2);
        assert_eq!(p.state(), PlaybackState::Running);
    }

    #[test]
    fn test_step_mode_single_block_completes_immediately() {
        let mut p = Playback::new().with_step_mode(true);
        p.start(fcfs(&[Process::new(1, 0, 3)]));
        assert_eq!(p.state(), PlaybackState::Complete);
        assert_eq!(p.visible_blocks().len(), 1);
    }

    #[test]
    fn test_restart_after_complete() {
        let mut p = Playback::new().with_step_mode(true);
        p.start(fcfs(&[Process::new(1, 0, 3)]));
        assert_eq!(p.state(), PlaybackState::Complete);
        assert!(p.start(three_blocks()));
        assert_eq!(p.state(), PlaybackState::Running);
        assert_eq!(p.visible_steps(), 1);
    }

    #[test]
    fn test_reset() {
        let mut p = Playback::new();
        p.start(three_blocks());
        p.tick();
        p.reset();
        assert_eq!(p.state(), PlaybackState::Idle);
        assert!(p.result().is_none());
        assert_eq!(p.total_steps(), 0);
        assert_eq!(p.progress(), 0.0);

        // Idempotent
        p.reset();
        assert_eq!(p.state(), PlaybackState::Idle);
    }

    #[test]
    fn test_step_mode_toggle_locked_in_progress() {
        let mut p = Playback::new();
        assert!(p.set_step_mode(true));
        assert!(p.set_step_mode(false));
        p.start(three_blocks());
        assert!(!p.set_step_mode(true));
        assert!(!p.is_step_mode());
    }

    #[test]
    fn test_empty_result_completes() {
        let mut p = Playback::new();
        p.start(SimulationResult::empty());
        assert_eq!(p.state(), PlaybackState::Complete);
        assert_eq!(p.progress(), 0.0);
    }
}
