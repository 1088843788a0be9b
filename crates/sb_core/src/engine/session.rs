//! Command session: the pure board wrapped with display forwarding.
//!
//! `Session` owns the `Scoreboard`, the bout labels, and an optional display
//! sink. Every operator command mutates state first and then pushes the
//! resulting delta to the display. Notification is strictly best-effort: a
//! sink error is logged and dropped, never propagated, and never rolls back
//! the mutation that triggered it.

use tracing::{debug, info, warn};

use super::clock::TickOutcome;
use super::command::{Command, CommandQueue};
use super::intermission::BREAK_SECONDS;
use super::scoreboard::{BoardSnapshot, MainTickEvent, Scoreboard};
use crate::display::DisplaySink;
use crate::error::DisplayError;
use crate::models::{BoutCard, Corner};

/// What one scheduler second produced, for the host loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub main: MainTickEvent,
    pub red_rest: TickOutcome,
    pub blue_rest: TickOutcome,
}

/// One controlling session: exclusive owner of the board state.
pub struct Session {
    board: Scoreboard,
    bout: BoutCard,
    display: Option<Box<dyn DisplaySink>>,
}

impl Session {
    /// Session with no display attached; notifications are skipped until
    /// `attach_display` is called.
    pub fn new() -> Self {
        Self { board: Scoreboard::new(), bout: BoutCard::new(), display: None }
    }

    pub fn with_display(display: Box<dyn DisplaySink>) -> Self {
        let mut session = Self::new();
        session.attach_display(display);
        session
    }

    pub const fn board(&self) -> &Scoreboard {
        &self.board
    }

    pub const fn bout(&self) -> &BoutCard {
        &self.bout
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    /// Attach (or replace) the display and push a full refresh so the new
    /// consumer starts from the current state.
    pub fn attach_display(&mut self, display: Box<dyn DisplaySink>) {
        self.display = Some(display);
        self.refresh_display();
    }

    /// Detach the display; subsequent notifications become no-ops.
    pub fn detach_display(&mut self) -> Option<Box<dyn DisplaySink>> {
        self.display.take()
    }

    pub const fn has_display(&self) -> bool {
        self.display.is_some()
    }

    // ----- command dispatch -----

    /// Apply one operator command. Never fails: out-of-range input is
    /// clamped or ignored inside the board.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::AdjustScore { corner, delta } => self.adjust_score(corner, delta),
            Command::CyclePenalty { corner } => self.cycle_penalty(corner),
            Command::SetPeriod { period } => self.set_period(period),
            Command::StartMainClock => self.start_main_clock(),
            Command::StopMainClock => self.stop_main_clock(),
            Command::AdjustMainClock { delta } => self.adjust_main_clock(delta),
            Command::SetMainClock { seconds } => self.set_main_clock(seconds),
            Command::StartBreak => self.start_break(),
            Command::CancelBreak => self.cancel_break(),
            Command::StartRestClock { corner } => self.start_rest_clock(corner),
            Command::StopRestClock { corner } => self.stop_rest_clock(corner),
            Command::AdjustRestClock { corner, delta } => self.adjust_rest_clock(corner, delta),
            Command::DeclareWinner { corner } => self.declare_winner(corner),
            Command::ClearWinner => self.clear_winner(),
            Command::SetWrestlers { red, blue } => self.set_wrestlers(&red, &blue),
            Command::SetWeightCategory { label } => self.set_weight_category(&label),
            Command::SetStage { label } => self.set_stage(&label),
            Command::SetStyle { label } => self.set_style(&label),
            Command::Reset => self.reset(),
        }
    }

    /// Apply everything queued, in arrival order.
    pub fn drain(&mut self, queue: &mut CommandQueue) {
        while let Some(command) = queue.pop_front() {
            self.apply(command);
        }
    }

    // ----- score / cautions -----

    pub fn adjust_score(&mut self, corner: Corner, delta: i32) {
        self.board.adjust_score(corner, delta);
        let (red, blue) = (self.board.score(Corner::Red), self.board.score(Corner::Blue));
        self.notify(|display| display.update_score(red, blue));
    }

    /// Cautions live on the operator console only; the audience display has
    /// no caution surface, so nothing is pushed.
    pub fn cycle_penalty(&mut self, corner: Corner) {
        let value = self.board.cycle_penalty(corner);
        debug!(corner = corner.label(), value, "caution cycled");
    }

    // ----- period -----

    pub fn set_period(&mut self, number: u8) {
        if self.board.set_period(number).is_none() {
            debug!(number, "period selection out of range, ignored");
            return;
        }
        let period = self.board.period().number();
        let time = self.board.main_clock().formatted();
        self.notify(|display| {
            display.update_period(period)?;
            display.update_timer(&time)
        });
    }

    // ----- main clock -----

    pub fn start_main_clock(&mut self) {
        self.board.start_main_clock();
    }

    pub fn stop_main_clock(&mut self) {
        self.board.stop_main_clock();
    }

    pub fn adjust_main_clock(&mut self, delta: i32) {
        self.board.adjust_main_clock(delta);
        let time = self.board.main_clock().formatted();
        self.notify(|display| display.update_timer(&time));
    }

    pub fn set_main_clock(&mut self, seconds: i32) {
        self.board.set_main_clock(seconds);
        let time = self.board.main_clock().formatted();
        self.notify(|display| display.update_timer(&time));
    }

    // ----- break -----

    pub fn start_break(&mut self) {
        self.start_break_for(BREAK_SECONDS);
    }

    pub fn start_break_for(&mut self, seconds: u32) {
        if !self.board.start_break(seconds) {
            debug!("break already active, ignored");
            return;
        }
        let time = self.board.main_clock().formatted();
        self.notify(|display| {
            display.show_break(true, seconds)?;
            display.update_timer(&time)
        });
    }

    pub fn cancel_break(&mut self) {
        if !self.board.cancel_break() {
            debug!("no break active, ignored");
            return;
        }
        let time = self.board.main_clock().formatted();
        self.notify(|display| {
            display.show_break(false, 0)?;
            display.update_timer(&time)
        });
    }

    // ----- rest clocks -----

    pub fn start_rest_clock(&mut self, corner: Corner) {
        self.board.start_rest_clock(corner);
    }

    pub fn stop_rest_clock(&mut self, corner: Corner) {
        self.board.stop_rest_clock(corner);
    }

    pub fn adjust_rest_clock(&mut self, corner: Corner, delta: i32) {
        self.board.adjust_rest_clock(corner, delta);
        let time = self.board.rest_clock(corner).formatted();
        self.notify(|display| display.update_rest_timer(corner, &time));
    }

    // ----- winner -----

    pub fn declare_winner(&mut self, corner: Corner) {
        self.board.declare_winner(corner);
        info!(corner = corner.label(), "winner declared");
        self.notify(|display| display.show_winner(Some(corner)));
    }

    pub fn clear_winner(&mut self) {
        self.board.clear_winner();
        self.notify(|display| display.show_winner(None));
    }

    // ----- bout labels -----

    pub fn set_wrestlers(&mut self, red: &str, blue: &str) {
        self.bout.red_wrestler = red.to_string();
        self.bout.blue_wrestler = blue.to_string();
        self.notify(|display| display.update_wrestlers(red, blue));
    }

    pub fn set_weight_category(&mut self, label: &str) {
        self.bout.weight_category = label.to_string();
        self.notify(|display| display.update_weight_category(label));
    }

    pub fn set_stage(&mut self, label: &str) {
        self.bout.stage = label.to_string();
        self.notify(|display| display.update_stage(label));
    }

    pub fn set_style(&mut self, label: &str) {
        self.bout.style = label.to_string();
        self.notify(|display| display.update_style(label));
    }

    // ----- reset -----

    /// Start a new bout: board back to the initial configuration in one
    /// step, then a full display refresh. Bout labels are left alone — the
    /// roster collaborator decides when those change.
    pub fn reset(&mut self) {
        self.board.reset();
        debug!("board reset");
        self.refresh_board_display();
    }

    // ----- ticking -----

    /// Advance all three clocks one second. Clocks that are not running
    /// ignore the tick, so this is safe to call unconditionally from the
    /// host's one-second loop.
    pub fn tick_second(&mut self) -> TickReport {
        let main = self.board.tick_main();
        match main {
            MainTickEvent::Idle => {}
            MainTickEvent::Continuing => {
                let time = self.board.main_clock().formatted();
                let break_seconds =
                    self.board.is_break_active().then(|| self.board.main_clock().remaining_seconds());
                self.notify(|display| {
                    display.update_timer(&time)?;
                    if let Some(seconds) = break_seconds {
                        display.show_break(true, seconds)?;
                    }
                    Ok(())
                });
            }
            MainTickEvent::BreakFinished { restored_seconds } => {
                info!(restored_seconds, "break finished, match time restored");
                let time = self.board.main_clock().formatted();
                self.notify(|display| {
                    display.show_break(false, 0)?;
                    display.update_timer(&time)
                });
            }
            MainTickEvent::PeriodExpired => {
                info!(period = self.board.period().number(), "period time expired");
            }
        }

        let red_rest = self.tick_rest(Corner::Red);
        let blue_rest = self.tick_rest(Corner::Blue);

        TickReport { main, red_rest, blue_rest }
    }

    fn tick_rest(&mut self, corner: Corner) -> TickOutcome {
        let outcome = self.board.tick_rest(corner);
        if outcome == TickOutcome::Continuing {
            let time = self.board.rest_clock(corner).formatted();
            self.notify(|display| display.update_rest_timer(corner, &time));
        }
        outcome
    }

    // ----- display plumbing -----

    /// Push the complete current state, labels included.
    pub fn refresh_display(&mut self) {
        let bout = self.bout.clone();
        self.notify(move |display| {
            display.update_wrestlers(&bout.red_wrestler, &bout.blue_wrestler)?;
            display.update_weight_category(&bout.weight_category)?;
            display.update_stage(&bout.stage)?;
            display.update_style(&bout.style)
        });
        self.refresh_board_display();
    }

    fn refresh_board_display(&mut self) {
        let snapshot = self.board.snapshot();
        self.notify(move |display| {
            display.update_score(snapshot.red_score, snapshot.blue_score)?;
            display.update_timer(&snapshot.main_clock_display)?;
            display.update_period(snapshot.period)?;
            display.update_rest_timer(
                Corner::Red,
                &super::clock::format_seconds(snapshot.red_rest_seconds),
            )?;
            display.update_rest_timer(
                Corner::Blue,
                &super::clock::format_seconds(snapshot.blue_rest_seconds),
            )?;
            display.show_break(snapshot.break_active, snapshot.break_seconds.unwrap_or(0))?;
            display.show_winner(snapshot.winner)
        });
    }

    /// Run one notification against the attached display, if any. Failures
    /// are logged and swallowed — display trouble must never interrupt the
    /// command that triggered it.
    fn notify<F>(&mut self, push: F)
    where
        F: FnOnce(&mut dyn DisplaySink) -> Result<(), DisplayError>,
    {
        let Some(display) = self.display.as_deref_mut() else {
            return;
        };
        if let Err(err) = push(display) {
            warn!("display update dropped: {err}");
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::NullDisplay;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every push as a readable line, shared with the test body.
    #[derive(Clone, Default)]
    struct RecordingDisplay {
        lines: Rc<RefCell<Vec<String>>>,
    }

    impl RecordingDisplay {
        fn lines(&self) -> Vec<String> {
            self.lines.borrow().clone()
        }

        fn push(&self, line: String) -> Result<(), DisplayError> {
            self.lines.borrow_mut().push(line);
            Ok(())
        }
    }

    impl DisplaySink for RecordingDisplay {
        fn update_score(&mut self, red: u32, blue: u32) -> Result<(), DisplayError> {
            self.push(format!("score {red}:{blue}"))
        }

        fn update_timer(&mut self, time: &str) -> Result<(), DisplayError> {
            self.push(format!("timer {time}"))
        }

        fn update_rest_timer(&mut self, corner: Corner, time: &str) -> Result<(), DisplayError> {
            self.push(format!("rest {} {time}", corner.label()))
        }

        fn update_period(&mut self, period: u8) -> Result<(), DisplayError> {
            self.push(format!("period {period}"))
        }

        fn update_wrestlers(&mut self, red: &str, blue: &str) -> Result<(), DisplayError> {
            self.push(format!("wrestlers {red}|{blue}"))
        }

        fn update_weight_category(&mut self, label: &str) -> Result<(), DisplayError> {
            self.push(format!("weight {label}"))
        }

        fn update_stage(&mut self, label: &str) -> Result<(), DisplayError> {
            self.push(format!("stage {label}"))
        }

        fn update_style(&mut self, label: &str) -> Result<(), DisplayError> {
            self.push(format!("style {label}"))
        }

        fn show_winner(&mut self, winner: Option<Corner>) -> Result<(), DisplayError> {
            match winner {
                Some(corner) => self.push(format!("winner {}", corner.label())),
                None => self.push("winner none".to_string()),
            }
        }

        fn show_break(&mut self, active: bool, seconds: u32) -> Result<(), DisplayError> {
            self.push(format!("break {active} {seconds}"))
        }
    }

    /// Fails every push.
    struct FailingDisplay;

    impl DisplaySink for FailingDisplay {
        fn update_score(&mut self, _: u32, _: u32) -> Result<(), DisplayError> {
            Err(DisplayError::new("down"))
        }
        fn update_timer(&mut self, _: &str) -> Result<(), DisplayError> {
            Err(DisplayError::new("down"))
        }
        fn update_rest_timer(&mut self, _: Corner, _: &str) -> Result<(), DisplayError> {
            Err(DisplayError::new("down"))
        }
        fn update_period(&mut self, _: u8) -> Result<(), DisplayError> {
            Err(DisplayError::new("down"))
        }
        fn update_wrestlers(&mut self, _: &str, _: &str) -> Result<(), DisplayError> {
            Err(DisplayError::new("down"))
        }
        fn update_weight_category(&mut self, _: &str) -> Result<(), DisplayError> {
            Err(DisplayError::new("down"))
        }
        fn update_stage(&mut self, _: &str) -> Result<(), DisplayError> {
            Err(DisplayError::new("down"))
        }
        fn update_style(&mut self, _: &str) -> Result<(), DisplayError> {
            Err(DisplayError::new("down"))
        }
        fn show_winner(&mut self, _: Option<Corner>) -> Result<(), DisplayError> {
            Err(DisplayError::new("down"))
        }
        fn show_break(&mut self, _: bool, _: u32) -> Result<(), DisplayError> {
            Err(DisplayError::new("down"))
        }
    }

    fn recording_session() -> (Session, RecordingDisplay) {
        let recorder = RecordingDisplay::default();
        let mut session = Session::new();
        session.attach_display(Box::new(recorder.clone()));
        recorder.lines.borrow_mut().clear(); // drop the attach refresh
        (session, recorder)
    }

    #[test]
    fn test_score_command_notifies_display() {
        let (mut session, recorder) = recording_session();

        session.apply(Command::AdjustScore { corner: Corner::Red, delta: 3 });
        session.apply(Command::AdjustScore { corner: Corner::Blue, delta: 1 });

        assert_eq!(recorder.lines(), vec!["score 3:0", "score 3:1"]);
    }

    #[test]
    fn test_caution_is_console_local() {
        let (mut session, recorder) = recording_session();

        session.apply(Command::CyclePenalty { corner: Corner::Red });

        assert_eq!(session.board().penalty(Corner::Red), 1);
        assert!(recorder.lines().is_empty());
    }

    #[test]
    fn test_set_period_pushes_period_and_time() {
        let (mut session, recorder) = recording_session();

        session.apply(Command::SetPeriod { period: 2 });

        assert_eq!(recorder.lines(), vec!["period 2", "timer 3:00"]);
    }

    #[test]
    fn test_out_of_range_period_is_silent() {
        let (mut session, recorder) = recording_session();

        session.apply(Command::SetPeriod { period: 7 });

        assert_eq!(session.board().period().number(), 1);
        assert!(recorder.lines().is_empty());
    }

    #[test]
    fn test_break_lifecycle_notifications() {
        let (mut session, recorder) = recording_session();
        session.apply(Command::SetMainClock { seconds: 100 });
        recorder.lines.borrow_mut().clear();

        session.apply(Command::StartBreak);
        assert_eq!(recorder.lines(), vec!["break true 30", "timer 0:30"]);
        recorder.lines.borrow_mut().clear();

        session.apply(Command::CancelBreak);
        assert_eq!(recorder.lines(), vec!["break false 0", "timer 1:40"]);
        assert!(!session.board().main_clock().is_running());
    }

    #[test]
    fn test_tick_during_break_updates_countdown() {
        let (mut session, recorder) = recording_session();
        session.apply(Command::SetMainClock { seconds: 45 });
        session.apply(Command::StartBreak);
        recorder.lines.borrow_mut().clear();

        session.tick_second();

        assert_eq!(recorder.lines(), vec!["timer 0:29", "break true 29"]);
    }

    #[test]
    fn test_break_natural_expiry_through_session() {
        let (mut session, recorder) = recording_session();
        session.apply(Command::SetMainClock { seconds: 77 });
        session.apply(Command::StartBreak);

        let mut finished = None;
        for _ in 0..=30 {
            let report = session.tick_second();
            if let MainTickEvent::BreakFinished { restored_seconds } = report.main {
                finished = Some(restored_seconds);
                break;
            }
        }

        assert_eq!(finished, Some(77));
        assert_eq!(session.board().main_clock().remaining_seconds(), 77);
        assert!(!session.board().main_clock().is_running());
        let lines = recorder.lines();
        assert!(lines.contains(&"break false 0".to_string()));
        assert_eq!(lines.last().unwrap(), "timer 1:17");
    }

    #[test]
    fn test_period_expiry_reported_not_advanced() {
        let mut session = Session::new();
        session.apply(Command::SetMainClock { seconds: 1 });
        session.apply(Command::StartMainClock);

        assert_eq!(session.tick_second().main, MainTickEvent::Continuing);
        assert_eq!(session.tick_second().main, MainTickEvent::PeriodExpired);
        assert_eq!(session.tick_second().main, MainTickEvent::Idle);
        assert_eq!(session.board().period().number(), 1);
    }

    #[test]
    fn test_rest_clocks_tick_independently() {
        let (mut session, recorder) = recording_session();
        session.apply(Command::StartRestClock { corner: Corner::Blue });

        let report = session.tick_second();

        assert_eq!(report.red_rest, TickOutcome::Idle);
        assert_eq!(report.blue_rest, TickOutcome::Continuing);
        assert_eq!(recorder.lines(), vec!["rest BLUE 0:29"]);
    }

    #[test]
    fn test_winner_declaration_and_clear() {
        let (mut session, recorder) = recording_session();
        session.apply(Command::StartMainClock);

        session.apply(Command::DeclareWinner { corner: Corner::Blue });
        session.apply(Command::DeclareWinner { corner: Corner::Red });
        session.apply(Command::ClearWinner);

        assert_eq!(recorder.lines(), vec!["winner BLUE", "winner RED", "winner none"]);
        assert_eq!(session.board().winner(), None);
        assert!(!session.board().main_clock().is_running());
    }

    #[test]
    fn test_failing_display_never_corrupts_state() {
        let mut with_failing = Session::with_display(Box::new(FailingDisplay));
        let mut with_null = Session::with_display(Box::new(NullDisplay));

        let script = [
            Command::SetWrestlers { red: "A".into(), blue: "B".into() },
            Command::AdjustScore { corner: Corner::Red, delta: 4 },
            Command::SetPeriod { period: 2 },
            Command::StartMainClock,
            Command::StartBreak,
            Command::CancelBreak,
            Command::DeclareWinner { corner: Corner::Red },
        ];
        for command in &script {
            with_failing.apply(command.clone());
            with_null.apply(command.clone());
        }
        with_failing.tick_second();
        with_null.tick_second();

        assert_eq!(with_failing.snapshot(), with_null.snapshot());
        assert_eq!(with_failing.bout(), with_null.bout());
    }

    #[test]
    fn test_detached_display_is_silent_noop() {
        let (mut session, recorder) = recording_session();
        session.detach_display();

        session.apply(Command::AdjustScore { corner: Corner::Red, delta: 1 });
        session.tick_second();

        assert!(recorder.lines().is_empty());
        assert_eq!(session.board().score(Corner::Red), 1);
    }

    #[test]
    fn test_attach_display_pushes_full_refresh() {
        let mut session = Session::new();
        session.apply(Command::SetWrestlers { red: "R".into(), blue: "B".into() });
        session.apply(Command::AdjustScore { corner: Corner::Blue, delta: 2 });

        let recorder = RecordingDisplay::default();
        session.attach_display(Box::new(recorder.clone()));

        let lines = recorder.lines();
        assert!(lines.contains(&"wrestlers R|B".to_string()));
        assert!(lines.contains(&"score 0:2".to_string()));
        assert!(lines.contains(&"timer 6:00".to_string()));
        assert!(lines.contains(&"period 1".to_string()));
        assert!(lines.contains(&"winner none".to_string()));
    }

    #[test]
    fn test_reset_refreshes_board_but_keeps_labels() {
        let (mut session, recorder) = recording_session();
        session.apply(Command::SetWrestlers { red: "R".into(), blue: "B".into() });
        session.apply(Command::AdjustScore { corner: Corner::Red, delta: 9 });
        session.apply(Command::DeclareWinner { corner: Corner::Red });
        recorder.lines.borrow_mut().clear();

        session.apply(Command::Reset);

        assert_eq!(session.snapshot(), Scoreboard::new().snapshot());
        assert_eq!(session.bout().red_wrestler, "R");
        let lines = recorder.lines();
        assert!(lines.contains(&"score 0:0".to_string()));
        assert!(lines.contains(&"timer 6:00".to_string()));
        assert!(lines.contains(&"winner none".to_string()));
        assert!(lines.contains(&"break false 0".to_string()));
        // Labels are not re-pushed on reset.
        assert!(!lines.iter().any(|l| l.starts_with("wrestlers")));
    }

    #[test]
    fn test_drain_applies_in_fifo_order() {
        let mut session = Session::new();
        let mut queue = CommandQueue::new();
        queue.enqueue(Command::AdjustScore { corner: Corner::Red, delta: 2 });
        queue.enqueue(Command::AdjustScore { corner: Corner::Red, delta: -1 });
        queue.enqueue(Command::SetPeriod { period: 2 });

        session.drain(&mut queue);

        assert!(queue.is_empty());
        assert_eq!(session.board().score(Corner::Red), 1);
        assert_eq!(session.board().period().number(), 2);
    }
}
