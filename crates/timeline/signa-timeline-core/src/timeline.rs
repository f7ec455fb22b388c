//! Timeline: the playback state machine that turns a gloss script into frames.
//!
//! The controller owns the script, the position (item, keyframe/letter, loop count),
//! one advancement timer slot and the lip-sync sampler. Hosts call `update(dt, inputs)`
//! once per frame; due timers fire in time order on the logical clock.
//!
//! Advancement while playing:
//! - entering a position shows its pose and schedules `Step` after the position's hold
//!   (keyframe duration, static hold, or per-letter delay);
//! - `Step` moves to the next keyframe/letter, or else schedules `RestartLoop` (looping
//!   sign within its repeat cap), `NextItem`, or completes the script;
//! - every delay is divided by the speed multiplier;
//! - the lip-sync track restarts when the item changes, and per letter while fingerspelling.

use signa_face_core::{
    analyze_emotion, get_expression, EmotionAnalysis, FacialExpression, LipSyncTrack, Viseme,
    NEUTRAL_EXPRESSION, REST_VISEME,
};
use signa_gloss_core::{
    gloss_notation, resolve_gloss, sign_table, text_to_fingerspell, GlossKind, GlossSign,
    LanguageMode, ResolverConfig, SignGlossItem,
};
use signa_pose_core::{HandPose, REST_POSE};

use crate::config::{clamp_speed, Config, TimelineConfig};
use crate::ids::{SessionAllocator, SessionId};
use crate::inputs::{TimelineCommand, TimelineInputs};
use crate::outputs::{Progress, RenderFrame, TimelineEvent, TimelineOutputs};
use crate::state::{DisplayMode, PlaybackState, ViewMode};
use crate::timer::{PendingTimer, RepeatingTimer, TimerSlot};

/// What the advancement timer does when it fires.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Advance {
    /// Leave the current keyframe/letter.
    Step,
    /// Restart a looping sign at keyframe 0.
    RestartLoop,
    /// Move to the next gloss item.
    NextItem,
}

#[derive(Debug)]
pub struct Timeline {
    // Configuration
    cfg: TimelineConfig,
    resolver: ResolverConfig,
    language: LanguageMode,
    display_mode: DisplayMode,
    view: ViewMode,

    // Script for the current (text, language, display mode)
    text: String,
    script: Vec<SignGlossItem>,
    analysis: EmotionAnalysis,

    // Playback
    state: PlaybackState,
    speed: f32,
    now_ms: f64,
    sessions: SessionAllocator,
    session: Option<SessionId>,
    completed: bool,
    index: usize,
    step: usize,
    loops_done: u32,

    // Channels
    pose: HandPose,
    expression: FacialExpression,
    viseme: Viseme,
    head_tilt: f32,
    lipsync: LipSyncTrack,
    lipsync_start_ms: f64,

    // Timers
    advance: TimerSlot<Advance>,
    sampler: RepeatingTimer,

    // Per-update outputs
    events: Vec<TimelineEvent>,
    outputs: TimelineOutputs,
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Timeline {
    /// Create an idle timeline with an empty script.
    pub fn new(config: Config) -> Self {
        let Config {
            timeline,
            resolver,
            language,
            display_mode,
            view,
        } = config;
        Self {
            speed: clamp_speed(timeline.speed),
            sampler: RepeatingTimer::new(f64::from(timeline.sampler_interval_ms)),
            cfg: timeline,
            resolver,
            language,
            display_mode,
            view,
            text: String::new(),
            script: Vec::new(),
            analysis: analyze_emotion(""),
            state: PlaybackState::Idle,
            now_ms: 0.0,
            sessions: SessionAllocator::new(),
            session: None,
            completed: false,
            index: 0,
            step: 0,
            loops_done: 0,
            pose: REST_POSE,
            expression: NEUTRAL_EXPRESSION,
            viseme: REST_VISEME,
            head_tilt: 0.0,
            lipsync: LipSyncTrack::default(),
            lipsync_start_ms: 0.0,
            advance: TimerSlot::new(),
            events: Vec::new(),
            outputs: TimelineOutputs::default(),
        }
    }

    /// Convenience: new timeline with `text` already loaded.
    pub fn with_text(config: Config, text: &str) -> Self {
        let mut tl = Self::new(config);
        tl.set_text(text);
        tl.events.clear();
        tl
    }

    // ----- accessors -----

    #[inline]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn script(&self) -> &[SignGlossItem] {
        &self.script
    }

    #[inline]
    pub fn current_item(&self) -> Option<&SignGlossItem> {
        self.script.get(self.index)
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Keyframe (word) or letter (fingerspelling) index within the current item.
    #[inline]
    pub fn step(&self) -> usize {
        self.step
    }

    #[inline]
    pub fn language(&self) -> LanguageMode {
        self.language
    }

    #[inline]
    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    #[inline]
    pub fn view(&self) -> ViewMode {
        self.view
    }

    #[inline]
    pub fn config(&self) -> &TimelineConfig {
        &self.cfg
    }

    #[inline]
    pub fn emotion(&self) -> &EmotionAnalysis {
        &self.analysis
    }

    #[inline]
    pub fn lipsync(&self) -> &LipSyncTrack {
        &self.lipsync
    }

    #[inline]
    pub fn current_pose(&self) -> &HandPose {
        &self.pose
    }

    #[inline]
    pub fn viseme(&self) -> &Viseme {
        &self.viseme
    }

    #[inline]
    pub fn expression(&self) -> &FacialExpression {
        &self.expression
    }

    #[inline]
    pub fn head_tilt(&self) -> f32 {
        self.head_tilt
    }

    #[inline]
    pub fn session(&self) -> Option<SessionId> {
        self.session
    }

    /// Whether either timer is armed.
    #[inline]
    pub fn has_pending_timers(&self) -> bool {
        self.advance.is_pending() || self.sampler.is_running()
    }

    /// The pending advancement and its remaining (scaled) delay.
    pub fn pending_advance(&self) -> Option<(Advance, f64)> {
        let timer = self.advance.peek()?;
        Some((timer.action, (timer.due_ms - self.now_ms).max(0.0)))
    }

    /// Snapshot of the current render output.
    pub fn frame(&self) -> RenderFrame {
        let item = self.current_item();
        let kind = item.map(SignGlossItem::kind);
        RenderFrame {
            state: self.state,
            pose: self.pose,
            expression: self.expression,
            viseme: self.viseme,
            head_tilt: self.head_tilt,
            progress: Progress {
                index: self.index,
                total: self.script.len(),
                keyframe: if kind == Some(GlossKind::Word) { self.step } else { 0 },
                letter: if kind == Some(GlossKind::Fingerspell) { self.step } else { 0 },
                value: item.map(|i| i.value.clone()).unwrap_or_default(),
            },
            view: self.view,
        }
    }

    // ----- configuration surface -----

    /// Replace the source text. Rebuilds the script and hard-resets playback.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_owned();
        self.analysis = analyze_emotion(text);
        self.rebuild_script();
    }

    /// Switch language; a change rebuilds the script and hard-resets playback.
    pub fn set_language(&mut self, language: LanguageMode) {
        if language != self.language {
            self.language = language;
            self.rebuild_script();
        }
    }

    /// Switch between word signs and fingerspelling; a change rebuilds the script.
    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        if mode != self.display_mode {
            self.display_mode = mode;
            self.rebuild_script();
        }
    }

    pub fn set_resolver_config(&mut self, resolver: ResolverConfig) {
        if resolver != self.resolver {
            self.resolver = resolver;
            self.rebuild_script();
        }
    }

    /// Carried through to frames only.
    #[inline]
    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    /// Set the speed multiplier (clamped to 0.5..=2.0). The pending advancement keeps
    /// its progress: its remaining time is rescaled.
    pub fn set_speed(&mut self, speed: f32) {
        let speed = clamp_speed(speed);
        if speed == self.speed {
            return;
        }
        let factor = f64::from(self.speed) / f64::from(speed);
        self.advance.rescale(self.now_ms, factor);
        log::debug!("speed {} -> {}", self.speed, speed);
        self.speed = speed;
    }

    fn rebuild_script(&mut self) {
        self.script = match self.display_mode {
            DisplayMode::Signs => {
                resolve_gloss(&self.text, sign_table(self.language), &self.resolver)
            }
            DisplayMode::Spell => text_to_fingerspell(&self.text, self.language),
        };
        let notation = gloss_notation(&self.script);
        log::debug!(
            "script rebuilt ({}, {:?}): {} items [{}]",
            self.language,
            self.display_mode,
            self.script.len(),
            notation
        );
        self.events.push(TimelineEvent::ScriptChanged {
            items: self.script.len(),
            notation,
        });
        self.reset();
    }

    // ----- transport -----

    /// Start or resume. An empty script completes immediately.
    pub fn play(&mut self) {
        if self.is_playing() {
            return;
        }
        let session = self.sessions.alloc();
        if self.script.is_empty() {
            log::debug!("play on empty script: completing immediately");
            self.events.push(TimelineEvent::Started {
                session,
                index: 0,
            });
            self.completed = true;
            self.events.push(TimelineEvent::Completed { items: 0 });
            return;
        }
        if self.completed {
            self.index = 0;
            self.step = 0;
            self.loops_done = 0;
            self.completed = false;
        }
        self.session = Some(session);
        self.state = PlaybackState::Playing;
        self.expression = get_expression(self.analysis.emotion, self.analysis.intensity);
        self.head_tilt = self.analysis.head_tilt();
        self.sampler.start(self.now_ms, session);
        log::debug!(
            "playback started: session {:?} at item {}/{}",
            session,
            self.index,
            self.script.len()
        );
        self.events.push(TimelineEvent::Started {
            session,
            index: self.index,
        });
        self.enter_position(true);
    }

    /// Stop advancing, keeping the position.
    pub fn pause(&mut self) {
        if !self.is_playing() {
            return;
        }
        self.halt();
        log::debug!("playback paused at item {} step {}", self.index, self.step);
        self.events.push(TimelineEvent::Paused { index: self.index });
    }

    /// Pause and rewind to the start.
    pub fn stop(&mut self) {
        self.pause();
        self.reset();
    }

    /// Back to item 0, rest pose, rest viseme, neutral face, idle.
    pub fn reset(&mut self) {
        self.halt();
        self.index = 0;
        self.step = 0;
        self.loops_done = 0;
        self.completed = false;
        self.pose = REST_POSE;
        self.expression = NEUTRAL_EXPRESSION;
        self.head_tilt = 0.0;
        self.lipsync = LipSyncTrack::default();
        log::debug!("timeline reset");
        self.events.push(TimelineEvent::Reset);
    }

    /// Next keyframe/letter, or the start of the next item. No-op at the very end.
    pub fn step_forward(&mut self) {
        let Some(count) = self.current_item().map(SignGlossItem::step_count) else {
            return;
        };
        let speak = if self.step + 1 < count {
            self.step += 1;
            self.push_step_event();
            self.speaks_per_step()
        } else if self.index + 1 < self.script.len() {
            self.move_to_item(self.index + 1);
            true
        } else {
            return;
        };
        self.completed = false;
        self.enter_position(speak);
    }

    /// Previous keyframe/letter, or the start of the previous item.
    pub fn step_backward(&mut self) {
        if self.script.is_empty() {
            return;
        }
        let speak = if self.step > 0 {
            self.step -= 1;
            self.push_step_event();
            self.speaks_per_step()
        } else {
            if self.index > 0 {
                self.move_to_item(self.index - 1);
            }
            true
        };
        self.completed = false;
        self.enter_position(speak);
    }

    /// Jump to the start of item `index`. Returns false (and changes nothing) when out of range.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.script.len() {
            log::warn!(
                "jump_to({index}) ignored: script has {} items",
                self.script.len()
            );
            return false;
        }
        self.move_to_item(index);
        self.completed = false;
        self.enter_position(true);
        true
    }

    /// Apply one host command.
    pub fn apply(&mut self, cmd: TimelineCommand) {
        match cmd {
            TimelineCommand::Play => self.play(),
            TimelineCommand::Pause => self.pause(),
            TimelineCommand::Stop => self.stop(),
            TimelineCommand::Reset => self.reset(),
            TimelineCommand::StepForward => self.step_forward(),
            TimelineCommand::StepBackward => self.step_backward(),
            TimelineCommand::JumpTo { index } => {
                self.jump_to(index);
            }
            TimelineCommand::SetSpeed { speed } => self.set_speed(speed),
            TimelineCommand::SetText { text } => self.set_text(&text),
            TimelineCommand::SetLanguage { language } => self.set_language(language),
            TimelineCommand::SetDisplayMode { mode } => self.set_display_mode(mode),
            TimelineCommand::SetView { view } => self.set_view(view),
        }
    }

    // ----- clock -----

    /// Apply commands, advance the clock by `dt_ms`, fire due timers in order, and
    /// return the frame plus events since the previous update.
    pub fn update(&mut self, dt_ms: f64, inputs: TimelineInputs) -> &TimelineOutputs {
        for cmd in inputs.commands {
            self.apply(cmd);
        }
        let dt = if dt_ms.is_finite() && dt_ms > 0.0 { dt_ms } else { 0.0 };
        self.run_until(self.now_ms + dt);

        self.outputs.frame = self.frame();
        self.outputs.events = std::mem::take(&mut self.events);
        &self.outputs
    }

    /// `update` without commands.
    #[inline]
    pub fn tick(&mut self, dt_ms: f64) -> &TimelineOutputs {
        self.update(dt_ms, TimelineInputs::default())
    }

    fn run_until(&mut self, target_ms: f64) {
        let mut firings = 0usize;
        loop {
            let advance_due = self.advance.due_ms().filter(|d| *d <= target_ms);
            let sampler_due = self.sampler.next_due_ms().filter(|d| *d <= target_ms);
            let fire_advance = match (advance_due, sampler_due) {
                (None, None) => break,
                (Some(_), None) => true,
                (None, Some(_)) => false,
                (Some(a), Some(s)) => a <= s,
            };
            firings += 1;
            if firings > self.cfg.max_firings_per_update {
                log::warn!(
                    "timer firing limit ({}) reached; deferring the rest to the next update",
                    self.cfg.max_firings_per_update
                );
                // Clock stays at the last firing; the rest fire on the next update.
                return;
            }
            if fire_advance {
                if let Some(timer) = self.advance.take_due(target_ms) {
                    self.now_ms = self.now_ms.max(timer.due_ms);
                    self.fire(timer);
                }
            } else {
                let limit = advance_due.unwrap_or(target_ms);
                if let Some((at, session)) = self.sampler.take_due(limit) {
                    self.now_ms = self.now_ms.max(at);
                    self.sample_lipsync(session);
                }
            }
        }
        self.now_ms = self.now_ms.max(target_ms);
    }

    fn fire(&mut self, timer: PendingTimer<Advance>) {
        if !self.is_playing() || self.session != Some(timer.session) {
            log::trace!(
                "stale {:?} timer from session {:?} ignored",
                timer.action,
                timer.session
            );
            return;
        }
        log::trace!(
            "{:?} fired at {:.1} ms (item {} step {})",
            timer.action,
            self.now_ms,
            self.index,
            self.step
        );
        match timer.action {
            Advance::Step => self.on_step(),
            Advance::RestartLoop => {
                self.loops_done += 1;
                self.step = 0;
                self.events.push(TimelineEvent::Looped {
                    index: self.index,
                    count: self.loops_done,
                });
                self.enter_position(false);
            }
            Advance::NextItem => {
                if self.index + 1 < self.script.len() {
                    self.move_to_item(self.index + 1);
                    self.enter_position(true);
                } else {
                    self.finish();
                }
            }
        }
    }

    fn on_step(&mut self) {
        let Some(item) = self.current_item() else {
            self.finish();
            return;
        };
        let count = item.step_count();
        let looped = item.animation().map_or(false, |a| a.looped);

        if self.step + 1 < count {
            self.step += 1;
            self.push_step_event();
            let speak = self.speaks_per_step();
            self.enter_position(speak);
        } else if looped && self.loop_allowed() {
            self.schedule(Advance::RestartLoop, self.cfg.loop_pause_ms);
        } else if self.index + 1 < self.script.len() {
            self.schedule(Advance::NextItem, self.cfg.item_pause_ms);
        } else {
            self.finish();
        }
    }

    fn sample_lipsync(&mut self, session: SessionId) {
        if !self.is_playing() || self.session != Some(session) {
            log::trace!("stale sampler tick from session {session:?} ignored");
            return;
        }
        self.viseme = self.lipsync.sample(self.now_ms - self.lipsync_start_ms);
    }

    // ----- internals -----

    fn loop_allowed(&self) -> bool {
        self.cfg.loop_repeats.map_or(true, |n| self.loops_done < n)
    }

    /// Natural end of the script.
    fn finish(&mut self) {
        self.halt();
        self.completed = true;
        self.pose = REST_POSE;
        log::debug!("playback completed ({} items)", self.script.len());
        self.events.push(TimelineEvent::Completed {
            items: self.script.len(),
        });
    }

    /// Cancel both timers and drop to idle. Emits nothing.
    fn halt(&mut self) {
        if let Some(timer) = self.advance.cancel() {
            log::trace!("cancelled pending {:?}", timer.action);
        }
        self.sampler.stop();
        self.session = None;
        self.state = PlaybackState::Idle;
        self.viseme = REST_VISEME;
    }

    fn move_to_item(&mut self, index: usize) {
        self.index = index;
        self.step = 0;
        self.loops_done = 0;
        if let Some(item) = self.script.get(index) {
            log::debug!("item {} -> {}", index, item.value);
            self.events.push(TimelineEvent::ItemChanged {
                index,
                kind: item.kind(),
                value: item.value.clone(),
            });
        }
    }

    fn push_step_event(&mut self) {
        let Some(item) = self.script.get(self.index) else {
            return;
        };
        let event = match &item.sign {
            GlossSign::Word { .. } => TimelineEvent::KeyframeAdvanced {
                index: self.index,
                keyframe: self.step,
            },
            GlossSign::Fingerspell { letters } => TimelineEvent::LetterAdvanced {
                index: self.index,
                letter_index: self.step,
                letter: letters.get(self.step).map_or(' ', |l| l.letter),
            },
        };
        self.events.push(event);
    }

    /// Fingerspelling voices each letter; a word is voiced once per item.
    fn speaks_per_step(&self) -> bool {
        self.current_item()
            .map_or(false, |i| i.kind() == GlossKind::Fingerspell)
    }

    /// Show the current position and, while playing, schedule leaving it. `speak`
    /// regenerates the lip-sync track for the position and restarts its clock.
    fn enter_position(&mut self, speak: bool) {
        let item = self.script.get(self.index);
        self.pose = item.map_or(REST_POSE, |i| *i.pose_at(self.step));
        if speak {
            let speech = item.map(|i| i.speech_text(self.step)).unwrap_or_default();
            let wpm = self.cfg.words_per_minute * f64::from(self.speed);
            self.lipsync = LipSyncTrack::new(&speech, wpm);
            self.lipsync_start_ms = self.now_ms;
        }

        if self.is_playing() {
            let hold = self.hold_ms();
            self.schedule(Advance::Step, hold);
        }
    }

    /// Unscaled hold for the current position.
    fn hold_ms(&self) -> u32 {
        match self.current_item().map(|i| &i.sign) {
            Some(GlossSign::Word { animation }) if animation.is_motion() => {
                animation.duration_or(self.step, self.cfg.default_keyframe_ms)
            }
            Some(GlossSign::Word { .. }) => self.cfg.static_hold_ms,
            Some(GlossSign::Fingerspell { letters }) if !letters.is_empty() => self.cfg.letter_ms,
            _ => 0,
        }
    }

    fn schedule(&mut self, action: Advance, base_ms: u32) {
        let Some(session) = self.session else {
            return;
        };
        let delay = f64::from(base_ms) / f64::from(self.speed);
        self.advance.schedule(self.now_ms, delay, session, action);
        log::trace!("scheduled {action:?} in {delay:.1} ms");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing(text: &str) -> Timeline {
        let mut tl = Timeline::with_text(Config::default(), text);
        tl.play();
        tl
    }

    #[test]
    fn stale_timer_is_a_no_op() {
        let mut tl = playing("hello");
        let old = tl.session().expect("session");
        tl.pause();
        tl.play();
        let current = tl.session().expect("session");
        assert_ne!(old, current);

        let now = tl.now_ms();
        tl.fire(PendingTimer {
            due_ms: now,
            session: old,
            action: Advance::Step,
        });
        assert_eq!((tl.index(), tl.step()), (0, 0));

        tl.fire(PendingTimer {
            due_ms: now,
            session: current,
            action: Advance::Step,
        });
        assert_eq!(tl.step(), 1);

        tl.stop();
        tl.fire(PendingTimer {
            due_ms: now,
            session: current,
            action: Advance::NextItem,
        });
        assert_eq!(tl.state(), PlaybackState::Idle);
        assert_eq!((tl.index(), tl.step()), (0, 0));
        assert!(!tl.has_pending_timers());
    }

    #[test]
    fn at_most_one_advancement_is_pending() {
        let mut tl = playing("hello world");
        assert_eq!(tl.pending_advance().map(|(a, _)| a), Some(Advance::Step));
        tl.step_forward();
        tl.step_forward();
        tl.step_backward();
        // Each step replaced the pending timer rather than adding one.
        let (action, remaining) = tl.pending_advance().expect("pending");
        assert_eq!(action, Advance::Step);
        assert_eq!(remaining, 400.0);
    }

    #[test]
    fn hold_durations_follow_position_kind() {
        let mut tl = playing("hello");
        assert_eq!(tl.hold_ms(), 400);
        tl.set_text("i love you");
        assert_eq!(tl.hold_ms(), 700);
        tl.set_text("xyz");
        assert_eq!(tl.hold_ms(), 600);
        tl.set_text("");
        assert_eq!(tl.hold_ms(), 0);
    }

    #[test]
    fn set_speed_rescales_pending_delay() {
        let mut tl = playing("hello");
        tl.tick(100.0);
        assert_eq!(tl.pending_advance().map(|(_, r)| r), Some(300.0));
        tl.set_speed(2.0);
        assert_eq!(tl.pending_advance().map(|(_, r)| r), Some(150.0));
        tl.set_speed(10.0);
        assert_eq!(tl.speed(), 2.0);
    }

    #[test]
    fn word_keeps_its_lipsync_clock_across_keyframes() {
        let mut tl = playing("hello");
        let start = tl.lipsync_start_ms;
        tl.tick(450.0);
        assert_eq!(tl.step(), 1);
        assert_eq!(tl.lipsync_start_ms, start);
        assert_eq!(tl.lipsync().frames().len(), 5);

        let mut tl = playing("hi");
        tl.set_display_mode(DisplayMode::Spell);
        tl.play();
        tl.tick(650.0);
        assert_eq!(tl.step(), 1);
        assert_eq!(tl.lipsync_start_ms, 600.0);
        assert_eq!(tl.lipsync().frames()[0].character, 'i');
    }

    #[test]
    fn firing_limit_holds_the_clock_at_the_last_firing() {
        let mut cfg = Config::default();
        cfg.timeline.max_firings_per_update = 1;
        let mut tl = Timeline::with_text(cfg, "hello");
        tl.play();
        // Only the coalesced sampler tick (400 ms) fits before the limit.
        tl.tick(1000.0);
        assert_eq!(tl.now_ms(), 400.0);
        assert_eq!(tl.pending_advance(), Some((Advance::Step, 0.0)));
        // The deferred step fires at its own time and the next hold starts there.
        tl.tick(0.0);
        assert_eq!(tl.step(), 1);
        assert_eq!(tl.now_ms(), 400.0);
        assert_eq!(tl.pending_advance(), Some((Advance::Step, 400.0)));
    }

    #[test]
    fn reset_restores_idle_rest_state() {
        let mut tl = playing("I am so happy");
        tl.tick(1000.0);
        assert!(tl.head_tilt() > 0.0);
        tl.reset();
        assert_eq!(tl.state(), PlaybackState::Idle);
        assert_eq!((tl.index(), tl.step()), (0, 0));
        assert_eq!(tl.current_pose(), &REST_POSE);
        assert_eq!(tl.viseme(), &REST_VISEME);
        assert_eq!(tl.head_tilt(), 0.0);
        assert!(!tl.has_pending_timers());
    }
}
