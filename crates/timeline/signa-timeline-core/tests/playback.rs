use serde::Deserialize;
use signa_face_core::VisemeName;
use signa_gloss_core::{GlossKind, LanguageMode};
use signa_pose_core::REST_POSE;
use signa_timeline_core::{
    Config, DisplayMode, PlaybackState, Timeline, TimelineCommand, TimelineEvent, TimelineInputs,
    ViewMode,
};

const TICK_MS: f64 = 10.0;

#[derive(Debug, Deserialize)]
struct PlaybackCase {
    text: String,
    language: LanguageMode,
    display_mode: DisplayMode,
    items: usize,
    keyframes: usize,
    letters: usize,
    item_changes: usize,
    loops: usize,
    duration_ms: f64,
}

#[derive(Debug, Default)]
struct Tally {
    started: usize,
    completed: usize,
    keyframes: usize,
    letters: usize,
    item_changes: usize,
    loops: usize,
}

impl Tally {
    fn add(&mut self, events: &[TimelineEvent]) {
        for e in events {
            match e {
                TimelineEvent::Started { .. } => self.started += 1,
                TimelineEvent::Completed { .. } => self.completed += 1,
                TimelineEvent::KeyframeAdvanced { .. } => self.keyframes += 1,
                TimelineEvent::LetterAdvanced { .. } => self.letters += 1,
                TimelineEvent::ItemChanged { .. } => self.item_changes += 1,
                TimelineEvent::Looped { .. } => self.loops += 1,
                _ => {}
            }
        }
    }
}

fn timeline(text: &str, language: LanguageMode, display_mode: DisplayMode) -> Timeline {
    let cfg = Config {
        language,
        display_mode,
        ..Config::default()
    };
    Timeline::with_text(cfg, text)
}

/// Play to completion in fixed ticks; returns the tally and elapsed logical time.
fn run_to_idle(tl: &mut Timeline, max_ms: f64) -> (Tally, f64) {
    let mut tally = Tally::default();
    let start = tl.now_ms();
    let out = tl.update(0.0, TimelineCommand::Play.into());
    tally.add(&out.events);
    while tl.is_playing() {
        assert!(tl.now_ms() - start <= max_ms, "playback did not finish");
        let out = tl.tick(TICK_MS);
        tally.add(&out.events);
    }
    (tally, tl.now_ms() - start)
}

/// it should play every scripted case through the expected positions and reach idle
#[test]
fn scripted_playback_cases() {
    let cases: Vec<PlaybackCase> =
        signa_test_fixtures::scripts::load("playback-cases").expect("load playback cases");
    for case in cases {
        let mut tl = timeline(&case.text, case.language, case.display_mode);
        assert_eq!(tl.script().len(), case.items, "items for {:?}", case.text);

        let (tally, elapsed) = run_to_idle(&mut tl, 60_000.0);
        assert_eq!(tally.started, 1);
        assert_eq!(tally.completed, 1, "{:?}", case.text);
        assert_eq!(tally.keyframes, case.keyframes, "keyframes for {:?}", case.text);
        assert_eq!(tally.letters, case.letters, "letters for {:?}", case.text);
        assert_eq!(tally.item_changes, case.item_changes, "items for {:?}", case.text);
        assert_eq!(tally.loops, case.loops, "loops for {:?}", case.text);
        assert!(
            (elapsed - case.duration_ms).abs() < TICK_MS,
            "duration for {:?}: {elapsed} vs {}",
            case.text,
            case.duration_ms
        );
        assert_eq!(tl.state(), PlaybackState::Idle);
        assert!(!tl.has_pending_timers());
    }
}

/// it should advance "hello" through exactly three keyframes and then go idle
#[test]
fn hello_scenario() {
    let mut tl = timeline("hello", LanguageMode::Asl, DisplayMode::Signs);
    let item = &tl.script()[0];
    assert_eq!(item.kind(), GlossKind::Word);
    assert_eq!(item.value, "HELLO");
    let keyframes: Vec<_> = item.animation().expect("animation").poses.clone();
    assert_eq!(keyframes.len(), 3);

    tl.play();
    let mut seen = vec![*tl.current_pose()];
    while tl.is_playing() {
        let out = tl.tick(TICK_MS);
        if out.frame.state == PlaybackState::Playing && seen.last() != Some(&out.frame.pose) {
            seen.push(out.frame.pose);
        }
    }
    assert_eq!(seen, keyframes);
    assert_eq!(tl.current_pose(), &REST_POSE);
}

/// it should complete immediately on an empty script without scheduling anything
#[test]
fn empty_script_completes_immediately() {
    for text in ["", "   ", "!?.,"] {
        let mut tl = timeline(text, LanguageMode::Asl, DisplayMode::Signs);
        let out = tl.update(0.0, TimelineCommand::Play.into());
        assert!(out.has_event(|e| matches!(e, TimelineEvent::Started { .. })));
        assert!(out.has_event(|e| matches!(e, TimelineEvent::Completed { items: 0 })));
        assert_eq!(out.frame.state, PlaybackState::Idle);
        assert_eq!(out.frame.progress.total, 0);
        assert!(!tl.has_pending_timers());
    }
}

/// it should reach idle within the script's total number of positions for long input
#[test]
fn termination_is_bounded() {
    let text = "the quick brown fox jumps over the lazy dog, thank you and good night";
    let mut tl = timeline(text, LanguageMode::Asl, DisplayMode::Signs);
    let positions: usize = tl.script().iter().map(|i| i.step_count().max(1)).sum();
    let (tally, _) = run_to_idle(&mut tl, 600_000.0);
    // A looping sign may replay its keyframes once under the default cap.
    assert!(tally.keyframes + tally.letters + tally.item_changes <= 2 * positions);
    assert_eq!(tally.completed, 1);
    assert!(!tl.has_pending_timers());
}

/// it should keep looping forever only when the repeat cap is lifted
#[test]
fn unbounded_loops_need_an_explicit_stop() {
    let mut cfg = Config::default();
    cfg.timeline.loop_repeats = None;
    let mut tl = Timeline::with_text(cfg, "more");
    tl.play();
    let mut loops = 0;
    for _ in 0..1000 {
        let out = tl.tick(TICK_MS);
        loops += out
            .events
            .iter()
            .filter(|e| matches!(e, TimelineEvent::Looped { .. }))
            .count();
    }
    assert!(tl.is_playing());
    assert!(loops > 5);
    let out = tl.update(0.0, TimelineCommand::Stop.into());
    assert!(out.has_event(|e| matches!(e, TimelineEvent::Paused { .. })));
    assert!(out.has_event(|e| matches!(e, TimelineEvent::Reset)));
    assert!(!tl.has_pending_timers());
}

/// it should halve every advancement delay at double speed
#[test]
fn double_speed_halves_delays() {
    let text = "thank you very much";

    let mut slow = timeline(text, LanguageMode::Asl, DisplayMode::Signs);
    let (slow_tally, slow_ms) = run_to_idle(&mut slow, 60_000.0);

    let mut fast = timeline(text, LanguageMode::Asl, DisplayMode::Signs);
    fast.set_speed(2.0);
    let (fast_tally, fast_ms) = run_to_idle(&mut fast, 60_000.0);

    assert_eq!(slow_tally.letters, fast_tally.letters);
    assert!(fast_ms <= slow_ms / 2.0 + TICK_MS, "{fast_ms} vs {slow_ms}");

    // Count transitions inside a fixed window.
    let window_ms = 3000.0;
    let count_in_window = |speed: f32| {
        let mut tl = timeline(text, LanguageMode::Asl, DisplayMode::Signs);
        tl.set_speed(speed);
        tl.play();
        let mut tally = Tally::default();
        while tl.now_ms() < window_ms {
            let out = tl.tick(TICK_MS);
            tally.add(&out.events);
        }
        tally.keyframes + tally.letters + tally.item_changes
    };
    let at_1x = count_in_window(1.0);
    let at_2x = count_in_window(2.0);
    assert!(at_2x >= 2 * at_1x, "{at_2x} transitions at 2x vs {at_1x} at 1x");
}

/// it should resume from the paused position
#[test]
fn pause_and_resume_keep_position() {
    let mut tl = timeline("thank you very much", LanguageMode::Asl, DisplayMode::Signs);
    tl.play();
    tl.tick(1500.0);
    assert_eq!(tl.index(), 1);
    let step = tl.step();

    let out = tl.update(0.0, TimelineCommand::Pause.into());
    assert!(out.has_event(|e| matches!(e, TimelineEvent::Paused { index: 1 })));
    assert_eq!(out.frame.viseme.name, VisemeName::Rest);
    tl.tick(10_000.0);
    assert_eq!((tl.index(), tl.step()), (1, step));

    tl.play();
    assert_eq!((tl.index(), tl.step()), (1, step));
    assert!(tl.is_playing());
}

/// it should step synchronously while idle without starting playback
#[test]
fn stepping_while_idle() {
    let mut tl = timeline("hello world", LanguageMode::Asl, DisplayMode::Signs);
    let hello = tl.script()[0].animation().expect("hello").clone();

    tl.step_forward();
    assert_eq!(tl.state(), PlaybackState::Idle);
    assert_eq!(tl.current_pose(), &hello.poses[1]);
    assert!(!tl.has_pending_timers());

    tl.step_forward();
    tl.step_forward();
    assert_eq!((tl.index(), tl.step()), (1, 0));
    let w = tl.script()[1].letters()[0].pose;
    assert_eq!(tl.current_pose(), &w);

    tl.step_backward();
    assert_eq!((tl.index(), tl.step()), (0, 0));
    assert_eq!(tl.current_pose(), &hello.poses[0]);
    tl.step_backward();
    assert_eq!((tl.index(), tl.step()), (0, 0));

    assert!(tl.jump_to(1));
    assert!(!tl.jump_to(7));
    assert_eq!(tl.index(), 1);
    for _ in 0..10 {
        tl.step_forward();
    }
    assert_eq!((tl.index(), tl.step()), (1, 4));
    assert_eq!(tl.state(), PlaybackState::Idle);
}

/// it should rebuild the script and hard-reset when language or display mode changes
#[test]
fn configuration_changes_rebuild_script() {
    let mut tl = timeline("hello namaste", LanguageMode::Asl, DisplayMode::Signs);
    assert_eq!(tl.script()[1].kind(), GlossKind::Fingerspell);
    tl.play();
    tl.tick(900.0);

    let out = tl.update(
        0.0,
        TimelineInputs::new(vec![TimelineCommand::SetLanguage {
            language: LanguageMode::Isl,
        }]),
    );
    assert!(out.has_event(|e| matches!(e, TimelineEvent::ScriptChanged { items: 2, .. })));
    assert!(out.has_event(|e| matches!(e, TimelineEvent::Reset)));
    assert_eq!(out.frame.state, PlaybackState::Idle);
    assert_eq!((tl.index(), tl.step()), (0, 0));
    assert_eq!(tl.script()[1].kind(), GlossKind::Word);

    tl.set_display_mode(DisplayMode::Spell);
    assert!(tl
        .script()
        .iter()
        .all(|i| i.kind() == GlossKind::Fingerspell));
    tl.tick(0.0);

    // View is carried through without touching playback.
    let out = tl.update(0.0, TimelineCommand::SetView { view: ViewMode::Dual }.into());
    assert_eq!(out.frame.view, ViewMode::Dual);
    assert!(out.events.is_empty());
}

/// it should drive the mouth while playing and rest it when idle
#[test]
fn lip_sync_follows_playback() {
    let mut tl = timeline("hello", LanguageMode::Asl, DisplayMode::Signs);
    tl.play();
    let mut shapes = std::collections::HashSet::new();
    while tl.is_playing() {
        let out = tl.tick(TICK_MS);
        shapes.insert(out.frame.viseme.name);
    }
    assert!(shapes.len() > 2, "{shapes:?}");
    assert_eq!(tl.viseme().name, VisemeName::Rest);
}

/// it should voice a word once across all of its keyframes
#[test]
fn word_is_voiced_once_per_item() {
    let mut tl = timeline("hello", LanguageMode::Asl, DisplayMode::Signs);
    tl.play();
    let mut previous = VisemeName::Rest;
    let mut e_onsets = Vec::new();
    let mut keyframes = 0;
    while tl.is_playing() {
        let out = tl.tick(TICK_MS);
        keyframes += out
            .events
            .iter()
            .filter(|e| matches!(e, TimelineEvent::KeyframeAdvanced { .. }))
            .count();
        let name = out.frame.viseme.name;
        if name == VisemeName::E && previous != VisemeName::E {
            e_onsets.push(tl.now_ms());
        }
        previous = name;
    }
    assert_eq!(keyframes, 2);
    assert_eq!(e_onsets.len(), 1, "onsets at {e_onsets:?}");
}

/// it should restart the mouth track on every fingerspelled letter
#[test]
fn fingerspelling_voices_each_letter() {
    let mut tl = timeline("hello", LanguageMode::Asl, DisplayMode::Spell);
    tl.play();
    assert_eq!(tl.lipsync().frames().len(), 1);
    assert_eq!(tl.lipsync().frames()[0].character, 'h');
    let mut voiced = vec!['h'];
    while tl.is_playing() {
        let letter = tl.tick(TICK_MS).events.iter().find_map(|e| match e {
            TimelineEvent::LetterAdvanced { letter, .. } => Some(letter.to_ascii_lowercase()),
            _ => None,
        });
        if let Some(letter) = letter {
            let frames = tl.lipsync().frames();
            assert_eq!(frames.len(), 1);
            assert_eq!(frames[0].character, letter);
            voiced.push(letter);
        }
    }
    assert_eq!(voiced, vec!['h', 'e', 'l', 'l', 'o']);
}

/// it should speak twice as fast at double speed
#[test]
fn lip_sync_rate_follows_speed() {
    let spoken_ms = |speed: f32| {
        let mut tl = timeline("hello", LanguageMode::Asl, DisplayMode::Signs);
        tl.set_speed(speed);
        tl.play();
        tl.lipsync().total_ms()
    };
    let normal = spoken_ms(1.0);
    let fast = spoken_ms(2.0);
    assert!(normal > 0.0);
    assert!((fast - normal / 2.0).abs() < 1e-9, "{fast} vs {normal}");
}

/// it should set expression and head tilt from the text when playback starts
#[test]
fn emotion_applies_on_play() {
    let mut tl = timeline("I am so happy and excited!!!", LanguageMode::Asl, DisplayMode::Signs);
    assert_eq!(tl.head_tilt(), 0.0);
    tl.play();
    assert!(tl.head_tilt() > 0.0);
    assert!(tl.expression().intensity > 0.0);
    let emotion = tl.emotion().emotion;
    let out = tl.tick(0.0);
    assert_eq!(out.frame.expression.emotion, emotion);
}
