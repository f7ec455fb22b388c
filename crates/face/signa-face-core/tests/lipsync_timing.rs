use signa_face_core::{
    generate_lip_sync, get_viseme_at_time, LipSyncTrack, VisemeName, REST_VISEME,
};

/// it should emit contiguous, non-decreasing frames for any non-empty text
#[test]
fn frames_are_monotonic_and_contiguous() {
    for text in ["hello world", "THANK YOU!", "a", "   ", "zzz...?", "naïve café"] {
        for wpm in [60.0, 150.0, 300.0] {
            let frames = generate_lip_sync(text, wpm);
            assert_eq!(frames.len(), text.to_lowercase().chars().count());
            assert_eq!(frames[0].time, 0.0);
            for pair in frames.windows(2) {
                assert!(pair[1].time >= pair[0].time);
                assert!((pair[1].time - pair[0].end()).abs() < 1e-9);
            }
            assert!(frames.iter().all(|f| f.duration > 0.0 && f.time.is_finite()));
        }
    }
}

/// it should return rest before the first frame and for an empty list
#[test]
fn rest_outside_the_utterance() {
    let frames = generate_lip_sync("hello", 150.0);
    assert_eq!(get_viseme_at_time(&frames, -1.0), REST_VISEME);
    assert_eq!(get_viseme_at_time(&[], 100.0), REST_VISEME);
    assert!(generate_lip_sync("", 150.0).is_empty());
}

/// it should map "hello" to its expected viseme sequence
#[test]
fn hello_viseme_sequence() {
    let frames = generate_lip_sync("Hello", 150.0);
    let names: Vec<VisemeName> = frames.iter().map(|f| f.viseme).collect();
    assert_eq!(
        names,
        vec![
            VisemeName::Rest,
            VisemeName::E,
            VisemeName::Alveolar,
            VisemeName::Alveolar,
            VisemeName::O
        ]
    );
    let o = &frames[4];
    assert_eq!(get_viseme_at_time(&frames, o.time).name, VisemeName::O);
    assert_eq!(get_viseme_at_time(&frames, o.time - 0.001).name, VisemeName::Alveolar);
}

/// it should shorten the utterance proportionally when speaking faster
#[test]
fn faster_speech_is_shorter() {
    let slow = LipSyncTrack::new("good morning", 150.0);
    let fast = LipSyncTrack::new("good morning", 300.0);
    assert!((fast.total_ms() * 2.0 - slow.total_ms()).abs() < 1e-6);
    assert!(fast.is_finished(fast.total_ms()));
    assert!(!slow.is_finished(fast.total_ms()));
}
