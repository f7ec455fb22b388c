use serde::Deserialize;
use signa_face_core::{analyze_emotion, get_expression, Emotion, NEUTRAL_EXPRESSION};

#[derive(Debug, Deserialize)]
struct EmotionCase {
    text: String,
    emotion: Emotion,
    intensity: f32,
}

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

/// it should classify every scripted text with the expected emotion and intensity
#[test]
fn scripted_emotion_cases() {
    let cases: Vec<EmotionCase> =
        signa_test_fixtures::scripts::load("emotion-cases").expect("load emotion cases");
    for case in cases {
        let a = analyze_emotion(&case.text);
        assert_eq!(a.emotion, case.emotion, "emotion for {:?}", case.text);
        approx(a.intensity, case.intensity, 1e-4);
    }
}

/// it should keep intensity within [0, 1] for any input
#[test]
fn intensity_is_bounded() {
    let loud = "happy ".repeat(50) + &"!".repeat(100);
    for text in ["", "!!!!!!!!!!", "?????", loud.as_str(), "\u{1F600} \u{0}"] {
        let a = analyze_emotion(text);
        assert!((0.0..=1.0).contains(&a.intensity), "{text:?} -> {}", a.intensity);
        if a.emotion == Emotion::Neutral {
            assert_eq!(a.intensity, 0.0);
        }
    }
}

/// it should feed analysis straight into the expression blend
#[test]
fn analysis_drives_expression() {
    let a = analyze_emotion("I am so happy and excited!!!");
    assert!(matches!(a.emotion, Emotion::Happy | Emotion::Excited));
    assert!(a.intensity > 0.0);
    let face = get_expression(a.emotion, a.intensity);
    assert!(face.mouth_smile > NEUTRAL_EXPRESSION.mouth_smile);
    assert!(a.head_tilt() > 0.0);
}
