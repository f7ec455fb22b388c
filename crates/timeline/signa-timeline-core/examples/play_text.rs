use anyhow::Context;
use signa_timeline_core::{Config, Timeline, TimelineCommand};

const FRAME_MS: f64 = 1000.0 / 60.0;

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let text = args.next().unwrap_or_else(|| "Hello, thank you!".to_string());
    let config = match args.next() {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {path}"))?;
            Config::from_json_str(&json).with_context(|| format!("parsing config {path}"))?
        }
        None => Config::default(),
    };

    let mut tl = Timeline::with_text(config, &text);
    println!("notation: {}", signa_timeline_core::gloss::gloss_notation(tl.script()));
    println!(
        "emotion: {} ({:.2})",
        tl.emotion().emotion,
        tl.emotion().intensity
    );

    let out = tl.update(0.0, TimelineCommand::Play.into());
    for event in &out.events {
        println!("{:>8.1} ms {}", 0.0, serde_json::to_string(event)?);
    }
    while tl.is_playing() {
        let events = tl.tick(FRAME_MS).events.clone();
        let now = tl.now_ms();
        for event in &events {
            println!("{now:>8.1} ms {}", serde_json::to_string(event)?);
        }
    }

    println!(
        "final frame:\n{}",
        serde_json::to_string_pretty(&tl.frame())?
    );
    Ok(())
}
