use std::path::PathBuf;
use std::time::{Duration, Instant};

use frameplay::{BakedData, Fps, IntervalClock, Player, SvgRenderer};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let in_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("tests/data/waving.json"));
    let data = BakedData::from_path(&in_path)?;

    let mut player = Player::builder(data, IntervalClock::new(Fps::new(12, 1)?))
        .target(SvgRenderer::recording())
        .build()?;

    // One pass of the first action at 12 fps, then stop on the held frame.
    player.play(true);
    let deadline = Instant::now() + Duration::from_secs(2);
    while player.is_running() && Instant::now() < deadline {
        player.pump();
        std::thread::sleep(Duration::from_millis(10));
    }
    player.pause();

    let out_dir = PathBuf::from("target").join("play_to_svg");
    std::fs::create_dir_all(&out_dir)?;
    let (_clock, mut renderer) = player.dispose();
    let frames = renderer.take_frames();
    for (i, frame) in frames.iter().enumerate() {
        let path = out_dir.join(format!("{i:03}_{}_{:04}.svg", frame.action, frame.frame.0));
        std::fs::write(&path, &frame.markup)?;
    }
    eprintln!("wrote {} frames to {}", frames.len(), out_dir.display());
    Ok(())
}
