use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use frameplay::{
    BakedData, Canvas, FrameIndex, ManualClock, Player, SvgRenderer, rasterize_svg, to_svg_markup,
};

#[derive(Parser, Debug)]
#[command(name = "frameplay", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print version info and the action list.
    Info(InfoArgs),
    /// Pose a single frame and write it as SVG or PNG.
    Frame(FrameArgs),
    /// Drive a player with fixed ticks and write every rendered frame.
    Play(PlayArgs),
}

#[derive(Parser, Debug)]
struct InfoArgs {
    /// Input baked data JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Print the action list as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input baked data JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Action to pose (defaults to the first declared action).
    #[arg(long)]
    action: Option<String>,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output path; `.png` rasterizes, anything else writes SVG markup.
    #[arg(long)]
    out: PathBuf,

    /// Raster width in pixels (PNG only).
    #[arg(long, default_value_t = 512)]
    width: u32,

    /// Raster height in pixels (PNG only).
    #[arg(long, default_value_t = 512)]
    height: u32,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    /// Input baked data JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Action to play (defaults to the first declared action).
    #[arg(long)]
    action: Option<String>,

    /// Number of clock ticks to deliver.
    #[arg(long, default_value_t = 1)]
    ticks: u64,

    /// Frames elapsed per tick.
    #[arg(long, default_value_t = 1)]
    step: u64,

    /// Play in reverse.
    #[arg(long, default_value_t = false)]
    reverse: bool,

    /// Stop at the terminal frame instead of looping.
    #[arg(long, default_value_t = false)]
    oneshot: bool,

    /// Output directory for numbered frames.
    #[arg(long)]
    out_dir: PathBuf,

    /// Write PNGs instead of SVG markup.
    #[arg(long, default_value_t = false)]
    png: bool,

    /// Raster width in pixels (PNG only).
    #[arg(long, default_value_t = 512)]
    width: u32,

    /// Raster height in pixels (PNG only).
    #[arg(long, default_value_t = 512)]
    height: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Info(args) => cmd_info(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Play(args) => cmd_play(args),
    }
}

fn load(path: &Path) -> anyhow::Result<BakedData> {
    BakedData::from_path(path).with_context(|| format!("load baked data '{}'", path.display()))
}

fn build_player(
    data: BakedData,
    action: Option<&str>,
    renderer: SvgRenderer,
) -> anyhow::Result<Player<ManualClock, SvgRenderer>> {
    let mut builder = Player::builder(data, ManualClock::new()).target(renderer);
    if let Some(name) = action {
        builder = builder.initial_action(name);
    }
    Ok(builder.build()?)
}

fn cmd_info(args: InfoArgs) -> anyhow::Result<()> {
    let data = load(&args.in_path)?;
    let player = build_player(data, None, SvgRenderer::new())?;

    if args.json {
        let list = serde_json::to_string_pretty(&player.action_list())
            .context("serialize action list")?;
        println!("{list}");
        return Ok(());
    }

    println!("version:     {}", player.version());
    println!("app version: {}", player.app_version());
    println!("elements:    {}", player.base_tree().element_count());
    println!("actions:");
    for info in player.action_list() {
        println!("  {} (end frame {})", info.name, info.end_frame);
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let data = load(&args.in_path)?;
    let player = build_player(data, args.action.as_deref(), SvgRenderer::new())?;
    let action = player.current_action_name().to_owned();
    let posed = player.pose(&action, FrameIndex(args.frame))?;
    let markup = to_svg_markup(&posed);

    ensure_parent_dir(&args.out)?;
    if is_png(&args.out) {
        let canvas = Canvas::new(args.width, args.height)?;
        write_png(&markup, canvas, &args.out)?;
    } else {
        std::fs::write(&args.out, markup)
            .with_context(|| format!("write svg '{}'", args.out.display()))?;
    }

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    let data = load(&args.in_path)?;
    let mut player = build_player(data, args.action.as_deref(), SvgRenderer::recording())?;
    let canvas = Canvas::new(args.width, args.height)?;

    if args.reverse {
        player.reverse(args.oneshot);
    } else {
        player.play(args.oneshot);
    }
    for _ in 0..args.ticks {
        if !player.is_running() {
            break;
        }
        player.clock_mut().push(args.step);
        player.pump();
    }

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let (_clock, mut renderer) = player.dispose();
    let frames = renderer.take_frames();
    for (i, frame) in frames.iter().enumerate() {
        let stem = format!("{i:05}_{}_{:04}", frame.action, frame.frame.0);
        if args.png {
            let path = args.out_dir.join(format!("{stem}.png"));
            write_png(&frame.markup, canvas, &path)?;
        } else {
            let path = args.out_dir.join(format!("{stem}.svg"));
            std::fs::write(&path, &frame.markup)
                .with_context(|| format!("write svg '{}'", path.display()))?;
        }
    }

    eprintln!(
        "wrote {} frames to {}",
        frames.len(),
        args.out_dir.display()
    );
    Ok(())
}

fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("png"))
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn write_png(markup: &str, canvas: Canvas, path: &Path) -> anyhow::Result<()> {
    let mut frame = rasterize_svg(markup, canvas)?;
    frame.unpremultiply();
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}
