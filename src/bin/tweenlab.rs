use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tweenlab::{Action, DemoKind, DemoSession, Fps, Preset, Preview, TimelineDriver};

#[derive(Parser, Debug)]
#[command(name = "tweenlab", version, about = "Animation primitive demos")]
struct Cli {
    /// More logging on stderr (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every demo, grouped by category.
    List {
        #[arg(long)]
        json: bool,
    },
    /// Print a demo's parameter schema.
    Params {
        demo: DemoKind,
        #[arg(long)]
        json: bool,
    },
    /// Evaluate a demo at one frame and print its preview and code.
    Show(ShowArgs),
    /// Play a demo for a number of ticks, printing one line per frame.
    Play(PlayArgs),
    /// Write the sample grid of a noise demo as a PNG heatmap.
    Grid(GridArgs),
}

#[derive(Parser, Debug)]
struct StateArgs {
    /// Demo id, e.g. `spring` or `noise-2d`. Optional when `--preset` is given.
    demo: Option<DemoKind>,

    /// Preset JSON to start from.
    #[arg(long)]
    preset: Option<PathBuf>,

    /// Parameter override `path=value`, e.g. `config.damping=4` (repeatable).
    #[arg(long = "set", value_name = "PATH=VALUE")]
    sets: Vec<String>,
}

#[derive(Parser, Debug)]
struct ShowArgs {
    #[command(flatten)]
    state: StateArgs,

    /// Frame index (0-based, clamped to the timeline).
    #[arg(long)]
    frame: Option<i64>,

    #[arg(long)]
    json: bool,

    /// Save the resulting state as a preset.
    #[arg(long)]
    save: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    #[command(flatten)]
    state: StateArgs,

    /// Number of frames to advance.
    #[arg(long, default_value_t = 30)]
    ticks: u64,

    /// Start frame.
    #[arg(long)]
    from: Option<i64>,

    /// Pace ticks at 30 fps instead of running as fast as possible.
    #[arg(long, default_value_t = false)]
    realtime: bool,
}

#[derive(Parser, Debug)]
struct GridArgs {
    #[command(flatten)]
    state: StateArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[arg(long)]
    frame: Option<i64>,

    /// Pixel size of one grid cell.
    #[arg(long, default_value_t = 16)]
    cell: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::List { json } => cmd_list(json),
        Command::Params { demo, json } => cmd_params(demo, json),
        Command::Show(args) => cmd_show(args),
        Command::Play(args) => cmd_play(args),
        Command::Grid(args) => cmd_grid(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_list(json: bool) -> anyhow::Result<()> {
    let sections = tweenlab::catalog();
    if json {
        println!("{}", serde_json::to_string_pretty(&sections)?);
        return Ok(());
    }
    for section in sections {
        println!("{}", section.title);
        for entry in section.entries {
            println!("  {:<20} {}", entry.id, entry.description);
        }
    }
    Ok(())
}

fn cmd_params(demo: DemoKind, json: bool) -> anyhow::Result<()> {
    let d = demo.demo();
    let schema = d.schema();
    if json {
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }
    for spec in schema.fields() {
        println!(
            "{:<28} {:<10} default {}",
            spec.key,
            kind_name(&spec.kind),
            serde_json::to_string(&spec.default)?
        );
    }
    Ok(())
}

fn kind_name(kind: &tweenlab::ParamKind) -> String {
    use tweenlab::ParamKind;
    match kind {
        ParamKind::Number { min, max, .. } => format!("{min}..{max}"),
        ParamKind::Choice { options } => options.join("|"),
        ParamKind::Flag => "flag".to_owned(),
        ParamKind::Text => "text".to_owned(),
        ParamKind::Color => "color".to_owned(),
        ParamKind::List { .. } => "list".to_owned(),
        ParamKind::Record { .. } => "record".to_owned(),
    }
}

fn open_session(state: &StateArgs) -> anyhow::Result<DemoSession> {
    let mut session = match (&state.preset, state.demo) {
        (Some(path), demo) => {
            let preset = Preset::load(path)?;
            if let Some(demo) = demo
                && demo != preset.demo
            {
                anyhow::bail!(
                    "preset '{}' is for '{}', not '{demo}'",
                    path.display(),
                    preset.demo
                );
            }
            DemoSession::from_preset(&preset)?
        }
        (None, Some(demo)) => DemoSession::new(demo)?,
        (None, None) => anyhow::bail!("give a demo id or --preset"),
    };
    for set in &state.sets {
        let (path, raw) = set
            .split_once('=')
            .with_context(|| format!("--set '{set}' is not PATH=VALUE"))?;
        session
            .dispatch(Action::SetField {
                path: path.trim().to_owned(),
                raw: raw.to_owned(),
            })
            .with_context(|| format!("apply --set '{set}'"))?;
    }
    Ok(session)
}

fn print_preview(session: &DemoSession, preview: &Preview) {
    println!(
        "{} @ frame {}/{}",
        session.kind(),
        session.current_frame(),
        session.timeline().total_frames()
    );
    println!("value: {}", preview.value);
    for (key, value) in &preview.style {
        println!("  {key}: {value}");
    }
    for r in &preview.readouts {
        println!("  {} = {}", r.label, r.value);
    }
}

fn cmd_show(args: ShowArgs) -> anyhow::Result<()> {
    let mut session = open_session(&args.state)?;
    if let Some(frame) = args.frame {
        session.dispatch(Action::Seek(frame))?;
    }
    let preview = session.preview()?;
    let code = session.code()?;

    if args.json {
        let out = serde_json::json!({
            "demo": session.kind(),
            "frame": session.current_frame(),
            "totalFrames": session.timeline().total_frames(),
            "preview": preview,
            "code": code,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_preview(&session, &preview);
        println!();
        println!("{code}");
    }

    if let Some(path) = &args.save {
        session.to_preset()?.save(path)?;
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    let mut session = open_session(&args.state)?;
    if let Some(frame) = args.from {
        session.dispatch(Action::Seek(frame))?;
    }
    if !session.timeline().is_playing() {
        session.dispatch(Action::TogglePlay)?;
    }

    if args.realtime {
        let mut driver = TimelineDriver::default();
        driver.run_realtime(args.ticks, |_| step(&mut session))?;
    } else {
        for _ in 0..args.ticks {
            step(&mut session)?;
        }
    }
    Ok(())
}

/// Print the current frame, then advance one.
fn step(session: &mut DemoSession) -> tweenlab::TweenlabResult<()> {
    let preview = session.preview()?;
    let frame = session.current_frame();
    println!(
        "{frame:>5} {:>7.3}s {}",
        Fps::DEMO.frames_to_secs(frame),
        preview.value
    );
    session.dispatch(Action::Tick)
}

fn cmd_grid(args: GridArgs) -> anyhow::Result<()> {
    let mut session = open_session(&args.state)?;
    if let Some(frame) = args.frame {
        session.dispatch(Action::Seek(frame))?;
    }
    let grid = tweenlab::noise_grid(session.kind(), session.current_frame(), session.params())?;
    let cell = args.cell.max(1);
    let size = u32::try_from(grid.size).context("grid too large")?;
    let slices = u32::try_from(grid.slices).context("grid too large")?;
    // Slices side by side with a one-cell gap.
    let width = (size * slices + slices.saturating_sub(1)) * cell;
    let height = size * cell;

    let mut img = image::RgbaImage::new(width, height);
    for slice in 0..grid.slices {
        for i in 0..grid.size {
            for j in 0..grid.size {
                let Some(v) = grid.get(slice, i, j) else {
                    continue;
                };
                let px = heat(v);
                let x0 = (slice as u32 * (size + 1) + i as u32) * cell;
                let y0 = j as u32 * cell;
                for y in y0..y0 + cell {
                    for x in x0..x0 + cell {
                        img.put_pixel(x, y, px);
                    }
                }
            }
        }
    }

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    img.save_with_format(&args.out, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

/// Blue for positive samples, red for negative, alpha = magnitude.
fn heat(v: f64) -> image::Rgba<u8> {
    let a = (v.abs().clamp(0.0, 1.0) * 255.0).round() as u8;
    if v >= 0.0 {
        image::Rgba([59, 130, 246, a])
    } else {
        image::Rgba([239, 68, 68, a])
    }
}
