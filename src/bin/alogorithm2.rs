use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "alogorithm2", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the sorted triangles and outline of a seed as JSON.
    Pattern(PatternArgs),
    /// Render the static mark of a seed as SVG.
    Mark(MarkArgs),
    /// Render one morph frame between two seeds as SVG.
    Frame(FrameArgs),
    /// Run the animator on a simulated clock and write one SVG per frame.
    Frames(FramesArgs),
}

#[derive(Parser, Debug)]
struct PatternArgs {
    #[arg(long)]
    seed: String,

    /// Square canvas edge in pixels.
    #[arg(long, default_value_t = 400.0)]
    size: f64,

    #[arg(long, value_enum, default_value_t = ModeChoice::Morph)]
    mode: ModeChoice,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct MarkArgs {
    #[arg(long)]
    seed: String,

    #[arg(long, default_value_t = 400.0)]
    width: f64,

    #[arg(long, default_value_t = 400.0)]
    height: f64,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Seed shown at progress 0.
    #[arg(long)]
    from: String,

    /// Seed shown at progress 1.
    #[arg(long)]
    to: String,

    /// Linear progress in [0, 1]; easing is applied before composing.
    #[arg(long)]
    progress: f64,

    /// Animation options JSON; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    size: Option<f64>,

    #[arg(long, value_enum)]
    mode: Option<ModeChoice>,

    /// Emit the composed frame as JSON instead of SVG.
    #[arg(long)]
    json: bool,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Seeds visited after the initial one, cycled.
    #[arg(long, value_delimiter = ',', required = true)]
    seeds: Vec<String>,

    /// Animation options JSON; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial seed.
    #[arg(long)]
    seed: Option<String>,

    #[arg(long)]
    size: Option<f64>,

    #[arg(long, value_enum)]
    mode: Option<ModeChoice>,

    #[arg(long, default_value_t = 30.0)]
    fps: f64,

    /// Simulated clock length.
    #[arg(long, default_value_t = 8000.0)]
    total_ms: f64,

    /// Directory receiving `frame_NNNNN.svg`.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeChoice {
    Fly,
    Morph,
}

impl From<ModeChoice> for alogorithm2::Mode {
    fn from(m: ModeChoice) -> Self {
        match m {
            ModeChoice::Fly => Self::Fly,
            ModeChoice::Morph => Self::Morph,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Pattern(args) => cmd_pattern(args),
        Command::Mark(args) => cmd_mark(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
    }
}

fn read_options(
    path: Option<&Path>,
    size: Option<f64>,
    mode: Option<ModeChoice>,
) -> anyhow::Result<alogorithm2::AnimationOptions> {
    let mut opts = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read options '{}'", path.display()))?;
            alogorithm2::AnimationOptions::from_json_str(&text)
                .with_context(|| format!("parse options '{}'", path.display()))?
        }
        None => alogorithm2::AnimationOptions::default(),
    };
    if let Some(size) = size {
        opts.size = size;
    }
    if let Some(mode) = mode {
        opts.mode = mode.into();
    }
    opts.validate().context("invalid animation options")?;
    Ok(opts)
}

fn write_output(out: Option<&Path>, contents: &str) -> anyhow::Result<()> {
    let Some(out) = out else {
        println!("{contents}");
        return Ok(());
    };
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(out, contents).with_context(|| format!("write '{}'", out.display()))?;
    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_pattern(args: PatternArgs) -> anyhow::Result<()> {
    let pattern = alogorithm2::generate_pattern(&args.seed, args.size, args.mode.into())
        .with_context(|| format!("generate pattern for seed '{}'", args.seed))?;
    let json = serde_json::to_string_pretty(&pattern).context("serialize pattern")?;
    write_output(args.out.as_deref(), &json)
}

fn cmd_mark(args: MarkArgs) -> anyhow::Result<()> {
    let generator = alogorithm2::PatternGenerator::new(alogorithm2::MarkDefaults::default());
    let svg = alogorithm2::render_mark_svg(&generator, &args.seed, args.width, args.height)
        .with_context(|| format!("render mark for seed '{}'", args.seed))?;
    write_output(args.out.as_deref(), &svg)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let opts = read_options(args.config.as_deref(), args.size, args.mode)?;
    let generator = alogorithm2::PatternGenerator::new(opts.mark.clone());

    let from = generator
        .generate_pattern(&args.from, opts.size, opts.mode)
        .with_context(|| format!("generate pattern for seed '{}'", args.from))?;
    let to = generator
        .generate_pattern(&args.to, opts.size, opts.mode)
        .with_context(|| format!("generate pattern for seed '{}'", args.to))?;

    let mut state = alogorithm2::MorphState::resting(from, &args.from, opts.size, opts.mode)
        .begin_cycle(to, &args.to, opts.mode);
    state.progress = args.progress.clamp(0.0, 1.0);

    let frame = alogorithm2::compose_frame(&state, opts.ease.apply(state.progress), opts.mode);
    let contents = if args.json {
        serde_json::to_string_pretty(&frame).context("serialize frame")?
    } else {
        alogorithm2::render_frame_svg(&frame, opts.size)?
    };
    write_output(args.out.as_deref(), &contents)
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    if !(args.fps.is_finite() && args.fps > 0.0) {
        anyhow::bail!("fps must be finite and > 0");
    }
    if !(args.total_ms.is_finite() && args.total_ms >= 0.0) {
        anyhow::bail!("total-ms must be finite and >= 0");
    }

    let mut opts = read_options(args.config.as_deref(), args.size, args.mode)?;
    if args.seed.is_some() {
        opts.seed = args.seed;
    }
    let size = opts.size;
    let seeds = alogorithm2::SeedList::new(args.seeds)?;
    let mut animator =
        alogorithm2::Animator::new(opts, seeds, alogorithm2::ProgressDrive::Automatic)?;
    animator.mount().context("mount animator")?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let step_ms = 1000.0 / args.fps;
    let count = (args.total_ms / step_ms).floor() as u64 + 1;
    for i in 0..count {
        animator.advance_to(i as f64 * step_ms)?;
        let Some(frame) = animator.frame() else {
            anyhow::bail!("animator produced no frame");
        };
        let svg = alogorithm2::render_frame_svg(&frame, size)?;
        let path = args.out_dir.join(format!("frame_{i:05}.svg"));
        std::fs::write(&path, svg).with_context(|| format!("write '{}'", path.display()))?;
    }
    animator.teardown();

    eprintln!("wrote {count} frames to {}", args.out_dir.display());
    Ok(())
}
