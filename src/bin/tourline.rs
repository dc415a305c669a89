use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tourline::{
    BuiltinVisuals, FlowController, FlowEvent, FrameSample, Platform, Timeline, VisualCatalog,
    VisualRef,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tourline", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sample a timeline JSON file and print the frames as JSON.
    Sample(SampleArgs),
    /// Sample one of the built-in step demonstrations.
    Visual(VisualArgs),
    /// Feed a scripted list of events to the flow and print every transition.
    Walk(WalkArgs),
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Input timeline JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Sample at these elapsed times (seconds). Overrides `--fps`/`--until`.
    #[arg(long = "at", value_delimiter = ',')]
    at: Vec<f64>,

    /// Samples per second when sweeping.
    #[arg(long, default_value_t = 10.0)]
    fps: f64,

    /// Sweep end in seconds. Defaults to one full period.
    #[arg(long)]
    until: Option<f64>,

    /// Write JSON here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct VisualArgs {
    /// Which demonstration.
    #[arg(long, value_enum)]
    kind: VisualKind,

    /// Platform for `files-tutorial`.
    #[arg(long, default_value = "windows")]
    platform: Platform,

    /// Samples per second.
    #[arg(long, default_value_t = 10.0)]
    fps: f64,

    /// Sweep end in seconds. Defaults to one full period.
    #[arg(long)]
    seconds: Option<f64>,

    /// Print the timeline itself instead of sampled frames.
    #[arg(long, default_value_t = false)]
    timeline: bool,

    /// Write JSON here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct WalkArgs {
    /// Select this platform before replaying the script.
    #[arg(long)]
    platform: Option<Platform>,

    /// Comma-separated events: `select:<platform>`, `advance`, `retreat`, `confirm`, `reset`,
    /// `home`.
    #[arg(long, value_delimiter = ',')]
    events: Vec<String>,

    /// Write JSON here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VisualKind {
    Download,
    DoubleClick,
    SmartScreen,
    DragDrop,
    RightClick,
    Spotlight,
    Terminal,
    Account,
    Ram,
    Mods,
    FilesIntro,
    FilesTutorial,
}

impl VisualKind {
    fn resolve(self, platform: Platform) -> VisualRef {
        match self {
            Self::Download => VisualRef::Download,
            Self::DoubleClick => VisualRef::DoubleClick,
            Self::SmartScreen => VisualRef::SmartScreen,
            Self::DragDrop => VisualRef::DragDrop,
            Self::RightClick => VisualRef::RightClick,
            Self::Spotlight => VisualRef::Spotlight,
            Self::Terminal => VisualRef::Terminal,
            Self::Account => VisualRef::Account,
            Self::Ram => VisualRef::Ram,
            Self::Mods => VisualRef::Mods,
            Self::FilesIntro => VisualRef::FilesIntro,
            Self::FilesTutorial => VisualRef::FilesTutorial(platform),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Sample(args) => cmd_sample(args),
        Command::Visual(args) => cmd_visual(args),
        Command::Walk(args) => cmd_walk(args),
    }
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.in_path)
        .with_context(|| format!("read timeline '{}'", args.in_path.display()))?;
    let timeline = Timeline::from_json(&text)
        .with_context(|| format!("parse timeline '{}'", args.in_path.display()))?;

    let frames = if args.at.is_empty() {
        sweep(&timeline, args.fps, args.until)?
    } else {
        args.at.iter().map(|&t| timeline.sample(t)).collect()
    };
    emit(&frames, args.out.as_deref())
}

fn cmd_visual(args: VisualArgs) -> anyhow::Result<()> {
    let visual = args.kind.resolve(args.platform);
    let Some(timeline) = BuiltinVisuals
        .timeline(&visual)
        .with_context(|| format!("build visual {visual:?}"))?
    else {
        eprintln!("{visual:?} is a still image");
        return emit(&serde_json::Value::Null, args.out.as_deref());
    };

    if args.timeline {
        return emit(&timeline, args.out.as_deref());
    }
    let frames = sweep(&timeline, args.fps, args.seconds)?;
    emit(&frames, args.out.as_deref())
}

fn cmd_walk(args: WalkArgs) -> anyhow::Result<()> {
    let mut script = Vec::with_capacity(args.events.len() + 1);
    if let Some(platform) = args.platform {
        script.push((format!("select:{platform}"), FlowEvent::SelectPlatform(platform)));
    }
    for raw in &args.events {
        let event = raw
            .parse::<FlowEvent>()
            .with_context(|| format!("parse event '{raw}'"))?;
        script.push((raw.trim().to_owned(), event));
    }

    let mut flow = FlowController::new();
    let mut log = Vec::with_capacity(script.len());
    for (raw, event) in script {
        let outcome = flow
            .handle(event)
            .with_context(|| format!("apply event '{raw}'"))?;
        log.push(serde_json::json!({
            "event": raw,
            "outcome": outcome,
            "state": flow.state(),
            "step": flow.current_step().map(|s| s.title.as_str()),
            "progress": flow.progress(),
        }));
    }
    emit(&log, args.out.as_deref())
}

fn sweep(timeline: &Timeline, fps: f64, until: Option<f64>) -> anyhow::Result<Vec<FrameSample>> {
    if !fps.is_finite() || fps <= 0.0 {
        anyhow::bail!("fps must be finite and > 0 (got {fps})");
    }
    let until = until.unwrap_or_else(|| timeline.period());
    let frames = timeline
        .sample_every(1.0 / fps, until)
        .with_context(|| format!("sample 0..={until}s at {fps} fps"))?;
    Ok(frames)
}

fn emit<T: serde::Serialize + ?Sized>(value: &T, out: Option<&Path>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize output")?;
    let Some(out) = out else {
        println!("{json}");
        return Ok(());
    };
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(out, json).with_context(|| format!("write '{}'", out.display()))?;
    eprintln!("wrote {}", out.display());
    Ok(())
}
