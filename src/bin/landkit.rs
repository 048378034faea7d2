use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use serde::de::DeserializeOwned;

#[derive(Parser, Debug)]
#[command(name = "landkit", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a content document into a static HTML page.
    Render(RenderArgs),
    /// Print the pinned-region progress for a single scroll offset.
    Progress(ProgressArgs),
    /// Replay a scroll sweep through the page controller, one JSON snapshot per line.
    Scroll(ScrollArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input content JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output HTML path.
    #[arg(long)]
    out: PathBuf,

    /// Initial theme baked into the markup.
    #[arg(long, value_enum, default_value_t = ThemeChoice::Light)]
    theme: ThemeChoice,

    /// Stylesheet href to link from <head> (repeatable).
    #[arg(long = "stylesheet")]
    stylesheets: Vec<String>,

    /// Script src to load at the end of <body> (repeatable).
    #[arg(long = "script")]
    scripts: Vec<String>,
}

#[derive(Parser, Debug)]
struct ProgressArgs {
    /// Current scroll offset in px.
    #[arg(long, allow_hyphen_values = true)]
    offset: f64,

    /// Pinned region start offset in px.
    #[arg(long, allow_hyphen_values = true)]
    start: f64,

    /// Pinned region total height in px.
    #[arg(long)]
    height: f64,

    /// Viewport height in px.
    #[arg(long)]
    viewport: f64,
}

#[derive(Parser, Debug)]
struct ScrollArgs {
    /// Measured page layout JSON.
    #[arg(long)]
    layout: PathBuf,

    /// Optional controller config JSON; missing fields use defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = 1280.0)]
    viewport_width: f64,

    #[arg(long, default_value_t = 800.0)]
    viewport_height: f64,

    /// First scroll offset; negative values start at the document top.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    from: f64,

    /// Last scroll offset (inclusive).
    #[arg(long)]
    to: f64,

    /// Scroll distance per step.
    #[arg(long, default_value_t = 100.0)]
    step: f64,

    /// Simulated animation time between steps.
    #[arg(long, default_value_t = 100.0)]
    ms_per_step: f64,

    #[arg(long, value_enum, default_value_t = ThemeChoice::Light)]
    theme: ThemeChoice,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ThemeChoice {
    Light,
    Dark,
}

impl From<ThemeChoice> for landkit::Theme {
    fn from(c: ThemeChoice) -> Self {
        match c {
            ThemeChoice::Light => Self::Light,
            ThemeChoice::Dark => Self::Dark,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Progress(args) => cmd_progress(args),
        Command::Scroll(args) => cmd_scroll(args),
    }
}

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> anyhow::Result<T> {
    let f = File::open(path).with_context(|| format!("open {what} '{}'", path.display()))?;
    let r = BufReader::new(f);
    let v = serde_json::from_reader(r).with_context(|| format!("parse {what} JSON"))?;
    Ok(v)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let content: landkit::PageContent = read_json(&args.in_path, "content")?;

    let opts = landkit::RenderOptions {
        theme: args.theme.into(),
        stylesheets: args.stylesheets,
        scripts: args.scripts,
        head_html: None,
    };
    let html = landkit::render_page(&content, &opts)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, html)
        .with_context(|| format!("write html '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_progress(args: ProgressArgs) -> anyhow::Result<()> {
    for (name, v) in [
        ("offset", args.offset),
        ("start", args.start),
        ("height", args.height),
        ("viewport", args.viewport),
    ] {
        if !v.is_finite() {
            anyhow::bail!("--{name} must be finite");
        }
    }
    if args.height < 0.0 || args.viewport < 0.0 {
        anyhow::bail!("--height and --viewport must be >= 0");
    }

    let p = landkit::scroll_progress(args.offset, args.start, args.height, args.viewport);
    println!("{p}");
    Ok(())
}

fn cmd_scroll(args: ScrollArgs) -> anyhow::Result<()> {
    if !(args.step.is_finite() && args.step > 0.0) {
        anyhow::bail!("--step must be > 0");
    }
    if !(args.from.is_finite() && args.to.is_finite()) || args.to < args.from {
        anyhow::bail!("--to must be >= --from");
    }

    let layout: landkit::PageLayout = read_json(&args.layout, "layout")?;
    let config = match &args.config {
        Some(path) => read_json(path, "config")?,
        None => landkit::ControllerConfig::default(),
    };
    let viewport = landkit::Viewport::new(args.from, args.viewport_width, args.viewport_height)?;
    let store = landkit::MemoryThemeStore::new(Some(args.theme.into()));
    let mut ctrl = landkit::PageController::new(layout, config, viewport, Box::new(store), None)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut step = 0u64;
    loop {
        let y = args.from + args.step * step as f64;
        if y > args.to {
            break;
        }
        ctrl.tick(args.ms_per_step * step as f64)?;
        ctrl.on_scroll(y)?;
        serde_json::to_writer(&mut out, &ctrl.snapshot()).context("write snapshot")?;
        writeln!(out).context("write snapshot")?;
        step += 1;
    }

    eprintln!("replayed {step} scroll steps");
    Ok(())
}
