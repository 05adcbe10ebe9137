use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use treeframes::{
    AnimationSink, BfsVariant, GifSink, GifSinkOpts, GraphSpec, GraphStore, NodeId, SceneConfig,
    TraversalMode,
};

#[derive(Parser, Debug)]
#[command(name = "treeframes", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Animate a traversal into a GIF.
    Render(RenderArgs),
    /// Render one frame of a traversal as a PNG.
    Frame(FrameArgs),
    /// Write `dfs.gif` and `bfs.gif` for the built-in sample tree.
    Demo(DemoArgs),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeChoice {
    Dfs,
    Bfs,
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Graph JSON (`{"edges": [[src, dst], ...]}`). Defaults to the sample tree.
    #[arg(long)]
    graph: Option<PathBuf>,

    /// Scene config JSON. Defaults to a 400x400 canvas.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Traversal to animate.
    #[arg(long, value_enum, default_value_t = ModeChoice::Dfs)]
    mode: ModeChoice,

    /// Node the traversal starts from.
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Drop the trailing re-mark frames of breadth-first traversal.
    #[arg(long, default_value_t = false)]
    clean_bfs: bool,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Output GIF path.
    #[arg(long)]
    out: PathBuf,

    /// Fail instead of replacing an existing output file.
    #[arg(long, default_value_t = false)]
    no_overwrite: bool,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Frame index (0-based).
    #[arg(long)]
    index: usize,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct DemoArgs {
    /// Directory receiving `dfs.gif` and `bfs.gif`.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Demo(args) => cmd_demo(args),
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(source: &SourceArgs) -> anyhow::Result<SceneConfig> {
    match &source.config {
        Some(path) => SceneConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display())),
        None => Ok(SceneConfig::default()),
    }
}

fn load_graph(source: &SourceArgs) -> anyhow::Result<GraphStore> {
    match &source.graph {
        Some(path) => Ok(GraphSpec::from_path(path)
            .with_context(|| format!("load graph '{}'", path.display()))?
            .build()),
        None => Ok(treeframes::demo_tree()),
    }
}

fn mode_of(source: &SourceArgs) -> TraversalMode {
    match source.mode {
        ModeChoice::Dfs => TraversalMode::Dfs,
        ModeChoice::Bfs if source.clean_bfs => TraversalMode::Bfs(BfsVariant::Clean),
        ModeChoice::Bfs => TraversalMode::Bfs(BfsVariant::Literal),
    }
}

fn animate(source: &SourceArgs, cfg: &SceneConfig) -> anyhow::Result<AnimationSink> {
    let mut graph = load_graph(source)?;
    let anim = treeframes::run_traversal(&mut graph, mode_of(source), NodeId(source.start), cfg)?;
    Ok(anim)
}

fn write_gif(
    anim: &AnimationSink,
    cfg: &SceneConfig,
    out: PathBuf,
    overwrite: bool,
) -> anyhow::Result<()> {
    let mut sink = GifSink::new(GifSinkOpts {
        out_path: out.clone(),
        overwrite,
    });
    anim.finalize(&mut sink, cfg.palette)
        .with_context(|| format!("write gif '{}'", out.display()))?;
    let digest = anim.frames().last().map_or(0, |f| f.fingerprint());
    eprintln!(
        "wrote {} ({} frames, last {digest:016x})",
        out.display(),
        anim.len()
    );
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.source)?;
    let anim = animate(&args.source, &cfg)?;
    write_gif(&anim, &cfg, args.out, !args.no_overwrite)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.source)?;
    let anim = animate(&args.source, &cfg)?;
    let frame = anim.frames().get(args.index).with_context(|| {
        format!(
            "frame {} out of range (animation has {} frames)",
            args.index,
            anim.len()
        )
    })?;

    treeframes::ensure_parent_dir(&args.out)?;
    frame
        .to_rgba(&cfg.palette)
        .save_with_format(&args.out, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_demo(args: DemoArgs) -> anyhow::Result<()> {
    let cfg = SceneConfig::default();
    for (name, mode) in [
        ("dfs.gif", TraversalMode::Dfs),
        ("bfs.gif", TraversalMode::Bfs(BfsVariant::Literal)),
    ] {
        let mut graph = treeframes::demo_tree();
        let anim = treeframes::run_traversal(&mut graph, mode, NodeId::ROOT, &cfg)?;
        write_gif(&anim, &cfg, args.out_dir.join(name), true)?;
    }
    Ok(())
}
