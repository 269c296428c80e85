use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::Context as _;
use brella::{
    Canvas, ChannelRange, FfmpegSink, FfmpegSinkOpts, Fps, MultiSink, PngSequenceSink,
    RetryBudget, Transition, TransitionConfig, TransitionRunner,
};
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

/// Render the umbrella transition to a transparent WebM and/or a PNG sequence.
#[derive(Parser, Debug)]
#[command(name = "brella", version, about, disable_help_flag = true)]
struct Cli {
    /// Print help.
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,

    /// Width of the canvas.
    #[arg(short = 'W', long, default_value_t = 1920)]
    width: u32,

    /// Height of the canvas.
    #[arg(short = 'H', long, default_value_t = 1080)]
    height: u32,

    /// Name of the output video file.
    #[arg(short, long, default_value = "brella.webm")]
    output: String,

    /// Also write every frame as a PNG file.
    #[arg(long)]
    output_image: bool,

    /// Directory for PNG frames (a fresh temp directory when omitted).
    #[arg(long, requires = "output_image")]
    output_dir: Option<PathBuf>,

    /// Write into the PNG directory even if it already exists.
    #[arg(long, requires = "output_dir")]
    force_output_dir: bool,

    /// Skip video encoding (useful with --output-image when ffmpeg is unavailable).
    #[arg(long)]
    no_video: bool,

    /// Framerate of the transition.
    #[arg(short = 'r', long, default_value_t = 60)]
    fps: u32,

    /// JSON file with transition options; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum amount of brellas [default: 30].
    #[arg(long)]
    brella: Option<usize>,

    /// Possible numbers of ribs, separated by commas [default: 6,8].
    #[arg(long)]
    ribs: Option<NumList>,

    /// Maximum retries before choosing to overlap, -1 to allow indefinite retries
    /// [default: 1000000].
    #[arg(long, allow_hyphen_values = true)]
    retries: Option<i64>,

    /// Frames of brella opening/closing [default: 15].
    #[arg(long)]
    attack: Option<u32>,

    /// Frames of brella staying opened [default: 30].
    #[arg(long)]
    hold: Option<u32>,

    /// Radian angle to apply to each brella every frame [default: 0.01].
    #[arg(long, allow_hyphen_values = true)]
    rotate: Option<f64>,

    /// Hue angle range in degrees, separated by comma [default: 0,360].
    #[arg(short = 'h', long, allow_hyphen_values = true)]
    hue: Option<NumList>,

    /// Saturation range in percentage, separated by comma [default: 80,100].
    #[arg(short = 's', long, allow_hyphen_values = true)]
    saturation: Option<NumList>,

    /// Lightness range in percentage, separated by comma [default: 50,50].
    #[arg(short = 'l', long, allow_hyphen_values = true)]
    lightness: Option<NumList>,
}

/// Comma-separated list of numbers.
#[derive(Clone, Debug)]
struct NumList(Vec<f64>);

impl FromStr for NumList {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| format!("\"{part}\" is not a number"))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(NumList)
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
    let config = build_config(&cli)?;
    run(&cli, config)
}

fn read_config_json(path: &Path) -> anyhow::Result<TransitionConfig> {
    let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
    let r = BufReader::new(f);
    let cfg: TransitionConfig =
        serde_json::from_reader(r).with_context(|| "parse transition config JSON")?;
    Ok(cfg)
}

fn build_config(cli: &Cli) -> anyhow::Result<TransitionConfig> {
    let mut cfg = match &cli.config {
        Some(path) => read_config_json(path)?,
        None => TransitionConfig::default(),
    };

    if let Some(n) = cli.brella {
        cfg.brella_max = n;
    }
    if let Some(NumList(ribs)) = &cli.ribs {
        cfg.ribs = ribs
            .iter()
            .map(|&r| {
                if r.fract() == 0.0 && r >= 3.0 && r <= f64::from(u32::MAX) {
                    Ok(r as u32)
                } else {
                    anyhow::bail!("Ribs must be numbers >= 3")
                }
            })
            .collect::<anyhow::Result<_>>()?;
    }
    if let Some(n) = cli.retries {
        cfg.retries = RetryBudget::from_signed(n);
    }
    if let Some(a) = cli.attack {
        cfg.attack = a;
    }
    if let Some(h) = cli.hold {
        cfg.hold = h;
    }
    if let Some(r) = cli.rotate {
        anyhow::ensure!(r.is_finite(), "Rotate must be a number");
        cfg.rotate = r;
    }
    if let Some(NumList(v)) = &cli.hue {
        cfg.hue = ChannelRange::from_bounds(v).context("HUE angle range")?;
    }
    if let Some(NumList(v)) = &cli.saturation {
        cfg.saturation = ChannelRange::from_bounds(v).context("saturation range")?;
    }
    if let Some(NumList(v)) = &cli.lightness {
        cfg.lightness = ChannelRange::from_bounds(v).context("lightness range")?;
    }

    cfg.validate()?;
    Ok(cfg)
}

fn run(cli: &Cli, config: TransitionConfig) -> anyhow::Result<()> {
    anyhow::ensure!(
        brella::is_valid_file_name(&cli.output),
        "Output file name is not valid"
    );
    anyhow::ensure!(
        cli.output_image || !cli.no_video,
        "nothing to write: --no-video needs --output-image"
    );

    let canvas = Canvas::new(cli.width, cli.height)?;
    let fps = Fps::new(cli.fps, 1).context("Frame rate must be a positive number")?;

    let mut transition = match cli.seed {
        Some(seed) => Transition::with_seed(config, seed)?,
        None => Transition::new(config)?,
    };

    let mut sink = MultiSink::new();
    if cli.output_image {
        let (dir, force) = match &cli.output_dir {
            Some(dir) => (dir.clone(), cli.force_output_dir),
            None => {
                let id = brella::encode::output::random_id(&mut rand::rng());
                (std::env::temp_dir().join(format!("brella-{id}")), false)
            }
        };
        println!("Writing frames to {}", dir.display());
        sink.push(Box::new(PngSequenceSink::new(dir, force)));
    }

    let video_path = if cli.no_video {
        None
    } else {
        let requested = PathBuf::from(&cli.output);
        let chosen = brella::unique_output_path(&requested, &mut rand::rng());
        if chosen != requested {
            println!(
                "{} already exists. Will instead output to {}",
                requested.display(),
                chosen.display()
            );
        }
        sink.push(Box::new(FfmpegSink::new(FfmpegSinkOpts::new(chosen.clone()))));
        Some(chosen)
    };

    let mut runner = TransitionRunner::new(canvas, fps)?;
    let stats = runner.run(&mut transition, &mut sink, |p| {
        let mut out = std::io::stdout().lock();
        // Best effort; a closed stdout must not abort rendering.
        let _ = write!(out, "\r\x1b[2K{}", p.line());
        let _ = out.flush();
    })?;
    println!();

    match video_path {
        Some(path) => println!("Wrote {} ({} frames)", path.display(), stats.frames),
        None => println!("Rendered {} frames", stats.frames),
    }
    Ok(())
}
