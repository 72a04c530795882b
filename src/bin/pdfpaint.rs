use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use pdfpaint::{
    Affine, AlphaComposite, ApplierConfig, ColorMapper, Composite, ContentOp, ContentStream,
    DeviceCmykColorMapper, DeviceRgbColorMapper, LinearGradient, Paint, PaintApplier, PaintEnv,
    RadialGradient, RawImageEncoder, Rect, Resources, Rgba8, SvgTileRenderer, TexturePaint,
    TileContent, TiledPattern, TwoStopGradient, write_operators,
};

#[derive(Parser, Debug)]
#[command(name = "pdfpaint", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Translate one paint job and print the resulting PDF objects.
    Translate(TranslateArgs),
}

#[derive(Parser, Debug)]
struct TranslateArgs {
    /// Input job JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Applier configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(serde::Deserialize, Debug)]
struct Job {
    paint: Option<JobPaint>,
    #[serde(default)]
    composite: Option<AlphaComposite>,
    #[serde(default = "identity")]
    transform: Affine,
    #[serde(default)]
    shape_bounds: Option<Rect>,
    #[serde(default)]
    color_space: JobColorSpace,
}

fn identity() -> Affine {
    Affine::IDENTITY
}

#[derive(serde::Deserialize, Debug, Default, Clone, Copy)]
#[serde(rename_all = "snake_case")]
enum JobColorSpace {
    #[default]
    Rgb,
    Cmyk,
}

#[derive(serde::Deserialize, Debug)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum JobPaint {
    Solid {
        color: Rgba8,
    },
    Linear(LinearGradient),
    Radial(RadialGradient),
    TwoStop(TwoStopGradient),
    /// Raster tile; `image` is relative to the job file.
    Texture {
        anchor: Rect,
        image: PathBuf,
    },
    /// SVG tile; `svg` is relative to the job file.
    SvgTile {
        anchor: Rect,
        svg: PathBuf,
        #[serde(default)]
        transform: Option<Affine>,
    },
}

impl JobPaint {
    fn load(self, root: &Path) -> anyhow::Result<Paint> {
        Ok(match self {
            Self::Solid { color } => Paint::Solid(color),
            Self::Linear(g) => Paint::Linear(g),
            Self::Radial(g) => Paint::Radial(g),
            Self::TwoStop(g) => Paint::TwoStop(g),
            Self::Texture { anchor, image: rel } => {
                let path = root.join(rel);
                let bitmap = image::open(&path)
                    .with_context(|| format!("decode image '{}'", path.display()))?
                    .to_rgba8();
                Paint::Texture(TexturePaint {
                    anchor,
                    image: Arc::new(bitmap),
                })
            }
            Self::SvgTile {
                anchor,
                svg,
                transform,
            } => {
                let path = root.join(svg);
                let bytes = std::fs::read(&path)
                    .with_context(|| format!("read svg '{}'", path.display()))?;
                let tree = usvg::Tree::from_data(&bytes, &usvg::Options::default())
                    .with_context(|| format!("parse svg '{}'", path.display()))?;
                Paint::Tiled(TiledPattern {
                    anchor,
                    transform,
                    content: TileContent::Svg(Arc::new(tree)),
                })
            }
        })
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Translate(args) => cmd_translate(args),
    }
}

fn cmd_translate(args: TranslateArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("read config '{}'", path.display()))?;
            ApplierConfig::from_json(&json)
                .with_context(|| format!("parse config '{}'", path.display()))?
        }
        None => ApplierConfig::default(),
    };

    let job_json = std::fs::read_to_string(&args.in_path)
        .with_context(|| format!("read job '{}'", args.in_path.display()))?;
    let job: Job = serde_json::from_str(&job_json)
        .with_context(|| format!("parse job '{}'", args.in_path.display()))?;
    let root = args
        .in_path
        .parent()
        .unwrap_or_else(|| Path::new("."));
    let paint = job.paint.map(|p| p.load(root)).transpose()?;
    let composite = job.composite.map(Composite::Alpha);

    let mapper: Box<dyn ColorMapper> = match job.color_space {
        JobColorSpace::Rgb => Box::new(DeviceRgbColorMapper),
        JobColorSpace::Cmyk => Box::new(DeviceCmykColorMapper),
    };
    let mut resources = Resources::new();
    let mut encoder = RawImageEncoder;
    let mut renderer = SvgTileRenderer::<RawImageEncoder>::default();
    let mut sink = ContentStream::new();

    let mut applier = PaintApplier::new(config);
    let shading = {
        let mut env = PaintEnv::new(&mut resources, mapper.as_ref(), &mut encoder, &mut renderer)
            .with_composite(composite.as_ref())
            .with_shape_bounds(job.shape_bounds);
        applier.apply_paint(paint.as_ref(), &mut sink, job.transform, &mut env)?
    };

    println!("% content");
    print!("{}", sink.to_operators());
    for op in sink.ops() {
        if let ContentOp::SetGraphicsState(gs) = op {
            println!("% ExtGState\n{gs}");
        }
    }
    if let Some(shading) = shading {
        println!("% shading\n{shading}");
    }
    for (name, pattern) in resources.patterns() {
        println!("% pattern {name}\n{}", pattern.to_dict());
        print!("{}", write_operators(&pattern.content));
    }
    Ok(())
}
