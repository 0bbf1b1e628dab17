use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::{debug, warn};

use shape_variants::basics::PointD;
use shape_variants::extent::{ExtentPolicy, DEFAULT_MARGIN};
use shape_variants::frame::RenderFrame;
use shape_variants::params::{parse_point, parse_vertices, TransformInputs};
use shape_variants::pipeline::load_file;
use shape_variants::session::Session;
use shape_variants::shapes::ShapeSpec;

#[derive(Parser)]
#[command(name = "variant-cli")]
#[command(about = "Build a shape, derive transformed variants and print the render frame", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short = 'd', long = "debug", global = true)]
    debug: bool,

    /// How the extent is framed (ignored by `load`, which reports max-abs)
    #[arg(long, global = true, default_value = "symmetric")]
    extent: ExtentArg,

    /// Margin added around the covered region
    #[arg(long, global = true, default_value_t = DEFAULT_MARGIN)]
    margin: f64,

    /// Write the frame JSON here instead of stdout
    #[arg(short, long, global = true, value_hint = clap::ValueHint::FilePath)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a shape and apply transforms typed as raw text
    Shape {
        /// Shape to build
        kind: ShapeKind,

        #[command(flatten)]
        geometry: Geometry,

        #[command(flatten)]
        transforms: TransformArgs,
    },

    /// Load a declarative JSON pipeline
    Load {
        /// Pipeline document
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum ShapeKind {
    Square,
    Triangle,
    Circle,
    Vertices,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum ExtentArg {
    Symmetric,
    PerAxis,
}

impl From<ExtentArg> for ExtentPolicy {
    fn from(arg: ExtentArg) -> Self {
        match arg {
            ExtentArg::Symmetric => ExtentPolicy::Symmetric,
            ExtentArg::PerAxis => ExtentPolicy::PerAxis,
        }
    }
}

#[derive(Args, Debug)]
struct Geometry {
    /// Square corner x
    #[arg(long, allow_negative_numbers = true)]
    x: Option<f64>,

    /// Square corner y
    #[arg(long, allow_negative_numbers = true)]
    y: Option<f64>,

    /// Square side length
    #[arg(long, allow_negative_numbers = true)]
    size: Option<f64>,

    /// Triangle vertices as "x,y"
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    p1: Option<PointD>,
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    p2: Option<PointD>,
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    p3: Option<PointD>,

    /// Circle center as "x,y"
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    center: Option<PointD>,

    /// Circle radius
    #[arg(long, allow_negative_numbers = true)]
    radius: Option<f64>,

    /// Free vertices as "x,y;x,y;..."
    #[arg(long, allow_hyphen_values = true)]
    vertices: Option<String>,
}

/// Transform fields, passed through unparsed. A bad value skips only its
/// own variant.
#[derive(Args, Debug)]
struct TransformArgs {
    /// Rotation angle in degrees
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    rotation: String,

    /// Scale factors as "sx,sy"
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    scale: String,

    /// Offsets as "tx,ty"
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    translation: String,

    /// Reflection axis, "h" or "v"
    #[arg(long, default_value = "")]
    reflection: String,
}

impl From<TransformArgs> for TransformInputs {
    fn from(args: TransformArgs) -> Self {
        TransformInputs {
            rotation: args.rotation,
            scale: args.scale,
            translation: args.translation,
            reflection: args.reflection,
        }
    }
}

impl Geometry {
    /// Unset fields keep the default shape's values.
    fn into_shape(self, kind: ShapeKind) -> anyhow::Result<ShapeSpec> {
        let mut shape = match kind {
            ShapeKind::Square => ShapeSpec::default_square(),
            ShapeKind::Triangle => ShapeSpec::default_triangle(),
            ShapeKind::Circle => ShapeSpec::default_circle(),
            ShapeKind::Vertices => {
                let Some(text) = self.vertices else {
                    bail!("`vertices` needs --vertices \"x,y;x,y;...\"");
                };
                let points = parse_vertices(&text).context("invalid --vertices")?;
                return Ok(ShapeSpec::Vertices(points));
            }
        };
        match &mut shape {
            ShapeSpec::Square { x, y, size } => {
                *x = self.x.unwrap_or(*x);
                *y = self.y.unwrap_or(*y);
                *size = self.size.unwrap_or(*size);
            }
            ShapeSpec::Triangle([p1, p2, p3]) => {
                *p1 = self.p1.unwrap_or(*p1);
                *p2 = self.p2.unwrap_or(*p2);
                *p3 = self.p3.unwrap_or(*p3);
            }
            ShapeSpec::Circle { center, radius } => {
                *center = self.center.unwrap_or(*center);
                *radius = self.radius.unwrap_or(*radius);
            }
            ShapeSpec::Vertices(_) => {}
        }
        Ok(shape)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Default level depends on --debug (overridden by RUST_LOG)
    let env = if cli.debug {
        Env::default().default_filter_or("debug")
    } else {
        Env::default().default_filter_or("warn")
    };
    env_logger::Builder::from_env(env).init();

    let frame = match cli.command {
        Commands::Shape {
            kind,
            geometry,
            transforms,
        } => {
            let shape = geometry.into_shape(kind)?;
            let mut session = Session::new();
            session
                .new_shape(&shape)
                .with_context(|| format!("failed to build {}", shape.name()))?;
            let report = session.apply(&transforms.into())?;
            if report.is_noop() {
                warn!("no transforms applied; frame holds the original only");
            }
            session.frame(cli.extent.into(), cli.margin)?
        }
        Commands::Load { file } => {
            let loaded = load_file(&file)
                .with_context(|| format!("failed to load pipeline {}", file.display()))?;
            RenderFrame::from_pipeline(&loaded)?
        }
    };

    debug!("frame has {} variants", frame.variants.len());
    let json = frame.to_json_pretty()?;
    match cli.output {
        Some(path) => std::fs::write(&path, json)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}
