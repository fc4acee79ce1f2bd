use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use colormatrix::{
    ApplyThreading, BuiltinMatrix, ColorMatrix, CpuSurface, Image, MatrixCatalog, Size, SplitView,
};

#[derive(Parser, Debug)]
#[command(name = "colormatrix", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the built-in matrices.
    List(ListArgs),
    /// Apply a color matrix to an image and write a PNG.
    Apply(ApplyArgs),
    /// Render original and transformed image side by side with a divider.
    Compare(CompareArgs),
}

#[derive(Parser, Debug)]
struct ListArgs {
    /// Print names and matrices as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
#[group(multiple = false)]
struct MatrixSource {
    /// Built-in matrix name (see `list`).
    #[arg(long)]
    matrix: Option<String>,

    /// 25 numbers, row-major, separated by whitespace or ';'.
    #[arg(long, allow_hyphen_values = true)]
    custom: Option<String>,

    /// JSON file holding a 5x5 array of numbers.
    #[arg(long)]
    matrix_file: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct MatrixArgs {
    #[command(flatten)]
    source: MatrixSource,

    /// Built-in matrix composed in front of the selected one.
    #[arg(long)]
    base: Option<String>,
}

#[derive(Parser, Debug)]
struct ApplyArgs {
    /// Input image.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    matrix: MatrixArgs,

    /// Override rayon worker threads.
    #[arg(long)]
    threads: Option<usize>,

    /// Apply on the calling thread only.
    #[arg(long, default_value_t = false)]
    serial: bool,
}

#[derive(Parser, Debug)]
struct CompareArgs {
    /// Input image.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    matrix: MatrixArgs,

    /// Output width (defaults to the image width).
    #[arg(long)]
    width: Option<u32>,

    /// Output height (defaults to the image height).
    #[arg(long)]
    height: Option<u32>,

    /// Divider position as a fraction of the image width.
    #[arg(long, default_value_t = 0.5, allow_hyphen_values = true)]
    split: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::List(args) => cmd_list(args),
        Command::Apply(args) => cmd_apply(args),
        Command::Compare(args) => cmd_compare(args),
    }
}

fn cmd_list(args: ListArgs) -> anyhow::Result<()> {
    let catalog = MatrixCatalog::global();
    if args.json {
        let out = serde_json::to_string_pretty(catalog.list_all())
            .context("serialize matrix catalog")?;
        println!("{out}");
    } else {
        for name in catalog.names() {
            println!("{name}");
        }
    }
    Ok(())
}

fn cmd_apply(args: ApplyArgs) -> anyhow::Result<()> {
    let matrix = resolve_matrix(&args.matrix)?;
    let img = colormatrix::load_image(&args.in_path)?;

    let threading = if args.serial {
        ApplyThreading::serial()
    } else {
        ApplyThreading {
            threads: args.threads,
            ..ApplyThreading::default()
        }
    };
    let out = colormatrix::apply_to_image_with(&img, &matrix, &threading)?;

    colormatrix::save_png(&out, &args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_compare(args: CompareArgs) -> anyhow::Result<()> {
    let matrix = resolve_matrix(&args.matrix)?;
    let original = colormatrix::load_image(&args.in_path)?;
    let transformed = colormatrix::apply_to_image(&original, &matrix);

    let size = Size::new(
        args.width.unwrap_or(original.width()),
        args.height.unwrap_or(original.height()),
    );
    let mut view = SplitView::new(size);
    view.set_images(Some(original), Some(transformed))?;
    view.set_splitter_fraction(args.split);

    let mut surface = CpuSurface::new(size);
    view.render(&mut surface)?;
    let frame: Image = surface.into_image()?;

    colormatrix::save_png(&frame, &args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn resolve_matrix(args: &MatrixArgs) -> anyhow::Result<ColorMatrix> {
    let src = &args.source;
    let selected = if let Some(name) = &src.matrix {
        MatrixCatalog::global().get(name)?
    } else if let Some(text) = &src.custom {
        text.parse::<ColorMatrix>()?
    } else if let Some(path) = &src.matrix_file {
        read_matrix_json(path)?
    } else {
        ColorMatrix::IDENTITY
    };

    match &args.base {
        Some(name) => {
            let base: BuiltinMatrix = name.parse()?;
            Ok(colormatrix::multiply(&base.matrix(), &selected))
        }
        None => Ok(selected),
    }
}

fn read_matrix_json(path: &Path) -> anyhow::Result<ColorMatrix> {
    let f = File::open(path).with_context(|| format!("open matrix '{}'", path.display()))?;
    let m: ColorMatrix = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse matrix JSON '{}'", path.display()))?;
    Ok(m)
}
