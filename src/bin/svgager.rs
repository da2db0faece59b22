use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "svgager", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert an SVG file into a PNG, JPEG, GIF or WebP image.
    Convert(ConvertArgs),
    /// Print the intrinsic size and node counts of an SVG, or the header of an encoded image.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Input SVG file.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output image path.
    #[arg(long)]
    out: PathBuf,

    /// Output format. Defaults to the output file extension.
    #[arg(long)]
    format: Option<String>,

    /// Output width in pixels.
    #[arg(long, allow_negative_numbers = true)]
    width: Option<i64>,

    /// Output height in pixels.
    #[arg(long, allow_negative_numbers = true)]
    height: Option<i64>,

    /// Background color (RRGGBB) for formats without transparency.
    #[arg(long)]
    background: Option<String>,

    /// Literal replacement applied to the SVG text, as SEARCH=REPLACE.
    /// Repeatable, applied in order.
    #[arg(long = "replace", value_name = "SEARCH=REPLACE")]
    replace: Vec<String>,

    /// JSON file with conversion options; flags given on the command line take precedence.
    #[arg(long)]
    options: Option<PathBuf>,

    /// JSON file with renderer settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Extra directory to load fonts from. Repeatable.
    #[arg(long = "font-dir")]
    font_dir: Vec<PathBuf>,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// SVG or encoded image file.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Convert(args) => cmd_convert(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn cmd_convert(args: ConvertArgs) -> anyhow::Result<()> {
    let source = std::fs::read_to_string(&args.in_path)
        .with_context(|| format!("read svg '{}'", args.in_path.display()))?;

    let mut opts = match &args.options {
        Some(path) => svgager::ConvertOptions::from_path(path)?,
        None => svgager::ConvertOptions::default(),
    };
    if args.format.is_some() {
        opts.format = args.format.clone();
    } else if opts.format.is_none() {
        opts.format = format_from_extension(&args.out);
    }
    if let Some(w) = args.width {
        opts.width = Some(w.into());
    }
    if let Some(h) = args.height {
        opts.height = Some(h.into());
    }
    if args.background.is_some() {
        opts.background_color = args.background.clone();
    }

    let mut request = opts.validate(source)?;
    for pair in &args.replace {
        let Some((search, replace)) = pair.split_once('=') else {
            anyhow::bail!("--replace expects SEARCH=REPLACE, got '{pair}'");
        };
        request
            .replacements
            .push((search.to_owned(), replace.to_owned()));
    }

    let mut config = match &args.config {
        Some(path) => svgager::RenderConfig::from_path(path)?,
        None => svgager::RenderConfig::default(),
    };
    config.font_dirs.extend(args.font_dir.iter().cloned());
    if config.resources_dir.is_none() {
        config.resources_dir = args.in_path.parent().map(Path::to_path_buf);
    }

    let image = svgager::convert_with(&request, &config)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, image.as_bytes())
        .with_context(|| format!("write image '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn format_from_extension(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?;
    svgager::OutputFormat::from_extension(ext).map(|f| f.as_str().to_owned())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let bytes = std::fs::read(&args.in_path)
        .with_context(|| format!("read '{}'", args.in_path.display()))?;

    if let Ok(info) = svgager::probe_container(&bytes) {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    let text = String::from_utf8(bytes).with_context(|| {
        format!("'{}' is neither an image nor UTF-8 SVG", args.in_path.display())
    })?;
    let doc = svgager::parse_document(&text, &svgager::RenderConfig::default())?;
    let report = serde_json::json!({
        "intrinsic": doc.intrinsic(),
        "stats": doc.stats(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
