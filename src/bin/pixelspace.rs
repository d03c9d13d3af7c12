use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use pixelspace::{
    ColorSpace, ColorSpaceId, ColorSpaceRegistry, CompositeOp, CompositeParams, DisplayImage,
    Mask, Settings, Surface, SurfaceMut,
};

#[derive(Parser, Debug)]
#[command(name = "pixelspace", version)]
struct Cli {
    /// Log filter in `RUST_LOG` syntax (e.g. `info`, `pixelspace=trace`).
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the channel table of a color space as JSON.
    Info(InfoArgs),
    /// Composite one PNG onto another and write the result as an 8-bit PNG.
    Composite(CompositeArgs),
    /// Convert a PNG through a native color space back to an 8-bit PNG.
    Preview(PreviewArgs),
}

#[derive(Parser, Debug)]
struct InfoArgs {
    /// Color space id (`RGBA`, `RGBA16`).
    #[arg(long, default_value_t = ColorSpaceId::Rgba16)]
    space: ColorSpaceId,
}

#[derive(Parser, Debug)]
struct CompositeArgs {
    /// Destination PNG (the backdrop).
    #[arg(long)]
    dst: PathBuf,

    /// Source PNG, same size as the destination.
    #[arg(long)]
    src: PathBuf,

    /// Optional coverage mask, read as 8-bit luma.
    #[arg(long)]
    mask: Option<PathBuf>,

    /// Composite op; overrides the config file.
    #[arg(long)]
    op: Option<CompositeOp>,

    /// Global opacity, 0..=255.
    #[arg(long, default_value_t = 255)]
    opacity: u8,

    /// Color space; overrides the config file.
    #[arg(long)]
    space: Option<ColorSpaceId>,

    /// Settings JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Input PNG.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Color space to round-trip through.
    #[arg(long, default_value_t = ColorSpaceId::Rgba16)]
    space: ColorSpaceId,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    pixelspace::init_tracing(cli.log.as_deref());
    let registry = ColorSpaceRegistry::with_builtin();
    match cli.cmd {
        Command::Info(args) => cmd_info(&registry, args),
        Command::Composite(args) => cmd_composite(&registry, args),
        Command::Preview(args) => cmd_preview(&registry, args),
    }
}

fn cmd_info(registry: &ColorSpaceRegistry, args: InfoArgs) -> anyhow::Result<()> {
    let space = registry.get(args.space)?;
    let info = serde_json::json!({
        "id": space.id(),
        "bit_depth": space.id().bit_depth(),
        "pixel_size": space.pixel_size(),
        "has_alpha": space.has_alpha(),
        "channels": space.channels(),
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&info).context("serialize channel table")?
    );
    Ok(())
}

fn cmd_composite(registry: &ColorSpaceRegistry, args: CompositeArgs) -> anyhow::Result<()> {
    let mut settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(op) = args.op {
        settings.composite_op = op;
    }
    if let Some(space) = args.space {
        settings.color_space = space;
    }
    let space = registry.get(settings.color_space)?;

    let dst_img = open_image(&args.dst)?;
    let src_img = open_image(&args.src)?;
    let (width, height) = (dst_img.width(), dst_img.height());
    anyhow::ensure!(
        (src_img.width(), src_img.height()) == (width, height),
        "source is {}x{}, destination is {width}x{height}",
        src_img.width(),
        src_img.height()
    );

    let mask = match &args.mask {
        Some(path) => {
            let m = open_image(path)?.to_luma8();
            anyhow::ensure!(
                m.dimensions() == (width, height),
                "mask is {}x{}, destination is {width}x{height}",
                m.width(),
                m.height()
            );
            Some(m.into_raw())
        }
        None => None,
    };

    let mut dst = import(space.as_ref(), &dst_img);
    let src = import(space.as_ref(), &src_img);
    let stride = width as usize * space.pixel_size();
    space.composite(
        SurfaceMut::new(&mut dst, stride),
        Surface::new(&src, stride),
        mask.as_deref().map(|m| Mask::new(m, width as usize)),
        CompositeParams {
            rows: height as usize,
            cols: width as usize,
            opacity: args.opacity,
            op: settings.composite_op,
        },
    )?;

    let display =
        pixelspace::materialize_with(space.as_ref(), &dst, width, height, &settings.display)?;
    write_png(&args.out, display)
}

fn cmd_preview(registry: &ColorSpaceRegistry, args: PreviewArgs) -> anyhow::Result<()> {
    let space = registry.get(args.space)?;
    let img = open_image(&args.in_path)?;
    let native = import(space.as_ref(), &img);
    let display = space.to_display_image(&native, img.width(), img.height(), 0, 0)?;
    write_png(&args.out, display)
}

fn open_image(path: &Path) -> anyhow::Result<image::DynamicImage> {
    image::open(path).with_context(|| format!("open image '{}'", path.display()))
}

fn import(space: &dyn ColorSpace, img: &image::DynamicImage) -> Vec<u8> {
    match space.id() {
        ColorSpaceId::Rgba16 => pixelspace::import_rgba16(&img.to_rgba16()),
        ColorSpaceId::Rgba8 => pixelspace::import_rgba8(&img.to_rgba8()),
    }
}

fn write_png(out: &Path, display: DisplayImage) -> anyhow::Result<()> {
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        out,
        &display.data,
        display.width,
        display.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out.display()))?;

    eprintln!("wrote {}", out.display());
    Ok(())
}
