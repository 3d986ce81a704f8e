use std::{
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use layerstack::{
    ArchiveSink, BatchOptions, BatchReport, CancelToken, Catalog, CompositionInput, ExportFormat,
    LayerstackResult, StoreConfig, TarGzArchive, ZipArchive, compose_variant, default_layer_order,
    generate_variants, render_variant, run_batch,
};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[derive(Parser, Debug)]
#[command(name = "layerstack", version)]
struct Cli {
    #[command(flatten)]
    store: StoreArgs,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the computed layer list of one variant as JSON.
    Layers(VariantArgs),
    /// Render one variant to a PNG or PSD file.
    Render(RenderArgs),
    /// Print the variants generated for a selection as JSON.
    Variants(SelectionArgs),
    /// Render a set of variants into a `.zip` (or `.tar.gz`) archive.
    Batch(BatchArgs),
    /// Print the starter layer order of a project as JSON, top-first.
    DefaultTemplate(ProjectArgs),
}

#[derive(Args, Debug)]
struct StoreArgs {
    /// Store config JSON (`dataDir`, `storageRoot`, `fontsDir`); replaces the directory flags.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the record JSON files.
    #[arg(long, global = true, default_value = "data")]
    data_dir: PathBuf,

    /// Root directory of asset files.
    #[arg(long, global = true, default_value = "storage")]
    storage_root: PathBuf,

    /// Font directory (default: `<storage-root>/fonts`).
    #[arg(long, global = true)]
    fonts_dir: Option<PathBuf>,
}

impl StoreArgs {
    fn resolve(&self) -> anyhow::Result<StoreConfig> {
        if let Some(path) = &self.config {
            return Ok(StoreConfig::from_path(path)?);
        }
        Ok(StoreConfig {
            data_dir: self.data_dir.clone(),
            storage_root: self.storage_root.clone(),
            fonts_dir: self.fonts_dir.clone(),
        })
    }
}

#[derive(Args, Debug)]
struct VariantArgs {
    /// Project name.
    #[arg(long)]
    project: String,

    /// Product id.
    #[arg(long)]
    product: String,

    /// Energy level, e.g. `B1`.
    #[arg(long)]
    energy: Option<String>,

    /// Capacity code, e.g. `26`.
    #[arg(long)]
    capacity: Option<String>,

    /// Original price text.
    #[arg(long)]
    original_price: Option<String>,

    /// Promotional price text.
    #[arg(long)]
    promo_price: Option<String>,
}

impl VariantArgs {
    fn input(&self) -> CompositionInput {
        CompositionInput {
            project_name: self.project.clone(),
            product_id: self.product.clone(),
            energy_level: self.energy.clone(),
            capacity_code: self.capacity.clone(),
            price_original_text: self.original_price.clone(),
            price_promo_text: self.promo_price.clone(),
        }
    }
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    variant: VariantArgs,

    /// Output format.
    #[arg(long, value_enum, default_value_t = FormatChoice::Png)]
    format: FormatChoice,

    /// Output directory; the file name is derived from the variant.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

#[derive(Args, Debug)]
struct SelectionArgs {
    /// Project name.
    #[arg(long)]
    project: String,

    /// Product ids to include (repeatable; default: every product).
    #[arg(long = "product")]
    products: Vec<String>,

    /// Energy levels to include (repeatable; default: unspecified).
    #[arg(long = "energy")]
    energies: Vec<String>,

    /// Capacity codes to include (repeatable; default: unspecified).
    #[arg(long = "capacity")]
    capacities: Vec<String>,
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// JSON array of variant inputs; when absent the variants are generated from the selection.
    #[arg(long)]
    variants: Option<PathBuf>,

    /// Project name for generated variants.
    #[arg(long, required_unless_present = "variants")]
    project: Option<String>,

    /// Product ids for generated variants (repeatable).
    #[arg(long = "product")]
    products: Vec<String>,

    /// Energy levels for generated variants (repeatable).
    #[arg(long = "energy")]
    energies: Vec<String>,

    /// Capacity codes for generated variants (repeatable).
    #[arg(long = "capacity")]
    capacities: Vec<String>,

    /// Output archive path.
    #[arg(long)]
    out: PathBuf,

    /// Output format of every entry.
    #[arg(long, value_enum, default_value_t = FormatChoice::Png)]
    format: FormatChoice,

    /// Archive container.
    #[arg(long, value_enum, default_value_t = ArchiveChoice::Zip)]
    archive: ArchiveChoice,

    /// Render chunks of variants in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Variants per parallel chunk.
    #[arg(long, default_value_t = 16)]
    chunk_size: usize,
}

#[derive(Args, Debug)]
struct ProjectArgs {
    /// Project name.
    #[arg(long)]
    project: String,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Png,
    Psd,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ArchiveChoice {
    Zip,
    TarGz,
}

impl From<FormatChoice> for ExportFormat {
    fn from(c: FormatChoice) -> Self {
        match c {
            FormatChoice::Png => Self::Png,
            FormatChoice::Psd => Self::Psd,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "layerstack=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let store = cli.store.resolve()?;
    match cli.cmd {
        Command::Layers(args) => cmd_layers(&store, args),
        Command::Render(args) => cmd_render(&store, args),
        Command::Variants(args) => cmd_variants(&store, args),
        Command::Batch(args) => cmd_batch(&store, args),
        Command::DefaultTemplate(args) => cmd_default_template(&store, args),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value).context("write JSON to stdout")?;
    writeln!(out)?;
    Ok(())
}

fn cmd_layers(store: &StoreConfig, args: VariantArgs) -> anyhow::Result<()> {
    let catalog = store.open_catalog()?;
    let composed = compose_variant(&catalog, &args.input())?;
    print_json(&composed.layers)
}

fn cmd_render(store: &StoreConfig, args: RenderArgs) -> anyhow::Result<()> {
    let catalog = store.open_catalog()?;
    let mut loader = store.asset_loader()?;
    let rendered = render_variant(
        &catalog,
        &args.variant.input(),
        args.format.into(),
        &mut loader,
    )?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;
    let out = args.out_dir.join(&rendered.file_name);
    std::fs::write(&out, &rendered.output.bytes)
        .with_context(|| format!("write '{}'", out.display()))?;

    eprintln!("wrote {}", out.display());
    Ok(())
}

fn generated(
    catalog: &dyn Catalog,
    project: &str,
    products: &[String],
    energies: &[String],
    capacities: &[String],
) -> anyhow::Result<Vec<CompositionInput>> {
    let selected = if products.is_empty() {
        catalog.products().to_vec()
    } else {
        products
            .iter()
            .map(|id| {
                catalog
                    .product(id)
                    .cloned()
                    .with_context(|| format!("unknown product '{id}'"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?
    };
    Ok(generate_variants(project, &selected, energies, capacities))
}

fn cmd_variants(store: &StoreConfig, args: SelectionArgs) -> anyhow::Result<()> {
    let catalog = store.open_catalog()?;
    let inputs = generated(
        &catalog,
        &args.project,
        &args.products,
        &args.energies,
        &args.capacities,
    )?;
    print_json(&inputs)
}

fn read_variants(path: &Path) -> anyhow::Result<Vec<CompositionInput>> {
    let f = File::open(path).with_context(|| format!("open variants '{}'", path.display()))?;
    serde_json::from_reader(BufReader::new(f)).with_context(|| "parse variants JSON")
}

fn cmd_batch(store: &StoreConfig, args: BatchArgs) -> anyhow::Result<()> {
    let catalog = store.open_catalog()?;
    let inputs = match (&args.variants, &args.project) {
        (Some(path), _) => read_variants(path)?,
        (None, Some(project)) => generated(
            &catalog,
            project,
            &args.products,
            &args.energies,
            &args.capacities,
        )?,
        (None, None) => anyhow::bail!("either --variants or --project is required"),
    };

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let file =
        File::create(&args.out).with_context(|| format!("create '{}'", args.out.display()))?;

    let options = BatchOptions {
        format: args.format.into(),
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
    };
    let mut loader = store.asset_loader()?;
    let mut render = |sink: &mut dyn ArchiveSink| -> LayerstackResult<BatchReport> {
        run_batch(
            &catalog,
            &inputs,
            &mut loader,
            sink,
            &options,
            &CancelToken::new(),
        )
    };
    let flush_context = || format!("flush '{}'", args.out.display());
    let report = match args.archive {
        ArchiveChoice::Zip => {
            let mut archive = ZipArchive::new(BufWriter::new(file));
            let report = render(&mut archive)?;
            archive.finish()?.flush().with_context(flush_context)?;
            report
        }
        ArchiveChoice::TarGz => {
            let mut archive = TarGzArchive::new(BufWriter::new(file));
            let report = render(&mut archive)?;
            archive.finish()?.flush().with_context(flush_context)?;
            report
        }
    };

    eprintln!(
        "wrote {} ({} rendered, {} failed)",
        args.out.display(),
        report.succeeded(),
        report.failed()
    );
    Ok(())
}

fn cmd_default_template(store: &StoreConfig, args: ProjectArgs) -> anyhow::Result<()> {
    let catalog = store.open_catalog()?;
    let decorations = catalog.decorations_by_project(&args.project);
    print_json(&default_layer_order(&decorations))
}
