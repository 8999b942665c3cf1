use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use placard::{
    load_document, Annotation, ContentStreamSurface, DisplayOptions, Document, DocumentSource,
    SubstitutionOptions, ViewerSession, YAxis,
};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "placard",
    about = "Replace signature form fields with labelled placeholders",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the pages of a document and their signature fields
    Inspect {
        /// Input document model (JSON)
        input: PathBuf,
    },

    /// Replace signature fields and write the resulting document model
    Transform {
        /// Input document model (JSON)
        input: PathBuf,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        placeholder: PlaceholderArgs,
    },

    /// Replace signature fields and print each page's overlay content stream
    Render {
        /// Input document model (JSON)
        input: PathBuf,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Page number to render (0-based, renders all if not specified)
        #[arg(short = 'p', long)]
        page: Option<usize>,

        /// Draw for a surface whose y axis points down
        #[arg(long)]
        flip: bool,

        #[command(flatten)]
        placeholder: PlaceholderArgs,
    },
}

#[derive(clap::Args)]
struct PlaceholderArgs {
    /// Label for fields without a name
    #[arg(long, default_value = placard::FALLBACK_LABEL)]
    fallback_label: String,

    /// Dash lengths of the placeholder border (repeatable)
    #[arg(long = "dash", value_name = "LEN", value_parser = parse_length)]
    dash: Vec<f64>,

    /// Border width in points
    #[arg(long, default_value_t = 1.0, value_parser = parse_length)]
    border_width: f64,
}

fn parse_length(value: &str) -> std::result::Result<f64, String> {
    let length: f64 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    if !length.is_finite() || length < 0.0 {
        return Err(format!("'{value}' must be a finite, non-negative length"));
    }
    Ok(length)
}

impl PlaceholderArgs {
    fn options(&self) -> Result<SubstitutionOptions> {
        if !self.dash.is_empty() && self.dash.iter().all(|d| *d == 0.0) {
            anyhow::bail!("Dash pattern must contain a non-zero length");
        }

        let mut options = SubstitutionOptions::default()
            .with_fallback_label(self.fallback_label.clone())
            .with_border_width(self.border_width);
        if !self.dash.is_empty() {
            options = options.with_dash_pattern(self.dash.clone());
        }
        Ok(options)
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "placard=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn open(input: &Path) -> Result<Document> {
    load_document(&DocumentSource::path(input))
        .with_context(|| format!("Failed to load document model {}", input.display()))
}

fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write output file {}", path.display()))?;
            println!("✓ Written to: {}", path.display());
        }
        None => println!("{content}"),
    }
    Ok(())
}

fn inspect(input: &Path) -> Result<()> {
    let document = open(input)?;

    println!("Document: {}", input.display());
    if let Some(title) = document.title() {
        println!("Title: {title}");
    }
    println!("Pages: {}", document.page_count());

    let mut total = 0;
    for (index, page) in document.pages().iter().enumerate() {
        let fields: Vec<&Annotation> = page
            .annotations()
            .iter()
            .filter(|a| a.is_signature_field())
            .collect();
        println!(
            "Page {}: {:.0}x{:.0} pts, {} annotations, {} signature fields",
            index,
            page.width(),
            page.height(),
            page.annotations().len(),
            fields.len()
        );
        total += fields.len();
        for field in fields {
            let [llx, lly, urx, ury] = field.rect().to_array();
            println!(
                "  - {} [{llx:.1} {lly:.1} {urx:.1} {ury:.1}]",
                field.name().filter(|n| !n.is_empty()).unwrap_or("(unnamed)")
            );
        }
    }
    println!("Signature fields: {total}");
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect { input } => inspect(&input)?,

        Commands::Transform {
            input,
            output,
            placeholder,
        } => {
            let document = open(&input)?;
            let session =
                ViewerSession::from_document(document, &placeholder.options()?, DisplayOptions::default());
            if let Some(reason) = session.load_error() {
                anyhow::bail!("Cannot display {}: {reason}", input.display());
            }
            debug!(summary = ?session.summary(), "transform finished");

            let document = session
                .into_document()
                .context("Transformed document is missing")?;
            let json = serde_json::to_string_pretty(&document)
                .context("Failed to serialize document model")?;
            write_output(output.as_deref(), &json)?;
        }

        Commands::Render {
            input,
            output,
            page,
            flip,
            placeholder,
        } => {
            let document = open(&input)?;
            if let Some(index) = page {
                document
                    .page(index)
                    .with_context(|| format!("Cannot render page {index}"))?;
            }

            let session =
                ViewerSession::from_document(document, &placeholder.options()?, DisplayOptions::default());
            if let Some(reason) = session.load_error() {
                anyhow::bail!("Cannot display {}: {reason}", input.display());
            }
            let y_axis = if flip { YAxis::Down } else { YAxis::Up };
            let mut surface = ContentStreamSurface::new(y_axis);
            session
                .present(&mut surface)
                .context("Failed to render placeholders")?;

            let rendered = surface
                .page_streams()
                .iter()
                .enumerate()
                .filter(|(index, _)| page.map_or(true, |p| p == *index))
                .map(|(index, stream)| format!("% page {index}\n{}", stream.operations()))
                .collect::<Vec<_>>()
                .join("\n");
            write_output(output.as_deref(), &rendered)?;
        }
    }

    Ok(())
}
