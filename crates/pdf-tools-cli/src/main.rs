use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use pdf_stamp::{
    Anchor, ClickAnchor, OverlayKind, OverlayOptions, PageSize, StampRequest, ViewportBounds,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdft", about = "Stamp and sign the first page of a PDF", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Place a stamp and/or signature on page 1
    Stamp {
        /// Input PDF file
        #[arg(short, long)]
        input: PathBuf,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,

        /// Anchor x in display pixels
        #[arg(long)]
        x: f32,

        /// Anchor y in display pixels, measured from the top
        #[arg(long)]
        y: f32,

        /// Display scale the anchor was measured at
        #[arg(long, default_value = "1.0")]
        scale: f32,

        /// Stamp image (PNG)
        #[arg(long)]
        stamp: Option<PathBuf>,

        /// Signature image (PNG)
        #[arg(long)]
        signature: Option<PathBuf>,

        /// Overlay options as JSON
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show the viewport bounds and display scale for a page and window
    Fit {
        #[arg(long)]
        page_width: f32,

        #[arg(long)]
        page_height: f32,

        #[arg(long)]
        window_width: f32,

        #[arg(long)]
        window_height: f32,

        /// Overlay options as JSON
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print page count and the size of page 1
    Info {
        /// Input PDF file
        #[arg(short, long)]
        input: PathBuf,
    },
}

async fn load_options(config: Option<PathBuf>) -> Result<OverlayOptions> {
    match config {
        Some(path) => {
            let options = OverlayOptions::load(&path)
                .await
                .with_context(|| format!("Failed to load options from {}", path.display()))?;
            log::info!("Loaded overlay options from {}", path.display());
            Ok(options)
        }
        None => Ok(OverlayOptions::default()),
    }
}

async fn load_image(kind: OverlayKind, path: Option<PathBuf>) -> Result<Option<Vec<u8>>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let asset = pdf_stamp::load_asset(kind, &path)
        .await
        .with_context(|| format!("Failed to read {} image {}", kind.label(), path.display()))?;
    log::debug!("Read {} bytes of {} image", asset.bytes.len(), kind.label());
    Ok(Some(asset.bytes))
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Stamp {
            input,
            output,
            x,
            y,
            scale,
            stamp,
            signature,
            config,
        } => {
            let options = load_options(config).await?;
            let document = pdf_stamp::read_document(&input)
                .await
                .with_context(|| format!("Failed to read {}", input.display()))?;

            let request = StampRequest {
                anchor: Some(ClickAnchor {
                    anchor: Anchor::new(x, y),
                    scale,
                }),
                stamp: load_image(OverlayKind::Stamp, stamp).await?,
                signature: load_image(OverlayKind::Signature, signature).await?,
            };
            if !request.has_overlays() {
                log::warn!("No stamp or signature given; page 1 is copied unchanged");
            }

            let stamped = pdf_stamp::stamp_pdf(document, request, options).await?;
            pdf_stamp::write_document(&output, &stamped).await?;
            println!("Stamped → {} ({} bytes)", output.display(), stamped.len());
        }

        Commands::Fit {
            page_width,
            page_height,
            window_width,
            window_height,
            config,
        } => {
            let options = load_options(config).await?;
            if window_width <= 0.0 || window_height <= 0.0 {
                bail!("Window size must be positive");
            }
            let bounds = ViewportBounds::from_window(window_width, window_height, &options.viewport);
            let scale = pdf_stamp::fit_scale(PageSize::new(page_width, page_height), bounds)?;
            println!("Viewport bounds: {} x {}", bounds.max_width, bounds.max_height);
            println!("Display scale: {:.4}", scale);
            println!(
                "Display size: {} x {}",
                page_width * scale,
                page_height * scale
            );
        }

        Commands::Info { input } => {
            let document = pdf_stamp::read_document(&input)
                .await
                .with_context(|| format!("Failed to read {}", input.display()))?;
            let info = pdf_stamp::document_info(&document)?;
            println!("Pages: {}", info.page_count);
            println!(
                "Page 1: {} x {} pt",
                info.first_page.width_pt, info.first_page.height_pt
            );
        }
    }

    Ok(())
}
