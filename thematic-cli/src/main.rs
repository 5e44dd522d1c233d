//! Command-line surface for Thematic.
//!
//! Drives the generation pipeline end to end: directives in, theme plus
//! exports (JSON, static HTML, synthesized imagery) out, with the
//! client-side credit meter persisted under the platform config
//! directory.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use thematic_core::{CREDIT_LIMIT, CreditMeter, FileCreditStore, ThemeSession};
use thematic_engine::{Directives, ThemeGenerator};

/// Base URL printed in share links.
const SHARE_BASE: &str = "https://thematic.app/";

#[derive(Parser)]
#[command(name = "thematic", version, about = "Generate website themes from business directives")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a theme and write its export artifacts.
    Generate(GenerateArgs),
    /// Show or reset the local generation credits.
    Credits {
        /// Reset the counter back to zero used.
        #[arg(long)]
        reset: bool,
    },
    /// Print the share link for a directive set without generating.
    Share(DirectiveArgs),
}

#[derive(Args)]
struct DirectiveArgs {
    /// Business name.
    #[arg(long)]
    name: Option<String>,
    /// Industry sector.
    #[arg(long)]
    industry: Option<String>,
    /// Core aesthetic ("Minimalist", "Midnight Neon", ...).
    #[arg(long)]
    aesthetic: Option<String>,
    /// Creative motif to fold into the design.
    #[arg(long, default_value = "")]
    sub_style: String,
    /// Palette direction ("earth tones", "neon on black", ...).
    #[arg(long, default_value = "")]
    palette: String,
    /// Existing site whose content should be adapted.
    #[arg(long)]
    reference_url: Option<String>,
    /// Share link to decode instead of the flags above.
    #[arg(long, conflicts_with_all = ["name", "industry", "aesthetic"])]
    from_link: Option<String>,
}

impl DirectiveArgs {
    fn resolve(self) -> Result<Directives> {
        if let Some(link) = &self.from_link {
            return Directives::from_share_link(link)
                .context("share link is missing the name/ind/aes parameters");
        }
        let (Some(name), Some(industry), Some(aesthetic)) =
            (self.name, self.industry, self.aesthetic)
        else {
            bail!("--name, --industry, and --aesthetic are required (or pass --from-link)");
        };
        Ok(Directives {
            sub_style: self.sub_style,
            palette_preference: self.palette,
            reference_url: self.reference_url,
            ..Directives::new(name, industry, aesthetic)
        })
    }
}

#[derive(Args)]
struct GenerateArgs {
    #[command(flatten)]
    directives: DirectiveArgs,
    /// Directory the artifacts are written to.
    #[arg(long, default_value = ".")]
    out: PathBuf,
    /// Generate the theme structure only, no imagery.
    #[arg(long)]
    skip_images: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match Cli::parse().command {
        Command::Generate(args) => generate(args).await,
        Command::Credits { reset } => credits(reset),
        Command::Share(args) => {
            println!("{}", args.resolve()?.share_link(SHARE_BASE));
            Ok(())
        }
    }
}

fn meter() -> Result<CreditMeter> {
    let store = FileCreditStore::in_config_dir().context("no usable config directory")?;
    Ok(CreditMeter::new(store))
}

fn credits(reset: bool) -> Result<()> {
    let meter = meter()?;
    if reset {
        meter.reset()?;
        println!("Credits reset.");
    }
    println!("Credits remaining: {} of {CREDIT_LIMIT}", meter.remaining());
    Ok(())
}

async fn generate(args: GenerateArgs) -> Result<()> {
    let directives = args.directives.resolve()?;
    let generator = ThemeGenerator::from_env(meter()?)?;

    let mut session = ThemeSession::new();
    generator.generate_into(&mut session, &directives, !args.skip_images).await;
    let state = session.state();

    if let Some(error) = &state.error {
        bail!("{error}");
    }
    let theme = state.theme.as_ref().context("generation produced no theme")?;

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("cannot create {}", args.out.display()))?;

    let json_path = args.out.join(thematic_export::json_filename(theme));
    std::fs::write(&json_path, thematic_export::to_json_pretty(theme)?)?;

    let html_path = args.out.join(thematic_export::html_filename(theme));
    std::fs::write(&html_path, thematic_export::to_html(theme))?;

    println!("Theme for {} ({} • {})", theme.business_name, theme.industry, theme.aesthetic);
    println!();
    for (slot, value) in theme.colors.slots() {
        println!("  {slot:<10} {value}");
    }
    println!();
    println!(
        "  heading    {}\n  body       {}",
        theme.typography.heading_or_default(),
        theme.typography.body_or_default()
    );
    println!();
    println!("Wrote {}", json_path.display());
    println!("Wrote {}", html_path.display());

    for (label, asset) in [("hero", &state.hero_image), ("logo", &state.logo)] {
        if let Some(asset) = asset {
            let path = args.out.join(format!("{label}.{}", asset.file_extension()));
            std::fs::write(&path, asset.decode().context("image payload is not valid base64")?)?;
            println!("Wrote {}", path.display());
        } else if !args.skip_images {
            println!("No {label} image was produced.");
        }
    }

    println!();
    println!("Share: {}", directives.share_link(SHARE_BASE));
    println!("Credits remaining: {} of {CREDIT_LIMIT}", generator.credits().remaining());
    Ok(())
}
