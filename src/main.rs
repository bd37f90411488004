use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use mitocard::card::{self, Submission, ROLE_CATALOG};
use mitocard::template::Template;
use mitocard::{Error, RendererConfig};

#[derive(Parser)]
#[command(
    name = "mitocard",
    version,
    about = "Render Mitosis community cards to SVG and PNG"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a card from a submission and export it
    Render {
        /// JSON submission file; flags below override its fields
        #[arg(long)]
        input: Option<PathBuf>,

        /// Display name
        #[arg(long)]
        name: Option<String>,

        /// Discord username
        #[arg(long)]
        username: Option<String>,

        /// Role label (repeat for a second role)
        #[arg(long = "role")]
        roles: Vec<String>,

        /// Card color: purple, white, or #RRGGBB
        #[arg(long)]
        color: Option<String>,

        /// Template identifier (see `mitocard templates`)
        #[arg(long)]
        template: Option<String>,

        /// Logo variant: purple, mint, white, or black
        #[arg(long)]
        logo: Option<String>,

        /// Twitter/X handle (derived from the username when omitted)
        #[arg(long)]
        twitter: Option<String>,

        /// Profile picture file (embedded as a data URL)
        #[arg(long)]
        pfp: Option<PathBuf>,

        /// Write the composed SVG instead of rasterizing
        #[arg(long)]
        svg_only: bool,

        /// Directory for the exported artifact
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,

        /// Raster scale applied on export
        #[arg(long, default_value_t = 2.0)]
        scale: f32,
    },

    /// List the selectable card templates
    Templates,

    /// List the known community roles
    Roles,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            input,
            name,
            username,
            roles,
            color,
            template,
            logo,
            twitter,
            pfp,
            svg_only,
            out_dir,
            scale,
        } => {
            let mut submission = match input {
                Some(path) => {
                    let raw = std::fs::read_to_string(&path)
                        .with_context(|| format!("cannot read {}", path.display()))?;
                    serde_json::from_str::<Submission>(&raw)
                        .with_context(|| format!("cannot parse {}", path.display()))?
                }
                None => Submission::default(),
            };

            if let Some(name) = name {
                submission.name = name;
            }
            if let Some(username) = username {
                submission.username = username;
            }
            if !roles.is_empty() {
                submission.roles = roles;
            }
            if let Some(color) = color {
                submission.card_color = color;
            }
            if let Some(template) = template {
                submission.card_template = template;
            }
            if let Some(logo) = logo {
                submission.logo = mitocard::assets::Logo::parse(&logo);
            }
            if let Some(twitter) = twitter {
                submission.twitter_handle = twitter;
            }
            if let Some(path) = pfp {
                submission.profile_picture = Some(card::picture_data_url_from_file(&path)?);
            }

            // Presence failures block the submission outright, like the
            // original form alert.
            let card = match submission.submit() {
                Ok(card) => card,
                Err(Error::Form(msg)) => {
                    anyhow::bail!("please fill in all required fields: {msg}")
                }
                Err(e) => return Err(e.into()),
            };

            let config = RendererConfig {
                scale,
                out_dir: out_dir.clone(),
                ..Default::default()
            };

            if svg_only {
                let svg = mitocard::render::compose::compose_svg(&card, &config);
                let path = out_dir.join("mitosis-card.svg");
                std::fs::write(&path, svg)
                    .with_context(|| format!("cannot write {}", path.display()))?;
                println!("Saved {}", path.display());
                return Ok(());
            }

            export_card(card, config).await
        }

        Commands::Templates => {
            for template in Template::SELECTABLE {
                println!("{:<22} {}", template.id(), template.label());
            }
            Ok(())
        }

        Commands::Roles => {
            for role in ROLE_CATALOG {
                println!("{role}");
            }
            Ok(())
        }
    }
}

#[cfg(feature = "raster")]
async fn export_card(card: mitocard::CardData, config: RendererConfig) -> anyhow::Result<()> {
    let exporter = mitocard::Exporter::new(config);
    match exporter.export(&card).await {
        Ok(path) => println!("Saved {}", path.display()),
        Err(e) => {
            // Export failures are non-blocking: report and leave the tool
            // usable for a retry.
            eprintln!("Failed to generate card image: {e}");
            std::process::exit(1);
        }
    }
    exporter.close().await?;
    Ok(())
}

#[cfg(not(feature = "raster"))]
async fn export_card(_card: mitocard::CardData, _config: RendererConfig) -> anyhow::Result<()> {
    anyhow::bail!("this build has no raster backend; rerun with --svg-only")
}
