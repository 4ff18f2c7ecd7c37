use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use neumorph::clipboard::{copy_with_fallback, CopyOutcome, CopyPath, FileClipboard, SystemClipboard};
use neumorph::config::Config;
use neumorph::{Editor, SnippetOptions};

#[derive(Parser)]
#[command(name = "neumo", version)]
#[command(about = "Neumorphic box-shadow generator")]
struct Cli {
    /// Config file (default: ./neumorph.toml if present)
    #[arg(long, global = true, env = "NEUMORPH_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the CSS snippet for a base color
    Css {
        /// Base color, #RGB or #RRGGBB
        #[arg(long)]
        base: Option<String>,

        /// Shadow offset in px (2-30)
        #[arg(long)]
        offset: Option<u32>,

        /// Shadow blur in px (4-40)
        #[arg(long)]
        blur: Option<u32>,

        /// Corner radius in px (4-40)
        #[arg(long)]
        radius: Option<u32>,

        /// Pressed-in surface instead of raised (`--inset=false` overrides the config)
        #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
        inset: Option<bool>,

        /// Class name for the rule block
        #[arg(long = "class")]
        class_name: Option<String>,

        /// Write output to file instead of stdout
        #[arg(short)]
        o: Option<PathBuf>,

        /// Also copy the snippet to the clipboard
        #[arg(long)]
        copy: bool,

        /// Where to write the snippet if the clipboard is unavailable
        #[arg(long, requires = "copy")]
        fallback_file: Option<PathBuf>,
    },

    /// Print a random, good-looking snippet
    Random {
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Print the full render as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the light and dark tones derived from a base color
    Shadows {
        /// Base color, #RGB or #RRGGBB
        base: String,
    },

    /// Start the live-preview editor
    Serve {
        /// Bind address (overrides config)
        #[arg(long)]
        host: Option<std::net::IpAddr>,

        /// Server port (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let (config, config_path) = Config::discover(cli.config.as_deref())?;

    match cli.command {
        Commands::Css {
            base,
            offset,
            blur,
            radius,
            inset,
            class_name,
            o,
            copy,
            fallback_file,
        } => {
            let options = match class_name {
                Some(name) => SnippetOptions::with_class_name(&name),
                None => config.snippet.clone(),
            };
            let mut editor = Editor::new(config.effect_params()?).with_options(options);
            if let Some(base) = &base {
                editor
                    .set_base_hex(base)
                    .with_context(|| format!("invalid base color '{base}'"))?;
            }
            if let Some(px) = offset {
                editor.set_offset(px);
            }
            if let Some(px) = blur {
                editor.set_blur(px);
            }
            if let Some(px) = radius {
                editor.set_radius(px);
            }
            if let Some(inset) = inset {
                editor.set_inset(inset);
            }
            let css = editor.render().css;

            if let Some(out_path) = &o {
                fs::write(out_path, &css)
                    .with_context(|| format!("cannot write '{}'", out_path.display()))?;
                eprintln!("wrote CSS to {} ({} bytes)", out_path.display(), css.len());
            } else {
                println!("{css}");
            }

            if copy {
                copy_snippet(&css, fallback_file)?;
            }
        }

        Commands::Random { seed, json } => {
            let mut editor = Editor::default().with_options(config.snippet.clone());
            match seed {
                Some(seed) => editor.randomize(&mut StdRng::seed_from_u64(seed)),
                None => editor.randomize(&mut rand::rng()),
            };
            let rendered = editor.render();
            if json {
                println!("{}", serde_json::to_string_pretty(&rendered)?);
            } else {
                println!("{}", rendered.css);
            }
        }

        Commands::Shadows { base } => {
            let color = neumorph::hex_to_color(&base)
                .with_context(|| format!("invalid base color '{base}'"))?;
            let pair = neumorph::derive_shadows(color);
            println!("base  {color}");
            println!("light {}", pair.light);
            println!("dark  {}", pair.dark);
        }

        Commands::Serve { host, port } => {
            let mut config = config;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            let rt = tokio::runtime::Runtime::new().context("failed to create tokio runtime")?;
            rt.block_on(neumorph::server::run_preview_server(config, config_path))?;
        }
    }

    Ok(())
}

fn copy_snippet(css: &str, fallback_file: Option<PathBuf>) -> anyhow::Result<()> {
    let mut primary = SystemClipboard::default();
    let mut fallback = match fallback_file {
        Some(path) => FileClipboard::new(path),
        None => FileClipboard::disabled(),
    };

    match copy_with_fallback(css, &mut primary, &mut fallback) {
        CopyOutcome::Copied { via: CopyPath::Primary } => eprintln!("copied \u{2713}"),
        CopyOutcome::Copied { via: CopyPath::Fallback } => {
            eprintln!("copied \u{2713} (clipboard unavailable, written to fallback file)");
        }
        CopyOutcome::Skipped => {}
        CopyOutcome::Failed { primary, fallback } => {
            anyhow::bail!("copy failed: {primary}; fallback: {fallback}");
        }
    }
    Ok(())
}
