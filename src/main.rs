use clap::{Parser, Subcommand};
use guidebook::{config, emit, output, scan, sidebar, validate};
use std::path::PathBuf;

/// Release builds report the package version; dev builds report the git sha.
fn version_string() -> &'static str {
    if env!("BUILD_ON_TAG") == "true" {
        return env!("CARGO_PKG_VERSION");
    }
    match env!("BUILD_GIT_SHA") {
        "" => "dev@unknown",
        // Leaked once at startup, called exactly once
        sha => Box::leak(format!("dev@{sha}").into_boxed_str()),
    }
}

#[derive(Parser)]
#[command(name = "guidebook")]
#[command(about = "Configuration toolkit for documentation study-guide sites")]
#[command(long_about = "\
Configuration toolkit for documentation study-guide sites

site.toml is the data source: page metadata, nav menus, the sidebar tree,
head injections, theme settings, social links, and footer text. An external
documentation renderer consumes the record; guidebook loads it, checks it
against the Markdown content tree, and emits it in the renderer's shape.

Site structure:

  studyguide/
  ├── site.toml                    # Site config (this tool's input)
  ├── docs/                        # Content source (src_dir)
  │   ├── index.md                 # → link \"/\"
  │   ├── about.md                 # → link \"/about\"
  │   ├── images/d9book.svg        # asset, target of theme.logo
  │   └── developer/
  │       ├── intro.md
  │       └── fundamentals/
  │           └── 1.1-html-css.md  # N.M- prefix pins sidebar order
  └── dist/                        # Renderer output (out_dir)

Checks run by 'guidebook check':
  - every internal nav/sidebar link resolves to a content page
  - no duplicate links among the siblings of one sidebar group
  - sidebar nesting stays within 4 levels
  - theme logo exists, social icons are known, URLs are well-formed

Run 'guidebook gen-config' to generate a documented site.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Site root directory containing site.toml
    #[arg(long, default_value = ".", global = true)]
    dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate the configuration against the content tree
    Check,
    /// List the content pages and assets links can target
    Scan,
    /// Generate a sidebar skeleton from the content tree (prints TOML)
    Sidebar,
    /// Write the normalized site.json record for the renderer
    Emit,
    /// Print a stock site.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Check => {
            let config = config::load_config(&cli.dir)?;
            let inventory = scan::ContentInventory::scan(&cli.dir.join(&config.src_dir))?;
            let report = validate::validate(&config, &inventory);
            output::print_check_output(&report, inventory.pages().len());
            if !report.is_ok() {
                std::process::exit(1);
            }
        }
        Command::Scan => {
            let config = config::load_config(&cli.dir)?;
            let inventory = scan::ContentInventory::scan(&cli.dir.join(&config.src_dir))?;
            output::print_scan_output(&inventory);
        }
        Command::Sidebar => {
            let config = config::load_config(&cli.dir)?;
            let inventory = scan::ContentInventory::scan(&cli.dir.join(&config.src_dir))?;
            let skeleton = sidebar::from_content(&inventory);
            print!("{}", sidebar::to_toml(&skeleton)?);
        }
        Command::Emit => {
            let config = config::load_config(&cli.dir)?;
            let record_path = cli.dir.join(emit::RECORD_FILENAME);
            emit::write_site_record(&config, &record_path)?;
            println!("Emitted {}", record_path.display());
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
