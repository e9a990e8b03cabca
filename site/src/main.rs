use anyhow::Context;
use clap::Parser;
use engine::theme::ThemeRegistry;
use std::path::Path;

mod config;
mod css;
mod error;
mod logger;

/// Generate the site stylesheet from the built-in theme definitions.
#[derive(Parser)]
#[command(name = "sentinela", version, about)]
struct Cli {}

fn main() {
    let Cli {} = Cli::parse();

    if let Err(e) = run() {
        eprintln!("❌ Erro ao gerar variáveis CSS: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let config = config::load_config().context("could not load configuration")?;
    logger::setup_logger(config.logging()).context("could not initialize logging")?;

    let registry = ThemeRegistry::load_builtin().context("could not load theme definitions")?;
    let stylesheet = css::generate(&registry).context("could not render the stylesheet")?;

    let path = Path::new(config.output().stylesheet_path());
    css::write_stylesheet(path, &stylesheet)?;

    println!("✅ Variáveis CSS geradas com sucesso em {}", path.display());
    Ok(())
}
