use cashmint::application::registry::FactoryRegistry;
use cashmint::interfaces::console;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::io;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// 2-letter country code (prompted for interactively when omitted)
    #[arg(long, short)]
    country: Option<String>,

    /// Values to mint in one shot; without any, an interactive session starts
    values: Vec<String>,

    /// Emit minted cash as JSON, one object per line (one-shot mode only)
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    let code = match cli.country {
        Some(code) => code.trim().to_uppercase(),
        None => console::prompt_country_code(&mut input, &mut output).into_diagnostic()?,
    };

    let mut registry = FactoryRegistry::new();
    let factory = registry.get_instance(&code).into_diagnostic()?;

    if cli.values.is_empty() {
        console::run(factory.as_ref(), &mut input, &mut output).into_diagnostic()?;
    } else {
        console::mint_values(factory.as_ref(), &cli.values, cli.json, &mut output)
            .into_diagnostic()?;
    }

    Ok(())
}
