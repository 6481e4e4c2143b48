//! Hole extraction on the bundled sample programs.

use std::process::ExitCode;

use anyhow::{bail, Context as _, Result};
use clap::Parser;
use holey_lib::{declared_vars, process, samples, Config, Context};
use itertools::Itertools;

/// Replaces the literal constants of a sample program with synthesis holes.
#[derive(Parser, Debug)]
#[command(name = "holey")]
#[command(version = "0.1.0")]
#[command(about = "Extracts the constants of a program into synthesis holes")]
struct Cli {
    /// Name of the sample program
    #[arg(long, value_name = "NAME", default_value = "counter")]
    sample: String,

    /// Index of the first hole
    #[arg(long, value_name = "INDEX", default_value_t = 0)]
    first_hole: usize,

    /// Print the hole table as JSON
    #[arg(long)]
    json: bool,

    /// List the bundled samples and exit
    #[arg(long)]
    list: bool,

    /// Report the progress of each step
    #[arg(long)]
    verbose: bool,

    /// Warn about declarations shadowing a visible variable
    #[arg(long)]
    shadowing: bool,
}

fn run(cli: &Cli) -> Result<()> {
    if cli.list {
        println!("{}", samples::all().into_iter().map(|(name, _)| name).join("\n"));
        return Ok(());
    }

    let Some(p) = samples::get(&cli.sample) else {
        bail!("unknown sample `{}`, see --list", cli.sample);
    };
    let config = Config {
        filename: Some(cli.sample.as_str()),
        first_hole: cli.first_hole,
        report_shadowing: cli.shadowing,
        verbose: cli.verbose,
    };
    let mut ctx = Context::new(config);

    let vars = declared_vars(&p);
    let sizes: Vec<_> = p.funs.iter().map(|f| (f.name.clone(), f.size())).collect();
    let res = process(&mut ctx, p);
    ctx.reporter.display()?;
    let (_, table) = res?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&table).context("could not serialize the hole table")?
        );
        return Ok(());
    }
    for (name, size) in sizes {
        println!("fn {name}: {size} statements");
        for (var, ty) in &vars[&name] {
            println!("    {ty} {var}");
        }
    }
    print!("{table}");
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
