use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};

use transit_forge::export;

// ---------------------------------------------------------------------------
// CLI: run one generation and write the result
// ---------------------------------------------------------------------------

const USAGE: &str =
    "usage: transit-forge <target> [bin_size] [--out FILE.json] [--parquet FILE.parquet]";

struct Args {
    target: String,
    bin_size: usize,
    json_out: Option<PathBuf>,
    parquet_out: Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut target = None;
    let mut bin_size = 20usize;
    let mut json_out = None;
    let mut parquet_out = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--out" => {
                let path = args.next().context("--out requires a path")?;
                json_out = Some(PathBuf::from(path));
            }
            "--parquet" => {
                let path = args.next().context("--parquet requires a path")?;
                parquet_out = Some(PathBuf::from(path));
            }
            "-h" | "--help" => bail!("{USAGE}"),
            other if target.is_none() => target = Some(other.to_string()),
            other => {
                bin_size = other
                    .parse()
                    .with_context(|| format!("invalid bin size: {other:?}"))?;
            }
        }
    }

    let target = target.with_context(|| format!("missing target name\n{USAGE}"))?;
    Ok(Args {
        target,
        bin_size,
        json_out,
        parquet_out,
    })
}

fn run() -> Result<()> {
    let args = parse_args()?;

    let obs = transit_forge::generate(&args.target, args.bin_size)
        .with_context(|| format!("generating observation for {:?}", args.target))?;

    if let Some(path) = &args.parquet_out {
        export::write_parquet(&obs, path)?;
        log::info!("wrote {} channels to {}", obs.n_bins(), path.display());
    }
    match &args.json_out {
        Some(path) => {
            export::write_json(&obs, path)?;
            log::info!("wrote JSON to {}", path.display());
        }
        None if args.parquet_out.is_none() => println!("{}", export::to_json(&obs)?),
        None => {}
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
