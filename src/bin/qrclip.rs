use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use qr_clip::{DecodeReport, Diagnostics, PassTelemetry, QrClipLocator, RqrrDecoder};

#[derive(Parser)]
#[command(name = "qrclip", version, about = "Locate, straighten and read a QR code")]
struct Cli {
    /// Photo to scan
    image: PathBuf,
    /// Write intermediate images here (turns on debug logging for the locator)
    #[arg(long)]
    debug_dir: Option<PathBuf>,
    /// Print the successful pass and per-pass counters
    #[arg(long)]
    report: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let default_filter = if cli.debug_dir.is_some() {
        "info,qr_clip=debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let report = scan(&cli.image, cli.debug_dir.as_deref())?;
    if cli.report {
        print_report(&report);
    }

    match report.text {
        Some(text) => {
            println!("{text}");
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!("No QR code found in {}", cli.image.display());
            Ok(ExitCode::FAILURE)
        }
    }
}

fn scan(path: &Path, debug_dir: Option<&Path>) -> anyhow::Result<DecodeReport> {
    let image =
        image::open(path).with_context(|| format!("failed to open image {}", path.display()))?;

    let mut locator = QrClipLocator::new(RqrrDecoder);
    if let Some(dir) = debug_dir {
        locator = locator.with_diagnostics(Diagnostics::new(dir)?);
    }

    Ok(locator.decode_with_report(&image))
}

fn print_report(report: &DecodeReport) {
    match report.pass {
        Some(pass) => eprintln!("Decoded on the {pass} pass"),
        None => eprintln!("Not decoded"),
    }
    print_pass("plain", &report.plain);
    if let Some(enhanced) = &report.enhanced {
        print_pass("enhanced", enhanced);
    }
}

fn print_pass(name: &str, tel: &PassTelemetry) {
    eprintln!(
        "  {name:<8} contours={} candidates={} buckets={} triples={} accepted={} decoder_calls={}",
        tel.contours,
        tel.candidates,
        tel.buckets_explored,
        tel.triples_tested,
        tel.triples_accepted,
        tel.decoder_calls
    );
}
