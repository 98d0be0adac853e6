use clap::Parser;
use csv2cki::converter::DEFAULT_NAME;
use csv2cki::instrument::{sort_keys, write_document, JsonStyle};
use csv2cki::{ConvertOptions, Converter, InstrumentDefinition, SlotMode};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "csv2cki")]
#[command(version = "0.1.0")]
#[command(about = "Convert a CSV table of CC assignments to a Cirklon instrument definition", long_about = None)]
struct Args {
    /// Input CSV file (reads from stdin if not specified or "-")
    input: Option<PathBuf>,

    /// Output .cki file (writes to stdout if not specified or "-")
    #[arg(short, long)]
    outfile: Option<PathBuf>,

    /// Instrument name (defaults to the input file name)
    #[arg(short, long)]
    name: Option<String>,

    /// MIDI port
    #[arg(long, default_value_t = 1)]
    port: i64,

    /// MIDI channel
    #[arg(long, default_value_t = 1)]
    channel: i64,

    /// Multi-timbral instrument
    #[arg(long)]
    multi: bool,

    /// Disable transpose
    #[arg(long)]
    noxpose: bool,

    /// Disable force-to-scale
    #[arg(long)]
    nofts: bool,

    /// Input has no header row
    #[arg(long)]
    noheader: bool,

    /// Number slots by emitted entries only (no skip token)
    #[arg(long)]
    derived_slots: bool,

    /// Sort object keys in the output
    #[arg(long)]
    sort_keys: bool,

    /// Output compact JSON (default is pretty-printed)
    #[arg(short, long)]
    compact: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("csv2cki: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), csv2cki::Error> {
    let input = args.input.as_deref().filter(|p| !is_stdio(p));

    let converter = Converter::new(ConvertOptions {
        name: instrument_name(args.name.as_deref(), input),
        port: args.port,
        channel: args.channel,
        multi: args.multi,
        disable_transpose: args.noxpose,
        disable_force_to_scale: args.nofts,
        has_header: !args.noheader,
        slot_mode: if args.derived_slots {
            SlotMode::Derived
        } else {
            SlotMode::Counter
        },
    });

    let instrument = match input {
        Some(path) => converter.convert_file(path)?,
        None => converter.convert(io::stdin().lock())?,
    };

    let definition = InstrumentDefinition::from(instrument);
    let mut document = definition.to_document()?;
    if args.sort_keys {
        document = sort_keys(document);
    }

    let style = if args.compact {
        JsonStyle::Compact
    } else {
        JsonStyle::Pretty
    };

    let mut out: Box<dyn Write> = match args.outfile.as_deref().filter(|p| !is_stdio(p)) {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };
    write_document(&mut out, &document, style)?;
    out.write_all(b"\n")?;
    out.flush()?;

    Ok(())
}

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Explicit name, else the input file stem, else the default
fn instrument_name(name: Option<&str>, input: Option<&Path>) -> String {
    name.map(str::to_string)
        .or_else(|| {
            input
                .and_then(Path::file_stem)
                .map(|stem| stem.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| DEFAULT_NAME.to_string())
}
