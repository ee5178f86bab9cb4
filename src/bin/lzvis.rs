use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use lzvis::{compress, compress_with_trace, decompress, CompressStats, Error, Token};

/// Default input cap. The encoder is O(n * 255), so unbounded input is a
/// cheap way to burn CPU; anything visualization-sized fits well under this.
const DEFAULT_MAX_INPUT_SIZE: usize = 100 * 1024;

#[derive(Parser, Debug)]
#[command(name = "lzvis")]
#[command(about = "Compress bytes into an LZ77 token stream, or decompress one")]
#[command(version)]
struct Args {
    /// Input file (use - for stdin)
    #[arg(short, long)]
    input: PathBuf,

    /// Output file (use - for stdout)
    #[arg(short, long)]
    output: PathBuf,

    /// Decompress a token-stream JSON file back to raw bytes
    #[arg(short, long)]
    decompress: bool,

    /// Also write the step-by-step match trace as JSON (compress mode only)
    #[arg(long, value_name = "PATH", conflicts_with = "decompress")]
    trace: Option<PathBuf>,

    /// Maximum input size in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_INPUT_SIZE)]
    max_size: usize,

    /// Show statistics on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> lzvis::Result<()> {
    let args = Args::parse();

    let input = read_input(&args.input)?;
    if input.len() > args.max_size {
        return Err(Error::InputTooLarge { size: input.len(), max: args.max_size });
    }

    if args.decompress {
        run_decompress(&args, &input)
    } else {
        run_compress(&args, &input)
    }
}

fn run_compress(args: &Args, input: &[u8]) -> lzvis::Result<()> {
    let tokens = match &args.trace {
        Some(trace_path) => {
            let (steps, tokens) = compress_with_trace(input);
            write_output(trace_path, serde_json::to_vec_pretty(&steps)?.as_slice())?;
            tokens
        }
        None => compress(input),
    };

    write_output(&args.output, serde_json::to_vec(&tokens)?.as_slice())?;

    if args.verbose {
        let stats = CompressStats::from_tokens(input.len(), &tokens);
        eprintln!("Compression complete:");
        eprintln!("  Input bytes:      {}", stats.input_bytes);
        eprintln!("  Tokens:           {}", stats.token_count);
        eprintln!("  Encoded bytes:    {}", stats.encoded_bytes);
        eprintln!("  Ratio:            {:.3}", stats.ratio());
    }

    Ok(())
}

fn run_decompress(args: &Args, input: &[u8]) -> lzvis::Result<()> {
    let tokens: Vec<Token> = serde_json::from_slice(input)?;
    let bytes = decompress(&tokens)?;
    write_output(&args.output, &bytes)?;

    if args.verbose {
        eprintln!("Decompression complete:");
        eprintln!("  Tokens:           {}", tokens.len());
        eprintln!("  Output bytes:     {}", bytes.len());
    }

    Ok(())
}

fn read_input(path: &Path) -> lzvis::Result<Vec<u8>> {
    let mut data = Vec::new();
    if path.to_str() == Some("-") {
        io::stdin().lock().read_to_end(&mut data)?;
    } else {
        File::open(path)?.read_to_end(&mut data)?;
    }
    Ok(data)
}

fn write_output(path: &Path, data: &[u8]) -> lzvis::Result<()> {
    if path.to_str() == Some("-") {
        io::stdout().lock().write_all(data)?;
    } else {
        File::create(path)?.write_all(data)?;
    }
    Ok(())
}
