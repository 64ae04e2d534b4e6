//! num CLI entry point
//!
//! Transforms integers and characters between bases and data units.

use std::io::{self, BufWriter, IsTerminal};
use std::process::ExitCode;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use num_cli::cli::args::Args;
use num_cli::version;
use num_cli::{run, Config, NumError};

fn main() -> ExitCode {
    let args = match Args::parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Run 'num -h' for usage information.");
            return ExitCode::from(2);
        }
    };

    if args.help {
        print_help();
        return ExitCode::SUCCESS;
    }
    if args.version {
        println!("{}", version::CURRENT);
        return ExitCode::SUCCESS;
    }

    init_logging(args.verbose);

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(e) => return fail(&e),
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match run(&config, &mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => fail(&e),
    }
}

fn fail(e: &NumError) -> ExitCode {
    eprintln!("Error: {}", e);
    if e.is_usage() {
        ExitCode::from(2)
    } else {
        ExitCode::from(1)
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env("NUM_LOG").unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("num_cli=debug")
        } else {
            EnvFilter::new("num_cli=error")
        }
    });

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal())
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .init();
}

fn print_help() {
    println!(
        r#"num - transform integers and characters

Results of multiple inputs are separated by newline.

USAGE:
    num [OPTIONS] [INPUT]...

Flags must come before inputs. Inputs are read from the command line,
else from -file, else from standard input (a pipe is always read; a
terminal only with -stdin).

OUTPUT ORDER: [hex] [decimal] [octal] [binary] [char]

OPTIONS:
    -x                 Append output in hexadecimal
    -d                 Append output in decimal (default)
    -o                 Append output in octal
    -b                 Append output in binary
    -s                 Append the integer converted to a quoted character
    -c                 Treat inputs as characters and convert them to integers
    -u <UNIT>          Data unit for the output: B, KB, MB, GB, TB, PB, EB
                       (matched by suffix, case insensitive; default B)
    -f, -format <FMT>  Custom printf output format; overrides -x -d -o -b -s
    -f-count <N>       Number of values substituted into -f
                       (default: number of % directives)
    -precision <MODE>  Unit conversion precision: auto (default), int, float
    -file <PATH>       Read inputs from a file
    -stdin             Block reading standard input until end of stream
    -v                 Print parse errors on standard error
    -h, -help          Print this help message
    -version           Print version information

ENVIRONMENT:
    NUM_UNIT, NUM_FORMAT, NUM_PRECISION, NUM_VERBOSE   Defaults for flags
    NUM_LOG                                            Log filter

EXIT CODES:
    0   Success (including inputs that failed to parse)
    1   Input could not be opened or read
    2   Invalid command line

EXAMPLES:
    num -u GB 10TB 8EB
    num -x -d -o -b 255
    num 0x_dad_face
    num -u TB -f "%gTB" 0X_dad_face_dead_faceGB
    num -u GB -f "%0.4fGB" 10TB
    cat input.txt | num -x -d -o -u KB"#
    );
}
