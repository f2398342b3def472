use std::fmt::Display;
use std::io::{self, BufRead, BufWriter, Write};
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use log::LevelFilter;

use dynmat::{DynamicMatrix, DynamicVector, Element, TokenReader};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("DYNMAT_LOG", "error,dynmat=warn"))
        .init();

    let matches = cli().get_matches();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut tokens = TokenReader::new(stdin.lock());
    let mut out = BufWriter::new(stdout.lock());

    if matches.get_flag("int") {
        run::<i64, _, _>(&matches, &mut tokens, &mut out)?;
    } else {
        run::<f64, _, _>(&matches, &mut tokens, &mut out)?;
    }
    out.flush().context("Failed to flush output")?;
    Ok(())
}

fn size_arg() -> Arg {
    Arg::new("size")
        .short('n')
        .long("size")
        .help("Vector length or matrix dimension")
        .required(true)
        .value_parser(clap::value_parser!(usize))
}

fn cli() -> Command {
    Command::new("dynmat")
        .version(clap::crate_version!())
        .about("Dynamic vector and square matrix arithmetic over whitespace-separated stdin")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("int")
                .long("int")
                .help("Parse elements as 64-bit integers instead of floats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("vector")
                .about("Read two vectors and combine them")
                .arg(
                    Arg::new("op")
                        .help("Operation to apply")
                        .required(true)
                        .value_parser(["add", "sub", "dot"]),
                )
                .arg(size_arg()),
        )
        .subcommand(
            Command::new("matrix")
                .about("Read two matrices and combine them")
                .arg(
                    Arg::new("op")
                        .help("Operation to apply")
                        .required(true)
                        .value_parser(["add", "sub", "mul"]),
                )
                .arg(size_arg()),
        )
        .subcommand(
            Command::new("matvec")
                .about("Read a matrix and a vector and print their product")
                .arg(size_arg()),
        )
        .subcommand(
            Command::new("scale")
                .about("Read a matrix and multiply it by a scalar")
                .arg(size_arg())
                .arg(
                    Arg::new("by")
                        .long("by")
                        .help("Scalar factor")
                        .required(true)
                        .allow_hyphen_values(true)
                        .value_parser(clap::builder::NonEmptyStringValueParser::new()),
                ),
        )
}

fn run<T, R, W>(matches: &ArgMatches, tokens: &mut TokenReader<R>, out: &mut W) -> Result<()>
where
    T: Element + FromStr + Display,
    R: BufRead,
    W: Write,
{
    let (name, sub) = matches
        .subcommand()
        .ok_or_else(|| anyhow!("No subcommand given"))?;
    let size = *sub
        .get_one::<usize>("size")
        .context("Missing --size")?;
    log::info!("running '{}' with size {}", name, size);

    match name {
        "vector" => {
            let lhs = DynamicVector::<T>::read_sized(size, tokens).context("Failed to read first vector")?;
            let rhs = DynamicVector::<T>::read_sized(size, tokens).context("Failed to read second vector")?;
            match op(sub)? {
                "add" => writeln!(out, "{}", lhs.try_add(&rhs)?)?,
                "sub" => writeln!(out, "{}", lhs.try_sub(&rhs)?)?,
                "dot" => writeln!(out, "{}", lhs.dot(&rhs)?)?,
                other => return Err(anyhow!("Unknown vector operation '{}'", other)),
            }
        }
        "matrix" => {
            let lhs = DynamicMatrix::<T>::read_sized(size, tokens).context("Failed to read first matrix")?;
            let rhs = DynamicMatrix::<T>::read_sized(size, tokens).context("Failed to read second matrix")?;
            let result = match op(sub)? {
                "add" => lhs.try_add(&rhs)?,
                "sub" => lhs.try_sub(&rhs)?,
                "mul" => lhs.mul_matrix(&rhs)?,
                other => return Err(anyhow!("Unknown matrix operation '{}'", other)),
            };
            write!(out, "{}", result)?;
        }
        "matvec" => {
            let matrix = DynamicMatrix::<T>::read_sized(size, tokens).context("Failed to read matrix")?;
            let vector = DynamicVector::<T>::read_sized(size, tokens).context("Failed to read vector")?;
            writeln!(out, "{}", matrix.mul_vector(&vector)?)?;
        }
        "scale" => {
            let raw = sub
                .get_one::<String>("by")
                .context("Missing --by")?;
            let factor = raw
                .parse::<T>()
                .map_err(|_| anyhow!("Invalid scalar '{}'", raw))?;
            let matrix = DynamicMatrix::<T>::read_sized(size, tokens).context("Failed to read matrix")?;
            write!(out, "{}", matrix.mul_scalar(factor))?;
        }
        other => return Err(anyhow!("Unknown subcommand '{}'", other)),
    }
    Ok(())
}

fn op(sub: &ArgMatches) -> Result<&str> {
    sub.get_one::<String>("op")
        .map(String::as_str)
        .context("Missing operation")
}
