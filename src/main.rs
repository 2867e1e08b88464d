use core::str::FromStr;
use seqinfo::{Options, summarize};
use std::io::Read as _;
use std::process::ExitCode;
use thiserror::Error;

#[derive(Debug, Error)]
enum Error {
    #[error("Invalid options {0:?}: {1}")]
    Options(String, bitflags::parser::ParseError),

    #[error("Invalid number: {0:?}")]
    Parse(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Input numbers in the narrowest type that holds all of them
#[derive(Debug, Clone, PartialEq)]
enum Numbers {
    Signed(Vec<i64>),
    Unsigned(Vec<u64>),
    Wide(Vec<i128>),
    Float(Vec<f64>),
}

fn parse_all<T: FromStr>(tokens: &[&str]) -> Result<Vec<T>, Error> {
    tokens
        .iter()
        .map(|token| token.parse().map_err(|_| Error::Parse((*token).to_owned())))
        .collect()
}

impl Numbers {
    fn parse(tokens: &[&str]) -> Result<Self, Error> {
        if let Ok(values) = parse_all::<i64>(tokens) {
            return Ok(Self::Signed(values));
        }
        if let Ok(values) = parse_all::<u64>(tokens) {
            return Ok(Self::Unsigned(values));
        }
        if let Ok(values) = parse_all::<i128>(tokens) {
            return Ok(Self::Wide(values));
        }
        parse_all::<f64>(tokens).map(Self::Float)
    }

    fn report(&self, options: Options) -> String {
        match self {
            Self::Signed(values) => summarize(values, options).to_string(),
            Self::Unsigned(values) => summarize(values, options).to_string(),
            Self::Wide(values) => summarize(values, options).to_string(),
            Self::Float(values) => summarize(values, options).to_string(),
        }
    }
}

fn run() -> Result<String, Error> {
    let options = match std::env::args().nth(1) {
        None => Options::empty(),
        Some(string) => bitflags::parser::from_str(&string).map_err(|e| Error::Options(string, e))?,
    };

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    let tokens: Vec<&str> = input.split_whitespace().collect();
    Ok(Numbers::parse(&tokens)?.report(options))
}

fn main() -> ExitCode {
    match run() {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            if matches!(e, Error::Options(..)) {
                eprintln!("Usage: seqinfo [\"HISTOGRAM | EXACT\"] < numbers.txt");
            }
            ExitCode::FAILURE
        }
    }
}
