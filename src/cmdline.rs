use crate::config::Config;
use crate::interpreter;
use crate::printer::{self, PrintMode};
use ansi_term::Colour::Red;
use itertools::Itertools;
use std::fmt;

const USAGE: &str = "usage: lispy [--tokens | --ast] [--max-depth N] <source>...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Tokens,
    Ast,
    Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub output: Output,
    pub config: Config,
    pub source: String,
}

#[derive(Debug)]
pub enum Error {
    Usage(String),
    Interpret(interpreter::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Usage(reason) => write!(f, "{}\n{}", reason, USAGE),
            Error::Interpret(e) => write!(f, "{}", e),
        }
    }
}

impl From<interpreter::Error> for Error {
    fn from(e: interpreter::Error) -> Self {
        Error::Interpret(e)
    }
}

/// `args` includes the program name, as returned by `std::env::args`.
pub fn parse_args(args: &[String]) -> Result<Options, Error> {
    let mut output = Output::Value;
    let mut config = Config::default();
    let mut source = Vec::new();
    let mut rest = args.iter().skip(1);
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--tokens" => output = Output::Tokens,
            "--ast" => output = Output::Ast,
            "--max-depth" => {
                let value = rest
                    .next()
                    .ok_or_else(|| Error::Usage("--max-depth needs a value".into()))?;
                config.max_depth = value
                    .parse()
                    .map_err(|_| Error::Usage(format!("bad --max-depth '{}'", value)))?;
            }
            "--" => {
                source.extend(rest.by_ref());
                break;
            }
            flag if flag.starts_with("--") => {
                return Err(Error::Usage(format!("unknown option '{}'", flag)))
            }
            _ => source.push(arg),
        }
    }
    if source.is_empty() {
        return Err(Error::Usage("no source given".into()));
    }
    Ok(Options {
        output,
        config,
        source: source.iter().join(" "),
    })
}

pub fn render(options: &Options) -> Result<String, Error> {
    let source = options.source.as_str();
    log::debug!("running {:?} on {:?}", options.output, source);
    let rendered = match options.output {
        Output::Tokens => format!("{:?}", interpreter::tokenize(source)?),
        Output::Ast => format!("{:#?}", interpreter::parse_with(source, &options.config)?),
        Output::Value => {
            let value = interpreter::interpret_with(source, &options.config)?;
            printer::pr_str(&value, PrintMode::ReadableRepresentation)
        }
    };
    Ok(rendered)
}

fn report(e: &Error) {
    let message = format!("Error: {}", e);
    if atty::is(atty::Stream::Stderr) {
        eprintln!("{}", Red.paint(message));
    } else {
        eprintln!("{}", message);
    }
}

pub fn launch(args: Vec<String>) -> Result<(), Error> {
    let result = parse_args(&args).and_then(|options| render(&options));
    match result {
        Ok(text) => {
            println!("{}", text);
            Ok(())
        }
        Err(e) => {
            report(&e);
            Err(e)
        }
    }
}
