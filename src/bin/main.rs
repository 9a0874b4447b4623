use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Parser, ValueHint};
use clones::{IndexPolicy, VersionSystem};

mod cli {
    pub mod input;
    pub mod verbosity;
}

use cli::{input::Script, verbosity::Verbosity};

#[derive(Parser, Debug)]
#[command(author, about, version)]
struct Opts {
    /// File with one query per line, e.g. `learn 1 5` or `check 2`.
    /// Reads from stdin when omitted or `-`.
    #[arg(value_hint = ValueHint::FilePath)]
    script: Option<PathBuf>,

    /// Fail on a clone index that names no clone instead of skipping the query
    #[arg(long)]
    strict: bool,

    /// Log failing queries and go on with the next line
    #[arg(long)]
    keep_going: bool,

    #[command(flatten)]
    verbosity: Verbosity,
}

fn main() -> Result<()> {
    let opts = Opts::parse();
    opts.verbosity.configure();

    let policy = if opts.strict {
        IndexPolicy::Reject
    } else {
        IndexPolicy::Ignore
    };
    let mut system = VersionSystem::with_policy(policy);
    let script = Script::from_arg(opts.script.as_deref());
    tracing::debug!("Reading queries from {:?}", script);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in script.lines()? {
        let line = line.with_context(|| "Read query")?;
        match system.execute(&line.text) {
            Ok(Some(result)) => writeln!(out, "{}", result)?,
            Ok(None) => {}
            Err(e) if opts.keep_going => {
                tracing::error!("line {}: {}", line.number, e);
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to run line {}: `{}`", line.number, line.text.trim())
                })
            }
        }
    }
    out.flush()?;
    Ok(())
}
