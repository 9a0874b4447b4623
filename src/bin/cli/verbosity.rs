use std::io;

use tracing::Level;
use tracing_subscriber::{filter::Targets, prelude::*};

#[derive(clap::Args, Debug)]
pub struct Verbosity {
    /// Increase verbosity of the logs
    ///
    /// The verbosity only applies to the logging of the crate,
    /// logging from other crates is filtered to WARN.
    #[arg(short, long, help_heading = "Verbosity", action = clap::ArgAction::Count)]
    verbose: u8,

    /// Reduce verbosity of the logs
    #[arg(short, long, help_heading = "Verbosity", action = clap::ArgAction::Count, conflicts_with = "verbose")]
    quiet: u8,
}

impl Verbosity {
    /// Installs the global subscriber. Logs go to stderr so that stdout only
    /// carries query results.
    pub(crate) fn configure(&self) {
        #[cfg(debug_assertions)]
        let show_details = true;
        #[cfg(not(debug_assertions))]
        let show_details = false;

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(io::stderr)
                    .with_file(show_details)
                    .with_target(show_details),
            )
            .with::<Targets>(self.into())
            .init();
    }
}

impl From<&Verbosity> for Targets {
    fn from(val: &Verbosity) -> Self {
        Targets::new()
            .with_default(Level::WARN)
            .with_target(
                "clones",
                match val.verbose as i16 - val.quiet as i16 {
                    ..=-1 => Level::ERROR,
                    0 => Level::WARN,
                    1 => Level::INFO,
                    2 => Level::DEBUG,
                    3.. => Level::TRACE,
                },
            )
    }
}
