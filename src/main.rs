//! The CLI interface for dpiz
//!
//! Run without arguments to see the usage text.
use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;

use color_eyre::eyre::Result;
use dpiz::{
    DisplayPlatform, DpiError, DpiLevel, MonitorResolver, ParseDpiLevelError,
    commands::{self, MonitorNameSource},
};
use structopt::{StructOpt, clap::AppSettings};

/// CLI arguments
#[derive(StructOpt, Debug)]
#[structopt(
    name = "dpiz",
    about = "Changes the DPI scaling of a monitor on Windows using the CLI.",
    setting = AppSettings::AllowNegativeNumbers,
    after_help = "EXAMPLES:\n    dpiz list\n    dpiz -1\n    dpiz -1 LGD047A"
)]
struct Opts {
    /// `list` to list all monitors, or the DPI level to set
    #[structopt(
        name = "level",
        long_help = "`list` lists all monitors. Otherwise the DPI level to set: \
                     0 = recommended level, -1..-x = lower DPI, 1..y = higher DPI"
    )]
    action: Option<Action>,
    /// Name of the monitor, one of the listed values
    #[structopt(
        name = "monitorName",
        long_help = "Name of the monitor, one of the listed values. If not specified \
                     it is read from the dpi.cfg file in the working directory or next \
                     to the executable"
    )]
    monitor_name: Option<String>,
    /// Read the monitor name from this file instead of dpi.cfg
    #[structopt(short, long, parse(from_os_str))]
    config: Option<PathBuf>,
    /// Print all identifiers of the listed monitors
    #[structopt(short, long)]
    long: bool,
    /// List at most this many monitors
    #[structopt(short = "n", long)]
    limit: Option<usize>,
    /// Output debug info
    #[structopt(short, long)]
    verbose: bool,
}

/// What to do with the matched monitors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    List,
    Set(DpiLevel),
}

impl FromStr for Action {
    type Err = ParseDpiLevelError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s == "list" {
            return Ok(Action::List);
        }
        Ok(Action::Set(s.parse()?))
    }
}

#[cfg(target_os = "windows")]
fn platform() -> Result<Box<dyn DisplayPlatform>> {
    Ok(Box::new(dpiz::platforms::windows::WindowsPlatform::new()))
}

#[cfg(not(target_os = "windows"))]
fn platform() -> Result<Box<dyn DisplayPlatform>> {
    Err(color_eyre::eyre::eyre!(
        "Per-monitor DPI settings are only supported on Windows"
    ))
}

/// Entry point for `dpiz`.
fn main() -> Result<()> {
    color_eyre::install()?;

    let opts = Opts::from_args();

    let log_level = if opts.verbose {
        log::LevelFilter::Trace
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level.as_str()))
        .init();

    log::debug!("Parsed Opts:\n{:#?}", opts);

    let Some(action) = opts.action else {
        Opts::clap().print_long_help()?;
        println!();
        return Ok(());
    };

    let platform = platform()?;
    let resolver = MonitorResolver::new(platform.as_ref());
    let mut out = io::stdout().lock();

    let result = match action {
        Action::List => commands::list(
            &resolver,
            opts.limit.unwrap_or(usize::MAX),
            opts.long,
            &mut out,
        ),
        Action::Set(level) => {
            let source = match (opts.monitor_name, opts.config) {
                (Some(name), _) => MonitorNameSource::Argument(name),
                (None, Some(path)) => MonitorNameSource::ConfigFile(path),
                (None, None) => MonitorNameSource::default_search()?,
            };
            commands::set(&resolver, level, &source, &mut out).map(|_| ())
        }
    };

    let code = report(result, &mut io::stderr())?;
    if code != 0 {
        std::process::exit(code);
    }

    Ok(())
}

/// Prints an expected failure to `err_out` and returns the process exit code.
///
/// I/O failures are passed on to color-eyre.
fn report(result: std::result::Result<(), DpiError>, err_out: &mut impl Write) -> Result<i32> {
    match result {
        Ok(()) => Ok(0),
        Err(err @ DpiError::Io(_)) => Err(err.into()),
        Err(err) => {
            writeln!(err_out, "{}", err)?;
            Ok(err.exit_code())
        }
    }
}
