use anyhow::Context;
use clap::Parser;
use clap::error::ErrorKind;
use std::ffi::OsString;
use std::process::ExitCode;

use bing_wallpaper::{
    BingConfig, HttpFetcher, Pipeline, Reporter, bing::parse_days_back,
    desktop::get_wallpaper_setter, logging::init_logging, pipeline::failure_message,
    report::default_reporter,
};

#[derive(Parser, Default)]
#[command(name = "bing-wallpaper")]
#[command(
    version,
    about = "Fetches Bing's picture of the day and sets it as your desktop wallpaper."
)]
pub struct Args {
    #[arg(
        value_name = "DAYS_BACK",
        allow_hyphen_values = true,
        help = "How many days back to go (0-7, defaults to 0 = today). Anything that is not a number means today."
    )]
    days_back: Option<String>,

    /// Anything after DAYS_BACK is ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _rest: Vec<String>,
}

/// Only `--help` and `--version` stop the run. Any other parse problem falls
/// back to the raw first argument, which is then read leniently like any other.
fn parse_args<I, T>(argv: I) -> std::result::Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();

    match Args::try_parse_from(argv.iter().cloned()) {
        Ok(args) => Ok(args),
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => Err(e),
            _ => {
                tracing::debug!("ignoring argument error: {}", e.kind());
                Ok(Args {
                    days_back: argv.get(1).map(|a| a.to_string_lossy().into_owned()),
                    ..Args::default()
                })
            }
        },
    }
}

fn main() -> ExitCode {
    let args = match parse_args(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
    };
    init_logging();

    let reporter = default_reporter();
    match run(&args, reporter.as_ref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("{:?}", e);
            let message = match e.downcast_ref::<bing_wallpaper::Error>() {
                Some(err) => failure_message(err),
                None => format!("An error occurred: {:#}", e),
            };
            reporter.error(&message);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, reporter: &dyn Reporter) -> anyhow::Result<()> {
    let days_back = parse_days_back(args.days_back.as_deref());
    let config = BingConfig::from_env()?;

    let setter = get_wallpaper_setter()?;
    tracing::debug!("using {} wallpaper backend", setter.name());

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start the async runtime")?;

    let pipeline = Pipeline::new(&config, HttpFetcher::new(), setter.as_ref(), reporter);
    rt.block_on(pipeline.run(days_back))?;

    Ok(())
}
