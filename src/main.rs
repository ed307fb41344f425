#![warn(unused_extern_crates)]

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

use std::env;
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

use clap::{App, Arg, ArgMatches, ErrorKind};

mod console;
mod daemon;
mod expiry;
mod logging;
mod notifier;
mod phrases;
mod settings;

use console::Console;
use notifier::Notifier;
use phrases::Phrases;
use settings::Store;

const APP_NAME: &str = env!("CARGO_PKG_NAME");
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    let (matches, arg_error) = parse_args(env::args_os());

    let location = matches
        .value_of("config")
        .map(PathBuf::from)
        .unwrap_or_else(settings::default_location);

    let filter = if matches.is_present("debug") {
        "debug"
    } else {
        "info"
    };
    logging::init(filter, &logging::log_directory(&location));

    if let Some(e) = arg_error {
        warn!("Could not parse the command line, starting the menu. {}", e);
    }

    info!("CertCheckr V{}::Startup", APP_VERSION);

    let phrases = Phrases::from_env();

    if matches.is_present("daemon") {
        info!("Running in daemon mode.");

        let notifier = match Notifier::new(phrases) {
            Ok(notifier) => notifier,
            Err(e) => {
                error!("Could not create the webhook client. {}", e);
                std::process::exit(1);
            }
        };

        daemon::run(&location, &notifier);
    }

    let mut store = Store::init(location);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(&mut store, phrases, stdin.lock(), stdout.lock());

    match console.run() {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            error!("Console I/O failed. {}", e);
            std::process::exit(1);
        }
    }
}

fn cli<'a, 'b>() -> App<'a, 'b> {
    App::new(APP_NAME)
        .version(APP_VERSION)
        .about("Tracks certificate expiry dates and sends webhook alerts before they run out.")
        .arg(
            Arg::with_name("daemon")
                .short("d")
                .long("daemon")
                .help("Check certificates once a day without user input. Usually used when being ran as a service."),
        )
        .arg(
            Arg::with_name("debug")
                .long("debug")
                .help("Log more detailed messages when running."),
        )
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("FILE")
                .takes_value(true)
                .help("Settings file to use instead of ~/.certcheckr/config.json"),
        )
}

/**
 * Parses the command line.
 * `--help` and `--version` print and exit as usual. Any other parse error is handed back
 *     together with default matches, so the program still starts in menu mode.
 */
fn parse_args<I, T>(args: I) -> (ArgMatches<'static>, Option<String>)
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match cli().get_matches_from_safe(args) {
        Ok(matches) => (matches, None),
        Err(e) => match e.kind {
            ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed => e.exit(),
            _ => (cli().get_matches_from(vec![APP_NAME]), Some(e.message)),
        },
    }
}
