use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{self, Error, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use env_logger::{Builder, Env, Target};

const LOG_DIRECTORY: &str = "logs";
const LOG_FILE: &str = "certcheckr.log";
const LOG_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/**
 * Writes everything to both `console` and `file`.
 */
pub struct Tee<A, B> {
    console: A,
    file: B,
}

impl<A: Write, B: Write> Tee<A, B> {
    pub fn new(console: A, file: B) -> Self {
        Tee { console, file }
    }
}

impl<A: Write, B: Write> Write for Tee<A, B> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.console.write_all(buf)?;
        self.file.write_all(buf)?;

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.console.flush()?;
        self.file.flush()
    }
}

/**
 * The log directory lives next to the settings file, ex. `~/.certcheckr/logs`.
 */
pub fn log_directory(settings_location: &Path) -> PathBuf {
    match settings_location.parent() {
        Some(parent) => parent.join(LOG_DIRECTORY),
        None => PathBuf::from(LOG_DIRECTORY),
    }
}

/**
 * Opens `certcheckr.log` inside `log_dir` for appending, creating the directory if needed.
 */
pub fn open_log_file(log_dir: &Path) -> Result<File, Error> {
    create_dir_all(log_dir)?;

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join(LOG_FILE))
}

/**
 * Initializes logging with specified detail:
 * ``` filter: 'info', 'warn', 'debug', 'trace' ```
 * Lines go to stderr and to the log file in `log_dir`. If the file can't be opened, only
 *     stderr is used and a warning is logged.
 */
pub fn init(filter: &str, log_dir: &Path) {
    let mut builder = Builder::from_env(Env::default().filter_or("RUST_LOG", filter));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} - {} - {}",
            Local::now().format(LOG_DATE_FORMAT),
            record.level(),
            record.args()
        )
    });

    match open_log_file(log_dir) {
        Ok(file) => {
            builder.target(Target::Pipe(Box::new(Tee::new(io::stderr(), file))));
            builder.init();

            debug!("Logging to '{}'.", log_dir.join(LOG_FILE).display());
        }
        Err(e) => {
            builder.target(Target::Stderr);
            builder.init();

            warn!(
                "Could not open the log file in '{}', logging to stderr only. {}",
                log_dir.display(),
                e
            );
        }
    }
}
