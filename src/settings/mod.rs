use std::env;
use std::fs::{create_dir_all, File};
use std::io::{prelude::Read, Error, ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde_json::from_str;

pub mod certificates;
pub mod notification;
pub mod structs;

const SETTINGS_DIRECTORY: &str = ".certcheckr";
const SETTINGS_FILE: &str = "config.json";

/**
 * Owns the settings record and the location it is mirrored to.
 * Every mutating method applies the change in memory first and then writes the whole
 *     record back to disk, so the in-memory copy stays the operative state even if a write fails.
 */
#[derive(Debug)]
pub struct Store {
    location: PathBuf,
    settings: structs::Settings,
}

impl Store {
    /**
     * Loads the settings file from `location`.
     * If the file doesn't exist, default settings are generated and written to disk.
     * If the file exists but can't be read or parsed, the error is logged and default settings
     *     are used for this run. The broken file is left alone until the next successful save.
     */
    pub fn init(location: PathBuf) -> Store {
        if location.exists() {
            match load_settings(&location) {
                Ok(settings) => {
                    info!("Settings loaded successfully.");
                    Store { location, settings }
                }
                Err(e) => {
                    error!(
                        "Failed to load settings file '{}'. {}",
                        location.display(),
                        e
                    );
                    warn!("Continuing with default settings.");

                    Store {
                        location,
                        settings: structs::Settings::default(),
                    }
                }
            }
        } else {
            info!(
                "Settings file '{}' not found, generating default settings...",
                location.display()
            );

            let store = Store {
                location,
                settings: structs::Settings::default(),
            };
            store.persist();

            store
        }
    }

    pub fn settings(&self) -> &structs::Settings {
        &self.settings
    }

    /**
     * Writes the current record to disk. Failures are logged, never returned.
     */
    fn persist(&self) {
        match save_to_file(&self.settings, &self.location) {
            Ok(()) => info!("Settings saved successfully."),
            Err(e) => error!(
                "Failed to save settings file '{}'. {}",
                self.location.display(),
                e
            ),
        }
    }
}

/**
 * Returns `$HOME/.certcheckr/config.json`.
 * Falls back to the working directory when `HOME` isn't set.
 */
pub fn default_location() -> PathBuf {
    let base = match env::var("HOME") {
        Ok(home) => PathBuf::from(home),
        Err(_) => {
            warn!("Could not find the home directory, using the working directory.");
            PathBuf::from(".")
        }
    };

    base.join(SETTINGS_DIRECTORY).join(SETTINGS_FILE)
}

fn load_settings(location: &Path) -> Result<structs::Settings, Error> {
    info!("Loading settings file: '{}'", location.display());

    let mut contents = String::new();
    File::open(location)?.read_to_string(&mut contents)?;

    from_str(&contents).map_err(|e| Error::new(ErrorKind::InvalidData, e))
}

/**
 * Converts the settings to JSON and writes them to `location`, replacing whatever was there.
 * The containing directory is created if it is missing.
 */
pub fn save_to_file(settings: &structs::Settings, location: &Path) -> Result<(), Error> {
    if let Some(parent) = location.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent)?;
        }
    }

    let json_settings = match serde_json::to_string_pretty(settings) {
        Ok(json) => json,
        Err(e) => return Err(Error::new(ErrorKind::Other, e)),
    };

    let mut file = File::create(location)?;
    file.write_all(json_settings.as_bytes())?;

    Ok(())
}
