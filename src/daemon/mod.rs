use std::path::Path;
use std::thread;
use std::time::Duration;

use crate::expiry::{check_certificates, today};
use crate::notifier::structs::Notification;
use crate::notifier::Notifier;
use crate::settings::Store;

const CHECK_INTERVAL: u64 = 24 * 60 * 60;

/**
 * Checks the certificates, sleeps for a day and repeats. Never returns.
 * The sleep starts after the check finishes, so a slow webhook pushes later checks back.
 */
pub fn run(location: &Path, notifier: &Notifier) -> ! {
    info!(
        "Checking certificates every {} hours.",
        CHECK_INTERVAL / (60 * 60)
    );

    loop {
        run_cycle(location, notifier);
        thread::sleep(Duration::from_secs(CHECK_INTERVAL));
    }
}

/**
 * Reloads the settings from `location` and notifies about every due certificate.
 * Reloading picks up changes made from the console since the previous cycle.
 */
pub fn run_cycle(location: &Path, notifier: &Notifier) -> Vec<Notification> {
    debug!("Starting certificate check...");

    let store = Store::init(location.to_path_buf());
    let outcomes = check_certificates(store.settings(), notifier, today());

    let failed = outcomes
        .iter()
        .filter(|outcome| matches!(outcome, Notification::Failed(_)))
        .count();

    info!(
        "Certificate check finished. Checked: {}, notified: {}, failed: {}.",
        store.settings().certificates.len(),
        outcomes.len(),
        failed
    );

    outcomes
}
