use std::io::{Error, ErrorKind};

use reqwest::Url;

use super::Store;

/**
 * A webhook URL is accepted when it parses and carries both a scheme and a host.
 * The authority has to be spelled out, `http:host` is normalised by the parser but rejected here.
 */
pub fn validate_webhook_url(url: &str) -> bool {
    if !url.contains("://") {
        return false;
    }

    match Url::parse(url) {
        Ok(parsed) => !parsed.scheme().is_empty() && parsed.has_host(),
        Err(_) => false,
    }
}

impl Store {
    /**
     * Sets the webhook URL and saves the settings.
     * Returns an `InvalidInput` error and keeps the previous URL if `url` doesn't validate.
     */
    pub fn set_webhook_url(&mut self, url: &str) -> Result<(), Error> {
        if !validate_webhook_url(url) {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                format!("Invalid webhook URL '{}'.", url),
            ));
        }

        self.settings.webhook_url = url.to_owned();
        info!("Webhook URL updated.");

        self.persist();

        Ok(())
    }

    /**
     * Parses `days` and sets it as the notification threshold, then saves the settings.
     * Non-numeric input returns `InvalidData`, zero or negative numbers return `InvalidInput`.
     *     In both cases the previous threshold is kept.
     */
    pub fn set_notification_days(&mut self, days: &str) -> Result<(), Error> {
        let days: i64 = match days.trim().parse() {
            Ok(days) => days,
            Err(e) => {
                return Err(Error::new(
                    ErrorKind::InvalidData,
                    format!("'{}' is not a number. {}", days, e),
                ))
            }
        };

        if days <= 0 {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                format!("Notification days must be positive, got {}.", days),
            ));
        }

        self.settings.notification_days = days;
        info!("Notification days set to {}.", days);

        self.persist();

        Ok(())
    }
}
