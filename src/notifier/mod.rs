use std::io::{Error, ErrorKind};
use std::time::Duration;

use reqwest::blocking::Client;

use crate::phrases::Phrases;
use crate::settings::structs::CertificateEntry;

pub mod structs;

use structs::{AlertPayload, Notification};

// Seconds, keeps a dead endpoint from stalling the daily check
const WEBHOOK_TIMEOUT: u64 = 10;

pub struct Notifier {
    client: Client,
    phrases: Phrases,
}

impl Notifier {
    pub fn new(phrases: Phrases) -> Result<Notifier, Error> {
        match Client::builder()
            .timeout(Duration::from_secs(WEBHOOK_TIMEOUT))
            .build()
        {
            Ok(client) => Ok(Notifier::with_client(client, phrases)),
            Err(e) => Err(Error::new(ErrorKind::Other, e)),
        }
    }

    pub fn with_client(client: Client, phrases: Phrases) -> Notifier {
        Notifier { client, phrases }
    }

    /**
     * Reports that `cert` expires in `days` days.
     * With no webhook configured, a warning is logged locally and `LocalWarning` is returned.
     * Otherwise one POST with `{"text": <alert>}` is sent to `webhook_url`. Transport errors and
     *     non-2xx responses are logged and returned as `Failed`, they are never retried.
     */
    pub fn notify(&self, webhook_url: &str, cert: &CertificateEntry, days: i64) -> Notification {
        if webhook_url.is_empty() {
            let warning = self.phrases.cert_expiring(&cert.name, days);
            warn!("{}", warning);

            return Notification::LocalWarning(warning);
        }

        let payload = AlertPayload {
            text: self.phrases.cert_alert(&cert.name, days, &cert.expiry_date),
        };

        match self
            .client
            .post(webhook_url)
            .json(&payload)
            .send()
            .and_then(|response| response.error_for_status())
        {
            Ok(_) => {
                info!("Notification sent for certificate: {}", &cert.name);
                Notification::Delivered
            }
            Err(e) => {
                let message = self.phrases.webhook_error(&e.to_string());
                error!("{}", message);

                Notification::Failed(message)
            }
        }
    }
}
