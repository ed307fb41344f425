use chrono::{Local, NaiveDate, ParseResult};

use crate::notifier::structs::Notification;
use crate::notifier::Notifier;
use crate::settings::certificates::parse_expiry_date;
use crate::settings::structs::{CertificateEntry, Settings};

/// Today's date on the local calendar.
pub fn today() -> NaiveDate {
    Local::now().naive_local().date()
}

/**
 * Whole calendar days from `today` until the certificate's expiry date.
 * Negative when the date has already passed.
 */
pub fn days_until_expiry(expiry_date: &str, today: NaiveDate) -> ParseResult<i64> {
    let expiry = parse_expiry_date(expiry_date)?;

    Ok(expiry.signed_duration_since(today).num_days())
}

/// Due means inside `(0, notification_days]`.
pub fn is_due(days_until_expiry: i64, notification_days: i64) -> bool {
    0 < days_until_expiry && days_until_expiry <= notification_days
}

/**
 * Collects every certificate that is due on `today`, paired with its days until expiry.
 * An entry with an unparsable date is logged and skipped, the rest are still evaluated.
 */
pub fn due_certificates(settings: &Settings, today: NaiveDate) -> Vec<(&CertificateEntry, i64)> {
    let mut due = Vec::new();

    for cert in &settings.certificates {
        match days_until_expiry(&cert.expiry_date, today) {
            Ok(days) => {
                if is_due(days, settings.notification_days) {
                    due.push((cert, days));
                } else {
                    debug!("{} expires in {} days, not due.", &cert.name, days);
                }
            }
            Err(e) => error!(
                "Error checking certificate {}: invalid expiry date '{}'. {}",
                &cert.name, &cert.expiry_date, e
            ),
        }
    }

    due
}

/**
 * Sends a notification for every due certificate.
 * Nothing remembers earlier runs, so a certificate inside the window is reported on every call.
 */
pub fn check_certificates(
    settings: &Settings,
    notifier: &Notifier,
    today: NaiveDate,
) -> Vec<Notification> {
    due_certificates(settings, today)
        .into_iter()
        .map(|(cert, days)| notifier.notify(&settings.webhook_url, cert, days))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifier::tests::{serve_once, test_notifier};
    use chrono::Duration;

    fn day(date: &str) -> NaiveDate {
        parse_expiry_date(date).unwrap()
    }

    fn cert_in(name: &str, today: NaiveDate, days: i64) -> CertificateEntry {
        CertificateEntry {
            name: name.to_owned(),
            expiry_date: (today + Duration::days(days)).format("%Y-%m-%d").to_string(),
            ..CertificateEntry::default()
        }
    }

    #[test]
    fn days_are_counted_on_the_calendar() {
        assert_eq!(days_until_expiry("2030-01-06", day("2030-01-01")).unwrap(), 5);
        assert_eq!(days_until_expiry("2030-03-01", day("2030-02-28")).unwrap(), 1);
        assert_eq!(days_until_expiry("2029-12-31", day("2030-01-01")).unwrap(), -1);
        assert!(days_until_expiry("tomorrow", day("2030-01-01")).is_err());
    }

    #[test]
    fn due_window_boundaries() {
        assert!(is_due(7, 7));
        assert!(is_due(1, 7));
        assert!(!is_due(8, 7));
        assert!(!is_due(0, 7));
        assert!(!is_due(-3, 7));
    }

    #[test]
    fn only_certificates_inside_the_window_are_due() {
        let today = day("2030-01-01");
        let settings = Settings {
            certificates: vec![
                cert_in("expired.example.com", today, -2),
                cert_in("today.example.com", today, 0),
                cert_in("edge.example.com", today, 7),
                cert_in("outside.example.com", today, 8),
                cert_in("db.example.com", today, 30),
            ],
            ..Settings::default()
        };

        let due = due_certificates(&settings, today);

        assert_eq!(due.len(), 1);
        assert_eq!(due[0].0.name, "edge.example.com");
        assert_eq!(due[0].1, 7);
    }

    #[test]
    fn malformed_date_does_not_stop_the_batch() {
        let today = day("2030-01-01");
        let mut broken = cert_in("broken.example.com", today, 1);
        broken.expiry_date = "01/03/2030".to_owned();

        let settings = Settings {
            certificates: vec![broken, cert_in("api.example.com", today, 3)],
            ..Settings::default()
        };

        let due = due_certificates(&settings, today);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].0.name, "api.example.com");
    }

    #[test]
    fn due_certificate_without_webhook_warns_locally() {
        let today = day("2030-01-01");
        let settings = Settings {
            certificates: vec![cert_in("api.example.com", today, 5)],
            ..Settings::default()
        };

        let outcomes = check_certificates(&settings, &test_notifier(), today);

        assert_eq!(outcomes.len(), 1);
        match &outcomes[0] {
            Notification::LocalWarning(warning) => {
                assert!(warning.contains("api.example.com"));
                assert!(warning.contains('5'));
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn far_away_certificate_sends_nothing() {
        let today = day("2030-01-01");
        let settings = Settings {
            certificates: vec![cert_in("db.example.com", today, 30)],
            ..Settings::default()
        };

        assert!(check_certificates(&settings, &test_notifier(), today).is_empty());
    }

    #[test]
    fn failing_webhook_does_not_abort_the_run() {
        let today = day("2030-01-01");
        let (url, server) = serve_once("500 Internal Server Error");
        let settings = Settings {
            webhook_url: url,
            certificates: vec![cert_in("db.example.com", today, 5)],
            ..Settings::default()
        };

        let outcomes = check_certificates(&settings, &test_notifier(), today);
        let body = server.join().unwrap();

        assert_eq!(outcomes.len(), 1);
        assert!(matches!(outcomes[0], Notification::Failed(_)));
        assert!(body.contains("db.example.com"));
        assert!(body.contains("2030-01-06"));
    }

    #[test]
    fn repeated_checks_notify_again() {
        let today = day("2030-01-01");
        let settings = Settings {
            certificates: vec![cert_in("api.example.com", today, 2)],
            ..Settings::default()
        };
        let notifier = test_notifier();

        let first = check_certificates(&settings, &notifier, today);
        let second = check_certificates(&settings, &notifier, today);

        assert_eq!(first.len(), 1);
        assert_eq!(first, second);
    }
}
