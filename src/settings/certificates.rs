use std::env;
use std::io::{Error, ErrorKind};

use chrono::{Local, NaiveDate, ParseResult};

use super::structs::CertificateEntry;
use super::Store;

pub const EXPIRY_DATE_FORMAT: &str = "%Y-%m-%d";
const EXPIRY_DATE_LENGTH: usize = 10;
const ADDED_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/**
 * Parses an expiry date in `YYYY-MM-DD` form.
 */
pub fn parse_expiry_date(expiry_date: &str) -> ParseResult<NaiveDate> {
    NaiveDate::parse_from_str(expiry_date, EXPIRY_DATE_FORMAT)
}

/**
 * Like `parse_expiry_date`, but only exactly ten characters are accepted.
 * chrono's `%Y` takes years with more than four digits, ex. `20300-01-01`.
 */
pub fn validate_expiry_date(expiry_date: &str) -> Result<NaiveDate, Error> {
    if expiry_date.len() != EXPIRY_DATE_LENGTH {
        return Err(Error::new(
            ErrorKind::InvalidInput,
            format!("Invalid expiry date '{}'. Expected YYYY-MM-DD.", expiry_date),
        ));
    }

    parse_expiry_date(expiry_date).map_err(|e| {
        Error::new(
            ErrorKind::InvalidInput,
            format!("Invalid expiry date '{}'. {}", expiry_date, e),
        )
    })
}

impl Store {
    /**
     * Appends a certificate to the list and saves the settings.
     * The expiry date has to be a real calendar date in `YYYY-MM-DD` form, otherwise an
     *     `InvalidInput` error is returned and nothing is changed.
     * The entry is stamped with the current user (`USER`) and the local time it was added.
     */
    pub fn add_certificate(&mut self, name: &str, expiry_date: &str) -> Result<(), Error> {
        validate_expiry_date(expiry_date)?;

        self.settings.certificates.push(CertificateEntry {
            name: name.to_owned(),
            expiry_date: expiry_date.to_owned(),
            added_by: Some(env::var("USER").unwrap_or_else(|_| String::from("unknown"))),
            added_date: Some(Local::now().format(ADDED_DATE_FORMAT).to_string()),
        });

        info!("Added certificate: {} (expires: {})", name, expiry_date);

        self.persist();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn added_certificate_survives_reload() {
        let dir = TempDir::new().unwrap();
        let location = dir.path().join("config.json");

        let mut store = Store::init(location.clone());
        store.add_certificate("api.example.com", "2030-02-28").unwrap();
        store.add_certificate("db.example.com", "2028-02-29").unwrap();

        let reloaded = Store::init(location);
        let certs = &reloaded.settings().certificates;
        assert_eq!(certs.len(), 2);
        assert_eq!(certs[0].name, "api.example.com");
        assert_eq!(certs[0].expiry_date, "2030-02-28");
        assert_eq!(certs[1].expiry_date, "2028-02-29");
        assert!(certs[0].added_by.is_some());
        assert!(certs[0].added_date.is_some());
    }

    #[test]
    fn duplicate_names_are_allowed() {
        let dir = TempDir::new().unwrap();
        let mut store = Store::init(dir.path().join("config.json"));

        store.add_certificate("api.example.com", "2030-01-01").unwrap();
        store.add_certificate("api.example.com", "2031-01-01").unwrap();

        assert_eq!(store.settings().certificates.len(), 2);
    }

    #[test]
    fn invalid_dates_are_rejected() {
        let dir = TempDir::new().unwrap();
        let location = dir.path().join("config.json");
        let mut store = Store::init(location.clone());
        store.add_certificate("keep.example.com", "2030-01-01").unwrap();

        let dates = [
            "",
            "not-a-date",
            "2030-13-01",
            "2030-02-30",
            "2029-02-29",
            "01-01-2030",
            "2030/01/01",
            "20300-01-01",
            "2030-1-5",
            "+2030-01-01",
        ];
        for date in &dates {
            let err = store.add_certificate("bad.example.com", date).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInput);
        }

        assert_eq!(store.settings().certificates.len(), 1);
        assert_eq!(Store::init(location).settings().certificates.len(), 1);
    }

    #[test]
    fn failed_save_keeps_the_change_in_memory() {
        let blocker = NamedTempFile::new().unwrap();
        let location = blocker.path().join("config.json");

        let mut store = Store::init(location.clone());
        assert!(store
            .add_certificate("api.example.com", "2030-01-06")
            .is_ok());

        assert_eq!(store.settings().certificates.len(), 1);
        assert_eq!(store.settings().certificates[0].name, "api.example.com");
        assert!(!location.exists());
    }
}
