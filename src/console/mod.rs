use std::io::{BufRead, Error, ErrorKind, Write};
use std::str::FromStr;

use strum_macros::EnumString;

use crate::phrases::Phrases;
use crate::settings::Store;

#[derive(Debug, PartialEq, EnumString)]
enum MenuChoice {
    #[strum(serialize = "1")]
    AddCertificate,
    #[strum(serialize = "2")]
    ListCertificates,
    #[strum(serialize = "3")]
    SetWebhook,
    #[strum(serialize = "4")]
    SetDays,
    #[strum(serialize = "5")]
    Exit,
}

/**
 * Interactive menu on top of the settings store.
 * Reads answers line by line from `input` and writes prompts to `output`.
 */
pub struct Console<'a, R, W> {
    store: &'a mut Store,
    phrases: Phrases,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    pub fn new(store: &'a mut Store, phrases: Phrases, input: R, output: W) -> Self {
        Console {
            store,
            phrases,
            input,
            output,
        }
    }

    /**
     * Shows the menu until the exit choice is picked or the input is closed.
     * Only terminal I/O errors are returned.
     */
    pub fn run(&mut self) -> Result<(), Error> {
        loop {
            match self.step() {
                Ok(true) => {}
                Ok(false) => return Ok(()),
                Err(ref e) if e.kind() == ErrorKind::UnexpectedEof => {
                    info!("Input closed, leaving the menu.");
                    writeln!(self.output, "\n{}", self.phrases.goodbye)?;
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// One round of the menu. Returns `false` when the operator chose to exit.
    fn step(&mut self) -> Result<bool, Error> {
        self.show_menu()?;

        let choice = self.prompt(self.phrases.enter_choice)?;

        match MenuChoice::from_str(&choice) {
            Ok(MenuChoice::AddCertificate) => self.add_certificate()?,
            Ok(MenuChoice::ListCertificates) => self.list_certificates()?,
            Ok(MenuChoice::SetWebhook) => self.set_webhook()?,
            Ok(MenuChoice::SetDays) => self.set_days()?,
            Ok(MenuChoice::Exit) => {
                writeln!(self.output, "{}", self.phrases.goodbye)?;
                return Ok(false);
            }
            Err(_) => writeln!(self.output, "{}", self.phrases.invalid_choice)?,
        }

        Ok(true)
    }

    fn show_menu(&mut self) -> Result<(), Error> {
        let phrases = self.phrases;

        writeln!(self.output, "\n{}", phrases.menu_title)?;
        for entry in &[
            phrases.add_cert,
            phrases.list_certs,
            phrases.set_webhook,
            phrases.set_days,
            phrases.exit,
        ] {
            writeln!(self.output, "{}", entry)?;
        }

        Ok(())
    }

    /**
     * Prints `text` and reads one trimmed line. A closed input is `UnexpectedEof`.
     * Bytes that aren't valid UTF-8 are replaced, so a garbled line is just a bad answer.
     */
    fn prompt(&mut self, text: &str) -> Result<String, Error> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(Error::new(ErrorKind::UnexpectedEof, "Console input closed."));
        }

        Ok(String::from_utf8_lossy(&line).trim().to_owned())
    }

    fn add_certificate(&mut self) -> Result<(), Error> {
        let name = self.prompt(self.phrases.cert_name)?;
        let expiry_date = self.prompt(self.phrases.expiry_date)?;

        match self.store.add_certificate(&name, &expiry_date) {
            Ok(()) => writeln!(self.output, "{}", self.phrases.cert_added),
            Err(e) => {
                debug!("{}", e);
                writeln!(self.output, "{}", self.phrases.invalid_date)
            }
        }
    }

    fn list_certificates(&mut self) -> Result<(), Error> {
        let phrases = self.phrases;
        let certificates = &self.store.settings().certificates;

        if certificates.is_empty() {
            return writeln!(self.output, "{}", phrases.no_certs);
        }

        writeln!(self.output, "{}", phrases.certs_header)?;
        for cert in certificates {
            writeln!(
                self.output,
                "{}",
                phrases.cert_line(&cert.name, &cert.expiry_date)
            )?;
        }

        Ok(())
    }

    fn set_webhook(&mut self) -> Result<(), Error> {
        let url = self.prompt(self.phrases.webhook_url)?;

        match self.store.set_webhook_url(&url) {
            Ok(()) => writeln!(self.output, "{}", self.phrases.webhook_updated),
            Err(e) => {
                debug!("{}", e);
                writeln!(self.output, "{}", self.phrases.invalid_webhook)
            }
        }
    }

    fn set_days(&mut self) -> Result<(), Error> {
        let days = self.prompt(self.phrases.days_prompt)?;

        match self.store.set_notification_days(&days) {
            Ok(()) => writeln!(self.output, "{}", self.phrases.days_updated),
            Err(ref e) if e.kind() == ErrorKind::InvalidData => {
                writeln!(self.output, "{}", self.phrases.invalid_number)
            }
            Err(e) => {
                debug!("{}", e);
                writeln!(self.output, "{}", self.phrases.positive_number)
            }
        }
    }
}
