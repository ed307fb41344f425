use std::env;
use std::str::FromStr;

use strum_macros::{AsRefStr, EnumString};

mod danish;
mod english;

pub use danish::DANISH;
pub use english::ENGLISH;

/// Environment variable holding the language identifier, ex. "da" or "da_DK.UTF-8".
pub const LANGUAGE_VARIABLE: &str = "CERTCHECKR_LANG";

#[derive(Debug, Clone, Copy, PartialEq, EnumString, AsRefStr)]
pub enum Language {
    #[strum(serialize = "en")]
    English,
    #[strum(serialize = "da")]
    Danish,
}

/**
 * Every user-facing string. Placeholders `{name}`, `{days}`, `{date}` and `{error}` are
 *     filled in by the helper methods below.
 */
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Phrases {
    pub menu_title: &'static str,
    pub add_cert: &'static str,
    pub list_certs: &'static str,
    pub set_webhook: &'static str,
    pub set_days: &'static str,
    pub exit: &'static str,
    pub enter_choice: &'static str,
    pub cert_name: &'static str,
    pub expiry_date: &'static str,
    pub cert_added: &'static str,
    pub invalid_date: &'static str,
    pub no_certs: &'static str,
    pub certs_header: &'static str,
    pub cert_line: &'static str,
    pub webhook_url: &'static str,
    pub webhook_updated: &'static str,
    pub invalid_webhook: &'static str,
    pub days_prompt: &'static str,
    pub days_updated: &'static str,
    pub invalid_number: &'static str,
    pub positive_number: &'static str,
    pub goodbye: &'static str,
    pub invalid_choice: &'static str,
    pub cert_expiring: &'static str,
    pub webhook_error: &'static str,
    pub cert_alert: &'static str,
}

impl Default for Phrases {
    fn default() -> Self {
        ENGLISH
    }
}

impl Phrases {
    pub fn for_language(language: Language) -> Phrases {
        match language {
            Language::English => ENGLISH,
            Language::Danish => DANISH,
        }
    }

    /**
     * Picks the table for a language identifier. Only the part before any '_', '-' or '.'
     *     is looked at, case-insensitively. Unknown identifiers get the English table.
     */
    pub fn from_language_id(id: &str) -> Phrases {
        let code = id
            .trim()
            .split(|c: char| c == '_' || c == '-' || c == '.')
            .next()
            .unwrap_or_default()
            .to_lowercase();

        match Language::from_str(&code) {
            Ok(language) => {
                debug!("Using language '{}'.", language.as_ref());
                Phrases::for_language(language)
            }
            Err(_) => {
                warn!("Unsupported language '{}', falling back to English.", id);
                ENGLISH
            }
        }
    }

    /**
     * Reads `CERTCHECKR_LANG`. English is used if it isn't set.
     */
    pub fn from_env() -> Phrases {
        match env::var(LANGUAGE_VARIABLE) {
            Ok(id) => Phrases::from_language_id(&id),
            Err(_) => ENGLISH,
        }
    }

    pub fn cert_line(&self, name: &str, date: &str) -> String {
        self.cert_line.replace("{name}", name).replace("{date}", date)
    }

    pub fn cert_expiring(&self, name: &str, days: i64) -> String {
        self.cert_expiring
            .replace("{name}", name)
            .replace("{days}", &days.to_string())
    }

    pub fn webhook_error(&self, error: &str) -> String {
        self.webhook_error.replace("{error}", error)
    }

    pub fn cert_alert(&self, name: &str, days: i64, date: &str) -> String {
        self.cert_alert
            .replace("{name}", name)
            .replace("{days}", &days.to_string())
            .replace("{date}", date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_ids_resolve_to_tables() {
        assert_eq!(Phrases::from_language_id("en"), ENGLISH);
        assert_eq!(Phrases::from_language_id("da"), DANISH);
        assert_eq!(Phrases::from_language_id("DA"), DANISH);
        assert_eq!(Phrases::from_language_id("da_DK.UTF-8"), DANISH);
    }

    #[test]
    fn unknown_language_falls_back_to_english() {
        assert_eq!(Phrases::from_language_id("xx"), ENGLISH);
        assert_eq!(Phrases::from_language_id(""), ENGLISH);
        assert_eq!(Phrases::default(), ENGLISH);
    }

    #[test]
    fn alert_contains_all_fields() {
        let alert = ENGLISH.cert_alert("db.example.com", 5, "2030-01-06");

        assert!(alert.contains("db.example.com"));
        assert!(alert.contains("Expires in: 5 days"));
        assert!(alert.contains("2030-01-06"));
        assert!(!alert.contains('{'));

        let danish = DANISH.cert_alert("db.example.com", 5, "2030-01-06");
        assert!(danish.contains("Udløber om: 5 dage"));
    }

    #[test]
    fn every_template_is_filled() {
        for phrases in &[ENGLISH, DANISH] {
            assert!(!phrases.cert_expiring("a", 1).contains('{'));
            assert!(!phrases.webhook_error("boom").contains('{'));
            assert!(!phrases.cert_line("a", "2030-01-01").contains('{'));
        }
    }
}
