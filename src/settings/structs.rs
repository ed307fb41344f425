pub const DEFAULT_NOTIFICATION_DAYS: i64 = 7;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub webhook_url: String,
    pub notification_days: i64,
    pub certificates: Vec<CertificateEntry>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CertificateEntry {
    pub name: String,
    pub expiry_date: String, // YYYY-MM-DD
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_date: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            webhook_url: String::new(),
            notification_days: DEFAULT_NOTIFICATION_DAYS,
            certificates: vec![],
        }
    }
}
