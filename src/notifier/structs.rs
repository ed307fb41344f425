/// Body of the webhook POST.
#[derive(Serialize, Debug)]
pub struct AlertPayload {
    pub text: String,
}

/// What happened to a single certificate alert.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    LocalWarning(String),
    Delivered,
    Failed(String),
}
