use super::Phrases;

pub const ENGLISH: Phrases = Phrases {
    menu_title: "=== CertCheckr Menu ===",
    add_cert: "1. Add new certificate",
    list_certs: "2. List certificates",
    set_webhook: "3. Set webhook URL",
    set_days: "4. Set notification days",
    exit: "5. Exit",
    enter_choice: "\nEnter your choice (1-5): ",
    cert_name: "Enter certificate name: ",
    expiry_date: "Enter expiry date (YYYY-MM-DD): ",
    cert_added: "Certificate added successfully!",
    invalid_date: "Invalid date format. Please use YYYY-MM-DD",
    no_certs: "No certificates configured.",
    certs_header: "\nConfigured Certificates:",
    cert_line: "- {name} (Expires: {date})",
    webhook_url: "Enter webhook URL: ",
    webhook_updated: "Webhook URL updated!",
    invalid_webhook: "Invalid webhook URL format",
    days_prompt: "Enter number of days before expiry to notify: ",
    days_updated: "Notification days updated!",
    invalid_number: "Please enter a valid number.",
    positive_number: "Please enter a positive number.",
    goodbye: "Goodbye!",
    invalid_choice: "Invalid choice. Please try again.",
    cert_expiring: "Warning: Certificate {name} expires in {days} days",
    webhook_error: "Error sending notification: {error}",
    cert_alert: "⚠️ Certificate Alert\nCertificate: {name}\nExpires in: {days} days\nExpiry date: {date}",
};
