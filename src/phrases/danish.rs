use super::Phrases;

pub const DANISH: Phrases = Phrases {
    menu_title: "=== CertCheckr Menu ===",
    add_cert: "1. Tilføj nyt certifikat",
    list_certs: "2. Vis certifikater",
    set_webhook: "3. Indstil webhook URL",
    set_days: "4. Indstil antal dage til udløb",
    exit: "5. Afslut",
    enter_choice: "\nIndtast dit valg (1-5): ",
    cert_name: "Indtast certifikat navn: ",
    expiry_date: "Indtast udløbsdato (ÅÅÅÅ-MM-DD): ",
    cert_added: "Certifikat tilføjet!",
    invalid_date: "Ugyldig datoformat. Brug ÅÅÅÅ-MM-DD",
    no_certs: "Ingen certifikater konfigureret.",
    certs_header: "\nKonfigurerede certifikater:",
    cert_line: "- {name} (Udløber: {date})",
    webhook_url: "Indtast webhook URL: ",
    webhook_updated: "Webhook URL opdateret!",
    invalid_webhook: "Ugyldigt webhook URL format",
    days_prompt: "Indtast antal dage før udløb for at notificere: ",
    days_updated: "Antal dage opdateret!",
    invalid_number: "Indtast venligst et gyldigt nummer.",
    positive_number: "Indtast venligst et positivt nummer.",
    goodbye: "Farvel!",
    invalid_choice: "Ugyldigt valg. Prøv igen.",
    cert_expiring: "Advarsel: Certifikat {name} udløber om {days} dage",
    webhook_error: "Fejl ved afsendelse af notifikation: {error}",
    cert_alert: "⚠️ Certifikat Advarsel\nCertifikat: {name}\nUdløber om: {days} dage\nUdløbsdato: {date}",
};
