pub mod doc;
pub mod handlers;
/// Contact form checks and message composition.
pub mod logic;
pub mod routes;
/// SendGrid v3 `mail/send` client implementing `NotificationService`.
pub mod service;
