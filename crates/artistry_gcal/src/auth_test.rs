#[cfg(test)]
mod tests {
    use crate::auth::create_calendar_hub;
    use crate::logic::GcalError;
    use artistry_config::GcalConfig;

    #[tokio::test]
    async fn missing_key_path_is_an_auth_error() {
        let config = GcalConfig::default();
        let result = create_calendar_hub(&config).await;
        assert!(matches!(result, Err(GcalError::Auth(msg)) if msg.contains("key_path")));
    }

    #[tokio::test]
    async fn unreadable_key_file_is_an_auth_error() {
        let config = GcalConfig {
            key_path: Some("/nonexistent/service-account.json".to_string()),
            ..GcalConfig::default()
        };
        let result = create_calendar_hub(&config).await;
        assert!(matches!(result, Err(GcalError::Auth(msg)) if msg.contains("/nonexistent")));
    }
}
