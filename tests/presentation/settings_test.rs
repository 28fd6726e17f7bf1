use precis::domain::{DEFAULT_API_VERSION, DEFAULT_DEPLOYMENT, DEFAULT_ENDPOINT};
use precis::presentation::config::{Environment, HistoryBackend, Settings};

#[test]
fn given_no_overrides_when_loading_test_settings_then_defaults_apply() {
    let settings = Settings::load(Environment::Test).unwrap();

    assert_eq!(settings.server.port, 3000);
    assert_eq!(settings.server.max_upload_size_mb, 25);
    assert_eq!(settings.azure_openai.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(settings.azure_openai.deployment_name, DEFAULT_DEPLOYMENT);
    assert_eq!(settings.azure_openai.api_version, DEFAULT_API_VERSION);
    assert_eq!(settings.generation.max_tokens, 500);
    assert_eq!(settings.history.backend, HistoryBackend::File);
    assert!(settings.extraction.pdf.enabled);
    assert_eq!(settings.extraction.image.max_file_size_mb, 20);
    assert!(!settings.logging.enable_json);
}

#[test]
fn given_environment_names_when_parsing_then_known_values_are_accepted() {
    assert_eq!(
        Environment::try_from("Production".to_string()),
        Ok(Environment::Prod)
    );
    assert_eq!(
        Environment::try_from(" local ".to_string()),
        Ok(Environment::Local)
    );
    assert!(Environment::try_from("staging".to_string()).is_err());
}
