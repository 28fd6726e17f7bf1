use precis::domain::{ConfigurationError, EndpointConfig, EndpointConfigUpdate};

fn valid_config() -> EndpointConfig {
    EndpointConfig {
        endpoint: "contoso.openai.azure.com".to_string(),
        api_key: "0123456789a".to_string(),
        deployment_name: "gpt-4o".to_string(),
        api_version: "2024-02-15-preview".to_string(),
    }
}

#[test]
fn given_default_config_when_validating_then_api_key_is_missing() {
    let config = EndpointConfig::default();

    assert_eq!(config.validate(), Err(ConfigurationError::MissingApiKey));
    assert!(!config.is_valid());
}

#[test]
fn given_eleven_character_key_when_validating_then_valid() {
    assert!(valid_config().is_valid());
}

#[test]
fn given_ten_character_key_when_validating_then_invalid_api_key() {
    let config = EndpointConfig {
        api_key: "0123456789".to_string(),
        ..valid_config()
    };

    assert_eq!(config.validate(), Err(ConfigurationError::InvalidApiKey));
}

#[test]
fn given_placeholder_endpoint_when_validating_then_rejected() {
    let config = EndpointConfig {
        endpoint: "https://your-endpoint.openai.azure.com".to_string(),
        ..valid_config()
    };

    assert_eq!(config.validate(), Err(ConfigurationError::PlaceholderEndpoint));
}

#[test]
fn given_placeholder_or_empty_deployment_when_validating_then_rejected() {
    let placeholder = EndpointConfig {
        deployment_name: "your-deployment-name".to_string(),
        ..valid_config()
    };
    let empty = EndpointConfig {
        deployment_name: "  ".to_string(),
        ..valid_config()
    };

    assert_eq!(
        placeholder.validate(),
        Err(ConfigurationError::PlaceholderDeployment)
    );
    assert_eq!(empty.validate(), Err(ConfigurationError::PlaceholderDeployment));
}

#[test]
fn given_partial_update_when_applying_then_only_non_blank_fields_change() {
    let mut config = valid_config();

    config.apply(EndpointConfigUpdate {
        endpoint: Some("  https://fabrikam.openai.azure.com  ".to_string()),
        api_key: Some("   ".to_string()),
        deployment_name: None,
        api_version: Some(String::new()),
    });

    assert_eq!(config.endpoint, "https://fabrikam.openai.azure.com");
    assert_eq!(config.api_key, "0123456789a");
    assert_eq!(config.deployment_name, "gpt-4o");
    assert_eq!(config.api_version, "2024-02-15-preview");
}

#[test]
fn given_bare_host_with_trailing_slash_when_building_url_then_https_is_added() {
    let config = EndpointConfig {
        endpoint: "contoso.openai.azure.com/".to_string(),
        ..valid_config()
    };

    assert_eq!(config.base_url(), "https://contoso.openai.azure.com");
    assert_eq!(
        config.chat_completions_url(),
        "https://contoso.openai.azure.com/openai/deployments/gpt-4o/chat/completions?api-version=2024-02-15-preview"
    );
}

#[test]
fn given_explicit_http_scheme_when_building_url_then_scheme_is_kept() {
    let config = EndpointConfig {
        endpoint: "http://127.0.0.1:8080".to_string(),
        ..valid_config()
    };

    assert_eq!(config.base_url(), "http://127.0.0.1:8080");
}

#[test]
fn given_config_with_key_when_debug_formatting_then_key_is_redacted() {
    let rendered = format!("{:?}", valid_config());

    assert!(!rendered.contains("0123456789a"));
    assert!(rendered.contains("[REDACTED]"));
}
