use std::fs;
use tracing::info;

// Adds automatic logging to tests
mod test_utils {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub async fn create_mock_server() -> MockServer {
        MockServer::start().await
    }

    pub async fn mount_endpoint(server: &MockServer, endpoint: &str, mock_response: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/{endpoint}")))
            .respond_with(ResponseTemplate::new(200).set_body_string(mock_response))
            .mount(server)
            .await;
    }

    pub fn write_config(server_uri: &str) -> tempfile::NamedTempFile {
        let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        let config_content = format!(
            r#"
            api:
              base_url: "{server_uri}"
              api_key: "TESTKEY"
            target_currency: "BRL"
        "#
        );
        std::fs::write(config_file.path(), &config_content).expect("Failed to write config file");
        config_file
    }
}

#[test_log::test(tokio::test)]
async fn test_rate_command_with_mock() {
    let mock_server = test_utils::create_mock_server().await;
    test_utils::mount_endpoint(
        &mock_server,
        "currentExchangeRate",
        r#"{
            "success": true,
            "exchangeRate": 5.4321,
            "lastUpdatedAt": "2024-06-01T12:30:00Z"
        }"#,
    )
    .await;

    let config_file = test_utils::write_config(&mock_server.uri());
    info!("Running rate command against mock server");

    let result = brlx::run_command(
        brlx::AppCommand::Rate {
            code: "usd".to_string(),
        },
        Some(config_file.path().to_str().unwrap()),
    )
    .await;
    assert!(result.is_ok(), "Rate command failed with: {:?}", result.err());
}

#[test_log::test(tokio::test)]
async fn test_rate_command_upstream_failure_is_not_fatal() {
    let mock_server = test_utils::create_mock_server().await;
    test_utils::mount_endpoint(&mock_server, "currentExchangeRate", r#"{"success": false}"#).await;

    let config_file = test_utils::write_config(&mock_server.uri());

    // Lookup failures surface as messages, never as process failures.
    let result = brlx::run_command(
        brlx::AppCommand::Rate {
            code: "usd".to_string(),
        },
        Some(config_file.path().to_str().unwrap()),
    )
    .await;
    assert!(result.is_ok(), "Rate command failed with: {:?}", result.err());
}

#[test_log::test(tokio::test)]
async fn test_history_command_with_mock() {
    let mock_server = test_utils::create_mock_server().await;
    test_utils::mount_endpoint(
        &mock_server,
        "currentExchangeRate",
        r#"{"success": true, "exchangeRate": 5.00}"#,
    )
    .await;
    test_utils::mount_endpoint(
        &mock_server,
        "dailyExchangeRate",
        r#"{
            "success": true,
            "data": [
                {"date": "2024-01-02", "open": 5.05, "high": 5.15, "low": 5.00, "close": 5.10},
                {"date": "2024-01-01", "open": 4.95, "high": 5.05, "low": 4.90, "close": 5.00}
            ]
        }"#,
    )
    .await;

    let config_file = test_utils::write_config(&mock_server.uri());
    info!("Running history command against mock server");

    let result = brlx::run_command(
        brlx::AppCommand::History {
            code: "usd".to_string(),
            days: 30,
        },
        Some(config_file.path().to_str().unwrap()),
    )
    .await;
    assert!(
        result.is_ok(),
        "History command failed with: {:?}",
        result.err()
    );
}

#[test_log::test(tokio::test)]
async fn test_history_command_with_empty_history() {
    let mock_server = test_utils::create_mock_server().await;
    test_utils::mount_endpoint(
        &mock_server,
        "currentExchangeRate",
        r#"{"success": true, "exchangeRate": 5.00}"#,
    )
    .await;
    test_utils::mount_endpoint(&mock_server, "dailyExchangeRate", "[]").await;

    let config_file = test_utils::write_config(&mock_server.uri());

    let result = brlx::run_command(
        brlx::AppCommand::History {
            code: "usd".to_string(),
            days: 30,
        },
        Some(config_file.path().to_str().unwrap()),
    )
    .await;
    assert!(
        result.is_ok(),
        "History command failed with: {:?}",
        result.err()
    );
}

#[test_log::test(tokio::test)]
async fn test_missing_config_file_is_an_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let missing = dir.path().join("nope.yaml");

    let result = brlx::run_command(
        brlx::AppCommand::Rate {
            code: "usd".to_string(),
        },
        Some(missing.to_str().unwrap()),
    )
    .await;
    assert!(result.is_err());
}

#[test_log::test(tokio::test)]
async fn test_invalid_config_file_is_an_error() {
    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    fs::write(config_file.path(), "api: [not, a, map]\n").expect("Failed to write config file");

    let result = brlx::run_command(
        brlx::AppCommand::Rate {
            code: "usd".to_string(),
        },
        Some(config_file.path().to_str().unwrap()),
    )
    .await;
    assert!(result.is_err());
}
