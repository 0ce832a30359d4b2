use menu_assistant::*;
use reqwest::Client;
use std::sync::Arc;

fn unreachable_config() -> AssistantConfig {
    // Port 9 (discard) on loopback is not expected to accept connections.
    AssistantConfig {
        base_url: "http://127.0.0.1:9/v1".to_string(),
        ..AssistantConfig::default()
    }
}

fn direct_service() -> OpenAiService {
    let client = Client::builder().no_proxy().build().unwrap();
    OpenAiService::with_client(&unreachable_config(), client)
}

#[tokio::test]
async fn connection_failure_is_transport_error() {
    let service = direct_service();
    let credential = Credential::new("sk-test").unwrap();

    let err = service.complete(&credential, "prompt").await.unwrap_err();
    assert!(matches!(err, CompletionError::Transport(_)));
}

#[tokio::test]
async fn shell_displays_transport_failure() {
    let service = Arc::new(direct_service());
    let mut shell = InteractionShell::new(QueryService::new(service));
    shell.submit_credential("sk-test");
    shell.upload_menu(br#"[{"dish_name": "Soup"}]"#);

    let notice = shell.ask("is the soup hot?").await.unwrap();
    match notice {
        Notice::Error(message) => assert!(message.starts_with("request to completion service failed")),
        other => panic!("expected error notice, got {other:?}"),
    }
}
