//! The command surface end to end, against a runtime in a temp data dir.

use aim_shell::commands::{self, dto::RouteDto};
use aim_shell::{create_runtime, AppRuntime, RuntimeOptions};
use tempfile::TempDir;

async fn runtime_in(dir: &TempDir) -> AppRuntime {
    // Plaintext keeps the test fast; hashing is covered in aim-infra.
    let config_path = dir.path().join("config.toml");
    std::fs::write(&config_path, "[security]\npassword_storage = \"plaintext\"\n").unwrap();
    create_runtime(RuntimeOptions {
        config_path: Some(config_path),
        data_dir: Some(dir.path().to_path_buf()),
    })
    .await
    .unwrap()
}

async fn fill_form(runtime: &AppRuntime) {
    for (field, value) in [
        ("id", "user0001"),
        ("password", "Abcdefg12!"),
        ("passwordConfirm", "Abcdefg12!"),
        ("email", "a@b.com"),
        ("phone", "01012345678"),
    ] {
        commands::field_changed(runtime, field, value.to_string())
            .await
            .unwrap();
    }
}

fn route(dto: &RouteDto) -> &'static str {
    dto.route
}

#[tokio::test]
async fn unknown_field_is_rejected_without_touching_state() {
    let dir = tempfile::tempdir().unwrap();
    let runtime = runtime_in(&dir).await;

    commands::field_changed(&runtime, "id", "short".to_string())
        .await
        .unwrap();
    let before = commands::form_state(&runtime).await;

    let err = commands::field_changed(&runtime, "nickname", "x".to_string())
        .await
        .unwrap_err();
    assert_eq!(err.code, "unknown_field");
    assert_eq!(commands::form_state(&runtime).await, before);

    let err = commands::field_focus_lost(&runtime, "nickname").await.unwrap_err();
    assert_eq!(err.code, "unknown_field");
}

#[tokio::test]
async fn invalid_form_cannot_be_submitted() {
    let dir = tempfile::tempdir().unwrap();
    let runtime = runtime_in(&dir).await;

    let err = commands::submit_login(&runtime).await.unwrap_err();
    assert_eq!(err.code, "invalid_form");
    assert_eq!(route(&commands::current_route(&runtime).await), "login");
}

#[tokio::test]
async fn full_session_walkthrough() {
    let dir = tempfile::tempdir().unwrap();
    let runtime = runtime_in(&dir).await;

    let status = commands::session_status(&runtime).await;
    assert!(!status.logged_in);

    let err = commands::open_etf_detail(&runtime).await.unwrap_err();
    assert_eq!(err.code, "navigation_unavailable");

    fill_form(&runtime).await;
    let state = commands::field_focus_lost(&runtime, "phone").await.unwrap();
    assert!(state.is_valid);

    let dto = commands::submit_login(&runtime).await.unwrap();
    assert_eq!(dto.route, "dashboard");
    assert_eq!(dto.tab, Some("allocation"));
    assert!(!dto.can_go_back);

    let dashboard = commands::get_dashboard(&runtime).await.unwrap();
    assert_eq!(dashboard.groups.len(), 3);
    assert_eq!(dashboard.segments[0].start_angle, -90.0);
    assert!(dashboard.tabs.iter().any(|t| t.selected && t.route == "allocation"));

    let dto = commands::select_tab(&runtime, "trend").await.unwrap();
    assert_eq!(dto.tab, Some("trend"));
    assert_eq!(
        commands::select_tab(&runtime, "settings").await.unwrap_err().code,
        "unknown_tab"
    );

    let dto = commands::open_etf_detail(&runtime).await.unwrap();
    assert_eq!(dto.route, "etf-detail");
    assert_eq!(commands::list_etfs(&runtime).await.unwrap().len(), 4);
    assert_eq!(route(&commands::go_back(&runtime).await), "dashboard");
    assert_eq!(route(&commands::go_back(&runtime).await), "dashboard");

    let dto = commands::logout(&runtime).await.unwrap();
    assert_eq!(dto.route, "login");
    assert!(!commands::form_state(&runtime).await.is_valid);

    runtime.shutdown().await;
}

#[tokio::test]
async fn saved_session_auto_logs_in_on_next_runtime() {
    let dir = tempfile::tempdir().unwrap();
    {
        let runtime = runtime_in(&dir).await;
        fill_form(&runtime).await;
        commands::submit_login(&runtime).await.unwrap();
        runtime.shutdown().await;
    }

    let runtime = runtime_in(&dir).await;
    let status = commands::session_status(&runtime).await;
    assert!(status.logged_in);
    assert_eq!(status.route.route, "dashboard");
}
