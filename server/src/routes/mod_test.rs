use axum::body::Body;
use axum::http::Request;
use http_body_util::BodyExt;
use tower::ServiceExt;

use super::*;

fn config_with(projects_path: Option<&Path>) -> ServerConfig {
    ServerConfig {
        host: crate::config::DEFAULT_HOST,
        port: crate::config::DEFAULT_PORT,
        projects_path: projects_path.map(Path::to_path_buf),
    }
}

/// GET `uri` and return the status with the body as text.
async fn get_text(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8_lossy(&body).into_owned())
}

// =============================================================
// projects_file
// =============================================================

#[test]
fn projects_file_defaults_to_site_root() {
    let path = projects_file(&config_with(None), Path::new("target/site"));
    assert_eq!(path, PathBuf::from("target/site/projects.json"));
}

#[test]
fn projects_file_prefers_configured_override() {
    let path = projects_file(&config_with(Some(Path::new("/srv/projects.json"))), Path::new("target/site"));
    assert_eq!(path, PathBuf::from("/srv/projects.json"));
}

// =============================================================
// data_routes
// =============================================================

#[tokio::test]
async fn healthz_returns_ok() {
    let site = tempfile::tempdir().unwrap();
    let app = data_routes(&config_with(None), site.path());
    let (status, _) = get_text(&app, "/healthz").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn projects_json_served_from_site_root() {
    let site = tempfile::tempdir().unwrap();
    std::fs::write(site.path().join("projects.json"), r#"[{"title":"Ledger"}]"#).unwrap();
    let app = data_routes(&config_with(None), site.path());

    let (status, body) = get_text(&app, "/projects.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"[{"title":"Ledger"}]"#);
}

#[tokio::test]
async fn projects_json_served_from_override() {
    let site = tempfile::tempdir().unwrap();
    std::fs::write(site.path().join("projects.json"), "[]").unwrap();
    let data = tempfile::tempdir().unwrap();
    let override_path = data.path().join("mine.json");
    std::fs::write(&override_path, r#"[{"title":"Override"}]"#).unwrap();
    let app = data_routes(&config_with(Some(&override_path)), site.path());

    let (status, body) = get_text(&app, "/projects.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"[{"title":"Override"}]"#);
}

#[tokio::test]
async fn missing_projects_json_is_not_found() {
    let site = tempfile::tempdir().unwrap();
    let app = data_routes(&config_with(None), site.path());
    let (status, _) = get_text(&app, "/projects.json").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
