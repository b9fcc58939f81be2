mod common;

use axum::http::StatusCode;
use gait_daily::config::AppConfig;
use gait_daily::pages::landing::FEATURES;
use gait_daily::pages::layout::MENU_ITEMS;

use common::{body_string, get, header, test_app};

#[tokio::test]
async fn landing_page_renders_everything() {
    let router = test_app(AppConfig::default());
    let resp = get(&router, "/").await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(header(&resp, "content-type").unwrap().starts_with("text/html"));

    let html = body_string(resp).await;
    assert!(html.contains("<title>Gait Daily</title>"));
    assert!(html.contains("Welcome to Gait Daily"));
    for feature in FEATURES.iter() {
        assert!(html.contains(feature.title), "missing card {}", feature.title);
    }
    for item in MENU_ITEMS {
        assert!(html.contains(item), "missing menu item {}", item);
    }
    assert!(html.contains(r#"<link rel="icon" type="image/svg+xml" href="/api/icon?size=32">"#));
}

#[tokio::test]
async fn health_check_answers_ok() {
    let router = test_app(AppConfig::default());
    let resp = get(&router, "/api/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_string(resp).await, "OK");
}

#[tokio::test]
async fn manifest_is_served_as_web_manifest() {
    let router = test_app(AppConfig::default());
    let resp = get(&router, "/manifest.webmanifest").await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(header(&resp, "content-type"), Some("application/manifest+json"));

    let json: serde_json::Value = serde_json::from_str(&body_string(resp).await).unwrap();
    assert_eq!(json["short_name"], "Gait");
    assert_eq!(json["start_url"], "/");
    assert_eq!(json["background_color"], "#000000");
    let srcs: Vec<&str> = json["icons"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|icon| icon["src"].as_str())
        .collect();
    assert!(srcs.contains(&"/api/icon?size=192"));
    assert!(srcs.contains(&"/api/icon?size=512"));
}

#[tokio::test]
async fn service_worker_headers() {
    let router = test_app(AppConfig::default());
    let resp = get(&router, "/sw.js").await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(header(&resp, "content-type").unwrap().starts_with("application/javascript"));
    assert_eq!(header(&resp, "service-worker-allowed"), Some("/"));
    assert_eq!(header(&resp, "cache-control"), Some("no-cache"));
    assert!(body_string(resp).await.contains("gait-daily-v1"));
}

#[tokio::test]
async fn static_icons_come_from_the_configured_directory() {
    let dir = std::env::temp_dir().join(format!("gait-daily-icons-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("icon-192x192.png"), b"not really a png").unwrap();

    let mut config = AppConfig::default();
    config.static_dir = dir.clone();
    let router = test_app(config);

    let found = get(&router, "/icons/icon-192x192.png").await;
    assert_eq!(found.status(), StatusCode::OK);
    assert_eq!(header(&found, "content-type"), Some("image/png"));
    assert_eq!(body_string(found).await, "not really a png");

    let missing = get(&router, "/icons/icon-512x512.png").await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    std::fs::remove_dir_all(&dir).ok();
}
