mod common;

use axum::http::{Method, StatusCode};
use gait_daily::config::AppConfig;
use gait_daily::utils::icon::{generate_icon_svg, IconSize};

use common::{body_string, get, header, send, test_app};

#[tokio::test]
async fn icon_512_end_to_end() {
    let router = test_app(AppConfig::default());
    let resp = get(&router, "/api/icon?size=512").await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(header(&resp, "content-type"), Some("image/svg+xml"));
    assert_eq!(header(&resp, "cache-control"), Some("public, max-age=31536000"));

    let body = body_string(resp).await;
    assert!(body.contains(r#"width="512" height="512""#));
    let doc = roxmltree::Document::parse(&body).unwrap();
    assert_eq!(doc.root_element().attribute("viewBox"), Some("0 0 512 512"));
}

#[tokio::test]
async fn missing_size_is_the_same_as_192() {
    let router = test_app(AppConfig::default());

    let default = get(&router, "/api/icon").await;
    assert_eq!(default.status(), StatusCode::OK);
    let explicit = get(&router, "/api/icon?size=192").await;

    assert_eq!(body_string(default).await, body_string(explicit).await);
}

#[tokio::test]
async fn invalid_sizes_are_rejected() {
    let router = test_app(AppConfig::default());
    for size in ["15", "1025", "0", "-5", "abc", "%20"] {
        let resp = get(&router, &format!("/api/icon?size={}", size)).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "size={}", size);
        assert!(header(&resp, "content-type").unwrap().starts_with("text/plain"));
        assert!(header(&resp, "cache-control").is_none());
        assert_eq!(body_string(resp).await, "Invalid size");
    }
}

#[tokio::test]
async fn same_size_is_byte_identical() {
    let router = test_app(AppConfig::default());
    let first = body_string(get(&router, "/api/icon?size=77").await).await;
    let second = body_string(get(&router, "/api/icon?size=77").await).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn only_get_is_routed() {
    let router = test_app(AppConfig::default());
    for method in [Method::POST, Method::PUT, Method::DELETE] {
        let resp = send(&router, method.clone(), "/api/icon?size=64").await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED, "{}", method);
    }
}

#[test]
fn every_valid_size_declares_its_dimensions() {
    for s in IconSize::MIN..=IconSize::MAX {
        let svg = generate_icon_svg(IconSize::new(s as i64).unwrap()).unwrap();
        let doc = roxmltree::Document::parse(&svg).unwrap();
        let root = doc.root_element();
        let expected = s.to_string();
        assert_eq!(root.attribute("width"), Some(expected.as_str()));
        assert_eq!(root.attribute("height"), Some(expected.as_str()));
    }
}

#[tokio::test]
async fn bounds_are_served() {
    let router = test_app(AppConfig::default());
    for size in [16, 1024] {
        let resp = get(&router, &format!("/api/icon?size={}", size)).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_string(resp).await;
        assert!(body.contains(&format!(r#"width="{0}" height="{0}""#, size)));
    }
}

#[tokio::test]
async fn repeated_size_uses_the_first_value() {
    let router = test_app(AppConfig::default());
    let resp = get(&router, "/api/icon?size=64&size=128").await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains(r#"width="64" height="64""#));

    let resp = get(&router, "/api/icon?other=1&size=abc&size=64").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn hex_size_is_accepted() {
    let router = test_app(AppConfig::default());
    let resp = get(&router, "/api/icon?size=0x100").await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_string(resp).await.contains(r#"width="256" height="256""#));
}
