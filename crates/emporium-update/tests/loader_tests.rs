//! HTTP loader behavior against a mock server

mod common;

use common::container_export;
use emporium_core::{Error, SourceType};
use emporium_update::{ContentLoader, HttpLoader};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_text_load_wraps_body_and_renames() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/X.js"))
        .respond_with(ResponseTemplate::new(200).set_body_string("|Version|1.0|\ncode();\n"))
        .mount(&server)
        .await;

    let loader = HttpLoader::new().unwrap();
    let content = loader
        .load(None, &format!("{}/X.js", server.uri()), "MyTitle", false)
        .await
        .unwrap();

    assert_eq!(content.title, "MyTitle");
    assert!(content.text_only);
    assert!(content.text.contains("code();"));
}

#[tokio::test]
async fn test_text_load_normalizes_crlf() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/X.js"))
        .respond_with(ResponseTemplate::new(200).set_body_string("|Version|1.0|\r\nline two\r\n"))
        .mount(&server)
        .await;

    let loader = HttpLoader::new().unwrap();
    let content = loader
        .load(None, &format!("{}/X.js", server.uri()), "X", false)
        .await
        .unwrap();

    assert!(!content.text.contains('\r'));
    assert_eq!(content.text, "|Version|1.0|\nline two\n");
}

#[tokio::test]
async fn test_non_success_status_is_a_network_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gone.js"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let loader = HttpLoader::new().unwrap();
    let error = loader
        .load(None, &format!("{}/gone.js", server.uri()), "X", false)
        .await
        .unwrap_err();

    assert!(matches!(error, Error::Network { .. }));
}

#[tokio::test]
async fn test_container_load_extracts_named_record() {
    let server = MockServer::start().await;
    let export = container_export(&[
        ("One", "|Version|0.1|\none();"),
        ("Two", "|Version|0.2|\ntwo();"),
    ]);
    Mock::given(method("GET"))
        .and(path("/w.html"))
        .respond_with(ResponseTemplate::new(200).set_body_string(export))
        .mount(&server)
        .await;

    let loader = HttpLoader::new().unwrap();
    let content = loader
        .load(
            Some(SourceType::Container),
            &format!("{}/w.html#Two", server.uri()),
            "RenamedTwo",
            false,
        )
        .await
        .unwrap();

    assert_eq!(content.title, "RenamedTwo");
    assert!(!content.text_only);
    assert!(content.text.contains("two();"));
}

#[tokio::test]
async fn test_cached_container_shares_one_fetch() {
    let server = MockServer::start().await;
    let export = container_export(&[("One", "one();"), ("Two", "two();")]);
    Mock::given(method("GET"))
        .and(path("/w.html"))
        .respond_with(ResponseTemplate::new(200).set_body_string(export))
        .expect(1)
        .mount(&server)
        .await;

    let loader = HttpLoader::new().unwrap();
    let base = format!("{}/w.html", server.uri());

    let first = loader
        .load(None, &format!("{base}#One"), "One", true)
        .await
        .unwrap();
    let second = loader
        .load(None, &format!("{base}#Two"), "Two", true)
        .await
        .unwrap();

    assert!(first.text.contains("one();"));
    assert!(second.text.contains("two();"));
    // the mock's expect(1) verifies the second load came from cache
}

#[tokio::test]
async fn test_uncached_container_fetches_every_time() {
    let server = MockServer::start().await;
    let export = container_export(&[("One", "one();")]);
    Mock::given(method("GET"))
        .and(path("/w.html"))
        .respond_with(ResponseTemplate::new(200).set_body_string(export))
        .expect(2)
        .mount(&server)
        .await;

    let loader = HttpLoader::new().unwrap();
    let url = format!("{}/w.html#One", server.uri());
    loader.load(None, &url, "One", false).await.unwrap();
    loader.load(None, &url, "One", false).await.unwrap();
}

#[tokio::test]
async fn test_missing_record_is_a_container_parse_failure() {
    let server = MockServer::start().await;
    let export = container_export(&[("One", "one();")]);
    Mock::given(method("GET"))
        .and(path("/w.html"))
        .respond_with(ResponseTemplate::new(200).set_body_string(export))
        .mount(&server)
        .await;

    let loader = HttpLoader::new().unwrap();
    let error = loader
        .load(None, &format!("{}/w.html#Missing", server.uri()), "X", false)
        .await
        .unwrap_err();

    assert!(matches!(error, Error::ContainerParse { .. }));
}

#[tokio::test]
async fn test_body_without_store_area_is_a_container_parse_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/w.html"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not an export</html>"))
        .mount(&server)
        .await;

    let loader = HttpLoader::new().unwrap();
    let error = loader
        .load(None, &format!("{}/w.html#Any", server.uri()), "X", false)
        .await
        .unwrap_err();

    assert!(matches!(error, Error::ContainerParse { .. }));
}

#[tokio::test]
async fn test_source_type_is_inferred_from_the_url() {
    let server = MockServer::start().await;
    // a .js path is fetched as plain text even though it carries a fragment
    Mock::given(method("GET"))
        .and(path("/X.js"))
        .respond_with(ResponseTemplate::new(200).set_body_string("code();"))
        .mount(&server)
        .await;

    let loader = HttpLoader::new().unwrap();
    let content = loader
        .load(None, &format!("{}/X.js#ignored", server.uri()), "X", false)
        .await
        .unwrap();

    assert!(content.text_only);
}
