use histdates_core::{CatalogError, ConfigError, PageCatalog, TimelineConfig};
use std::error::Error;
use std::io::Write;

#[test]
fn loads_catalog_from_json_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    let raw = serde_json::json!([
        {
            "id": 1,
            "year_from": -490,
            "year_to": -479,
            "articles": [{ "year": "490 BC", "text": "Battle of Marathon." }]
        },
        { "id": 2, "year_from": 1066, "year_to": 1066 }
    ]);
    write!(file, "{raw}").expect("write catalog");

    let catalog = PageCatalog::load(file.path()).expect("catalog should load");
    assert_eq!(catalog.len(), 2);
    let first = catalog.page(1).expect("page 1");
    assert_eq!((first.year_from, first.year_to), (-490, -479));
    assert_eq!(first.articles[0].year, "490 BC");
    assert!(catalog.page(2).expect("page 2").articles.is_empty());
}

#[test]
fn missing_catalog_file_reports_path_and_source() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.json");
    let err = PageCatalog::load(&path).expect_err("missing file must fail");
    assert!(matches!(err, CatalogError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
    assert!(err.source().is_some());
}

#[test]
fn malformed_catalog_json_is_rejected() {
    let err = PageCatalog::from_json_str(r#"[{ "id": "one" }]"#).expect_err("bad json");
    assert!(matches!(err, CatalogError::Json(_)));
}

#[test]
fn out_of_order_ids_are_rejected() {
    let raw = r#"[
        { "id": 2, "year_from": 1, "year_to": 2 },
        { "id": 1, "year_from": 3, "year_to": 4 }
    ]"#;
    let err = PageCatalog::from_json_str(raw).expect_err("order must be 1..N");
    assert!(matches!(
        err,
        CatalogError::NonContiguousId {
            expected: 1,
            found: 2
        }
    ));
}

#[test]
fn loads_config_overrides_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"{{ "title": "Key dates", "rotation_duration_ms": 800, "wide_viewport_min_px": 600 }}"#
    )
    .expect("write config");

    let config = TimelineConfig::load(file.path()).expect("config should load");
    assert_eq!(config.title, "Key dates");
    assert_eq!(config.rotation_duration().as_millis(), 800);
    assert_eq!(config.slides_per_view(500), 1.6);
    assert_eq!(config.radius, 150.0);
}

#[test]
fn invalid_config_values_are_rejected() {
    let err = TimelineConfig::from_json_str(r#"{ "narrow_slides_per_view": -1.0 }"#)
        .expect_err("negative slides per view must fail");
    assert!(matches!(
        err,
        ConfigError::Invalid {
            field: "narrow_slides_per_view",
            ..
        }
    ));
}
