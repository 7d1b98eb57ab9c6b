use histdates_core::{CONFIG_PATH_ENV, PAGES_PATH_ENV};
use histdates_ffi::api::{timeline_close, timeline_open};
use std::io::Write;

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

// Env vars are process-wide, so every case runs inside one test.
#[test]
fn open_reads_config_and_pages_paths_from_env() {
    let config = write_temp(r#"{ "title": "FromEnv", "radius": 200 }"#);
    let pages = write_temp(
        r#"[
            { "id": 1, "year_from": 1900, "year_to": 1910, "articles": [] },
            { "id": 2, "year_from": 1920, "year_to": 1930, "articles": [] }
        ]"#,
    );
    std::env::set_var(CONFIG_PATH_ENV, config.path());
    std::env::set_var(PAGES_PATH_ENV, pages.path());

    let response = timeline_open(None, Some("   ".to_string()), 1440);
    assert!(response.ok, "{}", response.message);
    let frame = response.frame.expect("first frame");
    assert_eq!(frame.title, "FromEnv");
    assert_eq!(frame.dot_ids, vec![1, 2]);
    assert_eq!(frame.pagination_label, "01 / 02");
    assert!(timeline_close(response.session_id.expect("session id")));

    let explicit = timeline_open(
        Some(r#"[{ "id": 1, "year_from": 2000, "year_to": 2001 }]"#.to_string()),
        Some(r#"{ "title": "Explicit" }"#.to_string()),
        1440,
    );
    assert!(explicit.ok, "{}", explicit.message);
    let frame = explicit.frame.expect("first frame");
    assert_eq!(frame.title, "Explicit");
    assert_eq!(frame.dot_ids, vec![1]);
    assert!(timeline_close(explicit.session_id.expect("session id")));

    let broken_config = write_temp(r#"{ "radius": -1 }"#);
    std::env::set_var(CONFIG_PATH_ENV, broken_config.path());
    let rejected = timeline_open(None, None, 1440);
    assert!(!rejected.ok);
    assert!(rejected.session_id.is_none());
    assert!(rejected.message.contains("radius"), "{}", rejected.message);

    std::env::set_var(CONFIG_PATH_ENV, "/nonexistent/histdates/config.json");
    assert!(!timeline_open(None, None, 1440).ok);

    std::env::remove_var(CONFIG_PATH_ENV);
    std::env::set_var(PAGES_PATH_ENV, "/nonexistent/histdates/pages.json");
    assert!(!timeline_open(None, None, 1440).ok);

    std::env::remove_var(PAGES_PATH_ENV);
    let builtin = timeline_open(None, None, 1440);
    assert!(builtin.ok, "{}", builtin.message);
    let frame = builtin.frame.expect("first frame");
    assert_eq!(frame.title, "Historical dates");
    assert_eq!(frame.dot_ids.len(), 6);
    assert!(timeline_close(builtin.session_id.expect("session id")));
}
