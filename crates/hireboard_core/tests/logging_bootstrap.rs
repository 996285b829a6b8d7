use hireboard_core::{
    init_logging, init_logging_from_settings, logging_status, ListingService, ListingsRequest,
    LoggingError, SeedCatalog, Settings,
};

#[test]
fn init_logging_is_idempotent_and_rejects_conflicts() {
    let log_dir = tempfile::tempdir().unwrap();
    let other_dir = tempfile::tempdir().unwrap();
    let log_dir_str = log_dir.path().to_str().unwrap().to_string();
    let other_dir_str = other_dir.path().to_str().unwrap().to_string();

    init_logging("info", &log_dir_str).unwrap();
    init_logging("INFO", &log_dir_str).unwrap();

    let settings = Settings {
        log_dir: Some(log_dir_str.clone()),
        log_level: "info".to_string(),
        ..Settings::default()
    };
    assert!(init_logging_from_settings(&settings).unwrap());

    let level_err = init_logging("debug", &log_dir_str).unwrap_err();
    assert!(matches!(level_err, LoggingError::Conflict { .. }));
    let dir_err = init_logging("info", &other_dir_str).unwrap_err();
    assert!(dir_err.to_string().contains("refusing to switch"));

    let (level, dir) = logging_status().unwrap();
    assert_eq!(level, "info");
    assert_eq!(dir, log_dir.path());

    let page = ListingService::new(SeedCatalog)
        .list(&ListingsRequest::default())
        .unwrap();
    assert_eq!(page.total_count, 8);
}
