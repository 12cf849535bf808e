use chrono::NaiveDate;
use dirtally_analyze::{FileEntry, Inventory, StatsAnalyzer, StatsConfig};

fn sample_inventory() -> Inventory {
    Inventory::from_json(
        r#"{
            "details": {"Client Name": "Acme"},
            "entries": [
                {"path": "C:\\share", "type": "Folder", "size": 0},
                {"path": "C:\\share\\a.docx", "type": "File", "size": 2048, "created": "2020-05-01T08:00:00"},
                {"path": "C:\\share\\b.docx", "type": "File", "size": 1024, "created": "2021-01-15T09:30:00"},
                {"path": "C:\\share\\video.MP4", "type": "File", "size": 52428800, "created": "2021-01-16T10:00:00"},
                {"path": "C:\\share\\README", "type": "File", "size": null},
                {"path": "C:\\share\\tmp", "type": "File", "size": -10, "extension": ".LOG"}
            ]
        }"#,
    )
    .unwrap()
}

#[test]
fn test_analyze_inventory_ignores_folders() {
    let report = StatsAnalyzer::new().analyze_inventory(&sample_inventory());

    assert_eq!(report.total_files, 5);
    assert_eq!(report.total_size.bytes, 2048 + 1024 + 52428800);
}

#[test]
fn test_extension_report() {
    let report = StatsAnalyzer::new().analyze_inventory(&sample_inventory());
    let ext = &report.extensions;

    assert_eq!(ext.by_count[0].extension, "docx");
    assert_eq!(ext.by_count[0].file_count, 2);
    assert_eq!(ext.by_size[0].extension, "mp4");
    assert!((ext.by_size[0].total_size.gb - 50.0 / 1024.0).abs() < 1e-12);
    assert_eq!(ext.get("NULL").unwrap().file_count, 1);
    assert_eq!(ext.get("log").unwrap().total_size.bytes, 0);
}

#[test]
fn test_date_report() {
    let report = StatsAnalyzer::new().analyze_inventory(&sample_inventory());
    let dates = &report.dates;

    assert_eq!(dates.undated, 2);
    assert_eq!(
        dates.by_year.iter().map(|c| (c.date.as_str(), c.file_count)).collect::<Vec<_>>(),
        vec![("2020", 1), ("2021", 2)]
    );
    assert_eq!(dates.by_month.len(), 2);
    assert_eq!(dates.by_day.len(), 3);
}

#[test]
fn test_size_buckets_and_top_files() {
    let report = StatsAnalyzer::new().analyze_inventory(&sample_inventory());

    let buckets: Vec<(&str, u64)> = report
        .size_buckets
        .iter()
        .map(|b| (b.label.as_str(), b.file_count))
        .collect();
    assert_eq!(
        buckets,
        vec![("≤ 1 MB", 4), ("> 1 MB and ≤ 10 MB", 0), ("> 10 MB", 1)]
    );

    assert_eq!(report.top_files.len(), 5);
    assert_eq!(report.largest_file().unwrap().name, "video.MP4");
    assert_eq!(report.top_files[1].name, "a.docx");
}

#[test]
fn test_custom_config() {
    let config = StatsConfig::builder()
        .top_files(1usize)
        .size_thresholds_mb(vec![0.001])
        .no_extension_label("(none)")
        .separator('/')
        .build()
        .unwrap();
    let files = vec![
        FileEntry::new("/srv/big.iso", 4096, '/'),
        FileEntry::new("/srv/small", 10, '/'),
    ];
    let report = StatsAnalyzer::with_config(config).analyze(&files);

    assert_eq!(report.top_files.len(), 1);
    assert_eq!(report.top_files[0].path, "/srv/big.iso");
    assert_eq!(report.size_buckets[0].file_count, 1);
    assert_eq!(report.size_buckets[1].label, "> 0.001 MB");
    assert!(report.extensions.get("(none)").is_some());
}

#[test]
fn test_empty_input() {
    let report = StatsAnalyzer::new().analyze(&[]);

    assert_eq!(report.total_files, 0);
    assert_eq!(report.total_size.bytes, 0);
    assert!(report.extensions.is_empty());
    assert!(report.top_files.is_empty());
    assert_eq!(report.size_buckets.len(), 3);
    assert!(report.dates.busiest_year().is_none());
}

#[test]
fn test_report_serializes() {
    let created = NaiveDate::from_ymd_opt(2022, 2, 2)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let files = vec![FileEntry::new("C:\\x.csv", 100, '\\').with_created(created)];
    let report = StatsAnalyzer::new().analyze(&files);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["total_files"], 1);
    assert_eq!(json["dates"]["by_day"][0]["date"], "2022/02/02");
    assert_eq!(json["extensions"]["by_count"][0]["extension"], "csv");
}
