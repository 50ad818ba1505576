use activity_recorder::*;

fn recorder() -> Recorder<MemoryFeed> {
    Recorder::new(RecorderConfig::default(), MemoryFeed::new())
}

#[test]
fn test_throttle_window_over_full_pipeline() {
    let mut recorder = recorder();

    // Two pointer moves 50 ms apart: exactly one record.
    recorder.handle_event_at(InputEvent::PointerMove { x: 10, y: 10 }, 1_000);
    recorder.handle_event_at(InputEvent::PointerMove { x: 11, y: 11 }, 1_050);
    assert_eq!(recorder.log().len(), 1);

    // 100 ms after the last emission: a second record.
    recorder.handle_event_at(InputEvent::PointerMove { x: 12, y: 12 }, 1_100);
    assert_eq!(recorder.log().len(), 2);
}

#[test]
fn test_recorded_session_report_fixture() {
    let mut recorder = recorder();
    recorder.handle_event_at(InputEvent::Click { x: 5, y: 5 }, 10_000);
    recorder.handle_event_at(InputEvent::Wheel { delta_y: -120.0 }, 11_000);
    recorder.handle_event_at(InputEvent::ContextMenu { x: 6, y: 6 }, 13_000);

    let stats = match recorder.report() {
        Report::Stats(stats) => stats,
        Report::NoData => panic!("expected stats"),
    };
    assert_eq!(stats.total_actions, 3);
    assert_eq!(stats.duration_secs, 3.0);
    assert_eq!(stats.actions_per_sec, Some(1.0));
    assert_eq!(stats.avg_interval_secs, 1.5);

    let count = |label: &str| {
        stats
            .category_counts
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, n)| *n)
    };
    assert_eq!(count("Left click"), Some(1));
    assert_eq!(count("Scroll"), Some(1));
    assert_eq!(count("Right click"), Some(1));
    assert_eq!(count("Mouse move"), Some(0));
}

#[test]
fn test_empty_session_reports_no_data() {
    let recorder = recorder();
    assert_eq!(recorder.report(), Report::NoData);
}

#[test]
fn test_drag_lifecycle_end_to_end() {
    let mut recorder = recorder();
    recorder.handle_event_at(InputEvent::DragStart { x: 0, y: 0 }, 1_000);
    recorder.handle_event_at(InputEvent::DragMove { x: 5, y: 5 }, 1_010);
    recorder.handle_event_at(InputEvent::DragMove { x: 9, y: 9 }, 1_060);
    recorder.handle_event_at(InputEvent::DragEnd { x: 20, y: 20 }, 3_500);

    // Start, one surviving move, end.
    assert_eq!(recorder.log().len(), 3);
    let end = recorder.log().last().expect("drag end record");
    assert!(end.description.contains("duration=2.50s"));

    // Drag start/move/end all count under the single Drag label.
    match recorder.report() {
        Report::Stats(stats) => {
            let drag = stats
                .category_counts
                .iter()
                .find(|(label, _)| label == "Drag")
                .map(|(_, n)| *n);
            assert_eq!(drag, Some(3));
        }
        Report::NoData => panic!("expected stats"),
    }
}

#[test]
fn test_clear_then_report_reflects_marker() {
    let mut recorder = recorder();
    for i in 0..4 {
        recorder.handle_event_at(InputEvent::Click { x: i, y: i }, 1_000 + i as u64 * 500);
    }
    assert_eq!(recorder.log().len(), 4);

    recorder.clear();

    assert_eq!(recorder.log().len(), 1);
    assert_eq!(
        recorder.log().first().map(|r| r.description.as_str()),
        Some("Data cleared")
    );
    match recorder.report() {
        Report::Stats(stats) => assert_eq!(stats.total_actions, 1),
        Report::NoData => panic!("expected the marker record"),
    }
}

#[test]
fn test_export_parse_round_trip() {
    let mut recorder = recorder();
    recorder.handle_event_at(InputEvent::Click { x: 1, y: 2 }, 1_000);
    recorder.handle_event_at(InputEvent::DragStart { x: 3, y: 4 }, 1_500);
    recorder.handle_event_at(InputEvent::DragEnd { x: 5, y: 6 }, 2_000);

    let bytes = recorder
        .export(&ExportMetadata::default())
        .expect("export succeeds");
    let parsed = SessionExport::from_json_bytes(&bytes).expect("parse succeeds");

    let records = recorder.log().records();
    assert_eq!(parsed.actions.len(), records.len());
    for (entry, record) in parsed.actions.iter().zip(records) {
        assert_eq!(entry.action, record.description);
        assert_eq!(entry.timestamp, iso8601(record.timestamp));
    }
}

#[test]
fn test_save_and_reload_report_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join(REPORT_FILE_NAME);

    let mut recorder = recorder();
    recorder.handle_event_at(InputEvent::Wheel { delta_y: 40.0 }, 1_000);
    recorder.handle_event_at(InputEvent::DocumentScroll { scroll_top: 50.0 }, 1_200);
    recorder
        .save(&path, &ExportMetadata::default())
        .expect("save succeeds");

    let bytes = std::fs::read(&path).expect("report file exists");
    let parsed = SessionExport::from_json_bytes(&bytes).expect("parse succeeds");
    assert_eq!(parsed.actions.len(), 2);
    assert_eq!(parsed.actions[0].action, "Scroll: deltaY=40");
    assert_eq!(parsed.actions[1].action, "Scroll: offset=50px");
}

#[test]
fn test_mixed_session_scenario() {
    let mut recorder = recorder();

    // A plausible interaction: move in, click, scroll, drag something.
    recorder.handle_event_at(InputEvent::PointerMove { x: 100, y: 80 }, 1_000);
    recorder.handle_event_at(InputEvent::PointerMove { x: 101, y: 81 }, 1_030);
    recorder.handle_event_at(InputEvent::Click { x: 101, y: 81 }, 1_250);
    recorder.handle_event_at(InputEvent::Wheel { delta_y: 240.0 }, 1_400);
    recorder.handle_event_at(InputEvent::DragStart { x: 101, y: 81 }, 1_600);
    recorder.handle_event_at(InputEvent::DragMove { x: 130, y: 90 }, 1_650);
    recorder.handle_event_at(InputEvent::DragEnd { x: 160, y: 95 }, 2_100);

    // Second pointer move suppressed; everything else lands.
    assert_eq!(recorder.log().len(), 6);
    assert_eq!(recorder.feed().lines().len(), 6);

    match recorder.report() {
        Report::Stats(stats) => {
            assert_eq!(stats.total_actions, 6);
            assert_eq!(stats.duration_secs, 1.1);
            let total_counted: usize = stats.category_counts.iter().map(|(_, n)| n).sum();
            assert_eq!(total_counted, 6);
        }
        Report::NoData => panic!("expected stats"),
    }
}
