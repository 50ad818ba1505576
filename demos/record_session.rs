use activity_recorder::{
    ConsoleFeed, ExportMetadata, InputEvent, Recorder, RecorderConfig, REPORT_FILE_NAME,
};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Replays a scripted input session through the recorder, prints the live
/// feed and the summary report, and saves the JSON export.
fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut recorder = Recorder::new(RecorderConfig::default(), ConsoleFeed);

    // A synthetic session: move toward a control, click it, scroll the
    // page, then drag an item for about a second. Offsets are relative to
    // the session start.
    let script: &[(u64, InputEvent)] = &[
        (0, InputEvent::PointerMove { x: 120, y: 95 }),
        (40, InputEvent::PointerMove { x: 140, y: 100 }),
        (130, InputEvent::PointerMove { x: 160, y: 104 }),
        (400, InputEvent::Click { x: 160, y: 104 }),
        (650, InputEvent::Wheel { delta_y: -240.0 }),
        (700, InputEvent::Wheel { delta_y: -180.0 }),
        (780, InputEvent::DocumentScroll { scroll_top: 160.0 }),
        (1_000, InputEvent::ContextMenu { x: 160, y: 260 }),
        (1_400, InputEvent::DragStart { x: 200, y: 220 }),
        (1_450, InputEvent::DragMove { x: 230, y: 225 }),
        (1_490, InputEvent::DragMove { x: 260, y: 230 }),
        (1_600, InputEvent::DragMove { x: 300, y: 240 }),
        (2_450, InputEvent::DragEnd { x: 340, y: 250 }),
    ];

    let start = activity_recorder::now_millis();
    for (offset, event) in script {
        recorder.handle_event_at(*event, start + offset);
    }

    println!();
    println!("{}", recorder.report());

    let output_path = std::env::temp_dir().join(REPORT_FILE_NAME);
    recorder.save(&output_path, &ExportMetadata::default())?;
    info!("report saved to {:?}", output_path);

    Ok(())
}
