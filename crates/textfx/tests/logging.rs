use textfx::log::LevelFilter;
use textfx::{EffectRegistry, EngineOptions, GlyphBatch, MonospaceFont, RichText, init_logger};

#[test]
fn file_logger_records_engine_activity() {
    let path = std::env::temp_dir().join(format!("textfx-log-{}.log", std::process::id()));
    let _ = std::fs::remove_file(&path);

    init_logger(&path, LevelFilter::Debug).unwrap();
    assert!(init_logger(&path, LevelFilter::Debug).is_err());

    let mut registry = EffectRegistry::new();
    registry.add_effect("glow", |_, _, _| {}).unwrap();
    registry.add_effect("hush", |_, _, _| {}).unwrap();
    let font = MonospaceFont::default();
    let mut text = RichText::new(&font, "{glow}hi", &registry, GlyphBatch::new()).unwrap();
    text.update().unwrap();

    let mut quiet = RichText::new(&font, "{hush}hi", &registry, GlyphBatch::new())
        .unwrap()
        .with_options(EngineOptions::default().with_warn_unclosed(false));
    quiet.update().unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("[DEBUG]"));
    assert!(contents.contains("add effect `glow`"));
    assert!(contents.contains("update: 2 glyphs"));
    assert!(contents.contains("[WARN]"));
    assert!(contents.contains("tags left open at end of text: glow"));
    assert!(contents.contains("add effect `hush`"));
    assert!(!contents.contains("end of text: hush"));
    assert_eq!(contents.matches("[WARN]").count(), 1);
    // Trace is below the configured level.
    assert!(!contents.contains("[TRACE]"));

    let _ = std::fs::remove_file(&path);
}
