// Seqkeys Config Persistence Tests
//
// Saving, loading and reloading hotkey files on disk.

use std::fs;
use std::path::PathBuf;

use seqkeys_core::{parse_sequence, Config, ConfigError, ConflictKind, HostHotkey, Platform};

fn scratch_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("seqkeys-test-{}-{}", std::process::id(), name));
    let _ = fs::remove_dir_all(&dir);
    dir.join("nested").join("hotkeys.toml")
}

#[test]
fn test_save_and_load_round_trip() {
    let path = scratch_path("round-trip");

    let mut config = Config::new();
    config.set_platform(Some(Platform::Other));
    config.add_hotkey("editor:save", parse_sequence("C-KeyX C-KeyS").unwrap());
    config.add_hotkey("app:quit", parse_sequence("C-KeyW C-KeyQ").unwrap());
    config.add_hotkey("mode:toggle", parse_sequence("S-").unwrap());
    config.save(&path).unwrap();

    let loaded = Config::from_toml_path(&path).unwrap();
    assert_eq!(loaded.source_path(), Some(path.as_path()));
    assert_eq!(loaded.platform(), Platform::Other);
    assert_eq!(loaded.hotkeys(), config.hotkeys());
}

#[test]
fn test_imported_host_hotkeys_survive_save() {
    let path = scratch_path("host-keys");

    let mut config = Config::new();
    let zoom_out = HostHotkey::new(["Mod"], "-").to_chord(Platform::Other);
    let zoom_in = HostHotkey::new(["Mod"], "+").to_chord(Platform::Other);
    assert!(config.add_hotkey("zoom-out", vec![zoom_out]));
    assert!(config.add_hotkey("zoom-in", vec![zoom_in]));
    config.save(&path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"C-Minus\""));
    assert!(text.contains("\"C-S-Equal\""));

    let loaded = Config::from_toml_path(&path).unwrap();
    assert_eq!(loaded.hotkeys(), config.hotkeys());
}

#[test]
fn test_missing_file_starts_empty() {
    let path = scratch_path("missing");

    let config = Config::load_or_empty(&path).unwrap();
    assert!(config.hotkeys().is_empty());
    assert_eq!(config.source_path(), Some(path.as_path()));
    assert!(matches!(
        Config::from_toml_path(&path),
        Err(ConfigError::Io(_))
    ));
}

#[test]
fn test_reload_picks_up_changes() {
    let path = scratch_path("reload");
    let mut first = Config::new();
    first.add_hotkey("a", parse_sequence("KeyA").unwrap());
    first.save(&path).unwrap();

    let mut config = Config::from_toml_path(&path).unwrap();
    assert_eq!(config.hotkeys().len(), 1);

    fs::write(
        &path,
        r#"
[[hotkey]]
command = "a"
chords = ["KeyA"]

[[hotkey]]
command = "b"
chords = ["KeyB", "KeyB"]
"#,
    )
    .unwrap();
    config.reload().unwrap();
    assert_eq!(config.hotkeys().len(), 2);
    assert_eq!(config.hotkeys()[1].chords, parse_sequence("KeyB KeyB").unwrap());
}

#[test]
fn test_save_to_source_after_edit() {
    let path = scratch_path("edit");
    let mut seed = Config::new();
    seed.add_hotkey("a", parse_sequence("KeyA KeyB").unwrap());
    seed.add_hotkey("b", parse_sequence("KeyC").unwrap());
    seed.save(&path).unwrap();

    let mut config = Config::from_toml_path(&path).unwrap();
    assert_eq!(config.delete_hotkey("a", &parse_sequence("KeyA KeyB").unwrap()), 1);
    config.save_to_source().unwrap();

    let reloaded = Config::from_toml_path(&path).unwrap();
    let commands: Vec<_> = reloaded.hotkeys().iter().map(|h| h.command.as_str()).collect();
    assert_eq!(commands, vec!["b"]);
}

#[test]
fn test_conflicts_survive_loading() {
    let config = Config::from_toml_str(
        r#"
[[hotkey]]
command = "short"
chords = ["C-KeyW"]

[[hotkey]]
command = "long"
chords = ["C-KeyW", "C-KeyQ"]
"#,
    )
    .unwrap();

    let conflicts = config.conflicts();
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].kind, ConflictKind::Prefix);
}
