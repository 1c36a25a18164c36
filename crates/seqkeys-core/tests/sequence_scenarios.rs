// Seqkeys Sequence Matching Scenarios
//
// End-to-end behavior of the matching engine driven with whole chord
// streams, the way a listener would feed it.

use std::cell::RefCell;
use std::rc::Rc;

use seqkeys_core::{parse_sequence, HotkeyManager, KeyChord, MatchOutcome, Trigger};

// =========================================================================
// Test Helpers
// =========================================================================

type Fired = Rc<RefCell<Vec<String>>>;

fn manager(bindings: &[(&str, &str)]) -> (HotkeyManager<impl Trigger>, Fired) {
    let fired: Fired = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&fired);
    let mut manager = HotkeyManager::new(move |id: &str| sink.borrow_mut().push(id.to_string()));
    for (id, chords) in bindings {
        manager.add_hotkey(*id, parse_sequence(chords).unwrap());
    }
    (manager, fired)
}

/// Feed a whitespace-separated chord stream, returning the consumed flags
fn press_all(manager: &mut HotkeyManager<impl Trigger>, chords: &str) -> Vec<bool> {
    parse_sequence(chords)
        .unwrap()
        .into_iter()
        .map(|chord| manager.handle_chord_press(chord))
        .collect()
}

fn fired_ids(fired: &Fired) -> Vec<String> {
    fired.borrow().clone()
}

// =========================================================================
// Distinct sequences
// =========================================================================

#[test]
fn test_each_sequence_fires_only_its_own_id() {
    let bindings = [
        ("close", "C-KeyW C-KeyQ"),
        ("save", "C-KeyX C-KeyS"),
        ("top", "KeyG KeyG"),
        ("bottom", "S-KeyG"),
    ];
    for (id, chords) in bindings {
        let (mut man, fired) = manager(&bindings);
        press_all(&mut man, chords);
        assert_eq!(fired_ids(&fired), vec![id], "sequence {}", chords);
        assert!(!man.is_pending());
    }
}

#[test]
fn test_every_chord_of_a_match_is_consumed() {
    let (mut man, _fired) = manager(&[("close", "C-KeyW C-KeyQ")]);
    assert_eq!(press_all(&mut man, "C-KeyW C-KeyQ"), vec![true, true]);
}

// =========================================================================
// Prefix sharing and mismatch recovery
// =========================================================================

#[test]
fn test_prefix_sharing() {
    let (mut man, fired) = manager(&[("q", "KeyQ"), ("wq", "KeyW KeyQ")]);

    press_all(&mut man, "KeyW KeyQ");
    assert_eq!(fired_ids(&fired), vec!["wq"]);

    press_all(&mut man, "KeyQ");
    assert_eq!(fired_ids(&fired), vec!["wq", "q"]);
}

#[test]
fn test_mismatch_recovery_fires_restarted_chord() {
    let (mut man, fired) = manager(&[("q", "KeyQ"), ("wn", "KeyW KeyN")]);

    let consumed = press_all(&mut man, "KeyW KeyQ");
    assert_eq!(consumed, vec![true, true]);
    assert_eq!(fired_ids(&fired), vec!["q"]);
}

#[test]
fn test_double_mismatch_fires_twice() {
    let (mut man, fired) = manager(&[("q", "KeyQ"), ("wn", "KeyW KeyN")]);

    press_all(&mut man, "KeyW KeyQ KeyQ");
    assert_eq!(fired_ids(&fired), vec!["q", "q"]);
    assert!(!man.is_pending());
}

#[test]
fn test_mismatch_restart_can_begin_new_sequence() {
    let (mut man, fired) = manager(&[("wn", "KeyW KeyN"), ("ab", "KeyA KeyB")]);

    // W, then A: A does not extend [W] but starts [A, B]
    assert_eq!(press_all(&mut man, "KeyW KeyA"), vec![true, true]);
    assert!(fired.borrow().is_empty());
    assert_eq!(man.pending(), &[KeyChord::new("KeyA")]);

    press_all(&mut man, "KeyB");
    assert_eq!(fired_ids(&fired), vec!["ab"]);
}

#[test]
fn test_unrelated_chord_passes_through_and_clears() {
    let (mut man, fired) = manager(&[("wn", "KeyW KeyN")]);

    assert_eq!(press_all(&mut man, "KeyW KeyZ"), vec![true, false]);
    assert!(!man.is_pending());

    // N alone is not a sequence start
    assert_eq!(press_all(&mut man, "KeyN"), vec![false]);
    assert!(fired.borrow().is_empty());
}

#[test]
fn test_modifiers_distinguish_chords() {
    let (mut man, fired) = manager(&[("plain", "KeyG"), ("shifted", "S-KeyG")]);

    press_all(&mut man, "S-KeyG KeyG C-KeyG");
    assert_eq!(fired_ids(&fired), vec!["shifted", "plain"]);
}

// =========================================================================
// Ambiguity
// =========================================================================

#[test]
fn test_duplicate_sequence_fires_first_registered() {
    let (mut man, fired) = manager(&[("first", "KeyA KeyB"), ("second", "KeyA KeyB")]);

    press_all(&mut man, "KeyA KeyB");
    assert_eq!(fired_ids(&fired), vec!["first"]);
}

#[test]
fn test_shorter_exact_shadows_longer() {
    let (mut man, fired) = manager(&[("long", "KeyG KeyG"), ("short", "KeyG")]);

    press_all(&mut man, "KeyG KeyG");
    assert_eq!(fired_ids(&fired), vec!["short", "short"]);
}

// =========================================================================
// Reset and removal
// =========================================================================

#[test]
fn test_reset_behaves_like_new_engine() {
    let (mut man, fired) = manager(&[("close", "C-KeyW C-KeyQ"), ("q", "KeyQ")]);
    press_all(&mut man, "C-KeyW");
    man.reset();
    man.reset();

    assert_eq!(press_all(&mut man, "C-KeyW C-KeyQ KeyQ"), vec![false; 3]);
    assert!(fired.borrow().is_empty());

    man.add_hotkey("q", parse_sequence("KeyQ").unwrap());
    press_all(&mut man, "KeyQ");
    assert_eq!(fired_ids(&fired), vec!["q"]);
}

#[test]
fn test_remove_hotkey_keeps_others() {
    let (mut man, fired) = manager(&[("a", "KeyA"), ("b", "KeyB"), ("a", "KeyC")]);
    man.remove_hotkey("a");

    press_all(&mut man, "KeyA KeyB KeyC");
    assert_eq!(fired_ids(&fired), vec!["b"]);
}

#[test]
fn test_process_chord_outcomes() {
    let (mut man, _fired) = manager(&[("close", "C-KeyW C-KeyQ")]);

    let w = KeyChord::parse("C-KeyW").unwrap();
    let q = KeyChord::parse("C-KeyQ").unwrap();
    assert_eq!(man.process_chord(w), MatchOutcome::Pending);
    assert_eq!(man.process_chord(q), MatchOutcome::Fired("close".to_string()));
    assert_eq!(
        man.process_chord(KeyChord::new("KeyZ")),
        MatchOutcome::PassThrough
    );
}

#[test]
fn test_independent_engines_do_not_share_state() {
    let (mut one, fired_one) = manager(&[("close", "C-KeyW C-KeyQ")]);
    let (mut two, fired_two) = manager(&[("close", "C-KeyW C-KeyQ")]);

    press_all(&mut one, "C-KeyW");
    press_all(&mut two, "C-KeyQ");
    press_all(&mut one, "C-KeyQ");

    assert_eq!(fired_ids(&fired_one), vec!["close"]);
    assert!(fired_two.borrow().is_empty());
}

// =========================================================================
// Canonical strings
// =========================================================================

#[test]
fn test_canonical_order_is_normalized() {
    let chord = KeyChord::parse("C-M-S-KeyG").unwrap();
    assert_eq!(chord.to_canonical_string(), "M-C-S-KeyG");

    let chord = KeyChord::parse("C-KeyA").unwrap();
    assert!(chord.ctrl());
    assert!(!chord.meta() && !chord.alt() && !chord.shift());
    assert_eq!(chord.key(), "KeyA");
}
