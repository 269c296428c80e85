use super::*;
use crate::foundation::random::SequenceRandom;
use std::cell::Cell;

#[test]
fn random_id_uses_url_safe_alphabet() {
    let mut rng = rand_pcg::Pcg32::new(7, 11);
    let id = random_id(&mut rng);
    assert_eq!(id.len(), 21);
    assert!(id.bytes().all(|b| ID_ALPHABET.contains(&b)), "{id}");

    let mut zeros = SequenceRandom::new(vec![0.0]);
    assert_eq!(random_id(&mut zeros), "u".repeat(21));
    let mut top = SequenceRandom::new(vec![0.999_999]);
    assert_eq!(random_id(&mut top), "t".repeat(21));
}

#[test]
fn file_name_validation() {
    for ok in ["brella.webm", "out", "my video 2.webm", ".hidden", "console.webm", "com10"] {
        assert!(is_valid_file_name(ok), "{ok}");
    }
    for bad in [
        "", ".", "..", "a/b.webm", "a\\b", "what?.webm", "x.", "x ", "tab\t.webm", "CON", "nul.webm",
        "com1.webm", "LPT9", "Aux.txt",
    ] {
        assert!(!is_valid_file_name(bad), "{bad:?}");
    }
    assert!(!is_valid_file_name(&"a".repeat(256)));
}

#[test]
fn free_path_is_returned_unchanged() {
    let mut rng = SequenceRandom::new(vec![0.0]);
    let path = Path::new("out/brella.webm");
    assert_eq!(unique_output_path_with(path, &mut rng, |_| false), path);
    assert_eq!(rng.draws(), 0);
}

#[test]
fn taken_path_replaces_last_segment_with_id() {
    let mut rng = SequenceRandom::new(vec![0.0]);
    let calls = Cell::new(0);
    let out = unique_output_path_with(Path::new("dir/brella.webm"), &mut rng, |_| {
        calls.set(calls.get() + 1);
        calls.get() <= 2
    });
    let id = "u".repeat(21);
    assert_eq!(out, PathBuf::from(format!("dir/brella.{id}.webm")));
    assert_eq!(calls.get(), 3);
    assert_eq!(rng.draws(), 42);
}

#[test]
fn name_without_extension_becomes_id_webm() {
    let mut rng = SequenceRandom::new(vec![0.0]);
    let first = Cell::new(true);
    let out = unique_output_path_with(Path::new("clip"), &mut rng, |_| first.replace(false));
    assert_eq!(out, PathBuf::from(format!("{}.webm", "u".repeat(21))));
}
