//! Frozen vectors for the public API.
//!
//! Expected ciphertexts were derived by hand from the per-class rules; any
//! change in output indicates a regression in one of the four rules.

use splitshift::{
    decrypt_text, encrypt_text, forward, inverse, verify, CharClass, Report, ShiftKeys,
    SplitShift,
};

/// Text covering all four letter classes plus digits, punctuation and
/// whitespace.
const MIXED: &str = "abcdefghijklm nopqrstuvwxyz\nABCDEFGHIJKLM NOPQRSTUVWXYZ\t0123456789 .,;:!?'\"-()";

const KEY_VALUES: [i64; 6] = [-100, -1, 0, 1, 13, 100];

// ═══════════════════════════════════════════════════════════════════════
// Frozen ciphertexts
// ═══════════════════════════════════════════════════════════════════════

/// s1=3, s2=4: a-m +12, n-z -7, A-M -3, N-Z +3.
#[test]
fn scenario_mixed_classes_3_4() {
    let cipher = SplitShift::new(3, 4);
    let encrypted = cipher.encrypt("abcNXYZdef123");
    assert_eq!(encrypted, "mabQNOPcde123");
    assert_eq!(cipher.decrypt(&encrypted), "abcNXYZdef123");
}

/// s1=3, s2=4 over each full half-alphabet.
#[test]
fn full_halves_3_4() {
    let keys = ShiftKeys::new(3, 4);
    assert_eq!(encrypt_text("abcdefghijklm", &keys), "mabcdefghijkl");
    assert_eq!(encrypt_text("nopqrstuvwxyz", &keys), "tuvwxyznopqrs");
    assert_eq!(encrypt_text("ABCDEFGHIJKLM", &keys), "KLMABCDEFGHIJ");
    assert_eq!(encrypt_text("NOPQRSTUVWXYZ", &keys), "QRSTUVWXYZNOP");
}

/// s1=-1, s2=5: a-m +8, n-z -4, A-M -12, N-Z +12.
#[test]
fn full_halves_negative_keys() {
    let keys = ShiftKeys::new(-1, 5);
    assert_eq!(encrypt_text("abcdefghijklm", &keys), "ijklmabcdefgh");
    assert_eq!(encrypt_text("nopqrstuvwxyz", &keys), "wxyznopqrstuv");
    assert_eq!(encrypt_text("ABCDEFGHIJKLM", &keys), "BCDEFGHIJKLMA");
    assert_eq!(encrypt_text("NOPQRSTUVWXYZ", &keys), "ZNOPQRSTUVWXY");
}

// ═══════════════════════════════════════════════════════════════════════
// Round-trip law
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn round_trip_key_grid() {
    for s1 in KEY_VALUES {
        for s2 in KEY_VALUES {
            let keys = ShiftKeys::new(s1, s2);
            let recovered = decrypt_text(&encrypt_text(MIXED, &keys), &keys);
            assert_eq!(
                verify(MIXED, &recovered),
                Report::Match,
                "round trip failed for ({}, {})",
                s1,
                s2
            );
        }
    }
}

#[test]
fn length_and_classes_invariant() {
    for s1 in KEY_VALUES {
        for s2 in KEY_VALUES {
            let cipher = SplitShift::new(s1, s2);
            let encrypted = cipher.encrypt(MIXED);
            assert_eq!(encrypted.chars().count(), MIXED.chars().count());
            for (a, b) in MIXED.chars().zip(encrypted.chars()) {
                assert_eq!(CharClass::of(a), CharClass::of(b), "{:?} -> {:?}", a, b);
            }
        }
    }
}

#[test]
fn unmapped_chars_untouched() {
    let text = "0123456789 \t\n!@#$%^&*()[]{}<>~`|\\/ éèüßΩЖ中文😀";
    for s1 in KEY_VALUES {
        for s2 in KEY_VALUES {
            for c in text.chars() {
                assert_eq!(forward(c, s1, s2), c);
                assert_eq!(inverse(c, s1, s2), c);
            }
        }
    }
}

#[test]
fn zero_keys_identity_on_all_classes() {
    let cipher = SplitShift::new(0, 0);
    assert_eq!(cipher.encrypt(MIXED), MIXED);
    assert_eq!(cipher.decrypt(MIXED), MIXED);
}

#[test]
fn empty_input() {
    let cipher = SplitShift::new(3, 4);
    assert_eq!(cipher.encrypt(""), "");
    assert_eq!(cipher.decrypt(""), "");
    assert!(verify("", "").is_match());
}

// ═══════════════════════════════════════════════════════════════════════
// Verifier reporting
// ═══════════════════════════════════════════════════════════════════════

/// Seven differing positions in the shared region plus two extra chars.
/// The reported total caps the positional count at five.
#[test]
fn mismatch_report_caps_positional_count() {
    let report = verify("abcdefghij", "1234567hijXY");
    assert!(!report.is_match());
    let d = report.discrepancy().expect("mismatch carries details");
    assert_eq!(d.original_len, 10);
    assert_eq!(d.recovered_len, 12);
    assert_eq!(d.total_differences, 7);
    assert_eq!(d.mismatched_positions, 7);
    assert_eq!(d.exact_differences(), 9);
}

#[test]
fn wrong_keys_detected() {
    let text = "Attack at dawn, Zulu.";
    let encrypted = SplitShift::new(3, 4).encrypt(text);
    let recovered = SplitShift::new(3, 5).decrypt(&encrypted);
    let report = verify(text, &recovered);
    assert!(!report.is_match());
    assert_eq!(report.discrepancy().unwrap().original_len, 21);
}
