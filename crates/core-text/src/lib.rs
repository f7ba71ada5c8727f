//! Text normalization, classification, and digests.
//!
//! Contract:
//! - Input: raw strings as harvested from a page (may contain bidi controls,
//!   zero-width characters, arbitrary whitespace).
//! - `normalize` produces the canonical form every digest is taken over:
//!   invisible characters stripped, whitespace runs collapsed to one ASCII
//!   space, trimmed, lowercased. Idempotent.
//! - Safety: raw text never leaves this crate. Callers store only the kind,
//!   the normalized length, and a digest; nothing here logs content.
//!
//! Two digests exist on purpose. [`hash_hex`] is the fast 32-bit structural
//! digest used by every fingerprint and diff path; it is a stability digest,
//! not a MAC, and collisions are acceptable. [`sha256_hex`] is the real
//! digest for capture-time text hashes that may be stored and compared across
//! tools; nothing on the fingerprint or diff paths calls it.

mod hash;

pub use hash::{hash32, hash_hex, sha256_hex};

use std::sync::LazyLock;

use core_grammar::{TextKind, TextSig};
use regex::Regex;

/// A blank-line break in raw text. Greedy, so a run of blank lines counts
/// once, matching how capture tools segment paragraphs.
static BLANK_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("blank-line pattern is valid"));

/// Characters stripped before any other processing: zero-width spaces and
/// joiners, BOM, soft hyphen, word joiner, Mongolian vowel separator, bidi
/// embedding/override controls, and bidi isolates.
fn is_invisible(ch: char) -> bool {
    matches!(ch,
        '\u{200B}'..='\u{200D}'
            | '\u{FEFF}'
            | '\u{00AD}'
            | '\u{2060}'
            | '\u{180E}'
            | '\u{202A}'..='\u{202E}'
            | '\u{2066}'..='\u{2069}')
}

/// Canonical form of a raw string: strip invisibles, collapse every
/// Unicode-whitespace run to a single ASCII space, trim, lowercase.
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;
    for ch in raw.chars() {
        if is_invisible(ch) {
            continue;
        }
        if ch.is_whitespace() {
            // Leading whitespace never emits; interior runs emit one space
            // lazily when the next non-space character arrives, which also
            // trims the tail for free.
            pending_space = !out.is_empty();
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        for lc in ch.to_lowercase() {
            out.push(lc);
        }
    }
    out
}

/// Size class of a raw string after normalization.
///
/// Two or more blank-line breaks in the *raw* string classify as
/// [`TextKind::Mixed`] regardless of length; otherwise the normalized
/// character count decides: empty is `none`, up to 20 is `short`, up to 150
/// is `sentence`, longer is `paragraph`.
pub fn classify_text(raw: &str) -> TextKind {
    if BLANK_LINE.find_iter(raw).count() >= 2 {
        return TextKind::Mixed;
    }
    let len = normalize(raw).chars().count();
    if len == 0 {
        TextKind::None
    } else if len <= 20 {
        TextKind::Short
    } else if len <= 150 {
        TextKind::Sentence
    } else {
        TextKind::Paragraph
    }
}

/// Build the text signal for a raw string using the fast structural digest.
/// A `none` signal carries neither length nor hash.
pub fn text_sig(raw: &str) -> TextSig {
    let kind = classify_text(raw);
    if kind == TextKind::None {
        return TextSig {
            kind,
            len: None,
            hash: None,
        };
    }
    let normalized = normalize(raw);
    TextSig {
        kind,
        len: Some(normalized.chars().count() as u32),
        hash: Some(hash_hex(&normalized)),
    }
}

/// Capture-time variant of [`text_sig`] carrying the SHA-256 digest instead
/// of the short structural one.
pub fn text_sig_sha256(raw: &str) -> TextSig {
    let kind = classify_text(raw);
    if kind == TextKind::None {
        return TextSig {
            kind,
            len: None,
            hash: None,
        };
    }
    let normalized = normalize(raw);
    TextSig {
        kind,
        len: Some(normalized.chars().count() as u32),
        hash: Some(sha256_hex(&normalized)),
    }
}
