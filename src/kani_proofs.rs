//! Kani proof harnesses for checker properties.
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::check::{prefix_value, switch_value, Keyword};
use crate::{EditValue, Peg, SplitUrl};

/// Characters used to build small prefixes: a name char, a dot and a slash
const PREFIX_CHARS: &[u8] = b"a./";

fn arbitrary_prefix() -> String {
    let len: usize = kani::any();
    let len = len % 5;
    (0..len)
        .map(|_| {
            let idx: usize = kani::any();
            PREFIX_CHARS[idx % PREFIX_CHARS.len()] as char
        })
        .collect()
}

impl kani::Arbitrary for Peg {
    fn any() -> Self {
        let rev: u64 = kani::any();
        kani::assume(rev > 0);
        Peg::new(rev).expect("positive by assumption")
    }
}

/// Proof: every constructed peg is strictly positive
#[kani::proof]
fn proof_peg_positive() {
    let rev: u64 = kani::any();
    match Peg::new(rev) {
        Ok(peg) => assert!(peg.get() >= 1),
        Err(_) => assert_eq!(rev, 0),
    }
}

/// Proof: a peg survives a trip through its decimal form
#[kani::proof]
#[kani::unwind(22)]
fn proof_peg_display_parse() {
    let peg: Peg = kani::any();
    let parsed = Peg::parse(&peg.to_string()).expect("decimal form parses");
    assert_eq!(parsed, peg);
}

/// Proof: prefix normalization starts and ends with a slash and is idempotent
#[kani::proof]
#[kani::unwind(8)]
fn proof_prefix_normalized() {
    let raw = arbitrary_prefix();
    let once = prefix_value(&raw).expect("no forbidden chars");
    assert!(once.starts_with('/') && once.ends_with('/'));
    assert_eq!(prefix_value(&once).expect("normalized input"), once);
}

/// Proof: a switch yields either nothing or its own keyword
#[kani::proof]
fn proof_switch_bool() {
    let on: bool = kani::any();
    let value = switch_value(Keyword::Tags, &EditValue::Bool(on)).expect("booleans accepted");
    assert_eq!(value.is_empty(), !on);
}

/// Proof: unsplitting the default record gives the repository root
#[kani::proof]
fn proof_default_unsplit() {
    assert_eq!(SplitUrl::default().to_string(), "^/");
}
