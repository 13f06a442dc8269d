// incfix: Bulk #include rewriting for header renames
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Source-file text decoding with a lenient invalid-byte policy.
//!
//! ```text
//! file bytes --(decode, policy)--> UTF-8 text --(rules)--> UTF-8 text
//!                                                              |
//! file bytes <-------------------(encode)----------------------+
//!
//! Utf8  invalid sequences dropped (Ignore) or U+FFFD (Replace)
//! Acp   Windows-1252 via encoding_rs
//! Oem   IBM866 via encoding_rs
//! ```
//!
//! Decoding never fails: binary or oddly encoded files pass through the
//! rewriter instead of aborting the run.

use encoding_rs::{IBM866, WINDOWS_1252};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Text encoding used to read and write source files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// UTF-8 (code page 65001)
    #[default]
    Utf8,
    /// Active Code Page - typically Windows-1252
    Acp,
    /// OEM Code Page - IBM866
    Oem,
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Utf8 => write!(f, "utf8"),
            Self::Acp => write!(f, "acp"),
            Self::Oem => write!(f, "oem"),
        }
    }
}

/// What to do with byte sequences that are invalid in the source encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodePolicy {
    /// Drop invalid bytes.
    #[default]
    Ignore,
    /// Substitute U+FFFD for each invalid sequence.
    Replace,
}

impl std::fmt::Display for DecodePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ignore => write!(f, "ignore"),
            Self::Replace => write!(f, "replace"),
        }
    }
}

/// Decodes file bytes to UTF-8 text.
///
/// Returns borrowed text when the input is already valid UTF-8.
///
/// # Example
/// ```
/// use incfix::utility::encoding::{decode, DecodePolicy, Encoding};
///
/// let text = decode(Encoding::Utf8, DecodePolicy::Ignore, b"#include \xff\"lapi.h\"");
/// assert_eq!(text, "#include \"lapi.h\"");
///
/// let cp1252 = decode(Encoding::Acp, DecodePolicy::Ignore, b"caf\xe9");
/// assert_eq!(cp1252, "café");
/// ```
#[must_use]
pub fn decode(encoding: Encoding, policy: DecodePolicy, bytes: &[u8]) -> Cow<'_, str> {
    match encoding {
        Encoding::Utf8 => match policy {
            DecodePolicy::Ignore => utf8_ignoring_invalid(bytes),
            DecodePolicy::Replace => String::from_utf8_lossy(bytes),
        },
        // Single-byte code pages map every byte, there is nothing to drop.
        Encoding::Acp => {
            let (result, _had_errors) = WINDOWS_1252.decode_without_bom_handling(bytes);
            result
        }
        Encoding::Oem => {
            let (result, _had_errors) = IBM866.decode_without_bom_handling(bytes);
            result
        }
    }
}

/// Encodes UTF-8 text back to file bytes.
#[must_use]
pub fn encode(encoding: Encoding, text: &str) -> Cow<'_, [u8]> {
    match encoding {
        Encoding::Utf8 => Cow::Borrowed(text.as_bytes()),
        Encoding::Acp => {
            let (bytes, _, _had_unmappable) = WINDOWS_1252.encode(text);
            bytes
        }
        Encoding::Oem => {
            let (bytes, _, _had_unmappable) = IBM866.encode(text);
            bytes
        }
    }
}

fn utf8_ignoring_invalid(bytes: &[u8]) -> Cow<'_, str> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Cow::Borrowed(text);
    }

    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    Cow::Owned(text)
}
