// incfix: Bulk #include rewriting for header renames
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! encoding
//!   decode()  UTF-8 (ignore/replace invalid), CP1252, IBM866 --> UTF-8
//!   encode()  UTF-8 --> file bytes
//! fs
//!   walk:  find_files(), WalkOptions
//! ```

pub mod encoding;
pub mod fs;
