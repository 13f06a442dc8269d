// incfix: Bulk #include rewriting for header renames
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Include rewrite rule tables.
//!
//! ```text
//! IncludeMapping { old_name, new_name, styles }
//!        |  expands per style (quoted first, then angle)
//!        v
//! Rule { pattern: `#include "old"`, replacement: `#include "new"` }
//! Rule { pattern: `#include <old>`, replacement: `#include <new>` }
//!
//! RuleTable  name + report description + ordered mappings + expanded rules
//!   limits()  limits.h -> llimits.h, quoted only
//!   lib()     29 prefixed headers -> plain names, quoted and angle
//! ```
//!
//! Rules are applied strictly in declaration order, one pass per rule. A later
//! rule can therefore rewrite the output of an earlier one; such pairs are
//! reported by [`RuleTable::chain_hazards`] but never reordered.

use bitflags::bitflags;
use regex::Regex;
use std::collections::BTreeSet;

use crate::error::{ConfigError, IncfixError, IncfixResult};

bitflags! {
    /// Include directive forms a mapping rewrites.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct IncludeStyle: u8 {
        /// `#include "name"`, the project-local form.
        const QUOTED = 0x01;

        /// `#include <name>`, the system form.
        const ANGLE = 0x02;
    }
}

impl std::fmt::Display for IncludeStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.contains(Self::QUOTED), self.contains(Self::ANGLE)) {
            (true, true) => write!(f, "\"\" <>"),
            (true, false) => write!(f, "\"\""),
            (false, true) => write!(f, "<>"),
            (false, false) => write!(f, "-"),
        }
    }
}

/// Header pairs renamed by the `lib` table, in application order.
pub const LIB_HEADER_RENAMES: [(&str, &str); 29] = [
    ("lapi.h", "api.h"),
    ("lauxlib.h", "auxlib.h"),
    ("lbaselib.h", "baselib.h"),
    ("lcode.h", "code.h"),
    ("ldblib.h", "dblib.h"),
    ("ldebug.h", "debug.h"),
    ("ldo.h", "do.h"),
    ("ldump.h", "dump.h"),
    ("lfunc.h", "func.h"),
    ("lgc.h", "gc.h"),
    ("linit.h", "init.h"),
    ("liolib.h", "iolib.h"),
    ("llex.h", "lex.h"),
    ("llimits.h", "limits.h"),
    ("lmathlib.h", "mathlib.h"),
    ("lmem.h", "mem.h"),
    ("lobject.h", "object.h"),
    ("lopcodes.h", "opcodes.h"),
    ("loslib.h", "oslib.h"),
    ("lparser.h", "parser.h"),
    ("lstate.h", "state.h"),
    ("lstring.h", "string.h"),
    ("lstrlib.h", "strlib.h"),
    ("ltable.h", "table.h"),
    ("ltablib.h", "tablib.h"),
    ("ltm.h", "tm.h"),
    ("lundump.h", "undump.h"),
    ("lvm.h", "vm.h"),
    ("lzio.h", "zio.h"),
];

/// Header renamed by the `limits` table (old, new).
pub const LIMITS_HEADER_RENAME: (&str, &str) = ("limits.h", "llimits.h");

/// Characters allowed in a header name supplied through configuration.
const HEADER_NAME_PATTERN: &str = r"^[A-Za-z0-9_][A-Za-z0-9_./+-]*$";

/// A literal substring replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pattern: String,
    replacement: String,
}

impl Rule {
    /// Creates a rule replacing every occurrence of `pattern` by `replacement`.
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }

    /// Returns the text searched for.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns the text substituted in.
    #[must_use]
    pub fn replacement(&self) -> &str {
        &self.replacement
    }
}

/// Old header name, new header name, and the include forms to rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeMapping {
    old_name: String,
    new_name: String,
    styles: IncludeStyle,
}

impl IncludeMapping {
    pub fn new(
        old_name: impl Into<String>,
        new_name: impl Into<String>,
        styles: IncludeStyle,
    ) -> Self {
        Self {
            old_name: old_name.into(),
            new_name: new_name.into(),
            styles,
        }
    }

    #[must_use]
    pub fn old_name(&self) -> &str {
        &self.old_name
    }

    #[must_use]
    pub fn new_name(&self) -> &str {
        &self.new_name
    }

    #[must_use]
    pub const fn styles(&self) -> IncludeStyle {
        self.styles
    }

    /// Expands to one literal rule per style, quoted before angle.
    #[must_use]
    pub fn rules(&self) -> Vec<Rule> {
        let mut rules = Vec::with_capacity(2);
        if self.styles.contains(IncludeStyle::QUOTED) {
            rules.push(Rule::new(
                format!("#include \"{}\"", self.old_name),
                format!("#include \"{}\"", self.new_name),
            ));
        }
        if self.styles.contains(IncludeStyle::ANGLE) {
            rules.push(Rule::new(
                format!("#include <{}>", self.old_name),
                format!("#include <{}>", self.new_name),
            ));
        }
        rules
    }
}

/// Two mappings where the later one rewrites what the earlier one produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainHazard {
    pub earlier: IncludeMapping,
    pub later: IncludeMapping,
}

impl std::fmt::Display for ChainHazard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "'{}' -> '{}' is rewritten again by '{}' -> '{}'",
            self.earlier.old_name,
            self.earlier.new_name,
            self.later.old_name,
            self.later.new_name
        )
    }
}

/// An immutable, ordered rule table.
#[derive(Debug, Clone)]
pub struct RuleTable {
    name: String,
    description: String,
    mappings: Vec<IncludeMapping>,
    rules: Vec<Rule>,
}

impl RuleTable {
    /// Builds a table, validating header names and rejecting duplicate old names.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a header name contains characters
    /// outside `[A-Za-z0-9_./+-]`, or if two mappings share an old name.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        mappings: Vec<IncludeMapping>,
    ) -> IncfixResult<Self> {
        let name = name.into();
        let header_name = Regex::new(HEADER_NAME_PATTERN)
            .map_err(|e| IncfixError::Other(format!("header name regex: {e}").into()))?;

        let mut seen = BTreeSet::new();
        for mapping in &mappings {
            for header in [mapping.old_name(), mapping.new_name()] {
                if !header_name.is_match(header) {
                    return Err(invalid_mapping(
                        &name,
                        format!("'{header}' is not a valid header name"),
                    ));
                }
            }
            if !seen.insert(mapping.old_name()) {
                return Err(invalid_mapping(
                    &name,
                    format!("duplicate header '{}'", mapping.old_name()),
                ));
            }
        }

        let rules = mappings.iter().flat_map(IncludeMapping::rules).collect();
        Ok(Self {
            name,
            description: description.into(),
            mappings,
            rules,
        })
    }

    /// The `limits.h` normalizer table. Angle includes name the system header
    /// and are left alone.
    #[must_use]
    pub fn limits() -> Self {
        let (old, new) = LIMITS_HEADER_RENAME;
        Self::from_trusted(
            "limits",
            "limits include",
            vec![IncludeMapping::new(old, new, IncludeStyle::QUOTED)],
        )
    }

    /// The prefixed-to-plain library header table.
    #[must_use]
    pub fn lib() -> Self {
        Self::from_trusted(
            "lib",
            "includes",
            LIB_HEADER_RENAMES
                .iter()
                .map(|(old, new)| IncludeMapping::new(*old, *new, IncludeStyle::all()))
                .collect(),
        )
    }

    fn from_trusted(name: &str, description: &str, mappings: Vec<IncludeMapping>) -> Self {
        let rules = mappings.iter().flat_map(IncludeMapping::rules).collect();
        Self {
            name: name.to_string(),
            description: description.to_string(),
            mappings,
            rules,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text used in `Updating <description> in <path>`.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn mappings(&self) -> &[IncludeMapping] {
        &self.mappings
    }

    /// Literal rules in application order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Finds mapping pairs where a later mapping's old name equals an earlier
    /// mapping's new name for a shared include style.
    #[must_use]
    pub fn chain_hazards(&self) -> Vec<ChainHazard> {
        let mut hazards = Vec::new();
        for (i, earlier) in self.mappings.iter().enumerate() {
            for later in &self.mappings[i + 1..] {
                if earlier.new_name == later.old_name && earlier.styles.intersects(later.styles) {
                    hazards.push(ChainHazard {
                        earlier: earlier.clone(),
                        later: later.clone(),
                    });
                }
            }
        }
        hazards
    }

    /// Formats the table for display, one mapping per line.
    #[must_use]
    pub fn format_mappings(&self) -> Vec<String> {
        let width = self
            .mappings
            .iter()
            .map(|m| m.old_name.len())
            .max()
            .unwrap_or(0);

        self.mappings
            .iter()
            .map(|m| format!("{:<width$} -> {}  [{}]", m.old_name, m.new_name, m.styles))
            .collect()
    }
}

fn invalid_mapping(table: &str, message: String) -> IncfixError {
    ConfigError::InvalidValue {
        section: table.to_string(),
        key: "mappings".to_string(),
        message,
    }
    .into()
}
