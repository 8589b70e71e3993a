// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

//! Constant-to-name translation tables.
//!
//! Tables are `'static` and immutable; they can be consulted from anywhere
//! without synchronization. Three rendering styles are supported, mirroring
//! how much the reader wants the raw numbers preserved.

use clap::ValueEnum;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum XlatStyle {
    /// Bare numeric values, no lookup.
    Raw,
    /// Symbolic names; unknown values keep the raw number plus a sentinel.
    #[default]
    Symbolic,
    /// Symbolic names with the raw value in an inline comment.
    Verbose,
}

/// An ordered `(value, name)` table. Entries must be sorted ascending by
/// value; `lookup_le` relies on it.
pub struct Xlat {
    entries: &'static [(u32, &'static str)],
}

impl Xlat {
    pub const fn new(entries: &'static [(u32, &'static str)]) -> Self {
        Xlat { entries }
    }

    pub fn lookup(&self, val: u32) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(v, _)| *v == val)
            .map(|(_, name)| *name)
    }

    /// Reverse lookup, name to value.
    pub fn lookup_name(&self, name: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(_, n)| *n == name)
            .map(|(v, _)| *v)
    }

    /// Greatest entry at or below `val`, for namespace-prefix decomposition.
    pub fn lookup_le(&self, val: u32) -> Option<(u32, &'static str)> {
        self.entries
            .iter()
            .take_while(|(v, _)| *v <= val)
            .last()
            .copied()
    }

    /// Union of every named bit in the table.
    pub fn known_mask(&self) -> u32 {
        self.entries.iter().fold(0, |mask, (v, _)| mask | v)
    }

    pub fn entries(&self) -> &'static [(u32, &'static str)] {
        self.entries
    }

    /// Renders a scalar value. Unknown values are never dropped: they keep
    /// the raw number with `dflt` appended as a comment.
    pub fn xval(&self, val: u32, style: XlatStyle, dflt: &str) -> String {
        if style == XlatStyle::Raw {
            return format!("{val:#x}");
        }

        match self.lookup(val) {
            Some(name) if style == XlatStyle::Verbose => format!("{name} /* {val:#x} */"),
            Some(name) => name.to_owned(),
            None => format!("{val:#x} /* {dflt} */"),
        }
    }

    /// Renders a bit-flag value as the union of matched names. Residual bits
    /// outside every named flag are appended as `value & !known_mask` with
    /// the `dflt` sentinel.
    pub fn flags(&self, val: u32, style: XlatStyle, dflt: &str) -> String {
        if style == XlatStyle::Raw {
            return format!("{val:#x}");
        }

        if val == 0 {
            let name = match self.lookup(0) {
                Some(name) => name.to_owned(),
                None => "0".to_owned(),
            };
            return if style == XlatStyle::Verbose {
                format!("{name} /* 0x0 */")
            } else {
                name
            };
        }

        let mut parts = Vec::new();
        for (bit, name) in self.entries {
            if *bit != 0 && val & *bit == *bit {
                parts.push((*name).to_owned());
            }
        }

        let residual = val & !self.known_mask();
        if residual != 0 {
            parts.push(format!("{residual:#x} /* {dflt} */"));
        }

        let joined = parts.join("|");
        if style == XlatStyle::Verbose {
            format!("{joined} /* {val:#x} */")
        } else {
            joined
        }
    }
}
