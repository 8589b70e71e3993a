// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

//! Small text helpers shared by the decode routines.

use std::fmt::Write as _;

/// Renders a traced-space address, `NULL` for zero.
pub fn addr(a: u64) -> String {
    if a == 0 {
        "NULL".to_owned()
    } else {
        format!("{a:#x}")
    }
}

fn push_escaped(out: &mut String, byte: u8) {
    match byte {
        b'"' => out.push_str("\\\""),
        b'\\' => out.push_str("\\\\"),
        0x20..=0x7e => out.push(byte as char),
        _ => {
            let _ = write!(out, "\\x{byte:02x}");
        }
    }
}

/// Quotes a NUL-terminated byte array embedded in a structure. A missing
/// terminator means the field filled up; the rendering marks it.
pub fn quoted_cstring(bytes: &[u8]) -> String {
    let nul = bytes.iter().position(|&b| b == 0);
    let end = nul.unwrap_or(bytes.len());
    let mut out = quoted_bytes(&bytes[..end]);
    if nul.is_none() {
        out.push_str("...");
    }
    out
}

/// Quotes a byte slice, escaping quotes and backslashes and rendering
/// non-printable bytes as hex.
pub fn quoted_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() + 2);
    out.push('"');
    for &b in bytes {
        push_escaped(&mut out, b);
    }
    out.push('"');
    out
}

/// `KERNEL_VERSION(major, minor, patch)`, as the kernel packs it into
/// `v4l2_capability.version`.
pub fn kernel_version(version: u32) -> String {
    format!(
        "KERNEL_VERSION({}, {}, {})",
        version >> 16,
        (version >> 8) & 0xff,
        version & 0xff
    )
}
