// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

#![no_std]

pub mod ioctls;
pub mod kernel_types;

/// Marker for types that may be reconstructed from raw bytes fetched out of
/// traced-process memory.
///
/// # Safety
///
/// Implementors must be `#[repr(C)]` (or `#[repr(C, packed)]`) and valid for
/// every bit pattern; the remote reader materializes them straight from a
/// byte buffer.
pub unsafe trait FromBytes: Copy {}

/// ABI of the traced process, selected once per process from its pointer
/// width. Structures whose layout depends on it carry a `*Compat` mirror.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Personality {
    #[default]
    Bits64,
    Bits32,
}

/// Logical structures that have a distinct 32-bit layout. The decode
/// routines only ever see the native type; the remote reader converts.
pub trait HasCompat: Sized {
    type Compat: FromBytes;

    fn from_compat(compat: Self::Compat) -> Self;
}
