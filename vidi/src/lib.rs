// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

pub mod format;
pub mod ioctl;
pub mod remote;
pub mod tracer;
pub mod v4l2;
pub mod xlat;

#[cfg(test)]
mod tests;
