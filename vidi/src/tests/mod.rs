// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

mod compat;
mod controls;
mod decode;
mod formats;

use vidi_common::Personality;

use crate::{
    ioctl::{CallInfo, Coordinator, DecodeStatus, Phase},
    remote::{MemFail, RemoteMem},
    xlat::XlatStyle,
};

pub(crate) const PID: i32 = 1234;
pub(crate) const ARG: u64 = 0x7f00_0000_1000;

/// In-memory stand-in for the traced process. Reads stop at the end of the
/// containing region, so placing a region shorter than the requested span
/// injects short reads and faults.
pub(crate) struct FakeMem {
    regions: Vec<(u64, Vec<u8>)>,
}

impl FakeMem {
    pub(crate) fn new() -> Self {
        FakeMem { regions: Vec::new() }
    }

    pub(crate) fn add_bytes(&mut self, addr: u64, bytes: &[u8]) {
        self.regions.push((addr, bytes.to_vec()));
    }

    pub(crate) fn add_struct<T: Copy>(&mut self, addr: u64, val: &T) {
        let bytes = unsafe {
            std::slice::from_raw_parts(
                (val as *const T).cast::<u8>(),
                std::mem::size_of::<T>(),
            )
        };
        self.add_bytes(addr, bytes);
    }
}

impl RemoteMem for FakeMem {
    fn read(&self, _pid: i32, addr: u64, buf: &mut [u8]) -> Result<usize, MemFail> {
        for (base, data) in &self.regions {
            if addr >= *base && addr < *base + data.len() as u64 {
                let offset = (addr - base) as usize;
                let n = (data.len() - offset).min(buf.len());
                buf[..n].copy_from_slice(&data[offset..offset + n]);
                return Ok(n);
            }
        }
        Err(MemFail)
    }
}

/// NUL-padded fixed-size char array, as the kernel fills name fields.
pub(crate) fn carray<const N: usize>(s: &str) -> [u8; N] {
    let mut arr = [0u8; N];
    arr[..s.len()].copy_from_slice(s.as_bytes());
    arr
}

pub(crate) fn u32_words(words: &[u32]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_le_bytes()).collect()
}

pub(crate) fn call_info(code: u32, personality: Personality, phase: Phase) -> CallInfo {
    CallInfo {
        pid: PID,
        personality,
        code,
        arg: ARG,
        phase,
        returned_error: false,
    }
}

/// Drives one call through both observation points the way the tracer
/// does: the exit phase runs only when the entry asked for it.
pub(crate) fn decode_two_styled(
    style: XlatStyle,
    entry_mem: &FakeMem,
    exit_mem: &FakeMem,
    code: u32,
    personality: Personality,
    returned_error: bool,
) -> (String, DecodeStatus) {
    let mut coord = Coordinator::new(style);
    let mut sink = Vec::new();

    let entry = call_info(code, personality, Phase::Entering);
    let mut status = coord.decode(&entry, entry_mem, &mut sink);
    if status == DecodeStatus::ContinueAtExit {
        let exit = CallInfo {
            phase: Phase::Exiting,
            returned_error,
            ..entry
        };
        status = coord.decode(&exit, exit_mem, &mut sink);
    }

    (String::from_utf8(sink).unwrap(), status)
}

pub(crate) fn decode_two(
    entry_mem: &FakeMem,
    exit_mem: &FakeMem,
    code: u32,
    personality: Personality,
    returned_error: bool,
) -> (String, DecodeStatus) {
    decode_two_styled(
        XlatStyle::Symbolic,
        entry_mem,
        exit_mem,
        code,
        personality,
        returned_error,
    )
}

/// Single-memory success case, the common shape.
pub(crate) fn decode_ok(mem: &FakeMem, code: u32) -> (String, DecodeStatus) {
    decode_two(mem, mem, code, Personality::Bits64, false)
}
