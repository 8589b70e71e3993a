// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

//! Bounded, fallible reads out of traced-process memory.
//!
//! Everything here degrades instead of propagating: a failed struct read is
//! atomic (no partial struct is ever interpreted), a failed array element
//! truncates the array at that point, a short string read keeps the bytes
//! that arrived. Retrying is the accessor's business, never ours.

use std::io::IoSliceMut;

use nix::{sys::uio::process_vm_readv, sys::uio::RemoteIoVec, unistd::Pid};
use vidi_common::{FromBytes, HasCompat, Personality};

/// A remote read failed outright; the caller renders an address placeholder
/// and moves on to sibling fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemFail;

/// Cap on rendered array elements; longer arrays are abbreviated.
pub const ARRAY_PRINT_MAX: u32 = 32;

pub trait RemoteMem {
    /// Reads up to `buf.len()` bytes at `addr` in the traced process.
    /// Returns the number of bytes actually read; short reads happen at
    /// mapping boundaries.
    fn read(&self, pid: i32, addr: u64, buf: &mut [u8]) -> Result<usize, MemFail>;
}

/// `process_vm_readv`-backed accessor, the production implementation.
pub struct ProcessVm;

impl RemoteMem for ProcessVm {
    fn read(&self, pid: i32, addr: u64, buf: &mut [u8]) -> Result<usize, MemFail> {
        let len = buf.len();
        let mut local = [IoSliceMut::new(buf)];
        let remote = [RemoteIoVec {
            base: addr as usize,
            len,
        }];

        match process_vm_readv(Pid::from_raw(pid), &mut local, &remote) {
            Ok(0) | Err(_) => Err(MemFail),
            Ok(n) => Ok(n),
        }
    }
}

/// One fixed-size read. Fails atomically: a short read is a failure.
pub fn read_struct<T: FromBytes>(
    mem: &dyn RemoteMem,
    pid: i32,
    addr: u64,
) -> Result<T, MemFail> {
    let mut val = std::mem::MaybeUninit::<T>::zeroed();
    let size = std::mem::size_of::<T>();
    let buf =
        unsafe { std::slice::from_raw_parts_mut(val.as_mut_ptr().cast::<u8>(), size) };

    let n = mem.read(pid, addr, buf)?;
    if n < size {
        return Err(MemFail);
    }

    // FromBytes guarantees any bit pattern is a valid T.
    Ok(unsafe { val.assume_init() })
}

/// Reads a structure under the traced process's personality, converting the
/// compat layout to the native one.
pub fn read_struct_pers<T>(
    mem: &dyn RemoteMem,
    pid: i32,
    addr: u64,
    personality: Personality,
) -> Result<T, MemFail>
where
    T: FromBytes + HasCompat,
{
    match personality {
        Personality::Bits64 => read_struct::<T>(mem, pid, addr),
        Personality::Bits32 => read_struct::<T::Compat>(mem, pid, addr).map(T::from_compat),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayRead {
    Complete,
    Truncated,
}

/// Reads `count` elements sequentially, stopping at the first element that
/// fails to read. `each` runs exactly once per successfully read element and
/// never for a failed one. `count` is clamped to `cap` no matter what the
/// in-memory count field claimed.
pub fn read_array<T: FromBytes>(
    mem: &dyn RemoteMem,
    pid: i32,
    base: u64,
    count: u32,
    cap: u32,
    mut each: impl FnMut(usize, &T),
) -> ArrayRead {
    let clamped = count.min(cap);
    let elem_size = std::mem::size_of::<T>() as u64;

    for i in 0..clamped {
        match read_struct::<T>(mem, pid, base + u64::from(i) * elem_size) {
            Ok(elem) => each(i as usize, &elem),
            Err(MemFail) => return ArrayRead::Truncated,
        }
    }

    if count > cap {
        ArrayRead::Truncated
    } else {
        ArrayRead::Complete
    }
}

/// Personality-aware variant of [`read_array`]; element stride follows the
/// compat layout when the traced process is 32-bit.
pub fn read_array_pers<T>(
    mem: &dyn RemoteMem,
    pid: i32,
    base: u64,
    count: u32,
    cap: u32,
    personality: Personality,
    mut each: impl FnMut(usize, &T),
) -> ArrayRead
where
    T: FromBytes + HasCompat,
{
    match personality {
        Personality::Bits64 => read_array::<T>(mem, pid, base, count, cap, each),
        Personality::Bits32 => read_array::<T::Compat>(mem, pid, base, count, cap, |i, c| {
            each(i, &T::from_compat(*c))
        }),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StringRead {
    /// Terminator found within bounds.
    Complete(Vec<u8>),
    /// `max_len` bytes read, no terminator.
    Unterminated(Vec<u8>),
    /// The read faulted partway; these bytes arrived before it did.
    Truncated(Vec<u8>),
}

impl StringRead {
    pub fn bytes(&self) -> &[u8] {
        match self {
            StringRead::Complete(b) | StringRead::Unterminated(b) | StringRead::Truncated(b) => b,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, StringRead::Complete(_))
    }
}

/// Bounded string read. Callers with a declared length of zero must not call
/// this at all; zero selects an inline-scalar rendering, not a dereference.
pub fn read_cstring(
    mem: &dyn RemoteMem,
    pid: i32,
    addr: u64,
    max_len: usize,
) -> Result<StringRead, MemFail> {
    debug_assert!(max_len > 0);

    let mut buf = vec![0u8; max_len];
    let n = mem.read(pid, addr, &mut buf)?;
    buf.truncate(n);

    if let Some(nul) = buf.iter().position(|&b| b == 0) {
        buf.truncate(nul);
        return Ok(StringRead::Complete(buf));
    }

    if n < max_len {
        Ok(StringRead::Truncated(buf))
    } else {
        Ok(StringRead::Unterminated(buf))
    }
}
