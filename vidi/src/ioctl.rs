// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

//! Two-phase decode coordination.
//!
//! An ioctl is observed twice, at entry and at return, and the argument
//! structure may be rewritten by the kernel in between. The coordinator owns
//! the per-call state that spans the two observations and drives the
//! per-command routine once per phase; everything the routine produces is
//! appended to the sink even when a remote read failed partway.

use std::io::Write;

use vidi_common::{ioctls, FromBytes, HasCompat, Personality};

use crate::{
    remote::{self, MemFail, RemoteMem, StringRead},
    v4l2,
    xlat::{Xlat, XlatStyle},
};

/// Append a formatted fragment to the decode output.
#[macro_export]
macro_rules! outf {
    ($ctx:expr, $($arg:tt)*) => {
        $ctx.push_fmt(format_args!($($arg)*))
    };
}

/// Append a literal fragment to the decode output.
#[macro_export]
macro_rules! outs {
    ($ctx:expr, $s:expr) => {
        $ctx.push($s)
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Exiting,
}

/// The only status that ever escapes this subsystem. Malformed or
/// unreadable payloads degrade the rendering, never the status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStatus {
    /// Everything interesting was rendered; no exit-phase work remains.
    FullyDecoded,
    /// The routine rendered the input-known portion and wants the exit
    /// observation as well.
    ContinueAtExit,
    /// Nobody claims this command; no structure-specific text was emitted.
    UndecodedPassthrough,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Read,
    Write,
    ReadWrite,
}

/// How the entry-phase and exit-phase fragments of one call join up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Exit fields continue the structure opened at entry: `", "`.
    Continuation,
    /// Entry and exit are before/after states of the same structure:
    /// `"} => {"`.
    Reopen,
    /// A single rewritten value: `" => "`.
    Arrow,
}

pub struct CommandDescriptor {
    /// Full native request code.
    pub code: u32,
    /// Full 32-bit-personality request code; equal to `code` for commands
    /// whose payload has the same layout under both personalities.
    pub code_compat: u32,
    pub name: &'static str,
    pub dir: Direction,
    pub transition: Transition,
    pub decode: fn(&mut DecodeCtx<'_>) -> DecodeStatus,
}

/// One observation of a traced call, as reported by the tracer.
#[derive(Debug, Clone, Copy)]
pub struct CallInfo {
    pub pid: i32,
    pub personality: Personality,
    pub code: u32,
    pub arg: u64,
    pub phase: Phase,
    /// Whether the call returned an error; meaningful at exit only.
    pub returned_error: bool,
}

/// Everything a decode routine may touch during one phase.
pub struct DecodeCtx<'a> {
    pub pid: i32,
    pub personality: Personality,
    pub code: u32,
    pub arg: u64,
    phase: Phase,
    returned_error: bool,
    transition: Transition,
    style: XlatStyle,
    mem: &'a dyn RemoteMem,
    out: String,
    scratch: u64,
    sep_done: bool,
}

impl<'a> DecodeCtx<'a> {
    fn new(
        call: &CallInfo,
        desc: &'static CommandDescriptor,
        mem: &'a dyn RemoteMem,
        style: XlatStyle,
        scratch: u64,
    ) -> Self {
        DecodeCtx {
            pid: call.pid,
            personality: call.personality,
            code: call.code,
            arg: call.arg,
            phase: call.phase,
            returned_error: call.returned_error,
            transition: desc.transition,
            style,
            mem,
            out: String::new(),
            scratch,
            sep_done: false,
        }
    }

    pub fn entering(&self) -> bool {
        self.phase == Phase::Entering
    }

    pub fn exiting(&self) -> bool {
        self.phase == Phase::Exiting
    }

    /// The traced call returned an error; kernel-populated fields must not
    /// be rendered.
    pub fn syserror(&self) -> bool {
        self.returned_error
    }

    pub fn push(&mut self, s: &str) {
        self.out.push_str(s);
    }

    pub fn push_fmt(&mut self, args: std::fmt::Arguments<'_>) {
        use std::fmt::Write as _;
        let _ = self.out.write_fmt(args);
    }

    /// Emits the phase-transition separator. The separator kind belongs to
    /// the command descriptor, not the routine, and it appears exactly once
    /// per call, on the exit phase.
    pub fn sep(&mut self) {
        debug_assert!(self.exiting());
        if self.sep_done {
            return;
        }
        self.sep_done = true;
        match self.transition {
            Transition::Continuation => self.out.push_str(", "),
            Transition::Reopen => self.out.push_str("} => {"),
            Transition::Arrow => self.out.push_str(" => "),
        }
    }

    pub fn scratch(&self) -> u64 {
        self.scratch
    }

    pub fn set_scratch(&mut self, value: u64) {
        self.scratch = value;
    }

    pub fn mem(&self) -> &'a dyn RemoteMem {
        self.mem
    }

    pub fn read<T: FromBytes>(&self, addr: u64) -> Result<T, MemFail> {
        remote::read_struct(self.mem, self.pid, addr)
    }

    pub fn read_pers<T: FromBytes + HasCompat>(&self, addr: u64) -> Result<T, MemFail> {
        remote::read_struct_pers(self.mem, self.pid, addr, self.personality)
    }

    pub fn read_cstring(&self, addr: u64, max_len: usize) -> Result<StringRead, MemFail> {
        remote::read_cstring(self.mem, self.pid, addr, max_len)
    }

    pub fn xval(&self, table: &Xlat, val: u32, dflt: &str) -> String {
        table.xval(val, self.style, dflt)
    }

    pub fn flags(&self, table: &Xlat, val: u32, dflt: &str) -> String {
        table.flags(val, self.style, dflt)
    }

    pub fn style(&self) -> XlatStyle {
        self.style
    }
}

#[derive(Debug, Clone, Copy)]
struct CallState {
    pid: i32,
    code: u32,
    scratch: u64,
}

/// Drives per-command routines across the two observation points. The only
/// mutable state is the small open table of in-flight calls; descriptor and
/// translation tables are immutable and shared.
pub struct Coordinator {
    style: XlatStyle,
    calls: Vec<Option<CallState>>,
}

impl Coordinator {
    pub fn new(style: XlatStyle) -> Self {
        Coordinator {
            style,
            calls: Vec::new(),
        }
    }

    fn insert(&mut self, pid: i32, code: u32) -> usize {
        let state = CallState {
            pid,
            code,
            scratch: 0,
        };
        match self.calls.iter().position(Option::is_none) {
            Some(slot) => {
                self.calls[slot] = Some(state);
                slot
            }
            None => {
                self.calls.push(Some(state));
                self.calls.len() - 1
            }
        }
    }

    fn find(&self, pid: i32) -> Option<usize> {
        self.calls
            .iter()
            .position(|s| s.is_some_and(|s| s.pid == pid))
    }

    /// Decodes one phase of one traced call, appending all of its text to
    /// `sink` before returning. Unknown commands are a successful
    /// passthrough, not an error.
    pub fn decode(
        &mut self,
        call: &CallInfo,
        mem: &dyn RemoteMem,
        sink: &mut dyn Write,
    ) -> DecodeStatus {
        if ioctls::ioc_type(call.code) != ioctls::V4L2_IOCTL_TYPE {
            return DecodeStatus::UndecodedPassthrough;
        }

        let Some(desc) = v4l2::lookup_command(call.code) else {
            if call.phase == Phase::Exiting {
                if let Some(slot) = self.find(call.pid) {
                    self.calls[slot] = None;
                }
            }
            return DecodeStatus::UndecodedPassthrough;
        };

        match call.phase {
            Phase::Entering => {
                let slot = self.insert(call.pid, call.code);
                let mut ctx = DecodeCtx::new(call, desc, mem, self.style, 0);
                let status = (desc.decode)(&mut ctx);

                match status {
                    DecodeStatus::ContinueAtExit => {
                        if let Some(state) = &mut self.calls[slot] {
                            state.scratch = ctx.scratch;
                        }
                    }
                    _ => self.calls[slot] = None,
                }

                flush(sink, &ctx.out);
                status
            }
            Phase::Exiting => {
                let Some(slot) = self.find(call.pid) else {
                    // Entry was never observed (e.g. we attached mid-call);
                    // there is no entry text to complete.
                    return DecodeStatus::UndecodedPassthrough;
                };

                let Some(state) = self.calls[slot].take() else {
                    return DecodeStatus::UndecodedPassthrough;
                };
                if state.code != call.code {
                    log::debug!(
                        "pid {} exited ioctl {:#x} while {:#x} was in flight",
                        call.pid,
                        call.code,
                        state.code
                    );
                    return DecodeStatus::UndecodedPassthrough;
                }

                let mut ctx = DecodeCtx::new(call, desc, mem, self.style, state.scratch);
                let status = (desc.decode)(&mut ctx);

                flush(sink, &ctx.out);
                status
            }
        }
    }
}

fn flush(sink: &mut dyn Write, text: &str) {
    if let Err(err) = sink.write_all(text.as_bytes()) {
        log::warn!("output sink dropped {} bytes: {err}", text.len());
    }
}
