// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

//! ptrace-driven syscall loop.
//!
//! The tracee is stopped at every syscall entry and exit; only `ioctl`
//! stops reach the decoder, everything else is resumed untouched. A
//! traced call's text spans both stops, so the line is buffered and
//! emitted whole at exit.

use std::{
    collections::HashMap,
    ffi::CString,
    fs::File,
    io::{Read as _, Write},
};

use anyhow::{Context, Result};
use nix::{
    errno::Errno,
    sys::{
        ptrace,
        signal::Signal,
        wait::{waitpid, WaitStatus},
    },
    unistd::{execvp, fork, ForkResult, Pid},
};
use vidi_common::Personality;

use crate::{
    ioctl::{CallInfo, Coordinator, DecodeStatus, Phase},
    remote::ProcessVm,
    v4l2,
    xlat::XlatStyle,
};

struct PendingCall {
    fd: u64,
    code: u32,
    arg: u64,
    text: Vec<u8>,
    status: DecodeStatus,
}

pub struct Tracer {
    coordinator: Coordinator,
    personalities: HashMap<Pid, Personality>,
    pending: Option<PendingCall>,
    in_syscall: bool,
}

impl Tracer {
    pub fn new(style: XlatStyle) -> Self {
        Tracer {
            coordinator: Coordinator::new(style),
            personalities: HashMap::new(),
            pending: None,
            in_syscall: false,
        }
    }

    /// Spawns `argv` under tracing and leaves it stopped at its first
    /// signal delivery.
    pub fn spawn(&mut self, argv: &[String]) -> Result<Pid> {
        let args: Vec<CString> = argv
            .iter()
            .map(|a| CString::new(a.as_str()).context("argument contains NUL"))
            .collect::<Result<_>>()?;

        match unsafe { fork() }.context("fork")? {
            ForkResult::Child => {
                if ptrace::traceme().is_err() {
                    std::process::exit(126);
                }
                let _ = execvp(&args[0], &args);
                std::process::exit(127);
            }
            ForkResult::Parent { child } => {
                waitpid(child, None).context("waiting for initial stop")?;
                ptrace::setoptions(
                    child,
                    ptrace::Options::PTRACE_O_TRACESYSGOOD
                        | ptrace::Options::PTRACE_O_EXITKILL,
                )
                .context("setting ptrace options")?;
                Ok(child)
            }
        }
    }

    /// Attaches to a running process.
    pub fn attach(&mut self, pid: i32) -> Result<Pid> {
        let pid = Pid::from_raw(pid);
        ptrace::attach(pid).context("attaching")?;
        waitpid(pid, None).context("waiting for attach stop")?;
        ptrace::setoptions(pid, ptrace::Options::PTRACE_O_TRACESYSGOOD)
            .context("setting ptrace options")?;
        Ok(pid)
    }

    /// Runs the tracee to completion, writing one line per ioctl to `out`.
    pub fn run(&mut self, child: Pid, out: &mut dyn Write) -> Result<()> {
        let mut deliver: Option<Signal> = None;

        loop {
            ptrace::syscall(child, deliver.take()).context("resuming tracee")?;
            match waitpid(child, None).context("waiting for tracee")? {
                WaitStatus::PtraceSyscall(pid) => {
                    let entering = !self.in_syscall;
                    self.in_syscall = entering;
                    if let Err(err) = self.on_syscall_stop(pid, entering, out) {
                        log::debug!("dropping syscall stop for {pid}: {err}");
                    }
                }
                WaitStatus::Exited(pid, code) => {
                    log::debug!("{pid} exited with status {code}");
                    break;
                }
                WaitStatus::Signaled(pid, sig, _) => {
                    log::debug!("{pid} killed by {sig}");
                    break;
                }
                WaitStatus::Stopped(_, sig) => {
                    if sig != Signal::SIGTRAP {
                        deliver = Some(sig);
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn on_syscall_stop(&mut self, pid: Pid, entering: bool, out: &mut dyn Write) -> Result<()> {
        let (sysno, fd, code_reg, arg, ret) = syscall_regs(pid)?;

        if entering {
            let personality = self.personality(pid);
            if !is_ioctl(personality, sysno) {
                return Ok(());
            }
            let code = code_reg as u32;
            let call = CallInfo {
                pid: pid.as_raw(),
                personality,
                code,
                arg,
                phase: Phase::Entering,
                returned_error: false,
            };
            let mut text = Vec::new();
            let status = self.coordinator.decode(&call, &ProcessVm, &mut text);
            self.pending = Some(PendingCall {
                fd,
                code,
                arg,
                text,
                status,
            });
            return Ok(());
        }

        let Some(mut call) = self.pending.take() else {
            return Ok(());
        };
        let returned_error = ret < 0 && ret > -4096;

        if call.status == DecodeStatus::ContinueAtExit {
            let info = CallInfo {
                pid: pid.as_raw(),
                personality: self.personality(pid),
                code: call.code,
                arg: call.arg,
                phase: Phase::Exiting,
                returned_error,
            };
            call.status = self.coordinator.decode(&info, &ProcessVm, &mut call.text);
        }

        let name = match v4l2::command_name(call.code) {
            Some(name) => name.to_owned(),
            None => format!("{:#x}", call.code),
        };
        let args = if call.status == DecodeStatus::UndecodedPassthrough {
            format!("{:#x}", call.arg)
        } else {
            String::from_utf8_lossy(&call.text).into_owned()
        };
        let retval = if returned_error {
            format!("-1 {:?}", Errno::from_raw(-ret as i32))
        } else {
            format!("{ret}")
        };
        writeln!(out, "{} ioctl({}, {name}, {args}) = {retval}", pid.as_raw(), call.fd)?;
        Ok(())
    }

    fn personality(&mut self, pid: Pid) -> Personality {
        *self
            .personalities
            .entry(pid)
            .or_insert_with(|| detect_personality(pid).unwrap_or_default())
    }
}

/// `ioctl` in the legacy 32-bit syscall table, which both x86_64 and
/// aarch64 route compat tasks through.
#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
const COMPAT_SYS_IOCTL: i64 = 54;
#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
const COMPAT_SYS_IOCTL: i64 = libc::SYS_ioctl as i64;

/// A 32-bit tracee enters through the compat table, so its `ioctl` stops
/// carry a different syscall number than the native one.
fn is_ioctl(personality: Personality, sysno: i64) -> bool {
    match personality {
        Personality::Bits64 => sysno == libc::SYS_ioctl as i64,
        Personality::Bits32 => sysno == COMPAT_SYS_IOCTL,
    }
}

/// Pointer width of the tracee, from the ELF class of its executable.
fn detect_personality(pid: Pid) -> Option<Personality> {
    let mut header = [0u8; 5];
    let mut exe = File::open(format!("/proc/{pid}/exe")).ok()?;
    exe.read_exact(&mut header).ok()?;
    if &header[..4] != b"\x7fELF" {
        return None;
    }
    match header[4] {
        1 => Some(Personality::Bits32),
        2 => Some(Personality::Bits64),
        _ => None,
    }
}

/// (syscall number, arg0, arg1, arg2, return value). The return slot only
/// holds the result at exit stops.
#[cfg(target_arch = "x86_64")]
fn syscall_regs(pid: Pid) -> Result<(i64, u64, u64, u64, i64)> {
    let regs = ptrace::getregs(pid).context("reading registers")?;
    Ok((
        regs.orig_rax as i64,
        regs.rdi,
        regs.rsi,
        regs.rdx,
        regs.rax as i64,
    ))
}

#[cfg(target_arch = "aarch64")]
fn syscall_regs(pid: Pid) -> Result<(i64, u64, u64, u64, i64)> {
    let regs = ptrace::getregset::<ptrace::regset::NT_PRSTATUS>(pid)
        .context("reading registers")?;
    Ok((
        regs.regs[8] as i64,
        regs.regs[0],
        regs.regs[1],
        regs.regs[2],
        regs.regs[0] as i64,
    ))
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
fn syscall_regs(_pid: Pid) -> Result<(i64, u64, u64, u64, i64)> {
    anyhow::bail!("unsupported architecture");
}
