// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

//! Coordinator-level behavior: phase bookkeeping, passthrough, degraded
//! reads.

use vidi_common::{ioctls, Personality};

use crate::ioctl::{CallInfo, Coordinator, DecodeStatus, Phase};
use crate::xlat::XlatStyle;

use super::*;

#[test]
fn unknown_command_passes_through_without_output() {
    let mem = FakeMem::new();
    let mut coord = Coordinator::new(XlatStyle::Symbolic);
    let mut sink = Vec::new();

    // Type 'V', a command number no descriptor claims.
    let code = 0xc004_56fe;
    let entry = call_info(code, Personality::Bits64, Phase::Entering);
    assert_eq!(
        coord.decode(&entry, &mem, &mut sink),
        DecodeStatus::UndecodedPassthrough
    );

    let exit = CallInfo {
        phase: Phase::Exiting,
        ..entry
    };
    assert_eq!(
        coord.decode(&exit, &mem, &mut sink),
        DecodeStatus::UndecodedPassthrough
    );
    assert!(sink.is_empty());
}

#[test]
fn non_v4l2_code_passes_through() {
    let mem = FakeMem::new();
    let mut coord = Coordinator::new(XlatStyle::Symbolic);
    let mut sink = Vec::new();

    // TCGETS: not type 'V'.
    let entry = call_info(0x5401, Personality::Bits64, Phase::Entering);
    assert_eq!(
        coord.decode(&entry, &mem, &mut sink),
        DecodeStatus::UndecodedPassthrough
    );
    assert!(sink.is_empty());
}

#[test]
fn exit_without_entry_is_passthrough() {
    let mem = FakeMem::new();
    let mut coord = Coordinator::new(XlatStyle::Symbolic);
    let mut sink = Vec::new();

    let exit = call_info(ioctls::VIDIOC_QUERYCAP, Personality::Bits64, Phase::Exiting);
    assert_eq!(
        coord.decode(&exit, &mem, &mut sink),
        DecodeStatus::UndecodedPassthrough
    );
    assert!(sink.is_empty());
}

#[test]
fn unreadable_argument_degrades_to_address() {
    let mem = FakeMem::new();
    let (text, status) = decode_ok(&mem, ioctls::VIDIOC_QUERYBUF);

    assert_eq!(text, "0x7f0000001000");
    assert_eq!(status, DecodeStatus::FullyDecoded);
}

#[test]
fn unknown_buffer_type_closes_early() {
    let mut mem = FakeMem::new();
    let mut fmt = vidi_common::kernel_types::Format::default();
    fmt.typ = 99;
    mem.add_struct(ARG, &fmt);

    let (text, status) = decode_ok(&mem, ioctls::VIDIOC_S_FMT);
    assert_eq!(text, "{type=0x63 /* V4L2_BUF_TYPE_??? */}");
    assert_eq!(status, DecodeStatus::FullyDecoded);
}

#[test]
fn write_only_command_decodes_at_entry() {
    let mut mem = FakeMem::new();
    mem.add_struct(ARG, &1i32);

    let mut coord = Coordinator::new(XlatStyle::Symbolic);
    let mut sink = Vec::new();
    let entry = call_info(ioctls::VIDIOC_STREAMON, Personality::Bits64, Phase::Entering);
    let status = coord.decode(&entry, &mem, &mut sink);

    assert_eq!(status, DecodeStatus::FullyDecoded);
    assert_eq!(
        String::from_utf8(sink).unwrap(),
        "[V4L2_BUF_TYPE_VIDEO_CAPTURE]"
    );
}

#[test]
fn raw_style_prints_bare_numbers() {
    let mut mem = FakeMem::new();
    mem.add_struct(ARG, &1i32);

    let (text, _) = decode_two_styled(
        XlatStyle::Raw,
        &mem,
        &mem,
        ioctls::VIDIOC_STREAMON,
        Personality::Bits64,
        false,
    );
    assert_eq!(text, "[0x1]");
}
