// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

//! Control get/set, enumeration and the extended-control array.

use vidi_common::{ioctls, kernel_types::*, Personality};

use super::*;

const CTRLS: u64 = 0x2000_0000;
const STR: u64 = 0x3000_0000;

fn queryctrl(id: u32) -> QueryCtrl {
    QueryCtrl {
        id,
        typ: 1,
        name: carray("Contrast"),
        minimum: 0,
        maximum: 255,
        step: 1,
        default_value: 128,
        flags: 0,
        reserved: [0; 2],
    }
}

#[test]
fn g_ctrl_reads_the_value_back_at_exit() {
    let mut entry = FakeMem::new();
    entry.add_struct(
        ARG,
        &Control {
            id: 0x0098_0900,
            value: 0,
        },
    );
    let mut exit = FakeMem::new();
    exit.add_struct(
        ARG,
        &Control {
            id: 0x0098_0900,
            value: 128,
        },
    );

    let (text, _) = decode_two(&entry, &exit, ioctls::VIDIOC_G_CTRL, Personality::Bits64, false);
    assert_eq!(text, "{id=V4L2_CID_BRIGHTNESS, value=128}");
}

#[test]
fn s_ctrl_shows_the_clamped_value() {
    let mut entry = FakeMem::new();
    entry.add_struct(
        ARG,
        &Control {
            id: 0x0098_0900,
            value: 300,
        },
    );
    let mut exit = FakeMem::new();
    exit.add_struct(
        ARG,
        &Control {
            id: 0x0098_0900,
            value: 255,
        },
    );

    let (text, _) = decode_two(&entry, &exit, ioctls::VIDIOC_S_CTRL, Personality::Bits64, false);
    assert_eq!(text, "{id=V4L2_CID_BRIGHTNESS, value=300} => 255");
}

#[test]
fn unnamed_control_id_decomposes_into_class_plus_offset() {
    let mut mem = FakeMem::new();
    mem.add_struct(
        ARG,
        &Control {
            id: 0x009a_09f0,
            value: 1,
        },
    );

    let (text, _) = decode_two(&mem, &mem, ioctls::VIDIOC_G_CTRL, Personality::Bits64, true);
    assert!(text.starts_with("{id=V4L2_CTRL_CLASS_CAMERA+0x9f0"), "{text}");
}

#[test]
fn queryctrl_same_id_prints_no_arrow() {
    let mut mem = FakeMem::new();
    mem.add_struct(ARG, &queryctrl(0x0098_0901));

    let (text, _) = decode_ok(&mem, ioctls::VIDIOC_QUERYCTRL);
    assert_eq!(
        text,
        "{id=V4L2_CID_CONTRAST, type=V4L2_CTRL_TYPE_INTEGER, name=\"Contrast\", \
         minimum=0, maximum=255, step=1, default_value=128, flags=0}"
    );
}

#[test]
fn queryctrl_next_ctrl_request_shows_the_settled_id() {
    let mut entry = FakeMem::new();
    entry.add_struct(ARG, &queryctrl(0x8000_0000 | 0x0098_0900));
    let mut exit = FakeMem::new();
    exit.add_struct(ARG, &queryctrl(0x0098_0901));

    let (text, _) = decode_two(&entry, &exit, ioctls::VIDIOC_QUERYCTRL, Personality::Bits64, false);
    assert_eq!(
        text,
        "{id=V4L2_CTRL_FLAG_NEXT_CTRL|V4L2_CID_BRIGHTNESS => V4L2_CID_CONTRAST, \
         type=V4L2_CTRL_TYPE_INTEGER, name=\"Contrast\", \
         minimum=0, maximum=255, step=1, default_value=128, flags=0}"
    );
}

#[test]
fn g_ext_ctrls_renders_scalars_and_bounded_strings() {
    let mut mem = FakeMem::new();
    mem.add_struct(
        ARG,
        &ExtControls {
            ctrl_class: 0x0098_0000,
            count: 2,
            error_idx: 0,
            request_fd: 0,
            reserved: [0; 1],
            controls: CTRLS,
        },
    );
    mem.add_struct(
        CTRLS,
        &ExtControl {
            id: 0x0098_0900,
            size: 0,
            reserved2: 0,
            value64: 5,
        },
    );
    mem.add_struct(
        CTRLS + 20,
        &ExtControl {
            id: 0x0098_0901,
            size: 4,
            reserved2: 0,
            value64: STR as i64,
        },
    );
    // The string region holds fewer bytes than the declared size.
    mem.add_bytes(STR, b"ab");

    let (text, _) = decode_ok(&mem, ioctls::VIDIOC_G_EXT_CTRLS);
    assert_eq!(
        text,
        "{ctrl_class=V4L2_CTRL_CLASS_USER, count=2, \
         controls=[{id=V4L2_CID_BRIGHTNESS, size=0, value=5, value64=5}, \
         {id=V4L2_CID_CONTRAST, size=4, string=\"ab\"...}]}"
    );
}

#[test]
fn ext_ctrls_with_zero_count_close_at_entry() {
    let mut mem = FakeMem::new();
    mem.add_struct(
        ARG,
        &ExtControls {
            ctrl_class: 0x0098_0000,
            count: 0,
            error_idx: 0,
            request_fd: 0,
            reserved: [0; 1],
            controls: 0,
        },
    );

    let (text, status) = decode_ok(&mem, ioctls::VIDIOC_G_EXT_CTRLS);
    assert_eq!(text, "{ctrl_class=V4L2_CTRL_CLASS_USER, count=0}");
    assert_eq!(status, crate::ioctl::DecodeStatus::FullyDecoded);
}

#[test]
fn s_ext_ctrls_error_reports_the_failing_index() {
    let mut mem = FakeMem::new();
    mem.add_struct(
        ARG,
        &ExtControls {
            ctrl_class: 0x0098_0000,
            count: 1,
            error_idx: 0,
            request_fd: 0,
            reserved: [0; 1],
            controls: CTRLS,
        },
    );
    mem.add_struct(
        CTRLS,
        &ExtControl {
            id: 0x0098_0900,
            size: 0,
            reserved2: 0,
            value64: 7,
        },
    );

    let mut exit = FakeMem::new();
    exit.add_struct(
        ARG,
        &ExtControls {
            ctrl_class: 0x0098_0000,
            count: 1,
            error_idx: 1,
            request_fd: 0,
            reserved: [0; 1],
            controls: CTRLS,
        },
    );

    let (text, _) = decode_two(&mem, &exit, ioctls::VIDIOC_S_EXT_CTRLS, Personality::Bits64, true);
    assert_eq!(
        text,
        "{ctrl_class=V4L2_CTRL_CLASS_USER, count=1, \
         controls=[{id=V4L2_CID_BRIGHTNESS, size=0, value=7, value64=7}], error_idx=1}"
    );
}

#[test]
fn g_tuner_fills_everything_at_exit() {
    let mut mem = FakeMem::new();
    mem.add_struct(
        ARG,
        &Tuner {
            index: 0,
            name: carray("Television"),
            typ: 2,
            capability: 0x0010,
            rangelow: 44,
            rangehigh: 958,
            rxsubchans: 0x01,
            audmode: 0,
            signal: 65535,
            afc: 0,
            reserved: [0; 4],
        },
    );

    let (text, _) = decode_ok(&mem, ioctls::VIDIOC_G_TUNER);
    assert_eq!(
        text,
        "{index=0, name=\"Television\", type=V4L2_TUNER_ANALOG_TV, \
         capability=V4L2_TUNER_CAP_STEREO, rangelow=44, rangehigh=958, \
         rxsubchans=V4L2_TUNER_SUB_MONO, audmode=V4L2_TUNER_MODE_MONO, \
         signal=65535, afc=0}"
    );
}
