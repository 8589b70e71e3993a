// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

//! 32-bit-personality decoding through the compat struct mirrors.

use vidi_common::{
    ioctls::{self, compat},
    kernel_types::*,
    Personality,
};

use super::*;

const CTRLS: u64 = 0x2000_0000;

fn decode_compat(mem: &FakeMem, code: u32) -> (String, crate::ioctl::DecodeStatus) {
    decode_two(mem, mem, code, Personality::Bits32, false)
}

#[test]
fn compat_code_resolves_to_the_same_command() {
    assert_eq!(
        crate::v4l2::command_name(compat::VIDIOC_DQBUF),
        Some("VIDIOC_DQBUF")
    );
    assert_ne!(compat::VIDIOC_DQBUF, ioctls::VIDIOC_DQBUF);
}

#[test]
fn compat_dqbuf_widens_the_timestamp_and_offset() {
    let buf = BufferCompat {
        index: 3,
        typ: 1,
        bytesused: 614_400,
        flags: 0x2000,
        field: 1,
        timestamp: TimevalCompat {
            tv_sec: 1,
            tv_usec: 500_000,
        },
        timecode: Timecode::default(),
        sequence: 0,
        memory: 1,
        m: 0x1000,
        length: 65536,
        reserved2: 0,
        reserved: 0,
    };
    let mut mem = FakeMem::new();
    mem.add_struct(ARG, &buf);

    let (text, _) = decode_compat(&mem, compat::VIDIOC_DQBUF);
    assert_eq!(
        text,
        "{type=V4L2_BUF_TYPE_VIDEO_CAPTURE, index=3, memory=V4L2_MEMORY_MMAP, \
         m.offset=0x1000, length=65536, bytesused=614400, \
         flags=V4L2_BUF_FLAG_TIMESTAMP_MONOTONIC|V4L2_BUF_FLAG_TSTAMP_SRC_EOF, \
         timestamp={tv_sec=1, tv_usec=500000}, ...}"
    );
}

#[test]
fn compat_enumstd_reads_the_packed_layout() {
    let mut mem = FakeMem::new();
    mem.add_struct(
        ARG,
        &StandardCompat {
            index: 0,
            id: 0xff,
            name: carray("PAL"),
            frameperiod: Fract {
                numerator: 1,
                denominator: 25,
            },
            framelines: 625,
            reserved: [0; 4],
        },
    );

    let (text, _) = decode_compat(&mem, compat::VIDIOC_ENUMSTD);
    assert_eq!(
        text,
        "{index=0, id=0xff, name=\"PAL\", frameperiod=1/25, framelines=625}"
    );
}

#[test]
fn compat_g_fbuf_widens_the_base_pointer() {
    let mut mem = FakeMem::new();
    mem.add_struct(
        ARG,
        &FramebufferCompat {
            capability: 0x0004,
            flags: 0x0001,
            base: 0x1000_0000,
            fmt: FramebufferFmt::default(),
        },
    );

    let (text, _) = decode_compat(&mem, compat::VIDIOC_G_FBUF);
    assert_eq!(text, "{capability=0x4, flags=0x1, base=0x10000000}");
}

#[test]
fn compat_ext_ctrls_follow_a_narrow_controls_pointer() {
    let mut mem = FakeMem::new();
    mem.add_struct(
        ARG,
        &ExtControlsCompat {
            ctrl_class: 0x0098_0000,
            count: 1,
            error_idx: 0,
            request_fd: 0,
            reserved: [0; 1],
            controls: CTRLS as u32,
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

    let (text, _) = decode_compat(&mem, compat::VIDIOC_G_EXT_CTRLS);
    assert_eq!(
        text,
        "{ctrl_class=V4L2_CTRL_CLASS_USER, count=1, \
         controls=[{id=V4L2_CID_BRIGHTNESS, size=0, value=5, value64=5}]}"
    );
}

#[test]
fn compat_string_pointer_is_masked_to_32_bits() {
    // The element's pointer arm carries garbage in its high half, as a
    // 32-bit process that never wrote those bytes legitimately can.
    let string_addr: u64 = 0x4000_0000;
    let mut mem = FakeMem::new();
    mem.add_struct(
        ARG,
        &ExtControlsCompat {
            ctrl_class: 0x0098_0000,
            count: 1,
            error_idx: 0,
            request_fd: 0,
            reserved: [0; 1],
            controls: CTRLS as u32,
        },
    );
    mem.add_struct(
        CTRLS,
        &ExtControl {
            id: 0x0098_0901,
            size: 6,
            reserved2: 0,
            value64: (0xdead_beef_0000_0000u64 | string_addr) as i64,
        },
    );
    mem.add_bytes(string_addr, b"hello\0");

    let (text, _) = decode_compat(&mem, compat::VIDIOC_G_EXT_CTRLS);
    assert!(text.contains("string=\"hello\""), "{text}");
}

#[test]
fn compat_overlay_window_uses_narrow_clip_stride() {
    const CLIPS: u64 = 0x6000_0000;

    let window = WindowCompat {
        w: Rect {
            left: 0,
            top: 0,
            width: 720,
            height: 480,
        },
        field: 0,
        chromakey: 0,
        clips: CLIPS as u32,
        clipcount: 2,
        bitmap: 0,
        global_alpha: 0,
    };
    let mut raw_data = [0u8; 200];
    let bytes = unsafe {
        std::slice::from_raw_parts(
            (&window as *const WindowCompat).cast::<u8>(),
            std::mem::size_of::<WindowCompat>(),
        )
    };
    raw_data[..bytes.len()].copy_from_slice(bytes);

    let mut mem = FakeMem::new();
    mem.add_struct(
        ARG,
        &FormatCompat {
            typ: 3,
            fmt: FormatUnionCompat { raw_data },
        },
    );
    // ClipCompat stride is 20 bytes, not 24.
    mem.add_struct(
        CLIPS,
        &ClipCompat {
            c: Rect {
                left: 0,
                top: 0,
                width: 360,
                height: 240,
            },
            next: 0,
        },
    );
    mem.add_struct(
        CLIPS + 20,
        &ClipCompat {
            c: Rect {
                left: 360,
                top: 240,
                width: 360,
                height: 240,
            },
            next: 0,
        },
    );

    let (text, _) = decode_two(
        &mem,
        &mem,
        compat::VIDIOC_S_FMT,
        Personality::Bits32,
        true,
    );
    assert!(
        text.contains(
            "clips=[{left=0, top=0, width=360, height=240}, \
             {left=360, top=240, width=360, height=240}], clipcount=2"
        ),
        "{text}"
    );
}
