// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

//! Capability, format and streaming-parameter rendering.

use vidi_common::{ioctls, kernel_types::*, Personality};

use crate::ioctl::DecodeStatus;

use super::*;

fn capability(caps: u32, device_caps: u32) -> Capability {
    Capability {
        driver: carray("uvcvideo"),
        card: carray("USB Camera"),
        bus_info: carray("usb-0000:00:14.0-1"),
        version: 0x05_0a00,
        capabilities: caps,
        device_caps,
        reserved: [0; 3],
    }
}

/// Builds a Format whose union bytes are fully defined.
fn format_with<T: Copy>(typ: u32, arm: T) -> Format {
    let mut raw_data = [0u8; 200];
    let bytes = unsafe {
        std::slice::from_raw_parts(
            (&arm as *const T).cast::<u8>(),
            std::mem::size_of::<T>(),
        )
    };
    raw_data[..bytes.len()].copy_from_slice(bytes);
    Format {
        typ,
        fmt: FormatUnion { raw_data },
    }
}

fn yuyv_pix(sizeimage: u32) -> PixFormat {
    PixFormat {
        width: 640,
        height: 480,
        pixelformat: 0x5659_5559,
        field: 1,
        bytesperline: 1280,
        sizeimage,
        colorspace: 8,
        ..Default::default()
    }
}

#[test]
fn querycap_renders_all_known_capabilities() {
    let mut mem = FakeMem::new();
    mem.add_struct(ARG, &capability(0x0420_0001, 0));

    let (text, status) = decode_ok(&mem, ioctls::VIDIOC_QUERYCAP);
    assert_eq!(
        text,
        "{driver=\"uvcvideo\", card=\"USB Camera\", bus_info=\"usb-0000:00:14.0-1\", \
         version=KERNEL_VERSION(5, 10, 0), \
         capabilities=V4L2_CAP_VIDEO_CAPTURE|V4L2_CAP_EXT_PIX_FORMAT|V4L2_CAP_STREAMING}"
    );
    assert_eq!(status, DecodeStatus::FullyDecoded);
}

#[test]
fn querycap_keeps_unknown_capability_bits() {
    let mut mem = FakeMem::new();
    mem.add_struct(ARG, &capability(0x0400_0001 | 0x4000_0000, 0));

    let (text, _) = decode_ok(&mem, ioctls::VIDIOC_QUERYCAP);
    assert!(
        text.contains(
            "capabilities=V4L2_CAP_VIDEO_CAPTURE|V4L2_CAP_STREAMING|0x40000000 /* V4L2_CAP_??? */"
        ),
        "{text}"
    );
}

#[test]
fn querycap_prints_device_caps_only_when_set() {
    let mut mem = FakeMem::new();
    mem.add_struct(ARG, &capability(0x8400_0001, 0x0400_0001));

    let (text, _) = decode_ok(&mem, ioctls::VIDIOC_QUERYCAP);
    assert!(
        text.ends_with("device_caps=V4L2_CAP_VIDEO_CAPTURE|V4L2_CAP_STREAMING}"),
        "{text}"
    );
}

#[test]
fn querycap_error_prints_address() {
    let mut mem = FakeMem::new();
    mem.add_struct(ARG, &capability(1, 0));

    let (text, _) = decode_two(&mem, &mem, ioctls::VIDIOC_QUERYCAP, Personality::Bits64, true);
    assert_eq!(text, "0x7f0000001000");
}

#[test]
fn enum_fmt_merges_entry_and_exit_fields() {
    let mut mem = FakeMem::new();
    mem.add_struct(
        ARG,
        &FmtDesc {
            index: 1,
            typ: 1,
            flags: 0x1,
            description: carray("MJPEG"),
            pixelformat: 0x4750_4a4d,
            reserved: [0; 4],
        },
    );

    let (text, _) = decode_ok(&mem, ioctls::VIDIOC_ENUM_FMT);
    assert_eq!(
        text,
        "{index=1, type=V4L2_BUF_TYPE_VIDEO_CAPTURE, flags=V4L2_FMT_FLAG_COMPRESSED, \
         description=\"MJPEG\", \
         pixelformat=v4l2_fourcc('M', 'J', 'P', 'G') /* V4L2_PIX_FMT_MJPEG */}"
    );
}

#[test]
fn s_fmt_shows_before_and_after_states() {
    let mut entry = FakeMem::new();
    entry.add_struct(ARG, &format_with(1, yuyv_pix(0)));
    let mut exit = FakeMem::new();
    exit.add_struct(ARG, &format_with(1, yuyv_pix(614_400)));

    let (text, _) = decode_two(&entry, &exit, ioctls::VIDIOC_S_FMT, Personality::Bits64, false);
    assert_eq!(
        text,
        "{type=V4L2_BUF_TYPE_VIDEO_CAPTURE, fmt.pix={width=640, height=480, \
         pixelformat=v4l2_fourcc('Y', 'U', 'Y', 'V') /* V4L2_PIX_FMT_YUYV */, \
         field=V4L2_FIELD_NONE, bytesperline=1280, sizeimage=0, \
         colorspace=V4L2_COLORSPACE_SRGB}} => {fmt.pix={width=640, height=480, \
         pixelformat=v4l2_fourcc('Y', 'U', 'Y', 'V') /* V4L2_PIX_FMT_YUYV */, \
         field=V4L2_FIELD_NONE, bytesperline=1280, sizeimage=614400, \
         colorspace=V4L2_COLORSPACE_SRGB}}"
    );
}

#[test]
fn g_fmt_defers_the_payload_to_exit() {
    let mut mem = FakeMem::new();
    mem.add_struct(ARG, &format_with(1, yuyv_pix(614_400)));

    let (text, _) = decode_ok(&mem, ioctls::VIDIOC_G_FMT);
    assert!(text.starts_with("{type=V4L2_BUF_TYPE_VIDEO_CAPTURE, fmt.pix={"), "{text}");
    assert!(text.ends_with("colorspace=V4L2_COLORSPACE_SRGB}}"), "{text}");
}

#[test]
fn g_fbuf_renders_capability_flags_and_base() {
    let mut mem = FakeMem::new();
    mem.add_struct(
        ARG,
        &Framebuffer {
            capability: 0x0001,
            flags: 0x0002,
            base: 0xdead_0000,
            fmt: FramebufferFmt::default(),
        },
    );

    let (text, status) = decode_ok(&mem, ioctls::VIDIOC_G_FBUF);
    assert_eq!(text, "{capability=0x1, flags=0x2, base=0xdead0000}");
    assert_eq!(status, DecodeStatus::FullyDecoded);
}

#[test]
fn g_fbuf_error_prints_address() {
    let mut mem = FakeMem::new();
    mem.add_struct(ARG, &Framebuffer::default());

    let (text, _) = decode_two(&mem, &mem, ioctls::VIDIOC_G_FBUF, Personality::Bits64, true);
    assert_eq!(text, "0x7f0000001000");
}

#[test]
fn s_fbuf_decodes_at_entry() {
    let mut mem = FakeMem::new();
    mem.add_struct(
        ARG,
        &Framebuffer {
            capability: 0x0004,
            flags: 0x0001,
            base: 0x1000_0000,
            fmt: FramebufferFmt::default(),
        },
    );

    let mut coord = crate::ioctl::Coordinator::new(crate::xlat::XlatStyle::Symbolic);
    let mut sink = Vec::new();
    let entry = call_info(ioctls::VIDIOC_S_FBUF, Personality::Bits64, crate::ioctl::Phase::Entering);
    let status = coord.decode(&entry, &mem, &mut sink);

    assert_eq!(status, DecodeStatus::FullyDecoded);
    assert_eq!(
        String::from_utf8(sink).unwrap(),
        "{capability=0x4, flags=0x1, base=0x10000000}"
    );
}

#[test]
fn overlay_clip_list_truncates_at_unreadable_element() {
    const CLIPS: u64 = 0x6000_0000;

    let window = Window {
        w: Rect {
            left: 0,
            top: 0,
            width: 720,
            height: 480,
        },
        field: 0,
        chromakey: 0,
        clips: CLIPS,
        clipcount: 3,
        bitmap: 0,
        global_alpha: 0,
    };

    let mut mem = FakeMem::new();
    mem.add_struct(ARG, &format_with(3, window));
    // Only two of the three claimed clips are mapped.
    mem.add_struct(
        CLIPS,
        &Clip {
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
        CLIPS + 24,
        &Clip {
            c: Rect {
                left: 360,
                top: 240,
                width: 360,
                height: 240,
            },
            next: 0,
        },
    );

    let (text, status) =
        decode_two(&mem, &mem, ioctls::VIDIOC_S_FMT, Personality::Bits64, true);
    assert_eq!(
        text,
        "{type=V4L2_BUF_TYPE_VIDEO_OVERLAY, fmt.win={left=0, top=0, width=720, height=480, \
         field=V4L2_FIELD_ANY, chromakey=0x0, \
         clips=[{left=0, top=0, width=360, height=240}, \
         {left=360, top=240, width=360, height=240}, ...], \
         clipcount=3, bitmap=NULL}}"
    );
    assert_eq!(status, DecodeStatus::FullyDecoded);
}

#[test]
fn g_parm_renders_the_capture_arm() {
    let capture = CaptureParm {
        capability: 0x1000,
        capturemode: 0,
        timeperframe: Fract {
            numerator: 1,
            denominator: 30,
        },
        extendedmode: 0,
        readbuffers: 2,
        reserved: [0; 4],
    };
    let mut raw_data = [0u8; 200];
    let bytes = unsafe {
        std::slice::from_raw_parts(
            (&capture as *const CaptureParm).cast::<u8>(),
            std::mem::size_of::<CaptureParm>(),
        )
    };
    raw_data[..bytes.len()].copy_from_slice(bytes);

    let mut mem = FakeMem::new();
    mem.add_struct(
        ARG,
        &StreamParm {
            typ: 1,
            parm: StreamParmUnion { raw_data },
        },
    );

    let (text, _) = decode_ok(&mem, ioctls::VIDIOC_G_PARM);
    assert_eq!(
        text,
        "{type=V4L2_BUF_TYPE_VIDEO_CAPTURE, \
         parm.capture={capability=V4L2_CAP_TIMEPERFRAME, capturemode=0, \
         timeperframe=1/30, extendedmode=0x0, readbuffers=2}}"
    );
}

#[test]
fn reqbufs_reports_the_granted_count() {
    let request = RequestBuffers {
        count: 4,
        typ: 1,
        memory: 1,
        reserved: [0; 2],
    };
    let mut entry = FakeMem::new();
    entry.add_struct(ARG, &request);
    let mut exit = FakeMem::new();
    exit.add_struct(ARG, &RequestBuffers { count: 8, ..request });

    let (text, _) = decode_two(&entry, &exit, ioctls::VIDIOC_REQBUFS, Personality::Bits64, false);
    assert_eq!(
        text,
        "{count=4, type=V4L2_BUF_TYPE_VIDEO_CAPTURE, memory=V4L2_MEMORY_MMAP} => 8"
    );
}

#[test]
fn reqbufs_error_leaves_the_count_unknown() {
    let mut mem = FakeMem::new();
    mem.add_struct(
        ARG,
        &RequestBuffers {
            count: 4,
            typ: 1,
            memory: 1,
            reserved: [0; 2],
        },
    );

    let (text, _) = decode_two(&mem, &mem, ioctls::VIDIOC_REQBUFS, Personality::Bits64, true);
    assert_eq!(
        text,
        "{count=4, type=V4L2_BUF_TYPE_VIDEO_CAPTURE, memory=V4L2_MEMORY_MMAP} => ???"
    );
}

#[test]
fn create_bufs_reports_index_and_count_on_success() {
    let entry_bufs = CreateBuffers {
        index: 0,
        count: 4,
        memory: 1,
        format: format_with(1, yuyv_pix(614_400)),
        reserved: [0; 8],
    };
    let mut entry = FakeMem::new();
    entry.add_struct(ARG, &entry_bufs);
    let mut exit = FakeMem::new();
    exit.add_struct(
        ARG,
        &CreateBuffers {
            index: 8,
            count: 4,
            ..entry_bufs
        },
    );

    let (text, _) = decode_two(
        &entry,
        &exit,
        ioctls::VIDIOC_CREATE_BUFS,
        Personality::Bits64,
        false,
    );
    assert!(
        text.starts_with("{count=4, memory=V4L2_MEMORY_MMAP, format={type=V4L2_BUF_TYPE_VIDEO_CAPTURE, fmt.pix={"),
        "{text}"
    );
    assert!(text.ends_with("}} => {index=8, count=4}"), "{text}");
}
