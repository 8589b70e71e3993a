// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

//! Per-command decode routines for the `VIDIOC_*` family.
//!
//! Each routine renders the caller-provided portion of the argument at
//! entry and the kernel-rewritten portion at exit, joined by the
//! descriptor's transition separator. A routine never fails: unreadable
//! memory degrades to a raw address, unknown discriminants keep their
//! numeric value with a sentinel comment.

pub mod tables;

use vidi_common::{
    ioctls::{self, compat},
    kernel_types::*,
};

use crate::{
    format::{addr, kernel_version, quoted_bytes, quoted_cstring},
    ioctl::{CommandDescriptor, DecodeCtx, DecodeStatus, Direction, Transition},
    outf, outs,
    remote::{self, ArrayRead, ARRAY_PRINT_MAX},
    xlat::XlatStyle,
};

use tables::*;

pub static COMMANDS: &[CommandDescriptor] = &[
    CommandDescriptor {
        code: ioctls::VIDIOC_QUERYCAP,
        code_compat: ioctls::VIDIOC_QUERYCAP,
        name: "VIDIOC_QUERYCAP",
        dir: Direction::Read,
        transition: Transition::Continuation,
        decode: querycap,
    },
    CommandDescriptor {
        code: ioctls::VIDIOC_ENUM_FMT,
        code_compat: ioctls::VIDIOC_ENUM_FMT,
        name: "VIDIOC_ENUM_FMT",
        dir: Direction::ReadWrite,
        transition: Transition::Continuation,
        decode: enum_fmt,
    },
    CommandDescriptor {
        code: ioctls::VIDIOC_G_FMT,
        code_compat: compat::VIDIOC_G_FMT,
        name: "VIDIOC_G_FMT",
        dir: Direction::ReadWrite,
        transition: Transition::Continuation,
        decode: g_fmt,
    },
    CommandDescriptor {
        code: ioctls::VIDIOC_S_FMT,
        code_compat: compat::VIDIOC_S_FMT,
        name: "VIDIOC_S_FMT",
        dir: Direction::ReadWrite,
        transition: Transition::Reopen,
        decode: s_fmt,
    },
    CommandDescriptor {
        code: ioctls::VIDIOC_REQBUFS,
        code_compat: ioctls::VIDIOC_REQBUFS,
        name: "VIDIOC_REQBUFS",
        dir: Direction::ReadWrite,
        transition: Transition::Arrow,
        decode: reqbufs,
    },
    CommandDescriptor {
        code: ioctls::VIDIOC_QUERYBUF,
        code_compat: compat::VIDIOC_QUERYBUF,
        name: "VIDIOC_QUERYBUF",
        dir: Direction::ReadWrite,
        transition: Transition::Continuation,
        decode: buffer,
    },
    CommandDescriptor {
        code: ioctls::VIDIOC_G_FBUF,
        code_compat: compat::VIDIOC_G_FBUF,
        name: "VIDIOC_G_FBUF",
        dir: Direction::Read,
        transition: Transition::Continuation,
        decode: g_fbuf,
    },
    CommandDescriptor {
        code: ioctls::VIDIOC_S_FBUF,
        code_compat: compat::VIDIOC_S_FBUF,
        name: "VIDIOC_S_FBUF",
        dir: Direction::Write,
        transition: Transition::Continuation,
        decode: s_fbuf,
    },
    CommandDescriptor {
        code: ioctls::VIDIOC_QBUF,
        code_compat: compat::VIDIOC_QBUF,
        name: "VIDIOC_QBUF",
        dir: Direction::ReadWrite,
        transition: Transition::Continuation,
        decode: buffer,
    },
    CommandDescriptor {
        code: ioctls::VIDIOC_DQBUF,
        code_compat: compat::VIDIOC_DQBUF,
        name: "VIDIOC_DQBUF",
        dir: Direction::ReadWrite,
        transition: Transition::Continuation,
        decode: buffer,
    },
    CommandDescriptor {
        code: ioctls::VIDIOC_STREAMON,
        code_compat: ioctls::VIDIOC_STREAMON,
        name: "VIDIOC_STREAMON",
        dir: Direction::Write,
        transition: Transition::Continuation,
        decode: stream_on_off,
    },
    CommandDescriptor {
        code: ioctls::VIDIOC_STREAMOFF,
        code_compat: ioctls::VIDIOC_STREAMOFF,
        name: "VIDIOC_STREAMOFF",
        dir: Direction::Write,
        transition: Transition::Continuation,
        decode: stream_on_off,
    },
    CommandDescriptor {
        code: ioctls::VIDIOC_G_PARM,
        code_compat: ioctls::VIDIOC_G_PARM,
        name: "VIDIOC_G_PARM",
        dir: Direction::ReadWrite,
        transition: Transition::Continuation,
        decode: g_parm,
    },
    CommandDescriptor {
        code: ioctls::VIDIOC_S_PARM,
        code_compat: ioctls::VIDIOC_S_PARM,
        name: "VIDIOC_S_PARM",
        dir: Direction::ReadWrite,
        transition: Transition::Reopen,
        decode: s_parm,
    },
    CommandDescriptor {
        code: ioctls::VIDIOC_G_STD,
        code_compat: ioctls::VIDIOC_G_STD,
        name: "VIDIOC_G_STD",
        dir: Direction::Read,
        transition: Transition::Continuation,
        decode: g_std,
    },
    CommandDescriptor {
        code: ioctls::VIDIOC_S_STD,
        code_compat: ioctls::VIDIOC_S_STD,
        name: "VIDIOC_S_STD",
        dir: Direction::Write,
        transition: Transition::Continuation,
        decode: s_std,
    },
    CommandDescriptor {
        code: ioctls::VIDIOC_ENUMSTD,
        code_compat: compat::VIDIOC_ENUMSTD,
        name: "VIDIOC_ENUMSTD",
        dir: Direction::ReadWrite,
        transition: Transition::Continuation,
        decode: enumstd,
    },
    CommandDescriptor {
        code: ioctls::VIDIOC_ENUMINPUT,
        code_compat: compat::VIDIOC_ENUMINPUT,
        name: "VIDIOC_ENUMINPUT",
        dir: Direction::ReadWrite,
        transition: Transition::Continuation,
        decode: enuminput,
    },
    CommandDescriptor {
        code: ioctls::VIDIOC_G_CTRL,
        code_compat: ioctls::VIDIOC_G_CTRL,
        name: "VIDIOC_G_CTRL",
        dir: Direction::ReadWrite,
        transition: Transition::Continuation,
        decode: g_ctrl,
    },
    CommandDescriptor {
        code: ioctls::VIDIOC_S_CTRL,
        code_compat: ioctls::VIDIOC_S_CTRL,
        name: "VIDIOC_S_CTRL",
        dir: Direction::ReadWrite,
        transition: Transition::Arrow,
        decode: s_ctrl,
    },
    CommandDescriptor {
        code: ioctls::VIDIOC_G_TUNER,
        code_compat: ioctls::VIDIOC_G_TUNER,
        name: "VIDIOC_G_TUNER",
        dir: Direction::ReadWrite,
        transition: Transition::Continuation,
        decode: g_tuner,
    },
    CommandDescriptor {
        code: ioctls::VIDIOC_S_TUNER,
        code_compat: ioctls::VIDIOC_S_TUNER,
        name: "VIDIOC_S_TUNER",
        dir: Direction::Write,
        transition: Transition::Continuation,
        decode: s_tuner,
    },
    CommandDescriptor {
        code: ioctls::VIDIOC_QUERYCTRL,
        code_compat: ioctls::VIDIOC_QUERYCTRL,
        name: "VIDIOC_QUERYCTRL",
        dir: Direction::ReadWrite,
        transition: Transition::Continuation,
        decode: queryctrl,
    },
    CommandDescriptor {
        code: ioctls::VIDIOC_G_INPUT,
        code_compat: ioctls::VIDIOC_G_INPUT,
        name: "VIDIOC_G_INPUT",
        dir: Direction::Read,
        transition: Transition::Continuation,
        decode: g_input,
    },
    CommandDescriptor {
        code: ioctls::VIDIOC_S_INPUT,
        code_compat: ioctls::VIDIOC_S_INPUT,
        name: "VIDIOC_S_INPUT",
        dir: Direction::ReadWrite,
        transition: Transition::Continuation,
        decode: s_input,
    },
    CommandDescriptor {
        code: ioctls::VIDIOC_CROPCAP,
        code_compat: ioctls::VIDIOC_CROPCAP,
        name: "VIDIOC_CROPCAP",
        dir: Direction::ReadWrite,
        transition: Transition::Continuation,
        decode: cropcap,
    },
    CommandDescriptor {
        code: ioctls::VIDIOC_G_CROP,
        code_compat: ioctls::VIDIOC_G_CROP,
        name: "VIDIOC_G_CROP",
        dir: Direction::ReadWrite,
        transition: Transition::Continuation,
        decode: g_crop,
    },
    CommandDescriptor {
        code: ioctls::VIDIOC_S_CROP,
        code_compat: ioctls::VIDIOC_S_CROP,
        name: "VIDIOC_S_CROP",
        dir: Direction::Write,
        transition: Transition::Continuation,
        decode: s_crop,
    },
    CommandDescriptor {
        code: ioctls::VIDIOC_TRY_FMT,
        code_compat: compat::VIDIOC_TRY_FMT,
        name: "VIDIOC_TRY_FMT",
        dir: Direction::ReadWrite,
        transition: Transition::Reopen,
        decode: s_fmt,
    },
    CommandDescriptor {
        code: ioctls::VIDIOC_G_EXT_CTRLS,
        code_compat: compat::VIDIOC_G_EXT_CTRLS,
        name: "VIDIOC_G_EXT_CTRLS",
        dir: Direction::ReadWrite,
        transition: Transition::Continuation,
        decode: g_ext_ctrls,
    },
    CommandDescriptor {
        code: ioctls::VIDIOC_S_EXT_CTRLS,
        code_compat: compat::VIDIOC_S_EXT_CTRLS,
        name: "VIDIOC_S_EXT_CTRLS",
        dir: Direction::ReadWrite,
        transition: Transition::Reopen,
        decode: s_ext_ctrls,
    },
    CommandDescriptor {
        code: ioctls::VIDIOC_TRY_EXT_CTRLS,
        code_compat: compat::VIDIOC_TRY_EXT_CTRLS,
        name: "VIDIOC_TRY_EXT_CTRLS",
        dir: Direction::ReadWrite,
        transition: Transition::Reopen,
        decode: s_ext_ctrls,
    },
    CommandDescriptor {
        code: ioctls::VIDIOC_ENUM_FRAMESIZES,
        code_compat: ioctls::VIDIOC_ENUM_FRAMESIZES,
        name: "VIDIOC_ENUM_FRAMESIZES",
        dir: Direction::ReadWrite,
        transition: Transition::Continuation,
        decode: frmsizeenum,
    },
    CommandDescriptor {
        code: ioctls::VIDIOC_ENUM_FRAMEINTERVALS,
        code_compat: ioctls::VIDIOC_ENUM_FRAMEINTERVALS,
        name: "VIDIOC_ENUM_FRAMEINTERVALS",
        dir: Direction::ReadWrite,
        transition: Transition::Continuation,
        decode: frmivalenum,
    },
    CommandDescriptor {
        code: ioctls::VIDIOC_CREATE_BUFS,
        code_compat: compat::VIDIOC_CREATE_BUFS,
        name: "VIDIOC_CREATE_BUFS",
        dir: Direction::ReadWrite,
        transition: Transition::Arrow,
        decode: create_bufs,
    },
];

pub fn lookup_command(code: u32) -> Option<&'static CommandDescriptor> {
    COMMANDS
        .iter()
        .find(|c| c.code == code || c.code_compat == code)
}

pub fn command_name(code: u32) -> Option<&'static str> {
    lookup_command(code).map(|c| c.name)
}

fn fract(f: Fract) -> String {
    format!("{}/{}", f.numerator, f.denominator)
}

fn rect(r: Rect) -> String {
    format!(
        "{{left={}, top={}, width={}, height={}}}",
        r.left, r.top, r.width, r.height
    )
}

fn buf_type(ctx: &DecodeCtx<'_>, typ: u32) -> String {
    ctx.xval(&BUF_TYPES, typ, "V4L2_BUF_TYPE_???")
}

/// `v4l2_fourcc('Y', 'U', 'Y', 'V') /* V4L2_PIX_FMT_YUYV */`. Bytes outside
/// printable ASCII keep a hex escape so nothing is lost.
fn fourcc(ctx: &DecodeCtx<'_>, val: u32, table: &crate::xlat::Xlat) -> String {
    use std::fmt::Write as _;

    if ctx.style() == XlatStyle::Raw {
        return format!("{val:#x}");
    }

    let mut out = String::from("v4l2_fourcc(");
    for i in 0..4 {
        if i > 0 {
            out.push_str(", ");
        }
        let b = (val >> (8 * i)) as u8;
        match b {
            0x20..=0x7e if b != b'\'' && b != b'\\' => {
                let _ = write!(out, "'{}'", b as char);
            }
            _ => {
                let _ = write!(out, "'\\x{b:02x}'");
            }
        }
    }
    out.push(')');

    if let Some(name) = table.lookup(val) {
        let _ = write!(out, " /* {name} */");
    }
    out
}

/// Control ids decompose into class base plus offset when the exact id has
/// no name of its own.
fn cid(ctx: &DecodeCtx<'_>, id: u32) -> String {
    if ctx.style() == XlatStyle::Raw {
        return format!("{id:#x}");
    }

    if let Some(name) = CTRL_IDS.lookup(id) {
        return name.to_owned();
    }

    if let Some((base, class)) = CTRL_CLASSES.lookup_le(id) {
        let offset = id - base;
        if offset < 0x10000 {
            return format!("{class}+{offset:#x}");
        }
    }

    format!("{id:#x} /* V4L2_CID_??? */")
}

/// Control id as passed to enumeration, where the caller may OR in
/// next-control flags.
fn cid_with_query_flags(ctx: &DecodeCtx<'_>, id: u32) -> String {
    let flags = id & CTRL_QUERY_FLAGS.known_mask();
    if flags == 0 || ctx.style() == XlatStyle::Raw {
        return cid(ctx, id);
    }

    let mut parts = Vec::new();
    for (bit, name) in CTRL_QUERY_FLAGS.entries() {
        if flags & bit == *bit {
            parts.push((*name).to_owned());
        }
    }
    parts.push(cid(ctx, id & !flags));
    parts.join("|")
}

/// Buffer flags carry two multi-bit subfields whose zero values are
/// meaningful; they are rendered unconditionally, alongside whatever
/// single-bit flags are set.
fn buffer_flags(ctx: &DecodeCtx<'_>, val: u32) -> String {
    if ctx.style() == XlatStyle::Raw {
        return format!("{val:#x}");
    }

    let subfields = V4L2_BUF_FLAG_TIMESTAMP_MASK | V4L2_BUF_FLAG_TSTAMP_SRC_MASK;
    let plain = val & !subfields;

    let mut parts = Vec::new();
    if plain != 0 {
        parts.push(ctx.flags(&BUF_FLAGS, plain, "V4L2_BUF_FLAG_???"));
    }
    parts.push(ctx.xval(
        &BUF_TS_TYPES,
        val & V4L2_BUF_FLAG_TIMESTAMP_MASK,
        "V4L2_BUF_FLAG_TIMESTAMP_???",
    ));
    parts.push(ctx.xval(
        &BUF_TS_SRCS,
        val & V4L2_BUF_FLAG_TSTAMP_SRC_MASK,
        "V4L2_BUF_FLAG_TSTAMP_SRC_???",
    ));
    parts.join("|")
}

fn querycap(ctx: &mut DecodeCtx<'_>) -> DecodeStatus {
    if ctx.entering() {
        return DecodeStatus::ContinueAtExit;
    }

    let cap = if ctx.syserror() {
        Err(remote::MemFail)
    } else {
        ctx.read::<Capability>(ctx.arg)
    };
    let Ok(cap) = cap else {
        let a = addr(ctx.arg);
        outs!(ctx, &a);
        return DecodeStatus::FullyDecoded;
    };

    let driver = quoted_cstring(&cap.driver);
    let card = quoted_cstring(&cap.card);
    let bus_info = quoted_cstring(&cap.bus_info);
    let version = kernel_version(cap.version);
    let capabilities = ctx.flags(&DEVICE_CAPS, cap.capabilities, "V4L2_CAP_???");
    outf!(
        ctx,
        "{{driver={driver}, card={card}, bus_info={bus_info}, version={version}, capabilities={capabilities}"
    );
    if cap.device_caps != 0 {
        let device_caps = ctx.flags(&DEVICE_CAPS, cap.device_caps, "V4L2_CAP_???");
        outf!(ctx, ", device_caps={device_caps}");
    }
    outs!(ctx, "}");
    DecodeStatus::FullyDecoded
}

fn enum_fmt(ctx: &mut DecodeCtx<'_>) -> DecodeStatus {
    if ctx.entering() {
        let Ok(desc) = ctx.read::<FmtDesc>(ctx.arg) else {
            let a = addr(ctx.arg);
            outs!(ctx, &a);
            return DecodeStatus::FullyDecoded;
        };
        let typ = buf_type(ctx, desc.typ);
        outf!(ctx, "{{index={}, type={typ}", desc.index);
        return DecodeStatus::ContinueAtExit;
    }

    if !ctx.syserror() {
        if let Ok(desc) = ctx.read::<FmtDesc>(ctx.arg) {
            ctx.sep();
            let flags = ctx.flags(&FMT_FLAGS, desc.flags, "V4L2_FMT_FLAG_???");
            let description = quoted_cstring(&desc.description);
            let pixelformat = fourcc(ctx, desc.pixelformat, &PIX_FMTS);
            outf!(
                ctx,
                "flags={flags}, description={description}, pixelformat={pixelformat}"
            );
        }
    }
    outs!(ctx, "}");
    DecodeStatus::FullyDecoded
}

/// Renders the union arm selected by `typ`, prefixed with `lead` when the
/// arm is known. Returns false for a discriminant without an arm.
fn print_format_fmt(ctx: &mut DecodeCtx<'_>, f: &Format, lead: &str) -> bool {
    match f.typ {
        V4L2_BUF_TYPE_VIDEO_CAPTURE | V4L2_BUF_TYPE_VIDEO_OUTPUT => {
            let pix = unsafe { f.fmt.pix };
            let pixelformat = fourcc(ctx, pix.pixelformat, &PIX_FMTS);
            let field = ctx.xval(&FIELDS, pix.field, "V4L2_FIELD_???");
            let colorspace = ctx.xval(&COLORSPACES, pix.colorspace, "V4L2_COLORSPACE_???");
            outf!(
                ctx,
                "{lead}fmt.pix={{width={}, height={}, pixelformat={pixelformat}, field={field}, bytesperline={}, sizeimage={}, colorspace={colorspace}}}",
                pix.width, pix.height, pix.bytesperline, pix.sizeimage
            );
        }
        V4L2_BUF_TYPE_VIDEO_CAPTURE_MPLANE | V4L2_BUF_TYPE_VIDEO_OUTPUT_MPLANE => {
            let mp = unsafe { f.fmt.pix_mp };
            let pixelformat = fourcc(ctx, mp.pixelformat, &PIX_FMTS);
            let field = ctx.xval(&FIELDS, mp.field, "V4L2_FIELD_???");
            let colorspace = ctx.xval(&COLORSPACES, mp.colorspace, "V4L2_COLORSPACE_???");
            outf!(
                ctx,
                "{lead}fmt.pix_mp={{width={}, height={}, pixelformat={pixelformat}, field={field}, colorspace={colorspace}, plane_fmt=[",
                mp.width, mp.height
            );
            let planes = usize::from(mp.num_planes).min(VIDEO_MAX_PLANES);
            for (i, plane) in mp.plane_fmt[..planes].iter().enumerate() {
                if i > 0 {
                    outs!(ctx, ", ");
                }
                outf!(
                    ctx,
                    "{{sizeimage={}, bytesperline={}}}",
                    plane.sizeimage,
                    plane.bytesperline
                );
            }
            outf!(ctx, "], num_planes={}}}", mp.num_planes);
        }
        V4L2_BUF_TYPE_VIDEO_OVERLAY | V4L2_BUF_TYPE_VIDEO_OUTPUT_OVERLAY => {
            let win = unsafe { f.fmt.win };
            let field = ctx.xval(&FIELDS, win.field, "V4L2_FIELD_???");
            outf!(
                ctx,
                "{lead}fmt.win={{left={}, top={}, width={}, height={}, field={field}, chromakey={:#x}, clips=[",
                win.w.left, win.w.top, win.w.width, win.w.height, win.chromakey
            );
            let mem = ctx.mem();
            let res = remote::read_array_pers::<Clip>(
                mem,
                ctx.pid,
                win.clips,
                win.clipcount,
                ARRAY_PRINT_MAX,
                ctx.personality,
                |i, clip| {
                    if i > 0 {
                        outs!(ctx, ", ");
                    }
                    let r = rect(clip.c);
                    outs!(ctx, &r);
                },
            );
            if win.clipcount > 0 && res == ArrayRead::Truncated {
                outs!(ctx, ", ...");
            }
            let bitmap = addr(win.bitmap);
            outf!(ctx, "], clipcount={}, bitmap={bitmap}", win.clipcount);
            if win.global_alpha != 0 {
                outf!(ctx, ", global_alpha={:#x}", win.global_alpha);
            }
            outs!(ctx, "}");
        }
        V4L2_BUF_TYPE_VBI_CAPTURE | V4L2_BUF_TYPE_VBI_OUTPUT => {
            let vbi = unsafe { f.fmt.vbi };
            let sample_format = fourcc(ctx, vbi.sample_format, &PIX_FMTS);
            let flags = ctx.flags(&VBI_FLAGS, vbi.flags, "V4L2_VBI_???");
            outf!(
                ctx,
                "{lead}fmt.vbi={{sampling_rate={}, offset={}, samples_per_line={}, sample_format={sample_format}, start=[{}, {}], count=[{}, {}], flags={flags}}}",
                vbi.sampling_rate,
                vbi.offset,
                vbi.samples_per_line,
                vbi.start[0],
                vbi.start[1],
                vbi.count[0],
                vbi.count[1]
            );
        }
        V4L2_BUF_TYPE_SLICED_VBI_CAPTURE | V4L2_BUF_TYPE_SLICED_VBI_OUTPUT => {
            let sliced = unsafe { f.fmt.sliced };
            let service_set = ctx.flags(
                &SLICED_SERVICES,
                u32::from(sliced.service_set),
                "V4L2_SLICED_???",
            );
            outf!(ctx, "{lead}fmt.sliced={{service_set={service_set}, service_lines=[");
            for (row, lines) in sliced.service_lines.iter().enumerate() {
                if row > 0 {
                    outs!(ctx, ", ");
                }
                outs!(ctx, "[");
                for (i, line) in lines.iter().enumerate() {
                    if i > 0 {
                        outs!(ctx, ", ");
                    }
                    outf!(ctx, "{line:#x}");
                }
                outs!(ctx, "]");
            }
            outf!(ctx, "], io_size={}}}", sliced.io_size);
        }
        V4L2_BUF_TYPE_SDR_CAPTURE | V4L2_BUF_TYPE_SDR_OUTPUT => {
            let sdr = unsafe { f.fmt.sdr };
            let pixelformat = fourcc(ctx, sdr.pixelformat, &SDR_FMTS);
            outf!(
                ctx,
                "{lead}fmt.sdr={{pixelformat={pixelformat}, buffersize={}}}",
                sdr.buffersize
            );
        }
        V4L2_BUF_TYPE_META_CAPTURE | V4L2_BUF_TYPE_META_OUTPUT => {
            let meta = unsafe { f.fmt.meta };
            let dataformat = fourcc(ctx, meta.dataformat, &PIX_FMTS);
            outf!(
                ctx,
                "{lead}fmt.meta={{dataformat={dataformat}, buffersize={}}}",
                meta.buffersize
            );
        }
        _ => return false,
    }
    true
}

fn format_rw(ctx: &mut DecodeCtx<'_>, is_get: bool) -> DecodeStatus {
    if ctx.entering() {
        let Ok(f) = ctx.read_pers::<Format>(ctx.arg) else {
            let a = addr(ctx.arg);
            outs!(ctx, &a);
            return DecodeStatus::FullyDecoded;
        };
        let typ = buf_type(ctx, f.typ);
        outf!(ctx, "{{type={typ}");
        if is_get {
            return DecodeStatus::ContinueAtExit;
        }
        if !print_format_fmt(ctx, &f, ", ") {
            outs!(ctx, "}");
            return DecodeStatus::FullyDecoded;
        }
        return DecodeStatus::ContinueAtExit;
    }

    if !ctx.syserror() {
        if let Ok(f) = ctx.read_pers::<Format>(ctx.arg) {
            ctx.sep();
            print_format_fmt(ctx, &f, "");
        }
    }
    outs!(ctx, "}");
    DecodeStatus::FullyDecoded
}

fn g_fmt(ctx: &mut DecodeCtx<'_>) -> DecodeStatus {
    format_rw(ctx, true)
}

fn s_fmt(ctx: &mut DecodeCtx<'_>) -> DecodeStatus {
    format_rw(ctx, false)
}

fn reqbufs(ctx: &mut DecodeCtx<'_>) -> DecodeStatus {
    if ctx.entering() {
        let Ok(req) = ctx.read::<RequestBuffers>(ctx.arg) else {
            let a = addr(ctx.arg);
            outs!(ctx, &a);
            return DecodeStatus::FullyDecoded;
        };
        let typ = buf_type(ctx, req.typ);
        let memory = ctx.xval(&MEMORIES, req.memory, "V4L2_MEMORY_???");
        outf!(ctx, "{{count={}, type={typ}, memory={memory}}}", req.count);
        return DecodeStatus::ContinueAtExit;
    }

    ctx.sep();
    let granted = if ctx.syserror() {
        Err(remote::MemFail)
    } else {
        ctx.read::<RequestBuffers>(ctx.arg)
    };
    match granted {
        Ok(req) => outf!(ctx, "{}", req.count),
        Err(remote::MemFail) => outs!(ctx, "???"),
    }
    DecodeStatus::FullyDecoded
}

fn buffer(ctx: &mut DecodeCtx<'_>) -> DecodeStatus {
    let is_dqbuf =
        ctx.code == ioctls::VIDIOC_DQBUF || ctx.code == compat::VIDIOC_DQBUF;

    if ctx.entering() {
        let Ok(b) = ctx.read_pers::<Buffer>(ctx.arg) else {
            let a = addr(ctx.arg);
            outs!(ctx, &a);
            return DecodeStatus::FullyDecoded;
        };
        let typ = buf_type(ctx, b.typ);
        outf!(ctx, "{{type={typ}");
        // The dequeued index is kernel-chosen; everyone else names it up
        // front.
        if !is_dqbuf {
            outf!(ctx, ", index={}", b.index);
        }
        return DecodeStatus::ContinueAtExit;
    }

    let filled = if ctx.syserror() {
        Err(remote::MemFail)
    } else {
        ctx.read_pers::<Buffer>(ctx.arg)
    };
    let Ok(b) = filled else {
        outs!(ctx, "}");
        return DecodeStatus::FullyDecoded;
    };

    ctx.sep();
    if is_dqbuf {
        outf!(ctx, "index={}, ", b.index);
    }
    let memory = ctx.xval(&MEMORIES, b.memory, "V4L2_MEMORY_???");
    outf!(ctx, "memory={memory}");
    match b.memory {
        V4L2_MEMORY_MMAP => {
            let offset = unsafe { b.m.offset };
            outf!(ctx, ", m.offset={offset:#x}");
        }
        V4L2_MEMORY_USERPTR => {
            let userptr = unsafe { b.m.userptr };
            outf!(ctx, ", m.userptr={userptr:#x}");
        }
        _ => {}
    }
    let flags = buffer_flags(ctx, b.flags);
    outf!(
        ctx,
        ", length={}, bytesused={}, flags={flags}",
        b.length,
        b.bytesused
    );
    if is_dqbuf {
        outf!(
            ctx,
            ", timestamp={{tv_sec={}, tv_usec={}}}",
            b.timestamp.tv_sec,
            b.timestamp.tv_usec
        );
    }
    outs!(ctx, ", ...}");
    DecodeStatus::FullyDecoded
}

fn print_framebuffer(ctx: &mut DecodeCtx<'_>, fb: &Framebuffer) {
    let base = addr(fb.base);
    outf!(
        ctx,
        "{{capability={:#x}, flags={:#x}, base={base}}}",
        fb.capability,
        fb.flags
    );
}

fn g_fbuf(ctx: &mut DecodeCtx<'_>) -> DecodeStatus {
    if ctx.entering() {
        return DecodeStatus::ContinueAtExit;
    }

    let fb = if ctx.syserror() {
        Err(remote::MemFail)
    } else {
        ctx.read_pers::<Framebuffer>(ctx.arg)
    };
    match fb {
        Ok(fb) => print_framebuffer(ctx, &fb),
        Err(remote::MemFail) => {
            let a = addr(ctx.arg);
            outs!(ctx, &a);
        }
    }
    DecodeStatus::FullyDecoded
}

fn s_fbuf(ctx: &mut DecodeCtx<'_>) -> DecodeStatus {
    match ctx.read_pers::<Framebuffer>(ctx.arg) {
        Ok(fb) => print_framebuffer(ctx, &fb),
        Err(remote::MemFail) => {
            let a = addr(ctx.arg);
            outs!(ctx, &a);
        }
    }
    DecodeStatus::FullyDecoded
}

fn stream_on_off(ctx: &mut DecodeCtx<'_>) -> DecodeStatus {
    match ctx.read::<i32>(ctx.arg) {
        Ok(typ) => {
            let name = buf_type(ctx, typ as u32);
            outf!(ctx, "[{name}]");
        }
        Err(remote::MemFail) => {
            let a = addr(ctx.arg);
            outs!(ctx, &a);
        }
    }
    DecodeStatus::FullyDecoded
}

/// Renders the parm arm selected by `typ`. Same contract as
/// [`print_format_fmt`].
fn print_parm(ctx: &mut DecodeCtx<'_>, p: &StreamParm, lead: &str) -> bool {
    match p.typ {
        V4L2_BUF_TYPE_VIDEO_CAPTURE => {
            let c = unsafe { p.parm.capture };
            let capability = ctx.flags(&STREAM_PARM_CAPS, c.capability, "V4L2_CAP_???");
            let capturemode = ctx.flags(&CAPTURE_MODES, c.capturemode, "V4L2_MODE_???");
            let timeperframe = fract(c.timeperframe);
            outf!(
                ctx,
                "{lead}parm.capture={{capability={capability}, capturemode={capturemode}, timeperframe={timeperframe}, extendedmode={:#x}, readbuffers={}}}",
                c.extendedmode, c.readbuffers
            );
        }
        V4L2_BUF_TYPE_VIDEO_OUTPUT => {
            let o = unsafe { p.parm.output };
            let capability = ctx.flags(&STREAM_PARM_CAPS, o.capability, "V4L2_CAP_???");
            let outputmode = ctx.flags(&CAPTURE_MODES, o.outputmode, "V4L2_MODE_???");
            let timeperframe = fract(o.timeperframe);
            outf!(
                ctx,
                "{lead}parm.output={{capability={capability}, outputmode={outputmode}, timeperframe={timeperframe}, extendedmode={:#x}, writebuffers={}}}",
                o.extendedmode, o.writebuffers
            );
        }
        _ => return false,
    }
    true
}

fn parm_rw(ctx: &mut DecodeCtx<'_>, is_get: bool) -> DecodeStatus {
    if ctx.entering() {
        let Ok(p) = ctx.read::<StreamParm>(ctx.arg) else {
            let a = addr(ctx.arg);
            outs!(ctx, &a);
            return DecodeStatus::FullyDecoded;
        };
        let typ = buf_type(ctx, p.typ);
        outf!(ctx, "{{type={typ}");
        if is_get {
            return DecodeStatus::ContinueAtExit;
        }
        if !print_parm(ctx, &p, ", ") {
            outs!(ctx, "}");
            return DecodeStatus::FullyDecoded;
        }
        return DecodeStatus::ContinueAtExit;
    }

    if !ctx.syserror() {
        if let Ok(p) = ctx.read::<StreamParm>(ctx.arg) {
            ctx.sep();
            print_parm(ctx, &p, "");
        }
    }
    outs!(ctx, "}");
    DecodeStatus::FullyDecoded
}

fn g_parm(ctx: &mut DecodeCtx<'_>) -> DecodeStatus {
    parm_rw(ctx, true)
}

fn s_parm(ctx: &mut DecodeCtx<'_>) -> DecodeStatus {
    parm_rw(ctx, false)
}

fn g_std(ctx: &mut DecodeCtx<'_>) -> DecodeStatus {
    if ctx.entering() {
        return DecodeStatus::ContinueAtExit;
    }

    let std = if ctx.syserror() {
        Err(remote::MemFail)
    } else {
        ctx.read::<u64>(ctx.arg)
    };
    match std {
        Ok(std) => outf!(ctx, "[{std:#x}]"),
        Err(remote::MemFail) => {
            let a = addr(ctx.arg);
            outs!(ctx, &a);
        }
    }
    DecodeStatus::FullyDecoded
}

fn s_std(ctx: &mut DecodeCtx<'_>) -> DecodeStatus {
    match ctx.read::<u64>(ctx.arg) {
        Ok(std) => outf!(ctx, "[{std:#x}]"),
        Err(remote::MemFail) => {
            let a = addr(ctx.arg);
            outs!(ctx, &a);
        }
    }
    DecodeStatus::FullyDecoded
}

fn enumstd(ctx: &mut DecodeCtx<'_>) -> DecodeStatus {
    if ctx.entering() {
        let Ok(std) = ctx.read_pers::<Standard>(ctx.arg) else {
            let a = addr(ctx.arg);
            outs!(ctx, &a);
            return DecodeStatus::FullyDecoded;
        };
        outf!(ctx, "{{index={}", std.index);
        return DecodeStatus::ContinueAtExit;
    }

    if !ctx.syserror() {
        if let Ok(std) = ctx.read_pers::<Standard>(ctx.arg) {
            ctx.sep();
            let name = quoted_cstring(&std.name);
            let frameperiod = fract(std.frameperiod);
            outf!(
                ctx,
                "id={:#x}, name={name}, frameperiod={frameperiod}, framelines={}",
                std.id,
                std.framelines
            );
        }
    }
    outs!(ctx, "}");
    DecodeStatus::FullyDecoded
}

fn enuminput(ctx: &mut DecodeCtx<'_>) -> DecodeStatus {
    if ctx.entering() {
        let Ok(input) = ctx.read_pers::<Input>(ctx.arg) else {
            let a = addr(ctx.arg);
            outs!(ctx, &a);
            return DecodeStatus::FullyDecoded;
        };
        outf!(ctx, "{{index={}", input.index);
        return DecodeStatus::ContinueAtExit;
    }

    if !ctx.syserror() {
        if let Ok(input) = ctx.read_pers::<Input>(ctx.arg) {
            ctx.sep();
            let name = quoted_cstring(&input.name);
            let typ = ctx.xval(&INPUT_TYPES, input.typ, "V4L2_INPUT_TYPE_???");
            outf!(ctx, "name={name}, type={typ}");
        }
    }
    outs!(ctx, "}");
    DecodeStatus::FullyDecoded
}

fn g_ctrl(ctx: &mut DecodeCtx<'_>) -> DecodeStatus {
    if ctx.entering() {
        let Ok(ctrl) = ctx.read::<Control>(ctx.arg) else {
            let a = addr(ctx.arg);
            outs!(ctx, &a);
            return DecodeStatus::FullyDecoded;
        };
        let id = cid(ctx, ctrl.id);
        outf!(ctx, "{{id={id}");
        return DecodeStatus::ContinueAtExit;
    }

    if !ctx.syserror() {
        if let Ok(ctrl) = ctx.read::<Control>(ctx.arg) {
            ctx.sep();
            outf!(ctx, "value={}", ctrl.value);
        }
    }
    outs!(ctx, "}");
    DecodeStatus::FullyDecoded
}

fn s_ctrl(ctx: &mut DecodeCtx<'_>) -> DecodeStatus {
    if ctx.entering() {
        let Ok(ctrl) = ctx.read::<Control>(ctx.arg) else {
            let a = addr(ctx.arg);
            outs!(ctx, &a);
            return DecodeStatus::FullyDecoded;
        };
        let id = cid(ctx, ctrl.id);
        outf!(ctx, "{{id={id}, value={}}}", ctrl.value);
        return DecodeStatus::ContinueAtExit;
    }

    // Drivers clamp; the granted value is worth showing.
    if !ctx.syserror() {
        if let Ok(ctrl) = ctx.read::<Control>(ctx.arg) {
            ctx.sep();
            outf!(ctx, "{}", ctrl.value);
        }
    }
    DecodeStatus::FullyDecoded
}

fn print_tuner_fields(ctx: &mut DecodeCtx<'_>, t: &Tuner) {
    let name = quoted_cstring(&t.name);
    let typ = ctx.xval(&TUNER_TYPES, t.typ, "V4L2_TUNER_TYPE_???");
    let capability = ctx.flags(&TUNER_CAPS, t.capability, "V4L2_TUNER_CAP_???");
    let rxsubchans = ctx.flags(&TUNER_RXSUBCHANS, t.rxsubchans, "V4L2_TUNER_SUB_???");
    let audmode = ctx.xval(&TUNER_AUDMODES, t.audmode, "V4L2_TUNER_MODE_???");
    outf!(
        ctx,
        "name={name}, type={typ}, capability={capability}, rangelow={}, rangehigh={}, rxsubchans={rxsubchans}, audmode={audmode}, signal={}, afc={}",
        t.rangelow, t.rangehigh, t.signal, t.afc
    );
}

fn g_tuner(ctx: &mut DecodeCtx<'_>) -> DecodeStatus {
    if ctx.entering() {
        let Ok(t) = ctx.read::<Tuner>(ctx.arg) else {
            let a = addr(ctx.arg);
            outs!(ctx, &a);
            return DecodeStatus::FullyDecoded;
        };
        outf!(ctx, "{{index={}", t.index);
        return DecodeStatus::ContinueAtExit;
    }

    if !ctx.syserror() {
        if let Ok(t) = ctx.read::<Tuner>(ctx.arg) {
            ctx.sep();
            print_tuner_fields(ctx, &t);
        }
    }
    outs!(ctx, "}");
    DecodeStatus::FullyDecoded
}

fn s_tuner(ctx: &mut DecodeCtx<'_>) -> DecodeStatus {
    let Ok(t) = ctx.read::<Tuner>(ctx.arg) else {
        let a = addr(ctx.arg);
        outs!(ctx, &a);
        return DecodeStatus::FullyDecoded;
    };
    outf!(ctx, "{{index={}, ", t.index);
    print_tuner_fields(ctx, &t);
    outs!(ctx, "}");
    DecodeStatus::FullyDecoded
}

fn queryctrl(ctx: &mut DecodeCtx<'_>) -> DecodeStatus {
    if ctx.entering() {
        let Ok(q) = ctx.read::<QueryCtrl>(ctx.arg) else {
            let a = addr(ctx.arg);
            outs!(ctx, &a);
            return DecodeStatus::FullyDecoded;
        };
        let id = cid_with_query_flags(ctx, q.id);
        outf!(ctx, "{{id={id}");
        ctx.set_scratch(u64::from(q.id));
        return DecodeStatus::ContinueAtExit;
    }

    if !ctx.syserror() {
        if let Ok(q) = ctx.read::<QueryCtrl>(ctx.arg) {
            // The kernel replaces a next-control request with the id it
            // actually settled on.
            if u64::from(q.id) != ctx.scratch() {
                let id = cid(ctx, q.id);
                outf!(ctx, " => {id}");
            }
            ctx.sep();
            let typ = ctx.xval(&CTRL_TYPES, q.typ, "V4L2_CTRL_TYPE_???");
            let name = quoted_cstring(&q.name);
            let flags = ctx.flags(&CTRL_FLAGS, q.flags, "V4L2_CTRL_FLAG_???");
            outf!(
                ctx,
                "type={typ}, name={name}, minimum={}, maximum={}, step={}, default_value={}, flags={flags}",
                q.minimum, q.maximum, q.step, q.default_value
            );
        }
    }
    outs!(ctx, "}");
    DecodeStatus::FullyDecoded
}

fn g_input(ctx: &mut DecodeCtx<'_>) -> DecodeStatus {
    if ctx.entering() {
        return DecodeStatus::ContinueAtExit;
    }

    let index = if ctx.syserror() {
        Err(remote::MemFail)
    } else {
        ctx.read::<i32>(ctx.arg)
    };
    match index {
        Ok(index) => outf!(ctx, "[{index}]"),
        Err(remote::MemFail) => {
            let a = addr(ctx.arg);
            outs!(ctx, &a);
        }
    }
    DecodeStatus::FullyDecoded
}

fn s_input(ctx: &mut DecodeCtx<'_>) -> DecodeStatus {
    match ctx.read::<i32>(ctx.arg) {
        Ok(index) => outf!(ctx, "[{index}]"),
        Err(remote::MemFail) => {
            let a = addr(ctx.arg);
            outs!(ctx, &a);
        }
    }
    DecodeStatus::FullyDecoded
}

fn cropcap(ctx: &mut DecodeCtx<'_>) -> DecodeStatus {
    if ctx.entering() {
        let Ok(cap) = ctx.read::<CropCap>(ctx.arg) else {
            let a = addr(ctx.arg);
            outs!(ctx, &a);
            return DecodeStatus::FullyDecoded;
        };
        let typ = buf_type(ctx, cap.typ);
        outf!(ctx, "{{type={typ}");
        return DecodeStatus::ContinueAtExit;
    }

    if !ctx.syserror() {
        if let Ok(cap) = ctx.read::<CropCap>(ctx.arg) {
            ctx.sep();
            let bounds = rect(cap.bounds);
            let defrect = rect(cap.defrect);
            let pixelaspect = fract(cap.pixelaspect);
            outf!(
                ctx,
                "bounds={bounds}, defrect={defrect}, pixelaspect={pixelaspect}"
            );
        }
    }
    outs!(ctx, "}");
    DecodeStatus::FullyDecoded
}

fn g_crop(ctx: &mut DecodeCtx<'_>) -> DecodeStatus {
    if ctx.entering() {
        let Ok(crop) = ctx.read::<Crop>(ctx.arg) else {
            let a = addr(ctx.arg);
            outs!(ctx, &a);
            return DecodeStatus::FullyDecoded;
        };
        let typ = buf_type(ctx, crop.typ);
        outf!(ctx, "{{type={typ}");
        return DecodeStatus::ContinueAtExit;
    }

    if !ctx.syserror() {
        if let Ok(crop) = ctx.read::<Crop>(ctx.arg) {
            ctx.sep();
            let c = rect(crop.c);
            outf!(ctx, "c={c}");
        }
    }
    outs!(ctx, "}");
    DecodeStatus::FullyDecoded
}

fn s_crop(ctx: &mut DecodeCtx<'_>) -> DecodeStatus {
    match ctx.read::<Crop>(ctx.arg) {
        Ok(crop) => {
            let typ = buf_type(ctx, crop.typ);
            let c = rect(crop.c);
            outf!(ctx, "{{type={typ}, c={c}}}");
        }
        Err(remote::MemFail) => {
            let a = addr(ctx.arg);
            outs!(ctx, &a);
        }
    }
    DecodeStatus::FullyDecoded
}

fn print_ext_control_array(ctx: &mut DecodeCtx<'_>, c: &ExtControls) {
    outs!(ctx, "[");
    let mem = ctx.mem();
    let pid = ctx.pid;
    let personality = ctx.personality;
    let res = remote::read_array::<ExtControl>(
        mem,
        pid,
        c.controls,
        c.count,
        ARRAY_PRINT_MAX,
        |i, e| {
            if i > 0 {
                outs!(ctx, ", ");
            }
            // Packed struct; copy fields out before formatting.
            let e = *e;
            let raw_id = e.id;
            let size = e.size;
            let id = cid(ctx, raw_id);
            outf!(ctx, "{{id={id}, size={size}");
            if size > 0 {
                match remote::read_cstring(mem, pid, e.string_addr(personality), size as usize)
                {
                    Ok(s) => {
                        let mut quoted = quoted_bytes(s.bytes());
                        if !s.is_complete() {
                            quoted.push_str("...");
                        }
                        outf!(ctx, ", string={quoted}");
                    }
                    Err(remote::MemFail) => {
                        let a = addr(e.string_addr(personality));
                        outf!(ctx, ", string={a}");
                    }
                }
            } else {
                let value = e.value();
                let value64 = e.value64;
                outf!(ctx, ", value={value}, value64={value64}");
            }
            outs!(ctx, "}");
        },
    );
    if c.count > 0 && res == ArrayRead::Truncated {
        outs!(ctx, ", ...");
    }
    outs!(ctx, "]");
}

fn ext_ctrls(ctx: &mut DecodeCtx<'_>, is_get: bool) -> DecodeStatus {
    if ctx.entering() {
        let Ok(c) = ctx.read_pers::<ExtControls>(ctx.arg) else {
            let a = addr(ctx.arg);
            outs!(ctx, &a);
            return DecodeStatus::FullyDecoded;
        };
        let class = ctx.xval(&CTRL_CLASSES, c.ctrl_class, "V4L2_CTRL_CLASS_???");
        outf!(ctx, "{{ctrl_class={class}, count={}", c.count);
        if c.count == 0 {
            outs!(ctx, "}");
            return DecodeStatus::FullyDecoded;
        }
        if !is_get {
            outs!(ctx, ", controls=");
            print_ext_control_array(ctx, &c);
        }
        return DecodeStatus::ContinueAtExit;
    }

    if !ctx.syserror() {
        if let Ok(c) = ctx.read_pers::<ExtControls>(ctx.arg) {
            ctx.sep();
            outs!(ctx, "controls=");
            print_ext_control_array(ctx, &c);
        }
    } else if let Ok(c) = ctx.read_pers::<ExtControls>(ctx.arg) {
        outf!(ctx, ", error_idx={}", c.error_idx);
    }
    outs!(ctx, "}");
    DecodeStatus::FullyDecoded
}

fn g_ext_ctrls(ctx: &mut DecodeCtx<'_>) -> DecodeStatus {
    ext_ctrls(ctx, true)
}

fn s_ext_ctrls(ctx: &mut DecodeCtx<'_>) -> DecodeStatus {
    ext_ctrls(ctx, false)
}

fn frmsizeenum(ctx: &mut DecodeCtx<'_>) -> DecodeStatus {
    if ctx.entering() {
        let Ok(e) = ctx.read::<FrmSizeEnum>(ctx.arg) else {
            let a = addr(ctx.arg);
            outs!(ctx, &a);
            return DecodeStatus::FullyDecoded;
        };
        let pixel_format = fourcc(ctx, e.pixel_format, &PIX_FMTS);
        outf!(ctx, "{{index={}, pixel_format={pixel_format}", e.index);
        return DecodeStatus::ContinueAtExit;
    }

    if !ctx.syserror() {
        if let Ok(e) = ctx.read::<FrmSizeEnum>(ctx.arg) {
            ctx.sep();
            let typ = ctx.xval(&FRMSIZE_TYPES, e.typ, "V4L2_FRMSIZE_TYPE_???");
            outf!(ctx, "type={typ}");
            match e.typ {
                V4L2_FRMSIZE_TYPE_DISCRETE => {
                    let d = unsafe { e.u.discrete };
                    outf!(ctx, ", discrete={{width={}, height={}}}", d.width, d.height);
                }
                V4L2_FRMSIZE_TYPE_STEPWISE => {
                    let s = unsafe { e.u.stepwise };
                    outf!(
                        ctx,
                        ", stepwise={{min_width={}, max_width={}, step_width={}, min_height={}, max_height={}, step_height={}}}",
                        s.min_width, s.max_width, s.step_width,
                        s.min_height, s.max_height, s.step_height
                    );
                }
                _ => {}
            }
        }
    }
    outs!(ctx, "}");
    DecodeStatus::FullyDecoded
}

fn frmivalenum(ctx: &mut DecodeCtx<'_>) -> DecodeStatus {
    if ctx.entering() {
        let Ok(e) = ctx.read::<FrmIvalEnum>(ctx.arg) else {
            let a = addr(ctx.arg);
            outs!(ctx, &a);
            return DecodeStatus::FullyDecoded;
        };
        let pixel_format = fourcc(ctx, e.pixel_format, &PIX_FMTS);
        outf!(
            ctx,
            "{{index={}, pixel_format={pixel_format}, width={}, height={}",
            e.index,
            e.width,
            e.height
        );
        return DecodeStatus::ContinueAtExit;
    }

    if !ctx.syserror() {
        if let Ok(e) = ctx.read::<FrmIvalEnum>(ctx.arg) {
            ctx.sep();
            let typ = ctx.xval(&FRMIVAL_TYPES, e.typ, "V4L2_FRMIVAL_TYPE_???");
            outf!(ctx, "type={typ}");
            match e.typ {
                V4L2_FRMIVAL_TYPE_DISCRETE => {
                    let d = fract(unsafe { e.u.discrete });
                    outf!(ctx, ", discrete={d}");
                }
                // A continuous range is a stepwise one with step 1/1; both
                // carry the stepwise payload.
                V4L2_FRMIVAL_TYPE_CONTINUOUS | V4L2_FRMIVAL_TYPE_STEPWISE => {
                    let s = unsafe { e.u.stepwise };
                    let min = fract(s.min);
                    let max = fract(s.max);
                    let step = fract(s.step);
                    outf!(ctx, ", stepwise={{min={min}, max={max}, step={step}}}");
                }
                _ => {}
            }
        }
    }
    outs!(ctx, "}");
    DecodeStatus::FullyDecoded
}

fn create_bufs(ctx: &mut DecodeCtx<'_>) -> DecodeStatus {
    if ctx.entering() {
        let Ok(c) = ctx.read_pers::<CreateBuffers>(ctx.arg) else {
            let a = addr(ctx.arg);
            outs!(ctx, &a);
            return DecodeStatus::FullyDecoded;
        };
        let memory = ctx.xval(&MEMORIES, c.memory, "V4L2_MEMORY_???");
        let typ = buf_type(ctx, c.format.typ);
        outf!(
            ctx,
            "{{count={}, memory={memory}, format={{type={typ}",
            c.count
        );
        print_format_fmt(ctx, &c.format, ", ");
        outs!(ctx, "}}");
        return DecodeStatus::ContinueAtExit;
    }

    if !ctx.syserror() {
        if let Ok(c) = ctx.read_pers::<CreateBuffers>(ctx.arg) {
            ctx.sep();
            outf!(ctx, "{{index={}, count={}}}", c.index, c.count);
        }
    }
    DecodeStatus::FullyDecoded
}
