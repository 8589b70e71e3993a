// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

//! V4L2 ioctl command codes.
//!
//! The numeric values are the kernel ABI, hardcoded rather than computed, so
//! the `const` assertions at the bottom can cross-check our struct mirrors
//! against the size bits the kernel itself encoded into each command.

pub const IOC_NONE: u32 = 0;
pub const IOC_WRITE: u32 = 1;
pub const IOC_READ: u32 = 2;

pub const V4L2_IOCTL_TYPE: u8 = b'V';

pub const fn ioc_dir(code: u32) -> u32 {
    code >> 30
}

pub const fn ioc_size(code: u32) -> usize {
    ((code >> 16) & 0x3fff) as usize
}

pub const fn ioc_type(code: u32) -> u8 {
    (code >> 8) as u8
}

pub const fn ioc_nr(code: u32) -> u8 {
    code as u8
}

pub const VIDIOC_QUERYCAP: u32 = 0x8068_5600;
pub const VIDIOC_ENUM_FMT: u32 = 0xc040_5602;
pub const VIDIOC_G_FMT: u32 = 0xc0d0_5604;
pub const VIDIOC_S_FMT: u32 = 0xc0d0_5605;
pub const VIDIOC_REQBUFS: u32 = 0xc014_5608;
pub const VIDIOC_QUERYBUF: u32 = 0xc058_5609;
pub const VIDIOC_G_FBUF: u32 = 0x8030_560a;
pub const VIDIOC_S_FBUF: u32 = 0x4030_560b;
pub const VIDIOC_QBUF: u32 = 0xc058_560f;
pub const VIDIOC_DQBUF: u32 = 0xc058_5611;
pub const VIDIOC_STREAMON: u32 = 0x4004_5612;
pub const VIDIOC_STREAMOFF: u32 = 0x4004_5613;
pub const VIDIOC_G_PARM: u32 = 0xc0cc_5615;
pub const VIDIOC_S_PARM: u32 = 0xc0cc_5616;
pub const VIDIOC_G_STD: u32 = 0x8008_5617;
pub const VIDIOC_S_STD: u32 = 0x4008_5618;
pub const VIDIOC_ENUMSTD: u32 = 0xc048_5619;
pub const VIDIOC_ENUMINPUT: u32 = 0xc050_561a;
pub const VIDIOC_G_CTRL: u32 = 0xc008_561b;
pub const VIDIOC_S_CTRL: u32 = 0xc008_561c;
pub const VIDIOC_G_TUNER: u32 = 0xc054_561d;
pub const VIDIOC_S_TUNER: u32 = 0x4054_561e;
pub const VIDIOC_QUERYCTRL: u32 = 0xc044_5624;
pub const VIDIOC_G_INPUT: u32 = 0x8004_5626;
pub const VIDIOC_S_INPUT: u32 = 0xc004_5627;
pub const VIDIOC_CROPCAP: u32 = 0xc02c_563a;
pub const VIDIOC_G_CROP: u32 = 0xc014_563b;
pub const VIDIOC_S_CROP: u32 = 0x4014_563c;
pub const VIDIOC_TRY_FMT: u32 = 0xc0d0_5640;
pub const VIDIOC_G_EXT_CTRLS: u32 = 0xc020_5647;
pub const VIDIOC_S_EXT_CTRLS: u32 = 0xc020_5648;
pub const VIDIOC_TRY_EXT_CTRLS: u32 = 0xc020_5649;
pub const VIDIOC_ENUM_FRAMESIZES: u32 = 0xc02c_564a;
pub const VIDIOC_ENUM_FRAMEINTERVALS: u32 = 0xc034_564b;
pub const VIDIOC_CREATE_BUFS: u32 = 0xc100_565c;

/// Codes as issued by a 32-bit process; only the size bits differ, and only
/// for the structures that embed pointers or 4-byte-aligned u64s.
pub mod compat {
    pub const VIDIOC_G_FMT: u32 = 0xc0cc_5604;
    pub const VIDIOC_S_FMT: u32 = 0xc0cc_5605;
    pub const VIDIOC_QUERYBUF: u32 = 0xc044_5609;
    pub const VIDIOC_G_FBUF: u32 = 0x802c_560a;
    pub const VIDIOC_S_FBUF: u32 = 0x402c_560b;
    pub const VIDIOC_QBUF: u32 = 0xc044_560f;
    pub const VIDIOC_DQBUF: u32 = 0xc044_5611;
    pub const VIDIOC_TRY_FMT: u32 = 0xc0cc_5640;
    pub const VIDIOC_ENUMSTD: u32 = 0xc040_5619;
    pub const VIDIOC_ENUMINPUT: u32 = 0xc04c_561a;
    pub const VIDIOC_G_EXT_CTRLS: u32 = 0xc018_5647;
    pub const VIDIOC_S_EXT_CTRLS: u32 = 0xc018_5648;
    pub const VIDIOC_TRY_EXT_CTRLS: u32 = 0xc018_5649;
    pub const VIDIOC_CREATE_BUFS: u32 = 0xc0f8_565c;
}

const _: () = {
    use core::mem::size_of;

    use crate::kernel_types::*;

    assert!(ioc_size(VIDIOC_QUERYCAP) == size_of::<Capability>());
    assert!(ioc_size(VIDIOC_ENUM_FMT) == size_of::<FmtDesc>());
    assert!(ioc_size(VIDIOC_G_FMT) == size_of::<Format>());
    assert!(ioc_size(compat::VIDIOC_G_FMT) == size_of::<FormatCompat>());
    assert!(ioc_size(VIDIOC_REQBUFS) == size_of::<RequestBuffers>());
    assert!(ioc_size(VIDIOC_QUERYBUF) == size_of::<Buffer>());
    assert!(ioc_size(compat::VIDIOC_QUERYBUF) == size_of::<BufferCompat>());
    assert!(ioc_size(VIDIOC_G_FBUF) == size_of::<Framebuffer>());
    assert!(ioc_size(compat::VIDIOC_G_FBUF) == size_of::<FramebufferCompat>());
    assert!(ioc_size(VIDIOC_G_PARM) == size_of::<StreamParm>());
    assert!(ioc_size(VIDIOC_ENUMSTD) == size_of::<Standard>());
    assert!(ioc_size(compat::VIDIOC_ENUMSTD) == size_of::<StandardCompat>());
    assert!(ioc_size(VIDIOC_ENUMINPUT) == size_of::<Input>());
    assert!(ioc_size(compat::VIDIOC_ENUMINPUT) == size_of::<InputCompat>());
    assert!(ioc_size(VIDIOC_G_CTRL) == size_of::<Control>());
    assert!(ioc_size(VIDIOC_G_TUNER) == size_of::<Tuner>());
    assert!(ioc_size(VIDIOC_QUERYCTRL) == size_of::<QueryCtrl>());
    assert!(ioc_size(VIDIOC_CROPCAP) == size_of::<CropCap>());
    assert!(ioc_size(VIDIOC_G_CROP) == size_of::<Crop>());
    assert!(ioc_size(VIDIOC_G_EXT_CTRLS) == size_of::<ExtControls>());
    assert!(ioc_size(compat::VIDIOC_G_EXT_CTRLS) == size_of::<ExtControlsCompat>());
    assert!(ioc_size(VIDIOC_ENUM_FRAMESIZES) == size_of::<FrmSizeEnum>());
    assert!(ioc_size(VIDIOC_ENUM_FRAMEINTERVALS) == size_of::<FrmIvalEnum>());
    assert!(ioc_size(VIDIOC_CREATE_BUFS) == size_of::<CreateBuffers>());
    assert!(ioc_size(compat::VIDIOC_CREATE_BUFS) == size_of::<CreateBuffersCompat>());

    assert!(ioc_type(VIDIOC_QUERYCAP) == V4L2_IOCTL_TYPE);
    assert!(ioc_dir(VIDIOC_QUERYCAP) == IOC_READ);
    assert!(ioc_dir(VIDIOC_S_FBUF) == IOC_WRITE);
    assert!(ioc_dir(VIDIOC_G_FMT) == IOC_READ | IOC_WRITE);
};
