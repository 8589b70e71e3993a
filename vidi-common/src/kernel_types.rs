// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

//! Mirrors of the kernel's V4L2 uapi structures.
//!
//! Each structure the decoder reads out of traced memory has a native
//! (64-bit) mirror here; the ones whose layout depends on the traced
//! process's pointer width also carry a `*Compat` (32-bit) mirror and a
//! [`HasCompat`] conversion. Remote pointers are held as plain integers,
//! they are never dereferenced locally.
//!
//! Layout compatibility is enforced at build time: the `const` assertions at
//! the bottom of this file pin sizes and key offsets, and `ioctls.rs` ties
//! every size to the `_IOC_SIZE` bits of the corresponding command code,
//! which encode the kernel's own `sizeof`.

use crate::HasCompat;

pub const VIDEO_MAX_PLANES: usize = 8;

pub const V4L2_BUF_TYPE_VIDEO_CAPTURE: u32 = 1;
pub const V4L2_BUF_TYPE_VIDEO_OUTPUT: u32 = 2;
pub const V4L2_BUF_TYPE_VIDEO_OVERLAY: u32 = 3;
pub const V4L2_BUF_TYPE_VBI_CAPTURE: u32 = 4;
pub const V4L2_BUF_TYPE_VBI_OUTPUT: u32 = 5;
pub const V4L2_BUF_TYPE_SLICED_VBI_CAPTURE: u32 = 6;
pub const V4L2_BUF_TYPE_SLICED_VBI_OUTPUT: u32 = 7;
pub const V4L2_BUF_TYPE_VIDEO_OUTPUT_OVERLAY: u32 = 8;
pub const V4L2_BUF_TYPE_VIDEO_CAPTURE_MPLANE: u32 = 9;
pub const V4L2_BUF_TYPE_VIDEO_OUTPUT_MPLANE: u32 = 10;
pub const V4L2_BUF_TYPE_SDR_CAPTURE: u32 = 11;
pub const V4L2_BUF_TYPE_SDR_OUTPUT: u32 = 12;
pub const V4L2_BUF_TYPE_META_CAPTURE: u32 = 13;
pub const V4L2_BUF_TYPE_META_OUTPUT: u32 = 14;

pub const V4L2_MEMORY_MMAP: u32 = 1;
pub const V4L2_MEMORY_USERPTR: u32 = 2;

pub const V4L2_FRMSIZE_TYPE_DISCRETE: u32 = 1;
pub const V4L2_FRMSIZE_TYPE_CONTINUOUS: u32 = 2;
pub const V4L2_FRMSIZE_TYPE_STEPWISE: u32 = 3;

pub const V4L2_FRMIVAL_TYPE_DISCRETE: u32 = 1;
pub const V4L2_FRMIVAL_TYPE_CONTINUOUS: u32 = 2;
pub const V4L2_FRMIVAL_TYPE_STEPWISE: u32 = 3;

pub const V4L2_BUF_FLAG_TIMESTAMP_MASK: u32 = 0x0000e000;
pub const V4L2_BUF_FLAG_TSTAMP_SRC_MASK: u32 = 0x00070000;

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Fract {
    pub numerator: u32,
    pub denominator: u32,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct Capability {
    pub driver: [u8; 16],
    pub card: [u8; 32],
    pub bus_info: [u8; 32],
    pub version: u32,
    pub capabilities: u32,
    pub device_caps: u32,
    pub reserved: [u32; 3],
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct FmtDesc {
    pub index: u32,
    pub typ: u32,
    pub flags: u32,
    pub description: [u8; 32],
    pub pixelformat: u32,
    pub reserved: [u32; 4],
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct PixFormat {
    pub width: u32,
    pub height: u32,
    pub pixelformat: u32,
    pub field: u32,
    pub bytesperline: u32,
    pub sizeimage: u32,
    pub colorspace: u32,
    pub priv_: u32,
    pub flags: u32,
    pub ycbcr_enc: u32,
    pub quantization: u32,
    pub xfer_func: u32,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct PlanePixFormat {
    pub sizeimage: u32,
    pub bytesperline: u32,
    pub reserved: [u16; 6],
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct PixFormatMplane {
    pub width: u32,
    pub height: u32,
    pub pixelformat: u32,
    pub field: u32,
    pub colorspace: u32,
    pub plane_fmt: [PlanePixFormat; VIDEO_MAX_PLANES],
    pub num_planes: u8,
    pub flags: u8,
    pub ycbcr_enc: u8,
    pub quantization: u8,
    pub xfer_func: u8,
    pub reserved: [u8; 7],
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct Window {
    pub w: Rect,
    pub field: u32,
    pub chromakey: u32,
    pub clips: u64,
    pub clipcount: u32,
    pub bitmap: u64,
    pub global_alpha: u8,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct WindowCompat {
    pub w: Rect,
    pub field: u32,
    pub chromakey: u32,
    pub clips: u32,
    pub clipcount: u32,
    pub bitmap: u32,
    pub global_alpha: u8,
}

impl Window {
    fn from_compat(c: WindowCompat) -> Self {
        Window {
            w: c.w,
            field: c.field,
            chromakey: c.chromakey,
            clips: c.clips.into(),
            clipcount: c.clipcount,
            bitmap: c.bitmap.into(),
            global_alpha: c.global_alpha,
        }
    }
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct VbiFormat {
    pub sampling_rate: u32,
    pub offset: u32,
    pub samples_per_line: u32,
    pub sample_format: u32,
    pub start: [i32; 2],
    pub count: [u32; 2],
    pub flags: u32,
    pub reserved: [u32; 2],
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct SlicedVbiFormat {
    pub service_set: u16,
    pub service_lines: [[u16; 24]; 2],
    pub io_size: u32,
    pub reserved: [u32; 2],
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct SdrFormat {
    pub pixelformat: u32,
    pub buffersize: u32,
    pub reserved: [u8; 24],
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct MetaFormat {
    pub dataformat: u32,
    pub buffersize: u32,
}

#[repr(C)]
#[derive(Copy, Clone)]
pub union FormatUnion {
    pub pix: PixFormat,
    pub pix_mp: PixFormatMplane,
    pub win: Window,
    pub vbi: VbiFormat,
    pub sliced: SlicedVbiFormat,
    pub sdr: SdrFormat,
    pub meta: MetaFormat,
    pub raw_data: [u8; 200],
}

impl Default for FormatUnion {
    fn default() -> Self {
        FormatUnion {
            raw_data: [0; 200],
        }
    }
}

#[repr(C)]
#[derive(Default, Copy, Clone)]
pub struct Format {
    pub typ: u32,
    pub fmt: FormatUnion,
}

#[repr(C)]
#[derive(Copy, Clone)]
pub union FormatUnionCompat {
    pub pix: PixFormat,
    pub pix_mp: PixFormatMplane,
    pub win: WindowCompat,
    pub vbi: VbiFormat,
    pub sliced: SlicedVbiFormat,
    pub sdr: SdrFormat,
    pub meta: MetaFormat,
    pub raw_data: [u8; 200],
}

impl Default for FormatUnionCompat {
    fn default() -> Self {
        FormatUnionCompat {
            raw_data: [0; 200],
        }
    }
}

#[repr(C)]
#[derive(Default, Copy, Clone)]
pub struct FormatCompat {
    pub typ: u32,
    pub fmt: FormatUnionCompat,
}

impl HasCompat for Format {
    type Compat = FormatCompat;

    fn from_compat(c: FormatCompat) -> Self {
        // Only the overlay window arm holds pointers; every other arm has
        // the same layout under both personalities.
        let fmt = match c.typ {
            V4L2_BUF_TYPE_VIDEO_OVERLAY | V4L2_BUF_TYPE_VIDEO_OUTPUT_OVERLAY => FormatUnion {
                win: Window::from_compat(unsafe { c.fmt.win }),
            },
            _ => FormatUnion {
                raw_data: unsafe { c.fmt.raw_data },
            },
        };
        Format { typ: c.typ, fmt }
    }
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct RequestBuffers {
    pub count: u32,
    pub typ: u32,
    pub memory: u32,
    pub reserved: [u32; 2],
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct Timecode {
    pub typ: u32,
    pub flags: u32,
    pub frames: u8,
    pub seconds: u8,
    pub minutes: u8,
    pub hours: u8,
    pub userbits: [u8; 4],
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct Timeval {
    pub tv_sec: i64,
    pub tv_usec: i64,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct TimevalCompat {
    pub tv_sec: i32,
    pub tv_usec: i32,
}

#[repr(C)]
#[derive(Copy, Clone)]
pub union BufferM {
    pub offset: u32,
    pub userptr: u64,
    pub planes: u64,
    pub fd: i32,
}

impl Default for BufferM {
    fn default() -> Self {
        BufferM { userptr: 0 }
    }
}

#[repr(C)]
#[derive(Default, Copy, Clone)]
pub struct Buffer {
    pub index: u32,
    pub typ: u32,
    pub bytesused: u32,
    pub flags: u32,
    pub field: u32,
    pub timestamp: Timeval,
    pub timecode: Timecode,
    pub sequence: u32,
    pub memory: u32,
    pub m: BufferM,
    pub length: u32,
    pub reserved2: u32,
    pub reserved: u32,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct BufferCompat {
    pub index: u32,
    pub typ: u32,
    pub bytesused: u32,
    pub flags: u32,
    pub field: u32,
    pub timestamp: TimevalCompat,
    pub timecode: Timecode,
    pub sequence: u32,
    pub memory: u32,
    pub m: u32,
    pub length: u32,
    pub reserved2: u32,
    pub reserved: u32,
}

impl HasCompat for Buffer {
    type Compat = BufferCompat;

    fn from_compat(c: BufferCompat) -> Self {
        Buffer {
            index: c.index,
            typ: c.typ,
            bytesused: c.bytesused,
            flags: c.flags,
            field: c.field,
            timestamp: Timeval {
                tv_sec: c.timestamp.tv_sec.into(),
                tv_usec: c.timestamp.tv_usec.into(),
            },
            timecode: c.timecode,
            sequence: c.sequence,
            memory: c.memory,
            // Widening covers both arms the decoder looks at: `offset`
            // reads back the low 32 bits, `userptr` the zero-extended value.
            m: BufferM {
                userptr: c.m.into(),
            },
            length: c.length,
            reserved2: c.reserved2,
            reserved: c.reserved,
        }
    }
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct Clip {
    pub c: Rect,
    pub next: u64,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct ClipCompat {
    pub c: Rect,
    pub next: u32,
}

impl HasCompat for Clip {
    type Compat = ClipCompat;

    fn from_compat(c: ClipCompat) -> Self {
        Clip {
            c: c.c,
            next: c.next.into(),
        }
    }
}

/// The framebuffer carries its own trimmed format block, eight u32s, not
/// the full pix format.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct FramebufferFmt {
    pub width: u32,
    pub height: u32,
    pub pixelformat: u32,
    pub field: u32,
    pub bytesperline: u32,
    pub sizeimage: u32,
    pub colorspace: u32,
    pub priv_: u32,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct Framebuffer {
    pub capability: u32,
    pub flags: u32,
    pub base: u64,
    pub fmt: FramebufferFmt,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct FramebufferCompat {
    pub capability: u32,
    pub flags: u32,
    pub base: u32,
    pub fmt: FramebufferFmt,
}

impl HasCompat for Framebuffer {
    type Compat = FramebufferCompat;

    fn from_compat(c: FramebufferCompat) -> Self {
        Framebuffer {
            capability: c.capability,
            flags: c.flags,
            base: c.base.into(),
            fmt: c.fmt,
        }
    }
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct CaptureParm {
    pub capability: u32,
    pub capturemode: u32,
    pub timeperframe: Fract,
    pub extendedmode: u32,
    pub readbuffers: u32,
    pub reserved: [u32; 4],
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct OutputParm {
    pub capability: u32,
    pub outputmode: u32,
    pub timeperframe: Fract,
    pub extendedmode: u32,
    pub writebuffers: u32,
    pub reserved: [u32; 4],
}

#[repr(C)]
#[derive(Copy, Clone)]
pub union StreamParmUnion {
    pub capture: CaptureParm,
    pub output: OutputParm,
    pub raw_data: [u8; 200],
}

impl Default for StreamParmUnion {
    fn default() -> Self {
        StreamParmUnion {
            raw_data: [0; 200],
        }
    }
}

#[repr(C)]
#[derive(Default, Copy, Clone)]
pub struct StreamParm {
    pub typ: u32,
    pub parm: StreamParmUnion,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct Standard {
    pub index: u32,
    pub id: u64,
    pub name: [u8; 24],
    pub frameperiod: Fract,
    pub framelines: u32,
    pub reserved: [u32; 4],
}

// The 32-bit ABI aligns u64 to 4 bytes.
#[repr(C, packed(4))]
#[derive(Debug, Default, Copy, Clone)]
pub struct StandardCompat {
    pub index: u32,
    pub id: u64,
    pub name: [u8; 24],
    pub frameperiod: Fract,
    pub framelines: u32,
    pub reserved: [u32; 4],
}

impl HasCompat for Standard {
    type Compat = StandardCompat;

    fn from_compat(c: StandardCompat) -> Self {
        Standard {
            index: c.index,
            id: c.id,
            name: c.name,
            frameperiod: c.frameperiod,
            framelines: c.framelines,
            reserved: c.reserved,
        }
    }
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct Input {
    pub index: u32,
    pub name: [u8; 32],
    pub typ: u32,
    pub audioset: u32,
    pub tuner: u32,
    pub std: u64,
    pub status: u32,
    pub capabilities: u32,
    pub reserved: [u32; 3],
}

#[repr(C, packed(4))]
#[derive(Debug, Default, Copy, Clone)]
pub struct InputCompat {
    pub index: u32,
    pub name: [u8; 32],
    pub typ: u32,
    pub audioset: u32,
    pub tuner: u32,
    pub std: u64,
    pub status: u32,
    pub capabilities: u32,
    pub reserved: [u32; 3],
}

impl HasCompat for Input {
    type Compat = InputCompat;

    fn from_compat(c: InputCompat) -> Self {
        Input {
            index: c.index,
            name: c.name,
            typ: c.typ,
            audioset: c.audioset,
            tuner: c.tuner,
            std: c.std,
            status: c.status,
            capabilities: c.capabilities,
            reserved: c.reserved,
        }
    }
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct Control {
    pub id: u32,
    pub value: i32,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct Tuner {
    pub index: u32,
    pub name: [u8; 32],
    pub typ: u32,
    pub capability: u32,
    pub rangelow: u32,
    pub rangehigh: u32,
    pub rxsubchans: u32,
    pub audmode: u32,
    pub signal: i32,
    pub afc: i32,
    pub reserved: [u32; 4],
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct QueryCtrl {
    pub id: u32,
    pub typ: u32,
    pub name: [u8; 32],
    pub minimum: i32,
    pub maximum: i32,
    pub step: i32,
    pub default_value: i32,
    pub flags: u32,
    pub reserved: [u32; 2],
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct CropCap {
    pub typ: u32,
    pub bounds: Rect,
    pub defrect: Rect,
    pub pixelaspect: Fract,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct Crop {
    pub typ: u32,
    pub c: Rect,
}

/// The kernel packs this one; the value union is 8 bytes under both
/// personalities, only the meaning of its pointer arm changes.
#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct ExtControl {
    pub id: u32,
    pub size: u32,
    pub reserved2: u32,
    pub value64: i64,
}

impl ExtControl {
    pub fn value(&self) -> i32 {
        self.value64 as i32
    }

    pub fn string_addr(&self, personality: crate::Personality) -> u64 {
        match personality {
            crate::Personality::Bits64 => self.value64 as u64,
            crate::Personality::Bits32 => self.value64 as u64 & 0xffff_ffff,
        }
    }
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct ExtControls {
    pub ctrl_class: u32,
    pub count: u32,
    pub error_idx: u32,
    pub request_fd: i32,
    pub reserved: [u32; 1],
    pub controls: u64,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct ExtControlsCompat {
    pub ctrl_class: u32,
    pub count: u32,
    pub error_idx: u32,
    pub request_fd: i32,
    pub reserved: [u32; 1],
    pub controls: u32,
}

impl HasCompat for ExtControls {
    type Compat = ExtControlsCompat;

    fn from_compat(c: ExtControlsCompat) -> Self {
        ExtControls {
            ctrl_class: c.ctrl_class,
            count: c.count,
            error_idx: c.error_idx,
            request_fd: c.request_fd,
            reserved: c.reserved,
            controls: c.controls.into(),
        }
    }
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct FrmSizeDiscrete {
    pub width: u32,
    pub height: u32,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct FrmSizeStepwise {
    pub min_width: u32,
    pub max_width: u32,
    pub step_width: u32,
    pub min_height: u32,
    pub max_height: u32,
    pub step_height: u32,
}

#[repr(C)]
#[derive(Copy, Clone)]
pub union FrmSizeUnion {
    pub discrete: FrmSizeDiscrete,
    pub stepwise: FrmSizeStepwise,
}

impl Default for FrmSizeUnion {
    fn default() -> Self {
        FrmSizeUnion {
            stepwise: FrmSizeStepwise::default(),
        }
    }
}

#[repr(C)]
#[derive(Default, Copy, Clone)]
pub struct FrmSizeEnum {
    pub index: u32,
    pub pixel_format: u32,
    pub typ: u32,
    pub u: FrmSizeUnion,
    pub reserved: [u32; 2],
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct FrmIvalStepwise {
    pub min: Fract,
    pub max: Fract,
    pub step: Fract,
}

#[repr(C)]
#[derive(Copy, Clone)]
pub union FrmIvalUnion {
    pub discrete: Fract,
    pub stepwise: FrmIvalStepwise,
}

impl Default for FrmIvalUnion {
    fn default() -> Self {
        FrmIvalUnion {
            stepwise: FrmIvalStepwise::default(),
        }
    }
}

#[repr(C)]
#[derive(Default, Copy, Clone)]
pub struct FrmIvalEnum {
    pub index: u32,
    pub pixel_format: u32,
    pub width: u32,
    pub height: u32,
    pub typ: u32,
    pub u: FrmIvalUnion,
    pub reserved: [u32; 2],
}

#[repr(C)]
#[derive(Default, Copy, Clone)]
pub struct CreateBuffers {
    pub index: u32,
    pub count: u32,
    pub memory: u32,
    pub format: Format,
    pub reserved: [u32; 8],
}

#[repr(C)]
#[derive(Default, Copy, Clone)]
pub struct CreateBuffersCompat {
    pub index: u32,
    pub count: u32,
    pub memory: u32,
    pub format: FormatCompat,
    pub reserved: [u32; 8],
}

impl HasCompat for CreateBuffers {
    type Compat = CreateBuffersCompat;

    fn from_compat(c: CreateBuffersCompat) -> Self {
        CreateBuffers {
            index: c.index,
            count: c.count,
            memory: c.memory,
            format: Format::from_compat(c.format),
            reserved: c.reserved,
        }
    }
}

macro_rules! impl_from_bytes {
    ($($t:ty),* $(,)?) => {
        $(unsafe impl crate::FromBytes for $t {})*
    };
}

impl_from_bytes!(
    i32,
    u32,
    i64,
    u64,
    Fract,
    Rect,
    Capability,
    FmtDesc,
    PixFormat,
    Format,
    FormatCompat,
    RequestBuffers,
    Buffer,
    BufferCompat,
    Clip,
    ClipCompat,
    Framebuffer,
    FramebufferCompat,
    StreamParm,
    Standard,
    StandardCompat,
    Input,
    InputCompat,
    Control,
    Tuner,
    QueryCtrl,
    CropCap,
    Crop,
    ExtControl,
    ExtControls,
    ExtControlsCompat,
    FrmSizeEnum,
    FrmIvalEnum,
    CreateBuffers,
    CreateBuffersCompat,
);

// Stale-layout guard: sizes and pointer-bearing offsets for both
// personalities. A mismatch here means the mirrors above drifted from the
// kernel ABI and the decoder must not ship.
const _: () = {
    use core::mem::{offset_of, size_of};

    assert!(size_of::<Capability>() == 104);
    assert!(size_of::<FmtDesc>() == 64);
    assert!(size_of::<PixFormat>() == 48);
    assert!(size_of::<PlanePixFormat>() == 20);
    assert!(size_of::<PixFormatMplane>() == 192);
    assert!(size_of::<Window>() == 56);
    assert!(size_of::<WindowCompat>() == 40);
    assert!(size_of::<VbiFormat>() == 44);
    assert!(size_of::<SlicedVbiFormat>() == 112);
    assert!(size_of::<SdrFormat>() == 32);
    assert!(size_of::<MetaFormat>() == 8);

    assert!(size_of::<Format>() == 208);
    assert!(size_of::<FormatCompat>() == 204);
    assert!(offset_of!(Format, fmt) == 8);
    assert!(offset_of!(FormatCompat, fmt) == 4);

    assert!(size_of::<RequestBuffers>() == 20);

    assert!(size_of::<Buffer>() == 88);
    assert!(size_of::<BufferCompat>() == 68);
    assert!(offset_of!(Buffer, timestamp) == 24);
    assert!(offset_of!(Buffer, m) == 64);
    assert!(offset_of!(BufferCompat, timestamp) == 20);
    assert!(offset_of!(BufferCompat, m) == 52);

    assert!(size_of::<Clip>() == 24);
    assert!(size_of::<ClipCompat>() == 20);

    assert!(size_of::<FramebufferFmt>() == 32);
    assert!(size_of::<Framebuffer>() == 48);
    assert!(size_of::<FramebufferCompat>() == 44);
    assert!(offset_of!(Framebuffer, fmt) == 16);
    assert!(offset_of!(FramebufferCompat, fmt) == 12);

    assert!(size_of::<StreamParm>() == 204);

    assert!(size_of::<Standard>() == 72);
    assert!(size_of::<StandardCompat>() == 64);
    assert!(offset_of!(Standard, id) == 8);
    assert!(offset_of!(StandardCompat, id) == 4);

    assert!(size_of::<Input>() == 80);
    assert!(size_of::<InputCompat>() == 76);
    assert!(offset_of!(Input, std) == 48);
    assert!(offset_of!(InputCompat, std) == 48);

    assert!(size_of::<Control>() == 8);
    assert!(size_of::<Tuner>() == 84);
    assert!(size_of::<QueryCtrl>() == 68);
    assert!(size_of::<CropCap>() == 44);
    assert!(size_of::<Crop>() == 20);

    assert!(size_of::<ExtControl>() == 20);
    assert!(size_of::<ExtControls>() == 32);
    assert!(size_of::<ExtControlsCompat>() == 24);
    assert!(offset_of!(ExtControls, controls) == 24);
    assert!(offset_of!(ExtControlsCompat, controls) == 20);

    assert!(size_of::<FrmSizeEnum>() == 44);
    assert!(size_of::<FrmIvalEnum>() == 52);

    assert!(size_of::<CreateBuffers>() == 256);
    assert!(size_of::<CreateBuffersCompat>() == 248);
    assert!(offset_of!(CreateBuffers, format) == 16);
    assert!(offset_of!(CreateBuffersCompat, format) == 12);
};
