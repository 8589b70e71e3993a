// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

//! Name tables for the V4L2 constants the decoder renders symbolically.
//!
//! Every table is sorted ascending by value; `Xlat::lookup_le` depends on
//! it for the control-class decomposition.

use crate::xlat::Xlat;

pub static BUF_TYPES: Xlat = Xlat::new(&[
    (1, "V4L2_BUF_TYPE_VIDEO_CAPTURE"),
    (2, "V4L2_BUF_TYPE_VIDEO_OUTPUT"),
    (3, "V4L2_BUF_TYPE_VIDEO_OVERLAY"),
    (4, "V4L2_BUF_TYPE_VBI_CAPTURE"),
    (5, "V4L2_BUF_TYPE_VBI_OUTPUT"),
    (6, "V4L2_BUF_TYPE_SLICED_VBI_CAPTURE"),
    (7, "V4L2_BUF_TYPE_SLICED_VBI_OUTPUT"),
    (8, "V4L2_BUF_TYPE_VIDEO_OUTPUT_OVERLAY"),
    (9, "V4L2_BUF_TYPE_VIDEO_CAPTURE_MPLANE"),
    (10, "V4L2_BUF_TYPE_VIDEO_OUTPUT_MPLANE"),
    (11, "V4L2_BUF_TYPE_SDR_CAPTURE"),
    (12, "V4L2_BUF_TYPE_SDR_OUTPUT"),
    (13, "V4L2_BUF_TYPE_META_CAPTURE"),
    (14, "V4L2_BUF_TYPE_META_OUTPUT"),
]);

pub static FIELDS: Xlat = Xlat::new(&[
    (0, "V4L2_FIELD_ANY"),
    (1, "V4L2_FIELD_NONE"),
    (2, "V4L2_FIELD_TOP"),
    (3, "V4L2_FIELD_BOTTOM"),
    (4, "V4L2_FIELD_INTERLACED"),
    (5, "V4L2_FIELD_SEQ_TB"),
    (6, "V4L2_FIELD_SEQ_BT"),
    (7, "V4L2_FIELD_ALTERNATE"),
    (8, "V4L2_FIELD_INTERLACED_TB"),
    (9, "V4L2_FIELD_INTERLACED_BT"),
]);

pub static COLORSPACES: Xlat = Xlat::new(&[
    (0, "V4L2_COLORSPACE_DEFAULT"),
    (1, "V4L2_COLORSPACE_SMPTE170M"),
    (2, "V4L2_COLORSPACE_SMPTE240M"),
    (3, "V4L2_COLORSPACE_REC709"),
    (4, "V4L2_COLORSPACE_BT878"),
    (5, "V4L2_COLORSPACE_470_SYSTEM_M"),
    (6, "V4L2_COLORSPACE_470_SYSTEM_BG"),
    (7, "V4L2_COLORSPACE_JPEG"),
    (8, "V4L2_COLORSPACE_SRGB"),
    (9, "V4L2_COLORSPACE_OPRGB"),
    (10, "V4L2_COLORSPACE_BT2020"),
    (11, "V4L2_COLORSPACE_RAW"),
    (12, "V4L2_COLORSPACE_DCI_P3"),
]);

pub static MEMORIES: Xlat = Xlat::new(&[
    (1, "V4L2_MEMORY_MMAP"),
    (2, "V4L2_MEMORY_USERPTR"),
    (3, "V4L2_MEMORY_OVERLAY"),
    (4, "V4L2_MEMORY_DMABUF"),
]);

pub static DEVICE_CAPS: Xlat = Xlat::new(&[
    (0x0000_0001, "V4L2_CAP_VIDEO_CAPTURE"),
    (0x0000_0002, "V4L2_CAP_VIDEO_OUTPUT"),
    (0x0000_0004, "V4L2_CAP_VIDEO_OVERLAY"),
    (0x0000_0010, "V4L2_CAP_VBI_CAPTURE"),
    (0x0000_0020, "V4L2_CAP_VBI_OUTPUT"),
    (0x0000_0040, "V4L2_CAP_SLICED_VBI_CAPTURE"),
    (0x0000_0080, "V4L2_CAP_SLICED_VBI_OUTPUT"),
    (0x0000_0100, "V4L2_CAP_RDS_CAPTURE"),
    (0x0000_0200, "V4L2_CAP_VIDEO_OUTPUT_OVERLAY"),
    (0x0000_0400, "V4L2_CAP_HW_FREQ_SEEK"),
    (0x0000_0800, "V4L2_CAP_RDS_OUTPUT"),
    (0x0000_1000, "V4L2_CAP_VIDEO_CAPTURE_MPLANE"),
    (0x0000_2000, "V4L2_CAP_VIDEO_OUTPUT_MPLANE"),
    (0x0000_4000, "V4L2_CAP_VIDEO_M2M_MPLANE"),
    (0x0000_8000, "V4L2_CAP_VIDEO_M2M"),
    (0x0001_0000, "V4L2_CAP_TUNER"),
    (0x0002_0000, "V4L2_CAP_AUDIO"),
    (0x0004_0000, "V4L2_CAP_RADIO"),
    (0x0008_0000, "V4L2_CAP_MODULATOR"),
    (0x0010_0000, "V4L2_CAP_SDR_CAPTURE"),
    (0x0020_0000, "V4L2_CAP_EXT_PIX_FORMAT"),
    (0x0040_0000, "V4L2_CAP_SDR_OUTPUT"),
    (0x0080_0000, "V4L2_CAP_META_CAPTURE"),
    (0x0100_0000, "V4L2_CAP_READWRITE"),
    (0x0200_0000, "V4L2_CAP_ASYNCIO"),
    (0x0400_0000, "V4L2_CAP_STREAMING"),
    (0x0800_0000, "V4L2_CAP_META_OUTPUT"),
    (0x1000_0000, "V4L2_CAP_TOUCH"),
    (0x8000_0000, "V4L2_CAP_DEVICE_CAPS"),
]);

pub static FMT_FLAGS: Xlat = Xlat::new(&[
    (0x0001, "V4L2_FMT_FLAG_COMPRESSED"),
    (0x0002, "V4L2_FMT_FLAG_EMULATED"),
    (0x0004, "V4L2_FMT_FLAG_CONTINUOUS_BYTESTREAM"),
    (0x0008, "V4L2_FMT_FLAG_DYN_RESOLUTION"),
]);

/// Buffer flags outside the timestamp subfields; those are decomposed
/// separately through [`BUF_TS_TYPES`] and [`BUF_TS_SRCS`].
pub static BUF_FLAGS: Xlat = Xlat::new(&[
    (0x0000_0001, "V4L2_BUF_FLAG_MAPPED"),
    (0x0000_0002, "V4L2_BUF_FLAG_QUEUED"),
    (0x0000_0004, "V4L2_BUF_FLAG_DONE"),
    (0x0000_0008, "V4L2_BUF_FLAG_KEYFRAME"),
    (0x0000_0010, "V4L2_BUF_FLAG_PFRAME"),
    (0x0000_0020, "V4L2_BUF_FLAG_BFRAME"),
    (0x0000_0040, "V4L2_BUF_FLAG_ERROR"),
    (0x0000_0080, "V4L2_BUF_FLAG_IN_REQUEST"),
    (0x0000_0100, "V4L2_BUF_FLAG_TIMECODE"),
    (0x0000_0200, "V4L2_BUF_FLAG_M2M_HOLD_CAPTURE_BUF"),
    (0x0000_0400, "V4L2_BUF_FLAG_PREPARED"),
    (0x0000_0800, "V4L2_BUF_FLAG_NO_CACHE_INVALIDATE"),
    (0x0000_1000, "V4L2_BUF_FLAG_NO_CACHE_CLEAN"),
    (0x0010_0000, "V4L2_BUF_FLAG_LAST"),
    (0x0080_0000, "V4L2_BUF_FLAG_REQUEST_FD"),
]);

pub static BUF_TS_TYPES: Xlat = Xlat::new(&[
    (0x0000, "V4L2_BUF_FLAG_TIMESTAMP_UNKNOWN"),
    (0x2000, "V4L2_BUF_FLAG_TIMESTAMP_MONOTONIC"),
    (0x4000, "V4L2_BUF_FLAG_TIMESTAMP_COPY"),
]);

pub static BUF_TS_SRCS: Xlat = Xlat::new(&[
    (0x0_0000, "V4L2_BUF_FLAG_TSTAMP_SRC_EOF"),
    (0x1_0000, "V4L2_BUF_FLAG_TSTAMP_SRC_SOE"),
]);

pub static INPUT_TYPES: Xlat = Xlat::new(&[
    (1, "V4L2_INPUT_TYPE_TUNER"),
    (2, "V4L2_INPUT_TYPE_CAMERA"),
    (3, "V4L2_INPUT_TYPE_TOUCH"),
]);

pub static TUNER_TYPES: Xlat = Xlat::new(&[
    (1, "V4L2_TUNER_RADIO"),
    (2, "V4L2_TUNER_ANALOG_TV"),
    (3, "V4L2_TUNER_DIGITAL_TV"),
    (4, "V4L2_TUNER_SDR"),
    (5, "V4L2_TUNER_RF"),
]);

pub static TUNER_CAPS: Xlat = Xlat::new(&[
    (0x0001, "V4L2_TUNER_CAP_LOW"),
    (0x0002, "V4L2_TUNER_CAP_NORM"),
    (0x0004, "V4L2_TUNER_CAP_HWSEEK_BOUNDED"),
    (0x0008, "V4L2_TUNER_CAP_HWSEEK_WRAP"),
    (0x0010, "V4L2_TUNER_CAP_STEREO"),
    (0x0020, "V4L2_TUNER_CAP_LANG2"),
    (0x0040, "V4L2_TUNER_CAP_LANG1"),
    (0x0080, "V4L2_TUNER_CAP_RDS"),
    (0x0100, "V4L2_TUNER_CAP_RDS_BLOCK_IO"),
    (0x0200, "V4L2_TUNER_CAP_RDS_CONTROLS"),
    (0x0400, "V4L2_TUNER_CAP_FREQ_BANDS"),
    (0x0800, "V4L2_TUNER_CAP_HWSEEK_PROG_LIM"),
    (0x1000, "V4L2_TUNER_CAP_1HZ"),
]);

pub static TUNER_RXSUBCHANS: Xlat = Xlat::new(&[
    (0x01, "V4L2_TUNER_SUB_MONO"),
    (0x02, "V4L2_TUNER_SUB_STEREO"),
    (0x04, "V4L2_TUNER_SUB_LANG2"),
    (0x08, "V4L2_TUNER_SUB_LANG1"),
    (0x10, "V4L2_TUNER_SUB_RDS"),
]);

pub static TUNER_AUDMODES: Xlat = Xlat::new(&[
    (0, "V4L2_TUNER_MODE_MONO"),
    (1, "V4L2_TUNER_MODE_STEREO"),
    (2, "V4L2_TUNER_MODE_LANG2"),
    (3, "V4L2_TUNER_MODE_LANG1"),
    (4, "V4L2_TUNER_MODE_LANG1_LANG2"),
]);

pub static CTRL_TYPES: Xlat = Xlat::new(&[
    (1, "V4L2_CTRL_TYPE_INTEGER"),
    (2, "V4L2_CTRL_TYPE_BOOLEAN"),
    (3, "V4L2_CTRL_TYPE_MENU"),
    (4, "V4L2_CTRL_TYPE_BUTTON"),
    (5, "V4L2_CTRL_TYPE_INTEGER64"),
    (6, "V4L2_CTRL_TYPE_CTRL_CLASS"),
    (7, "V4L2_CTRL_TYPE_STRING"),
    (8, "V4L2_CTRL_TYPE_BITMASK"),
    (9, "V4L2_CTRL_TYPE_INTEGER_MENU"),
]);

pub static CTRL_FLAGS: Xlat = Xlat::new(&[
    (0x0001, "V4L2_CTRL_FLAG_DISABLED"),
    (0x0002, "V4L2_CTRL_FLAG_GRABBED"),
    (0x0004, "V4L2_CTRL_FLAG_READ_ONLY"),
    (0x0008, "V4L2_CTRL_FLAG_UPDATE"),
    (0x0010, "V4L2_CTRL_FLAG_INACTIVE"),
    (0x0020, "V4L2_CTRL_FLAG_SLIDER"),
    (0x0040, "V4L2_CTRL_FLAG_WRITE_ONLY"),
    (0x0080, "V4L2_CTRL_FLAG_VOLATILE"),
    (0x0100, "V4L2_CTRL_FLAG_HAS_PAYLOAD"),
    (0x0200, "V4L2_CTRL_FLAG_EXECUTE_ON_WRITE"),
    (0x0400, "V4L2_CTRL_FLAG_MODIFY_LAYOUT"),
]);

/// Enumeration-position flags a caller may OR into a control id.
pub static CTRL_QUERY_FLAGS: Xlat = Xlat::new(&[
    (0x4000_0000, "V4L2_CTRL_FLAG_NEXT_COMPOUND"),
    (0x8000_0000, "V4L2_CTRL_FLAG_NEXT_CTRL"),
]);

pub static CTRL_CLASSES: Xlat = Xlat::new(&[
    (0x0098_0000, "V4L2_CTRL_CLASS_USER"),
    (0x0099_0000, "V4L2_CTRL_CLASS_CODEC"),
    (0x009a_0000, "V4L2_CTRL_CLASS_CAMERA"),
    (0x009b_0000, "V4L2_CTRL_CLASS_FM_TX"),
    (0x009c_0000, "V4L2_CTRL_CLASS_FLASH"),
    (0x009d_0000, "V4L2_CTRL_CLASS_JPEG"),
    (0x009e_0000, "V4L2_CTRL_CLASS_IMAGE_SOURCE"),
    (0x009f_0000, "V4L2_CTRL_CLASS_IMAGE_PROC"),
    (0x00a0_0000, "V4L2_CTRL_CLASS_DV"),
    (0x00a1_0000, "V4L2_CTRL_CLASS_FM_RX"),
    (0x00a2_0000, "V4L2_CTRL_CLASS_RF_TUNER"),
    (0x00a3_0000, "V4L2_CTRL_CLASS_DETECT"),
]);

pub static CTRL_IDS: Xlat = Xlat::new(&[
    (0x0098_0900, "V4L2_CID_BRIGHTNESS"),
    (0x0098_0901, "V4L2_CID_CONTRAST"),
    (0x0098_0902, "V4L2_CID_SATURATION"),
    (0x0098_0903, "V4L2_CID_HUE"),
    (0x0098_0905, "V4L2_CID_AUDIO_VOLUME"),
    (0x0098_0906, "V4L2_CID_AUDIO_BALANCE"),
    (0x0098_0907, "V4L2_CID_AUDIO_BASS"),
    (0x0098_0908, "V4L2_CID_AUDIO_TREBLE"),
    (0x0098_0909, "V4L2_CID_AUDIO_MUTE"),
    (0x0098_090a, "V4L2_CID_AUDIO_LOUDNESS"),
    (0x0098_090c, "V4L2_CID_BLACK_LEVEL"),
    (0x0098_090d, "V4L2_CID_AUTO_WHITE_BALANCE"),
    (0x0098_090e, "V4L2_CID_DO_WHITE_BALANCE"),
    (0x0098_090f, "V4L2_CID_RED_BALANCE"),
    (0x0098_0910, "V4L2_CID_BLUE_BALANCE"),
    (0x0098_0911, "V4L2_CID_GAMMA"),
    (0x0098_0913, "V4L2_CID_EXPOSURE"),
    (0x0098_0914, "V4L2_CID_AUTOGAIN"),
    (0x0098_0915, "V4L2_CID_GAIN"),
    (0x0098_0916, "V4L2_CID_HFLIP"),
    (0x0098_0917, "V4L2_CID_VFLIP"),
    (0x0098_0918, "V4L2_CID_POWER_LINE_FREQUENCY"),
    (0x0098_0919, "V4L2_CID_HUE_AUTO"),
    (0x0098_091a, "V4L2_CID_WHITE_BALANCE_TEMPERATURE"),
    (0x0098_091b, "V4L2_CID_SHARPNESS"),
    (0x0098_091c, "V4L2_CID_BACKLIGHT_COMPENSATION"),
    (0x009a_0901, "V4L2_CID_EXPOSURE_AUTO"),
    (0x009a_0902, "V4L2_CID_EXPOSURE_ABSOLUTE"),
    (0x009a_0903, "V4L2_CID_EXPOSURE_AUTO_PRIORITY"),
    (0x009a_0904, "V4L2_CID_PAN_RELATIVE"),
    (0x009a_0905, "V4L2_CID_TILT_RELATIVE"),
    (0x009a_0908, "V4L2_CID_PAN_ABSOLUTE"),
    (0x009a_0909, "V4L2_CID_TILT_ABSOLUTE"),
    (0x009a_090a, "V4L2_CID_FOCUS_ABSOLUTE"),
    (0x009a_090b, "V4L2_CID_FOCUS_RELATIVE"),
    (0x009a_090c, "V4L2_CID_FOCUS_AUTO"),
    (0x009a_090d, "V4L2_CID_ZOOM_ABSOLUTE"),
    (0x009a_090e, "V4L2_CID_ZOOM_RELATIVE"),
    (0x009a_090f, "V4L2_CID_ZOOM_CONTINUOUS"),
]);

pub static PIX_FMTS: Xlat = Xlat::new(&[
    (0x2036_3159, "V4L2_PIX_FMT_Y16"),
    (0x3132_564e, "V4L2_PIX_FMT_NV21"),
    (0x3231_5559, "V4L2_PIX_FMT_YUV420"),
    (0x3231_564e, "V4L2_PIX_FMT_NV12"),
    (0x3231_5659, "V4L2_PIX_FMT_YVU420"),
    (0x3342_4752, "V4L2_PIX_FMT_RGB24"),
    (0x3352_4742, "V4L2_PIX_FMT_BGR24"),
    (0x3436_3248, "V4L2_PIX_FMT_H264"),
    (0x4745_504a, "V4L2_PIX_FMT_JPEG"),
    (0x4750_4a4d, "V4L2_PIX_FMT_MJPEG"),
    (0x5042_4752, "V4L2_PIX_FMT_RGB565"),
    (0x5659_5559, "V4L2_PIX_FMT_YUYV"),
    (0x5945_5247, "V4L2_PIX_FMT_GREY"),
    (0x5956_5955, "V4L2_PIX_FMT_UYVY"),
]);

pub static SDR_FMTS: Xlat = Xlat::new(&[
    (0x3231_5552, "V4L2_SDR_FMT_RU12LE"),
    (0x3431_5343, "V4L2_SDR_FMT_CS14LE"),
    (0x3631_5543, "V4L2_SDR_FMT_CU16LE"),
    (0x3830_5343, "V4L2_SDR_FMT_CS8"),
    (0x3830_5543, "V4L2_SDR_FMT_CU8"),
]);

pub static STREAM_PARM_CAPS: Xlat = Xlat::new(&[(0x1000, "V4L2_CAP_TIMEPERFRAME")]);

pub static CAPTURE_MODES: Xlat = Xlat::new(&[(0x0001, "V4L2_MODE_HIGHQUALITY")]);

pub static VBI_FLAGS: Xlat = Xlat::new(&[
    (0x0001, "V4L2_VBI_UNSYNC"),
    (0x0002, "V4L2_VBI_INTERLACED"),
]);

pub static SLICED_SERVICES: Xlat = Xlat::new(&[
    (0x0001, "V4L2_SLICED_TELETEXT_B"),
    (0x0400, "V4L2_SLICED_VPS"),
    (0x1000, "V4L2_SLICED_CAPTION_525"),
    (0x4000, "V4L2_SLICED_WSS_625"),
]);

pub static FRMSIZE_TYPES: Xlat = Xlat::new(&[
    (1, "V4L2_FRMSIZE_TYPE_DISCRETE"),
    (2, "V4L2_FRMSIZE_TYPE_CONTINUOUS"),
    (3, "V4L2_FRMSIZE_TYPE_STEPWISE"),
]);

pub static FRMIVAL_TYPES: Xlat = Xlat::new(&[
    (1, "V4L2_FRMIVAL_TYPE_DISCRETE"),
    (2, "V4L2_FRMIVAL_TYPE_CONTINUOUS"),
    (3, "V4L2_FRMIVAL_TYPE_STEPWISE"),
]);
