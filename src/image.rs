//! Zero-copy conversion from a device-native frame to a dense strided view.

use crate::traits::{CompletionStatus, RawFrame};

/// Caller-facing view over a frame's backing memory.
///
/// Rows and columns include the device padding so the dimensions describe the
/// full allocation; the stride comes verbatim from the frame. The view borrows
/// the frame's memory (no pixel data is copied) and therefore cannot outlive
/// the frame handle whose drop releases the underlying buffer slot.
#[derive(Debug)]
pub struct DenseImage<'a> {
    rows: u32,
    cols: u32,
    channels: u32,
    stride: usize,
    data: &'a [u8],
}

impl<'a> DenseImage<'a> {
    /// Total rows, vertical padding included.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Total columns, horizontal padding included.
    #[must_use]
    pub const fn cols(&self) -> u32 {
        self.cols
    }

    /// Channels per pixel.
    #[must_use]
    pub const fn channels(&self) -> u32 {
        self.channels
    }

    /// Bytes per row, exactly as the device reported it. Padding can make
    /// this larger than `cols * channels`.
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Borrow the backing memory.
    #[must_use]
    pub const fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Borrow one full row (stride bytes), or `None` past the last row.
    #[must_use]
    pub fn row(&self, index: u32) -> Option<&'a [u8]> {
        if index >= self.rows {
            return None;
        }
        let start = index as usize * self.stride;
        self.data.get(start..start + self.stride)
    }
}

/// Map a completed frame into a [`DenseImage`] without copying pixel data.
///
/// The acquisition loop filters incomplete frames before conversion; this
/// only debug-asserts that contract, it performs no other validation.
pub fn to_dense_image<F: RawFrame>(frame: &F) -> DenseImage<'_> {
    debug_assert!(
        matches!(frame.status(), CompletionStatus::Complete),
        "converted frame must be complete"
    );
    DenseImage {
        rows: frame.height() + frame.y_padding(),
        cols: frame.width() + frame.x_padding(),
        channels: frame.channels(),
        stride: frame.stride(),
        data: frame.data(),
    }
}
