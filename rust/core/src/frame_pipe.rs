//! Frame pipe boundary: models the handoff to an external video
//! encoder without implementing one. The reference source shells out to
//! `ffmpeg -f rawvideo -pixel_format rgb24 -video_size WxH -framerate R -i -`
//! over a pipe; that process, the framebuffer read, and the windowing
//! layer are all out of scope.
//!
//! The cyclic `VideoData <-> GlobalBuffer` back-reference the reference
//! source uses to let the frame pipe reach the renderer's shared state has
//! no counterpart here: there is a single owner (whatever drives the
//! render loop) and this trait receives only the non-owning frame bytes it
//! needs, per the single-owner/non-owning-handle resolution in the design
//! notes.

use crate::error::Result;

/// Fixed at construction: frame dimensions and rate never change mid-pipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameFormat {
    pub width: u32,
    pub height: u32,
    pub framerate: u32,
}

impl FrameFormat {
    pub fn new(width: u32, height: u32, framerate: u32) -> Self {
        Self {
            width,
            height,
            framerate,
        }
    }

    /// Byte length of one tightly packed RGB24 frame.
    pub fn frame_bytes(&self) -> usize {
        self.width as usize * self.height as usize * 3
    }
}

/// A destination for rendered frames, pulled from the framebuffer as
/// tightly packed RGB24 (bottom-up by default).
pub trait FramePipe {
    fn format(&self) -> FrameFormat;
    fn write_frame(&mut self, rgb24: &[u8]) -> Result<()>;
    fn finish(self: Box<Self>) -> Result<()>;
}

/// A test double that records how many frames of the right size were
/// written, without spawning any external process.
pub struct NullFramePipe {
    format: FrameFormat,
    frames_written: usize,
}

impl NullFramePipe {
    pub fn new(format: FrameFormat) -> Self {
        Self {
            format,
            frames_written: 0,
        }
    }

    pub fn frames_written(&self) -> usize {
        self.frames_written
    }
}

impl FramePipe for NullFramePipe {
    fn format(&self) -> FrameFormat {
        self.format
    }

    fn write_frame(&mut self, rgb24: &[u8]) -> Result<()> {
        if rgb24.len() != self.format.frame_bytes() {
            return Err(crate::error::Error::FramePipe(format!(
                "frame byte length {} does not match format {}x{} ({} expected)",
                rgb24.len(),
                self.format.width,
                self.format.height,
                self.format.frame_bytes()
            )));
        }
        self.frames_written += 1;
        Ok(())
    }

    fn finish(self: Box<Self>) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_correctly_sized_frames() {
        let format = FrameFormat::new(4, 2, 30);
        let mut pipe = NullFramePipe::new(format);
        let frame = vec![0u8; format.frame_bytes()];
        pipe.write_frame(&frame).unwrap();
        pipe.write_frame(&frame).unwrap();
        assert_eq!(pipe.frames_written(), 2);
    }

    #[test]
    fn rejects_wrong_sized_frame() {
        let format = FrameFormat::new(4, 2, 30);
        let mut pipe = NullFramePipe::new(format);
        assert!(pipe.write_frame(&[0u8; 3]).is_err());
    }
}
