//! Per-step beat records for the frame verifier
//!
//! A beat is one discrete step's worth of stream input: a bounded group of
//! payload bytes, their validity mask, the activity and end-of-frame
//! markers, and (on the closing beat) the expected check value.

use crate::mask;

/// One step of verifier input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Beat<'a> {
    /// Payload bytes on the bus this step (up to the engine's slice length)
    pub data: &'a [u8],
    /// Per-byte validity mask, contiguous from bit 0
    pub keep: u16,
    /// Activity flag; an inactive beat carries no bytes
    pub valid: bool,
    /// End-of-frame marker, meaningful only on an active beat
    pub last: bool,
    /// Expected check value for the frame, meaningful only when `last`
    ///
    /// `None` models a check value that is absent or flagged invalid; the
    /// verifier forces such frames to fail.
    pub check: Option<u32>,
}

impl<'a> Beat<'a> {
    /// An inactive beat
    #[inline]
    pub const fn idle() -> Self {
        Self {
            data: &[],
            keep: 0,
            valid: false,
            last: false,
            check: None,
        }
    }

    /// An active mid-frame beat with every byte valid
    #[inline]
    pub const fn payload(data: &'a [u8]) -> Self {
        Self {
            data,
            keep: mask::mask_for_count(data.len()),
            valid: true,
            last: false,
            check: None,
        }
    }

    /// The closing beat of a frame with every byte valid
    #[inline]
    pub const fn trailer(data: &'a [u8], check: Option<u32>) -> Self {
        Self {
            data,
            keep: mask::mask_for_count(data.len()),
            valid: true,
            last: true,
            check,
        }
    }

    /// Replace the keep mask
    #[inline]
    pub const fn with_keep(mut self, keep: u16) -> Self {
        self.keep = keep;
        self
    }
}

/// One step of verifier output: the forwarded beat plus the status flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifiedBeat<'a> {
    /// Forwarded payload bytes
    pub data: &'a [u8],
    /// Forwarded validity mask
    pub keep: u16,
    /// Forwarded activity flag
    pub valid: bool,
    /// Forwarded end-of-frame marker
    pub last: bool,
    /// Frame status, meaningful only when `valid && last`
    pub pass: bool,
}

impl<'a> VerifiedBeat<'a> {
    /// An inactive output beat
    #[inline]
    pub const fn idle() -> Self {
        Self {
            data: &[],
            keep: 0,
            valid: false,
            last: false,
            pass: false,
        }
    }

    /// Forward an input beat unchanged with the given status flag
    #[inline]
    pub(crate) const fn forward(beat: &Beat<'a>, pass: bool) -> Self {
        Self {
            data: beat.data,
            keep: beat.keep,
            valid: beat.valid,
            last: beat.last,
            pass,
        }
    }
}
