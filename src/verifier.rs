//! Frame-boundary controller driving a CRC engine over a beat stream
//!
//! The verifier forwards every beat unchanged on the same step it arrives,
//! feeds the beat's valid bytes into its CRC engine, and on the
//! end-of-frame beat compares the running value against the expected check
//! value, reporting pass/fail aligned with that same beat.

use crate::beat::{Beat, VerifiedBeat};
use crate::engine::{CrcConfig, SlicingCrc};
use crate::error::Result;
use crate::mask;
use crate::tables::CrcTables;

/// Controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifierState {
    /// No frame in progress; the CRC engine is held in reset
    Idle,
    /// A frame is in progress; the CRC engine is accumulating
    Receiving,
}

/// Streaming frame verifier over a shared table set
///
/// Owns one [`SlicingCrc`] engine configured for same-step (combinational)
/// output, so the comparison result is available on the end-of-frame beat
/// itself. Multiple verifiers may share one table set; each is an
/// independent state machine.
#[derive(Debug, Clone)]
pub struct FrameVerifier<'t> {
    engine: SlicingCrc<'t>,
    state: VerifierState,
    last_result: bool,
}

impl<'t> FrameVerifier<'t> {
    /// Create a verifier consuming up to `slice_length` bytes per beat
    pub fn new(tables: &'t CrcTables, slice_length: usize) -> Result<Self> {
        // Same-step output is required: there is no slack step between the
        // final accumulation and the comparison.
        let config = CrcConfig {
            slice_length,
            register_output: false,
            ..CrcConfig::default()
        };

        Ok(Self {
            engine: SlicingCrc::new(tables, config)?,
            state: VerifierState::Idle,
            last_result: false,
        })
    }

    /// Current controller state
    #[inline]
    pub const fn state(&self) -> VerifierState {
        self.state
    }

    /// The latched result of the most recently closed frame
    #[inline]
    pub const fn last_result(&self) -> bool {
        self.last_result
    }

    /// Bytes consumable per beat
    #[inline]
    pub const fn slice_length(&self) -> usize {
        self.engine.config().slice_length
    }

    /// Advance the verifier by one step
    ///
    /// The input beat is forwarded with zero added latency. On an active
    /// `last` beat the returned `pass` flag carries the frame's status:
    /// true only when a check value is present and equals the CRC computed
    /// over the frame's payload. A `last` marker on an inactive beat is
    /// ignored; a frame can only close on an active beat.
    pub fn step<'b>(&mut self, beat: Beat<'b>) -> VerifiedBeat<'b> {
        if !beat.valid {
            return match self.state {
                VerifierState::Idle => {
                    // No frame starting this step: hold the engine in reset
                    self.engine.step(&[], 0, true);
                    VerifiedBeat::idle()
                }
                // Mid-frame stall: forward the inactive beat, hold the CRC
                VerifierState::Receiving => VerifiedBeat::forward(&beat, false),
            };
        }

        // Active beat. The first beat of a frame must be accumulated, so
        // the engine is never reset here.
        let crc = self.engine.step(beat.data, beat.keep, false);

        if beat.last {
            let pass = match beat.check {
                Some(expected) => crc == expected,
                None => false,
            };
            self.last_result = pass;

            // Reload the engine inside the closing step so a new frame may
            // start on the very next beat with no idle gap.
            self.engine.reset();
            self.state = VerifierState::Idle;
            VerifiedBeat::forward(&beat, pass)
        } else {
            self.state = VerifierState::Receiving;
            VerifiedBeat::forward(&beat, false)
        }
    }

    /// Drive a whole frame through the verifier and return its status
    ///
    /// The payload is consumed in `slice_length`-sized beats with a
    /// partial closing beat for the tail. Leaves the verifier idle and
    /// ready for the next frame.
    pub fn verify_frame(&mut self, payload: &[u8], check: Option<u32>) -> bool {
        let slice_length = self.slice_length();

        if payload.is_empty() {
            return self.step(Beat::trailer(&[], check)).pass;
        }

        let mut offset = 0;
        let mut pass = false;
        while offset < payload.len() {
            let end = core::cmp::min(offset + slice_length, payload.len());
            let chunk = &payload[offset..end];
            let beat = if end == payload.len() {
                Beat::trailer(chunk, check)
            } else {
                Beat::payload(chunk)
            };
            pass = self.step(beat).pass;
            offset = end;
        }
        pass
    }
}

/// Split a payload into per-beat (chunk, keep) pairs for a given width
///
/// Convenience for callers assembling beats by hand; the final chunk may
/// be partial, with a matching keep mask.
pub fn beats_of(payload: &[u8], slice_length: usize) -> impl Iterator<Item = (&[u8], u16)> {
    payload
        .chunks(slice_length.clamp(1, crate::MAX_SLICE_LENGTH))
        .map(|chunk| (chunk, mask::mask_for_count(chunk.len())))
}
