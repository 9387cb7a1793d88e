//! Slicing-by-N CRC-32 step engine
//!
//! The engine advances a 32-bit running CRC by up to 16 bytes per step
//! using a precomputed [`CrcTables`] set. Each step is a pure function of
//! the state entering the step and that step's input, committed atomically
//! before the next step; work per step is bounded by the slice length, not
//! the frame length.

use crate::error::{Error, Result};
use crate::mask;
use crate::tables::CrcTables;
use crate::{CRC_WIDTH_BYTES, MAX_SLICE_LENGTH};

/// Immutable per-instance engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrcConfig {
    /// Bytes consumable per step (1..=16)
    pub slice_length: usize,
    /// Value loaded into the accumulator on reset
    pub initial_crc: u32,
    /// Complement the 32-bit value on output
    pub invert_output: bool,
    /// Visible output lags the accumulator by one step
    pub register_output: bool,
}

impl Default for CrcConfig {
    /// Ethernet/zlib convention with full-width slices and same-step output
    fn default() -> Self {
        Self {
            slice_length: MAX_SLICE_LENGTH,
            initial_crc: 0xFFFF_FFFF,
            invert_output: true,
            register_output: false,
        }
    }
}

impl CrcConfig {
    /// Validate the configuration
    #[inline]
    pub const fn validate(&self) -> Result<()> {
        if self.slice_length == 0 || self.slice_length > MAX_SLICE_LENGTH {
            return Err(Error::InvalidSliceLength);
        }
        Ok(())
    }
}

/// Running CRC-32 computation over a shared table set
///
/// The accumulator holds the pre-inversion running value; a separate
/// visible output register models the combinational (same-step) versus
/// registered (one-step-lag) output selection.
#[derive(Debug, Clone)]
pub struct SlicingCrc<'t> {
    tables: &'t CrcTables,
    config: CrcConfig,
    crc: u32,
    out: u32,
}

impl<'t> SlicingCrc<'t> {
    /// Create an engine over the given table set and configuration
    pub fn new(tables: &'t CrcTables, config: CrcConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            tables,
            config,
            crc: config.initial_crc,
            out: config.initial_crc,
        })
    }

    /// The engine's configuration
    #[inline]
    pub const fn config(&self) -> &CrcConfig {
        &self.config
    }

    /// Advance the engine by one step
    ///
    /// `reset` takes precedence: the accumulator reloads `initial_crc` and
    /// the step's data is discarded. Otherwise the contiguous run of set
    /// bits in `keep` (from bit 0, capped at the slice length) selects how
    /// many bytes of `data` are consumed; a zero run leaves the
    /// accumulator unchanged. A non-contiguous `keep` is treated as if
    /// only its low contiguous run were valid.
    ///
    /// Returns the visible output for this step: the post-update
    /// accumulator, or the pre-update value when `register_output` is set,
    /// complemented when `invert_output` is set.
    pub fn step(&mut self, data: &[u8], keep: u16, reset: bool) -> u32 {
        let prev = self.crc;
        let next = if reset {
            self.config.initial_crc
        } else {
            self.advance(data, keep)
        };

        self.crc = next;
        self.out = if self.config.register_output { prev } else { next };
        self.value()
    }

    /// The currently visible output value
    #[inline]
    pub const fn value(&self) -> u32 {
        if self.config.invert_output {
            !self.out
        } else {
            self.out
        }
    }

    /// Reload the accumulator and output register with `initial_crc`
    ///
    /// Equivalent to holding the reset input across a step boundary.
    #[inline]
    pub fn reset(&mut self) {
        self.crc = self.config.initial_crc;
        self.out = self.config.initial_crc;
    }

    /// Compute the next accumulator value for one step's worth of bytes
    fn advance(&self, data: &[u8], keep: u16) -> u32 {
        let mut num_valid = mask::contiguous_count(keep, self.config.slice_length);
        if num_valid > data.len() {
            num_valid = data.len();
        }
        if num_valid == 0 {
            return self.crc;
        }

        let crc = self.crc;
        let mut combined = 0u32;
        for (i, &byte) in data[..num_valid].iter().enumerate() {
            // The low four lookup keys absorb the state register; the byte
            // nearest the front of the slice uses the highest row.
            let key = if i < CRC_WIDTH_BYTES {
                byte ^ (crc >> (8 * i as u32)) as u8
            } else {
                byte
            };
            combined ^= self.tables.lookup(num_valid - i - 1, key);
        }

        // Narrow steps leave high-order state bytes untouched by any lookup
        if num_valid < CRC_WIDTH_BYTES {
            combined ^= crc >> (8 * num_valid as u32);
        }

        combined
    }
}

/// One-shot CRC-32 of a whole buffer under the default configuration
///
/// Feeds the buffer through a full-width engine, one slice per step, with
/// a final partial step for the tail.
pub fn checksum(tables: &CrcTables, data: &[u8]) -> u32 {
    let config = CrcConfig::default();
    let mut engine = SlicingCrc {
        tables,
        config,
        crc: config.initial_crc,
        out: config.initial_crc,
    };

    for chunk in data.chunks(MAX_SLICE_LENGTH) {
        engine.step(chunk, mask::mask_for_count(chunk.len()), false);
    }
    engine.value()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ethernet_engine(slice_length: usize) -> SlicingCrc<'static> {
        let config = CrcConfig {
            slice_length,
            ..CrcConfig::default()
        };
        SlicingCrc::new(&CrcTables::ETHERNET, config).unwrap()
    }

    fn crc_stepped(data: &[u8], slice_length: usize) -> u32 {
        let mut engine = ethernet_engine(slice_length);
        let mut out = engine.value();
        for chunk in data.chunks(slice_length) {
            out = engine.step(chunk, mask::mask_for_count(chunk.len()), false);
        }
        out
    }

    #[test]
    fn test_known_vectors() {
        let t = &CrcTables::ETHERNET;
        assert_eq!(checksum(t, b""), 0x00000000);
        assert_eq!(checksum(t, b"123456789"), 0xCBF43926);
        assert_eq!(checksum(t, &[0x00]), 0xD202EF8D);
        assert_eq!(checksum(t, &[0x00; 4]), 0x2144DF1C);
        assert_eq!(
            checksum(t, &[0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]),
            0x3FCA88C5
        );
    }

    #[test]
    fn test_byte_at_a_time() {
        assert_eq!(crc_stepped(b"123456789", 1), 0xCBF43926);
    }

    #[test]
    fn test_slice_length_equivalence() {
        let data: &[u8] = &[
            0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x08, 0x00,
            0x45, 0x00, 0x00, 0x1C,
        ];
        let reference = crc_stepped(data, 1);
        for slice_length in [2, 3, 4, 5, 7, 8, 13, 16] {
            assert_eq!(crc_stepped(data, slice_length), reference);
        }
    }

    #[test]
    fn test_partial_final_step() {
        // 6 bytes through an 8-wide engine: one partial step
        let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06];
        assert_eq!(crc_stepped(&data, 8), checksum(&CrcTables::ETHERNET, &data));
    }

    #[test]
    fn test_reset_takes_precedence() {
        let mut engine = ethernet_engine(8);
        engine.step(b"garbage!", 0xFF, false);

        // Reset discards the step's data entirely
        let out = engine.step(b"ignored!", 0xFF, true);
        assert_eq!(out, 0x00000000);

        // Accumulation continues as if freshly constructed
        let out = engine.step(&[0x00], 0x01, false);
        assert_eq!(out, 0xD202EF8D);
    }

    #[test]
    fn test_zero_mask_is_noop() {
        let mut engine = ethernet_engine(8);
        engine.step(b"12345678", 0xFF, false);
        let before = engine.value();

        let out = engine.step(b"\xAA\xBB\xCC\xDD\xEE\xFF\x11\x22", 0x00, false);
        assert_eq!(out, before);
        assert_eq!(engine.value(), before);
    }

    #[test]
    fn test_non_contiguous_mask_uses_low_run() {
        // Documented extension: bits past the first clear bit are ignored
        let mut gapped = ethernet_engine(8);
        let mut plain = ethernet_engine(8);

        let out_gapped = gapped.step(b"12345678", 0b0000_1011, false);
        let out_plain = plain.step(b"12", 0b0000_0011, false);
        assert_eq!(out_gapped, out_plain);
    }

    #[test]
    fn test_registered_output_lags_one_step() {
        let config = CrcConfig {
            slice_length: 4,
            register_output: true,
            ..CrcConfig::default()
        };
        let mut registered = SlicingCrc::new(&CrcTables::ETHERNET, config).unwrap();
        let mut combinational = ethernet_engine(4);

        // Fresh registered engine shows the initial value
        assert_eq!(registered.value(), !0xFFFF_FFFFu32);

        let same_step = combinational.step(b"\x00\x00\x00\x00", 0x0F, false);
        let lagged = registered.step(b"\x00\x00\x00\x00", 0x0F, false);
        assert_eq!(same_step, 0x2144DF1C);
        assert_eq!(lagged, !0xFFFF_FFFFu32);

        // An idle step drains the lag
        let drained = registered.step(&[], 0x00, false);
        assert_eq!(drained, 0x2144DF1C);
    }

    #[test]
    fn test_invert_output_disabled() {
        let config = CrcConfig {
            slice_length: 8,
            invert_output: false,
            ..CrcConfig::default()
        };
        let mut engine = SlicingCrc::new(&CrcTables::ETHERNET, config).unwrap();
        engine.step(&b"123456789"[..8], 0xFF, false);
        engine.step(&b"123456789"[8..], 0x01, false);
        assert_eq!(!engine.value(), 0xCBF43926);
    }

    #[test]
    fn test_invalid_slice_length() {
        let zero = CrcConfig {
            slice_length: 0,
            ..CrcConfig::default()
        };
        assert_eq!(
            SlicingCrc::new(&CrcTables::ETHERNET, zero).unwrap_err(),
            Error::InvalidSliceLength
        );

        let wide = CrcConfig {
            slice_length: MAX_SLICE_LENGTH + 1,
            ..CrcConfig::default()
        };
        assert_eq!(
            SlicingCrc::new(&CrcTables::ETHERNET, wide).unwrap_err(),
            Error::InvalidSliceLength
        );
    }

    #[test]
    fn test_shared_tables_independent_engines() {
        let tables = &CrcTables::ETHERNET;
        let mut a = SlicingCrc::new(tables, CrcConfig::default()).unwrap();
        let mut b = SlicingCrc::new(tables, CrcConfig::default()).unwrap();

        a.step(b"123456789", 0x01FF, false);
        assert_eq!(a.value(), 0xCBF43926);
        assert_eq!(b.value(), !0xFFFF_FFFFu32);

        b.step(&[0x00], 0x0001, false);
        assert_eq!(b.value(), 0xD202EF8D);
        assert_eq!(a.value(), 0xCBF43926);
    }
}
