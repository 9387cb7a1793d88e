//! SliceCRC: streaming CRC-32 frame integrity verification
//!
//! This crate provides a step-driven, allocation-free CRC-32 engine that
//! consumes a configurable number of bytes per step (slicing-by-N), and a
//! small frame verifier that checks a beat stream against a trailing check
//! value while forwarding the payload unmodified.
//!
//! # Stream Model
//!
//! ```text
//!            +----------------------------------------------+
//!  beat in   |  FrameVerifier                               |  beat out
//! ---------->|   IDLE <-> RECEIVING                         |---------->
//!  data/keep |      |                                       |  data/keep
//!  valid     |      v                                       |  valid
//!  last      |   SlicingCrc <---- &CrcTables (16 x 256)     |  last
//!  check     |   (N bytes per step, same-step output)       |  pass/fail
//!            +----------------------------------------------+
//! ```
//!
//! Each step the verifier forwards the incoming beat as-is, feeds its valid
//! bytes into the CRC engine, and on the end-of-frame beat compares the
//! running value against the expected check value, reporting pass/fail on
//! that same step.
//!
//! # Features
//!
//! - Exact-arithmetic slicing-by-N CRC-32, 1 to 16 bytes per step
//! - Externally loadable table sets; standard Ethernet set built in
//! - Combinational (same-step) or registered (one-step-lag) output
//! - Zero added latency on the payload pass-through path
//! - `no_std` support, no allocation, no unsafe code
//!
//! # Example
//!
//! ```rust
//! use slicecrc::*;
//!
//! let expected = checksum(&CrcTables::ETHERNET, b"123456789");
//! assert_eq!(expected, 0xCBF43926);
//!
//! let mut verifier = FrameVerifier::new(&CrcTables::ETHERNET, 8)?;
//! assert!(verifier.verify_frame(b"123456789", Some(expected)));
//! assert!(!verifier.verify_frame(b"123456789", Some(expected ^ 1)));
//! # Ok::<(), slicecrc::Error>(())
//! ```

#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

pub mod beat;
pub mod engine;
pub mod error;
pub mod mask;
pub mod tables;
pub mod verifier;

// Re-export main types
pub use beat::{Beat, VerifiedBeat};
pub use engine::{checksum, CrcConfig, SlicingCrc};
pub use error::Error;
pub use tables::CrcTables;
pub use verifier::{beats_of, FrameVerifier, VerifierState};

/// Maximum number of bytes an engine may consume per step
pub const MAX_SLICE_LENGTH: usize = 16;

/// Width of the CRC state register in bytes
pub const CRC_WIDTH_BYTES: usize = 4;
