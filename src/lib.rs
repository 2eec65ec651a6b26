//! Reed-Solomon forward error correction over runtime-chosen GF(2^m)
//! fields, built for physical-layer line simulation.
//!
//! The crate offers two complementary encoders and decoders:
//!
//! - [`codec::RsCodec`], a block codec for a fixed (n, k) code. It frames
//!   codewords either systematically (message followed by division parity,
//!   decoded via syndromes) or by polynomial evaluation (decoded with the
//!   Berlekamp-Welch linear-system algorithm). See [`codec::Framing`].
//! - [`register::ShiftRegisterEncoder`], a symbol-at-a-time systematic
//!   encoder exposing its LFSR parity register, producing the same
//!   codewords as the block encoder.
//!
//! ```
//! use phyfec::codec::{Framing, RsCodec};
//!
//! let codec = RsCodec::new(7, 3, 8)?;
//! let mut codeword = codec.encode(&[1, 2, 3], Framing::Systematic)?;
//! assert_eq!(codeword, vec![1, 2, 3, 7, 6, 4, 5]);
//!
//! codeword[2] ^= 4; // one symbol damaged in transit
//! let outcome = codec.decode(&codeword, Framing::Systematic, false)?;
//! assert_eq!(outcome.message, vec![1, 2, 3]);
//! assert_eq!(outcome.corrected, 1);
//! # Ok::<(), phyfec::CodecError>(())
//! ```
//!
//! An uncorrectable word is not an `Err`: decoding reports it through
//! [`codec::DecodeOutcome::success`], since losing a frame is part of normal
//! operation for a noisy line. `CodecError` covers misuse of the API
//! (impossible code parameters, over-long inputs) instead.

pub mod codec;
pub mod galois;
pub mod polynomial;
pub mod register;
pub mod text;

pub use codec::{DecodeOutcome, Framing, RsCodec};
pub use galois::FieldError;
pub use register::ShiftRegisterEncoder;

use thiserror::Error;

/// API misuse and construction failures.
///
/// Note that a codeword with too many symbol errors is *not* an error here;
/// see [`codec::DecodeOutcome`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// Encoding needs at least one symbol.
    #[error("cannot encode an empty message")]
    EmptyInput,
    /// The input does not fit the code's dimensions.
    #[error("input of {len} symbols is outside the valid range {min}..={max}")]
    Length { len: usize, min: usize, max: usize },
    /// A shift-register encoder emitted all n symbols and was not cleared.
    #[error("shift register encoder already emitted all {capacity} symbols")]
    EncoderExhausted { capacity: usize },
    /// The (n, k, field) triple does not describe a Reed-Solomon code.
    #[error("no RS code with n = {n}, k = {k} exists over GF({order}); need 0 < k < n < order")]
    InvalidParameters { n: usize, k: usize, order: u32 },
    /// A generator polynomial of the wrong degree for the code.
    #[error("generator has degree {found}, the code needs degree {expected}")]
    GeneratorDegree { expected: usize, found: usize },
    /// The underlying field could not be constructed.
    #[error(transparent)]
    Field(#[from] FieldError),
}
