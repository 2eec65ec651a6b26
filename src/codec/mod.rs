//! The Reed-Solomon block codec: length framing, generator handling and
//! dispatch to the two decoding strategies.
//!
//! A codec is parameterized by the codeword length n, the message length k
//! and a field GF(q) with k < n < q. It supports two framings:
//!
//! - **Systematic**: the message symbols are emitted unchanged, followed by
//!   t = n - k parity symbols obtained by polynomial division with the
//!   generator g(x) = prod (x - x^j) for j = 0..t. Decoding is syndrome
//!   based ([`syndrome`]).
//! - **Evaluation**: the message is interpreted as values of a polynomial at
//!   the first k powers of the primitive element and the codeword as its
//!   values at all n of them. Decoding solves a linear system per the
//!   Berlekamp-Welch algorithm ([`berlekamp_welch`]), no syndromes involved.
//!
//! Both framings transport messages shorter than k through the same fixed
//! (n, k) code. Systematic framing simply stops the division early, which is
//! the textbook shortened code. Evaluation framing left-pads the message with
//! a fixed sentinel symbol up to full width; the leading codeword symbols
//! then equal that sentinel prefix and are dropped from the output, and the
//! decoder re-expands before solving.
//!
//! Decoding failure is an expected FEC outcome, not an error: it is reported
//! through [`DecodeOutcome`] with `corrected == -1` and `success == false`.

pub(crate) mod berlekamp_welch;
pub(crate) mod syndrome;

use log::debug;

use crate::galois::{Field, GF};
use crate::polynomial::Polynomial;
use crate::register::ShiftRegisterEncoder;
use crate::CodecError;

/// How message symbols are framed into a codeword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framing {
    /// Message prefix plus division parity; decoded via syndromes.
    Systematic,
    /// Polynomial evaluation at the primitive powers; decoded via
    /// Berlekamp-Welch.
    Evaluation,
}

/// Result of a decode call.
///
/// `corrected` is the number of repaired symbol errors, or -1 when the
/// codeword was uncorrectable and decoding was abandoned. `success` is false
/// exactly in that case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOutcome {
    pub message: Vec<u16>,
    pub corrected: i32,
    pub success: bool,
}

/// A fixed (n, k) Reed-Solomon code over GF(q).
#[derive(Debug, Clone)]
pub struct RsCodec {
    field: Field,
    n: usize,
    k: usize,
    /// Generator coefficients, lowest power first; always monic of degree
    /// n - k with roots x^0 .. x^(n-k-1).
    generator: Vec<u16>,
}

impl RsCodec {
    /// Build a codec over the default field of the given order.
    pub fn new(n: usize, k: usize, field_order: u32) -> Result<Self, CodecError> {
        Self::with_field(n, k, Field::new(field_order)?)
    }

    /// Build a codec over an explicitly constructed field.
    pub fn with_field(n: usize, k: usize, field: Field) -> Result<Self, CodecError> {
        if k == 0 || k >= n || n as u32 >= field.order() {
            return Err(CodecError::InvalidParameters { n, k, order: field.order() });
        }
        let t = n - k;
        let generator = {
            let mut acc = Polynomial::from_symbols(&field, &[1]);
            for j in 0..t {
                let root = Polynomial::new(vec![field.primitive_power(j), field.one()]);
                acc = &acc * &root;
            }
            acc.coeffs().iter().map(|c| c.value()).collect()
        };
        Ok(RsCodec { field, n, k, generator })
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn codeword_len(&self) -> usize {
        self.n
    }

    pub fn message_len(&self) -> usize {
        self.k
    }

    pub fn parity_len(&self) -> usize {
        self.n - self.k
    }

    /// Largest number of symbol errors the code is guaranteed to repair.
    pub fn max_errors(&self) -> usize {
        self.parity_len() / 2
    }

    /// Generator polynomial coefficients, lowest power first.
    pub fn generator(&self) -> &[u16] {
        &self.generator
    }

    /// A fresh shift-register encoder producing the same codewords as
    /// [`encode`](Self::encode) with systematic framing.
    pub fn shift_encoder(&self) -> ShiftRegisterEncoder {
        ShiftRegisterEncoder::new(self.n, self.k, self.field.clone(), &self.generator)
            .expect("codec parameters always form a valid register encoder, this is a bug")
    }

    /// Encode a message of 1..=k symbols into a codeword of
    /// `message.len() + parity_len()` symbols.
    pub fn encode(&self, message: &[u16], framing: Framing) -> Result<Vec<u16>, CodecError> {
        if message.is_empty() {
            return Err(CodecError::EmptyInput);
        }
        if message.len() > self.k {
            return Err(CodecError::Length { len: message.len(), min: 1, max: self.k });
        }
        match framing {
            Framing::Systematic => Ok(self.encode_systematic(message)),
            Framing::Evaluation => Ok(self.encode_evaluation(message)),
        }
    }

    /// Decode a codeword of `parity_len() + 2 ..= n` symbols.
    ///
    /// `force` only affects the Berlekamp-Welch path: a failed consistency
    /// check is ignored and the correction applied anyway.
    pub fn decode(
        &self,
        codeword: &[u16],
        framing: Framing,
        force: bool,
    ) -> Result<DecodeOutcome, CodecError> {
        let t = self.parity_len();
        if codeword.len() > self.n || codeword.len() <= t + 1 {
            return Err(CodecError::Length { len: codeword.len(), min: t + 2, max: self.n });
        }
        match framing {
            Framing::Systematic => {
                let mut work = codeword.to_vec();
                let corrected = syndrome::decode(&self.field, &mut work, t);
                work.truncate(codeword.len() - t);
                Ok(DecodeOutcome { message: work, corrected, success: corrected >= 0 })
            }
            Framing::Evaluation => {
                let pad_len = self.k - (codeword.len() - t);
                let mut full = vec![self.pad_symbol(); pad_len];
                full.extend_from_slice(codeword);
                debug!(
                    "berlekamp-welch decode of {} symbols, re-expanded to {}",
                    codeword.len(),
                    full.len()
                );
                let outcome = berlekamp_welch::decode(&self.field, &full, self.k, force);
                Ok(DecodeOutcome {
                    message: outcome.message[pad_len..].to_vec(),
                    corrected: outcome.corrected,
                    success: outcome.success,
                })
            }
        }
    }

    /// Division by the generator through the standard shift-register
    /// recurrence; the register ends up holding the parity, highest power in
    /// the last cell.
    fn encode_systematic(&self, message: &[u16]) -> Vec<u16> {
        let t = self.parity_len();
        let mut parity = vec![self.field.zero(); t];
        for &m in message {
            // the generator is monic, so the feedback needs no scaling
            let feedback = self.field.element(m) + parity[t - 1];
            for j in (1..t).rev() {
                let next = parity[j - 1] + feedback * self.field.element(self.generator[j]);
                parity[j] = next;
            }
            parity[0] = feedback * self.field.element(self.generator[0]);
        }
        let mut codeword = message.to_vec();
        codeword.extend(parity.iter().rev().map(|p| p.value()));
        codeword
    }

    fn encode_evaluation(&self, message: &[u16]) -> Vec<u16> {
        let pad_len = self.k - message.len();
        let mut padded = vec![self.pad_symbol(); pad_len];
        padded.extend_from_slice(message);
        let xs: Vec<GF> = (0..self.k).map(|i| self.field.primitive_power(i)).collect();
        let ys: Vec<GF> = padded.iter().map(|&m| self.field.element(m)).collect();
        let poly = Polynomial::interpolate(&xs, &ys);
        // evaluation at the message points reproduces the padded message, so
        // the dropped prefix is exactly the sentinel run
        (pad_len..self.n)
            .map(|i| poly.eval(self.field.primitive_power(i)).value())
            .collect()
    }

    /// Sentinel used to pad short messages in evaluation framing, clamped
    /// into the field for orders below 256.
    fn pad_symbol(&self) -> u16 {
        (self.field.order() - 1).min(0xFF) as u16
    }
}

/// Solve the linear system `mat` * x = `rhs` over GF(q) in place.
///
/// `mat` is row-major with the given row stride and must be square; the
/// solution ends up in `rhs`. Returns false when the matrix is singular.
pub(crate) fn solve<'f>(mat: &mut [GF<'f>], rhs: &mut [GF<'f>], row_stride: usize) -> bool {
    let n = rhs.len();
    let zero = rhs[0].field().zero();
    let c = |i: usize, j: usize| i * row_stride + j;
    for i in 0..n - 1 {
        // pivot on the first non-zero entry of the column
        match (i..n).find(|r| mat[c(*r, i)] != zero) {
            Some(pivot) => {
                if pivot != i {
                    rhs.swap(i, pivot);
                    for j in 0..n {
                        mat.swap(c(i, j), c(pivot, j));
                    }
                }
            }
            None => return false,
        }
        for r in i + 1..n {
            // compute L
            mat[c(r, i)] /= mat[c(i, i)];
            // compute U
            for j in i + 1..n {
                let f = mat[c(r, i)] * mat[c(i, j)];
                mat[c(r, j)] -= f;
            }
        }
    }
    if mat[c(n - 1, n - 1)] == zero {
        return false;
    }

    // solve Lx = rhs
    for i in 0..n {
        for j in 0..i {
            let r = rhs[j];
            rhs[i] -= mat[c(i, j)] * r;
        }
    }
    // solve Ux = rhs
    for i in (0..n).rev() {
        for j in i + 1..n {
            let r = rhs[j];
            rhs[i] -= mat[c(i, j)] * r;
        }
        rhs[i] /= mat[c(i, i)];
    }
    true
}
