//! Incremental systematic encoding through a linear feedback shift register.
//!
//! This is the hardware view of the division the block encoder performs in
//! one go: a register of t = n - k parity cells is updated once per message
//! symbol, and after the last message symbol the register content is shifted
//! out as the parity tail. Driving the encoder with the message followed by
//! t `None` flush steps therefore yields, symbol by symbol, exactly the
//! systematic codeword of [`RsCodec::encode`](crate::codec::RsCodec::encode).
//!
//! The register state is deliberately observable (see
//! [`parity_register`](ShiftRegisterEncoder::parity_register)) so a UI or a
//! trace can show the circuit working.

use crate::galois::Field;
use crate::CodecError;

/// A stateful symbol-at-a-time systematic Reed-Solomon encoder.
#[derive(Debug, Clone)]
pub struct ShiftRegisterEncoder {
    field: Field,
    n: usize,
    k: usize,
    /// Generator coefficients, lowest power first, degree n - k.
    generator: Vec<u16>,
    /// Parity cells; index equals the power of the remainder coefficient.
    parity: Vec<u16>,
    /// Symbols emitted so far, message and flush steps combined.
    position: usize,
}

impl ShiftRegisterEncoder {
    /// Build an encoder for an (n, k) code with the given generator
    /// polynomial (lowest power first).
    pub fn new(n: usize, k: usize, field: Field, generator: &[u16]) -> Result<Self, CodecError> {
        if k == 0 || k >= n || n as u32 >= field.order() {
            return Err(CodecError::InvalidParameters { n, k, order: field.order() });
        }
        let t = n - k;
        let found = generator.iter().rposition(|&c| c != 0).unwrap_or(0);
        if found != t {
            return Err(CodecError::GeneratorDegree { expected: t, found });
        }
        Ok(ShiftRegisterEncoder {
            field,
            n,
            k,
            generator: generator.to_vec(),
            parity: vec![0; t],
            position: 0,
        })
    }

    /// Advance the register by one step and return the symbol to transmit.
    ///
    /// Pass `Some(symbol)` for each message symbol, then `None` for each of
    /// the `parity_len` flush steps. Fewer message symbols produce the
    /// shortened codeword for that prefix. Once n symbols have been emitted
    /// the encoder is exhausted and must be [`clear`](Self::clear)ed.
    pub fn encode_next_symbol(&mut self, symbol: Option<u16>) -> Result<u16, CodecError> {
        if self.position >= self.n {
            return Err(CodecError::EncoderExhausted { capacity: self.n });
        }
        let t = self.n - self.k;
        let out = match symbol {
            None => {
                // flush: emit the top cell and shift a zero in at the bottom
                let out = self.parity[t - 1];
                self.parity.rotate_right(1);
                self.parity[0] = 0;
                out
            }
            Some(m) => {
                let feedback = (self.field.element(m) + self.field.element(self.parity[t - 1]))
                    * self.field.element(self.generator[t]);
                for j in (1..t).rev() {
                    let next = self.field.element(self.parity[j - 1])
                        + feedback * self.field.element(self.generator[j]);
                    self.parity[j] = next.value();
                }
                self.parity[0] = (feedback * self.field.element(self.generator[0])).value();
                if self.position < self.k {
                    m
                } else {
                    self.parity[t - 1]
                }
            }
        };
        self.position += 1;
        Ok(out)
    }

    /// Reset to the initial state so a new codeword can be encoded.
    pub fn clear(&mut self) {
        self.parity.iter_mut().for_each(|p| *p = 0);
        self.position = 0;
    }

    /// Current parity cells, lowest power first.
    pub fn parity_register(&self) -> &[u16] {
        &self.parity
    }

    /// Symbols emitted since construction or the last [`clear`](Self::clear).
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn generator(&self) -> &[u16] {
        &self.generator
    }

    pub fn is_exhausted(&self) -> bool {
        self.position >= self.n
    }
}
