//! Syndrome decoding for systematic codewords, Peterson-Gorenstein-Zierler
//! style.
//!
//! A systematic codeword is divisible by the generator, so it vanishes at
//! the generator roots x^0 .. x^(t-1). Evaluating the received word there
//! yields the syndromes; an all-zero set means no (detectable) errors. For v
//! errors with locators X_p and values e_p the syndromes are
//! S_j = sum e_p * X_p^j, which first yields the error locator polynomial
//! from a v x v Hankel system, then the positions by exhaustive root search
//! over the group, and finally the values from a Vandermonde system.
//! After correcting in place the syndromes are recomputed; a non-zero
//! residue means the error pattern exceeded the code's capacity and the word
//! is left untouched.

use log::{debug, trace};

use super::solve;
use crate::galois::{Field, GF};
use crate::polynomial::Polynomial;

/// Correct `work` in place and return the number of repaired symbols, or -1
/// when the word is uncorrectable.
pub(crate) fn decode(field: &Field, work: &mut [u16], parity_len: usize) -> i32 {
    let syndromes = syndromes_of(field, work, parity_len);
    if syndromes.iter().all(|s| *s == field.zero()) {
        return 0;
    }

    let len = work.len();
    let span = (field.order() - 1) as usize;
    for v in (1..=parity_len / 2).rev() {
        // S_{i+v} = sum_j x_j S_{i+j} with x_j the locator coefficients in
        // reverse; singular means fewer than v errors, so try the next v
        let mut mat = vec![field.zero(); v * v];
        let mut rhs = vec![field.zero(); v];
        for i in 0..v {
            for j in 0..v {
                mat[i * v + j] = syndromes[i + j];
            }
            rhs[i] = syndromes[i + v];
        }
        if !solve(&mut mat, &mut rhs, v) {
            trace!("syndrome decode: no locator with {} errors, trying fewer", v);
            continue;
        }
        debug!("syndrome decode: locator found for {} errors", v);

        let mut locator_coeffs = vec![field.one()];
        locator_coeffs.extend(rhs.iter().rev());
        let locator = Polynomial::new(locator_coeffs);

        // root at x^r puts an error x^((span - r) % span) powers above the
        // lowest codeword position
        let mut positions = Vec::with_capacity(v);
        for r in 0..span {
            if locator.eval(field.primitive_power(r)) == field.zero() {
                let power = (span - r) % span;
                if power >= len {
                    debug!("syndrome decode: error located outside the codeword");
                    return -1;
                }
                positions.push(len - 1 - power);
            }
        }
        if positions.len() != v {
            debug!(
                "syndrome decode: locator of degree {} has {} roots",
                v,
                positions.len()
            );
            return -1;
        }

        // S_j = sum_p e_p * X_p^j gives the error values
        let mut mat = vec![field.zero(); v * v];
        let mut rhs = vec![field.zero(); v];
        for (p, &pos) in positions.iter().enumerate() {
            let x = field.primitive_power(len - 1 - pos);
            for j in 0..v {
                mat[j * v + p] = x.pow(j);
            }
        }
        rhs[..v].copy_from_slice(&syndromes[..v]);
        if !solve(&mut mat, &mut rhs, v) {
            return -1;
        }

        let mut candidate = work.to_vec();
        for (p, &pos) in positions.iter().enumerate() {
            candidate[pos] = (field.element(candidate[pos]) + rhs[p]).value();
        }
        let check = syndromes_of(field, &candidate, parity_len);
        if check.iter().any(|s| *s != field.zero()) {
            debug!("syndrome decode: residual syndromes after correction, giving up");
            return -1;
        }
        work.copy_from_slice(&candidate);
        return v as i32;
    }

    -1
}

/// The received word evaluated at the first `parity_len` powers of the
/// primitive element; the symbol order is highest power first.
fn syndromes_of<'f>(field: &'f Field, word: &[u16], parity_len: usize) -> Vec<GF<'f>> {
    (0..parity_len)
        .map(|j| {
            let x = field.primitive_power(j);
            word.iter()
                .fold(field.zero(), |acc, &w| acc * x + field.element(w))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{Framing, RsCodec};
    use pretty_assertions::assert_eq;

    fn rs_15_9() -> (RsCodec, Vec<u16>) {
        let codec = RsCodec::new(15, 9, 16).unwrap();
        let codeword = codec
            .encode(&[4, 8, 15, 1, 6, 2, 3, 10, 9], Framing::Systematic)
            .unwrap();
        (codec, codeword)
    }

    #[test]
    fn clean_word_has_zero_syndromes() {
        let (codec, codeword) = rs_15_9();
        let s = syndromes_of(codec.field(), &codeword, codec.parity_len());
        assert!(s.iter().all(|s| *s == codec.field().zero()));
        let mut work = codeword.clone();
        assert_eq!(decode(codec.field(), &mut work, codec.parity_len()), 0);
        assert_eq!(work, codeword);
    }

    #[test]
    fn single_error_anywhere() {
        let (codec, codeword) = rs_15_9();
        for pos in 0..codeword.len() {
            let mut work = codeword.clone();
            work[pos] ^= 9;
            assert_eq!(decode(codec.field(), &mut work, codec.parity_len()), 1, "pos {}", pos);
            assert_eq!(work, codeword, "pos {}", pos);
        }
    }

    #[test]
    fn corrects_at_full_capacity() {
        let (codec, codeword) = rs_15_9();
        let mut work = codeword.clone();
        work[1] ^= 3;
        work[7] ^= 12;
        work[14] ^= 1;
        assert_eq!(decode(codec.field(), &mut work, codec.parity_len()), 3);
        assert_eq!(work, codeword);
    }

    #[test]
    fn too_many_errors_never_silently_corrupt() {
        let (codec, codeword) = rs_15_9();
        let mut work = codeword.clone();
        work[0] ^= 1;
        work[4] ^= 7;
        work[9] ^= 2;
        work[13] ^= 11;
        let before = work.clone();
        let corrected = decode(codec.field(), &mut work, codec.parity_len());
        if corrected == -1 {
            // the common outcome: reported as uncorrectable, word untouched
            assert_eq!(work, before);
        } else {
            // a pattern past the capacity may land on a neighboring
            // codeword, but never on a word with residual syndromes
            let s = syndromes_of(codec.field(), &work, codec.parity_len());
            assert!(s.iter().all(|s| *s == codec.field().zero()));
        }
    }

    #[test]
    fn shortened_word_decodes() {
        let codec = RsCodec::new(15, 9, 16).unwrap();
        let codeword = codec.encode(&[5, 14, 2, 7], Framing::Systematic).unwrap();
        assert_eq!(codeword.len(), 10);
        let mut work = codeword.clone();
        work[3] ^= 6;
        work[8] ^= 13;
        assert_eq!(decode(codec.field(), &mut work, codec.parity_len()), 2);
        assert_eq!(work, codeword);
    }
}
