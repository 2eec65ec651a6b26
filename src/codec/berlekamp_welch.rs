//! Berlekamp-Welch decoding for evaluation-framed codewords.
//!
//! The received word is treated as values r_i of an unknown message
//! polynomial P at the points x^i, up to at most e errors. For a trial error
//! count e there exist an error locator E (monic, degree e, vanishing on the
//! error points) and a product Q = P * E with
//!
//!     r_i * E(x^i) = Q(x^i)        for every i
//!
//! which is linear in the unknown coefficients of E and Q. With the n
//! received values this gives an n x n system; it is solvable exactly when e
//! errors suffice to explain the word, so trials run from the largest e
//! downwards and the first solvable system wins. P is then recovered as
//! Q / E, and a non-zero remainder of that division marks the word as
//! uncorrectable.

use log::{debug, trace};

use super::{solve, DecodeOutcome};
use crate::galois::{Field, GF};
use crate::polynomial::Polynomial;

/// Decode a full-width evaluation codeword, returning the first
/// `message_len` recovered values.
///
/// With `force`, a failed Q / E divisibility check is ignored and the
/// correction committed anyway.
pub(crate) fn decode(
    field: &Field,
    codeword: &[u16],
    message_len: usize,
    force: bool,
) -> DecodeOutcome {
    let n = codeword.len();
    let k = message_len;
    let max_errors = (n - k) / 2;
    let received: Vec<GF> = codeword.iter().map(|&c| field.element(c)).collect();
    let points: Vec<GF> = (0..n).map(|i| field.primitive_power(i)).collect();

    for e in (1..=max_errors).rev() {
        // unknowns: the e lower coefficients of E, then the n - e
        // coefficients of Q
        let q_len = n - e;
        let mut mat = vec![field.zero(); n * n];
        let mut rhs = vec![field.zero(); n];
        for i in 0..n {
            for j in 0..e {
                mat[i * n + j] = received[i] * points[i].pow(j);
            }
            for j in 0..q_len {
                mat[i * n + e + j] = -points[i].pow(j);
            }
            rhs[i] = -(received[i] * points[i].pow(e));
        }
        if !solve(&mut mat, &mut rhs, n) {
            trace!("berlekamp-welch: system for {} errors is singular, trying fewer", e);
            continue;
        }
        debug!("berlekamp-welch: solvable with {} assumed errors", e);

        let mut locator_coeffs = rhs[..e].to_vec();
        locator_coeffs.push(field.one());
        let locator = Polynomial::new(locator_coeffs);
        let numerator = Polynomial::new(rhs[e..].to_vec());
        let (message_poly, remainder) = numerator.div_rem(&locator);
        if !remainder.is_zero() && !force {
            debug!("berlekamp-welch: locator does not divide Q, word is uncorrectable");
            return DecodeOutcome {
                message: codeword[..k].to_vec(),
                corrected: -1,
                success: false,
            };
        }

        let mut message = Vec::with_capacity(k);
        let mut corrected = 0;
        for i in 0..k {
            if locator.eval(points[i]) == field.zero() {
                message.push(message_poly.eval(points[i]).value());
                corrected += 1;
            } else {
                message.push(codeword[i]);
            }
        }
        return DecodeOutcome { message, corrected, success: true };
    }

    // every trial was singular: no error pattern of 1..=max_errors symbols
    // fits, so the word is taken as error-free
    DecodeOutcome { message: codeword[..k].to_vec(), corrected: 0, success: true }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Evaluation codeword of the polynomial with the given values at the
    /// first k points.
    fn encode(field: &Field, message: &[u16], n: usize) -> Vec<u16> {
        let k = message.len();
        let xs: Vec<GF> = (0..k).map(|i| field.primitive_power(i)).collect();
        let ys: Vec<GF> = message.iter().map(|&m| field.element(m)).collect();
        let poly = Polynomial::interpolate(&xs, &ys);
        (0..n).map(|i| poly.eval(field.primitive_power(i)).value()).collect()
    }

    #[test]
    fn clean_word_decodes_without_corrections() {
        let f = Field::new(8).unwrap();
        let codeword = encode(&f, &[1, 2, 3], 7);
        let outcome = decode(&f, &codeword, 3, false);
        assert_eq!(outcome, DecodeOutcome { message: vec![1, 2, 3], corrected: 0, success: true });
    }

    #[test]
    fn single_error_in_message_range() {
        let f = Field::new(8).unwrap();
        let mut codeword = encode(&f, &[1, 2, 3], 7);
        codeword[1] ^= 5;
        let outcome = decode(&f, &codeword, 3, false);
        assert_eq!(outcome.message, vec![1, 2, 3]);
        assert_eq!(outcome.corrected, 1);
        assert!(outcome.success);
    }

    #[test]
    fn two_errors_at_capacity() {
        let f = Field::new(8).unwrap();
        let mut codeword = encode(&f, &[1, 2, 3], 7);
        codeword[0] ^= 3;
        codeword[2] ^= 6;
        let outcome = decode(&f, &codeword, 3, false);
        assert_eq!(outcome.message, vec![1, 2, 3]);
        assert_eq!(outcome.corrected, 2);
        assert!(outcome.success);
    }

    #[test]
    fn errors_outside_message_range_are_not_counted() {
        let f = Field::new(8).unwrap();
        let mut codeword = encode(&f, &[1, 2, 3], 7);
        codeword[5] ^= 2;
        let outcome = decode(&f, &codeword, 3, false);
        assert_eq!(outcome.message, vec![1, 2, 3]);
        assert_eq!(outcome.corrected, 0);
        assert!(outcome.success);
    }

    #[test]
    fn force_commits_despite_failed_check() {
        let f = Field::new(8).unwrap();
        let mut codeword = encode(&f, &[1, 2, 3], 7);
        for p in 0..3 {
            codeword[p] ^= 1;
        }
        let forced = decode(&f, &codeword, 3, true);
        assert!(forced.success);
        assert!(forced.corrected >= 0);
    }
}
