//! Coefficient-vector polynomials over a [`Field`](crate::galois::Field).
//!
//! Coefficient index equals the power of the variable. The representation is
//! kept canonical: no trailing zero coefficients beyond the true degree, and
//! the zero polynomial holds exactly one zero coefficient.

use std::ops::{Add, Mul};

use crate::galois::{Field, GF};

#[derive(Clone, PartialEq, Eq)]
pub struct Polynomial<'f> {
    coeffs: Vec<GF<'f>>,
}

impl<'f> Polynomial<'f> {
    /// Canonicalize a non-empty coefficient vector.
    pub fn new(mut coeffs: Vec<GF<'f>>) -> Self {
        assert!(!coeffs.is_empty(), "a polynomial needs at least one coefficient");
        while coeffs.len() > 1 && coeffs.last().map(|c| c.value()) == Some(0) {
            coeffs.pop();
        }
        Polynomial { coeffs }
    }

    /// Build from integer symbols, lowest power first. An empty slice gives
    /// the zero polynomial.
    pub fn from_symbols(field: &'f Field, symbols: &[u16]) -> Self {
        if symbols.is_empty() {
            return Self::zero(field);
        }
        Self::new(symbols.iter().map(|&s| field.element(s)).collect())
    }

    pub fn zero(field: &'f Field) -> Self {
        Polynomial { coeffs: vec![field.zero()] }
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].value() == 0
    }

    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    pub fn coeffs(&self) -> &[GF<'f>] {
        &self.coeffs
    }

    pub fn leading(&self) -> GF<'f> {
        *self.coeffs.last().unwrap()
    }

    /// Horner evaluation at `x`.
    pub fn eval(&self, x: GF<'f>) -> GF<'f> {
        let mut acc = x.field().zero();
        for c in self.coeffs.iter().rev() {
            acc = acc * x + *c;
        }
        acc
    }

    /// Euclidean division, returning `(quotient, remainder)`.
    pub fn div_rem(&self, rhs: &Polynomial<'f>) -> (Polynomial<'f>, Polynomial<'f>) {
        assert!(!rhs.is_zero(), "division by the zero polynomial");
        let field = rhs.coeffs[0].field();
        let d = rhs.degree();
        if self.is_zero() || self.degree() < d {
            return (Polynomial::zero(field), self.clone());
        }
        let mut rem = self.coeffs.clone();
        let mut quot = vec![field.zero(); self.degree() - d + 1];
        let lead = rhs.leading();
        for i in (d..rem.len()).rev() {
            let c = rem[i] / lead;
            quot[i - d] = c;
            if c != field.zero() {
                for (j, g) in rhs.coeffs.iter().enumerate() {
                    let sub = *g * c;
                    rem[i - d + j] -= sub;
                }
            }
        }
        rem.truncate(d.max(1));
        (Polynomial::new(quot), Polynomial::new(rem))
    }

    /// Lagrange interpolation through distinct points, O(len^2).
    ///
    /// Builds the master product m(x) = prod (x - x_i) once, then derives
    /// each basis polynomial by synthetic division with the root x_i.
    pub fn interpolate(xs: &[GF<'f>], ys: &[GF<'f>]) -> Polynomial<'f> {
        assert_eq!(xs.len(), ys.len(), "point coordinates must pair up");
        assert!(!xs.is_empty(), "interpolation needs at least one point");
        let field = xs[0].field();
        let n = xs.len();

        let mut master = vec![field.zero(); n + 1];
        master[0] = field.one();
        for (i, &xi) in xs.iter().enumerate() {
            // multiply by (x - x_i), working down so each cell is read
            // before it is overwritten
            master[i + 1] = master[i];
            for j in (1..=i).rev() {
                let prev = master[j - 1];
                master[j] = prev + master[j] * xi;
            }
            master[0] = master[0] * xi;
        }

        let mut acc = vec![field.zero(); n];
        let mut basis = vec![field.zero(); n];
        for (&xi, &yi) in xs.iter().zip(ys) {
            let mut carry = field.zero();
            for j in (0..n).rev() {
                carry = master[j + 1] + xi * carry;
                basis[j] = carry;
            }
            let mut denom = field.zero();
            for b in basis.iter().rev() {
                denom = denom * xi + *b;
            }
            let scale = yi / denom;
            for (a, b) in acc.iter_mut().zip(&basis) {
                *a += *b * scale;
            }
        }
        Polynomial::new(acc)
    }
}

impl std::fmt::Debug for Polynomial<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let terms: Vec<String> = self
            .coeffs
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{}x^{}", c.value(), i))
            .collect();
        write!(f, "{}", terms.join(" + "))
    }
}

impl<'f> Add<&Polynomial<'f>> for &Polynomial<'f> {
    type Output = Polynomial<'f>;

    fn add(self, rhs: &Polynomial<'f>) -> Polynomial<'f> {
        let (longer, shorter) = if self.coeffs.len() >= rhs.coeffs.len() {
            (self, rhs)
        } else {
            (rhs, self)
        };
        let mut coeffs = longer.coeffs.clone();
        for (c, s) in coeffs.iter_mut().zip(&shorter.coeffs) {
            *c += *s;
        }
        Polynomial::new(coeffs)
    }
}

impl<'f> Mul<&Polynomial<'f>> for &Polynomial<'f> {
    type Output = Polynomial<'f>;

    fn mul(self, rhs: &Polynomial<'f>) -> Polynomial<'f> {
        let field = self.coeffs[0].field();
        let mut coeffs = vec![field.zero(); self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in rhs.coeffs.iter().enumerate() {
                let prod = *a * *b;
                coeffs[i + j] += prod;
            }
        }
        Polynomial::new(coeffs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn values(p: &Polynomial) -> Vec<u16> {
        p.coeffs().iter().map(|c| c.value()).collect()
    }

    #[test]
    fn trailing_zeros_are_trimmed() {
        let f = Field::new(8).unwrap();
        let p = Polynomial::from_symbols(&f, &[3, 0, 5, 0, 0]);
        assert_eq!(p.degree(), 2);
        assert_eq!(values(&p), vec![3, 0, 5]);
    }

    #[test]
    fn zero_polynomial_is_canonical() {
        let f = Field::new(8).unwrap();
        let z = Polynomial::from_symbols(&f, &[]);
        assert!(z.is_zero());
        assert_eq!(z.degree(), 0);
        assert_eq!(z, Polynomial::from_symbols(&f, &[0, 0, 0]));
    }

    #[test]
    fn add_cancels_matching_terms() {
        let f = Field::new(256).unwrap();
        let a = Polynomial::from_symbols(&f, &[1, 2]);
        let b = Polynomial::from_symbols(&f, &[3, 2, 1]);
        assert_eq!(values(&(&a + &b)), vec![2, 0, 1]);
        // adding a polynomial to itself gives zero in characteristic 2
        assert!((&b + &b).is_zero());
    }

    #[test]
    fn mul_small_factors() {
        let f = Field::new(8).unwrap();
        let a = Polynomial::from_symbols(&f, &[1, 1]); // x + 1
        let b = Polynomial::from_symbols(&f, &[2, 1]); // x + 2
        assert_eq!(values(&(&a * &b)), vec![2, 3, 1]);
    }

    #[test]
    fn eval_horner() {
        let f = Field::new(8).unwrap();
        let p = Polynomial::from_symbols(&f, &[5, 0, 1]); // x^2 + 5
        assert_eq!(p.eval(f.element(2)), f.element(1));
        assert_eq!(p.eval(f.zero()), f.element(5));
    }

    #[test]
    fn div_rem_exact_and_with_remainder() {
        let f = Field::new(8).unwrap();
        let prod = Polynomial::from_symbols(&f, &[2, 3, 1]); // (x + 1)(x + 2)
        let div = Polynomial::from_symbols(&f, &[1, 1]);
        let (q, r) = prod.div_rem(&div);
        assert_eq!(values(&q), vec![2, 1]);
        assert!(r.is_zero());

        let bumped = Polynomial::from_symbols(&f, &[3, 3, 1]);
        let (q, r) = bumped.div_rem(&div);
        assert_eq!(values(&q), vec![2, 1]);
        assert_eq!(values(&r), vec![1]);
    }

    #[test]
    fn div_rem_by_higher_degree() {
        let f = Field::new(8).unwrap();
        let small = Polynomial::from_symbols(&f, &[7, 1]);
        let big = Polynomial::from_symbols(&f, &[0, 0, 1]);
        let (q, r) = small.div_rem(&big);
        assert!(q.is_zero());
        assert_eq!(r, small);
    }

    #[test]
    fn interpolate_recovers_polynomial() {
        let f = Field::new(8).unwrap();
        // p(x) = x^2 sampled at 1, x, x^2
        let xs: Vec<GF> = (0..3).map(|i| f.primitive_power(i)).collect();
        let ys: Vec<GF> = xs.iter().map(|&x| x * x).collect();
        let p = Polynomial::interpolate(&xs, &ys);
        assert_eq!(values(&p), vec![0, 0, 1]);
        for (&x, &y) in xs.iter().zip(&ys) {
            assert_eq!(p.eval(x), y);
        }
    }

    #[test]
    fn interpolate_single_point() {
        let f = Field::new(16).unwrap();
        let p = Polynomial::interpolate(&[f.element(5)], &[f.element(9)]);
        assert_eq!(values(&p), vec![9]);
    }
}
