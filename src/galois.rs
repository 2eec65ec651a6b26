//! Runtime-parameterized GF(2^m) arithmetic used by the Reed-Solomon codec.
//!
//! An element of GF(2^m) is represented by an integer in `[0, 2^m)`. Its bits
//! are the coefficients of a binary polynomial, the least significant bit
//! being the coefficient for 1. Addition works coefficient by coefficient and
//! is therefore a plain XOR. Multiplication is defined modulo a fixed
//! irreducible polynomial of degree m.
//!
//! When the chosen polynomial is primitive, the powers of x enumerate the
//! whole multiplicative subgroup: 1, x, x^2, ..., x^(2^m - 2) hit every
//! non-zero element exactly once. Any non-zero element a can then be
//! identified with the power i such that x^i = a, and a product a * b becomes
//! x^(i + j). The two lookup tables realizing this, LOG and its inverse
//! ANTI_LOG, are built once per [`Field`] at construction time.
//!
//! Unlike a fixed-field implementation with `const` tables, the field here is
//! a runtime value: the codec must serve GF(8) codes next to GF(256) ones,
//! with caller-chosen polynomials and primitive elements. Two fields built
//! from the same (order, polynomial, primitive element) triple behave
//! identically.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use thiserror::Error;

/// Default irreducible polynomial per field degree m, indexed by m.
///
/// These are the classic minimal-weight primitive polynomials (for m = 8 that
/// is x^8 + x^4 + x^3 + x^2 + 1 = 0x11D); with each of them, x itself (the
/// element 2) generates the multiplicative group.
const DEFAULT_POLYNOMIALS: [u32; 17] = [
    0,
    0,
    0b111,      // x^2 + x + 1
    0b1011,     // x^3 + x + 1
    0b1_0011,   // x^4 + x + 1
    0b10_0101,  // x^5 + x^2 + 1
    0b100_0011, // x^6 + x + 1
    0b1000_1001, // x^7 + x^3 + 1
    0x11D,      // x^8 + x^4 + x^3 + x^2 + 1
    0x211,      // x^9 + x^4 + 1
    0x409,      // x^10 + x^3 + 1
    0x805,      // x^11 + x^2 + 1
    0x1053,     // x^12 + x^6 + x^4 + x + 1
    0x201B,     // x^13 + x^4 + x^3 + x + 1
    0x4443,     // x^14 + x^10 + x^6 + x + 1
    0x8003,     // x^15 + x + 1
    0x1100B,    // x^16 + x^12 + x^3 + x + 1
];

/// A field construction request that cannot yield a valid GF(2^m).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    /// The order is not a power of two in the supported range 4..=65536.
    #[error("field order {0} is not a supported power of two (4..=65536)")]
    UnsupportedOrder(u32),
    /// The reduction polynomial does not have the degree the order demands.
    #[error("polynomial {poly:#x} does not have degree {degree}")]
    WrongPolynomialDegree { poly: u32, degree: u32 },
    /// The chosen element does not enumerate the multiplicative group, either
    /// because it is not primitive or because the polynomial is reducible.
    #[error("element {element} does not generate the multiplicative group of order {order}")]
    NotPrimitive { element: u16, order: u32 },
}

/// A concrete GF(2^m) with its log/antilog tables.
#[derive(Clone)]
pub struct Field {
    order: u32,
    degree: u32,
    irreducible: u32,
    primitive: u16,
    log: Vec<u16>,
    alog: Vec<u16>,
}

impl Field {
    /// Build GF(`order`) with the default polynomial for its degree and x as
    /// the primitive element.
    pub fn new(order: u32) -> Result<Self, FieldError> {
        if !order.is_power_of_two() || !(4..=65536).contains(&order) {
            return Err(FieldError::UnsupportedOrder(order));
        }
        let degree = order.trailing_zeros();
        Self::with_polynomial(order, DEFAULT_POLYNOMIALS[degree as usize], 2)
    }

    /// Build GF(`order`) from an explicit (polynomial, primitive element)
    /// pair. The same triple always reproduces the same tables, so swapping
    /// in an externally specified field cannot change codec output.
    pub fn with_polynomial(order: u32, irreducible: u32, primitive: u16) -> Result<Self, FieldError> {
        if !order.is_power_of_two() || !(4..=65536).contains(&order) {
            return Err(FieldError::UnsupportedOrder(order));
        }
        let degree = order.trailing_zeros();
        if irreducible >> degree != 1 {
            return Err(FieldError::WrongPolynomialDegree { poly: irreducible, degree });
        }
        if primitive == 0 || primitive as u32 >= order {
            return Err(FieldError::NotPrimitive { element: primitive, order });
        }

        let span = (order - 1) as usize;
        let mut log = vec![0u16; order as usize];
        let mut alog = vec![0u16; span];
        let mut seen = vec![false; order as usize];
        let mut p: u32 = 1;
        for i in 0..span {
            if p == 0 || seen[p as usize] {
                // the powers cycled early (or collapsed to zero for a
                // reducible polynomial), so the tables would be incomplete
                return Err(FieldError::NotPrimitive { element: primitive, order });
            }
            seen[p as usize] = true;
            alog[i] = p as u16;
            log[p as usize] = i as u16;
            p = polymul_mod(p, primitive as u32, irreducible, degree);
        }
        if p != 1 {
            return Err(FieldError::NotPrimitive { element: primitive, order });
        }

        Ok(Field { order, degree, irreducible, primitive, log, alog })
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    pub fn degree(&self) -> u32 {
        self.degree
    }

    pub fn irreducible(&self) -> u32 {
        self.irreducible
    }

    /// The element for an integer representative in `[0, order)`.
    pub fn element(&self, value: u16) -> GF<'_> {
        assert!(
            (value as u32) < self.order,
            "{} is not an element of GF({})",
            value,
            self.order
        );
        GF { field: self, value }
    }

    pub fn zero(&self) -> GF<'_> {
        GF { field: self, value: 0 }
    }

    pub fn one(&self) -> GF<'_> {
        GF { field: self, value: 1 }
    }

    pub fn primitive_element(&self) -> GF<'_> {
        GF { field: self, value: self.primitive }
    }

    /// x^i for the primitive element x; the exponent wraps at order - 1.
    pub fn primitive_power(&self, i: usize) -> GF<'_> {
        let span = (self.order - 1) as usize;
        GF { field: self, value: self.alog[i % span] }
    }
}

impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        // the tables are a function of the triple
        self.order == other.order
            && self.irreducible == other.irreducible
            && self.primitive == other.primitive
    }
}

impl Eq for Field {}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Field")
            .field("order", &self.order)
            .field("irreducible", &format_args!("{:#x}", self.irreducible))
            .field("primitive", &self.primitive)
            .finish()
    }
}

/// Carry-less multiply of two binary polynomials, reduced modulo `poly`.
fn polymul_mod(mut a: u32, mut b: u32, poly: u32, degree: u32) -> u32 {
    let mut acc = 0;
    let carry = 1u32 << degree;
    while b != 0 {
        if b & 1 == 1 {
            acc ^= a;
        }
        b >>= 1;
        a <<= 1;
        if a & carry != 0 {
            a ^= poly;
        }
    }
    acc
}

/// An element of a [`Field`].
///
/// Cheap to copy; carries a reference to its field so the usual operators
/// work. Mixing elements of different fields is a caller bug and only
/// checked in debug builds.
#[derive(Clone, Copy)]
pub struct GF<'f> {
    field: &'f Field,
    value: u16,
}

impl<'f> GF<'f> {
    pub fn value(self) -> u16 {
        self.value
    }

    pub fn field(self) -> &'f Field {
        self.field
    }

    /// The power i with x^i equal to this element.
    pub fn log(self) -> usize {
        assert!(self.value != 0, "log of 0");
        self.field.log[self.value as usize] as usize
    }

    pub fn pow(self, exp: usize) -> Self {
        if exp == 0 {
            return self.field.one();
        }
        if self.value == 0 {
            return self;
        }
        let span = (self.field.order - 1) as usize;
        let i = (self.field.log[self.value as usize] as usize * (exp % span)) % span;
        GF { field: self.field, value: self.field.alog[i] }
    }
}

impl fmt::Debug for GF<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}@GF{}", self.value, self.field.order)
    }
}

impl PartialEq for GF<'_> {
    fn eq(&self, other: &Self) -> bool {
        debug_assert_eq!(self.field.order, other.field.order, "elements of different fields");
        self.value == other.value
    }
}

impl Eq for GF<'_> {}

impl<'f> Add for GF<'f> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        debug_assert_eq!(self.field.order, rhs.field.order, "elements of different fields");
        GF { field: self.field, value: self.value ^ rhs.value }
    }
}

impl AddAssign for GF<'_> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<'f> Sub for GF<'f> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        // characteristic 2: subtraction and addition coincide
        self + rhs
    }
}

impl SubAssign for GF<'_> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<'f> Mul for GF<'f> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        debug_assert_eq!(self.field.order, rhs.field.order, "elements of different fields");
        if self.value == 0 || rhs.value == 0 {
            return self.field.zero();
        }
        let span = self.field.order - 1;
        let ia = self.field.log[self.value as usize] as u32;
        let ib = self.field.log[rhs.value as usize] as u32;
        let i = (ia + ib) % span;
        GF { field: self.field, value: self.field.alog[i as usize] }
    }
}

impl MulAssign for GF<'_> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<'f> Div for GF<'f> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        assert_ne!(rhs.value, 0, "division by zero");
        if self.value == 0 {
            return self.field.zero();
        }
        let span = self.field.order - 1;
        let ia = self.field.log[self.value as usize] as u32;
        let ib = self.field.log[rhs.value as usize] as u32;
        let i = (ia + span - ib) % span;
        GF { field: self.field, value: self.field.alog[i as usize] }
    }
}

impl DivAssign for GF<'_> {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<'f> Neg for GF<'f> {
    type Output = Self;

    fn neg(self) -> Self {
        // every element is its own additive inverse
        self
    }
}
