//! Arithmetic in GF(2^8) modulo the AES polynomial x^8 + x^4 + x^3 + x + 1.

/// Low byte of the reduction polynomial `0x11b`; the x^8 term is implied by the carry.
const REDUCTION: u8 = 0x1b;

/// An element of GF(2^8), stored as its polynomial coefficients packed into a byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FieldElement(pub u8);

impl FieldElement {
    /// Additive identity.
    pub const ZERO: Self = Self(0);
    /// Multiplicative identity.
    pub const ONE: Self = Self(1);

    /// Multiplies by `x`, reducing when the degree-7 coefficient carries out.
    #[inline]
    pub fn double(self) -> Self {
        let shifted = self.0 << 1;
        if self.0 & 0x80 != 0 {
            Self(shifted ^ REDUCTION)
        } else {
            Self(shifted)
        }
    }

    /// Raises the element to `exp` by square-and-multiply.
    pub fn pow(self, mut exp: u32) -> Self {
        let mut result = Self::ONE;
        let mut base = self;
        while exp > 0 {
            if exp & 1 != 0 {
                result = field_multiply(result, base);
            }
            base = field_multiply(base, base);
            exp >>= 1;
        }
        result
    }

    /// Multiplicative inverse, `a^254`. Zero maps to zero.
    pub fn inverse(self) -> Self {
        self.pow(254)
    }
}

impl From<u8> for FieldElement {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<FieldElement> for u8 {
    fn from(value: FieldElement) -> Self {
        value.0
    }
}

/// Field addition: coefficient-wise xor.
#[inline]
pub fn field_add(a: FieldElement, b: FieldElement) -> FieldElement {
    FieldElement(a.0 ^ b.0)
}

/// Field multiplication by shift-and-add.
///
/// Walks the bits of `b` from least to most significant while doubling a copy
/// of `a`; every set bit adds the current doubled value into the product. The
/// reduction is folded into each doubling, so the 16-bit intermediate product
/// is never materialised.
pub fn field_multiply(a: FieldElement, b: FieldElement) -> FieldElement {
    let mut product = FieldElement::ZERO;
    let mut doubled = a;
    let mut bits = b.0;
    for _ in 0..8 {
        if bits & 1 != 0 {
            product = field_add(product, doubled);
        }
        doubled = doubled.double();
        bits >>= 1;
    }
    product
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn fe(value: u8) -> FieldElement {
        FieldElement(value)
    }

    #[test]
    fn addition_is_xor() {
        assert_eq!(field_add(fe(0x57), fe(0x83)), fe(0xd4));
        assert_eq!(field_add(fe(0xff), fe(0xff)), FieldElement::ZERO);
    }

    #[test]
    fn multiply_matches_fips_examples() {
        // FIPS-197 section 4.2.
        assert_eq!(field_multiply(fe(0x57), fe(0x83)), fe(0xc1));
        assert_eq!(field_multiply(fe(0x57), fe(0x13)), fe(0xfe));
        assert_eq!(fe(0x57).double(), fe(0xae));
        assert_eq!(fe(0xae).double(), fe(0x47));
    }

    #[test]
    fn multiply_by_identity_and_zero() {
        for value in 0..=255u8 {
            assert_eq!(field_multiply(fe(value), FieldElement::ONE), fe(value));
            assert_eq!(field_multiply(fe(value), FieldElement::ZERO), FieldElement::ZERO);
        }
    }

    #[test]
    fn multiply_is_commutative_and_distributive() {
        let mut rng = rand::thread_rng();
        for _ in 0..500 {
            let (a, b, c) = (fe(rng.gen()), fe(rng.gen()), fe(rng.gen()));
            assert_eq!(field_multiply(a, b), field_multiply(b, a));
            assert_eq!(
                field_multiply(a, field_add(b, c)),
                field_add(field_multiply(a, b), field_multiply(a, c))
            );
        }
    }

    #[test]
    fn inverse_round_trips() {
        assert_eq!(fe(0x53).inverse(), fe(0xca));
        assert_eq!(FieldElement::ZERO.inverse(), FieldElement::ZERO);
        for value in 1..=255u8 {
            assert_eq!(field_multiply(fe(value), fe(value).inverse()), FieldElement::ONE);
        }
    }
}
