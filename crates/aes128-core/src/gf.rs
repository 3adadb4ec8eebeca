//! Byte arithmetic in GF(2^8) modulo x^8 + x^4 + x^3 + x + 1.

/// Low byte of the AES reduction polynomial.
const REDUCTION: u8 = 0x1b;

/// Multiplies `a` by `b` in GF(2^8).
///
/// `b` is doubled once per bit of `a`, reducing whenever the doubling
/// overflows bit 7, and the doublings selected by the set bits of `a` are
/// XORed together.
pub fn multiply(a: u8, b: u8) -> u8 {
    let mut doubled = b;
    let mut product = 0u8;
    for bit in 0..8 {
        if a & (1 << bit) != 0 {
            product ^= doubled;
        }
        let carry = doubled & 0x80;
        doubled <<= 1;
        if carry != 0 {
            doubled ^= REDUCTION;
        }
    }
    product
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fips_worked_examples() {
        // FIPS-197 section 4.2 and 4.2.1.
        assert_eq!(multiply(0x57, 0x83), 0xc1);
        assert_eq!(multiply(0x57, 0x13), 0xfe);
        assert_eq!(multiply(0x57, 0x02), 0xae);
        assert_eq!(multiply(0x57, 0x10), 0x07);
    }

    #[test]
    fn commutative_over_all_pairs() {
        for a in 0..=255u8 {
            for b in 0..=255u8 {
                assert_eq!(multiply(a, b), multiply(b, a), "{a:#04x} * {b:#04x}");
            }
        }
    }

    #[test]
    fn identity_and_zero() {
        for a in 0..=255u8 {
            assert_eq!(multiply(a, 1), a);
            assert_eq!(multiply(a, 0), 0);
        }
    }

    #[test]
    fn distributes_over_xor() {
        for a in [0x01u8, 0x53, 0x8e, 0xca, 0xff] {
            for b in 0..=255u8 {
                for c in [0x00u8, 0x1b, 0x80, 0xe3] {
                    assert_eq!(multiply(a, b ^ c), multiply(a, b) ^ multiply(a, c));
                }
            }
        }
    }
}
