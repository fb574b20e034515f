//! Finite fields with a runtime modulus.
//!
//! A `Field` is GF(p) for a prime `p` chosen at runtime, or its quadratic
//! extension GF(p^2) = GF(p)[i]/(i^2 + 1) (which requires p = 3 mod 4, so
//! that -1 is not a square). Field elements (`Fe`) are plain values that
//! do not reference their field; all operations are methods on the
//! `Field` object, which owns the modulus and the precomputed exponents.
//! Passing an element of one field to the methods of another field is a
//! programming error and yields meaningless results.
//!
//! Elements are always kept reduced (each component in `[0, p)`).
//!
//! Square roots use closed-form exponentiations: `x^((p+1)/4)` when
//! p = 3 mod 4, and the Atkin-style formula with a correction by
//! `sqrt(-1)` when p = 5 mod 8. Fields whose modulus is in neither
//! class are rejected at construction. In GF(p^2), square roots use
//! the "complex method" (Adj and Rodriguez-Henriquez, algorithm 9).

// Tests name fields with uppercase letters, as in mathematical notation.
#![allow(non_snake_case)]

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use num_bigint::BigUint;
use num_traits::{Num, One, Zero};
use rand_core::RngCore;
use tracing::{debug, warn};

use super::Error;

/// Sign convention for `sgn0()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sgn0 {
    /// An integer is "negative" if it is greater than `(p-1)/2`;
    /// extension components are scanned starting with the constant one.
    LittleEndian,
    /// An integer is "negative" if its bit of index `bitlen(p)-1` is set;
    /// extension components are scanned starting with the top one.
    BigEndian,
}

/// An element of a `Field`.
///
/// For prime fields, the second component is always zero.
#[derive(Clone, Debug)]
pub struct Fe {
    c0: BigUint,
    c1: BigUint,
}

impl Fe {

    /// Get the constant component (the integer value, for prime fields).
    pub fn re(&self) -> &BigUint {
        &self.c0
    }

    /// Get the coefficient of `i` (always zero for prime fields).
    pub fn im(&self) -> &BigUint {
        &self.c1
    }
}

impl fmt::Display for Fe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.c1.is_zero() {
            write!(f, "0x{:x}", self.c0)
        } else {
            write!(f, "0x{:x} + 0x{:x}*i", self.c0, self.c1)
        }
    }
}

/// A finite field GF(p) or GF(p^2).
#[derive(Debug)]
pub struct Field {
    name: String,
    p: BigUint,
    m: usize,
    bitlen: u64,
    // Number of 32-bit words in the representation of p.
    nw: usize,
    // Length (in bytes) of an encoded component.
    enc_len: usize,
    // (p-1)/2
    half: BigUint,
    // p-2, for inversion through Fermat's little theorem.
    pm2: BigUint,
    // Square root exponent: (p+1)/4 or (p+3)/8 in GF(p), (p-3)/4 in GF(p^2).
    sqrt_exp: BigUint,
    // sqrt(-1) in GF(p), when p = 5 mod 8; zero otherwise.
    sqrt_m1: BigUint,
}

impl Field {

    /// Create a new field with the provided prime modulus `p` and
    /// extension degree `m` (1 or 2).
    ///
    /// The modulus must be prime (this is verified with a Miller-Rabin
    /// test), and either equal to 3 mod 4, or to 5 mod 8. For degree 2,
    /// only p = 3 mod 4 is supported.
    pub fn new(name: &str, p: BigUint, m: usize) -> Result<Self, Error> {
        if m != 1 && m != 2 {
            warn!(field = name, degree = m, "unsupported extension degree");
            return Err(Error::UnsupportedDegree);
        }
        if !is_prime(&p) {
            warn!(field = name, "modulus is not prime");
            return Err(Error::NotPrime);
        }
        let r8 = (&p % 8u32).to_u32_digits().first().copied().unwrap_or(0);
        let (sqrt_exp, sqrt_m1) = match (r8 & 3, r8, m) {
            (3, _, 1) => ((&p + 1u32) >> 2, BigUint::zero()),
            (3, _, 2) => ((&p - 3u32) >> 2, BigUint::zero()),
            (_, 5, 1) => {
                let e = (&p - 1u32) >> 2;
                ((&p + 3u32) >> 3, BigUint::from(2u32).modpow(&e, &p))
            }
            _ => {
                warn!(field = name, degree = m, "no square root method");
                return Err(Error::UnsupportedModulus);
            }
        };
        let bitlen = p.bits();
        let nw = ((bitlen + 31) >> 5) as usize;
        let enc_len = ((bitlen + 7) >> 3) as usize;
        let half = (&p - 1u32) >> 1;
        let pm2 = &p - 2u32;
        debug!(field = name, bits = bitlen, degree = m, "field constructed");
        Ok(Self {
            name: String::from(name),
            p, m, bitlen, nw, enc_len, half, pm2, sqrt_exp, sqrt_m1,
        })
    }

    /// Create a new field from a modulus given as a string (decimal,
    /// or hexadecimal with a `0x` prefix).
    pub fn from_modulus_str(name: &str, p: &str, m: usize)
        -> Result<Self, Error>
    {
        let (neg, v) = parse_int(p)?;
        if neg {
            return Err(Error::InvalidConstant);
        }
        Self::new(name, v, m)
    }

    /// Get the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the field characteristic `p`.
    pub fn modulus(&self) -> &BigUint {
        &self.p
    }

    /// Get the extension degree (1 or 2).
    pub fn degree(&self) -> usize {
        self.m
    }

    /// Get the bit length of the characteristic.
    pub fn bit_length(&self) -> u64 {
        self.bitlen
    }

    /// Get the length (in bytes) of an encoded element.
    pub fn encoded_len(&self) -> usize {
        self.enc_len * self.m
    }

    /// Returns true if `other` is the same field (same characteristic
    /// and extension degree).
    pub fn same_as(&self, other: &Field) -> bool {
        self.m == other.m && self.p == other.p
    }

    fn reduce(&self, x: BigUint) -> BigUint {
        if x < self.p { x } else { x % &self.p }
    }

    fn elt(&self, c0: BigUint, c1: BigUint) -> Fe {
        Fe { c0: self.reduce(c0), c1: self.reduce(c1) }
    }

    /// Get the zero element.
    pub fn zero(&self) -> Fe {
        Fe { c0: BigUint::zero(), c1: BigUint::zero() }
    }

    /// Get the element one.
    pub fn one(&self) -> Fe {
        Fe { c0: BigUint::one(), c1: BigUint::zero() }
    }

    /// Get the element `i` (a square root of -1) in GF(p^2).
    ///
    /// In GF(p), this returns zero.
    pub fn imaginary_unit(&self) -> Fe {
        if self.m == 2 {
            Fe { c0: BigUint::zero(), c1: BigUint::one() }
        } else {
            self.zero()
        }
    }

    /// Convert an unsigned integer into a field element.
    pub fn from_u64(&self, x: u64) -> Fe {
        self.elt(BigUint::from(x), BigUint::zero())
    }

    /// Convert a signed integer into a field element.
    pub fn from_i64(&self, x: i64) -> Fe {
        let v = self.from_u64(x.unsigned_abs());
        if x < 0 { self.neg(&v) } else { v }
    }

    /// Convert a big integer into a field element (reduced modulo p).
    pub fn from_biguint(&self, x: &BigUint) -> Fe {
        self.elt(x.clone(), BigUint::zero())
    }

    /// Build an element of GF(p^2) from its two components (reduced
    /// modulo p). In GF(p), the second component must be zero.
    pub fn from_components(&self, c0: &BigUint, c1: &BigUint)
        -> Result<Fe, Error>
    {
        if self.m == 1 && !c1.is_zero() {
            return Err(Error::UnsupportedDegree);
        }
        Ok(self.elt(c0.clone(), c1.clone()))
    }

    /// Parse an integer constant into a field element. The string is in
    /// decimal, or in hexadecimal with a `0x` prefix, optionally preceded
    /// by a minus sign. The value is reduced modulo p.
    pub fn from_str(&self, s: &str) -> Result<Fe, Error> {
        let (neg, v) = parse_int(s)?;
        let x = self.from_biguint(&v);
        Ok(if neg { self.neg(&x) } else { x })
    }

    /// Decode bytes (unsigned big-endian convention) into an integer,
    /// reduced modulo p.
    pub fn from_bytes_reduce(&self, buf: &[u8]) -> Fe {
        self.from_biguint(&BigUint::from_bytes_be(buf))
    }

    /// Encode an element into bytes: each component is encoded with
    /// unsigned big-endian convention over `ceil(bitlen(p)/8)` bytes,
    /// constant component first.
    pub fn encode(&self, x: &Fe) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        self.encode_component(&x.c0, &mut out);
        if self.m == 2 {
            self.encode_component(&x.c1, &mut out);
        }
        out
    }

    fn encode_component(&self, c: &BigUint, out: &mut Vec<u8>) {
        let b = c.to_bytes_be();
        let z = if c.is_zero() { self.enc_len } else { self.enc_len - b.len() };
        out.resize(out.len() + z, 0);
        if !c.is_zero() {
            out.extend_from_slice(&b);
        }
    }

    /// Generate a random element.
    ///
    /// Each component is obtained by reducing an integer 128 bits larger
    /// than p; the output distribution is thus statistically very close
    /// to uniform.
    pub fn random<T: RngCore>(&self, rng: &mut T) -> Fe {
        let mut buf = alloc::vec![0u8; self.enc_len + 16];
        rng.fill_bytes(&mut buf);
        let c0 = BigUint::from_bytes_be(&buf);
        let c1 = if self.m == 2 {
            rng.fill_bytes(&mut buf);
            BigUint::from_bytes_be(&buf)
        } else {
            BigUint::zero()
        };
        self.elt(c0, c1)
    }

    fn add_int(&self, a: &BigUint, b: &BigUint) -> BigUint {
        self.reduce(a + b)
    }

    fn sub_int(&self, a: &BigUint, b: &BigUint) -> BigUint {
        self.reduce((a + &self.p) - b)
    }

    fn neg_int(&self, a: &BigUint) -> BigUint {
        self.reduce(&self.p - a)
    }

    fn mul_int(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.p
    }

    /// Addition.
    pub fn add(&self, a: &Fe, b: &Fe) -> Fe {
        Fe {
            c0: self.add_int(&a.c0, &b.c0),
            c1: self.add_int(&a.c1, &b.c1),
        }
    }

    /// Subtraction.
    pub fn sub(&self, a: &Fe, b: &Fe) -> Fe {
        Fe {
            c0: self.sub_int(&a.c0, &b.c0),
            c1: self.sub_int(&a.c1, &b.c1),
        }
    }

    /// Negation.
    pub fn neg(&self, a: &Fe) -> Fe {
        Fe {
            c0: self.neg_int(&a.c0),
            c1: self.neg_int(&a.c1),
        }
    }

    /// Multiplication.
    pub fn mul(&self, a: &Fe, b: &Fe) -> Fe {
        if self.m == 1 {
            return Fe { c0: self.mul_int(&a.c0, &b.c0), c1: BigUint::zero() };
        }
        // (a0 + a1*i)*(b0 + b1*i) = (a0*b0 - a1*b1) + (a0*b1 + a1*b0)*i
        let t0 = &a.c0 * &b.c0;
        let t1 = &a.c1 * &b.c1;
        let t2 = &a.c0 * &b.c1 + &a.c1 * &b.c0;
        Fe {
            c0: self.sub_int(&(t0 % &self.p), &(t1 % &self.p)),
            c1: t2 % &self.p,
        }
    }

    /// Multiplication by a small integer.
    pub fn mul_small(&self, a: &Fe, k: u32) -> Fe {
        self.elt(&a.c0 * k, &a.c1 * k)
    }

    /// Squaring.
    pub fn square(&self, a: &Fe) -> Fe {
        self.mul(a, a)
    }

    /// Exponentiation by a non-negative integer.
    pub fn pow(&self, a: &Fe, e: &BigUint) -> Fe {
        if self.m == 1 {
            return Fe { c0: a.c0.modpow(e, &self.p), c1: BigUint::zero() };
        }
        let mut r = self.one();
        for i in (0..e.bits()).rev() {
            r = self.square(&r);
            if e.bit(i) {
                r = self.mul(&r, a);
            }
        }
        r
    }

    // Norm N(a) = a * conj(a) = a0^2 + a1^2, an element of GF(p).
    fn norm(&self, a: &Fe) -> BigUint {
        (&a.c0 * &a.c0 + &a.c1 * &a.c1) % &self.p
    }

    /// Inversion; zero is mapped to zero.
    pub fn inv0(&self, a: &Fe) -> Fe {
        if self.m == 1 {
            return Fe { c0: a.c0.modpow(&self.pm2, &self.p), c1: BigUint::zero() };
        }
        // 1/(a0 + a1*i) = (a0 - a1*i)/(a0^2 + a1^2)
        let n = self.norm(a).modpow(&self.pm2, &self.p);
        Fe {
            c0: self.mul_int(&a.c0, &n),
            c1: self.mul_int(&self.neg_int(&a.c1), &n),
        }
    }

    /// Inversion. An error is returned if the operand is zero.
    pub fn inv(&self, a: &Fe) -> Result<Fe, Error> {
        if self.iszero(a) != 0 {
            return Err(Error::DivisionByZero);
        }
        Ok(self.inv0(a))
    }

    /// Division. An error is returned if the divisor is zero.
    pub fn div(&self, a: &Fe, b: &Fe) -> Result<Fe, Error> {
        Ok(self.mul(a, &self.inv(b)?))
    }

    // Split a component into exactly nw words.
    fn words(&self, x: &BigUint) -> Vec<u32> {
        let mut w = x.to_u32_digits();
        w.resize(self.nw, 0);
        w
    }

    fn iszero_int(&self, x: &BigUint) -> u32 {
        let mut r = 0u32;
        for w in self.words(x) {
            r |= w;
        }
        ((r | r.wrapping_neg()) >> 31).wrapping_sub(1)
    }

    fn equals_int(&self, a: &BigUint, b: &BigUint) -> u32 {
        let wa = self.words(a);
        let wb = self.words(b);
        let mut r = 0u32;
        for i in 0..self.nw {
            r |= wa[i] ^ wb[i];
        }
        ((r | r.wrapping_neg()) >> 31).wrapping_sub(1)
    }

    fn select_int(&self, a0: &BigUint, a1: &BigUint, ctl: u32) -> BigUint {
        let mut w0 = self.words(a0);
        let w1 = self.words(a1);
        for i in 0..self.nw {
            w0[i] ^= ctl & (w0[i] ^ w1[i]);
        }
        BigUint::new(w0)
    }

    /// Compare with zero; returned value is 0xFFFFFFFF if the operand
    /// is zero, 0x00000000 otherwise.
    pub fn iszero(&self, a: &Fe) -> u32 {
        self.iszero_int(&a.c0) & self.iszero_int(&a.c1)
    }

    /// Compare two elements; returned value is 0xFFFFFFFF if they are
    /// equal, 0x00000000 otherwise.
    pub fn equals(&self, a: &Fe, b: &Fe) -> u32 {
        self.equals_int(&a.c0, &b.c0) & self.equals_int(&a.c1, &b.c1)
    }

    /// Return `y` if `ctl` is 0xFFFFFFFF, or `x` if `ctl` is 0x00000000.
    ///
    /// The selection is a masked blend of the component words; `ctl`
    /// MUST be one of these two values.
    pub fn cmov(&self, x: &Fe, y: &Fe, ctl: u32) -> Fe {
        Fe {
            c0: self.select_int(&x.c0, &y.c0, ctl),
            c1: self.select_int(&x.c1, &y.c1, ctl),
        }
    }

    /// Test whether an element is a square (zero is a square); returned
    /// value is 0xFFFFFFFF for a square, 0x00000000 otherwise.
    ///
    /// This uses Euler's criterion (on the norm, for GF(p^2)).
    pub fn is_square(&self, a: &Fe) -> u32 {
        let n = if self.m == 1 { a.c0.clone() } else { self.norm(a) };
        let r = n.modpow(&self.half, &self.p);
        self.iszero_int(&r) | self.equals_int(&r, &BigUint::one())
    }

    /// Compute a square root. If the operand is a square, then one of
    /// its square roots is returned; otherwise, the output is
    /// unspecified.
    pub fn sqrt(&self, a: &Fe) -> Fe {
        if self.m == 2 {
            return self.sqrt_ext(a);
        }
        let t = a.c0.modpow(&self.sqrt_exp, &self.p);
        if self.sqrt_m1.is_zero() {
            return Fe { c0: t, c1: BigUint::zero() };
        }

        // p = 5 mod 8: t^2 = a or -a. In the latter case, we
        // multiply t by sqrt(-1).
        let t2 = self.mul_int(&t, &self.sqrt_m1);
        let ok = self.equals_int(&self.mul_int(&t, &t), &a.c0);
        Fe { c0: self.select_int(&t2, &t, ok), c1: BigUint::zero() }
    }

    fn sqrt_ext(&self, a: &Fe) -> Fe {
        // a1 = a^((p-3)/4)
        // alpha = a1^2*a
        // x0 = a1*a
        // If alpha = -1, then the root is i*x0; otherwise, it is
        // b*x0 with b = (1 + alpha)^((p-1)/2).
        let a1 = self.pow(a, &self.sqrt_exp);
        let alpha = self.mul(&self.square(&a1), a);
        let x0 = self.mul(&a1, a);
        let xi = Fe { c0: self.neg_int(&x0.c1), c1: x0.c0.clone() };
        let b = self.pow(&self.add(&self.one(), &alpha), &self.half);
        let xb = self.mul(&b, &x0);
        let e = self.equals(&alpha, &self.neg(&self.one()));
        self.cmov(&xb, &xi, e)
    }

    // Returns 0xFFFFFFFF if the integer is "negative" for the convention.
    fn sign_int(&self, c: &BigUint, s: Sgn0) -> u32 {
        let neg = match s {
            Sgn0::LittleEndian => *c > self.half,
            Sgn0::BigEndian => c.bit(self.bitlen - 1),
        };
        (neg as u32).wrapping_neg()
    }

    /// Get the "sign" of an element: -1 if it is negative for the
    /// provided convention, 1 otherwise (including for zero).
    ///
    /// In GF(p^2), the sign is that of the first non-zero component
    /// (constant component first for little-endian, `i` coefficient first
    /// for big-endian).
    pub fn sgn0(&self, a: &Fe, s: Sgn0) -> i32 {
        let n0 = self.sign_int(&a.c0, s);
        let n1 = self.sign_int(&a.c1, s);
        let neg = match s {
            Sgn0::LittleEndian => n0 | (self.iszero_int(&a.c0) & n1),
            Sgn0::BigEndian => n1 | (self.iszero_int(&a.c1) & n0),
        };
        1 - 2 * ((neg & 1) as i32)
    }

    /// Compare the signs of two elements; returned value is 0xFFFFFFFF
    /// if they have the same sign, 0x00000000 otherwise.
    pub fn same_sign(&self, a: &Fe, b: &Fe, s: Sgn0) -> u32 {
        let x = (self.sgn0(a, s) ^ self.sgn0(b, s)) as u32;
        ((x | x.wrapping_neg()) >> 31).wrapping_sub(1)
    }
}

// Parse an integer, in decimal or (with a "0x" prefix) hexadecimal, with
// an optional leading minus sign. Returned value is (negative, |v|).
pub(crate) fn parse_int(s: &str) -> Result<(bool, BigUint), Error> {
    let (neg, t) = match s.strip_prefix('-') {
        Some(t) => (true, t),
        None => (false, s),
    };
    let v = match t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
        Some(h) => BigUint::from_str_radix(h, 16),
        None => BigUint::from_str_radix(t, 10),
    };
    v.map(|v| (neg, v)).map_err(|_| Error::InvalidConstant)
}

// Small primes used both for trial division and as Miller-Rabin bases.
const SMALL_PRIMES: [u32; 20] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29,
    31, 37, 41, 43, 47, 53, 59, 61, 67, 71,
];

/// Test whether an integer is prime.
///
/// This uses trial division by small primes, then Miller-Rabin with the
/// first 20 primes as bases. The test is deterministic for all integers
/// below 3.3*10^24; above that bound, no composite integer is known to
/// pass it.
pub fn is_prime(n: &BigUint) -> bool {
    if *n < BigUint::from(2u32) {
        return false;
    }
    for &b in SMALL_PRIMES.iter() {
        if (n % b).is_zero() {
            return *n == BigUint::from(b);
        }
    }
    let nm1 = n - 1u32;
    let s = nm1.trailing_zeros().unwrap_or(0);
    let d = &nm1 >> s;
    'outer: for &b in SMALL_PRIMES.iter() {
        let mut x = BigUint::from(b).modpow(&d, n);
        if x.is_one() || x == nm1 {
            continue;
        }
        for _ in 1..s {
            x = (&x * &x) % n;
            if x == nm1 {
                continue 'outer;
            }
        }
        return false;
    }
    true
}
