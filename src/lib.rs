//! H2c is a Rust library for hashing byte strings to elliptic curve points.
//!
//! This library implements the hash-to-curve constructions of the IETF
//! CFRG draft: a message and a domain separation tag are turned into one
//! or two field elements (`hash2field`), each field element is mapped to
//! a curve point with one of the standard mappings (`map`), and the
//! result is multiplied by the curve cofactor so that it lands in the
//! prime order subgroup. Two top-level encodings are provided:
//! `encode_to_curve()` (one mapping, non-uniform output) and
//! `hash_to_curve()` (two mappings added together, indifferentiable from
//! a random oracle).
//!
//! Unlike most curve libraries, fields and curves are not fixed at
//! compile time: a `Field` is built at runtime from any prime modulus `p`
//! (with extension degree 1 or 2), and curves are built over such fields
//! in one of four models (short Weierstrass, Weierstrass with a quadratic
//! term and no constant, Montgomery, twisted Edwards). Rational maps and
//! isogenies (`ratmap`) move points between curves. The `curves` module
//! contains the parameters of the standard named curves, and the `suite`
//! module binds a curve, a hash function and a mapping into a ready to
//! use hash-to-curve suite, identified by a string such as
//! `"P256-SHA256-SSWU-RO-"`.
//!
//! # Usage
//!
//! ```ignore
//! use h2c::suite::Suite;
//!
//! let suite = Suite::new("edwards25519-SHA256-EDELL2-RO-")?;
//! let P = suite.hash(b"hello", b"world")?;
//! ```
//!
//! Suites, curves and fields are immutable once constructed; they can be
//! shared between threads and reused for any number of messages. Their
//! construction performs validation and precomputations, and should not
//! be repeated for each message.
//!
//! The library is `no_std` but requires heap allocation (`alloc`). The
//! default feature `std` links against the standard library.
//!
//! # Conventions
//!
//! Field elements are arbitrary-precision integers, and the underlying
//! big-integer arithmetic is not guaranteed to be constant-time. However,
//! the mapping algorithms follow the draft's straight-line formulations:
//! both branches of every square test are computed, and results are
//! selected with masked word-wise blends (`Field::cmov()`) rather than
//! with conditional jumps. Following the same logic, Booleans derived
//! from field values use the `u32` type; the convention is that
//! 0xFFFFFFFF means "true", and 0x00000000 means "false". No other value
//! shall be used. The `Eq` or `PartialEq` traits are not implemented on
//! field elements and points; use the `equals()` functions.
//!
//! All constructors return a `Result` with the crate `Error` type: a
//! failure there is a configuration mistake (invalid modulus, singular
//! curve, unmet mapping precondition, unknown suite identifier). Once
//! constructed, mapping a field element to a curve point cannot fail.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

use core::fmt;

pub use num_bigint::BigUint;
pub use rand_core::{CryptoRng, RngCore};

pub mod field;
pub mod curve;
pub mod ratmap;
pub mod map;
pub mod hash2field;
pub mod curves;
pub mod suite;

/// Errors reported when constructing fields, curves, maps and suites.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The field modulus is not prime.
    NotPrime,
    /// The field extension degree is neither 1 nor 2.
    UnsupportedDegree,
    /// The modulus is in a residue class for which no square root
    /// method is implemented.
    UnsupportedModulus,
    /// A constant could not be parsed, or is out of range.
    InvalidConstant,
    /// A constant computation required the inverse of zero.
    DivisionByZero,
    /// The curve coefficients define a singular curve.
    SingularCurve,
    /// The twisted Edwards curve does not have a complete addition law.
    IncompleteCurve,
    /// The coordinates do not fulfill the curve equation.
    NotOnCurve,
    /// The curve model is not supported by the requested operation.
    WrongModel,
    /// Two objects that must share a curve (or a field) do not.
    CurveMismatch,
    /// A mapping precondition is not met.
    MapPrecondition(&'static str),
    /// No suitable mapping constant `Z` was found.
    NoSuitableZ,
    /// The suite identifier does not follow the expected format.
    MalformedSuiteId,
    /// The suite identifier is well-formed but not supported.
    UnsupportedSuite,
    /// An output length is zero or too large for the hash function.
    InvalidLength,
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Error::NotPrime => write!(f, "modulus is not prime"),
            Error::UnsupportedDegree => write!(f, "unsupported field extension degree"),
            Error::UnsupportedModulus => write!(f, "no square root method for this modulus"),
            Error::InvalidConstant => write!(f, "invalid constant"),
            Error::DivisionByZero => write!(f, "division by zero"),
            Error::SingularCurve => write!(f, "singular curve"),
            Error::IncompleteCurve => write!(f, "Edwards curve is not complete"),
            Error::NotOnCurve => write!(f, "point is not on the curve"),
            Error::WrongModel => write!(f, "curve model not supported here"),
            Error::CurveMismatch => write!(f, "objects are defined over different curves"),
            Error::MapPrecondition(s) => write!(f, "mapping precondition not met: {}", s),
            Error::NoSuitableZ => write!(f, "no suitable Z constant"),
            Error::MalformedSuiteId => write!(f, "malformed suite identifier"),
            Error::UnsupportedSuite => write!(f, "unsupported suite"),
            Error::InvalidLength => write!(f, "invalid output length"),
        }
    }
}
