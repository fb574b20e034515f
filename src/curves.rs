//! Parameters of standard curves.
//!
//! Named curves are identified by `CurveId`. Each identifier carries
//! the curve model, base field prime, coefficients, prime subgroup order
//! `r` and cofactor `h`; the `order()` of the constructed `Curve` is the
//! total number of points `h*r`.
//!
//! The `toy` module defines small curves over GF(53) (and one over
//! GF(59)) which are convenient for exhaustive tests.

#![allow(non_snake_case)]

use alloc::sync::Arc;
use alloc::vec::Vec;
use num_bigint::BigUint;

use super::Error;
use super::curve::{Curve, Model};
use super::field::{parse_int, Fe, Field};
use super::ratmap::PolyIsogeny;

/// Identifier for a named curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CurveId {
    /// NIST P-256 (secp256r1).
    P256,
    /// NIST P-384 (secp384r1).
    P384,
    /// NIST P-521 (secp521r1).
    P521,
    /// secp256k1 (SEC 2).
    Secp256k1,
    /// Curve 3-isogenous to secp256k1, with non-zero `A` and `B`; this
    /// is the curve on which Simplified SWU is computed for secp256k1.
    Secp256k1Iso3,
    /// Montgomery curve Curve25519 (RFC 7748).
    Curve25519,
    /// Twisted Edwards curve edwards25519 (RFC 8032).
    Edwards25519,
    /// Montgomery curve Curve448 (RFC 7748).
    Curve448,
    /// Edwards curve edwards448 (RFC 8032).
    Edwards448,
}

// Curve parameters. For twisted Edwards curves, 'b' contains the
// coefficient D.
struct CurveParams {
    name: &'static str,
    field: &'static str,
    p: &'static str,
    model: Model,
    a: &'static str,
    b: &'static str,
    r: &'static str,
    h: u32,
}

const P256_P: &str = "0xffffffff00000001000000000000000000000000ffffffffffffffffffffffff";
const P384_P: &str = "0xfffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000ffffffff";
const P521_P: &str = "0x1ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff";
const SECP256K1_P: &str = "0xfffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f";
const P25519_P: &str = "0x7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffed";
const P448_P: &str = "0xfffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffffffffffffffffffffffffffffffffffffffffffffffffffff";

const SECP256K1_R: &str = "0xfffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141";
const R25519: &str = "0x1000000000000000000000000000000014def9dea2f79cd65812631a5cf5d3ed";
const R448: &str = "0x3fffffffffffffffffffffffffffffffffffffffffffffffffffffff7cca23e9c44edb49aed63690216cc2728dc58f552378c292ab5844f3";

impl CurveId {

    /// All named curves.
    pub const ALL: [CurveId; 9] = [
        CurveId::P256, CurveId::P384, CurveId::P521,
        CurveId::Secp256k1, CurveId::Secp256k1Iso3,
        CurveId::Curve25519, CurveId::Edwards25519,
        CurveId::Curve448, CurveId::Edwards448,
    ];

    fn params(self) -> CurveParams {
        match self {
            CurveId::P256 => CurveParams {
                name: "P256", field: "P256", p: P256_P,
                model: Model::Weierstrass,
                a: "-3",
                b: "0x5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b",
                r: "0xffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551",
                h: 1,
            },
            CurveId::P384 => CurveParams {
                name: "P384", field: "P384", p: P384_P,
                model: Model::Weierstrass,
                a: "-3",
                b: "0xb3312fa7e23ee7e4988e056be3f82d19181d9c6efe8141120314088f5013875ac656398d8a2ed19d2a85c8edd3ec2aef",
                r: "0xffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf581a0db248b0a77aecec196accc52973",
                h: 1,
            },
            CurveId::P521 => CurveParams {
                name: "P521", field: "P521", p: P521_P,
                model: Model::Weierstrass,
                a: "-3",
                b: "0x51953eb9618e1c9a1f929a21a0b68540eea2da725b99b315f3b8b489918ef109e156193951ec7e937b1652c0bd3bb1bf073573df883d2c34f1ef451fd46b503f00",
                r: "0x1fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffa51868783bf2f966b7fcc0148f709a5d03bb5c9b8899c47aebb6fb71e91386409",
                h: 1,
            },
            CurveId::Secp256k1 => CurveParams {
                name: "secp256k1", field: "secp256k1", p: SECP256K1_P,
                model: Model::Weierstrass,
                a: "0",
                b: "7",
                r: SECP256K1_R,
                h: 1,
            },
            CurveId::Secp256k1Iso3 => CurveParams {
                name: "secp256k1-3iso", field: "secp256k1", p: SECP256K1_P,
                model: Model::Weierstrass,
                a: "0x3f8731abdd661adca08a5558f0f5d272e953d363cb6f0e5d405447c01a444533",
                b: "1771",
                r: SECP256K1_R,
                h: 1,
            },
            CurveId::Curve25519 => CurveParams {
                name: "curve25519", field: "2^255-19", p: P25519_P,
                model: Model::Montgomery,
                a: "486662",
                b: "1",
                r: R25519,
                h: 8,
            },
            CurveId::Edwards25519 => CurveParams {
                name: "edwards25519", field: "2^255-19", p: P25519_P,
                model: Model::Edwards,
                a: "-1",
                b: "0x52036cee2b6ffe738cc740797779e89800700a4d4141d8ab75eb4dca135978a3",
                r: R25519,
                h: 8,
            },
            CurveId::Curve448 => CurveParams {
                name: "curve448", field: "2^448-2^224-1", p: P448_P,
                model: Model::Montgomery,
                a: "156326",
                b: "1",
                r: R448,
                h: 4,
            },
            CurveId::Edwards448 => CurveParams {
                name: "edwards448", field: "2^448-2^224-1", p: P448_P,
                model: Model::Edwards,
                a: "1",
                b: "-39081",
                r: R448,
                h: 4,
            },
        }
    }

    /// Get the curve name, as used in suite identifiers.
    pub fn name(self) -> &'static str {
        self.params().name
    }

    /// Find a named curve from its name.
    pub fn from_name(name: &str) -> Option<Self> {
        CurveId::ALL.iter().copied().find(|c| c.name() == name)
    }

    /// Build the base field of this curve.
    pub fn field(self) -> Result<Arc<Field>, Error> {
        let cp = self.params();
        Ok(Arc::new(Field::from_modulus_str(cp.field, cp.p, 1)?))
    }

    /// Build this curve, over a newly constructed field.
    pub fn curve(self) -> Result<Arc<Curve>, Error> {
        self.curve_over(&self.field()?)
    }

    /// Build this curve over an existing field; the field must have the
    /// right modulus and be a prime field.
    pub fn curve_over(self, F: &Arc<Field>) -> Result<Arc<Curve>, Error> {
        let cp = self.params();
        let (_, p) = parse_int(cp.p)?;
        if F.degree() != 1 || *F.modulus() != p {
            return Err(Error::CurveMismatch);
        }
        let a = F.from_str(cp.a)?;
        let b = F.from_str(cp.b)?;
        let (_, r) = parse_int(cp.r)?;
        let h = BigUint::from(cp.h);
        let order = &r * &h;
        let E = match cp.model {
            Model::Weierstrass => Curve::weierstrass(cp.name, F, a, b, order, h)?,
            Model::WeierstrassC => Curve::weierstrass_c(cp.name, F, a, b, order, h)?,
            Model::Montgomery => Curve::montgomery(cp.name, F, a, b, order, h)?,
            Model::Edwards => Curve::edwards_complete(cp.name, F, a, b, order, h)?,
        };
        Ok(E)
    }
}

fn parse_all(F: &Field, v: &[&str]) -> Result<Vec<Fe>, Error> {
    v.iter().map(|s| F.from_str(s)).collect()
}

/// Build the 3-isogeny from `Secp256k1Iso3` to `Secp256k1`, with both
/// curves over a newly constructed field.
pub fn secp256k1_isogeny() -> Result<PolyIsogeny, Error> {
    let F = CurveId::Secp256k1.field()?;
    let E1 = CurveId::Secp256k1Iso3.curve_over(&F)?;
    let E2 = CurveId::Secp256k1.curve_over(&F)?;
    let xnum = parse_all(&F, &[
        "0x8e38e38e38e38e38e38e38e38e38e38e38e38e38e38e38e38e38e38daaaaa8c7",
        "0x07d3d4c80bc321d5b9f315cea7fd44c5d595d2fc0bf63b92dfff1044f17c6581",
        "0x534c328d23f234e6e2a413deca25caece4506144037c40314ecbd0b53d9dd262",
        "0x8e38e38e38e38e38e38e38e38e38e38e38e38e38e38e38e38e38e38daaaaa88c",
    ])?;
    let xden = parse_all(&F, &[
        "0xd35771193d94918a9ca34ccbb7b640dd86cd409542f8487d9fe6b745781eb49b",
        "0xedadc6f64383dc1df7c4b2d51b54225406d36b641f5e41bbc52a56612a8c6d14",
        "1",
    ])?;
    let ynum = parse_all(&F, &[
        "0x4bda12f684bda12f684bda12f684bda12f684bda12f684bda12f684b8e38e23c",
        "0xc75e0c32d5cb7c0fa9d0a54b12a0a6d5647ab046d686da6fdffc90fc201d71a3",
        "0x29a6194691f91a73715209ef6512e576722830a201be2018a765e85a9ecee931",
        "0x2f684bda12f684bda12f684bda12f684bda12f684bda12f684bda12f38e38d84",
    ])?;
    let yden = parse_all(&F, &[
        "0xfffffffffffffffffffffffffffffffffffffffffffffffffffffffefffff93b",
        "0x7a06534bb8bdb49fd5e9e6632722c2989467c1bfc8e8d978dfb425d2685c2573",
        "0x6484aa716545ca2cf3a70c3fa8fe337e0a3d21162f0d6299a7bf8192bfd2a76f",
        "1",
    ])?;
    PolyIsogeny::new(&E1, &E2, xnum, xden, ynum, yden)
}

/// Small curves for tests and experiments.
///
/// Unless specified otherwise, the curves are defined over GF(53).
pub mod toy {

    use alloc::sync::Arc;
    use num_bigint::BigUint;

    use crate::Error;
    use crate::curve::Curve;
    use crate::field::Field;

    fn gf(p: u32) -> Result<Arc<Field>, Error> {
        Ok(Arc::new(Field::new("toy", BigUint::from(p), 1)?))
    }

    fn n(x: u32) -> BigUint {
        BigUint::from(x)
    }

    /// `W0: y^2 = x^3 + 3*x + 2` (51 points, cofactor 3).
    pub fn w0() -> Result<Arc<Curve>, Error> {
        let F = gf(53)?;
        Curve::weierstrass("W0", &F, F.from_u64(3), F.from_u64(2), n(51), n(3))
    }

    /// `W1: y^2 = x^3 + 1`, supersingular (54 points, cofactor 2).
    pub fn w1() -> Result<Arc<Curve>, Error> {
        let F = gf(53)?;
        Curve::weierstrass("W1", &F, F.zero(), F.one(), n(54), n(2))
    }

    /// `W1iso: y^2 = x^3 + 38*x + 22` (54 points, cofactor 2).
    pub fn w1_iso() -> Result<Arc<Curve>, Error> {
        let F = gf(53)?;
        Curve::weierstrass("W1iso", &F, F.from_u64(38), F.from_u64(22),
            n(54), n(2))
    }

    /// `WC0: y^2 = x^3 + 2*x^2 + 40*x` (44 points, cofactor 4); this is
    /// the image of `E0` by the generic Edwards to Weierstrass-C map.
    pub fn wc0() -> Result<Arc<Curve>, Error> {
        let F = gf(53)?;
        Curve::weierstrass_c("WC0", &F, F.from_u64(2), F.from_u64(40),
            n(44), n(4))
    }

    /// `M0: 3*y^2 = x^3 + 4*x^2 + x` (44 points, cofactor 4).
    pub fn m0() -> Result<Arc<Curve>, Error> {
        let F = gf(53)?;
        Curve::montgomery("M0", &F, F.from_u64(4), F.from_u64(3), n(44), n(4))
    }

    /// `E0: x^2 + y^2 = 1 + 3*x^2*y^2` (44 points, cofactor 4); the
    /// addition law is complete.
    pub fn e0() -> Result<Arc<Curve>, Error> {
        let F = gf(53)?;
        Curve::edwards("E0", &F, F.one(), F.from_u64(3), n(44), n(4))
    }

    /// `M59: y^2 = x^3 + x` over GF(59) (60 points, cofactor 12).
    pub fn m59() -> Result<Arc<Curve>, Error> {
        let F = gf(59)?;
        Curve::montgomery("M59", &F, F.zero(), F.one(), n(60), n(12))
    }
}

#[cfg(test)]
mod tests {

    use super::{CurveId, toy};
    use crate::Error;
    use crate::curve::Model;
    use num_bigint::BigUint;
    use num_traits::One;

    // Conventional generators, for curves that define one.
    static GENERATORS: [(CurveId, &str, &str); 6] = [
        (CurveId::P256,
            "0x6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296",
            "0x4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"),
        (CurveId::P384,
            "0xaa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a385502f25dbf55296c3a545e3872760ab7",
            "0x3617de4a96262c6f5d9e98bf9292dc29f8f41dbd289a147ce9da3113b5f0b8c00a60b1ce1d7e819d7a431d7c90ea0e5f"),
        (CurveId::P521,
            "0xc6858e06b70404e9cd9e3ecb662395b4429c648139053fb521f828af606b4d3dbaa14b5e77efe75928fe1dc127a2ffa8de3348b3c1856a429bf97e7e31c2e5bd66",
            "0x11839296a789a3bc0045c8a5fb42c7d1bd998f54449579b446817afbd17273e662c97ee72995ef42640c550b9013fad0761353c7086a272c24088be94769fd16650"),
        (CurveId::Secp256k1,
            "0x79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
            "0x483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"),
        (CurveId::Edwards25519,
            "0x216936d3cd6e53fec0a4e231fdd6dc5c692cc7609525a7b2c9562d608f25d51a",
            "0x6666666666666666666666666666666666666666666666666666666666666658"),
        (CurveId::Edwards448,
            "0x4f1970c66bed0ded221d15a622bf36da9e146570470f1767ea6de324a3d3a46412ae1af72ab66511433b80e18b00938e2626a82bc70cc05e",
            "0x693f46716eb6bc248876203756c9c7624bea73736ca3984087789c1e05a0c2d73ad3ff1ce67c39c4fdbd132c4ed7c8ad9808795bf230fa14"),
    ];

    #[test]
    fn named_curves() {
        for id in CurveId::ALL.iter() {
            let E = id.curve().unwrap();
            assert!(E.name() == id.name());
            assert!(CurveId::from_name(id.name()) == Some(*id));
            assert!(E.field().degree() == 1);
        }
        assert!(CurveId::from_name("P257").is_none());
        assert!(CurveId::Edwards25519.curve().unwrap().is_complete());
        assert!(CurveId::Curve448.curve().unwrap().model() == Model::Montgomery);
    }

    #[test]
    fn generators() {
        for (id, gx, gy) in GENERATORS.iter() {
            let E = id.curve().unwrap();
            let F = E.field();
            let G = E.new_point(F.from_str(gx).unwrap(), F.from_str(gy).unwrap())
                .unwrap();
            assert!(E.isneutral(&E.mul(&G, &E.subgroup_order())) == 0xFFFFFFFF);
            assert!(E.isneutral(&E.clear_cofactor(&G)) == 0);
        }
    }

    #[test]
    fn curve25519_generator() {
        let E = CurveId::Curve25519.curve().unwrap();
        let F = E.field();
        let G = E.new_point(F.from_u64(9),
            F.from_str("0x20ae19a1b8a086b4e01edd2c7748d14c923d4d7e6d7c61b229e9c5a27eced3d9").unwrap())
            .unwrap();
        assert!(E.isneutral(&E.mul(&G, &E.subgroup_order())) == 0xFFFFFFFF);
    }

    #[test]
    fn shared_field() {
        let F = CurveId::Curve25519.field().unwrap();
        let M = CurveId::Curve25519.curve_over(&F).unwrap();
        let E = CurveId::Edwards25519.curve_over(&F).unwrap();
        assert!(M.field().same_as(E.field()));
        assert!(M.id() != E.id());
        assert!(CurveId::P256.curve_over(&F).unwrap_err() == Error::CurveMismatch);
    }

    #[test]
    fn subgroup_orders() {
        let bits: [(CurveId, u64); 9] = [
            (CurveId::P256, 256), (CurveId::P384, 384), (CurveId::P521, 521),
            (CurveId::Secp256k1, 256), (CurveId::Secp256k1Iso3, 256),
            (CurveId::Curve25519, 253), (CurveId::Edwards25519, 253),
            (CurveId::Curve448, 446), (CurveId::Edwards448, 446),
        ];
        for (id, n) in bits.iter() {
            let E = id.curve().unwrap();
            assert!(E.subgroup_order().bits() == *n);
        }
        let E = CurveId::P521.curve().unwrap();
        let r = E.subgroup_order();
        assert!(r.to_str_radix(16).ends_with(
            "fa51868783bf2f966b7fcc0148f709a5d03bb5c9b8899c47aebb6fb71e91386409"));
        assert!(r < *E.field().modulus());
    }

    #[test]
    fn toy_curves() {
        for E in [toy::w0(), toy::w1(), toy::w1_iso(), toy::wc0(),
            toy::m0(), toy::e0(), toy::m59()].iter()
        {
            let E = E.as_ref().unwrap();
            let F = E.field();
            // Count the points by brute force.
            let mut n = if E.model() == Model::Edwards { 0u32 } else { 1u32 };
            let p = F.modulus().to_u64_digits()[0];
            for x in 0..p {
                for y in 0..p {
                    if E.new_point(F.from_u64(x), F.from_u64(y)).is_ok() {
                        n += 1;
                    }
                }
            }
            assert!(BigUint::from(n) == *E.order());
            assert!(!E.cofactor().is_one());
        }
    }
}
