//! Mappings from field elements to curve points.
//!
//! All mappings implement the `MapToCurve` trait: `map_to_curve()` is a
//! deterministic function which accepts any field element and returns a
//! point on the target curve. Output points are not uniformly
//! distributed and are not necessarily in the prime order subgroup;
//! cofactor clearing is applied by the caller (see the `suite` module).
//!
//! The following mappings are implemented:
//!
//!  - `Sswu`: Simplified Shallue-van de Woestijne-Ulas, for short
//!    Weierstrass curves with `A != 0` and `B != 0`.
//!  - `SswuAB0`: Simplified SWU on a curve isogenous to the target, then
//!    evaluation of the isogeny (for targets with `A = 0` or `B = 0`,
//!    such as secp256k1).
//!  - `Svdw`: Shallue-van de Woestijne, for any short Weierstrass curve.
//!  - `Elligator2`: for curves `y^2 = x^3 + A*x^2 + B*x` with `A != 0`,
//!    Montgomery curves and twisted Edwards curves (through rational
//!    maps or the Curve448/Edwards448 isogeny).
//!  - `Ell2A0`: Elligator 2 variant for `A = 0` and `p = 3 mod 4`.
//!  - `BonehFranklin`: for supersingular curves `y^2 = x^3 + B` with
//!    `p = 2 mod 3`.
//!
//! Each constructor verifies the mapping preconditions and returns an
//! error if they are not met. When the `Z` constant is not provided, it
//! is searched for in the sequence 1, -1, 2, -2, 3, -3...
//!
//! The per-element computations follow the straight-line formulations
//! of the hash-to-curve draft: both candidates are always computed and
//! the result is selected with `Field::cmov()`.

// Points and mapping constants use uppercase names.
#![allow(non_snake_case)]

use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;
use num_bigint::BigUint;
use num_traits::Zero;
use tracing::{debug, trace, warn};

use super::Error;
use super::curve::{Curve, Model, Point};
use super::field::{Fe, Field, Sgn0};
use super::ratmap::{Curve448ToEdwards448, EdwardsToMontgomery,
    EdwardsToWeierstrassC, Isogeny, MontgomeryToWeierstrassC, RationalMap};

/// A deterministic map from field elements to points of a curve.
pub trait MapToCurve: Send + Sync {

    /// Get the target curve.
    fn curve(&self) -> &Arc<Curve>;

    /// Map a field element to a point of the target curve.
    fn map_to_curve(&self, u: &Fe) -> Point;
}

/// Identifier for a mapping method, as used in suite identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapId {
    /// Simplified SWU (with an isogeny when needed).
    Sswu,
    /// Shallue-van de Woestijne.
    Svdw,
    /// Elligator 2 on Montgomery curves.
    Ell2,
    /// Elligator 2 on twisted Edwards curves.
    EdEll2,
    /// Boneh-Franklin.
    BonehFranklin,
}

impl MapId {

    /// Get the identifier string.
    pub fn name(self) -> &'static str {
        match self {
            MapId::Sswu => "SSWU",
            MapId::Svdw => "SVDW",
            MapId::Ell2 => "ELL2",
            MapId::EdEll2 => "EDELL2",
            MapId::BonehFranklin => "BF",
        }
    }

    /// Get the mapping method from its identifier string.
    pub fn from_name(name: &str) -> Option<Self> {
        [MapId::Sswu, MapId::Svdw, MapId::Ell2, MapId::EdEll2,
            MapId::BonehFranklin].iter().copied().find(|m| m.name() == name)
    }
}

impl fmt::Display for MapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str(self.name())
    }
}

// Upper bound on |Z| in Z searches.
const Z_SEARCH_LIMIT: i64 = 1000;

// Find the first Z in 1, -1, 2, -2... which fulfills the predicate.
fn find_z<P>(F: &Field, method: &'static str, pred: P) -> Result<Fe, Error>
    where P: Fn(&Fe) -> bool
{
    for i in 1..=Z_SEARCH_LIMIT {
        for &j in [i, -i].iter() {
            let Z = F.from_i64(j);
            let ok = pred(&Z);
            trace!(method, z = j, ok, "Z candidate");
            if ok {
                return Ok(Z);
            }
        }
    }
    warn!(method, field = F.name(), "no suitable Z found");
    Err(Error::NoSuitableZ)
}

// Fix the sign of y so that sgn0(y) = sgn0(u).
fn fix_sign(F: &Field, u: &Fe, y: &Fe, sgn0: Sgn0) -> Fe {
    F.cmov(&F.neg(y), y, F.same_sign(u, y, sgn0))
}

fn precondition(curve: &Curve, msg: &'static str) -> Error {
    warn!(curve = curve.name(), "mapping precondition: {}", msg);
    Error::MapPrecondition(msg)
}

fn expect_model(E: &Curve, model: Model) -> Result<(), Error> {
    if E.model() != model {
        warn!(curve = E.name(), model = %E.model(), "unsupported curve model for mapping");
        return Err(Error::WrongModel);
    }
    Ok(())
}

// Polynomials over the field, lowest degree first; the zero polynomial
// is the empty vector.
fn poly_trim(F: &Field, a: &mut Vec<Fe>) {
    while let Some(c) = a.last() {
        if F.iszero(c) == 0 {
            break;
        }
        a.pop();
    }
}

fn poly_rem(F: &Field, a: &[Fe], b: &[Fe]) -> Vec<Fe> {
    let mut r = a.to_vec();
    poly_trim(F, &mut r);
    let n = b.len();
    let ilc = F.inv0(&b[n - 1]);
    while r.len() >= n {
        let k = r.len() - n;
        let q = F.mul(&r[r.len() - 1], &ilc);
        for i in 0..n {
            r[k + i] = F.sub(&r[k + i], &F.mul(&q, &b[i]));
        }
        poly_trim(F, &mut r);
    }
    r
}

// Test whether x^3 + c1*x + c0 has a root in the field, by computing
// gcd(f, x^q - x) with q the field order.
fn cubic_has_root(F: &Field, c1: &Fe, c0: &Fe) -> bool {
    // Multiplication modulo f, for polynomials of degree at most 2.
    let mulmod = |a: &[Fe; 3], b: &[Fe; 3]| -> [Fe; 3] {
        let mut r = [F.zero(), F.zero(), F.zero(), F.zero(), F.zero()];
        for i in 0..3 {
            for j in 0..3 {
                r[i + j] = F.add(&r[i + j], &F.mul(&a[i], &b[j]));
            }
        }
        // x^4 = -c1*x^2 - c0*x, x^3 = -c1*x - c0
        r[2] = F.sub(&r[2], &F.mul(c1, &r[4]));
        r[1] = F.sub(&r[1], &F.mul(c0, &r[4]));
        r[1] = F.sub(&r[1], &F.mul(c1, &r[3]));
        r[0] = F.sub(&r[0], &F.mul(c0, &r[3]));
        let [r0, r1, r2, _, _] = r;
        [r0, r1, r2]
    };
    let q = F.modulus().pow(F.degree() as u32);
    let mut t = [F.one(), F.zero(), F.zero()];
    let base = [F.zero(), F.one(), F.zero()];
    for i in (0..q.bits()).rev() {
        t = mulmod(&t, &t);
        if q.bit(i) {
            t = mulmod(&t, &base);
        }
    }
    let [t0, t1, t2] = t;
    let mut a = [c0.clone(), c1.clone(), F.zero(), F.one()].to_vec();
    let mut b = [t0, F.sub(&t1, &F.one()), t2].to_vec();
    poly_trim(F, &mut b);
    while !b.is_empty() {
        let r = poly_rem(F, &a, &b);
        a = b;
        b = r;
    }
    a.len() > 1
}

// ========================================================================

/// Simplified SWU mapping for `y^2 = x^3 + A*x + B` with `A != 0` and
/// `B != 0`.
#[derive(Debug)]
pub struct Sswu {
    curve: Arc<Curve>,
    Z: Fe,
    // -B/A
    c1: Fe,
    // -1/Z
    c2: Fe,
    sgn0: Sgn0,
}

impl Sswu {

    /// Create the mapping. If `Z` is `None`, then it is searched for: the
    /// selected `Z` is the first candidate that is not a square, is not
    /// -1, such that `g(x) - Z` has no root in the field and `g(B/(Z*A))`
    /// is a square.
    pub fn new(E: &Arc<Curve>, Z: Option<Fe>, sgn0: Sgn0)
        -> Result<Self, Error>
    {
        expect_model(E, Model::Weierstrass)?;
        let F = E.field();
        if F.iszero(E.a()) != 0 {
            return Err(precondition(E, "SSWU requires A != 0"));
        }
        if F.iszero(E.b()) != 0 {
            return Err(precondition(E, "SSWU requires B != 0"));
        }
        let Z = match Z {
            Some(Z) => {
                if !Self::check_z(E, &Z) {
                    return Err(precondition(E, "invalid Z for SSWU"));
                }
                Z
            }
            None => find_z(F, "SSWU", |Z| {
                Self::check_z(E, Z)
                    && !cubic_has_root(F, E.a(), &F.sub(E.b(), Z))
            })?,
        };
        let c1 = F.neg(&F.div(E.b(), E.a())?);
        let c2 = F.neg(&F.inv(&Z)?);
        debug!(curve = E.name(), z = %Z, "SSWU mapping");
        Ok(Self { curve: Arc::clone(E), Z, c1, c2, sgn0 })
    }

    // Z is not a square, Z != -1, and g(B/(Z*A)) is a square.
    fn check_z(E: &Curve, Z: &Fe) -> bool {
        let F = E.field();
        let ZA = F.mul(Z, E.a());
        if F.iszero(&ZA) != 0 {
            return false;
        }
        let x = F.mul(E.b(), &F.inv0(&ZA));
        (!F.is_square(Z)
            & !F.equals(Z, &F.neg(&F.one()))
            & F.is_square(&E.poly(&x))) != 0
    }

    /// Get the `Z` constant.
    pub fn z(&self) -> &Fe {
        &self.Z
    }
}

impl MapToCurve for Sswu {

    fn curve(&self) -> &Arc<Curve> {
        &self.curve
    }

    fn map_to_curve(&self, u: &Fe) -> Point {
        let E = &self.curve;
        let F = E.field();
        let t1 = F.mul(&self.Z, &F.square(u));          //  Z*u^2
        let t2 = F.square(&t1);                         //  Z^2*u^4
        let x1 = F.inv0(&F.add(&t1, &t2));
        let e1 = F.iszero(&x1);
        let x1 = F.cmov(&F.add(&x1, &F.one()), &self.c2, e1);
        let x1 = F.mul(&x1, &self.c1);
        let gx1 = E.poly(&x1);
        let x2 = F.mul(&t1, &x1);
        let gx2 = F.mul(&gx1, &F.mul(&t1, &t2));        //  g(x2) = Z^3*u^6*g(x1)
        let e2 = F.is_square(&gx1);
        let x = F.cmov(&x2, &x1, e2);
        let y = F.sqrt(&F.cmov(&gx2, &gx1, e2));
        let y = fix_sign(F, u, &y, self.sgn0);
        E.point_unchecked(x, y)
    }
}

/// Simplified SWU mapping through an isogeny: SSWU is applied on the
/// isogeny domain, and the result is pushed to the codomain.
pub struct SswuAB0 {
    iso: Box<dyn Isogeny>,
    sswu: Sswu,
}

impl fmt::Debug for SswuAB0 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "SswuAB0({} -> {})",
            self.iso.domain().name(), self.iso.codomain().name())
    }
}

impl SswuAB0 {

    /// Create the mapping. The isogeny domain must fulfill the SSWU
    /// preconditions; the target curve is the isogeny codomain.
    pub fn new(iso: Box<dyn Isogeny>, Z: Option<Fe>, sgn0: Sgn0)
        -> Result<Self, Error>
    {
        expect_model(iso.codomain(), Model::Weierstrass)?;
        if !iso.domain().field().same_as(iso.codomain().field()) {
            return Err(Error::CurveMismatch);
        }
        let sswu = Sswu::new(iso.domain(), Z, sgn0)?;
        debug!(curve = iso.codomain().name(), iso = iso.domain().name(),
            "SSWU mapping through isogeny");
        Ok(Self { iso, sswu })
    }

    /// Get the `Z` constant (for the isogenous curve).
    pub fn z(&self) -> &Fe {
        self.sswu.z()
    }
}

impl MapToCurve for SswuAB0 {

    fn curve(&self) -> &Arc<Curve> {
        self.iso.codomain()
    }

    fn map_to_curve(&self, u: &Fe) -> Point {
        self.iso.push(&self.sswu.map_to_curve(u))
    }
}

// ========================================================================

/// Shallue-van de Woestijne mapping for `y^2 = x^3 + A*x + B`.
#[derive(Debug)]
pub struct Svdw {
    curve: Arc<Curve>,
    Z: Fe,
    // g(Z)
    c1: Fe,
    // -Z/2
    c2: Fe,
    // sqrt(-g(Z)*(3*Z^2 + 4*A)), with sgn0(c3) = 1
    c3: Fe,
    // -4*g(Z)/(3*Z^2 + 4*A)
    c4: Fe,
    sgn0: Sgn0,
}

impl Svdw {

    /// Create the mapping. If `Z` is `None`, then the first candidate
    /// that fulfills the conditions is used.
    pub fn new(E: &Arc<Curve>, Z: Option<Fe>, sgn0: Sgn0)
        -> Result<Self, Error>
    {
        expect_model(E, Model::Weierstrass)?;
        let F = E.field();
        let Z = match Z {
            Some(Z) => {
                if !Self::check_z(E, &Z) {
                    return Err(precondition(E, "invalid Z for SVDW"));
                }
                Z
            }
            None => find_z(F, "SVDW", |Z| Self::check_z(E, Z))?,
        };
        let c1 = E.poly(&Z);
        let c2 = F.neg(&F.div(&Z, &F.from_u64(2))?);
        let t = F.add(&F.mul_small(&F.square(&Z), 3), &F.mul_small(E.a(), 4));
        let mut c3 = F.sqrt(&F.neg(&F.mul(&c1, &t)));
        if F.sgn0(&c3, sgn0) < 0 {
            c3 = F.neg(&c3);
        }
        let c4 = F.neg(&F.div(&F.mul_small(&c1, 4), &t)?);
        debug!(curve = E.name(), z = %Z, "SVDW mapping");
        Ok(Self { curve: Arc::clone(E), Z, c1, c2, c3, c4, sgn0 })
    }

    // g(Z) != 0, h = -(3*Z^2 + 4*A)/(4*g(Z)) is a non-zero square,
    // and at least one of g(Z) and g(-Z/2) is a square.
    fn check_z(E: &Curve, Z: &Fe) -> bool {
        let F = E.field();
        let gz = E.poly(Z);
        if F.iszero(&gz) != 0 {
            return false;
        }
        let t = F.add(&F.mul_small(&F.square(Z), 3), &F.mul_small(E.a(), 4));
        let h = F.neg(&F.mul(&t, &F.inv0(&F.mul_small(&gz, 4))));
        if F.iszero(&h) != 0 || F.is_square(&h) == 0 {
            return false;
        }
        let z2 = F.neg(&F.mul(Z, &F.inv0(&F.from_u64(2))));
        (F.is_square(&gz) | F.is_square(&E.poly(&z2))) != 0
    }

    /// Get the `Z` constant.
    pub fn z(&self) -> &Fe {
        &self.Z
    }
}

impl MapToCurve for Svdw {

    fn curve(&self) -> &Arc<Curve> {
        &self.curve
    }

    fn map_to_curve(&self, u: &Fe) -> Point {
        let E = &self.curve;
        let F = E.field();
        let t1 = F.mul(&F.square(u), &self.c1);
        let t2 = F.add(&F.one(), &t1);
        let t1 = F.sub(&F.one(), &t1);
        let t3 = F.inv0(&F.mul(&t1, &t2));
        let t4 = F.mul(&F.mul(&F.mul(u, &t1), &t3), &self.c3);
        let x1 = F.sub(&self.c2, &t4);
        let e1 = F.is_square(&E.poly(&x1));
        let x2 = F.add(&self.c2, &t4);
        let e2 = F.is_square(&E.poly(&x2)) & !e1;
        let x3 = F.square(&F.mul(&F.square(&t2), &t3));
        let x3 = F.add(&F.mul(&x3, &self.c4), &self.Z);
        let x = F.cmov(&x3, &x1, e1);
        let x = F.cmov(&x, &x2, e2);
        let y = F.sqrt(&E.poly(&x));
        let y = fix_sign(F, u, &y, self.sgn0);
        E.point_unchecked(x, y)
    }
}

// ========================================================================

// How points computed on the Weierstrass-C curve reach the target curve.
#[derive(Debug)]
enum Route {
    // Target is the Weierstrass-C curve itself.
    Direct,
    // Montgomery target.
    Montgomery(MontgomeryToWeierstrassC),
    // Twisted Edwards target, through the generic map.
    Edwards(EdwardsToWeierstrassC),
    // Twisted Edwards target, through a birationally equivalent
    // Montgomery curve.
    EdwardsMontgomery(MontgomeryToWeierstrassC, EdwardsToMontgomery),
    // Edwards448 target, through Curve448 and the 4-isogeny.
    EdwardsIsogeny(MontgomeryToWeierstrassC, Curve448ToEdwards448),
}

/// Elligator 2 mapping.
///
/// The core computation is done on a curve `y^2 = x^3 + A*x^2 + B*x`
/// with `A != 0` and `B != 0`; Montgomery and twisted Edwards targets
/// are reached through rational maps.
#[derive(Debug)]
pub struct Elligator2 {
    curve: Arc<Curve>,
    wc: Arc<Curve>,
    route: Route,
    Z: Fe,
    sgn0: Sgn0,
}

impl Elligator2 {

    /// Create the mapping for a Weierstrass-C, Montgomery or twisted
    /// Edwards curve. Twisted Edwards curves use the generic map to the
    /// Weierstrass-C model. If `Z` is `None`, then the first non-square
    /// candidate is used.
    pub fn new(E: &Arc<Curve>, Z: Option<Fe>, sgn0: Sgn0)
        -> Result<Self, Error>
    {
        let (wc, route) = match E.model() {
            Model::WeierstrassC => (Arc::clone(E), Route::Direct),
            Model::Montgomery => {
                let r = MontgomeryToWeierstrassC::new(E)?;
                (Arc::clone(r.codomain()), Route::Montgomery(r))
            }
            Model::Edwards => {
                let r = EdwardsToWeierstrassC::new(E)?;
                (Arc::clone(r.codomain()), Route::Edwards(r))
            }
            Model::Weierstrass => {
                warn!(curve = E.name(), "Elligator 2 requires a curve with a 2-torsion point");
                return Err(Error::WrongModel);
            }
        };
        Self::finish(E, wc, route, Z, sgn0)
    }

    /// Create the mapping for a twisted Edwards curve `E`, computing on
    /// the birationally equivalent Montgomery curve `M` (this is how
    /// edwards25519 is handled, with curve25519).
    pub fn via_montgomery(E: &Arc<Curve>, M: &Arc<Curve>, Z: Option<Fe>,
        sgn0: Sgn0) -> Result<Self, Error>
    {
        let t = EdwardsToMontgomery::new(E, M, sgn0)?;
        let r = MontgomeryToWeierstrassC::new(M)?;
        let wc = Arc::clone(r.codomain());
        Self::finish(E, wc, Route::EdwardsMontgomery(r, t), Z, sgn0)
    }

    /// Create the mapping for Edwards448 (`E`), computing on Curve448
    /// (`M`) and pushing through the 4-isogeny.
    pub fn via_isogeny(E: &Arc<Curve>, M: &Arc<Curve>, Z: Option<Fe>,
        sgn0: Sgn0) -> Result<Self, Error>
    {
        let iso = Curve448ToEdwards448::new(M, E)?;
        let r = MontgomeryToWeierstrassC::new(M)?;
        let wc = Arc::clone(r.codomain());
        Self::finish(E, wc, Route::EdwardsIsogeny(r, iso), Z, sgn0)
    }

    fn finish(E: &Arc<Curve>, wc: Arc<Curve>, route: Route, Z: Option<Fe>,
        sgn0: Sgn0) -> Result<Self, Error>
    {
        let F = wc.field();
        if F.iszero(wc.a()) != 0 {
            return Err(precondition(E, "Elligator 2 requires A != 0"));
        }
        if F.iszero(wc.b()) != 0 {
            return Err(precondition(E, "Elligator 2 requires B != 0"));
        }
        let Z = match Z {
            Some(Z) => {
                if F.is_square(&Z) != 0 {
                    return Err(precondition(E, "Z for Elligator 2 must not be a square"));
                }
                Z
            }
            None => find_z(F, "ELL2", |Z| F.is_square(Z) == 0)?,
        };
        debug!(curve = E.name(), wc = wc.name(), z = %Z, "Elligator 2 mapping");
        Ok(Self { curve: Arc::clone(E), wc, route, Z, sgn0 })
    }

    /// Get the `Z` constant.
    pub fn z(&self) -> &Fe {
        &self.Z
    }

    // Elligator 2 on y^2 = x^3 + A*x^2 + B*x.
    fn map_wc(&self, u: &Fe) -> Point {
        let W = &self.wc;
        let F = W.field();
        let (A, B) = (W.a(), W.b());
        let t1 = F.mul(&self.Z, &F.square(u));
        // Z*u^2 = -1 is the exceptional case.
        let e1 = F.equals(&t1, &F.neg(&F.one()));
        let t1 = F.cmov(&t1, &F.zero(), e1);
        let x1 = F.mul(&F.neg(A), &F.inv0(&F.add(&t1, &F.one())));
        let gx1 = F.mul(&F.add(&F.mul(&F.add(&x1, A), &x1), B), &x1);
        let x2 = F.sub(&F.neg(&x1), A);
        let gx2 = F.mul(&t1, &gx1);
        let e2 = F.is_square(&gx1);
        let x = F.cmov(&x2, &x1, e2);
        let y = F.sqrt(&F.cmov(&gx2, &gx1, e2));
        let y = fix_sign(F, u, &y, self.sgn0);
        W.point_unchecked(x, y)
    }
}

impl MapToCurve for Elligator2 {

    fn curve(&self) -> &Arc<Curve> {
        &self.curve
    }

    fn map_to_curve(&self, u: &Fe) -> Point {
        let Q = self.map_wc(u);
        match &self.route {
            Route::Direct => Q,
            Route::Montgomery(r) => r.pull(&Q),
            Route::Edwards(r) => r.pull(&Q),
            Route::EdwardsMontgomery(r, t) => t.pull(&r.pull(&Q)),
            Route::EdwardsIsogeny(r, iso) => iso.push(&r.pull(&Q)),
        }
    }
}

/// Elligator 2 mapping for curves with `A = 0` (Weierstrass-C curves
/// `y^2 = x^3 + B*x`, or Montgomery curves `B*y^2 = x^3 + x`), over
/// prime fields with `p = 3 mod 4`.
#[derive(Debug)]
pub struct Ell2A0 {
    curve: Arc<Curve>,
    wc: Arc<Curve>,
    route: Option<MontgomeryToWeierstrassC>,
    sgn0: Sgn0,
}

impl Ell2A0 {

    /// Create the mapping.
    pub fn new(E: &Arc<Curve>, sgn0: Sgn0) -> Result<Self, Error> {
        let (wc, route) = match E.model() {
            Model::WeierstrassC => (Arc::clone(E), None),
            Model::Montgomery => {
                let r = MontgomeryToWeierstrassC::new(E)?;
                (Arc::clone(r.codomain()), Some(r))
            }
            _ => {
                warn!(curve = E.name(), model = %E.model(), "unsupported curve model for mapping");
                return Err(Error::WrongModel);
            }
        };
        let F = E.field();
        if F.degree() != 1 || !(F.modulus() % 4u32 == BigUint::from(3u32)) {
            return Err(precondition(E, "ell2A0 requires p = 3 mod 4"));
        }
        if F.iszero(wc.a()) == 0 {
            return Err(precondition(E, "ell2A0 requires A = 0"));
        }
        debug!(curve = E.name(), "Elligator 2 (A = 0) mapping");
        Ok(Self { curve: Arc::clone(E), wc, route, sgn0 })
    }
}

impl MapToCurve for Ell2A0 {

    fn curve(&self) -> &Arc<Curve> {
        &self.curve
    }

    fn map_to_curve(&self, u: &Fe) -> Point {
        let W = &self.wc;
        let F = W.field();
        let x1 = u.clone();
        let x2 = F.neg(&x1);
        let gx1 = F.mul(&F.add(&F.square(&x1), W.b()), &x1);
        // g is odd and -1 is not a square: if gx1 is not a square, then
        // y is a square root of -gx1 = g(-x1).
        let y = F.sqrt(&gx1);
        let e1 = F.equals(&F.square(&y), &gx1);
        let x = F.cmov(&x2, &x1, e1);
        let y = fix_sign(F, u, &y, self.sgn0);
        let Q = W.point_unchecked(x, y);
        match &self.route {
            None => Q,
            Some(r) => r.pull(&Q),
        }
    }
}

/// Boneh-Franklin mapping for supersingular curves `y^2 = x^3 + B`
/// over prime fields with `p = 2 mod 3`.
#[derive(Debug)]
pub struct BonehFranklin {
    curve: Arc<Curve>,
    // (2*p - 1)/3, the exponent for cube roots
    exp: BigUint,
}

impl BonehFranklin {

    /// Create the mapping.
    pub fn new(E: &Arc<Curve>) -> Result<Self, Error> {
        expect_model(E, Model::Weierstrass)?;
        let F = E.field();
        let p = F.modulus();
        if F.degree() != 1 || !(p % 3u32 == BigUint::from(2u32)) {
            return Err(precondition(E, "Boneh-Franklin requires p = 2 mod 3"));
        }
        if F.iszero(E.a()) == 0 {
            return Err(precondition(E, "Boneh-Franklin requires A = 0"));
        }
        if F.iszero(E.b()) != 0 {
            return Err(precondition(E, "Boneh-Franklin requires B != 0"));
        }
        let exp: BigUint = ((p << 1u32) - 1u32) / 3u32;
        debug_assert!(!exp.is_zero());
        debug!(curve = E.name(), "Boneh-Franklin mapping");
        Ok(Self { curve: Arc::clone(E), exp })
    }
}

impl MapToCurve for BonehFranklin {

    fn curve(&self) -> &Arc<Curve> {
        &self.curve
    }

    fn map_to_curve(&self, u: &Fe) -> Point {
        let E = &self.curve;
        let F = E.field();
        let x = F.pow(&F.sub(&F.square(u), E.b()), &self.exp);
        E.point_unchecked(x, u.clone())
    }
}
