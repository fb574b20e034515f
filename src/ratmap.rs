//! Rational maps and isogenies between curves.
//!
//! An `Isogeny` maps points of its domain curve onto its codomain curve
//! (`push()`), preserving the group law. A `RationalMap` is a birational
//! equivalence (an isogeny of degree 1) that can also be evaluated in the
//! reverse direction (`pull()`), with `pull(push(P)) = P` for all points
//! `P` of the domain, the neutral element included.
//!
//! The maps implemented here are:
//!
//!  - `MontgomeryToWeierstrassC`: `(x, y) -> (x/B, y/B)`
//!  - `EdwardsToWeierstrassC`: generic map from a twisted Edwards curve
//!  - `WeierstrassCToWeierstrass`: `(x, y) -> (x + A/3, y)`
//!  - `EdwardsToMontgomery`: twisted Edwards to Montgomery, with a
//!    scaling constant (this is the edwards25519/curve25519 equivalence)
//!  - `PolyIsogeny`: an isogeny given by the coefficients of its
//!    rational functions (e.g. the 3-isogeny used for secp256k1)
//!  - `Curve448ToEdwards448` and `Edwards448ToCurve448`: the 4-isogenies
//!    of RFC 7748 (their composition is the multiplication by 4)
//!
//! Exceptional inputs (points whose image would require a division by
//! zero) are mapped to the neutral element of the target curve.

// Points are traditionally named with uppercase letters.
#![allow(non_snake_case)]

use alloc::format;
use alloc::sync::Arc;
use alloc::vec::Vec;
use tracing::{debug, warn};

use super::Error;
use super::curve::{Curve, Model, Point};
use super::field::{Fe, Sgn0};

/// A group morphism from a domain curve onto a codomain curve.
pub trait Isogeny: Send + Sync {

    /// Get the domain curve.
    fn domain(&self) -> &Arc<Curve>;

    /// Get the codomain curve.
    fn codomain(&self) -> &Arc<Curve>;

    /// Map a point of the domain onto the codomain.
    fn push(&self, P: &Point) -> Point;
}

/// A birational equivalence between two curves.
pub trait RationalMap: Isogeny {

    /// Map a point of the codomain back onto the domain.
    fn pull(&self, P: &Point) -> Point;
}

// Check the model of a curve used as a map endpoint.
fn expect_model(E: &Curve, model: Model) -> Result<(), Error> {
    if E.model() != model {
        warn!(curve = E.name(), "unexpected curve model for rational map");
        return Err(Error::WrongModel);
    }
    Ok(())
}

/// Map from the Montgomery curve `B*y^2 = x^3 + A*x^2 + x` to the curve
/// `y^2 = x^3 + (A/B)*x^2 + (1/B^2)*x`.
#[derive(Debug)]
pub struct MontgomeryToWeierstrassC {
    domain: Arc<Curve>,
    codomain: Arc<Curve>,
    inv_b: Fe,
}

impl MontgomeryToWeierstrassC {

    /// Create the map; the Weierstrass-C codomain curve is built here.
    pub fn new(M: &Arc<Curve>) -> Result<Self, Error> {
        expect_model(M, Model::Montgomery)?;
        let F = M.field();
        let inv_b = F.inv(M.b())?;
        let W = Curve::weierstrass_c(&format!("{}-WC", M.name()), F,
            F.mul(M.a(), &inv_b), F.square(&inv_b),
            M.order().clone(), M.cofactor().clone())?;
        debug!(domain = M.name(), codomain = W.name(), "rational map");
        Ok(Self { domain: Arc::clone(M), codomain: W, inv_b })
    }
}

impl Isogeny for MontgomeryToWeierstrassC {

    fn domain(&self) -> &Arc<Curve> {
        &self.domain
    }

    fn codomain(&self) -> &Arc<Curve> {
        &self.codomain
    }

    fn push(&self, P: &Point) -> Point {
        let (x, y) = match P.coordinates() {
            None => return self.codomain.identity(),
            Some(v) => v,
        };
        let F = self.domain.field();
        self.codomain.point_unchecked(F.mul(x, &self.inv_b), F.mul(y, &self.inv_b))
    }
}

impl RationalMap for MontgomeryToWeierstrassC {

    fn pull(&self, P: &Point) -> Point {
        let (s, t) = match P.coordinates() {
            None => return self.domain.identity(),
            Some(v) => v,
        };
        let F = self.domain.field();
        let B = self.domain.b();
        self.domain.point_unchecked(F.mul(s, B), F.mul(t, B))
    }
}

/// Map from the twisted Edwards curve `a*x^2 + y^2 = 1 + d*x^2*y^2` to
/// the curve `y^2 = x^3 + A'*x^2 + B'*x` with `A' = (a+d)/2` and
/// `B' = ((a-d)/4)^2`.
///
/// With `k = 4/(a-d)`, the map is `s = (1+y)/(k*(1-y))`, `t = s/x`; the
/// inverse is `x = s/t`, `y = (k*s-1)/(k*s+1)`. The order-2 point `(0,-1)`
/// maps to `(0,0)`.
#[derive(Debug)]
pub struct EdwardsToWeierstrassC {
    domain: Arc<Curve>,
    codomain: Arc<Curve>,
    k: Fe,
}

impl EdwardsToWeierstrassC {

    /// Create the map; the Weierstrass-C codomain curve is built here.
    pub fn new(E: &Arc<Curve>) -> Result<Self, Error> {
        expect_model(E, Model::Edwards)?;
        let F = E.field();
        let amd = F.sub(E.a(), E.d());
        let k = F.mul_small(&F.inv(&amd)?, 4);
        let A = F.mul(&F.add(E.a(), E.d()), &F.inv(&F.from_u64(2))?);
        let B = F.square(&F.mul(&amd, &F.inv(&F.from_u64(4))?));
        let W = Curve::weierstrass_c(&format!("{}-WC", E.name()), F, A, B,
            E.order().clone(), E.cofactor().clone())?;
        debug!(domain = E.name(), codomain = W.name(), "rational map");
        Ok(Self { domain: Arc::clone(E), codomain: W, k })
    }
}

impl Isogeny for EdwardsToWeierstrassC {

    fn domain(&self) -> &Arc<Curve> {
        &self.domain
    }

    fn codomain(&self) -> &Arc<Curve> {
        &self.codomain
    }

    fn push(&self, P: &Point) -> Point {
        if self.domain.isneutral(P) != 0 {
            return self.codomain.identity();
        }
        let F = self.domain.field();
        let (x, y) = match P.coordinates() {
            Some(v) => v,
            None => return self.codomain.identity(),
        };
        let s = F.mul(&F.add(&F.one(), y),
            &F.inv0(&F.mul(&self.k, &F.sub(&F.one(), y))));
        let t = F.mul(&s, &F.inv0(x));
        self.codomain.point_unchecked(s, t)
    }
}

impl RationalMap for EdwardsToWeierstrassC {

    fn pull(&self, P: &Point) -> Point {
        let (s, t) = match P.coordinates() {
            None => return self.domain.identity(),
            Some(v) => v,
        };
        let F = self.domain.field();
        let ks = F.mul(&self.k, s);
        let den = F.add(&ks, &F.one());
        // Points with t = 0 other than (0,0), and points with k*s = -1,
        // would map to points at infinity of the Edwards curve; these do
        // not exist when the curve is complete.
        if (F.iszero(&den) | (F.iszero(t) & !F.iszero(s))) != 0 {
            return self.domain.identity();
        }
        let x = F.mul(s, &F.inv0(t));
        let y = F.mul(&F.sub(&ks, &F.one()), &F.inv0(&den));
        self.domain.point_unchecked(x, y)
    }
}

/// Map from the curve `y^2 = x^3 + A*x^2 + B*x` to the short
/// Weierstrass curve `y^2 = x^3 + a*x + b` with `a = B - A^2/3` and
/// `b = A*(2*A^2 - 9*B)/27`.
#[derive(Debug)]
pub struct WeierstrassCToWeierstrass {
    domain: Arc<Curve>,
    codomain: Arc<Curve>,
    // A/3
    a3: Fe,
}

impl WeierstrassCToWeierstrass {

    /// Create the map; the short Weierstrass codomain curve is built here.
    pub fn new(C: &Arc<Curve>) -> Result<Self, Error> {
        expect_model(C, Model::WeierstrassC)?;
        let F = C.field();
        let (A, B) = (C.a(), C.b());
        let a3 = F.div(A, &F.from_u64(3))?;
        let A2 = F.square(A);
        let a = F.sub(B, &F.mul(&A2, &F.inv(&F.from_u64(3))?));
        let b = F.div(&F.mul(A, &F.sub(&F.mul_small(&A2, 2), &F.mul_small(B, 9))),
            &F.from_u64(27))?;
        let W = Curve::weierstrass(&format!("{}-W", C.name()), F, a, b,
            C.order().clone(), C.cofactor().clone())?;
        debug!(domain = C.name(), codomain = W.name(), "rational map");
        Ok(Self { domain: Arc::clone(C), codomain: W, a3 })
    }
}

impl Isogeny for WeierstrassCToWeierstrass {

    fn domain(&self) -> &Arc<Curve> {
        &self.domain
    }

    fn codomain(&self) -> &Arc<Curve> {
        &self.codomain
    }

    fn push(&self, P: &Point) -> Point {
        let (s, t) = match P.coordinates() {
            None => return self.codomain.identity(),
            Some(v) => v,
        };
        let F = self.domain.field();
        self.codomain.point_unchecked(F.add(s, &self.a3), t.clone())
    }
}

impl RationalMap for WeierstrassCToWeierstrass {

    fn pull(&self, P: &Point) -> Point {
        let (x, y) = match P.coordinates() {
            None => return self.domain.identity(),
            Some(v) => v,
        };
        let F = self.domain.field();
        self.domain.point_unchecked(F.sub(x, &self.a3), y.clone())
    }
}

/// Birational map from the twisted Edwards curve
/// `a*x^2 + y^2 = 1 + d*x^2*y^2` to the Montgomery curve
/// `B*v^2 = u^3 + A*u^2 + u`, with `A = 2*(a+d)/(a-d)`:
///
/// ```text
///   u = (1+y)/(1-y)        x = c*u/v
///   v = c*u/x              y = (u-1)/(u+1)
/// ```
///
/// where `c` is the square root of `4/((a-d)*B)` whose sign is 1. For
/// edwards25519 and curve25519, `c = sqrt(-486664)`.
#[derive(Debug)]
pub struct EdwardsToMontgomery {
    domain: Arc<Curve>,
    codomain: Arc<Curve>,
    c: Fe,
}

impl EdwardsToMontgomery {

    /// Create the map between two existing curves. The curves must be
    /// defined over the same field, with matching coefficients.
    pub fn new(E: &Arc<Curve>, M: &Arc<Curve>, sgn0: Sgn0)
        -> Result<Self, Error>
    {
        expect_model(E, Model::Edwards)?;
        expect_model(M, Model::Montgomery)?;
        if !E.field().same_as(M.field()) {
            return Err(Error::CurveMismatch);
        }
        let F = E.field();
        let amd = F.sub(E.a(), E.d());
        let A = F.div(&F.mul_small(&F.add(E.a(), E.d()), 2), &amd)?;
        if F.equals(&A, M.a()) == 0 {
            warn!(domain = E.name(), codomain = M.name(),
                "Montgomery coefficient A does not match the Edwards curve");
            return Err(Error::CurveMismatch);
        }
        let c2 = F.div(&F.from_u64(4), &F.mul(&amd, M.b()))?;
        if F.is_square(&c2) == 0 {
            warn!(domain = E.name(), codomain = M.name(),
                "Montgomery coefficient B is not a valid scaling");
            return Err(Error::CurveMismatch);
        }
        let mut c = F.sqrt(&c2);
        if F.sgn0(&c, sgn0) < 0 {
            c = F.neg(&c);
        }
        debug!(domain = E.name(), codomain = M.name(), "rational map");
        Ok(Self { domain: Arc::clone(E), codomain: Arc::clone(M), c })
    }

    /// Get the scaling constant `c`.
    pub fn scaling(&self) -> &Fe {
        &self.c
    }
}

impl Isogeny for EdwardsToMontgomery {

    fn domain(&self) -> &Arc<Curve> {
        &self.domain
    }

    fn codomain(&self) -> &Arc<Curve> {
        &self.codomain
    }

    fn push(&self, P: &Point) -> Point {
        if self.domain.isneutral(P) != 0 {
            return self.codomain.identity();
        }
        let F = self.domain.field();
        let (x, y) = match P.coordinates() {
            Some(v) => v,
            None => return self.codomain.identity(),
        };
        let u = F.mul(&F.add(&F.one(), y), &F.inv0(&F.sub(&F.one(), y)));
        let v = F.mul(&F.mul(&self.c, &u), &F.inv0(x));
        self.codomain.point_unchecked(u, v)
    }
}

impl RationalMap for EdwardsToMontgomery {

    fn pull(&self, P: &Point) -> Point {
        let (u, v) = match P.coordinates() {
            None => return self.domain.identity(),
            Some(v) => v,
        };
        let F = self.domain.field();
        let den = F.add(u, &F.one());
        // u = -1, and 2-torsion points other than (0,0), have no affine
        // image on a complete Edwards curve.
        if (F.iszero(&den) | (F.iszero(v) & !F.iszero(u))) != 0 {
            return self.domain.identity();
        }
        let x = F.mul(&F.mul(&self.c, u), &F.inv0(v));
        let y = F.mul(&F.sub(u, &F.one()), &F.inv0(&den));
        self.domain.point_unchecked(x, y)
    }
}

/// An isogeny onto a short Weierstrass curve, defined by its rational
/// functions:
///
/// ```text
///   x' = xnum(x) / xden(x)
///   y' = y * ynum(x) / yden(x)
/// ```
///
/// Polynomial coefficients are provided in increasing degree order.
/// Points in the kernel (zero denominator) map to the point at infinity.
#[derive(Debug)]
pub struct PolyIsogeny {
    domain: Arc<Curve>,
    codomain: Arc<Curve>,
    xnum: Vec<Fe>,
    xden: Vec<Fe>,
    ynum: Vec<Fe>,
    yden: Vec<Fe>,
}

impl PolyIsogeny {

    /// Create the isogeny. Both curves must be short Weierstrass
    /// curves over the same field, and all polynomials non-empty.
    pub fn new(domain: &Arc<Curve>, codomain: &Arc<Curve>,
        xnum: Vec<Fe>, xden: Vec<Fe>, ynum: Vec<Fe>, yden: Vec<Fe>)
        -> Result<Self, Error>
    {
        expect_model(domain, Model::Weierstrass)?;
        expect_model(codomain, Model::Weierstrass)?;
        if !domain.field().same_as(codomain.field()) {
            return Err(Error::CurveMismatch);
        }
        if xnum.is_empty() || xden.is_empty() || ynum.is_empty() || yden.is_empty() {
            return Err(Error::InvalidConstant);
        }
        debug!(domain = domain.name(), codomain = codomain.name(),
            degree = xnum.len() - 1, "isogeny");
        Ok(Self {
            domain: Arc::clone(domain),
            codomain: Arc::clone(codomain),
            xnum, xden, ynum, yden,
        })
    }

    // Horner evaluation of a polynomial.
    fn eval(&self, c: &[Fe], x: &Fe) -> Fe {
        let F = self.domain.field();
        let mut r = F.zero();
        for a in c.iter().rev() {
            r = F.add(&F.mul(&r, x), a);
        }
        r
    }
}

impl Isogeny for PolyIsogeny {

    fn domain(&self) -> &Arc<Curve> {
        &self.domain
    }

    fn codomain(&self) -> &Arc<Curve> {
        &self.codomain
    }

    fn push(&self, P: &Point) -> Point {
        let (x, y) = match P.coordinates() {
            None => return self.codomain.identity(),
            Some(v) => v,
        };
        let F = self.domain.field();
        let xd = self.eval(&self.xden, x);
        let yd = self.eval(&self.yden, x);
        if (F.iszero(&xd) | F.iszero(&yd)) != 0 {
            return self.codomain.identity();
        }
        let x1 = F.mul(&self.eval(&self.xnum, x), &F.inv0(&xd));
        let y1 = F.mul(&F.mul(y, &self.eval(&self.ynum, x)), &F.inv0(&yd));
        self.codomain.point_unchecked(x1, y1)
    }
}

// Check that the curves are Curve448 and Edwards448, in that order.
fn check_448(M: &Curve, E: &Curve) -> Result<(), Error> {
    expect_model(M, Model::Montgomery)?;
    expect_model(E, Model::Edwards)?;
    let F = M.field();
    let ok = F.same_as(E.field())
        && (F.equals(M.a(), &F.from_u64(156326))
            & F.equals(M.b(), &F.one())
            & F.equals(E.a(), &F.one())
            & F.equals(E.d(), &F.from_i64(-39081))) != 0;
    if !ok {
        warn!(montgomery = M.name(), edwards = E.name(),
            "curves are not Curve448 and Edwards448");
        return Err(Error::CurveMismatch);
    }
    Ok(())
}

/// The 4-isogeny from Curve448 to Edwards448 (RFC 7748):
///
/// ```text
///   x = 4*v*(u^2 - 1) / (u^4 - 2*u^2 + 4*v^2 + 1)
///   y = -(u^5 - 2*u^3 - 4*u*v^2 + u) / (u^5 - 2*u^2*v^2 - 2*u^3 - 2*v^2 + u)
/// ```
#[derive(Debug)]
pub struct Curve448ToEdwards448 {
    domain: Arc<Curve>,
    codomain: Arc<Curve>,
}

impl Curve448ToEdwards448 {

    /// Create the isogeny between the two provided curves.
    pub fn new(M: &Arc<Curve>, E: &Arc<Curve>) -> Result<Self, Error> {
        check_448(M, E)?;
        Ok(Self { domain: Arc::clone(M), codomain: Arc::clone(E) })
    }
}

impl Isogeny for Curve448ToEdwards448 {

    fn domain(&self) -> &Arc<Curve> {
        &self.domain
    }

    fn codomain(&self) -> &Arc<Curve> {
        &self.codomain
    }

    fn push(&self, P: &Point) -> Point {
        let (u, v) = match P.coordinates() {
            None => return self.codomain.identity(),
            Some(v) => v,
        };
        let F = self.domain.field();
        let u2 = F.square(u);
        let u3 = F.mul(&u2, u);
        let u4 = F.square(&u2);
        let u5 = F.mul(&u4, u);
        let v2 = F.square(v);
        let one = F.one();

        let xn = F.mul_small(&F.mul(v, &F.sub(&u2, &one)), 4);
        let xd = F.add(&F.add(&F.sub(&u4, &F.mul_small(&u2, 2)),
            &F.mul_small(&v2, 4)), &one);
        let t = F.sub(&u5, &F.mul_small(&u3, 2));
        let yn = F.neg(&F.add(&F.sub(&t, &F.mul_small(&F.mul(u, &v2), 4)), u));
        let yd = F.add(&F.sub(&F.sub(&t, &F.mul_small(&F.mul(&u2, &v2), 2)),
            &F.mul_small(&v2, 2)), u);
        if (F.iszero(&xd) | F.iszero(&yd)) != 0 {
            return self.codomain.identity();
        }
        let x = F.mul(&xn, &F.inv0(&xd));
        let y = F.mul(&yn, &F.inv0(&yd));
        self.codomain.point_unchecked(x, y)
    }
}

/// The 4-isogeny from Edwards448 to Curve448 (RFC 7748):
///
/// ```text
///   u = y^2/x^2
///   v = (2 - x^2 - y^2)*y/x^3
/// ```
#[derive(Debug)]
pub struct Edwards448ToCurve448 {
    domain: Arc<Curve>,
    codomain: Arc<Curve>,
}

impl Edwards448ToCurve448 {

    /// Create the isogeny between the two provided curves.
    pub fn new(E: &Arc<Curve>, M: &Arc<Curve>) -> Result<Self, Error> {
        check_448(M, E)?;
        Ok(Self { domain: Arc::clone(E), codomain: Arc::clone(M) })
    }
}

impl Isogeny for Edwards448ToCurve448 {

    fn domain(&self) -> &Arc<Curve> {
        &self.domain
    }

    fn codomain(&self) -> &Arc<Curve> {
        &self.codomain
    }

    fn push(&self, P: &Point) -> Point {
        let F = self.domain.field();
        let (x, y) = match P.coordinates() {
            Some(v) => v,
            None => return self.codomain.identity(),
        };
        // Both (0,1) and (0,-1) are in the kernel.
        if F.iszero(x) != 0 {
            return self.codomain.identity();
        }
        let x2 = F.square(x);
        let y2 = F.square(y);
        let ix = F.inv0(x);
        let ix2 = F.square(&ix);
        let u = F.mul(&y2, &ix2);
        let w = F.sub(&F.sub(&F.from_u64(2), &x2), &y2);
        let v = F.mul(&F.mul(&w, y), &F.mul(&ix2, &ix));
        self.codomain.point_unchecked(u, v)
    }
}
