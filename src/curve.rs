//! Elliptic curves and affine points.
//!
//! Four curve models are supported:
//!
//!  - `Weierstrass`: `y^2 = x^3 + A*x + B`
//!  - `WeierstrassC`: `y^2 = x^3 + A*x^2 + B*x` (used as an intermediate
//!    shape by Elligator 2 and by rational maps)
//!  - `Montgomery`: `B*y^2 = x^3 + A*x^2 + x`
//!  - `Edwards` (twisted Edwards): `A*x^2 + y^2 = 1 + D*x^2*y^2`
//!
//! The first three models share the same chord-and-tangent group law,
//! expressed over the common form `b2*y^2 = x^3 + a2*x^2 + a4*x + a6`;
//! their neutral element is the point at infinity, which has no affine
//! coordinates. Twisted Edwards curves use the unified addition formula
//! and have the affine neutral `(0, 1)`.
//!
//! Each `Curve` instance receives a unique identifier at construction,
//! and points remember the identifier of the curve that created them.
//! Two curves with the same coefficients are still distinct instances;
//! mixing points of different instances is a programming error (caught
//! by debug assertions).
//!
//! Points use affine coordinates and the addition formulas involve
//! inversions and explicit case distinctions; this is not meant for
//! constant-time computations on secret scalars.

// Points are traditionally named with uppercase letters.
#![allow(non_snake_case)]

use alloc::string::String;
use alloc::sync::Arc;
use core::fmt;
use core::sync::atomic::{AtomicUsize, Ordering};
use num_bigint::BigUint;
use num_traits::Zero;
use tracing::{debug, warn};

use super::Error;
use super::field::{Fe, Field};

/// The curve model (shape of the curve equation).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Model {
    /// Short Weierstrass: `y^2 = x^3 + A*x + B`
    Weierstrass,
    /// Weierstrass with a quadratic term: `y^2 = x^3 + A*x^2 + B*x`
    WeierstrassC,
    /// Montgomery: `B*y^2 = x^3 + A*x^2 + x`
    Montgomery,
    /// Twisted Edwards: `A*x^2 + y^2 = 1 + D*x^2*y^2`
    Edwards,
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Model::Weierstrass => "Weierstrass",
            Model::WeierstrassC => "Weierstrass-C",
            Model::Montgomery => "Montgomery",
            Model::Edwards => "twisted Edwards",
        };
        f.write_str(s)
    }
}

// Group law selector.
#[derive(Clone, Debug)]
enum Law {
    // b2*y^2 = x^3 + a2*x^2 + a4*x + a6
    Chord { b2: Fe, a2: Fe, a4: Fe, a6: Fe },
    // A*x^2 + y^2 = 1 + D*x^2*y^2
    Edwards,
}

static NEXT_CURVE_ID: AtomicUsize = AtomicUsize::new(1);

/// An elliptic curve over a finite field.
#[derive(Debug)]
pub struct Curve {
    id: usize,
    name: String,
    model: Model,
    field: Arc<Field>,
    A: Fe,
    B: Fe,
    D: Fe,
    law: Law,
    order: BigUint,
    cofactor: BigUint,
}

/// A point on a curve.
///
/// A point is either the point at infinity (neutral element of
/// Weierstrass and Montgomery curves), or a pair of affine coordinates.
/// The neutral element of a twisted Edwards curve is the affine point
/// `(0, 1)`.
#[derive(Clone, Debug)]
pub struct Point {
    curve: usize,
    xy: Option<(Fe, Fe)>,
}

impl Point {

    /// Get the affine coordinates, or `None` for the point at infinity.
    pub fn coordinates(&self) -> Option<(&Fe, &Fe)> {
        self.xy.as_ref().map(|(x, y)| (x, y))
    }

    /// Get the x coordinate, or `None` for the point at infinity.
    pub fn x(&self) -> Option<&Fe> {
        self.xy.as_ref().map(|(x, _)| x)
    }

    /// Get the y coordinate, or `None` for the point at infinity.
    pub fn y(&self) -> Option<&Fe> {
        self.xy.as_ref().map(|(_, y)| y)
    }

    /// Returns true for the point at infinity.
    ///
    /// The neutral point of a twisted Edwards curve is not at infinity;
    /// use `Curve::isneutral()` for a model-independent test.
    pub fn is_infinity(&self) -> bool {
        self.xy.is_none()
    }

    /// Get the identifier of the curve instance this point belongs to.
    pub fn curve_id(&self) -> usize {
        self.curve
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.xy {
            None => f.write_str("(inf)"),
            Some((x, y)) => write!(f, "({}, {})", x, y),
        }
    }
}

impl Curve {

    /// Create a short Weierstrass curve `y^2 = x^3 + A*x + B`.
    ///
    /// `order` is the total number of points on the curve, and
    /// `cofactor` is the cofactor of the prime order subgroup.
    pub fn weierstrass(name: &str, field: &Arc<Field>, A: Fe, B: Fe,
        order: BigUint, cofactor: BigUint) -> Result<Arc<Self>, Error>
    {
        let F = field;
        // -16*(4*A^3 + 27*B^2) != 0
        let t = F.add(&F.mul_small(&F.mul(&F.square(&A), &A), 4),
            &F.mul_small(&F.square(&B), 27));
        let disc = F.neg(&F.mul_small(&t, 16));
        if F.iszero(&disc) != 0 {
            warn!(curve = name, "singular Weierstrass curve");
            return Err(Error::SingularCurve);
        }
        let law = Law::Chord {
            b2: F.one(), a2: F.zero(), a4: A.clone(), a6: B.clone(),
        };
        Self::build(name, Model::Weierstrass, field, A, B, F.zero(), law,
            order, cofactor)
    }

    /// Create a curve `y^2 = x^3 + A*x^2 + B*x`.
    pub fn weierstrass_c(name: &str, field: &Arc<Field>, A: Fe, B: Fe,
        order: BigUint, cofactor: BigUint) -> Result<Arc<Self>, Error>
    {
        let F = field;
        // B*(A^2 - 4*B) != 0
        let t = F.mul(&B, &F.sub(&F.square(&A), &F.mul_small(&B, 4)));
        if F.iszero(&t) != 0 {
            warn!(curve = name, "singular Weierstrass-C curve");
            return Err(Error::SingularCurve);
        }
        let law = Law::Chord {
            b2: F.one(), a2: A.clone(), a4: B.clone(), a6: F.zero(),
        };
        Self::build(name, Model::WeierstrassC, field, A, B, F.zero(), law,
            order, cofactor)
    }

    /// Create a Montgomery curve `B*y^2 = x^3 + A*x^2 + x`.
    pub fn montgomery(name: &str, field: &Arc<Field>, A: Fe, B: Fe,
        order: BigUint, cofactor: BigUint) -> Result<Arc<Self>, Error>
    {
        let F = field;
        // B*(A^2 - 4) != 0
        let t = F.mul(&B, &F.sub(&F.square(&A), &F.from_u64(4)));
        if F.iszero(&t) != 0 {
            warn!(curve = name, "singular Montgomery curve");
            return Err(Error::SingularCurve);
        }
        let law = Law::Chord {
            b2: B.clone(), a2: A.clone(), a4: F.one(), a6: F.zero(),
        };
        Self::build(name, Model::Montgomery, field, A, B, F.zero(), law,
            order, cofactor)
    }

    /// Create a twisted Edwards curve `A*x^2 + y^2 = 1 + D*x^2*y^2`.
    ///
    /// The addition law is complete only if `A` is a square and `D`
    /// is not a square (see `is_complete()`); this is not enforced here.
    pub fn edwards(name: &str, field: &Arc<Field>, A: Fe, D: Fe,
        order: BigUint, cofactor: BigUint) -> Result<Arc<Self>, Error>
    {
        let F = field;
        if (F.equals(&A, &D) | F.iszero(&A) | F.iszero(&D)) != 0 {
            warn!(curve = name, "singular Edwards curve");
            return Err(Error::SingularCurve);
        }
        Self::build(name, Model::Edwards, field, A, F.zero(), D, Law::Edwards,
            order, cofactor)
    }

    /// Create a twisted Edwards curve `A*x^2 + y^2 = 1 + D*x^2*y^2` with
    /// a complete addition law; `Error::IncompleteCurve` is returned if
    /// `A` is not a square or `D` is a square.
    pub fn edwards_complete(name: &str, field: &Arc<Field>, A: Fe, D: Fe,
        order: BigUint, cofactor: BigUint) -> Result<Arc<Self>, Error>
    {
        let E = Self::edwards(name, field, A, D, order, cofactor)?;
        if !E.is_complete() {
            warn!(curve = name, "Edwards addition law is not complete");
            return Err(Error::IncompleteCurve);
        }
        Ok(E)
    }

    fn build(name: &str, model: Model, field: &Arc<Field>,
        A: Fe, B: Fe, D: Fe, law: Law, order: BigUint, cofactor: BigUint)
        -> Result<Arc<Self>, Error>
    {
        if cofactor.is_zero() || !(&order % &cofactor).is_zero() {
            warn!(curve = name, "cofactor does not divide the curve order");
            return Err(Error::InvalidConstant);
        }
        let id = NEXT_CURVE_ID.fetch_add(1, Ordering::Relaxed);
        debug!(curve = name, id, model = %model, field = field.name(),
            "curve constructed");
        Ok(Arc::new(Self {
            id,
            name: String::from(name),
            model,
            field: Arc::clone(field),
            A, B, D, law, order, cofactor,
        }))
    }

    /// Get the unique identifier of this curve instance.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Get the curve name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the curve model.
    pub fn model(&self) -> Model {
        self.model
    }

    /// Get the base field.
    pub fn field(&self) -> &Arc<Field> {
        &self.field
    }

    /// Get the `A` coefficient.
    pub fn a(&self) -> &Fe {
        &self.A
    }

    /// Get the `B` coefficient (zero for twisted Edwards curves).
    pub fn b(&self) -> &Fe {
        &self.B
    }

    /// Get the `D` coefficient (zero except for twisted Edwards curves).
    pub fn d(&self) -> &Fe {
        &self.D
    }

    /// Get the number of points on the curve.
    pub fn order(&self) -> &BigUint {
        &self.order
    }

    /// Get the cofactor.
    pub fn cofactor(&self) -> &BigUint {
        &self.cofactor
    }

    /// Get the order of the subgroup obtained after cofactor clearing.
    pub fn subgroup_order(&self) -> BigUint {
        &self.order / &self.cofactor
    }

    /// Returns true if this curve is a twisted Edwards curve whose
    /// addition law is complete (`A` is a square, `D` is not a square).
    pub fn is_complete(&self) -> bool {
        let F = &self.field;
        self.model == Model::Edwards
            && (F.is_square(&self.A) & !F.is_square(&self.D)) != 0
    }

    /// Evaluate `x^3 + a2*x^2 + a4*x + a6`, i.e. the right-hand side of
    /// the equation, for non-Edwards curves. For Weierstrass curves, this
    /// is `g(x) = x^3 + A*x + B`.
    pub(crate) fn poly(&self, x: &Fe) -> Fe {
        let F = &self.field;
        match &self.law {
            Law::Chord { a2, a4, a6, .. } => {
                // ((x + a2)*x + a4)*x + a6
                let t = F.mul(&F.add(x, a2), x);
                F.add(&F.mul(&F.add(&t, a4), x), a6)
            }
            Law::Edwards => F.zero(),
        }
    }

    /// Get the neutral element.
    pub fn identity(&self) -> Point {
        match self.law {
            Law::Chord { .. } => Point { curve: self.id, xy: None },
            Law::Edwards => Point {
                curve: self.id,
                xy: Some((self.field.zero(), self.field.one())),
            },
        }
    }

    /// Create a point from its affine coordinates. An error is returned
    /// if the coordinates do not fulfill the curve equation.
    pub fn new_point(&self, x: Fe, y: Fe) -> Result<Point, Error> {
        let P = Point { curve: self.id, xy: Some((x, y)) };
        if self.is_on_curve(&P) == 0 {
            return Err(Error::NotOnCurve);
        }
        Ok(P)
    }

    // Create a point that is known to be on the curve.
    pub(crate) fn point_unchecked(&self, x: Fe, y: Fe) -> Point {
        let P = Point { curve: self.id, xy: Some((x, y)) };
        debug_assert!(self.is_on_curve(&P) != 0);
        P
    }

    /// Test whether a point belongs to this curve instance and fulfills
    /// the curve equation; returned value is 0xFFFFFFFF on success,
    /// 0x00000000 otherwise.
    pub fn is_on_curve(&self, P: &Point) -> u32 {
        if P.curve != self.id {
            return 0;
        }
        let (x, y) = match &P.xy {
            None => return if self.model == Model::Edwards { 0 } else { 0xFFFFFFFF },
            Some((x, y)) => (x, y),
        };
        let F = &self.field;
        let (lhs, rhs) = match &self.law {
            Law::Chord { b2, .. } => (F.mul(b2, &F.square(y)), self.poly(x)),
            Law::Edwards => {
                let x2 = F.square(x);
                let y2 = F.square(y);
                (F.add(&F.mul(&self.A, &x2), &y2),
                 F.add(&F.one(), &F.mul(&self.D, &F.mul(&x2, &y2))))
            }
        };
        F.equals(&lhs, &rhs)
    }

    /// Test whether a point is the neutral element; returned value is
    /// 0xFFFFFFFF for the neutral, 0x00000000 otherwise.
    pub fn isneutral(&self, P: &Point) -> u32 {
        self.equals(P, &self.identity())
    }

    /// Compare two points; returned value is 0xFFFFFFFF if they are
    /// equal, 0x00000000 otherwise. A point that does not belong to this
    /// curve instance never compares equal.
    pub fn equals(&self, P: &Point, Q: &Point) -> u32 {
        if P.curve != self.id || Q.curve != self.id {
            return 0;
        }
        match (&P.xy, &Q.xy) {
            (None, None) => 0xFFFFFFFF,
            (Some((x1, y1)), Some((x2, y2))) => {
                let F = &self.field;
                F.equals(x1, x2) & F.equals(y1, y2)
            }
            _ => 0,
        }
    }

    /// Point negation.
    pub fn neg(&self, P: &Point) -> Point {
        let F = &self.field;
        let xy = P.xy.as_ref().map(|(x, y)| match self.law {
            Law::Chord { .. } => (x.clone(), F.neg(y)),
            Law::Edwards => (F.neg(x), y.clone()),
        });
        Point { curve: P.curve, xy }
    }

    /// Point addition.
    ///
    /// Both operands must have been obtained from this curve instance.
    /// This is checked only in debug builds; with foreign points, the
    /// output is unspecified (but still tagged with this curve).
    pub fn add(&self, P: &Point, Q: &Point) -> Point {
        debug_assert!(P.curve == self.id && Q.curve == self.id);
        match &self.law {
            Law::Chord { b2, a2, a4, .. } => self.add_chord(P, Q, b2, a2, a4),
            Law::Edwards => self.add_edwards(P, Q),
        }
    }

    /// Point subtraction.
    pub fn sub(&self, P: &Point, Q: &Point) -> Point {
        self.add(P, &self.neg(Q))
    }

    /// Point doubling.
    pub fn double(&self, P: &Point) -> Point {
        self.add(P, P)
    }

    fn add_chord(&self, P: &Point, Q: &Point, b2: &Fe, a2: &Fe, a4: &Fe)
        -> Point
    {
        let (x1, y1) = match &P.xy {
            None => return Q.clone(),
            Some(v) => v,
        };
        let (x2, y2) = match &Q.xy {
            None => return P.clone(),
            Some(v) => v,
        };
        let F = &self.field;
        let lambda = if F.equals(x1, x2) != 0 {
            if F.iszero(&F.add(y1, y2)) != 0 {
                // Q = -P (this includes doubling of a 2-torsion point).
                return self.identity();
            }
            // Tangent: (3*x^2 + 2*a2*x + a4) / (2*b2*y)
            let num = F.add(&F.mul_small(&F.square(x1), 3),
                &F.add(&F.mul_small(&F.mul(a2, x1), 2), a4));
            let den = F.mul_small(&F.mul(b2, y1), 2);
            F.mul(&num, &F.inv0(&den))
        } else {
            // Chord: (y2 - y1) / (x2 - x1)
            F.mul(&F.sub(y2, y1), &F.inv0(&F.sub(x2, x1)))
        };
        // x3 = b2*lambda^2 - a2 - x1 - x2
        // y3 = lambda*(x1 - x3) - y1
        let x3 = F.sub(&F.sub(&F.sub(&F.mul(b2, &F.square(&lambda)), a2), x1), x2);
        let y3 = F.sub(&F.mul(&lambda, &F.sub(x1, &x3)), y1);
        Point { curve: self.id, xy: Some((x3, y3)) }
    }

    fn add_edwards(&self, P: &Point, Q: &Point) -> Point {
        let F = &self.field;
        let (x1, y1, x2, y2) = match (&P.xy, &Q.xy) {
            (Some((x1, y1)), Some((x2, y2))) => (x1, y1, x2, y2),
            // Edwards points are always affine.
            _ => return self.identity(),
        };
        // x3 = (x1*y2 + x2*y1) / (1 + D*x1*x2*y1*y2)
        // y3 = (y1*y2 - A*x1*x2) / (1 - D*x1*x2*y1*y2)
        let x1x2 = F.mul(x1, x2);
        let y1y2 = F.mul(y1, y2);
        let t = F.mul(&self.D, &F.mul(&x1x2, &y1y2));
        let xn = F.add(&F.mul(x1, y2), &F.mul(x2, y1));
        let yn = F.sub(&y1y2, &F.mul(&self.A, &x1x2));
        let x3 = F.mul(&xn, &F.inv0(&F.add(&F.one(), &t)));
        let y3 = F.mul(&yn, &F.inv0(&F.sub(&F.one(), &t)));
        Point { curve: self.id, xy: Some((x3, y3)) }
    }

    /// Multiply a point by a non-negative integer (double-and-add, most
    /// significant bit first).
    pub fn mul(&self, P: &Point, k: &BigUint) -> Point {
        let mut R = self.identity();
        for i in (0..k.bits()).rev() {
            R = self.double(&R);
            if k.bit(i) {
                R = self.add(&R, P);
            }
        }
        R
    }

    /// Multiply a point by a small integer.
    pub fn mul_small(&self, P: &Point, k: u64) -> Point {
        self.mul(P, &BigUint::from(k))
    }

    /// Multiply a point by the curve cofactor.
    pub fn clear_cofactor(&self, P: &Point) -> Point {
        self.mul(P, &self.cofactor)
    }
}

#[cfg(test)]
mod tests {

    use super::{Curve, Model, Point};
    use crate::curves::toy;
    use crate::field::Field;
    use crate::{BigUint, Error};
    use alloc::sync::Arc;
    use alloc::vec::Vec;
    use num_traits::One;

    // List all points of a curve over a small field.
    fn all_points(E: &Curve) -> Vec<Point> {
        let F = E.field();
        let p = F.modulus().to_u32_digits()[0] as u64;
        let mut pts = Vec::new();
        if E.model() != Model::Edwards {
            pts.push(E.identity());
        }
        for x in 0..p {
            for y in 0..p {
                if let Ok(P) = E.new_point(F.from_u64(x), F.from_u64(y)) {
                    pts.push(P);
                }
            }
        }
        pts
    }

    fn check_group_law(E: &Curve, full_assoc: bool) {
        let pts = all_points(E);
        assert!(BigUint::from(pts.len()) == *E.order());
        let O = E.identity();
        assert!(E.is_on_curve(&O) == 0xFFFFFFFF);
        for P in pts.iter() {
            assert!(E.equals(&E.add(P, &O), P) == 0xFFFFFFFF);
            assert!(E.isneutral(&E.add(P, &E.neg(P))) == 0xFFFFFFFF);
            assert!(E.isneutral(&E.mul(P, E.order())) == 0xFFFFFFFF);
            let S = E.clear_cofactor(P);
            assert!(E.isneutral(&E.mul(&S, &E.subgroup_order())) == 0xFFFFFFFF);
            let D = E.double(P);
            assert!(E.is_on_curve(&D) == 0xFFFFFFFF);
            for Q in pts.iter() {
                let R = E.add(P, Q);
                assert!(E.is_on_curve(&R) == 0xFFFFFFFF);
                assert!(E.equals(&R, &E.add(Q, P)) == 0xFFFFFFFF);
                assert!(E.equals(&E.sub(&R, Q), P) == 0xFFFFFFFF);
            }
        }
        let step = if full_assoc { 1 } else { 7 };
        for P in pts.iter() {
            for Q in pts.iter() {
                let PQ = E.add(P, Q);
                for R in pts.iter().step_by(step) {
                    let a = E.add(&PQ, R);
                    let b = E.add(P, &E.add(Q, R));
                    assert!(E.equals(&a, &b) == 0xFFFFFFFF);
                }
            }
        }
    }

    #[test]
    fn weierstrass() {
        let E = toy::w0().unwrap();
        assert!(E.model() == Model::Weierstrass);
        check_group_law(&E, true);
        let F = E.field();
        let G = E.new_point(F.from_u64(46), F.from_u64(3)).unwrap();
        assert!(E.isneutral(&E.mul_small(&G, 51)) == 0xFFFFFFFF);
        assert!(E.isneutral(&E.mul_small(&G, 17)) == 0);
        check_group_law(&toy::w1().unwrap(), false);
    }

    #[test]
    fn weierstrass_c() {
        check_group_law(&toy::wc0().unwrap(), false);
    }

    #[test]
    fn montgomery() {
        let E = toy::m0().unwrap();
        check_group_law(&E, false);
        let F = E.field();
        // (0, 0) has order 2.
        let T = E.new_point(F.zero(), F.zero()).unwrap();
        assert!(E.isneutral(&E.double(&T)) == 0xFFFFFFFF);
    }

    #[test]
    fn edwards() {
        let E = toy::e0().unwrap();
        assert!(E.is_complete());
        check_group_law(&E, false);
        let F = E.field();
        let O = E.identity();
        assert!(!O.is_infinity());
        assert!(F.iszero(O.x().unwrap()) == 0xFFFFFFFF);
        // (0, -1) has order 2.
        let T = E.new_point(F.zero(), F.from_i64(-1)).unwrap();
        assert!(E.isneutral(&E.double(&T)) == 0xFFFFFFFF);
    }

    #[test]
    fn invalid_curves() {
        let F = Arc::new(Field::new("F53", BigUint::from(53u32), 1).unwrap());
        let one = BigUint::one();
        // 4*A^3 + 27*B^2 = 0 for A = -3, B = 2
        assert!(Curve::weierstrass("W", &F, F.from_i64(-3), F.from_u64(2),
            one.clone(), one.clone()).unwrap_err() == Error::SingularCurve);
        assert!(Curve::montgomery("M", &F, F.from_u64(2), F.one(),
            one.clone(), one.clone()).unwrap_err() == Error::SingularCurve);
        assert!(Curve::montgomery("M", &F, F.from_u64(4), F.zero(),
            one.clone(), one.clone()).unwrap_err() == Error::SingularCurve);
        assert!(Curve::weierstrass_c("WC", &F, F.from_u64(4), F.from_u64(4),
            one.clone(), one.clone()).unwrap_err() == Error::SingularCurve);
        assert!(Curve::edwards("E", &F, F.from_u64(3), F.from_u64(3),
            one.clone(), one.clone()).unwrap_err() == Error::SingularCurve);
        assert!(Curve::edwards("E", &F, F.zero(), F.from_u64(3),
            one.clone(), one.clone()).unwrap_err() == Error::SingularCurve);
        assert!(Curve::weierstrass("W", &F, F.from_u64(3), F.from_u64(2),
            BigUint::from(51u32), BigUint::from(2u32)).unwrap_err()
            == Error::InvalidConstant);
        // A = 1 (square), D = 4 (square): not complete
        let E = Curve::edwards("E", &F, F.one(), F.from_u64(4),
            BigUint::from(52u32), BigUint::from(4u32)).unwrap();
        assert!(!E.is_complete());
        assert!(Curve::edwards_complete("E", &F, F.one(), F.from_u64(4),
            BigUint::from(52u32), BigUint::from(4u32)).unwrap_err()
            == Error::IncompleteCurve);
        // A = 2 (non-square), D = 3: not complete either
        assert!(Curve::edwards_complete("E", &F, F.from_u64(2), F.from_u64(3),
            one.clone(), one.clone()).unwrap_err() == Error::IncompleteCurve);
        let E = Curve::edwards_complete("E0", &F, F.one(), F.from_u64(3),
            BigUint::from(44u32), BigUint::from(4u32)).unwrap();
        assert!(E.is_complete());
    }

    #[test]
    fn instances() {
        let E1 = toy::w0().unwrap();
        let E2 = toy::w0().unwrap();
        assert!(E1.id() != E2.id());
        let F = E1.field();
        let P = E1.new_point(F.from_u64(46), F.from_u64(3)).unwrap();
        assert!(E1.is_on_curve(&P) == 0xFFFFFFFF);
        assert!(E2.is_on_curve(&P) == 0);
        assert!(E1.equals(&P, &P) == 0xFFFFFFFF);
        assert!(E2.equals(&P, &P) == 0);
        assert!(E2.isneutral(&P) == 0);
        assert!(P.curve_id() == E1.id());
        assert!(E1.new_point(F.from_u64(46), F.from_u64(4)).unwrap_err()
            == Error::NotOnCurve);
    }
}
