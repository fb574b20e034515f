//! Hash-to-curve suites.
//!
//! A suite binds a curve, a hash function with its output length `L`, a
//! mapping, and an encoding type:
//!
//!  - `NU` (non-uniform): `encode_to_curve(msg, dst)` computes
//!    `u = hash_to_field(msg, dst, 2)` and returns
//!    `clear_cofactor(map_to_curve(u))`.
//!  - `RO` (random oracle): `hash_to_curve(msg, dst)` computes
//!    `u0 = hash_to_field(msg, dst, 0)`, `u1 = hash_to_field(msg, dst, 1)`
//!    and returns `clear_cofactor(map_to_curve(u0) + map_to_curve(u1))`.
//!
//! Named suites are identified by strings of the form
//! `<curve>-<hash>-<mapping>-<encoding>-`, e.g. `"P256-SHA256-SSWU-RO-"`;
//! `Suite::new()` builds a suite from such an identifier. `Suite::custom()`
//! builds a suite from an arbitrary curve and mapping.

// Curves and points use uppercase names.
#![allow(non_snake_case)]

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;
use tracing::{debug, warn};

use super::Error;
use super::curve::{Curve, Point};
use super::curves::{CurveId, secp256k1_isogeny};
use super::field::Sgn0;
use super::hash2field::{HashId, HashToField};
use super::ratmap::Isogeny;
use super::map::{BonehFranklin, Elligator2, MapId, MapToCurve, Sswu,
    SswuAB0, Svdw};

/// Parameters of a named suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SuiteConfig {
    /// Target curve.
    pub curve: CurveId,
    /// Hash function.
    pub hash: HashId,
    /// Length `L` of the hash-to-field output, per field component.
    pub len: usize,
    /// Mapping.
    pub map: MapId,
    /// Mapping constant `Z`; when `None`, it is searched for.
    pub z: Option<i64>,
    /// Sign convention.
    pub sgn0: Sgn0,
    /// Random oracle (`RO`) encoding if true, non-uniform (`NU`)
    /// otherwise.
    pub ro: bool,
}

// Supported (curve, hash, L, mapping, Z) combinations.
static SUITES: [(CurveId, HashId, usize, MapId, Option<i64>); 12] = [
    (CurveId::P256, HashId::Sha256, 48, MapId::Sswu, Some(-10)),
    (CurveId::P256, HashId::Sha256, 48, MapId::Svdw, None),
    (CurveId::P384, HashId::Sha512, 72, MapId::Sswu, Some(-12)),
    (CurveId::P384, HashId::Sha512, 72, MapId::Svdw, None),
    (CurveId::P521, HashId::Sha512, 96, MapId::Sswu, Some(-4)),
    (CurveId::P521, HashId::Sha512, 96, MapId::Svdw, None),
    (CurveId::Curve25519, HashId::Sha256, 48, MapId::Ell2, None),
    (CurveId::Edwards25519, HashId::Sha256, 48, MapId::EdEll2, None),
    (CurveId::Curve448, HashId::Sha512, 84, MapId::Ell2, None),
    (CurveId::Edwards448, HashId::Sha512, 84, MapId::EdEll2, None),
    // SSWU for secp256k1 works on the 3-isogenous curve.
    (CurveId::Secp256k1, HashId::Sha256, 48, MapId::Sswu, Some(-11)),
    (CurveId::Secp256k1, HashId::Sha256, 48, MapId::Svdw, None),
];

impl SuiteConfig {

    /// Parse a suite identifier and get the parameters of the
    /// corresponding named suite.
    ///
    /// `MalformedSuiteId` is returned if the identifier does not have
    /// the expected format, or names an unknown curve, hash function,
    /// mapping or encoding; `UnsupportedSuite` is returned if all
    /// elements are known but the combination is not a named suite.
    pub fn lookup(id: &str) -> Result<Self, Error> {
        let (curve, hash, map, ro) = match Self::parse(id) {
            Some(v) => v,
            None => {
                warn!(suite = id, "malformed suite identifier");
                return Err(Error::MalformedSuiteId);
            }
        };
        for &(c, h, len, m, z) in SUITES.iter() {
            if c == curve && h == hash && m == map {
                return Ok(Self {
                    curve, hash, len, map, z, sgn0: Sgn0::LittleEndian, ro,
                });
            }
        }
        warn!(suite = id, "unsupported suite");
        Err(Error::UnsupportedSuite)
    }

    fn parse(id: &str) -> Option<(CurveId, HashId, MapId, bool)> {
        let body = id.strip_suffix('-')?;
        let parts: Vec<&str> = body.split('-').collect();
        if parts.len() != 4 || parts.iter().any(|s| s.is_empty()) {
            return None;
        }
        let curve = CurveId::from_name(parts[0])?;
        let hash = HashId::from_name(parts[1])?;
        let map = MapId::from_name(parts[2])?;
        let ro = match parts[3] {
            "NU" => false,
            "RO" => true,
            _ => return None,
        };
        Some((curve, hash, map, ro))
    }

    /// Get the suite identifier.
    pub fn id(&self) -> String {
        format!("{}-{}-{}-{}-", self.curve.name(), self.hash.name(),
            self.map.name(), if self.ro { "RO" } else { "NU" })
    }
}

/// A hash-to-curve suite.
pub struct Suite {
    id: String,
    curve: Arc<Curve>,
    h2f: HashToField,
    map: Box<dyn MapToCurve>,
    ro: bool,
}

impl fmt::Debug for Suite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "Suite({})", self.id)
    }
}

impl Suite {

    /// Create a named suite from its identifier.
    pub fn new(id: &str) -> Result<Self, Error> {
        Self::from_config(&SuiteConfig::lookup(id)?)
    }

    /// Create a named suite from its parameters.
    pub fn from_config(cfg: &SuiteConfig) -> Result<Self, Error> {
        let map = Self::make_map(cfg)?;
        let curve = Arc::clone(map.curve());
        let h2f = HashToField::new(cfg.hash, curve.field(), cfg.len)?;
        let id = cfg.id();
        debug!(suite = %id, curve = curve.name(), "suite");
        Ok(Self { id, curve, h2f, map, ro: cfg.ro })
    }

    fn make_map(cfg: &SuiteConfig) -> Result<Box<dyn MapToCurve>, Error> {
        let sgn0 = cfg.sgn0;
        let map: Box<dyn MapToCurve> = match (cfg.map, cfg.curve) {
            (MapId::Sswu, CurveId::Secp256k1) => {
                let iso = secp256k1_isogeny()?;
                let Z = cfg.z.map(|z| iso.domain().field().from_i64(z));
                Box::new(SswuAB0::new(Box::new(iso), Z, sgn0)?)
            }
            (MapId::Sswu, c) => {
                let E = c.curve()?;
                let Z = cfg.z.map(|z| E.field().from_i64(z));
                Box::new(Sswu::new(&E, Z, sgn0)?)
            }
            (MapId::Svdw, c) => {
                let E = c.curve()?;
                let Z = cfg.z.map(|z| E.field().from_i64(z));
                Box::new(Svdw::new(&E, Z, sgn0)?)
            }
            (MapId::EdEll2, CurveId::Edwards25519) => {
                let F = CurveId::Curve25519.field()?;
                let M = CurveId::Curve25519.curve_over(&F)?;
                let E = CurveId::Edwards25519.curve_over(&F)?;
                let Z = cfg.z.map(|z| F.from_i64(z));
                Box::new(Elligator2::via_montgomery(&E, &M, Z, sgn0)?)
            }
            (MapId::EdEll2, CurveId::Edwards448) => {
                let F = CurveId::Curve448.field()?;
                let M = CurveId::Curve448.curve_over(&F)?;
                let E = CurveId::Edwards448.curve_over(&F)?;
                let Z = cfg.z.map(|z| F.from_i64(z));
                Box::new(Elligator2::via_isogeny(&E, &M, Z, sgn0)?)
            }
            (MapId::Ell2, c) | (MapId::EdEll2, c) => {
                let E = c.curve()?;
                let Z = cfg.z.map(|z| E.field().from_i64(z));
                Box::new(Elligator2::new(&E, Z, sgn0)?)
            }
            (MapId::BonehFranklin, c) => {
                Box::new(BonehFranklin::new(&c.curve()?)?)
            }
        };
        Ok(map)
    }

    /// Create a suite from a curve, a hash function, a length `L` and a
    /// mapping. The mapping must target the provided curve instance.
    pub fn custom(curve: &Arc<Curve>, hash: HashId, L: usize,
        map: Box<dyn MapToCurve>, ro: bool) -> Result<Self, Error>
    {
        if map.curve().id() != curve.id() {
            warn!(curve = curve.name(), map_curve = map.curve().name(),
                "mapping does not target the suite curve");
            return Err(Error::CurveMismatch);
        }
        let h2f = HashToField::new(hash, curve.field(), L)?;
        let id = format!("{}-{}-custom-{}-", curve.name(), hash.name(),
            if ro { "RO" } else { "NU" });
        debug!(suite = %id, "custom suite");
        Ok(Self { id, curve: Arc::clone(curve), h2f, map, ro })
    }

    /// Get the suite identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the target curve.
    pub fn curve(&self) -> &Arc<Curve> {
        &self.curve
    }

    /// Get the hash function.
    pub fn hash_id(&self) -> HashId {
        self.h2f.hash_id()
    }

    /// Returns true for a random oracle (`RO`) suite, false for a
    /// non-uniform (`NU`) suite.
    pub fn is_random_oracle(&self) -> bool {
        self.ro
    }

    /// Non-uniform encoding of a message into the prime order subgroup.
    pub fn encode_to_curve(&self, msg: &[u8], dst: &[u8])
        -> Result<Point, Error>
    {
        let u = self.h2f.hash(msg, dst, 2)?;
        let Q = self.map.map_to_curve(&u);
        Ok(self.curve.clear_cofactor(&Q))
    }

    /// Random oracle encoding of a message into the prime order subgroup.
    pub fn hash_to_curve(&self, msg: &[u8], dst: &[u8])
        -> Result<Point, Error>
    {
        let u0 = self.h2f.hash(msg, dst, 0)?;
        let u1 = self.h2f.hash(msg, dst, 1)?;
        let Q0 = self.map.map_to_curve(&u0);
        let Q1 = self.map.map_to_curve(&u1);
        Ok(self.curve.clear_cofactor(&self.curve.add(&Q0, &Q1)))
    }

    /// Hash a message with the suite encoding (`hash_to_curve()` for
    /// `RO` suites, `encode_to_curve()` for `NU` suites).
    pub fn hash(&self, msg: &[u8], dst: &[u8]) -> Result<Point, Error> {
        if self.ro {
            self.hash_to_curve(msg, dst)
        } else {
            self.encode_to_curve(msg, dst)
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::curves::toy;

    // Outputs for msg = "hello" and dst = "world".
    static KAT: [(&str, &str, &str); 24] = [
        ("P256-SHA256-SSWU-NU-",
            "49f048ea2e805b891b55de070775788dcb4699f9ba6b36e3a74b356effc8f554",
            "debe952a27ad40bcacfc5bc8ba099773d643b211a880474b8d80af885a676174"),
        ("P256-SHA256-SSWU-RO-",
            "c3949027dc7b570e668303beea50c574603007d0b620318483468a1186cd9fb8",
            "9a2e755e6489abd316233cbd3a748b17199d14bfd10d7a25ad8813bf8d1f9255"),
        ("P256-SHA256-SVDW-NU-",
            "6cf81acf80400e1102031087b19ae48392166fa48506db3baf7f5e92320f1a9d",
            "b317dceb63ecccf2032cadf93557958d5d42bf21baac1104788c330c446c2b90"),
        ("P256-SHA256-SVDW-RO-",
            "035f981789dfabd61b0743f29fecd73e01aeec73af38c3f60ab8cfd34cd6ca75",
            "09a1af7c41b8dcee2311baf5771d2fbc25f3dac09552ab249f0aa72231a1b020"),
        ("P384-SHA512-SSWU-NU-",
            "5daa090b2f0858715068f04c56f53fb23aefdbc9236cf7f693adcadc0227481a0b21954d2c8414a2515af297aa004c58",
            "f191c4725d6b8adf05dea8a6c54251fb903a756b241f476d70d06d48c4b3e9e1cf479a05ad241200d87ef6baf9a2397f"),
        ("P384-SHA512-SSWU-RO-",
            "1d54cfe3fc5452c711d23753c175237c717aee315d10f55b5de73b7915af065108d2d305f79014aee12d4afce6bafe6b",
            "4d12beb5417a5ded5536cd03cc1fa6275a68abd0becb401a3977bebd3fbd2a9d96c62e52ff7211b897272c9d53da38a4"),
        ("P384-SHA512-SVDW-NU-",
            "a59a550024c9bf08515355aa414e85268f3a50b1e7fbc41948ce686327300e2de12611876716e974b27d50113cfea237",
            "c7ac6f2684a9ef62aa11b538534d960208c9907d00effa6190802824f404740591cd66106d2daf26234e1a932b38a57d"),
        ("P384-SHA512-SVDW-RO-",
            "5727365fa945570deb423b1e998ecc9ef527e3d700f1973b7a055706aa66574f4f581196d1d5a70ee837308c1a058a7f",
            "39a06fc109234dfee61f39ae67ef0f7514e8fa5fad7ea452c2f98906cc60a19636538771ead73a172c764a613801e07f"),
        ("P521-SHA512-SSWU-NU-",
            "01c19db9ac0feaf468f5b6e0dde5737c99df93b73f52c58a4d62136562cc6550de03ac0fea64b6aaab13ae6b240873f137a7164ac6fb18209b33c83b73c5ea73d5fa",
            "00786588739aedf5b0308b8d9f450918fdd5504cc0964d9e91f82c7f4582fe7a8dc950894fcac1d99364c730b7d2741706ef8fdbc17d050f37ed69e9c6b068054525"),
        ("P521-SHA512-SSWU-RO-",
            "016bda942bb5280f1bb0c18ecf7103469533f49c21782784bde2b3621eb276aa53f786b8aca98155fd1f0a2f39dc8f7d6ceb486ba35547602bbc588cd0d50a442d6b",
            "0068f1b7decf04eded4e770908e0a770c6f8ffd3f42a9d4a7839fef7b6e227f1e887fb8721b1d468abc7ae69a3e2b6c08ac936919949e9c9ea54a85af9aa2eb2ec88"),
        ("P521-SHA512-SVDW-NU-",
            "0026c39cf0ce6bb792997c53fbc56c67dec4123b50c9ce5b628278296c214047178a0896259eece900364fee91dbe5fdd6fa87870002afe2b8d3b5e805f20a119475",
            "0052f825d21945ce301db38324fbbebcb9b59a93dbd51740c7d156ed3b185086f81f519381efd40ede9edb6775afcc646ada1b7863959ad6e07947413d3fa47b5c24"),
        ("P521-SHA512-SVDW-RO-",
            "00cfa28c4e15ab4c83f3ee616382146900195130de6791a4577620d51045de8ed145d18390de7e40d842b7cc5e9f980fad995fc1551d73de0cfe4c92a84584359904",
            "01c38e811ffc5e39dd9b5dd088a609af3bb50c9bb2c46b2e2be3d7709099b22752513ffb20df3c5e8e4a4085576223ae05ab733710eb6fbeb8f47ee06f71a667995e"),
        ("curve25519-SHA256-ELL2-NU-",
            "28ed42f3e066c7201776f58e0c7ac2f315f28cae3a5a87e1e8d1d3f890485149",
            "36660ee204ea2518432348118a3cdd7d8e13b1b9ef456f8f55295828f80b2584"),
        ("curve25519-SHA256-ELL2-RO-",
            "7f62adab7247c3f18eaafa31e560c216da7e37f9ee125ba78d1b7c3accf6bfb6",
            "2fc1c2bc48d82654727ba51eb00bf535c20fe6215d69b18ebebf5edd7deddcc5"),
        ("edwards25519-SHA256-EDELL2-NU-",
            "79d6a61773de6426e201f84fa647ab2631c3686e0ec86f6dd10600e322247046",
            "679275c9479592cdd612ec88978cfa75a508d86974b3381a896a42e74cabfb71"),
        ("edwards25519-SHA256-EDELL2-RO-",
            "5b471fe2f933a760bc9e87611b4ef24de463cc234062dee9d4650d0232678c88",
            "485720e519e40d0456c74184e1f162fdd5ec451e97c2b318b3a4ef73a25b3359"),
        ("curve448-SHA512-ELL2-NU-",
            "d91d0ade5625ec27127f0176e4ecdf10c801b027b072c71d42a52d7382014aa7dc8709ee4fccc0b33ac3024eb4c2c302de8b54b94ed96967",
            "6f6e69e3488bfcc061f16d19c89ef66756cc108acf70d5a67de243202fc91806307ef9bd86ab3f05a3d99f4c166c14694bcae47d0e976318"),
        ("curve448-SHA512-ELL2-RO-",
            "2b98b29ccfcf34418bcb34b726b052bf677e11c3a96f9954ffdd7a6d6c06d8e2b1266db8008d7aa1d7ee34d2fb5b507c4bc939233d2fb655",
            "57653157d676f563b6286c1247e6dbd115c62a572c29291e99dc779a04ded58122943fc97f4a1d80715c87ca691c7e23723d55be5b974902"),
        ("edwards448-SHA512-EDELL2-NU-",
            "ab103440eb064832c82c396cc422ced2fff32f4f164331481cf465deb3231cabeb360893e7d53df812c41d34270241b3b7a1126b6e40e36f",
            "9bd6401b6cf76bbe289c1bbd3b6b264dbcd6fc5bf68aaa7c35681cc3f92ead82149e699147ab2c6ca15bd0f5bba33fb36a6bb25b24e47115"),
        ("edwards448-SHA512-EDELL2-RO-",
            "10c05377d4bb6c1a64a14ce821e21eb52a668b4e4732d7f7d4d3db90c1bd25b5eb7b8b2a277ba691323b1db8a1389749aa18456b0e2bd197",
            "f46d9630192833e96793a647237304a3330f68239359bd1ceaaa03d99d27ef3474f522cc35d62e1c981a9c56b2a53acb85f4d20992d0f737"),
        ("secp256k1-SHA256-SSWU-NU-",
            "47987b9ceea3acc5fe45bb70d23f7fad75eb011c5d583264d5bcf7ca88673e04",
            "52161f70f417a4e363f1a8e7dce30b599035ca4a9221b747ba7d61c7493a4ef3"),
        ("secp256k1-SHA256-SSWU-RO-",
            "f7cde8fbfe6105a45655f476c7dc434895cae12e88fcda805a033dfb23e2c958",
            "2e8d6f7811651bb3a8f85541e62329560df3fc01b130f6c75678d1fdcb677600"),
        ("secp256k1-SHA256-SVDW-NU-",
            "6bf1e2de6cf7f5564e2d1296e07d07f5f920247ab83b67d5aed4bc84fc9b36e0",
            "5835dd4d69a7ed8f885996a674dd7b8e0b3861a0eca9428deb2f5d512e45aebf"),
        ("secp256k1-SHA256-SVDW-RO-",
            "af6ccc9f03d0594ef84e2567b80f1f1a189a7e24107449fb289551d145612c7f",
            "b9bb8d751131ac004b9be6c1ffd725324a79884f1a7ad20e945bf8355152520b"),
    ];

    #[test]
    fn named_suites() {
        for (id, x, y) in KAT.iter() {
            let suite = Suite::new(id).unwrap();
            assert!(suite.id() == *id);
            assert!(suite.is_random_oracle() == id.ends_with("-RO-"));
            let E = suite.curve();
            let F = E.field();
            let P = suite.hash(b"hello", b"world").unwrap();
            let (px, py) = P.coordinates().unwrap();
            assert!(F.encode(px) == hex::decode(x).unwrap());
            assert!(F.encode(py) == hex::decode(y).unwrap());
        }
    }

    #[test]
    fn subgroup() {
        for id in ["P256-SHA256-SSWU-RO-", "curve25519-SHA256-ELL2-NU-",
            "edwards448-SHA512-EDELL2-RO-", "secp256k1-SHA256-SSWU-NU-"].iter()
        {
            let suite = Suite::new(id).unwrap();
            let E = suite.curve();
            for i in 0..4u8 {
                let P = suite.hash(&[i], b"subgroup").unwrap();
                assert!(E.is_on_curve(&P) == 0xFFFFFFFF);
                assert!(E.isneutral(&E.mul(&P, &E.subgroup_order())) == 0xFFFFFFFF);
            }
        }
    }

    #[test]
    fn determinism() {
        let nu = Suite::new("edwards25519-SHA256-EDELL2-NU-").unwrap();
        let ro = Suite::new("edwards25519-SHA256-EDELL2-RO-").unwrap();
        let E = nu.curve();
        let P1 = nu.hash(b"msg", b"dst").unwrap();
        let P2 = nu.hash(b"msg", b"dst").unwrap();
        assert!(E.equals(&P1, &P2) == 0xFFFFFFFF);
        assert!(E.equals(&P1, &nu.encode_to_curve(b"msg", b"dst").unwrap())
            == 0xFFFFFFFF);

        // NU and RO suites use distinct curve instances.
        let E2 = ro.curve();
        let Q1 = ro.hash(b"msg", b"dst").unwrap();
        let Q2 = ro.hash_to_curve(b"msg", b"dst").unwrap();
        assert!(E2.equals(&Q1, &Q2) == 0xFFFFFFFF);
        let F = E.field();
        let (x1, _) = P1.coordinates().unwrap();
        let (x2, _) = Q1.coordinates().unwrap();
        assert!(F.equals(x1, x2) == 0);

        // A suite object can compute both encodings.
        let R1 = nu.hash_to_curve(b"msg", b"dst").unwrap();
        let (x3, _) = R1.coordinates().unwrap();
        assert!(F.equals(x2, x3) == 0xFFFFFFFF);
        let R2 = nu.hash(b"msg", b"other dst").unwrap();
        assert!(E.equals(&P1, &R2) == 0);
    }

    #[test]
    fn identifiers() {
        for id in ["P256-SHA256-SSWU-RO", "P256-SHA256-SSWU-", "-P256-SHA256-SSWU-RO-",
            "P256-SHA256--RO-", "P257-SHA256-SSWU-RO-", "P256-SHA3-SSWU-RO-",
            "P256-SHA256-SWU-RO-", "P256-SHA256-SSWU-XX-",
            "P256-SHA256-SSWU-RO-extra-", ""].iter()
        {
            assert!(SuiteConfig::lookup(id).unwrap_err() == Error::MalformedSuiteId);
        }
        for id in ["P256-SHA512-SSWU-RO-", "curve25519-SHA256-SSWU-NU-",
            "secp256k1-SHA256-BF-NU-", "edwards25519-SHA256-ELL2-RO-",
            "P384-SHA3_512-SVDW-NU-"].iter()
        {
            assert!(SuiteConfig::lookup(id).unwrap_err() == Error::UnsupportedSuite);
        }
        let cfg = SuiteConfig::lookup("curve448-SHA512-ELL2-RO-").unwrap();
        assert!(cfg.curve == CurveId::Curve448);
        assert!(cfg.hash == HashId::Sha512);
        assert!(cfg.len == 84);
        assert!(cfg.map == MapId::Ell2);
        assert!(cfg.ro);
        assert!(cfg.id() == "curve448-SHA512-ELL2-RO-");
    }

    #[test]
    fn custom_suites() {
        let E = toy::w0().unwrap();
        let map = Sswu::new(&E, None, Sgn0::LittleEndian).unwrap();
        let suite = Suite::custom(&E, HashId::Sha256, 48, Box::new(map), true)
            .unwrap();
        assert!(suite.id() == "W0-SHA256-custom-RO-");
        for i in 0..20u8 {
            let P = suite.hash(&[i], b"toy").unwrap();
            assert!(E.is_on_curve(&P) == 0xFFFFFFFF);
            assert!(E.isneutral(&E.mul_small(&P, 17)) == 0xFFFFFFFF);
        }

        let M = toy::m0().unwrap();
        let map = Elligator2::new(&M, None, Sgn0::BigEndian).unwrap();
        let suite = Suite::custom(&M, HashId::Sha3_512, 64, Box::new(map), false)
            .unwrap();
        for i in 0..20u8 {
            let P = suite.encode_to_curve(&[i], b"toy").unwrap();
            assert!(M.isneutral(&M.mul_small(&P, 11)) == 0xFFFFFFFF);
        }

        // The mapping must target the same curve instance.
        let E2 = toy::w0().unwrap();
        let map = Svdw::new(&E2, None, Sgn0::LittleEndian).unwrap();
        assert!(Suite::custom(&E, HashId::Sha256, 48, Box::new(map), true)
            .unwrap_err() == Error::CurveMismatch);
        let map = Svdw::new(&E, None, Sgn0::LittleEndian).unwrap();
        assert!(Suite::custom(&E, HashId::Sha256, 0, Box::new(map), true)
            .unwrap_err() == Error::InvalidLength);
    }
}
