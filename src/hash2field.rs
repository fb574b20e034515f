//! Hashing of messages into field elements.
//!
//! A message `msg` and a domain separation tag `dst` are turned into a
//! field element with HKDF (RFC 5869), instantiated with the configured
//! hash function:
//!
//! ```text
//!   PRK = HKDF-Extract(salt = dst, IKM = msg || 0x00)
//!   for i in 1..=m:
//!       t_i = HKDF-Expand(PRK, "H2C" || ctr || i, L)
//!       e_i = OS2IP(t_i) mod p
//!   return (e_1, ..., e_m)
//! ```
//!
//! where `m` is the extension degree of the field and `ctr` is a one-byte
//! counter which separates the independent derivations of a single
//! hash-to-curve call. `L` is the number of bytes per component; it should
//! be at least `ceil((ceil(log2(p)) + k)/8)` for a security level of `k`
//! bits, so that the modular reduction bias is negligible.

// Lengths and fields use uppercase names, as in the draft.
#![allow(non_snake_case)]

use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use num_bigint::BigUint;
use sha2::{Sha256, Sha384, Sha512};
use sha2::digest::Digest;
use sha2::digest::core_api::BlockSizeUser;
use sha3::{Sha3_256, Sha3_512};
use tracing::{debug, warn};

use super::Error;
use super::field::{Fe, Field};

/// Hash function selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HashId {
    /// SHA-256 (FIPS 180-4).
    Sha256,
    /// SHA-384 (FIPS 180-4).
    Sha384,
    /// SHA-512 (FIPS 180-4).
    Sha512,
    /// SHA3-256 (FIPS 202).
    Sha3_256,
    /// SHA3-512 (FIPS 202).
    Sha3_512,
}

impl HashId {

    /// All supported hash functions.
    pub const ALL: [HashId; 5] = [
        HashId::Sha256, HashId::Sha384, HashId::Sha512,
        HashId::Sha3_256, HashId::Sha3_512,
    ];

    /// Get the hash function name, as used in suite identifiers.
    pub fn name(self) -> &'static str {
        match self {
            HashId::Sha256 => "SHA256",
            HashId::Sha384 => "SHA384",
            HashId::Sha512 => "SHA512",
            HashId::Sha3_256 => "SHA3_256",
            HashId::Sha3_512 => "SHA3_512",
        }
    }

    /// Find a hash function from its name.
    pub fn from_name(name: &str) -> Option<Self> {
        HashId::ALL.iter().copied().find(|h| h.name() == name)
    }

    /// Get the output length of the hash function (in bytes).
    pub fn output_len(self) -> usize {
        match self {
            HashId::Sha256 | HashId::Sha3_256 => 32,
            HashId::Sha384 => 48,
            HashId::Sha512 | HashId::Sha3_512 => 64,
        }
    }

    /// Get the maximum HKDF output length (`255*HashLen`).
    pub fn max_len(self) -> usize {
        255 * self.output_len()
    }
}

impl fmt::Display for HashId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str(self.name())
    }
}

// HMAC (RFC 2104) over the concatenation of the provided chunks. Keys
// longer than the hash block are hashed first.
fn hmac<H>(key: &[u8], data: &[&[u8]]) -> Vec<u8>
    where H: Digest + BlockSizeUser
{
    let mut k = vec![0u8; H::block_size()];
    if key.len() > k.len() {
        let hk = H::digest(key);
        k[..hk.len()].copy_from_slice(&hk);
    } else {
        k[..key.len()].copy_from_slice(key);
    }
    let mut tmp = k.clone();
    for b in tmp.iter_mut() {
        *b ^= 0x36;
    }
    let mut sh = H::new();
    sh.update(&tmp);
    for d in data.iter() {
        sh.update(d);
    }
    let v = sh.finalize();
    for i in 0..k.len() {
        tmp[i] = k[i] ^ 0x5C;
    }
    let mut sh = H::new();
    sh.update(&tmp);
    sh.update(&v);
    sh.finalize().to_vec()
}

// HKDF-Expand (RFC 5869): out = T(1) || T(2) || ... truncated, with
// T(i) = HMAC(PRK, T(i-1) || info || i). The caller ensures that the
// output length is at most 255*HashLen.
fn hkdf_expand<H>(prk: &[u8], info: &[u8], out: &mut [u8])
    where H: Digest + BlockSizeUser
{
    let mut t = Vec::new();
    let mut off = 0;
    let mut i = 1u8;
    while off < out.len() {
        t = hmac::<H>(prk, &[&t[..], info, &[i][..]]);
        let n = core::cmp::min(t.len(), out.len() - off);
        out[off..(off + n)].copy_from_slice(&t[..n]);
        off += n;
        i = i.wrapping_add(1);
    }
}

fn hkdf_to_field<H>(msg: &[u8], dst: &[u8], ctr: u8, F: &Field, L: usize)
    -> Result<Fe, Error>
    where H: Digest + BlockSizeUser
{
    // PRK = HKDF-Extract(dst, msg || 0x00)
    let prk = hmac::<H>(dst, &[msg, &[0x00u8][..]]);

    let mut info = *b"H2C\x00\x01";
    info[3] = ctr;
    let mut t = vec![0u8; L];
    hkdf_expand::<H>(&prk, &info, &mut t);
    let e0 = BigUint::from_bytes_be(&t);
    if F.degree() == 1 {
        return Ok(F.from_biguint(&e0));
    }
    info[4] = 2;
    hkdf_expand::<H>(&prk, &info, &mut t);
    F.from_components(&e0, &BigUint::from_bytes_be(&t))
}

/// Hash a message into a field element.
///
/// An error is returned if `L` is zero or greater than `255*HashLen`
/// (the HKDF output limit).
pub fn hash_to_field(hash: HashId, msg: &[u8], dst: &[u8], ctr: u8,
    F: &Field, L: usize) -> Result<Fe, Error>
{
    if L == 0 || L > hash.max_len() {
        return Err(Error::InvalidLength);
    }
    match hash {
        HashId::Sha256 => hkdf_to_field::<Sha256>(msg, dst, ctr, F, L),
        HashId::Sha384 => hkdf_to_field::<Sha384>(msg, dst, ctr, F, L),
        HashId::Sha512 => hkdf_to_field::<Sha512>(msg, dst, ctr, F, L),
        HashId::Sha3_256 => hkdf_to_field::<Sha3_256>(msg, dst, ctr, F, L),
        HashId::Sha3_512 => hkdf_to_field::<Sha3_512>(msg, dst, ctr, F, L),
    }
}

/// A hash-to-field function bound to a field, a hash function and an
/// output length.
#[derive(Debug)]
pub struct HashToField {
    hash: HashId,
    field: Arc<Field>,
    len: usize,
}

impl HashToField {

    /// Create the function. The length `L` must be in `1..=255*HashLen`.
    pub fn new(hash: HashId, field: &Arc<Field>, L: usize)
        -> Result<Self, Error>
    {
        if L == 0 || L > hash.max_len() {
            warn!(hash = hash.name(), len = L, "invalid hash-to-field length");
            return Err(Error::InvalidLength);
        }
        debug!(hash = hash.name(), field = field.name(), len = L,
            "hash-to-field");
        Ok(Self { hash, field: Arc::clone(field), len: L })
    }

    /// Get the recommended length `L` for a field and a security level
    /// of `k` bits: `ceil((ceil(log2(p)) + k)/8)`.
    pub fn security_length(F: &Field, k: u64) -> usize {
        ((F.bit_length() + k + 7) >> 3) as usize
    }

    /// Hash a message into a field element, with the provided counter.
    pub fn hash(&self, msg: &[u8], dst: &[u8], ctr: u8) -> Result<Fe, Error> {
        hash_to_field(self.hash, msg, dst, ctr, &self.field, self.len)
    }

    /// Get the hash function.
    pub fn hash_id(&self) -> HashId {
        self.hash
    }

    /// Get the target field.
    pub fn field(&self) -> &Arc<Field> {
        &self.field
    }

    /// Get the length `L`.
    pub fn length(&self) -> usize {
        self.len
    }
}
