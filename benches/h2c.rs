#![allow(non_snake_case)]

use h2c::curves::CurveId;
use h2c::field::Sgn0;
use h2c::hash2field::{HashId, HashToField};
use h2c::map::{MapToCurve, Sswu};
use h2c::suite::Suite;

// Time stamp counter on x86; elsewhere, nanoseconds since the first call.
#[cfg(target_arch = "x86_64")]
fn ticks() -> u64 {
    use core::arch::x86_64::{_mm_lfence, _rdtsc};
    unsafe {
        _mm_lfence();
        _rdtsc()
    }
}

#[cfg(target_arch = "x86")]
fn ticks() -> u64 {
    use core::arch::x86::{_mm_lfence, _rdtsc};
    unsafe {
        _mm_lfence();
        _rdtsc()
    }
}

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
fn ticks() -> u64 {
    use std::sync::OnceLock;
    use std::time::Instant;
    static START: OnceLock<Instant> = OnceLock::new();
    START.get_or_init(Instant::now).elapsed().as_nanos() as u64
}

// Run `f` in `rounds` batches of `batch` calls; return the median cost
// of a single call.
fn median<T: FnMut(usize)>(rounds: usize, batch: usize, mut f: T) -> f64 {
    let mut tt = vec![0u64; rounds];
    for i in 0..rounds {
        let begin = ticks();
        for j in 0..batch {
            f(j);
        }
        tt[i] = ticks().wrapping_sub(begin);
    }
    tt.sort();
    (tt[rounds >> 1] as f64) / (batch as f64)
}

fn bench_suite(id: &str, ro: bool) -> (f64, u8) {
    let suite = Suite::new(id).unwrap();
    let F = suite.curve().field();
    let mut msg = [0u8; 32];
    msg[0..8].copy_from_slice(&ticks().to_le_bytes());
    let mut x = 0u8;
    let v = median(20, 10, |j| {
        msg[8] = j as u8;
        let P = if ro {
            suite.hash_to_curve(&msg, b"bench").unwrap()
        } else {
            suite.encode_to_curve(&msg, b"bench").unwrap()
        };
        if let Some(px) = P.x() {
            x ^= F.encode(px)[0];
        }
    });
    (v, x)
}

fn bench_hash_to_field() -> (f64, u8) {
    let F = CurveId::P256.field().unwrap();
    let h2f = HashToField::new(HashId::Sha256, &F, 48).unwrap();
    let mut msg = [0u8; 32];
    msg[0..8].copy_from_slice(&ticks().to_le_bytes());
    let mut x = 0u8;
    let v = median(100, 100, |j| {
        msg[8] = j as u8;
        let u = h2f.hash(&msg, b"bench", 2).unwrap();
        x ^= F.encode(&u)[0];
    });
    (v, x)
}

fn bench_sswu_p256() -> (f64, u8) {
    let E = CurveId::P256.curve().unwrap();
    let F = E.field();
    let m = Sswu::new(&E, Some(F.from_i64(-10)), Sgn0::LittleEndian).unwrap();
    let mut u = F.from_u64(ticks());
    let v = median(20, 10, |_| {
        // Chain the calls so that none can be skipped.
        let P = m.map_to_curve(&u);
        if let Some(py) = P.y() {
            u = F.add(&u, py);
        }
    });
    (v, F.encode(&u)[0])
}

fn main() {
    let mut bx = 0u8;

    let (v, x) = bench_hash_to_field();
    bx ^= x;
    println!("hash_to_field (P-256, SHA-256):     {:13.2}", v);
    let (v, x) = bench_sswu_p256();
    bx ^= x;
    println!("map_to_curve (P-256, SSWU):         {:13.2}", v);

    for id in ["P256-SHA256-SSWU-", "P256-SHA256-SVDW-",
        "secp256k1-SHA256-SSWU-", "curve25519-SHA256-ELL2-",
        "edwards25519-SHA256-EDELL2-", "edwards448-SHA512-EDELL2-"].iter()
    {
        let (v, x) = bench_suite(&format!("{}NU-", id), false);
        bx ^= x;
        println!("{:32}NU- {:13.2}", id, v);
        let (v, x) = bench_suite(&format!("{}RO-", id), true);
        bx ^= x;
        println!("{:32}RO- {:13.2}", id, v);
    }

    println!("{}", bx);
}
