//! Unsigned magnitude arithmetic on working chunks.
//!
//! A magnitude is a `Vec<Chunk>` in little-endian order (`mag[0]` is least
//! significant). Each working chunk holds 8 hex digits. Every function here
//! returns normalized magnitudes: no most-significant zero chunks, and zero
//! is exactly `[0]`.

use std::cmp::Ordering;

/// One working chunk: 8 hex digits.
pub(crate) type Chunk = u32;
/// Accumulator wide enough for a chunk product plus two carries.
pub(crate) type Wide = u64;

pub(crate) const CHUNK_BITS: u32 = Chunk::BITS;
/// Hex digits per working chunk.
pub(crate) const WORKING_HEX_DIGITS: usize = (CHUNK_BITS / 4) as usize;

/// Operands with at least this many chunks use Karatsuba multiplication.
pub(crate) const KARATSUBA_THRESHOLD: usize = 32;

// ============================================================================
// Low-level helpers
// ============================================================================

/// Add with carry: (result, carry) = a + b + carry_in
#[inline(always)]
const fn adc(a: Chunk, b: Chunk, carry: Chunk) -> (Chunk, Chunk) {
    let tmp = a as Wide + b as Wide + carry as Wide;
    (tmp as Chunk, (tmp >> CHUNK_BITS) as Chunk)
}

/// Subtract with borrow: (result, borrow) = a - b - borrow_in
#[inline(always)]
const fn sbb(a: Chunk, b: Chunk, borrow: Chunk) -> (Chunk, Chunk) {
    let tmp = (a as Wide)
        .wrapping_sub(b as Wide)
        .wrapping_sub(borrow as Wide);
    (tmp as Chunk, (tmp >> (Wide::BITS - 1)) as Chunk)
}

/// Multiply-accumulate: (lo, carry) = a * b + c + carry_in
#[inline(always)]
const fn mac(a: Chunk, b: Chunk, c: Chunk, carry: Chunk) -> (Chunk, Chunk) {
    let tmp = a as Wide * b as Wide + c as Wide + carry as Wide;
    (tmp as Chunk, (tmp >> CHUNK_BITS) as Chunk)
}

// ============================================================================
// Normalization
// ============================================================================

/// Strip most-significant zero chunks, keeping at least one chunk.
pub(crate) fn normalize(mag: &mut Vec<Chunk>) {
    while mag.len() > 1 && mag.last() == Some(&0) {
        mag.pop();
    }
    if mag.is_empty() {
        mag.push(0);
    }
}

#[inline]
pub(crate) fn is_zero(mag: &[Chunk]) -> bool {
    mag.iter().all(|&c| c == 0)
}

/// Number of chunks up to and including the most-significant non-zero one.
#[inline]
fn significant_len(mag: &[Chunk]) -> usize {
    mag.iter().rposition(|&c| c != 0).map_or(0, |i| i + 1)
}

pub(crate) fn from_u128(mut value: u128) -> Vec<Chunk> {
    let mut mag = Vec::with_capacity(4);
    while value != 0 {
        mag.push(value as Chunk);
        value >>= CHUNK_BITS;
    }
    normalize(&mut mag);
    mag
}

/// The magnitude as a `u128`, or `None` if it needs more than 128 bits.
pub(crate) fn to_u128(mag: &[Chunk]) -> Option<u128> {
    let len = significant_len(mag);
    if len * CHUNK_BITS as usize > u128::BITS as usize {
        return None;
    }
    Some(
        mag[..len]
            .iter()
            .rev()
            .fold(0u128, |acc, &c| (acc << CHUNK_BITS) | c as u128),
    )
}

pub(crate) fn bit_len(mag: &[Chunk]) -> u64 {
    let len = significant_len(mag);
    if len == 0 {
        return 0;
    }
    let top = mag[len - 1];
    (len as u64 - 1) * CHUNK_BITS as u64 + (CHUNK_BITS - top.leading_zeros()) as u64
}

// ============================================================================
// Comparison
// ============================================================================

/// Compare two magnitudes: chunk count first, then chunks from the top down.
pub(crate) fn cmp(a: &[Chunk], b: &[Chunk]) -> Ordering {
    let (la, lb) = (significant_len(a), significant_len(b));
    la.cmp(&lb)
        .then_with(|| a[..la].iter().rev().cmp(b[..lb].iter().rev()))
}

// ============================================================================
// Addition / subtraction
// ============================================================================

pub(crate) fn add(a: &[Chunk], b: &[Chunk]) -> Vec<Chunk> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = Vec::with_capacity(long.len() + 1);
    let mut carry = 0;
    for (i, &x) in long.iter().enumerate() {
        let (r, c) = adc(x, short.get(i).copied().unwrap_or(0), carry);
        out.push(r);
        carry = c;
    }
    if carry != 0 {
        out.push(carry);
    }
    normalize(&mut out);
    out
}

/// `a - b`. The caller guarantees `a >= b`.
pub(crate) fn sub(a: &[Chunk], b: &[Chunk]) -> Vec<Chunk> {
    let mut out = a.to_vec();
    sub_in_place(&mut out, b);
    out
}

/// `a -= b`. The caller guarantees `a >= b`.
pub(crate) fn sub_in_place(a: &mut Vec<Chunk>, b: &[Chunk]) {
    debug_assert!(cmp(a, b) != Ordering::Less, "magnitude subtraction underflow");
    let mut borrow = 0;
    for (i, x) in a.iter_mut().enumerate() {
        let y = b.get(i).copied().unwrap_or(0);
        if i >= b.len() && borrow == 0 {
            break;
        }
        let (r, bo) = sbb(*x, y, borrow);
        *x = r;
        borrow = bo;
    }
    debug_assert_eq!(borrow, 0);
    normalize(a);
}

/// `acc += x * BASE^shift`, growing `acc` as needed.
fn add_shifted(acc: &mut Vec<Chunk>, x: &[Chunk], shift: usize) {
    if acc.len() < shift + x.len() {
        acc.resize(shift + x.len(), 0);
    }
    let mut carry = 0;
    for (i, &y) in x.iter().enumerate() {
        let (r, c) = adc(acc[shift + i], y, carry);
        acc[shift + i] = r;
        carry = c;
    }
    let mut k = shift + x.len();
    while carry != 0 {
        if k == acc.len() {
            acc.push(0);
        }
        let (r, c) = adc(acc[k], 0, carry);
        acc[k] = r;
        carry = c;
        k += 1;
    }
}

// ============================================================================
// Shifts
// ============================================================================

/// `mag << bits`.
pub(crate) fn shl_bits(mag: &[Chunk], bits: u64) -> Vec<Chunk> {
    if is_zero(mag) {
        return vec![0];
    }
    let chunk_shift = (bits / CHUNK_BITS as u64) as usize;
    let bit_shift = (bits % CHUNK_BITS as u64) as u32;
    let mut out = vec![0; chunk_shift];
    out.reserve(mag.len() + 1);
    if bit_shift == 0 {
        out.extend_from_slice(mag);
    } else {
        let mut carry = 0;
        for &c in mag {
            out.push((c << bit_shift) | carry);
            carry = c >> (CHUNK_BITS - bit_shift);
        }
        out.push(carry);
    }
    normalize(&mut out);
    out
}

// ============================================================================
// Multiplication
// ============================================================================

/// `mag * m + add`, in place.
pub(crate) fn mul_add_small(mag: &mut Vec<Chunk>, m: Chunk, add: Chunk) {
    let mut carry = add;
    for c in mag.iter_mut() {
        let (lo, hi) = mac(*c, m, 0, carry);
        *c = lo;
        carry = hi;
    }
    if carry != 0 {
        mag.push(carry);
    }
    normalize(mag);
}

pub(crate) fn mul_small(mag: &[Chunk], m: Chunk) -> Vec<Chunk> {
    let mut out = mag.to_vec();
    mul_add_small(&mut out, m, 0);
    out
}

pub(crate) fn mul(a: &[Chunk], b: &[Chunk]) -> Vec<Chunk> {
    if is_zero(a) || is_zero(b) {
        return vec![0];
    }
    if a.len().min(b.len()) >= KARATSUBA_THRESHOLD {
        log::trace!("karatsuba multiply: {} x {} chunks", a.len(), b.len());
        karatsuba(a, b)
    } else {
        mul_schoolbook(a, b)
    }
}

/// Produce `len(a) + len(b)` chunks via schoolbook multiplication.
pub(crate) fn mul_schoolbook(a: &[Chunk], b: &[Chunk]) -> Vec<Chunk> {
    let mut wide = vec![0; a.len() + b.len()];
    for (i, &x) in a.iter().enumerate() {
        if x == 0 {
            continue;
        }
        let mut carry = 0;
        for (j, &y) in b.iter().enumerate() {
            let (lo, hi) = mac(x, y, wide[i + j], carry);
            wide[i + j] = lo;
            carry = hi;
        }
        wide[i + b.len()] = carry;
    }
    normalize(&mut wide);
    wide
}

fn split_at_chunk(mag: &[Chunk], at: usize) -> (&[Chunk], &[Chunk]) {
    if mag.len() <= at {
        (mag, &[])
    } else {
        mag.split_at(at)
    }
}

/// a*b = z2*B^2h + z1*B^h + z0 with z1 = (a0+a1)(b0+b1) - z2 - z0.
fn karatsuba(a: &[Chunk], b: &[Chunk]) -> Vec<Chunk> {
    if a.len() < KARATSUBA_THRESHOLD || b.len() < KARATSUBA_THRESHOLD {
        return mul_schoolbook(a, b);
    }
    let half = a.len().max(b.len()) / 2;
    let (a0, a1) = split_at_chunk(a, half);
    let (b0, b1) = split_at_chunk(b, half);

    let z0 = karatsuba(a0, b0);
    let z2 = karatsuba(a1, b1);
    let mut z1 = karatsuba(&add(a0, a1), &add(b0, b1));
    sub_in_place(&mut z1, &z2);
    sub_in_place(&mut z1, &z0);

    let mut out = z0;
    add_shifted(&mut out, &z1, half);
    add_shifted(&mut out, &z2, 2 * half);
    normalize(&mut out);
    out
}

// ============================================================================
// Division
// ============================================================================

/// Divide by a single chunk: returns (quotient, remainder).
pub(crate) fn divrem_small(mag: &[Chunk], d: Chunk) -> (Vec<Chunk>, Chunk) {
    debug_assert!(d != 0);
    let mut quotient = vec![0; mag.len()];
    let mut rem: Wide = 0;
    for i in (0..mag.len()).rev() {
        let cur = (rem << CHUNK_BITS) | mag[i] as Wide;
        quotient[i] = (cur / d as Wide) as Chunk;
        rem = cur % d as Wide;
    }
    normalize(&mut quotient);
    (quotient, rem as Chunk)
}

/// Schoolbook long division on chunks: returns (quotient, remainder).
///
/// The divisor must be non-zero.
pub(crate) fn divrem(a: &[Chunk], b: &[Chunk]) -> (Vec<Chunk>, Vec<Chunk>) {
    let b = &b[..significant_len(b)];
    debug_assert!(!b.is_empty(), "division by zero magnitude");

    if cmp(a, b) == Ordering::Less {
        let mut rem = a.to_vec();
        normalize(&mut rem);
        return (vec![0], rem);
    }
    if b.len() == 1 {
        let (q, r) = divrem_small(a, b[0]);
        return (q, vec![r]);
    }

    log::trace!("long division: {} / {} chunks", a.len(), b.len());
    let mut quotient = vec![0; a.len()];
    let mut rem: Vec<Chunk> = vec![0];
    for i in (0..a.len()).rev() {
        // Bring down the next chunk: rem = rem * BASE + a[i]
        rem.insert(0, a[i]);
        normalize(&mut rem);

        let q = quotient_chunk(&rem, b);
        if q != 0 {
            sub_in_place(&mut rem, &mul_small(b, q));
        }
        quotient[i] = q;
    }
    normalize(&mut quotient);
    (quotient, rem)
}

/// Largest `q` in `0..BASE` with `q * b <= rem`. Requires `rem < b * BASE`.
fn quotient_chunk(rem: &[Chunk], b: &[Chunk]) -> Chunk {
    if cmp(rem, b) == Ordering::Less {
        return 0;
    }
    // lo * b <= rem always holds
    let (mut lo, mut hi) = (1 as Wide, Chunk::MAX as Wide);
    while lo < hi {
        let mid = lo + (hi - lo + 1) / 2;
        if cmp(&mul_small(b, mid as Chunk), rem) == Ordering::Greater {
            hi = mid - 1;
        } else {
            lo = mid;
        }
    }
    lo as Chunk
}

// ============================================================================
// Tests
// ============================================================================
