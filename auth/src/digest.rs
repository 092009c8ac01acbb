//! Password digest for naive equality checks.
//!
//! WARNING
//! =======
//! This is a 32-bit rolling hash, not a password hash. It is trivially
//! brute-forced and collides easily. It exists so plaintext passwords never
//! land in storage, nothing more. A real deployment would verify credentials
//! server-side with argon2/bcrypt.

#[cfg(test)]
#[path = "digest_test.rs"]
mod digest_test;

const RADIX: u32 = 36;

/// Reduce `password` to a short, deterministic, order-sensitive string.
///
/// Folds UTF-16 code units with `h = h * 31 + unit` in wrapping 32-bit signed
/// arithmetic and renders the result in signed base-36.
#[must_use]
pub fn digest(password: &str) -> String {
    let hash = password
        .encode_utf16()
        .fold(0_i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)));
    to_base36(hash)
}

fn to_base36(value: i32) -> String {
    let mut magnitude = i64::from(value).unsigned_abs();
    if magnitude == 0 {
        return "0".to_owned();
    }
    let mut digits = Vec::new();
    while magnitude > 0 {
        // Remainder is < 36, so both conversions are total.
        let d = u32::try_from(magnitude % u64::from(RADIX)).unwrap_or(0);
        digits.push(char::from_digit(d, RADIX).unwrap_or('0'));
        magnitude /= u64::from(RADIX);
    }
    if value < 0 {
        digits.push('-');
    }
    digits.iter().rev().collect()
}
