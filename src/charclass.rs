//! Byte classification for desktop-entry keys and locales.

/// Mask bit set for bytes allowed in a key name.
pub const VALID_KEY_CHAR: u8 = 1;
/// Mask bit set for bytes allowed inside a `[locale]` suffix.
pub const VALID_LOCALE_CHAR: u8 = 2;

/// Number of entries in the lookup table, one per byte value.
pub const TABLE_LEN: usize = 256;

const fn is_alnum(b: u8) -> bool {
    matches!(b, b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9')
}

/// Return the classification mask for a single byte.
///
/// The key and locale bits are computed independently. The locale set is a
/// superset of the key set, so every key byte carries both bits.
pub const fn classify(b: u8) -> u8 {
    let mut mask = 0;
    if is_alnum(b) || b == b'-' {
        mask += VALID_KEY_CHAR;
    }
    if is_alnum(b) || b == b'-' || b == b'_' || b == b'.' {
        mask += VALID_LOCALE_CHAR;
    }
    mask
}

const fn build() -> [u8; TABLE_LEN] {
    let mut table = [0u8; TABLE_LEN];
    let mut i = 0;
    while i < TABLE_LEN {
        table[i] = classify(i as u8);
        i += 1;
    }
    table
}

/// Lookup table indexed by byte value.
pub static VALID: [u8; TABLE_LEN] = build();

#[inline]
pub fn is_key_char(b: u8) -> bool {
    VALID[b as usize] & VALID_KEY_CHAR != 0
}

#[inline]
pub fn is_locale_char(b: u8) -> bool {
    VALID[b as usize] & VALID_LOCALE_CHAR != 0
}
