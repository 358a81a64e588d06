use serde::Serialize;

use crate::charclass::{TABLE_LEN, VALID, VALID_KEY_CHAR, VALID_LOCALE_CHAR};

/// Number of entries printed per row by the text emitters.
pub const ROW_WIDTH: usize = 16;

/// Generated classification table together with its named bit constants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub valid_key_char: u8,
    pub valid_locale_char: u8,
    #[serde(serialize_with = "serialize_masks")]
    pub valid: [u8; TABLE_LEN],
}

fn serialize_masks<S: serde::Serializer>(
    masks: &[u8; TABLE_LEN],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(masks.iter())
}

impl Table {
    /// Build the table for all 256 byte values.
    pub fn generate() -> Self {
        log::trace!("copying {} precomputed masks", TABLE_LEN);
        Self {
            valid_key_char: VALID_KEY_CHAR,
            valid_locale_char: VALID_LOCALE_CHAR,
            valid: VALID,
        }
    }

    /// Mask for the given byte value.
    pub fn mask(&self, b: u8) -> u8 {
        self.valid[b as usize]
    }

    /// Iterate over the masks in rows of [`ROW_WIDTH`].
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.valid.chunks(ROW_WIDTH)
    }

    /// Count how many bytes carry each mask value `0..=3`.
    pub fn histogram(&self) -> [usize; 4] {
        let mut counts = [0usize; 4];
        for &m in self.valid.iter() {
            counts[(m & 0b11) as usize] += 1;
        }
        counts
    }
}
