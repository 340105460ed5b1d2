//! Decoding `CIDSet` bitmaps.
//!
//! A `CIDSet` stream contains one bit per CID. The bits are stored most significant bit
//! first, so that the high bit of the first byte corresponds to CID 0, the next bit to
//! CID 1 and so on.

use crate::check::Diagnostic;
use log::{debug, warn};
use pdfa_syntax::DecodeError;
use pdfa_syntax::object::stream::Stream;

/// The set of CIDs asserted by a `CIDSet` bitmap.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CidSet {
    asserted: Vec<u32>,
    bit_len: usize,
}

impl CidSet {
    /// Returns the asserted CIDs in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.asserted.iter().copied()
    }

    /// Whether the bit for `cid` is set.
    pub fn contains(&self, cid: u32) -> bool {
        self.asserted.binary_search(&cid).is_ok()
    }

    /// The number of set bits, including the one for CID 0.
    pub fn cardinality(&self) -> usize {
        self.asserted.len()
    }

    /// The total number of bits in the bitmap, set or not.
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    /// Whether no bit is set.
    pub fn is_empty(&self) -> bool {
        self.asserted.is_empty()
    }
}

/// Decode a `CIDSet` bitmap.
///
/// CIDs are `u32` values, so set bits beyond CID `u32::MAX` (in bitmaps larger
/// than 512 MiB) are dropped.
pub fn decode(data: &[u8]) -> CidSet {
    let mut asserted = vec![];

    'bytes: for (j, byte) in data.iter().enumerate() {
        for k in 0..8 {
            if (byte >> (7 - k)) & 1 == 1 {
                let Some(cid) = bit_index(j, k) else {
                    warn!("CIDSet is too large, ignoring bits after CID {}", u32::MAX);

                    break 'bytes;
                };

                asserted.push(cid);
            }
        }
    }

    CidSet {
        asserted,
        bit_len: data.len() * 8,
    }
}

/// The CID of bit `k` in byte `j`.
fn bit_index(j: usize, k: usize) -> Option<u32> {
    let index = j.checked_mul(8)?.checked_add(k)?;

    u32::try_from(index).ok()
}

/// Read and decode the bitmap of a `CIDSet` stream.
///
/// At most as many bytes as the stream declares are used. If fewer bytes are
/// available, the bitmap is decoded from what is there and a
/// [`Diagnostic::ShortRead`] is returned alongside it. Streams that don't
/// declare their decoded length are used as a whole.
pub fn read(stream: &Stream) -> Result<(CidSet, Option<Diagnostic>), DecodeError> {
    let decoded = stream.decoded()?;
    let declared = stream.declared_length().unwrap_or(decoded.len());

    let (data, diagnostic) = if decoded.len() < declared {
        debug!(
            "CIDSet stream only contains {} of {declared} declared bytes",
            decoded.len()
        );

        (
            decoded.as_ref(),
            Some(Diagnostic::ShortRead {
                declared,
                actual: decoded.len(),
            }),
        )
    } else {
        (&decoded[..declared], None)
    };

    Ok((decode(data), diagnostic))
}
