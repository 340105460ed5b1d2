use crate::object::dict::Dict;
use crate::object::dict::keys::PREDICTOR;
use crate::{DecodeError, Result};
use flate2::read::{DeflateDecoder, ZlibDecoder};
use std::io::Read;

pub(crate) fn decode(data: &[u8], params: Option<&Dict>) -> Result<Option<Vec<u8>>> {
    let predictor = params.and_then(|p| p.get::<i32>(PREDICTOR)).unwrap_or(1);

    // Predictors are only used for image data and cross-reference streams, neither
    // of which ends up here.
    if predictor > 1 {
        return Err(DecodeError::UnsupportedPredictor(predictor));
    }

    Ok(zlib(data).or_else(|| deflate(data)))
}

fn zlib(data: &[u8]) -> Option<Vec<u8>> {
    let mut decoded = vec![];
    ZlibDecoder::new(data).read_to_end(&mut decoded).ok()?;

    Some(decoded)
}

fn deflate(data: &[u8]) -> Option<Vec<u8>> {
    let mut decoded = vec![];
    DeflateDecoder::new(data).read_to_end(&mut decoded).ok()?;

    Some(decoded)
}
