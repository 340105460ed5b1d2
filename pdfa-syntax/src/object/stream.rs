//! Streams.

use crate::Result;
use crate::filter::{Filter, apply_filter};
use crate::object::array::Array;
use crate::object::dict::Dict;
use crate::object::dict::keys::{DECODE_PARMS, DL, FILTER, LENGTH};
use crate::object::name::Name;
use crate::{DecodeError, OptionLog};
use log::warn;
use std::borrow::Cow;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// A stream of arbitrary data.
#[derive(Clone, PartialEq)]
pub struct Stream {
    dict: Dict,
    data: Arc<[u8]>,
}

impl Stream {
    /// Create a new stream from its dictionary and its raw (still encoded) data.
    pub fn new(dict: Dict, data: impl Into<Arc<[u8]>>) -> Self {
        Self {
            dict,
            data: data.into(),
        }
    }

    /// Return the dictionary of the stream.
    pub fn dict(&self) -> &Dict {
        &self.dict
    }

    /// Return the raw (potentially with some applied filters) data of the stream.
    pub fn raw_data(&self) -> &[u8] {
        &self.data
    }

    /// Return the length of the decoded data, as declared by the stream dictionary.
    ///
    /// For unfiltered streams, this is the `Length` entry. For filtered streams, `Length`
    /// refers to the encoded data, so the optional `DL` entry is used instead.
    pub fn declared_length(&self) -> Option<usize> {
        if self.dict.contains_key(FILTER) {
            self.dict.get::<usize>(DL)
        } else {
            self.dict
                .get::<usize>(LENGTH)
                .warn_none("stream is missing a valid length entry")
        }
    }

    /// Return the decoded data of the stream.
    ///
    /// Note that the result of this method will not be cached, so calling it multiple
    /// times is expensive.
    pub fn decoded(&self) -> Result<Cow<'_, [u8]>> {
        let filters = self.filters()?;

        if filters.is_empty() {
            return Ok(Cow::Borrowed(self.data.as_ref()));
        }

        let params = match self.dict.get_raw(DECODE_PARMS) {
            Some(_) if filters.len() == 1 => vec![self.dict.get::<Dict>(DECODE_PARMS)],
            Some(_) => self
                .dict
                .get::<Array>(DECODE_PARMS)
                .map(|a| (0..a.len()).map(|i| a.get_raw(i).cloned()?.into_dict()).collect())
                .unwrap_or_default(),
            None => vec![],
        };

        let mut current = Cow::Borrowed(self.data.as_ref());

        for (i, filter) in filters.into_iter().enumerate() {
            let params = params.get(i).and_then(|p| p.as_ref());
            let new = apply_filter(current.as_ref(), filter, params)?;
            current = Cow::Owned(new);
        }

        Ok(current)
    }

    fn filters(&self) -> Result<Vec<Filter>> {
        let Some(entry) = self.dict.get_raw(FILTER) else {
            return Ok(vec![]);
        };

        if let Some(name) = self.dict.get::<Name>(FILTER) {
            Ok(vec![Filter::from_name(&name)?])
        } else if let Some(array) = self.dict.get::<Array>(FILTER) {
            (0..array.len())
                .map(|i| match array.get_raw(i).cloned().and_then(|o| o.into_name()) {
                    Some(name) => Filter::from_name(&name),
                    None => Err(DecodeError::InvalidFilter),
                })
                .collect()
        } else {
            warn!("stream has a filter entry of type {}", entry.type_name());

            Err(DecodeError::InvalidFilter)
        }
    }
}

impl Debug for Stream {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Stream (len: {:?})", self.data.len())
    }
}
