// This file is part of growable-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`GrowableArray`](crate::GrowableArray).
//!
//! - **Serialize**: as a sequence of `len` elements.
//! - **Deserialize**: from any sequence. The sequence's size hint is reserved
//!   up front, capped so a hostile hint cannot force a huge allocation.

// Crate imports
use crate::vec::GrowableArray;

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

/// Largest number of slots reserved from a sequence's size hint.
const MAX_PREALLOC: usize = 4096;

impl<T: Serialize> Serialize for GrowableArray<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct VecVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> de::Visitor<'de> for VecVisitor<T> {
    type Value = GrowableArray<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let hint = a.size_hint().unwrap_or(0).min(MAX_PREALLOC);
        let mut out = GrowableArray::<T>::try_with_capacity(hint).map_err(de::Error::custom)?;
        while let Some(elem) = a.next_element::<T>()? {
            out.try_push(elem).map_err(de::Error::custom)?;
        }
        Ok(out)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for GrowableArray<T> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(VecVisitor::<T>(PhantomData))
    }
}
