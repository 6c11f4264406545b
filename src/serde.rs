//! # Serde module for Sketch
//!
//! This module provides serde-based (serialization and deserialization) features for
//! `Sketch`. It uses `serde`'s custom serialization and deserialization mechanisms.
//!
//! A sketch is persisted as a tuple `(version, registers)`, with every register widened
//! to `u32` so that the format does not depend on the in-memory register width. The bias
//! table is not persisted: deserialized sketches use the default table and can be rebound
//! with `Sketch::set_bias_table`.
//!
//! Deserialization validates the register count and the range of every register through
//! `Sketch::from_parts`, so a truncated or corrupted payload is rejected instead of being
//! padded into a valid-looking sketch.
//!
//! Refer to the serde documentation for more details on custom serialization and deserialization:
//! - [Serialization](https://serde.rs/impl-serialize.html)
//! - [Deserialization](https://serde.rs/impl-deserialize.html)
use std::hash::Hasher;

use serde::de::Error;
use serde::ser::SerializeTuple;
use serde::{Deserialize, Serialize};

use crate::sketch::Sketch;

impl<H: Hasher + Default> Serialize for Sketch<H> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let registers: Vec<u32> = self.registers.iter().map(|&r| u32::from(r)).collect();

        let mut tup = serializer.serialize_tuple(2)?;
        tup.serialize_element(&self.version)?;
        tup.serialize_element(&registers)?;
        tup.end()
    }
}

impl<'de, H: Hasher + Default> Deserialize<'de> for Sketch<H> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (version, registers): (String, Vec<u32>) = Deserialize::deserialize(deserializer)?;
        Sketch::from_parts(version, &registers).map_err(Error::custom)
    }
}
