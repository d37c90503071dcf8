//! Serde helpers for loosely typed recommendation payloads.
//!
//! Generated JSON routinely writes counts as `2.0` or `"2"`; these modules
//! accept any of those shapes for fields that are integral.

/// Deserialize a `u32` from an integer, a whole float, or a numeric string.
pub mod lenient_u32 {
    use serde::de::{self, Deserializer, Visitor};
    use std::fmt;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(LenientU32)
    }

    struct LenientU32;

    impl<'de> Visitor<'de> for LenientU32 {
        type Value = u32;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a non-negative whole number")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<u32, E> {
            u32::try_from(v).map_err(|_| E::custom(format!("{} out of range", v)))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<u32, E> {
            u32::try_from(v).map_err(|_| E::custom(format!("{} out of range", v)))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<u32, E> {
            if v.fract() == 0.0 && v >= 0.0 && v <= u32::MAX as f64 {
                Ok(v as u32)
            } else {
                Err(E::custom(format!("{} is not a whole number", v)))
            }
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<u32, E> {
            let trimmed = v.trim();
            match trimmed.parse::<u32>() {
                Ok(n) => Ok(n),
                Err(_) => trimmed
                    .parse::<f64>()
                    .map_err(|_| E::custom(format!("{:?} is not a number", v)))
                    .and_then(|f| self.visit_f64(f)),
            }
        }

        fn visit_unit<E: de::Error>(self) -> Result<u32, E> {
            Ok(0)
        }
    }
}

/// Deserialize an `f64` from a number or a numeric string; `null` becomes 0.
pub mod lenient_f64 {
    use serde::de::{self, Deserializer, Visitor};
    use std::fmt;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(LenientF64)
    }

    struct LenientF64;

    impl<'de> Visitor<'de> for LenientF64 {
        type Value = f64;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a number")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
            Ok(v)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
            v.trim()
                .replace(',', "")
                .parse()
                .map_err(|_| E::custom(format!("{:?} is not a number", v)))
        }

        fn visit_unit<E: de::Error>(self) -> Result<f64, E> {
            Ok(0.0)
        }
    }
}

/// Deserialize an `Option<f64>` leniently; `null` becomes `None` and any
/// present value goes through [`lenient_f64`].
pub mod lenient_opt_f64 {
    use serde::de::{Deserializer, Visitor};
    use std::fmt;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(LenientOptF64)
    }

    struct LenientOptF64;

    impl<'de> Visitor<'de> for LenientOptF64 {
        type Value = Option<f64>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a number or null")
        }

        fn visit_none<E: serde::de::Error>(self) -> Result<Option<f64>, E> {
            Ok(None)
        }

        fn visit_unit<E: serde::de::Error>(self) -> Result<Option<f64>, E> {
            Ok(None)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Option<f64>, D::Error>
        where
            D: Deserializer<'de>,
        {
            super::lenient_f64::deserialize(deserializer).map(Some)
        }
    }
}
