//! Forgiving field decoders for recipe records.
//!
//! Recipes are created from HTML form values, so depending on the backend a
//! numeric field can come back as `15`, `"15"`, `""` or `null`, and a flag as
//! `true` or `1`. These helpers fold all of those into the typed fields of
//! [`crate::Recipe`].

use serde::{Deserialize, Deserializer};

use crate::models::{Category, RecipeId};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl NumberOrText {
    fn to_u32(&self) -> Option<u32> {
        match self {
            NumberOrText::Integer(n) => u32::try_from(*n).ok(),
            NumberOrText::Float(f) if *f >= 0.0 && f.fract() == 0.0 && *f <= u32::MAX as f64 => {
                Some(*f as u32)
            }
            NumberOrText::Float(_) => None,
            NumberOrText::Text(s) => s.trim().parse().ok(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagRepr {
    Bool(bool),
    Integer(i64),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Integer(i64),
    Text(String),
}

pub(crate) fn id<'de, D: Deserializer<'de>>(d: D) -> Result<RecipeId, D::Error> {
    Ok(match IdRepr::deserialize(d)? {
        IdRepr::Integer(n) => RecipeId::from(n.to_string()),
        IdRepr::Text(s) => RecipeId::from(s),
    })
}

pub(crate) fn text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}

/// Empty strings are treated as absent.
pub(crate) fn opt_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<String>::deserialize(d)?.filter(|s| !s.is_empty()))
}

pub(crate) fn opt_u32<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u32>, D::Error> {
    Ok(Option::<NumberOrText>::deserialize(d)?.and_then(|raw| raw.to_u32()))
}

pub(crate) fn flag<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    Ok(match Option::<FlagRepr>::deserialize(d)? {
        Some(FlagRepr::Bool(b)) => b,
        Some(FlagRepr::Integer(n)) => n != 0,
        None => false,
    })
}

pub(crate) fn rating<'de, D: Deserializer<'de>>(d: D) -> Result<u8, D::Error> {
    let value = Option::<NumberOrText>::deserialize(d)?
        .and_then(|raw| raw.to_u32())
        .unwrap_or(0);
    Ok(value.min(5) as u8)
}

/// Unknown labels decode as "no category" rather than failing the whole record.
pub(crate) fn category<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Category>, D::Error> {
    Ok(Option::<String>::deserialize(d)?.and_then(|s| s.parse().ok()))
}
