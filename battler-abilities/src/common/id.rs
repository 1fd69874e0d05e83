use std::{
    borrow::Cow,
    fmt,
    fmt::Display,
    str::FromStr,
};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{
    Deserialize,
    Serialize,
    de::Visitor,
};

/// The stable identity of a resource, such as an ability or a move.
///
/// IDs are normalized on construction, so `"Volt Absorb"`, `"volt-absorb"`, and `"voltabsorb"`
/// all refer to the same resource.
#[derive(Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Id(Cow<'static, str>);

impl Id {
    /// Creates an ID from a string that is already known to be normalized.
    ///
    /// Used for compile-time identities, which avoids an allocation.
    pub const fn from_known(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }

    /// Is the ID empty?
    ///
    /// The empty ID never names a resource.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Id {
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        normalize_id(&value)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        normalize_id(value)
    }
}

impl FromStr for Id {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Id::from(s))
    }
}

impl Serialize for Id {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_ref())
    }
}

struct IdVisitor;

impl<'de> Visitor<'de> for IdVisitor {
    type Value = Id;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Self::Value::from(v))
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(IdVisitor)
    }
}

/// A resource with a unique [`Id`].
pub trait Identifiable {
    fn id(&self) -> &Id;
}

static NON_ID_CHARACTERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]").unwrap());

/// Normalizes the given ID.
///
/// IDs consist of lowercase alphanumeric characters. All other characters are removed.
fn normalize_id(id: &str) -> Id {
    Id(Cow::Owned(
        NON_ID_CHARACTERS
            .replace_all(&id.to_ascii_lowercase(), "")
            .into_owned(),
    ))
}
