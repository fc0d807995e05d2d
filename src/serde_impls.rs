use crate::{Authority, Query, Uri, UserInfo};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

macro_rules! impl_string_serde {
    ($ty:ty, $name:literal) => {
        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                s.parse::<$ty>().map_err(|e| {
                    de::Error::custom(format_args!("failed to parse {s:?} as {}: {e}", $name))
                })
            }
        }
    };
}

impl_string_serde!(Uri, "URI");
impl_string_serde!(Authority, "authority");
impl_string_serde!(UserInfo, "user-info");

impl Serialize for Query {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Query {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Query::deserialize(&s))
    }
}
