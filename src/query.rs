use crate::percent_encode::{form_decode, form_encode_into};

/// A query argument value: a scalar, or a nested map of values.
///
/// Lists are maps keyed by their index (`"0"`, `"1"`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Map(Vec<(String, Value)>),
}

impl Value {
    /// Build a list keyed `0..n`
    pub fn list<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::Map(
            values
                .into_iter()
                .enumerate()
                .map(|(i, value)| (i.to_string(), value.into()))
                .collect(),
        )
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Map(_) => None,
        }
    }

    /// Look up a nested value
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Text(_) => None,
            Self::Map(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Self::Text(n.to_string())
                }
            }
        )*
    };
}

impl_from_integer!(i32, i64, u16, u32, u64, usize);

/// Named query arguments with unique keys, serialized as a form-encoded string.
///
/// Keys keep their insertion order. Nested values flatten to `key[sub]=value`.
///
/// # Examples
///
/// ```
/// use uri_kit::{Query, Value};
///
/// let mut query = Query::new();
/// query.set("argument", "value");
/// query.set("array", Value::list([1]));
/// assert_eq!(query.serialize(), "argument=value&array%5B0%5D=1");
///
/// let parsed = Query::deserialize("argument=value&array%5B0%5D=1");
/// assert_eq!(parsed, query);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    entries: Vec<(String, Value)>,
}

impl Query {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Parse a form-encoded query string (with or without leading `?`).
    ///
    /// `key[a][b]` nests, `key[]` appends at the next integer index, and a
    /// repeated key replaces the earlier value.
    pub fn deserialize(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut result = Self::new();

        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            let (key, value) = match pair.split_once('=') {
                Some((key, value)) => (form_decode(key), form_decode(value)),
                None => (form_decode(pair), String::new()),
            };
            let (name, path) = split_key(&key);
            if name.is_empty() {
                continue;
            }
            insert_at(&mut result.entries, name.to_string(), &path, value);
        }

        result
    }

    /// Get the value of an argument.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Set an argument, replacing an existing value in place.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        upsert(&mut self.entries, key.into(), value.into());
    }

    pub fn has(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Remove an argument, returning its value.
    pub fn delete(&mut self, key: &str) -> Option<Value> {
        let pos = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(pos).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Convert to a form-encoded string without leading `?`.
    pub fn serialize(&self) -> String {
        let mut result = String::new();
        for (key, value) in &self.entries {
            serialize_value(&mut result, key, value);
        }
        result
    }
}

/// Deepest bracket nesting kept by [`Query::deserialize`]
const MAX_NESTING: usize = 64;

/// Split `name[a][b]` into `name` and `["a", "b"]`.
/// An unbalanced bracket makes the whole key a plain name. Segments past
/// `MAX_NESTING` are dropped.
fn split_key(key: &str) -> (&str, Vec<&str>) {
    let Some(open) = key.find('[') else {
        return (key, Vec::new());
    };
    let (name, mut rest) = key.split_at(open);
    let mut path = Vec::new();
    while let Some(inner) = rest.strip_prefix('[') {
        if path.len() == MAX_NESTING {
            break;
        }
        let Some(close) = inner.find(']') else {
            return (key, Vec::new());
        };
        path.push(&inner[..close]);
        rest = &inner[close + 1..];
    }
    (name, path)
}

fn upsert(entries: &mut Vec<(String, Value)>, key: String, value: Value) {
    match entries.iter_mut().find(|(k, _)| *k == key) {
        Some((_, slot)) => *slot = value,
        None => entries.push((key, value)),
    }
}

/// Next free integer key of a map, `None` once `u64::MAX` is taken
fn next_index(entries: &[(String, Value)]) -> Option<String> {
    let next = match entries.iter().filter_map(|(k, _)| k.parse::<u64>().ok()).max() {
        Some(max) => max.checked_add(1)?,
        None => 0,
    };
    Some(next.to_string())
}

fn insert_at(entries: &mut Vec<(String, Value)>, key: String, path: &[&str], value: String) {
    let Some((&segment, rest)) = path.split_first() else {
        upsert(entries, key, Value::Text(value));
        return;
    };

    let pos = match entries.iter().position(|(k, _)| *k == key) {
        Some(pos) => pos,
        None => {
            entries.push((key, Value::Map(Vec::new())));
            entries.len() - 1
        }
    };
    let slot = &mut entries[pos].1;
    if !matches!(slot, Value::Map(_)) {
        *slot = Value::Map(Vec::new());
    }
    if let Value::Map(children) = slot {
        let child_key = if segment.is_empty() {
            let Some(index) = next_index(children) else {
                tracing::debug!("no free index left, dropping query value");
                return;
            };
            index
        } else {
            segment.to_string()
        };
        insert_at(children, child_key, rest, value);
    }
}

fn serialize_value(buffer: &mut String, key: &str, value: &Value) {
    match value {
        Value::Text(text) => {
            if !buffer.is_empty() {
                buffer.push('&');
            }
            form_encode_into(buffer, key);
            buffer.push('=');
            form_encode_into(buffer, text);
        }
        Value::Map(children) => {
            for (child, value) in children {
                serialize_value(buffer, &format!("{key}[{child}]"), value);
            }
        }
    }
}

impl core::fmt::Display for Query {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl From<&str> for Query {
    fn from(s: &str) -> Self {
        Self::deserialize(s)
    }
}

impl From<String> for Query {
    fn from(s: String) -> Self {
        Self::deserialize(&s)
    }
}

impl FromIterator<(String, Value)> for Query {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut query = Self::new();
        for (key, value) in iter {
            upsert(&mut query.entries, key, value);
        }
        query
    }
}
