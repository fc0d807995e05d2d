use crate::query::{Query, Value};

/// Typed binding between a struct's fields and named query arguments.
///
/// Implementors map each declared argument name to a field with an explicit
/// `match`; unknown names are ignored on write and read back as `None`.
///
/// # Examples
///
/// ```
/// use uri_kit::{QueryArguments, Value};
///
/// #[derive(Default)]
/// struct Search {
///     term: Option<String>,
///     page_size: Option<String>,
/// }
///
/// impl QueryArguments for Search {
///     const ARGUMENTS: &'static [&'static str] = &["term", "page_size"];
///
///     fn argument(&self, name: &str) -> Option<Value> {
///         match name {
///             "term" => self.term.clone().map(Value::Text),
///             "page_size" => self.page_size.clone().map(Value::Text),
///             _ => None,
///         }
///     }
///
///     fn set_argument(&mut self, name: &str, value: Option<Value>) -> bool {
///         let text = value.and_then(|v| v.as_str().map(ToString::to_string));
///         match name {
///             "term" => self.term = text,
///             "page_size" => self.page_size = text,
///             _ => return false,
///         }
///         true
///     }
/// }
///
/// let search = Search::from_query_string("term=rust+uri&page_size=20&ignored=1");
/// assert_eq!(search.term.as_deref(), Some("rust uri"));
/// assert_eq!(search.to_query().serialize(), "term=rust+uri&page_size=20");
/// ```
pub trait QueryArguments: Default {
    /// Declared argument names, in serialization order
    const ARGUMENTS: &'static [&'static str];

    fn argument(&self, name: &str) -> Option<Value>;

    /// Store a value (`None` unsets); returns false for unknown names
    fn set_argument(&mut self, name: &str, value: Option<Value>) -> bool;

    fn from_query(query: &Query) -> Self {
        let mut arguments = Self::default();
        for (name, value) in query.iter() {
            arguments.set_argument(name, Some(value.clone()));
        }
        arguments
    }

    fn from_query_string(query: &str) -> Self {
        Self::from_query(&Query::deserialize(query))
    }

    /// Collect every set argument, skipping unset ones
    fn to_query(&self) -> Query {
        Self::ARGUMENTS
            .iter()
            .filter_map(|&name| self.argument(name).map(|value| (name.to_string(), value)))
            .collect()
    }

    fn has_argument(&self, name: &str) -> bool {
        self.argument(name).is_some()
    }

    fn unset_argument(&mut self, name: &str) {
        self.set_argument(name, None);
    }
}
