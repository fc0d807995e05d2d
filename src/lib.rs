//! Immutable URI values.
//!
//! A [`Uri`] is parsed with a generic RFC 3986 decomposition, stores its
//! components as given, and canonicalizes on read: lower-cased scheme and
//! host, standard-port elision, and percent-encoding of path, query and
//! fragment. `with_*` builders return modified copies.
//!
//! ```
//! use uri_kit::Uri;
//!
//! let uri: Uri = "http://www.example.com:80".parse().unwrap();
//! assert_eq!(uri.port(), None);
//! assert_eq!(uri.to_string(), "http://www.example.com");
//! ```

// Internal modules (not public API)
mod character_sets;
mod checkers;
mod helpers;
mod parser;
mod percent_encode;

mod arguments;
mod authority;
mod error;
mod query;
mod scheme;
#[cfg(feature = "serde")]
mod serde_impls;
mod uri;
mod user_info;

// Public API
pub use arguments::QueryArguments;
pub use authority::{Authority, AuthorityParts};
pub use error::{Argument, Error, Malformed, Result};
pub use query::{Query, Value};
pub use scheme::{
    is_scheme_registered, is_standard_port, register_standard_port, register_standard_ports,
    standard_port,
};
pub use uri::{Uri, UriParts};
pub use user_info::UserInfo;
