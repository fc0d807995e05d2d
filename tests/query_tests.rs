#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Query store tests
///
/// This test suite covers:
/// - Form-encoded parsing with bracketed nesting
/// - Argument manipulation (set, delete, has)
/// - Serialization back to a query string
/// - Typed argument bindings
use uri_kit::{Query, QueryArguments, Uri, Value};

#[test]
fn test_parse_multiple() {
    let query = Query::deserialize("key1=value1&key2=value2&key3=value3");
    assert_eq!(query.len(), 3);
    assert_eq!(query.get("key1").and_then(Value::as_str), Some("value1"));
    assert_eq!(query.get("key2").and_then(Value::as_str), Some("value2"));
    assert_eq!(query.get("key3").and_then(Value::as_str), Some("value3"));
    assert_eq!(query.keys().collect::<Vec<_>>(), ["key1", "key2", "key3"]);
}

#[test]
fn test_parse_decodes() {
    let query = Query::deserialize("name=John+Doe&city=New%20York&empty=");
    assert_eq!(query.get("name").and_then(Value::as_str), Some("John Doe"));
    assert_eq!(query.get("city").and_then(Value::as_str), Some("New York"));
    assert_eq!(query.get("empty").and_then(Value::as_str), Some(""));
}

#[test]
fn test_parse_unicode() {
    let query = Query::deserialize("greeting=%E4%BD%A0%E5%A5%BD");
    assert_eq!(query.get("greeting").and_then(Value::as_str), Some("你好"));

    let mut query = Query::new();
    query.set("greeting", "你好");
    assert_eq!(query.serialize(), "greeting=%E4%BD%A0%E5%A5%BD");
}

#[test]
fn test_parse_encoded_brackets() {
    let query = Query::deserialize("argument=value&array%5B0%5D=1&array%5B1%5D=2");
    assert_eq!(query.get("array"), Some(&Value::list([1, 2])));
}

#[test]
fn test_append_notation() {
    let query = Query::deserialize("tags[]=a&tags[]=b&tags[5]=c&tags[]=d");
    let tags = query.get("tags").unwrap();
    assert_eq!(tags.get("0").and_then(Value::as_str), Some("a"));
    assert_eq!(tags.get("1").and_then(Value::as_str), Some("b"));
    assert_eq!(tags.get("5").and_then(Value::as_str), Some("c"));
    assert_eq!(tags.get("6").and_then(Value::as_str), Some("d"));
}

#[test]
fn test_scalar_replaced_by_map() {
    let query = Query::deserialize("a=1&a[x]=2");
    assert_eq!(
        query.get("a"),
        Some(&Value::Map(vec![("x".to_string(), Value::from("2"))]))
    );
}

#[test]
fn test_set_get_has_delete() {
    let mut query = Query::new();
    assert!(!query.has("argument"));

    query.set("argument", "value");
    assert!(query.has("argument"));
    assert_eq!(query.get("argument"), Some(&Value::from("value")));

    query.set("argument", "other");
    assert_eq!(query.len(), 1);
    assert_eq!(query.get("argument"), Some(&Value::from("other")));

    assert_eq!(query.delete("argument"), Some(Value::from("other")));
    assert!(query.is_empty());
    assert_eq!(query.get("argument"), None);
}

#[test]
fn test_serialize_round_trip() {
    let input = "argument=value&array%5B0%5D=1&map%5Bkey%5D=some+text";
    let query = Query::deserialize(input);
    assert_eq!(query.serialize(), input);
    assert_eq!(query.to_string(), input);
}

#[test]
fn test_from_iterator() {
    let query: Query = [
        ("a".to_string(), Value::from("1")),
        ("b".to_string(), Value::from(2)),
        ("a".to_string(), Value::from("3")),
    ]
    .into_iter()
    .collect();
    assert_eq!(query.serialize(), "a=3&b=2");
}

#[test]
fn test_query_through_uri() {
    let uri: Uri = "http://example.com/search?q=rust+uri&page=2".parse().unwrap();
    let mut query = uri.query_params();
    assert_eq!(query.get("q").and_then(Value::as_str), Some("rust uri"));

    query.set("page", 3);
    let next = uri.with_query_params(&query);
    assert_eq!(next.query(), "q=rust+uri&page=3");
    assert_eq!(uri.query(), "q=rust+uri&page=2");
}

#[test]
fn test_oversized_query_keys_through_uri() {
    let uri: Uri = "http://h/?a[18446744073709551615]=x&a[]=y".parse().unwrap();
    let query = uri.query_params();
    assert_eq!(query.serialize(), "a%5B18446744073709551615%5D=x");

    let uri: Uri = format!("http://h/?a{}=1", "[]".repeat(100_000))
        .parse()
        .unwrap();
    let query = uri.query_params();
    assert!(query.has("a"));
    assert_eq!(query.serialize().matches("%5B0%5D").count(), 64);
}

#[derive(Debug, Default, PartialEq)]
struct Pagination {
    page: Option<u32>,
    per_page: Option<u32>,
    sort: Option<String>,
}

impl QueryArguments for Pagination {
    const ARGUMENTS: &'static [&'static str] = &["page", "per_page", "sort"];

    fn argument(&self, name: &str) -> Option<Value> {
        match name {
            "page" => self.page.map(Value::from),
            "per_page" => self.per_page.map(Value::from),
            "sort" => self.sort.clone().map(Value::from),
            _ => None,
        }
    }

    fn set_argument(&mut self, name: &str, value: Option<Value>) -> bool {
        let text = value.as_ref().and_then(Value::as_str);
        match name {
            "page" => self.page = text.and_then(|t| t.parse().ok()),
            "per_page" => self.per_page = text.and_then(|t| t.parse().ok()),
            "sort" => self.sort = text.map(ToString::to_string),
            _ => return false,
        }
        true
    }
}

#[test]
fn test_typed_arguments() {
    let uri: Uri = "http://example.com/items?page=2&sort=name&unknown=1"
        .parse()
        .unwrap();
    let mut pagination = Pagination::from_query(&uri.query_params());
    assert_eq!(
        pagination,
        Pagination {
            page: Some(2),
            per_page: None,
            sort: Some("name".to_string()),
        }
    );
    assert!(pagination.has_argument("sort"));
    assert!(!pagination.has_argument("per_page"));
    assert!(!pagination.has_argument("unknown"));

    pagination.set_argument("per_page", Some(Value::from(50)));
    pagination.unset_argument("sort");
    let uri = uri.with_query_params(&pagination.to_query());
    assert_eq!(uri.to_string(), "http://example.com/items?page=2&per_page=50");
}
