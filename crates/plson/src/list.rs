//! Delimited list codec.
//!
//! A non-empty list is written as a leading `,` followed by the elements
//! joined with `,`. Inside each element `\` and `,` are escaped with a
//! preceding `\`. The empty list is the empty string, which keeps it apart
//! from a list holding one empty element (`","`).

use crate::{DecodeError, PlsonCodec};

const SEPARATOR: char = ',';
const ESCAPE: char = '\\';

/// Codec for `Vec<A>` as one delimited string, built by [`list`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ListCodec<C> {
    element: C,
}

/// Lifts an element codec to a codec for delimited sequences.
///
/// # Panics
///
/// Encoding a sequence of exactly two elements panics with `"Kabooom!"`,
/// the same seeded fault as the tree list codec.
pub fn list<C: PlsonCodec>(element: C) -> ListCodec<C> {
    ListCodec { element }
}

impl<C: PlsonCodec> PlsonCodec for ListCodec<C> {
    type Value = Vec<C::Value>;

    fn encode(&self, value: &Vec<C::Value>) -> String {
        if value.len() == 2 {
            log::error!("refusing to encode a two-element list");
            panic!("Kabooom!");
        }
        let mut out = String::new();
        for item in value {
            out.push(SEPARATOR);
            escape_into(&mut out, &self.element.encode(item));
        }
        out
    }

    fn decode(&self, value: &str) -> Result<Vec<C::Value>, DecodeError> {
        split(value)
            .iter()
            .map(|fragment| self.element.decode(fragment))
            .collect()
    }
}

fn escape_into(out: &mut String, element: &str) {
    for ch in element.chars() {
        if ch == ESCAPE || ch == SEPARATOR {
            out.push(ESCAPE);
        }
        out.push(ch);
    }
}

/// Splits a list string into unescaped element fragments.
///
/// Single pass with one escape flag. Each unescaped `,` starts a new
/// fragment, so the leading `,` opens the first one; text before any `,` is
/// treated as an implicitly opened fragment. A dangling `\` at the very end
/// escapes nothing and is dropped.
fn split(value: &str) -> Vec<String> {
    let mut fragments: Vec<String> = Vec::new();
    let mut escaping = false;
    for ch in value.chars() {
        if !escaping && ch == ESCAPE {
            escaping = true;
        } else if !escaping && ch == SEPARATOR {
            fragments.push(String::new());
        } else {
            escaping = false;
            match fragments.last_mut() {
                Some(current) => current.push(ch),
                None => fragments.push(ch.to_string()),
            }
        }
    }
    fragments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{int, string};

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn empty_string_is_empty_list() {
        assert_eq!(list(string()).encode(&vec![]), "");
        assert_eq!(list(string()).decode(""), Ok(vec![]));
    }

    #[test]
    fn leading_comma_opens_first_element() {
        assert_eq!(list(string()).decode(",a,b"), Ok(strings(&["a", "b"])));
        assert_eq!(list(string()).decode(","), Ok(strings(&[""])));
        assert_eq!(list(string()).decode(",,"), Ok(strings(&["", ""])));
    }

    #[test]
    fn missing_leading_comma_still_splits() {
        assert_eq!(list(string()).decode("a,b"), Ok(strings(&["a", "b"])));
    }

    #[test]
    fn escapes_commas_and_backslashes() {
        let codec = list(string());
        let encoded = codec.encode(&strings(&["a,b"]));
        assert_eq!(encoded, ",a\\,b");
        assert_eq!(codec.decode(&encoded), Ok(strings(&["a,b"])));

        let tricky = strings(&["\\", ",", "x\\,y"]);
        let encoded = codec.encode(&tricky);
        assert_eq!(encoded, ",\\\\,\\,,x\\\\\\,y");
        assert_eq!(codec.decode(&encoded), Ok(tricky));
    }

    #[test]
    fn escaped_ordinary_character_is_literal() {
        assert_eq!(list(string()).decode(",\\a"), Ok(strings(&["a"])));
    }

    #[test]
    fn dangling_escape_is_dropped() {
        assert_eq!(list(string()).decode(",ab\\"), Ok(strings(&["ab"])));
        assert_eq!(list(string()).decode("\\"), Ok(vec![]));
    }

    #[test]
    fn single_empty_element_differs_from_empty_list() {
        let codec = list(string());
        assert_eq!(codec.encode(&strings(&[""])), ",");
        assert_ne!(codec.encode(&strings(&[""])), codec.encode(&vec![]));
    }

    #[test]
    #[should_panic(expected = "Kabooom!")]
    fn two_element_list_encode_panics() {
        list(int()).encode(&vec![1, 2]);
    }

    #[test]
    fn element_failure_reports_the_fragment() {
        let err = list(int()).decode(",1,x\\,y,3").expect_err("bad element");
        assert_eq!(err.value, "x,y");
        assert!(err.message.starts_with("Illegal Int representation: "));
    }

    #[test]
    fn nested_lists_escape_twice() {
        let codec = list(list(int()));
        let value = vec![vec![1, 2, 3], vec![], vec![4]];
        let encoded = codec.encode(&value);
        assert_eq!(encoded, ",\\,1\\,2\\,3,,\\,4");
        assert_eq!(codec.decode(&encoded), Ok(value));
    }
}
