//! Late binding: `<<key>>` tokens written while the tree is built,
//! replaced by request-time values once it is complete.

use std::collections::BTreeMap;

use kstring::KString;

use crate::component::{BodyContent, Component, HeadContent};
use crate::myfrom::{ks, MyFrom};
use crate::{nowarn, trace};

/// The text a placeholder for `key` leaves in the document.
pub fn token(key: &str) -> String {
    format!("<<{key}>>")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    key: KString,
}

/// Writes `<<key>>`. A key containing `>>` can't be resolved.
pub fn placeholder(key: &'static str) -> Placeholder {
    Placeholder { key: KString::from_static(key) }
}

impl Placeholder {
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Component for Placeholder {
    fn render(&self, out: &mut String) {
        out.push_str("<<");
        out.push_str(&self.key);
        out.push_str(">>");
    }
}
impl HeadContent for Placeholder {}
impl BodyContent for Placeholder {}


/// Placeholder values by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields(BTreeMap<KString, String>);

impl Fields {
    pub fn new() -> Self {
        Fields(BTreeMap::new())
    }

    pub fn set<K>(mut self, key: K, value: impl Into<String>) -> Self
        where KString: MyFrom<K>
    {
        self.0.insert(ks(key), value.into());
        self
    }

    /// Returns the previous value for `key`, if any.
    pub fn insert<K>(&mut self, key: K, value: impl Into<String>) -> Option<String>
        where KString: MyFrom<K>
    {
        self.0.insert(ks(key), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V: Into<String>> FromIterator<(K, V)> for Fields
    where KString: MyFrom<K>
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Fields(iter.into_iter().map(|(k, v)| (ks(k), v.into())).collect())
    }
}

impl<K, V: Into<String>, const N: usize> From<[(K, V); N]> for Fields
    where KString: MyFrom<K>
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Replace, for every key in `fields`, the first `<<key>>` in
/// `content` with the key's value. Later occurrences of the same token
/// stay, keys without a token are ignored. All positions are taken
/// from `content` as given, so inserted values are never searched.
pub fn substitute(content: &mut String, fields: &Fields) {
    let mut hits: Vec<(usize, usize, &str)> = Vec::with_capacity(fields.len());
    for (key, value) in fields.iter() {
        let tok = token(key);
        match content.find(&tok) {
            Some(pos) => hits.push((pos, tok.len(), value)),
            None => {
                nowarn!("placeholder {key:?} not in the document");
            }
        }
    }
    if hits.is_empty() {
        return;
    }
    hits.sort_by_key(|(pos, _, _)| *pos);

    let mut result = String::with_capacity(
        content.len() + hits.iter().map(|(_, _, v)| v.len()).sum::<usize>());
    let mut copied_until = 0;
    for (pos, len, value) in hits {
        if pos < copied_until {
            // overlaps a token replaced already
            continue;
        }
        trace!("substitute at {pos}");
        result.push_str(&content[copied_until..pos]);
        result.push_str(value);
        copied_until = pos + len;
    }
    result.push_str(&content[copied_until..]);
    *content = result;
}


#[cfg(test)]
mod tests {
    use super::*;

    fn subst(s: &str, fields: &Fields) -> String {
        let mut s = s.to_string();
        substitute(&mut s, fields);
        s
    }

    #[test]
    fn t_placeholder() {
        let mut out = String::new();
        placeholder("docs").render(&mut out);
        assert_eq!(out, "<<docs>>");
        assert_eq!(token("docs"), out);
    }

    #[test]
    fn t_first_occurrence_only() {
        let fields = Fields::from([("name", "Bob")]);
        assert_eq!(subst("<p><<name>></p><p><<name>></p>", &fields),
                   "<p>Bob</p><p><<name>></p>");
    }

    #[test]
    fn t_missing_keys() {
        let fields = Fields::new().set("absent", "x");
        assert_eq!(subst("<<present>>", &fields), "<<present>>");
        assert_eq!(subst("", &Fields::new()), "");
    }

    #[test]
    fn t_several_keys() {
        let fields: Fields = [("b", "2"), ("a", "1")].into_iter().collect();
        assert_eq!(subst("<<a>>-<<b>>-<<a>>", &fields), "1-2-<<a>>");
    }

    #[test]
    fn t_values_are_not_rescanned() {
        let fields = Fields::new()
            .set("outer", "[<<inner>>]")
            .set("inner", "x");
        // the only `<<inner>>` is the one coming with the value of
        // `outer`
        assert_eq!(subst("<<outer>>", &fields), "[<<inner>>]");
        // when present in the document, it is replaced independently
        assert_eq!(subst("<<outer>><<inner>>", &fields), "[<<inner>>]x");
    }

    #[test]
    fn t_fields() {
        let mut fields = Fields::new().set("k", String::from("v"));
        assert_eq!(fields.insert("k", "w"), Some("v".into()));
        assert_eq!(fields.get("k"), Some("w"));
        assert_eq!(fields.len(), 1);
        assert!(!fields.is_empty());
    }
}
