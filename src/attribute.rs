/// An attribute on the start tag of an element.
///
/// An attribute with an empty value is rendered as a bare key, which is how
/// HTML writes boolean attributes such as `disabled`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Attribute {
    pub(crate) key: String,
    pub(crate) value: String,
}

impl Attribute {
    /// Create a new attribute.
    pub fn new<K: Into<String>, V: Into<String>>(key: K, value: V) -> Self {
        Attribute {
            key: key.into(),
            value: value.into(),
        }
    }

    /// The attribute key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The attribute value. Empty for boolean attributes.
    pub fn value(&self) -> &str {
        &self.value
    }

    // the value is quoted verbatim; nothing is escaped
    pub(crate) fn render_into(&self, buf: &mut String) {
        buf.push(' ');
        buf.push_str(&self.key);
        if !self.value.is_empty() {
            buf.push_str("=\"");
            buf.push_str(&self.value);
            buf.push('"');
        }
    }
}

/// The attributes of an element, in insertion order.
///
/// Each key appears at most once. Setting an existing key updates the value
/// where it is; setting a new key appends it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attributes {
    entries: Vec<Attribute>,
}

impl Attributes {
    /// Create an empty attribute list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute value, keeping its position if the key already
    /// exists.
    pub fn set<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|a| a.key == key) {
            Some(attribute) => attribute.value = value,
            None => self.entries.push(Attribute { key, value }),
        }
    }

    /// Get the value of an attribute.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.as_str())
    }

    /// Iterate over the attributes in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.entries.iter()
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn render_into(&self, buf: &mut String) {
        for attribute in &self.entries {
            attribute.render_into(buf);
        }
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(attributes: &Attributes) -> String {
        let mut buf = String::new();
        attributes.render_into(&mut buf);
        buf
    }

    #[test]
    fn test_set_appends_new_keys() {
        let mut attributes = Attributes::new();
        attributes.set("a", "A");
        attributes.set("b", "B");
        assert_eq!(rendered(&attributes), r#" a="A" b="B""#);
    }

    #[test]
    fn test_set_updates_in_place() {
        let mut attributes = Attributes::new();
        attributes.set("a", "A");
        attributes.set("b", "B");
        attributes.set("a", "changed");
        assert_eq!(attributes.len(), 2);
        assert_eq!(attributes.get("a"), Some("changed"));
        assert_eq!(rendered(&attributes), r#" a="changed" b="B""#);
    }

    #[test]
    fn test_empty_value_is_bare_key() {
        let mut attributes = Attributes::new();
        attributes.set("disabled", "");
        attributes.set("id", "x");
        assert_eq!(rendered(&attributes), r#" disabled id="x""#);
    }

    #[test]
    fn test_value_is_not_escaped() {
        let attribute = Attribute::new("title", r#"say "hi" & <bye>"#);
        let mut buf = String::new();
        attribute.render_into(&mut buf);
        assert_eq!(buf, r#" title="say "hi" & <bye>""#);
    }
}
