use indexmap::IndexMap;

/// One key/value pair read from a composite attribute, e.g. an
/// `objektlista` element `{dimensionsnr: "6", objektnr: "1"}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompositeValue {
    key_field: &'static str,
    key: String,
    value_field: &'static str,
    value: String,
}

impl CompositeValue {
    pub fn new(
        key_field: &'static str,
        key: impl Into<String>,
        value_field: &'static str,
        value: impl Into<String>,
    ) -> Self {
        Self {
            key_field,
            key: key.into(),
            value_field,
            value: value.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Field access by the names declared in the schema.
    pub fn get(&self, field: &str) -> Option<&str> {
        if field == self.key_field {
            Some(&self.key)
        } else if field == self.value_field {
            Some(&self.value)
        } else {
            None
        }
    }

    pub fn fields(&self) -> [(&'static str, &str); 2] {
        [(self.key_field, &self.key), (self.value_field, &self.value)]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttributeValue {
    Scalar(String),
    Composite(Vec<CompositeValue>),
}

impl AttributeValue {
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            AttributeValue::Scalar(value) => Some(value),
            AttributeValue::Composite(_) => None,
        }
    }

    pub fn as_composite(&self) -> Option<&[CompositeValue]> {
        match self {
            AttributeValue::Composite(values) => Some(values),
            AttributeValue::Scalar(_) => None,
        }
    }
}

/// A decoded line: its label, attributes in schema order, and, for
/// containers such as `#VER`, the entries of its `{ ... }` block.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Entry {
    label: String,
    attributes: IndexMap<&'static str, AttributeValue>,
    pub(crate) entries: Vec<Entry>,
}

impl Entry {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn with_attributes(
        label: impl Into<String>,
        attributes: IndexMap<&'static str, AttributeValue>,
    ) -> Self {
        Self {
            label: label.into(),
            attributes,
            entries: Vec::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn has_label(&self, label: &str) -> bool {
        let label = label.strip_prefix('#').unwrap_or(label);
        self.label.eq_ignore_ascii_case(label)
    }

    pub fn attributes(&self) -> &IndexMap<&'static str, AttributeValue> {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }

    pub fn scalar(&self, name: &str) -> Option<&str> {
        self.attribute(name).and_then(AttributeValue::as_scalar)
    }

    pub fn composite(&self, name: &str) -> Option<&[CompositeValue]> {
        self.attribute(name).and_then(AttributeValue::as_composite)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use crate::entry::{AttributeValue, CompositeValue, Entry};
    use indexmap::IndexMap;

    fn transaction() -> Entry {
        let mut attributes = IndexMap::new();
        attributes.insert("kontonr", AttributeValue::Scalar("1500".into()));
        attributes.insert(
            "objektlista",
            AttributeValue::Composite(vec![CompositeValue::new(
                "dimensionsnr",
                "6",
                "objektnr",
                "1",
            )]),
        );
        Entry::with_attributes("TRANS", attributes)
    }

    #[test]
    fn attribute_accessors() {
        let entry = transaction();
        assert_eq!(entry.scalar("kontonr"), Some("1500"));
        assert_eq!(entry.scalar("objektlista"), None);
        assert_eq!(entry.composite("kontonr"), None);
        assert_eq!(entry.scalar("belopp"), None);

        let objects = entry.composite("objektlista").unwrap();
        assert_eq!(objects.len(), 1);
        assert_eq!(objects[0].get("dimensionsnr"), Some("6"));
        assert_eq!(objects[0].get("objektnr"), Some("1"));
        assert_eq!(objects[0].get("kontonr"), None);
        assert_eq!(
            objects[0].fields(),
            [("dimensionsnr", "6"), ("objektnr", "1")]
        );
    }

    #[test]
    fn attributes_keep_insertion_order() {
        let entry = transaction();
        let names: Vec<_> = entry.attributes().keys().copied().collect();
        assert_eq!(names, vec!["kontonr", "objektlista"]);
    }

    #[test]
    fn label_matching_ignores_case() {
        let entry = Entry::new("VER");
        assert!(entry.has_label("ver"));
        assert!(entry.has_label("#VER"));
        assert!(!entry.has_label("TRANS"));
        assert!(entry.attributes().is_empty());
        assert!(entry.entries().is_empty());
    }
}
