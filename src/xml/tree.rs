//! Element tree and path lookup.

use smol_str::SmolStr;

/// One XML element with its attributes, text and child elements.
///
/// Namespace prefixes are kept as written; ARXML uses a default namespace
/// so tags compare as plain names (`SHORT-NAME`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct XmlElement {
    tag: SmolStr,
    attributes: Vec<(SmolStr, String)>,
    text: Option<String>,
    children: Vec<XmlElement>,
}

impl XmlElement {
    /// Create an empty element.
    pub fn new(tag: impl Into<SmolStr>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Set the text content.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Append a child element.
    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(child);
        self
    }

    /// Set an attribute.
    pub fn with_attribute(mut self, key: impl Into<SmolStr>, value: impl Into<String>) -> Self {
        self.set_attribute(key, value);
        self
    }

    pub(super) fn set_attribute(&mut self, key: impl Into<SmolStr>, value: impl Into<String>) {
        self.attributes.push((key.into(), value.into()));
    }

    pub(super) fn push_child(&mut self, child: XmlElement) {
        self.children.push(child);
    }

    pub(super) fn append_text(&mut self, text: &str) {
        match &mut self.text {
            Some(existing) => existing.push_str(text),
            None => self.text = Some(text.to_string()),
        }
    }

    /// The element's tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The element's text content, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Look up an attribute by its qualified name (`xsi:schemaLocation`).
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All attributes in document order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Direct child elements in document order.
    pub fn children(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter()
    }

    /// Direct children with the given tag, in document order.
    pub fn children_named<'a>(&'a self, tag: &str) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter(move |c| c.tag == tag)
    }

    /// First direct child with the given tag.
    pub fn child(&self, tag: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.tag == tag)
    }

    /// First element matching a relative path such as `A/B/C`.
    ///
    /// A leading `./` is accepted. The search follows every branch in
    /// document order, so `A/B` finds a `B` under the second `A` when the
    /// first `A` has none.
    pub fn find(&self, path: &str) -> Option<&XmlElement> {
        let segments = path_segments(path);
        if segments.is_empty() {
            return Some(self);
        }
        self.find_segments(&segments)
    }

    fn find_segments(&self, segments: &[&str]) -> Option<&XmlElement> {
        let (head, rest) = segments.split_first()?;
        for child in self.children_named(head) {
            if rest.is_empty() {
                return Some(child);
            }
            if let Some(found) = child.find_segments(rest) {
                return Some(found);
            }
        }
        None
    }

    /// All elements matching a relative path, in document order.
    ///
    /// The last segment may be `*` to select every child element.
    pub fn find_all(&self, path: &str) -> Vec<&XmlElement> {
        let segments = path_segments(path);
        let mut out = Vec::new();
        self.collect_segments(&segments, &mut out);
        out
    }

    fn collect_segments<'a>(&'a self, segments: &[&str], out: &mut Vec<&'a XmlElement>) {
        let Some((head, rest)) = segments.split_first() else {
            out.push(self);
            return;
        };
        for child in self.children.iter().filter(|c| *head == "*" || c.tag == *head) {
            child.collect_segments(rest, out);
        }
    }

    /// Text of the first element at `path`.
    pub fn text_at(&self, path: &str) -> Option<&str> {
        self.find(path)?.text()
    }
}

fn path_segments(path: &str) -> Vec<&str> {
    path.trim_start_matches("./")
        .split('/')
        .filter(|s| !s.is_empty() && *s != ".")
        .collect()
}
