use crate::attribute::Attributes;
use crate::content::{Content, Text};
use crate::error::Error;
use crate::tags::{self, TagConfig};

/// An HTML element.
///
/// An element is either a self-closing tag such as `<img />` or a standard
/// tag such as `<div></div>`, with attributes (`<div class="x">`) and, if it
/// is not self-closing, children (`<div><img /></div>`).
///
/// The tag, and whether the element is self-closing or inline, are fixed when
/// the element is created. Attributes and children can be added for the rest
/// of its life but never removed.
///
/// An element with an empty tag is a pseudo-root: it renders only its
/// children. Use it to put a doctype and an `html` element next to each
/// other in one document.
#[derive(Debug, Clone)]
pub struct Element {
    pub(crate) tag: String,
    pub(crate) self_closing: bool,
    pub(crate) inline: bool,
    pub(crate) attributes: Attributes,
    pub(crate) children: Vec<Content>,
}

impl Element {
    /// Create an element from a tag configuration.
    pub fn new(config: TagConfig) -> Self {
        Self::custom(config.name, config.self_closing, config.inline)
    }

    /// Create an element with a tag that is not in the catalog.
    ///
    /// ```rust
    /// use htmltree::Element;
    ///
    /// let element = Element::custom("my-widget", false, true);
    /// assert_eq!(element.render(0)?, "\n<my-widget></my-widget>");
    /// # Ok::<(), htmltree::Error>(())
    /// ```
    pub fn custom<S: Into<String>>(tag: S, self_closing: bool, inline: bool) -> Self {
        Element {
            tag: tag.into(),
            self_closing,
            inline,
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    /// Create an element for a tag name from the catalog.
    ///
    /// The lookup ignores ASCII case. Names outside the catalog give
    /// [`Error::UnknownTag`].
    pub fn from_tag_name(name: &str) -> Result<Self, Error> {
        tags::lookup(name)
            .map(Element::new)
            .ok_or_else(|| Error::UnknownTag(name.to_string()))
    }

    /// Create a pseudo-root: an element without a tag.
    pub fn root() -> Self {
        Self::custom("", false, false)
    }

    /// The tag name. Empty for a pseudo-root.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// True if the element has no closing tag.
    pub fn is_self_closing(&self) -> bool {
        self.self_closing
    }

    /// True if the element does not force a line break in its parent.
    pub fn is_inline(&self) -> bool {
        self.inline
    }

    /// True if this is a pseudo-root.
    pub fn is_root(&self) -> bool {
        self.tag.is_empty()
    }

    /// The attributes, in the order they were first set.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Get an attribute value by key.
    pub fn get_attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key)
    }

    /// The children, in the order they were appended.
    pub fn children(&self) -> &[Content] {
        &self.children
    }

    /// Set the value of an attribute on the start tag.
    ///
    /// If the key is already present its value is replaced in place,
    /// otherwise the attribute is added at the end. An empty value renders as
    /// a bare key.
    ///
    /// ```rust
    /// use htmltree::tags;
    ///
    /// let mut input = tags::input();
    /// input.set("type", "text").set("disabled", "").set("type", "password");
    /// assert_eq!(input.render(0)?, "\n<input type=\"password\" disabled />");
    /// # Ok::<(), htmltree::Error>(())
    /// ```
    pub fn set<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) -> &mut Self {
        self.attributes.set(key, value);
        self
    }

    /// Append a child.
    ///
    /// Any content is accepted. Children of a self-closing element are kept
    /// but never rendered.
    pub fn append<C: Into<Content>>(&mut self, child: C) -> &mut Self {
        self.children.push(child.into());
        self
    }

    /// Append any number of children, in order.
    pub fn append_all<I>(&mut self, children: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Content>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Append a text child.
    pub fn append_text<S: Into<String>>(&mut self, text: S) -> &mut Self {
        self.append(Text::new(text))
    }

    /// Append an element and return it, so it can be built up further in
    /// place.
    ///
    /// ```rust
    /// use htmltree::tags;
    ///
    /// let mut ul = tags::ul();
    /// ul.append_element(tags::li()).set("class", "first").append_text("one");
    /// assert_eq!(ul.render(0)?, "\n<ul>\n  <li class=\"first\">one</li>\n</ul>");
    /// # Ok::<(), htmltree::Error>(())
    /// ```
    pub fn append_element(&mut self, element: Element) -> &mut Element {
        self.children.push(Content::Element(element));
        match self.children.last_mut() {
            Some(Content::Element(element)) => element,
            _ => unreachable!("just pushed an element"),
        }
    }

    /// Set an attribute and return the element, for building expressions.
    pub fn with<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.set(key, value);
        self
    }

    /// Append a child and return the element, for building expressions.
    ///
    /// ```rust
    /// use htmltree::tags;
    ///
    /// let link = tags::a().with("href", "/").child("home");
    /// assert_eq!(link.render(1)?, "\n  <a href=\"/\">home</a>");
    /// # Ok::<(), htmltree::Error>(())
    /// ```
    pub fn child<C: Into<Content>>(mut self, child: C) -> Self {
        self.append(child);
        self
    }

    /// Append any number of children and return the element.
    pub fn children_from<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Content>,
    {
        self.append_all(children);
        self
    }
}
