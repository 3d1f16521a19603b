use std::fmt;
use std::rc::Rc;

use crate::component::Component;
use crate::element::Element;
use crate::include::RawInclude;

/// The type of a piece of content.
///
/// Access it using [`Content::content_type`] if you are interested in the
/// kind of content without needing to match on it.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ContentType {
    /// An element; it has a tag, attributes and children.
    Element,
    /// Literal text.
    Text,
    /// The `<!DOCTYPE html>` marker.
    Doctype,
    /// File content substituted at render time.
    RawInclude,
    /// A component that produces its root element at render time.
    Component,
}

/// Anything that can be a child of an element.
///
/// Elements own their children, so a piece of content is in at most one
/// tree.
#[derive(Clone)]
pub enum Content {
    /// An element, possibly with children of its own.
    Element(Element),
    /// Literal text, emitted as is.
    Text(Text),
    /// The doctype marker.
    Doctype(Doctype),
    /// The contents of a file, read when rendered.
    RawInclude(RawInclude),
    /// A component. Its root element is produced each time it is rendered.
    Component(Rc<dyn Component>),
}

impl Content {
    /// Wrap a component as content.
    ///
    /// ```rust
    /// use htmltree::{tags, Content};
    ///
    /// let greeting = || tags::p().child("hello");
    /// let body = tags::body().child(Content::component(greeting));
    /// assert_eq!(body.render(0)?, "\n<body>\n  <p>hello</p>\n</body>");
    /// # Ok::<(), htmltree::Error>(())
    /// ```
    pub fn component<C: Component + 'static>(component: C) -> Self {
        Content::Component(Rc::new(component))
    }

    /// Returns the type of the content.
    pub fn content_type(&self) -> ContentType {
        match self {
            Content::Element(_) => ContentType::Element,
            Content::Text(_) => ContentType::Text,
            Content::Doctype(_) => ContentType::Doctype,
            Content::RawInclude(_) => ContentType::RawInclude,
            Content::Component(_) => ContentType::Component,
        }
    }

    /// Get the element, if this content is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Content::Element(element) => Some(element),
            _ => None,
        }
    }
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Content::Element(element) => f.debug_tuple("Element").field(element).finish(),
            Content::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Content::Doctype(doctype) => f.debug_tuple("Doctype").field(doctype).finish(),
            Content::RawInclude(include) => f.debug_tuple("RawInclude").field(include).finish(),
            Content::Component(_) => f.write_str("Component(..)"),
        }
    }
}

impl From<Element> for Content {
    fn from(element: Element) -> Self {
        Content::Element(element)
    }
}

impl From<Text> for Content {
    fn from(text: Text) -> Self {
        Content::Text(text)
    }
}

impl From<Doctype> for Content {
    fn from(doctype: Doctype) -> Self {
        Content::Doctype(doctype)
    }
}

impl From<RawInclude> for Content {
    fn from(include: RawInclude) -> Self {
        Content::RawInclude(include)
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(Text::new(text))
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(Text::new(text))
    }
}

/// Literal text.
///
/// Example: `hi` in `<span>hi</span>`. Text is not escaped, so it may carry
/// markup of its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Text {
    pub(crate) text: String,
}

impl Text {
    /// Create new text.
    pub fn new<S: Into<String>>(text: S) -> Self {
        Text { text: text.into() }
    }

    /// Get the text.
    pub fn get(&self) -> &str {
        &self.text
    }
}

/// The HTML 5 doctype marker, `<!DOCTYPE html>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Doctype;

impl Doctype {
    pub(crate) const LITERAL: &'static str = "<!DOCTYPE html>";

    /// The literal doctype string.
    pub fn get(&self) -> &'static str {
        Self::LITERAL
    }
}
