use std::io::Write;

use crate::content::{Content, Doctype};
use crate::element::Element;
use crate::error::Error;

// each nesting level indents by two spaces
fn push_padding(buf: &mut String, depth: usize) {
    buf.push('\n');
    buf.extend(std::iter::repeat(' ').take(depth * 2));
}

impl Element {
    /// Render the element and its children at a nesting depth.
    ///
    /// The opening tag is put on a new line indented by two spaces per level.
    /// The closing tag gets its own line only when at least one child is a
    /// block element, so inline and text content stays on one line.
    ///
    /// A failing [`RawInclude`](crate::RawInclude) anywhere in the tree fails
    /// the whole render.
    ///
    /// ```rust
    /// use htmltree::tags;
    ///
    /// let div = tags::div().child(tags::p().child("x"));
    /// assert_eq!(div.render(0)?, "\n<div>\n  <p>x</p>\n</div>");
    /// # Ok::<(), htmltree::Error>(())
    /// ```
    pub fn render(&self, depth: usize) -> Result<String, Error> {
        let mut buf = String::new();
        self.render_into(depth, &mut buf)?;
        Ok(buf)
    }

    /// Render the element at depth 0 and write it out.
    ///
    /// The element is rendered completely before anything is written, so a
    /// failed render writes nothing.
    pub fn write<W: Write>(&self, w: &mut W) -> Result<(), Error> {
        let rendered = self.render(0)?;
        w.write_all(rendered.as_bytes())?;
        Ok(())
    }

    pub(crate) fn render_into(&self, depth: usize, buf: &mut String) -> Result<(), Error> {
        // a pseudo-root contributes no markup and no indentation of its own
        if self.is_root() {
            for child in &self.children {
                child.render_into(depth, buf)?;
            }
            buf.push('\n');
            return Ok(());
        }

        push_padding(buf, depth);
        buf.push('<');
        buf.push_str(&self.tag);
        self.attributes.render_into(buf);

        // children of a self-closing element are never rendered
        if self.self_closing {
            buf.push_str(" />");
            return Ok(());
        }
        buf.push('>');

        let mut block_children = 0;
        for child in &self.children {
            if child.render_into(depth + 1, buf)? {
                block_children += 1;
            }
        }
        if block_children > 0 {
            push_padding(buf, depth);
        }

        buf.push_str("</");
        buf.push_str(&self.tag);
        buf.push('>');
        Ok(())
    }
}

impl Content {
    /// Render the content at a nesting depth.
    ///
    /// Text, doctype and raw includes ignore the depth and come out exactly
    /// as they are.
    pub fn render(&self, depth: usize) -> Result<String, Error> {
        let mut buf = String::new();
        self.render_into(depth, &mut buf)?;
        Ok(buf)
    }

    // returns true if the content is a block element
    pub(crate) fn render_into(&self, depth: usize, buf: &mut String) -> Result<bool, Error> {
        match self {
            Content::Element(element) => {
                element.render_into(depth, buf)?;
                Ok(!element.is_inline())
            }
            Content::Component(component) => {
                let element = component.root();
                element.render_into(depth, buf)?;
                Ok(!element.is_inline())
            }
            Content::Text(text) => {
                buf.push_str(text.get());
                Ok(false)
            }
            Content::Doctype(_) => {
                buf.push_str(Doctype::LITERAL);
                Ok(false)
            }
            Content::RawInclude(include) => {
                buf.push_str(&include.read()?);
                Ok(false)
            }
        }
    }
}
