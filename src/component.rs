use crate::element::Element;
use crate::error::Error;

/// A component produces the root element of an element tree on demand.
///
/// Components let a fragment of a document be a plain value: the tree is
/// only built when the component is rendered. A component can be placed in
/// a tree with [`Content::component`](crate::Content::component), where it
/// renders exactly like its root element would, or rendered as a document of
/// its own with [`render_document`].
///
/// Closures that return an element are components:
///
/// ```rust
/// use htmltree::{render_document, tags};
///
/// let page = || tags::html().child(tags::body());
/// assert_eq!(render_document(&page)?, "\n<html>\n  <body></body>\n</html>");
/// # Ok::<(), htmltree::Error>(())
/// ```
pub trait Component {
    /// Build the root element.
    fn root(&self) -> Element;
}

impl<F> Component for F
where
    F: Fn() -> Element,
{
    fn root(&self) -> Element {
        self()
    }
}

impl Component for Element {
    fn root(&self) -> Element {
        self.clone()
    }
}

/// Render a component as a document, at depth 0.
pub fn render_document<C: Component + ?Sized>(component: &C) -> Result<String, Error> {
    let root = component.root();
    let rendered = root.render(0)?;
    tracing::debug!(tag = root.tag(), bytes = rendered.len(), "Rendered document");
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{tags, Content, Doctype};

    struct Page {
        title: String,
        paragraphs: Vec<String>,
    }

    impl Component for Page {
        fn root(&self) -> Element {
            let mut root = tags::root();
            root.append(Doctype);
            let html = root.append_element(tags::html());
            html.append_element(tags::head())
                .append(tags::title().child(self.title.as_str()));
            let body = html.append_element(tags::body());
            for paragraph in &self.paragraphs {
                body.append(tags::p().child(paragraph.as_str()));
            }
            root
        }
    }

    #[test]
    fn test_render_document() {
        let page = Page {
            title: "Hello".to_string(),
            paragraphs: vec!["one".to_string(), "two".to_string()],
        };
        assert_eq!(
            render_document(&page).unwrap(),
            "<!DOCTYPE html>\n<html>\n  <head>\n    <title>Hello</title>\n  </head>\n  <body>\n    <p>one</p>\n    <p>two</p>\n  </body>\n</html>\n"
        );
    }

    #[test]
    fn test_render_document_dyn() {
        let component: Box<dyn Component> = Box::new(tags::hr);
        assert_eq!(render_document(component.as_ref()).unwrap(), "\n<hr />");
    }

    #[test]
    fn test_element_is_component() {
        let element = tags::div().with("id", "x");
        assert_eq!(
            render_document(&element).unwrap(),
            element.render(0).unwrap()
        );
    }

    #[test]
    fn test_component_is_built_at_render_time() {
        use std::cell::Cell;
        use std::rc::Rc;

        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let component = move || {
            counter.set(counter.get() + 1);
            tags::span()
        };
        let div = tags::div().child(Content::component(component));
        assert_eq!(calls.get(), 0);
        div.render(0).unwrap();
        div.render(0).unwrap();
        assert_eq!(calls.get(), 2);
    }
}
