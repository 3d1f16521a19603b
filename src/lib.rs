#![forbid(unsafe_code)]

//! Build HTML documents as element trees and render them as indented text.
//!
//! Elements come from the tag catalog in [`tags`]. You add attributes with
//! [`Element::set`] and children with [`Element::append`], then render the
//! tree with [`Element::render`]:
//!
//! ```rust
//! use htmltree::{tags, Doctype};
//!
//! let mut root = tags::root();
//! root.append(Doctype);
//! let html = root.append_element(tags::html());
//! html.append_element(tags::head())
//!     .append(tags::title().child("Hello"));
//! html.append_element(tags::body())
//!     .append(tags::p().child("Hello").child(tags::em().child("world")));
//!
//! assert_eq!(
//!     root.render(0)?,
//!     r#"<!DOCTYPE html>
//! <html>
//!   <head>
//!     <title>Hello</title>
//!   </head>
//!   <body>
//!     <p>Hello
//!       <em>world</em></p>
//!   </body>
//! </html>
//! "#
//! );
//! # Ok::<(), htmltree::Error>(())
//! ```
//!
//! Each opening tag starts a new line, indented by two spaces per nesting
//! level. A closing tag gets a line of its own only if the element has a
//! block (non-inline) element among its children.
//!
//! Text and attribute values are emitted exactly as given. Nothing is
//! escaped.

mod attribute;
mod component;
mod content;
mod element;
mod error;
mod include;
mod render;
pub mod tags;

#[cfg(any(test, feature = "proptest"))]
pub mod proptest;

pub use attribute::{Attribute, Attributes};
pub use component::{render_document, Component};
pub use content::{Content, ContentType, Doctype, Text};
pub use element::Element;
pub use error::Error;
pub use include::RawInclude;
pub use tags::TagConfig;
