//! Proptest support
//!
//! Proptests allow you to test for *properties* of your code that must hold
//! for arbitrary data. This module lets you generate arbitrary element trees
//! built from the tag catalog.
//!
//! This can be enabled by adding the `proptest` feature to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! htmltree = { version = "0.1", features = ["proptest"] }
//! ```
//!
//! See the [`proptest`](https://docs.rs/proptest/latest/proptest/)
//! documentation for more information.

use proptest::prelude::*;

use crate::content::{Content, Doctype};
use crate::element::Element;
use crate::tags::{TagConfig, TAGS};

const ATTRIBUTE_NAMES: &[&str] = &["id", "class", "title", "hidden"];
const TEXT: &str = "[a-z <>&\"\n]{0,12}";

fn arb_tag() -> impl Strategy<Value = TagConfig> {
    prop::sample::select(TAGS)
}

fn arb_self_closing_tag() -> impl Strategy<Value = TagConfig> {
    let configs = TAGS
        .iter()
        .filter(|config| config.self_closing)
        .copied()
        .collect::<Vec<_>>();
    prop::sample::select(configs)
}

fn arb_attribute() -> impl Strategy<Value = (String, String)> {
    (prop::sample::select(ATTRIBUTE_NAMES), "[a-z \"]{0,8}")
        .prop_map(|(key, value)| (key.to_string(), value))
}

fn build(
    config: TagConfig,
    attributes: Vec<(String, String)>,
    children: Vec<Content>,
) -> Element {
    let mut element = Element::new(config);
    for (key, value) in attributes {
        element.set(key, value);
    }
    element.append_all(children);
    element
}

/// Generate arbitrary content: text, doctype markers and elements, nested a
/// few levels deep.
pub fn arb_content() -> impl Strategy<Value = Content> {
    let leaf = prop_oneof![
        4 => TEXT.prop_map(Content::from),
        1 => Just(Content::Doctype(Doctype)),
    ];

    leaf.prop_recursive(
        6,  // levels deep
        64, // maximum number of nodes
        6,  // up to 6 children per element
        |inner| {
            (
                arb_tag(),
                prop::collection::vec(arb_attribute(), 0..3),
                prop::collection::vec(inner, 0..6),
            )
                .prop_map(|(config, attributes, children)| {
                    Content::Element(build(config, attributes, children))
                })
        },
    )
}

/// Generate an arbitrary element from the tag catalog, with arbitrary
/// children.
pub fn arb_element() -> impl Strategy<Value = Element> {
    (
        arb_tag(),
        prop::collection::vec(arb_attribute(), 0..3),
        prop::collection::vec(arb_content(), 0..6),
    )
        .prop_map(|(config, attributes, children)| build(config, attributes, children))
}

/// Generate an arbitrary self-closing element. It may have children, which
/// are never rendered.
pub fn arb_self_closing_element() -> impl Strategy<Value = Element> {
    (
        arb_self_closing_tag(),
        prop::collection::vec(arb_attribute(), 0..3),
        prop::collection::vec(arb_content(), 0..3),
    )
        .prop_map(|(config, attributes, children)| build(config, attributes, children))
}
