use htmltree::{tags, Content, Doctype, Element, Error};
use pretty_assertions::assert_eq;

#[test]
fn test_div_span_text() {
    let mut div = tags::div();
    let mut span = tags::span();
    span.append("hi");
    div.append(span);
    assert_eq!(div.render(0).unwrap(), "\n<div>\n  <span>hi</span></div>");
}

#[test]
fn test_div_block_child() {
    let mut div = tags::div();
    div.append(tags::p().child("x"));
    assert_eq!(div.render(0).unwrap(), "\n<div>\n  <p>x</p>\n</div>");
}

#[test]
fn test_self_closing_without_attributes() -> Result<(), Error> {
    for depth in 0..4 {
        let expected = format!("\n{}<br />", " ".repeat(depth * 2));
        assert_eq!(tags::br().render(depth)?, expected);
    }
    Ok(())
}

#[test]
fn test_custom_block_element() -> Result<(), Error> {
    let mut outer = Element::custom("x-outer", false, false);
    outer
        .append(Element::custom("x-inline", false, true).child("a"))
        .append(Element::custom("x-block", false, false).child("b"));
    assert_eq!(
        outer.render(0)?,
        "\n<x-outer>\n  <x-inline>a</x-inline>\n  <x-block>b</x-block>\n</x-outer>"
    );
    Ok(())
}

#[test]
fn test_set_attribute_twice() -> Result<(), Error> {
    let mut a = tags::a();
    a.set("href", "/one").set("class", "nav").set("href", "/two");
    assert_eq!(a.attributes().len(), 2);
    assert_eq!(a.render(0)?, "\n<a href=\"/two\" class=\"nav\"></a>");
    Ok(())
}

#[test]
fn test_attribute_with_quote_is_not_escaped() -> Result<(), Error> {
    let img = tags::img().with("alt", r#"a "b" c"#).with("hidden", "");
    assert_eq!(img.render(0)?, "\n<img alt=\"a \"b\" c\" hidden />");
    Ok(())
}

#[test]
fn test_document_with_doctype() -> Result<(), Error> {
    let root = tags::root()
        .child(Doctype)
        .child(tags::html().child(tags::body()));
    let rendered = root.render(0)?;
    assert_eq!(
        rendered,
        "<!DOCTYPE html>\n<html>\n  <body></body>\n</html>\n"
    );
    assert!(rendered.ends_with("</html>\n"));
    assert!(!rendered.ends_with("\n\n"));
    Ok(())
}

#[test]
fn test_nested_pseudo_root_counts_as_block() -> Result<(), Error> {
    let fragment = tags::root().child(tags::li().child("a")).child(tags::li().child("b"));
    let ul = tags::ul().child(fragment);
    assert_eq!(
        ul.render(0)?,
        "\n<ul>\n  <li>a</li>\n  <li>b</li>\n\n</ul>"
    );
    Ok(())
}

#[test]
fn test_form() -> Result<(), Error> {
    let mut form = tags::form();
    form.set("method", "post").set("action", "/login");
    form.append_element(tags::label())
        .set("for", "user")
        .append_text("User");
    form.append(tags::input().with("id", "user").with("name", "user"));
    form.append_element(tags::div())
        .append(tags::button().with("type", "submit").child("Log in"));
    assert_eq!(
        form.render(0)?,
        r#"
<form method="post" action="/login">
  <label for="user">User</label>
  <input id="user" name="user" />
  <div>
    <button type="submit">Log in</button></div>
</form>"#
    );
    Ok(())
}

#[test]
fn test_table_from_iterator() -> Result<(), Error> {
    let rows = [("a", "1"), ("b", "2")]
        .into_iter()
        .map(|(key, value)| tags::tr().child(tags::td().child(key)).child(tags::td().child(value)));
    let table = tags::table().child(tags::tbody().children_from(rows));
    assert_eq!(
        table.render(0)?,
        "\n<table>\n  <tbody>\n    <tr>\n      <td>a</td>\n      <td>1</td>\n    </tr>\n    <tr>\n      <td>b</td>\n      <td>2</td>\n    </tr>\n  </tbody>\n</table>"
    );
    Ok(())
}

#[test]
fn test_content_accessors() {
    let div = tags::div().child("text").child(tags::span());
    let types = div
        .children()
        .iter()
        .map(Content::content_type)
        .collect::<Vec<_>>();
    assert_eq!(
        types,
        [htmltree::ContentType::Text, htmltree::ContentType::Element]
    );
}

#[test]
fn test_img_and_script_are_block_children() -> Result<(), Error> {
    let body = tags::body().child(tags::img().with("src", "a.png"));
    assert_eq!(body.render(0)?, "\n<body>\n  <img src=\"a.png\" />\n</body>");

    let head = tags::head().child(tags::script().with("src", "a.js"));
    assert_eq!(
        head.render(0)?,
        "\n<head>\n  <script src=\"a.js\"></script>\n</head>"
    );
    Ok(())
}
