//! The tag catalog.
//!
//! Every HTML 5 tag is described by a [`TagConfig`]: its name, whether it is
//! self-closing (a void element like `img`) and whether it is inline (phrasing
//! content like `span`). This module has one factory function per tag, so
//! `tags::div()` creates an empty `div` element.
//!
//! ```rust
//! use htmltree::tags;
//!
//! let mut div = tags::div();
//! div.append(tags::span().child("hi"));
//! assert_eq!(div.render(0)?, "\n<div>\n  <span>hi</span></div>");
//! # Ok::<(), htmltree::Error>(())
//! ```

use std::sync::LazyLock;

use ahash::HashMap;

use crate::element::Element;

/// Configuration of a tag in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagConfig {
    /// Tag name, lowercase.
    pub name: &'static str,
    /// The element has no closing tag and its children are never rendered.
    pub self_closing: bool,
    /// The element does not force a line break before its parent's closing
    /// tag.
    pub inline: bool,
}

impl TagConfig {
    /// Create a tag configuration.
    pub const fn new(name: &'static str, self_closing: bool, inline: bool) -> Self {
        TagConfig {
            name,
            self_closing,
            inline,
        }
    }
}

macro_rules! tag_config {
    ($name:ident, block) => {
        TagConfig::new(stringify!($name), false, false)
    };
    ($name:ident, inline) => {
        TagConfig::new(stringify!($name), false, true)
    };
    ($name:ident, void) => {
        TagConfig::new(stringify!($name), true, false)
    };
    ($name:ident, void_inline) => {
        TagConfig::new(stringify!($name), true, true)
    };
}

macro_rules! catalog {
    ( $( $name:ident($config:ident): $kind:ident, )* ) => {
        $(
            #[doc = concat!("Configuration of the `", stringify!($name), "` tag.")]
            pub const $config: TagConfig = tag_config!($name, $kind);
        )*

        /// All tags in the catalog.
        pub const TAGS: &[TagConfig] = &[ $( $config, )* ];

        $(
            #[doc = concat!("Create a `", stringify!($name), "` element.")]
            pub fn $name() -> Element {
                Element::new($config)
            }
        )*
    };
}

catalog! {
    a(A): inline,
    abbr(ABBR): inline,
    address(ADDRESS): block,
    area(AREA): void_inline,
    article(ARTICLE): block,
    aside(ASIDE): block,
    audio(AUDIO): inline,
    b(B): inline,
    base(BASE): void,
    bdi(BDI): inline,
    bdo(BDO): inline,
    blockquote(BLOCKQUOTE): block,
    body(BODY): block,
    br(BR): void_inline,
    button(BUTTON): inline,
    canvas(CANVAS): inline,
    caption(CAPTION): block,
    cite(CITE): inline,
    code(CODE): inline,
    col(COL): void,
    colgroup(COLGROUP): block,
    datalist(DATALIST): inline,
    dd(DD): block,
    del(DEL): inline,
    details(DETAILS): block,
    dfn(DFN): inline,
    div(DIV): block,
    dl(DL): block,
    dt(DT): block,
    em(EM): inline,
    embed(EMBED): void_inline,
    fieldset(FIELDSET): block,
    figcaption(FIGCAPTION): block,
    figure(FIGURE): block,
    footer(FOOTER): block,
    form(FORM): block,
    h1(H1): block,
    h2(H2): block,
    h3(H3): block,
    h4(H4): block,
    h5(H5): block,
    h6(H6): block,
    head(HEAD): block,
    header(HEADER): block,
    hgroup(HGROUP): block,
    hr(HR): void,
    html(HTML): block,
    i(I): inline,
    iframe(IFRAME): inline,
    img(IMG): void,
    input(INPUT): void_inline,
    ins(INS): inline,
    kbd(KBD): inline,
    keygen(KEYGEN): void_inline,
    label(LABEL): inline,
    legend(LEGEND): block,
    li(LI): block,
    link(LINK): void,
    main(MAIN): block,
    map(MAP): inline,
    mark(MARK): inline,
    menu(MENU): block,
    meta(META): void,
    meter(METER): inline,
    nav(NAV): block,
    noscript(NOSCRIPT): inline,
    object(OBJECT): inline,
    ol(OL): block,
    optgroup(OPTGROUP): block,
    option(OPTION): block,
    output(OUTPUT): inline,
    p(P): block,
    param(PARAM): void,
    pre(PRE): block,
    progress(PROGRESS): inline,
    q(Q): inline,
    rp(RP): block,
    rt(RT): block,
    ruby(RUBY): inline,
    s(S): inline,
    samp(SAMP): inline,
    script(SCRIPT): block,
    section(SECTION): block,
    select(SELECT): inline,
    small(SMALL): inline,
    source(SOURCE): void,
    span(SPAN): inline,
    strong(STRONG): inline,
    style(STYLE): block,
    sub(SUB): inline,
    summary(SUMMARY): block,
    sup(SUP): inline,
    svg(SVG): inline,
    table(TABLE): block,
    tbody(TBODY): block,
    td(TD): block,
    template(TEMPLATE): block,
    textarea(TEXTAREA): inline,
    tfoot(TFOOT): block,
    th(TH): block,
    thead(THEAD): block,
    time(TIME): inline,
    title(TITLE): block,
    tr(TR): block,
    track(TRACK): void,
    u(U): inline,
    ul(UL): block,
    var(VAR): inline,
    video(VIDEO): inline,
    wbr(WBR): void_inline,
}

static LOOKUP: LazyLock<HashMap<&'static str, TagConfig>> =
    LazyLock::new(|| TAGS.iter().map(|config| (config.name, *config)).collect());

/// Look up a tag by name, ignoring ASCII case.
pub fn lookup(name: &str) -> Option<TagConfig> {
    LOOKUP.get(name.to_ascii_lowercase().as_str()).copied()
}

/// Create a pseudo-root.
///
/// It has no tag of its own: rendering it renders its children at the same
/// depth followed by a newline. This is how a doctype and the `html` element
/// end up side by side.
pub fn root() -> Element {
    Element::root()
}
