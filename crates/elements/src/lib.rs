//! One constructor per HTML tag.
//!
//! Every function here is a thin, pre-configured call into
//! [`tagsmith_core::Element`]. Container tags take their children, text tags
//! take a string that is escaped at render time, and void tags take either
//! nothing or the one attribute they are almost always used with.
//!
//! ```
//! use tagsmith_core::{nodes, render_to_string, Context};
//! use tagsmith_elements::*;
//!
//! let page = div(nodes![h1("Title").class("title"), img("logo.png").alt("Logo")]);
//! let html = render_to_string(&page, &Context::new()).unwrap();
//! assert_eq!(
//!     html,
//!     "\n<div>\n<h1 class='title'>Title</h1>\n\n<img src='logo.png' alt='Logo'>\n</div>\n"
//! );
//! ```

mod document;


pub use self::document::{DOCTYPE, html};

use tagsmith_core::{BoxedNode, Element, Raw};

macro_rules! define_container_tags {
    ($($name:ident => $tag:literal),+ $(,)?) => {
        $(
            #[doc = concat!("`<", $tag, ">` with the given children.")]
            pub fn $name(children: impl IntoIterator<Item = BoxedNode>) -> Element {
                Element::new($tag).children(children)
            }
        )+
    };
}

macro_rules! define_text_tags {
    ($($name:ident => $tag:literal),+ $(,)?) => {
        $(
            #[doc = concat!("`<", $tag, ">` containing escaped text.")]
            pub fn $name(text: impl Into<String>) -> Element {
                Element::new($tag).text(text)
            }
        )+
    };
}

macro_rules! define_void_tags {
    ($($name:ident => $tag:literal),+ $(,)?) => {
        $(
            #[doc = concat!("Void `<", $tag, ">`.")]
            pub fn $name() -> Element {
                Element::new($tag).mark_void()
            }
        )+
    };
}

macro_rules! define_void_tags_with_attr {
    ($($name:ident($arg:ident) => $tag:literal),+ $(,)?) => {
        $(
            #[doc = concat!("Void `<", $tag, ">` with its `", stringify!($arg), "` attribute set.")]
            pub fn $name($arg: impl Into<String>) -> Element {
                let $arg: String = $arg.into();
                Element::new($tag).mark_void().attr(stringify!($arg), $arg)
            }
        )+
    };
}

define_container_tags! {
    a => "a",
    address => "address",
    article => "article",
    aside => "aside",
    audio => "audio",
    blockquote => "blockquote",
    body => "body",
    canvas => "canvas",
    cite => "cite",
    colgroup => "colgroup",
    data => "data",
    datalist => "datalist",
    dd => "dd",
    details => "details",
    dialog => "dialog",
    div => "div",
    dl => "dl",
    dt => "dt",
    fieldset => "fieldset",
    figure => "figure",
    footer => "footer",
    form => "form",
    head => "head",
    header => "header",
    hgroup => "hgroup",
    iframe => "iframe",
    ins => "ins",
    li => "li",
    main => "main",
    map => "map",
    menu => "menu",
    meter => "meter",
    nav => "nav",
    noscript => "noscript",
    ol => "ol",
    optgroup => "optgroup",
    output => "output",
    p => "p",
    picture => "picture",
    progress => "progress",
    ruby => "ruby",
    samp => "samp",
    section => "section",
    select => "select",
    slot => "slot",
    summary => "summary",
    table => "table",
    tbody => "tbody",
    td => "td",
    template => "template",
    tfoot => "tfoot",
    thead => "thead",
    tr => "tr",
    ul => "ul",
    video => "video",
}

define_text_tags! {
    abbr => "abbr",
    b => "b",
    bdi => "bdi",
    bdo => "bdo",
    button => "button",
    caption => "caption",
    code => "code",
    del => "del",
    dfn => "dfn",
    em => "em",
    figcaption => "figcaption",
    h1 => "h1",
    h2 => "h2",
    h3 => "h3",
    h4 => "h4",
    h5 => "h5",
    h6 => "h6",
    i => "i",
    kbd => "kbd",
    label => "label",
    legend => "legend",
    mark => "mark",
    option => "option",
    pre => "pre",
    q => "q",
    rp => "rp",
    rt => "rt",
    s => "s",
    small => "small",
    span => "span",
    strong => "strong",
    sub => "sub",
    sup => "sup",
    textarea => "textarea",
    th => "th",
    title => "title",
    u => "u",
    var => "var",
}

define_void_tags! {
    area => "area",
    base => "base",
    br => "br",
    col => "col",
    embed => "embed",
    hr => "hr",
    meta => "meta",
    wbr => "wbr",
}

define_void_tags_with_attr! {
    img(src) => "img",
    input(name) => "input",
    link(href) => "link",
    param(name) => "param",
    source(src) => "source",
    track(src) => "track",
}

/// `<object>` pointing at `data`.
pub fn object(data: impl Into<String>) -> Element {
    let data: String = data.into();
    Element::new("object").attr("data", data)
}

/// `<time>` with a machine-readable `datetime`.
pub fn time(datetime: impl Into<String>) -> Element {
    let datetime: String = datetime.into();
    Element::new("time").attr("datetime", datetime)
}

/// `<script>` with an inline body that is emitted verbatim.
pub fn script(body: impl Into<String>) -> Element {
    Element::new("script")
        .type_("text/javascript")
        .children([Box::new(Raw::new(body)) as BoxedNode])
}

/// `<style>` with an inline stylesheet that is emitted verbatim.
pub fn style(css: impl Into<String>) -> Element {
    Element::new("style")
        .type_("text/css")
        .children([Box::new(Raw::new(css)) as BoxedNode])
}
