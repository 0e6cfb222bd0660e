mod common;

use common::fixtures::*;
use common::{TestResult, init_logging, render};
use rstest::rstest;
use serde::Serialize;
use tagsmith::prelude::*;

#[test]
fn test_nested_divs() -> TestResult {
    init_logging();

    let page = tag("div").child(tag("div").child(Text::new("Hello")));
    assert_eq!(render(&page)?, "\n<div>\n<div>Hello</div>\n</div>\n");
    Ok(())
}

#[test]
fn test_void_image() -> TestResult {
    init_logging();

    let image = tag("img").mark_void().src("a");
    let html = render(&image)?;
    assert_eq!(html, "\n<img src='a'>\n");
    assert!(!html.contains("</img>"));
    Ok(())
}

#[test]
fn test_void_element_drops_children_attached_before_marking() -> TestResult {
    init_logging();

    let image = tag("img")
        .children(nodes![Text::new("caption"), tag("span")])
        .mark_void()
        .alt("x");
    assert_eq!(render(&image)?, "\n<img alt='x'>\n");
    Ok(())
}

#[test]
fn test_layout_with_context() -> TestResult {
    init_logging();

    let page = layout(div(nodes![Text::new("This is my home page")]));
    let ctx = Context::new().with_value(User {
        name: "felix".into(),
    });

    let expected = "<!DOCTYPE html>\n\
\n<html>\
\n<head>\
\n<meta charset='utf8'>\n\
</head>\n\
\n<body>\
\n<div class='header'>header\
\n<div class='username'>felix</div>\n\
</div>\n\
\n<div>This is my home page</div>\n\
\n<div class='footer'>footer</div>\n\
</body>\n\
</html>\n";
    assert_eq!(render_to_string(&page, &ctx)?, expected);

    let anonymous = render(&page)?;
    assert_html_contains!(anonymous, "<div class='login'>Login</div>");
    Ok(())
}

#[test]
fn test_attribute_set_twice_renders_once() -> TestResult {
    let el = tag("a")
        .href("/first")
        .id("link")
        .href("/second")
        .text("go");
    let html = render(&el)?;
    assert_eq!(html.matches("href=").count(), 1);
    assert_eq!(html, "\n<a href='/second' id='link'>go</a>\n");
    Ok(())
}

#[rstest]
#[case(tag("p").classes(["a b", "c"]), "\n<p class='a b c'></p>\n")]
#[case(tag("p").classes(["  ", ""]), "\n<p></p>\n")]
#[case(tag("p").class("x").class("x y"), "\n<p class='x x y'></p>\n")]
#[case(tag("input").mark_void().disabled(true), "\n<input disabled>\n")]
#[case(tag("input").mark_void().disabled(false), "\n<input>\n")]
#[case(tag("input").mark_void().checked(true).required(true).value("v"), "\n<input checked required value='v'>\n")]
fn test_attribute_rules(#[case] element: Element, #[case] expected: &str) -> TestResult {
    assert_eq!(render(&element)?, expected);
    Ok(())
}

#[test]
fn test_components_with_absent_entries() -> TestResult {
    let sparse = components(nodes![None::<Text>, Text::new("x"), None::<Text>, Text::new("y")]);
    let dense = components(nodes![Text::new("x"), Text::new("y")]);
    assert_eq!(render(&sparse)?, render(&dense)?);
    Ok(())
}

#[test]
fn test_conditionals() -> TestResult {
    let a = || nodes![tag("b").text("A")];
    let b = || nodes![tag("b").text("B")];
    let c = || nodes![tag("b").text("C")];

    let chain = If::new(false, a()).else_if(true, b()).otherwise(c());
    assert_eq!(render(&chain)?, render(&components(b()))?);

    let chain = If::new(false, a()).otherwise(c());
    assert_eq!(render(&chain)?, "\n<b>C</b>\n");

    let chain = If::new(false, a());
    assert_eq!(render(&chain)?, "");
    Ok(())
}

#[test]
fn test_conditional_inside_element() -> TestResult {
    let logged_in = false;
    let nav = ul(nodes![
        li(nodes![a(nodes![Text::new("Home")]).href("/")]),
        IfFn::new(logged_in, || li(nodes![a(nodes![Text::new("Logout")]).href("/logout")]))
            .otherwise(|| li(nodes![a(nodes![Text::new("Login")]).href("/login")])),
    ]);
    let html = render(&nav)?;
    assert_html_contains!(html, "<a href='/login'>Login</a>");
    assert!(!html.contains("Logout"));
    Ok(())
}

#[derive(Serialize)]
struct ChartConfig {
    kind: &'static str,
    values: Vec<u32>,
}

#[test]
fn test_structured_attribute_values() -> TestResult {
    let chart = tag("canvas")
        .attr(
            "data-config",
            AttrValue::structured(ChartConfig {
                kind: "bar",
                values: vec![1, 2],
            }),
        )
        .attr("data-raw", serde_json::json!({"a": "line\nbreak"}));

    assert_eq!(
        render(&chart)?,
        "\n<canvas data-config='{\"kind\":\"bar\",\"values\":[1,2]}' data-raw='{\"a\":\"line\\nbreak\"}'></canvas>\n"
    );
    Ok(())
}

#[test]
fn test_child_error_stops_rendering() {
    #[derive(Clone)]
    struct Broken;

    impl Node for Broken {
        fn render_into(&self, _ctx: &Context, _out: &mut Vec<u8>) -> Result<(), RenderError> {
            Err(RenderError::component(std::io::Error::other("database unavailable")))
        }
    }

    let page = div(nodes![Text::new("before"), Broken, Text::new("after")]);
    let err = render(&page).unwrap_err();
    assert!(matches!(err, RenderError::Component(_)));
    assert!(err.to_string().contains("database unavailable"));
}

#[test]
fn test_rerender_is_stable() -> TestResult {
    let page = div(nodes![span("x")])
        .class("a")
        .style("color: red")
        .attr("style", "ignored");
    let first = render(&page)?;
    let second = render(&page)?;
    assert_eq!(first, second);
    assert_eq!(first, "\n<div style='color: red;' class='a'>\n<span>x</span>\n</div>\n");
    Ok(())
}
