use tagsmith_core::{BoxedNode, Components, Element, Raw};

/// The doctype line written before the document element.
pub const DOCTYPE: &str = "<!DOCTYPE html>\n";

/// A full document: the doctype followed by `<html>` with the given children.
///
/// Because every element starts on a fresh line, the doctype is followed by a
/// blank line.
pub fn html(children: impl IntoIterator<Item = BoxedNode>) -> Components {
    Components::new()
        .with(Raw::new(DOCTYPE))
        .with(Element::new("html").children(children))
}
