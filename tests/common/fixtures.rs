use tagsmith::prelude::*;

#[derive(Clone)]
pub struct User {
    pub name: String,
}

/// Shows the signed-in user's name, or a login prompt.
pub fn user_status() -> impl Node + Clone {
    ComponentFn::new(|ctx: &Context| {
        Ok(match ctx.get::<User>() {
            Some(user) => div(nodes![Text::new(user.name.as_str())]).class("username"),
            None => div(nodes![Text::new("Login")]).class("login"),
        })
    })
}

pub fn site_header() -> Element {
    div(nodes![Text::new("header"), user_status()]).class("header")
}

pub fn site_footer() -> Element {
    div(nodes![Text::new("footer")]).class("footer")
}

/// Wraps page content in the shared document layout.
pub fn layout(content: impl Node + 'static) -> Components {
    html(nodes![
        head(nodes![meta().charset("utf8")]),
        body(nodes![site_header(), content, site_footer()]),
    ])
}
