pub mod fixtures;

use tagsmith::{Context, Node, RenderError, render_to_string};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Installs the test logger once per binary.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Render a node with an empty context
pub fn render(node: &dyn Node) -> Result<String, RenderError> {
    render_to_string(node, &Context::new())
}

/// Assert that rendered HTML contains a fragment, printing the whole output otherwise.
#[macro_export]
macro_rules! assert_html_contains {
    ($html:expr, $fragment:expr) => {
        assert!(
            $html.contains($fragment),
            "Expected HTML to contain {:?}. Got:\n{}",
            $fragment,
            $html
        )
    };
}
