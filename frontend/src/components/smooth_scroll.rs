use yew::prelude::*;

use crate::scroll::browser::{init_smooth_scroll, teardown_smooth_scroll};

/// Mounted once at the application root. Renders nothing; it ties the
/// page-wide smooth-scroll engine to the lifetime of the app.
#[function_component(SmoothScrollProvider)]
pub fn smooth_scroll_provider() -> Html {
    use_effect_with_deps(|_| {
        init_smooth_scroll();
        teardown_smooth_scroll
    }, ());

    html! {}
}
