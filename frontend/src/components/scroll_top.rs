use yew::prelude::*;
use yew_router::prelude::*;

/// Scrolls the window back to the top when the calling page mounts, and
/// again whenever the path changes under it (one case study to the next).
#[hook]
pub fn use_scroll_to_top() {
    let path = use_location().map(|location| location.path().to_string());
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        path,
    );
}
