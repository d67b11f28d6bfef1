use yew::prelude::*;

use crate::detect_and_activate;

/// Renders nothing; activates the viewport scale lock once when mounted.
/// The lock holds for the page's lifetime, so there is no cleanup.
#[function_component(ViewportScaleLock)]
pub fn viewport_scale_lock() -> Html {
    use_effect_with((), move |_| {
        detect_and_activate();
        || ()
    });
    Html::default()
}
