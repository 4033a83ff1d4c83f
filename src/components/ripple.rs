//! Expanding circle shown where a control was clicked.

use leptos::prelude::*;

use crate::state::ripple::Ripple;

#[component]
pub fn RippleDot(ripple: Ripple) -> impl IntoView {
    view! { <span class="ripple" style=ripple.style()></span> }
}
