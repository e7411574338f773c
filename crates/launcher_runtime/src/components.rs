//! Leptos components for the launcher demo page.

use leptos::{component, view, IntoView};

use crate::launch::LAUNCH_TRIGGER_DOM_ID;

/// Demo page shell with the native-window launch trigger.
///
/// The trigger's click handler is installed imperatively after mount, not through the
/// view tree, so the button renders inert markup with a stable id.
#[component]
pub fn LauncherPage() -> impl IntoView {
    view! {
        <main class="launcher-root">
            <h1>"Iced Plugin Demo"</h1>
            <p class="launcher-hint">
                "Click the button to ask the desktop host for a native iced window. "
                "Watch the developer console for the outcome of each attempt."
            </p>
            <button type="button" id=LAUNCH_TRIGGER_DOM_ID class="launcher-trigger">
                "Open Iced Window"
            </button>
        </main>
    }
}
