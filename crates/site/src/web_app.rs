use launcher_runtime::LauncherPage;
use leptos::*;
use leptos_meta::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Iced Plugin Demo" />
        <Meta
            name="description"
            content="A button-press demo that asks the desktop host for a native iced window."
        />

        <LauncherPage />
    }
}
