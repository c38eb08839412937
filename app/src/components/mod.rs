use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

pub mod directory;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Station Directory"/>

        <Router>
            <header class="app-header">
                <h1 class="app-title">"Station Directory"</h1>
                <p class="app-subtitle">"Find a station by district or name, then tap to call"</p>
            </header>

            <main class="container">
                <Routes fallback=|| "Page not found.">
                    <Route path=StaticSegment("") view=directory::DirectoryPage/>
                </Routes>
            </main>
        </Router>
    }
}
