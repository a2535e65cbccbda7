use leptos::prelude::*;

use crate::sections::Section;

#[component]
pub fn Header(name: String) -> impl IntoView {
    view! {
        <header class="header">
            <a href=Section::Home.anchor() class="logo">
                {name}
            </a>
            <nav class="navbar">
                {Section::nav_items()
                    .map(|(section, label)| view! { <a href=section.anchor()>{label}</a> })
                    .collect_view()}
            </nav>
        </header>
    }
}
