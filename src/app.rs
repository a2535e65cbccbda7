mod contact;
mod header;
mod hero;
mod homepage;
mod reveal;
mod sections;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

pub use homepage::{HomePage, Page};

use crate::content;

/// Icon font behind the `devicon-*` classes.
pub const DEVICON_STYLESHEET: &str =
    "https://cdn.jsdelivr.net/gh/devicons/devicon@v2.16.0/devicon.min.css";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link rel="stylesheet" href=DEVICON_STYLESHEET />
                // without scripts nothing would ever reveal the animated blocks
                <noscript>
                    <style>".animate-on-scroll { opacity: 1; transform: none; }"</style>
                </noscript>
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // a broken registry still gets a page; HomePage reports the error
    let (title, description) = match content::portfolio() {
        Ok(portfolio) => (portfolio.profile.page_title(), portfolio.profile.headline.clone()),
        Err(_) => ("Portfolio".to_string(), String::new()),
    };

    view! {
        <Title text=title />
        <Meta name="description" content=description />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}
