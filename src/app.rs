mod about;
mod carousel;
mod hero;
mod homepage;
mod logos;
mod projects;
mod visibility;

use chrono::DateTime;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use homepage::HomePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="font-sans antialiased text-gray-800">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // sets the document title
        <Title formatter=|title| format!("Adi Nehama - {title}") />

        <Router>
            <main class="flex flex-col flex-grow w-full">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

#[component]
fn Footer() -> impl IntoView {
    // BUILD_TIME is stamped by build.rs
    let built = DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|dt| dt.format("%B %Y").to_string())
        .ok();

    view! {
        <footer class="py-8 bg-white text-center text-sm text-gray-500">
            <p>"Designed & built by Adi Nehama"</p>
            {built.map(|d| view! { <p class="mt-1">"Last updated " {d}</p> })}
        </footer>
    }
}
