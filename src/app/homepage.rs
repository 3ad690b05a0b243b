use leptos::prelude::*;
use leptos_meta::Title;

use super::about::About;
use super::hero::Hero;
use super::logos::LogoShowcase;
use super::projects::Projects;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <div class="min-h-screen bg-gradient-to-br from-indigo-50 via-white to-purple-50">
            <Hero />
            <About />
            <Projects />
            <LogoShowcase />
        </div>
    }
}
