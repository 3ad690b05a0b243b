use leptos::{html, prelude::*};

use crate::content::{projects, Project};

use super::carousel::MediaCarousel;
use super::visibility::use_visibility_once;

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section class="py-20 bg-gradient-to-br from-indigo-50 via-white to-purple-50">
            <div class="container mx-auto px-4">
                <h2 class="text-4xl font-bold text-center text-gray-800 mb-2">
                    "💼 Featured Projects"
                </h2>
                <p class="text-gray-600 text-center mb-12">"Some of my recent development work"</p>
                <div class="grid grid-cols-1 gap-8 max-w-5xl mx-auto">
                    {projects()
                        .iter()
                        .enumerate()
                        .map(|(index, project)| view! { <ProjectCard project=project index=index /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, index: usize) -> impl IntoView {
    let card_ref = NodeRef::<html::Div>::new();
    let visible = use_visibility_once(card_ref);

    view! {
        <div
            node_ref=card_ref
            class=move || {
                if visible.get() {
                    "bg-white rounded-lg overflow-hidden shadow-lg transition-all duration-1000 transform opacity-100 translate-y-0"
                } else {
                    "bg-white rounded-lg overflow-hidden shadow-lg transition-all duration-1000 transform opacity-0 translate-y-20"
                }
            }
            // cards lower on the page reveal slightly later
            style=("transition-delay", format!("{}ms", index * 200))
        >
            <MediaCarousel media=project.media.clone() />
            <div class="p-6">
                <h3 class="text-xl font-bold mb-2 text-gray-800">{project.title}</h3>
                <p class="text-gray-600 mb-4">{project.description}</p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="px-3 py-1 bg-indigo-50 text-indigo-600 text-sm rounded-full">
                                    {*tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex gap-4">
                    {project.links.repository.map(|href| view! { <ProjectLink href label="Code" /> })}
                    {project.links.design.map(|href| view! { <ProjectLink href label="Figma" /> })}
                    {project.links.live.map(|href| view! { <ProjectLink href label="Live" /> })}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProjectLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            class="flex items-center gap-2 text-indigo-600 hover:text-indigo-800 transition-colors"
        >
            <span>{label}</span>
        </a>
    }
}
