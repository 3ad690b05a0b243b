use leptos::prelude::*;

use crate::content::logos;

#[component]
pub fn LogoShowcase() -> impl IntoView {
    view! {
        <section class="py-20 bg-white">
            <div class="container mx-auto px-4">
                <h2 class="text-3xl font-bold text-center text-gray-800 mb-2">"🖋 Logo Design"</h2>
                <p class="text-gray-600 text-center mb-12">"Selected branding projects"</p>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-8 max-w-6xl mx-auto">
                    {logos()
                        .iter()
                        .map(|logo| {
                            view! {
                                <div class="bg-gradient-to-br from-purple-50 to-indigo-50 p-1 rounded-lg shadow-lg hover:shadow-xl transition-shadow">
                                    <div class="bg-white p-4 rounded-lg">
                                        <div class="aspect-square rounded-lg overflow-hidden mb-4">
                                            <img
                                                src=logo.image.src()
                                                alt=logo.title
                                                class="w-full h-full object-cover transform hover:scale-105 transition-transform duration-500"
                                            />
                                        </div>
                                        <h3 class="text-lg font-semibold mb-2 text-gray-800">
                                            {logo.title}
                                        </h3>
                                        <p class="text-sm text-gray-600">{logo.description}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
