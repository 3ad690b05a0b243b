use leptos::{html, prelude::*};

use crate::content::PROFILE_IMAGE;

use super::visibility::use_visibility_once;

#[component]
pub fn About() -> impl IntoView {
    let section_ref = NodeRef::<html::Div>::new();
    let visible = use_visibility_once(section_ref);

    view! {
        <section class="py-20 bg-white">
            <div class="container mx-auto px-4">
                <div class="max-w-4xl mx-auto">
                    <div
                        node_ref=section_ref
                        class=move || {
                            if visible.get() {
                                "opacity-100 translate-y-0 transition-all duration-700"
                            } else {
                                "opacity-0 translate-y-10 transition-all duration-700"
                            }
                        }
                    >
                        <h2 class="text-3xl font-bold mb-8 text-center text-gray-800">
                            "About Me"
                        </h2>
                        <div class="flex flex-col md:flex-row gap-8 items-center">
                            <div class="w-48 h-48 relative group">
                                <div class="absolute inset-0 bg-gradient-to-r from-indigo-500 to-purple-500 rounded-full animate-pulse group-hover:animate-none transition-all duration-300"></div>
                                <div class="absolute inset-1 bg-white rounded-full"></div>
                                <img
                                    src=PROFILE_IMAGE
                                    alt="Adi"
                                    class="absolute inset-2 rounded-full object-cover w-[calc(100%-16px)] h-[calc(100%-16px)] group-hover:scale-105 transition-transform duration-300"
                                />
                            </div>
                            <div class="flex-1">
                                <p class="text-gray-600 leading-relaxed mb-6">
                                    "Hey there! Thank you for visiting my website :)"
                                    <br />
                                    "My name is Adi Nehama, and I'm a passionate developer and designer with a keen eye for detail and a love for crafting beautiful, functional digital experiences. With a bachelor's degree in Computer Science and a background in design, I bring a unique perspective to every project combining technical expertise with creative vision."
                                </p>
                                <div class="grid grid-cols-2 gap-4">
                                    <div class="flex items-center gap-2 p-3 rounded-lg bg-indigo-50">
                                        <span class="text-indigo-600">"💻 Development"</span>
                                    </div>
                                    <div class="flex items-center gap-2 p-3 rounded-lg bg-purple-50">
                                        <span class="text-purple-600">"🎨 UI/UX Design"</span>
                                    </div>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
