use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <header class="min-h-screen flex items-center justify-center relative overflow-hidden bg-gradient-to-b from-indigo-50 via-white to-purple-50">
            <div class="container mx-auto px-4 py-16 relative z-10">
                <div class="max-w-4xl mx-auto text-center">
                    <h1 class="text-5xl md:text-7xl font-bold mb-6 bg-clip-text text-transparent bg-gradient-to-r from-indigo-600 to-purple-600">
                        "Developer & Designer"
                    </h1>
                    <p class="text-xl md:text-2xl text-gray-600 mb-8">
                        "Crafting digital experiences through code and design"
                    </p>
                    <div class="flex justify-center items-center gap-4">
                        <a
                            href="https://github.com/AdiNehama"
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="GitHub Profile"
                            class="text-indigo-600 hover:text-indigo-800 text-2xl transition-colors"
                        >
                            <i class="devicon-github-plain"></i>
                        </a>
                        <a
                            href="https://www.linkedin.com/in/adi-nehama-194222253/"
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="LinkedIn Profile"
                            class="text-indigo-600 hover:text-indigo-800 text-2xl transition-colors"
                        >
                            <i class="devicon-linkedin-plain"></i>
                        </a>
                        <a
                            href="mailto:adinehama6@gmail.com"
                            aria-label="Email"
                            class="text-indigo-600 hover:text-indigo-800 text-2xl transition-colors"
                        >
                            "✉"
                        </a>
                    </div>
                </div>
            </div>
        </header>
    }
}
