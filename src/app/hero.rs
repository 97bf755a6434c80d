use leptos::prelude::*;

use crate::content::{Section, OWNER, ROLE};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section
            id=Section::Home.id()
            class="min-h-screen relative flex items-center justify-center overflow-hidden"
        >
            <div class="absolute inset-0 bg-gradient-to-b from-purple-900/20 via-black to-black" />
            <div class="absolute inset-0 hero-orb pointer-events-none" />

            <div class="container mx-auto px-6 relative z-10">
                <div class="max-w-4xl mx-auto text-center fade-up">
                    <h1 class="text-4xl md:text-6xl mb-6 font-bold">
                        "Hey, I'm "
                        <span class="bg-gradient-to-r from-purple-400 via-pink-500 to-purple-600 bg-clip-text text-transparent">
                            {OWNER}
                        </span>
                    </h1>
                    <p class="text-lg md:text-xl text-gray-300 mb-8">{ROLE}</p>
                    <p class="text-base md:text-lg text-gray-400 mb-12 max-w-2xl mx-auto">
                        "Crafting exceptional digital experiences with cutting-edge technologies. Transforming ideas into powerful, scalable applications."
                    </p>
                    <a
                        href=Section::Contact.href()
                        class="group inline-flex items-center gap-2 px-8 py-3 bg-gradient-to-r from-purple-600 to-pink-600 rounded-full hover:scale-105 active:scale-95 transition-transform"
                    >
                        "Let's Connect"
                        <span class="group-hover:translate-y-1 transition-transform">"↓"</span>
                    </a>
                </div>
            </div>

            <div class="absolute bottom-10 left-1/2 -translate-x-1/2 animate-bounce">
                <div class="w-6 h-10 border-2 border-purple-400 rounded-full flex justify-center p-2">
                    <div class="w-1 h-2 bg-purple-400 rounded-full" />
                </div>
            </div>
        </section>
    }
}
