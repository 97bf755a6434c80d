use leptos::prelude::*;

use super::reveal::Reveal;
use crate::content::{copyright_year, Section, ALIAS, EMAIL};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="relative py-12 border-t border-purple-500/20">
            <div class="absolute top-0 inset-x-0 h-0.5 overflow-hidden bg-gradient-to-r from-transparent via-purple-500 to-transparent">
                <div class="footer-sweep h-full bg-gradient-to-r from-purple-400 to-pink-600" />
            </div>

            <div class="container mx-auto px-6">
                <div class="grid md:grid-cols-3 gap-8 mb-8">
                    <Reveal>
                        <h3 class="text-2xl mb-4 bg-gradient-to-r from-purple-400 to-pink-600 bg-clip-text text-transparent">
                            {ALIAS}
                        </h3>
                        <p class="text-gray-400">
                            "Full Stack MERN Developer crafting exceptional digital experiences with passion and precision."
                        </p>
                    </Reveal>

                    <Reveal delay_ms=100>
                        <h4 class="mb-4 text-purple-300">"Quick Links"</h4>
                        <ul class="space-y-2">
                            {Section::ALL
                                .into_iter()
                                .map(|section| {
                                    view! {
                                        <li>
                                            <a
                                                href=section.href()
                                                class="text-gray-400 hover:text-purple-400 transition-colors"
                                            >
                                                {section.label()}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </Reveal>

                    <Reveal delay_ms=200>
                        <h4 class="mb-4 text-purple-300">"Get In Touch"</h4>
                        <p class="text-gray-400 mb-2">{EMAIL}</p>
                        <p class="text-gray-400">"Available for freelance work"</p>
                    </Reveal>
                </div>

                <div class="text-center pt-8 border-t border-purple-500/20">
                    <p class="text-gray-400 flex items-center justify-center gap-2 flex-wrap">
                        {format!("© {} {ALIAS}. Made with", copyright_year())}
                        <span class="text-pink-500 animate-pulse">"♥"</span>
                        "and Rust"
                    </p>
                </div>
            </div>
        </footer>
    }
}
