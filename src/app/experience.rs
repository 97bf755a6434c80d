use leptos::prelude::*;

use super::reveal::{Reveal, SectionHeading};
use crate::content::{Section, ROLES, TECHNOLOGIES};

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id=Section::Experience.id() class="min-h-screen py-20 relative">
            <div class="absolute inset-0 bg-gradient-to-b from-black via-purple-900/10 to-black" />

            <div class="container mx-auto px-6 relative z-10">
                <SectionHeading title="Experience & Skills" />

                <div class="grid lg:grid-cols-2 gap-12">
                    <div>
                        <h3 class="text-2xl mb-8 text-purple-300">"Career Journey"</h3>
                        <div class="relative">
                            <div class="absolute left-0 top-0 bottom-0 w-0.5 bg-gradient-to-b from-purple-500 to-pink-500" />
                            {ROLES
                                .iter()
                                .enumerate()
                                .map(|(i, role)| {
                                    view! {
                                        <Reveal class="relative pl-10 pb-12 last:pb-0" delay_ms={i as u32 * 200}>
                                            <div class="absolute left-0 -translate-x-1/2 w-10 h-10 bg-gradient-to-br from-purple-600 to-pink-600 rounded-full flex items-center justify-center hover:rotate-[360deg] transition-transform duration-500">
                                                {role.icon}
                                            </div>
                                            <div class="bg-gradient-to-br from-purple-900/20 to-pink-900/20 rounded-lg p-6 border border-purple-500/20 backdrop-blur-sm">
                                                <div class="text-sm text-purple-400 mb-2">{role.year}</div>
                                                <h4 class="text-xl mb-1">{role.title}</h4>
                                                <div class="text-pink-400 mb-3">{role.company}</div>
                                                <p class="text-gray-400">{role.description}</p>
                                            </div>
                                        </Reveal>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div>
                        <h3 class="text-2xl mb-8 text-purple-300">"Tech Stack"</h3>
                        <div class="grid grid-cols-2 sm:grid-cols-3 gap-6">
                            {TECHNOLOGIES
                                .iter()
                                .enumerate()
                                .map(|(i, tech)| {
                                    view! {
                                        <Reveal class="relative group" delay_ms={i as u32 * 100}>
                                            <div
                                                class="tech-tile bg-gradient-to-br from-purple-900/20 to-pink-900/20 rounded-xl p-6 border border-purple-500/20 backdrop-blur-sm flex flex-col items-center justify-center aspect-square"
                                                style=format!("--glow: {}80", tech.color)
                                            >
                                                <i class=format!("{} text-5xl text-purple-400 mb-3 spin-y", tech.icon) />
                                                <span class="text-center text-sm text-gray-300">{tech.name}</span>
                                            </div>
                                        </Reveal>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
