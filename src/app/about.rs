use leptos::prelude::*;

use super::reveal::{Reveal, SectionHeading};
use crate::content::{Section, ALIAS, OWNER, SKILLS};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=Section::About.id() class="min-h-screen py-20 relative">
            <div class="absolute inset-0 bg-gradient-to-b from-black via-purple-900/10 to-black" />

            <div class="container mx-auto px-6 relative z-10">
                <SectionHeading title="About Me" />

                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <Reveal class="h-96 relative floating-boxes">
                        <div class="box box-purple" />
                        <div class="box box-pink" />
                        <div class="box box-cyan" />
                    </Reveal>

                    <Reveal>
                        <p class="text-lg text-gray-300 mb-6 leading-relaxed">
                            "I'm " <span class="text-purple-400">{OWNER}</span>
                            ", also known as " <span class="text-pink-400">{ALIAS}</span>
                            ", a passionate Full Stack MERN Developer who loves building innovative web applications that make a difference."
                        </p>
                        <p class="text-lg text-gray-300 mb-8 leading-relaxed">
                            "My mission is to create seamless, user-centric digital experiences that combine cutting-edge technology with creative design. I specialize in the MERN stack and have a keen eye for modern UI/UX trends and 3D web experiences."
                        </p>

                        <div class="space-y-4">
                            {SKILLS
                                .iter()
                                .enumerate()
                                .map(|(i, skill)| {
                                    view! {
                                        <Reveal delay_ms={i as u32 * 100}>
                                            <div class="flex items-center gap-3 mb-2">
                                                <span class="text-gray-300">{skill.name}</span>
                                                <span class="ml-auto text-purple-400">
                                                    {format!("{}%", skill.level)}
                                                </span>
                                            </div>
                                            <div class="h-2 bg-gray-800 rounded-full overflow-hidden">
                                                <div
                                                    class="skill-fill h-full bg-gradient-to-r from-purple-500 to-pink-500 rounded-full"
                                                    style=format!("--level: {}%", skill.level)
                                                />
                                            </div>
                                        </Reveal>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
