use leptos::prelude::*;

use super::reveal::{Reveal, SectionHeading};
use crate::content::{Project, Section, PROJECTS};

const IMAGE_FALLBACK: &str = "data:image/svg+xml;utf8,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 400 300'><rect width='400' height='300' fill='%232e1065'/><path d='M0 220 L120 140 L220 200 L300 150 L400 210 L400 300 L0 300 Z' fill='%23831843' fill-opacity='0.6'/></svg>";

#[component]
pub fn Projects() -> impl IntoView {
    // index of the card under the pointer
    let (hovered, set_hovered) = signal(None::<usize>);

    view! {
        <section id=Section::Projects.id() class="min-h-screen py-20 relative">
            <div class="absolute inset-0 bg-gradient-to-b from-black via-pink-900/10 to-black" />

            <div class="container mx-auto px-6 relative z-10">
                <SectionHeading title="Featured Projects" />

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            view! {
                                <Reveal class="group relative" delay_ms={i as u32 * 200}>
                                    <div
                                        class="relative h-full bg-gradient-to-br from-purple-900/20 to-pink-900/20 rounded-xl overflow-hidden border border-purple-500/20 backdrop-blur-sm transition-transform duration-300 hover:scale-[1.02]"
                                        on:mouseenter=move |_| set_hovered(Some(i))
                                        on:mouseleave=move |_| set_hovered(None)
                                    >
                                        <ProjectCard project />
                                        <Show when=move || hovered.get() == Some(i)>
                                            <div class="absolute inset-0 border-2 border-purple-500/50 rounded-xl pointer-events-none fade-in" />
                                        </Show>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <div class="relative h-48 overflow-hidden">
            <ImageWithFallback src=project.image alt=project.title />
            <div class="absolute inset-0 bg-gradient-to-t from-black via-black/50 to-transparent opacity-60" />
        </div>

        <div class="p-6">
            <h3 class="text-xl mb-3 text-purple-300">{project.title}</h3>
            <p class="text-gray-400 mb-4 line-clamp-3">{project.description}</p>

            <div class="flex flex-wrap gap-2 mb-4">
                {project
                    .tech
                    .iter()
                    .map(|tech| {
                        view! {
                            <span class="px-3 py-1 bg-purple-500/20 border border-purple-500/30 rounded-full text-sm text-purple-300">
                                {*tech}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="flex gap-4">
                <a
                    href=project.github
                    target="_blank"
                    rel="noopener noreferrer"
                    class="flex items-center gap-2 text-gray-400 hover:text-purple-400 transition-colors"
                >
                    <i class="devicon-github-plain" />
                    "Code"
                </a>
                {project
                    .demo
                    .map(|demo| {
                        view! {
                            <a
                                href=demo
                                target="_blank"
                                rel="noopener noreferrer"
                                class="flex items-center gap-2 text-gray-400 hover:text-pink-400 transition-colors"
                            >
                                "↗ Live Demo"
                            </a>
                        }
                    })}
            </div>
        </div>
    }
}

/// Swaps in a placeholder when the remote image fails to load.
#[component]
fn ImageWithFallback(src: &'static str, alt: &'static str) -> impl IntoView {
    let (failed, set_failed) = signal(false);
    view! {
        <img
            src=move || if failed.get() { IMAGE_FALLBACK } else { src }
            alt=alt
            loading="lazy"
            class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
            on:error=move |_| set_failed(true)
        />
    }
}
