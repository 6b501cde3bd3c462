use leptos::prelude::*;
use leptos_meta::Title;

use super::decor::{Backdrop, BackButton, PageCard, PageLabel, SocialLinks};
use crate::projects::TECHNOLOGIES;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About" />
        <PageCard>
            <Backdrop />
            <BackButton />
            <PageLabel text="About / Profile" />

            <div class="relative p-6 md:p-12 pt-20 md:pt-24">
                <div class="relative z-10 mx-auto max-w-4xl fade-up">
                    <div class="relative border-2 border-orange-400 p-8 md:p-12 overflow-hidden group">
                        <div class="absolute inset-0 shimmer opacity-0 group-hover:opacity-100"></div>
                        <h1 class="text-3xl md:text-5xl lg:text-6xl font-bold text-center text-black font-anton leading-tight relative z-10">
                            "I develop Web and AI" <br />
                            <span class="inline-block mt-2">"integrated Applications"</span>
                        </h1>
                    </div>
                </div>

                <div class="my-16 md:my-24 max-w-3xl mx-auto relative z-10 fade-up">
                    <div class="bg-white/40 backdrop-blur-sm rounded-3xl p-8 md:p-12 border border-white/60 shadow-xl">
                        <div class="w-32 h-32 mx-auto mb-8 rounded-full bg-gradient-to-br from-[#e15f41] to-[#f5a623] flex items-center justify-center text-6xl font-bold text-white shadow-2xl">
                            "H"
                        </div>
                        <h2 class="text-2xl md:text-3xl font-bold text-center text-zinc-900 mb-4 font-anton">
                            "Hello, I'm Harish"
                        </h2>
                        <div class="space-y-4 text-base md:text-lg text-zinc-700 leading-relaxed">
                            <p class="slide-in-left">
                                "I am a passionate "
                                <span class="font-bold text-[#e15f41]">"Web Developer"</span>
                                " with over " <span class="font-bold">"3+ years"</span>
                                " of experience in web design and development."
                            </p>
                            <p class="slide-in-left">
                                "I am a passionate and ebullient person who enjoys developing fresh concepts and projects while exploring uncharted territory. I aspire to be an "
                                <span class="font-bold text-[#e15f41]">"entrepreneur"</span>
                                " and want to give back to society by enhancing its resources."
                            </p>
                            <p class="slide-in-left">
                                "I create and perform "
                                <span class="font-bold text-[#e15f41]">"poetry"</span>
                                " with fervour. My commitment to my work and never-ending desire to improve makes me stand out. I'm an outgoing, amiable person who enjoys meeting new people and developing positive relationships."
                            </p>
                        </div>
                    </div>
                </div>

                <div class="relative z-10 pb-12 fade-up">
                    <h2 class="text-3xl md:text-4xl font-bold text-center text-zinc-900 font-anton mb-12">
                        "Technologies I've worked with"
                    </h2>
                    <div class="flex flex-wrap items-center justify-center gap-3 md:gap-4 max-w-5xl mx-auto">
                        {TECHNOLOGIES
                            .iter()
                            .enumerate()
                            .map(|(i, tech)| {
                                view! {
                                    <div class="group relative hover:scale-110 transition-transform duration-300">
                                        <div class="relative px-5 py-3 flex items-center gap-2 bg-white/70 backdrop-blur-sm border border-zinc-800/20 rounded-full text-sm md:text-base font-bold text-zinc-800 shadow-md hover:shadow-xl transition-all duration-300 overflow-hidden">
                                            <div class=format!(
                                                "absolute inset-0 bg-gradient-to-r {} opacity-0 group-hover:opacity-10 rounded-full",
                                                tech.gradient,
                                            )></div>
                                            <span
                                                class="text-lg relative z-10 icon-wobble"
                                                style=format!("animation-delay: {:.1}s", i as f64 * 0.1)
                                            >
                                                {tech.icon}
                                            </span>
                                            <span class="relative z-10">{tech.name}</span>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="mt-12">
                        <SocialLinks />
                    </div>
                </div>
            </div>
        </PageCard>
    }
}
