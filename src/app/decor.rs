use leptos::prelude::*;
use leptos_router::components::A;

use crate::drift::{particles, PARTICLE_COUNT};

const ORB_WARM: &str = "linear-gradient(135deg, #e15f41 0%, #f5a623 100%)";
const ORB_COOL: &str = "linear-gradient(135deg, #667eea 0%, #764ba2 100%)";
const ORB_PINK: &str = "linear-gradient(135deg, #f093fb 0%, #f5576c 100%)";

/// Cream page card every route renders into.
#[component]
pub fn PageCard(#[prop(default = "")] class: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class=format!(
            "bg-[#f0ebe5] w-full max-w-7xl min-h-[calc(100vh-3rem)] rounded-2xl flex flex-col relative shadow-2xl overflow-hidden page-enter {class}",
        )>{children()}</div>
    }
}

#[component]
pub fn FloatingOrb(
    /// Position and float animation classes.
    class: &'static str,
    size: u32,
    gradient: &'static str,
    #[prop(default = 0.0)] delay: f64,
) -> impl IntoView {
    view! {
        <div class=format!("absolute pointer-events-none {class}")>
            <div
                class="rounded-full blur-3xl orb-pulse"
                style=format!(
                    "width: {size}px; height: {size}px; background: {gradient}; animation-delay: {delay}s;",
                )
            ></div>
        </div>
    }
}

#[component]
pub fn GridBackground() -> impl IntoView {
    view! {
        <div class="absolute inset-0 overflow-hidden pointer-events-none">
            <div class="absolute inset-0 grid-drift"></div>
        </div>
    }
}

#[component]
pub fn DriftParticles() -> impl IntoView {
    view! {
        <div class="absolute inset-0 overflow-hidden pointer-events-none">
            {particles(PARTICLE_COUNT)
                .into_iter()
                .map(|p| {
                    let style = format!(
                        "width: {size}px; height: {size}px; left: {x}%; top: {y}%; --drift-x: {mx}px; animation-duration: {d}s; animation-delay: {delay}s;",
                        size = p.size,
                        x = p.x,
                        y = p.y,
                        mx = p.move_x,
                        d = p.duration,
                        delay = p.delay,
                    );
                    view! { <div class="absolute rounded-full bg-zinc-400/20 drift-particle" style=style></div> }
                })
                .collect_view()}
        </div>
    }
}

/// Grid, drifting particles and the three glowing orbs behind each page.
#[component]
pub fn Backdrop(
    #[prop(default = "top-1/2 right-1/4 animate-float-slow")] third_orb: &'static str,
) -> impl IntoView {
    view! {
        <GridBackground />
        <DriftParticles />
        <FloatingOrb class="top-10 left-10 animate-float" size=400 gradient=ORB_WARM delay=0.2 />
        <FloatingOrb
            class="bottom-20 right-10 animate-float-delayed"
            size=350
            gradient=ORB_COOL
            delay=0.4
        />
        <FloatingOrb class=third_orb size=300 gradient=ORB_PINK delay=0.6 />
    }
}

#[component]
pub fn BackButton() -> impl IntoView {
    view! {
        <div class="absolute top-6 left-6 z-30 slide-in-left">
            <A
                href="/"
                attr:class="group flex items-center gap-2 px-4 py-2 rounded-full bg-white/60 backdrop-blur-sm border border-white/40 hover:bg-white hover:shadow-lg transition-all duration-300 text-zinc-800 font-semibold"
            >
                <span class="text-lg">"←"</span>
                <span>"Back"</span>
            </A>
        </div>
    }
}

/// Section heading with the orange accent bar.
#[component]
pub fn SectionTitle(title: &'static str, #[prop(optional)] subtitle: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="text-center mb-10 fade-up">
            <h1 class="font-anton text-5xl md:text-7xl text-zinc-900 tracking-tight">{title}</h1>
            <div class="mx-auto mt-4 h-1 w-24 rounded-full bg-gradient-to-r from-[#e15f41] to-[#f5a623]"></div>
            {subtitle.map(|s| view! { <p class="mt-4 text-zinc-600 text-base md:text-lg">{s}</p> })}
        </div>
    }
}

const SOCIALS: [(&str, &str); 3] = [
    ("Twitter", "https://twitter.com/intent/tweet?url="),
    ("Instagram", "https://instagram.com"),
    ("LinkedIn", "https://www.linkedin.com/sharing/share-offsite/?url="),
];

#[component]
pub fn SocialLinks() -> impl IntoView {
    view! {
        <div class="flex justify-center gap-3 fade-up">
            {SOCIALS
                .into_iter()
                .map(|(label, url)| {
                    view! {
                        <a
                            href=url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="px-4 py-2 rounded-full bg-white/60 backdrop-blur-sm border border-zinc-800/20 text-sm font-semibold text-zinc-800 hover:bg-white hover:shadow-lg transition-all duration-300"
                        >
                            {label}
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Page label shown top right, next to the back button.
#[component]
pub fn PageLabel(text: &'static str) -> impl IntoView {
    view! { <div class="absolute top-8 right-6 md:right-12 z-30 text-sm text-zinc-500 font-mono">{text}</div> }
}
