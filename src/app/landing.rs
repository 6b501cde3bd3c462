use std::time::Duration;

use leptos::{ev::MouseEvent, html, prelude::*};
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;
use leptos_use::{use_element_bounding, UseElementBoundingReturn};

use super::decor::{Backdrop, PageCard};
use super::dot_field::{InteractiveDots, MagneticButton};
use crate::motion::{parallax_tilt, Rect, Tilt};

const NAV_ITEMS: [(&str, &str); 3] = [("About", "/about"), ("Projects", "/projects"), ("Connect", "/connect")];
const NAV_DELAY: Duration = Duration::from_millis(500);

/// Claims the pending navigation for `route` unless one is already under way.
fn request_nav(pending: RwSignal<Option<&'static str>>, route: &'static str) -> bool {
    if pending.get_untracked().is_some() {
        return false;
    }
    pending.set(Some(route));
    true
}

fn build_month() -> String {
    chrono::DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.format("%b %Y").to_string())
        .unwrap_or_default()
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let stage = NodeRef::<html::Div>::new();
    let UseElementBoundingReturn {
        left,
        top,
        width,
        height,
        ..
    } = use_element_bounding(stage);
    let (tilt, set_tilt) = signal(Tilt::default());

    // Leave time for the exit overlay before switching routes.
    let navigate = use_navigate();
    let pending = RwSignal::new(None::<&'static str>);
    Effect::new(move |_| {
        if let Some(route) = pending.get() {
            let navigate = navigate.clone();
            set_timeout(move || navigate(route, Default::default()), NAV_DELAY);
        }
    });

    let on_stage_move = move |ev: MouseEvent| {
        let rect = Rect {
            left: left.get_untracked(),
            top: top.get_untracked(),
            width: width.get_untracked(),
            height: height.get_untracked(),
        };
        set_tilt.set(parallax_tilt(&rect, ev.client_x() as f64, ev.client_y() as f64));
    };

    view! {
        <Title text="Home" />
        <PageCard class="md:h-[calc(100vh-3rem)]">
            <Backdrop third_orb="top-1/3 right-1/4 animate-float-slow" />
            <div
                node_ref=stage
                class="relative flex flex-col flex-1 w-full justify-between items-center"
                on:mousemove=on_stage_move
                on:mouseleave=move |_| set_tilt.set(Tilt::default())
            >
                <div class="w-full flex justify-between items-center px-6 md:px-12 pt-6 z-20 fade-up">
                    <div class="flex items-center gap-2">
                        <span class="relative flex h-3 w-3">
                            <span class="animate-ping absolute inline-flex h-full w-full rounded-full bg-green-400 opacity-75"></span>
                            <span class="relative inline-flex rounded-full h-3 w-3 bg-green-500"></span>
                        </span>
                        <span class="text-sm font-medium text-zinc-600">"Available for work"</span>
                    </div>
                    <div class="text-sm text-zinc-500 font-mono">{build_month()}</div>
                </div>

                <div class="relative flex flex-col items-center justify-center flex-1 w-full px-4">
                    <div class="mb-8 fade-up">
                        <span class="inline-flex items-center gap-2 px-4 py-2 rounded-full bg-black/5 backdrop-blur-sm border border-black/10 text-sm font-medium text-zinc-700 relative overflow-hidden group">
                            <span class="absolute inset-0 shimmer opacity-0 group-hover:opacity-100"></span>
                            <span class="w-1.5 h-1.5 rounded-full bg-[#e15f41] relative z-10"></span>
                            <span class="relative z-10">"Web Developer & Creative"</span>
                        </span>
                    </div>

                    <div
                        class="absolute w-[85vw] sm:w-[75vw] md:w-[95vw] max-w-4xl h-48 sm:h-60 md:h-72 bg-black morph-shape transition-transform duration-300 ease-out shadow-2xl overflow-hidden"
                        style:transform=move || tilt.get().to_css()
                    >
                        <div class="absolute inset-0 shimmer opacity-20"></div>
                        <InteractiveDots />
                    </div>

                    <h1 class="relative text-center font-anton tracking-wide z-10 px-4 pointer-events-none">
                        <span class="block text-sm sm:text-base md:text-xl font-medium text-white/80 mb-2 tracking-widest uppercase fade-up">
                            "Hello, I'm"
                        </span>
                        <span class="block mb-4 text-4xl sm:text-5xl md:text-8xl lg:text-9xl font-bold text-white drop-shadow-2xl tracking-tighter fade-up">
                            "HARISH"
                        </span>
                        <span class="inline-block bg-gradient-to-r from-[#e15f41] to-[#f5a623] rounded-xl md:rounded-2xl px-3 py-2 md:px-4 md:py-4 shadow-2xl relative overflow-hidden fade-up">
                            <span class="absolute inset-0 shimmer"></span>
                            <span class="block text-lg sm:text-xl md:text-3xl lg:text-4xl font-bold text-black relative z-10">
                                "SOFTWARE ENGINEER"
                            </span>
                        </span>
                    </h1>

                    <p class="mt-6 md:mt-8 text-zinc-600 text-center max-w-md text-sm sm:text-base md:text-lg z-10 font-medium px-4 fade-up">
                        "Crafting digital experiences with code & creativity"
                    </p>
                </div>

                <nav class="w-full flex flex-wrap justify-center gap-3 sm:gap-4 md:gap-10 mb-6 md:mb-8 z-20 px-4 fade-up">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|(label, route)| {
                            view! {
                                <MagneticButton
                                    class="group relative font-semibold text-sm md:text-base text-zinc-800 py-2 md:py-3 px-5 md:px-8 rounded-full bg-white/60 backdrop-blur-sm border border-[#e15f41]/30 hover:bg-white hover:shadow-xl transition-all duration-300 overflow-hidden"
                                    on_press=move |_| {
                                        request_nav(pending, route);
                                    }
                                >
                                    <span class="absolute inset-0 bg-gradient-to-r from-[#e15f41] to-[#f5a623] rounded-full opacity-0 group-hover:opacity-10"></span>
                                    <span class="relative z-10">{label}</span>
                                    <span class="inline-block ml-1 opacity-0 group-hover:opacity-100">"→"</span>
                                </MagneticButton>
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="absolute top-6 right-6 w-16 h-16 border-t-2 border-r-2 border-zinc-300/50 rounded-tr-3xl"></div>
                <div class="absolute bottom-6 left-6 w-16 h-16 border-b-2 border-l-2 border-zinc-300/50 rounded-bl-3xl"></div>
                <div class="absolute top-8 left-8 w-2 h-2 rounded-full bg-[#e15f41]/40 orb-pulse"></div>
                <div class="absolute bottom-8 right-8 w-2 h-2 rounded-full bg-[#e15f41]/40 orb-pulse [animation-delay:1.5s]"></div>
            </div>
        </PageCard>

        <Show when=move || pending.get().is_some()>
            <div class="fixed inset-0 bg-[#121212] z-50 flex items-center justify-center fade-in">
                <div class="w-16 h-16 border-4 border-[#e15f41] border-t-transparent rounded-full animate-spin"></div>
            </div>
        </Show>
    }
}
