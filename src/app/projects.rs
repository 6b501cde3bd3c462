use leptos::prelude::*;
use leptos_meta::Title;

use super::decor::{Backdrop, BackButton, PageCard, PageLabel, SectionTitle};
use crate::projects::{Pager, Project, PROJECTS, PROJECTS_PER_PAGE};

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let pager = RwSignal::new(Pager::new(PROJECTS.len(), PROJECTS_PER_PAGE));

    let cards = move || {
        pager
            .get()
            .slice(PROJECTS)
            .iter()
            .enumerate()
            .map(|(i, project)| view! { <ProjectCard project=*project order=i /> })
            .collect_view()
    };

    let dots = move || {
        let current = pager.get();
        (0..current.total_pages())
            .map(|page| {
                let class = if page == current.page() {
                    "h-2 w-8 rounded-full bg-[#e15f41] transition-all duration-300"
                } else {
                    "h-2 w-2 rounded-full bg-zinc-400 hover:bg-zinc-500 transition-all duration-300"
                };
                view! {
                    <button
                        class=class
                        aria-label=format!("Page {}", page + 1)
                        on:click=move |_| pager.update(|p| *p = p.go_to(page))
                    ></button>
                }
            })
            .collect_view()
    };

    view! {
        <Title text="Projects" />
        <PageCard>
            <Backdrop />
            <BackButton />
            <PageLabel text="Projects / Portfolio" />

            <div class="flex-1 flex flex-col justify-between p-6 md:p-12 pt-20 md:pt-24 relative z-10">
                <SectionTitle
                    title="My Projects"
                    subtitle="Explore my portfolio of web and mobile applications built with modern technologies"
                />

                <div class="flex-1 flex items-center justify-center">
                    // Re-keyed per page so the cards slide in again.
                    {move || {
                        let page = pager.get().page();
                        view! {
                            <div
                                data-page=page.to_string()
                                class="grid grid-cols-1 md:grid-cols-3 gap-6 md:gap-8 justify-items-center w-full max-w-6xl slide-in-right"
                            >
                                {cards()}
                            </div>
                        }
                    }}
                </div>

                <div class="flex items-center justify-center gap-6 mt-8">
                    <button
                        class="p-3 rounded-full bg-zinc-800 hover:bg-zinc-700 disabled:opacity-30 disabled:cursor-not-allowed transition-all duration-300 text-white"
                        aria-label="Previous page"
                        disabled=move || !pager.get().has_prev()
                        on:click=move |_| pager.update(|p| *p = p.prev())
                    >
                        "‹"
                    </button>
                    <div class="flex gap-2">{dots}</div>
                    <button
                        class="p-3 rounded-full bg-zinc-800 hover:bg-zinc-700 disabled:opacity-30 disabled:cursor-not-allowed transition-all duration-300 text-white"
                        aria-label="Next page"
                        disabled=move || !pager.get().has_next()
                        on:click=move |_| pager.update(|p| *p = p.next())
                    >
                        "›"
                    </button>
                </div>
            </div>
        </PageCard>
    }
}

/// Flip card: title on the front, details on the back once hovered.
#[component]
fn ProjectCard(project: Project, order: usize) -> impl IntoView {
    view! {
        <article
            class="flip-card relative w-full max-w-[340px] h-[400px] fade-up"
            style=format!("animation-delay: {:.1}s", order as f64 * 0.1)
        >
            <div class="flip-card-inner relative w-full h-full">
                <div class="flip-card-face flip-card-front rounded-2xl bg-black border border-zinc-800 shadow-lg flex items-center justify-center">
                    <div class="text-center p-6">
                        <h3 class="text-2xl font-bold text-white mb-3">{project.title}</h3>
                        <p class="text-base text-zinc-400">{project.subtitle}</p>
                    </div>
                </div>
                <div class="flip-card-face flip-card-back p-6 rounded-2xl bg-black border border-zinc-800 shadow-lg flex flex-col">
                    <div class="flex-1 space-y-4">
                        <div class="space-y-2">
                            <h3 class="text-xl font-semibold text-white">{project.title}</h3>
                            <p class="text-sm text-zinc-400 line-clamp-2">{project.description}</p>
                        </div>
                        <div class="space-y-2">
                            <p class="text-xs font-semibold text-zinc-500 uppercase tracking-wide">
                                "Tech Stack"
                            </p>
                            {project
                                .tech
                                .iter()
                                .map(|t| {
                                    view! {
                                        <div class="text-sm text-zinc-300 bg-zinc-900 rounded-lg px-3 py-2 font-medium">
                                            {*t}
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="pt-4 mt-4 border-t border-zinc-800 flex gap-3">
                        <a
                            href=project.repository
                            target="_blank"
                            rel="noopener noreferrer"
                            class="flex-1 flex items-center justify-center gap-2 p-3 rounded-lg bg-zinc-800 hover:bg-zinc-700 transition-all duration-300 text-white text-sm font-medium"
                        >
                            "GitHub"
                        </a>
                        <a
                            href=project.live
                            target="_blank"
                            rel="noopener noreferrer"
                            class="flex-1 flex items-center justify-center gap-2 p-3 rounded-lg bg-[#e15f41] hover:bg-[#d14e32] transition-all duration-300 text-white text-sm font-medium"
                        >
                            "Live"
                        </a>
                    </div>
                </div>
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use leptos::reactive::owner::Owner;

    use super::*;

    fn render_card(project: Project) -> String {
        Owner::new().with(|| view! { <ProjectCard project=project order=0 /> }.to_html())
    }

    #[test]
    fn test_card_has_front_and_back_faces() {
        let project = PROJECTS[0];
        let html = render_card(project);

        let front = html.find("flip-card-front").expect("front face");
        let back = html.find("flip-card-back").expect("back face");
        assert!(front < back);
        assert!(html.contains("flip-card-inner"));

        // title and subtitle up front, details only on the back
        let subtitle = html.find(project.subtitle).expect("subtitle");
        assert!(front < subtitle && subtitle < back);
        let description = html.find(project.description).expect("description");
        assert!(description > back);
        assert!(html[back..].contains(project.repository));
        assert!(html[back..].contains(project.live));
        for tech in project.tech {
            assert!(html[back..].contains(tech));
        }
    }
}
