mod about;
mod connect;
mod decor;
mod dot_field;
mod landing;
mod projects;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::AboutPage;
use connect::ConnectPage;
use landing::LandingPage;
use projects::ProjectsPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-inter bg-[#121212]">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("Harish - {title}") />

        <Router>
            <main class="flex justify-center items-center min-h-screen w-full p-4 md:p-6">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=LandingPage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/projects") view=ProjectsPage />
                    <Route path=path!("/connect") view=ConnectPage />
                </Routes>
            </main>
        </Router>
    }
}
