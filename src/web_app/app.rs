// web_app/app.rs - Root application component
//
// This is the entry point for the Leptos application.
// It sets up routing (one route per integrated source), the index
// page, and the 404 fallback.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::model::Source;
use crate::web_app::pages::SourceSearchPage;

/// Root application component
///
/// Sets up:
/// - Meta tags
/// - Router with one route per source slug
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="TRACKED" />
        <Meta name="description" content="OSINT dashboard over breach databases, phone lookups, and property records" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Stylesheet id="leptos" href="/pkg/tracked.css" />

        <Router>
            <main class="min-h-screen bg-gray-50 font-sans text-gray-900">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/leakcheck") view=|| view! { <SourceSearchPage source=Source::LeakCheck /> } />
                    <Route path=path!("/hackcheck") view=|| view! { <SourceSearchPage source=Source::HackCheck /> } />
                    <Route path=path!("/npd") view=|| view! { <SourceSearchPage source=Source::Npd /> } />
                    <Route path=path!("/snusbase") view=|| view! { <SourceSearchPage source=Source::Snusbase /> } />
                    <Route path=path!("/intelvault") view=|| view! { <SourceSearchPage source=Source::IntelVault /> } />
                    <Route path=path!("/ulp") view=|| view! { <SourceSearchPage source=Source::Ulp /> } />
                    <Route path=path!("/callerid") view=|| view! { <SourceSearchPage source=Source::CallerId /> } />
                    <Route path=path!("/phonelookup") view=|| view! { <SourceSearchPage source=Source::PhoneLookup /> } />
                    <Route path=path!("/property") view=|| view! { <SourceSearchPage source=Source::PropertyRecords /> } />
                    <Route path=path!("/telegram") view=|| view! { <SourceSearchPage source=Source::TelegramScanner /> } />
                    <Route path=path!("/breachdirectory") view=|| view! { <SourceSearchPage source=Source::BreachDirectory /> } />
                    <Route path=path!("/domainintel") view=|| view! { <SourceSearchPage source=Source::DomainIntel /> } />
                </Routes>
            </main>
        </Router>
    }
}

/// Index page: a card per integrated source
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
            <header class="mb-10 text-center">
                <h1 class="text-3xl font-bold text-gray-900 mb-2">"TRACKED"</h1>
                <p class="text-gray-500">"Search across every integrated data source"</p>
            </header>
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                {Source::ALL.into_iter().map(|source| view! {
                    <a
                        href=format!("/{}", source.slug())
                        class="block bg-white rounded-xl border border-gray-200 p-6 shadow-sm \
                               hover:shadow-md hover:border-emerald-300 transition-all"
                    >
                        <h2 class="font-bold text-gray-900 mb-1">{source.label()}</h2>
                        <p class="text-xs text-gray-500 uppercase tracking-wide">
                            {source
                                .search_types()
                                .iter()
                                .map(|t| t.label())
                                .collect::<Vec<_>>()
                                .join(" · ")}
                        </p>
                    </a>
                }).collect_view()}
            </div>
        </div>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-emerald-600 text-white rounded-lg hover:bg-emerald-700 transition-colors"
                >
                    "Back to Sources"
                </a>
            </div>
        </div>
    }
}
