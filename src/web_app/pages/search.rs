// web_app/pages/search.rs - Generic source search page
//
// The one component shape every dashboard page instantiates: query
// input, one request at a time, result table with client-side filter
// and pagination, export menu, and the three terminal error states
// (validation, subscription, generic).

use std::collections::BTreeMap;

use leptos::prelude::*;

use crate::web_app::components::*;
use crate::web_app::model::*;
use crate::web_app::results::{filter_rows, PaginationState, ResultRow, RowSet, PAGE_SIZE};
use crate::web_app::server_fns::search_source;

/// Search page for one source
///
/// State lifecycle: every signal below is created when the page mounts
/// and dropped on navigation; a new search replaces the entire previous
/// result (no merge) and resets pagination to the first page.
#[component]
pub fn SourceSearchPage(
    /// The source this page instance searches
    source: Source,
) -> impl IntoView {
    // Search input state
    let query = RwSignal::new(String::new());
    let search_type =
        RwSignal::new(source.search_types().first().copied().unwrap_or_default());
    let options = RwSignal::new(BTreeMap::<String, bool>::new());

    // Result view state
    let filter_text = RwSignal::new(String::new());
    let current_page = RwSignal::new(0_usize);
    let selected_row = RwSignal::new(None::<ResultRow>);

    // Request state: the attempt counter makes re-submitting the same
    // query re-fetch, and `pending` disables the submit control.
    let submitted = RwSignal::new(None::<(u32, SearchQuery)>);
    let pending = RwSignal::new(false);
    let validation_error = RwSignal::new(None::<String>);

    let search_results = Resource::new(
        move || submitted.get(),
        move |maybe_search| async move {
            match maybe_search {
                None => Ok(None),
                Some((_, search)) => search_source(
                    search.source,
                    search.text,
                    search.search_type,
                    search.options,
                )
                .await
                .map(Some),
            }
        },
    );

    // Clear the in-flight flag whenever a response (or error) lands.
    Effect::new(move || {
        if search_results.get().is_some() {
            pending.set(false);
        }
    });

    let on_search = Callback::new(move |()| {
        let text = query.get();
        if text.trim().is_empty() {
            // Local validation: never reaches the network.
            validation_error.set(Some("Please enter a query".to_string()));
            return;
        }
        validation_error.set(None);
        current_page.set(0);
        selected_row.set(None);
        pending.set(true);
        submitted.update(|prev| {
            let attempt = prev.as_ref().map(|(n, _)| n + 1).unwrap_or(0);
            *prev = Some((
                attempt,
                SearchQuery {
                    source,
                    text: text.clone(),
                    search_type: search_type.get(),
                    options: options.get(),
                },
            ));
        });
    });

    // Derived result state
    let results = Signal::derive(move || {
        search_results
            .get()
            .and_then(|r| r.ok())
            .flatten()
            .and_then(|outcome| match outcome {
                SearchOutcome::Results(res) => Some(res),
                SearchOutcome::SubscriptionRequired { .. } => None,
            })
    });

    let subscription_message = Signal::derive(move || {
        search_results
            .get()
            .and_then(|r| r.ok())
            .flatten()
            .and_then(|outcome| match outcome {
                SearchOutcome::SubscriptionRequired { message } => Some(message),
                SearchOutcome::Results(_) => None,
            })
    });

    let row_set = Signal::derive(move || {
        results
            .get()
            .map(|res| RowSet::from_records(&res.records, source.preferred_columns()))
            .unwrap_or_default()
    });

    // Recomputed on every filter keystroke.
    let filtered = Signal::derive(move || filter_rows(&row_set.get().rows, &filter_text.get()));

    let visible_rows = Signal::derive(move || {
        let pager = PaginationState {
            current_page: current_page.get(),
            page_size: PAGE_SIZE,
        };
        pager.page_slice(&filtered.get()).to_vec()
    });

    let columns = Signal::derive(move || row_set.get().columns);
    let total_rows = Signal::derive(move || row_set.get().len());
    let matching_rows = Signal::derive(move || filtered.get().len());

    let on_row_click = Callback::new(move |row: ResultRow| {
        selected_row.set(Some(row));
    });
    let on_close_detail = Callback::new(move |()| {
        selected_row.set(None);
    });

    view! {
        <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <header class="mb-6">
                <h1 class="text-2xl font-bold text-gray-900">{source.label()}</h1>
            </header>

            <section class="bg-white rounded-2xl shadow-sm p-6 mb-6 border border-gray-100">
                <SearchBar
                    query=query
                    source=source
                    search_type=search_type
                    options=options
                    pending=pending.into()
                    on_search=on_search
                />
                {move || validation_error.get().map(|message| view! {
                    <p class="mt-3 text-sm text-red-600 font-medium">{message}</p>
                })}
            </section>

            <Suspense fallback=move || view! {
                <div class="bg-white rounded-2xl p-12 shadow-sm border border-gray-100 text-center">
                    <Loading message="Searching..." />
                </div>
            }>
                {move || {
                    match search_results.get() {
                        // Nothing submitted yet
                        None | Some(Ok(None)) => view! {
                            <div class="bg-white rounded-2xl p-12 shadow-sm border border-gray-100 \
                                        text-center text-gray-400">
                                "Enter a query to search this source."
                            </div>
                        }.into_any(),
                        Some(Err(e)) => view! {
                            <ErrorDisplay error=e.to_string() />
                        }.into_any(),
                        Some(Ok(Some(_))) => view! {
                            <div class="animate-fade-in">
                                {move || subscription_message.get().map(|message| view! {
                                    <SubscriptionPanel message=message />
                                })}

                                {move || results.get().map(|_| view! {
                                    <div class="bg-white rounded-2xl shadow-sm p-6 border border-gray-100">
                                        <div class="flex justify-between items-center mb-4 flex-wrap gap-4">
                                            <ExportMenu results=results />
                                        </div>

                                        <RowFilterInput
                                            filter=filter_text
                                            total=total_rows
                                            matching=matching_rows
                                        />

                                        <Show
                                            when=move || matching_rows.get() > 0
                                            fallback=move || view! {
                                                <div class="p-8 text-center text-gray-400">
                                                    "No records match."
                                                </div>
                                            }
                                        >
                                            <ResultsTable
                                                columns=columns
                                                rows=visible_rows
                                                on_row_click=on_row_click
                                            />
                                            <Pagination
                                                current_page=current_page
                                                total_items=matching_rows
                                                page_size=PAGE_SIZE
                                            />
                                        </Show>
                                    </div>
                                })}
                            </div>
                        }.into_any(),
                    }
                }}
            </Suspense>

            // Record detail modal
            {move || {
                selected_row.get().map(|row| view! {
                    <ModalWrapper
                        title="Record Details"
                        on_close=on_close_detail
                    >
                        <RecordDetail row=row />
                    </ModalWrapper>
                })
            }}
        </div>
    }
}
