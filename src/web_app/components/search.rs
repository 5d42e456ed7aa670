// web_app/components/search.rs - Search-related UI components
//
// The building blocks every source page composes:
// - SearchBar: query input with submit, disabled while a request runs
// - SearchTypeToggle: radio buttons for the source's search types
// - SourceOptionToggles: the source's boolean provider options
// - RowFilterInput: client-side substring filter over the result rows
// - ResultsTable: flattened records with the column union
// - Pagination: fixed-window pager
// - ExportMenu: data-URL download anchors per export format

use std::collections::BTreeMap;

use leptos::prelude::*;

use crate::web_app::components::common::{Badge, TextInput};
use crate::web_app::export::{data_url, export_file_name, render_export, ExportFormat};
use crate::web_app::model::{Source, SourceResults, SearchType};
use crate::web_app::results::ResultRow;

/// Search bar with input, type toggle, and submit button
///
/// The submit control is disabled while a request is in flight so each
/// page has at most one outstanding request.
#[component]
pub fn SearchBar(
    /// Current query text
    query: RwSignal<String>,
    /// The source this page searches
    source: Source,
    /// Selected search type
    search_type: RwSignal<SearchType>,
    /// Provider option toggles
    options: RwSignal<BTreeMap<String, bool>>,
    /// Whether a request is currently in flight
    pending: Signal<bool>,
    /// Callback when search is triggered
    on_search: Callback<()>,
) -> impl IntoView {
    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if !pending.get_untracked() {
            on_search.run(());
        }
    };

    let placeholder = format!("Search {}...", source.label());

    view! {
        <form on:submit=on_submit class="w-full">
            <div class="flex gap-4 mb-4">
                <div class="relative flex-1">
                    <div class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none">
                        <span class="text-gray-400">"🔍"</span>
                    </div>
                    <input
                        type="text"
                        placeholder=placeholder
                        class="w-full pl-10 pr-4 py-3 border-2 border-gray-200 rounded-xl \
                               focus:ring-4 focus:ring-emerald-100 focus:border-emerald-500 \
                               outline-none text-lg transition-all shadow-sm"
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                </div>
                <button
                    type="submit"
                    disabled=move || pending.get()
                    class="px-8 py-3 bg-emerald-600 text-white rounded-xl \
                           hover:bg-emerald-700 active:bg-emerald-800 transition-all \
                           disabled:bg-gray-400 disabled:cursor-not-allowed \
                           font-semibold shadow-md"
                >
                    {move || if pending.get() { "Searching..." } else { "Search" }}
                </button>
            </div>

            <div class="flex flex-wrap items-center gap-6">
                <SearchTypeToggle source=source search_type=search_type />
                <SourceOptionToggles source=source options=options />
            </div>
        </form>
    }
}

/// Radio buttons for the source's permitted search types
#[component]
pub fn SearchTypeToggle(
    /// The source whose types are offered
    source: Source,
    /// Selected search type
    search_type: RwSignal<SearchType>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-50 p-4 rounded-xl border border-gray-100 flex-1">
            <span class="text-xs font-semibold text-gray-500 uppercase tracking-wider mb-3 block">
                "Search By"
            </span>
            <div class="flex flex-wrap gap-4">
                {source.search_types().iter().copied().map(|type_value| {
                    let is_selected = move || search_type.get() == type_value;
                    view! {
                        <label class="flex items-center gap-2 cursor-pointer group">
                            <input
                                type="radio"
                                name="search_type"
                                checked=is_selected
                                on:change=move |_| search_type.set(type_value)
                                class="peer sr-only"
                            />
                            <div class="w-5 h-5 border-2 border-gray-300 rounded-full peer-checked:border-emerald-600 \
                                        peer-checked:border-[6px] transition-all bg-white"></div>
                            <span class=move || {
                                if is_selected() {
                                    "text-emerald-700 font-bold transition-colors"
                                } else {
                                    "text-gray-700 font-medium group-hover:text-gray-900 transition-colors"
                                }
                            }>
                                {type_value.label()}
                            </span>
                        </label>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

/// Checkboxes for the source's provider options
#[component]
pub fn SourceOptionToggles(
    source: Source,
    options: RwSignal<BTreeMap<String, bool>>,
) -> impl IntoView {
    let toggles = source.options();
    (!toggles.is_empty()).then(|| {
        view! {
            <div class="bg-gray-50 p-4 rounded-xl border border-gray-100">
                <span class="text-xs font-semibold text-gray-500 uppercase tracking-wider mb-3 block">
                    "Options"
                </span>
                <div class="flex flex-wrap gap-4">
                    {toggles.iter().copied().map(|(key, label)| {
                        let is_checked = move || options.get().get(key).copied().unwrap_or(false);
                        view! {
                            <label class="flex items-center gap-2 cursor-pointer group">
                                <input
                                    type="checkbox"
                                    checked=is_checked
                                    on:change=move |_| {
                                        options.update(|opts| {
                                            let current = opts.get(key).copied().unwrap_or(false);
                                            opts.insert(key.to_string(), !current);
                                        });
                                    }
                                    class="h-4 w-4 rounded border-gray-300 text-emerald-600 focus:ring-emerald-500"
                                />
                                <span class="text-sm font-medium text-gray-700 group-hover:text-gray-900">
                                    {label}
                                </span>
                            </label>
                        }
                    }).collect_view()}
                </div>
            </div>
        }
    })
}

/// Free-text filter over the already-fetched rows
///
/// Purely client-side; every keystroke re-derives the filtered set.
#[component]
pub fn RowFilterInput(
    /// Current filter text
    filter: RwSignal<String>,
    /// Total and filtered row counts, for the summary badge
    total: Signal<usize>,
    matching: Signal<usize>,
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3 mb-4">
            <div class="flex-1">
                <TextInput value=filter placeholder="Filter results..." />
            </div>
            <Badge>
                {move || format!("{} of {} records", matching.get(), total.get())}
            </Badge>
        </div>
    }
}

/// Result table over the visible page of rows
#[component]
pub fn ResultsTable(
    /// Ordered column names (union of record keys)
    columns: Signal<Vec<String>>,
    /// Rows visible on the current page
    rows: Signal<Vec<ResultRow>>,
    /// Row click handler, for the record detail modal
    on_row_click: Callback<ResultRow>,
) -> impl IntoView {
    view! {
        <div class="overflow-x-auto bg-white rounded-xl border border-gray-200 shadow-sm">
            <table class="min-w-full divide-y divide-gray-200 text-sm">
                <thead class="bg-gray-50">
                    <tr>
                        {move || columns.get().into_iter().map(|col| view! {
                            <th class="px-4 py-3 text-left text-xs font-semibold text-gray-500 uppercase tracking-wider whitespace-nowrap">
                                {col}
                            </th>
                        }).collect_view()}
                    </tr>
                </thead>
                <tbody class="divide-y divide-gray-100">
                    {move || {
                        let cols = columns.get();
                        rows.get().into_iter().map(|row| {
                            let cells = cols
                                .iter()
                                .map(|col| row.get(col).to_string())
                                .collect::<Vec<_>>();
                            let clicked_row = row.clone();
                            view! {
                                <tr
                                    class="hover:bg-emerald-50/50 cursor-pointer transition-colors"
                                    on:click=move |_| on_row_click.run(clicked_row.clone())
                                >
                                    {cells.into_iter().map(|cell| view! {
                                        <td class="px-4 py-2 text-gray-700 whitespace-nowrap max-w-xs truncate">
                                            {cell}
                                        </td>
                                    }).collect_view()}
                                </tr>
                            }
                        }).collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

/// All fields of a single record, for the detail modal
#[component]
pub fn RecordDetail(row: ResultRow) -> impl IntoView {
    view! {
        <dl class="divide-y divide-gray-100">
            {row.entries().map(|(key, value)| view! {
                <div class="py-2 grid grid-cols-3 gap-4">
                    <dt class="text-sm font-semibold text-gray-500">{key.to_string()}</dt>
                    <dd class="text-sm text-gray-800 col-span-2 break-all">{value.to_string()}</dd>
                </div>
            }).collect::<Vec<_>>()}
        </dl>
    }
}

/// Pagination component
#[component]
pub fn Pagination(
    /// Current page (0-indexed)
    current_page: RwSignal<usize>,
    /// Total number of (filtered) rows
    total_items: Signal<usize>,
    /// Rows per page
    page_size: usize,
) -> impl IntoView {
    let total_pages = move || total_items.get().div_ceil(page_size).max(1);

    let can_go_prev = move || current_page.get() > 0;
    let can_go_next = move || current_page.get() + 1 < total_pages();

    let go_prev = move |_| {
        if can_go_prev() {
            current_page.update(|p| *p = p.saturating_sub(1));
        }
    };

    let go_next = move |_| {
        if can_go_next() {
            current_page.update(|p| *p += 1);
        }
    };

    view! {
        <div class="flex items-center justify-center gap-4 mt-8 mb-4">
            <button
                type="button"
                class="px-4 py-2 bg-white border border-gray-200 rounded-lg shadow-sm \
                       disabled:opacity-50 disabled:cursor-not-allowed \
                       hover:bg-gray-50 hover:border-gray-300 transition-all font-medium text-gray-700"
                disabled=move || !can_go_prev()
                on:click=go_prev
            >
                "← Previous"
            </button>

            <span class="text-sm font-medium text-gray-600 bg-gray-100 px-4 py-2 rounded-lg">
                "Page " {move || current_page.get() + 1} " of " {total_pages}
            </span>

            <button
                type="button"
                class="px-4 py-2 bg-white border border-gray-200 rounded-lg shadow-sm \
                       disabled:opacity-50 disabled:cursor-not-allowed \
                       hover:bg-gray-50 hover:border-gray-300 transition-all font-medium text-gray-700"
                disabled=move || !can_go_next()
                on:click=go_next
            >
                "Next →"
            </button>
        </div>
    }
}

/// Download anchors for every export format
///
/// Each anchor carries a `data:` URL of the rendered payload and a
/// `download` attribute with the `<source>-<query>.<ext>` file name.
#[component]
pub fn ExportMenu(
    /// The stored result set, when a search has completed
    results: Signal<Option<SourceResults>>,
) -> impl IntoView {
    view! {
        {move || results.get().map(|res| view! {
            <div class="flex items-center gap-2 flex-wrap">
                <span class="text-xs font-semibold text-gray-500 uppercase tracking-wider">
                    "Export"
                </span>
                {ExportFormat::ALL.into_iter().map(|format| {
                    let content = render_export(&res, format);
                    let href = data_url(format, &content);
                    let file_name = export_file_name(res.source, &res.query, format);
                    view! {
                        <a
                            href=href
                            download=file_name
                            class="px-3 py-1.5 text-sm font-medium bg-white border border-gray-200 \
                                   rounded-lg text-gray-700 hover:bg-gray-50 hover:border-gray-300 \
                                   transition-all shadow-sm"
                        >
                            {format.label()}
                        </a>
                    }
                }).collect_view()}
            </div>
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_logic_pure() {
        let total_items = 100usize;
        let page_size = 12usize;

        let total_pages = total_items.div_ceil(page_size);
        assert_eq!(total_pages, 9);

        let total_items_2 = 96usize;
        assert_eq!(total_items_2.div_ceil(page_size), 8);
    }

    #[test]
    fn test_next_button_boundary() {
        // can_go_next logic: page+1 < total_pages
        let page_size = 12usize;
        let total_items = 24usize;
        let total_pages = total_items.div_ceil(page_size).max(1);

        assert!(0 + 1 < total_pages);
        assert!(1 + 1 >= total_pages);
    }

    #[test]
    fn test_export_format_labels_are_distinct() {
        let labels: Vec<_> = ExportFormat::ALL.iter().map(|f| f.label()).collect();
        let mut deduped = labels.clone();
        deduped.dedup();
        assert_eq!(labels.len(), deduped.len());
    }
}
