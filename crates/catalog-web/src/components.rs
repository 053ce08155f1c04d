//! UI Components

use chrono::Datelike;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use catalog_core::{BrandOption, HERO_IMAGE, Product, STORE_NAME, SortOrder, brand_options, normalize_query};

const BRAND_BUTTON: &str = "px-3 py-1 rounded-md border";

/// Site header. "Sign in" and "Cart" are placeholders without handlers.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="bg-white shadow-sm sticky top-0 z-20">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center gap-4">
                        <div class="text-2xl font-bold text-indigo-600">{STORE_NAME}</div>
                        <nav class="hidden md:flex gap-4 text-sm text-gray-600">
                            <a href="#" class="hover:text-indigo-600">"Home"</a>
                            <a href="#" class="hover:text-indigo-600">"Shop"</a>
                            <a href="#" class="hover:text-indigo-600">"About"</a>
                            <a href="#" class="hover:text-indigo-600">"Contact"</a>
                        </nav>
                    </div>

                    <div class="flex items-center gap-4">
                        <button class="hidden sm:inline-block bg-indigo-600 text-white px-4 py-2 rounded-md text-sm">
                            "Sign in"
                        </button>
                        <button class="p-2 rounded-md hover:bg-gray-100">"Cart (0)"</button>
                    </div>
                </div>
            </div>
        </header>
    }
}

/// Hero banner with the search form.
///
/// Keeps its own draft; on submit reports the trimmed draft through
/// `on_search` and leaves filtering to the page.
#[component]
pub fn Hero(on_search: Callback<String>) -> impl IntoView {
    let (draft, set_draft) = signal(String::new());

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_search.run(normalize_query(&draft.get()));
    };

    view! {
        <section class="bg-gradient-to-r from-indigo-50 to-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12 md:py-20">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8 items-center">
                    <div>
                        <h1 class="text-4xl md:text-5xl font-extrabold leading-tight text-gray-900">
                            "Find the perfect phone — fast"
                        </h1>
                        <p class="mt-4 text-gray-600 max-w-xl">
                            "Compare top brands, read quick specs, and buy with confidence. "
                            "Affordable phones to premium flagships — all in one place."
                        </p>

                        <form on:submit=submit class="mt-6 flex gap-2 max-w-md">
                            <input
                                prop:value=move || draft.get()
                                on:input=move |ev| set_draft.set(event_target_value(&ev))
                                placeholder="Search phones, brands, tags..."
                                class="flex-1 rounded-md border border-gray-200 px-4 py-2 focus:outline-none focus:ring-2 focus:ring-indigo-300"
                                aria-label="Search phones"
                            />
                            <button type="submit" class="px-4 py-2 rounded-md bg-indigo-600 text-white">
                                "Search"
                            </button>
                        </form>

                        <div class="mt-6 flex gap-3 text-sm text-gray-600">
                            <span class="inline-flex items-center gap-2">
                                "🔥 "<strong>"Free shipping"</strong>" on orders over $200"
                            </span>
                            <span>"•"</span>
                            <span>"🔒 Secure checkout"</span>
                        </div>
                    </div>

                    <div class="order-first md:order-last">
                        <div class="rounded-2xl bg-white shadow p-4">
                            <img src=HERO_IMAGE alt="Phones collection" class="w-full h-56 object-cover rounded-lg" />
                            <p class="mt-3 text-sm text-gray-500">
                                "Top picks this week — hand-selected for value & performance."
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Brand filter bar: "All" plus one button per brand.
///
/// Tracks the highlighted option locally and reports `None` for "All" or the
/// brand name otherwise. Clicking the selected option reports it again.
#[component]
pub fn BrandFilters(brands: Vec<String>, on_filter_change: Callback<Option<String>>) -> impl IntoView {
    let (selected, set_selected) = signal(BrandOption::All);

    let buttons = brand_options(&brands)
        .into_iter()
        .map(|option| {
            let label = option.label().to_string();

            let highlighted = option.clone();
            let class = move || {
                if selected.with(|current| *current == highlighted) {
                    format!("{BRAND_BUTTON} bg-indigo-600 text-white")
                } else {
                    format!("{BRAND_BUTTON} bg-white")
                }
            };

            let change = move |_| {
                set_selected.set(option.clone());
                on_filter_change.run(option.report());
            };

            view! { <button class=class on:click=change>{label}</button> }
        })
        .collect_view();

    view! { <div class="flex flex-wrap gap-2">{buttons}</div> }
}

/// Sort selector. Not connected to the grid, which keeps catalog order.
#[component]
pub fn SortSelect() -> impl IntoView {
    let options = SortOrder::ALL
        .into_iter()
        .map(|order| view! { <option>{order.label()}</option> })
        .collect_view();

    view! {
        <div class="hidden md:block">
            <label class="text-sm text-gray-500">"Sort"</label>
            <select class="ml-2 rounded-md border px-2 py-1">{options}</select>
        </div>
    }
}

/// Product card. The "View" button has no handler.
#[component]
pub fn PhoneCard(phone: Product) -> impl IntoView {
    let alt = phone.image_alt();
    let price = phone.price_label();
    let rating = phone.rating_label();

    view! {
        <article class="bg-white rounded-xl shadow-sm overflow-hidden hover:shadow-md transition-shadow">
            <img src=phone.image alt=alt class="w-full h-44 object-cover" />
            <div class="p-4">
                <div class="flex justify-between items-start gap-2">
                    <div>
                        <h3 class="text-lg font-semibold">{phone.name}</h3>
                        <p class="text-sm text-gray-500">{phone.brand}</p>
                    </div>
                    <div class="text-right">
                        <div class="text-indigo-600 font-bold">{price}</div>
                        <div class="text-xs text-gray-500">{rating}</div>
                    </div>
                </div>

                <div class="mt-4 flex items-center justify-between">
                    <span class="text-xs px-2 py-1 bg-gray-100 rounded-md">{phone.tag}</span>
                    <button class="px-3 py-1 text-sm rounded-md border hover:bg-indigo-50">"View"</button>
                </div>
            </div>
        </article>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let copyright = format!(
        "© {} {STORE_NAME}. All rights reserved.",
        chrono::Local::now().year()
    );

    view! {
        <footer class="bg-white border-t">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8 text-sm text-gray-600">
                <div class="flex flex-col md:flex-row md:justify-between gap-4">
                    <div>
                        <div class="font-semibold text-gray-900">{STORE_NAME}</div>
                        <div class="mt-2">{copyright}</div>
                    </div>

                    <div class="flex gap-4">
                        <a href="#" class="hover:text-indigo-600">"Privacy"</a>
                        <a href="#" class="hover:text-indigo-600">"Terms"</a>
                        <a href="#" class="hover:text-indigo-600">"Support"</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
