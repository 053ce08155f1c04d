//! Home Page

use leptos::prelude::*;

use catalog_core::{Catalog, CatalogState, EMPTY_RESULTS_MESSAGE, Product};
use crate::components::{BrandFilters, Footer, Header, Hero, PhoneCard, SortSelect};

#[component]
pub fn HomePage() -> impl IntoView {
    let catalog = Catalog::featured();
    let brands = catalog.brands();

    // query + selected brand, updated as one value so every render sees both
    let state = RwSignal::new(CatalogState::new());

    let visible = Memo::new(move |_| {
        state.with(|s| s.visible(&catalog).into_iter().cloned().collect::<Vec<Product>>())
    });

    let on_search = Callback::new(move |query: String| {
        state.update(|s| s.submit_query(&query));
    });
    let on_filter_change = Callback::new(move |brand: Option<String>| {
        state.update(|s| s.select_brand(brand));
    });

    view! {
        <div class="min-h-screen bg-gray-50 text-gray-900">
            <Header />

            <main>
                <Hero on_search=on_search />

                <section class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-10">
                    <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-4">
                        <div>
                            <h2 class="text-2xl font-bold">"Featured phones"</h2>
                            <p class="text-sm text-gray-500">"Popular picks from our collection."</p>
                        </div>

                        <div class="flex items-center gap-4">
                            <BrandFilters brands=brands on_filter_change=on_filter_change />
                            <SortSelect />
                        </div>
                    </div>

                    <div class="mt-6 grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6">
                        <For
                            each=move || visible.get()
                            key=|phone| phone.id
                            children=move |phone| view! { <PhoneCard phone=phone /> }
                        />
                        <Show when=move || visible.with(|phones| phones.is_empty())>
                            <div class="col-span-full text-center text-gray-500 py-20">
                                {EMPTY_RESULTS_MESSAGE}
                            </div>
                        </Show>
                    </div>
                </section>
            </main>

            <Footer />
        </div>
    }
}
