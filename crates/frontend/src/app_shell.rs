//! Application Shell — корневой layout: верхняя панель и рабочая область

use crate::domain::a001_product::ui::list::ProductList;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn AppShell() -> impl IntoView {
    view! {
        <div class="app-shell">
            <header data-zone="header" class="header">
                <div class="header__content">
                    {icon("products")}
                    <span class="header__title">"Inventory"</span>
                </div>
            </header>
            <main data-zone="center" class="app-shell__main">
                <ProductList />
            </main>
        </div>
    }
}
