pub mod state;

use self::state::create_state;
use crate::domain::a001_product::ui::details::ProductDetails;
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use crate::shared::number_format::{format_count, format_money};
use crate::shared::outside_click::{use_outside_click, AnchorRegistry};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use contracts::domain::a001_product::{Product, ProductDraft, ProductId};
use contracts::domain::common::{AggregateId, AggregateRoot};
use leptos::html;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct ProductRow {
    pub id: ProductId,
    pub dom_id: String,
    pub name: String,
    pub category: &'static str,
    pub quantity: String,
    pub price: String,
    pub updated_at: String,
}

impl ProductRow {
    pub fn new(p: &Product, currency_symbol: &str) -> Self {
        Self {
            id: p.id(),
            dom_id: format!("product-{}", p.id().as_string()),
            name: p.description().to_string(),
            category: p.category_label(),
            quantity: format_count(u64::from(p.quantity)),
            price: format_money(p.price, currency_symbol),
            updated_at: format_timestamp(p.metadata().updated_at),
        }
    }
}

fn format_timestamp(dt: chrono::DateTime<chrono::Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let currency = config.currency_symbol.clone();
    let state = create_state(config.seed_products);

    // Row dropdown containers, keyed by product id.
    let anchors = StoredValue::new(AnchorRegistry::<ProductId, NodeRef<html::Div>>::new());

    // Memos keep row rendering and dialog seeding independent of unrelated state changes.
    let products = Memo::new(move |_| state.with(|s| s.catalog.products().to_vec()));
    let open_dropdown = Memo::new(move |_| state.with(|s| s.dropdown.open_id()));
    let modal = Memo::new(move |_| state.with(|s| s.modal.clone()));

    Effect::new(move |_| {
        let ids: Vec<ProductId> = products.with(|ps| ps.iter().map(|p| p.id).collect());
        anchors.update_value(|a| a.retain(|id| ids.contains(id)));
    });

    let open_anchor = Signal::derive(move || {
        open_dropdown
            .get()
            .and_then(|id| anchors.with_value(|a| a.get(&id)))
    });
    use_outside_click(
        open_anchor,
        Callback::new(move |_: ()| state.update(|s| s.close_dropdown())),
    );

    let open_edit = move |id: ProductId| {
        state.update(|s| match s.catalog.get(id).cloned() {
            Some(product) => s.open_edit_modal(product),
            None => log::warn!("edit requested for missing product {}", id),
        });
    };

    let open_delete = move |id: ProductId| {
        state.update(|s| match s.catalog.get(id).cloned() {
            Some(product) => s.open_delete_modal(product),
            None => log::warn!("delete requested for missing product {}", id),
        });
    };

    let on_add = Callback::new(move |draft: ProductDraft| {
        state.update(|s| {
            let product = s.add_product(&draft);
            log::info!("product {} created", product.id);
        });
    });

    let on_edit = Callback::new(move |product: Product| {
        let id = product.id;
        state.update(|s| {
            if s.edit_product(product).is_ok() {
                log::info!("product {} updated", id);
            }
        });
    });

    let on_delete = Callback::new(move |id: ProductId| {
        state.update(|s| {
            if let Ok(removed) = s.delete_product(id) {
                log::info!("product {} deleted ({} rows)", id, removed);
            }
        });
    });

    let on_close = Callback::new(move |_: ()| state.update(|s| s.close_modal()));

    let currency_for_total = currency.clone();

    view! {
        <PageFrame page_id=format!("{}--list", Product::full_name()) category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="header__content">
                    {icon("products")}
                    <h1 class="header__title">{Product::list_name()}</h1>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| state.update(|s| s.open_add_modal())
                    >
                        {icon("plus")}
                        {"Add product"}
                    </button>
                </div>
            </div>

            {move || state.with(|s| s.notice.clone()).map(|e| view! {
                <div class="warning-box" role="alert">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                    <button
                        class="button button--icon"
                        aria-label="Dismiss"
                        on:click=move |_| state.update(|s| s.dismiss_notice())
                    >
                        {icon("x")}
                    </button>
                </div>
            })}

            <div class="page__content">
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">{"Product name"}</th>
                                <th class="table__header-cell">{"Category"}</th>
                                <th class="table__header-cell text-right">{"Quantity"}</th>
                                <th class="table__header-cell text-right">{"Price"}</th>
                                <th class="table__header-cell">{"Updated"}</th>
                                <th class="table__header-cell">
                                    <span class="sr-only">{"Actions"}</span>
                                </th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || products.with(Vec::is_empty)>
                                <tr class="table__row table__row--empty">
                                    <td class="table__cell" colspan="6">{"No products yet"}</td>
                                </tr>
                            </Show>
                            {move || products.get().iter().map(|p| {
                                let row = ProductRow::new(p, &currency);
                                let id = row.id;
                                let anchor = NodeRef::<html::Div>::new();
                                anchors.update_value(|a| a.register(id, anchor));
                                let is_open = move || open_dropdown.get() == Some(id);

                                view! {
                                    <tr class="table__row" id=row.dom_id>
                                        <th scope="row" class="table__cell table__cell--name">{row.name}</th>
                                        <td class="table__cell">{row.category}</td>
                                        <td class="table__cell text-right">{row.quantity}</td>
                                        <td class="table__cell text-right">{row.price}</td>
                                        <td class="table__cell">{row.updated_at}</td>
                                        <td class="table__cell table__cell--actions">
                                            <div class="row-actions" node_ref=anchor>
                                                <button
                                                    type="button"
                                                    class="button button--ghost"
                                                    aria-haspopup="menu"
                                                    aria-expanded=move || is_open().to_string()
                                                    on:click=move |_| state.update(|s| s.toggle_dropdown(id))
                                                >
                                                    {icon("more")}
                                                </button>
                                                <Show when=is_open>
                                                    <ul class="row-actions__menu" role="menu">
                                                        <li>
                                                            <button type="button" role="menuitem" on:click=move |_| open_edit(id)>
                                                                {icon("edit")}
                                                                {"Edit"}
                                                            </button>
                                                        </li>
                                                        <li>
                                                            <button type="button" role="menuitem" class="row-actions__danger" on:click=move |_| open_delete(id)>
                                                                {icon("delete")}
                                                                {"Delete"}
                                                            </button>
                                                        </li>
                                                    </ul>
                                                </Show>
                                            </div>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                        <tfoot class="table__foot">
                            <tr>
                                <td class="table__cell">
                                    {move || format!("{} items", products.with(Vec::len))}
                                </td>
                                <td class="table__cell"></td>
                                <td class="table__cell text-right">
                                    {move || state.with(|s| format_count(s.catalog.total_quantity()))}
                                </td>
                                <td class="table__cell text-right">
                                    {move || state.with(|s| format_money(s.catalog.total_value(), &currency_for_total))}
                                </td>
                                <td class="table__cell" colspan="2"></td>
                            </tr>
                        </tfoot>
                    </table>
                </div>
            </div>

            <ProductDetails
                modal=modal
                on_add=on_add
                on_edit=on_edit
                on_delete=on_delete
                on_close=on_close
            />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::{ProductCatalog, ProductField};
    use chrono::TimeZone;

    #[test]
    fn test_format_timestamp() {
        let dt = chrono::Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_timestamp(dt), "2024-03-15 14:02");
    }

    #[test]
    fn test_product_row() {
        let mut draft = ProductDraft::default();
        draft.set_field(ProductField::Name, "Mouse").unwrap();
        draft.set_field(ProductField::Price, "1999.5").unwrap();
        draft.set_field(ProductField::Quantity, "1200").unwrap();
        let product = ProductCatalog::new().add(&draft);

        let row = ProductRow::new(&product, "$");
        assert_eq!(row.dom_id, "product-1");
        assert_eq!(row.name, "Mouse");
        assert_eq!(row.category, "-");
        assert_eq!(row.quantity, "1,200");
        assert_eq!(row.price, "$1,999.50");
    }
}
