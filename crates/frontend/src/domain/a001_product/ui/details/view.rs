use super::view_model::ProductDetailsViewModel;
use crate::domain::a001_product::ui::list::state::ModalState;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use contracts::domain::a001_product::{Product, ProductDraft, ProductField, ProductId};
use contracts::domain::common::AggregateRoot;
use contracts::enums::ProductCategory;
use leptos::ev;
use leptos::prelude::*;

/// Create / edit / delete dialog for a product.
///
/// Which form is shown is decided by `modal`; results go back through the callbacks.
#[component]
pub fn ProductDetails(
    #[prop(into)] modal: Signal<ModalState>,
    on_add: Callback<ProductDraft>,
    on_edit: Callback<Product>,
    on_delete: Callback<ProductId>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = ProductDetailsViewModel::new();

    Effect::new(move |_| {
        modal.with(|m| vm.reseed(m));
    });

    view! {
        <Show when=move || modal.with(ModalState::is_open)>
            <ModalFrame on_close=on_close modal_class="product-details-modal" labelled_by="product-details-title">
                <PageFrame page_id=format!("{}--detail", Product::full_name()) category=PAGE_CAT_DETAIL>
                    {move || match modal.get() {
                        ModalState::Delete(target) => view! {
                            <DeleteConfirmation
                                target=target
                                vm=vm
                                modal=modal
                                on_delete=on_delete
                                on_close=on_close
                            />
                        }.into_any(),
                        ModalState::Edit(_) => view! {
                            <ProductForm title=format!("Edit {}", Product::element_name()) vm=vm modal=modal on_add=on_add on_edit=on_edit on_close=on_close />
                        }.into_any(),
                        ModalState::Add | ModalState::Closed => view! {
                            <ProductForm title=format!("Add {}", Product::element_name()) vm=vm modal=modal on_add=on_add on_edit=on_edit on_close=on_close />
                        }.into_any(),
                    }}
                </PageFrame>
            </ModalFrame>
        </Show>
    }
}

#[component]
fn DialogHeader(title: String, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="details-header">
            <h3 id="product-details-title">{title}</h3>
            <button
                type="button"
                class="button button--icon modal__close"
                aria-label="Close modal"
                on:click=move |_| on_close.run(())
            >
                {icon("x")}
            </button>
        </div>
    }
}

#[component]
fn ProductForm(
    title: String,
    vm: ProductDetailsViewModel,
    modal: Signal<ModalState>,
    on_add: Callback<ProductDraft>,
    on_edit: Callback<Product>,
    on_close: Callback<()>,
) -> impl IntoView {
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        modal.with_untracked(|m| vm.submit(m, on_add, on_edit, on_close));
    };

    // Text inputs are routed by their `name`; a rejected value is written back
    // so the field keeps the draft.
    let on_text_input = move |ev: ev::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let Some(field) = ProductField::from_name(&input.name()) else {
            log::warn!("input {:?} is not a product field", input.name());
            return;
        };
        if !vm.change_field(field, input.value()) {
            let current = vm.draft.with_untracked(|d| match field {
                ProductField::Price => d.price_text.clone(),
                ProductField::Quantity => d.quantity.to_string(),
                _ => d.name.clone(),
            });
            input.set_value(&current);
        }
    };

    view! {
        <DialogHeader title=title on_close=on_close />

        {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

        <form class="details-form" on:submit=on_submit>
            <div class="form-grid">
                <div class="form-group">
                    <label for={ProductField::Name.name()}>{ProductField::Name.label()}</label>
                    <input
                        type="text"
                        id={ProductField::Name.name()}
                        name={ProductField::Name.name()}
                        prop:value=move || vm.draft.with(|d| d.name.clone())
                        on:input=on_text_input
                        placeholder="Ex. Apple iMac 27\u{201c}"
                    />
                </div>

                <div class="form-group">
                    <label for={ProductField::Price.name()}>{ProductField::Price.label()}</label>
                    <input
                        type="text"
                        id={ProductField::Price.name()}
                        name={ProductField::Price.name()}
                        inputmode="decimal"
                        prop:value=move || vm.draft.with(|d| d.price_text.clone())
                        on:input=on_text_input
                        on:blur=move |_| vm.blur_price()
                        placeholder="0.00"
                    />
                </div>

                <div class="form-group">
                    <label for={ProductField::Quantity.name()}>{ProductField::Quantity.label()}</label>
                    <input
                        type="number"
                        id={ProductField::Quantity.name()}
                        name={ProductField::Quantity.name()}
                        min="0"
                        step="1"
                        prop:value=move || vm.draft.with(|d| d.quantity.to_string())
                        on:input=on_text_input
                        placeholder="99"
                    />
                </div>

                <div class="form-group">
                    <label for={ProductField::Category.name()}>{ProductField::Category.label()}</label>
                    <select
                        id={ProductField::Category.name()}
                        name={ProductField::Category.name()}
                        prop:value=move || {
                            vm.draft.with(|d| d.category.map(|c| c.code()).unwrap_or_default().to_string())
                        }
                        on:change=move |ev| {
                            vm.change_field(ProductField::Category, event_target_value(&ev));
                        }
                    >
                        <option value="" selected=move || vm.draft.with(|d| d.category.is_none())>
                            {"Select Category"}
                        </option>
                        {ProductCategory::all()
                            .into_iter()
                            .map(|c| view! {
                                <option
                                    value=c.code()
                                    selected=move || vm.draft.with(|d| d.category == Some(c))
                                >
                                    {c.display_name()}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </div>
            </div>

            <div class="details-actions">
                <button type="submit" class="button button--primary">
                    {icon("save")}
                    {"Save product"}
                </button>
                <button type="button" class="button button--secondary" on:click=move |_| on_close.run(())>
                    {icon("cancel")}
                    {"Cancel"}
                </button>
            </div>
        </form>
    }
}

#[component]
fn DeleteConfirmation(
    target: Product,
    vm: ProductDetailsViewModel,
    modal: Signal<ModalState>,
    on_delete: Callback<ProductId>,
    on_close: Callback<()>,
) -> impl IntoView {
    let name = if target.name.trim().is_empty() {
        format!("product #{}", target.id)
    } else {
        format!("\u{201c}{}\u{201d}", target.name)
    };

    view! {
        <DialogHeader title=format!("Delete {}", Product::element_name()) on_close=on_close />

        <div class="details-form">
            <p class="delete-confirmation__text">
                {format!("Delete {}? This cannot be undone.", name)}
            </p>
        </div>

        <div class="details-actions">
            <button
                type="button"
                class="button button--danger"
                on:click=move |_| modal.with_untracked(|m| vm.confirm_delete(m, on_delete, on_close))
            >
                {icon("delete")}
                {"Delete"}
            </button>
            <button type="button" class="button button--secondary" on:click=move |_| on_close.run(())>
                {icon("cancel")}
                {"Cancel"}
            </button>
        </div>
    }
}
