//! Enhanced Inventory Page
//!
//! Inventory table with server-side category/brand/search filters, an
//! expiring-only toggle, client-side pagination, and CRUD modals. Stock and
//! expiration classifications come from the server and are shown verbatim.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, CategoryOptions, InventoryFilter, ItemPayload};
use crate::components::{DeleteConfirmButton, Modal};
use crate::config::AppConfig;
use crate::derived;
use crate::models::{ExpirationStatus, InventoryItem, StockStatus};
use crate::remote::{RemoteState, RemoteStore};

const PER_PAGE: usize = 10;
const EXPIRING_WINDOW_DAYS: u32 = 90;

#[derive(Clone, Debug, PartialEq)]
enum EditorTarget {
    Closed,
    Create,
    Edit(String),
}

/// Form backing the create/edit modal. All fields are strings straight from
/// the inputs; `to_payload` parses and validates.
#[derive(Clone, Debug, PartialEq, Eq)]
struct ItemForm {
    name: String,
    generic_name: String,
    category: String,
    subcategory: String,
    brand: String,
    manufacturer: String,
    quantity: String,
    unit: String,
    cost: String,
    delivery_date: String,
    expiration_date: String,
    batch_number: String,
    sku: String,
    barcode: String,
    supplier: String,
    storage_location: String,
    min_stock_level: String,
    max_stock_level: String,
    reorder_point: String,
    description: String,
    notes: String,
}

impl Default for ItemForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            generic_name: String::new(),
            category: String::new(),
            subcategory: String::new(),
            brand: String::new(),
            manufacturer: String::new(),
            quantity: String::new(),
            unit: "pcs".to_string(),
            cost: String::new(),
            delivery_date: String::new(),
            expiration_date: String::new(),
            batch_number: String::new(),
            sku: String::new(),
            barcode: String::new(),
            supplier: String::new(),
            storage_location: String::new(),
            min_stock_level: "10".to_string(),
            max_stock_level: "100".to_string(),
            reorder_point: "20".to_string(),
            description: String::new(),
            notes: String::new(),
        }
    }
}

impl ItemForm {
    fn from_item(item: &InventoryItem) -> Self {
        let date_only = |value: Option<&chrono::DateTime<chrono::Utc>>| {
            value
                .map(|dt| dt.format("%Y-%m-%d").to_string())
                .unwrap_or_default()
        };
        Self {
            name: item.name.clone(),
            generic_name: item.generic_name.clone(),
            category: item.category_hierarchy.level1.clone(),
            subcategory: item.category_hierarchy.level2.clone(),
            brand: item.brand.clone(),
            manufacturer: item.manufacturer.clone(),
            quantity: item.total_quantity.to_string(),
            unit: item.unit.clone(),
            cost: item.cost.to_string(),
            delivery_date: date_only(item.delivery_date.as_ref()),
            expiration_date: date_only(item.expiration_date.as_ref()),
            batch_number: item.batch_number.clone(),
            sku: item.sku.clone(),
            barcode: item.barcode.clone(),
            supplier: item.supplier.clone(),
            storage_location: item.storage_location.clone(),
            min_stock_level: item.min_stock_level.to_string(),
            max_stock_level: item.max_stock_level.to_string(),
            reorder_point: item.reorder_point.to_string(),
            description: item.description.clone(),
            notes: item.notes.clone(),
        }
    }

    fn parse_level(value: &str, field: &str) -> Result<u32, String> {
        value
            .trim()
            .parse()
            .map_err(|_| format!("{field} must be a whole number."))
    }

    /// Presence and numeric-shape validation only
    fn to_payload(&self) -> Result<ItemPayload, String> {
        if self.name.trim().is_empty() {
            return Err("Name is required.".to_string());
        }
        if self.category.trim().is_empty() {
            return Err("Category is required.".to_string());
        }
        let quantity: u32 = self
            .quantity
            .trim()
            .parse()
            .map_err(|_| "Quantity must be a whole number.".to_string())?;
        let cost: f64 = if self.cost.trim().is_empty() {
            0.0
        } else {
            self.cost
                .trim()
                .parse()
                .map_err(|_| "Cost must be a number.".to_string())?
        };
        let min_stock_level = Self::parse_level(&self.min_stock_level, "Minimum stock level")?;
        let max_stock_level = Self::parse_level(&self.max_stock_level, "Maximum stock level")?;
        let reorder_point = Self::parse_level(&self.reorder_point, "Reorder point")?;

        Ok(ItemPayload {
            name: self.name.trim().to_string(),
            generic_name: self.generic_name.clone(),
            category: self.category.clone(),
            subcategory: self.subcategory.clone(),
            brand: self.brand.clone(),
            manufacturer: self.manufacturer.clone(),
            quantity,
            unit: self.unit.clone(),
            delivery_date: self.delivery_date.clone(),
            expiration_date: self.expiration_date.clone(),
            batch_number: self.batch_number.clone(),
            sku: self.sku.clone(),
            barcode: self.barcode.clone(),
            cost,
            supplier: self.supplier.clone(),
            storage_location: self.storage_location.clone(),
            min_stock_level,
            max_stock_level,
            reorder_point,
            description: self.description.clone(),
            notes: self.notes.clone(),
            ..ItemPayload::default()
        })
    }
}

fn stock_badge_class(status: StockStatus) -> &'static str {
    match status {
        StockStatus::Critical => "badge badge-critical",
        StockStatus::Low => "badge badge-low",
        StockStatus::Overstock => "badge badge-overstock",
        StockStatus::Normal => "badge badge-normal",
    }
}

fn expiration_badge_class(status: ExpirationStatus) -> &'static str {
    match status {
        ExpirationStatus::Expired => "badge badge-critical",
        ExpirationStatus::Expiring => "badge badge-overstock",
        ExpirationStatus::Warning => "badge badge-low",
        ExpirationStatus::Good => "badge badge-normal",
    }
}

#[component]
pub fn InventoryPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();

    let items: RemoteStore<Vec<InventoryItem>> = RemoteStore::new();
    let options: RemoteStore<CategoryOptions> = RemoteStore::new();
    let expiring: RemoteStore<Vec<InventoryItem>> = RemoteStore::new();

    let (category, set_category) = signal(String::new());
    let (brand, set_brand) = signal(String::new());
    let (search, set_search) = signal(String::new());
    let (expiring_only, set_expiring_only) = signal(false);
    let (page, set_page) = signal(1usize);

    let (editor, set_editor) = signal(EditorTarget::Closed);
    let form = RwSignal::new(ItemForm::default());
    let (form_error, set_form_error) = signal(String::new());
    let (saving, set_saving) = signal(false);

    {
        let config = config.clone();
        options.load(async move { api::inventory_categories(&config).await });
    }
    {
        let config = config.clone();
        expiring.load(async move { api::expiring_items(&config, EXPIRING_WINDOW_DAYS).await });
    }

    // Re-fetch whenever a server-side filter changes; pagination resets so
    // the new result set starts at its first page.
    {
        let config = config.clone();
        Effect::new(move |_| {
            let filter = InventoryFilter {
                category: category.get(),
                brand: brand.get(),
                search: search.get(),
            };
            set_page.set(1);
            let config = config.clone();
            items.load(async move { api::list_inventory_items(&config, &filter).await });
        });
    }

    let reload = {
        let config = config.clone();
        move || {
            let filter = InventoryFilter {
                category: category.get_untracked(),
                brand: brand.get_untracked(),
                search: search.get_untracked(),
            };
            let config = config.clone();
            items.load(async move { api::list_inventory_items(&config, &filter).await });
        }
    };

    let close_editor = move || {
        set_editor.set(EditorTarget::Closed);
        set_form_error.set(String::new());
        form.set(ItemForm::default());
    };

    let submit = {
        let config = config.clone();
        let reload = reload.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            if saving.get() {
                return;
            }
            let payload = match form.with(|f| f.to_payload()) {
                Ok(payload) => payload,
                Err(message) => {
                    set_form_error.set(message);
                    return;
                }
            };
            set_form_error.set(String::new());
            set_saving.set(true);

            let config = config.clone();
            let reload = reload.clone();
            let target = editor.get();
            spawn_local(async move {
                let result = match &target {
                    EditorTarget::Edit(id) => {
                        api::update_inventory_item(&config, id, &payload).await
                    }
                    _ => api::create_inventory_item(&config, &payload).await,
                };
                match result {
                    Ok(()) => {
                        let _ = set_editor.try_set(EditorTarget::Closed);
                        let _ = form.try_set(ItemForm::default());
                        reload();
                    }
                    Err(err) => {
                        let _ = set_form_error.try_set(err.user_message());
                    }
                }
                let _ = set_saving.try_set(false);
            });
        }
    };

    let delete = {
        let config = config.clone();
        let reload = reload.clone();
        move |id: String| {
            let config = config.clone();
            let reload = reload.clone();
            spawn_local(async move {
                match api::delete_inventory_item(&config, &id).await {
                    Ok(()) => reload(),
                    Err(err) => log::error!("delete inventory item failed: {}", err.user_message()),
                }
            });
        }
    };

    let filter_bar = move || {
        let (categories, brands) = match options.state().get() {
            RemoteState::Ready(opts) => (opts.categories, opts.brands),
            _ => (Vec::new(), Vec::new()),
        };
        view! {
            <div class="filter-bar">
                <label class="filter-field">
                    "Category"
                    <select
                        prop:value=move || category.get()
                        on:change=move |ev| set_category.set(event_target_value(&ev))
                    >
                        <option value="">"All Categories"</option>
                        {categories
                            .into_iter()
                            .map(|name| view! { <option value=name.clone()>{name.clone()}</option> })
                            .collect_view()}
                    </select>
                </label>

                <label class="filter-field">
                    "Brand"
                    <select
                        prop:value=move || brand.get()
                        on:change=move |ev| set_brand.set(event_target_value(&ev))
                    >
                        <option value="">"All Brands"</option>
                        {brands
                            .into_iter()
                            .map(|name| view! { <option value=name.clone()>{name.clone()}</option> })
                            .collect_view()}
                    </select>
                </label>

                <label class="filter-field">
                    "Search"
                    <input
                        type="text"
                        placeholder="Search by name, SKU, or barcode..."
                        prop:value=move || search.get()
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                    />
                </label>

                <label class="filter-check">
                    <input
                        type="checkbox"
                        prop:checked=move || expiring_only.get()
                        on:change=move |ev| set_expiring_only.set(event_target_checked(&ev))
                    />
                    "Show expiring items only"
                </label>
            </div>
        }
    };

    let expiring_banner = move || {
        let count = expiring
            .state()
            .with(|state| state.data().map(|items| items.len()).unwrap_or(0));
        (count > 0)
            .then(|| {
                view! {
                    <div class="expiring-banner">
                        {format!(
                            "{count} item(s) expire within the next {EXPIRING_WINDOW_DAYS} days."
                        )}
                    </div>
                }
            })
    };

    let table = move || match items.state().get() {
        RemoteState::Idle | RemoteState::Loading => {
            view! { <p class="page-loading">"Loading inventory..."</p> }.into_any()
        }
        RemoteState::Failed(message) => {
            view! { <div class="page-error">{message}</div> }.into_any()
        }
        RemoteState::Ready(all_items) => {
            let visible: Vec<InventoryItem> = if expiring_only.get() {
                all_items
                    .into_iter()
                    .filter(|item| item.expiration_status != ExpirationStatus::Good)
                    .collect()
            } else {
                all_items
            };
            if visible.is_empty() {
                return view! { <p class="panel-empty">"No inventory items found."</p> }
                    .into_any();
            }
            let total_pages = derived::page_count(visible.len(), PER_PAGE);
            let current_page = page.get().min(total_pages);
            let rows = derived::page_slice(&visible, current_page, PER_PAGE);
            let at_first = current_page <= 1;
            let at_last = current_page >= total_pages;
            let category_count = derived::count_by(&visible, |item| {
                item.category_hierarchy.level1.as_str()
            })
            .len();
            let summary_line = format!(
                "{} item(s) across {} categorie(s)",
                visible.len(),
                category_count,
            );
            view! {
                <p class="table-summary">{summary_line}</p>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Item"</th>
                            <th>"Category"</th>
                            <th>"Brand"</th>
                            <th>"Quantity"</th>
                            <th>"Cost"</th>
                            <th>"Expiration"</th>
                            <th>"Stock"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {rows
                            .into_iter()
                            .map(|item| {
                                let edit_source = item.clone();
                                let delete_id = item.id.clone();
                                let delete = delete.clone();
                                view! {
                                    <tr>
                                        <td>
                                            <span class="item-name">{item.name.clone()}</span>
                                            <span class="item-generic">
                                                {item.generic_name.clone()}
                                            </span>
                                            <span class="item-sku">
                                                {format!(
                                                    "SKU: {}",
                                                    if item.sku.is_empty() {
                                                        "N/A"
                                                    } else {
                                                        item.sku.as_str()
                                                    },
                                                )}
                                            </span>
                                        </td>
                                        <td>{item.category_hierarchy.path()}</td>
                                        <td>{item.brand.clone()}</td>
                                        <td>
                                            {format!("{} {}", item.total_quantity, item.unit)}
                                        </td>
                                        <td>{derived::format_currency(item.cost)}</td>
                                        <td>
                                            {derived::format_day(item.expiration_date.as_ref())}
                                            {item
                                                .expiration_date
                                                .is_some()
                                                .then(|| {
                                                    format!(
                                                        " ({} days)",
                                                        item.days_until_expiration,
                                                    )
                                                })}
                                            <span class=expiration_badge_class(
                                                item.expiration_status,
                                            )>{item.expiration_status.label()}</span>
                                        </td>
                                        <td>
                                            <span class=stock_badge_class(item.stock_status)>
                                                {item.stock_status.label()}
                                            </span>
                                        </td>
                                        <td>
                                            <button
                                                class="edit-btn"
                                                on:click=move |_| {
                                                    form.set(ItemForm::from_item(&edit_source));
                                                    set_form_error.set(String::new());
                                                    set_editor
                                                        .set(EditorTarget::Edit(edit_source.id.clone()));
                                                }
                                            >
                                                "Edit"
                                            </button>
                                            <DeleteConfirmButton on_confirm=Callback::new(move |_| {
                                                delete(delete_id.clone())
                                            }) />
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
                <div class="pagination">
                    <button
                        class="page-btn"
                        disabled=at_first
                        on:click=move |_| set_page.update(|p| *p = p.saturating_sub(1).max(1))
                    >
                        "Previous"
                    </button>
                    <span class="page-status">
                        {format!("Page {current_page} of {total_pages}")}
                    </span>
                    <button
                        class="page-btn"
                        disabled=at_last
                        on:click=move |_| set_page.update(|p| *p += 1)
                    >
                        "Next"
                    </button>
                </div>
            }
            .into_any()
        }
    };

    let editor_modal = move || {
        let target = editor.get();
        if target == EditorTarget::Closed {
            return ().into_any();
        }
        let title = match &target {
            EditorTarget::Edit(_) => "Edit Inventory Item",
            _ => "Add New Item",
        };
        let submit = submit.clone();
        view! {
            <Modal title=title on_close=Callback::new(move |_| close_editor())>
                <form class="modal-form" on:submit=submit>
                    <Show when=move || !form_error.get().is_empty()>
                        <div class="form-error">{move || form_error.get()}</div>
                    </Show>

                    <div class="form-grid">
                        <label class="form-field">
                            "Name *"
                            <input
                                type="text"
                                prop:value=move || form.with(|f| f.name.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.name = event_target_value(&ev))
                                }
                            />
                        </label>
                        <label class="form-field">
                            "Generic Name"
                            <input
                                type="text"
                                prop:value=move || form.with(|f| f.generic_name.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.generic_name = event_target_value(&ev))
                                }
                            />
                        </label>
                        <label class="form-field">
                            "Category *"
                            <input
                                type="text"
                                prop:value=move || form.with(|f| f.category.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.category = event_target_value(&ev))
                                }
                            />
                        </label>
                        <label class="form-field">
                            "Subcategory"
                            <input
                                type="text"
                                prop:value=move || form.with(|f| f.subcategory.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.subcategory = event_target_value(&ev))
                                }
                            />
                        </label>
                        <label class="form-field">
                            "Brand"
                            <input
                                type="text"
                                prop:value=move || form.with(|f| f.brand.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.brand = event_target_value(&ev))
                                }
                            />
                        </label>
                        <label class="form-field">
                            "Manufacturer"
                            <input
                                type="text"
                                prop:value=move || form.with(|f| f.manufacturer.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.manufacturer = event_target_value(&ev))
                                }
                            />
                        </label>
                        <label class="form-field">
                            "Quantity *"
                            <input
                                type="number"
                                prop:value=move || form.with(|f| f.quantity.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.quantity = event_target_value(&ev))
                                }
                            />
                        </label>
                        <label class="form-field">
                            "Unit"
                            <input
                                type="text"
                                prop:value=move || form.with(|f| f.unit.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.unit = event_target_value(&ev))
                                }
                            />
                        </label>
                        <label class="form-field">
                            "Cost"
                            <input
                                type="number"
                                step="0.01"
                                prop:value=move || form.with(|f| f.cost.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.cost = event_target_value(&ev))
                                }
                            />
                        </label>
                        <label class="form-field">
                            "Delivery Date"
                            <input
                                type="date"
                                prop:value=move || form.with(|f| f.delivery_date.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.delivery_date = event_target_value(&ev))
                                }
                            />
                        </label>
                        <label class="form-field">
                            "Expiration Date"
                            <input
                                type="date"
                                prop:value=move || form.with(|f| f.expiration_date.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.expiration_date = event_target_value(&ev))
                                }
                            />
                        </label>
                        <label class="form-field">
                            "Batch Number"
                            <input
                                type="text"
                                prop:value=move || form.with(|f| f.batch_number.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.batch_number = event_target_value(&ev))
                                }
                            />
                        </label>
                        <label class="form-field">
                            "SKU"
                            <input
                                type="text"
                                prop:value=move || form.with(|f| f.sku.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.sku = event_target_value(&ev))
                                }
                            />
                        </label>
                        <label class="form-field">
                            "Barcode"
                            <input
                                type="text"
                                prop:value=move || form.with(|f| f.barcode.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.barcode = event_target_value(&ev))
                                }
                            />
                        </label>
                        <label class="form-field">
                            "Supplier"
                            <input
                                type="text"
                                prop:value=move || form.with(|f| f.supplier.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.supplier = event_target_value(&ev))
                                }
                            />
                        </label>
                        <label class="form-field">
                            "Storage Location"
                            <input
                                type="text"
                                prop:value=move || form.with(|f| f.storage_location.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.storage_location = event_target_value(&ev))
                                }
                            />
                        </label>
                        <label class="form-field">
                            "Min Stock Level"
                            <input
                                type="number"
                                prop:value=move || form.with(|f| f.min_stock_level.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.min_stock_level = event_target_value(&ev))
                                }
                            />
                        </label>
                        <label class="form-field">
                            "Max Stock Level"
                            <input
                                type="number"
                                prop:value=move || form.with(|f| f.max_stock_level.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.max_stock_level = event_target_value(&ev))
                                }
                            />
                        </label>
                        <label class="form-field">
                            "Reorder Point"
                            <input
                                type="number"
                                prop:value=move || form.with(|f| f.reorder_point.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.reorder_point = event_target_value(&ev))
                                }
                            />
                        </label>
                        <label class="form-field form-field-wide">
                            "Description"
                            <textarea
                                rows=3
                                prop:value=move || form.with(|f| f.description.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.description = event_target_value(&ev))
                                }
                            ></textarea>
                        </label>
                        <label class="form-field form-field-wide">
                            "Notes"
                            <textarea
                                rows=2
                                prop:value=move || form.with(|f| f.notes.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.notes = event_target_value(&ev))
                                }
                            ></textarea>
                        </label>
                    </div>

                    <div class="modal-actions">
                        <button type="button" class="secondary-btn" on:click=move |_| close_editor()>
                            "Cancel"
                        </button>
                        <button type="submit" class="primary-btn" disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { "Save Item" }}
                        </button>
                    </div>
                </form>
            </Modal>
        }
        .into_any()
    };

    view! {
        <div class="page inventory-page">
            <div class="page-header">
                <h1>"Enhanced Inventory Management"</h1>
                <p class="page-subtitle">
                    "Inventory tracking with category hierarchy, brand management, and expiry monitoring"
                </p>
                <button
                    class="primary-btn"
                    on:click=move |_| {
                        form.set(ItemForm::default());
                        set_form_error.set(String::new());
                        set_editor.set(EditorTarget::Create);
                    }
                >
                    "Add New Item"
                </button>
            </div>

            {expiring_banner}
            <div class="panel">{filter_bar}</div>
            <div class="panel">{table}</div>

            {editor_modal}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ItemForm {
        ItemForm {
            name: "Paracetamol 500mg".to_string(),
            category: "Medicine".to_string(),
            quantity: "40".to_string(),
            cost: "2.50".to_string(),
            ..ItemForm::default()
        }
    }

    #[test]
    fn test_payload_from_valid_form() {
        let payload = filled_form().to_payload().unwrap();
        assert_eq!(payload.name, "Paracetamol 500mg");
        assert_eq!(payload.quantity, 40);
        assert_eq!(payload.cost, 2.5);
        assert_eq!(payload.unit, "pcs");
        assert_eq!(payload.min_stock_level, 10);
        assert_eq!(payload.reorder_point, 20);
    }

    #[test]
    fn test_payload_requires_name_and_category() {
        let mut form = filled_form();
        form.name = "  ".to_string();
        assert_eq!(form.to_payload(), Err("Name is required.".to_string()));

        let mut form = filled_form();
        form.category.clear();
        assert_eq!(form.to_payload(), Err("Category is required.".to_string()));
    }

    #[test]
    fn test_payload_rejects_non_numeric_quantity() {
        let mut form = filled_form();
        form.quantity = "forty".to_string();
        assert_eq!(
            form.to_payload(),
            Err("Quantity must be a whole number.".to_string())
        );
    }

    #[test]
    fn test_empty_cost_defaults_to_zero() {
        let mut form = filled_form();
        form.cost = String::new();
        assert_eq!(form.to_payload().unwrap().cost, 0.0);
    }
}
