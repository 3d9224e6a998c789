pub mod state;

use self::state::create_state;
use super::add::AddProductModal;
use crate::shared::components::badge::{Tone, ToneBadge};
use crate::shared::components::import_modal::ImportModal;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::config::{PRODUCT_IMPORT_EXTENSIONS, PRODUCT_IMPORT_MAX_BYTES};
use crate::shared::icons::icon;
use crate::shared::list_state::*;
use crate::shared::list_utils::{FilterSelect, Highlighted, NoResults, SearchInput};
use crate::shared::number_format::{format_currency_short, format_thousands};
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_notifications;
use contracts::domain::a002_product::mock::mock_products;
use contracts::domain::a002_product::{
    Product, ProductCategory, ProductFilter, ProductSortKey, ProductStatus,
};
use leptos::prelude::*;
use thaw::*;

fn status_tone(status: ProductStatus) -> Tone {
    match status {
        ProductStatus::Active => Tone::Success,
        ProductStatus::Draft => Tone::Warning,
        ProductStatus::Discontinued => Tone::Neutral,
    }
}

/// Сумма выручки по всем продуктам, в долларах.
fn total_revenue(products: &[Product]) -> f64 {
    products.iter().map(Product::revenue_amount).sum()
}

#[component]
pub fn ProductList() -> impl IntoView {
    let toasts = use_notifications();
    let products = RwSignal::new(mock_products());
    let state = create_state();
    let list = use_list_view(products.into(), state);

    let show_add = RwSignal::new(false);
    let show_import = RwSignal::new(false);

    let next_id = move || products.with_untracked(|p| p.iter().map(|x| x.id).max().unwrap_or(0) + 1);

    let on_created = Callback::new(move |product: Product| {
        let message = format!("Product \"{}\" created successfully!", product.name);
        log::info!("product {} created", product.id);
        products.update(|list| list.push(product));
        show_add.set(false);
        toasts.success(message);
    });

    let sort = sort_signal(state);
    let on_sort = sort_callback(state);
    let search = search_signal(state);

    view! {
        <PageFrame page_id="a002_product--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Products"
                subtitle="Manage your product catalogue, pricing and availability."
            >
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| show_import.set(true)>
                    {icon("upload")}
                    "Import"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| show_add.set(true)>
                    {icon("plus")}
                    "Add Product"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard
                        label="Total Products"
                        icon_name="package"
                        value=Signal::derive(move || products.with(|p| p.len().to_string()))
                    />
                    <StatCard
                        label="Active"
                        icon_name="check"
                        value=Signal::derive(move || {
                            products.with(|p| {
                                p.iter().filter(|x| x.status == ProductStatus::Active).count().to_string()
                            })
                        })
                    />
                    <StatCard
                        label="Total Revenue"
                        icon_name="trending-up"
                        value=Signal::derive(move || products.with(|p| format_currency_short(total_revenue(p))))
                    />
                    <StatCard
                        label="Total Users"
                        icon_name="users"
                        value=Signal::derive(move || {
                            products.with(|p| format_thousands(p.iter().map(|x| x.users as i64).sum()))
                        })
                    />
                </div>

                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <span class="filter-panel__title">"Catalogue"</span>
                        <span class="filter-panel__badge">
                            {move || format!("{} shown", list.filtered.with(Vec::len))}
                        </span>
                    </div>
                    <div class="filter-panel-content">
                        <SearchInput
                            value=search
                            on_change=search_callback(state)
                            placeholder="Search products..."
                        />
                        <FilterSelect
                            label="Categories"
                            options=ProductCategory::ALL.iter().map(|c| c.as_str()).collect()
                            value=filter_signal(state, ProductFilter::Category)
                            on_change=filter_callback(state, ProductFilter::Category)
                        />
                        <FilterSelect
                            label="Status"
                            options=ProductStatus::ALL.iter().map(|s| s.as_str()).collect()
                            value=filter_signal(state, ProductFilter::Status)
                            on_change=filter_callback(state, ProductFilter::Status)
                        />
                    </div>
                </div>

                <Show
                    when=move || list.filtered.with(|v| !v.is_empty())
                    fallback=move || view! {
                        <NoResults message="No products found" on_reset=reset_callback(state) />
                    }
                >
                    <div class="table-wrapper">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <SortableHeaderCell label="Product" sort_key=ProductSortKey::Name current=sort on_sort=on_sort min_width=200.0 />
                                    <SortableHeaderCell label="Category" sort_key=ProductSortKey::Category current=sort on_sort=on_sort />
                                    <SortableHeaderCell label="Price" sort_key=ProductSortKey::Price current=sort on_sort=on_sort align="right" />
                                    <TableHeaderCell min_width=100.0>"Status"</TableHeaderCell>
                                    <SortableHeaderCell label="Users" sort_key=ProductSortKey::Users current=sort on_sort=on_sort align="right" />
                                    <SortableHeaderCell label="Revenue" sort_key=ProductSortKey::Revenue current=sort on_sort=on_sort align="right" />
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || list.page.get().items
                                    key=|p: &Product| p.id
                                    children=move |product: Product| {
                                        let Product { name, category, price, status, users, revenue, .. } = product;
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <strong><Highlighted text=name search=search /></strong>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <Highlighted text=category.as_str() search=search />
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell class="text-right">{price}</TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <ToneBadge tone=status_tone(status) text=status.as_str() />
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell class="text-right">{format_thousands(users as i64)}</TableCell>
                                                <TableCell class="text-right">{revenue}</TableCell>
                                            </TableRow>
                                        }
                                    }
                                />
                            </TableBody>
                        </Table>
                    </div>

                    <PaginationControls
                        current_page=Signal::derive(move || list.page.with(|p| p.page))
                        total_pages=Signal::derive(move || list.page.with(|p| p.total_pages))
                        total_count=Signal::derive(move || list.page.with(|p| p.total_count))
                        page_size=Signal::derive(move || state.with(|s| s.page_size))
                        on_page_change=Callback::new(move |page| state.update(|s| s.page = page))
                        on_page_size_change=Callback::new(move |size| state.update(|s| s.set_page_size(size)))
                    />
                </Show>
            </div>

            <Show when=move || show_add.get()>
                <AddProductModal
                    next_id=next_id()
                    on_close=Callback::new(move |_| show_add.set(false))
                    on_created=on_created
                />
            </Show>

            <Show when=move || show_import.get()>
                <ImportModal
                    title="Import Products"
                    hint="CSV up to 5MB"
                    accept=".csv"
                    allowed_extensions=PRODUCT_IMPORT_EXTENSIONS
                    max_bytes=PRODUCT_IMPORT_MAX_BYTES
                    missing_message="Please select a file to import"
                    progress_label="Importing products..."
                    on_close=Callback::new(move |_| show_import.set(false))
                    on_imported=Callback::new(move |_| {
                        show_import.set(false);
                        toasts.success("Products imported successfully!");
                    })
                />
            </Show>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_revenue_formats_as_millions() {
        let products = mock_products();
        let total = total_revenue(&products);
        assert!(total > 1_000_000.0);
        assert!(format_currency_short(total).ends_with('M'));
    }

    #[test]
    fn test_total_revenue_empty() {
        assert_eq!(total_revenue(&[]), 0.0);
    }
}
