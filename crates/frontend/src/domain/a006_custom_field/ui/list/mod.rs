pub mod state;

use self::state::create_state;
use super::builder::FieldBuilderModal;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::date_utils::{format_date, today_iso};
use crate::shared::icons::icon;
use crate::shared::list_state::*;
use crate::shared::list_utils::{FilterSelect, Highlighted, NoResults, SearchInput};
use crate::shared::number_format::format_thousands;
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_notifications;
use contracts::domain::a006_custom_field::mock::mock_custom_fields;
use contracts::domain::a006_custom_field::{
    CustomField, CustomFieldFilter, CustomFieldSortKey, FieldCategory, FieldType,
};
use leptos::prelude::*;
use thaw::*;

fn category_class(category: FieldCategory) -> &'static str {
    match category {
        FieldCategory::User => "badge badge--primary",
        FieldCategory::Product => "badge badge--purple",
        FieldCategory::Order => "badge badge--success",
        FieldCategory::Content => "badge badge--warning",
        FieldCategory::Custom => "badge badge--neutral",
    }
}

#[component]
pub fn CustomFieldList() -> impl IntoView {
    let toasts = use_notifications();
    let fields = RwSignal::new(mock_custom_fields());
    let state = create_state();
    let list = use_list_view(fields.into(), state);
    let show_builder = RwSignal::new(false);

    let next_id = move || fields.with_untracked(|f| f.iter().map(|x| x.id).max().unwrap_or(0) + 1);

    let on_create = Callback::new(move |field: CustomField| {
        toasts.success(format!("Creating field: {} ({})", field.label, field.field_type));
        fields.update(|list| list.push(field));
        show_builder.set(false);
    });

    let count_category = move |category: FieldCategory| {
        Signal::derive(move || fields.with(|f| f.iter().filter(|x| x.category == category).count().to_string()))
    };

    let sort = sort_signal(state);
    let on_sort = sort_callback(state);
    let search = search_signal(state);

    view! {
        <PageFrame page_id="a006_custom_field--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Custom Fields"
                subtitle="Create and manage custom fields to extend your data model. Add fields to users, products, orders, and more."
            >
                <Button appearance=ButtonAppearance::Primary on_click=move |_| show_builder.set(true)>
                    {icon("plus")}
                    "Create Field"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard
                        label="Total Fields"
                        icon_name="sliders"
                        value=Signal::derive(move || fields.with(|f| f.len().to_string()))
                    />
                    <StatCard label="User Fields" icon_name="user" value=count_category(FieldCategory::User) />
                    <StatCard label="Product Fields" icon_name="package" value=count_category(FieldCategory::Product) />
                    <StatCard
                        label="Total Usage"
                        icon_name="activity"
                        value=Signal::derive(move || {
                            fields.with(|f| format_thousands(f.iter().map(|x| i64::from(x.usage_count)).sum()))
                        })
                    />
                </div>

                <div class="filter-panel">
                    <div class="filter-panel-content">
                        <SearchInput value=search on_change=search_callback(state) placeholder="Search by name or label..." />
                        <FilterSelect
                            label="Categories"
                            options=FieldCategory::ALL.iter().map(|c| c.as_str()).collect()
                            value=filter_signal(state, CustomFieldFilter::Category)
                            on_change=filter_callback(state, CustomFieldFilter::Category)
                        />
                        <FilterSelect
                            label="Types"
                            options=FieldType::ALL.iter().map(|t| t.as_str()).collect()
                            value=filter_signal(state, CustomFieldFilter::Type)
                            on_change=filter_callback(state, CustomFieldFilter::Type)
                        />
                    </div>
                </div>

                <Show
                    when=move || list.filtered.with(|v| !v.is_empty())
                    fallback=move || view! {
                        <NoResults message="No custom fields found" on_reset=reset_callback(state) />
                    }
                >
                    <div class="table-wrapper">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <SortableHeaderCell label="Field" sort_key=CustomFieldSortKey::Label current=sort on_sort=on_sort min_width=220.0 />
                                    <SortableHeaderCell label="Name" sort_key=CustomFieldSortKey::Name current=sort on_sort=on_sort min_width=180.0 />
                                    <SortableHeaderCell label="Type" sort_key=CustomFieldSortKey::Type current=sort on_sort=on_sort />
                                    <TableHeaderCell min_width=100.0>"Category"</TableHeaderCell>
                                    <TableHeaderCell min_width=90.0>"Required"</TableHeaderCell>
                                    <SortableHeaderCell label="Usage" sort_key=CustomFieldSortKey::Usage current=sort on_sort=on_sort align="right" />
                                    <SortableHeaderCell label="Created" sort_key=CustomFieldSortKey::CreatedAt current=sort on_sort=on_sort />
                                    <TableHeaderCell min_width=60.0>""</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || list.page.get().items
                                    key=|f: &CustomField| f.id
                                    children=move |field: CustomField| {
                                        let id = field.id;
                                        let label = field.label.clone();
                                        let options = (!field.options.is_empty()).then(|| field.options.join(", "));
                                        let type_label = format!("{} {}", field.field_type.icon(), field.field_type.as_str());
                                        let category = field.category;
                                        let required = if field.required { "Yes" } else { "No" };
                                        let usage = format_thousands(i64::from(field.usage_count));
                                        let created = format_date(&field.created_at);
                                        let CustomField { label: title, name, .. } = field;
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <div>
                                                            <strong><Highlighted text=title search=search /></strong>
                                                            {options.map(|options| view! {
                                                                <div class="table__subtext">{options}</div>
                                                            })}
                                                        </div>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <code><Highlighted text=name search=search /></code>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{type_label}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <span class=category_class(category)>{category.as_str()}</span>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{required}</TableCellLayout>
                                                </TableCell>
                                                <TableCell class="text-right">{usage}</TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{created}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        size=ButtonSize::Small
                                                        on_click=move |_| {
                                                            fields.update(|list| list.retain(|f| f.id != id));
                                                            toasts.success(format!("Field \"{label}\" deleted"));
                                                        }
                                                    >
                                                        {icon("trash")}
                                                    </Button>
                                                </TableCell>
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

            <Show when=move || show_builder.get()>
                <FieldBuilderModal
                    next_id=next_id()
                    created_at=today_iso()
                    on_close=Callback::new(move |_| show_builder.set(false))
                    on_create=on_create
                />
            </Show>
        </PageFrame>
    }
}
