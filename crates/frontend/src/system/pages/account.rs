use crate::shared::clipboard::copy_to_clipboard;
use crate::shared::components::badge::{Tone, ToneBadge};
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::date_utils::{now_iso, today_iso};
use crate::shared::export::{download_text, export_json, MIME_CSV, MIME_TEXT};
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::shared::toast::use_notifications;
use contracts::domain::a005_report::ExportFormat;
use contracts::system::account::{
    confirm_deletion, mock_api_keys, mock_invoices, mock_usage, AccountExport, AccountSummary,
    ApiKey, BillingInfo, Invoice, RetentionPeriod, DELETE_CONFIRMATION,
};
use leptos::prelude::*;
use thaw::*;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Overview,
    Billing,
    ApiKeys,
    Data,
    Danger,
}

impl Tab {
    const ALL: [Tab; 5] = [Tab::Overview, Tab::Billing, Tab::ApiKeys, Tab::Data, Tab::Danger];

    fn label(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Billing => "Billing",
            Tab::ApiKeys => "API Keys",
            Tab::Data => "Data Management",
            Tab::Danger => "Danger Zone",
        }
    }
}

/// Поля платёжной формы.
#[derive(Clone, Copy)]
struct BillingFields {
    company_name: RwSignal<String>,
    tax_id: RwSignal<String>,
    address: RwSignal<String>,
    city: RwSignal<String>,
    state: RwSignal<String>,
    zip_code: RwSignal<String>,
    country: RwSignal<String>,
}

impl BillingFields {
    fn new(info: &BillingInfo) -> Self {
        Self {
            company_name: RwSignal::new(info.company_name.clone()),
            tax_id: RwSignal::new(info.tax_id.clone()),
            address: RwSignal::new(info.address.clone()),
            city: RwSignal::new(info.city.clone()),
            state: RwSignal::new(info.state.clone()),
            zip_code: RwSignal::new(info.zip_code.clone()),
            country: RwSignal::new(info.country.clone()),
        }
    }

    fn read(&self) -> BillingInfo {
        BillingInfo {
            company_name: self.company_name.get_untracked().trim().to_string(),
            tax_id: self.tax_id.get_untracked().trim().to_string(),
            address: self.address.get_untracked().trim().to_string(),
            city: self.city.get_untracked().trim().to_string(),
            state: self.state.get_untracked().trim().to_string(),
            zip_code: self.zip_code.get_untracked().trim().to_string(),
            country: self.country.get_untracked().trim().to_string(),
        }
    }
}

fn export_account(export: &AccountExport, format: ExportFormat) -> Result<(), String> {
    let stem = format!("account-export-{}", today_iso());
    match format {
        ExportFormat::Json => export_json(export, &format!("{stem}.json")),
        ExportFormat::Csv | ExportFormat::Excel => {
            let b = &export.billing;
            let mut csv = String::from("Field,Value\n");
            for (field, value) in [
                ("Account ID", &export.summary.account_id),
                ("Plan", &export.summary.plan),
                ("Company", &b.company_name),
                ("Tax ID", &b.tax_id),
                ("Country", &b.country),
            ] {
                csv.push_str(&format!("{},\"{}\"\n", field, value.replace('"', "\"\"")));
            }
            download_text(&csv, &format!("{stem}.csv"), MIME_CSV)
        }
        ExportFormat::Pdf => {
            let text = format!(
                "Account Data Export\nDate: {}\n\nAccount: {} ({})\nCompany: {}\nAPI keys: {}\nInvoices: {}",
                export.exported_at,
                export.summary.account_id,
                export.summary.plan,
                export.billing.company_name,
                export.api_keys.len(),
                export.invoices.len()
            );
            download_text(&text, &format!("{stem}.txt"), MIME_TEXT)
        }
    }
}

#[component]
fn CreateApiKeyModal(on_close: Callback<()>, on_create: Callback<ApiKey>) -> impl IntoView {
    let toasts = use_notifications();
    let name = RwSignal::new(String::new());

    let submit = move |_| {
        let token = Uuid::new_v4().simple().to_string();
        match ApiKey::create(Uuid::new_v4().to_string(), &name.get_untracked(), &token, &today_iso()) {
            Ok(key) => on_create.run(key),
            Err(e) => {
                toasts.validation_failed(&e);
            }
        }
    };

    view! {
        <ModalFrame title="Create API Key" on_close=on_close>
            <div class="form__group">
                <Label>"Key Name *"</Label>
                <Input value=name placeholder="e.g., CI pipeline" />
                <p class="form__hint">"New keys get read and write permissions."</p>
            </div>
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=submit>
                    "Create Key"
                </Button>
            </div>
        </ModalFrame>
    }
}

#[component]
fn DeleteAccountModal(on_close: Callback<()>, on_confirm: Callback<()>) -> impl IntoView {
    let toasts = use_notifications();
    let typed = RwSignal::new(String::new());

    let confirm = move |_| match confirm_deletion(&typed.get_untracked()) {
        Ok(()) => on_confirm.run(()),
        Err(e) => {
            toasts.validation_failed(&e);
        }
    };

    view! {
        <ModalFrame title="Delete Account" on_close=on_close modal_class="modal--danger">
            <p class="modal-text">"Are you absolutely sure you want to delete your account? This will:"</p>
            <ul class="modal-list">
                <li>"Permanently delete all your data"</li>
                <li>"Cancel your active subscription"</li>
                <li>"Remove all API keys and integrations"</li>
            </ul>
            <div class="form__group">
                <Label>{format!("Type \"{}\" to confirm", DELETE_CONFIRMATION)}</Label>
                <Input value=typed placeholder=DELETE_CONFIRMATION />
            </div>
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    class="button--danger"
                    disabled=Signal::derive(move || typed.with(|t| t.trim() != DELETE_CONFIRMATION))
                    on_click=confirm
                >
                    "Delete Account"
                </Button>
            </div>
        </ModalFrame>
    }
}

#[component]
pub fn AccountPage() -> impl IntoView {
    let toasts = use_notifications();
    let tab = RwSignal::new(Tab::Overview);
    let summary = StoredValue::new(AccountSummary::default());

    // Billing
    let billing = RwSignal::new(BillingInfo::default());
    let billing_fields = BillingFields::new(&billing.get_untracked());
    let save_billing = move |_| {
        let info = billing_fields.read();
        match info.validate() {
            Ok(()) => {
                billing.set(info);
                toasts.success("Billing information updated successfully!");
            }
            Err(e) => {
                toasts.validation_failed(&e);
            }
        }
    };
    let download_invoice = move |invoice: &Invoice| {
        match download_text(&invoice.to_text(), &invoice.file_name(), MIME_TEXT) {
            Ok(()) => {
                toasts.success(format!("Invoice #{} downloaded", invoice.id));
            }
            Err(e) => {
                toasts.error(e);
            }
        }
    };

    // API keys
    let api_keys = RwSignal::new(mock_api_keys());
    let show_key_modal = RwSignal::new(false);
    let on_key_created = Callback::new(move |key: ApiKey| {
        let message = format!("API key \"{}\" created successfully!", key.name);
        log::info!("api key {} created", key.id);
        api_keys.update(|keys| keys.push(key));
        show_key_modal.set(false);
        toasts.success(message);
    });
    let copy_key = move |secret: String| {
        copy_to_clipboard(&secret, move |result| match result {
            Ok(()) => {
                toasts.success("API key copied to clipboard");
            }
            Err(e) => {
                toasts.error(e);
            }
        });
    };
    let delete_key = move |id: String| {
        api_keys.update(|keys| keys.retain(|k| k.id != id));
        toasts.success("API key deleted successfully");
    };

    // Data management
    let on_export = move |format: ExportFormat| {
        let export = api_keys.with_untracked(|keys| {
            AccountExport::new(
                summary.get_value(),
                billing.get_untracked(),
                keys,
                mock_invoices(),
                &now_iso(),
            )
        });
        match export_account(&export, format) {
            Ok(()) => {
                toasts.success(format!("Account data exported as {}", format));
            }
            Err(e) => {
                toasts.error(e);
            }
        }
    };
    let retention = RwSignal::new(RetentionPeriod::Forever.as_str().to_string());
    let save_retention = move |_| {
        toasts.success(format!("Retention period set to {}", retention.get_untracked()));
    };

    // Danger zone
    let show_delete = RwSignal::new(false);
    let on_delete_confirmed = Callback::new(move |_| {
        show_delete.set(false);
        log::warn!("account deletion requested");
        toasts.warning("Account deletion request submitted. You will receive a confirmation email.");
    });

    view! {
        <PageFrame page_id="sys_account--system" category=PAGE_CAT_SYSTEM>
            <PageHeader
                title="Account"
                subtitle="Manage billing, subscription, API keys, and account data."
            />

            <div class="tabs-bar">
                {Tab::ALL.into_iter().map(|t| view! {
                    <button
                        class="tabs-bar__item"
                        class:tabs-bar__item--active=move || tab.get() == t
                        on:click=move |_| tab.set(t)
                    >
                        {t.label()}
                    </button>
                }).collect_view()}
            </div>

            <div class="page__content">
                {move || match tab.get() {
                    Tab::Overview => {
                        let s = summary.get_value();
                        view! {
                            <div class="dashboard-grid">
                                <CardAnimated title="Account Summary">
                                    <dl class="facts">
                                        <dt>"Account ID"</dt>
                                        <dd>{s.account_id}</dd>
                                        <dt>"Account Status"</dt>
                                        <dd><ToneBadge tone=Tone::Success text=s.status /></dd>
                                        <dt>"Current Plan"</dt>
                                        <dd>{s.plan}</dd>
                                        <dt>"Next Billing Date"</dt>
                                        <dd>{s.next_billing_date}</dd>
                                        <dt>"Monthly Cost"</dt>
                                        <dd>{s.monthly_cost}</dd>
                                    </dl>
                                </CardAnimated>
                                <CardAnimated title="Usage Statistics" delay_ms=60>
                                    {mock_usage().into_iter().map(|u| {
                                        let amount = match u.limit {
                                            Some(limit) => format!("{} / {} {}", u.used, limit, u.unit),
                                            None => format!("{} {} / Unlimited", u.used, u.unit),
                                        };
                                        view! {
                                            <div class="usage-row">
                                                <div class="usage-row__label">
                                                    <span>{u.label.clone()}</span>
                                                    <span>{amount}</span>
                                                </div>
                                                <div class="progress-bar">
                                                    <div
                                                        class="progress-bar__fill"
                                                        style=format!("width: {:.1}%;", u.percent())
                                                    ></div>
                                                </div>
                                            </div>
                                        }
                                    }).collect_view()}
                                </CardAnimated>
                                <CardAnimated title="Quick Actions" delay_ms=120>
                                    <div class="button-stack">
                                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| tab.set(Tab::Billing)>
                                            {icon("credit-card")}
                                            "Update Payment Method"
                                        </Button>
                                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| tab.set(Tab::ApiKeys)>
                                            {icon("key")}
                                            "Manage API Keys"
                                        </Button>
                                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| tab.set(Tab::Data)>
                                            {icon("download")}
                                            "Export Account Data"
                                        </Button>
                                    </div>
                                </CardAnimated>
                            </div>
                        }.into_any()
                    }

                    Tab::Billing => view! {
                        <CardAnimated title="Billing Information">
                            <div class="form__group">
                                <Label>"Company Name *"</Label>
                                <Input value=billing_fields.company_name />
                            </div>
                            <div class="form__row">
                                <div class="form__group">
                                    <Label>"Tax ID"</Label>
                                    <Input value=billing_fields.tax_id />
                                </div>
                                <div class="form__group">
                                    <Label>"Country *"</Label>
                                    <Input value=billing_fields.country />
                                </div>
                            </div>
                            <div class="form__group">
                                <Label>"Address *"</Label>
                                <Input value=billing_fields.address />
                            </div>
                            <div class="form__row">
                                <div class="form__group">
                                    <Label>"City *"</Label>
                                    <Input value=billing_fields.city />
                                </div>
                                <div class="form__group">
                                    <Label>"State"</Label>
                                    <Input value=billing_fields.state />
                                </div>
                                <div class="form__group">
                                    <Label>"ZIP Code"</Label>
                                    <Input value=billing_fields.zip_code />
                                </div>
                            </div>
                            <div class="form__actions">
                                <Button appearance=ButtonAppearance::Primary on_click=save_billing>
                                    "Update Billing Information"
                                </Button>
                            </div>
                        </CardAnimated>
                        <CardAnimated title="Billing History" delay_ms=60>
                            <Table>
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell>"Invoice"</TableHeaderCell>
                                        <TableHeaderCell>"Date"</TableHeaderCell>
                                        <TableHeaderCell>"Amount"</TableHeaderCell>
                                        <TableHeaderCell>"Status"</TableHeaderCell>
                                        <TableHeaderCell>""</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    {mock_invoices().into_iter().map(|invoice| {
                                        let invoice = StoredValue::new(invoice);
                                        view! {
                                            <TableRow>
                                                <TableCell>{invoice.with_value(|i| format!("#{}", i.id))}</TableCell>
                                                <TableCell>{invoice.with_value(|i| i.date.clone())}</TableCell>
                                                <TableCell>{invoice.with_value(|i| i.amount.clone())}</TableCell>
                                                <TableCell>
                                                    <ToneBadge tone=Tone::Success text=invoice.with_value(|i| i.status.clone()) />
                                                </TableCell>
                                                <TableCell class="text-right">
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| invoice.with_value(download_invoice)
                                                    >
                                                        {icon("download")}
                                                    </Button>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    }).collect_view()}
                                </TableBody>
                            </Table>
                        </CardAnimated>
                    }.into_any(),

                    Tab::ApiKeys => view! {
                        <div class="section-toolbar">
                            <Button appearance=ButtonAppearance::Primary on_click=move |_| show_key_modal.set(true)>
                                {icon("plus")}
                                "Create API Key"
                            </Button>
                        </div>
                        <div class="mini-list">
                            <For
                                each=move || api_keys.get()
                                key=|k: &ApiKey| k.id.clone()
                                children=move |k: ApiKey| {
                                    let secret = k.key.clone();
                                    let id = k.id.clone();
                                    view! {
                                        <div class="mini-list__row api-key">
                                            <div class="mini-list__body">
                                                <p class="mini-list__title">{k.name.clone()}</p>
                                                <code class="api-key__value">{k.masked()}</code>
                                                <p class="mini-list__text">
                                                    {format!(
                                                        "Created {} • Last used {} • {}",
                                                        k.created,
                                                        k.last_used_label(),
                                                        k.permissions.join(", ")
                                                    )}
                                                </p>
                                            </div>
                                            <Button
                                                size=ButtonSize::Small
                                                appearance=ButtonAppearance::Secondary
                                                on_click=move |_| copy_key(secret.clone())
                                            >
                                                {icon("copy")}
                                                "Copy"
                                            </Button>
                                            <Button
                                                size=ButtonSize::Small
                                                appearance=ButtonAppearance::Subtle
                                                on_click=move |_| delete_key(id.clone())
                                            >
                                                {icon("trash")}
                                            </Button>
                                        </div>
                                    }
                                }
                            />
                        </div>
                        <Show when=move || api_keys.with(Vec::is_empty)>
                            <p class="card__empty">"No API keys yet"</p>
                        </Show>
                    }.into_any(),

                    Tab::Data => view! {
                        <div class="dashboard-grid">
                            <CardAnimated title="Export Data">
                                <p class="card__meta">"Download a copy of all your account data in a portable format."</p>
                                <div class="export-options">
                                    {[ExportFormat::Csv, ExportFormat::Json, ExportFormat::Excel]
                                        .into_iter()
                                        .map(|format| view! {
                                            <button class="export-option" on:click=move |_| on_export(format)>
                                                {icon("download")}
                                                <span>{format!("Export as {}", format)}</span>
                                            </button>
                                        })
                                        .collect_view()}
                                </div>
                            </CardAnimated>
                            <CardAnimated title="Data Retention" delay_ms=60>
                                <p class="card__meta">"Configure how long your data is retained before automatic deletion."</p>
                                <div class="form__group">
                                    <Label>"Retention Period"</Label>
                                    <Select value=retention>
                                        {RetentionPeriod::ALL
                                            .iter()
                                            .map(|r| view! { <option value=r.as_str()>{r.as_str()}</option> })
                                            .collect_view()}
                                    </Select>
                                </div>
                                <div class="form__actions">
                                    <Button appearance=ButtonAppearance::Primary on_click=save_retention>
                                        "Save Retention Settings"
                                    </Button>
                                </div>
                            </CardAnimated>
                        </div>
                    }.into_any(),

                    Tab::Danger => view! {
                        <CardAnimated title="Danger Zone">
                            <p class="card__meta">"Irreversible and destructive actions. Please proceed with caution."</p>
                            <div class="danger-row">
                                <div>
                                    <h3 class="danger-row__title">"Delete Account"</h3>
                                    <p class="danger-row__text">
                                        "Permanently delete your account and all associated data. This action cannot be undone."
                                    </p>
                                </div>
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    class="button--danger"
                                    on_click=move |_| show_delete.set(true)
                                >
                                    {icon("trash")}
                                    "Delete Account"
                                </Button>
                            </div>
                        </CardAnimated>
                    }.into_any(),
                }}
            </div>

            <Show when=move || show_key_modal.get()>
                <CreateApiKeyModal
                    on_close=Callback::new(move |_| show_key_modal.set(false))
                    on_create=on_key_created
                />
            </Show>

            <Show when=move || show_delete.get()>
                <DeleteAccountModal
                    on_close=Callback::new(move |_| show_delete.set(false))
                    on_confirm=on_delete_confirmed
                />
            </Show>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_have_labels() {
        let labels: Vec<&str> = Tab::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, vec!["Overview", "Billing", "API Keys", "Data Management", "Danger Zone"]);
    }
}
