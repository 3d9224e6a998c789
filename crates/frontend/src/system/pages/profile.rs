use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::config::TIMEZONES;
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::shared::toast::use_notifications;
use contracts::shared::format::initials;
use contracts::system::profile::{
    mock_activity, NotificationPreferences, PasswordChange, PreferenceKey, ProfileForm,
};
use leptos::prelude::*;
use thaw::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Profile,
    Security,
    Preferences,
    Activity,
}

impl Tab {
    const ALL: [Tab; 4] = [Tab::Profile, Tab::Security, Tab::Preferences, Tab::Activity];

    fn label(self) -> &'static str {
        match self {
            Tab::Profile => "Profile",
            Tab::Security => "Security",
            Tab::Preferences => "Preferences",
            Tab::Activity => "Activity",
        }
    }
}

/// Поля формы профиля, по сигналу на поле.
#[derive(Clone, Copy)]
struct ProfileFields {
    first_name: RwSignal<String>,
    last_name: RwSignal<String>,
    email: RwSignal<String>,
    phone: RwSignal<String>,
    bio: RwSignal<String>,
    location: RwSignal<String>,
    timezone: RwSignal<String>,
}

impl ProfileFields {
    fn new(form: &ProfileForm) -> Self {
        Self {
            first_name: RwSignal::new(form.first_name.clone()),
            last_name: RwSignal::new(form.last_name.clone()),
            email: RwSignal::new(form.email.clone()),
            phone: RwSignal::new(form.phone.clone()),
            bio: RwSignal::new(form.bio.clone()),
            location: RwSignal::new(form.location.clone()),
            timezone: RwSignal::new(form.timezone.clone()),
        }
    }

    fn load(&self, form: &ProfileForm) {
        self.first_name.set(form.first_name.clone());
        self.last_name.set(form.last_name.clone());
        self.email.set(form.email.clone());
        self.phone.set(form.phone.clone());
        self.bio.set(form.bio.clone());
        self.location.set(form.location.clone());
        self.timezone.set(form.timezone.clone());
    }

    fn read(&self) -> ProfileForm {
        ProfileForm {
            first_name: self.first_name.get_untracked(),
            last_name: self.last_name.get_untracked(),
            email: self.email.get_untracked(),
            phone: self.phone.get_untracked(),
            bio: self.bio.get_untracked(),
            location: self.location.get_untracked(),
            timezone: self.timezone.get_untracked(),
        }
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let toasts = use_notifications();
    let tab = RwSignal::new(Tab::Profile);

    let saved = RwSignal::new(ProfileForm::default());
    let fields = ProfileFields::new(&saved.get_untracked());
    let is_editing = RwSignal::new(false);

    let save_profile = move |_| match fields.read().validate() {
        Ok(profile) => {
            ctx.current_user.update(|user| {
                user.name = profile.full_name();
                user.email = profile.email.clone();
            });
            fields.load(&profile);
            saved.set(profile);
            is_editing.set(false);
            toasts.success("Profile updated successfully!");
        }
        Err(e) => {
            toasts.validation_failed(&e);
        }
    };
    let cancel_edit = move |_| {
        saved.with_untracked(|profile| fields.load(profile));
        is_editing.set(false);
    };

    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let change_password = move |_| {
        let change = PasswordChange {
            current: current_password.get_untracked(),
            new_password: new_password.get_untracked(),
            confirmation: confirm_password.get_untracked(),
        };
        match change.validate() {
            Ok(()) => {
                current_password.set(String::new());
                new_password.set(String::new());
                confirm_password.set(String::new());
                log::info!("password changed");
                toasts.success("Password changed successfully!");
            }
            Err(e) => {
                toasts.validation_failed(&e);
            }
        }
    };

    let preferences = RwSignal::new(NotificationPreferences::default());
    let save_preferences = move |_| {
        let enabled = preferences.with_untracked(NotificationPreferences::enabled_count);
        log::info!("preferences saved, {} channel(s) enabled", enabled);
        toasts.success("Preferences saved successfully!");
    };

    let text_field = |label: &'static str, value: RwSignal<String>| view! {
        <div class="form__group">
            <Label>{label}</Label>
            <Input value=value />
        </div>
    };

    view! {
        <PageFrame page_id="sys_profile--system" category=PAGE_CAT_SYSTEM>
            <PageHeader
                title="Profile"
                subtitle="Manage your personal information, security settings, and preferences."
            />

            <div class="page__content profile-layout">
                <aside class="profile-summary">
                    <div class="avatar avatar--large">{move || saved.with(|p| initials(&p.full_name()))}</div>
                    <h2 class="profile-summary__name">{move || saved.with(ProfileForm::full_name)}</h2>
                    <p class="profile-summary__email">{move || saved.with(|p| p.email.clone())}</p>
                    <p class="profile-summary__meta">{move || saved.with(|p| p.location.clone())}</p>
                    <dl class="profile-summary__facts">
                        <dt>"Role"</dt>
                        <dd>{move || ctx.current_user.with(|u| u.role.clone())}</dd>
                        <dt>"Member since"</dt>
                        <dd>"Jan 2024"</dd>
                        <dt>"Last active"</dt>
                        <dd>"2 hours ago"</dd>
                    </dl>
                </aside>

                <div class="profile-main">
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

                    {move || match tab.get() {
                        Tab::Profile => view! {
                            <CardAnimated title="Personal Information">
                                // read-only until "Edit Profile"
                                <fieldset class="form__fieldset" disabled=move || !is_editing.get()>
                                    <div class="form__row">
                                        {text_field("First Name *", fields.first_name)}
                                        {text_field("Last Name", fields.last_name)}
                                    </div>
                                    {text_field("Email *", fields.email)}
                                    {text_field("Phone", fields.phone)}
                                    <div class="form__group">
                                        <Label>"Bio"</Label>
                                        <Textarea value=fields.bio attr:rows=3 />
                                    </div>
                                    <div class="form__row">
                                        {text_field("Location", fields.location)}
                                        <div class="form__group">
                                            <Label>"Timezone"</Label>
                                            <Select value=fields.timezone>
                                                {TIMEZONES
                                                    .iter()
                                                    .map(|tz| view! { <option value=*tz>{*tz}</option> })
                                                    .collect_view()}
                                            </Select>
                                        </div>
                                    </div>
                                </fieldset>
                                <div class="form__actions">
                                    <Show
                                        when=move || is_editing.get()
                                        fallback=move || view! {
                                            <Button appearance=ButtonAppearance::Primary on_click=move |_| is_editing.set(true)>
                                                "Edit Profile"
                                            </Button>
                                        }
                                    >
                                        <Button appearance=ButtonAppearance::Secondary on_click=cancel_edit>
                                            "Cancel"
                                        </Button>
                                        <Button appearance=ButtonAppearance::Primary on_click=save_profile>
                                            "Save Changes"
                                        </Button>
                                    </Show>
                                </div>
                            </CardAnimated>
                        }.into_any(),

                        Tab::Security => view! {
                            <CardAnimated title="Change Password">
                                <div class="form__group">
                                    <Label>"Current Password"</Label>
                                    <Input value=current_password input_type=InputType::Password />
                                </div>
                                <div class="form__group">
                                    <Label>"New Password"</Label>
                                    <Input value=new_password input_type=InputType::Password />
                                    <p class="form__hint">"At least 8 characters."</p>
                                </div>
                                <div class="form__group">
                                    <Label>"Confirm New Password"</Label>
                                    <Input value=confirm_password input_type=InputType::Password />
                                </div>
                                <div class="form__actions">
                                    <Button appearance=ButtonAppearance::Primary on_click=change_password>
                                        "Update Password"
                                    </Button>
                                </div>
                            </CardAnimated>
                            <CardAnimated title="Active Sessions" delay_ms=60>
                                <div class="mini-list">
                                    <div class="mini-list__row">
                                        <div class="mini-list__body">
                                            <p class="mini-list__title">"Current Session"</p>
                                            <p class="mini-list__text">"Windows • Chrome • 192.168.1.1"</p>
                                        </div>
                                        <span class="mini-list__meta">"Active now"</span>
                                    </div>
                                    <div class="mini-list__row">
                                        <div class="mini-list__body">
                                            <p class="mini-list__title">"Mobile Device"</p>
                                            <p class="mini-list__text">"iOS • Safari • 192.168.1.2"</p>
                                        </div>
                                        <span class="mini-list__meta">"2 hours ago"</span>
                                    </div>
                                </div>
                            </CardAnimated>
                        }.into_any(),

                        Tab::Preferences => view! {
                            <CardAnimated title="Notification Preferences">
                                <p class="card__meta">"Choose how you want to be notified about updates and activities."</p>
                                <div class="preference-list">
                                    {PreferenceKey::ALL.into_iter().map(|key| view! {
                                        <label class="preference-list__row">
                                            <div>
                                                <p class="preference-list__label">{key.label()}</p>
                                                <p class="preference-list__text">{key.description()}</p>
                                            </div>
                                            <input
                                                type="checkbox"
                                                class="switch"
                                                prop:checked=move || preferences.with(|p| p.get(key))
                                                on:change=move |ev| {
                                                    let enabled = event_target_checked(&ev);
                                                    preferences.update(|p| p.set(key, enabled));
                                                }
                                            />
                                        </label>
                                    }).collect_view()}
                                </div>
                                <div class="form__actions">
                                    <Button appearance=ButtonAppearance::Primary on_click=save_preferences>
                                        "Save Preferences"
                                    </Button>
                                </div>
                            </CardAnimated>
                        }.into_any(),

                        Tab::Activity => view! {
                            <CardAnimated title="Account Activity">
                                <p class="card__meta">"Recent activity and login history for your account."</p>
                                <div class="mini-list">
                                    {mock_activity().into_iter().map(|a| view! {
                                        <div class="mini-list__row">
                                            <div class="mini-list__body">
                                                <p class="mini-list__title">{a.action}</p>
                                                <p class="mini-list__text">{format!("{} • {}", a.time, a.ip)}</p>
                                            </div>
                                        </div>
                                    }).collect_view()}
                                </div>
                            </CardAnimated>
                        }.into_any(),
                    }}
                </div>
            </div>
        </PageFrame>
    }
}
