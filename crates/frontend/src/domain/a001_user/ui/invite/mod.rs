use crate::shared::modal_frame::ModalFrame;
use crate::shared::toast::use_notifications;
use contracts::domain::a001_user::UserRole;
use contracts::shared::validation;
use leptos::prelude::*;
use thaw::*;

/// Validated invitation.
#[derive(Clone, Debug, PartialEq)]
pub struct Invitation {
    pub email: String,
    pub role: UserRole,
    pub department: Option<String>,
}

#[component]
pub fn InviteUserModal(on_close: Callback<()>, on_invite: Callback<Invitation>) -> impl IntoView {
    let toasts = use_notifications();
    let email = RwSignal::new(String::new());
    let role = RwSignal::new(UserRole::Viewer.as_str().to_string());
    let department = RwSignal::new(String::new());

    let submit = move |_| {
        let email_value = email.get_untracked();
        let email_value = match validation::email(&email_value) {
            Ok(value) => value.to_string(),
            Err(e) => {
                toasts.validation_failed(&e);
                return;
            }
        };
        let department = department.get_untracked().trim().to_string();
        on_invite.run(Invitation {
            email: email_value,
            role: UserRole::parse(&role.get_untracked()).unwrap_or(UserRole::Viewer),
            department: (!department.is_empty()).then_some(department),
        });
    };

    view! {
        <ModalFrame title="Invite User" on_close=on_close>
            <div class="form__group">
                <Label>"Email Address"</Label>
                <Input value=email input_type=InputType::Email placeholder="user@example.com" />
            </div>
            <div class="form__group">
                <Label>"Role"</Label>
                <Select value=role>
                    {[UserRole::Viewer, UserRole::Editor, UserRole::Manager, UserRole::Admin]
                        .into_iter()
                        .map(|r| view! { <option value=r.as_str()>{r.as_str()}</option> })
                        .collect_view()}
                </Select>
            </div>
            <div class="form__group">
                <Label>"Department (Optional)"</Label>
                <Input value=department placeholder="e.g., Engineering, Marketing" />
            </div>
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=submit>
                    "Send Invitation"
                </Button>
            </div>
        </ModalFrame>
    }
}
