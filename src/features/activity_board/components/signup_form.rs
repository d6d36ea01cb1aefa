use std::sync::Arc;

use leptos::prelude::*;

use crate::features::activity_board::services::SignupFormState;

#[component]
pub fn SignupForm(
    #[prop(into)] activity_names: Signal<Vec<String>>,
    form: SignupFormState,
    on_submit: Arc<dyn Fn() + Send + Sync>,
) -> impl IntoView {
    // required fields are enforced by the browser before submit fires
    let submit = move |e: leptos::ev::SubmitEvent| {
        e.prevent_default();
        on_submit();
    };

    view! {
        <form id="signup-form" on:submit=submit>
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    type="email"
                    id="email"
                    required=true
                    placeholder="your-email@school.edu"
                    prop:value=move || form.email.get()
                    on:input=move |ev| form.email.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="activity">"Select Activity:"</label>
                <select
                    id="activity"
                    required=true
                    prop:value=move || form.activity.get()
                    on:change=move |ev| form.activity.set(event_target_value(&ev))
                >
                    <option value="">"-- Select an activity --"</option>
                    <For
                        each=move || activity_names.get()
                        key=|name| name.clone()
                        children=move |name| {
                            let label = name.clone();
                            view! { <option value=name>{label}</option> }
                        }
                    />
                </select>
            </div>
            <button type="submit">"Sign Up"</button>
        </form>
    }
}
