use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::BrowserAuth;
use crate::components::use_toast;
use crate::flow::{self, LoginCategory, LoginForm};
use crate::Route;

#[function_component(Login)]
pub fn login() -> Html {
    let auth = use_memo((), |_| BrowserAuth::from_build_env());
    let redirect = {
        let auth = auth.clone();
        use_memo((), move |_| flow::mount_redirect(&*auth))
    };
    let initial = {
        let auth = auth.clone();
        use_memo((), move |_| LoginForm::prefilled(&*auth))
    };

    let company = use_state(|| initial.company.clone());
    let identifier = use_state(|| initial.identifier.clone());
    let password = use_state(|| initial.password.clone());
    let category = use_state(|| initial.category);
    let remember_me = use_state(|| initial.remember_me);

    let toast = use_toast();
    let navigator = use_navigator();

    if let Some(route) = (*redirect).clone() {
        return html! { <Redirect<Route> to={route} /> };
    }

    let on_company_input = {
        let company = company.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            company.set(input.value());
        })
    };

    let on_identifier_input = {
        let identifier = identifier.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            identifier.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_category_change = {
        let category = category.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            category.set(LoginCategory::from_value(&select.value()));
        })
    };

    let on_remember_change = {
        let remember_me = remember_me.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            remember_me.set(input.checked());
        })
    };

    let on_submit = {
        let company = company.clone();
        let identifier = identifier.clone();
        let password = password.clone();
        let category = category.clone();
        let remember_me = remember_me.clone();
        let auth = auth.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let form = LoginForm {
                company: (*company).clone(),
                identifier: (*identifier).clone(),
                password: (*password).clone(),
                category: *category,
                remember_me: *remember_me,
            };
            let auth = (*auth).clone();
            let toast = toast.clone();
            let navigator = navigator.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let outcome = flow::submit(&form, &auth, &auth).await;
                toast.emit(outcome.toast);
                if let (Some(route), Some(navigator)) = (outcome.redirect, navigator) {
                    navigator.push(&route);
                }
            });
        })
    };

    html! {
        <div class="login-container">
            <div class="login-card">
                <div class="login-brand">
                    <h1 class="login-title">{ "Solar Panels Analysis" }</h1>
                    <h2 class="login-subtitle">{ "Login Entry" }</h2>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="company">{ "Company Name:" }</label>
                        <input
                            id="company"
                            type="text"
                            placeholder="Enter company name"
                            value={(*company).clone()}
                            oninput={on_company_input}
                        />
                    </div>

                    <div class="form-group">
                        <label for="login">{ "Login:" }</label>
                        <input
                            id="login"
                            type="text"
                            placeholder="Enter email or username"
                            value={(*identifier).clone()}
                            oninput={on_identifier_input}
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{ "Password:" }</label>
                        <input
                            id="password"
                            type="password"
                            placeholder="Enter password"
                            value={(*password).clone()}
                            oninput={on_password_input}
                        />
                    </div>

                    <div class="form-group">
                        <label for="category">{ "Category:" }</label>
                        <select id="category" onchange={on_category_change}>
                            <option value="" selected={category.is_none()} disabled={true}>
                                { "Select category" }
                            </option>
                            { for LoginCategory::all().iter().map(|c| html! {
                                <option value={c.as_str()} selected={*category == Some(*c)}>
                                    { c.label() }
                                </option>
                            })}
                        </select>
                    </div>

                    <div class="form-check">
                        <input
                            id="remember"
                            type="checkbox"
                            checked={*remember_me}
                            onchange={on_remember_change}
                        />
                        <label for="remember">{ "Remember me" }</label>
                    </div>

                    <button type="submit" class="login-button">
                        { flow::SUBMIT_LABEL }
                    </button>
                </form>
            </div>
        </div>
    }
}
