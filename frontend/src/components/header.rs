use shared::SessionUser;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::BrowserAuth;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub user: SessionUser,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let navigator = use_navigator();

    let on_sign_out = Callback::from(move |_: MouseEvent| {
        BrowserAuth::from_build_env().sign_out();
        if let Some(navigator) = &navigator {
            navigator.replace(&Route::Login);
        }
    });

    let who = props.user.name.clone().unwrap_or_else(|| props.user.email.clone());

    html! {
        <header class="header">
            <nav>
                <Link<Route> to={Route::for_role(props.user.role)}>
                    <h1>{ "Solar Panels Analysis" }</h1>
                </Link<Route>>
                <span class="header-user">
                    { who }
                    { " · " }
                    <span class="header-role">{ props.user.role.display_name() }</span>
                </span>
                <button class="btn-logout" onclick={on_sign_out}>
                    { "Sign out" }
                </button>
            </nav>
        </header>
    }
}
