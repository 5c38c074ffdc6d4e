use shared::Role;
use yew::prelude::*;
use yew_router::prelude::*;

mod auth;
mod components;
mod config;
mod flow;
mod pages;

use components::ToastProvider;
use config::AppConfig;
use pages::dashboard::RoleHome;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Login,
    #[at("/super-admin-dashboard")]
    SuperAdminDashboard,
    #[at("/plant-admin-dashboard")]
    PlantAdminDashboard,
    #[at("/user-welcome")]
    UserWelcome,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::SuperAdmin => Route::SuperAdminDashboard,
            Role::PlantAdmin => Route::PlantAdminDashboard,
            Role::User => Route::UserWelcome,
        }
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Login => html! { <pages::login::Login /> },
        Route::SuperAdminDashboard => html! { <RoleHome role={Role::SuperAdmin} /> },
        Route::PlantAdminDashboard => html! { <RoleHome role={Role::PlantAdmin} /> },
        Route::UserWelcome => html! { <RoleHome role={Role::User} /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Login} /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    let dismiss_ms = use_memo((), |_| AppConfig::from_build_env().toast_dismiss_ms);

    html! {
        <BrowserRouter>
            <ToastProvider dismiss_ms={*dismiss_ms}>
                <div class="container">
                    <Switch<Route> render={switch} />
                </div>
            </ToastProvider>
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("starting login entry, api base {}", AppConfig::from_build_env().api_base);
    yew::Renderer::<App>::new().render();
}
