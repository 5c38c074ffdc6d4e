//! The three post-login destinations, one per role.

use shared::{Role, SessionUser};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::{BrowserAuth, SessionSource};
use crate::components::Header;
use crate::Route;

/// The visitor allowed onto `page`, or the route they must be sent to instead.
fn guard(user: Option<&SessionUser>, page: Role) -> Result<&SessionUser, Route> {
    match user {
        None => Err(Route::Login),
        Some(user) if user.role != page => Err(Route::for_role(user.role)),
        Some(user) => Ok(user),
    }
}

fn heading(role: Role) -> &'static str {
    match role {
        Role::SuperAdmin => "Super Admin Dashboard",
        Role::PlantAdmin => "Plant Admin Dashboard",
        Role::User => "Welcome",
    }
}

#[derive(Properties, PartialEq)]
pub struct RoleHomeProps {
    pub role: Role,
}

#[function_component(RoleHome)]
pub fn role_home(props: &RoleHomeProps) -> Html {
    let user = use_memo((), |_| BrowserAuth::from_build_env().current_user());

    let user = match guard((*user).as_ref(), props.role) {
        Ok(user) => user.clone(),
        Err(route) => {
            if route == Route::Login {
                log::info!("no session, returning to login entry");
            }
            return html! { <Redirect<Route> to={route} /> };
        }
    };
    let company = user.company.clone().unwrap_or_default();

    html! {
        <>
            <Header user={user.clone()} />
            <main>
                <div class="page-header">
                    <h2>{ heading(props.role) }</h2>
                </div>
                <p>
                    { format!("Signed in as {}", user.name.as_deref().unwrap_or(&user.email)) }
                    if !company.is_empty() {
                        { format!(" for {}", company) }
                    }
                </p>
            </main>
        </>
    }
}
