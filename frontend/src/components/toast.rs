//! Toast notifications: a provider owning the queue, a `use_toast` hook to
//! raise one, and the toaster region that renders and expires them.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::DEFAULT_TOAST_DISMISS_MS;

pub const TOAST_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

impl ToastVariant {
    fn class(&self) -> &'static str {
        match self {
            ToastVariant::Default => "toast-default",
            ToastVariant::Destructive => "toast-destructive",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: ToastVariant::Destructive,
            ..Self::new(title, description)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShownToast {
    pub id: u32,
    pub toast: Toast,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastState {
    next_id: u32,
    pub toasts: Vec<ShownToast>,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(u32),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Push(toast) => {
                let mut toasts = self.toasts.clone();
                toasts.push(ShownToast {
                    id: self.next_id,
                    toast,
                });
                if toasts.len() > TOAST_LIMIT {
                    let overflow = toasts.len() - TOAST_LIMIT;
                    toasts.drain(..overflow);
                }
                Rc::new(ToastState {
                    next_id: self.next_id.wrapping_add(1),
                    toasts,
                })
            }
            ToastAction::Dismiss(id) => {
                if !self.toasts.iter().any(|t| t.id == id) {
                    return self;
                }
                Rc::new(ToastState {
                    next_id: self.next_id,
                    toasts: self.toasts.iter().filter(|t| t.id != id).cloned().collect(),
                })
            }
        }
    }
}

pub type ToastContext = UseReducerHandle<ToastState>;

/// Returns a callback that raises a toast in the nearest `ToastProvider`.
#[hook]
pub fn use_toast() -> Callback<Toast> {
    let ctx = use_context::<ToastContext>();
    Callback::from(move |toast: Toast| match &ctx {
        Some(ctx) => ctx.dispatch(ToastAction::Push(toast)),
        None => log::warn!("toast raised outside ToastProvider: {}", toast.title),
    })
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Html,
    #[prop_or(DEFAULT_TOAST_DISMISS_MS)]
    pub dismiss_ms: u32,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let state = use_reducer(ToastState::default);

    html! {
        <ContextProvider<ToastContext> context={state.clone()}>
            { props.children.clone() }
            <div class="toaster" role="region" aria-live="polite">
                { for state.toasts.iter().map(|shown| html! {
                    <ToastItem
                        key={shown.id}
                        id={shown.id}
                        toast={shown.toast.clone()}
                        dismiss_ms={props.dismiss_ms}
                    />
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    id: u32,
    toast: Toast,
    dismiss_ms: u32,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let ctx = use_context::<ToastContext>();

    {
        let ctx = ctx.clone();
        let dismiss_ms = props.dismiss_ms;
        use_effect_with(props.id, move |id| {
            let id = *id;
            // Dropping the timeout on unmount cancels it.
            let timeout = ctx.map(|ctx| {
                Timeout::new(dismiss_ms, move || ctx.dispatch(ToastAction::Dismiss(id)))
            });
            move || drop(timeout)
        });
    }

    let on_close = {
        let id = props.id;
        Callback::from(move |_: MouseEvent| {
            if let Some(ctx) = &ctx {
                ctx.dispatch(ToastAction::Dismiss(id));
            }
        })
    };

    html! {
        <div class={classes!("toast", props.toast.variant.class())} role="status">
            <div class="toast-body">
                <p class="toast-title">{ &props.toast.title }</p>
                <p class="toast-description">{ &props.toast.description }</p>
            </div>
            <button type="button" class="toast-close" aria-label="Close" onclick={on_close}>
                { "×" }
            </button>
        </div>
    }
}
