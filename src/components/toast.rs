//! Transient notices shown in the bottom corner.

use std::fmt;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew::Reducible;

const TOAST_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Error,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Info,
        }
    }
}

/// Lets any component raise a notice without prop drilling.
#[derive(Clone, PartialEq)]
pub struct ToastContext {
    pub notify: Callback<Notice>,
}

/// Applies `op` to a copy of `state` and stores it on success. Errors are
/// surfaced as an error toast; an `Ok(None)` change stays silent.
pub fn commit<T, E>(
    state: &UseStateHandle<T>,
    toast: Option<&ToastContext>,
    op: impl FnOnce(&mut T) -> Result<Option<Notice>, E>,
) -> bool
where
    T: Clone,
    E: fmt::Display + fmt::Debug,
{
    let mut next = (**state).clone();
    match op(&mut next) {
        Ok(notice) => {
            state.set(next);
            if let (Some(ctx), Some(notice)) = (toast, notice) {
                ctx.notify.emit(notice);
            }
            true
        }
        Err(e) => {
            log::warn!("change rejected: {e:?}");
            if let Some(ctx) = toast {
                ctx.notify.emit(Notice::error(e.to_string()));
            }
            false
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastList {
    next_id: u32,
    pub items: Vec<(u32, Notice)>,
}

pub enum ToastAction {
    Push(Notice),
    Dismiss(u32),
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            ToastAction::Push(notice) => {
                new.items.push((new.next_id, notice));
                new.next_id = new.next_id.wrapping_add(1);
            }
            ToastAction::Dismiss(id) => {
                if !new.items.iter().any(|(i, _)| *i == id) {
                    return self;
                }
                new.items.retain(|(i, _)| *i != id);
            }
        }
        Rc::new(new)
    }
}

#[derive(Properties, PartialEq, Clone)]
struct ToastItemProps {
    id: u32,
    notice: Notice,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    {
        let id = props.id;
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(id, move |_| {
            let timeout = Timeout::new(TOAST_MS, move || on_dismiss.emit(id));
            move || drop(timeout)
        });
    }
    let accent = match props.notice.kind {
        NoticeKind::Info => "#3b82f6",
        NoticeKind::Success => "#2ea043",
        NoticeKind::Error => "#f85149",
    };
    html! {
        <div class={classes!("toast", "show")} style={format!("background:#161b22; color:#e6edf3; border-left:4px solid {}; border-radius:8px; padding:10px 14px; font-size:14px; box-shadow:0 4px 12px rgba(0,0,0,0.3);", accent)}>
            { props.notice.message.clone() }
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ToastHostProps {
    pub toasts: UseReducerHandle<ToastList>,
}

#[function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
    let on_dismiss = {
        let toasts = props.toasts.clone();
        Callback::from(move |id: u32| toasts.dispatch(ToastAction::Dismiss(id)))
    };
    html! {<div style="position:fixed; right:16px; bottom:16px; display:flex; flex-direction:column; gap:8px; z-index:100; pointer-events:none;">
        { for props.toasts.items.iter().map(|(id, notice)| html! {
            <ToastItem key={*id} id={*id} notice={notice.clone()} on_dismiss={on_dismiss.clone()} />
        }) }
    </div>}
}
