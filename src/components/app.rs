use super::{
    budget_modal::BudgetModal,
    lightbox::Lightbox,
    scholarship_modal::ScholarshipModal,
    toast::{Notice, ToastAction, ToastContext, ToastHost, ToastList},
};
use crate::config;
use crate::model::{Budget, RequirementStatus, Scholarship};
use crate::util::format_currency;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let viewer_config = use_state(config::load);
    let viewer_open = use_state(|| false);
    let budget_open = use_state(|| false);
    let budget = use_state(Budget::default);
    let scholarship_open = use_state(|| false);
    let scholarship = use_state(Scholarship::default);
    let toasts = use_reducer(ToastList::default);

    // Provide the notice channel (so nested dialogs can raise toasts without prop drilling)
    let toast_ctx = {
        let toasts = toasts.clone();
        ToastContext {
            notify: Callback::from(move |n: Notice| toasts.dispatch(ToastAction::Push(n))),
        }
    };

    let open_viewer = {
        let viewer_open = viewer_open.clone();
        Callback::from(move |_: MouseEvent| viewer_open.set(true))
    };
    let close_viewer = {
        let viewer_open = viewer_open.clone();
        Callback::from(move |_| viewer_open.set(false))
    };
    let open_budget = {
        let budget_open = budget_open.clone();
        Callback::from(move |_: MouseEvent| budget_open.set(true))
    };
    let close_budget = {
        let budget_open = budget_open.clone();
        Callback::from(move |_| budget_open.set(false))
    };
    let open_scholarship = {
        let scholarship_open = scholarship_open.clone();
        Callback::from(move |_: MouseEvent| scholarship_open.set(true))
    };
    let close_scholarship = {
        let scholarship_open = scholarship_open.clone();
        Callback::from(move |_| scholarship_open.set(false))
    };
    let pending = scholarship
        .requirements
        .iter()
        .filter(|r| r.status == RequirementStatus::Pending)
        .count();

    html! { <ContextProvider<ToastContext> context={toast_ctx}>
        <main style="max-width:760px; margin:0 auto; padding:32px 16px; display:flex; flex-direction:column; gap:24px; color:#e6edf3;">
            <section class="infographic" style="display:flex; flex-direction:column; gap:12px; align-items:flex-start;">
                <h2 style="margin:0;">{"How the programme works"}</h2>
                <img src={viewer_config.image_src.clone()} alt={viewer_config.image_alt.clone()}
                    style="max-width:100%; border-radius:8px; cursor:zoom-in;" onclick={open_viewer.clone()} />
                <button id="learnMoreBtn" onclick={open_viewer}>{"Learn more"}</button>
            </section>
            <section class="floating-card p250-card" onclick={open_budget}
                style="cursor:pointer; background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px;">
                <div style="font-size:12px; opacity:0.7;">{"Monthly budget"}</div>
                <div style="font-size:24px; font-weight:600;">{ format_currency(budget.total()) }</div>
                <div style="font-size:12px; opacity:0.7;">{ format!("{} categories · tap to manage", budget.categories.len()) }</div>
            </section>
            <section class="floating-card scholarship-card" onclick={open_scholarship}
                style="cursor:pointer; background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px;">
                <div style="font-size:12px; opacity:0.7;">{"Scholarship"}</div>
                <div style="font-size:18px; font-weight:600;">{ format!("{} requirements", scholarship.requirements.len()) }</div>
                <div style="font-size:12px; opacity:0.7;">{ format!("{} pending · tap to track", pending) }</div>
            </section>
        </main>
        <Lightbox open={*viewer_open} on_close={close_viewer} config={(*viewer_config).clone()} />
        <BudgetModal show={*budget_open} on_close={close_budget} budget={budget.clone()} />
        <ScholarshipModal show={*scholarship_open} on_close={close_scholarship} scholarship={scholarship.clone()} />
        <ToastHost toasts={toasts} />
    </ContextProvider<ToastContext>> }
}
