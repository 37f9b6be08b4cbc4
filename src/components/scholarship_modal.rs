use chrono::{Datelike, Local};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::toast::{commit, Notice, ToastContext};
use crate::model::{
    year_options, RequirementStatus, Scholarship, ScholarshipForm, DURATIONS, MONTHS,
    SCHOLARSHIP_TYPES, SEMESTERS,
};
use crate::util::{format_grouped_currency, is_save_shortcut, set_page_scroll_locked};

const TABS: [&str; 3] = ["Details", "Progress", "Requirements"];

#[derive(Properties, PartialEq, Clone)]
pub struct ScholarshipModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
    pub scholarship: UseStateHandle<Scholarship>,
}

fn select_value(r: &NodeRef) -> String {
    r.cast::<HtmlSelectElement>()
        .map(|s| s.value())
        .unwrap_or_default()
}

fn input_value(r: &NodeRef) -> String {
    r.cast::<HtmlInputElement>()
        .map(|i| i.value())
        .unwrap_or_default()
}

fn options(values: &[&str], selected: &str) -> Html {
    values
        .iter()
        .map(|v| html! { <option value={v.to_string()} selected={*v == selected}>{ *v }</option> })
        .collect()
}

#[function_component(ScholarshipModal)]
pub fn scholarship_modal(props: &ScholarshipModalProps) -> Html {
    let toast = use_context::<ToastContext>();
    let tab = use_state(|| 0usize);
    let show_flag = use_mut_ref(|| props.show);
    let on_close_ref = use_mut_ref(|| props.on_close.clone());
    *show_flag.borrow_mut() = props.show;
    *on_close_ref.borrow_mut() = props.on_close.clone();

    let kind_ref = use_node_ref();
    let name_ref = use_node_ref();
    let duration_ref = use_node_ref();
    let semester_ref = use_node_ref();
    let year_ref = use_node_ref();
    let month_ref = use_node_ref();
    let amount_ref = use_node_ref();
    let requirement_ref = use_node_ref();

    {
        let tab = tab.clone();
        use_effect_with(props.show, move |show| {
            set_page_scroll_locked(*show);
            if *show {
                tab.set(0);
            }
            || ()
        });
    }

    // Escape closes
    {
        let show_flag = show_flag.clone();
        let on_close_ref = on_close_ref.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let keydown_cb = Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
                if e.key() == "Escape" && *show_flag.borrow() {
                    let cb = on_close_ref.borrow().clone();
                    cb.emit(());
                }
            }) as Box<dyn FnMut(_)>);
            window
                .add_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref())
                .ok();
            move || {
                let _ = window.remove_event_listener_with_callback(
                    "keydown",
                    keydown_cb.as_ref().unchecked_ref(),
                );
            }
        });
    }

    if !props.show {
        return html! {};
    }

    let today = Local::now().date_naive();

    let save = {
        let scholarship = props.scholarship.clone();
        let toast = toast.clone();
        let refs = (
            kind_ref.clone(),
            name_ref.clone(),
            duration_ref.clone(),
            semester_ref.clone(),
            year_ref.clone(),
            month_ref.clone(),
            amount_ref.clone(),
        );
        Callback::from(move |_: ()| {
            let (kind, name, duration, semester, year, month, amount) = &refs;
            let form = ScholarshipForm {
                kind: select_value(kind),
                name: input_value(name),
                duration: select_value(duration),
                semester: select_value(semester),
                year: select_value(year).parse().unwrap_or(today.year()),
                month: select_value(month),
                amount: input_value(amount),
            };
            let saved = commit(&scholarship, toast.as_ref(), |s| {
                s.save(&form).map(|entry| {
                    log::debug!("scholarship saved: {entry:?}");
                    Some(Notice::success("Scholarship information saved successfully!"))
                })
            });
            if saved {
                if let Some(input) = amount.cast::<HtmlInputElement>() {
                    input.set_value("");
                }
            }
        })
    };
    let on_save_click = {
        let save = save.clone();
        Callback::from(move |_: MouseEvent| save.emit(()))
    };
    let on_form_keydown = {
        let save = save.clone();
        Callback::from(move |e: KeyboardEvent| {
            if is_save_shortcut(&e.key(), e.ctrl_key(), e.meta_key()) {
                e.prevent_default();
                save.emit(());
            }
        })
    };
    let add_requirement = {
        let scholarship = props.scholarship.clone();
        let toast = toast.clone();
        let requirement_ref = requirement_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let title = input_value(&requirement_ref);
            let added = commit(&scholarship, toast.as_ref(), |s| {
                s.add_requirement(&title, today)
                    .map(|r| Some(Notice::info(format!("{} added", r.title))))
            });
            if added {
                if let Some(input) = requirement_ref.cast::<HtmlInputElement>() {
                    input.set_value("");
                }
            }
        })
    };
    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let backdrop_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            if e.target() == e.current_target() {
                cb.emit(());
            }
        })
    };

    let dots = TABS.iter().enumerate().map(|(i, label)| {
        let tab_cb = {
            let tab = tab.clone();
            Callback::from(move |_: MouseEvent| tab.set(i))
        };
        let active = *tab == i;
        html! {
            <button type="button" class={classes!("tab-dot", active.then_some("active"))} onclick={tab_cb} aria-label={*label}
                style={format!("padding:4px 10px; border-radius:999px; opacity:{};", if active { "1" } else { "0.55" })}>{ *label }</button>
        }
    });

    let scholarship = &*props.scholarship;
    let this_year = today.year().to_string();
    let this_month = MONTHS[today.month0() as usize];
    let years: Vec<String> = year_options(today.year()).iter().map(|y| y.to_string()).collect();
    let year_refs: Vec<&str> = years.iter().map(String::as_str).collect();

    let details = html! {
        <div class={classes!("tab-content", (*tab == 0).then_some("active"))} onkeydown={on_form_keydown}
            style={format!("display:{}; flex-direction:column; gap:8px;", if *tab == 0 { "flex" } else { "none" })}>
            <select ref={kind_ref} id="scholarshipType">{ options(&SCHOLARSHIP_TYPES, SCHOLARSHIP_TYPES[0]) }</select>
            <input ref={name_ref} id="scholarshipName" type="text" placeholder="Scholarship name" />
            <div style="display:flex; gap:8px;">
                <select ref={duration_ref} id="duration" style="flex:1;">{ options(&DURATIONS, DURATIONS[1]) }</select>
                <select ref={semester_ref} id="semester" style="flex:1;">{ options(&SEMESTERS, SEMESTERS[0]) }</select>
            </div>
            <div style="display:flex; gap:8px;">
                <select ref={year_ref} id="year" style="flex:1;">{ options(&year_refs, &this_year) }</select>
                <select ref={month_ref} id="month" style="flex:1;">{ options(&MONTHS, this_month) }</select>
            </div>
            <input ref={amount_ref} id="amount" type="number" step="0.01" min="0" placeholder="Amount" />
            <button class="save-btn" onclick={on_save_click}>{"Save"}</button>
            { if let Some(last) = scholarship.entries.last() {
                html! { <div style="font-size:11px; opacity:0.7;">{ format!("Last saved: {} ({} {}), {}", last.name, last.month, last.year, format_grouped_currency(last.amount)) }</div> }
            } else { html! {} } }
        </div>
    };

    let widths = scholarship.progress_widths();
    let progress = html! {
        <div id="progressList" class={classes!("tab-content", (*tab == 1).then_some("active"))}
            style={format!("display:{}; flex-direction:column; gap:10px;", if *tab == 1 { "flex" } else { "none" })}>
            { for scholarship.payouts.iter().zip(widths).map(|(p, width)| html! {
                <div class="progress-item">
                    <div class="progress-header" style="display:flex; justify-content:space-between; font-size:13px;">
                        <span class="progress-month">{ p.month.clone() }</span>
                        <span class="progress-amount" style="font-variant-numeric:tabular-nums;">{ format_grouped_currency(p.amount) }</span>
                    </div>
                    <div class="progress-bar" style="height:8px; background:#30363d; border-radius:4px; overflow:hidden;">
                        <div class="progress-fill" style={format!("width:{}%; height:100%; background:#3b82f6;", width)}></div>
                    </div>
                </div>
            }) }
        </div>
    };

    let requirements = html! {
        <div class={classes!("tab-content", (*tab == 2).then_some("active"))}
            style={format!("display:{}; flex-direction:column; gap:8px;", if *tab == 2 { "flex" } else { "none" })}>
            <div id="requirementsList" style="display:flex; flex-direction:column; gap:8px;">
                { for scholarship.requirements.iter().map(|r| html! {
                    <div class="requirement-card" style="border:1px solid #30363d; border-radius:8px; padding:8px 10px;">
                        <div class="requirement-header" style="display:flex; justify-content:space-between; align-items:center;">
                            <div class="requirement-title">{ r.title.clone() }</div>
                            <span class={classes!("status-badge", r.status.css_class())}
                                style={format!("font-size:11px; padding:2px 8px; border-radius:999px; background:{};", match r.status { RequirementStatus::Active => "#2ea043", RequirementStatus::Pending => "#9e6a03" })}>{ r.status.label() }</span>
                        </div>
                        <div class="requirement-date" style="font-size:12px; opacity:0.7;">{ format!("Due: {}", r.deadline.format("%m/%d/%Y")) }</div>
                    </div>
                }) }
            </div>
            <div style="display:flex; gap:8px;">
                <input ref={requirement_ref} type="text" placeholder="Requirement title" style="flex:1;" />
                <button onclick={add_requirement}>{"+ Add requirement"}</button>
            </div>
        </div>
    };

    html! {<div id="scholarshipModal" class="modal-active" onclick={backdrop_cb}
        style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div role="dialog" aria-modal="true" style="background:#161b22; color:#e6edf3; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:340px; max-width:480px; max-height:90vh; overflow:auto; display:flex; flex-direction:column; gap:10px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Scholarship tracker"}</h3>
                <button class="close-btn" onclick={close_cb} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <div style="display:flex; gap:6px;">{ for dots }</div>
            { details }
            { progress }
            { requirements }
        </div>
    </div>}
}
