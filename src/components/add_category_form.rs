use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::model::PALETTE;
use crate::util::is_save_shortcut;

#[derive(Properties, PartialEq, Clone)]
pub struct AddCategoryFormProps {
    /// `(name, amount, color)` as typed; returns whether the category was added.
    pub on_add: Callback<(String, String, String), bool>,
}

#[function_component(AddCategoryForm)]
pub fn add_category_form(props: &AddCategoryFormProps) -> Html {
    let open = use_state(|| false);
    let color = use_state(|| PALETTE[0].to_string());
    let name_ref = use_node_ref();
    let amount_ref = use_node_ref();

    {
        let name_ref = name_ref.clone();
        use_effect_with(*open, move |open| {
            if *open {
                if let Some(input) = name_ref.cast::<HtmlInputElement>() {
                    let _ = input.focus();
                }
            }
            || ()
        });
    }

    let clear = {
        let name_ref = name_ref.clone();
        let amount_ref = amount_ref.clone();
        move || {
            for r in [&name_ref, &amount_ref] {
                if let Some(input) = r.cast::<HtmlInputElement>() {
                    input.set_value("");
                }
            }
        }
    };
    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };
    let save = {
        let open = open.clone();
        let color = color.clone();
        let name_ref = name_ref.clone();
        let amount_ref = amount_ref.clone();
        let on_add = props.on_add.clone();
        let clear = clear.clone();
        Callback::from(move |_: ()| {
            let value = |r: &NodeRef| {
                r.cast::<HtmlInputElement>()
                    .map(|i| i.value())
                    .unwrap_or_default()
            };
            if on_add.emit((value(&name_ref), value(&amount_ref), (*color).clone())) {
                clear();
                open.set(false);
            }
        })
    };
    let on_save_click = {
        let save = save.clone();
        Callback::from(move |_: MouseEvent| save.emit(()))
    };
    // Ctrl/Cmd+S submits the form rather than saving the page
    let on_keydown = {
        let save = save.clone();
        Callback::from(move |e: KeyboardEvent| {
            if is_save_shortcut(&e.key(), e.ctrl_key(), e.meta_key()) {
                e.prevent_default();
                save.emit(());
            }
        })
    };
    let cancel = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| {
            clear();
            open.set(false);
        })
    };

    let swatches = PALETTE.iter().map(|col| {
        let selected = *col == *color;
        let pick = {
            let color = color.clone();
            let col = col.to_string();
            Callback::from(move |_: MouseEvent| color.set(col.clone()))
        };
        html! {
            <button type="button" class={classes!("color-swatch", selected.then_some("selected"))} onclick={pick}
                style={format!("width:22px; height:22px; border-radius:50%; background:{}; border:2px solid {};", col, if selected { "#e6edf3" } else { "transparent" })}></button>
        }
    });

    html! {<div style="margin-top:12px;">
        <button id="addCategoryBtn" onclick={toggle}>{ if *open { "Close" } else { "+ Add category" } }</button>
        <div id="addCategoryForm" class={classes!((!*open).then_some("hidden"))} onkeydown={on_keydown}
            style={format!("display:{}; flex-direction:column; gap:8px; margin-top:10px;", if *open { "flex" } else { "none" })}>
            <input ref={name_ref} id="newCatName" type="text" placeholder="Category name" />
            <input ref={amount_ref} id="newCatAmount" type="number" step="0.01" min="0" placeholder="Amount" />
            <div id="addColorPalette" style="display:flex; gap:6px;">{ for swatches }</div>
            <div style="display:flex; gap:8px;">
                <button id="saveNewCategory" class="save-btn" onclick={on_save_click} style="flex:1;">{"Save"}</button>
                <button id="cancelNewCategory" onclick={cancel}>{"Cancel"}</button>
            </div>
        </div>
    </div>}
}
