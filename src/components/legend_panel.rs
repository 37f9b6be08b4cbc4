use super::legend::{EditCallback, LegendRow};
use crate::model::Budget;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LegendPanelProps {
    pub budget: Budget,
    pub on_edit: EditCallback,
    pub on_delete: Callback<usize>,
    pub on_color: Callback<(usize, String)>,
}

#[function_component]
pub fn LegendPanel(props: &LegendPanelProps) -> Html {
    if props.budget.categories.is_empty() {
        return html! {<div id="legend" style="font-size:13px; opacity:0.7; padding:8px 0;">{"No categories yet. Add one below."}</div>};
    }
    let shares = props.budget.shares();
    html! {<div id="legend" style="display:flex; flex-direction:column;">
        { for props.budget.categories.iter().enumerate().map(|(i, c)| html! {
            <LegendRow
                key={format!("{}-{}", i, c.name)}
                index={i}
                category={c.clone()}
                share={shares[i]}
                on_edit={props.on_edit.clone()}
                on_delete={props.on_delete.clone()}
                on_color={props.on_color.clone()}
            />
        }) }
    </div>}
}
