use super::animated_total::AnimatedTotal;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct DonutChartProps {
    /// CSS background for the ring (conic-gradient or a flat fill).
    pub background: String,
    pub total: f64,
}

#[function_component(DonutChart)]
pub fn donut_chart(props: &DonutChartProps) -> Html {
    html! {<div style="display:flex; justify-content:center; padding:8px 0 16px;">
        <div id="donutChart" style={format!("position:relative; width:180px; height:180px; border-radius:50%; background:{}; transition:background 0.3s;", props.background)}>
            <div class="donut-center" style="position:absolute; inset:28px; border-radius:50%; background:#161b22; display:flex; flex-direction:column; align-items:center; justify-content:center; gap:2px;">
                <span style="font-size:11px; opacity:0.7;">{"Total budget"}</span>
                <AnimatedTotal value={props.total} />
            </div>
        </div>
    </div>}
}
