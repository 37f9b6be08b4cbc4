use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ZoomControlsProps {
    pub on_zoom_in: Callback<()>,
    pub on_zoom_out: Callback<()>,
    pub on_reset: Callback<()>,
    pub scale: f64,
}

#[function_component(ZoomControls)]
pub fn zoom_controls(props: &ZoomControlsProps) -> Html {
    // Buttons sit on the backdrop; keep their clicks from closing the viewer.
    let zi = {
        let cb = props.on_zoom_in.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(())
        })
    };
    let zo = {
        let cb = props.on_zoom_out.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(())
        })
    };
    let zr = {
        let cb = props.on_reset.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(())
        })
    };
    html! {<div class="zoom-controls" style="position:absolute; left:50%; bottom:16px; transform:translateX(-50%); background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; display:flex; gap:6px; align-items:center;">
        <button id="zoomOut" onclick={zo} aria-label="Zoom out"> {"-"} </button>
        <span style="min-width:48px; text-align:center; font-variant-numeric:tabular-nums;">{ format!("{:.0}%", props.scale * 100.0) }</span>
        <button id="zoomIn" onclick={zi} aria-label="Zoom in"> {"+"} </button>
        <span style="width:8px;"></span>
        <button id="zoomReset" onclick={zr}> {"Reset"} </button>
    </div>}
}
