pub mod add_category_form;
pub mod animated_total;
pub mod app;
pub mod budget_modal;
pub mod donut_chart;
pub mod legend;
pub mod legend_panel;
pub mod lightbox;
pub mod scholarship_modal;
pub mod toast;
pub mod zoom_controls;
