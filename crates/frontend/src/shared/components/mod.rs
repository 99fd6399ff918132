pub mod cohort_heatmap;
pub mod data_table;
pub mod funnel_steps;
pub mod grid;
pub mod kpi_card;
pub mod mrr_area_chart;
pub mod payment_health_chart;
pub mod status;
pub mod time_range_select;
