//! Reusable UI components shared by pages.

pub mod bar_chart;
pub mod period_select;
