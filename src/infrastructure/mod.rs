pub mod highcharts;
pub mod services;
