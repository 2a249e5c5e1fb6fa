pub mod daily_record_controller;
pub mod driver_controller;
pub mod operating_cost_controller;
