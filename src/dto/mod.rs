pub mod common_dto;
pub mod daily_record_dto;
pub mod driver_dto;
pub mod operating_cost_dto;
