pub mod borrow;
pub mod deposit_collateral;
pub mod initialize;
pub mod initialize_pool;
pub mod liquidate;
pub mod repay;
pub mod set_pool_paused;
pub mod submit_risk_report;
pub mod update_pool_params;
pub mod withdraw_collateral;

pub use borrow::*;
pub use deposit_collateral::*;
pub use initialize::*;
pub use initialize_pool::*;
pub use liquidate::*;
pub use repay::*;
pub use set_pool_paused::*;
pub use submit_risk_report::*;
pub use update_pool_params::*;
pub use withdraw_collateral::*;
