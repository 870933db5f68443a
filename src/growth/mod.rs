//! Investment growth: lump-sum compounding/discounting and monthly SIP contributions

mod compounding;
mod sip;

pub use compounding::{
    effective_rate, future_value_with_inflation, future_value_without_inflation,
    lump_sum_returns, lump_sum_returns_with_inflation, present_value_with_inflation,
    present_value_without_inflation, EffectiveRate,
};
pub use sip::{sip_balance, sip_returns, sip_returns_with_inflation};
