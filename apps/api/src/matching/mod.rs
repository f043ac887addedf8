// Resume ↔ job description matching: score, tier, keyword report, HTTP surface.
// All scoring goes through similarity::strategy — no direct vector math here.

pub mod compare;
pub mod handlers;
pub mod keywords;
pub mod tier;
