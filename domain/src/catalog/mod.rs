//! Static fact data: the offline lookup table and the synthetic fallback pools.

pub mod fallback;
pub mod local_table;

pub use fallback::{category_facts, fallback_pool, synthetic_fact};
pub use local_table::local_fact;
