// Domain models: inbound snapshot and outbound display fields

mod display;
mod snapshot;

pub use display::{CommandLineView, DisplayMetrics};
pub use snapshot::{
    JmxSection, JvmMemory, JvmMemoryRaw, JvmSection, LuceneSection, MemoryValue, SecuritySection,
    StatusSnapshot, SystemSection,
};
