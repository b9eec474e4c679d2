//! Various shared functions that `MoodyWM` uses.
pub mod child_process;
pub mod modmask_lookup;
pub mod xkeysym_lookup;
