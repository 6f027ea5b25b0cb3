pub mod palette;
pub mod pr_frame;
