pub mod prompts;
pub mod render;

pub use prompts::{prompt_drink, prompt_yes_no};
pub use render::{display_drink_list, display_guidance, display_suggestions, display_verdict};
