//! Reusable view components shared across pages.

pub mod shell;
pub mod sidebar;
pub mod stat_card;
pub mod task_card;
pub mod toast_stack;
pub mod topbar;
