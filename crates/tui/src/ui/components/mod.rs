pub mod entry_form;
pub mod footer;
pub mod money;
pub mod toast;
