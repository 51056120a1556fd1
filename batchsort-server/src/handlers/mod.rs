pub mod sort_handlers;
