pub mod module_spec;
pub mod module_structure;
pub mod template;
