//! Rendering options — a plain flags struct, passed by value.

/// Named boolean options recognized by the renderers.
#[derive(Debug, Default, Clone, Copy)]
pub struct Settings {
    /// Reorder inputs and outputs alphabetically before rendering.
    pub sort_by_name: bool,
    /// Place required inputs first, then sort by name. Only takes effect
    /// when `sort_by_name` is also set.
    pub sort_inputs_by_required: bool,
    /// Add a Required column to the inputs table.
    pub with_required: bool,
}
