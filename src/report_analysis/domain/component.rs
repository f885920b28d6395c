/// Component type used when the SBOM entry does not declare one
pub const DEFAULT_COMPONENT_TYPE: &str = "library";

/// Component value object representing one SBOM entry
///
/// Components are not unique: the same name/version pair may appear
/// several times and every occurrence is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    name: String,
    version: String,
    component_type: String,
}

impl Component {
    /// Creates a component, defaulting the type to `"library"` when absent
    pub fn new(name: String, version: String, component_type: Option<String>) -> Self {
        Self {
            name,
            version,
            component_type: component_type.unwrap_or_else(|| DEFAULT_COMPONENT_TYPE.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn component_type(&self) -> &str {
        &self.component_type
    }
}
