//! Test doubles for registry and context tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::component::{Component, ComponentConfig, ComponentInfo, ComponentRole, ValidationError};

/// Component that reports a fixed descriptor and rejects a `fail` key
pub struct StaticComponent {
    info: ComponentInfo,
}

impl StaticComponent {
    pub fn new(info: ComponentInfo) -> Self {
        Self { info }
    }
}

impl Component for StaticComponent {
    fn info(&self) -> ComponentInfo {
        self.info.clone()
    }

    fn validate(&self, config: &ComponentConfig) -> Result<(), ValidationError> {
        if config.contains_key("fail") {
            return Err(ValidationError::new("configured to fail"));
        }
        Ok(())
    }
}

/// Factory producing a `StaticComponent` with the given name and role
pub fn factory(
    name: &str,
    role: ComponentRole,
) -> impl Fn() -> Box<dyn Component> + Send + Sync + 'static {
    let info = ComponentInfo::new(name, role, "1.0.0");
    move || Box::new(StaticComponent::new(info.clone())) as Box<dyn Component>
}

/// Factory that counts how many times it has been invoked
pub fn counting_factory(
    name: &str,
    role: ComponentRole,
    calls: Arc<AtomicUsize>,
) -> impl Fn() -> Box<dyn Component> + Send + Sync + 'static {
    let inner = factory(name, role);
    move || {
        calls.fetch_add(1, Ordering::SeqCst);
        inner()
    }
}
