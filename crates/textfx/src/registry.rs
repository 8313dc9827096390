//! Effect registry: named transform functions.
//!
//! Every [`EffectRegistry`] is an isolated namespace. A process-wide default
//! registry exists for top-level wiring ([`global`]), but the engine only ever
//! sees the registry it is handed; there is no fallback from one registry to
//! another.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use fxmarkup::EffectArgs;

use crate::error::{Result, TextFxError};
use crate::glyph::{CharInfo, GlyphState};

/// Signature of an effect transform.
///
/// Receives the glyph state to mutate, the arguments of the tag that opened
/// the effect, and the character being processed.
pub type EffectFn = dyn Fn(&mut GlyphState, &EffectArgs, &CharInfo<'_>) + Send + Sync;

/// A named effect transform.
#[derive(Clone)]
pub struct EffectDefinition {
    name: String,
    transform: Arc<EffectFn>,
}

impl EffectDefinition {
    pub fn new<F>(name: impl Into<String>, transform: F) -> Self
    where
        F: Fn(&mut GlyphState, &EffectArgs, &CharInfo<'_>) + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            transform: Arc::new(transform),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the transform against `state`.
    pub fn apply(&self, state: &mut GlyphState, args: &EffectArgs, info: &CharInfo<'_>) {
        (self.transform)(state, args, info);
    }
}

impl fmt::Debug for EffectDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EffectDefinition")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// A mapping from effect name to [`EffectDefinition`].
///
/// # Examples
///
/// ```
/// use textfx::{EffectRegistry, Rgba, TextFxError};
///
/// let mut registry = EffectRegistry::new();
/// registry
///     .add_effect("red", |state, _, _| state.color = Rgba::new(1.0, 0.0, 0.0, 1.0))
///     .unwrap();
///
/// assert!(registry.get_effect("red").is_some());
/// assert_eq!(
///     registry.add_effect("red", |_, _, _| {}),
///     Err(TextFxError::DuplicateEffect("red".into()))
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct EffectRegistry {
    effects: HashMap<String, EffectDefinition>,
}

impl EffectRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-populated with the built-in effects.
    ///
    /// See [`effects`](crate::effects) for the list.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        crate::effects::install(&mut registry);
        registry
    }

    /// Register an effect under `name`.
    ///
    /// Fails with [`TextFxError::DuplicateEffect`] if the name is taken;
    /// the existing definition is left untouched.
    pub fn add_effect<F>(&mut self, name: impl Into<String>, transform: F) -> Result<()>
    where
        F: Fn(&mut GlyphState, &EffectArgs, &CharInfo<'_>) + Send + Sync + 'static,
    {
        self.insert(EffectDefinition::new(name, transform))
    }

    /// Register a prepared definition.
    pub fn insert(&mut self, definition: EffectDefinition) -> Result<()> {
        if self.effects.contains_key(definition.name()) {
            return Err(TextFxError::DuplicateEffect(definition.name().to_string()));
        }
        log::debug!("registry: add effect `{}`", definition.name());
        self.effects
            .insert(definition.name().to_string(), definition);
        Ok(())
    }

    /// Look up an effect by name.
    pub fn get_effect(&self, name: &str) -> Option<&EffectDefinition> {
        self.effects.get(name)
    }

    /// Remove an effect. Removing an unknown name is not an error.
    pub fn remove_effect(&mut self, name: &str) -> Option<EffectDefinition> {
        let removed = self.effects.remove(name);
        if removed.is_some() {
            log::debug!("registry: removed effect `{}`", name);
        }
        removed
    }

    pub fn contains(&self, name: &str) -> bool {
        self.effects.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.effects.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

/// Process-wide default registry, seeded with the built-in effects.
static GLOBAL_REGISTRY: Lazy<RwLock<EffectRegistry>> =
    Lazy::new(|| RwLock::new(EffectRegistry::with_builtins()));

/// The process-wide default registry.
///
/// Meant for application wiring only: lock it and pass the registry on
/// explicitly. Nothing inside this crate reads it.
///
/// ```
/// use textfx::{registry, GlyphBatch, MonospaceFont, RichText};
///
/// let defaults = registry::global().read().unwrap();
/// let font = MonospaceFont::default();
/// let mut text = RichText::new(&font, "{wave}hi{/wave}", &defaults, GlyphBatch::new()).unwrap();
/// text.update().unwrap();
/// assert_eq!(text.sink().len(), 2);
/// ```
pub fn global() -> &'static RwLock<EffectRegistry> {
    &GLOBAL_REGISTRY
}
