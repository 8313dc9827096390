//! Active effect scope during a token replay.

use smallvec::SmallVec;

use fxmarkup::EffectArgs;

use crate::glyph::{CharInfo, GlyphState};
use crate::registry::EffectDefinition;

#[derive(Clone, Debug)]
struct ScopeEntry {
    definition: EffectDefinition,
    args: EffectArgs,
}

/// The set of effects whose tags are currently open, keyed by name.
///
/// Membership, not depth, decides whether an effect is active. Opening a
/// name that is already open replaces its arguments in place; one close
/// then ends it. Entries are applied in the order their names were first
/// opened.
#[derive(Clone, Debug, Default)]
pub struct ActiveScope {
    entries: SmallVec<[ScopeEntry; 4]>,
}

impl ActiveScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate `definition` with `args`, overwriting a previous entry of
    /// the same name without moving it.
    pub fn open(&mut self, definition: EffectDefinition, args: EffectArgs) {
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.definition.name() == definition.name())
        {
            Some(entry) => {
                entry.definition = definition;
                entry.args = args;
            }
            None => self.entries.push(ScopeEntry { definition, args }),
        }
    }

    /// Deactivate `name`. Returns false if it was not active.
    pub fn close(&mut self, name: &str) -> bool {
        match self
            .entries
            .iter()
            .position(|entry| entry.definition.name() == name)
        {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.definition.name() == name)
    }

    /// Active names in application order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.definition.name())
    }

    /// Arguments stored for an active effect.
    pub fn args(&self, name: &str) -> Option<&EffectArgs> {
        self.entries
            .iter()
            .find(|entry| entry.definition.name() == name)
            .map(|entry| &entry.args)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Run every active transform against `state`, in scope order.
    pub fn apply(&self, state: &mut GlyphState, info: &CharInfo<'_>) {
        for entry in &self.entries {
            entry.definition.apply(state, &entry.args, info);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition(name: &str) -> EffectDefinition {
        EffectDefinition::new(name, |_, _, _| {})
    }

    #[test]
    fn reopen_overwrites_in_place() {
        let mut scope = ActiveScope::new();
        scope.open(definition("a"), EffectArgs::new("a").with("n", 1.0));
        scope.open(definition("b"), EffectArgs::new("b"));
        scope.open(definition("a"), EffectArgs::new("a").with("n", 2.0));

        assert_eq!(scope.names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(scope.args("a").unwrap().get("n"), Some(2.0));
    }

    #[test]
    fn close_removes_once() {
        let mut scope = ActiveScope::new();
        scope.open(definition("a"), EffectArgs::new("a"));
        scope.open(definition("a"), EffectArgs::new("a"));
        assert!(scope.close("a"));
        assert!(!scope.close("a"));
        assert!(scope.is_empty());
    }

    #[test]
    fn reopen_after_close_moves_to_end() {
        let mut scope = ActiveScope::new();
        scope.open(definition("a"), EffectArgs::new("a"));
        scope.open(definition("b"), EffectArgs::new("b"));
        scope.close("a");
        scope.open(definition("a"), EffectArgs::new("a"));
        assert_eq!(scope.names().collect::<Vec<_>>(), vec!["b", "a"]);
    }

    #[test]
    fn apply_runs_in_order() {
        let mut scope = ActiveScope::new();
        scope.open(
            EffectDefinition::new("first", |s, _, _| s.rotation = 1.0),
            EffectArgs::new("first"),
        );
        scope.open(
            EffectDefinition::new("second", |s, _, _| s.rotation *= 3.0),
            EffectArgs::new("second"),
        );

        let mut state = GlyphState::default();
        let info = CharInfo {
            ch: "a",
            index: 1,
            length: 1,
        };
        scope.apply(&mut state, &info);
        assert_eq!(state.rotation, 3.0);
    }
}
