use shortkey_engine::engine::{KeyCombo, Modifiers, ShortcutId, ShortcutKey};
use tracing::{debug, warn};

use super::{ShortcutManager, Slot};
use crate::error::{Result, ShortcutError};
use crate::shortcut::{Shortcut, ShortcutGroup};

impl ShortcutManager {
    /// Register a shortcut outside of any group.
    ///
    /// A shortcut whose identity is already registered anywhere is rejected and
    /// the registry is left untouched; the first registration wins.
    pub fn add_independent_shortcut(&mut self, shortcut: Shortcut) -> Result<ShortcutId> {
        let key = self.ensure_free(&shortcut)?;
        let id = shortcut.id();
        debug!(name = %shortcut.name(), %key, "registered independent shortcut");
        self.independent.push(shortcut);
        self.index
            .insert(id, key, Slot::Independent(self.independent.len() - 1));
        Ok(id)
    }

    /// Register a whole group.
    ///
    /// If a group with the same name exists the members are appended to it.
    /// Members colliding with anything already registered (including earlier
    /// members of the same group) are dropped and returned; an empty result
    /// means every member was registered.
    pub fn add_group(&mut self, group: ShortcutGroup) -> Vec<ShortcutError> {
        let (name, shortcuts) = group.into_parts();
        let group_idx = self.group_position_or_insert(name);
        shortcuts
            .into_iter()
            .filter_map(|shortcut| self.push_to_group(group_idx, shortcut).err())
            .collect()
    }

    /// Append a shortcut to the named group, creating the group if needed.
    pub fn add_shortcut_to_group(&mut self, group_name: &str, shortcut: Shortcut) -> Result<ShortcutId> {
        self.ensure_free(&shortcut)?;
        let group_idx = self.group_position_or_insert(group_name.to_string());
        self.push_to_group(group_idx, shortcut)
    }

    /// Remove a group and every shortcut in it.
    pub fn remove_group(&mut self, group_name: &str) -> Option<ShortcutGroup> {
        let idx = self.group_position(group_name)?;
        let group = self.groups.remove(idx);
        self.rebuild_index();
        debug!(group = group_name, removed = group.len(), "removed group");
        Some(group)
    }

    /// Remove every shortcut named `shortcut_name` from the named group.
    ///
    /// Returns how many were removed.
    pub fn remove_shortcut_from_group(&mut self, group_name: &str, shortcut_name: &str) -> usize {
        let Some(idx) = self.group_position(group_name) else {
            return 0;
        };
        let shortcuts = self.groups[idx].shortcuts_mut();
        let before = shortcuts.len();
        shortcuts.retain(|shortcut| shortcut.name() != shortcut_name);
        let removed = before - shortcuts.len();
        if removed > 0 {
            self.rebuild_index();
            debug!(group = group_name, name = shortcut_name, removed, "removed group shortcut");
        }
        removed
    }

    /// Remove every independent shortcut named `shortcut_name`.
    ///
    /// Returns how many were removed.
    pub fn remove_independent_shortcut(&mut self, shortcut_name: &str) -> usize {
        let before = self.independent.len();
        self.independent
            .retain(|shortcut| shortcut.name() != shortcut_name);
        let removed = before - self.independent.len();
        if removed > 0 {
            self.rebuild_index();
            debug!(name = shortcut_name, removed, "removed independent shortcut");
        }
        removed
    }

    /// Remove the shortcut with this id, wherever it lives.
    pub fn remove_shortcut_by_id(&mut self, id: ShortcutId) -> Option<Shortcut> {
        let slot = self.index.slot(id)?;
        let shortcut = self.take(slot);
        self.rebuild_index();
        debug!(name = %shortcut.name(), %id, "removed shortcut");
        Some(shortcut)
    }

    /// Remove the shortcut registered under this key code and modifiers.
    pub fn remove_shortcut_by_key_code_and_modifiers(
        &mut self,
        key_code: &str,
        modifiers: Modifiers,
    ) -> Option<Shortcut> {
        let id = self.find(key_code, modifiers)?.id();
        self.remove_shortcut_by_id(id)
    }

    pub fn rename(&mut self, id: ShortcutId, name: impl Into<String>) -> Result<()> {
        self.shortcut_mut(id)?.set_name(name.into());
        Ok(())
    }

    pub fn set_description(&mut self, id: ShortcutId, description: Option<String>) -> Result<()> {
        self.shortcut_mut(id)?.set_description(description);
        Ok(())
    }

    pub fn set_context(&mut self, id: ShortcutId, context: Option<String>) -> Result<()> {
        self.shortcut_mut(id)?.set_context(context);
        Ok(())
    }

    pub fn set_prevent_default(&mut self, id: ShortcutId, prevent_default: bool) -> Result<()> {
        self.shortcut_mut(id)?.set_prevent_default(prevent_default);
        Ok(())
    }

    pub fn set_action(&mut self, id: ShortcutId, action: impl FnMut() + 'static) -> Result<()> {
        self.shortcut_mut(id)?.set_action(Box::new(action));
        Ok(())
    }

    /// Change the key combo of a registered shortcut.
    ///
    /// Rejected if another shortcut already owns the new identity.
    pub fn rebind(&mut self, id: ShortcutId, combo: KeyCombo) -> Result<()> {
        let slot = self.index.slot(id).ok_or(ShortcutError::UnknownShortcut(id))?;
        let key = combo.key(self.platform);
        if let Some(existing) = self.index.id_for(&key)
            && existing != id
        {
            let name = self.shortcut_at(slot).name().to_string();
            return Err(self.duplicate(key, name, existing));
        }
        debug!(%id, %key, "rebound shortcut");
        self.shortcut_at_mut(slot).set_combo(combo);
        self.rebuild_index();
        Ok(())
    }

    /// Move a shortcut into the named group, or out of its group with `None`.
    ///
    /// The target group is created if needed; a group left empty stays
    /// registered.
    pub fn move_to_group(&mut self, id: ShortcutId, group_name: Option<&str>) -> Result<()> {
        let slot = self.index.slot(id).ok_or(ShortcutError::UnknownShortcut(id))?;
        let shortcut = self.take(slot);
        match group_name {
            Some(name) => {
                let idx = self.group_position_or_insert(name.to_string());
                self.groups[idx].shortcuts_mut().push(shortcut);
            }
            None => self.independent.push(shortcut),
        }
        self.rebuild_index();
        debug!(%id, group = ?group_name, "moved shortcut");
        Ok(())
    }

    fn shortcut_mut(&mut self, id: ShortcutId) -> Result<&mut Shortcut> {
        let slot = self.index.slot(id).ok_or(ShortcutError::UnknownShortcut(id))?;
        Ok(self.shortcut_at_mut(slot))
    }

    /// Check that nothing else owns the shortcut's identity; returns that identity.
    fn ensure_free(&self, shortcut: &Shortcut) -> Result<ShortcutKey> {
        let key = shortcut.key(self.platform);
        match self.index.id_for(&key) {
            Some(existing) => Err(self.duplicate(key, shortcut.name().to_string(), existing)),
            None => Ok(key),
        }
    }

    fn duplicate(&self, key: ShortcutKey, name: String, existing: ShortcutId) -> ShortcutError {
        let existing_name = self
            .get(existing)
            .map(|shortcut| shortcut.name().to_string())
            .unwrap_or_default();
        warn!(%name, %key, existing = %existing_name, "shortcut already registered");
        ShortcutError::Duplicate {
            key,
            name,
            existing,
            existing_name,
        }
    }

    fn push_to_group(&mut self, group_idx: usize, shortcut: Shortcut) -> Result<ShortcutId> {
        let key = self.ensure_free(&shortcut)?;
        let id = shortcut.id();
        let group = &mut self.groups[group_idx];
        debug!(group = %group.name(), name = %shortcut.name(), %key, "registered group shortcut");
        group.shortcuts_mut().push(shortcut);
        let position = group.len() - 1;
        self.index.insert(
            id,
            key,
            Slot::Grouped {
                group: group_idx,
                position,
            },
        );
        Ok(id)
    }

    fn group_position_or_insert(&mut self, name: String) -> usize {
        match self.group_position(&name) {
            Some(idx) => idx,
            None => {
                self.groups.push(ShortcutGroup::new(name, Vec::new()));
                self.groups.len() - 1
            }
        }
    }

    /// Detach the shortcut in `slot`; the index is stale until rebuilt.
    fn take(&mut self, slot: Slot) -> Shortcut {
        match slot {
            Slot::Independent(i) => self.independent.remove(i),
            Slot::Grouped { group, position } => self.groups[group].shortcuts_mut().remove(position),
        }
    }
}
