use std::collections::HashMap;

use shortkey_engine::engine::{Modifiers, Platform, ShortcutId, ShortcutKey};

use crate::shortcut::{Shortcut, ShortcutGroup};

/// Where a registered shortcut lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Slot {
    Independent(usize),
    Grouped { group: usize, position: usize },
}

/// Derived lookup tables; the two ordered sequences in the manager are the
/// source of truth and the index is rebuilt from them.
#[derive(Debug, Default)]
pub(crate) struct Index {
    slots: HashMap<ShortcutId, Slot>,
    keys: HashMap<ShortcutKey, ShortcutId>,
}

impl Index {
    pub(crate) fn insert(&mut self, id: ShortcutId, key: ShortcutKey, slot: Slot) {
        self.slots.insert(id, slot);
        self.keys.entry(key).or_insert(id);
    }

    pub(crate) fn slot(&self, id: ShortcutId) -> Option<Slot> {
        self.slots.get(&id).copied()
    }

    pub(crate) fn id_for(&self, key: &ShortcutKey) -> Option<ShortcutId> {
        self.keys.get(key).copied()
    }

    fn clear(&mut self) {
        self.slots.clear();
        self.keys.clear();
    }
}

/// Registry of independent shortcuts and named groups.
///
/// No two registered shortcuts share an effective identity (key code plus
/// normalized modifiers), whether they are independent or grouped.
/// Construct one per application and hand it to the key event adapter; a
/// fresh registry is just `ShortcutManager::new`.
#[derive(Debug)]
pub struct ShortcutManager {
    pub(crate) platform: Platform,
    pub(crate) independent: Vec<Shortcut>,
    pub(crate) groups: Vec<ShortcutGroup>,
    pub(crate) index: Index,
}

impl Default for ShortcutManager {
    fn default() -> Self {
        Self::new(Platform::current())
    }
}

impl ShortcutManager {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            independent: Vec::new(),
            groups: Vec::new(),
            index: Index::default(),
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Shortcuts outside of any group, in insertion order.
    pub fn independent_shortcuts(&self) -> &[Shortcut] {
        &self.independent
    }

    /// Groups in registration order.
    pub fn groups(&self) -> &[ShortcutGroup] {
        &self.groups
    }

    pub fn group(&self, name: &str) -> Option<&ShortcutGroup> {
        self.groups.iter().find(|group| group.name() == name)
    }

    /// All shortcuts in dispatch order, with the name of their group.
    pub fn iter(&self) -> impl Iterator<Item = (Option<&str>, &Shortcut)> {
        self.independent
            .iter()
            .map(|shortcut| (None, shortcut))
            .chain(self.groups.iter().flat_map(|group| {
                group
                    .shortcuts()
                    .iter()
                    .map(move |shortcut| (Some(group.name()), shortcut))
            }))
    }

    pub fn len(&self) -> usize {
        self.independent.len() + self.groups.iter().map(ShortcutGroup::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, id: ShortcutId) -> Option<&Shortcut> {
        self.index.slot(id).map(|slot| self.shortcut_at(slot))
    }

    /// The shortcut registered under exactly this identity, if any.
    pub fn find(&self, key_code: &str, modifiers: Modifiers) -> Option<&Shortcut> {
        let key = ShortcutKey::new(key_code, modifiers, self.platform);
        self.index.id_for(&key).and_then(|id| self.get(id))
    }

    pub fn is_registered(&self, key_code: &str, modifiers: Modifiers) -> bool {
        self.find(key_code, modifiers).is_some()
    }

    /// First shortcut with this name, in dispatch order.
    pub fn find_by_name(&self, name: &str) -> Option<&Shortcut> {
        self.iter()
            .map(|(_, shortcut)| shortcut)
            .find(|shortcut| shortcut.name() == name)
    }

    /// Name of the group holding `id`; `None` for independent or unknown ids.
    pub fn group_of(&self, id: ShortcutId) -> Option<&str> {
        match self.index.slot(id)? {
            Slot::Independent(_) => None,
            Slot::Grouped { group, .. } => Some(self.groups[group].name()),
        }
    }

    pub(crate) fn group_position(&self, name: &str) -> Option<usize> {
        self.groups.iter().position(|group| group.name() == name)
    }

    pub(crate) fn shortcut_at(&self, slot: Slot) -> &Shortcut {
        match slot {
            Slot::Independent(i) => &self.independent[i],
            Slot::Grouped { group, position } => &self.groups[group].shortcuts()[position],
        }
    }

    pub(crate) fn shortcut_at_mut(&mut self, slot: Slot) -> &mut Shortcut {
        match slot {
            Slot::Independent(i) => &mut self.independent[i],
            Slot::Grouped { group, position } => {
                &mut self.groups[group].shortcuts_mut()[position]
            }
        }
    }

    /// Recompute the index from the independent list and the groups.
    pub(crate) fn rebuild_index(&mut self) {
        self.index.clear();
        for (i, shortcut) in self.independent.iter().enumerate() {
            self.index
                .insert(shortcut.id(), shortcut.key(self.platform), Slot::Independent(i));
        }
        for (group, entry) in self.groups.iter().enumerate() {
            for (position, shortcut) in entry.shortcuts().iter().enumerate() {
                self.index.insert(
                    shortcut.id(),
                    shortcut.key(self.platform),
                    Slot::Grouped { group, position },
                );
            }
        }
    }
}
