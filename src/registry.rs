// Element registry backing the show/hide toggles.
//
// Elements are registered explicitly (from a selector scan or one at a time),
// so elements added to the page after setup can still be covered. Each
// registered element is stamped with a registration id; duplicate checks are
// an id lookup plus a single identity comparison. Toggle state lives in
// `Cell`s, so handles captured by listeners never need a mutable borrow.

use crate::state::{MarkerError, Markers, ToggleGroup, Visibility};
use fnv::FnvHashMap;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Element access needed to register a toggle and project its `Visibility`.
pub trait ClassTarget {
    fn add_class(&self, name: &str);
    fn remove_class(&self, name: &str);
    /// Id stamped by `Registry::admit`, if any.
    fn registration_id(&self) -> Option<u32>;
    /// Must not change anything observable on the page.
    fn set_registration_id(&self, id: u32);
    /// Whether the target is still part of the page.
    fn is_attached(&self) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("toggle registry is busy")]
    Busy,
    #[error("markers cannot change once {0} elements are registered")]
    MarkersInUse(usize),
    #[error(transparent)]
    Markers(#[from] MarkerError),
}

/// One registered element and the state it owns.
#[derive(Debug)]
pub struct Toggle<T> {
    target: T,
    group: ToggleGroup,
    state: Cell<Visibility>,
    retired: Cell<bool>,
    markers: Rc<Markers>,
}

pub type ToggleHandle<T> = Rc<Toggle<T>>;

impl<T: ClassTarget> Toggle<T> {
    #[inline]
    pub fn target(&self) -> &T {
        &self.target
    }

    #[inline]
    pub fn group(&self) -> ToggleGroup {
        self.group
    }

    #[inline]
    pub fn state(&self) -> Visibility {
        self.state.get()
    }

    /// Pruned toggles ignore further events.
    #[inline]
    pub fn is_retired(&self) -> bool {
        self.retired.get()
    }

    /// Invert the state and update the markers. Returns the new state.
    pub fn flip(&self) -> Visibility {
        if self.retired.get() {
            return self.state.get();
        }
        let next = self.state.get().flipped();
        self.state.set(next);
        self.render();
        log::debug!("[toggle] {} -> {:?}", self.group, next);
        next
    }

    /// Write the current state onto the target's class markers.
    pub fn render(&self) {
        let state = self.state.get();
        self.target.remove_class(state.cleared_marker(&self.markers));
        self.target.add_class(state.marker(&self.markers));
    }
}

pub struct Registry<T> {
    markers: Rc<Markers>,
    toggles: FnvHashMap<u32, ToggleHandle<T>>,
    next_id: u32,
}

impl<T: ClassTarget + PartialEq> Registry<T> {
    pub fn new(markers: Markers) -> Self {
        Self {
            markers: Rc::new(markers),
            toggles: FnvHashMap::default(),
            next_id: 1,
        }
    }

    #[inline]
    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    /// Replace the markers. Only allowed while nothing is registered, since
    /// existing toggles render with the markers they were created with.
    pub fn set_markers(&mut self, markers: Markers) -> Result<(), RegistryError> {
        markers.validate()?;
        if !self.toggles.is_empty() {
            return Err(RegistryError::MarkersInUse(self.toggles.len()));
        }
        self.markers = Rc::new(markers);
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.toggles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.toggles.is_empty()
    }

    pub fn contains(&self, target: &T) -> bool {
        self.find(target).is_some()
    }

    /// Record `target` in `group` without touching its classes.
    ///
    /// Returns the new handle, or `None` when the target is already
    /// registered (in either group); the existing registration and its
    /// listeners are left as they are. The caller must `render` the handle.
    pub fn admit(&mut self, target: T, group: ToggleGroup) -> Option<ToggleHandle<T>> {
        if let Some(existing) = self.find(&target) {
            log::debug!(
                "[registry] skip duplicate registration (already in {} group)",
                existing.group
            );
            return None;
        }
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1).max(1);
        target.set_registration_id(id);
        let handle = Rc::new(Toggle {
            target,
            group,
            state: Cell::new(Visibility::Hidden),
            retired: Cell::new(false),
            markers: self.markers.clone(),
        });
        self.toggles.insert(id, handle.clone());
        Some(handle)
    }

    /// Register `target` in `group`, forcing it `Hidden`.
    pub fn register(&mut self, target: T, group: ToggleGroup) -> Option<ToggleHandle<T>> {
        let handle = self.admit(target, group)?;
        handle.render();
        Some(handle)
    }

    /// Register every target from one selector query. Returns the handles of
    /// the newly registered targets.
    pub fn scan<I>(&mut self, targets: I, group: ToggleGroup) -> Vec<ToggleHandle<T>>
    where
        I: IntoIterator<Item = T>,
    {
        targets
            .into_iter()
            .filter_map(|t| self.register(t, group))
            .collect()
    }

    /// Drop toggles whose targets left the page. Their listeners stay bound
    /// but no longer flip anything. Returns how many were dropped.
    pub fn prune(&mut self) -> usize {
        let before = self.toggles.len();
        self.toggles.retain(|_, h| {
            let keep = h.target.is_attached();
            if !keep {
                h.retired.set(true);
            }
            keep
        });
        before - self.toggles.len()
    }

    pub fn visibility(&self, target: &T) -> Option<Visibility> {
        self.find(target).map(|h| h.state())
    }

    pub fn flip(&self, target: &T) -> Option<Visibility> {
        self.find(target).map(|h| h.flip())
    }

    pub fn count(&self, group: ToggleGroup) -> usize {
        self.toggles.values().filter(|h| h.group == group).count()
    }

    fn find(&self, target: &T) -> Option<&ToggleHandle<T>> {
        let id = target.registration_id()?;
        self.toggles.get(&id).filter(|h| h.target == *target)
    }
}

impl<T: ClassTarget + PartialEq> Default for Registry<T> {
    fn default() -> Self {
        Self::new(Markers::default())
    }
}

/// Register through a shared registry, rendering only after the borrow is
/// released so class-change callbacks may query the registry again.
pub fn register_shared<T: ClassTarget + PartialEq>(
    registry: &RefCell<Registry<T>>,
    target: T,
    group: ToggleGroup,
) -> Result<Option<ToggleHandle<T>>, RegistryError> {
    let handle = registry
        .try_borrow_mut()
        .map_err(|_| RegistryError::Busy)?
        .admit(target, group);
    if let Some(h) = &handle {
        h.render();
    }
    Ok(handle)
}
