use crate::model::{Microphone, MicrophoneId, Point};
use micmaster_core::StoreError;

/// Insertion-ordered collection of microphones.
///
/// Identifiers come from a monotonically increasing counter and are never
/// reused within a session, even after deletion. Iteration order is the
/// order microphones were added, which is also the draw and export order.
#[derive(Debug, Clone)]
pub struct MicrophoneStore {
    microphones: Vec<Microphone>,
    next_id: u64,
}

impl MicrophoneStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            microphones: Vec::new(),
            next_id: 1,
        }
    }

    /// Generates a new unique ID.
    pub fn generate_id(&mut self) -> MicrophoneId {
        let id = MicrophoneId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Appends a microphone at `position` and returns its id.
    pub fn add(&mut self, position: Point) -> MicrophoneId {
        let id = self.generate_id();
        self.microphones
            .push(Microphone::new(id, position.x, position.y));
        id
    }

    /// Removes a microphone by id.
    pub fn remove(&mut self, id: MicrophoneId) -> Result<Microphone, StoreError> {
        let index = self
            .microphones
            .iter()
            .position(|m| m.id == id)
            .ok_or(StoreError::NotFound(id.value()))?;
        Ok(self.microphones.remove(index))
    }

    /// Replaces a microphone's coordinates in place.
    pub fn set_position(&mut self, id: MicrophoneId, position: Point) -> Result<(), StoreError> {
        let mic = self
            .get_mut(id)
            .ok_or(StoreError::NotFound(id.value()))?;
        mic.set_position(position);
        Ok(())
    }

    pub fn get(&self, id: MicrophoneId) -> Option<&Microphone> {
        self.microphones.iter().find(|m| m.id == id)
    }

    pub fn get_mut(&mut self, id: MicrophoneId) -> Option<&mut Microphone> {
        self.microphones.iter_mut().find(|m| m.id == id)
    }

    pub fn contains(&self, id: MicrophoneId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Microphone> {
        self.microphones.iter()
    }

    pub fn len(&self) -> usize {
        self.microphones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.microphones.is_empty()
    }

    /// Removes every microphone. The id counter keeps running.
    pub fn clear(&mut self) {
        self.microphones.clear();
    }
}

impl Default for MicrophoneStore {
    fn default() -> Self {
        Self::new()
    }
}
