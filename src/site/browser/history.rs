//! Session history of URL fragments with a cursor, as traversed by the
//! browser's back and forward buttons.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    index: usize,
}

impl History {
    pub fn new(initial_fragment: impl Into<String>) -> Self {
        Self {
            entries: vec![initial_fragment.into()],
            index: 0,
        }
    }

    /// Fragment of the current entry (without `#`)
    pub fn current(&self) -> &str {
        &self.entries[self.index]
    }

    /// Push a new entry, dropping any forward entries
    pub fn push(&mut self, fragment: impl Into<String>) {
        self.entries.truncate(self.index + 1);
        self.entries.push(fragment.into());
        self.index += 1;
    }

    pub fn back(&mut self) -> Option<&str> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(self.current())
    }

    pub fn forward(&mut self) -> Option<&str> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        Some(self.current())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
