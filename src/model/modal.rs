//! Modal stack for managing overlays
//!
//! A single enum-based stack instead of one boolean flag per dialog.
//! Only the top modal receives input events.

/// An overlay displayed on top of the main UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Clear-all confirmation dialog (wipes the whole slot)
    ClearConfirm,
    /// Blocking message popup (validation failures, export notices)
    Notice { message: String },
    /// Help overlay showing key bindings
    Help,
}

/// A stack of modal overlays, rendered bottom to top.
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Modal> {
        self.stack.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_order() {
        let mut stack = ModalStack::new();
        assert!(stack.top().is_none());

        stack.push(Modal::ClearConfirm);
        stack.push(Modal::Notice {
            message: "No data to export".to_string(),
        });

        assert_eq!(
            stack.pop(),
            Some(Modal::Notice {
                message: "No data to export".to_string()
            })
        );
        assert_eq!(stack.pop(), Some(Modal::ClearConfirm));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_top_does_not_remove() {
        let mut stack = ModalStack::new();
        stack.push(Modal::QuitConfirm);
        assert_eq!(stack.top(), Some(&Modal::QuitConfirm));
        assert_eq!(stack.top(), Some(&Modal::QuitConfirm));
        assert!(!stack.is_empty());
    }
}
