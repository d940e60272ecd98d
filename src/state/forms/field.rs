//! Form field descriptors

/// Describes how one input of a form is labelled and displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub is_masked: bool,
}

impl FormField {
    /// Create a plain text field
    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            is_masked: false,
        }
    }

    /// Create a field whose value is hidden when rendered
    pub const fn masked(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            is_masked: true,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self, value: &str) -> String {
        if self.is_masked {
            "•".repeat(value.chars().count())
        } else {
            value.to_string()
        }
    }
}

/// Value after typing one character at the end
pub fn with_char(value: &str, c: char) -> String {
    let mut next = value.to_string();
    next.push(c);
    next
}

/// Value after a backspace
pub fn without_last_char(value: &str) -> String {
    let mut next = value.to_string();
    next.pop();
    next
}
