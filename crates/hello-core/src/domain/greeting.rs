//! Greetings: the free function and the method form.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Build the greeting for `name`.
///
/// Total over every input, including the empty string.
pub fn say_hello(name: &str) -> String {
    format!("Hello, {name}!")
}

/// A named greeter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Greeter {
    name: String,
}

impl Greeter {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Greeting for the stored name; same shape as [`say_hello`].
    pub fn greet(&self) -> String {
        format!("Hello, {}!", self.name)
    }
}

impl fmt::Display for Greeter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn say_hello_formats_name() {
        assert_eq!(say_hello("Go"), "Hello, Go!");
        assert_eq!(say_hello("World"), "Hello, World!");
    }

    #[test]
    fn say_hello_accepts_empty_and_unicode() {
        assert_eq!(say_hello(""), "Hello, !");
        assert_eq!(say_hello("世界"), "Hello, 世界!");
    }

    #[test]
    fn greet_matches_free_function() {
        for name in ["Go OOP", "Rust", "", "name with spaces"] {
            assert_eq!(Greeter::new(name).greet(), say_hello(name));
        }
    }

    #[test]
    fn greeter_keeps_name_verbatim() {
        let g = Greeter::new(String::from("  padded  "));
        assert_eq!(g.name(), "  padded  ");
        assert_eq!(g.to_string(), "  padded  ");
    }

    #[test]
    fn greeter_serializes_as_plain_string() {
        let json = serde_json::to_string(&Greeter::new("Go OOP")).unwrap();
        assert_eq!(json, "\"Go OOP\"");
        let back: Greeter = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name(), "Go OOP");
    }
}
