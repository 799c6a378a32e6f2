use std::io::{self, Write};

/// A flower with two fixed constants. No mutating operation exists; the
/// fields are read-only for the entity's whole lifetime.
#[derive(Debug, Clone)]
pub struct Flower {
    secret_number: i32,
    is_friendly: bool,
}

impl Default for Flower {
    fn default() -> Self {
        Self::new()
    }
}

impl Flower {
    pub fn new() -> Self {
        Self {
            secret_number: 42,
            is_friendly: true,
        }
    }

    pub fn secret_number(&self) -> i32 {
        self.secret_number
    }

    pub fn is_friendly(&self) -> bool {
        self.is_friendly
    }

    /// Emits the fixed greeting line. Does not read the stored fields.
    pub fn say_hello(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "Hello from Hanami Rose!")
    }
}
