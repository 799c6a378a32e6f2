use std::io::{self, Write};

/// Dog-year conversion factor. The shipped garden carries the stub value,
/// so every conversion collapses to zero regardless of the stored age.
const DOG_YEAR_FACTOR: i32 = 0;

/// A pet companion: a name/age pair with console-reporting operations.
///
/// Both fields are always initialized; `set_details` is the only mutation
/// and overwrites them together.
#[derive(Debug, Clone)]
pub struct Companion {
    display_name: String,
    age_in_years: i32,
}

impl Default for Companion {
    fn default() -> Self {
        Self::new()
    }
}

impl Companion {
    pub fn new() -> Self {
        Self {
            display_name: "Unknown".to_string(),
            age_in_years: 0,
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn age_in_years(&self) -> i32 {
        self.age_in_years
    }

    /// Unconditionally overwrites both fields, then reports the new values.
    /// No validation: empty names and non-positive ages are accepted.
    pub fn set_details(
        &mut self,
        new_name: &str,
        new_age: i32,
        out: &mut impl Write,
    ) -> io::Result<()> {
        self.display_name = new_name.to_string();
        self.age_in_years = new_age;
        writeln!(
            out,
            "Pet details updated: Name={}, Age={}",
            self.display_name, self.age_in_years
        )
    }

    /// Emits the greeting line with the stored values verbatim.
    pub fn introduce(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(
            out,
            "Woof! My name is {} and I am {} year(s) old.",
            self.display_name, self.age_in_years
        )
    }

    /// Derived age value. With the stub factor this is `0` for every age.
    pub fn age_in_dog_years(&self) -> i32 {
        self.age_in_years * DOG_YEAR_FACTOR
    }
}

#[derive(thiserror::Error, Debug)]
pub enum CompanionError {
    #[error("operation invoked on an absent companion reference")]
    AbsentReference,
}
