use super::read_line;
use crate::domain::companion::{Companion, CompanionError};
use std::io::{BufRead, Write};

/// Known owner-name categories for the pet program's branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerKind {
    Hanami,
    Buddy,
    Other,
}

pub fn classify_owner(name: &str) -> OwnerKind {
    match name {
        "Hanami" => OwnerKind::Hanami,
        "Buddy" => OwnerKind::Buddy,
        _ => OwnerKind::Other,
    }
}

/// Runs the pet program as shipped.
///
/// The shipped garden declares its companion slot and calls operations on
/// it without ever binding a constructed entity, so every run prints the
/// start banner and then fails with [`CompanionError::AbsentReference`]
/// before any input is consumed. The failure is the observed behavior, not
/// an omission.
pub fn run_pet_demo(input: &mut impl BufRead, out: &mut impl Write) -> anyhow::Result<i32> {
    writeln!(out, "--- Hanami Pet Program Starting ---")?;

    // Slot stays unbound for the whole run.
    let my_dog: Option<Companion> = None;
    let mut dog = my_dog.ok_or(CompanionError::AbsentReference)?;

    owner_session(&mut dog, input, out)
}

/// The session the pet program would run on a bound companion: update and
/// introduce the pet, prompt for the owner's name, branch on it, report
/// the derived value. Unreachable through [`run_pet_demo`], kept callable
/// so the corrected flow stays testable.
pub fn owner_session(
    dog: &mut Companion,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<i32> {
    dog.set_details("Buddy", 0, out)?;
    dog.introduce(out)?;

    write!(out, "What is your name? ")?;
    out.flush()?;
    let owner_name = read_line(input)?;

    let mut name_is_hanami = false;
    let calculated_value = match classify_owner(&owner_name) {
        OwnerKind::Hanami => {
            writeln!(out, "Welcome, Creator Hanami!")?;
            name_is_hanami = true;
            0
        }
        OwnerKind::Buddy => {
            writeln!(out, "Hey, that's my name!")?;
            0
        }
        OwnerKind::Other => {
            writeln!(out, "Nice to meet you, {}!", owner_name)?;
            dog.age_in_dog_years()
        }
    };

    writeln!(out, "Calculated value: {}", calculated_value)?;
    writeln!(out, "Is owner Hanami? {}", name_is_hanami)?;
    writeln!(out, "--- Hanami Pet Program Ending ---")?;
    Ok(0)
}
