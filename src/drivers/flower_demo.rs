use super::read_line;
use crate::domain::flower::Flower;
use std::io::{BufRead, Write};

/// Known flower-name categories for the greeter's branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowerKind {
    Rose,
    Lily,
    Other,
}

pub fn classify_flower(name: &str) -> FlowerKind {
    match name {
        "Rose" => FlowerKind::Rose,
        "Lily" => FlowerKind::Lily,
        _ => FlowerKind::Other,
    }
}

/// Runs the flower greeter: prompt, fixed greeting, one branch line.
/// Linear flow with no failure points; always returns exit code 0.
pub fn run_flower_demo(input: &mut impl BufRead, out: &mut impl Write) -> anyhow::Result<i32> {
    write!(out, "What's your name?")?;
    out.flush()?;
    let user_name = read_line(input)?;

    let flower = Flower::new();
    flower.say_hello(out)?;

    match classify_flower(&user_name) {
        FlowerKind::Rose => writeln!(out, "You have a lovely name!")?,
        FlowerKind::Lily => writeln!(out, "Another beautiful flower name!")?,
        FlowerKind::Other => writeln!(out, "Nice to meet you, {} !", user_name)?,
    }

    Ok(0)
}
