use clap::Parser;
use hanami_gardens::drivers::pet_demo::run_pet_demo;
use std::io;

#[derive(Parser, Debug)]
#[command(
    name = "hanami-pet",
    version,
    about = "Interactive Hanami pet companion demo"
)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    let stdin = io::stdin();
    let code = run_pet_demo(&mut stdin.lock(), &mut io::stdout())?;
    std::process::exit(code)
}
