use clap::Parser;
use hanami_gardens::drivers::flower_demo::run_flower_demo;
use std::io;

#[derive(Parser, Debug)]
#[command(
    name = "hanami-flower",
    version,
    about = "Interactive Hanami flower greeter demo"
)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    let stdin = io::stdin();
    let code = run_flower_demo(&mut stdin.lock(), &mut io::stdout())?;
    std::process::exit(code)
}
