use clap::Parser;
use course_planner::cli::Cli;

fn main() -> anyhow::Result<()> {
    Cli::parse().run()
}
