use anyhow::Result;
use clap::Parser;
use zen_syllabus::args::Args;
use zen_syllabus::logging::init_logger;
use zen_syllabus::run;

fn main() -> Result<()> {
    init_logger();
    run(Args::parse())
}
