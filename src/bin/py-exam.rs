use anyhow::Result;

fn main() -> Result<()> {
    pyexam::cli::run()
}
