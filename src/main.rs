use anyhow::Context;

fn main() -> anyhow::Result<()> {
    folio_theme::run(std::env::args().skip(1)).context("folio-theme failed")
}
